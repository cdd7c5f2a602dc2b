use spin::Mutex;

use crate::vmu::types::{Framebuffer, LCD_PIXELS};

/// Consumer-safe copy of one slot's framebuffer behind its own lock.
///
/// The lock is scoped to exactly one full-buffer copy, so contention is
/// bounded to the emulation thread versus one concurrent reader, for a
/// fixed, branch-free duration.
pub(crate) struct Mirror {
    buf: Mutex<Framebuffer>,
}

impl Mirror {
    pub(crate) const fn new() -> Self {
        Self {
            buf: Mutex::new([0; LCD_PIXELS]),
        }
    }

    /// Overwrites the whole mirror from freshly produced data.
    pub(crate) fn overwrite(&self, src: &Framebuffer) {
        *self.buf.lock() = *src;
    }

    /// Copies the whole mirror into a caller-provided frame.
    pub(crate) fn copy_to(&self, dest: &mut Framebuffer) {
        *dest = *self.buf.lock();
    }

    /// Resets the mirror to a blank (all-zero) frame.
    pub(crate) fn clear(&self) {
        *self.buf.lock() = [0; LCD_PIXELS];
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vmu::test_support::solid_frame;

    #[test]
    fn starts_blank() {
        let mirror = Mirror::new();
        let mut out = [1u32; LCD_PIXELS];
        mirror.copy_to(&mut out);
        assert_eq!(out, [0; LCD_PIXELS]);
    }

    #[test]
    fn overwrite_then_copy_roundtrips() {
        let mirror = Mirror::new();
        mirror.overwrite(&solid_frame(0xFFFF_FFFF));

        let mut out = [0u32; LCD_PIXELS];
        mirror.copy_to(&mut out);
        assert_eq!(out, solid_frame(0xFFFF_FFFF));
    }

    #[test]
    fn clear_blanks_previous_contents() {
        let mirror = Mirror::new();
        mirror.overwrite(&solid_frame(0x1234_5678));
        mirror.clear();

        let mut out = [1u32; LCD_PIXELS];
        mirror.copy_to(&mut out);
        assert_eq!(out, [0; LCD_PIXELS]);
    }
}
