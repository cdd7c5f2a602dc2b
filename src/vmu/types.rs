use bitflags::bitflags;

/// VMU LCD width in pixels.
pub const LCD_WIDTH: usize = 48;

/// VMU LCD height in pixels.
pub const LCD_HEIGHT: usize = 32;

/// Pixel count of one VMU LCD.
pub const LCD_PIXELS: usize = LCD_WIDTH * LCD_HEIGHT;

/// Number of VMU slots: 4 controller buses with 2 ports each.
///
/// A slot id is `bus * 2 + port`.
pub const MAX_VMU_COUNT: usize = 8;

/// One VMU frame: packed RGBA8888 pixels in row-major order.
///
/// Producer-supplied frames carry a fully opaque alpha channel (0xFF).
/// A blank frame (cleared slot) is all zeroes.
pub type Framebuffer = [u32; LCD_PIXELS];

bitflags! {
    /// VMU face buttons, using the hardware bit assignment.
    ///
    /// Buttons are a bidirectional control channel: frontends set bits
    /// for outbound input, the emulation core reads them back. Bits on
    /// the same slot are independent; concurrent writes to the *same*
    /// bit are last-writer-wins.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct VmuButtons: u8 {
        const MODE  = 0x01;
        const SLEEP = 0x02;
        const UP    = 0x04;
        const DOWN  = 0x08;
        const LEFT  = 0x10;
        const RIGHT = 0x20;
        const A     = 0x40;
        const B     = 0x80;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lcd_dimensions() {
        assert_eq!(LCD_PIXELS, 1536);
    }

    #[test]
    fn button_bits_match_hardware() {
        assert_eq!(VmuButtons::MODE.bits(), 0x01);
        assert_eq!(VmuButtons::B.bits(), 0x80);
        assert_eq!(VmuButtons::all().bits(), 0xFF);
    }

    #[test]
    fn button_set_algebra() {
        let mask = VmuButtons::UP | VmuButtons::A;
        assert!(mask.contains(VmuButtons::UP));
        assert!(!mask.contains(VmuButtons::DOWN));
        assert_eq!(mask & VmuButtons::A, VmuButtons::A);
    }
}
