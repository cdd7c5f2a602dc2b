/// Upstream LCD state owned by the emulation core.
///
/// The bridge mirrors whatever the producer pushes through
/// [`Producer::display_update`](crate::vmu::Producer::display_update),
/// but the emulation layer stays the source of truth for slot status and
/// for the live framebuffer. Two consumer paths consult it directly:
///
/// - [`Consumer::is_active`](crate::vmu::Consumer::is_active) reports a
///   slot active when the registry *or* the source says so, so a slot the
///   emulation populated before the bridge observed a connect event is
///   not invisible.
/// - [`Consumer::framebuffer_ptr`](crate::vmu::Consumer::framebuffer_ptr)
///   hands out the source's live buffer for zero-copy reads.
pub trait LcdSource: Sync {
    /// True if the emulation layer reports a VMU with valid LCD data in
    /// `slot`. Must return `false` for out-of-range slots.
    fn lcd_status(&self, slot: usize) -> bool;

    /// Pointer to the live framebuffer for `slot`, or null if the source
    /// has none.
    ///
    /// The address must stay valid for the source's lifetime, but the
    /// emulation thread overwrites the contents on every update. Callers
    /// reading through the pointer accept torn pixel data.
    fn lcd_data(&self, slot: usize) -> *const u32;
}

impl<S: LcdSource> LcdSource for &S {
    fn lcd_status(&self, slot: usize) -> bool {
        (**self).lcd_status(slot)
    }

    fn lcd_data(&self, slot: usize) -> *const u32 {
        (**self).lcd_data(slot)
    }
}

/// Source for a bridge with no upstream attached.
///
/// Reports every slot absent, so only registry state drives activity.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoLcd;

impl LcdSource for NoLcd {
    fn lcd_status(&self, _slot: usize) -> bool {
        false
    }

    fn lcd_data(&self, _slot: usize) -> *const u32 {
        core::ptr::null()
    }
}
