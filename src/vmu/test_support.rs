//! Test support utilities - only compiled in test builds.

use core::sync::atomic::{AtomicBool, AtomicU32, AtomicU64, AtomicUsize, Ordering};

use crate::vmu::{
    bridge::VmuBridge,
    listener::UpdateListener,
    source::{LcdSource, NoLcd},
    types::{Framebuffer, LCD_PIXELS, MAX_VMU_COUNT},
};

/// Bridge fixture with no upstream attached.
pub fn test_bridge() -> VmuBridge<NoLcd> {
    VmuBridge::new(NoLcd)
}

/// A frame with every pixel set to `pixel`.
pub fn solid_frame(pixel: u32) -> Framebuffer {
    [pixel; LCD_PIXELS]
}

/// Controllable upstream source with real backing buffers.
///
/// `const`-constructible so tests can place it in a `static` next to a
/// bridge borrowing it.
pub struct TestLcd {
    status: [AtomicBool; MAX_VMU_COUNT],
    frames: [Framebuffer; MAX_VMU_COUNT],
}

impl TestLcd {
    pub const fn new() -> Self {
        Self {
            status: [const { AtomicBool::new(false) }; MAX_VMU_COUNT],
            frames: [[0; LCD_PIXELS]; MAX_VMU_COUNT],
        }
    }

    pub fn set_status(&self, slot: usize, present: bool) {
        self.status[slot].store(present, Ordering::Relaxed);
    }
}

impl LcdSource for TestLcd {
    fn lcd_status(&self, slot: usize) -> bool {
        match self.status.get(slot) {
            Some(present) => present.load(Ordering::Relaxed),
            None => false,
        }
    }

    fn lcd_data(&self, slot: usize) -> *const u32 {
        match self.frames.get(slot) {
            Some(frame) => frame.as_ptr(),
            None => core::ptr::null(),
        }
    }
}

/// Listener that records its most recent invocation.
pub struct CountingListener {
    calls: AtomicUsize,
    last_slot: AtomicUsize,
    last_timestamp: AtomicU64,
    last_pixel: AtomicU32,
}

impl CountingListener {
    pub const fn new() -> Self {
        Self {
            calls: AtomicUsize::new(0),
            last_slot: AtomicUsize::new(usize::MAX),
            last_timestamp: AtomicU64::new(0),
            last_pixel: AtomicU32::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::Relaxed)
    }

    pub fn last_slot(&self) -> usize {
        self.last_slot.load(Ordering::Relaxed)
    }

    pub fn last_timestamp(&self) -> u64 {
        self.last_timestamp.load(Ordering::Relaxed)
    }

    pub fn last_pixel(&self) -> u32 {
        self.last_pixel.load(Ordering::Relaxed)
    }
}

impl UpdateListener for CountingListener {
    fn display_updated(&self, slot: usize, framebuffer: &Framebuffer, timestamp: u64) {
        self.calls.fetch_add(1, Ordering::Relaxed);
        self.last_slot.store(slot, Ordering::Relaxed);
        self.last_timestamp.store(timestamp, Ordering::Relaxed);
        self.last_pixel.store(framebuffer[0], Ordering::Relaxed);
    }
}
