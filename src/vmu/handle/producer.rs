use core::sync::atomic::Ordering;

use crate::vmu::{
    bridge::VmuBridge,
    source::LcdSource,
    types::{Framebuffer, VmuButtons},
};

/// Emulation-side handle to the bridge.
///
/// All methods are meant to run on the single emulation thread, once per
/// device event. None of them blocks on consumer activity for longer
/// than one framebuffer copy.
pub struct Producer<'a, S: LcdSource> {
    bridge: &'a VmuBridge<S>,
}

impl<'a, S: LcdSource> core::fmt::Debug for Producer<'a, S> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Producer").finish_non_exhaustive()
    }
}

impl<'a, S: LcdSource> Producer<'a, S> {
    pub(crate) fn new(bridge: &'a VmuBridge<S>) -> Self {
        Self { bridge }
    }

    /// Publishes one display update for a slot.
    ///
    /// Dropped entirely while the bridge is uninitialized or disabled,
    /// and for out-of-range slots. Otherwise: marks the slot connected,
    /// records the timestamp, rewrites the mirror under its lock, raises
    /// the dirty flag, and finally invokes the registered listener with
    /// the source frame. The mirror is rewritten *before* the flag goes
    /// up, so a reader that observes the flag copies data at least as
    /// new as the update that raised it.
    pub fn display_update(&self, slot: usize, framebuffer: &Framebuffer, timestamp: u64) {
        if !self.bridge.is_enabled() {
            return;
        }
        let Some(entry) = self.bridge.table.get(slot) else {
            return;
        };

        entry.connected.store(true, Ordering::Relaxed);
        entry.last_update.store(timestamp, Ordering::Relaxed);
        entry.mirror.overwrite(framebuffer);
        entry.dirty.store(true, Ordering::Release);

        if let Some(listener) = self.bridge.listener.get() {
            listener.display_updated(slot, framebuffer, timestamp);
        }
    }

    /// Records a VMU attach or detach.
    ///
    /// On detach the mirror is blanked under its lock, so an inactive
    /// slot never serves a stale image. Gated on initialization only:
    /// connection tracking keeps working while the bridge is disabled.
    pub fn connection_change(&self, slot: usize, connected: bool) {
        if !self.bridge.is_initialized() {
            return;
        }
        let Some(entry) = self.bridge.table.get(slot) else {
            return;
        };

        entry.connected.store(connected, Ordering::Relaxed);
        if !connected {
            entry.mirror.clear();
        }
    }

    /// Current button mask for a slot, as set by the frontend.
    ///
    /// The emulation core polls this to feed button input into the
    /// emulated VMU. Empty for out-of-range slots.
    pub fn buttons(&self, slot: usize) -> VmuButtons {
        match self.bridge.table.get(slot) {
            Some(entry) => entry.buttons(),
            None => VmuButtons::empty(),
        }
    }
}
