use core::sync::atomic::Ordering;

use heapless::Vec;

use crate::vmu::{
    bridge::VmuBridge,
    error::BridgeError,
    listener::UpdateListener,
    source::LcdSource,
    types::{Framebuffer, MAX_VMU_COUNT, VmuButtons},
};

/// Frontend-side handle to the bridge.
///
/// Every method is safe to call from any number of threads concurrently.
/// Queries answer from last-known state even after
/// [`term`](crate::vmu::VmuBridge::term); only the dirty pipeline stops
/// advancing once producer updates are gated off.
pub struct Consumer<'a, S: LcdSource> {
    bridge: &'a VmuBridge<S>,
}

impl<'a, S: LcdSource> core::fmt::Debug for Consumer<'a, S> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Consumer").finish_non_exhaustive()
    }
}

impl<'a, S: LcdSource> Consumer<'a, S> {
    pub(crate) fn new(bridge: &'a VmuBridge<S>) -> Self {
        Self { bridge }
    }

    /// Number of slots the registry currently reports connected.
    pub fn connected_count(&self) -> usize {
        self.bridge.table.connected_count()
    }

    /// Ids of every registry-connected slot, lowest first.
    pub fn connected_slots(&self) -> Vec<usize, MAX_VMU_COUNT> {
        let mut out = Vec::new();
        for (id, slot) in self.bridge.table.iter().enumerate() {
            if slot.connected.load(Ordering::Relaxed) {
                // Capacity equals the table size, so the push cannot fail.
                let _ = out.push(id);
            }
        }
        out
    }

    /// True if a VMU is active in `slot`.
    ///
    /// A slot counts as active when the registry has seen a connect
    /// event *or* the upstream source reports LCD data for it, so a slot
    /// populated by the emulation layer before the bridge observed the
    /// connect is still reported. False for out-of-range ids.
    pub fn is_active(&self, slot: usize) -> bool {
        match self.bridge.table.get(slot) {
            Some(entry) => {
                entry.connected.load(Ordering::Relaxed) || self.bridge.source.lcd_status(slot)
            }
            None => false,
        }
    }

    /// Test-and-clear check for "display updated since last observed".
    ///
    /// Returns `true` at most once per producer update; polling faster
    /// than the producer yields `false` until the next update re-arms
    /// the flag. This is the intended way to detect fresh frames; use
    /// [`last_update`](Self::last_update) for staleness checks that must
    /// not consume the flag.
    pub fn take_dirty(&self, slot: usize) -> bool {
        match self.bridge.table.get(slot) {
            Some(entry) => entry.take_dirty(),
            None => false,
        }
    }

    /// Timestamp of the last producer update for `slot`, 0 if never
    /// updated. Independent of dirty-flag consumption.
    pub fn last_update(&self, slot: usize) -> u64 {
        match self.bridge.table.get(slot) {
            Some(entry) => entry.last_update.load(Ordering::Relaxed),
            None => 0,
        }
    }

    /// Current button mask for `slot`; empty for out-of-range ids.
    pub fn buttons(&self, slot: usize) -> VmuButtons {
        match self.bridge.table.get(slot) {
            Some(entry) => entry.buttons(),
            None => VmuButtons::empty(),
        }
    }

    /// Presses or releases buttons for outbound input to the emulated
    /// VMU.
    ///
    /// Works independently of producer activity and of the enable flag;
    /// out-of-range ids are ignored. Concurrent calls on different bits
    /// never lose updates; same-bit races are last-writer-wins.
    pub fn set_buttons(&self, slot: usize, buttons: VmuButtons, pressed: bool) {
        if let Some(entry) = self.bridge.table.get(slot) {
            entry.set_buttons(buttons, pressed);
        }
    }

    /// Zero-copy pointer to the live upstream framebuffer.
    ///
    /// Null when the slot is out of range or inactive. The pointee is
    /// owned and overwritten by the emulation thread: it is valid until
    /// the next producer update, may exhibit torn pixel data, and must
    /// not be retained. Frontends that need a tear-free snapshot use
    /// [`copy_framebuffer`](Self::copy_framebuffer) instead.
    pub fn framebuffer_ptr(&self, slot: usize) -> *const u32 {
        if !self.is_active(slot) {
            return core::ptr::null();
        }
        self.bridge.source.lcd_data(slot)
    }

    /// Copies the slot's mirrored frame into `dest` under the mirror
    /// lock.
    ///
    /// The copy is tear-free: it returns either the full pre-update or
    /// the full post-update frame, never a mix. Fails with
    /// [`BridgeError::SlotOutOfRange`] or [`BridgeError::SlotInactive`].
    pub fn copy_framebuffer(
        &self,
        slot: usize,
        dest: &mut Framebuffer,
    ) -> Result<(), BridgeError> {
        let entry = self
            .bridge
            .table
            .get(slot)
            .ok_or(BridgeError::SlotOutOfRange)?;
        if !self.is_active(slot) {
            return Err(BridgeError::SlotInactive);
        }

        entry.mirror.copy_to(dest);
        Ok(())
    }

    /// Registers the update listener; `None` unregisters.
    ///
    /// A single registration slot, last wins. See [`UpdateListener`] for
    /// the invocation contract.
    pub fn register_listener(&self, listener: Option<&'static dyn UpdateListener>) {
        self.bridge.listener.set(listener);
    }
}
