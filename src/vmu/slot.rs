use core::sync::atomic::{AtomicBool, AtomicU8, AtomicU64, Ordering};

use crate::vmu::{
    mirror::Mirror,
    types::{MAX_VMU_COUNT, VmuButtons},
};

/// Mirrored state for one VMU slot.
///
/// All scalar fields are atomics so the emulation thread and any number
/// of frontend threads touch them without locks; only the framebuffer
/// mirror needs one.
pub(crate) struct Slot {
    pub(crate) connected: AtomicBool,
    pub(crate) dirty: AtomicBool,
    pub(crate) buttons: AtomicU8,
    pub(crate) last_update: AtomicU64,
    pub(crate) mirror: Mirror,
}

impl Slot {
    pub(crate) const fn new() -> Self {
        Self {
            connected: AtomicBool::new(false),
            dirty: AtomicBool::new(false),
            buttons: AtomicU8::new(0),
            last_update: AtomicU64::new(0),
            mirror: Mirror::new(),
        }
    }

    /// Resets every field, including the mirror contents.
    pub(crate) fn reset(&self) {
        self.connected.store(false, Ordering::Relaxed);
        self.dirty.store(false, Ordering::Relaxed);
        self.buttons.store(0, Ordering::Relaxed);
        self.last_update.store(0, Ordering::Relaxed);
        self.mirror.clear();
    }

    /// Test-and-clear read of the dirty flag.
    ///
    /// The single atomic exchange means racing readers see at most one
    /// `true` per producer update.
    pub(crate) fn take_dirty(&self) -> bool {
        self.dirty.swap(false, Ordering::AcqRel)
    }

    pub(crate) fn buttons(&self) -> VmuButtons {
        VmuButtons::from_bits_truncate(self.buttons.load(Ordering::Relaxed))
    }

    /// Atomic or / and-not so concurrent presses and releases of
    /// different bits never lose an update.
    pub(crate) fn set_buttons(&self, buttons: VmuButtons, pressed: bool) {
        if pressed {
            self.buttons.fetch_or(buttons.bits(), Ordering::Relaxed);
        } else {
            self.buttons.fetch_and(!buttons.bits(), Ordering::Relaxed);
        }
    }
}

/// Fixed table of all VMU slots, indexed by logical slot id.
pub(crate) struct SlotTable {
    slots: [Slot; MAX_VMU_COUNT],
}

impl SlotTable {
    pub(crate) const fn new() -> Self {
        Self {
            slots: [const { Slot::new() }; MAX_VMU_COUNT],
        }
    }

    /// Bounds-checked lookup. Every public entry point resolves ids
    /// through this, so out-of-range ids degrade to neutral returns.
    pub(crate) fn get(&self, slot: usize) -> Option<&Slot> {
        self.slots.get(slot)
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = &Slot> {
        self.slots.iter()
    }

    pub(crate) fn connected_count(&self) -> usize {
        self.slots
            .iter()
            .filter(|s| s.connected.load(Ordering::Relaxed))
            .count()
    }

    pub(crate) fn reset_all(&self) {
        for slot in &self.slots {
            slot.reset();
        }
    }
}
