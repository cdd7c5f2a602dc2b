use core::sync::atomic::{AtomicBool, Ordering};

use crate::vmu::{
    handle::{Consumer, Producer},
    listener::ListenerCell,
    slot::SlotTable,
    source::LcdSource,
};

/// Cross-thread mirror of VMU display and status data.
///
/// One instance bridges a single emulation core to any number of polling
/// frontends. The emulation thread drives it through [`Producer`]; any
/// frontend thread reads through [`Consumer`]. The struct replaces the
/// process-wide globals of a classic bridge with an explicit context
/// object; `const fn new` lets it live in a `static` beside its source.
///
/// Nothing happens before [`init`](Self::init): producer calls are
/// dropped and the dirty pipeline does not advance.
pub struct VmuBridge<S: LcdSource> {
    pub(crate) source: S,
    pub(crate) table: SlotTable,
    pub(crate) listener: ListenerCell,
    initialized: AtomicBool,
    enabled: AtomicBool,
}

impl<S: LcdSource> core::fmt::Debug for VmuBridge<S> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("VmuBridge")
            .field("initialized", &self.initialized.load(Ordering::Relaxed))
            .field("enabled", &self.enabled.load(Ordering::Relaxed))
            .finish_non_exhaustive()
    }
}

impl<S: LcdSource> VmuBridge<S> {
    /// Creates a bridge in the uninitialized, disabled state.
    pub const fn new(source: S) -> Self {
        Self {
            source,
            table: SlotTable::new(),
            listener: ListenerCell::new(),
            initialized: AtomicBool::new(false),
            enabled: AtomicBool::new(false),
        }
    }

    /// Brings the bridge up.
    ///
    /// The first call clears every slot (status, buttons, timestamps,
    /// mirror contents) and enables the bridge. Idempotent: while
    /// initialized, further calls return immediately without touching
    /// running state. The atomic exchange makes the false→true edge
    /// observable by exactly one concurrent caller.
    pub fn init(&self) {
        if self.initialized.swap(true, Ordering::AcqRel) {
            return;
        }

        self.table.reset_all();
        self.enabled.store(true, Ordering::Release);
    }

    /// Shuts the bridge down.
    ///
    /// Disables the bridge and unregisters the update listener, but
    /// leaves slot contents in place: consumers may still be mid-read.
    /// Idempotent; `term` before `init` is a no-op.
    pub fn term(&self) {
        if !self.initialized.swap(false, Ordering::AcqRel) {
            return;
        }

        self.enabled.store(false, Ordering::Release);
        self.listener.set(None);
    }

    /// True while the bridge is both initialized and enabled.
    pub fn is_enabled(&self) -> bool {
        self.initialized.load(Ordering::Acquire) && self.enabled.load(Ordering::Acquire)
    }

    /// Sets the enable flag, regardless of lifecycle state.
    ///
    /// Setting it before [`init`](Self::init) is permitted and inert
    /// until init runs (which itself enables the bridge).
    pub fn set_enabled(&self, enabled: bool) {
        self.enabled.store(enabled, Ordering::Release);
    }

    pub(crate) fn is_initialized(&self) -> bool {
        self.initialized.load(Ordering::Acquire)
    }

    /// Emulation-side handle.
    pub fn producer(&self) -> Producer<'_, S> {
        Producer::new(self)
    }

    /// Frontend-side handle.
    pub fn consumer(&self) -> Consumer<'_, S> {
        Consumer::new(self)
    }
}
