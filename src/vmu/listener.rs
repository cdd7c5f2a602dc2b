use core::cell::Cell;

use critical_section::Mutex;

use crate::vmu::types::Framebuffer;

/// Receives synchronous display-update notifications.
///
/// The bridge invokes the listener on the emulation thread, inside
/// [`Producer::display_update`](crate::vmu::Producer::display_update),
/// after the mirror write and dirty flag. Implementations must be
/// short-running and non-blocking: a slow listener stalls the emulation
/// loop. The bridge does not catch panics raised here; propagation is
/// the listener owner's responsibility.
pub trait UpdateListener: Sync {
    /// Called once per update with the slot id, the *source* frame (not
    /// the mirror copy), and the producer timestamp. The frame reference
    /// is only valid for the duration of the call.
    fn display_updated(&self, slot: usize, framebuffer: &Framebuffer, timestamp: u64);
}

/// Single registration cell for the update listener.
///
/// Guarded by its own critical section, independent of the per-slot
/// mirror locks, so swapping or snapshotting the handle never waits on a
/// framebuffer copy.
pub(crate) struct ListenerCell {
    inner: Mutex<Cell<Option<&'static dyn UpdateListener>>>,
}

impl ListenerCell {
    pub(crate) const fn new() -> Self {
        Self {
            inner: Mutex::new(Cell::new(None)),
        }
    }

    /// Replaces the registration. Last registration wins; `None`
    /// unregisters.
    pub(crate) fn set(&self, listener: Option<&'static dyn UpdateListener>) {
        critical_section::with(|cs| self.inner.borrow(cs).set(listener));
    }

    /// Snapshot of the current registration. Callers invoke the returned
    /// handle after the critical section has been released.
    pub(crate) fn get(&self) -> Option<&'static dyn UpdateListener> {
        critical_section::with(|cs| self.inner.borrow(cs).get())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vmu::test_support::CountingListener;

    #[test]
    fn empty_cell_yields_none() {
        let cell = ListenerCell::new();
        assert!(cell.get().is_none());
    }

    #[test]
    fn last_registration_wins() {
        static FIRST: CountingListener = CountingListener::new();
        static SECOND: CountingListener = CountingListener::new();

        let cell = ListenerCell::new();
        cell.set(Some(&FIRST));
        cell.set(Some(&SECOND));

        let frame = [0u32; crate::vmu::LCD_PIXELS];
        cell.get().unwrap().display_updated(3, &frame, 7);
        assert_eq!(FIRST.calls(), 0);
        assert_eq!(SECOND.calls(), 1);
    }

    #[test]
    fn none_unregisters() {
        static LISTENER: CountingListener = CountingListener::new();

        let cell = ListenerCell::new();
        cell.set(Some(&LISTENER));
        cell.set(None);
        assert!(cell.get().is_none());
    }
}
