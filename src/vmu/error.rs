/// Errors returned by the framebuffer copy accessor.
///
/// Scalar queries never fail; they return neutral values for bad slot
/// ids. The copy path distinguishes "no such slot" from "slot has no
/// valid data yet" so frontends can tell the two apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BridgeError {
    /// Slot id is outside `0..MAX_VMU_COUNT`.
    SlotOutOfRange,
    /// Slot is in range but no VMU is active there.
    SlotInactive,
}

impl core::fmt::Display for BridgeError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BridgeError::SlotOutOfRange => write!(f, "slot id out of range"),
            BridgeError::SlotInactive => write!(f, "no active VMU in slot"),
        }
    }
}
