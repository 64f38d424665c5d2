use bitflags::bitflags;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

bitflags! {
    #[derive(Debug, Copy, Clone, Default, PartialEq, PartialOrd)]
    #[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
    /// Loss-of-lock indicator attached to each carrier phase measurement.
    pub struct LliFlags: u8 {
        /// Lock lost between previous and current observation,
        /// cycle slip is possible.
        const SLIP = 0x01;

        /// Half cycle ambiguity not resolved yet by the phase tracker.
        const HALF_CYCLE_INVALID = 0x02;
    }
}

bitflags! {
    #[derive(Debug, Copy, Clone, Default, PartialEq)]
    /// Tracking status byte attached to each multi-GNSS raw measurement.
    pub(crate) struct TrackingStatus: u8 {
        /// Pseudorange valid.
        const PR_VALID = 0x01;

        /// Carrier phase valid.
        const CP_VALID = 0x02;

        /// Half cycle ambiguity resolved.
        const HALF_CYCLE_VALID = 0x04;

        /// Half cycle currently subtracted from the carrier phase.
        const HALF_CYCLE_SUBTRACTED = 0x08;
    }
}
