//! Raw observation batches: per satellite pseudorange, carrier phase,
//! Doppler and SNR measurements, together with the per satellite
//! tracking state the cycle slip detection relies on.

mod lli;
mod raw;
mod rawx;

#[cfg(feature = "trk")]
#[cfg_attr(docrs, doc(cfg(feature = "trk")))]
mod trk;

pub use lli::LliFlags;

pub(crate) use lli::TrackingStatus;

use crate::{signal::Code, SIGNAL_SLOTS};

use gnss::prelude::SV;
use hifitime::Epoch;
use itertools::Itertools;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One satellite sampled at one point in time, all tracked signal
/// slots gathered. Empty slots read as zero, the convention all
/// downstream formats (RINEX in particular) expect.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Observation {
    /// Satellite (signal source)
    pub sv: SV,

    /// Pseudorange, in meters, per signal slot.
    pub pseudorange_m: [f64; SIGNAL_SLOTS],

    /// Carrier phase, in cycles, per signal slot.
    pub carrier_phase_cycles: [f64; SIGNAL_SLOTS],

    /// Doppler shift, in Hz, per signal slot.
    pub doppler_hz: [f32; SIGNAL_SLOTS],

    /// Signal strength, in 0.25 dB-Hz units, per signal slot.
    pub snr_dbhz4: [u16; SIGNAL_SLOTS],

    /// Loss-of-lock indicators, per signal slot.
    pub lli: [LliFlags; SIGNAL_SLOTS],

    /// Signal [Code] each slot was sampled from.
    pub code: [Option<Code>; SIGNAL_SLOTS],

    /// Carrier phase standard deviation indicator (0..=9), per slot.
    pub carrier_phase_std: [u8; SIGNAL_SLOTS],

    /// Pseudorange standard deviation indicator (0..=9), per slot.
    pub pseudorange_std: [u8; SIGNAL_SLOTS],
}

impl Observation {
    /// Builds an empty [Observation] for this satellite.
    pub fn new(sv: SV) -> Self {
        Self {
            sv,
            pseudorange_m: [0.0; SIGNAL_SLOTS],
            carrier_phase_cycles: [0.0; SIGNAL_SLOTS],
            doppler_hz: [0.0; SIGNAL_SLOTS],
            snr_dbhz4: [0; SIGNAL_SLOTS],
            lli: [LliFlags::default(); SIGNAL_SLOTS],
            code: [None; SIGNAL_SLOTS],
            carrier_phase_std: [0; SIGNAL_SLOTS],
            pseudorange_std: [0; SIGNAL_SLOTS],
        }
    }
}

/// One batch of [Observation]s sharing a single sampling [Epoch].
/// The batch remains valid until the next raw measurement frame
/// overwrites it.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ObservationBatch {
    /// Common sampling [Epoch], receiver time.
    pub time: Option<Epoch>,

    /// Per satellite [Observation]s, at most
    /// [crate::MAX_OBSERVATIONS] of them.
    pub observations: Vec<Observation>,

    /// External event mark (5 when an event time is pending).
    pub flag: u8,

    /// External event [Epoch], when one was captured.
    pub event: Option<Epoch>,
}

impl ObservationBatch {
    /// Number of satellites observed.
    pub fn len(&self) -> usize {
        self.observations.len()
    }

    /// True when no satellite was observed.
    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }

    /// Unique [SV] iterator over this batch.
    pub fn satellites_iter(&self) -> impl Iterator<Item = SV> + '_ {
        self.observations.iter().map(|obs| obs.sv).unique()
    }

    /// Grabs the [Observation] slot for `sv`, appending a fresh one
    /// when the satellite is not part of the batch yet.
    pub(crate) fn observation_mut(&mut self, sv: SV) -> &mut Observation {
        match self.observations.iter().position(|obs| obs.sv == sv) {
            Some(index) => &mut self.observations[index],
            None => {
                self.observations.push(Observation::new(sv));
                self.observations.last_mut().unwrap()
            },
        }
    }
}

/// Per satellite, per signal slot carrier tracking state, persisted
/// across frames for the cycle slip bookkeeping.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct TrackingState {
    /// Seconds of continuous phase lock last reported.
    pub lock_time_s: [f64; SIGNAL_SLOTS],

    /// Last known half-cycle-subtracted indicator.
    pub half_cycle_subtracted: [bool; SIGNAL_SLOTS],

    /// Sticky slip indicator, cleared once a valid carrier phase
    /// carrying the slip bit has been emitted.
    pub slip: [bool; SIGNAL_SLOTS],
}
