//! UBX protocol decoder and configuration frame generator.
#![doc(html_logo_url = "https://raw.githubusercontent.com/rtk-rs/.github/master/logos/logo2.jpg")]
#![doc = include_str!("../README.md")]
#![cfg_attr(docrs, feature(doc_cfg))]

/*
 * UBX is part of the nav-solutions framework.
 * Authors: Guillaume W. Bres <guillaume.bressaix@gmail.com> et al.
 * (cf. https://github.com/nav-solutions/ubx/graphs/contributors)
 * This framework is shipped under Mozilla Public V2 license.
 *
 * Documentation: https://github.com/nav-solutions/ubx
 */

extern crate gnss_rs as gnss;

mod bits;
mod bytes;
mod checksum;
mod crc;
mod decoder;
mod errors;
mod options;
mod signal;
mod time;

pub mod config;
pub mod navigation;
pub mod observation;

#[cfg(test)]
mod tests;

/// UBX frame synchronization pattern, first byte.
pub const SYNC_1: u8 = 0xB5;

/// UBX frame synchronization pattern, second byte.
pub const SYNC_2: u8 = 0x62;

/// Upper bound on any supported frame, in bytes (header and checksum included).
pub const MAX_FRAME_LEN: usize = 4096;

/// Maximum number of satellites within one observation batch.
pub const MAX_OBSERVATIONS: usize = 64;

/// Number of signal slots maintained per satellite: L1/E1/B1 class
/// signals land in the first slot, L2/E5b/B2 class signals in the second.
pub const SIGNAL_SLOTS: usize = 2;

/// Speed of light, in m/s.
pub(crate) const SPEED_OF_LIGHT_M_S: f64 = 299_792_458.0;

pub mod prelude {
    pub use crate::{
        config::{generate, FieldType},
        decoder::{Decoder, Status},
        errors::{DecodeError, GenerationError},
        navigation::{
            Almanac, Ephemeris, GlonassEphemeris, IonosphereParameters, SbasMessage,
            UtcParameters,
        },
        observation::{LliFlags, Observation, ObservationBatch},
        options::Options,
        signal::Code,
        MAX_FRAME_LEN, MAX_OBSERVATIONS, SIGNAL_SLOTS, SYNC_1, SYNC_2,
    };

    // Pub re-export
    pub use gnss::prelude::{Constellation, SV};
    pub use hifitime::{Duration, Epoch, TimeScale};
}
