//! Signal identities: RINEX-style codes, receiver signal-id mapping,
//! slot attribution and carrier frequencies.

use crate::errors::DecodeError;

use gnss::prelude::{Constellation, SV};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Carrier frequencies, in Hz.
const FREQ_L1_HZ: f64 = 1.575_42E9;
const FREQ_L2_HZ: f64 = 1.227_60E9;
const FREQ_E5B_HZ: f64 = 1.207_140E9;
const FREQ_B1I_HZ: f64 = 1.561_098E9;
const FREQ_G1_HZ: f64 = 1.602_00E9;
const FREQ_G2_HZ: f64 = 1.246_00E9;

/// GLONASS FDMA channel spacing, in Hz.
const DFREQ_G1_HZ: f64 = 0.562_5E6;
const DFREQ_G2_HZ: f64 = 0.437_5E6;

/// Signal (modulation) attribution of one measurement, following the
/// RINEX two character convention.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Code {
    /// L1 C/A (GPS, QZSS, SBAS, GLONASS) or E1-C pilot (Galileo)
    L1C,
    /// Galileo E1-B data component
    L1B,
    /// Galileo E1 B+C combination
    L1X,
    /// GLONASS L2 C/A
    L2C,
    /// L2C-L pilot (GPS, QZSS)
    L2L,
    /// L2C-M data (GPS)
    L2S,
    /// BeiDou B1I
    L2I,
    /// BeiDou B2I or Galileo E5b-I
    L7I,
    /// Galileo E5b-Q
    L7Q,
}

impl std::fmt::Display for Code {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::L1C => write!(f, "1C"),
            Self::L1B => write!(f, "1B"),
            Self::L1X => write!(f, "1X"),
            Self::L2C => write!(f, "2C"),
            Self::L2L => write!(f, "2L"),
            Self::L2S => write!(f, "2S"),
            Self::L2I => write!(f, "2I"),
            Self::L7I => write!(f, "7I"),
            Self::L7Q => write!(f, "7Q"),
        }
    }
}

impl Code {
    /// Returns the signal slot this [Code] belongs to:
    /// slot 0 gathers the L1/E1/B1 class signals, slot 1 the
    /// L2/E5b/B2 class signals.
    pub fn slot(&self) -> usize {
        match self {
            Self::L1C | Self::L1B | Self::L1X | Self::L2I => 0,
            Self::L2C | Self::L2L | Self::L2S | Self::L7I | Self::L7Q => 1,
        }
    }

    /// Returns the carrier frequency in Hz. GLONASS FDMA signals
    /// require the frequency channel number (`fcn`, -7..=6), ignored
    /// by all other constellations.
    pub fn frequency_hz(&self, constellation: Constellation, fcn: i8) -> f64 {
        match (constellation, self) {
            (Constellation::Glonass, Self::L1C) => FREQ_G1_HZ + DFREQ_G1_HZ * fcn as f64,
            (Constellation::Glonass, Self::L2C) => FREQ_G2_HZ + DFREQ_G2_HZ * fcn as f64,
            (Constellation::BeiDou, Self::L2I) => FREQ_B1I_HZ,
            (_, Self::L7I | Self::L7Q) => FREQ_E5B_HZ,
            (_, Self::L2C | Self::L2L | Self::L2S | Self::L2I) => FREQ_L2_HZ,
            _ => FREQ_L1_HZ,
        }
    }
}

/// Maps the receiver gnssId field to a [Constellation].
pub(crate) fn constellation_id(gnss_id: u8) -> Result<Constellation, DecodeError> {
    match gnss_id {
        0 => Ok(Constellation::GPS),
        1 => Ok(Constellation::SBAS),
        2 => Ok(Constellation::Galileo),
        3 => Ok(Constellation::BeiDou),
        5 => Ok(Constellation::QZSS),
        6 => Ok(Constellation::Glonass),
        id => Err(DecodeError::UnknownGnssId(id)),
    }
}

/// Maps the receiver (gnssId, sigId) pair to a signal [Code].
/// Returns None for signals this decoder does not track.
pub(crate) fn signal_id(constellation: Constellation, sig_id: u8) -> Option<Code> {
    match (constellation, sig_id) {
        (Constellation::GPS, 0) => Some(Code::L1C),
        (Constellation::GPS, 3) => Some(Code::L2L),
        (Constellation::GPS, 4) => Some(Code::L2S),
        (Constellation::Galileo, 0) => Some(Code::L1C),
        (Constellation::Galileo, 1) => Some(Code::L1B),
        (Constellation::Galileo, 5) => Some(Code::L7I),
        (Constellation::Galileo, 6) => Some(Code::L7Q),
        (Constellation::Glonass, 0) => Some(Code::L1C),
        (Constellation::Glonass, 2) => Some(Code::L2C),
        (Constellation::QZSS, 0) => Some(Code::L1C),
        (Constellation::QZSS, 5) => Some(Code::L2L),
        (Constellation::BeiDou, 0 | 1) => Some(Code::L2I),
        (Constellation::BeiDou, 2 | 3) => Some(Code::L7I),
        (Constellation::SBAS, _) => Some(Code::L1C),
        _ => None,
    }
}

/// Default [Code] attribution when the frame does not carry a sigId
/// (message version 0).
pub(crate) fn default_code(constellation: Constellation) -> Code {
    match constellation {
        Constellation::BeiDou => Code::L2I,
        Constellation::Galileo => Code::L1X,
        _ => Code::L1C,
    }
}

/// Builds the [SV] for this (constellation, prn) pair, verifying the
/// prn lies within the supported range. QZSS prns are expected in
/// their 193.. numbering.
pub(crate) fn satellite(constellation: Constellation, prn: u8) -> Result<SV, DecodeError> {
    let valid = match constellation {
        Constellation::GPS => (1..=32).contains(&prn),
        Constellation::Glonass => (1..=27).contains(&prn),
        Constellation::Galileo => (1..=36).contains(&prn),
        Constellation::BeiDou => (1..=63).contains(&prn),
        Constellation::QZSS => (193..=202).contains(&prn),
        Constellation::SBAS => (120..=158).contains(&prn),
        _ => false,
    };
    if valid {
        Ok(SV::new(constellation, prn))
    } else {
        Err(DecodeError::InvalidSatellite { constellation, prn })
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn signal_map() {
        // E5b data/pilot share slot 1
        let code = signal_id(Constellation::Galileo, 5).unwrap();
        assert_eq!(code, Code::L7I);
        assert_eq!(code.slot(), 1);

        let code = signal_id(Constellation::Galileo, 6).unwrap();
        assert_eq!(code, Code::L7Q);
        assert_eq!(code.slot(), 1);

        assert_eq!(signal_id(Constellation::GPS, 0), Some(Code::L1C));
        assert_eq!(signal_id(Constellation::GPS, 3), Some(Code::L2L));
        assert_eq!(signal_id(Constellation::GPS, 4), Some(Code::L2S));
        assert_eq!(signal_id(Constellation::SBAS, 17), Some(Code::L1C));
        assert_eq!(signal_id(Constellation::GPS, 7), None);

        // B1I belongs to the first slot, B2I to the second
        let code = signal_id(Constellation::BeiDou, 1).unwrap();
        assert_eq!(code, Code::L2I);
        assert_eq!(code.slot(), 0);

        let code = signal_id(Constellation::BeiDou, 2).unwrap();
        assert_eq!(code, Code::L7I);
        assert_eq!(code.slot(), 1);
    }

    #[test]
    fn glonass_fdma() {
        let f0 = Code::L1C.frequency_hz(Constellation::Glonass, 0);
        assert_eq!(f0, 1.602E9);

        let f_minus7 = Code::L1C.frequency_hz(Constellation::Glonass, -7);
        assert_eq!(f_minus7, 1.602E9 - 7.0 * 0.5625E6);

        let g2 = Code::L2C.frequency_hz(Constellation::Glonass, 3);
        assert_eq!(g2, 1.246E9 + 3.0 * 0.4375E6);
    }

    #[test]
    fn satellite_ranges() {
        assert!(satellite(Constellation::GPS, 32).is_ok());
        assert!(satellite(Constellation::GPS, 33).is_err());
        assert!(satellite(Constellation::QZSS, 193).is_ok());
        assert!(satellite(Constellation::QZSS, 1).is_err());
        assert!(satellite(Constellation::SBAS, 120).is_ok());
        assert!(satellite(Constellation::Glonass, 255).is_err());
    }
}
