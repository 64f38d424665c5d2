//! Navigation data: subframe/page reassembly per satellite, and the
//! per constellation ephemeris decoders.

mod beidou;
mod ephemeris;
mod galileo;
mod gps;
mod sbas;

pub(crate) mod glonass;

pub use ephemeris::{
    Almanac, Ephemeris, GlonassEphemeris, IonosphereParameters, SbasMessage, UtcParameters,
};

use crate::{
    bytes::read_u8,
    decoder::{Decoder, Status},
    errors::DecodeError,
    signal::{constellation_id, satellite},
};

use gnss::prelude::Constellation;
use log::trace;

#[cfg(feature = "trk")]
use log::debug;

/// Two's negative powers, the broadcast field scale factors.
pub(crate) const P2_5: f64 = 0.03125;
pub(crate) const P2_6: f64 = 0.015625;
pub(crate) const P2_11: f64 = 4.882812500000000E-04;
pub(crate) const P2_19: f64 = 1.907348632812500E-06;
pub(crate) const P2_20: f64 = 9.536743164062500E-07;
pub(crate) const P2_21: f64 = 4.768371582031250E-07;
pub(crate) const P2_23: f64 = 1.192092895507813E-07;
pub(crate) const P2_24: f64 = 5.960464477539063E-08;
pub(crate) const P2_27: f64 = 7.450580596923828E-09;
pub(crate) const P2_29: f64 = 1.862645149230957E-09;
pub(crate) const P2_30: f64 = 9.313225746154785E-10;
pub(crate) const P2_31: f64 = 4.656612873077393E-10;
pub(crate) const P2_32: f64 = 2.328306436538696E-10;
pub(crate) const P2_33: f64 = 1.164153218269348E-10;
pub(crate) const P2_34: f64 = 5.820766091346741E-11;
pub(crate) const P2_38: f64 = 3.637978807091713E-12;
pub(crate) const P2_40: f64 = 9.094947017729282E-13;
pub(crate) const P2_43: f64 = 1.136868377216160E-13;
pub(crate) const P2_46: f64 = 1.421085471520200E-14;
pub(crate) const P2_50: f64 = 8.881784197001252E-16;
pub(crate) const P2_55: f64 = 2.775557561562891E-17;
pub(crate) const P2_59: f64 = 1.734723475976807E-18;
pub(crate) const P2_66: f64 = 1.355252715606881E-20;

/// Semicircles to radians.
pub(crate) const SC2RAD: f64 = std::f64::consts::PI;

/// Per satellite navigation frame scratch area. All constellations
/// share the same 380 byte layout:
/// - GPS/QZSS: five 30-byte subframes at `(id - 1) * 30`;
/// - BeiDou: 38-byte frames, D1 subframes 1..=3 or D2 pages 1..=10;
/// - GLONASS: four 10-byte strings, plus the 2-byte frame id tag
///   at offset 150;
/// - Galileo: seven 16-byte words at `type * 16`, plus the seen-words
///   bitmap at offset 112.
#[derive(Clone)]
pub(crate) struct Subframes {
    pub data: [u8; Self::SIZE],
}

impl Default for Subframes {
    fn default() -> Self {
        Self {
            data: [0; Self::SIZE],
        }
    }
}

impl Subframes {
    pub const SIZE: usize = 380;

    /// GPS/QZSS and BeiDou frame strides, in bytes.
    pub const GPS_SUBFRAME_BYTES: usize = 30;
    pub const BDS_SUBFRAME_BYTES: usize = 38;

    /// GLONASS string stride and frame id tag location.
    pub const GLO_STRING_BYTES: usize = 10;
    pub const GLO_FRAME_ID_OFFSET: usize = 150;

    /// Galileo word stride and seen-words bitmap location.
    pub const GAL_WORD_BYTES: usize = 16;
    pub const GAL_SEEN_OFFSET: usize = 112;
}

impl Decoder {
    /// UBX-RXM-SFRBX: one navigation data subframe, routed by
    /// constellation.
    pub(crate) fn decode_rxm_sfrbx(&mut self) -> Result<Status, DecodeError> {
        let frame = self.frame();
        if frame.len() < 16 {
            return Err(DecodeError::PayloadUnderflow {
                len: frame.len(),
                expected: 16,
            });
        }

        let constellation = constellation_id(read_u8(frame, 6))?;
        let mut prn = read_u8(frame, 7);
        let freq_id = read_u8(frame, 9);

        if constellation == Constellation::QZSS {
            prn = prn.saturating_add(192);
        }

        let sv = match satellite(constellation, prn) {
            Ok(sv) => sv,
            Err(_) if constellation == Constellation::Glonass && prn == 255 => {
                // unknown GLONASS slot, quietly dropped
                return Ok(Status::NeedMore);
            },
            Err(error) => return Err(error),
        };

        trace!("rxm-sfrbx: {}", sv);

        match constellation {
            Constellation::GPS | Constellation::QZSS => self.decode_lnav_words(sv, 14),
            Constellation::Galileo => self.decode_inav_page(sv, 14),
            Constellation::BeiDou => self.decode_bds_words(sv, 14),
            Constellation::Glonass => self.decode_glonass_string(sv, 14, freq_id),
            Constellation::SBAS => self.decode_sbas_frame(prn, 14),
            _ => Ok(Status::NeedMore),
        }
    }

    /// UBX-RXM-SFRB: legacy subframe message (GPS and SBAS only).
    pub(crate) fn decode_rxm_sfrb(&mut self) -> Result<Status, DecodeError> {
        let frame = self.frame();
        if frame.len() < 50 {
            return Err(DecodeError::PayloadUnderflow {
                len: frame.len(),
                expected: 50,
            });
        }

        let prn = read_u8(frame, 7);
        let constellation = if prn >= 120 {
            Constellation::SBAS
        } else {
            Constellation::GPS
        };

        let sv = satellite(constellation, prn)?;
        trace!("rxm-sfrb: {}", sv);

        match constellation {
            Constellation::GPS => self.save_lnav_subframe(sv),
            _ => self.decode_sbas_legacy(prn),
        }
    }

    #[cfg(feature = "trk")]
    /// UBX-TRK-SFRBX: undocumented subframe message found on some
    /// firmware generations, same routing as UBX-RXM-SFRBX.
    pub(crate) fn decode_trk_sfrbx(&mut self) -> Result<Status, DecodeError> {
        let frame = self.frame();
        if frame.len() < 21 {
            return Err(DecodeError::PayloadUnderflow {
                len: frame.len(),
                expected: 21,
            });
        }

        let constellation = constellation_id(read_u8(frame, 7))?;
        let mut prn = read_u8(frame, 8);
        let freq_id = read_u8(frame, 10);

        if constellation == Constellation::QZSS {
            prn = prn.saturating_add(192);
        }

        let sv = satellite(constellation, prn)?;
        debug!("trk-sfrbx: {}", sv);

        match constellation {
            Constellation::GPS | Constellation::QZSS => self.decode_lnav_words(sv, 19),
            Constellation::Galileo => self.decode_inav_page(sv, 19),
            Constellation::BeiDou => self.decode_bds_words(sv, 19),
            Constellation::Glonass => self.decode_glonass_string(sv, 19, freq_id),
            _ => Ok(Status::NeedMore),
        }
    }
}
