//! Broadcast ephemeris records, reconstructed from the navigation
//! data subframes as they come off the air.

use gnss::prelude::{Constellation, SV};
use hifitime::Epoch;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Keplerian broadcast [Ephemeris], published by the GPS, QZSS,
/// Galileo and BeiDou decoders. A record stays valid until the next
/// issue overwrites it.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Ephemeris {
    /// Satellite this ephemeris describes.
    pub sv: SV,

    /// Issue of data, ephemeris.
    pub iode: u32,

    /// Issue of data, clock.
    pub iodc: u32,

    /// User range accuracy index.
    pub sva: u8,

    /// Satellite health word. Galileo packs
    /// `(E5b HS << 7) | (E5b DVS << 6) | (E1b HS << 1) | E1b DVS`.
    pub svh: u16,

    /// Week number, continuous GPS numbering for all constellations.
    pub week: u32,

    /// Codes on L2 (GPS) or data source indicator (Galileo).
    pub code: u16,

    /// L2 P data flag (GPS only).
    pub flag: u8,

    /// Time of ephemeris.
    pub toe: Epoch,

    /// Time of clock.
    pub toc: Epoch,

    /// Transmission time of the message.
    pub ttr: Epoch,

    /// Semi major axis, in meters.
    pub a: f64,

    /// Eccentricity.
    pub e: f64,

    /// Inclination at reference epoch, in radians.
    pub i0: f64,

    /// Longitude of ascending node, in radians.
    pub omega0: f64,

    /// Argument of perigee, in radians.
    pub omega: f64,

    /// Mean anomaly at reference epoch, in radians.
    pub m0: f64,

    /// Mean motion correction, in rad/s.
    pub delta_n: f64,

    /// Rate of right ascension, in rad/s.
    pub omega_dot: f64,

    /// Rate of inclination, in rad/s.
    pub i_dot: f64,

    /// Orbit radius corrections, in meters.
    pub crc: f64,
    pub crs: f64,

    /// Argument of latitude corrections, in radians.
    pub cuc: f64,
    pub cus: f64,

    /// Inclination corrections, in radians.
    pub cic: f64,
    pub cis: f64,

    /// Time of ephemeris, seconds within `week`.
    pub toe_s: f64,

    /// Fit interval flag / duration.
    pub fit: f64,

    /// Clock offset polynomial: bias (s), drift (s/s),
    /// drift rate (s/s²).
    pub af0: f64,
    pub af1: f64,
    pub af2: f64,

    /// Group delays: GPS `[tgd, 0]`, Galileo `[bgd E5a/E1, bgd E5b/E1]`,
    /// BeiDou `[tgd1 B1/B3, tgd2 B2/B3]`, in seconds.
    pub tgd: [f64; 2],
}

impl Default for Ephemeris {
    fn default() -> Self {
        Self {
            sv: SV::new(Constellation::GPS, 1),
            iode: 0,
            iodc: 0,
            sva: 0,
            svh: 0,
            week: 0,
            code: 0,
            flag: 0,
            toe: Epoch::default(),
            toc: Epoch::default(),
            ttr: Epoch::default(),
            a: 0.0,
            e: 0.0,
            i0: 0.0,
            omega0: 0.0,
            omega: 0.0,
            m0: 0.0,
            delta_n: 0.0,
            omega_dot: 0.0,
            i_dot: 0.0,
            crc: 0.0,
            crs: 0.0,
            cuc: 0.0,
            cus: 0.0,
            cic: 0.0,
            cis: 0.0,
            toe_s: 0.0,
            fit: 0.0,
            af0: 0.0,
            af1: 0.0,
            af2: 0.0,
            tgd: [0.0; 2],
        }
    }
}

impl Ephemeris {
    /// True when `other` carries the same issue of data and reference
    /// epochs: such an ephemeris is not republished unless the
    /// `-EPHALL` option is set.
    pub(crate) fn unchanged(&self, other: &Self) -> bool {
        match self.sv.constellation {
            Constellation::Galileo => {
                self.iode == other.iode && self.toe == other.toe && self.toc == other.toc
            },
            Constellation::BeiDou => self.toe == other.toe,
            _ => self.iode == other.iode && self.iodc == other.iodc,
        }
    }
}

/// GLONASS broadcast ephemeris: ECEF state vector and clock model.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GlonassEphemeris {
    /// Satellite this ephemeris describes.
    pub sv: SV,

    /// Issue of data: `tb` field, interval index within the day.
    pub iode: u32,

    /// FDMA frequency channel (-7..=6).
    pub frequency_channel: i8,

    /// Health flag (Bn).
    pub svh: u8,

    /// Accuracy index (FT).
    pub sva: u8,

    /// Age of operational information, in days.
    pub age_days: u8,

    /// Ephemeris reference [Epoch].
    pub toe: Epoch,

    /// Message frame [Epoch].
    pub tof: Epoch,

    /// Satellite position, in meters (PZ-90 ECEF).
    pub position_m: [f64; 3],

    /// Satellite velocity, in m/s.
    pub velocity_m_s: [f64; 3],

    /// Lunisolar acceleration, in m/s².
    pub acceleration_m_s2: [f64; 3],

    /// Clock bias τn, in seconds.
    pub tau_s: f64,

    /// Relative frequency deviation γn.
    pub gamma: f64,

    /// L1/L2 group delay Δτn, in seconds.
    pub delta_tau_s: f64,
}

impl Default for GlonassEphemeris {
    fn default() -> Self {
        Self {
            sv: SV::new(Constellation::Glonass, 1),
            iode: 0,
            frequency_channel: 0,
            svh: 0,
            sva: 0,
            age_days: 0,
            toe: Epoch::default(),
            tof: Epoch::default(),
            position_m: [0.0; 3],
            velocity_m_s: [0.0; 3],
            acceleration_m_s2: [0.0; 3],
            tau_s: 0.0,
            gamma: 0.0,
            delta_tau_s: 0.0,
        }
    }
}

/// Reduced precision [Almanac], refreshed by LNAV subframes 4 and 5.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Almanac {
    /// Satellite this almanac describes.
    pub sv: SV,

    /// Eccentricity.
    pub e: f64,

    /// Almanac reference time, seconds within week.
    pub toa_s: f64,

    /// Inclination, in radians (54° reference plus the broadcast δi).
    pub i0: f64,

    /// Rate of right ascension, in rad/s.
    pub omega_dot: f64,

    /// Satellite health word.
    pub svh: u8,

    /// Semi major axis, in meters.
    pub a: f64,

    /// Longitude of ascending node, in radians.
    pub omega0: f64,

    /// Argument of perigee, in radians.
    pub omega: f64,

    /// Mean anomaly at reference epoch, in radians.
    pub m0: f64,

    /// Clock bias (s) and drift (s/s).
    pub af0: f64,
    pub af1: f64,
}

/// Klobuchar ionosphere correction terms, from LNAV subframe 4
/// page 18.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct IonosphereParameters {
    /// Alpha terms, in (s, s/sc, s/sc², s/sc³).
    pub alpha: (f64, f64, f64, f64),

    /// Beta terms, in (s, s/sc, s/sc², s/sc³).
    pub beta: (f64, f64, f64, f64),
}

/// GPST to UTC conversion parameters, from LNAV subframe 4 page 18.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct UtcParameters {
    /// Polynomial terms: bias (s) and drift (s/s).
    pub a0: f64,
    pub a1: f64,

    /// Reference time of week, in seconds.
    pub tot_s: f64,

    /// Reference week, expanded to continuous numbering.
    pub week: u32,

    /// Leap seconds (GPST - UTC), broadcast value.
    pub delta_t_ls: i32,
}

/// One SBAS long message, captured with its reception time tag and
/// handed over for augmentation processing.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SbasMessage {
    /// Broadcasting SBAS satellite prn.
    pub prn: u8,

    /// Reception week.
    pub week: u32,

    /// Reception time of week, in seconds.
    pub tow_s: u32,

    /// 250 bit message, MSB first, 6 trailing bits of the last byte
    /// masked out.
    pub payload: [u8; 29],
}
