//! Receiver dependent decoding options.
//!
//! The option string is a space separated list of directives matched by
//! substring, e.g. `"-EPHALL -TADJ=0.1"`. It is parsed once at decoder
//! construction; every frame then reads the typed fields.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Carrier phase std-dev above which the phase is dropped (0.004 m units).
const DEFAULT_MAX_CP_STD: u8 = 5;

/// Carrier phase std-dev above which a cycle slip is declared.
const DEFAULT_SLIP_CP_STD: u8 = 15;

/// Typed view of the receiver dependent option string.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Options {
    /// `-EPHALL`: publish every decoded ephemeris, even unchanged ones.
    pub ephemeris_all: bool,

    /// `-INVCP`: invert the carrier phase sign of legacy observations.
    pub invert_carrier_phase: bool,

    /// `-TADJ=tint`: quantize observation time tags to multiples of
    /// `tint` seconds.
    pub time_adjustment: Option<f64>,

    /// `-MAX_STD_CP=n`: carrier phase rejection threshold.
    pub max_carrier_phase_std: u8,

    /// `-STD_SLIP=n`: cycle slip declaration threshold.
    pub slip_carrier_phase_std: u8,

    /// `-GALFNAV`: suppress I/NAV ephemeris publication (the caller
    /// works from F/NAV instead).
    pub galileo_fnav: bool,

    /// `-TRKM_ADJ=k`: GLONASS inter-channel code bias table (2 or 3)
    /// applied to TRK-MEAS pseudoranges.
    pub glonass_bias_table: Option<u8>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            ephemeris_all: false,
            invert_carrier_phase: false,
            time_adjustment: None,
            max_carrier_phase_std: DEFAULT_MAX_CP_STD,
            slip_carrier_phase_std: DEFAULT_SLIP_CP_STD,
            galileo_fnav: false,
            glonass_bias_table: None,
        }
    }
}

impl std::str::FromStr for Options {
    type Err = std::convert::Infallible;

    fn from_str(opt: &str) -> Result<Self, Self::Err> {
        let mut options = Self::default();

        options.ephemeris_all = opt.contains("-EPHALL");
        options.invert_carrier_phase = opt.contains("-INVCP");
        options.galileo_fnav = opt.contains("-GALFNAV");

        if let Some(value) = directive_value(opt, "-TADJ=") {
            if let Ok(tint) = value.parse::<f64>() {
                if tint > 0.0 {
                    options.time_adjustment = Some(tint);
                }
            }
        }

        if let Some(value) = directive_value(opt, "-MAX_STD_CP=") {
            if let Ok(std) = value.parse::<u8>() {
                options.max_carrier_phase_std = std;
            }
        }

        if let Some(value) = directive_value(opt, "-STD_SLIP=") {
            if let Ok(std) = value.parse::<u8>() {
                options.slip_carrier_phase_std = std;
            }
        }

        if let Some(value) = directive_value(opt, "-TRKM_ADJ=") {
            if let Ok(table) = value.parse::<u8>() {
                if table == 2 || table == 3 {
                    options.glonass_bias_table = Some(table);
                }
            }
        }

        Ok(options)
    }
}

/// Extracts the token following `directive` within the option string.
fn directive_value<'a>(opt: &'a str, directive: &str) -> Option<&'a str> {
    let start = opt.find(directive)? + directive.len();
    let remainder = &opt[start..];
    match remainder.find(char::is_whitespace) {
        Some(end) => Some(&remainder[..end]),
        None => Some(remainder),
    }
}
