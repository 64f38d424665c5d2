use thiserror::Error;

use gnss::prelude::{Constellation, SV};

/// Errors that may interrupt the decoding of one validated frame.
/// They never invalidate the byte stream: the synchronizer resumes
/// on the next frame regardless of the failure.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// Declared payload length is inconsistent with the frame length.
    #[error("payload underflow: frame is {len} bytes, {expected} required")]
    PayloadUnderflow { len: usize, expected: usize },

    /// GNSS identifier this decoder does not know about.
    #[error("unknown gnss id {0}")]
    UnknownGnssId(u8),

    /// Satellite number outside the ranges this decoder supports.
    #[error("invalid satellite number: {constellation} prn {prn}")]
    InvalidSatellite { constellation: Constellation, prn: u8 },

    /// Subframe / string / page identifier out of range.
    #[error("{0}: subframe id {1} out of range")]
    SubframeId(SV, u8),

    /// Galileo I/NAV even/odd part sequence broken.
    #[error("{0}: I/NAV even/odd sequence error")]
    InavPageSequence(SV),

    /// Galileo I/NAV page failed the CRC-24Q verification.
    #[error("{0}: I/NAV crc error")]
    InavCrc(SV),

    /// GLONASS string failed the KX Hamming verification.
    #[error("{0}: string hamming error")]
    GlonassHamming(SV),

    /// GLONASS string number out of the 1..=15 range.
    #[error("{0}: string number error")]
    GlonassStringNumber(SV),
}

/// Errors raised by the configuration frame generator.
#[derive(Debug, Error)]
pub enum GenerationError {
    /// Commands must start with the `CFG-` prefix.
    #[error("not a CFG- command")]
    NotCfgCommand,

    /// Command not present in the configuration catalogue.
    #[error("unknown command \"{0}\"")]
    UnknownCommand(String),

    /// CFG-VALSET requires a key name and a value.
    #[error("CFG-VALSET requires a (key, value) pair")]
    IncompleteValset,

    /// Key name not present in the VALSET catalogue.
    #[error("unknown configuration key \"{0}\"")]
    UnknownKey(String),
}
