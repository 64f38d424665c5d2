//! Configuration frame synthesis.
//!
//! [generate] turns a textual command such as
//! `"CFG-MSG 1 1 0 0 0 0 0 0"` or `"CFG-VALSET CFG-RATE-MEAS 100"`
//! into a complete, checksummed UBX frame ready for the wire.
//!
//! The catalogue of configuration messages is static: one entry per
//! known `CFG-*` submessage with its payload signature. CFG-VALSET is
//! special cased: its payload is a `(key id, value)` pair resolved
//! against the [valset::VALSET_KEYS] catalogue.

mod valset;

pub use valset::{ValsetKey, VALSET_KEYS};

use crate::{checksum, errors::GenerationError, SYNC_1, SYNC_2};

/// UBX configuration class.
const CFG_CLASS: u8 = 0x06;

/// CFG-VALSET message id, the special cased entry.
const VALSET_ID: u8 = 0x8A;

/// Fixed CFG-VALSET header: version 0, RAM layer, no transaction.
const VALSET_HEADER: [u8; 4] = [0x00, 0x01, 0x00, 0x00];

/// Commands are tokenized on whitespace, up to this many tokens.
const MAX_TOKENS: usize = 32;

/// Payload field of a configuration message.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum FieldType {
    U1,
    U2,
    U4,
    I1,
    I2,
    I4,
    R4,
    R8,
    /// 32-byte zero padded ASCII string.
    S32,
}

/// Value type of a VALSET configuration key.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum KeyType {
    /// Single bit, stored as one byte.
    L,
    U1,
    U2,
    U4,
    U8,
    I1,
    I2,
    I4,
    /// Enumerated, stored unsigned.
    E1,
    E2,
    E4,
    /// Bitfield, stored unsigned.
    X1,
    X2,
    X4,
    X8,
    R4,
    R8,
}

impl KeyType {
    /// Encoded value size, in bytes.
    pub fn size(&self) -> usize {
        match self {
            Self::L | Self::U1 | Self::I1 | Self::E1 | Self::X1 => 1,
            Self::U2 | Self::I2 | Self::E2 | Self::X2 => 2,
            Self::U4 | Self::I4 | Self::E4 | Self::X4 | Self::R4 => 4,
            Self::U8 | Self::X8 | Self::R8 => 8,
        }
    }
}

/// One configuration message of the catalogue.
pub(crate) struct CfgMessage {
    /// Submessage name, without the `CFG-` prefix.
    pub(crate) name: &'static str,

    /// Message id within the configuration class.
    pub(crate) id: u8,

    /// Payload signature. The signature is authoritative: missing
    /// tokens encode as zero.
    fields: &'static [FieldType],
}

use FieldType::{I1, I2, I4, R4, R8, S32, U1, U2, U4};

/// The configuration catalogue, sorted by name.
pub(crate) const CFG_MESSAGES: &[CfgMessage] = &[
    CfgMessage {
        name: "ANT",
        id: 0x13,
        fields: &[U2, U2],
    },
    CfgMessage {
        name: "CFG",
        id: 0x09,
        fields: &[U4, U4, U4, U1],
    },
    CfgMessage {
        name: "DAT",
        id: 0x06,
        fields: &[R8, R8, R4, R4, R4, R4, R4, R4, R4],
    },
    CfgMessage {
        name: "DGNSS",
        id: 0x70,
        fields: &[U1, U1, U1, U1],
    },
    CfgMessage {
        name: "EKF",
        id: 0x12,
        fields: &[U1, U1, U1, U1, U4, U2, U2, U2],
    },
    CfgMessage {
        name: "FXN",
        id: 0x0E,
        fields: &[U4, U4, U4, U4, U4, U4, U4, U4, U4],
    },
    CfgMessage {
        name: "GEOFENCE",
        id: 0x69,
        fields: &[U1, U1, U1, U1, U1, U1, U1, U1, I4, I4, U4],
    },
    CfgMessage {
        name: "GNSS",
        id: 0x3E,
        fields: &[U1, U1, U1, U1, U1, U1, U1, U1, U4],
    },
    CfgMessage {
        name: "HNR",
        id: 0x5C,
        fields: &[U1, U1, U1, U1],
    },
    CfgMessage {
        name: "INF",
        id: 0x02,
        fields: &[U1, U1, U1, U1, U1, U1, U1, U1, U1, U1],
    },
    CfgMessage {
        name: "ITFM",
        id: 0x39,
        fields: &[U4, U4],
    },
    CfgMessage {
        name: "LOGFILTER",
        id: 0x47,
        fields: &[U1, U1, U2, U2, U2, U4],
    },
    CfgMessage {
        name: "MSG",
        id: 0x01,
        fields: &[U1, U1, U1, U1, U1, U1, U1, U1],
    },
    CfgMessage {
        name: "NAV5",
        id: 0x24,
        fields: &[
            U2, U1, U1, I4, U4, I1, U1, U2, U2, U2, U2, U1, U1, U1, U1, U2, U2, U1, U1, U1, U1,
            U1, U1,
        ],
    },
    CfgMessage {
        name: "NAVX5",
        id: 0x23,
        fields: &[
            U2, U2, U4, U1, U1, U1, U1, U1, U1, U1, U1, U2, U4, U1, U1, U1, U1, U1, U1, U1, U2,
            U1, U1, U2,
        ],
    },
    CfgMessage {
        name: "NMEA",
        id: 0x17,
        fields: &[U1, U1, U1, U1, U4, U1, U1, U1, U1],
    },
    CfgMessage {
        name: "ODO",
        id: 0x1E,
        fields: &[
            U1, U1, U1, U1, U1, U1, U1, U1, U1, U1, U1, U1, U1, U1, U1, U1, U1, U1, U1, U1,
        ],
    },
    CfgMessage {
        name: "PM2",
        id: 0x3B,
        fields: &[U1, U1, U1, U1, U4, U4, U4, U4, U2, U2],
    },
    CfgMessage {
        name: "PMS",
        id: 0x86,
        fields: &[U1, U1, U2, U2, U1, U1],
    },
    CfgMessage {
        name: "PRT",
        id: 0x00,
        fields: &[U1, U1, U2, U4, U4, U2, U2, U2, U2],
    },
    CfgMessage {
        name: "PWR",
        id: 0x57,
        fields: &[U1, U1, U1, U1, U4],
    },
    CfgMessage {
        name: "RATE",
        id: 0x08,
        fields: &[U2, U2, U2],
    },
    CfgMessage {
        name: "RINV",
        id: 0x34,
        fields: &[U1, S32],
    },
    CfgMessage {
        name: "RST",
        id: 0x04,
        fields: &[U2, U1, U1],
    },
    CfgMessage {
        name: "RXM",
        id: 0x11,
        fields: &[U1, U1],
    },
    CfgMessage {
        name: "SBAS",
        id: 0x16,
        fields: &[U1, U1, U1, U1, U4],
    },
    CfgMessage {
        name: "SMGR",
        id: 0x62,
        fields: &[U1, U1, U2, U2, U2, U2, U2, U2, U2, U2, U4],
    },
    CfgMessage {
        name: "TMODE",
        id: 0x1D,
        fields: &[U4, I4, I4, I4, U4, U4, U4],
    },
    CfgMessage {
        name: "TMODE2",
        id: 0x3D,
        fields: &[U1, U1, U2, I4, I4, I4, U4, U4, U4],
    },
    CfgMessage {
        name: "TMODE3",
        id: 0x71,
        fields: &[U1, U1, U2, I4, I4, I4, I1, I1, I1, U1, U4, U4, U4],
    },
    CfgMessage {
        name: "TP",
        id: 0x07,
        fields: &[U4, U4, I1, U1, U1, U1, I2, I2, I4],
    },
    CfgMessage {
        name: "TP5",
        id: 0x31,
        fields: &[U1, U1, U2, I2, I2, U4, U4, U4, U4, I4, U4],
    },
    CfgMessage {
        name: "USB",
        id: 0x1B,
        fields: &[U2, U2, U2, U2, U2, U2, S32, S32, S32],
    },
    CfgMessage {
        name: "VALDEL",
        id: 0x8C,
        fields: &[U1, U1, U1, U1, U4],
    },
    CfgMessage {
        name: "VALGET",
        id: 0x8B,
        fields: &[U1, U1, U2, U4],
    },
    CfgMessage {
        name: "VALSET",
        id: VALSET_ID,
        // resolved against the VALSET key catalogue instead
        fields: &[],
    },
];

/// Generates one configuration frame from a textual command.
///
/// The command is the submessage name, `CFG-` prefix included,
/// followed by space separated field values. Values left out encode
/// as zero: the payload signature, not the token count, decides the
/// frame layout.
///
/// ```
/// use ubx::prelude::generate;
///
/// let frame = generate("CFG-MSG 1 1 0 0 0 0 0 0").unwrap();
/// assert_eq!(frame.len(), 16);
/// assert_eq!(&frame[..4], &[0xB5, 0x62, 0x06, 0x01]);
/// ```
pub fn generate(command: &str) -> Result<Vec<u8>, GenerationError> {
    let tokens: Vec<&str> = command.split_whitespace().take(MAX_TOKENS).collect();

    let name = tokens
        .first()
        .and_then(|token| token.strip_prefix("CFG-"))
        .ok_or(GenerationError::NotCfgCommand)?;

    let message = CFG_MESSAGES
        .binary_search_by(|message| message.name.cmp(name))
        .map(|index| &CFG_MESSAGES[index])
        .map_err(|_| GenerationError::UnknownCommand(name.to_string()))?;

    let mut frame = vec![SYNC_1, SYNC_2, CFG_CLASS, message.id, 0, 0];

    if message.id == VALSET_ID {
        write_valset(&mut frame, &tokens[1..])?;
    } else {
        let mut values = tokens[1..].iter();
        for field in message.fields {
            write_field(&mut frame, *field, values.next().copied());
        }
    }

    // patch the length, then seal
    let payload_len = (frame.len() - 6) as u16;
    frame[4..6].copy_from_slice(&payload_len.to_le_bytes());
    frame.extend([0, 0]);
    checksum::seal(&mut frame);

    Ok(frame)
}

/// CFG-VALSET payload: fixed header then exactly one (key, value).
fn write_valset(frame: &mut Vec<u8>, tokens: &[&str]) -> Result<(), GenerationError> {
    let (name, value) = match tokens {
        [name, value, ..] => (*name, *value),
        _ => return Err(GenerationError::IncompleteValset),
    };

    let key = VALSET_KEYS
        .binary_search_by(|key| key.name.cmp(name))
        .map(|index| &VALSET_KEYS[index])
        .map_err(|_| GenerationError::UnknownKey(name.to_string()))?;

    frame.extend(VALSET_HEADER);
    frame.extend(key.id.to_le_bytes());

    match key.kind {
        KeyType::R4 => frame.extend((parse_float(value) as f32).to_le_bytes()),
        KeyType::R8 => frame.extend(parse_float(value).to_le_bytes()),
        kind => {
            let raw = parse_integer(value) as u64;
            frame.extend(&raw.to_le_bytes()[..kind.size()]);
        },
    }
    Ok(())
}

/// Encodes one payload field from its token, zero when absent.
fn write_field(frame: &mut Vec<u8>, field: FieldType, token: Option<&str>) {
    let integer = token.map(parse_integer).unwrap_or(0);

    match field {
        FieldType::U1 => frame.push(integer as u8),
        FieldType::I1 => frame.push(integer as i8 as u8),
        FieldType::U2 => frame.extend((integer as u16).to_le_bytes()),
        FieldType::I2 => frame.extend((integer as i16).to_le_bytes()),
        FieldType::U4 => frame.extend((integer as u32).to_le_bytes()),
        FieldType::I4 => frame.extend((integer as i32).to_le_bytes()),
        FieldType::R4 => {
            let float = token.map(parse_float).unwrap_or(0.0);
            frame.extend((float as f32).to_le_bytes());
        },
        FieldType::R8 => {
            let float = token.map(parse_float).unwrap_or(0.0);
            frame.extend(float.to_le_bytes());
        },
        FieldType::S32 => {
            let mut padded = [0_u8; 32];
            if let Some(token) = token {
                let ascii = token.as_bytes();
                let len = ascii.len().min(32);
                padded[..len].copy_from_slice(&ascii[..len]);
            }
            frame.extend(padded);
        },
    }
}

/// Integer token, `0x` prefixed values accepted. Malformed tokens
/// encode as zero, they never terminate the field walk.
fn parse_integer(token: &str) -> i64 {
    if let Some(hex) = token.strip_prefix("0x").or_else(|| token.strip_prefix("0X")) {
        i64::from_str_radix(hex, 16).unwrap_or(0)
    } else {
        token.parse().unwrap_or(0)
    }
}

fn parse_float(token: &str) -> f64 {
    token.parse().unwrap_or(0.0)
}
