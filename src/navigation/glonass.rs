//! GLONASS navigation strings: KX Hamming verification, per frame
//! reassembly of strings 1..=4 and ephemeris reconstruction.
//!
//! Strings arrive as four 4-byte chunks, big endian within each
//! chunk. String bits follow the ICD numbering: bit 85 first on the
//! air (the idle chip), data on bits 84..9, the eight check bits of
//! the KX code on bits 8..1.

use crate::{
    bits::{sign_magnitude, unsigned},
    decoder::{Decoder, Status},
    errors::DecodeError,
    navigation::{GlonassEphemeris, Subframes, P2_11, P2_20, P2_30, P2_40},
    signal::satellite,
    time::{gpst_week_tow, epoch_from_gpst, gpst_utc_offset_s, seconds},
};

use gnss::prelude::{Constellation, SV};
use hifitime::Epoch;
use log::trace;

/// Moscow decree time offset against UTC, in seconds.
const MOSCOW_UTC_OFFSET_S: f64 = 10_800.0;

/// KX code verification sets: data bit numbers checked by β1..β7.
const KX_CHECK_1: &[u8] = &[
    9, 10, 12, 13, 15, 17, 19, 20, 22, 24, 26, 28, 30, 32, 34, 35, 37, 39, 41, 43, 45, 47, 49, 51,
    53, 55, 57, 59, 61, 63, 65, 66, 68, 70, 72, 74, 76, 78, 80, 82, 84,
];
const KX_CHECK_2: &[u8] = &[
    9, 11, 12, 14, 15, 18, 19, 21, 22, 25, 26, 29, 30, 33, 34, 36, 37, 40, 41, 44, 45, 48, 49, 52,
    53, 56, 57, 60, 61, 64, 65, 67, 68, 71, 72, 75, 76, 79, 80, 83, 84,
];
const KX_CHECK_3: &[u8] = &[
    10, 11, 12, 16, 17, 18, 19, 23, 24, 25, 26, 31, 32, 33, 34, 38, 39, 40, 41, 46, 47, 48, 49,
    54, 55, 56, 57, 62, 63, 64, 65, 69, 70, 71, 72, 77, 78, 79, 80, 85,
];
const KX_CHECK_4: &[u8] = &[
    13, 14, 15, 16, 17, 18, 19, 27, 28, 29, 30, 31, 32, 33, 34, 42, 43, 44, 45, 46, 47, 48, 49,
    58, 59, 60, 61, 62, 63, 64, 65, 73, 74, 75, 76, 77, 78, 79, 80,
];
const KX_CHECK_5: &[u8] = &[
    20, 21, 22, 23, 24, 25, 26, 27, 28, 29, 30, 31, 32, 33, 34, 50, 51, 52, 53, 54, 55, 56, 57,
    58, 59, 60, 61, 62, 63, 64, 65, 81, 82, 83, 84, 85,
];

/// ICD bit number to buffer bit position.
fn string_bit(buff: &[u8], number: u8) -> u32 {
    unsigned(buff, 85 - number as usize, 1)
}

fn xor_bits(buff: &[u8], numbers: impl Iterator<Item = u8>) -> u32 {
    numbers.fold(0, |parity, number| parity ^ string_bit(buff, number))
}

/// KX (modified Hamming) verification of one 85-bit string.
pub(crate) fn test_string(buff: &[u8]) -> bool {
    let checks = [
        (1, KX_CHECK_1),
        (2, KX_CHECK_2),
        (3, KX_CHECK_3),
        (4, KX_CHECK_4),
        (5, KX_CHECK_5),
    ];
    for (beta, set) in checks {
        if string_bit(buff, beta) != xor_bits(buff, set.iter().copied()) {
            return false;
        }
    }
    if string_bit(buff, 6) != xor_bits(buff, 35..=65) {
        return false;
    }
    if string_bit(buff, 7) != xor_bits(buff, 66..=85) {
        return false;
    }
    // overall parity
    xor_bits(buff, 1..=85) == 0
}

/// Solves the eight check bits so [test_string] accepts the data
/// bits currently in `buff`.
#[cfg(test)]
pub(crate) fn seal_string(buff: &mut [u8]) {
    let set_bit = |buff: &mut [u8], number: u8, value: u32| {
        crate::bits::set_unsigned(buff, 85 - number as usize, 1, value);
    };

    set_bit(buff, 1, xor_bits(buff, KX_CHECK_1.iter().copied()));
    set_bit(buff, 2, xor_bits(buff, KX_CHECK_2.iter().copied()));
    set_bit(buff, 3, xor_bits(buff, KX_CHECK_3.iter().copied()));
    set_bit(buff, 4, xor_bits(buff, KX_CHECK_4.iter().copied()));
    set_bit(buff, 5, xor_bits(buff, KX_CHECK_5.iter().copied()));
    set_bit(buff, 6, xor_bits(buff, 35..=65));
    set_bit(buff, 7, xor_bits(buff, 66..=85));

    let parity = xor_bits(buff, (1..=7).chain(9..=85));
    set_bit(buff, 8, parity);
}

impl Decoder {
    /// Validates one GLONASS string, maintains the per frame string
    /// store and attempts the ephemeris on string 4.
    pub(crate) fn decode_glonass_string(
        &mut self,
        sv: SV,
        offset: usize,
        freq_id: u8,
    ) -> Result<Status, DecodeError> {
        let frame = self.frame();
        if frame.len() < offset + 18 {
            return Err(DecodeError::PayloadUnderflow {
                len: frame.len(),
                expected: offset + 18,
            });
        }

        // undo the per chunk byte swapping
        let mut buff = [0_u8; 16];
        for word in 0..4 {
            for byte in 0..4 {
                buff[word * 4 + byte] = frame[offset + word * 4 + 3 - byte];
            }
        }

        if !test_string(&buff) {
            return Err(DecodeError::GlonassHamming(sv));
        }

        let number = unsigned(&buff, 1, 4) as usize;
        if !(1..=15).contains(&number) {
            return Err(DecodeError::GlonassStringNumber(sv));
        }

        let subframes = self.subframes_mut(sv);

        // a frame id change obsoletes the strings gathered so far,
        // the new string included when it arrived out of order
        let tag = Subframes::GLO_FRAME_ID_OFFSET;
        if subframes.data[tag] != buff[12] || subframes.data[tag + 1] != buff[13] {
            for slot in 0..4 {
                let base = slot * Subframes::GLO_STRING_BYTES;
                subframes.data[base..base + Subframes::GLO_STRING_BYTES].fill(0);
            }
            subframes.data[tag] = buff[12];
            subframes.data[tag + 1] = buff[13];
        }

        if number <= 4 {
            let base = (number - 1) * Subframes::GLO_STRING_BYTES;
            subframes.data[base..base + Subframes::GLO_STRING_BYTES]
                .copy_from_slice(&buff[..Subframes::GLO_STRING_BYTES]);
        }
        if number != 4 {
            return Ok(Status::NeedMore);
        }

        // strings flow relative to the receiver day, time is required
        let time = match self.time {
            Some(time) => time,
            None => {
                trace!("{}: strings before first time fix", sv);
                return Ok(Status::NeedMore);
            },
        };

        let data: [u8; 40] = self.subframes_mut(sv).data[..40].try_into().unwrap();
        let mut ephemeris = match decode_strings(&data, time) {
            Some(ephemeris) => ephemeris,
            None => return Ok(Status::NeedMore),
        };

        if ephemeris.sv != sv {
            trace!("{}: slot number mismatch ({})", sv, ephemeris.sv);
            return Ok(Status::NeedMore);
        }

        ephemeris.frequency_channel = (freq_id as i16 - 7) as i8;

        if !self.options.ephemeris_all {
            if let Some(stored) = self.glonass_ephemerides.get(&sv.prn) {
                if stored.iode == ephemeris.iode {
                    return Ok(Status::NeedMore);
                }
            }
        }

        self.glonass_ephemerides.insert(sv.prn, ephemeris);
        self.ephemeris_sv = Some(sv);
        Ok(Status::Ephemeris)
    }
}

/// Reconstructs the ephemeris from strings 1..=4, 10 bytes each.
fn decode_strings(buff: &[u8], time: Epoch) -> Option<GlonassEphemeris> {
    let mut ephemeris = GlonassEphemeris::default();

    // string 1
    let number1 = unsigned(buff, 1, 4);
    let tk_h = unsigned(buff, 9, 5) as f64;
    let tk_m = unsigned(buff, 14, 6) as f64;
    let tk_s = unsigned(buff, 20, 1) as f64 * 30.0;
    ephemeris.velocity_m_s[0] = sign_magnitude(buff, 21, 24) * P2_20 * 1.0E3;
    ephemeris.acceleration_m_s2[0] = sign_magnitude(buff, 45, 5) * P2_30 * 1.0E3;
    ephemeris.position_m[0] = sign_magnitude(buff, 50, 27) * P2_11 * 1.0E3;

    // string 2
    let number2 = unsigned(buff, 81, 4);
    ephemeris.svh = unsigned(buff, 85, 3) as u8;
    let tb = unsigned(buff, 89, 7);
    ephemeris.velocity_m_s[1] = sign_magnitude(buff, 101, 24) * P2_20 * 1.0E3;
    ephemeris.acceleration_m_s2[1] = sign_magnitude(buff, 125, 5) * P2_30 * 1.0E3;
    ephemeris.position_m[1] = sign_magnitude(buff, 130, 27) * P2_11 * 1.0E3;

    // string 3
    let number3 = unsigned(buff, 161, 4);
    ephemeris.gamma = sign_magnitude(buff, 166, 11) * P2_40;
    ephemeris.velocity_m_s[2] = sign_magnitude(buff, 181, 24) * P2_20 * 1.0E3;
    ephemeris.acceleration_m_s2[2] = sign_magnitude(buff, 205, 5) * P2_30 * 1.0E3;
    ephemeris.position_m[2] = sign_magnitude(buff, 210, 27) * P2_11 * 1.0E3;

    // string 4
    let number4 = unsigned(buff, 241, 4);
    ephemeris.tau_s = sign_magnitude(buff, 245, 22) * P2_30;
    ephemeris.delta_tau_s = sign_magnitude(buff, 267, 5) * P2_30;
    ephemeris.age_days = unsigned(buff, 272, 5) as u8;
    ephemeris.sva = unsigned(buff, 292, 4) as u8;
    let slot = unsigned(buff, 310, 5) as u8;

    if number1 != 1 || number2 != 2 || number3 != 3 || number4 != 4 {
        trace!("glonass string sequence error");
        return None;
    }

    ephemeris.sv = satellite(Constellation::Glonass, slot).ok()?;
    ephemeris.iode = tb;

    // receiver day in the UTC-shifted frame
    let utc_offset = gpst_utc_offset_s(time);
    let (week, mut tow_s) = gpst_week_tow(time - seconds(utc_offset));
    let tod_s = tow_s % 86_400.0;
    tow_s -= tod_s;

    // frame time, moscow decree time to utc
    let mut tof_s = tk_h * 3600.0 + tk_m * 60.0 + tk_s - MOSCOW_UTC_OFFSET_S;
    if tof_s < tod_s - 43_200.0 {
        tof_s += 86_400.0;
    } else if tof_s > tod_s + 43_200.0 {
        tof_s -= 86_400.0;
    }
    ephemeris.tof = epoch_from_gpst(week, tow_s + tof_s) + seconds(utc_offset);

    // reference time, 15 minute grid, moscow decree time to utc
    let mut toe_s = tb as f64 * 900.0 - MOSCOW_UTC_OFFSET_S;
    if toe_s < tod_s - 43_200.0 {
        toe_s += 86_400.0;
    } else if toe_s > tod_s + 43_200.0 {
        toe_s -= 86_400.0;
    }
    ephemeris.toe = epoch_from_gpst(week, tow_s + toe_s) + seconds(utc_offset);

    Some(ephemeris)
}
