//! Galileo I/NAV: half-page validation, word reassembly and
//! ephemeris reconstruction.
//!
//! Every page arrives as two 16-byte half pages (even then odd),
//! big endian within each 4-byte chunk. A page is accepted once the
//! even/odd sequence and the CRC-24Q over the reconstructed 196-bit
//! field both check out. Words 0..=6 accumulate per satellite; the
//! ephemeris decodes when all seven have been seen.

use crate::{
    bits::{set_unsigned, signed, unsigned},
    crc::crc24q,
    decoder::{Decoder, Status},
    errors::DecodeError,
    navigation::{
        Ephemeris, Subframes, P2_19, P2_29, P2_31, P2_32, P2_33, P2_34, P2_43, P2_46, P2_5,
        P2_59, SC2RAD,
    },
    time::reconcile_week,
};

use gnss::prelude::{Constellation, SV};
use hifitime::{Epoch, TimeScale};
use log::trace;

/// GST week offset against the continuous GPS week numbering.
const GST_WEEK_ROLLOVER: u32 = 1024;

/// Builds the [Epoch] for (GST week, time of week).
fn epoch_from_gst(week: u32, tow_s: f64) -> Epoch {
    Epoch::from_time_of_week(week, (tow_s * 1.0E9).round() as u64, TimeScale::GST)
}

impl Decoder {
    /// Validates one I/NAV page pair and stores its word in the
    /// satellite scratch area.
    pub(crate) fn decode_inav_page(&mut self, sv: SV, offset: usize) -> Result<Status, DecodeError> {
        let frame = self.frame();
        if frame.len() < offset + 38 {
            return Err(DecodeError::PayloadUnderflow {
                len: frame.len(),
                expected: offset + 38,
            });
        }

        // undo the per chunk byte swapping
        let mut buff = [0_u8; 32];
        for word in 0..8 {
            for byte in 0..4 {
                buff[word * 4 + byte] = frame[offset + word * 4 + 3 - byte];
            }
        }

        let even = &buff[..16];
        let odd = &buff[16..];

        // alert pages are skipped
        if unsigned(even, 1, 1) == 1 || unsigned(odd, 1, 1) == 1 {
            return Ok(Status::NeedMore);
        }

        // even part first, odd part second
        if unsigned(even, 0, 1) != 0 || unsigned(odd, 0, 1) != 1 {
            return Err(DecodeError::InavPageSequence(sv));
        }

        // crc over 4 pad + 114 + 82 bits
        let mut crc_buff = [0_u8; 26];
        for byte in 0..15 {
            set_unsigned(&mut crc_buff, 4 + 8 * byte, 8, unsigned(even, 8 * byte, 8));
        }
        for byte in 0..11 {
            set_unsigned(&mut crc_buff, 118 + 8 * byte, 8, unsigned(odd, 8 * byte, 8));
        }
        if crc24q(&crc_buff[..25], 0) != unsigned(odd, 82, 24) {
            return Err(DecodeError::InavCrc(sv));
        }

        let word_type = unsigned(even, 2, 6) as usize;
        if word_type > 6 {
            // only ephemeris, iono and utc words retained
            return Ok(Status::NeedMore);
        }

        let subframes = self.subframes_mut(sv);

        // word 2 starts a new nominal sequence
        if word_type == 2 {
            subframes.data[Subframes::GAL_SEEN_OFFSET] = 0;
        }

        // 112 bits from the even part, 16 from the odd part
        let mut position = word_type * Subframes::GAL_WORD_BYTES;
        for byte in 0..14 {
            subframes.data[position] = unsigned(even, 2 + 8 * byte, 8) as u8;
            position += 1;
        }
        for byte in 0..2 {
            subframes.data[position] = unsigned(odd, 2 + 8 * byte, 8) as u8;
            position += 1;
        }

        subframes.data[Subframes::GAL_SEEN_OFFSET] |= 1 << word_type;
        if subframes.data[Subframes::GAL_SEEN_OFFSET] != 0x7F {
            return Ok(Status::NeedMore);
        }

        if self.options.galileo_fnav {
            // caller works from F/NAV, do not publish I/NAV
            return Ok(Status::NeedMore);
        }

        let words: [u8; 112] = self.subframes_mut(sv).data[..112].try_into().unwrap();
        let ephemeris = match decode_inav_words(&words) {
            Some(ephemeris) => ephemeris,
            None => return Ok(Status::NeedMore),
        };

        // broadcast svid must match the transmitting satellite
        if ephemeris.sv != sv {
            return Err(DecodeError::InvalidSatellite {
                constellation: Constellation::Galileo,
                prn: ephemeris.sv.prn,
            });
        }

        self.publish_ephemeris(ephemeris)
    }
}

/// Decodes the accumulated I/NAV words 0..=6 (128 bit stride each)
/// into an [Ephemeris].
fn decode_inav_words(buff: &[u8]) -> Option<Ephemeris> {
    let mut word_types = [0_u32; 6];
    let mut iod_nav = [0_u32; 4];

    // word type 0: time status and week
    word_types[0] = unsigned(buff, 0, 6);
    let time_field = unsigned(buff, 6, 2);
    let week = unsigned(buff, 96, 12);

    // word type 1: orbit, first half
    word_types[1] = unsigned(buff, 128, 6);
    iod_nav[0] = unsigned(buff, 134, 10);
    let toe_s = unsigned(buff, 144, 14) as f64 * 60.0;
    let m0 = signed(buff, 158, 32) as f64 * P2_31 * SC2RAD;
    let e = unsigned(buff, 190, 32) as f64 * P2_33;
    let sqrt_a = unsigned(buff, 222, 32) as f64 * P2_19;

    // word type 2: orbit, second half
    word_types[2] = unsigned(buff, 256, 6);
    iod_nav[1] = unsigned(buff, 262, 10);
    let omega0 = signed(buff, 272, 32) as f64 * P2_31 * SC2RAD;
    let i0 = signed(buff, 304, 32) as f64 * P2_31 * SC2RAD;
    let omega = signed(buff, 336, 32) as f64 * P2_31 * SC2RAD;
    let i_dot = signed(buff, 368, 14) as f64 * P2_43 * SC2RAD;

    // word type 3: harmonic corrections
    word_types[3] = unsigned(buff, 384, 6);
    iod_nav[2] = unsigned(buff, 390, 10);
    let omega_dot = signed(buff, 400, 24) as f64 * P2_43 * SC2RAD;
    let delta_n = signed(buff, 424, 16) as f64 * P2_43 * SC2RAD;
    let cuc = signed(buff, 440, 16) as f64 * P2_29;
    let cus = signed(buff, 456, 16) as f64 * P2_29;
    let crc = signed(buff, 472, 16) as f64 * P2_5;
    let crs = signed(buff, 488, 16) as f64 * P2_5;
    let sva = unsigned(buff, 504, 8) as u8;

    // word type 4: svid, clock
    word_types[4] = unsigned(buff, 512, 6);
    iod_nav[3] = unsigned(buff, 518, 10);
    let svid = unsigned(buff, 528, 6) as u8;
    let cic = signed(buff, 534, 16) as f64 * P2_29;
    let cis = signed(buff, 550, 16) as f64 * P2_29;
    let toc_s = unsigned(buff, 566, 14) as f64 * 60.0;
    let af0 = signed(buff, 580, 31) as f64 * P2_34;
    let af1 = signed(buff, 611, 21) as f64 * P2_46;
    let af2 = signed(buff, 632, 6) as f64 * P2_59;

    // word type 5: group delays, health, time again
    word_types[5] = unsigned(buff, 640, 6);
    let bgd_e5a = signed(buff, 687, 10) as f64 * P2_32;
    let bgd_e5b = signed(buff, 697, 10) as f64 * P2_32;
    let e5b_hs = unsigned(buff, 707, 2) as u16;
    let e1b_hs = unsigned(buff, 709, 2) as u16;
    let e5b_dvs = unsigned(buff, 711, 1) as u16;
    let e1b_dvs = unsigned(buff, 712, 1) as u16;
    let tow_s = unsigned(buff, 720, 20) as f64;

    for (index, word_type) in word_types.iter().enumerate() {
        if *word_type != index as u32 {
            trace!("inav word sequence error");
            return None;
        }
    }
    // GST time status must be resolved
    if time_field != 2 {
        return None;
    }
    if iod_nav.iter().any(|iod| *iod != iod_nav[0]) {
        trace!("inav iod-nav mismatch");
        return None;
    }
    if !(1..=36).contains(&svid) {
        return None;
    }

    let ttr = epoch_from_gst(week, tow_s);
    let week_adjusted = reconcile_week(week, toe_s, tow_s);

    Some(Ephemeris {
        sv: SV::new(Constellation::Galileo, svid),
        iode: iod_nav[0],
        iodc: iod_nav[0],
        sva,
        svh: (e5b_hs << 7) | (e5b_dvs << 6) | (e1b_hs << 1) | e1b_dvs,
        week: week_adjusted + GST_WEEK_ROLLOVER,
        // data source: I/NAV, E5b clock and tgd
        code: (1 << 0) | (1 << 9),
        flag: 0,
        toe: epoch_from_gst(week_adjusted, toe_s),
        toc: epoch_from_gst(week_adjusted, toc_s),
        ttr,
        a: sqrt_a * sqrt_a,
        e,
        i0,
        omega0,
        omega,
        m0,
        delta_n,
        omega_dot,
        i_dot,
        crc,
        crs,
        cuc,
        cus,
        cic,
        cis,
        toe_s,
        fit: 0.0,
        af0,
        af1,
        af2,
        tgd: [bgd_e5a, bgd_e5b],
    })
}
