//! BeiDou D1 (MEO/IGSO) and D2 (GEO) navigation messages.
//!
//! Ten 30-bit words per subframe, taken from the low 30 bits of each
//! receiver word. D1 assembles subframes 1..=3, D2 assembles pages
//! 1..=10 of subframe 1. All epochs are broadcast in BDT.

use crate::{
    bits::{
        merge_signed, merge_unsigned, set_unsigned, signed, signed2, signed3, unsigned, unsigned2,
        unsigned3,
    },
    bytes::read_u32,
    decoder::{Decoder, Status},
    errors::DecodeError,
    navigation::{Ephemeris, Subframes, P2_19, P2_31, P2_33, P2_43, P2_50, P2_6, P2_66, SC2RAD},
};

use gnss::prelude::SV;
use hifitime::{Epoch, TimeScale};
use log::trace;

/// Builds the [Epoch] for (BDT week, time of week).
fn epoch_from_bdt(week: u32, tow_s: f64) -> Epoch {
    Epoch::from_time_of_week(week, (tow_s * 1.0E9).round() as u64, TimeScale::BDT)
}

/// True for the geostationary satellites, which broadcast D2.
fn is_geo(prn: u8) -> bool {
    !(6..=58).contains(&prn)
}

impl Decoder {
    /// Stores one D1/D2 frame and attempts the ephemeris once the
    /// publication frame (D1 subframe 3, D2 page 10) is in.
    pub(crate) fn decode_bds_words(&mut self, sv: SV, offset: usize) -> Result<Status, DecodeError> {
        let frame = self.frame();
        if frame.len() < offset + 42 {
            return Err(DecodeError::PayloadUnderflow {
                len: frame.len(),
                expected: offset + 42,
            });
        }

        let mut words = [0_u32; 10];
        for (index, word) in words.iter_mut().enumerate() {
            *word = read_u32(frame, offset + 4 * index) & 0x3FFF_FFFF;
        }

        let id = ((words[0] >> 12) & 0x7) as u8;
        if !(1..=5).contains(&id) {
            return Err(DecodeError::SubframeId(sv, id));
        }

        if !is_geo(sv.prn) {
            // D1: subframes 1..=5, ephemeris spread over 1..=3
            let subframes = self.subframes_mut(sv);
            let base = (id as usize - 1) * Subframes::BDS_SUBFRAME_BYTES;
            for (index, word) in words.iter().enumerate() {
                set_unsigned(
                    &mut subframes.data[base..base + Subframes::BDS_SUBFRAME_BYTES],
                    index * 30,
                    30,
                    *word,
                );
            }
            if id != 3 {
                return Ok(Status::NeedMore);
            }

            let data = &self.subframes_mut(sv).data;
            match decode_d1(data, sv) {
                Some(ephemeris) => self.publish_ephemeris(ephemeris),
                None => Ok(Status::NeedMore),
            }
        } else {
            // D2: ephemeris on subframe 1, pages 1..=10
            if id != 1 {
                return Ok(Status::NeedMore);
            }
            let page = ((words[1] >> 14) & 0xF) as u8;
            if !(1..=10).contains(&page) {
                return Err(DecodeError::SubframeId(sv, page));
            }

            let subframes = self.subframes_mut(sv);
            let base = (page as usize - 1) * Subframes::BDS_SUBFRAME_BYTES;
            for (index, word) in words.iter().enumerate() {
                set_unsigned(
                    &mut subframes.data[base..base + Subframes::BDS_SUBFRAME_BYTES],
                    index * 30,
                    30,
                    *word,
                );
            }
            if page != 10 {
                return Ok(Status::NeedMore);
            }

            let data = &self.subframes_mut(sv).data;
            match decode_d2(data, sv) {
                Some(ephemeris) => self.publish_ephemeris(ephemeris),
                None => Ok(Status::NeedMore),
            }
        }
    }
}

/// D1 ephemeris: subframes 1..=3 at 38 byte strides.
fn decode_d1(buff: &[u8], sv: SV) -> Option<Ephemeris> {
    // subframe 1
    let i = 0;
    let frame1 = unsigned(buff, i + 15, 3);
    let sow1 = unsigned2(buff, i + 18, 8, i + 30, 12);
    let svh = unsigned(buff, i + 42, 1) as u16;
    let iodc = unsigned(buff, i + 43, 5);
    let sva = unsigned(buff, i + 48, 4) as u8;
    let week = unsigned(buff, i + 60, 13);
    let toc_s = unsigned2(buff, i + 73, 9, i + 90, 8) as f64 * 8.0;
    let tgd1 = signed(buff, i + 98, 10) as f64 * 0.1E-9;
    let tgd2 = signed2(buff, i + 108, 4, i + 120, 6) as f64 * 0.1E-9;
    let af2 = signed(buff, i + 214, 11) as f64 * P2_66;
    let af0 = signed2(buff, i + 225, 7, i + 240, 17) as f64 * P2_33;
    let af1 = signed2(buff, i + 257, 5, i + 270, 17) as f64 * P2_50;
    let iode = unsigned(buff, i + 287, 5);

    // subframe 2
    let i = 8 * Subframes::BDS_SUBFRAME_BYTES;
    let frame2 = unsigned(buff, i + 15, 3);
    let sow2 = unsigned2(buff, i + 18, 8, i + 30, 12);
    let delta_n = signed2(buff, i + 42, 10, i + 60, 6) as f64 * P2_43 * SC2RAD;
    let cuc = signed2(buff, i + 66, 16, i + 90, 2) as f64 * P2_31;
    let m0 = signed2(buff, i + 92, 20, i + 120, 12) as f64 * P2_31 * SC2RAD;
    let e = unsigned2(buff, i + 132, 10, i + 150, 22) as f64 * P2_33;
    let cus = signed(buff, i + 180, 18) as f64 * P2_31;
    let crc = signed2(buff, i + 198, 4, i + 210, 14) as f64 * P2_6;
    let crs = signed2(buff, i + 224, 8, i + 240, 10) as f64 * P2_6;
    let sqrt_a = unsigned2(buff, i + 250, 12, i + 270, 20) as f64 * P2_19;
    let toe_msb = unsigned(buff, i + 290, 2);

    // subframe 3
    let i = 16 * Subframes::BDS_SUBFRAME_BYTES;
    let frame3 = unsigned(buff, i + 15, 3);
    let sow3 = unsigned2(buff, i + 18, 8, i + 30, 12);
    let toe_lsb = unsigned2(buff, i + 42, 10, i + 60, 5);
    let i0 = signed2(buff, i + 65, 17, i + 90, 15) as f64 * P2_31 * SC2RAD;
    let cic = signed2(buff, i + 105, 7, i + 120, 11) as f64 * P2_31;
    let omega_dot = signed2(buff, i + 131, 11, i + 150, 13) as f64 * P2_43 * SC2RAD;
    let cis = signed2(buff, i + 163, 9, i + 180, 9) as f64 * P2_31;
    let i_dot = signed2(buff, i + 189, 13, i + 210, 1) as f64 * P2_43 * SC2RAD;
    let omega0 = signed2(buff, i + 211, 21, i + 240, 11) as f64 * P2_31 * SC2RAD;
    let omega = signed2(buff, i + 251, 11, i + 270, 21) as f64 * P2_31 * SC2RAD;

    // frame numbers and second counts must line up
    if frame1 != 1 || frame2 != 2 || frame3 != 3 {
        trace!("{}: d1 subframe sequence error", sv);
        return None;
    }
    if sow2 != sow1 + 6 || sow3 != sow2 + 6 {
        trace!("{}: d1 sow sequence error", sv);
        return None;
    }

    let toe_s = merge_unsigned(toe_msb, toe_lsb, 15) as f64 * 8.0;

    Some(Ephemeris {
        sv,
        iode,
        iodc,
        sva,
        svh,
        week,
        code: 0,
        flag: 0,
        toe: epoch_from_bdt(week, toe_s),
        toc: epoch_from_bdt(week, toc_s),
        ttr: epoch_from_bdt(week, sow1 as f64),
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
        tgd: [tgd1, tgd2],
    })
}

/// D2 ephemeris: subframe 1 pages 1..=10 at 38 byte strides
/// (page 2 carries no ephemeris field).
fn decode_d2(buff: &[u8], sv: SV) -> Option<Ephemeris> {
    let stride = 8 * Subframes::BDS_SUBFRAME_BYTES;

    // page 1
    let i = 0;
    let page1 = unsigned(buff, i + 42, 4);
    let sow1 = unsigned2(buff, i + 18, 8, i + 30, 12);
    let svh = unsigned(buff, i + 46, 1) as u16;
    let iodc = unsigned(buff, i + 47, 5);
    let sva = unsigned(buff, i + 60, 4) as u8;
    let week = unsigned(buff, i + 64, 13);
    let toc_s = unsigned2(buff, i + 77, 5, i + 90, 12) as f64 * 8.0;
    let tgd1 = signed(buff, i + 102, 10) as f64 * 0.1E-9;
    let tgd2 = signed(buff, i + 120, 10) as f64 * 0.1E-9;

    // page 3
    let i = 2 * stride;
    let page3 = unsigned(buff, i + 42, 4);
    let sow3 = unsigned2(buff, i + 18, 8, i + 30, 12);
    let af0 = signed2(buff, i + 100, 12, i + 120, 12) as f64 * P2_33;
    let af1_msb = signed(buff, i + 132, 4);

    // page 4
    let i = 3 * stride;
    let page4 = unsigned(buff, i + 42, 4);
    let sow4 = unsigned2(buff, i + 18, 8, i + 30, 12);
    let af1_lsb = unsigned2(buff, i + 46, 6, i + 60, 12);
    let af2 = signed2(buff, i + 72, 10, i + 90, 1) as f64 * P2_66;
    let iode = unsigned(buff, i + 91, 5);
    let delta_n = signed(buff, i + 96, 16) as f64 * P2_43 * SC2RAD;
    let cuc_msb = signed(buff, i + 120, 14);

    // page 5
    let i = 4 * stride;
    let page5 = unsigned(buff, i + 42, 4);
    let sow5 = unsigned2(buff, i + 18, 8, i + 30, 12);
    let cuc_lsb = unsigned(buff, i + 46, 4);
    let m0 = signed3(buff, i + 50, 2, i + 60, 22, i + 90, 8) as f64 * P2_31 * SC2RAD;
    let cus = signed2(buff, i + 98, 14, i + 120, 4) as f64 * P2_31;
    let e_msb = unsigned(buff, i + 124, 10);

    // page 6
    let i = 5 * stride;
    let page6 = unsigned(buff, i + 42, 4);
    let sow6 = unsigned2(buff, i + 18, 8, i + 30, 12);
    let e_lsb = unsigned2(buff, i + 46, 6, i + 60, 16);
    let sqrt_a = unsigned3(buff, i + 76, 6, i + 90, 22, i + 120, 4) as f64 * P2_19;
    let cic_msb = signed(buff, i + 124, 10);

    // page 7
    let i = 6 * stride;
    let page7 = unsigned(buff, i + 42, 4);
    let sow7 = unsigned2(buff, i + 18, 8, i + 30, 12);
    let cic_lsb = unsigned2(buff, i + 46, 6, i + 60, 2);
    let cis = signed(buff, i + 62, 18) as f64 * P2_31;
    let toe_s = unsigned2(buff, i + 80, 2, i + 90, 15) as f64 * 8.0;
    let i0_msb = signed2(buff, i + 105, 6, i + 120, 15);

    // page 8
    let i = 7 * stride;
    let page8 = unsigned(buff, i + 42, 4);
    let sow8 = unsigned2(buff, i + 18, 8, i + 30, 12);
    let i0_lsb = unsigned2(buff, i + 46, 6, i + 60, 5);
    let crc = signed2(buff, i + 65, 17, i + 90, 1) as f64 * P2_6;
    let crs = signed(buff, i + 91, 18) as f64 * P2_6;
    let omega_dot_msb = signed2(buff, i + 109, 5, i + 120, 14);

    // page 9
    let i = 8 * stride;
    let page9 = unsigned(buff, i + 42, 4);
    let sow9 = unsigned2(buff, i + 18, 8, i + 30, 12);
    let omega_dot_lsb = unsigned(buff, i + 46, 5);
    let omega0 = signed3(buff, i + 51, 1, i + 60, 22, i + 90, 9) as f64 * P2_31 * SC2RAD;
    let omega_msb = signed2(buff, i + 99, 13, i + 120, 14);

    // page 10
    let i = 9 * stride;
    let page10 = unsigned(buff, i + 42, 4);
    let sow10 = unsigned2(buff, i + 18, 8, i + 30, 12);
    let omega_lsb = unsigned(buff, i + 46, 5);
    let i_dot = signed2(buff, i + 51, 1, i + 60, 13) as f64 * P2_43 * SC2RAD;

    let pages = [
        page1, page3, page4, page5, page6, page7, page8, page9, page10,
    ];
    let expected = [1, 3, 4, 5, 6, 7, 8, 9, 10];
    if pages != expected {
        trace!("{}: d2 page sequence error", sv);
        return None;
    }

    // page 2 is skipped: 6 s to page 3, then 3 s cadence
    if sow3 != sow1 + 6
        || sow4 != sow3 + 3
        || sow5 != sow4 + 3
        || sow6 != sow5 + 3
        || sow7 != sow6 + 3
        || sow8 != sow7 + 3
        || sow9 != sow8 + 3
        || sow10 != sow9 + 3
    {
        trace!("{}: d2 sow sequence error", sv);
        return None;
    }

    Some(Ephemeris {
        sv,
        iode,
        iodc,
        sva,
        svh,
        week,
        code: 0,
        flag: 0,
        toe: epoch_from_bdt(week, toe_s),
        toc: epoch_from_bdt(week, toc_s),
        ttr: epoch_from_bdt(week, sow1 as f64),
        a: sqrt_a * sqrt_a,
        e: merge_unsigned(e_msb, e_lsb, 22) as f64 * P2_33,
        i0: merge_signed(i0_msb, i0_lsb, 11) as f64 * P2_31 * SC2RAD,
        omega0,
        omega: merge_signed(omega_msb, omega_lsb, 5) as f64 * P2_31 * SC2RAD,
        m0,
        delta_n,
        omega_dot: merge_signed(omega_dot_msb, omega_dot_lsb, 5) as f64 * P2_43 * SC2RAD,
        i_dot,
        crc,
        crs,
        cuc: merge_signed(cuc_msb, cuc_lsb, 4) as f64 * P2_31,
        cus,
        cic: merge_signed(cic_msb, cic_lsb, 8) as f64 * P2_31,
        cis,
        toe_s,
        fit: 0.0,
        af0,
        af1: merge_signed(af1_msb, af1_lsb, 18) as f64 * P2_50,
        af2,
        tgd: [tgd1, tgd2],
    })
}
