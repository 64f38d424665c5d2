//! GPS and QZSS LNAV: subframe reassembly and ephemeris, almanac,
//! ionosphere/UTC parameter reconstruction.
//!
//! Stored subframes are 10 words of 24 payload bits (parity already
//! removed), packed MSB first into 30 bytes.

use crate::{
    bits::{merge_signed, set_unsigned, signed, unsigned, unsigned2},
    bytes::read_u32,
    decoder::{Decoder, Status},
    errors::DecodeError,
    navigation::{
        Almanac, Ephemeris, IonosphereParameters, Subframes, UtcParameters, P2_11, P2_19, P2_20,
        P2_21, P2_23, P2_24, P2_27, P2_29, P2_30, P2_31, P2_33, P2_38, P2_43, P2_5, P2_50, P2_55,
        SC2RAD,
    },
    time::{epoch_from_gpst, expand_week_10bit, expand_week_8bit, reconcile_week},
};

use gnss::prelude::{Constellation, SV};
use log::{debug, trace};

/// CNAV message preamble, found in the high byte of the first raw
/// data word when the receiver forwards the modernized signal.
const CNAV_PREAMBLE: u32 = 0x8B;

/// Clock and issue fields carried by subframe 1.
struct Subframe1 {
    tow_s: f64,
    week10: u32,
    code_l2: u32,
    sva: u8,
    svh: u8,
    iodc: u32,
    l2p_flag: u8,
    tgd_s: f64,
    toc_s: f64,
    af2: f64,
    af1: f64,
    af0: f64,
}

/// First half of the orbit model, subframe 2.
struct Subframe2 {
    iode: u32,
    crs: f64,
    delta_n: f64,
    m0: f64,
    cuc: f64,
    e: f64,
    cus: f64,
    sqrt_a: f64,
    toe_s: f64,
    fit_flag: u32,
}

/// Second half of the orbit model, subframe 3.
struct Subframe3 {
    cic: f64,
    omega0: f64,
    cis: f64,
    i0: f64,
    crc: f64,
    omega: f64,
    omega_dot: f64,
    iode: u32,
    i_dot: f64,
}

/// Subframe id field of the handover word.
fn subframe_id(buff: &[u8]) -> u8 {
    unsigned(buff, 43, 3) as u8
}

fn decode_subframe1(buff: &[u8]) -> Subframe1 {
    Subframe1 {
        tow_s: unsigned(buff, 24, 17) as f64 * 6.0,
        week10: unsigned(buff, 48, 10),
        code_l2: unsigned(buff, 58, 2),
        sva: unsigned(buff, 60, 4) as u8,
        svh: unsigned(buff, 64, 6) as u8,
        iodc: unsigned2(buff, 70, 2, 168, 8),
        l2p_flag: unsigned(buff, 72, 1) as u8,
        tgd_s: signed(buff, 160, 8) as f64 * P2_31,
        toc_s: unsigned(buff, 176, 16) as f64 * 16.0,
        af2: signed(buff, 192, 8) as f64 * P2_55,
        af1: signed(buff, 200, 16) as f64 * P2_43,
        af0: signed(buff, 208, 22) as f64 * P2_31,
    }
}

fn decode_subframe2(buff: &[u8]) -> Subframe2 {
    Subframe2 {
        iode: unsigned(buff, 48, 8),
        crs: signed(buff, 56, 16) as f64 * P2_5,
        delta_n: signed(buff, 72, 16) as f64 * P2_43 * SC2RAD,
        m0: signed(buff, 88, 32) as f64 * P2_31 * SC2RAD,
        cuc: signed(buff, 120, 16) as f64 * P2_29,
        e: unsigned(buff, 136, 32) as f64 * P2_33,
        cus: signed(buff, 168, 16) as f64 * P2_29,
        sqrt_a: unsigned(buff, 184, 32) as f64 * P2_19,
        toe_s: unsigned(buff, 216, 16) as f64 * 16.0,
        fit_flag: unsigned(buff, 232, 1),
    }
}

fn decode_subframe3(buff: &[u8]) -> Subframe3 {
    Subframe3 {
        cic: signed(buff, 48, 16) as f64 * P2_29,
        omega0: signed(buff, 64, 32) as f64 * P2_31 * SC2RAD,
        cis: signed(buff, 96, 16) as f64 * P2_29,
        i0: signed(buff, 112, 32) as f64 * P2_31 * SC2RAD,
        crc: signed(buff, 144, 16) as f64 * P2_5,
        omega: signed(buff, 160, 32) as f64 * P2_31 * SC2RAD,
        omega_dot: signed(buff, 192, 24) as f64 * P2_43 * SC2RAD,
        iode: unsigned(buff, 216, 8),
        i_dot: signed(buff, 224, 14) as f64 * P2_43 * SC2RAD,
    }
}

/// Decodes the per satellite almanac page of subframes 4 and 5.
fn decode_almanac(buff: &[u8], sv: SV) -> Almanac {
    let delta_i = signed(buff, 80, 16) as f64 * P2_19;
    let sqrt_a = unsigned(buff, 120, 24) as f64 * P2_11;
    let af0_msb = signed(buff, 216, 8);

    Almanac {
        sv,
        e: unsigned(buff, 56, 16) as f64 * P2_21,
        toa_s: unsigned(buff, 72, 8) as f64 * 4096.0,
        i0: (0.3 + delta_i) * SC2RAD,
        omega_dot: signed(buff, 96, 16) as f64 * P2_38 * SC2RAD,
        svh: unsigned(buff, 112, 8) as u8,
        a: sqrt_a * sqrt_a,
        omega0: signed(buff, 144, 24) as f64 * P2_23 * SC2RAD,
        omega: signed(buff, 168, 24) as f64 * P2_23 * SC2RAD,
        m0: signed(buff, 192, 24) as f64 * P2_23 * SC2RAD,
        af1: signed(buff, 224, 11) as f64 * P2_38,
        af0: merge_signed(af0_msb, unsigned(buff, 235, 3), 3) as f64 * P2_20,
    }
}

impl Decoder {
    /// UBX-RXM-SFRBX GPS/QZSS payload: ten 32-bit raw words whose low
    /// 6 parity bits are shifted out before storage.
    pub(crate) fn decode_lnav_words(
        &mut self,
        sv: SV,
        offset: usize,
    ) -> Result<Status, DecodeError> {
        let frame = self.frame();
        if frame.len() < offset + 42 {
            return Err(DecodeError::PayloadUnderflow {
                len: frame.len(),
                expected: offset + 42,
            });
        }

        // modernized signal frames are not handled here
        if read_u32(frame, offset) >> 24 == CNAV_PREAMBLE {
            trace!("{}: cnav message skipped", sv);
            return Ok(Status::NeedMore);
        }

        let mut words = [0_u32; 10];
        for (index, word) in words.iter_mut().enumerate() {
            *word = read_u32(frame, offset + 4 * index) >> 6;
        }

        self.store_lnav_words(sv, &words)
    }

    /// UBX-RXM-SFRB GPS payload: ten 24-bit words, parity already
    /// stripped by the receiver.
    pub(crate) fn save_lnav_subframe(&mut self, sv: SV) -> Result<Status, DecodeError> {
        let frame = self.frame();

        let mut words = [0_u32; 10];
        for (index, word) in words.iter_mut().enumerate() {
            *word = read_u32(frame, 8 + 4 * index) & 0xFFFFFF;
        }

        self.store_lnav_words(sv, &words)
    }

    /// Packs ten payload words into the satellite scratch area and
    /// routes the completed subframe.
    fn store_lnav_words(&mut self, sv: SV, words: &[u32; 10]) -> Result<Status, DecodeError> {
        let id = ((words[1] >> 2) & 0x7) as u8;
        if !(1..=5).contains(&id) {
            return Err(DecodeError::SubframeId(sv, id));
        }

        let subframes = self.subframes_mut(sv);
        let base = (id as usize - 1) * Subframes::GPS_SUBFRAME_BYTES;
        for (index, word) in words.iter().enumerate() {
            set_unsigned(
                &mut subframes.data[base..base + Subframes::GPS_SUBFRAME_BYTES],
                index * 24,
                24,
                *word,
            );
        }

        match id {
            3 => self.publish_lnav_ephemeris(sv),
            4 => self.decode_lnav_subframe4(sv),
            5 => self.decode_lnav_subframe5(sv),
            _ => Ok(Status::NeedMore),
        }
    }

    /// Assembles subframes 1..=3 into an [Ephemeris]; requires all
    /// three decoded with consistent issue of data.
    fn publish_lnav_ephemeris(&mut self, sv: SV) -> Result<Status, DecodeError> {
        let data = &self.subframes_mut(sv).data;
        let (buff1, buff2, buff3) = (&data[0..30], &data[30..60], &data[60..90]);

        if subframe_id(buff1) != 1 || subframe_id(buff2) != 2 || subframe_id(buff3) != 3 {
            return Ok(Status::NeedMore);
        }

        let sf1 = decode_subframe1(buff1);
        let sf2 = decode_subframe2(buff2);
        let sf3 = decode_subframe3(buff3);

        // issue of data must agree across the three subframes
        if sf2.iode != sf3.iode || sf2.iode != (sf1.iodc & 0xFF) {
            trace!("{}: lnav iod mismatch", sv);
            return Ok(Status::NeedMore);
        }

        let week = expand_week_10bit(self.reference_week(), sf1.week10);

        let ephemeris = Ephemeris {
            sv,
            iode: sf2.iode,
            iodc: sf1.iodc,
            sva: sf1.sva,
            svh: sf1.svh as u16,
            week,
            code: sf1.code_l2 as u16,
            flag: sf1.l2p_flag,
            ttr: epoch_from_gpst(week, sf1.tow_s),
            toc: epoch_from_gpst(reconcile_week(week, sf1.toc_s, sf1.tow_s), sf1.toc_s),
            toe: epoch_from_gpst(reconcile_week(week, sf2.toe_s, sf1.tow_s), sf2.toe_s),
            a: sf2.sqrt_a * sf2.sqrt_a,
            e: sf2.e,
            i0: sf3.i0,
            omega0: sf3.omega0,
            omega: sf3.omega,
            m0: sf2.m0,
            delta_n: sf2.delta_n,
            omega_dot: sf3.omega_dot,
            i_dot: sf3.i_dot,
            crc: sf3.crc,
            crs: sf2.crs,
            cuc: sf2.cuc,
            cus: sf2.cus,
            cic: sf3.cic,
            cis: sf3.cis,
            toe_s: sf2.toe_s,
            fit: if sf2.fit_flag != 0 { 0.0 } else { 4.0 },
            af0: sf1.af0,
            af1: sf1.af1,
            af2: sf1.af2,
            tgd: [sf1.tgd_s, 0.0],
        };

        self.publish_ephemeris(ephemeris)
    }

    /// Shared publication policy: skip unchanged issues unless
    /// `-EPHALL` was requested.
    pub(crate) fn publish_ephemeris(&mut self, ephemeris: Ephemeris) -> Result<Status, DecodeError> {
        let sv = ephemeris.sv;

        if !self.options.ephemeris_all {
            if let Some(stored) = self.ephemerides.get(&sv) {
                if ephemeris.unchanged(stored) {
                    return Ok(Status::NeedMore);
                }
            }
        }

        debug!("{}: new ephemeris (iode={})", sv, ephemeris.iode);
        self.ephemerides.insert(sv, ephemeris);
        self.ephemeris_sv = Some(sv);
        Ok(Status::Ephemeris)
    }

    /// Subframe 4: almanac pages for the upper satellites, ionosphere
    /// and UTC parameters on page 18.
    fn decode_lnav_subframe4(&mut self, sv: SV) -> Result<Status, DecodeError> {
        let base = 3 * Subframes::GPS_SUBFRAME_BYTES;
        let data = &self.subframes_mut(sv).data;
        let buff: [u8; 30] = data[base..base + 30].try_into().unwrap();

        let svid = unsigned(&buff, 50, 6) as u8;
        match svid {
            25..=32 => {
                // pages 2, 3, 4, 5, 7, 8, 9, 10
                let prn = match sv.constellation {
                    Constellation::QZSS => svid - 25 + 193,
                    _ => svid,
                };
                let almanac_sv = SV::new(sv.constellation, prn);
                self.almanacs
                    .insert(almanac_sv, decode_almanac(&buff, almanac_sv));
                Ok(Status::NeedMore)
            },
            56 => {
                // page 18: ionosphere and utc parameters
                self.ionosphere = Some(IonosphereParameters {
                    alpha: (
                        signed(&buff, 56, 8) as f64 * P2_30,
                        signed(&buff, 64, 8) as f64 * P2_27,
                        signed(&buff, 72, 8) as f64 * P2_24,
                        signed(&buff, 80, 8) as f64 * P2_24,
                    ),
                    beta: (
                        signed(&buff, 88, 8) as f64 * 2048.0,
                        signed(&buff, 96, 8) as f64 * 16384.0,
                        signed(&buff, 104, 8) as f64 * 65536.0,
                        signed(&buff, 112, 8) as f64 * 65536.0,
                    ),
                });

                let reference = self.reference_week();
                self.utc = Some(UtcParameters {
                    a1: signed(&buff, 120, 24) as f64 * P2_50,
                    a0: signed(&buff, 144, 32) as f64 * P2_30,
                    tot_s: unsigned(&buff, 176, 8) as f64 * 4096.0,
                    week: expand_week_8bit(reference, unsigned(&buff, 184, 8)),
                    delta_t_ls: signed(&buff, 192, 8),
                });

                Ok(Status::IonUtc)
            },
            _ => Ok(Status::NeedMore),
        }
    }

    /// Subframe 5: almanac pages 1..=24, satellite health on page 25.
    fn decode_lnav_subframe5(&mut self, sv: SV) -> Result<Status, DecodeError> {
        let base = 4 * Subframes::GPS_SUBFRAME_BYTES;
        let data = &self.subframes_mut(sv).data;
        let buff: [u8; 30] = data[base..base + 30].try_into().unwrap();

        let svid = unsigned(&buff, 50, 6) as u8;
        match svid {
            1..=24 => {
                let prn = match sv.constellation {
                    Constellation::QZSS => svid - 1 + 193,
                    _ => svid,
                };
                if let Ok(almanac_sv) = crate::signal::satellite(sv.constellation, prn) {
                    self.almanacs
                        .insert(almanac_sv, decode_almanac(&buff, almanac_sv));
                }
                Ok(Status::NeedMore)
            },
            51 => {
                // page 25: health refresh for satellites 1..=24
                let mut position = 72;
                for prn in 1..=24 {
                    let health = unsigned(&buff, position, 6) as u8;
                    position += 6;
                    let almanac_sv = SV::new(sv.constellation, prn);
                    if let Some(almanac) = self.almanacs.get_mut(&almanac_sv) {
                        almanac.svh = health;
                    }
                }
                Ok(Status::NeedMore)
            },
            _ => Ok(Status::NeedMore),
        }
    }
}
