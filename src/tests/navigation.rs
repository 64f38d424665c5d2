//! Navigation data reassembly and ephemeris decoding, per
//! constellation, against synthetically packed subframes.

use crate::{
    bits::{set_unsigned, unsigned},
    bytes::{write_i32, write_u16, write_u32, write_u8},
    crc::crc24q,
    navigation::{glonass::seal_string, P2_11, P2_19, P2_20, P2_30, P2_31, P2_33, P2_40, P2_43,
        P2_5, P2_50, P2_66, SC2RAD},
    prelude::{Constellation, Decoder, Options, Status, SV},
    tests::toolkit::{build_frame, feed_quietly},
    time::epoch_from_gpst,
};

use hifitime::{Epoch, TimeScale};
use std::str::FromStr;

/// Writes `value`'s low `l1 + l2` bits over a split field.
fn set_split2(buf: &mut [u8], p1: usize, l1: usize, p2: usize, l2: usize, value: u32) {
    set_unsigned(buf, p1, l1, (value >> l2) & mask(l1));
    set_unsigned(buf, p2, l2, value & mask(l2));
}

fn set_split3(
    buf: &mut [u8],
    p1: usize,
    l1: usize,
    p2: usize,
    l2: usize,
    p3: usize,
    l3: usize,
    value: u32,
) {
    set_unsigned(buf, p1, l1, (value >> (l2 + l3)) & mask(l1));
    set_unsigned(buf, p2, l2, (value >> l3) & mask(l2));
    set_unsigned(buf, p3, l3, value & mask(l3));
}

fn mask(len: usize) -> u32 {
    if len >= 32 {
        u32::MAX
    } else {
        (1 << len) - 1
    }
}

fn raw(value: i64, len: usize) -> u32 {
    (value as u32) & mask(len)
}

/// Big endian chunks of 4, as the receiver forwards them.
fn byte_swapped(data: &[u8]) -> Vec<u8> {
    let mut swapped = vec![0; data.len()];
    for chunk in 0..data.len() / 4 {
        for byte in 0..4 {
            swapped[chunk * 4 + byte] = data[chunk * 4 + 3 - byte];
        }
    }
    swapped
}

fn set_decoder_time(decoder: &mut Decoder, week: u16, tow_s: f64) {
    let mut payload = [0; 16];
    write_i32(&mut payload, 0, (tow_s * 1.0E3).round() as i32);
    write_u16(&mut payload, 8, week);
    write_u8(&mut payload, 11, 0x03);
    assert_eq!(
        feed_quietly(decoder, &build_frame(0x01, 0x20, &payload)),
        Status::NeedMore
    );
}

//
// GPS / QZSS LNAV
//

const LNAV_IODE: u32 = 35;
const LNAV_E_RAW: i64 = 85_899_346;
const LNAV_SQRT_A_RAW: i64 = 2_702_499_800;
const LNAV_TOW_S: f64 = 432_000.0;

fn lnav_subframe1(week10: u32) -> [u8; 30] {
    let mut buf = [0; 30];
    set_unsigned(&mut buf, 24, 17, (LNAV_TOW_S / 6.0) as u32);
    set_unsigned(&mut buf, 43, 3, 1);
    set_unsigned(&mut buf, 48, 10, week10);
    set_unsigned(&mut buf, 58, 2, 1); // codes on L2
    set_unsigned(&mut buf, 60, 4, 2); // ura
    set_unsigned(&mut buf, 64, 6, 0); // health
    set_split2(&mut buf, 70, 2, 168, 8, LNAV_IODE);
    set_unsigned(&mut buf, 72, 1, 1); // L2 P data flag
    set_unsigned(&mut buf, 160, 8, raw(-10, 8)); // tgd
    set_unsigned(&mut buf, 176, 16, 27_000); // toc / 16
    set_unsigned(&mut buf, 192, 8, raw(-9, 8)); // af2
    set_unsigned(&mut buf, 200, 16, raw(678, 16)); // af1
    set_unsigned(&mut buf, 208, 22, raw(-12_345, 22)); // af0
    buf
}

fn lnav_subframe2() -> [u8; 30] {
    let mut buf = [0; 30];
    set_unsigned(&mut buf, 24, 17, (LNAV_TOW_S / 6.0) as u32 + 1);
    set_unsigned(&mut buf, 43, 3, 2);
    set_unsigned(&mut buf, 48, 8, LNAV_IODE);
    set_unsigned(&mut buf, 56, 16, raw(-100, 16)); // crs
    set_unsigned(&mut buf, 72, 16, raw(5000, 16)); // delta n
    set_unsigned(&mut buf, 88, 32, raw(123_456_789, 32)); // m0
    set_unsigned(&mut buf, 120, 16, raw(-200, 16)); // cuc
    set_unsigned(&mut buf, 136, 32, raw(LNAV_E_RAW, 32)); // e
    set_unsigned(&mut buf, 168, 16, raw(300, 16)); // cus
    set_unsigned(&mut buf, 184, 32, raw(LNAV_SQRT_A_RAW, 32));
    set_unsigned(&mut buf, 216, 16, 27_000); // toe / 16
    buf
}

fn lnav_subframe3() -> [u8; 30] {
    let mut buf = [0; 30];
    set_unsigned(&mut buf, 24, 17, (LNAV_TOW_S / 6.0) as u32 + 2);
    set_unsigned(&mut buf, 43, 3, 3);
    set_unsigned(&mut buf, 48, 16, raw(10, 16)); // cic
    set_unsigned(&mut buf, 64, 32, raw(-987_654_321, 32)); // omega0
    set_unsigned(&mut buf, 96, 16, raw(-11, 16)); // cis
    set_unsigned(&mut buf, 112, 32, raw(555_555_555, 32)); // i0
    set_unsigned(&mut buf, 144, 16, raw(120, 16)); // crc
    set_unsigned(&mut buf, 160, 32, raw(-444_444_444, 32)); // omega
    set_unsigned(&mut buf, 192, 24, raw(-7_777, 24)); // omega dot
    set_unsigned(&mut buf, 216, 8, LNAV_IODE);
    set_unsigned(&mut buf, 224, 14, raw(99, 14)); // i dot
    buf
}

/// Wraps one packed LNAV subframe into a UBX-RXM-SFRBX frame.
fn lnav_sfrbx(gnss_id: u8, sv_id: u8, subframe: &[u8; 30]) -> Vec<u8> {
    let mut payload = vec![0; 8 + 40];
    payload[0] = gnss_id;
    payload[1] = sv_id;
    for word in 0..10 {
        write_u32(
            &mut payload,
            8 + 4 * word,
            unsigned(subframe, word * 24, 24) << 6,
        );
    }
    build_frame(0x02, 0x13, &payload)
}

#[test]
fn lnav_ephemeris_reconstruction() {
    let mut decoder = Decoder::default();
    set_decoder_time(&mut decoder, 2216, LNAV_TOW_S);

    let sv = SV::new(Constellation::GPS, 7);

    let status = feed_quietly(&mut decoder, &lnav_sfrbx(0, 7, &lnav_subframe1(2216 % 1024)));
    assert_eq!(status, Status::NeedMore);
    let status = feed_quietly(&mut decoder, &lnav_sfrbx(0, 7, &lnav_subframe2()));
    assert_eq!(status, Status::NeedMore);

    // subframe 3 completes the set
    let status = feed_quietly(&mut decoder, &lnav_sfrbx(0, 7, &lnav_subframe3()));
    assert_eq!(status, Status::Ephemeris);
    assert_eq!(status.code(), 2);
    assert_eq!(decoder.ephemeris_sv(), Some(sv));

    let ephemeris = decoder.ephemeris(sv).unwrap();
    assert_eq!(ephemeris.iode, LNAV_IODE);
    assert_eq!(ephemeris.iodc, LNAV_IODE);
    assert_eq!(ephemeris.week, 2216);
    assert_eq!(ephemeris.sva, 2);
    assert_eq!(ephemeris.flag, 1);
    assert_eq!(ephemeris.e, LNAV_E_RAW as f64 * P2_33);
    assert_eq!(ephemeris.tgd[0], -10.0 * P2_31);
    assert_eq!(ephemeris.delta_n, 5000.0 * P2_43 * SC2RAD);
    assert_eq!(ephemeris.crs, -100.0 * P2_5);
    assert_eq!(ephemeris.toe_s, 432_000.0);
    assert_eq!(ephemeris.toe, epoch_from_gpst(2216, 432_000.0));
    assert_eq!(ephemeris.toc, epoch_from_gpst(2216, 432_000.0));

    let sqrt_a = LNAV_SQRT_A_RAW as f64 * P2_19;
    assert_eq!(ephemeris.a, sqrt_a * sqrt_a);
}

#[test]
fn lnav_unchanged_issue_not_republished() {
    let mut decoder = Decoder::default();
    set_decoder_time(&mut decoder, 2216, LNAV_TOW_S);

    feed_quietly(&mut decoder, &lnav_sfrbx(0, 7, &lnav_subframe1(168)));
    feed_quietly(&mut decoder, &lnav_sfrbx(0, 7, &lnav_subframe2()));
    assert_eq!(
        feed_quietly(&mut decoder, &lnav_sfrbx(0, 7, &lnav_subframe3())),
        Status::Ephemeris
    );

    // same issue of data again: suppressed
    assert_eq!(
        feed_quietly(&mut decoder, &lnav_sfrbx(0, 7, &lnav_subframe3())),
        Status::NeedMore
    );

    // unless -EPHALL requested
    let mut decoder = Decoder::new(Options::from_str("-EPHALL").unwrap());
    set_decoder_time(&mut decoder, 2216, LNAV_TOW_S);
    feed_quietly(&mut decoder, &lnav_sfrbx(0, 7, &lnav_subframe1(168)));
    feed_quietly(&mut decoder, &lnav_sfrbx(0, 7, &lnav_subframe2()));
    feed_quietly(&mut decoder, &lnav_sfrbx(0, 7, &lnav_subframe3()));
    assert_eq!(
        feed_quietly(&mut decoder, &lnav_sfrbx(0, 7, &lnav_subframe3())),
        Status::Ephemeris
    );
}

#[test]
fn lnav_subframe_id_out_of_range() {
    let mut decoder = Decoder::default();

    let mut subframe = [0; 30];
    set_unsigned(&mut subframe, 43, 3, 0);
    assert_eq!(
        feed_quietly(&mut decoder, &lnav_sfrbx(0, 7, &subframe)),
        Status::Error
    );
}

#[test]
fn lnav_cnav_preamble_skipped() {
    let mut decoder = Decoder::default();

    let mut payload = vec![0; 8 + 40];
    payload[0] = 0;
    payload[1] = 7;
    write_u32(&mut payload, 8, 0x8B00_0000);
    assert_eq!(
        feed_quietly(&mut decoder, &build_frame(0x02, 0x13, &payload)),
        Status::NeedMore
    );
}

#[test]
fn lnav_ionosphere_utc_parameters() {
    let mut decoder = Decoder::default();
    set_decoder_time(&mut decoder, 2216, LNAV_TOW_S);

    let mut subframe = [0; 30];
    set_unsigned(&mut subframe, 24, 17, (LNAV_TOW_S / 6.0) as u32);
    set_unsigned(&mut subframe, 43, 3, 4);
    set_unsigned(&mut subframe, 50, 6, 56); // page 18
    set_unsigned(&mut subframe, 56, 8, raw(18, 8)); // alpha0
    set_unsigned(&mut subframe, 64, 8, raw(-20, 8)); // alpha1
    set_unsigned(&mut subframe, 88, 8, raw(10, 8)); // beta0
    set_unsigned(&mut subframe, 120, 24, raw(-200, 24)); // a1
    set_unsigned(&mut subframe, 144, 32, raw(300_000, 32)); // a0
    set_unsigned(&mut subframe, 176, 8, 100); // tot / 4096
    set_unsigned(&mut subframe, 184, 8, 2216 % 256); // utc week
    set_unsigned(&mut subframe, 192, 8, 18); // leap seconds

    let status = feed_quietly(&mut decoder, &lnav_sfrbx(0, 7, &subframe));
    assert_eq!(status, Status::IonUtc);
    assert_eq!(status.code(), 9);

    let ionosphere = decoder.ionosphere().unwrap();
    assert_eq!(ionosphere.alpha.0, 18.0 * P2_30);
    assert_eq!(ionosphere.alpha.1, -20.0 * 7.450_580_596_923_828E-9);
    assert_eq!(ionosphere.beta.0, 10.0 * 2048.0);

    let utc = decoder.utc_parameters().unwrap();
    assert_eq!(utc.a1, -200.0 * P2_50);
    assert_eq!(utc.a0, 300_000.0 * P2_30);
    assert_eq!(utc.tot_s, 409_600.0);
    assert_eq!(utc.week, 2216);
    assert_eq!(utc.delta_t_ls, 18);
}

#[test]
fn lnav_almanac_page() {
    let mut decoder = Decoder::default();
    set_decoder_time(&mut decoder, 2216, LNAV_TOW_S);

    let mut subframe = [0; 30];
    set_unsigned(&mut subframe, 24, 17, (LNAV_TOW_S / 6.0) as u32);
    set_unsigned(&mut subframe, 43, 3, 5);
    set_unsigned(&mut subframe, 50, 6, 5); // page for prn 5
    set_unsigned(&mut subframe, 56, 16, 4000); // e
    set_unsigned(&mut subframe, 72, 8, 100); // toa / 4096
    set_unsigned(&mut subframe, 80, 16, raw(-250, 16)); // delta i
    set_unsigned(&mut subframe, 112, 8, 0); // health
    set_unsigned(&mut subframe, 120, 24, 10_600_000); // sqrt a
    set_unsigned(&mut subframe, 216, 8, raw(-40, 8)); // af0 msb
    set_unsigned(&mut subframe, 224, 11, raw(15, 11)); // af1
    set_unsigned(&mut subframe, 235, 3, 5); // af0 lsb

    let status = feed_quietly(&mut decoder, &lnav_sfrbx(0, 7, &subframe));
    assert_eq!(status, Status::NeedMore);

    let almanac = decoder.almanac(SV::new(Constellation::GPS, 5)).unwrap();
    assert_eq!(almanac.e, 4000.0 * 4.768_371_582_031_25E-7);
    assert_eq!(almanac.toa_s, 409_600.0);
    assert_eq!(almanac.i0, (0.3 - 250.0 * P2_19) * SC2RAD);
    assert_eq!(almanac.af1, 15.0 * 3.637_978_807_091_713E-12);
    assert_eq!(almanac.af0, (-40.0 * 8.0 + 5.0) * P2_20);

    let sqrt_a = 10_600_000.0 * P2_11;
    assert_eq!(almanac.a, sqrt_a * sqrt_a);
}

//
// Galileo I/NAV
//

const INAV_IOD: u32 = 0x57;
const INAV_GST_WEEK: u32 = 1192;
const INAV_TOW_S: u32 = 432_000;
const INAV_E_RAW: i64 = 42_949_672;
const INAV_SQRT_A_RAW: i64 = 2_852_100_000;

fn inav_word(word_type: u32) -> [u8; 16] {
    let mut word = [0; 16];
    set_unsigned(&mut word, 0, 6, word_type);
    match word_type {
        0 => {
            set_unsigned(&mut word, 6, 2, 2); // gst resolved
            set_unsigned(&mut word, 96, 12, INAV_GST_WEEK);
            set_unsigned(&mut word, 108, 20, INAV_TOW_S);
        },
        1 => {
            set_unsigned(&mut word, 6, 10, INAV_IOD);
            set_unsigned(&mut word, 16, 14, 7200); // toe / 60
            set_unsigned(&mut word, 30, 32, raw(123_456_789, 32)); // m0
            set_unsigned(&mut word, 62, 32, raw(INAV_E_RAW, 32));
            set_unsigned(&mut word, 94, 32, raw(INAV_SQRT_A_RAW, 32));
        },
        2 => {
            set_unsigned(&mut word, 6, 10, INAV_IOD);
            set_unsigned(&mut word, 16, 32, raw(-987_654_321, 32)); // omega0
            set_unsigned(&mut word, 48, 32, raw(555_555_555, 32)); // i0
            set_unsigned(&mut word, 80, 32, raw(-444_444_444, 32)); // omega
            set_unsigned(&mut word, 112, 14, raw(99, 14)); // i dot
        },
        3 => {
            set_unsigned(&mut word, 6, 10, INAV_IOD);
            set_unsigned(&mut word, 16, 24, raw(-7_777, 24)); // omega dot
            set_unsigned(&mut word, 40, 16, raw(5_000, 16)); // delta n
            set_unsigned(&mut word, 56, 16, raw(-200, 16)); // cuc
            set_unsigned(&mut word, 72, 16, raw(300, 16)); // cus
            set_unsigned(&mut word, 88, 16, raw(120, 16)); // crc
            set_unsigned(&mut word, 104, 16, raw(-100, 16)); // crs
            set_unsigned(&mut word, 120, 8, 107); // sisa
        },
        4 => {
            set_unsigned(&mut word, 6, 10, INAV_IOD);
            set_unsigned(&mut word, 16, 6, 11); // svid
            set_unsigned(&mut word, 22, 16, raw(10, 16)); // cic
            set_unsigned(&mut word, 38, 16, raw(-11, 16)); // cis
            set_unsigned(&mut word, 54, 14, 7200); // toc / 60
            set_unsigned(&mut word, 68, 31, raw(-123_456, 31)); // af0
            set_unsigned(&mut word, 99, 21, raw(678, 21)); // af1
            set_unsigned(&mut word, 120, 6, raw(-9, 6)); // af2
        },
        5 => {
            set_unsigned(&mut word, 47, 10, raw(-15, 10)); // bgd e5a/e1
            set_unsigned(&mut word, 57, 10, raw(-16, 10)); // bgd e5b/e1
            set_unsigned(&mut word, 67, 2, 0); // e5b hs
            set_unsigned(&mut word, 69, 2, 0); // e1b hs
            set_unsigned(&mut word, 80, 20, INAV_TOW_S + 30);
        },
        _ => {},
    }
    word
}

/// Wraps one I/NAV word into its even/odd page pair, CRC sealed,
/// byte swapped as found on the wire.
fn inav_page(word: &[u8; 16]) -> Vec<u8> {
    let mut even = [0_u8; 16];
    let mut odd = [0_u8; 16];

    set_unsigned(&mut odd, 0, 1, 1);
    for bit in 0..112 {
        set_unsigned(&mut even, 2 + bit, 1, unsigned(word, bit, 1));
    }
    for bit in 0..16 {
        set_unsigned(&mut odd, 2 + bit, 1, unsigned(word, 112 + bit, 1));
    }

    // crc over 4 pad + 114 even + 82 odd bits
    let mut crc_buff = [0_u8; 26];
    for byte in 0..15 {
        set_unsigned(&mut crc_buff, 4 + 8 * byte, 8, unsigned(&even, 8 * byte, 8));
    }
    for byte in 0..11 {
        set_unsigned(&mut crc_buff, 118 + 8 * byte, 8, unsigned(&odd, 8 * byte, 8));
    }
    set_unsigned(&mut odd, 82, 24, crc24q(&crc_buff[..25], 0));

    let mut page = byte_swapped(&even);
    page.extend(byte_swapped(&odd));
    page.extend([0; 4]); // trailing receiver word
    page
}

fn inav_sfrbx(sv_id: u8, page: &[u8]) -> Vec<u8> {
    let mut payload = vec![0; 8];
    payload[0] = 2;
    payload[1] = sv_id;
    payload.extend(page);
    build_frame(0x02, 0x13, &payload)
}

#[test]
fn inav_ephemeris_reconstruction() {
    let mut decoder = Decoder::default();

    // word 2 resets the pending sequence, feed it first
    for word_type in [2, 0, 1, 3, 4] {
        let status = feed_quietly(&mut decoder, &inav_sfrbx(11, &inav_page(&inav_word(word_type))));
        assert_eq!(status, Status::NeedMore, "word {}", word_type);
    }
    let status = feed_quietly(&mut decoder, &inav_sfrbx(11, &inav_page(&inav_word(5))));
    assert_eq!(status, Status::NeedMore);

    // all seven words in: publication
    let status = feed_quietly(&mut decoder, &inav_sfrbx(11, &inav_page(&inav_word(6))));
    assert_eq!(status, Status::Ephemeris);

    let sv = SV::new(Constellation::Galileo, 11);
    let ephemeris = decoder.ephemeris(sv).unwrap();
    assert_eq!(ephemeris.sv, sv);
    assert_eq!(ephemeris.iode, INAV_IOD);
    assert_eq!(ephemeris.week, INAV_GST_WEEK + 1024);
    assert_eq!(ephemeris.sva, 107);
    assert_eq!(ephemeris.e, INAV_E_RAW as f64 * P2_33);
    assert_eq!(ephemeris.toe_s, 432_000.0);
    assert_eq!(ephemeris.code, (1 << 0) | (1 << 9));
    assert_eq!(
        ephemeris.toe,
        Epoch::from_time_of_week(INAV_GST_WEEK, 432_000_000_000_000, TimeScale::GST),
    );

    let bgd_scale = 2.328_306_436_538_696E-10;
    assert_eq!(ephemeris.tgd[0], -15.0 * bgd_scale);
    assert_eq!(ephemeris.tgd[1], -16.0 * bgd_scale);
}

#[test]
fn inav_crc_rejection() {
    let mut decoder = Decoder::default();

    let mut page = inav_page(&inav_word(2));
    page[20] ^= 0x10;
    assert_eq!(
        feed_quietly(&mut decoder, &inav_sfrbx(11, &page)),
        Status::Error
    );
}

#[test]
fn inav_even_odd_rejection() {
    let mut decoder = Decoder::default();

    // both halves claiming even part
    let word = inav_word(2);
    let mut even = [0_u8; 16];
    for bit in 0..112 {
        set_unsigned(&mut even, 2 + bit, 1, unsigned(&word, bit, 1));
    }
    let mut page = byte_swapped(&even);
    page.extend(byte_swapped(&even));
    page.extend([0; 4]);

    assert_eq!(
        feed_quietly(&mut decoder, &inav_sfrbx(11, &page)),
        Status::Error
    );
}

#[test]
fn inav_alert_page_skipped() {
    let mut decoder = Decoder::default();

    let word = inav_word(2);
    let mut page = [0_u8; 16];
    for bit in 0..112 {
        set_unsigned(&mut page, 2 + bit, 1, unsigned(&word, bit, 1));
    }
    set_unsigned(&mut page, 1, 1, 1); // alert

    let mut wire = byte_swapped(&page);
    wire.extend(byte_swapped(&page));
    wire.extend([0; 4]);
    assert_eq!(
        feed_quietly(&mut decoder, &inav_sfrbx(11, &wire)),
        Status::NeedMore
    );
}

#[test]
fn inav_publication_suppressed_by_galfnav() {
    let mut decoder = Decoder::new(Options::from_str("-GALFNAV").unwrap());

    for word_type in [2, 0, 1, 3, 4, 5, 6] {
        let status = feed_quietly(&mut decoder, &inav_sfrbx(11, &inav_page(&inav_word(word_type))));
        assert_eq!(status, Status::NeedMore, "word {}", word_type);
    }
    assert!(decoder
        .ephemeris(SV::new(Constellation::Galileo, 11))
        .is_none());
}

//
// BeiDou D1 / D2
//

const BDS_WEEK: u32 = 910;
const BDS_SOW: u32 = 345_600;
const BDS_TOE_RAW: u32 = 54_000;
const BDS_E_RAW: i64 = 85_899_346;

fn d1_subframe1() -> [u8; 38] {
    let mut buf = [0; 38];
    set_unsigned(&mut buf, 15, 3, 1);
    set_split2(&mut buf, 18, 8, 30, 12, BDS_SOW);
    set_unsigned(&mut buf, 43, 5, 7); // aodc
    set_unsigned(&mut buf, 48, 4, 2); // urai
    set_unsigned(&mut buf, 60, 13, BDS_WEEK);
    set_split2(&mut buf, 73, 9, 90, 8, 5400); // toc / 8
    set_unsigned(&mut buf, 98, 10, raw(-30, 10)); // tgd1
    set_split2(&mut buf, 108, 4, 120, 6, raw(-25, 10)); // tgd2
    set_unsigned(&mut buf, 214, 11, raw(-5, 11)); // af2
    set_split2(&mut buf, 225, 7, 240, 17, raw(-100_000, 24)); // af0
    set_split2(&mut buf, 257, 5, 270, 17, raw(5_000, 22)); // af1
    set_unsigned(&mut buf, 287, 5, 9); // aode
    buf
}

fn d1_subframe2() -> [u8; 38] {
    let mut buf = [0; 38];
    set_unsigned(&mut buf, 15, 3, 2);
    set_split2(&mut buf, 18, 8, 30, 12, BDS_SOW + 6);
    set_split2(&mut buf, 42, 10, 60, 6, raw(1_234, 16)); // delta n
    set_split2(&mut buf, 66, 16, 90, 2, raw(-300, 18)); // cuc
    set_split2(&mut buf, 92, 20, 120, 12, raw(987_654_321, 32)); // m0
    set_split2(&mut buf, 132, 10, 150, 22, raw(BDS_E_RAW, 32)); // e
    set_unsigned(&mut buf, 180, 18, raw(400, 18)); // cus
    set_split2(&mut buf, 198, 4, 210, 14, raw(500, 18)); // crc
    set_split2(&mut buf, 224, 8, 240, 10, raw(-600, 18)); // crs
    set_split2(&mut buf, 250, 12, 270, 20, raw(2_702_499_800, 32)); // sqrt a
    set_unsigned(&mut buf, 290, 2, BDS_TOE_RAW >> 15);
    buf
}

fn d1_subframe3() -> [u8; 38] {
    let mut buf = [0; 38];
    set_unsigned(&mut buf, 15, 3, 3);
    set_split2(&mut buf, 18, 8, 30, 12, BDS_SOW + 12);
    set_split2(&mut buf, 42, 10, 60, 5, BDS_TOE_RAW & 0x7FFF);
    set_split2(&mut buf, 65, 17, 90, 15, raw(555_555_555, 32)); // i0
    set_split2(&mut buf, 105, 7, 120, 11, raw(-700, 18)); // cic
    set_split2(&mut buf, 131, 11, 150, 13, raw(-8_888, 24)); // omega dot
    set_split2(&mut buf, 163, 9, 180, 9, raw(800, 18)); // cis
    set_split2(&mut buf, 189, 13, 210, 1, raw(-99, 14)); // i dot
    set_split2(&mut buf, 211, 21, 240, 11, raw(-123_123_123, 32)); // omega0
    set_split2(&mut buf, 251, 11, 270, 21, raw(321_321_321, 32)); // omega
    buf
}

fn bds_sfrbx(sv_id: u8, subframe: &[u8; 38]) -> Vec<u8> {
    let mut payload = vec![0; 8 + 40];
    payload[0] = 3;
    payload[1] = sv_id;
    for word in 0..10 {
        write_u32(&mut payload, 8 + 4 * word, unsigned(subframe, word * 30, 30));
    }
    build_frame(0x02, 0x13, &payload)
}

#[test]
fn bds_d1_ephemeris_reconstruction() {
    let mut decoder = Decoder::default();

    assert_eq!(
        feed_quietly(&mut decoder, &bds_sfrbx(6, &d1_subframe1())),
        Status::NeedMore
    );
    assert_eq!(
        feed_quietly(&mut decoder, &bds_sfrbx(6, &d1_subframe2())),
        Status::NeedMore
    );
    assert_eq!(
        feed_quietly(&mut decoder, &bds_sfrbx(6, &d1_subframe3())),
        Status::Ephemeris
    );

    let sv = SV::new(Constellation::BeiDou, 6);
    let ephemeris = decoder.ephemeris(sv).unwrap();
    assert_eq!(ephemeris.iode, 9);
    assert_eq!(ephemeris.iodc, 7);
    assert_eq!(ephemeris.week, BDS_WEEK);
    assert_eq!(ephemeris.e, BDS_E_RAW as f64 * P2_33);
    assert_eq!(ephemeris.toe_s, BDS_TOE_RAW as f64 * 8.0);
    assert_eq!(ephemeris.tgd[0], -30.0 * 0.1E-9);
    assert_eq!(ephemeris.tgd[1], -25.0 * 0.1E-9);
    assert_eq!(ephemeris.af2, -5.0 * P2_66);
    assert_eq!(ephemeris.af1, 5_000.0 * P2_50);
    assert_eq!(
        ephemeris.toc,
        Epoch::from_time_of_week(BDS_WEEK, 43_200_000_000_000, TimeScale::BDT),
    );

    // sow discontinuity: no publication
    let mut decoder = Decoder::default();
    let mut subframe2 = d1_subframe2();
    set_split2(&mut subframe2, 18, 8, 30, 12, BDS_SOW + 7);
    feed_quietly(&mut decoder, &bds_sfrbx(6, &d1_subframe1()));
    feed_quietly(&mut decoder, &bds_sfrbx(6, &subframe2));
    assert_eq!(
        feed_quietly(&mut decoder, &bds_sfrbx(6, &d1_subframe3())),
        Status::NeedMore
    );
}

fn d2_page(page: u32, sow: u32) -> [u8; 38] {
    let mut buf = [0; 38];
    set_unsigned(&mut buf, 15, 3, 1); // subframe 1
    set_split2(&mut buf, 18, 8, 30, 12, sow);
    set_unsigned(&mut buf, 42, 4, page);
    match page {
        1 => {
            set_unsigned(&mut buf, 47, 5, 7); // aodc
            set_unsigned(&mut buf, 60, 4, 2); // urai
            set_unsigned(&mut buf, 64, 13, BDS_WEEK);
            set_split2(&mut buf, 77, 5, 90, 12, 5400); // toc / 8
            set_unsigned(&mut buf, 102, 10, raw(-30, 10)); // tgd1
            set_unsigned(&mut buf, 120, 10, raw(-25, 10)); // tgd2
        },
        3 => {
            set_split2(&mut buf, 100, 12, 120, 12, raw(-100_000, 24)); // af0
            set_unsigned(&mut buf, 132, 4, raw(5_000, 22) >> 18); // af1 msb
        },
        4 => {
            set_split2(&mut buf, 46, 6, 60, 12, raw(5_000, 22) & 0x3FFFF); // af1 lsb
            set_split2(&mut buf, 72, 10, 90, 1, raw(-5, 11)); // af2
            set_unsigned(&mut buf, 91, 5, 9); // aode
            set_unsigned(&mut buf, 96, 16, raw(1_234, 16)); // delta n
            set_unsigned(&mut buf, 120, 14, raw(-300, 18) >> 4); // cuc msb
        },
        5 => {
            set_unsigned(&mut buf, 46, 4, raw(-300, 18) & 0xF); // cuc lsb
            set_split3(&mut buf, 50, 2, 60, 22, 90, 8, raw(987_654_321, 32)); // m0
            set_split2(&mut buf, 98, 14, 120, 4, raw(400, 18)); // cus
            set_unsigned(&mut buf, 124, 10, (BDS_E_RAW as u32) >> 22); // e msb
        },
        6 => {
            set_split2(&mut buf, 46, 6, 60, 16, (BDS_E_RAW as u32) & 0x3F_FFFF); // e lsb
            set_split3(&mut buf, 76, 6, 90, 22, 120, 4, raw(2_702_499_800, 32)); // sqrt a
            set_unsigned(&mut buf, 124, 10, raw(-700, 18) >> 8); // cic msb
        },
        7 => {
            set_split2(&mut buf, 46, 6, 60, 2, raw(-700, 18) & 0xFF); // cic lsb
            set_unsigned(&mut buf, 62, 18, raw(800, 18)); // cis
            set_split2(&mut buf, 80, 2, 90, 15, BDS_TOE_RAW); // toe
            set_split2(&mut buf, 105, 6, 120, 15, raw(555_555_555, 32) >> 11); // i0 msb
        },
        8 => {
            set_split2(&mut buf, 46, 6, 60, 5, raw(555_555_555, 32) & 0x7FF); // i0 lsb
            set_split2(&mut buf, 65, 17, 90, 1, raw(500, 18)); // crc
            set_unsigned(&mut buf, 91, 18, raw(-600, 18)); // crs
            set_split2(&mut buf, 109, 5, 120, 14, raw(-8_888, 24) >> 5); // omega dot msb
        },
        9 => {
            set_unsigned(&mut buf, 46, 5, raw(-8_888, 24) & 0x1F); // omega dot lsb
            set_split3(&mut buf, 51, 1, 60, 22, 90, 9, raw(-123_123_123, 32)); // omega0
            set_split2(&mut buf, 99, 13, 120, 14, raw(321_321_321, 32) >> 5); // omega msb
        },
        10 => {
            set_unsigned(&mut buf, 46, 5, raw(321_321_321, 32) & 0x1F); // omega lsb
            set_split2(&mut buf, 51, 1, 60, 13, raw(-99, 14)); // i dot
        },
        _ => {},
    }
    buf
}

#[test]
fn bds_d2_ephemeris_reconstruction() {
    let mut decoder = Decoder::default();

    // page 2 does not carry ephemeris bits, 3 s cadence afterwards
    let schedule = [
        (1, BDS_SOW),
        (2, BDS_SOW + 3),
        (3, BDS_SOW + 6),
        (4, BDS_SOW + 9),
        (5, BDS_SOW + 12),
        (6, BDS_SOW + 15),
        (7, BDS_SOW + 18),
        (8, BDS_SOW + 21),
        (9, BDS_SOW + 24),
    ];
    for (page, sow) in schedule {
        let status = feed_quietly(&mut decoder, &bds_sfrbx(3, &d2_page(page, sow)));
        assert_eq!(status, Status::NeedMore, "page {}", page);
    }
    let status = feed_quietly(&mut decoder, &bds_sfrbx(3, &d2_page(10, BDS_SOW + 27)));
    assert_eq!(status, Status::Ephemeris);

    let sv = SV::new(Constellation::BeiDou, 3);
    let ephemeris = decoder.ephemeris(sv).unwrap();
    assert_eq!(ephemeris.iode, 9);
    assert_eq!(ephemeris.iodc, 7);
    assert_eq!(ephemeris.week, BDS_WEEK);
    assert_eq!(ephemeris.e, BDS_E_RAW as f64 * P2_33);
    assert_eq!(ephemeris.toe_s, BDS_TOE_RAW as f64 * 8.0);
    assert_eq!(ephemeris.af1, 5_000.0 * P2_50);
    assert_eq!(ephemeris.cuc, -300.0 * P2_31);
    assert_eq!(ephemeris.omega, 321_321_321.0 * P2_31 * SC2RAD);
    assert_eq!(ephemeris.omega_dot, -8_888.0 * P2_43 * SC2RAD);
}

//
// GLONASS
//

/// Writes a sign-magnitude field.
fn set_sm(buf: &mut [u8], pos: usize, len: usize, value: i64) {
    set_unsigned(buf, pos, 1, (value < 0) as u32);
    set_unsigned(buf, pos + 1, len - 1, value.unsigned_abs() as u32);
}

fn glonass_string(number: u32, frame_id: u16) -> [u8; 16] {
    let mut buf = [0_u8; 16];
    set_unsigned(&mut buf, 1, 4, number);
    match number {
        1 => {
            set_unsigned(&mut buf, 9, 5, 2); // tk hours
            set_unsigned(&mut buf, 14, 6, 59); // tk minutes
            set_unsigned(&mut buf, 20, 1, 1); // tk 30 s
            set_sm(&mut buf, 21, 24, -5_000); // vx
            set_sm(&mut buf, 45, 5, -3); // ax
            set_sm(&mut buf, 50, 27, 1_000_000); // x
        },
        2 => {
            set_unsigned(&mut buf, 5, 3, 0); // health
            set_unsigned(&mut buf, 9, 7, 108); // tb
            set_sm(&mut buf, 21, 24, 6_000); // vy
            set_sm(&mut buf, 45, 5, 2); // ay
            set_sm(&mut buf, 50, 27, -2_000_000); // y
        },
        3 => {
            set_sm(&mut buf, 6, 11, 500); // gamma
            set_sm(&mut buf, 21, 24, -7_000); // vz
            set_sm(&mut buf, 45, 5, -1); // az
            set_sm(&mut buf, 50, 27, 3_000_000); // z
        },
        4 => {
            set_sm(&mut buf, 5, 22, -70_000); // tau
            set_sm(&mut buf, 27, 5, 2); // delta tau
            set_unsigned(&mut buf, 32, 5, 1); // age
            set_unsigned(&mut buf, 52, 4, 4); // ft
            set_unsigned(&mut buf, 70, 5, 9); // slot
        },
        _ => {},
    }
    seal_string(&mut buf);
    buf[12..14].copy_from_slice(&frame_id.to_be_bytes());
    buf
}

fn glonass_sfrbx(sv_id: u8, freq_id: u8, string: &[u8; 16]) -> Vec<u8> {
    let mut payload = vec![0; 8];
    payload[0] = 6;
    payload[1] = sv_id;
    payload[3] = freq_id;
    payload.extend(byte_swapped(string));
    build_frame(0x02, 0x13, &payload)
}

#[test]
fn glonass_ephemeris_reconstruction() {
    let mut decoder = Decoder::default();
    set_decoder_time(&mut decoder, 2216, 432_000.0);

    for number in 1..=3 {
        let status = feed_quietly(
            &mut decoder,
            &glonass_sfrbx(9, 10, &glonass_string(number, 0x1234)),
        );
        assert_eq!(status, Status::NeedMore, "string {}", number);
    }
    let status = feed_quietly(
        &mut decoder,
        &glonass_sfrbx(9, 10, &glonass_string(4, 0x1234)),
    );
    assert_eq!(status, Status::Ephemeris);
    assert_eq!(
        decoder.ephemeris_sv(),
        Some(SV::new(Constellation::Glonass, 9))
    );

    let ephemeris = decoder.glonass_ephemeris(9).unwrap();
    assert_eq!(ephemeris.iode, 108);
    assert_eq!(ephemeris.frequency_channel, 3);
    assert_eq!(ephemeris.age_days, 1);
    assert_eq!(ephemeris.sva, 4);
    assert_eq!(ephemeris.velocity_m_s[0], -5_000.0 * P2_20 * 1.0E3);
    assert_eq!(ephemeris.velocity_m_s[1], 6_000.0 * P2_20 * 1.0E3);
    assert_eq!(ephemeris.position_m[0], 1_000_000.0 * P2_11 * 1.0E3);
    assert_eq!(ephemeris.position_m[1], -2_000_000.0 * P2_11 * 1.0E3);
    assert_eq!(ephemeris.acceleration_m_s2[2], -1.0 * P2_30 * 1.0E3);
    assert_eq!(ephemeris.gamma, 500.0 * P2_40);
    assert_eq!(ephemeris.tau_s, -70_000.0 * P2_30);

    // tb = 108 on the 15 minute grid, moscow time, utc leap restored
    assert_eq!(
        ephemeris.toe,
        epoch_from_gpst(2216, 345_600.0 + 86_400.0 + 18.0),
    );
    // tk = 02:59:30 moscow
    assert_eq!(
        ephemeris.tof,
        epoch_from_gpst(2216, 345_600.0 + 86_370.0 + 18.0),
    );
}

#[test]
fn glonass_frame_id_change_discards_strings() {
    let mut decoder = Decoder::default();
    set_decoder_time(&mut decoder, 2216, 432_000.0);

    for number in 1..=3 {
        feed_quietly(
            &mut decoder,
            &glonass_sfrbx(9, 10, &glonass_string(number, 0x1111)),
        );
    }

    // string 4 opens a new frame: earlier strings are obsolete
    let status = feed_quietly(
        &mut decoder,
        &glonass_sfrbx(9, 10, &glonass_string(4, 0x2222)),
    );
    assert_eq!(status, Status::NeedMore);
    assert!(decoder.glonass_ephemeris(9).is_none());

    // the new frame completes normally
    for number in 1..=3 {
        feed_quietly(
            &mut decoder,
            &glonass_sfrbx(9, 10, &glonass_string(number, 0x2222)),
        );
    }
    assert_eq!(
        feed_quietly(
            &mut decoder,
            &glonass_sfrbx(9, 10, &glonass_string(4, 0x2222)),
        ),
        Status::Ephemeris
    );
}

#[test]
fn glonass_hamming_rejection() {
    let mut decoder = Decoder::default();
    set_decoder_time(&mut decoder, 2216, 432_000.0);

    let mut string = glonass_string(1, 0x1234);
    string[4] ^= 0x20;
    assert_eq!(
        feed_quietly(&mut decoder, &glonass_sfrbx(9, 10, &string)),
        Status::Error
    );
}

#[test]
fn glonass_unknown_slot_is_benign() {
    let mut decoder = Decoder::default();

    let mut payload = vec![0; 8 + 16];
    payload[0] = 6;
    payload[1] = 255;
    let status = feed_quietly(&mut decoder, &build_frame(0x02, 0x13, &payload));
    assert_eq!(status, Status::NeedMore);
}

//
// SBAS
//

#[test]
fn sbas_message_capture() {
    let mut decoder = Decoder::default();
    set_decoder_time(&mut decoder, 2216, 432_000.0);

    let mut message = [0_u8; 32];
    for (index, byte) in message.iter_mut().enumerate() {
        *byte = (index as u8) | 0x40;
    }

    let mut payload = vec![0; 8];
    payload[0] = 1;
    payload[1] = 133;
    payload.extend(byte_swapped(&message));
    let status = feed_quietly(&mut decoder, &build_frame(0x02, 0x13, &payload));
    assert_eq!(status, Status::SbasMessage);
    assert_eq!(status.code(), 3);

    let sbas = decoder.sbas_message().unwrap();
    assert_eq!(sbas.prn, 133);
    assert_eq!(sbas.week, 2216);
    assert_eq!(sbas.tow_s, 431_999, "tagged one second early");
    assert_eq!(&sbas.payload[..28], &message[..28]);
    assert_eq!(sbas.payload[28], message[28] & 0xC0);
}

#[test]
fn sbas_requires_time() {
    let mut decoder = Decoder::default();

    let mut payload = vec![0; 8 + 32];
    payload[0] = 1;
    payload[1] = 133;
    let status = feed_quietly(&mut decoder, &build_frame(0x02, 0x13, &payload));
    assert_eq!(status, Status::NeedMore);
    assert!(decoder.sbas_message().is_none());
}

#[test]
fn sfrbx_payload_underflow() {
    let mut decoder = Decoder::default();

    // GPS subframe truncated to six words
    let mut payload = vec![0; 8 + 24];
    payload[0] = 0;
    payload[1] = 7;
    let status = feed_quietly(&mut decoder, &build_frame(0x02, 0x13, &payload));
    assert_eq!(status, Status::Error);
}
