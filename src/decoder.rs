//! Streaming UBX frame decoder.
//!
//! [Decoder] consumes the raw byte stream coming off the receiver
//! link, synchronizes on frame boundaries, validates each frame and
//! updates its output slots (observation batch, ephemerides, SBAS
//! message, ionosphere/UTC parameters) accordingly. Feed it one byte
//! at a time with [Decoder::input_byte], or let it pull from any
//! [Read] implementor with [Decoder::input_read]: both report what
//! happened through [Status].
//!
//! A corrupted frame never invalidates the stream: the synchronizer
//! resets and hunts for the next sync pattern.

use std::collections::HashMap;
use std::io::Read;

use crate::{
    bytes::{read_i32, read_u16, read_u32, read_u8},
    checksum,
    errors::DecodeError,
    navigation::{
        Almanac, Ephemeris, GlonassEphemeris, IonosphereParameters, SbasMessage, Subframes,
        UtcParameters,
    },
    observation::{ObservationBatch, TrackingState},
    options::Options,
    time::epoch_from_gpst,
    MAX_FRAME_LEN, SYNC_1, SYNC_2,
};

use gnss::prelude::SV;
use hifitime::Epoch;
use log::{debug, trace};

/// Message types this decoder recognizes, `(class << 8) | id`.
const RXM_RAW: u16 = 0x0210;
const RXM_SFRB: u16 = 0x0211;
const RXM_SFRBX: u16 = 0x0213;
const RXM_RAWX: u16 = 0x0215;
const NAV_SOL: u16 = 0x0106;
const NAV_TIMEGPS: u16 = 0x0120;
const TIM_TM2: u16 = 0x0D03;

#[cfg(feature = "trk")]
const TRK_D5: u16 = 0x030A;
#[cfg(feature = "trk")]
const TRK_SFRBX: u16 = 0x030F;
#[cfg(feature = "trk")]
const TRK_MEAS: u16 = 0x0310;

/// Bytes [Decoder::input_read] may skip while hunting for the sync
/// pattern, per invocation.
const RESYNC_WINDOW: usize = 4096;

/// Outcome of feeding bytes into the [Decoder].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Status {
    /// Nothing decoded yet, keep feeding.
    NeedMore,

    /// A new observation batch is available.
    Observation,

    /// A new ephemeris was published.
    Ephemeris,

    /// A new SBAS message was captured.
    SbasMessage,

    /// An external event mark is pending on the observation batch.
    EventMark,

    /// Ionosphere/UTC parameters were refreshed.
    IonUtc,

    /// Frame discarded (length, checksum or payload error).
    Error,

    /// The byte source is exhausted ([Decoder::input_read] only).
    EndOfStream,
}

impl Status {
    /// Legacy integer mapping, for hosts built against the historical
    /// return codes.
    pub fn code(&self) -> i32 {
        match self {
            Self::NeedMore => 0,
            Self::Observation => 1,
            Self::Ephemeris => 2,
            Self::SbasMessage => 3,
            Self::EventMark => 5,
            Self::IonUtc => 9,
            Self::Error => -1,
            Self::EndOfStream => -2,
        }
    }
}

/// Streaming UBX decoder. One instance per receiver link: instances
/// are fully independent and not meant to be shared across threads.
pub struct Decoder {
    /// Streaming buffer, holds at most one frame.
    buffer: [u8; MAX_FRAME_LEN],

    /// Write cursor within [Self::buffer].
    nbyte: usize,

    /// Total length of the frame being collected.
    frame_len: usize,

    /// Receiver dependent [Options].
    pub(crate) options: Options,

    /// Best known receiver time.
    pub(crate) time: Option<Epoch>,

    /// Observation output slot.
    pub(crate) observations: ObservationBatch,

    /// Carrier tracking state, per satellite.
    pub(crate) tracking: HashMap<SV, TrackingState>,

    /// Navigation frame scratch, per satellite.
    pub(crate) subframes: HashMap<SV, Subframes>,

    /// Published Keplerian ephemerides.
    pub(crate) ephemerides: HashMap<SV, Ephemeris>,

    /// Published GLONASS ephemerides, per slot number.
    pub(crate) glonass_ephemerides: HashMap<u8, GlonassEphemeris>,

    /// Published almanacs.
    pub(crate) almanacs: HashMap<SV, Almanac>,

    /// Latest ionosphere correction terms.
    pub(crate) ionosphere: Option<IonosphereParameters>,

    /// Latest UTC conversion parameters.
    pub(crate) utc: Option<UtcParameters>,

    /// SBAS message output slot.
    pub(crate) sbas: Option<SbasMessage>,

    /// Satellite whose ephemeris was published last.
    pub(crate) ephemeris_sv: Option<SV>,
}

impl Default for Decoder {
    fn default() -> Self {
        Self::new(Options::default())
    }
}

impl Decoder {
    /// Builds a new [Decoder] with these [Options].
    pub fn new(options: Options) -> Self {
        Self {
            buffer: [0; MAX_FRAME_LEN],
            nbyte: 0,
            frame_len: 0,
            options,
            time: None,
            observations: ObservationBatch::default(),
            tracking: HashMap::new(),
            subframes: HashMap::new(),
            ephemerides: HashMap::new(),
            glonass_ephemerides: HashMap::new(),
            almanacs: HashMap::new(),
            ionosphere: None,
            utc: None,
            sbas: None,
            ephemeris_sv: None,
        }
    }

    /// Best known receiver time, from the latest time bearing frame.
    pub fn time(&self) -> Option<Epoch> {
        self.time
    }

    /// Latest observation batch. Valid right after
    /// [Status::Observation], until the next raw measurement frame.
    pub fn observations(&self) -> &ObservationBatch {
        &self.observations
    }

    /// Published [Ephemeris] for this satellite, if any.
    pub fn ephemeris(&self, sv: SV) -> Option<&Ephemeris> {
        self.ephemerides.get(&sv)
    }

    /// Iterates every published [Ephemeris].
    pub fn ephemerides_iter(&self) -> impl Iterator<Item = (&SV, &Ephemeris)> {
        self.ephemerides.iter()
    }

    /// Published [GlonassEphemeris] for this slot number, if any.
    pub fn glonass_ephemeris(&self, slot: u8) -> Option<&GlonassEphemeris> {
        self.glonass_ephemerides.get(&slot)
    }

    /// Iterates every published [GlonassEphemeris].
    pub fn glonass_ephemerides_iter(&self) -> impl Iterator<Item = (&u8, &GlonassEphemeris)> {
        self.glonass_ephemerides.iter()
    }

    /// Published [Almanac] for this satellite, if any.
    pub fn almanac(&self, sv: SV) -> Option<&Almanac> {
        self.almanacs.get(&sv)
    }

    /// Latest [IonosphereParameters], if any were received.
    pub fn ionosphere(&self) -> Option<&IonosphereParameters> {
        self.ionosphere.as_ref()
    }

    /// Latest [UtcParameters], if any were received.
    pub fn utc_parameters(&self) -> Option<&UtcParameters> {
        self.utc.as_ref()
    }

    /// Latest [SbasMessage]. Valid right after [Status::SbasMessage].
    pub fn sbas_message(&self) -> Option<&SbasMessage> {
        self.sbas.as_ref()
    }

    /// Satellite behind the latest [Status::Ephemeris].
    pub fn ephemeris_sv(&self) -> Option<SV> {
        self.ephemeris_sv
    }

    /// Feeds one byte into the decoder. Returns immediately: this is
    /// the only operation with respect to external I/O and it never
    /// suspends.
    pub fn input_byte(&mut self, byte: u8) -> Status {
        if self.nbyte == 0 {
            if !self.synchronize(byte) {
                return Status::NeedMore;
            }
            self.nbyte = 2;
            return Status::NeedMore;
        }

        self.buffer[self.nbyte] = byte;
        self.nbyte += 1;

        if self.nbyte == 6 {
            self.frame_len = read_u16(&self.buffer, 4) as usize + 8;
            if self.frame_len > MAX_FRAME_LEN {
                debug!("frame length error: len={}", self.frame_len);
                self.nbyte = 0;
                return Status::Error;
            }
        }

        if self.nbyte < 6 || self.nbyte < self.frame_len {
            return Status::NeedMore;
        }

        self.nbyte = 0;
        self.decode_frame()
    }

    /// Pulls bytes from a blocking source until one frame has been
    /// processed. At most [RESYNC_WINDOW] bytes are skipped while
    /// hunting for the sync pattern; [Status::EndOfStream] reports
    /// source exhaustion.
    pub fn input_read<R: Read>(&mut self, reader: &mut R) -> Status {
        // synchronize
        let mut skipped = 0;
        loop {
            let byte = match read_byte(reader) {
                Some(byte) => byte,
                None => return Status::EndOfStream,
            };
            if self.synchronize(byte) {
                break;
            }
            skipped += 1;
            if skipped >= RESYNC_WINDOW {
                return Status::NeedMore;
            }
        }
        self.nbyte = 2;

        // class, id, length
        if reader.read_exact(&mut self.buffer[2..6]).is_err() {
            self.nbyte = 0;
            return Status::EndOfStream;
        }
        self.nbyte = 6;

        self.frame_len = read_u16(&self.buffer, 4) as usize + 8;
        if self.frame_len > MAX_FRAME_LEN {
            debug!("frame length error: len={}", self.frame_len);
            self.nbyte = 0;
            return Status::Error;
        }

        // payload and checksum
        let frame_len = self.frame_len;
        if reader.read_exact(&mut self.buffer[6..frame_len]).is_err() {
            self.nbyte = 0;
            return Status::EndOfStream;
        }

        self.nbyte = 0;
        self.decode_frame()
    }

    /// Sliding two byte window over the sync pattern.
    fn synchronize(&mut self, byte: u8) -> bool {
        self.buffer[0] = self.buffer[1];
        self.buffer[1] = byte;
        self.buffer[0] == SYNC_1 && self.buffer[1] == SYNC_2
    }

    /// The complete frame being decoded, checksum included.
    pub(crate) fn frame(&self) -> &[u8] {
        &self.buffer[..self.frame_len]
    }

    /// Tracking state slot for this satellite.
    pub(crate) fn tracking_mut(&mut self, sv: SV) -> &mut TrackingState {
        self.tracking.entry(sv).or_default()
    }

    /// Subframe scratch area for this satellite.
    pub(crate) fn subframes_mut(&mut self, sv: SV) -> &mut Subframes {
        self.subframes.entry(sv).or_default()
    }

    /// Week number truncated broadcast fields are expanded against:
    /// the receiver time when known, the host clock otherwise.
    pub(crate) fn reference_week(&self) -> u32 {
        let reference = self
            .time
            .or_else(|| Epoch::now().ok())
            .unwrap_or_else(Epoch::default);
        crate::time::gpst_week_tow(reference).0
    }

    /// Validates and dispatches one complete frame.
    fn decode_frame(&mut self) -> Status {
        let msg_type = ((self.buffer[2] as u16) << 8) | self.buffer[3] as u16;

        if !checksum::verify(self.frame()) {
            debug!(
                "checksum error: type={:04x} len={}",
                msg_type, self.frame_len
            );
            return Status::Error;
        }

        let result = match msg_type {
            RXM_RAW => self.decode_rxm_raw(),
            RXM_RAWX => self.decode_rxm_rawx(),
            RXM_SFRB => self.decode_rxm_sfrb(),
            RXM_SFRBX => self.decode_rxm_sfrbx(),
            NAV_SOL => self.decode_nav_sol(),
            NAV_TIMEGPS => self.decode_nav_timegps(),
            TIM_TM2 => self.decode_tim_tm2(),
            #[cfg(feature = "trk")]
            TRK_MEAS => self.decode_trk_meas(),
            #[cfg(feature = "trk")]
            TRK_D5 => self.decode_trk_d5(),
            #[cfg(feature = "trk")]
            TRK_SFRBX => self.decode_trk_sfrbx(),
            _ => {
                // unknown types preserve stream continuity
                trace!("unhandled frame: type={:04x} len={}", msg_type, self.frame_len);
                Ok(Status::NeedMore)
            },
        };

        match result {
            Ok(status) => status,
            Err(error) => {
                debug!("type={:04x}: {}", msg_type, error);
                Status::Error
            },
        }
    }

    /// UBX-NAV-SOL: receiver time update, when week and TOW are both
    /// flagged valid. Never produces observations.
    fn decode_nav_sol(&mut self) -> Result<Status, DecodeError> {
        let frame = self.frame();
        if frame.len() < 20 {
            return Err(DecodeError::PayloadUnderflow {
                len: frame.len(),
                expected: 20,
            });
        }

        let itow = read_u32(frame, 6);
        let ftow = read_i32(frame, 10);
        let week = read_u16(frame, 14);
        let flags = read_u8(frame, 17);

        if flags & 0x0C == 0x0C {
            self.time = Some(epoch_from_gpst(
                week as u32,
                itow as f64 * 1.0E-3 + ftow as f64 * 1.0E-9,
            ));
        }
        Ok(Status::NeedMore)
    }

    /// UBX-NAV-TIMEGPS: receiver time update, when week and TOW are
    /// both flagged valid.
    fn decode_nav_timegps(&mut self) -> Result<Status, DecodeError> {
        let frame = self.frame();
        if frame.len() < 20 {
            return Err(DecodeError::PayloadUnderflow {
                len: frame.len(),
                expected: 20,
            });
        }

        let itow = read_u32(frame, 6);
        let ftow = read_i32(frame, 10);
        let week = read_u16(frame, 14);
        let flags = read_u8(frame, 17);

        if flags & 0x03 == 0x03 {
            self.time = Some(epoch_from_gpst(
                week as u32,
                itow as f64 * 1.0E-3 + ftow as f64 * 1.0E-9,
            ));
        }
        Ok(Status::NeedMore)
    }

    /// UBX-TIM-TM2: external event time mark. The rising edge epoch
    /// is stamped on the observation output slot (flag 5), never
    /// reported as a standalone message.
    fn decode_tim_tm2(&mut self) -> Result<Status, DecodeError> {
        let frame = self.frame();
        if frame.len() < 36 {
            return Err(DecodeError::PayloadUnderflow {
                len: frame.len(),
                expected: 36,
            });
        }

        let flags = read_u8(frame, 7);
        let week_rising = read_u16(frame, 10);
        let tow_ms = read_u32(frame, 14);
        let tow_sub_ms = read_u32(frame, 18);

        // new rising edge with valid time only
        if flags & 0xC0 == 0xC0 {
            let event = epoch_from_gpst(
                week_rising as u32,
                tow_ms as f64 * 1.0E-3 + tow_sub_ms as f64 * 1.0E-9,
            );
            trace!("tim-tm2: event mark {}", event);
            self.observations.flag = Status::EventMark.code() as u8;
            self.observations.event = Some(event);
        }
        Ok(Status::NeedMore)
    }
}

fn read_byte<R: Read>(reader: &mut R) -> Option<u8> {
    let mut byte = [0; 1];
    loop {
        match reader.read(&mut byte) {
            Ok(0) => return None,
            Ok(_) => return Some(byte[0]),
            Err(error) if error.kind() == std::io::ErrorKind::Interrupted => continue,
            Err(_) => return None,
        }
    }
}
