//! UBX-RXM-RAW: legacy single constellation raw measurements
//! (GPS and SBAS, L1 C/A only).

use crate::{
    bytes::{read_f32, read_f64, read_i32, read_i8, read_u16, read_u8},
    decoder::{Decoder, Status},
    errors::DecodeError,
    observation::{LliFlags, ObservationBatch},
    signal::{satellite, Code},
    time::{gpst_week_tow, epoch_from_gpst, seconds},
    MAX_OBSERVATIONS, SPEED_OF_LIGHT_M_S,
};

use gnss::prelude::Constellation;
use log::{debug, trace};

impl Decoder {
    /// Decodes one UBX-RXM-RAW frame. The receiver only reports the
    /// L1 slot and its own loss-of-lock indicator, both forwarded
    /// as-is.
    pub(crate) fn decode_rxm_raw(&mut self) -> Result<Status, DecodeError> {
        let frame = self.frame();
        if frame.len() < 16 {
            return Err(DecodeError::PayloadUnderflow {
                len: frame.len(),
                expected: 16,
            });
        }

        let tow_ms = read_i32(frame, 6);
        let week = read_u16(frame, 10);
        let n_sat = read_u8(frame, 12) as usize;

        if frame.len() < 16 + 24 * n_sat {
            return Err(DecodeError::PayloadUnderflow {
                len: frame.len(),
                expected: 16 + 24 * n_sat,
            });
        }
        if week == 0 {
            trace!("rxm-raw: week=0");
            return Ok(Status::NeedMore);
        }

        let mut time = epoch_from_gpst(week as u32, tow_ms as f64 * 1.0E-3);

        // time tag quantization (-TADJ)
        let mut toff = 0.0;
        if let Some(tint) = self.options.time_adjustment {
            let (_, tow_s) = gpst_week_tow(time);
            let tn = tow_s / tint;
            toff = (tn - (tn + 0.5).floor()) * tint;
            time = time - seconds(toff);
        }

        let l1_hz = Code::L1C.frequency_hz(Constellation::GPS, 0);

        let mut batch = ObservationBatch {
            time: Some(time),
            observations: Vec::with_capacity(n_sat),
            flag: self.observations.flag,
            event: self.observations.event,
        };

        for index in 0..n_sat.min(MAX_OBSERVATIONS) {
            let base = 14 + 24 * index;

            // empty carrier phases are exempt from the adjustment
            let mut carrier_phase_cycles = read_f64(frame, base);
            if carrier_phase_cycles != 0.0 {
                carrier_phase_cycles -= toff * l1_hz;
            }
            let pseudorange_m = read_f64(frame, base + 8) - toff * SPEED_OF_LIGHT_M_S;
            let doppler_hz = read_f32(frame, base + 16);
            let prn = read_u8(frame, base + 20);
            let cno_dbhz = read_i8(frame, base + 22);
            let lli = read_u8(frame, base + 23);

            if self.options.invert_carrier_phase {
                carrier_phase_cycles = -carrier_phase_cycles;
            }

            let constellation = if prn >= 120 {
                Constellation::SBAS
            } else {
                Constellation::GPS
            };

            let sv = match satellite(constellation, prn) {
                Ok(sv) => sv,
                Err(error) => {
                    debug!("rxm-raw: {}", error);
                    continue;
                },
            };

            let observation = batch.observation_mut(sv);
            observation.carrier_phase_cycles[0] = carrier_phase_cycles;
            observation.pseudorange_m[0] = pseudorange_m;
            observation.doppler_hz[0] = doppler_hz;
            observation.snr_dbhz4[0] = (cno_dbhz.max(0) as u16) * 4;
            observation.lli[0] = LliFlags::from_bits_truncate(lli);
            observation.code[0] = Some(Code::L1C);
        }

        self.time = Some(time);
        self.observations = batch;
        Ok(Status::Observation)
    }
}
