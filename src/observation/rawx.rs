//! UBX-RXM-RAWX: multi-GNSS raw measurements.

use crate::{
    bytes::{read_f32, read_f64, read_u16, read_u8},
    decoder::{Decoder, Status},
    errors::DecodeError,
    observation::{LliFlags, ObservationBatch, TrackingStatus},
    signal::{constellation_id, default_code, satellite, signal_id},
    time::{gpst_week_tow, epoch_from_gpst, seconds},
    MAX_OBSERVATIONS, SPEED_OF_LIGHT_M_S,
};

use gnss::prelude::{Constellation, SV};
use log::{debug, trace};

/// Lock time, in ms, above which an SBAS carrier phase is considered
/// half-cycle resolved.
const SBAS_HALF_CYCLE_LOCK_MS: u16 = 8000;

/// One parsed measurement block, before the tracking state pass.
struct Measurement {
    sv: SV,
    pseudorange_m: f64,
    carrier_phase_cycles: f64,
    doppler_hz: f32,
    lock_ms: u16,
    cno_dbhz: u8,
    pr_std: u8,
    cp_std: u8,
    slot: usize,
    code: crate::signal::Code,
    half_cycle_valid: bool,
    half_cycle_subtracted: bool,
}

impl Decoder {
    /// Decodes one UBX-RXM-RAWX frame into a time tagged observation
    /// batch.
    pub(crate) fn decode_rxm_rawx(&mut self) -> Result<Status, DecodeError> {
        let frame = self.frame();
        if frame.len() < 24 {
            return Err(DecodeError::PayloadUnderflow {
                len: frame.len(),
                expected: 24,
            });
        }

        let tow_s = read_f64(frame, 6);
        let week = read_u16(frame, 14);
        let n_meas = read_u8(frame, 17) as usize;
        let version = read_u8(frame, 19);

        if frame.len() < 24 + 32 * n_meas {
            return Err(DecodeError::PayloadUnderflow {
                len: frame.len(),
                expected: 24 + 32 * n_meas,
            });
        }
        if week == 0 {
            // receiver has not resolved time yet
            trace!("rxm-rawx: week=0");
            return Ok(Status::NeedMore);
        }

        let mut time = epoch_from_gpst(week as u32, tow_s);

        // time tag quantization (-TADJ)
        let mut toff = 0.0;
        if let Some(tint) = self.options.time_adjustment {
            let (_, tow_s) = gpst_week_tow(time);
            let tn = tow_s / tint;
            toff = (tn - (tn + 0.5).floor()) * tint;
            time = time - seconds(toff);
        }

        let max_cp_std = self.options.max_carrier_phase_std;

        let mut measurements = Vec::with_capacity(n_meas);

        for index in 0..n_meas {
            let base = 22 + 32 * index;

            let mut pseudorange_m = read_f64(frame, base);
            let mut carrier_phase_cycles = read_f64(frame, base + 8);
            let doppler_hz = read_f32(frame, base + 16);
            let gnss_id = read_u8(frame, base + 20);
            let mut prn = read_u8(frame, base + 21);
            let sig_id = read_u8(frame, base + 22);
            let freq_id = read_u8(frame, base + 23);
            let lock_ms = read_u16(frame, base + 24);
            let cno_dbhz = read_u8(frame, base + 26);
            let pr_std = read_u8(frame, base + 27) & 0x0F;
            let cp_std = read_u8(frame, base + 28) & 0x0F;
            let trk_stat = TrackingStatus::from_bits_truncate(read_u8(frame, base + 30));

            if !trk_stat.contains(TrackingStatus::PR_VALID) {
                pseudorange_m = 0.0;
            }
            if !trk_stat.contains(TrackingStatus::CP_VALID)
                || carrier_phase_cycles == -0.5
                || cp_std > max_cp_std
            {
                carrier_phase_cycles = 0.0;
            }

            let constellation = match constellation_id(gnss_id) {
                Ok(constellation) => constellation,
                Err(error) => {
                    debug!("rxm-rawx: {}", error);
                    continue;
                },
            };

            if constellation == Constellation::QZSS {
                prn = prn.saturating_add(192);
            }

            let sv = match satellite(constellation, prn) {
                Ok(sv) => sv,
                Err(_) if constellation == Constellation::Glonass && prn == 255 => {
                    // unknown GLONASS slot, quietly dropped
                    continue;
                },
                Err(error) => {
                    debug!("rxm-rawx: {}", error);
                    continue;
                },
            };

            let code = if version >= 1 {
                match signal_id(constellation, sig_id) {
                    Some(code) => code,
                    None => {
                        debug!("rxm-rawx: {} unhandled signal {}", sv, sig_id);
                        continue;
                    },
                }
            } else {
                default_code(constellation)
            };

            // time tag adjustment carried into the measurements
            if toff != 0.0 {
                pseudorange_m -= toff * SPEED_OF_LIGHT_M_S;
                if carrier_phase_cycles != 0.0 {
                    let freq_hz = code.frequency_hz(constellation, (freq_id as i16 - 7) as i8);
                    carrier_phase_cycles -= toff * freq_hz;
                }
            }

            let half_cycle_valid = if constellation == Constellation::SBAS {
                lock_ms > SBAS_HALF_CYCLE_LOCK_MS
            } else {
                trk_stat.contains(TrackingStatus::HALF_CYCLE_VALID)
            };

            measurements.push(Measurement {
                sv,
                pseudorange_m,
                carrier_phase_cycles,
                doppler_hz,
                lock_ms,
                cno_dbhz,
                pr_std,
                cp_std,
                slot: code.slot(),
                code,
                half_cycle_valid,
                half_cycle_subtracted: trk_stat.contains(TrackingStatus::HALF_CYCLE_SUBTRACTED),
            });
        }

        let mut batch = ObservationBatch {
            time: Some(time),
            observations: Vec::with_capacity(measurements.len()),
            // event marks survive until the host collects them
            flag: self.observations.flag,
            event: self.observations.event,
        };

        let slip_std = self.options.slip_carrier_phase_std;

        for meas in measurements {
            let (sv, slot) = (meas.sv, meas.slot);

            let state = self.tracking_mut(sv);

            // cycle slip bookkeeping
            let mut slip = meas.lock_ms == 0
                || (meas.lock_ms as f64 * 1.0E-3) < state.lock_time_s[slot]
                || meas.half_cycle_subtracted != state.half_cycle_subtracted[slot];
            slip |= meas.cp_std >= slip_std;

            if slip {
                state.slip[slot] = true;
            }
            state.lock_time_s[slot] = meas.lock_ms as f64 * 1.0E-3;
            state.half_cycle_subtracted[slot] = meas.half_cycle_subtracted;

            let mut lli = LliFlags::default();
            if meas.carrier_phase_cycles != 0.0 {
                if state.slip[slot] {
                    lli |= LliFlags::SLIP;
                }
                if !meas.half_cycle_valid {
                    lli |= LliFlags::HALF_CYCLE_INVALID;
                }
                // slip indicator was emitted: clear it
                state.slip[slot] = false;
            }

            if batch.len() >= MAX_OBSERVATIONS
                && !batch.observations.iter().any(|obs| obs.sv == sv)
            {
                debug!("rxm-rawx: observation overflow, {} dropped", sv);
                continue;
            }

            let observation = batch.observation_mut(sv);
            observation.pseudorange_m[slot] = meas.pseudorange_m;
            observation.carrier_phase_cycles[slot] = meas.carrier_phase_cycles;
            observation.doppler_hz[slot] = meas.doppler_hz;
            observation.snr_dbhz4[slot] = meas.cno_dbhz as u16 * 4;
            observation.lli[slot] = lli;
            observation.code[slot] = Some(meas.code);
            observation.carrier_phase_std[slot] = meas.cp_std.min(9);
            observation.pseudorange_std[slot] =
                (1_u16 << meas.pr_std.saturating_sub(5)).min(9) as u8;
        }

        self.time = Some(time);
        self.observations = batch;
        Ok(Status::Observation)
    }
}
