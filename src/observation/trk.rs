//! UBX-TRK-MEAS and UBX-TRK-D5: undocumented tracking measurements.
//!
//! No vendor specification exists for these frames. The decoders are
//! best effort reconstructions and only built under the `trk` crate
//! feature. The receiver reports per channel transmission times: the
//! reception epoch is rebuilt from the latest transmission plus a
//! nominal 80 ms flight time, rounded to the 100 ms measurement grid.

use crate::{
    bytes::{read_i32, read_i64, read_u16, read_u8},
    decoder::{Decoder, Status},
    errors::DecodeError,
    navigation::P2_32,
    observation::{LliFlags, ObservationBatch},
    signal::{constellation_id, default_code, satellite},
    time::{gpst_week_tow, epoch_from_gpst, gpst_utc_offset_s, reconcile_week},
    MAX_OBSERVATIONS, SPEED_OF_LIGHT_M_S,
};

use gnss::prelude::{Constellation, SV};
use log::{debug, trace};

const P2_10: f64 = 0.0009765625;

/// Nominal signal flight time added to the latest transmission time.
const FLIGHT_TIME_S: f64 = 0.08;

/// Moscow decree time offset against UTC, in seconds.
const MOSCOW_UTC_OFFSET_S: f64 = 10_800.0;

/// BDT to GPST offset, in seconds.
const BDT_GPST_OFFSET_S: f64 = 14.0;

/// GLONASS inter-channel code biases, in meters, indexed by `fcn + 7`.
/// Two empirical generations selected through `-TRKM_ADJ`.
const GLONASS_CODE_BIAS_2: [f64; 14] = [
    -0.42, -0.36, -0.30, -0.24, -0.18, -0.12, -0.06, 0.00, 0.06, 0.12, 0.18, 0.24, 0.30, 0.36,
];
const GLONASS_CODE_BIAS_3: [f64; 14] = [
    -0.21, -0.18, -0.15, -0.12, -0.09, -0.06, -0.03, 0.00, 0.03, 0.06, 0.09, 0.12, 0.15, 0.18,
];

fn glonass_code_bias(table: Option<u8>, fcn: i8) -> f64 {
    let index = (fcn as isize + 7) as usize;
    match table {
        Some(2) => GLONASS_CODE_BIAS_2.get(index).copied().unwrap_or(0.0),
        Some(3) => GLONASS_CODE_BIAS_3.get(index).copied().unwrap_or(0.0),
        _ => 0.0,
    }
}

impl Decoder {
    /// UBX-TRK-MEAS: per channel tracking measurements.
    pub(crate) fn decode_trk_meas(&mut self) -> Result<Status, DecodeError> {
        // reception time reconstruction needs a week reference
        let time = match self.time {
            Some(time) => time,
            None => return Ok(Status::NeedMore),
        };

        let frame = self.frame();
        if frame.len() < 110 {
            return Err(DecodeError::PayloadUnderflow {
                len: frame.len(),
                expected: 110,
            });
        }

        let n_channels = read_u8(frame, 8) as usize;
        if frame.len() < 110 + 56 * n_channels {
            return Err(DecodeError::PayloadUnderflow {
                len: frame.len(),
                expected: 110 + 56 * n_channels,
            });
        }

        // reception time: latest code-locked transmission + flight time
        let mut tr = f64::MIN;
        for channel in 0..n_channels {
            let base = 110 + 56 * channel;
            if (read_u8(frame, base + 1) & 0x7) < 4 {
                continue;
            }
            let ts = read_i64(frame, base + 24) as f64 * P2_32 * 1.0E-3;
            if ts > tr {
                tr = ts;
            }
        }
        if tr < 0.0 {
            return Ok(Status::NeedMore);
        }
        let tr = ((tr + FLIGHT_TIME_S) / 0.1).round() * 0.1;

        let (mut week, tow_s) = gpst_week_tow(time);
        week = reconcile_week(week, tr, tow_s);
        let batch_time = epoch_from_gpst(week, tr);
        let utc_offset = gpst_utc_offset_s(batch_time);

        let mut batch = ObservationBatch {
            time: Some(batch_time),
            observations: Vec::new(),
            flag: self.observations.flag,
            event: self.observations.event,
        };

        struct Channel {
            sv: SV,
            pseudorange_m: f64,
            carrier_phase_cycles: f64,
            doppler_hz: f32,
            snr_dbhz4: u16,
            phase_lock: u8,
            code: crate::signal::Code,
        }
        let mut channels = Vec::with_capacity(n_channels);

        for channel in 0..n_channels {
            let base = 110 + 56 * channel;

            // 4..=7: code lock at least
            let qi = read_u8(frame, base + 1) & 0x7;
            if !(4..=7).contains(&qi) {
                continue;
            }

            let constellation = match constellation_id(read_u8(frame, base + 4)) {
                Ok(constellation) => constellation,
                Err(error) => {
                    debug!("trk-meas: {}", error);
                    continue;
                },
            };
            let mut prn = read_u8(frame, base + 5);
            if constellation == Constellation::QZSS {
                prn = prn.saturating_add(192);
            }
            let sv = match satellite(constellation, prn) {
                Ok(sv) => sv,
                Err(error) => {
                    debug!("trk-meas: {}", error);
                    continue;
                },
            };

            let fcn = (read_u8(frame, base + 7) as i16 - 7) as i8;
            let flag = read_u8(frame, base + 8);
            let phase_lock = read_u8(frame, base + 17);
            let snr = read_u16(frame, base + 20) as f64 / 256.0;

            // transmission time, constellation time base to gpst
            let mut ts = read_i64(frame, base + 24) as f64 * P2_32 * 1.0E-3;
            match constellation {
                Constellation::BeiDou => ts += BDT_GPST_OFFSET_S,
                Constellation::Glonass => ts -= MOSCOW_UTC_OFFSET_S - utc_offset,
                _ => {},
            }

            // signal travel time
            let mut tau = tr - ts;
            if tau < -302_400.0 {
                tau += 604_800.0;
            } else if tau > 302_400.0 {
                tau -= 604_800.0;
            }

            let mut pseudorange_m = tau * SPEED_OF_LIGHT_M_S;
            if constellation == Constellation::Glonass {
                pseudorange_m += glonass_code_bias(self.options.glonass_bias_table, fcn);
            }

            // carrier only with phase lock
            let carrier_phase_cycles = if qi >= 6 {
                let adr = read_i64(frame, base + 32) as f64 * P2_32
                    + if flag & 0x01 != 0 { 0.5 } else { 0.0 };
                -adr
            } else {
                0.0
            };

            let doppler_hz = (read_i32(frame, base + 40) as f64 * P2_10 * 10.0) as f32;

            channels.push(Channel {
                sv,
                pseudorange_m,
                carrier_phase_cycles,
                doppler_hz,
                snr_dbhz4: (snr * 4.0 + 0.5) as u16,
                phase_lock,
                code: default_code(constellation),
            });
        }

        for channel in channels {
            let sv = channel.sv;
            let state = self.tracking_mut(sv);

            // phase lock counter dropping back signals a slip
            if channel.phase_lock == 0 || (channel.phase_lock as f64) < state.lock_time_s[0] {
                state.slip[0] = true;
            }
            state.lock_time_s[0] = channel.phase_lock as f64;

            let mut lli = LliFlags::default();
            if channel.carrier_phase_cycles != 0.0 {
                if state.slip[0] {
                    lli |= LliFlags::SLIP;
                }
                state.slip[0] = false;
            }

            if batch.len() >= MAX_OBSERVATIONS {
                trace!("trk-meas: observation overflow, {} dropped", sv);
                continue;
            }

            let observation = batch.observation_mut(sv);
            observation.pseudorange_m[0] = channel.pseudorange_m;
            observation.carrier_phase_cycles[0] = channel.carrier_phase_cycles;
            observation.doppler_hz[0] = channel.doppler_hz;
            observation.snr_dbhz4[0] = channel.snr_dbhz4;
            observation.lli[0] = lli;
            observation.code[0] = Some(channel.code);
        }

        self.time = Some(batch_time);
        let decoded = !batch.is_empty();
        self.observations = batch;
        if decoded {
            Ok(Status::Observation)
        } else {
            Ok(Status::NeedMore)
        }
    }

    /// UBX-TRK-D5: per channel tracking measurements, older layout.
    pub(crate) fn decode_trk_d5(&mut self) -> Result<Status, DecodeError> {
        let time = match self.time {
            Some(time) => time,
            None => return Ok(Status::NeedMore),
        };

        let frame = self.frame();
        let kind = read_u8(frame, 6);
        let (offset, stride) = match kind {
            3 => (86, 56),
            6 => (86, 64),
            _ => (78, 56),
        };
        if frame.len() < offset + stride {
            return Err(DecodeError::PayloadUnderflow {
                len: frame.len(),
                expected: offset + stride,
            });
        }

        let utc_offset = gpst_utc_offset_s(time);

        // reception time: latest code-locked transmission + flight time
        let mut tr = f64::MIN;
        let mut base = offset;
        while base + stride <= frame.len() - 2 {
            let qi = read_u8(frame, base + 41) & 0x7;
            if (4..=7).contains(&qi) {
                let ts = read_i64(frame, base) as f64 * P2_32 * 1.0E-3;
                if ts > tr {
                    tr = ts;
                }
            }
            base += stride;
        }
        if tr < 0.0 {
            return Ok(Status::NeedMore);
        }
        let tr = ((tr + FLIGHT_TIME_S) / 0.1).round() * 0.1;

        let (mut week, tow_s) = gpst_week_tow(time);
        week = reconcile_week(week, tr, tow_s);
        let batch_time = epoch_from_gpst(week, tr);

        let mut batch = ObservationBatch {
            time: Some(batch_time),
            observations: Vec::new(),
            flag: self.observations.flag,
            event: self.observations.event,
        };

        let mut base = offset;
        while base + stride <= frame.len() - 2 {
            let block = base;
            base += stride;

            let qi = read_u8(frame, block + 41) & 0x7;
            if !(4..=7).contains(&qi) {
                continue;
            }

            let (constellation, prn, fcn) = if kind == 6 {
                let constellation = match constellation_id(read_u8(frame, block + 56)) {
                    Ok(constellation) => constellation,
                    Err(error) => {
                        debug!("trk-d5: {}", error);
                        continue;
                    },
                };
                let mut prn = read_u8(frame, block + 57);
                if constellation == Constellation::QZSS {
                    prn = prn.saturating_add(192);
                }
                (constellation, prn, (read_u8(frame, block + 59) as i16 - 7) as i8)
            } else {
                let prn = read_u8(frame, block + 34);
                let constellation = if prn >= 120 {
                    Constellation::SBAS
                } else {
                    Constellation::GPS
                };
                (constellation, prn, 0)
            };

            let sv = match satellite(constellation, prn) {
                Ok(sv) => sv,
                Err(error) => {
                    debug!("trk-d5: {}", error);
                    continue;
                },
            };

            let mut ts = read_i64(frame, block) as f64 * P2_32 * 1.0E-3;
            match constellation {
                Constellation::BeiDou => ts += BDT_GPST_OFFSET_S,
                Constellation::Glonass => ts -= MOSCOW_UTC_OFFSET_S - utc_offset,
                _ => {},
            }

            let mut tau = tr - ts;
            if tau < -302_400.0 {
                tau += 604_800.0;
            } else if tau > 302_400.0 {
                tau -= 604_800.0;
            }

            let flag = read_u8(frame, block + 54);
            let carrier_phase_cycles = if qi >= 6 {
                let adr = read_i64(frame, block + 8) as f64 * P2_32
                    + if flag & 0x01 != 0 { 0.5 } else { 0.0 };
                -adr
            } else {
                0.0
            };
            let doppler_hz = (read_i32(frame, block + 16) as f64 * P2_10 / 4.0) as f32;
            let snr = read_u16(frame, block + 32) as f64 / 256.0;

            if batch.len() >= MAX_OBSERVATIONS {
                trace!("trk-d5: observation overflow, {} dropped", sv);
                continue;
            }

            let mut pseudorange_m = tau * SPEED_OF_LIGHT_M_S;
            if constellation == Constellation::Glonass {
                pseudorange_m += glonass_code_bias(self.options.glonass_bias_table, fcn);
            }

            let observation = batch.observation_mut(sv);
            observation.pseudorange_m[0] = pseudorange_m;
            observation.carrier_phase_cycles[0] = carrier_phase_cycles;
            observation.doppler_hz[0] = doppler_hz;
            observation.snr_dbhz4[0] = (snr * 4.0 + 0.5) as u16;
            observation.code[0] = Some(default_code(constellation));
        }

        self.time = Some(batch_time);
        let decoded = !batch.is_empty();
        self.observations = batch;
        if decoded {
            Ok(Status::Observation)
        } else {
            Ok(Status::NeedMore)
        }
    }
}
