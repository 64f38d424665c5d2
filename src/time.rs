//! GNSS time helpers: week/TOW conversions, truncated week expansion
//! and half-week wrap arithmetic.

use hifitime::{Duration, Epoch, TimeScale};

/// Seconds per GNSS week.
pub(crate) const WEEK_SECONDS: f64 = 604_800.0;

/// Half a GNSS week, the wrap threshold for all TOW comparisons.
pub(crate) const HALF_WEEK_SECONDS: f64 = 302_400.0;

/// Builds the GPST [Epoch] for (week, time of week).
pub(crate) fn epoch_from_gpst(week: u32, tow_s: f64) -> Epoch {
    Epoch::from_time_of_week(week, (tow_s * 1.0E9).round() as u64, TimeScale::GPST)
}

/// Returns (week, time of week in seconds), GPST.
pub(crate) fn gpst_week_tow(t: Epoch) -> (u32, f64) {
    let (week, nanos) = t.to_time_scale(TimeScale::GPST).to_time_of_week();
    (week, nanos as f64 * 1.0E-9)
}

/// GPST minus UTC, in seconds, at instant `t` (from the hifitime leap
/// second table; GPST runs 19 s behind TAI).
pub(crate) fn gpst_utc_offset_s(t: Epoch) -> f64 {
    t.leap_seconds(true).unwrap_or(37.0) - 19.0
}

/// Expands an 8-bit truncated week so it lands within ±128 weeks of
/// `reference`.
pub(crate) fn expand_week_8bit(reference: u32, truncated: u32) -> u32 {
    expand_week(reference, truncated, 256)
}

/// Expands a 10-bit truncated week so it lands within ±512 weeks of
/// `reference`.
pub(crate) fn expand_week_10bit(reference: u32, truncated: u32) -> u32 {
    expand_week(reference, truncated, 1024)
}

fn expand_week(reference: u32, truncated: u32, modulus: u32) -> u32 {
    let mut week = (reference / modulus) * modulus + truncated % modulus;
    if week + modulus / 2 < reference {
        week += modulus;
    } else if week > reference + modulus / 2 && week >= modulus {
        week -= modulus;
    }
    week
}

/// Wraps a time difference into the ±half week range.
pub(crate) fn wrap_half_week(mut dt_s: f64) -> f64 {
    if dt_s > HALF_WEEK_SECONDS {
        dt_s -= WEEK_SECONDS;
    } else if dt_s < -HALF_WEEK_SECONDS {
        dt_s += WEEK_SECONDS;
    }
    dt_s
}

/// Moves `week` so `tow_s` lands within half a week of `reference_tow_s`.
pub(crate) fn reconcile_week(week: u32, tow_s: f64, reference_tow_s: f64) -> u32 {
    if tow_s < reference_tow_s - HALF_WEEK_SECONDS {
        week + 1
    } else if tow_s > reference_tow_s + HALF_WEEK_SECONDS {
        week - 1
    } else {
        week
    }
}

/// Duration in seconds, as a convenience for epoch arithmetic.
pub(crate) fn seconds(s: f64) -> Duration {
    Duration::from_seconds(s)
}

#[cfg(test)]
mod test {
    use super::*;
    use hifitime::TimeScale;

    #[test]
    fn gpst_round_trip() {
        let t = epoch_from_gpst(2000, 100.0);
        let (week, tow) = gpst_week_tow(t);
        assert_eq!(week, 2000);
        assert!((tow - 100.0).abs() < 1.0E-9);
        assert_eq!(t.time_scale, TimeScale::GPST);
    }

    #[test]
    fn week_expansion() {
        // 10-bit rollover
        assert_eq!(expand_week_10bit(2216, 2216 % 1024), 2216);
        assert_eq!(expand_week_10bit(2047, 0), 2048);
        assert_eq!(expand_week_10bit(2048, 1023), 2047);

        // 8-bit utc week
        assert_eq!(expand_week_8bit(2216, 2216 % 256), 2216);
        assert_eq!(expand_week_8bit(2303, 1), 2305);
        assert_eq!(expand_week_8bit(2305, 255), 2303);
    }

    #[test]
    fn half_week_wraps() {
        assert_eq!(wrap_half_week(604000.0), -800.0);
        assert_eq!(wrap_half_week(-604000.0), 800.0);
        assert_eq!(wrap_half_week(1000.0), 1000.0);

        assert_eq!(reconcile_week(2000, 10.0, 604790.0), 2001);
        assert_eq!(reconcile_week(2000, 604790.0, 10.0), 1999);
        assert_eq!(reconcile_week(2000, 1000.0, 2000.0), 2000);
    }
}
