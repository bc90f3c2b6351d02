//! Sentinel masking and gap repair for component sequences
//!
//! SuperMAG writes a reserved value (999999.0) where a station reported
//! nothing. Anything at or above the sentinel is masked to NaN, including
//! values that only reached it through accumulated error. The optional
//! repair step fills masked entries by linear interpolation over the
//! irregular time axis and extrapolates past both ends of the present data.

use chrono::{DateTime, Utc};

/// Replace every value `>= sentinel` with NaN, returning how many were masked
pub fn mask_sentinels(values: &mut [f64], sentinel: f64) -> usize {
    let mut masked = 0;
    for value in values.iter_mut() {
        if *value >= sentinel {
            *value = f64::NAN;
            masked += 1;
        }
    }
    masked
}

/// Seconds since the first timestamp, as the interpolation abscissa
pub fn time_ordinals(times: &[DateTime<Utc>]) -> Vec<f64> {
    match times.first() {
        Some(&origin) => times
            .iter()
            .map(|t| (*t - origin).num_milliseconds() as f64 / 1000.0)
            .collect(),
        None => Vec::new(),
    }
}

/// Fill NaN entries by linear interpolation in `ordinals`
///
/// Entries outside the span of present data are linearly extrapolated from
/// the two outermost present points. With fewer than two present points
/// nothing can be fitted and the NaNs are left in place. Returns the number
/// of entries filled.
pub fn interpolate_missing(values: &mut [f64], ordinals: &[f64]) -> usize {
    debug_assert_eq!(values.len(), ordinals.len());

    let present: Vec<(f64, f64)> = ordinals
        .iter()
        .zip(values.iter())
        .filter(|(_, v)| !v.is_nan())
        .map(|(t, v)| (*t, *v))
        .collect();

    if present.len() < 2 || present.len() == values.len() {
        return 0;
    }

    let mut filled = 0;
    for (value, &t) in values.iter_mut().zip(ordinals) {
        if value.is_nan() {
            *value = interpolate_at(&present, t);
            filled += 1;
        }
    }
    filled
}

/// Evaluate the piecewise-linear fit through `points` (sorted by abscissa) at `t`
fn interpolate_at(points: &[(f64, f64)], t: f64) -> f64 {
    // index of the first point strictly after t
    let upper = points.partition_point(|(pt, _)| *pt <= t);
    let (lo, hi) = if upper == 0 {
        (0, 1)
    } else if upper >= points.len() {
        (points.len() - 2, points.len() - 1)
    } else {
        (upper - 1, upper)
    };

    let (t0, v0) = points[lo];
    let (t1, v1) = points[hi];
    if t1 == t0 {
        return v0;
    }
    v0 + (v1 - v0) * (t - t0) / (t1 - t0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::SENTINEL_VALUE;
    use chrono::TimeZone;

    #[test]
    fn test_mask_uses_threshold_not_equality() {
        let mut values = vec![1.0, 999999.0, 1000000.5, 999998.9];
        let masked = mask_sentinels(&mut values, SENTINEL_VALUE);
        assert_eq!(masked, 2);
        assert_eq!(values[0], 1.0);
        assert!(values[1].is_nan());
        assert!(values[2].is_nan());
        assert_eq!(values[3], 999998.9);
    }

    #[test]
    fn test_mask_is_idempotent() {
        let mut values = vec![999999.0, 2.0, 999999.0];
        mask_sentinels(&mut values, SENTINEL_VALUE);
        let once = values.clone();
        assert_eq!(mask_sentinels(&mut values, SENTINEL_VALUE), 0);
        assert!(values.iter().all(|v| !(*v >= SENTINEL_VALUE)));
        assert_eq!(values[1], once[1]);
        assert!(values[0].is_nan() && values[2].is_nan());
    }

    #[test]
    fn test_interpolate_interior_gap_on_irregular_grid() {
        let ordinals = [0.0, 60.0, 240.0];
        let mut values = [0.0, f64::NAN, 8.0];
        let filled = interpolate_missing(&mut values, &ordinals);
        assert_eq!(filled, 1);
        // weighted by time, not by index
        assert_eq!(values[1], 2.0);
    }

    #[test]
    fn test_extrapolates_at_both_ends() {
        let ordinals = [0.0, 1.0, 2.0, 3.0, 4.0];
        let mut values = [f64::NAN, 1.0, 2.0, 3.0, f64::NAN];
        interpolate_missing(&mut values, &ordinals);
        assert_eq!(values, [0.0, 1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn test_single_present_point_stays_missing() {
        let ordinals = [0.0, 1.0, 2.0];
        let mut values = [f64::NAN, 5.0, f64::NAN];
        assert_eq!(interpolate_missing(&mut values, &ordinals), 0);
        assert!(values[0].is_nan() && values[2].is_nan());
    }

    #[test]
    fn test_duplicate_timestamps_do_not_divide_by_zero() {
        let ordinals = [0.0, 0.0, 1.0];
        let mut values = [1.0, 3.0, f64::NAN];
        interpolate_missing(&mut values, &ordinals);
        assert!(values[2].is_finite());
    }

    #[test]
    fn test_time_ordinals() {
        let times = vec![
            Utc.with_ymd_and_hms(2001, 1, 1, 0, 0, 0).unwrap(),
            Utc.with_ymd_and_hms(2001, 1, 1, 0, 2, 0).unwrap(),
            Utc.with_ymd_and_hms(2001, 1, 2, 0, 0, 0).unwrap(),
        ];
        assert_eq!(time_ordinals(&times), vec![0.0, 120.0, 86400.0]);
        assert!(time_ordinals(&[]).is_empty());
    }
}
