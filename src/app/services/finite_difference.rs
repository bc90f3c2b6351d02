//! Time derivatives and magnitudes of field components on irregular grids
//!
//! Derivatives use three-point stencils whose denominator is the sum of the
//! two adjacent sample gaps, so uneven spacing from data dropouts is handled
//! without resampling:
//!
//! - first sample: `(-v[2] + 4 v[1] - 3 v[0]) / (gap[1] + gap[0])`
//! - interior `i`: `(v[i+1] - v[i-1]) / (gap[i] + gap[i-1])`
//! - last sample: `(3 v[n-1] - 4 v[n-2] + v[n-3]) / (gap[n-2] + gap[n-3])`
//!
//! where `gap[i] = t[i+1] - t[i]` in seconds. These are the coefficients of
//! the SuperMAG dB/dt products, not the uniform-grid formulas. NaN inputs
//! propagate to NaN outputs.

use chrono::{DateTime, Utc};

use crate::{Error, Result};

/// Minimum number of samples the stencils need
pub const MIN_SAMPLES: usize = 3;

/// Gaps in seconds between consecutive timestamps (length `n - 1`)
pub fn time_gaps(times: &[DateTime<Utc>]) -> Vec<f64> {
    times
        .windows(2)
        .map(|w| (w[1] - w[0]).num_milliseconds() as f64 / 1000.0)
        .collect()
}

/// First time derivative of one component
pub fn first_derivative(values: &[f64], gaps: &[f64]) -> Result<Vec<f64>> {
    let n = values.len();
    if n < MIN_SAMPLES {
        return Err(Error::insufficient_samples(MIN_SAMPLES, n));
    }
    if gaps.len() != n - 1 {
        return Err(Error::data_validation(format!(
            "expected {} time gaps for {} samples, got {}",
            n - 1,
            n,
            gaps.len()
        )));
    }

    let mut rate = vec![0.0; n];

    for i in 1..n - 1 {
        rate[i] = (values[i + 1] - values[i - 1]) / (gaps[i] + gaps[i - 1]);
    }

    rate[0] = (-values[2] + 4.0 * values[1] - 3.0 * values[0]) / (gaps[1] + gaps[0]);
    rate[n - 1] =
        (3.0 * values[n - 1] - 4.0 * values[n - 2] + values[n - 3]) / (gaps[n - 2] + gaps[n - 3]);

    Ok(rate)
}

/// Horizontal rate of change: Euclidean norm of the north and east derivatives
pub fn horizontal_rate(north: &[f64], east: &[f64], gaps: &[f64]) -> Result<Vec<f64>> {
    check_same_length(north, east)?;
    let dn = first_derivative(north, gaps)?;
    let de = first_derivative(east, gaps)?;
    Ok(dn.iter().zip(&de).map(|(n, e)| n.hypot(*e)).collect())
}

/// Horizontal magnitude: sqrt(north² + east²) per sample
pub fn horizontal_magnitude(north: &[f64], east: &[f64]) -> Result<Vec<f64>> {
    check_same_length(north, east)?;
    Ok(north.iter().zip(east).map(|(n, e)| n.hypot(*e)).collect())
}

/// Total field magnitude: sqrt(x² + y² + z²) per sample
pub fn total_magnitude(x: &[f64], y: &[f64], z: &[f64]) -> Result<Vec<f64>> {
    check_same_length(x, y)?;
    check_same_length(x, z)?;
    Ok(x.iter()
        .zip(y)
        .zip(z)
        .map(|((x, y), z)| (x * x + y * y + z * z).sqrt())
        .collect())
}

fn check_same_length(a: &[f64], b: &[f64]) -> Result<()> {
    if a.len() != b.len() {
        return Err(Error::data_validation(format!(
            "component lengths differ: {} vs {}",
            a.len(),
            b.len()
        )));
    }
    Ok(())
}
