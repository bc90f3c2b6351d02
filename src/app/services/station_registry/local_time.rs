//! Station local time from universal time and geographic longitude

use chrono::{DateTime, Timelike, Utc};

use crate::constants::{DEGREES_PER_CIRCLE, HOURS_PER_DAY};

/// Local time of day in hours, `[0, 24)`, for a station at `geolon` degrees
/// east
pub fn local_time(times: &[DateTime<Utc>], geolon: f64) -> Vec<f64> {
    let offset = geolon * HOURS_PER_DAY / DEGREES_PER_CIRCLE;
    times
        .iter()
        .map(|t| {
            let hours = t.hour() as f64 + t.minute() as f64 / 60.0 + t.second() as f64 / 3600.0;
            (hours + offset).rem_euclid(HOURS_PER_DAY)
        })
        .collect()
}
