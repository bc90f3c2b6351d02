//! Read statistics for magnetometer files
//!
//! Tracks how much of the dense station × time grid was actually reported
//! and how many values were masked or repaired afterwards.

use serde::{Deserialize, Serialize};

/// Simple read statistics
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReadStats {
    /// Number of records (timestamps) in the file
    pub records: usize,

    /// Number of stations in the header's station list
    pub stations: usize,

    /// Station value lines consumed
    pub value_lines: usize,

    /// Component values masked as missing
    pub missing_values: usize,

    /// Missing values filled by interpolation
    pub repaired_values: usize,

    /// Listed stations that never reported
    pub silent_stations: Vec<String>,
}

impl ReadStats {
    /// Share of the station × time grid covered by value lines, in percent
    pub fn coverage(&self) -> f64 {
        let cells = self.records * self.stations;
        if cells == 0 {
            0.0
        } else {
            (self.value_lines as f64 / cells as f64) * 100.0
        }
    }

    /// True if every station reported at every timestamp
    pub fn is_complete(&self) -> bool {
        self.records * self.stations == self.value_lines
    }
}
