//! Station information table lookups
//!
//! SuperMAG publishes a tab-separated station table (IAGA code, geographic
//! and AACGM coordinates, station name, operators). The registry loads that
//! table and indexes it by station code so magnetometer datasets can be
//! enriched with coordinates and local time.

use std::collections::HashMap;
use std::path::Path;
use tracing::{debug, info};

use crate::{Error, Result};

pub mod local_time;
pub mod parser;

#[cfg(test)]
pub mod tests;

// Re-export key types for convenience
pub use local_time::local_time;
pub use parser::{InfoValue, StationInfo};

/// Station information indexed by three-letter code
#[derive(Debug, Clone, Default)]
pub struct StationRegistry {
    /// Station rows keyed by code
    pub(crate) stations: HashMap<String, StationInfo>,

    /// Lower-cased column names in table order
    pub(crate) columns: Vec<String>,
}

impl StationRegistry {
    /// Load a station information table from disk
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::io(format!("Failed to read station table {}", path.display()), e)
        })?;
        let registry = Self::parse_str(&content, &path.display().to_string())?;
        info!(
            "Loaded {} stations from {}",
            registry.station_count(),
            path.display()
        );
        Ok(registry)
    }

    /// Parse table content already in memory; `source` labels errors
    pub fn parse_str(content: &str, source: &str) -> Result<Self> {
        let (columns, stations) = parser::parse_table(content, source)?;
        debug!("{}: {} columns, {} rows", source, columns.len(), stations.len());

        let stations = stations
            .into_iter()
            .map(|info| (info.code.clone(), info))
            .collect();

        Ok(Self { stations, columns })
    }

    /// Get station information by code
    pub fn get(&self, code: &str) -> Option<&StationInfo> {
        self.stations.get(code)
    }

    pub fn contains(&self, code: &str) -> bool {
        self.stations.contains_key(code)
    }

    pub fn station_count(&self) -> usize {
        self.stations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }

    /// Station codes, sorted
    pub fn codes(&self) -> Vec<&str> {
        let mut codes: Vec<&str> = self.stations.keys().map(String::as_str).collect();
        codes.sort_unstable();
        codes
    }

    /// Lower-cased column names in table order
    pub fn columns(&self) -> &[String] {
        &self.columns
    }
}
