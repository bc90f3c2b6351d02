//! Core magnetometer file parser
//!
//! Orchestrates a full read: header resolution, the two record passes,
//! sentinel handling, derived fields and optional station enrichment.
//! Any structural failure aborts the read and no dataset is returned.

use std::path::Path;
use tracing::{debug, info};

use super::dataset::MagnetometerDataset;
use super::record_scan::RecordScanner;
use super::revision::resolve_header;
use crate::app::services::station_registry::StationRegistry;
use crate::config::ReaderConfig;
use crate::{Error, Result};

/// Parser for SuperMAG magnetometer ASCII files
#[derive(Debug, Clone, Default)]
pub struct MagnetometerParser {
    config: ReaderConfig,
}

impl MagnetometerParser {
    pub fn new(config: ReaderConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ReaderConfig {
        &self.config
    }

    /// Read and parse a file, attaching station info if configured
    pub fn parse_file(&self, file_path: &Path) -> Result<MagnetometerDataset> {
        info!("Parsing SuperMAG file: {}", file_path.display());

        let content = std::fs::read_to_string(file_path).map_err(|e| {
            Error::io(format!("Failed to read file {}", file_path.display()), e)
        })?;

        let source = file_path.display().to_string();
        let mut dataset = self.parse_str(&content, &source)?;

        if let Some(info_path) = &self.config.station_info_path {
            let registry = StationRegistry::load(info_path)?;
            let attached = dataset.attach_station_info(&registry);
            debug!(
                "Attached station info to {} of {} stations",
                attached,
                dataset.station_count()
            );
        }

        Ok(dataset)
    }

    /// Parse file content already in memory; `source` labels errors and logs
    pub fn parse_str(&self, content: &str, source: &str) -> Result<MagnetometerDataset> {
        self.config.validate()?;

        let lines: Vec<&str> = content.lines().collect();
        let header = resolve_header(&lines, source)?;

        let data_start = header.data_start().min(lines.len());
        let scanner = RecordScanner::new(
            &header.stations,
            header.scheme,
            self.config.sentinel,
            source,
        );
        let grid = scanner.scan(&lines[data_start..], data_start + 1)?;

        let mut dataset = MagnetometerDataset::from_grid(source, header, grid);
        dataset.apply_missing_policy(self.config.missing_data, self.config.sentinel);

        if self.config.derived.any() {
            dataset.compute_derived(self.config.derived)?;
        }

        info!(
            "Parsed {} records for {} stations (revision {}, {:.1}% coverage)",
            dataset.n_time(),
            dataset.station_count(),
            dataset.revision(),
            dataset.stats().coverage()
        );

        Ok(dataset)
    }
}
