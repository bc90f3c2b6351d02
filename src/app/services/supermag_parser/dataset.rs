//! Parsed magnetometer dataset
//!
//! Owns the timestamp sequence, the ordered station list and one
//! [`StationSeries`] per station, plus derived fields computed on demand.
//! Series are never modified after the read; derived fields are stored
//! separately under `<STATION><suffix>` keys.

use chrono::{DateTime, Utc};
use std::collections::{BTreeMap, HashMap};
use std::path::Path;
use tracing::{debug, warn};

use super::parser::MagnetometerParser;
use super::record_scan::RecordGrid;
use super::revision::{ColumnScheme, FormatRevision, HeaderInfo};
use super::stats::ReadStats;
use crate::Result;
use crate::app::models::{Component, DerivedField, DerivedKind, StationSeries, StationSite};
use crate::app::services::finite_difference::{self, MIN_SAMPLES};
use crate::app::services::sentinel_repair::{interpolate_missing, mask_sentinels, time_ordinals};
use crate::app::services::station_registry::{StationRegistry, local_time};
use crate::config::{DerivedFields, MissingDataPolicy, ReaderConfig};

/// Dense per-station time series read from one SuperMAG magnetometer file
#[derive(Debug, Clone)]
pub struct MagnetometerDataset {
    source: String,
    time: Vec<DateTime<Utc>>,
    stations: Vec<String>,
    series: HashMap<String, StationSeries>,
    derived: BTreeMap<String, DerivedField>,
    revision: FormatRevision,
    scheme: ColumnScheme,
    stats: ReadStats,
}

impl MagnetometerDataset {
    /// Read a file with the default configuration
    pub fn from_file(path: &Path) -> Result<Self> {
        MagnetometerParser::new(ReaderConfig::default()).parse_file(path)
    }

    pub(crate) fn from_grid(source: &str, header: HeaderInfo, grid: RecordGrid) -> Self {
        let RecordGrid {
            times,
            series,
            value_lines,
        } = grid;

        let stats = ReadStats {
            records: times.len(),
            stations: header.stations.len(),
            value_lines,
            ..Default::default()
        };

        Self {
            source: source.to_string(),
            time: times,
            stations: header.stations,
            series: series.into_iter().map(|s| (s.code.clone(), s)).collect(),
            derived: BTreeMap::new(),
            revision: header.revision,
            scheme: header.scheme,
            stats,
        }
    }

    /// File name or label the dataset was read from
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Timestamps, one per record
    pub fn time(&self) -> &[DateTime<Utc>] {
        &self.time
    }

    /// Number of records
    pub fn n_time(&self) -> usize {
        self.time.len()
    }

    /// Station codes in header order
    pub fn stations(&self) -> &[String] {
        &self.stations
    }

    pub fn station_count(&self) -> usize {
        self.stations.len()
    }

    /// Detected file-format revision
    pub fn revision(&self) -> FormatRevision {
        self.revision
    }

    /// Column scheme used to read value lines
    pub fn scheme(&self) -> ColumnScheme {
        self.scheme
    }

    pub fn stats(&self) -> &ReadStats {
        &self.stats
    }

    /// Series for one station
    pub fn get(&self, code: &str) -> Option<&StationSeries> {
        self.series.get(code)
    }

    /// Series in header order
    pub fn iter(&self) -> impl Iterator<Item = &StationSeries> {
        self.stations.iter().filter_map(|code| self.series.get(code))
    }

    /// Derived field by key, e.g. `ALE_H`
    pub fn derived(&self, key: &str) -> Option<&DerivedField> {
        self.derived.get(key)
    }

    /// Derived field for a station and kind
    pub fn derived_for(&self, station: &str, kind: DerivedKind) -> Option<&DerivedField> {
        self.derived.get(&kind.key(station))
    }

    /// All derived fields, ordered by key
    pub fn derived_fields(&self) -> impl Iterator<Item = &DerivedField> {
        self.derived.values()
    }

    /// Gaps in seconds between consecutive records
    pub fn time_gaps(&self) -> Vec<f64> {
        finite_difference::time_gaps(&self.time)
    }

    /// Mask sentinel values and, under [`MissingDataPolicy::Interpolate`],
    /// fill them in time
    pub(crate) fn apply_missing_policy(&mut self, policy: MissingDataPolicy, sentinel: f64) {
        let ordinals = time_ordinals(&self.time);
        let mut masked = 0;
        let mut repaired = 0;
        let mut silent = Vec::new();

        for code in &self.stations {
            let Some(series) = self.series.get_mut(code) else {
                continue;
            };
            for component in Component::ALL {
                let values = series.component_mut(component);
                masked += mask_sentinels(values, sentinel);
                if policy == MissingDataPolicy::Interpolate {
                    repaired += interpolate_missing(values, &ordinals);
                }
            }
            if !series.is_empty() && series.bx().iter().all(|v| v.is_nan()) {
                silent.push(code.clone());
            }
        }

        debug!(
            "{}: masked {} values, repaired {} ({:?})",
            self.source, masked, repaired, policy
        );

        self.stats.missing_values = masked;
        self.stats.repaired_values = repaired;
        self.stats.silent_stations = silent;
    }

    /// Compute the requested derived fields for every station
    ///
    /// The horizontal rate needs at least three records; with fewer it is
    /// skipped with a warning while the other fields are still computed.
    pub fn compute_derived(&mut self, fields: DerivedFields) -> Result<()> {
        if fields.horizontal_magnitude {
            self.compute_horizontal_magnitude()?;
        }
        if fields.total_magnitude {
            self.compute_total_magnitude()?;
        }
        if fields.horizontal_rate {
            if self.n_time() < MIN_SAMPLES {
                warn!(
                    "{}: {} records is too few for dB/dt, skipping horizontal rate",
                    self.source,
                    self.n_time()
                );
            } else {
                self.compute_horizontal_rate()?;
            }
        }
        Ok(())
    }

    /// Add `<STATION>_H = sqrt(bx² + by²)` for every station
    pub fn compute_horizontal_magnitude(&mut self) -> Result<()> {
        self.derive_each(DerivedKind::HorizontalMagnitude, |series| {
            finite_difference::horizontal_magnitude(series.bx(), series.by())
        })
    }

    /// Add `<STATION>_dH`, the norm of d(bx)/dt and d(by)/dt, for every station
    pub fn compute_horizontal_rate(&mut self) -> Result<()> {
        let gaps = self.time_gaps();
        self.derive_each(DerivedKind::HorizontalRate, |series| {
            finite_difference::horizontal_rate(series.bx(), series.by(), &gaps)
        })
    }

    /// Add `<STATION>_B = sqrt(bx² + by² + bz²)` for every station
    pub fn compute_total_magnitude(&mut self) -> Result<()> {
        self.derive_each(DerivedKind::TotalMagnitude, |series| {
            finite_difference::total_magnitude(series.bx(), series.by(), series.bz())
        })
    }

    fn derive_each<F>(&mut self, kind: DerivedKind, compute: F) -> Result<()>
    where
        F: Fn(&StationSeries) -> Result<Vec<f64>>,
    {
        for code in &self.stations {
            let key = kind.key(code);
            if self.derived.contains_key(&key) {
                continue;
            }
            let Some(series) = self.series.get(code) else {
                continue;
            };
            let values = compute(series)?;
            self.derived
                .insert(key, DerivedField::new(code.as_str(), kind, values));
        }
        Ok(())
    }

    /// Attach coordinates, name and local time from a station table
    ///
    /// Returns the number of stations that were found with coordinates.
    pub fn attach_station_info(&mut self, registry: &StationRegistry) -> usize {
        let mut attached = 0;
        for code in &self.stations {
            let (Some(series), Some(info)) = (self.series.get_mut(code), registry.get(code)) else {
                continue;
            };
            let (Some(geolon), Some(geolat)) = (info.geolon(), info.geolat()) else {
                debug!("Station {} has no geographic coordinates in the table", code);
                continue;
            };
            series.site = Some(StationSite {
                geolon,
                geolat,
                name: info.name().map(str::to_string),
                local_time: local_time(&self.time, geolon),
            });
            attached += 1;
        }
        attached
    }
}
