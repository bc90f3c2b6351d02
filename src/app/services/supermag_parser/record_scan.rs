//! Dense grid reconstruction from the sparse record block
//!
//! A record is one timestamp line followed by one value line per station
//! that reported at that time. Stations that did not report are simply
//! absent, so the number of lines per record varies. The block is therefore
//! read twice: a counting pass sizes the grid, then a fill pass walks the
//! lines with a two-state scanner:
//!
//! - [`ScanState::ExpectTimestamp`]: the current line must decode as a
//!   record timestamp.
//! - [`ScanState::ExpectStationOrRecord`]: a line whose first three
//!   characters are a listed station code is consumed as that station's
//!   values; any other line ends the record.
//!
//! A value line is recognised purely by its prefix. A line that happens to
//! start with a station code is consumed as data, whatever it contains.

use chrono::{DateTime, Utc};
use std::collections::HashMap;
use tracing::debug;

use super::revision::ColumnScheme;
use super::timestamp::{is_record_start, parse_record_timestamp};
use crate::app::models::StationSeries;
use crate::constants::{STATION_CODE_LEN, VALUES_PER_STATION_LINE};
use crate::{Error, Result};

/// Count the records in a data block (counting pass)
pub fn count_records(lines: &[&str]) -> usize {
    lines.iter().filter(|line| is_record_start(line)).count()
}

/// Scanner state between lines of the fill pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanState {
    ExpectTimestamp,
    ExpectStationOrRecord,
}

/// Result of the fill pass
#[derive(Debug, Clone)]
pub struct RecordGrid {
    pub times: Vec<DateTime<Utc>>,

    /// One series per station, in station list order
    pub series: Vec<StationSeries>,

    /// Number of station value lines consumed
    pub value_lines: usize,
}

/// Two-pass scanner for the data block of a magnetometer file
#[derive(Debug)]
pub struct RecordScanner<'a> {
    slots: HashMap<&'a str, usize>,
    stations: &'a [String],
    scheme: ColumnScheme,
    sentinel: f64,
    source: &'a str,
}

impl<'a> RecordScanner<'a> {
    pub fn new(stations: &'a [String], scheme: ColumnScheme, sentinel: f64, source: &'a str) -> Self {
        let slots = stations
            .iter()
            .enumerate()
            .map(|(slot, code)| (code.as_str(), slot))
            .collect();

        Self {
            slots,
            stations,
            scheme,
            sentinel,
            source,
        }
    }

    /// Series slot for a line whose first three characters are a station code
    pub fn station_slot(&self, line: &str) -> Option<usize> {
        line.get(..STATION_CODE_LEN)
            .and_then(|prefix| self.slots.get(prefix).copied())
    }

    /// Run both passes over `lines`, the data block starting at file line
    /// `first_line_number` (1-based, used in error messages)
    pub fn scan(&self, lines: &[&str], first_line_number: usize) -> Result<RecordGrid> {
        let n_time = count_records(lines);
        debug!("{}: counted {} records in {} data lines", self.source, n_time, lines.len());

        let mut times = Vec::with_capacity(n_time);
        let mut series: Vec<StationSeries> = self
            .stations
            .iter()
            .map(|code| StationSeries::filled(code.as_str(), n_time, self.sentinel))
            .collect();
        let mut value_lines = 0;

        let mut state = ScanState::ExpectTimestamp;
        let mut pos = 0;

        loop {
            match state {
                ScanState::ExpectTimestamp => {
                    if times.len() == n_time {
                        break;
                    }
                    let line_number = first_line_number + pos;
                    let line = lines.get(pos).ok_or_else(|| {
                        Error::format(
                            self.source,
                            Some(line_number),
                            format!(
                                "end of data after {} of {} records",
                                times.len(),
                                n_time
                            ),
                        )
                    })?;
                    let time = parse_record_timestamp(line)
                        .map_err(|e| Error::format(self.source, Some(line_number), e.to_string()))?;
                    times.push(time);
                    pos += 1;
                    state = ScanState::ExpectStationOrRecord;
                }
                ScanState::ExpectStationOrRecord => {
                    let slot = lines.get(pos).and_then(|line| self.station_slot(line));
                    match slot {
                        Some(slot) => {
                            let values = self.parse_values(lines[pos], first_line_number + pos)?;
                            series[slot].set_sample(times.len() - 1, values);
                            value_lines += 1;
                            pos += 1;
                        }
                        None => state = ScanState::ExpectTimestamp,
                    }
                }
            }
        }

        if pos < lines.len() {
            debug!(
                "{}: ignoring {} trailing lines after the last record",
                self.source,
                lines.len() - pos
            );
        }

        Ok(RecordGrid {
            times,
            series,
            value_lines,
        })
    }

    /// Parse the six numeric fields of a station value line
    pub fn parse_values(&self, line: &str, line_number: usize) -> Result<[f64; VALUES_PER_STATION_LINE]> {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        let range = self.scheme.value_range(tokens.len()).ok_or_else(|| {
            Error::format(
                self.source,
                Some(line_number),
                format!(
                    "value line has {} tokens, too few for {:?}",
                    tokens.len(),
                    self.scheme.first_value
                ),
            )
        })?;

        let mut values = [0.0; VALUES_PER_STATION_LINE];
        for (value, token) in values.iter_mut().zip(&tokens[range]) {
            *value = token.parse::<f64>().map_err(|_| {
                Error::format(
                    self.source,
                    Some(line_number),
                    format!("invalid numeric value '{}'", token),
                )
            })?;
        }
        Ok(values)
    }
}
