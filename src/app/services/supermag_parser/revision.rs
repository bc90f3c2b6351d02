//! File-format revision detection and column layout
//!
//! SuperMAG has changed the layout of its ASCII files between revisions.
//! The header declares the revision on a `Revision: N` line ahead of the
//! station list. Each known revision maps to a [`ColumnScheme`]; adding a
//! revision means adding a variant and a match arm here and nowhere else.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Range;
use tracing::{debug, warn};

use crate::constants::{VALUES_PER_STATION_LINE, markers};
use crate::{Error, Result};

/// Known file-format revisions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FormatRevision {
    V2,
    V5,
    V6,
    /// No revision declaration before the station list
    Unrecognized,
}

impl FormatRevision {
    /// Revisions with a registered column scheme
    pub const KNOWN: [FormatRevision; 3] =
        [FormatRevision::V2, FormatRevision::V5, FormatRevision::V6];

    /// Highest known revision, whose layout is used for unrecognized files
    pub const LATEST: FormatRevision = FormatRevision::V6;

    /// Map a declared revision number to a known revision
    pub fn from_number(number: u32) -> Option<Self> {
        Self::KNOWN.into_iter().find(|r| r.number() == Some(number))
    }

    /// Declared revision number, `None` when unrecognized
    pub fn number(&self) -> Option<u32> {
        match self {
            FormatRevision::V2 => Some(2),
            FormatRevision::V5 => Some(5),
            FormatRevision::V6 => Some(6),
            FormatRevision::Unrecognized => None,
        }
    }

    pub fn is_recognized(&self) -> bool {
        !matches!(self, FormatRevision::Unrecognized)
    }

    /// Column scheme for this revision
    pub fn scheme(&self) -> ColumnScheme {
        match self {
            // "ALE  N  E  Z  Ngeo  Egeo  Zgeo", header has a separate station line
            FormatRevision::V2 => ColumnScheme {
                first_value: ColumnOffset::FromStart(1),
                extra_header_lines: 1,
            },
            // "ALE  mlt  mlat  sza  N  E  Z  Ngeo  Egeo  Zgeo", values are the last six tokens
            FormatRevision::V5 | FormatRevision::V6 => ColumnScheme {
                first_value: ColumnOffset::FromEnd(VALUES_PER_STATION_LINE),
                extra_header_lines: 0,
            },
            FormatRevision::Unrecognized => Self::LATEST.scheme(),
        }
    }
}

impl fmt::Display for FormatRevision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.number() {
            Some(n) => write!(f, "{}", n),
            None => f.write_str("unrecognized"),
        }
    }
}

/// Where the six numeric fields start in a whitespace-split value line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColumnOffset {
    /// Index counted from the first token
    FromStart(usize),
    /// Index counted back from the end of the line
    FromEnd(usize),
}

impl ColumnOffset {
    /// Absolute token index of the first value for a line of `token_count` tokens
    pub fn resolve(&self, token_count: usize) -> Option<usize> {
        match *self {
            ColumnOffset::FromStart(k) => Some(k),
            ColumnOffset::FromEnd(k) => token_count.checked_sub(k),
        }
    }
}

/// Column layout of value lines for one revision
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnScheme {
    /// Offset of the first of the six numeric fields
    pub first_value: ColumnOffset,

    /// Header lines to skip past the detected header end before data begins
    pub extra_header_lines: usize,
}

impl ColumnScheme {
    /// Token range holding the six values, `None` if the line is too short
    pub fn value_range(&self, token_count: usize) -> Option<Range<usize>> {
        let start = self.first_value.resolve(token_count)?;
        let end = start + VALUES_PER_STATION_LINE;
        (end <= token_count).then_some(start..end)
    }
}

/// Everything the header tells us about the data block
#[derive(Debug, Clone, PartialEq)]
pub struct HeaderInfo {
    pub revision: FormatRevision,
    pub scheme: ColumnScheme,

    /// Station codes in header order
    pub stations: Vec<String>,

    /// Lines consumed up to and including the header terminator
    pub header_lines: usize,
}

impl HeaderInfo {
    /// Index of the first data line
    pub fn data_start(&self) -> usize {
        self.header_lines + self.scheme.extra_header_lines
    }
}

/// Read the revision, station list and header length from a file's lines
pub fn resolve_header(lines: &[&str], source: &str) -> Result<HeaderInfo> {
    let mut declared = None;
    let mut selected = None;

    for (idx, line) in lines.iter().enumerate() {
        if line.contains(markers::STATION_LIST) {
            selected = Some(idx);
            break;
        }
        if line.contains(markers::REVISION) {
            declared = Some(parse_revision_line(line, idx, source)?);
        }
    }

    let selected = selected.ok_or_else(|| {
        Error::format(
            source,
            None,
            format!(
                "no '{}' station list line found in header",
                markers::STATION_LIST
            ),
        )
    })?;

    let revision = match declared {
        Some(revision) => revision,
        None => {
            warn!(
                "Unrecognized file format revision in {}; using the revision {} column layout. Check validity of file read.",
                source,
                FormatRevision::LATEST
            );
            FormatRevision::Unrecognized
        }
    };

    let station_idx = if lines[selected].contains(markers::STATIONS_INLINE) {
        selected
    } else {
        selected + 1
    };
    let station_line = lines.get(station_idx).ok_or_else(|| {
        Error::format(source, Some(station_idx + 1), "missing station list line")
    })?;
    let stations = parse_station_list(station_line);
    if stations.is_empty() {
        return Err(Error::format(
            source,
            Some(station_idx + 1),
            "station list is empty",
        ));
    }

    let mut end = selected;
    while !is_header_terminator(lines[end]) {
        end += 1;
        if end >= lines.len() {
            return Err(Error::format(
                source,
                None,
                "end of file reached before the header separator",
            ));
        }
    }

    let info = HeaderInfo {
        revision,
        scheme: revision.scheme(),
        stations,
        header_lines: end + 1,
    };

    debug!(
        "Header of {}: revision {}, {} stations, {} header lines, data starts at line {}",
        source,
        info.revision,
        info.stations.len(),
        info.header_lines,
        info.data_start() + 1
    );

    Ok(info)
}

fn is_header_terminator(line: &str) -> bool {
    line.contains(markers::SEPARATOR) || line.contains(markers::PARAMETERS)
}

fn parse_revision_line(line: &str, idx: usize, source: &str) -> Result<FormatRevision> {
    let value = line.rsplit(':').next().unwrap_or_default().trim();
    let number: u32 = value.parse().map_err(|_| {
        Error::format(
            source,
            Some(idx + 1),
            format!("invalid revision declaration '{}'", line.trim()),
        )
    })?;

    FormatRevision::from_number(number).ok_or_else(|| {
        Error::format(
            source,
            Some(idx + 1),
            format!("unsupported file format revision {}", number),
        )
    })
}

/// Split the trailing comma-separated token of the station list line
///
/// Repeated codes keep their first position only.
pub fn parse_station_list(line: &str) -> Vec<String> {
    let mut stations: Vec<String> = Vec::new();
    let Some(token) = line.split_whitespace().last() else {
        return stations;
    };
    for code in token.split(',').map(str::trim) {
        if !code.is_empty() && !stations.iter().any(|s| s == code) {
            stations.push(code.to_string());
        }
    }
    stations
}
