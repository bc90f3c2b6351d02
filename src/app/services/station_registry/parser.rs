//! Station information table parsing
//!
//! The table starts with a free-text preamble ended by a `===` separator
//! line. The next line holds the column names, then one
//! tab-separated row per station. Quoted fields are text, all others are
//! numbers. Runs of tabs are treated as a single separator.

use std::collections::HashMap;

use crate::constants::markers;
use crate::{Error, Result};

/// Column holding the geographic longitude
pub const GEOLON_COLUMN: &str = "geolon";

/// Column holding the geographic latitude
pub const GEOLAT_COLUMN: &str = "geolat";

/// Column holding the station name
pub const NAME_COLUMN: &str = "station-name";

/// A single cell of the station table
#[derive(Debug, Clone, PartialEq)]
pub enum InfoValue {
    Number(f64),
    Text(String),
}

impl InfoValue {
    fn parse(field: &str) -> Option<Self> {
        if field.starts_with('"') {
            return Some(InfoValue::Text(field.trim_matches('"').to_string()));
        }
        field.parse::<f64>().ok().map(InfoValue::Number)
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            InfoValue::Number(n) => Some(*n),
            InfoValue::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            InfoValue::Text(s) => Some(s),
            InfoValue::Number(_) => None,
        }
    }
}

/// One row of the station table
#[derive(Debug, Clone, PartialEq)]
pub struct StationInfo {
    /// Three-letter station code from the first column
    pub code: String,

    /// Remaining columns by lower-cased name
    pub fields: HashMap<String, InfoValue>,
}

impl StationInfo {
    /// Field by lower-cased column name
    pub fn field(&self, column: &str) -> Option<&InfoValue> {
        self.fields.get(column)
    }

    /// Geographic longitude in degrees
    pub fn geolon(&self) -> Option<f64> {
        self.field(GEOLON_COLUMN).and_then(InfoValue::as_number)
    }

    /// Geographic latitude in degrees
    pub fn geolat(&self) -> Option<f64> {
        self.field(GEOLAT_COLUMN).and_then(InfoValue::as_number)
    }

    pub fn name(&self) -> Option<&str> {
        self.field(NAME_COLUMN).and_then(InfoValue::as_text)
    }
}

fn split_fields(line: &str) -> Vec<&str> {
    line.split('\t')
        .map(str::trim)
        .filter(|field| !field.is_empty())
        .collect()
}

/// Parse the whole table into its column names and station rows
pub fn parse_table(content: &str, source: &str) -> Result<(Vec<String>, Vec<StationInfo>)> {
    let mut lines = content.lines().enumerate();

    lines
        .by_ref()
        .find(|(_, line)| line.contains(markers::STATION_INFO_SEPARATOR))
        .ok_or_else(|| {
            Error::station_registry(format!(
                "{}: no '{}' separator before the column header",
                source,
                markers::STATION_INFO_SEPARATOR
            ))
        })?;

    let (_, header) = lines.next().ok_or_else(|| {
        Error::station_registry(format!("{}: missing column header", source))
    })?;
    let columns: Vec<String> = header.split_whitespace().map(str::to_lowercase).collect();
    if columns.is_empty() {
        return Err(Error::station_registry(format!(
            "{}: empty column header",
            source
        )));
    }

    let mut stations = Vec::new();
    for (index, line) in lines {
        let fields = split_fields(line);
        let Some((code, rest)) = fields.split_first() else {
            continue;
        };
        stations.push(parse_row(code, rest, &columns[1..], source, index + 1)?);
    }

    Ok((columns, stations))
}

fn parse_row(
    code: &str,
    values: &[&str],
    columns: &[String],
    source: &str,
    line_number: usize,
) -> Result<StationInfo> {
    let mut fields = HashMap::with_capacity(columns.len());
    for (column, raw) in columns.iter().zip(values) {
        let value = InfoValue::parse(raw).ok_or_else(|| {
            Error::station_registry(format!(
                "{} line {}: invalid value '{}' in column '{}'",
                source, line_number, raw, column
            ))
        })?;
        fields.insert(column.clone(), value);
    }

    Ok(StationInfo {
        code: code.trim_matches('"').to_string(),
        fields,
    })
}
