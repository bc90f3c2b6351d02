//! Flattening of JSON response records into columns

use chrono::{DateTime, Utc};
use serde_json::{Map, Value};
use std::collections::HashMap;

use crate::app::services::index_parser::IndexDataset;
use crate::constants::remote::TIME_FIELD;
use crate::{Error, Result};

/// One object of a service response
pub type Record = Map<String, Value>;

/// Convert response records into an [`IndexDataset`]
///
/// With `variables` given, exactly those fields are extracted and each must
/// be numeric in every record. Without, the numeric fields of the first
/// record are used. `tval` always becomes the time axis and is not kept as a
/// variable.
pub fn flatten_records(
    records: &[Record],
    variables: Option<&[&str]>,
    source: &str,
) -> Result<IndexDataset> {
    let names: Vec<String> = match variables {
        Some(vars) => vars.iter().map(|v| v.to_string()).collect(),
        None => records
            .first()
            .map(|first| {
                first
                    .iter()
                    .filter(|(_, value)| value.is_number())
                    .map(|(key, _)| key.clone())
                    .collect()
            })
            .unwrap_or_default(),
    };
    let names: Vec<String> = names.into_iter().filter(|n| n != TIME_FIELD).collect();

    let mut time = Vec::with_capacity(records.len());
    let mut columns: Vec<Vec<f64>> = vec![Vec::with_capacity(records.len()); names.len()];

    for (index, record) in records.iter().enumerate() {
        let tval = numeric_field(record, TIME_FIELD, index)?;
        time.push(epoch_to_utc(tval)?);

        for (column, name) in columns.iter_mut().zip(&names) {
            column.push(numeric_field(record, name, index)?);
        }
    }

    let values: HashMap<String, Vec<f64>> = names.iter().cloned().zip(columns).collect();
    IndexDataset::new(source, time, names, values)
}

fn numeric_field(record: &Record, name: &str, index: usize) -> Result<f64> {
    record
        .get(name)
        .and_then(Value::as_f64)
        .ok_or_else(|| {
            Error::remote_fetch(format!(
                "record {} has no numeric field '{}'",
                index, name
            ))
        })
}

/// Epoch seconds, possibly fractional, to a UTC timestamp
pub fn epoch_to_utc(seconds: f64) -> Result<DateTime<Utc>> {
    if !seconds.is_finite() {
        return Err(Error::remote_fetch(format!("invalid epoch time {}", seconds)));
    }
    DateTime::from_timestamp_millis((seconds * 1000.0).round() as i64)
        .ok_or_else(|| Error::remote_fetch(format!("epoch time {} out of range", seconds)))
}
