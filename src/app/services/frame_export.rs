//! Polars DataFrame export
//!
//! Magnetometer datasets become one wide frame: a `time` column, then
//! `<STATION>_<component>` for each station in header order, `<STATION>_lt`
//! when local time is attached, and one column per derived field keyed as
//! stored (`ALE_H`, `ALE_dH`, ...). Index datasets become `time` plus one
//! column per variable.

use chrono::{DateTime, NaiveDateTime, Utc};
use polars::prelude::*;
use tracing::debug;

use crate::app::services::index_parser::IndexDataset;
use crate::app::services::supermag_parser::MagnetometerDataset;
use crate::{Error, Result};

/// Name of the timestamp column
pub const TIME_COLUMN: &str = "time";

/// Suffix of local time columns
pub const LOCAL_TIME_SUFFIX: &str = "_lt";

fn time_column(times: &[DateTime<Utc>]) -> Column {
    let naive: Vec<NaiveDateTime> = times.iter().map(|t| t.naive_utc()).collect();
    Series::new(TIME_COLUMN.into(), naive).into()
}

fn value_column(name: &str, values: &[f64]) -> Column {
    Column::new(name.into(), values)
}

fn build_frame(columns: Vec<Column>, source: &str) -> Result<DataFrame> {
    let width = columns.len();
    let frame = DataFrame::new(columns)
        .map_err(|e| Error::data_frame(format!("Failed to build frame for {}", source), e))?;
    debug!("{}: built frame {} x {}", source, frame.height(), width);
    Ok(frame)
}

impl MagnetometerDataset {
    /// Wide frame of every station component, local time and derived field
    pub fn to_dataframe(&self) -> Result<DataFrame> {
        let mut columns = vec![time_column(self.time())];

        for series in self.iter() {
            for (component, values) in series.iter() {
                let name = format!("{}_{}", series.code, component);
                columns.push(value_column(&name, values));
            }
            if let Some(site) = &series.site {
                let name = format!("{}{}", series.code, LOCAL_TIME_SUFFIX);
                columns.push(value_column(&name, &site.local_time));
            }
        }

        for field in self.derived_fields() {
            columns.push(value_column(&field.key(), &field.values));
        }

        build_frame(columns, self.source())
    }
}

impl IndexDataset {
    /// Frame with the time axis and one column per index variable
    pub fn to_dataframe(&self) -> Result<DataFrame> {
        let mut columns = vec![time_column(self.time())];
        columns.extend(self.iter().map(|(name, values)| value_column(name, values)));
        build_frame(columns, self.source())
    }
}
