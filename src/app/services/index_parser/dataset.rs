//! Parsed geomagnetic index dataset

use chrono::{DateTime, Utc};
use std::collections::HashMap;

use crate::{Error, Result};

/// Timestamps plus one value sequence per index variable
#[derive(Debug, Clone, PartialEq)]
pub struct IndexDataset {
    source: String,
    time: Vec<DateTime<Utc>>,
    variables: Vec<String>,
    values: HashMap<String, Vec<f64>>,
}

impl IndexDataset {
    /// Assemble a dataset; every variable must have one value per timestamp
    pub fn new(
        source: impl Into<String>,
        time: Vec<DateTime<Utc>>,
        variables: Vec<String>,
        mut values: HashMap<String, Vec<f64>>,
    ) -> Result<Self> {
        for name in &variables {
            let len = values.get(name).map_or(0, Vec::len);
            if len != time.len() {
                return Err(Error::data_validation(format!(
                    "index variable '{}' has {} values for {} timestamps",
                    name,
                    len,
                    time.len()
                )));
            }
        }
        values.retain(|name, _| variables.contains(name));

        Ok(Self {
            source: source.into(),
            time,
            variables,
            values,
        })
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn time(&self) -> &[DateTime<Utc>] {
        &self.time
    }

    pub fn n_time(&self) -> usize {
        self.time.len()
    }

    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }

    /// Variable names in column order
    pub fn variables(&self) -> &[String] {
        &self.variables
    }

    /// Values of one variable
    pub fn get(&self, name: &str) -> Option<&[f64]> {
        self.values.get(name).map(Vec::as_slice)
    }

    /// (name, values) pairs in column order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[f64])> {
        self.variables
            .iter()
            .filter_map(|name| self.get(name).map(|v| (name.as_str(), v)))
    }
}
