//! Core index file parser

use chrono::{DateTime, NaiveDateTime, Utc};
use regex::Regex;
use std::collections::HashMap;
use std::path::Path;
use std::sync::LazyLock;
use tracing::{debug, info};

use super::dataset::IndexDataset;
use crate::constants::{INDEX_VARIABLE_PATTERN, SPACED_TIMESTAMP_FORMAT, TIMESTAMP_TOKENS, markers};
use crate::{Error, Result};

static VARIABLE_DECLARATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(INDEX_VARIABLE_PATTERN).expect("index variable pattern is valid")
});

/// Variable names declared on an index header line, date/time columns excluded
pub fn declared_variables(header: &str) -> Vec<String> {
    VARIABLE_DECLARATION
        .captures_iter(header)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
        .skip(TIMESTAMP_TOKENS)
        .collect()
}

/// Parser for SuperMAG geomagnetic index files
#[derive(Debug, Clone, Copy, Default)]
pub struct IndexParser;

impl IndexParser {
    pub fn new() -> Self {
        Self
    }

    /// Read and parse an index file
    pub fn parse_file(&self, file_path: &Path) -> Result<IndexDataset> {
        info!("Parsing SuperMAG index file: {}", file_path.display());

        let content = std::fs::read_to_string(file_path).map_err(|e| {
            Error::io(format!("Failed to read file {}", file_path.display()), e)
        })?;

        self.parse_str(&content, &file_path.display().to_string())
    }

    /// Parse index file content already in memory
    pub fn parse_str(&self, content: &str, source: &str) -> Result<IndexDataset> {
        let mut lines = content.lines().enumerate();

        lines
            .by_ref()
            .find(|(_, line)| line.contains(markers::SEPARATOR))
            .ok_or_else(|| {
                Error::format(source, None, "no '==' separator ending the header")
            })?;

        let (header_index, header) = lines
            .next()
            .ok_or_else(|| Error::format(source, None, "missing column declarations"))?;

        let variables = declared_variables(header);
        if variables.is_empty() {
            return Err(Error::format(
                source,
                Some(header_index + 1),
                "no index variables declared after the date/time columns",
            ));
        }
        debug!("{}: index variables {:?}", source, variables);

        let mut time = Vec::new();
        let mut columns: Vec<Vec<f64>> = vec![Vec::new(); variables.len()];

        for (index, line) in lines {
            if line.trim().is_empty() {
                continue;
            }
            let line_number = index + 1;
            let tokens: Vec<&str> = line.split_whitespace().collect();
            let needed = TIMESTAMP_TOKENS + variables.len();
            if tokens.len() < needed {
                return Err(Error::format(
                    source,
                    Some(line_number),
                    format!("expected {} fields, found {}", needed, tokens.len()),
                ));
            }

            time.push(parse_row_time(&tokens[..TIMESTAMP_TOKENS], source, line_number)?);

            for (column, token) in columns.iter_mut().zip(&tokens[TIMESTAMP_TOKENS..]) {
                let value = token.parse::<f64>().map_err(|_| {
                    Error::format(
                        source,
                        Some(line_number),
                        format!("invalid numeric value '{}'", token),
                    )
                })?;
                column.push(value);
            }
        }

        let values: HashMap<String, Vec<f64>> = variables.iter().cloned().zip(columns).collect();
        let dataset = IndexDataset::new(source, time, variables, values)?;

        info!(
            "Parsed {} index rows with {} variables",
            dataset.n_time(),
            dataset.variables().len()
        );

        Ok(dataset)
    }
}

fn parse_row_time(tokens: &[&str], source: &str, line_number: usize) -> Result<DateTime<Utc>> {
    let joined = tokens.join(" ");
    NaiveDateTime::parse_from_str(&joined, SPACED_TIMESTAMP_FORMAT)
        .map(|naive| naive.and_utc())
        .map_err(|e| {
            Error::format(
                source,
                Some(line_number),
                format!("invalid timestamp '{}': {}", joined, e),
            )
        })
}
