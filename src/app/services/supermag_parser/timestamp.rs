//! Record timestamp recognition and decoding
//!
//! Every record starts with `YYYY MM DD HH MM SS` (possibly followed by more
//! tokens). The six tokens are concatenated and decoded as a fixed-width
//! `YYYYMMDDHHMMSS` string.

use chrono::{DateTime, NaiveDateTime, Utc};
use regex::Regex;
use std::sync::LazyLock;

use crate::constants::{
    COMPACT_TIMESTAMP_FORMAT, COMPACT_TIMESTAMP_WIDTH, RECORD_START_PATTERN, TIMESTAMP_TOKENS,
};
use crate::{Error, Result};

static RECORD_START: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(RECORD_START_PATTERN).expect("record start pattern is valid"));

/// True if the line opens a new record (`YYYY MM DD ...`)
pub fn is_record_start(line: &str) -> bool {
    RECORD_START.is_match(line)
}

/// Decode the leading six date/time tokens of a record line
pub fn parse_record_timestamp(line: &str) -> Result<DateTime<Utc>> {
    let compact: String = line
        .split_whitespace()
        .take(TIMESTAMP_TOKENS)
        .collect::<Vec<_>>()
        .concat();

    if compact.len() != COMPACT_TIMESTAMP_WIDTH || !compact.bytes().all(|b| b.is_ascii_digit()) {
        return Err(Error::data_validation(format!(
            "expected six date/time tokens forming YYYYMMDDHHMMSS, got '{}'",
            line.trim()
        )));
    }

    let naive = NaiveDateTime::parse_from_str(&compact, COMPACT_TIMESTAMP_FORMAT).map_err(|e| {
        Error::datetime_parsing(format!("invalid record timestamp '{}'", compact), e)
    })?;

    Ok(naive.and_utc())
}
