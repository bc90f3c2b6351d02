//! SuperMAG Reader Library
//!
//! A Rust library for reading SuperMAG ground magnetometer and geomagnetic
//! index files into dense, time-indexed per-station arrays.
//!
//! This library provides tools for:
//! - Detecting the file-format revision of a SuperMAG ASCII file
//! - Rebuilding a dense station × time grid from sparse, station-keyed records
//! - Marking and optionally interpolating over sentinel-flagged values
//! - Deriving horizontal field magnitude and its rate of change on irregular grids
//! - Reading single-block geomagnetic index files (SME, SML, SMU, ...)
//! - Enriching stations with coordinates and local time from a station table
//! - Fetching index data from the SuperMAG web service
//! - Exporting datasets as Polars DataFrames

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod finite_difference;
        pub mod frame_export;
        pub mod index_parser;
        pub mod remote_fetch;
        pub mod sentinel_repair;
        pub mod station_registry;
        pub mod supermag_parser;
    }
}

// Re-export commonly used types
pub use app::models::{Component, DerivedField, DerivedKind, StationSeries, StationSite};
pub use app::services::index_parser::{IndexDataset, IndexParser};
pub use app::services::remote_fetch::{RemoteClient, RemoteQuery, Selector};
pub use app::services::station_registry::StationRegistry;
pub use app::services::supermag_parser::{
    ColumnOffset, ColumnScheme, FormatRevision, MagnetometerDataset, MagnetometerParser,
};
pub use config::{DerivedFields, MissingDataPolicy, ReaderConfig, RemoteConfig};

/// Result type alias for the SuperMAG reader
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for SuperMAG reading operations
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Structural format error in a data file; aborts the whole read
    #[error("Format error in '{file}'{}: {message}", line_suffix(.line))]
    Format {
        file: String,
        line: Option<usize>,
        message: String,
    },

    /// Date/time parsing error
    #[error("Date/time parsing error: {message}")]
    DateTimeParsing {
        message: String,
        #[source]
        source: chrono::ParseError,
    },

    /// Station information table error
    #[error("Station registry error: {message}")]
    StationRegistry { message: String },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Data validation error
    #[error("Data validation error: {message}")]
    DataValidation { message: String },

    /// Not enough samples for a finite-difference stencil
    #[error("Insufficient samples: need at least {needed}, found {found}")]
    InsufficientSamples { needed: usize, found: usize },

    /// Remote service request or response decoding failed
    #[error("Remote fetch error: {message}")]
    RemoteFetch {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// DataFrame construction error
    #[error("DataFrame error: {message}")]
    DataFrame {
        message: String,
        #[source]
        source: polars::error::PolarsError,
    },
}

fn line_suffix(line: &Option<usize>) -> String {
    match line {
        Some(n) => format!(" at line {}", n),
        None => String::new(),
    }
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a format error tied to a file and optional 1-based line number
    pub fn format(file: impl Into<String>, line: Option<usize>, message: impl Into<String>) -> Self {
        Self::Format {
            file: file.into(),
            line,
            message: message.into(),
        }
    }

    /// Create a date/time parsing error
    pub fn datetime_parsing(message: impl Into<String>, source: chrono::ParseError) -> Self {
        Self::DateTimeParsing {
            message: message.into(),
            source,
        }
    }

    /// Create a station registry error
    pub fn station_registry(message: impl Into<String>) -> Self {
        Self::StationRegistry {
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a data validation error
    pub fn data_validation(message: impl Into<String>) -> Self {
        Self::DataValidation {
            message: message.into(),
        }
    }

    /// Create an insufficient samples error
    pub fn insufficient_samples(needed: usize, found: usize) -> Self {
        Self::InsufficientSamples { needed, found }
    }

    /// Create a remote fetch error without an underlying source
    pub fn remote_fetch(message: impl Into<String>) -> Self {
        Self::RemoteFetch {
            message: message.into(),
            source: None,
        }
    }

    /// Create a DataFrame construction error
    pub fn data_frame(message: impl Into<String>, source: polars::error::PolarsError) -> Self {
        Self::DataFrame {
            message: message.into(),
            source,
        }
    }

    /// True for errors that abort a file read
    pub fn is_format_error(&self) -> bool {
        matches!(self, Self::Format { .. })
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<chrono::ParseError> for Error {
    fn from(error: chrono::ParseError) -> Self {
        Self::DateTimeParsing {
            message: "Date/time parsing failed".to_string(),
            source: error,
        }
    }
}

impl From<polars::error::PolarsError> for Error {
    fn from(error: polars::error::PolarsError) -> Self {
        Self::DataFrame {
            message: "DataFrame operation failed".to_string(),
            source: error,
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(error: reqwest::Error) -> Self {
        Self::RemoteFetch {
            message: "HTTP request failed".to_string(),
            source: Some(Box::new(error)),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Self::RemoteFetch {
            message: "JSON decoding failed".to_string(),
            source: Some(Box::new(error)),
        }
    }
}
