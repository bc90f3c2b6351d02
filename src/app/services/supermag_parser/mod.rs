//! SuperMAG magnetometer file parser
//!
//! SuperMAG distributes multi-station magnetometer data as ASCII files with a
//! free-form header followed by a record block. Each record is a timestamp
//! line and one value line per station that reported at that time, so the
//! file cannot be read as a fixed-width table.
//!
//! ## Architecture
//!
//! - [`revision`] - Revision detection and per-revision column layout
//! - [`timestamp`] - Record-start recognition and timestamp decoding
//! - [`record_scan`] - Counting and fill passes over the record block
//! - [`dataset`] - The resulting [`MagnetometerDataset`]
//! - [`parser`] - Orchestration of a full file read
//! - [`stats`] - Read statistics
//!
//! ## Usage
//!
//! ```no_run
//! use supermag_reader::{DerivedFields, MagnetometerParser, ReaderConfig};
//!
//! # fn example() -> supermag_reader::Result<()> {
//! let config = ReaderConfig::default().with_derived(DerivedFields::all());
//! let data = MagnetometerParser::new(config).parse_file("example_v5.txt".as_ref())?;
//!
//! println!("revision {} with stations {:?}", data.revision(), data.stations());
//! if let Some(ale) = data.get("ALE") {
//!     println!("first ALE bx: {}", ale.bx()[0]);
//! }
//! # Ok(())
//! # }
//! ```

pub mod dataset;
pub mod parser;
pub mod record_scan;
pub mod revision;
pub mod stats;
pub mod timestamp;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use dataset::MagnetometerDataset;
pub use parser::MagnetometerParser;
pub use record_scan::{RecordScanner, ScanState};
pub use revision::{ColumnOffset, ColumnScheme, FormatRevision, HeaderInfo};
pub use stats::ReadStats;
