//! SuperMAG geomagnetic index file parser
//!
//! Index files (SME, SML, SMU and friends) are a single block: a free-text
//! header ended by a `==` separator, one line of `<name (units)>` column
//! declarations, then one whitespace-separated row per timestamp.
//!
//! ```no_run
//! use supermag_reader::IndexParser;
//!
//! # fn example() -> supermag_reader::Result<()> {
//! let index = IndexParser::new().parse_file("example_index.txt".as_ref())?;
//! if let Some(sml) = index.get("SML") {
//!     println!("{} SML samples, first {}", sml.len(), sml[0]);
//! }
//! # Ok(())
//! # }
//! ```

pub mod dataset;
pub mod parser;

#[cfg(test)]
pub mod tests;

pub use dataset::IndexDataset;
pub use parser::IndexParser;
