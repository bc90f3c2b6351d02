//! SuperMAG web service access
//!
//! The service answers a query with a JSON array of flat objects, one per
//! sample, each carrying a `tval` epoch-seconds timestamp. Queries are built
//! by [`RemoteQuery`], the response is flattened into an
//! [`IndexDataset`](crate::IndexDataset) by [`flatten_records`], and
//! [`RemoteClient`] ties the two together over one blocking request.

pub mod client;
pub mod query;
pub mod records;

#[cfg(test)]
pub mod tests;

pub use client::RemoteClient;
pub use query::{RemoteQuery, Selector};
pub use records::flatten_records;
