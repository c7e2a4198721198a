//! Pathograph Source — loading and normalizing association records
//!
//! Rows arrive in whatever shape the upstream files or query service used
//! (`diseaseLabel` or `label` or `disease`, `symptomLabel` or `symptom`, ...).
//! This crate folds them into canonical [`pathograph_core::Record`]s once, so
//! the graph builder never sees field fallbacks.

pub mod error;
pub mod rows;
pub mod sparql;
pub mod loader;


#[cfg(test)]
pub mod test_utils;

pub use error::SourceError;
pub use rows::{RawRow, Normalized, normalize_rows, exposure_records};
pub use sparql::parse_sparql_results;
pub use loader::{parse_rows, load_rows, load_records};
