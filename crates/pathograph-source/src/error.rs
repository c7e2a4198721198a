//! Data source errors

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SourceError {
    #[error("Cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON in {origin}: {source}")]
    Json {
        origin: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Unrecognized document in {origin}: expected a row array or SPARQL results")]
    UnrecognizedDocument { origin: String },

    #[error("Malformed row #{index}: {reason}")]
    MalformedRow { index: usize, reason: String },
}
