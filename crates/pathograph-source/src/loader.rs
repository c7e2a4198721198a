//! Loading record files from disk

use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::error::SourceError;
use crate::rows::{normalize_rows, Normalized, RawRow};
use crate::sparql::sparql_value_to_rows;

/// Parse a JSON document holding either a plain row array or a SPARQL result
/// set. `origin` names the document in errors.
pub fn parse_rows(raw: &str, origin: &str) -> Result<Vec<RawRow>, SourceError> {
    let value: Value = serde_json::from_str(raw).map_err(|source| SourceError::Json {
        origin: origin.to_string(),
        source,
    })?;

    if value.is_array() {
        serde_json::from_value(value).map_err(|source| SourceError::Json {
            origin: origin.to_string(),
            source,
        })
    } else if value.get("results").is_some() {
        sparql_value_to_rows(value, origin)
    } else {
        Err(SourceError::UnrecognizedDocument {
            origin: origin.to_string(),
        })
    }
}

/// Read rows from a JSON file.
pub fn load_rows(path: &Path) -> Result<Vec<RawRow>, SourceError> {
    let raw = std::fs::read_to_string(path).map_err(|source| SourceError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let rows = parse_rows(&raw, &path.display().to_string())?;
    tracing::debug!("Read {} rows from {}", rows.len(), path.display());
    Ok(rows)
}

/// Load and normalize several record files into one batch.
pub fn load_records(paths: &[PathBuf]) -> Result<Normalized, SourceError> {
    let mut all = Normalized::default();

    for path in paths {
        let rows = load_rows(path)?;
        let normalized = normalize_rows(&rows);
        tracing::info!(
            "Loaded {} records from {} ({} rows rejected)",
            normalized.records.len(),
            path.display(),
            normalized.rejected.len()
        );
        all.extend(normalized);
    }

    Ok(all)
}
