//! SPARQL 1.1 JSON result documents

use std::collections::HashMap;

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::error::SourceError;
use crate::rows::RawRow;

#[derive(Debug, Deserialize)]
struct SparqlDocument {
    results: SparqlResults,
}

#[derive(Debug, Deserialize)]
struct SparqlResults {
    bindings: Vec<HashMap<String, SparqlTerm>>,
}

/// A bound term; only its lexical value matters here.
#[derive(Debug, Deserialize)]
struct SparqlTerm {
    value: String,
}

/// Read `results.bindings[*].<var>.value` into rows, using the query's
/// variable names (`disease`, `diseaseLabel`, `symptomLabel`, ...) as fields.
pub fn parse_sparql_results(raw: &str) -> Result<Vec<RawRow>, SourceError> {
    let document: SparqlDocument = serde_json::from_str(raw).map_err(|source| SourceError::Json {
        origin: "SPARQL results".to_string(),
        source,
    })?;
    bindings_to_rows(document)
}

pub(crate) fn sparql_value_to_rows(value: Value, origin: &str) -> Result<Vec<RawRow>, SourceError> {
    let document: SparqlDocument = serde_json::from_value(value).map_err(|source| SourceError::Json {
        origin: origin.to_string(),
        source,
    })?;
    bindings_to_rows(document)
}

fn bindings_to_rows(document: SparqlDocument) -> Result<Vec<RawRow>, SourceError> {
    document
        .results
        .bindings
        .into_iter()
        .map(|binding| {
            let fields: Map<String, Value> = binding
                .into_iter()
                .map(|(var, term)| (var, Value::String(term.value)))
                .collect();
            serde_json::from_value(Value::Object(fields)).map_err(|source| SourceError::Json {
                origin: "SPARQL binding".to_string(),
                source,
            })
        })
        .collect()
}
