//! Test utilities for Pathograph sources

use std::fs;
use tempfile::TempDir;

/// Rows in the shape of the static symptom file.
pub const SYMPTOM_ROWS: &str = r#"[
  { "disease": "Lung Cancer", "diseaseLabel": "Lung Cancer", "symptom": "Q35805", "symptomLabel": "Cough" },
  { "disease": "Lung Cancer", "symptomLabel": "Weight Loss" },
  { "label": "COPD", "symptom": "Cough" },
  { "diseaseLabel": "", "symptomLabel": "Fever" }
]"#;

/// Rows in the shape of the static risk-factor file.
pub const RISK_FACTOR_ROWS: &str = r#"[
  { "disease": "Heart Disease", "factor": "Q41861", "factorLabel": "Hypertension" },
  { "disease": "Stroke", "factorLabel": "  Hypertension  " },
  { "disease": "Stroke" }
]"#;

/// A SPARQL JSON result set as returned by a public query service.
pub const SPARQL_RESULTS: &str = r#"{
  "head": { "vars": ["disease", "diseaseLabel", "symptom", "symptomLabel"] },
  "results": {
    "bindings": [
      {
        "disease": { "type": "uri", "value": "http://www.wikidata.org/entity/Q47912" },
        "diseaseLabel": { "xml:lang": "en", "type": "literal", "value": "lung cancer" },
        "symptom": { "type": "uri", "value": "http://www.wikidata.org/entity/Q35805" },
        "symptomLabel": { "xml:lang": "en", "type": "literal", "value": "cough" }
      },
      {
        "disease": { "type": "uri", "value": "http://www.wikidata.org/entity/Q12152" },
        "diseaseLabel": { "xml:lang": "en", "type": "literal", "value": "myocardial infarction" },
        "symptom": { "type": "uri", "value": "http://www.wikidata.org/entity/Q1088113" },
        "symptomLabel": { "xml:lang": "en", "type": "literal", "value": "chest pain" }
      }
    ]
  }
}"#;

/// Create a temporary directory holding the given files.
pub fn create_fixture_dir(files: &[(&str, &str)]) -> TempDir {
    let temp_dir = TempDir::new().unwrap();

    for (name, content) in files {
        fs::write(temp_dir.path().join(name), content).unwrap();
    }

    temp_dir
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_fixture_dir() {
        let dir = create_fixture_dir(&[("a.json", "[]"), ("b.json", "{}")]);
        assert!(dir.path().join("a.json").exists());
        assert!(dir.path().join("b.json").exists());
    }
}
