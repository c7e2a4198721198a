//! Integration tests for Pathograph
//!
//! These tests verify that record loading, graph building and export work
//! together, both through the libraries and through the CLI.

use pathograph_core::{
    load_network, save_network, BuilderConfig, GraphBuilder, NodeId, NodeKind, Topology,
};
use pathograph_source::{exposure_records, load_records, load_rows};
use std::fs;
use std::process::Command;
use tempfile::TempDir;

const SYMPTOMS: &str = r#"[
  { "disease": "Lung Cancer", "symptomLabel": "Cough" },
  { "disease": "Lung Cancer", "symptomLabel": "Weight Loss" },
  { "disease": "COPD", "symptomLabel": "Cough" }
]"#;

const RISKS: &str = r#"[
  { "disease": "Heart Disease", "factorLabel": "Hypertension" },
  { "disease": "Hypertension", "factorLabel": "Obesity" }
]"#;

const SMOKING: &str = r#"[
  { "disease": "Q47912", "diseaseLabel": "Lung Cancer" },
  { "disease": "Q12152", "diseaseLabel": "Heart Disease" }
]"#;

fn fixture_dir() -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("diseases_symptoms.json"), SYMPTOMS).unwrap();
    fs::write(dir.path().join("diseases_risk_factors.json"), RISKS).unwrap();
    fs::write(dir.path().join("diseases_smoking.json"), SMOKING).unwrap();
    dir
}

/// Files -> records -> graph -> expansions -> export
#[test]
fn test_end_to_end_pipeline() {
    let dir = fixture_dir();
    let paths = vec![
        dir.path().join("diseases_symptoms.json"),
        dir.path().join("diseases_risk_factors.json"),
    ];

    let normalized = load_records(&paths).unwrap();
    assert_eq!(normalized.records.len(), 5);
    assert!(normalized.rejected.is_empty());

    let mut snapshot = GraphBuilder::default()
        .build_root("Smoking", &normalized.records)
        .unwrap();
    // Lung Cancer, COPD, Heart Disease, Hypertension
    assert_eq!(snapshot.children(&snapshot.root().id).len(), 4);

    let lung = NodeId::new(NodeKind::Disease, "Lung Cancer");
    let copd = NodeId::new(NodeKind::Disease, "COPD");
    snapshot.expand(&lung).unwrap();
    let delta = snapshot.expand(&copd).unwrap();
    assert!(delta.added_nodes.is_empty());
    assert_eq!(snapshot.ref_count(&NodeId::new(NodeKind::Symptom, "Cough")), 2);

    let out = dir.path().join("network.json");
    save_network(&snapshot, &out).unwrap();
    let export = load_network(&out).unwrap();
    assert_eq!(export.nodes.len(), snapshot.node_count());
    assert_eq!(export.links.len(), snapshot.edge_count());
    assert_eq!(export.nodes[0].kind, "root");
}

/// A disease page: one focus disease with symptom and risk-factor categories
#[test]
fn test_category_first_disease_page() {
    let dir = fixture_dir();
    let paths = vec![
        dir.path().join("diseases_symptoms.json"),
        dir.path().join("diseases_risk_factors.json"),
    ];
    let normalized = load_records(&paths).unwrap();

    let config = BuilderConfig::from_toml_str("topology = \"category-first\"").unwrap();
    assert_eq!(config.topology, Topology::CategoryFirst);
    let mut snapshot = GraphBuilder::new(config)
        .build_root("Hypertension", &normalized.records)
        .unwrap();

    let risks = NodeId::new(
        NodeKind::Category(pathograph_core::RelationKind::RiskFactor),
        "Risk Factors",
    );
    let delta = snapshot.expand(&risks).unwrap();
    assert_eq!(delta.added_nodes.len(), 1);
    assert_eq!(delta.added_nodes[0].name, "Obesity");
}

/// Exposure lists link every listed disease to the root exposure
#[test]
fn test_exposure_list() {
    let dir = fixture_dir();
    let rows = load_rows(&dir.path().join("diseases_smoking.json")).unwrap();
    let normalized = exposure_records(&rows, "Smoking");

    let mut snapshot = GraphBuilder::default()
        .build_root("Smoking", &normalized.records)
        .unwrap();
    assert_eq!(snapshot.node_count(), 3);

    let delta = snapshot
        .expand(&NodeId::new(NodeKind::Disease, "Lung Cancer"))
        .unwrap();
    assert_eq!(delta.added_nodes[0].kind, NodeKind::RiskFactor);
    assert_eq!(delta.added_nodes[0].name, "Smoking");
}

/// The CLI builds, expands and writes a network file
#[test]
fn test_cli_build() {
    let dir = fixture_dir();
    let out = dir.path().join("out").join("network.json");

    let output = Command::new(env!("CARGO_BIN_EXE_pathograph"))
        .arg("build")
        .args(["--root", "Smoking"])
        .arg("--records")
        .arg(dir.path().join("diseases_symptoms.json"))
        .arg(dir.path().join("diseases_risk_factors.json"))
        .args(["--expand", "Lung Cancer"])
        .arg("--out")
        .arg(&out)
        .output()
        .expect("Failed to execute command");
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));

    let written: serde_json::Value = serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
    // root + 4 diseases + Cough + Weight Loss
    assert_eq!(written["nodes"].as_array().unwrap().len(), 7);
    assert_eq!(written["links"].as_array().unwrap().len(), 6);
}

/// The CLI prints aggregate counts
#[test]
fn test_cli_stats() {
    let dir = fixture_dir();

    let output = Command::new(env!("CARGO_BIN_EXE_pathograph"))
        .arg("stats")
        .arg("--records")
        .arg(dir.path().join("diseases_symptoms.json"))
        .output()
        .expect("Failed to execute command");
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Symptoms per disease:"));
    assert!(stdout.contains("2  Lung Cancer"));
    assert!(stdout.contains("2  Cough"));
}
