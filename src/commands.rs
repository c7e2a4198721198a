//! CLI command implementations

use anyhow::Context;
use pathograph_core::{
    diseases_by_symptom, save_network, symptoms_by_disease, BuilderConfig, GraphBuilder,
    GraphDelta, NetworkExport,
};
use pathograph_source::{exposure_records, load_records, load_rows};
use std::path::{Path, PathBuf};

pub fn load_config(path: Option<&Path>) -> anyhow::Result<BuilderConfig> {
    match path {
        Some(path) => BuilderConfig::load(path)
            .with_context(|| format!("Failed to load config {}", path.display())),
        None => Ok(BuilderConfig::default()),
    }
}

pub fn build(
    config: BuilderConfig,
    root: &str,
    records: &[PathBuf],
    exposure: &[PathBuf],
    expand: &[String],
    out: Option<&Path>,
) -> anyhow::Result<()> {
    let mut normalized = load_records(records).context("Failed to load record files")?;
    for path in exposure {
        let rows = load_rows(path).context("Failed to load exposure list")?;
        normalized.extend(exposure_records(&rows, root));
    }

    let mut snapshot = GraphBuilder::new(config).build_root(root, &normalized.records)?;

    let mut total = GraphDelta::new(snapshot.sequence());
    for name in expand {
        let candidates = snapshot.find_by_name(name);
        let Some(id) = candidates
            .iter()
            .find(|n| n.kind.is_expandable())
            .or(candidates.first())
            .map(|n| n.id.clone())
        else {
            tracing::warn!("No node named '{}', skipping", name);
            continue;
        };

        let delta = snapshot
            .expand(&id)
            .with_context(|| format!("Failed to expand '{}'", name))?;
        tracing::info!(
            "Expanded {}: +{} nodes, +{} edges",
            id,
            delta.added_nodes.len(),
            delta.added_edges.len()
        );
        total.merge(delta);
    }

    tracing::info!(
        "Graph has {} nodes, {} edges ({} nodes added by expansion)",
        snapshot.node_count(),
        snapshot.edge_count(),
        total.added_nodes.len()
    );

    match out {
        Some(path) => {
            save_network(&snapshot, path)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            tracing::info!("Network written to {}", path.display());
        }
        None => println!("{}", NetworkExport::from_snapshot(&snapshot).to_json_string()?),
    }

    Ok(())
}

pub fn stats(records: &[PathBuf], top: usize) -> anyhow::Result<()> {
    let normalized = load_records(records).context("Failed to load record files")?;

    println!("Symptoms per disease:");
    for entry in symptoms_by_disease(&normalized.records).iter().take(top) {
        println!("  {:>4}  {}", entry.count, entry.disease);
    }

    println!("Diseases per symptom:");
    for entry in diseases_by_symptom(&normalized.records).iter().take(top) {
        println!("  {:>4}  {}", entry.count, entry.symptom);
    }

    Ok(())
}
