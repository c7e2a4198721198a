//! Node-link JSON export of a snapshot

use crate::builder::GraphSnapshot;
use crate::error::ExportError;
use crate::model::NodeId;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// Default output file name.
pub const NETWORK_FILE: &str = "network.json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkNode {
    /// 1-based position in node order.
    pub id: usize,
    pub name: String,
    pub kind: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkLink {
    pub source: usize,
    pub target: usize,
}

/// Flat `{ nodes, links }` document with numeric ids.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkExport {
    pub nodes: Vec<NetworkNode>,
    pub links: Vec<NetworkLink>,
}

impl NetworkExport {
    pub fn from_snapshot(snapshot: &GraphSnapshot) -> Self {
        let mut numbering: HashMap<&NodeId, usize> = HashMap::new();
        let mut export = NetworkExport::default();

        for (i, node) in snapshot.nodes().enumerate() {
            numbering.insert(&node.id, i + 1);
            export.nodes.push(NetworkNode {
                id: i + 1,
                name: node.name.clone(),
                kind: node.kind.as_str().to_string(),
            });
        }

        for edge in snapshot.edges() {
            if let (Some(&source), Some(&target)) =
                (numbering.get(&edge.source), numbering.get(&edge.target))
            {
                export.links.push(NetworkLink { source, target });
            }
        }

        export
    }

    pub fn to_json_string(&self) -> Result<String, ExportError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Write the snapshot's export to `path`, creating parent directories.
pub fn save_network(snapshot: &GraphSnapshot, path: &Path) -> Result<(), ExportError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let export = NetworkExport::from_snapshot(snapshot);
    std::fs::write(path, export.to_json_string()?)?;

    tracing::debug!(
        "Network saved to {}: {} nodes, {} links",
        path.display(),
        export.nodes.len(),
        export.links.len()
    );
    Ok(())
}

/// Read back a previously saved export.
pub fn load_network(path: &Path) -> Result<NetworkExport, ExportError> {
    let raw = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}
