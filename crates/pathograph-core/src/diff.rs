//! Incremental graph deltas handed to renderers

use crate::model::*;
use serde::{Deserialize, Serialize};

/// The change produced by one expand or collapse call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphDelta {
    /// Snapshot sequence number after this change. Unchanged for no-op calls.
    pub sequence: u64,
    /// Nodes added in this update.
    pub added_nodes: Vec<Node>,
    /// Edges added in this update.
    pub added_edges: Vec<Edge>,
    /// Nodes removed in this update.
    pub removed_nodes: Vec<NodeId>,
    /// Edges removed in this update.
    pub removed_edges: Vec<Edge>,
}

/// Delta returned by [`crate::GraphSnapshot::expand`]; only additions.
pub type ExpansionResult = GraphDelta;

/// Delta returned by [`crate::GraphSnapshot::collapse`]; only removals.
pub type CollapseResult = GraphDelta;

impl GraphDelta {
    /// Create an empty delta with given sequence number.
    pub fn new(sequence: u64) -> Self {
        GraphDelta {
            sequence,
            ..Default::default()
        }
    }

    /// Check if this delta is empty (no changes).
    pub fn is_empty(&self) -> bool {
        self.added_nodes.is_empty()
            && self.added_edges.is_empty()
            && self.removed_nodes.is_empty()
            && self.removed_edges.is_empty()
    }

    /// Fold a later delta into this one, cancelling additions that were
    /// removed again.
    pub fn merge(&mut self, later: GraphDelta) {
        self.sequence = self.sequence.max(later.sequence);

        for id in later.removed_nodes {
            if let Some(pos) = self.added_nodes.iter().position(|n| n.id == id) {
                self.added_nodes.remove(pos);
            } else {
                self.removed_nodes.push(id);
            }
        }
        for edge in later.removed_edges {
            if let Some(pos) = self.added_edges.iter().position(|e| *e == edge) {
                self.added_edges.remove(pos);
            } else {
                self.removed_edges.push(edge);
            }
        }

        for node in later.added_nodes {
            if let Some(pos) = self.removed_nodes.iter().position(|id| *id == node.id) {
                self.removed_nodes.remove(pos);
            } else {
                self.added_nodes.push(node);
            }
        }
        for edge in later.added_edges {
            if let Some(pos) = self.removed_edges.iter().position(|e| *e == edge) {
                self.removed_edges.remove(pos);
            } else {
                self.added_edges.push(edge);
            }
        }
    }
}
