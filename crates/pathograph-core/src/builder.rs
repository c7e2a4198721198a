//! Lazy graph construction from flat association records
//!
//! [`GraphBuilder::build_root`] creates the root node and its eager layer.
//! Everything below it is materialized by [`GraphSnapshot::expand`] and torn
//! down again by [`GraphSnapshot::collapse`]. Node identity is kind + name, so
//! an entity reached from several parents is a single node with one incoming
//! edge per parent; the in-degree doubles as its reference count.

use std::collections::HashSet;

use crate::config::{BuilderConfig, RiskFactorExpansion, Topology};
use crate::diff::{CollapseResult, ExpansionResult, GraphDelta};
use crate::error::{GraphError, Result};
use crate::graph::Graph;
use crate::index::RecordIndex;
use crate::model::*;

/// Builds [`GraphSnapshot`]s according to a [`BuilderConfig`].
#[derive(Debug, Clone, Default)]
pub struct GraphBuilder {
    config: BuilderConfig,
}

impl GraphBuilder {
    pub fn new(config: BuilderConfig) -> Self {
        GraphBuilder { config }
    }

    /// Create the root node for `root_name` and expand it.
    ///
    /// Malformed records are skipped and kept on the snapshot, see
    /// [`GraphSnapshot::skipped_records`].
    pub fn build_root(&self, root_name: &str, records: &[Record]) -> Result<GraphSnapshot> {
        let root_name = root_name.trim();
        if root_name.is_empty() {
            return Err(GraphError::EmptyRoot);
        }

        let (records, skipped) = RecordIndex::build(records);
        if records.is_empty() {
            tracing::warn!("No usable records, '{}' will have no children", root_name);
        }
        let root = Node::new(NodeKind::Root, root_name);
        let mut graph = Graph::new();
        graph.add_node(root.clone());

        let mut snapshot = GraphSnapshot {
            graph,
            root,
            expanded: HashSet::new(),
            blocked: HashSet::new(),
            records,
            config: self.config.clone(),
            skipped,
            sequence: 0,
        };
        let root_id = snapshot.root.id.clone();
        snapshot.expand(&root_id)?;

        tracing::info!(
            "Built graph rooted at '{}': {} nodes, {} edges from {} records ({} skipped)",
            root_name,
            snapshot.node_count(),
            snapshot.edge_count(),
            snapshot.records.len(),
            snapshot.skipped.len()
        );
        Ok(snapshot)
    }
}

/// The current node/edge state owned by one caller session.
#[derive(Debug, Clone)]
pub struct GraphSnapshot {
    graph: Graph,
    root: Node,
    expanded: HashSet<NodeId>,
    /// Expanded nodes with at least one child held back to keep the graph
    /// acyclic. Expanding them again retries those children.
    blocked: HashSet<NodeId>,
    records: RecordIndex,
    config: BuilderConfig,
    skipped: Vec<GraphError>,
    sequence: u64,
}

impl GraphSnapshot {
    /// Materialize the children of `id`.
    ///
    /// Expanding an already expanded node is a no-op returning an empty delta,
    /// unless some of its children were held back because linking them would
    /// have closed a cycle; those are retried. Fails with [`GraphError::NotFound`] or [`GraphError::UnsupportedKind`]
    /// without touching the snapshot.
    pub fn expand(&mut self, id: &NodeId) -> Result<ExpansionResult> {
        let node = self
            .graph
            .node(id)
            .cloned()
            .ok_or_else(|| GraphError::NotFound(id.clone()))?;
        if !node.kind.is_expandable() {
            return Err(GraphError::UnsupportedKind {
                id: id.clone(),
                kind: node.kind,
            });
        }
        let retry = self.expanded.contains(id);
        if retry && !self.blocked.contains(id) {
            tracing::debug!("{} already expanded", id);
            return Ok(GraphDelta::new(self.sequence));
        }

        let mut delta = GraphDelta::default();
        let mut blocked = false;
        for child in self.child_candidates(&node) {
            // Keep the graph acyclic: never link to an ancestor.
            if self.graph.has_path(&child.id, id) {
                tracing::debug!("Holding back {} -> {}: would close a cycle", id, child.id);
                blocked = true;
                continue;
            }
            if self.graph.add_node(child.clone()) {
                delta.added_nodes.push(child.clone());
            }
            if let Some(edge) = self.graph.add_edge(id, &child.id) {
                delta.added_edges.push(edge);
            }
        }

        if blocked {
            self.blocked.insert(id.clone());
        } else {
            self.blocked.remove(id);
        }
        if retry && delta.is_empty() {
            tracing::debug!("{} still has children held back", id);
            return Ok(GraphDelta::new(self.sequence));
        }

        self.expanded.insert(id.clone());
        self.sequence += 1;
        delta.sequence = self.sequence;

        tracing::debug!(
            "Expanded {}: +{} nodes, +{} edges",
            id,
            delta.added_nodes.len(),
            delta.added_edges.len()
        );
        Ok(delta)
    }

    /// Undo the expansion of `id`.
    ///
    /// Children still referenced by another expanded parent survive; children
    /// left without parents are removed, cascading through their own
    /// expansions.
    pub fn collapse(&mut self, id: &NodeId) -> Result<CollapseResult> {
        let kind = self
            .graph
            .node(id)
            .map(|node| node.kind)
            .ok_or_else(|| GraphError::NotFound(id.clone()))?;
        if !kind.is_expandable() {
            return Err(GraphError::UnsupportedKind {
                id: id.clone(),
                kind,
            });
        }
        self.blocked.remove(id);
        if !self.expanded.remove(id) {
            tracing::debug!("{} is not expanded", id);
            return Ok(GraphDelta::new(self.sequence));
        }

        let mut delta = GraphDelta::default();
        let mut orphans = Vec::new();
        let mut to_visit = vec![id.clone()];

        while let Some(parent) = to_visit.pop() {
            let edges: Vec<Edge> = self.graph.edges_from(&parent).into_iter().cloned().collect();
            for edge in edges {
                self.graph.remove_edge(&edge.source, &edge.target);
                if self.graph.in_degree(&edge.target) == 0 {
                    self.blocked.remove(&edge.target);
                    if self.expanded.remove(&edge.target) {
                        to_visit.push(edge.target.clone());
                    }
                    orphans.push(edge.target.clone());
                }
                delta.removed_edges.push(edge);
            }
        }

        for orphan in orphans {
            if self.graph.remove_node(&orphan).is_some() {
                delta.removed_nodes.push(orphan);
            }
        }

        self.sequence += 1;
        delta.sequence = self.sequence;

        tracing::debug!(
            "Collapsed {}: -{} nodes, -{} edges",
            id,
            delta.removed_nodes.len(),
            delta.removed_edges.len()
        );
        Ok(delta)
    }

    /// Children `node` would get under the configured rules, deduplicated by id.
    fn child_candidates(&self, node: &Node) -> Vec<Node> {
        let mut children = Vec::new();

        match node.kind {
            NodeKind::Root => match self.config.topology {
                Topology::DiseaseFirst => {
                    for subject in self.records.subjects() {
                        children.push(Node::new(NodeKind::Disease, subject.as_str()));
                    }
                }
                Topology::CategoryFirst => {
                    for relation in self.records.relations_of(&node.name) {
                        let label = self.config.category_label(relation);
                        children.push(Node::new(NodeKind::Category(relation), label));
                    }
                }
            },
            NodeKind::Category(relation) => {
                for object in self.records.objects(&self.root.name, relation) {
                    children.push(Node::new(relation.child_kind(), object));
                }
            }
            NodeKind::Disease => {
                for (relation, object) in self.records.related(&node.name) {
                    children.push(Node::new(relation.child_kind(), object.as_str()));
                }
            }
            NodeKind::RiskFactor => match self.config.risk_factor_expansion {
                RiskFactorExpansion::AsDisease => {
                    for disease in self.records.diseases_named_by_factor(&node.name) {
                        children.push(Node::new(NodeKind::Disease, disease));
                    }
                }
                RiskFactorExpansion::AffectedDiseases => {
                    for disease in self.records.diseases_with_risk_factor(&node.name) {
                        children.push(Node::new(NodeKind::Disease, disease.as_str()));
                    }
                }
            },
            NodeKind::Symptom => {}
        }

        let mut seen = HashSet::new();
        children.retain(|child| seen.insert(child.id.clone()));
        children
    }

    pub fn root(&self) -> &Node {
        &self.root
    }

    pub fn node(&self, id: &NodeId) -> Option<&Node> {
        self.graph.node(id)
    }

    pub fn contains(&self, id: &NodeId) -> bool {
        self.graph.contains(id)
    }

    /// All nodes in graph order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.graph.all_nodes()
    }

    /// All edges in graph order.
    pub fn edges(&self) -> impl Iterator<Item = &Edge> {
        self.graph.all_edges()
    }

    pub fn children(&self, id: &NodeId) -> Vec<&Node> {
        self.graph
            .edges_from(id)
            .into_iter()
            .filter_map(|edge| self.graph.node(&edge.target))
            .collect()
    }

    pub fn parents(&self, id: &NodeId) -> Vec<&Node> {
        self.graph
            .edges_to(id)
            .into_iter()
            .filter_map(|edge| self.graph.node(&edge.source))
            .collect()
    }

    /// Number of expanded parents currently referencing `id`.
    pub fn ref_count(&self, id: &NodeId) -> usize {
        self.graph.in_degree(id)
    }

    pub fn has_edge(&self, source: &NodeId, target: &NodeId) -> bool {
        self.graph.has_edge_between(source, target)
    }

    pub fn is_expanded(&self, id: &NodeId) -> bool {
        self.expanded.contains(id)
    }

    /// Whether `id` is expanded but has children held back by the cycle check.
    pub fn has_held_back_children(&self, id: &NodeId) -> bool {
        self.blocked.contains(id)
    }

    /// Nodes whose display name is `name`, any kind.
    pub fn find_by_name(&self, name: &str) -> Vec<&Node> {
        self.graph.find_nodes_by_name(name)
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Incremented by every expand/collapse that changed state.
    pub fn sequence(&self) -> u64 {
        self.sequence
    }

    /// Records rejected while building.
    pub fn skipped_records(&self) -> &[GraphError] {
        &self.skipped
    }

    pub fn records(&self) -> &RecordIndex {
        &self.records
    }

    pub fn config(&self) -> &BuilderConfig {
        &self.config
    }
}
