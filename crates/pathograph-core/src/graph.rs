//! Graph wrapper using petgraph::StableDiGraph keyed by NodeId

use crate::model::*;
use petgraph::algo::has_path_connecting;
use petgraph::stable_graph::{NodeIndex, StableDiGraph};
use petgraph::visit::EdgeRef;
use petgraph::Direction;
use std::collections::HashMap;

/// Directed graph with at most one edge per ordered node pair.
#[derive(Clone)]
pub struct Graph {
    inner: StableDiGraph<Node, Edge>,
    index: HashMap<NodeId, NodeIndex>,
}

impl std::fmt::Debug for Graph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Graph")
            .field("node_count", &self.inner.node_count())
            .field("edge_count", &self.inner.edge_count())
            .finish()
    }
}

impl Graph {
    pub fn new() -> Self {
        Graph {
            inner: StableDiGraph::new(),
            index: HashMap::new(),
        }
    }

    /// Add a node unless one with the same id exists. Returns true if inserted.
    pub fn add_node(&mut self, node: Node) -> bool {
        if self.index.contains_key(&node.id) {
            return false;
        }
        let id = node.id.clone();
        let idx = self.inner.add_node(node);
        self.index.insert(id, idx);
        true
    }

    /// Add an edge between two existing nodes. Returns the edge if it was new,
    /// `None` if it already existed or an endpoint is missing.
    pub fn add_edge(&mut self, source: &NodeId, target: &NodeId) -> Option<Edge> {
        let (src, dst) = (*self.index.get(source)?, *self.index.get(target)?);
        if self.inner.find_edge(src, dst).is_some() {
            return None;
        }
        let edge = Edge::new(source.clone(), target.clone());
        self.inner.add_edge(src, dst, edge.clone());
        Some(edge)
    }

    /// Get a node by ID.
    pub fn node(&self, id: &NodeId) -> Option<&Node> {
        self.index.get(id).and_then(|&idx| self.inner.node_weight(idx))
    }

    pub fn contains(&self, id: &NodeId) -> bool {
        self.index.contains_key(id)
    }

    /// Total number of nodes.
    pub fn node_count(&self) -> usize {
        self.inner.node_count()
    }

    /// Total number of edges.
    pub fn edge_count(&self) -> usize {
        self.inner.edge_count()
    }

    /// Iterate over all nodes.
    pub fn all_nodes(&self) -> impl Iterator<Item = &Node> {
        self.inner
            .node_indices()
            .filter_map(move |idx| self.inner.node_weight(idx))
    }

    /// Iterate over all edges.
    pub fn all_edges(&self) -> impl Iterator<Item = &Edge> {
        self.inner
            .edge_indices()
            .filter_map(move |idx| self.inner.edge_weight(idx))
    }

    /// Get all outgoing edges from a node, in edge index order.
    pub fn edges_from(&self, source: &NodeId) -> Vec<&Edge> {
        self.edges_directed(source, Direction::Outgoing)
    }

    /// Get all incoming edges to a node, in edge index order.
    pub fn edges_to(&self, target: &NodeId) -> Vec<&Edge> {
        self.edges_directed(target, Direction::Incoming)
    }

    fn edges_directed(&self, id: &NodeId, direction: Direction) -> Vec<&Edge> {
        let Some(&idx) = self.index.get(id) else {
            return Vec::new();
        };
        // petgraph walks adjacency lists newest first
        let mut edges: Vec<_> = self.inner.edges_directed(idx, direction).collect();
        edges.sort_by_key(|edge_ref| edge_ref.id());
        edges.into_iter().map(|edge_ref| edge_ref.weight()).collect()
    }

    /// Number of incoming edges.
    pub fn in_degree(&self, id: &NodeId) -> usize {
        self.index.get(id).map_or(0, |&idx| {
            self.inner.edges_directed(idx, Direction::Incoming).count()
        })
    }

    pub fn has_edge_between(&self, source: &NodeId, target: &NodeId) -> bool {
        match (self.index.get(source), self.index.get(target)) {
            (Some(&src), Some(&dst)) => self.inner.find_edge(src, dst).is_some(),
            _ => false,
        }
    }

    /// Whether `to` is reachable from `from` following edge direction.
    pub fn has_path(&self, from: &NodeId, to: &NodeId) -> bool {
        match (self.index.get(from), self.index.get(to)) {
            (Some(&src), Some(&dst)) => has_path_connecting(&self.inner, src, dst, None),
            _ => false,
        }
    }

    /// Find nodes by display name.
    pub fn find_nodes_by_name(&self, name: &str) -> Vec<&Node> {
        self.all_nodes().filter(|n| n.name == name).collect()
    }

    /// Remove a node and all its edges.
    pub fn remove_node(&mut self, id: &NodeId) -> Option<Node> {
        let idx = self.index.remove(id)?;
        self.inner.remove_node(idx)
    }

    /// Remove the edge between two nodes.
    pub fn remove_edge(&mut self, source: &NodeId, target: &NodeId) -> Option<Edge> {
        let (src, dst) = (*self.index.get(source)?, *self.index.get(target)?);
        let idx = self.inner.find_edge(src, dst)?;
        self.inner.remove_edge(idx)
    }
}

impl Default for Graph {
    fn default() -> Self {
        Self::new()
    }
}
