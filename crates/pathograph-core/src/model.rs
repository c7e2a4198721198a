//! Core data structures for the association graph

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::GraphError;

/// What kind of association a record expresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RelationKind {
    /// Disease has symptom.
    Symptom,
    /// Disease has risk factor.
    RiskFactor,
}

impl RelationKind {
    /// All relation kinds, in the order category nodes are laid out.
    pub const ALL: [RelationKind; 2] = [RelationKind::Symptom, RelationKind::RiskFactor];

    pub fn as_str(self) -> &'static str {
        match self {
            RelationKind::Symptom => "symptom",
            RelationKind::RiskFactor => "riskFactor",
        }
    }

    /// The node kind an object of this relation is materialized as.
    pub fn child_kind(self) -> NodeKind {
        match self {
            RelationKind::Symptom => NodeKind::Symptom,
            RelationKind::RiskFactor => NodeKind::RiskFactor,
        }
    }
}

/// One canonical association between a primary entity and a related one.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Record {
    /// The primary entity (a disease).
    pub subject: String,
    /// The related entity (a symptom or a risk factor).
    pub object: String,
    pub relation: RelationKind,
    /// Upstream identifier of the subject (a QID or IRI), when it differs
    /// from the label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub object_id: Option<String>,
}

impl Record {
    pub fn new(subject: impl Into<String>, object: impl Into<String>, relation: RelationKind) -> Self {
        Record {
            subject: subject.into(),
            object: object.into(),
            relation,
            subject_id: None,
            object_id: None,
        }
    }

    /// Attach upstream identifiers to both ends of the record.
    pub fn with_ids(mut self, subject_id: Option<&str>, object_id: Option<&str>) -> Self {
        self.subject_id = subject_id.map(str::to_string);
        self.object_id = object_id.map(str::to_string);
        self
    }

    pub fn symptom(disease: impl Into<String>, symptom: impl Into<String>) -> Self {
        Record::new(disease, symptom, RelationKind::Symptom)
    }

    pub fn risk_factor(disease: impl Into<String>, factor: impl Into<String>) -> Self {
        Record::new(disease, factor, RelationKind::RiskFactor)
    }

    /// Trim both labels, rejecting records where either ends up empty. Blank
    /// identifiers are dropped. `index` is the record's position in its
    /// input, used for reporting.
    pub fn normalized(&self, index: usize) -> Result<Record, GraphError> {
        let subject = self.subject.trim();
        let object = self.object.trim();
        if subject.is_empty() {
            return Err(GraphError::MalformedRecord {
                index,
                reason: "empty subject label".to_string(),
            });
        }
        if object.is_empty() {
            return Err(GraphError::MalformedRecord {
                index,
                reason: format!("empty {} label for '{}'", self.relation.as_str(), subject),
            });
        }
        Ok(Record::new(subject, object, self.relation)
            .with_ids(trimmed_id(&self.subject_id), trimmed_id(&self.object_id)))
    }
}

fn trimmed_id(id: &Option<String>) -> Option<&str> {
    id.as_deref().map(str::trim).filter(|id| !id.is_empty())
}

/// Discriminates what a node in the graph stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum NodeKind {
    /// The single entry point of a graph (an exposure such as "Smoking", or
    /// the focus disease in category-first layouts).
    Root,
    Disease,
    Symptom,
    RiskFactor,
    /// A grouping node listing every related entity of one relation kind.
    Category(RelationKind),
}

impl NodeKind {
    /// Short tag used as the presentation-neutral kind name.
    pub fn as_str(self) -> &'static str {
        match self {
            NodeKind::Root => "root",
            NodeKind::Disease => "disease",
            NodeKind::Symptom => "symptom",
            NodeKind::RiskFactor => "riskFactor",
            NodeKind::Category(_) => "category",
        }
    }

    /// Whether any expansion rule exists for this kind.
    pub fn is_expandable(self) -> bool {
        match self {
            NodeKind::Root | NodeKind::Disease | NodeKind::RiskFactor | NodeKind::Category(_) => true,
            NodeKind::Symptom => false,
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeKind::Category(relation) => write!(f, "category({})", relation.as_str()),
            other => f.write_str(other.as_str()),
        }
    }
}

/// Unique, stable identifier for a node, derived from its kind and name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(String);

impl NodeId {
    pub fn new(kind: NodeKind, name: &str) -> Self {
        match kind {
            NodeKind::Category(relation) => NodeId(format!("category:{}:{}", relation.as_str(), name)),
            other => NodeId(format!("{}:{}", other.as_str(), name)),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for NodeId {
    fn from(raw: &str) -> Self {
        NodeId(raw.to_string())
    }
}

/// A single node in the association graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    pub id: NodeId,
    pub name: String,
    pub kind: NodeKind,
}

impl Node {
    pub fn new(kind: NodeKind, name: impl Into<String>) -> Self {
        let name = name.into();
        Node {
            id: NodeId::new(kind, &name),
            name,
            kind,
        }
    }
}

/// A directed parent → child edge.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge {
    pub source: NodeId,
    pub target: NodeId,
}

impl Edge {
    pub fn new(source: NodeId, target: NodeId) -> Self {
        Edge { source, target }
    }
}
