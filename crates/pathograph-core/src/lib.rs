//! Pathograph Core — association graph model, lazy builder, and deltas

pub mod model;
pub mod error;
pub mod config;
pub mod graph;
pub mod index;
pub mod builder;
pub mod diff;
pub mod aggregation;
pub mod export;


#[cfg(test)]
pub mod test_utils;

pub use model::{NodeId, NodeKind, Node, Edge, Record, RelationKind};
pub use error::{GraphError, ConfigError, ExportError};
pub use config::{BuilderConfig, Topology, RiskFactorExpansion};
pub use graph::Graph;
pub use index::RecordIndex;
pub use builder::{GraphBuilder, GraphSnapshot};
pub use diff::{GraphDelta, ExpansionResult, CollapseResult};
pub use aggregation::{symptoms_by_disease, diseases_by_symptom, DiseaseSymptoms, SymptomPrevalence};
pub use export::{NETWORK_FILE, NetworkExport, NetworkNode, NetworkLink, save_network, load_network};
