//! # causelab-graph
//!
//! The causal DAG engine. An in-memory directed acyclic graph of experiment
//! variables (`petgraph` under an id index), exposed as an immutable value:
//! every mutation is copy-on-write and returns a new graph, so callers own
//! the single mutable reference and the core never mutates in place.

pub mod cycle;
pub mod document;
pub mod store;
pub mod topology;
pub mod transform;
pub mod traversal;

pub use cycle::would_create_cycle;
pub use document::GraphDocument;
pub use store::CausalGraph;
pub use topology::{topology_report, TopologyReport};
pub use transform::{condense, expand, CondenseOutcome, ExpandOutcome};
pub use traversal::{relationship, NodeRelationship, NodeWithDegree};
