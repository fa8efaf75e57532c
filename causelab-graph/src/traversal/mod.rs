//! Traversal queries: shortest-path degree computation and pairwise
//! relationship classification.

pub mod degrees;
pub mod relationship;

pub use degrees::{downstream_with_degrees, upstream_with_degrees, NodeWithDegree};
pub use relationship::{relationship, NodeRelationship};
