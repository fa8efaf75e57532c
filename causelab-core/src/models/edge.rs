//! Directed cause → effect edges.

use serde::{Deserialize, Serialize};

/// A directed edge from a cause to an effect.
///
/// Edge ids are unique, but graph-level uniqueness is keyed on the
/// (source, target) pair: two edges in the same direction between the same
/// pair are never permitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CausalEdge {
    pub id: String,
    pub source: String,
    pub target: String,
}

impl CausalEdge {
    /// Create an edge with a fresh uuid id.
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            source: source.into(),
            target: target.into(),
        }
    }

    /// The (source, target) identity pair.
    pub fn pair(&self) -> (&str, &str) {
        (&self.source, &self.target)
    }
}
