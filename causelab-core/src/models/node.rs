//! Causal variable nodes.
//!
//! # Examples
//!
//! ```
//! use causelab_core::models::CausalNode;
//!
//! let node = CausalNode::new("soil_ph", "Soil pH", "Acidity of the growth medium");
//! assert_eq!(node.id, "soil_ph");
//! assert!(node.position.is_none());
//! ```

use serde::{Deserialize, Serialize};

/// 2-D canvas position. Presentation-only: no graph invariant depends on it.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Closed classification set used by collaborators when reasoning about a
/// variable's role in the experiment. Irrelevant to graph invariants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeClassification {
    Treatment,
    Outcome,
    Mediator,
    Confounder,
    Covariate,
}

impl NodeClassification {
    pub const ALL: [NodeClassification; 5] = [
        Self::Treatment,
        Self::Outcome,
        Self::Mediator,
        Self::Confounder,
        Self::Covariate,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Treatment => "treatment",
            Self::Outcome => "outcome",
            Self::Mediator => "mediator",
            Self::Confounder => "confounder",
            Self::Covariate => "covariate",
        }
    }
}

impl std::fmt::Display for NodeClassification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A causal variable in the experiment graph.
///
/// The `id` is a stable, human-assigned token (snake_case variable name);
/// uniqueness within a graph is the caller's invariant to uphold via the
/// validating entry points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CausalNode {
    pub id: String,
    pub display_name: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub classification: Option<NodeClassification>,
}

impl CausalNode {
    /// Create a node with no position or classification.
    pub fn new(
        id: impl Into<String>,
        display_name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
            description: description.into(),
            position: None,
            classification: None,
        }
    }

    /// Builder-style position assignment.
    pub fn at(mut self, x: f64, y: f64) -> Self {
        self.position = Some(Position::new(x, y));
        self
    }

    /// Builder-style classification assignment.
    pub fn classified(mut self, classification: NodeClassification) -> Self {
        self.classification = Some(classification);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn node_serializes_camel_case_and_skips_absent_fields() {
        let node = CausalNode::new("yield", "Crop Yield", "Harvest weight per plot");
        let json = serde_json::to_value(&node).unwrap();
        assert_eq!(json["displayName"], "Crop Yield");
        assert!(json.get("position").is_none());
        assert!(json.get("classification").is_none());
    }

    #[test]
    fn node_round_trips_with_position_and_classification() {
        let node = CausalNode::new("rainfall", "Rainfall", "Weekly rainfall in mm")
            .at(120.0, -40.0)
            .classified(NodeClassification::Confounder);
        let json = serde_json::to_string(&node).unwrap();
        let back: CausalNode = serde_json::from_str(&json).unwrap();
        assert_eq!(back, node);
    }
}
