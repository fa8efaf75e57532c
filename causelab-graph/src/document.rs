//! JSON persistence codec.
//!
//! The wire shape is `{ nodes, edges, experimentalContext }`. Load → operate
//! → save round-trips losslessly modulo array ordering of untouched
//! entries.

use serde::{Deserialize, Serialize};
use tracing::warn;

use causelab_core::errors::CauselabResult;
use causelab_core::models::{CausalEdge, CausalNode};

use crate::store::CausalGraph;

/// The serialized form of a [`CausalGraph`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphDocument {
    pub nodes: Vec<CausalNode>,
    pub edges: Vec<CausalEdge>,
    #[serde(default)]
    pub experimental_context: String,
}

impl CausalGraph {
    /// Snapshot the graph as a serializable document.
    pub fn to_document(&self) -> GraphDocument {
        GraphDocument {
            nodes: self.nodes().into_iter().cloned().collect(),
            edges: self.edges(),
            experimental_context: self.experimental_context().to_string(),
        }
    }

    /// Rebuild a graph from a document.
    ///
    /// Defensive backstops, not errors: an edge naming an absent node is
    /// pruned, and a later edge duplicating a (source, target) pair is
    /// dropped in favor of the first.
    pub fn from_document(document: &GraphDocument) -> Self {
        let mut graph = CausalGraph::new(document.experimental_context.clone());
        for node in &document.nodes {
            graph.insert_node(node.clone());
        }
        for edge in &document.edges {
            if graph.contains_edge(&edge.source, &edge.target) {
                warn!(
                    source = %edge.source,
                    target = %edge.target,
                    "dropping duplicate edge pair from document"
                );
                continue;
            }
            graph.insert_edge(edge.clone());
        }
        graph
    }

    /// Serialize to the persistence JSON.
    pub fn to_json(&self) -> CauselabResult<String> {
        Ok(serde_json::to_string_pretty(&self.to_document())?)
    }

    /// Deserialize from the persistence JSON.
    pub fn from_json(json: &str) -> CauselabResult<Self> {
        let document: GraphDocument = serde_json::from_str(json)?;
        Ok(Self::from_document(&document))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use causelab_core::models::NodeClassification;

    #[test]
    fn round_trip_preserves_semantic_content() {
        let g = CausalGraph::new("fertilizer trial")
            .with_node(
                CausalNode::new("fertilizer", "Fertilizer", "kg/ha applied")
                    .at(0.0, 0.0)
                    .classified(NodeClassification::Treatment),
            )
            .with_node(CausalNode::new("yield", "Yield", "harvest weight"))
            .with_edge_safe("fertilizer", "yield")
            .unwrap();

        let json = g.to_json().unwrap();
        let back = CausalGraph::from_json(&json).unwrap();

        assert_eq!(back.experimental_context(), "fertilizer trial");
        assert!(crate::topology::topology_report(&g, &back).is_match());
        assert_eq!(back.node("fertilizer").unwrap(), g.node("fertilizer").unwrap());
    }

    #[test]
    fn document_uses_camel_case_keys() {
        let g = CausalGraph::new("ctx").with_node(CausalNode::new("a", "A", ""));
        let value: serde_json::Value = serde_json::from_str(&g.to_json().unwrap()).unwrap();
        assert_eq!(value["experimentalContext"], "ctx");
        assert!(value["nodes"].is_array());
        assert!(value["edges"].is_array());
    }

    #[test]
    fn dangling_and_duplicate_edges_are_pruned_on_load() {
        let document: GraphDocument = serde_json::from_str(
            r#"{
                "nodes": [
                    {"id": "a", "displayName": "A", "description": ""},
                    {"id": "b", "displayName": "B", "description": ""}
                ],
                "edges": [
                    {"id": "e1", "source": "a", "target": "b"},
                    {"id": "e2", "source": "a", "target": "b"},
                    {"id": "e3", "source": "a", "target": "ghost"}
                ],
                "experimentalContext": ""
            }"#,
        )
        .unwrap();
        let g = CausalGraph::from_document(&document);
        assert_eq!(g.edge_count(), 1);
        assert_eq!(g.edges()[0].id, "e1");
    }

    #[test]
    fn missing_context_defaults_to_empty() {
        let g = CausalGraph::from_json(r#"{"nodes": [], "edges": []}"#).unwrap();
        assert_eq!(g.experimental_context(), "");
        assert!(g.is_empty());
    }
}
