//! Whole-graph topology checks: acyclicity, roots and leaves, topological
//! ordering, and a structural diff used as a sanity check after
//! import/export or transform operations.

use std::collections::BTreeSet;

use petgraph::algo;
use petgraph::Direction;

use causelab_core::errors::GraphError;
use causelab_core::models::CausalNode;

use crate::store::CausalGraph;

/// Whether the edge relation is cycle-free.
pub fn is_acyclic(graph: &CausalGraph) -> bool {
    !algo::is_cyclic_directed(graph.petgraph())
}

/// Exogenous variables: nodes with no causal inputs.
pub fn roots(graph: &CausalGraph) -> Vec<CausalNode> {
    boundary_nodes(graph, Direction::Incoming)
}

/// Terminal outcomes: nodes nothing depends on.
pub fn leaves(graph: &CausalGraph) -> Vec<CausalNode> {
    boundary_nodes(graph, Direction::Outgoing)
}

fn boundary_nodes(graph: &CausalGraph, direction: Direction) -> Vec<CausalNode> {
    let mut out: Vec<CausalNode> = graph
        .petgraph()
        .node_indices()
        .filter(|&idx| {
            graph
                .petgraph()
                .neighbors_directed(idx, direction)
                .next()
                .is_none()
        })
        .map(|idx| graph.petgraph()[idx].clone())
        .collect();
    out.sort_by(|a, b| a.id.cmp(&b.id));
    out
}

/// Node ids in topological order (causes before effects).
///
/// The acyclicity invariant makes failure a programmer-error backstop, not
/// an expected path.
pub fn topological_order(graph: &CausalGraph) -> Result<Vec<String>, GraphError> {
    let order = algo::toposort(graph.petgraph(), None).map_err(|_| GraphError::CycleDetected)?;
    Ok(order
        .into_iter()
        .map(|idx| graph.petgraph()[idx].id.clone())
        .collect())
}

/// Structural diff between two graphs' node and edge sets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopologyReport {
    pub missing_nodes_in_a: BTreeSet<String>,
    pub missing_nodes_in_b: BTreeSet<String>,
    pub missing_edges_in_a: BTreeSet<(String, String)>,
    pub missing_edges_in_b: BTreeSet<(String, String)>,
}

impl TopologyReport {
    pub fn is_match(&self) -> bool {
        self.missing_nodes_in_a.is_empty()
            && self.missing_nodes_in_b.is_empty()
            && self.missing_edges_in_a.is_empty()
            && self.missing_edges_in_b.is_empty()
    }
}

impl std::fmt::Display for TopologyReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_match() {
            return write!(f, "topology matches");
        }
        writeln!(f, "topology mismatch:")?;
        if !self.missing_nodes_in_a.is_empty() {
            writeln!(f, "  nodes missing in a: {:?}", self.missing_nodes_in_a)?;
        }
        if !self.missing_nodes_in_b.is_empty() {
            writeln!(f, "  nodes missing in b: {:?}", self.missing_nodes_in_b)?;
        }
        if !self.missing_edges_in_a.is_empty() {
            writeln!(f, "  edges missing in a: {:?}", self.missing_edges_in_a)?;
        }
        if !self.missing_edges_in_b.is_empty() {
            writeln!(f, "  edges missing in b: {:?}", self.missing_edges_in_b)?;
        }
        Ok(())
    }
}

/// Compare two graphs by node-id set and (source, target) edge set.
pub fn topology_report(a: &CausalGraph, b: &CausalGraph) -> TopologyReport {
    let nodes_a: BTreeSet<String> = a.node_ids().into_iter().collect();
    let nodes_b: BTreeSet<String> = b.node_ids().into_iter().collect();
    let edges_a: BTreeSet<(String, String)> = a
        .edges()
        .into_iter()
        .map(|e| (e.source, e.target))
        .collect();
    let edges_b: BTreeSet<(String, String)> = b
        .edges()
        .into_iter()
        .map(|e| (e.source, e.target))
        .collect();

    TopologyReport {
        missing_nodes_in_a: nodes_b.difference(&nodes_a).cloned().collect(),
        missing_nodes_in_b: nodes_a.difference(&nodes_b).cloned().collect(),
        missing_edges_in_a: edges_b.difference(&edges_a).cloned().collect(),
        missing_edges_in_b: edges_a.difference(&edges_b).cloned().collect(),
    }
}
