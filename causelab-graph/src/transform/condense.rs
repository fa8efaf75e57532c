//! Node condensation: merge a selection of nodes into one replacement node
//! while preserving all external connectivity.

use std::collections::HashSet;

use tracing::debug;

use causelab_core::errors::GraphError;
use causelab_core::models::{CausalEdge, CausalNode, CondensationProposal, Position};

use crate::store::CausalGraph;
use crate::topology;

use super::filter_redirected_edges;

/// Result of a condensation: the new graph and the replacement node.
#[derive(Debug, Clone)]
pub struct CondenseOutcome {
    pub graph: CausalGraph,
    pub node: CausalNode,
}

/// Merge `selected` into a single node whose identity comes from the
/// collaborator's proposal.
///
/// Every edge with a selected endpoint is rewritten to the replacement id;
/// the rewritten set is then self-loop-filtered and pair-deduplicated, so
/// an external node with edges into several selected nodes ends up with
/// exactly one edge into the replacement. The replacement's position is the
/// arithmetic mean of the selected positions (a missing position counts as
/// the origin).
pub fn condense(
    graph: &CausalGraph,
    selected: &[String],
    identity: &CondensationProposal,
) -> Result<CondenseOutcome, GraphError> {
    let selection: HashSet<&str> = selected.iter().map(String::as_str).collect();
    if selection.len() < 2 {
        return Err(GraphError::SelectionTooSmall {
            required: 2,
            actual: selection.len(),
        });
    }
    for id in &selection {
        if !graph.contains_node(id) {
            return Err(GraphError::NodeNotFound((*id).to_string()));
        }
    }
    let new_id = identity.variable_name.as_str();
    if graph.contains_node(new_id) && !selection.contains(new_id) {
        return Err(GraphError::NodeIdCollision(new_id.to_string()));
    }

    let node = CausalNode {
        id: new_id.to_string(),
        display_name: identity.display_name.clone(),
        description: identity.description.clone(),
        position: Some(mean_position(graph, &selection)),
        classification: None,
    };

    // Rewrite selected endpoints to the replacement id, in edge order.
    let redirected: Vec<CausalEdge> = graph
        .edges()
        .into_iter()
        .map(|mut e| {
            if selection.contains(e.source.as_str()) {
                e.source = new_id.to_string();
            }
            if selection.contains(e.target.as_str()) {
                e.target = new_id.to_string();
            }
            e
        })
        .collect();
    let kept = filter_redirected_edges(redirected);

    let mut next = CausalGraph::new(graph.experimental_context().to_string());
    for n in graph.nodes() {
        if !selection.contains(n.id.as_str()) {
            next.insert_node(n.clone());
        }
    }
    next.insert_node(node.clone());
    for e in kept {
        next.insert_edge(e);
    }

    // A path that leaves the selection and re-enters it becomes a cycle
    // through the replacement node.
    if !topology::is_acyclic(&next) {
        return Err(GraphError::CycleDetected);
    }

    debug!(
        replaced = selection.len(),
        replacement = %node.id,
        edges = next.edge_count(),
        "condensed selection"
    );
    Ok(CondenseOutcome { graph: next, node })
}

fn mean_position(graph: &CausalGraph, selection: &HashSet<&str>) -> Position {
    let mut sum = Position::default();
    for id in selection {
        let p = graph
            .node(id)
            .and_then(|n| n.position)
            .unwrap_or_default();
        sum.x += p.x;
        sum.y += p.y;
    }
    let count = selection.len() as f64;
    Position::new(sum.x / count, sum.y / count)
}
