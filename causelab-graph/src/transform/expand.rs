//! Node expansion: decompose a single node into a proposed causal subgraph
//! while preserving external connectivity through role-tagged redirection.

use std::collections::HashSet;

use tracing::debug;

use causelab_core::config::defaults::{DEFAULT_EXPANSION_COLUMN_GAP, DEFAULT_EXPANSION_ROW_GAP};
use causelab_core::errors::GraphError;
use causelab_core::models::{
    CausalEdge, CausalNode, ExpansionProposal, ExpansionRole, Position,
};

use crate::store::CausalGraph;
use crate::topology;

use super::filter_redirected_edges;

/// Result of an expansion: the new graph and the subgraph's nodes.
#[derive(Debug, Clone)]
pub struct ExpandOutcome {
    pub graph: CausalGraph,
    pub nodes: Vec<CausalNode>,
}

/// Replace `node_id` with the proposal's subgraph.
///
/// Boundary redirection is driven by the role tags: every edge that
/// terminated at the expanded node fans out to every `Parent`-role node
/// (falling back to the first proposed node so no incoming edge dangles),
/// and every edge that originated there fans out from every `Child`-role
/// node (falling back to the last proposed node). A node with no incoming
/// or no outgoing edges simply produces no redirected edges on that side.
pub fn expand(
    graph: &CausalGraph,
    node_id: &str,
    proposal: &ExpansionProposal,
) -> Result<ExpandOutcome, GraphError> {
    let Some(original) = graph.node(node_id) else {
        return Err(GraphError::NodeNotFound(node_id.to_string()));
    };
    if proposal.nodes.is_empty() {
        return Err(GraphError::EmptyExpansion);
    }
    let mut proposed_ids = HashSet::new();
    for sub in &proposal.nodes {
        if !proposed_ids.insert(sub.variable_name.as_str()) {
            return Err(GraphError::NodeIdCollision(sub.variable_name.clone()));
        }
        if sub.variable_name != node_id && graph.contains_node(&sub.variable_name) {
            return Err(GraphError::NodeIdCollision(sub.variable_name.clone()));
        }
    }
    for link in &proposal.edges {
        for end in [&link.source, &link.target] {
            if !proposed_ids.contains(end.as_str()) {
                return Err(GraphError::NodeNotFound(end.clone()));
            }
        }
    }

    let new_nodes = place_subnodes(original, proposal);

    let parents: Vec<&str> = proposal
        .nodes
        .iter()
        .filter(|s| s.role == ExpansionRole::Parent)
        .map(|s| s.variable_name.as_str())
        .collect();
    let children: Vec<&str> = proposal
        .nodes
        .iter()
        .filter(|s| s.role == ExpansionRole::Child)
        .map(|s| s.variable_name.as_str())
        .collect();
    // Fallbacks guarantee no boundary edge dangles even when the proposal
    // tagged nothing as parent or child.
    let first = proposal.nodes.first().map(|s| s.variable_name.as_str());
    let last = proposal.nodes.last().map(|s| s.variable_name.as_str());
    let incoming_targets: Vec<&str> = if parents.is_empty() {
        first.into_iter().collect()
    } else {
        parents
    };
    let outgoing_sources: Vec<&str> = if children.is_empty() {
        last.into_iter().collect()
    } else {
        children
    };

    // Redirect boundary edges in original edge order, then append the
    // proposal's internal links.
    let mut edges: Vec<CausalEdge> = Vec::new();
    for e in graph.edges() {
        if e.target == node_id && e.source != node_id {
            for target in &incoming_targets {
                edges.push(CausalEdge::new(e.source.clone(), *target));
            }
        } else if e.source == node_id && e.target != node_id {
            for source in &outgoing_sources {
                edges.push(CausalEdge::new(*source, e.target.clone()));
            }
        } else if e.source != node_id {
            edges.push(e);
        }
    }
    for link in &proposal.edges {
        edges.push(CausalEdge::new(link.source.clone(), link.target.clone()));
    }
    let kept = filter_redirected_edges(edges);

    let mut next = CausalGraph::new(graph.experimental_context().to_string());
    for n in graph.nodes() {
        if n.id != node_id {
            next.insert_node(n.clone());
        }
    }
    for n in &new_nodes {
        next.insert_node(n.clone());
    }
    for e in kept {
        next.insert_edge(e);
    }

    if !topology::is_acyclic(&next) {
        return Err(GraphError::CycleDetected);
    }

    debug!(
        expanded = %node_id,
        subnodes = new_nodes.len(),
        edges = next.edge_count(),
        "expanded node"
    );
    Ok(ExpandOutcome {
        graph: next,
        nodes: new_nodes,
    })
}

/// Lay out parent-role nodes above the original position, child-role nodes
/// below, and internal nodes on the original row. Presentation only.
fn place_subnodes(original: &CausalNode, proposal: &ExpansionProposal) -> Vec<CausalNode> {
    let origin = original.position.unwrap_or_default();
    let row = |role: ExpansionRole| -> f64 {
        match role {
            ExpansionRole::Parent => origin.y - DEFAULT_EXPANSION_ROW_GAP,
            ExpansionRole::Internal => origin.y,
            ExpansionRole::Child => origin.y + DEFAULT_EXPANSION_ROW_GAP,
        }
    };
    let counts = |role: ExpansionRole| -> usize {
        proposal.nodes.iter().filter(|s| s.role == role).count()
    };

    let mut placed_per_role = [0usize; 3];
    proposal
        .nodes
        .iter()
        .map(|sub| {
            let slot = match sub.role {
                ExpansionRole::Parent => 0,
                ExpansionRole::Internal => 1,
                ExpansionRole::Child => 2,
            };
            let index = placed_per_role[slot];
            placed_per_role[slot] += 1;
            let width = counts(sub.role).saturating_sub(1) as f64;
            let x = origin.x + (index as f64 - width / 2.0) * DEFAULT_EXPANSION_COLUMN_GAP;
            CausalNode {
                id: sub.variable_name.clone(),
                display_name: sub.display_name.clone(),
                description: sub.description.clone(),
                position: Some(Position::new(x, row(sub.role))),
                classification: None,
            }
        })
        .collect()
}
