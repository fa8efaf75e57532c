//! Pairwise relationship classification between two nodes.

use std::collections::HashSet;

use petgraph::Direction;
use serde::{Deserialize, Serialize};

use crate::store::CausalGraph;

/// The most specific relationship of node `a` relative to node `b`.
///
/// "Ancestor"/"Descendant" here exclude the immediate cases: a direct cause
/// is reported as `Parent`, not `Ancestor`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeRelationship {
    Identical,
    Parent,
    Child,
    Ancestor,
    Descendant,
    Unconnected,
}

/// Classify `a` from its own perspective relative to `b`.
pub fn relationship(graph: &CausalGraph, a: &str, b: &str) -> NodeRelationship {
    if a == b {
        return NodeRelationship::Identical;
    }
    if graph.contains_edge(a, b) {
        return NodeRelationship::Parent;
    }
    if graph.contains_edge(b, a) {
        return NodeRelationship::Child;
    }
    if reaches(graph, a, b) {
        return NodeRelationship::Ancestor;
    }
    if reaches(graph, b, a) {
        return NodeRelationship::Descendant;
    }
    NodeRelationship::Unconnected
}

/// Whether a directed path `from -> ... -> to` exists.
fn reaches(graph: &CausalGraph, from: &str, to: &str) -> bool {
    let (Some(start), Some(goal)) = (graph.idx(from), graph.idx(to)) else {
        return false;
    };
    let mut visited = HashSet::new();
    let mut stack = vec![start];
    while let Some(current) = stack.pop() {
        if current == goal {
            return true;
        }
        if !visited.insert(current) {
            continue;
        }
        for next in graph.petgraph().neighbors_directed(current, Direction::Outgoing) {
            if !visited.contains(&next) {
                stack.push(next);
            }
        }
    }
    false
}
