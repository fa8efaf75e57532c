//! Breadth-first degree computation.
//!
//! "Degree" is the shortest-path distance (in edge count) from a reference
//! node along upstream-only or downstream-only traversal. A node reachable
//! by multiple paths keeps its minimum distance: a variable that is both a
//! grandparent via one path and a parent via another is classified as a
//! parent.

use std::collections::{HashMap, VecDeque};

use petgraph::stable_graph::NodeIndex;
use petgraph::Direction;

use causelab_core::models::CausalNode;

use crate::store::CausalGraph;

/// A reachable node paired with its minimum distance from the pivot.
#[derive(Debug, Clone, PartialEq)]
pub struct NodeWithDegree {
    pub node: CausalNode,
    pub degree: usize,
}

/// All ancestors of `id` with their degrees, ascending (ties broken by node
/// id). Degree 1 entries are exactly the immediate parents.
pub fn upstream_with_degrees(graph: &CausalGraph, id: &str) -> Vec<NodeWithDegree> {
    bfs_with_degrees(graph, id, Direction::Incoming)
}

/// All descendants of `id` with their degrees, ascending.
pub fn downstream_with_degrees(graph: &CausalGraph, id: &str) -> Vec<NodeWithDegree> {
    bfs_with_degrees(graph, id, Direction::Outgoing)
}

fn bfs_with_degrees(
    graph: &CausalGraph,
    id: &str,
    direction: Direction,
) -> Vec<NodeWithDegree> {
    let Some(start) = graph.idx(id) else {
        return Vec::new();
    };

    let mut found: HashMap<NodeIndex, usize> = HashMap::new();
    let mut queue: VecDeque<(NodeIndex, usize)> = VecDeque::new();
    queue.push_back((start, 0));

    while let Some((current, degree)) = queue.pop_front() {
        for next in graph.petgraph().neighbors_directed(current, direction) {
            if next != start && !found.contains_key(&next) {
                found.insert(next, degree + 1);
                queue.push_back((next, degree + 1));
            }
        }
    }

    let mut out: Vec<NodeWithDegree> = found
        .into_iter()
        .map(|(idx, degree)| NodeWithDegree {
            node: graph.petgraph()[idx].clone(),
            degree,
        })
        .collect();
    out.sort_by(|a, b| a.degree.cmp(&b.degree).then_with(|| a.node.id.cmp(&b.node.id)));
    out
}
