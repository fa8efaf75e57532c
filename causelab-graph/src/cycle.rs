//! Cycle guard: decides whether a prospective edge preserves acyclicity.

use std::collections::HashSet;

use petgraph::Direction;

use crate::store::CausalGraph;

/// True iff inserting `source -> target` would create a cycle.
///
/// A self-loop is unconditionally a cycle. Otherwise the edge closes a
/// cycle exactly when `target` can already reach `source` through the
/// existing edge set. The search is an iterative depth-first walk with an
/// explicit stack and visited set, so shared ancestors are visited once and
/// the cost is O(V + E) regardless of graph shape.
///
/// Side-effect-free and cheap enough to call once per displayed candidate
/// when the UI pre-filters add-edge affordances.
pub fn would_create_cycle(graph: &CausalGraph, source: &str, target: &str) -> bool {
    if source == target {
        return true;
    }
    let (Some(goal), Some(start)) = (graph.idx(source), graph.idx(target)) else {
        // An absent endpoint cannot be on any existing path.
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
