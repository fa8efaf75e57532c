//! Structural transforms: condensation (N nodes → 1) and expansion
//! (1 node → subgraph). Both redirect boundary edges, then apply the same
//! post-filter in strict order (drop self-loops, then dedupe by
//! (source, target) keeping the first occurrence) and reject any result
//! that would carry a cycle, leaving the input graph untouched.

pub mod condense;
pub mod expand;

use causelab_core::models::CausalEdge;

pub use condense::{condense, CondenseOutcome};
pub use expand::{expand, ExpandOutcome};

/// Shared post-filter: self-loops out first, then pair-dedup keeping the
/// first occurrence. Later duplicates are dropped silently.
pub(crate) fn filter_redirected_edges(edges: Vec<CausalEdge>) -> Vec<CausalEdge> {
    let mut seen = std::collections::HashSet::new();
    edges
        .into_iter()
        .filter(|e| e.source != e.target)
        .filter(|e| seen.insert((e.source.clone(), e.target.clone())))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_drops_self_loops_then_dedupes() {
        let edges = vec![
            CausalEdge {
                id: "e1".into(),
                source: "m".into(),
                target: "m".into(),
            },
            CausalEdge {
                id: "e2".into(),
                source: "m".into(),
                target: "c".into(),
            },
            CausalEdge {
                id: "e3".into(),
                source: "m".into(),
                target: "c".into(),
            },
        ];
        let kept = filter_redirected_edges(edges);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].id, "e2");
    }
}
