//! Graph context assembly for the reasoning collaborator.

use causelab_core::errors::{CauselabResult, GraphError};
use causelab_core::models::{CausalNode, GraphContext};
use causelab_graph::traversal::{downstream_with_degrees, upstream_with_degrees};
use causelab_graph::CausalGraph;

/// Summarize a pivot node's neighborhood for the collaborator: immediate
/// parents and children (degree 1), higher ancestors and descendants
/// (degree > 1), and the remaining variables with no directed path either
/// way.
pub fn build_graph_context(graph: &CausalGraph, pivot: &str) -> CauselabResult<GraphContext> {
    let pivot_node = graph
        .node(pivot)
        .ok_or_else(|| GraphError::NodeNotFound(pivot.to_string()))?
        .clone();

    let upstream = upstream_with_degrees(graph, pivot);
    let downstream = downstream_with_degrees(graph, pivot);

    let immediate_upstream: Vec<CausalNode> = upstream
        .iter()
        .filter(|e| e.degree == 1)
        .map(|e| e.node.clone())
        .collect();
    let higher_ancestors: Vec<CausalNode> = upstream
        .iter()
        .filter(|e| e.degree > 1)
        .map(|e| e.node.clone())
        .collect();
    let immediate_downstream: Vec<CausalNode> = downstream
        .iter()
        .filter(|e| e.degree == 1)
        .map(|e| e.node.clone())
        .collect();
    let higher_descendants: Vec<CausalNode> = downstream
        .iter()
        .filter(|e| e.degree > 1)
        .map(|e| e.node.clone())
        .collect();

    // Everything not reachable in either direction.
    let related: std::collections::HashSet<&str> = upstream
        .iter()
        .chain(downstream.iter())
        .map(|e| e.node.id.as_str())
        .collect();
    let unconnected: Vec<CausalNode> = graph
        .nodes()
        .into_iter()
        .filter(|n| n.id != pivot && !related.contains(n.id.as_str()))
        .cloned()
        .collect();

    Ok(GraphContext {
        pivot: pivot_node,
        experimental_context: graph.experimental_context().to_string(),
        immediate_upstream,
        immediate_downstream,
        higher_ancestors,
        higher_descendants,
        unconnected,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn graph(nodes: &[&str], edges: &[(&str, &str)]) -> CausalGraph {
        let mut g = CausalGraph::new("trial context");
        for n in nodes {
            g = g.with_node(CausalNode::new(*n, n.to_uppercase(), ""));
        }
        for (s, t) in edges {
            g = g.with_edge_safe(s, t).unwrap();
        }
        g
    }

    #[test]
    fn buckets_split_by_minimum_degree() {
        // g -> p -> x -> c -> d, with "lone" unconnected.
        let g = graph(
            &["g", "p", "x", "c", "d", "lone"],
            &[("g", "p"), ("p", "x"), ("x", "c"), ("c", "d")],
        );
        let ctx = build_graph_context(&g, "x").unwrap();
        let ids = |nodes: &[CausalNode]| -> Vec<String> {
            nodes.iter().map(|n| n.id.clone()).collect()
        };
        assert_eq!(ids(&ctx.immediate_upstream), vec!["p"]);
        assert_eq!(ids(&ctx.higher_ancestors), vec!["g"]);
        assert_eq!(ids(&ctx.immediate_downstream), vec!["c"]);
        assert_eq!(ids(&ctx.higher_descendants), vec!["d"]);
        assert_eq!(ids(&ctx.unconnected), vec!["lone"]);
        assert_eq!(ctx.experimental_context, "trial context");
    }

    #[test]
    fn multi_path_nodes_land_in_one_bucket_only() {
        // a is both parent and grandparent of d; minimum degree wins.
        let g = graph(&["a", "b", "d"], &[("a", "b"), ("b", "d"), ("a", "d")]);
        let ctx = build_graph_context(&g, "d").unwrap();
        let immediate: Vec<String> =
            ctx.immediate_upstream.iter().map(|n| n.id.clone()).collect();
        assert!(immediate.contains(&"a".to_string()));
        assert!(ctx.higher_ancestors.iter().all(|n| n.id != "a"));
    }

    #[test]
    fn unknown_pivot_is_an_error() {
        let g = graph(&["a"], &[]);
        assert!(build_graph_context(&g, "ghost").is_err());
    }
}
