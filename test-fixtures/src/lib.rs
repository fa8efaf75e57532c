//! Shared graph builders for tests and benches.

use causelab_core::models::CausalNode;
use causelab_graph::CausalGraph;

/// Build a graph from node ids and (source, target) pairs. Edges go through
/// the validating insert, so fixtures are guaranteed acyclic.
pub fn graph_from(nodes: &[&str], edges: &[(&str, &str)]) -> CausalGraph {
    let mut g = CausalGraph::new("fixture experiment");
    for n in nodes {
        g = g.with_node(CausalNode::new(*n, n.to_uppercase(), format!("variable {n}")));
    }
    for (s, t) in edges {
        g = g
            .with_edge_safe(s, t)
            .unwrap_or_else(|e| panic!("fixture edge {s}->{t}: {e}"));
    }
    g
}

/// The three-node chain used throughout the concrete scenarios:
/// `a -> b -> c`.
pub fn chain() -> CausalGraph {
    graph_from(&["a", "b", "c"], &[("a", "b"), ("b", "c")])
}

/// Diamond with a shared ancestor: `a -> b -> d`, `a -> c -> d`.
pub fn diamond() -> CausalGraph {
    graph_from(
        &["a", "b", "c", "d"],
        &[("a", "b"), ("a", "c"), ("b", "d"), ("c", "d")],
    )
}

/// A layered DAG with `layers` rows of `width` nodes and full bipartite
/// edges between adjacent rows. Ids are `n{layer}_{slot}`.
pub fn layered(layers: usize, width: usize) -> CausalGraph {
    let mut g = CausalGraph::new("layered fixture");
    for layer in 0..layers {
        for slot in 0..width {
            let id = format!("n{layer}_{slot}");
            g = g.with_node(CausalNode::new(&id, &id, ""));
        }
    }
    for layer in 1..layers {
        for from in 0..width {
            for to in 0..width {
                let s = format!("n{}_{from}", layer - 1);
                let t = format!("n{layer}_{to}");
                g = g.with_edge_safe(&s, &t).expect("layered edges are acyclic");
            }
        }
    }
    g
}
