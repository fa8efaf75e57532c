//! Property tests for the acyclicity, degree, and transform invariants.

use std::collections::HashSet;

use proptest::prelude::*;

use causelab_core::errors::GraphError;
use causelab_core::models::{
    CausalNode, CondensationProposal, ExpansionProposal, ExpansionRole, ProposedLink,
    ProposedSubnode,
};
use causelab_graph::{condense, expand, topology, would_create_cycle, CausalGraph};

const NODE_COUNT: usize = 6;

fn name(i: usize) -> String {
    format!("n{i}")
}

/// Candidate edge list over `NODE_COUNT` nodes. Only forward pairs
/// (lower index -> higher index) are kept at build time, so every generated
/// graph is a DAG by construction.
fn arb_edges() -> impl Strategy<Value = Vec<(usize, usize)>> {
    prop::collection::vec((0..NODE_COUNT, 0..NODE_COUNT), 0..18)
}

fn build(edges: &[(usize, usize)]) -> CausalGraph {
    let mut g = CausalGraph::new("property fixture");
    for i in 0..NODE_COUNT {
        g = g.with_node(CausalNode::new(name(i), name(i).to_uppercase(), ""));
    }
    let mut seen = HashSet::new();
    for &(a, b) in edges {
        if a < b && seen.insert((a, b)) {
            g = g.with_edge_safe(&name(a), &name(b)).expect("forward edge");
        }
    }
    g
}

fn assert_clean_edge_set(g: &CausalGraph) -> Result<(), TestCaseError> {
    let mut pairs = HashSet::new();
    for e in g.edges() {
        prop_assert_ne!(&e.source, &e.target, "self-loop {} -> {}", e.source, e.target);
        prop_assert!(
            pairs.insert((e.source.clone(), e.target.clone())),
            "duplicate pair {} -> {}",
            e.source,
            e.target
        );
    }
    prop_assert!(topology::is_acyclic(g));
    Ok(())
}

proptest! {
    #[test]
    fn a_self_edge_is_always_a_cycle(edges in arb_edges(), pivot in 0..NODE_COUNT) {
        let g = build(&edges);
        prop_assert!(would_create_cycle(&g, &name(pivot), &name(pivot)));
    }

    #[test]
    fn safe_insert_agrees_with_the_guard(
        edges in arb_edges(),
        a in 0..NODE_COUNT,
        b in 0..NODE_COUNT,
    ) {
        let g = build(&edges);
        let (a, b) = (name(a), name(b));
        let duplicate = g.contains_edge(&a, &b);
        let cyclic = would_create_cycle(&g, &a, &b);
        match g.with_edge_safe(&a, &b) {
            Ok(next) => {
                prop_assert!(!duplicate);
                prop_assert!(!cyclic);
                prop_assert_eq!(next.edge_count(), g.edge_count() + 1);
                prop_assert!(next.contains_edge(&a, &b));
                assert_clean_edge_set(&next)?;
            }
            Err(GraphError::DuplicateEdge { .. }) => prop_assert!(duplicate),
            Err(GraphError::WouldCreateCycle { .. }) => prop_assert!(cyclic),
            Err(other) => prop_assert!(false, "unexpected error: {other}"),
        }
        // Failure or success, the original value is unchanged.
        prop_assert_eq!(g.edge_count(), build(&edges).edge_count());
    }

    #[test]
    fn degree_one_means_immediate_neighbor(edges in arb_edges(), pivot in 0..NODE_COUNT) {
        let g = build(&edges);
        let pivot = name(pivot);
        let immediate: HashSet<String> = g
            .immediate_upstream(&pivot)
            .into_iter()
            .map(|n| n.id)
            .collect();
        for entry in causelab_graph::traversal::upstream_with_degrees(&g, &pivot) {
            prop_assert_eq!(
                entry.degree == 1,
                immediate.contains(&entry.node.id),
                "node {} degree {}",
                entry.node.id,
                entry.degree
            );
        }
    }

    #[test]
    fn condense_output_is_always_clean(
        edges in arb_edges(),
        selection in prop::collection::hash_set(0..NODE_COUNT, 2..NODE_COUNT),
    ) {
        let g = build(&edges);
        let selected: Vec<String> = selection.iter().map(|&i| name(i)).collect();
        let identity = CondensationProposal {
            variable_name: "merged".into(),
            display_name: "Merged".into(),
            description: String::new(),
            rationale: String::new(),
        };
        if let Ok(outcome) = condense(&g, &selected, &identity) {
            assert_clean_edge_set(&outcome.graph)?;
            prop_assert_eq!(
                outcome.graph.node_count(),
                g.node_count() - selected.len() + 1
            );
            for id in &selected {
                prop_assert!(!outcome.graph.contains_node(id));
            }
        }
    }

    #[test]
    fn expand_output_is_always_clean(
        edges in arb_edges(),
        pivot in 0..NODE_COUNT,
        roles in prop::collection::vec(0..3usize, 1..4),
        links in prop::collection::vec((0..4usize, 0..4usize), 0..4),
    ) {
        let g = build(&edges);
        let nodes: Vec<ProposedSubnode> = roles
            .iter()
            .enumerate()
            .map(|(i, &r)| ProposedSubnode {
                variable_name: format!("sub{i}"),
                display_name: format!("Sub {i}"),
                description: String::new(),
                role: match r {
                    0 => ExpansionRole::Parent,
                    1 => ExpansionRole::Internal,
                    _ => ExpansionRole::Child,
                },
            })
            .collect();
        // Forward links only, so the proposed subgraph is itself acyclic.
        let edges_in: Vec<ProposedLink> = links
            .into_iter()
            .filter(|&(a, b)| a < b && b < nodes.len())
            .map(|(a, b)| ProposedLink {
                source: format!("sub{a}"),
                target: format!("sub{b}"),
            })
            .collect();
        let proposal = ExpansionProposal { nodes, edges: edges_in };
        if let Ok(outcome) = expand(&g, &name(pivot), &proposal) {
            assert_clean_edge_set(&outcome.graph)?;
            prop_assert!(!outcome.graph.contains_node(&name(pivot)));
        }
    }
}
