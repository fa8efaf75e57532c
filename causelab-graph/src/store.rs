//! `petgraph::StableGraph` wrapper with an id index and copy-on-write
//! mutation surface.

use std::collections::HashMap;

use petgraph::stable_graph::{NodeIndex, StableGraph};
use petgraph::Direction;
use tracing::warn;

use causelab_core::errors::GraphError;
use causelab_core::models::{CausalEdge, CausalNode};

use crate::cycle;

/// Weight stored on each edge. Direction is structural; only the stable
/// edge id rides along.
#[derive(Debug, Clone)]
pub(crate) struct EdgeInfo {
    pub id: String,
}

/// The causal experiment graph.
///
/// Nodes are unique by id; edges are unique by (source, target) pair. The
/// edge relation is acyclic after every operation: `with_edge_safe` and the
/// structural transforms enforce this, and queries may assume it.
///
/// The graph is a value: `Clone` is the mutation primitive, and every
/// `with_*` / `without_*` method returns a new graph, leaving `self` intact.
#[derive(Debug, Clone, Default)]
pub struct CausalGraph {
    graph: StableGraph<CausalNode, EdgeInfo>,
    index: HashMap<String, NodeIndex>,
    experimental_context: String,
}

impl CausalGraph {
    /// An empty graph with the given experimental context.
    pub fn new(experimental_context: impl Into<String>) -> Self {
        Self {
            graph: StableGraph::new(),
            index: HashMap::new(),
            experimental_context: experimental_context.into(),
        }
    }

    /// Opaque free-text description of the experiment, consumed only by the
    /// reasoning collaborator.
    pub fn experimental_context(&self) -> &str {
        &self.experimental_context
    }

    /// Replace the experimental context.
    pub fn with_experimental_context(&self, context: impl Into<String>) -> Self {
        let mut next = self.clone();
        next.experimental_context = context.into();
        next
    }

    // --- Queries ---

    /// Look up a node by id.
    pub fn node(&self, id: &str) -> Option<&CausalNode> {
        self.index.get(id).map(|&idx| &self.graph[idx])
    }

    /// Whether a node with this id exists.
    pub fn contains_node(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Whether an edge with this (source, target) pair exists.
    pub fn contains_edge(&self, source: &str, target: &str) -> bool {
        match (self.idx(source), self.idx(target)) {
            (Some(s), Some(t)) => self.graph.find_edge(s, t).is_some(),
            _ => false,
        }
    }

    /// All nodes, in insertion order.
    pub fn nodes(&self) -> Vec<&CausalNode> {
        self.graph.node_indices().map(|idx| &self.graph[idx]).collect()
    }

    /// All node ids, in insertion order.
    pub fn node_ids(&self) -> Vec<String> {
        self.nodes().into_iter().map(|n| n.id.clone()).collect()
    }

    /// All edges, in insertion order.
    pub fn edges(&self) -> Vec<CausalEdge> {
        self.graph
            .edge_indices()
            .filter_map(|e| {
                let (s, t) = self.graph.edge_endpoints(e)?;
                Some(CausalEdge {
                    id: self.graph[e].id.clone(),
                    source: self.graph[s].id.clone(),
                    target: self.graph[t].id.clone(),
                })
            })
            .collect()
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }

    /// Nodes with an edge directly into `id`, sorted by id. Empty for an
    /// unknown id; queries never fail.
    pub fn immediate_upstream(&self, id: &str) -> Vec<CausalNode> {
        self.direct_neighbors(id, Direction::Incoming)
    }

    /// Nodes with an edge directly out of `id`, sorted by id.
    pub fn immediate_downstream(&self, id: &str) -> Vec<CausalNode> {
        self.direct_neighbors(id, Direction::Outgoing)
    }

    /// All nodes other than `id` with no edge into `id`: candidates for a
    /// manual upstream link. Transitive reachability is deliberately
    /// ignored here, unlike the degree queries.
    pub fn unconnected_upstream(&self, id: &str) -> Vec<CausalNode> {
        self.nodes()
            .into_iter()
            .filter(|n| n.id != id && !self.contains_edge(&n.id, id))
            .cloned()
            .collect()
    }

    /// All nodes other than `id` with no edge out of `id`.
    pub fn unconnected_downstream(&self, id: &str) -> Vec<CausalNode> {
        self.nodes()
            .into_iter()
            .filter(|n| n.id != id && !self.contains_edge(id, &n.id))
            .cloned()
            .collect()
    }

    // --- Mutations (copy-on-write) ---

    /// Insert a node, replacing any existing node with the same id. Non-
    /// validating: callers that must reject id collisions pre-check with
    /// [`CausalGraph::contains_node`].
    pub fn with_node(&self, node: CausalNode) -> Self {
        let mut next = self.clone();
        next.insert_node(node);
        next
    }

    /// Append an edge with a fresh id. Non-validating: no duplicate or
    /// cycle check, the caller has already validated. An edge naming an
    /// absent node is dropped (referential-integrity backstop).
    pub fn with_edge(&self, source: &str, target: &str) -> Self {
        let mut next = self.clone();
        next.insert_edge(CausalEdge::new(source, target));
        next
    }

    /// Validating edge insertion: rejects a duplicate (source, target) pair
    /// and any edge that would close a cycle. On failure the original graph
    /// is untouched.
    pub fn with_edge_safe(&self, source: &str, target: &str) -> Result<Self, GraphError> {
        if !self.contains_node(source) {
            return Err(GraphError::NodeNotFound(source.to_string()));
        }
        if !self.contains_node(target) {
            return Err(GraphError::NodeNotFound(target.to_string()));
        }
        if self.contains_edge(source, target) {
            return Err(GraphError::DuplicateEdge {
                source: source.to_string(),
                target: target.to_string(),
            });
        }
        if cycle::would_create_cycle(self, source, target) {
            return Err(GraphError::WouldCreateCycle {
                source: source.to_string(),
                target: target.to_string(),
            });
        }
        Ok(self.with_edge(source, target))
    }

    /// Remove every edge matching the (source, target) pair.
    pub fn without_edge(&self, source: &str, target: &str) -> Self {
        let mut next = self.clone();
        if let (Some(s), Some(t)) = (next.idx(source), next.idx(target)) {
            while let Some(e) = next.graph.find_edge(s, t) {
                next.graph.remove_edge(e);
            }
        }
        next
    }

    /// Remove a node and every incident edge. Removing an absent id is a
    /// no-op.
    pub fn without_node(&self, id: &str) -> Self {
        let mut next = self.clone();
        if let Some(idx) = next.index.remove(id) {
            next.graph.remove_node(idx);
        }
        next
    }

    // --- Crate-internal surface ---

    pub(crate) fn idx(&self, id: &str) -> Option<NodeIndex> {
        self.index.get(id).copied()
    }

    pub(crate) fn petgraph(&self) -> &StableGraph<CausalNode, EdgeInfo> {
        &self.graph
    }

    /// In-place upsert used by the copy-on-write wrappers and rebuilds.
    pub(crate) fn insert_node(&mut self, node: CausalNode) {
        match self.index.get(&node.id) {
            Some(&idx) => self.graph[idx] = node,
            None => {
                let id = node.id.clone();
                let idx = self.graph.add_node(node);
                self.index.insert(id, idx);
            }
        }
    }

    /// In-place edge append preserving the edge's id. Drops edges whose
    /// endpoints are not present.
    pub(crate) fn insert_edge(&mut self, edge: CausalEdge) {
        match (self.idx(&edge.source), self.idx(&edge.target)) {
            (Some(s), Some(t)) => {
                self.graph.add_edge(s, t, EdgeInfo { id: edge.id });
            }
            _ => {
                warn!(
                    source = %edge.source,
                    target = %edge.target,
                    "dropping edge with missing endpoint"
                );
            }
        }
    }

    fn direct_neighbors(&self, id: &str, direction: Direction) -> Vec<CausalNode> {
        let Some(idx) = self.idx(id) else {
            return Vec::new();
        };
        let mut out: Vec<CausalNode> = self
            .graph
            .neighbors_directed(idx, direction)
            .map(|n| self.graph[n].clone())
            .collect();
        out.sort_by(|a, b| a.id.cmp(&b.id));
        out.dedup_by(|a, b| a.id == b.id);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn abc_chain() -> CausalGraph {
        // A -> B -> C
        let g = CausalGraph::new("test")
            .with_node(CausalNode::new("a", "A", ""))
            .with_node(CausalNode::new("b", "B", ""))
            .with_node(CausalNode::new("c", "C", ""));
        g.with_edge_safe("a", "b").unwrap().with_edge_safe("b", "c").unwrap()
    }

    #[test]
    fn queries_on_absent_ids_return_empty() {
        let g = abc_chain();
        assert!(g.node("missing").is_none());
        assert!(g.immediate_upstream("missing").is_empty());
        assert!(g.immediate_downstream("missing").is_empty());
    }

    #[test]
    fn immediate_neighbors_exclude_self() {
        let g = abc_chain();
        for id in ["a", "b", "c"] {
            assert!(g.immediate_upstream(id).iter().all(|n| n.id != id));
            assert!(g.immediate_downstream(id).iter().all(|n| n.id != id));
        }
        let parents: Vec<String> =
            g.immediate_upstream("b").into_iter().map(|n| n.id).collect();
        assert_eq!(parents, vec!["a"]);
    }

    #[test]
    fn safe_insert_rejects_duplicates_without_mutating() {
        let g = abc_chain();
        let err = g.with_edge_safe("a", "b").unwrap_err();
        assert_eq!(
            err,
            GraphError::DuplicateEdge {
                source: "a".into(),
                target: "b".into()
            }
        );
        assert_eq!(g.edge_count(), 2);
    }

    #[test]
    fn safe_insert_rejects_cycles_without_mutating() {
        let g = abc_chain();
        let err = g.with_edge_safe("c", "a").unwrap_err();
        assert_eq!(
            err,
            GraphError::WouldCreateCycle {
                source: "c".into(),
                target: "a".into()
            }
        );
        assert_eq!(g.edge_count(), 2);
    }

    #[test]
    fn removing_a_node_prunes_incident_edges() {
        let g = abc_chain().without_node("b");
        assert_eq!(g.node_count(), 2);
        assert_eq!(g.edge_count(), 0);
        assert!(g.edges().iter().all(|e| e.source != "b" && e.target != "b"));
    }

    #[test]
    fn unconnected_queries_ignore_transitive_reachability() {
        let g = abc_chain();
        // c is reachable from a, but has no direct edge from a... the
        // pair (a, c) therefore still shows up as a link candidate.
        let down: Vec<String> =
            g.unconnected_downstream("a").into_iter().map(|n| n.id).collect();
        assert_eq!(down, vec!["c"]);
        let up: Vec<String> =
            g.unconnected_upstream("c").into_iter().map(|n| n.id).collect();
        assert_eq!(up, vec!["a"]);
    }

    #[test]
    fn with_node_upserts_by_id() {
        let g = abc_chain().with_node(CausalNode::new("b", "B2", "updated"));
        assert_eq!(g.node_count(), 3);
        assert_eq!(g.node("b").unwrap().display_name, "B2");
        // Edges through the upserted node survive.
        assert_eq!(g.edge_count(), 2);
    }

    #[test]
    fn mutations_are_copy_on_write() {
        let g = abc_chain();
        let _bigger = g.with_node(CausalNode::new("d", "D", ""));
        let _smaller = g.without_node("a");
        assert_eq!(g.node_count(), 3);
        assert_eq!(g.edge_count(), 2);
    }
}
