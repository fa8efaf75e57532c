//! ProposalEngine — public orchestration surface over the reasoning
//! collaborator, the generation sessions, and the structural transforms.

use std::sync::Arc;

use causelab_core::config::GenerationConfig;
use causelab_core::errors::{CauselabResult, GraphError, ProposalError};
use causelab_core::models::{
    CausalNode, Direction, NodeAssessment, Proposal,
};
use causelab_core::Reasoner;
use causelab_graph::transform::{condense, expand, CondenseOutcome, ExpandOutcome};
use causelab_graph::{would_create_cycle, CausalGraph};

use crate::context::build_graph_context;
use crate::evaluate;
use crate::pipeline::{self, GenerationReport};
use crate::session::SessionStore;

/// Drives proposal generation, evaluation, and the condense/expand flows.
///
/// The engine never holds the graph: every call takes the current graph
/// value and mutating flows return a new one, so the caller keeps the
/// single mutable reference.
pub struct ProposalEngine<R: Reasoner> {
    reasoner: Arc<R>,
    config: GenerationConfig,
    sessions: SessionStore,
}

impl<R: Reasoner> ProposalEngine<R> {
    /// Create an engine with the default generation configuration.
    pub fn new(reasoner: R) -> Self {
        Self {
            reasoner: Arc::new(reasoner),
            config: GenerationConfig::default(),
            sessions: SessionStore::new(),
        }
    }

    /// Override the generation configuration.
    pub fn with_config(mut self, config: GenerationConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &GenerationConfig {
        &self.config
    }

    /// Current session rows for a pivot, in all lifecycle states.
    pub fn snapshot(&self, pivot: &str) -> Vec<Proposal> {
        self.sessions.snapshot(pivot)
    }

    /// Run a full generation for `pivot` in `direction`.
    ///
    /// Opens a fresh generation ticket, superseding any in-flight run for
    /// the same pivot: the superseded run finishes with
    /// [`ProposalError::StaleGeneration`] and its results are discarded. A
    /// collaborator failure mid-run is reported in the returned
    /// [`GenerationReport::error`] while earlier cycles' proposals are
    /// kept.
    pub async fn generate(
        &self,
        graph: &CausalGraph,
        pivot: &str,
        direction: Direction,
    ) -> CauselabResult<GenerationReport> {
        let context = build_graph_context(graph, pivot)?;
        let generation = self.sessions.open(pivot);
        let report = pipeline::run_generation(
            Arc::clone(&self.reasoner),
            self.config,
            context,
            direction,
            &self.sessions,
            pivot,
            generation,
        )
        .await;
        if !self.sessions.is_current(pivot, generation) {
            return Err(ProposalError::StaleGeneration {
                pivot: pivot.to_string(),
                generation,
            }
            .into());
        }
        Ok(report)
    }

    /// Ask the collaborator to rate already-existing unconnected nodes as
    /// link candidates for `pivot`. Candidates whose link would close a
    /// cycle are filtered out up front, mirroring the UI's affordance
    /// pre-filter.
    pub async fn evaluate_existing(
        &self,
        graph: &CausalGraph,
        pivot: &str,
        direction: Direction,
    ) -> CauselabResult<Vec<NodeAssessment>> {
        let context = build_graph_context(graph, pivot)?;
        let candidates: Vec<CausalNode> = match direction {
            Direction::Upstream => graph
                .unconnected_upstream(pivot)
                .into_iter()
                .filter(|n| !would_create_cycle(graph, &n.id, pivot))
                .collect(),
            Direction::Downstream => graph
                .unconnected_downstream(pivot)
                .into_iter()
                .filter(|n| !would_create_cycle(graph, pivot, &n.id))
                .collect(),
        };
        evaluate::run_evaluation(self.reasoner.as_ref(), context, direction, candidates).await
    }

    /// Condense a selection into one node whose identity the collaborator
    /// proposes.
    pub async fn condense(
        &self,
        graph: &CausalGraph,
        selected: &[String],
    ) -> CauselabResult<CondenseOutcome> {
        let mut nodes = Vec::with_capacity(selected.len());
        for id in selected {
            nodes.push(
                graph
                    .node(id)
                    .ok_or_else(|| GraphError::NodeNotFound(id.clone()))?
                    .clone(),
            );
        }
        let identity = self
            .reasoner
            .propose_condensation(graph.experimental_context().to_string(), nodes)
            .await?;
        Ok(condense(graph, selected, &identity)?)
    }

    /// Expand a node into the subgraph the collaborator proposes.
    pub async fn expand(
        &self,
        graph: &CausalGraph,
        node_id: &str,
    ) -> CauselabResult<ExpandOutcome> {
        let context = build_graph_context(graph, node_id)?;
        let proposal = self.reasoner.propose_expansion(context).await?;
        Ok(expand(graph, node_id, &proposal)?)
    }

    /// Accept a completed proposal: insert its node and the edge to the
    /// pivot in the proposal's direction, then drop the session row.
    ///
    /// Node-id collision is pre-checked here so the non-validating node
    /// insert below cannot clobber an existing variable.
    pub fn accept_proposal(
        &self,
        graph: &CausalGraph,
        pivot: &str,
        proposal: &Proposal,
    ) -> CauselabResult<CausalGraph> {
        if graph.contains_node(&proposal.variable_name) {
            return Err(GraphError::NodeIdCollision(proposal.variable_name.clone()).into());
        }
        let node = CausalNode::new(
            proposal.variable_name.clone(),
            proposal.display_name.clone(),
            proposal.rationale.clone(),
        );
        let staged = graph.with_node(node);
        let next = match proposal.direction {
            Direction::Upstream => staged.with_edge_safe(&proposal.variable_name, pivot)?,
            Direction::Downstream => staged.with_edge_safe(pivot, &proposal.variable_name)?,
        };
        self.sessions.remove(pivot, &proposal.id);
        Ok(next)
    }

    /// Dismiss a proposal without touching the graph.
    pub fn dismiss_proposal(&self, pivot: &str, proposal_id: &str) {
        self.sessions.remove(pivot, proposal_id);
    }
}
