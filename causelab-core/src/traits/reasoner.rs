//! Reasoner — the external reasoning collaborator trait.
//!
//! The pipeline treats the collaborator as an opaque proposal source that
//! returns typed results or fails with a message. Prompt wording, transport,
//! and retry policy all live behind this boundary.

use std::future::Future;

use crate::errors::CauselabResult;
use crate::models::{
    CandidateProposal, CausalNode, CondensationProposal, ConsolidatedProposal, Direction,
    ExpansionProposal, GraphContext, NodeAssessment, ProposalRequest,
};

/// External reasoning collaborator.
///
/// Futures carry an explicit `Send` bound so per-cycle fan-out calls can be
/// spawned as tasks and joined unordered. Implementations are free to use
/// plain `async fn` in their impl blocks.
pub trait Reasoner: Send + Sync + 'static {
    /// Generate one independent candidate variable for the request's pivot
    /// and direction. Conceptually one "agent" in a cycle's fan-out.
    fn propose_variable(
        &self,
        request: ProposalRequest,
    ) -> impl Future<Output = CauselabResult<CandidateProposal>> + Send;

    /// Critic pass: merge near-duplicate candidates into the working list,
    /// incrementing `count` for equivalent variables and assigning each
    /// entry a likelihood bucket with a short justification.
    ///
    /// All semantic duplicate detection happens here; the pipeline only
    /// orchestrates and orders the returned list.
    fn consolidate(
        &self,
        context: GraphContext,
        direction: Direction,
        existing: Vec<ConsolidatedProposal>,
        candidates: Vec<CandidateProposal>,
    ) -> impl Future<Output = CauselabResult<Vec<ConsolidatedProposal>>> + Send;

    /// Assign each already-existing node a likelihood and rationale for
    /// being linked to the pivot in the given direction.
    fn assess_nodes(
        &self,
        context: GraphContext,
        direction: Direction,
        nodes: Vec<CausalNode>,
    ) -> impl Future<Output = CauselabResult<Vec<NodeAssessment>>> + Send;

    /// Propose the identity (name, description) of a node condensing the
    /// selection into a single variable.
    fn propose_condensation(
        &self,
        experimental_context: String,
        selected: Vec<CausalNode>,
    ) -> impl Future<Output = CauselabResult<CondensationProposal>> + Send;

    /// Propose a causal subgraph decomposing the context's pivot node.
    fn propose_expansion(
        &self,
        context: GraphContext,
    ) -> impl Future<Output = CauselabResult<ExpansionProposal>> + Send;
}
