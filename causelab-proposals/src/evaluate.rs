//! Evaluate-existing-nodes pipeline.
//!
//! Simpler sibling of the generation pipeline: the candidates already exist
//! and are unique by id, so there is no cross-proposal dedup. One critic
//! call assigns each node a likelihood and rationale for being linked in
//! the given direction.

use tracing::info;

use causelab_core::errors::CauselabResult;
use causelab_core::models::{CausalNode, Direction, GraphContext, NodeAssessment};
use causelab_core::Reasoner;

pub async fn run_evaluation<R: Reasoner>(
    reasoner: &R,
    context: GraphContext,
    direction: Direction,
    candidates: Vec<CausalNode>,
) -> CauselabResult<Vec<NodeAssessment>> {
    if candidates.is_empty() {
        return Ok(Vec::new());
    }
    info!(
        pivot = %context.pivot.id,
        %direction,
        candidates = candidates.len(),
        "evaluating existing nodes"
    );
    let mut assessments = reasoner.assess_nodes(context, direction, candidates).await?;
    assessments.sort_by(|a, b| {
        a.likelihood
            .rank()
            .cmp(&b.likelihood.rank())
            .then_with(|| a.node_id.cmp(&b.node_id))
    });
    Ok(assessments)
}
