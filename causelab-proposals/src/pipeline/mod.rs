//! Generation pipeline orchestrator.
//!
//! Each cycle fans out `num_proposals_per_cycle` independent agent calls,
//! joins them unordered, and hands the collected candidates to the critic
//! together with the consolidated list so far. The critic owns all semantic
//! dedup; the pipeline only collects, orders, and publishes.

use std::sync::Arc;

use tokio::task::JoinSet;
use tracing::{debug, info, warn};

use causelab_core::config::GenerationConfig;
use causelab_core::models::{
    ConsolidatedProposal, Direction, GraphContext, Proposal, ProposalRequest,
};
use causelab_core::Reasoner;

use crate::session::SessionStore;

/// Outcome of one generation run.
///
/// A collaborator failure does not void the run: proposals consolidated in
/// earlier cycles are kept and the single user-visible message rides in
/// `error`.
#[derive(Debug, Clone)]
pub struct GenerationReport {
    pub generation: u64,
    pub proposals: Vec<Proposal>,
    pub error: Option<String>,
}

/// Deterministic presentation order: likelihood bucket first, then repeat
/// count descending, then variable name as the stable tiebreak.
pub fn order_consolidated(proposals: &mut [ConsolidatedProposal]) {
    proposals.sort_by(|a, b| {
        a.likelihood
            .rank()
            .cmp(&b.likelihood.rank())
            .then_with(|| b.count.cmp(&a.count))
            .then_with(|| a.variable_name.cmp(&b.variable_name))
    });
}

pub(crate) async fn run_generation<R: Reasoner>(
    reasoner: Arc<R>,
    config: GenerationConfig,
    context: GraphContext,
    direction: Direction,
    sessions: &SessionStore,
    pivot: &str,
    generation: u64,
) -> GenerationReport {
    let mut working: Vec<ConsolidatedProposal> = Vec::new();
    let mut error: Option<String> = None;

    'cycles: for cycle in 0..config.num_cycles {
        // Later cycles are steered away from everything already proposed.
        let avoid: Vec<String> = working.iter().map(|p| p.variable_name.clone()).collect();
        info!(
            pivot = %pivot,
            cycle,
            agents = config.num_proposals_per_cycle,
            "dispatching proposal cycle"
        );

        let mut join_set = JoinSet::new();
        for _ in 0..config.num_proposals_per_cycle {
            let reasoner = Arc::clone(&reasoner);
            let request = ProposalRequest {
                context: context.clone(),
                direction,
                avoid: avoid.clone(),
                cycle,
            };
            join_set.spawn(async move { reasoner.propose_variable(request).await });
        }

        let mut placeholders: Vec<Proposal> = (0..config.num_proposals_per_cycle)
            .map(|_| Proposal::pending(direction))
            .collect();
        let mut assessing: Vec<Proposal> = Vec::new();
        let mut candidates = Vec::new();
        publish_rows(sessions, pivot, generation, &working, &assessing, &placeholders, direction);

        // Agents are independent samples; completion order is meaningless.
        while let Some(joined) = join_set.join_next().await {
            let outcome = match joined {
                Ok(outcome) => outcome,
                Err(join_error) => {
                    warn!(pivot = %pivot, cycle, %join_error, "agent task panicked");
                    error = Some(join_error.to_string());
                    join_set.abort_all();
                    break 'cycles;
                }
            };
            match outcome {
                Ok(candidate) => {
                    placeholders.pop();
                    assessing.push(Proposal::assessing(&candidate, direction));
                    candidates.push(candidate);
                    publish_rows(
                        sessions,
                        pivot,
                        generation,
                        &working,
                        &assessing,
                        &placeholders,
                        direction,
                    );
                }
                Err(reasoner_error) => {
                    warn!(pivot = %pivot, cycle, %reasoner_error, "agent call failed");
                    error = Some(reasoner_error.to_string());
                    join_set.abort_all();
                    break 'cycles;
                }
            }
        }

        // Sort by name before the critic call so the consolidated output is
        // independent of arrival order.
        candidates.sort_by(|a, b| a.variable_name.cmp(&b.variable_name));
        debug!(pivot = %pivot, cycle, received = candidates.len(), "cycle collected");

        match reasoner
            .consolidate(context.clone(), direction, working.clone(), candidates)
            .await
        {
            Ok(mut consolidated) => {
                order_consolidated(&mut consolidated);
                working = consolidated;
            }
            Err(critic_error) => {
                warn!(pivot = %pivot, cycle, %critic_error, "critic pass failed");
                error = Some(critic_error.to_string());
                break 'cycles;
            }
        }
        publish_rows(sessions, pivot, generation, &working, &[], &[], direction);
    }

    // On failure the placeholders of the aborted cycle are dropped and the
    // earlier cycles' consolidated rows stand.
    publish_rows(sessions, pivot, generation, &working, &[], &[], direction);
    info!(
        pivot = %pivot,
        proposals = working.len(),
        failed = error.is_some(),
        "generation finished"
    );

    GenerationReport {
        generation,
        proposals: working
            .iter()
            .map(|c| Proposal::complete(c, direction))
            .collect(),
        error,
    }
}

fn publish_rows(
    sessions: &SessionStore,
    pivot: &str,
    generation: u64,
    working: &[ConsolidatedProposal],
    assessing: &[Proposal],
    placeholders: &[Proposal],
    direction: Direction,
) {
    let mut rows: Vec<Proposal> = working
        .iter()
        .map(|c| Proposal::complete(c, direction))
        .collect();
    rows.extend_from_slice(assessing);
    rows.extend_from_slice(placeholders);
    if !sessions.publish(pivot, generation, rows) {
        debug!(pivot = %pivot, generation, "publish refused for superseded generation");
    }
}
