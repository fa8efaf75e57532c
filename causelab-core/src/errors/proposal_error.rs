/// Proposal pipeline errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProposalError {
    /// The external reasoning collaborator failed. The message is surfaced
    /// to the user verbatim; already-consolidated proposals are kept.
    #[error("reasoner call failed: {0}")]
    ReasonerFailed(String),

    /// A newer generation was started for the same pivot node while this
    /// one was in flight. The stale results are discarded, not merged.
    #[error("generation {generation} for node {pivot} was superseded")]
    StaleGeneration { pivot: String, generation: u64 },
}
