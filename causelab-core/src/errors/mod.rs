//! Error taxonomy for the causelab workspace.
//!
//! Validation errors are rejected before any mutation; collaborator errors
//! are caught at the pipeline boundary and surfaced verbatim.

mod graph_error;
mod proposal_error;

pub use graph_error::GraphError;
pub use proposal_error::ProposalError;

/// Workspace-wide result alias.
pub type CauselabResult<T> = Result<T, CauselabError>;

/// Top-level error wrapping each subsystem's taxonomy.
#[derive(Debug, thiserror::Error)]
pub enum CauselabError {
    #[error(transparent)]
    Graph(#[from] GraphError),

    #[error(transparent)]
    Proposal(#[from] ProposalError),

    #[error("serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}
