//! Data models shared across the workspace.

pub mod context;
pub mod edge;
pub mod node;
pub mod proposal;

pub use context::{GraphContext, ProposalRequest};
pub use edge::CausalEdge;
pub use node::{CausalNode, NodeClassification, Position};
pub use proposal::{
    CandidateProposal, CausalPlacement, CondensationProposal, ConsolidatedProposal, Direction,
    ExpansionProposal, ExpansionRole, Likelihood, NodeAssessment, Proposal, ProposalStatus,
    ProposedLink, ProposedSubnode,
};
