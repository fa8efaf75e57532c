//! # causelab-proposals
//!
//! Orchestration around the external reasoning collaborator: per-cycle
//! agent fan-out, the critic consolidation pass, existing-node evaluation,
//! and the generation sessions the UI renders. The pipeline never infers
//! semantic duplication itself; it fans out, collects, hands off to the
//! critic, and orders what comes back.

pub mod context;
pub mod engine;
pub mod evaluate;
pub mod pipeline;
pub mod session;

pub use context::build_graph_context;
pub use engine::ProposalEngine;
pub use pipeline::GenerationReport;
pub use session::{GenerationSession, SessionStore};
