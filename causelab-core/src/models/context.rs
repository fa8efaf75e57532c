//! The pivot neighborhood summary handed to the reasoning collaborator.

use serde::{Deserialize, Serialize};

use super::node::CausalNode;
use super::proposal::Direction;

/// Everything the collaborator needs to know about a pivot node's position
/// in the graph: immediate relatives, higher-degree relatives, and the
/// remaining unconnected variables.
///
/// "Higher" means minimum BFS degree > 1: a node that is both a parent and
/// a grandparent via different paths is classified by its minimum distance
/// and appears in the immediate list only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphContext {
    pub pivot: CausalNode,
    pub experimental_context: String,
    pub immediate_upstream: Vec<CausalNode>,
    pub immediate_downstream: Vec<CausalNode>,
    pub higher_ancestors: Vec<CausalNode>,
    pub higher_descendants: Vec<CausalNode>,
    pub unconnected: Vec<CausalNode>,
}

/// One agent-call's worth of input for `Reasoner::propose_variable`.
///
/// `avoid` lists variable names already proposed in earlier cycles so later
/// cycles diversify instead of collapsing onto the same few candidates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProposalRequest {
    pub context: GraphContext,
    pub direction: Direction,
    pub avoid: Vec<String>,
    pub cycle: usize,
}
