//! Proposal lifecycle types: candidate suggestions from individual agents,
//! consolidated critic output, and the user-facing ranked proposal.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Which side of the pivot a generation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// Propose causes (parents / ancestors).
    Upstream,
    /// Propose effects (children / descendants).
    Downstream,
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Upstream => "upstream",
            Self::Downstream => "downstream",
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Pearl-style causal position of a proposed variable relative to the pivot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CausalPlacement {
    Parent,
    Ancestor,
    Child,
    Descendant,
}

impl CausalPlacement {
    /// The default placement for direct proposals in a direction.
    pub fn immediate_for(direction: Direction) -> Self {
        match direction {
            Direction::Upstream => Self::Parent,
            Direction::Downstream => Self::Child,
        }
    }
}

/// Confidence bucket assigned by the critic pass.
///
/// Ordering is by descending confidence: `High < Medium < Low`, so sorting
/// ascending puts the most likely proposals first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Likelihood {
    High,
    Medium,
    Low,
}

impl Likelihood {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }

    /// Rank for deterministic ordering (0 = most likely).
    pub fn rank(&self) -> u8 {
        match self {
            Self::High => 0,
            Self::Medium => 1,
            Self::Low => 2,
        }
    }
}

impl std::fmt::Display for Likelihood {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lifecycle of a proposal row as rendered by the UI.
///
/// Cycles may complete out of order, so all three states can be on screen
/// at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProposalStatus {
    /// Dispatched to an agent, no content yet.
    Pending,
    /// Content received, awaiting the critic pass.
    Assessing,
    /// Ranked and ready for user action.
    Complete,
}

/// A raw suggestion from one agent, before consolidation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateProposal {
    pub variable_name: String,
    pub display_name: String,
    pub rationale: String,
    pub relation: CausalPlacement,
}

/// Critic output: near-duplicate candidates merged into one entry.
///
/// `count` is the number of independent agents that proposed an equivalent
/// variable, used purely as a confidence signal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsolidatedProposal {
    pub variable_name: String,
    pub display_name: String,
    pub rationale: String,
    pub relation: CausalPlacement,
    pub likelihood: Likelihood,
    pub justification: String,
    pub count: u32,
}

/// A user-facing proposal row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Proposal {
    pub id: String,
    pub variable_name: String,
    pub display_name: String,
    pub rationale: String,
    pub relation: CausalPlacement,
    pub direction: Direction,
    pub status: ProposalStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub likelihood: Option<Likelihood>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub justification: Option<String>,
    pub count: u32,
    pub proposed_at: DateTime<Utc>,
}

impl Proposal {
    /// A placeholder row for a dispatched agent request.
    pub fn pending(direction: Direction) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            variable_name: String::new(),
            display_name: String::new(),
            rationale: String::new(),
            relation: CausalPlacement::immediate_for(direction),
            direction,
            status: ProposalStatus::Pending,
            likelihood: None,
            justification: None,
            count: 0,
            proposed_at: Utc::now(),
        }
    }

    /// A row holding received candidate content, awaiting the critic.
    pub fn assessing(candidate: &CandidateProposal, direction: Direction) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            variable_name: candidate.variable_name.clone(),
            display_name: candidate.display_name.clone(),
            rationale: candidate.rationale.clone(),
            relation: candidate.relation,
            direction,
            status: ProposalStatus::Assessing,
            likelihood: None,
            justification: None,
            count: 1,
            proposed_at: Utc::now(),
        }
    }

    /// A completed row from consolidated critic output.
    pub fn complete(consolidated: &ConsolidatedProposal, direction: Direction) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            variable_name: consolidated.variable_name.clone(),
            display_name: consolidated.display_name.clone(),
            rationale: consolidated.rationale.clone(),
            relation: consolidated.relation,
            direction,
            status: ProposalStatus::Complete,
            likelihood: Some(consolidated.likelihood),
            justification: Some(consolidated.justification.clone()),
            count: consolidated.count,
            proposed_at: Utc::now(),
        }
    }
}

/// Per-node verdict from the evaluate-existing-nodes pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeAssessment {
    pub node_id: String,
    pub likelihood: Likelihood,
    pub rationale: String,
}

/// Replacement identity for a condensation, produced by the collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CondensationProposal {
    pub variable_name: String,
    pub display_name: String,
    pub description: String,
    pub rationale: String,
}

/// Role of a proposed subnode within an expansion.
///
/// Load-bearing for edge redirection: incoming boundary edges fan out to
/// `Parent` nodes, outgoing boundary edges fan out from `Child` nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExpansionRole {
    Parent,
    Internal,
    Child,
}

/// A node inside an expansion proposal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProposedSubnode {
    pub variable_name: String,
    pub display_name: String,
    pub description: String,
    pub role: ExpansionRole,
}

/// An edge between proposed subnodes, by variable name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProposedLink {
    pub source: String,
    pub target: String,
}

/// A subgraph replacing a single expanded node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpansionProposal {
    pub nodes: Vec<ProposedSubnode>,
    pub edges: Vec<ProposedLink>,
}
