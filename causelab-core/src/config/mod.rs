//! Generation configuration.

pub mod defaults;

use serde::{Deserialize, Serialize};

/// How many rounds of agent fan-out to run and how many independent
/// proposals to request per round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub num_cycles: usize,
    pub num_proposals_per_cycle: usize,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            num_cycles: defaults::DEFAULT_NUM_CYCLES,
            num_proposals_per_cycle: defaults::DEFAULT_PROPOSALS_PER_CYCLE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_round_trips_camel_case() {
        let config = GenerationConfig {
            num_cycles: 2,
            num_proposals_per_cycle: 5,
        };
        let json = serde_json::to_value(config).unwrap();
        assert_eq!(json["numCycles"], 2);
        assert_eq!(json["numProposalsPerCycle"], 5);
        let back: GenerationConfig = serde_json::from_value(json).unwrap();
        assert_eq!(back, config);
    }
}
