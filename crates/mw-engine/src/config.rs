//! Configuration for an engine session.

use serde::{Deserialize, Serialize};

/// What happens to temporary story tags after a roll resolves.
///
/// The legacy consoles disagreed on this, so it is a policy rather than a
/// hard-coded rule.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConsumePolicy {
    /// Every temporary story tag is consumed, selected or not.
    #[default]
    AllTemporary,
    /// Only temporary story tags selected for the roll are consumed.
    SelectedOnly,
}

/// Configuration for a session.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// RNG seed for reproducible dice.
    pub seed: u64,
    /// Temporary story tag consumption policy.
    pub consume_policy: ConsumePolicy,
    /// Whether a move must be selected before rolling.
    pub require_move: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            consume_policy: ConsumePolicy::AllTemporary,
            require_move: true,
        }
    }
}

impl EngineConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the temporary story tag consumption policy.
    pub fn with_consume_policy(mut self, policy: ConsumePolicy) -> Self {
        self.consume_policy = policy;
        self
    }

    /// Set whether a move must be selected before rolling.
    pub fn with_move_gate(mut self, require_move: bool) -> Self {
        self.require_move = require_move;
        self
    }
}
