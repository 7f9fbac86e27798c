//! Configuration types for bracket play
//!
//! Level 4 - Utilities and configuration

use std::time::Duration;

use arena_core::MAX_ROUNDS;

/// Bracket configuration
#[derive(Clone, Debug, PartialEq)]
pub struct BracketConfig {
    /// Maximum damage steps per battle
    pub max_rounds: u32,
    /// Whether to compute the battles of a round on the rayon pool
    pub parallel: bool,
    /// Bound on each competitor resolution (None = wait indefinitely)
    pub resolve_timeout: Option<Duration>,
}

impl Default for BracketConfig {
    fn default() -> Self {
        Self {
            max_rounds: MAX_ROUNDS,
            parallel: false,
            resolve_timeout: None,
        }
    }
}

impl BracketConfig {
    /// Battles run one after another in pairing order
    pub fn sequential() -> Self {
        Self::default()
    }

    /// Battles of a round run on the rayon pool
    pub fn parallel() -> Self {
        Self {
            parallel: true,
            ..Default::default()
        }
    }

    /// Set per-battle round cap
    pub fn with_max_rounds(mut self, max_rounds: u32) -> Self {
        self.max_rounds = max_rounds;
        self
    }

    /// Bound each competitor resolution
    pub fn with_resolve_timeout(mut self, timeout: Duration) -> Self {
        self.resolve_timeout = Some(timeout);
        self
    }
}
