//! Game configuration.
//!
//! The variant is fixed (one deck, seven columns, draw one), so the
//! configuration only covers what a front end may legitimately choose:
//! - `seed`: shuffle seed for reproducible deals
//! - `run_moves`: whether a tableau run may be moved as a unit

use serde::{Deserialize, Serialize};

/// Policy for moving several tableau cards at once.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RunMoves {
    /// A face-up card may be moved together with every card above it.
    #[default]
    Allowed,
    /// Only the top card of any stack may be moved.
    SingleCard,
}

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Seed for the deterministic shuffle.
    pub seed: u64,

    /// Tableau run policy.
    pub run_moves: RunMoves,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            run_moves: RunMoves::Allowed,
        }
    }
}

impl GameConfig {
    /// Create a configuration with the given seed and default rules.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            ..Self::default()
        }
    }

    /// Set the shuffle seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the tableau run policy.
    #[must_use]
    pub fn with_run_moves(mut self, run_moves: RunMoves) -> Self {
        self.run_moves = run_moves;
        self
    }

    /// Restrict moves to single cards.
    #[must_use]
    pub fn single_card_only(self) -> Self {
        self.with_run_moves(RunMoves::SingleCard)
    }
}
