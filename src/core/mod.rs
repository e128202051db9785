//! Core value types: cards, stack ids, RNG, configuration.

pub mod card;
pub mod stack_id;
pub mod rng;
pub mod config;

pub use card::{Card, CardId, Color, ParseCardError, Rank, Suit, DECK_SIZE, NUM_RANKS, NUM_SUITS};
pub use stack_id::{ParseStackIdError, StackId, NUM_FOUNDATIONS, NUM_TABLEAUS};
pub use rng::GameRng;
pub use config::{GameConfig, RunMoves};
