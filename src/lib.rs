//! # klondike-engine
//!
//! Rules and state for single-deck, draw-one Klondike solitaire.
//!
//! ## Design Principles
//!
//! 1. **One Owner**: `GameState` owns every card. Callers read through
//!    accessors and snapshots and change the game only through its
//!    operations.
//!
//! 2. **Validate, Then Apply**: A move is checked completely before any
//!    pile is touched. A rejected move leaves the position unchanged.
//!
//! 3. **Deterministic Deals**: Shuffling goes through a seeded `GameRng`
//!    or a caller-supplied RNG, so any deal can be reproduced.
//!
//! ## Architecture
//!
//! - **Persistent Piles**: Piles are `im::Vector`s, so snapshots and
//!   whole-game clones are O(1).
//!
//! - **Events**: Every change is recorded as a `GameEvent` for the
//!   presentation layer to drain.
//!
//! ## Modules
//!
//! - `core`: Cards, stack ids, RNG, configuration
//! - `zones`: Piles and the deck
//! - `rules`: Placement and lifting predicates
//! - `events`: Game events and the pending-event queue
//! - `game`: Game state, moves, layouts
//!
//! ## Example
//!
//! ```
//! use klondike_engine::{DrawOutcome, GameConfig, GameState};
//!
//! let mut game = GameState::new_game(GameConfig::new(7));
//! assert_eq!(game.deck().len(), 24);
//!
//! if let DrawOutcome::Drawn(card) = game.draw_from_deck() {
//!     assert_eq!(game.waste().top().map(|c| c.id()), Some(card));
//! }
//! assert!(game.audit().is_ok());
//! ```

pub mod core;
pub mod zones;
pub mod rules;
pub mod events;
pub mod game;

// Re-export commonly used types
pub use crate::core::{
    Card, CardId, Color, Rank, Suit,
    StackId, GameRng,
    GameConfig, RunMoves,
};

pub use crate::zones::{Deck, Pile};

pub use crate::events::{EventKind, EventQueue, GameEvent, MovedCards};

pub use crate::game::{
    DrawOutcome, GameState, Layout, LayoutError,
    MoveError, MoveOutcome, MoveRequest,
};
