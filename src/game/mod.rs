//! Game orchestration.
//!
//! ## Key Types
//!
//! - `GameState`: Owns every stack and applies draws and moves
//! - `MoveRequest` / `MoveOutcome` / `MoveError`: A move's request and result
//! - `DrawOutcome`: Result of drawing from the deck
//! - `Layout`: Every stack's contents, for snapshots and custom starts

pub mod layout;
pub mod moves;
pub mod state;

pub use layout::{Layout, LayoutError};
pub use moves::{DrawOutcome, MoveError, MoveOutcome, MoveRequest};
pub use state::GameState;
