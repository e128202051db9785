//! Move legality.
//!
//! Pure predicates deciding which placements and lifts are legal, plus the
//! structural checks used to validate whole piles. `GameState` calls into
//! these; nothing here touches game state.

pub mod engine;

pub use engine::{
    can_lift_from_tableau, can_move_to_foundation, can_move_to_tableau, is_valid_foundation,
    is_valid_run, is_won, rank_index,
};
