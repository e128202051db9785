//! Card containers.
//!
//! ## Key Types
//!
//! - `Pile`: Ordered card sequence (bottom first) backing every stack
//! - `Deck`: The face-down stock with draw and waste recycling

pub mod pile;
pub mod deck;

pub use pile::Pile;
pub use deck::Deck;
