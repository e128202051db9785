//! State-change events.
//!
//! `GameState` records an event for every visible change it makes. A
//! presentation layer drains the queue after each operation and updates its
//! view; the engine itself never looks at the queue.

pub mod event;

pub use event::{EventKind, EventQueue, GameEvent, MovedCards};
