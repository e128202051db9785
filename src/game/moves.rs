//! Move requests and their results.
//!
//! A move passes through three stages:
//!
//! 1. `MoveRequest`: a card, its source stack and a destination, as
//!    supplied by the caller. Nothing has been checked.
//! 2. `ValidatedMove`: produced only by `GameState::validate` after every
//!    rule has passed against the current position. Holds the index the
//!    run is lifted from.
//! 3. `MoveOutcome` on success, `MoveError` on rejection. A rejected
//!    request never reaches stage 2, so it cannot mutate anything.

use serde::{Deserialize, Serialize};

use crate::core::{CardId, StackId};
use crate::events::MovedCards;

/// A requested move of `card` (and, from a tableau, every card above it).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MoveRequest {
    pub card: CardId,
    pub from: StackId,
    pub to: StackId,
}

impl MoveRequest {
    #[must_use]
    pub const fn new(card: CardId, from: StackId, to: StackId) -> Self {
        Self { card, from, to }
    }
}

impl std::fmt::Display for MoveRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} -> {}", self.card, self.from, self.to)
    }
}

/// A move that passed validation against the current position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct ValidatedMove {
    pub(crate) request: MoveRequest,
    /// Index in the source pile of the lowest card being moved.
    pub(crate) index: usize,
}

/// Result of an applied move.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveOutcome {
    /// Cards moved, bottom of the run first.
    pub cards: MovedCards,
    pub from: StackId,
    pub to: StackId,
    /// Tableau card turned face-up by the move, if any.
    pub revealed: Option<CardId>,
    /// Whether this move completed the game.
    pub won: bool,
}

impl MoveOutcome {
    /// Foundation index the cards landed on, if the destination is a foundation.
    #[must_use]
    pub fn foundation_index(&self) -> Option<usize> {
        match self.to {
            StackId::Foundation(i) => Some(i as usize),
            _ => None,
        }
    }
}

/// Why a move was rejected. The position is unchanged in every case.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveError {
    /// Source and destination are the same stack.
    SameStack,
    /// The id does not name a stack (index out of range).
    UnknownStack(StackId),
    /// Cards cannot be moved onto this stack (deck or waste).
    UnsupportedDestination(StackId),
    /// Cards cannot be taken from this stack for this move: the deck, or
    /// a foundation when the destination is also a foundation.
    UnsupportedSource(StackId),
    /// The card is not in the named source stack.
    CardNotFound(CardId),
    /// The card is face-down.
    CardFaceDown(CardId),
    /// Only the top card may be moved here.
    NotOnTop(CardId),
    /// The destination's top card does not accept the card.
    IllegalPlacement { card: CardId, destination: StackId },
    /// No foundation accepts the card.
    NoFoundationAccepts(CardId),
}

impl std::fmt::Display for MoveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MoveError::SameStack => write!(f, "source and destination are the same stack"),
            MoveError::UnknownStack(id) => write!(f, "no such stack: {:?}", id),
            MoveError::UnsupportedDestination(id) => write!(f, "cannot move cards onto {}", id),
            MoveError::UnsupportedSource(id) => write!(f, "cannot move cards out of {}", id),
            MoveError::CardNotFound(card) => write!(f, "card {} not found", card),
            MoveError::CardFaceDown(card) => write!(f, "card {} is face-down", card),
            MoveError::NotOnTop(card) => write!(f, "card {} is not on top", card),
            MoveError::IllegalPlacement { card, destination } => {
                write!(f, "{} cannot be placed on {}", card, destination)
            }
            MoveError::NoFoundationAccepts(card) => write!(f, "no foundation accepts {}", card),
        }
    }
}

impl std::error::Error for MoveError {}

/// Result of `GameState::draw_from_deck`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DrawOutcome {
    /// A card moved from the deck to the waste pile.
    Drawn(CardId),
    /// The deck was empty; the waste pile was turned over into it.
    Recycled { count: usize },
    /// Deck and waste were both empty; nothing happened.
    Empty,
}

impl DrawOutcome {
    /// The card drawn, if any.
    #[must_use]
    pub fn drawn(&self) -> Option<CardId> {
        match self {
            DrawOutcome::Drawn(card) => Some(*card),
            _ => None,
        }
    }

    /// Whether the waste pile was recycled.
    #[must_use]
    pub fn recycled(&self) -> bool {
        matches!(self, DrawOutcome::Recycled { .. })
    }
}
