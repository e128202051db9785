//! Game event types.
//!
//! Events describe what changed, in the order it changed. A single move may
//! produce several events, e.g. `CardsMoved` followed by `CardRevealed` and,
//! for the final foundation move, `GameWon`.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{CardId, StackId};

/// Cards carried by one move, bottom of the run first.
///
/// Most moves carry a single card; runs rarely exceed four.
pub type MovedCards = SmallVec<[CardId; 4]>;

/// Something the presentation layer may want to react to.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A fresh game was dealt.
    NewGame {
        seed: Option<u64>,
    },

    /// One or more cards moved between stacks.
    CardsMoved {
        cards: MovedCards,
        from: StackId,
        to: StackId,
    },

    /// A tableau card was turned face-up after the card above it left.
    CardRevealed {
        card: CardId,
        stack: StackId,
    },

    /// A card was drawn from the deck onto the waste pile.
    CardDrawn {
        card: CardId,
    },

    /// The waste pile was turned over into the deck.
    WasteRecycled {
        count: usize,
    },

    /// All four foundations are complete.
    GameWon,
}

/// Discriminant of a `GameEvent`, for filtering.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventKind {
    NewGame,
    CardsMoved,
    CardRevealed,
    CardDrawn,
    WasteRecycled,
    GameWon,
}

impl GameEvent {
    /// Create a move event.
    pub fn moved(cards: impl IntoIterator<Item = CardId>, from: StackId, to: StackId) -> Self {
        GameEvent::CardsMoved {
            cards: cards.into_iter().collect(),
            from,
            to,
        }
    }

    /// The kind of this event.
    #[must_use]
    pub fn kind(&self) -> EventKind {
        match self {
            GameEvent::NewGame { .. } => EventKind::NewGame,
            GameEvent::CardsMoved { .. } => EventKind::CardsMoved,
            GameEvent::CardRevealed { .. } => EventKind::CardRevealed,
            GameEvent::CardDrawn { .. } => EventKind::CardDrawn,
            GameEvent::WasteRecycled { .. } => EventKind::WasteRecycled,
            GameEvent::GameWon => EventKind::GameWon,
        }
    }

    /// Stacks whose contents changed because of this event.
    #[must_use]
    pub fn touched_stacks(&self) -> SmallVec<[StackId; 2]> {
        match self {
            GameEvent::NewGame { .. } => StackId::all().collect(),
            GameEvent::CardsMoved { from, to, .. } => SmallVec::from_slice(&[*from, *to]),
            GameEvent::CardRevealed { stack, .. } => SmallVec::from_slice(&[*stack]),
            GameEvent::CardDrawn { .. } | GameEvent::WasteRecycled { .. } => {
                SmallVec::from_slice(&[StackId::Deck, StackId::Waste])
            }
            GameEvent::GameWon => SmallVec::new(),
        }
    }
}

impl std::fmt::Display for GameEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameEvent::NewGame { seed: Some(seed) } => write!(f, "new game (seed {})", seed),
            GameEvent::NewGame { seed: None } => write!(f, "new game"),
            GameEvent::CardsMoved { cards, from, to } => {
                write!(f, "moved")?;
                for card in cards {
                    write!(f, " {}", card)?;
                }
                write!(f, " {} -> {}", from, to)
            }
            GameEvent::CardRevealed { card, stack } => write!(f, "revealed {} on {}", card, stack),
            GameEvent::CardDrawn { card } => write!(f, "drew {}", card),
            GameEvent::WasteRecycled { count } => write!(f, "recycled {} cards", count),
            GameEvent::GameWon => write!(f, "game won"),
        }
    }
}

/// FIFO queue of pending events.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventQueue {
    pending: Vec<GameEvent>,
}

impl EventQueue {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: GameEvent) {
        self.pending.push(event);
    }

    /// Pending events, oldest first.
    #[must_use]
    pub fn pending(&self) -> &[GameEvent] {
        &self.pending
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Remove and return every pending event, oldest first.
    pub fn drain(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.pending)
    }
}
