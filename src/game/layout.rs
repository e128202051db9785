//! Complete card layouts.
//!
//! A `Layout` is every stack's contents at one moment. `GameState::snapshot`
//! hands one out for rendering (O(1), the piles are persistent vectors),
//! and `GameState::from_layout` accepts one to start from an arbitrary
//! position after checking it with `validate`.
//!
//! ```
//! use klondike_engine::core::{Card, StackId};
//! use klondike_engine::game::Layout;
//!
//! let layout = Layout::empty()
//!     .with_tableau(0, [Card::face_up("K♠".parse().unwrap())])
//!     .fill_deck();
//!
//! assert_eq!(layout.total_cards(), 52);
//! assert!(layout.validate().is_ok());
//! assert_eq!(layout.pile(StackId::Tableau(0)).map(|p| p.len()), Some(1));
//! ```

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::core::{Card, CardId, StackId, DECK_SIZE, NUM_FOUNDATIONS, NUM_TABLEAUS};
use crate::rules::{is_valid_foundation, is_valid_run};
use crate::zones::{Deck, Pile};

/// Contents of every stack.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Layout {
    pub deck: Deck,
    pub waste: Pile,
    pub foundations: [Pile; NUM_FOUNDATIONS],
    pub tableaus: [Pile; NUM_TABLEAUS],
}

/// Why a layout is not a reachable game position.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LayoutError {
    /// The layout does not hold exactly 52 cards.
    CardCount { found: usize },
    /// The same card appears twice.
    DuplicateCard(CardId),
    /// A deck card is face-up.
    FaceUpInDeck(CardId),
    /// A waste card is face-down.
    FaceDownInWaste(CardId),
    /// A foundation is not a face-up, single-suit, Ace-upward sequence.
    InvalidFoundation(StackId),
    /// A tableau's top card is face-down.
    HiddenTop(StackId),
    /// A tableau has a face-up card beneath a face-down one.
    FaceUpBelowHidden(StackId),
    /// A tableau's face-up cards do not alternate color and descend.
    InvalidRun(StackId),
}

impl std::fmt::Display for LayoutError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LayoutError::CardCount { found } => {
                write!(f, "layout holds {} cards, expected {}", found, DECK_SIZE)
            }
            LayoutError::DuplicateCard(card) => write!(f, "card {} appears more than once", card),
            LayoutError::FaceUpInDeck(card) => write!(f, "deck card {} is face-up", card),
            LayoutError::FaceDownInWaste(card) => write!(f, "waste card {} is face-down", card),
            LayoutError::InvalidFoundation(stack) => write!(f, "{} is not a valid foundation", stack),
            LayoutError::HiddenTop(stack) => write!(f, "{} has a face-down top card", stack),
            LayoutError::FaceUpBelowHidden(stack) => {
                write!(f, "{} has a face-up card below a face-down card", stack)
            }
            LayoutError::InvalidRun(stack) => write!(f, "{} has an invalid face-up run", stack),
        }
    }
}

impl std::error::Error for LayoutError {}

impl Layout {
    /// A layout with every stack empty.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Replace a tableau's cards (bottom first).
    ///
    /// Out-of-range indices are ignored and caught by `validate` through
    /// the card count.
    #[must_use]
    pub fn with_tableau(mut self, index: usize, cards: impl IntoIterator<Item = Card>) -> Self {
        if let Some(pile) = self.tableaus.get_mut(index) {
            *pile = cards.into_iter().collect();
        }
        self
    }

    /// Replace a foundation's cards (Ace first).
    #[must_use]
    pub fn with_foundation(mut self, index: usize, cards: impl IntoIterator<Item = Card>) -> Self {
        if let Some(pile) = self.foundations.get_mut(index) {
            *pile = cards.into_iter().collect();
        }
        self
    }

    /// Replace the waste pile (bottom first).
    #[must_use]
    pub fn with_waste(mut self, cards: impl IntoIterator<Item = Card>) -> Self {
        self.waste = cards.into_iter().collect();
        self
    }

    /// Replace the deck (bottom first; the last card is drawn next).
    #[must_use]
    pub fn with_deck(mut self, cards: impl IntoIterator<Item = Card>) -> Self {
        self.deck = Deck::from_cards(cards);
        self
    }

    /// Put every card not yet placed beneath the deck, face-down.
    #[must_use]
    pub fn fill_deck(mut self) -> Self {
        let placed: FxHashSet<CardId> = self.iter_cards().map(|(_, c)| c.id()).collect();
        let mut cards: Vec<Card> = CardId::all()
            .filter(|id| !placed.contains(id))
            .map(Card::face_down)
            .collect();
        cards.extend(self.deck.pile().iter().copied());
        self.deck = Deck::from_cards(cards);
        self
    }

    /// The pile for a stack id.
    #[must_use]
    pub fn pile(&self, id: StackId) -> Option<&Pile> {
        match id {
            StackId::Deck => Some(self.deck.pile()),
            StackId::Waste => Some(&self.waste),
            StackId::Foundation(i) => self.foundations.get(i as usize),
            StackId::Tableau(i) => self.tableaus.get(i as usize),
        }
    }

    /// Every card with the stack holding it.
    pub fn iter_cards(&self) -> impl Iterator<Item = (StackId, &Card)> + '_ {
        StackId::all().flat_map(move |id| {
            self.pile(id)
                .into_iter()
                .flat_map(move |pile| pile.iter().map(move |card| (id, card)))
        })
    }

    /// Total number of cards across all stacks.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        StackId::all().filter_map(|id| self.pile(id)).map(Pile::len).sum()
    }

    /// Check that this layout could occur in play.
    ///
    /// - exactly 52 distinct cards
    /// - deck face-down, waste face-up
    /// - foundations single-suit, Ace upward, no gaps
    /// - each tableau: face-down cards strictly below a non-empty face-up
    ///   run that alternates color and descends in rank
    pub fn validate(&self) -> Result<(), LayoutError> {
        let mut seen: FxHashSet<CardId> = FxHashSet::default();
        for (_, card) in self.iter_cards() {
            if !seen.insert(card.id()) {
                return Err(LayoutError::DuplicateCard(card.id()));
            }
        }
        if seen.len() != DECK_SIZE {
            return Err(LayoutError::CardCount { found: seen.len() });
        }

        if let Some(card) = self.deck.pile().iter().find(|c| c.is_face_up()) {
            return Err(LayoutError::FaceUpInDeck(card.id()));
        }
        if let Some(card) = self.waste.iter().find(|c| !c.is_face_up()) {
            return Err(LayoutError::FaceDownInWaste(card.id()));
        }

        for (pile, id) in self.foundations.iter().zip(StackId::foundations()) {
            if !is_valid_foundation(pile) {
                return Err(LayoutError::InvalidFoundation(id));
            }
        }

        for (pile, id) in self.tableaus.iter().zip(StackId::tableaus()) {
            validate_tableau(pile, id)?;
        }

        Ok(())
    }
}

fn validate_tableau(pile: &Pile, id: StackId) -> Result<(), LayoutError> {
    if pile.is_empty() {
        return Ok(());
    }
    let start = pile.face_up_start();
    if start == pile.len() {
        return Err(LayoutError::HiddenTop(id));
    }
    if pile.iter().take(start).any(|c| c.is_face_up()) {
        return Err(LayoutError::FaceUpBelowHidden(id));
    }
    if !is_valid_run(pile, start) {
        return Err(LayoutError::InvalidRun(id));
    }
    Ok(())
}
