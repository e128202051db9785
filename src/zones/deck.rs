//! The deck (stock): face-down cards waiting to be drawn.
//!
//! Cards are drawn from the top (end) of the pile. When the deck runs dry
//! the waste pile is turned over and becomes the new deck, in an order that
//! makes the next pass draw the same sequence of cards as the previous one.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::core::{Card, CardId};

use super::pile::Pile;

/// The undealt, undrawn cards. All face-down.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    cards: Pile,
}

impl Deck {
    /// Create an empty deck.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The full 52-card set, face-down, suit by suit from Ace to King.
    #[must_use]
    pub fn standard() -> Self {
        Self {
            cards: CardId::all().map(Card::face_down).collect(),
        }
    }

    /// A full deck shuffled with the given RNG.
    #[must_use]
    pub fn shuffled<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut deck = Self::standard();
        deck.shuffle(rng);
        deck
    }

    /// Build a deck from cards given bottom to top; the last card is drawn
    /// first. Cards are turned face-down.
    #[must_use]
    pub fn from_cards<I: IntoIterator<Item = Card>>(cards: I) -> Self {
        Self {
            cards: cards
                .into_iter()
                .map(|mut c| {
                    c.turn_down();
                    c
                })
                .collect(),
        }
    }

    /// Shuffle the remaining cards (Fisher-Yates).
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        use rand::seq::SliceRandom;

        let mut cards = self.cards.to_vec();
        cards.shuffle(rng);
        self.cards = cards.into_iter().collect();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// The cards, bottom to top (the top is drawn next).
    #[must_use]
    pub fn pile(&self) -> &Pile {
        &self.cards
    }

    /// Draw the top card and turn it face-up, ready for the waste pile.
    ///
    /// Returns `None` when the deck is empty; the caller should then recycle
    /// the waste pile.
    pub fn draw(&mut self) -> Option<Card> {
        let mut card = self.cards.pop()?;
        card.turn_up();
        Some(card)
    }

    /// Remove the top card without changing its face (used when dealing).
    pub(crate) fn deal(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Turn the waste pile over into the deck.
    ///
    /// Every waste card is turned face-down and the order is reversed, so the
    /// card drawn first before recycling is drawn first again. Any cards still
    /// in the deck stay on top and are drawn before the recycled ones. The
    /// waste pile is left empty.
    ///
    /// Returns the number of cards recycled.
    pub fn recycle_from_waste(&mut self, waste: &mut Pile) -> usize {
        let recycled = waste.take();
        let count = recycled.len();

        let mut cards: Pile = recycled
            .iter()
            .rev()
            .map(|c| {
                let mut c = *c;
                c.turn_down();
                c
            })
            .collect();
        cards.append(self.cards.take());
        self.cards = cards;

        count
    }
}
