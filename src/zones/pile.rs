//! Ordered card piles.
//!
//! Every stack in the game (deck, waste, foundations, tableaus) is a `Pile`:
//! an ordered sequence where index 0 is the bottom card and the last index
//! is the top. Storage is an `im` persistent vector so that cloning a pile
//! for a snapshot is O(1).
//!
//! ```
//! use klondike_engine::core::{Card, CardId};
//! use klondike_engine::zones::Pile;
//!
//! let nine: CardId = "9♣".parse().unwrap();
//! let eight: CardId = "8♥".parse().unwrap();
//! let pile: Pile = [Card::face_down(nine), Card::face_up(eight)].into_iter().collect();
//!
//! assert_eq!(pile.top().map(|c| c.id()), Some(eight));
//! assert_eq!(pile.position(nine), Some(0));
//! assert_eq!(pile.face_up_start(), 1);
//! ```
//!
//! Mutation is crate-private: only `GameState` operations move cards.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::core::{Card, CardId};

/// An ordered pile of cards, bottom first.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pile {
    cards: Vector<Card>,
}

impl Pile {
    /// Create an empty pile.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of cards in the pile.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Top card (last in order).
    #[must_use]
    pub fn top(&self) -> Option<&Card> {
        self.cards.back()
    }

    /// Card at `index` (0 = bottom).
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
    }

    /// Iterate bottom to top.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Card> + ExactSizeIterator + '_ {
        self.cards.iter()
    }

    /// Copy the cards out, bottom to top.
    #[must_use]
    pub fn to_vec(&self) -> Vec<Card> {
        self.cards.iter().copied().collect()
    }

    /// Card ids, bottom to top.
    #[must_use]
    pub fn ids(&self) -> Vec<CardId> {
        self.cards.iter().map(Card::id).collect()
    }

    /// Index of the card with the given identity.
    #[must_use]
    pub fn position(&self, id: CardId) -> Option<usize> {
        self.cards.iter().position(|c| c.id() == id)
    }

    /// Whether the card with the given identity is in this pile.
    #[must_use]
    pub fn contains(&self, id: CardId) -> bool {
        self.position(id).is_some()
    }

    /// Put a card on top.
    pub(crate) fn push(&mut self, card: Card) {
        self.cards.push_back(card);
    }

    /// Remove the top card.
    pub(crate) fn pop(&mut self) -> Option<Card> {
        self.cards.pop_back()
    }

    /// Detach the cards from `index` to the top, preserving their order.
    ///
    /// `index` must be `<= len()`.
    pub(crate) fn split_off(&mut self, index: usize) -> Pile {
        Pile {
            cards: self.cards.split_off(index),
        }
    }

    /// Append another pile on top of this one, preserving its order.
    pub(crate) fn append(&mut self, other: Pile) {
        self.cards.append(other.cards);
    }

    /// Remove every card, returning them as a pile.
    pub(crate) fn take(&mut self) -> Pile {
        std::mem::take(self)
    }

    /// Turn the top card face-up if it is face-down.
    ///
    /// Returns the card if it was flipped.
    pub(crate) fn reveal_top(&mut self) -> Option<Card> {
        let top = self.cards.back_mut()?;
        if top.is_face_up() {
            return None;
        }
        top.turn_up();
        Some(*top)
    }

    /// Index of the lowest face-up card such that every card above it is
    /// face-up too. `len()` when the top card is face-down or the pile is
    /// empty.
    #[must_use]
    pub fn face_up_start(&self) -> usize {
        let face_up = self.cards.iter().rev().take_while(|c| c.is_face_up()).count();
        self.len() - face_up
    }
}

impl FromIterator<Card> for Pile {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self {
            cards: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Pile {
    type Item = &'a Card;
    type IntoIter = im::vector::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn up(s: &str) -> Card {
        Card::face_up(s.parse().unwrap())
    }

    fn down(s: &str) -> Card {
        Card::face_down(s.parse().unwrap())
    }

    #[test]
    fn test_push_pop_top() {
        let mut pile = Pile::new();
        assert!(pile.is_empty());
        assert_eq!(pile.top(), None);

        pile.push(up("A♠"));
        pile.push(up("2♠"));

        assert_eq!(pile.len(), 2);
        assert_eq!(pile.top(), Some(&up("2♠")));
        assert_eq!(pile.pop(), Some(up("2♠")));
        assert_eq!(pile.pop(), Some(up("A♠")));
        assert_eq!(pile.pop(), None);
    }

    #[test]
    fn test_split_off_preserves_order() {
        let mut pile: Pile = [down("K♣"), up("Q♥"), up("J♠"), up("10♦")].into_iter().collect();

        let run = pile.split_off(1);

        assert_eq!(pile.to_vec(), vec![down("K♣")]);
        assert_eq!(run.to_vec(), vec![up("Q♥"), up("J♠"), up("10♦")]);
    }

    #[test]
    fn test_append() {
        let mut a: Pile = [up("K♣")].into_iter().collect();
        let b: Pile = [up("Q♥"), up("J♠")].into_iter().collect();

        a.append(b);

        assert_eq!(a.ids(), vec!["K♣".parse().unwrap(), "Q♥".parse().unwrap(), "J♠".parse().unwrap()]);
    }

    #[test]
    fn test_reveal_top() {
        let mut pile: Pile = [down("3♦"), down("4♣")].into_iter().collect();

        assert_eq!(pile.reveal_top(), Some(up("4♣")));
        // Already face-up: nothing to reveal
        assert_eq!(pile.reveal_top(), None);
        assert_eq!(pile.get(0), Some(&down("3♦")));

        let mut empty = Pile::new();
        assert_eq!(empty.reveal_top(), None);
    }

    #[test]
    fn test_position_and_contains() {
        let pile: Pile = [down("3♦"), up("4♣")].into_iter().collect();
        assert_eq!(pile.position("4♣".parse().unwrap()), Some(1));
        assert!(pile.contains("3♦".parse().unwrap()));
        assert!(!pile.contains("5♣".parse().unwrap()));
    }

    #[test]
    fn test_face_up_start() {
        let pile: Pile = [down("3♦"), down("9♣"), up("8♥"), up("7♠")].into_iter().collect();
        assert_eq!(pile.face_up_start(), 2);

        let hidden: Pile = [up("3♦"), down("9♣")].into_iter().collect();
        assert_eq!(hidden.face_up_start(), 2);

        assert_eq!(Pile::new().face_up_start(), 0);
    }

    #[test]
    fn test_take_empties() {
        let mut pile: Pile = [up("3♦")].into_iter().collect();
        let taken = pile.take();
        assert!(pile.is_empty());
        assert_eq!(taken.len(), 1);
    }

    #[test]
    fn test_clone_is_independent() {
        let mut pile: Pile = [up("3♦")].into_iter().collect();
        let snapshot = pile.clone();
        pile.push(up("4♦"));
        assert_eq!(snapshot.len(), 1);
        assert_eq!(pile.len(), 2);
    }
}
