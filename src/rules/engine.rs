//! Placement and lifting rules.
//!
//! Pure predicates over card and pile snapshots. Nothing here mutates
//! state; `GameState` consults these before touching any pile.
//!
//! - Foundation: empty takes an Ace; otherwise same suit, one rank higher.
//! - Tableau: empty takes a King; otherwise opposite color, one rank lower.
//! - Lifting: Waste and Foundation give up only their top card; a Tableau
//!   gives up a face-up card together with every card above it.

use crate::core::{CardId, Rank, RunMoves, NUM_FOUNDATIONS, NUM_RANKS};
use crate::zones::Pile;

/// Fixed rank index (A=0 .. K=12) used for all sequencing checks.
#[must_use]
pub fn rank_index(rank: Rank) -> u8 {
    rank.index()
}

/// Can `card` be placed on a foundation whose top card is `top`?
#[must_use]
pub fn can_move_to_foundation(card: CardId, top: Option<CardId>) -> bool {
    match top {
        None => card.rank == Rank::Ace,
        Some(top) => card.suit == top.suit && rank_index(card.rank) == rank_index(top.rank) + 1,
    }
}

/// Can `card` be placed on a tableau whose top card is `top`?
#[must_use]
pub fn can_move_to_tableau(card: CardId, top: Option<CardId>) -> bool {
    match top {
        None => card.rank == Rank::King,
        Some(top) => card.color() != top.color() && rank_index(card.rank) + 1 == rank_index(top.rank),
    }
}

/// Can the cards from `index` to the top of a tableau be lifted as a unit?
///
/// Every lifted card must be face-up. Under `RunMoves::SingleCard` only the
/// top card may be lifted.
#[must_use]
pub fn can_lift_from_tableau(pile: &Pile, index: usize, policy: RunMoves) -> bool {
    if index >= pile.len() {
        return false;
    }
    if policy == RunMoves::SingleCard && index + 1 != pile.len() {
        return false;
    }
    pile.iter().skip(index).all(|c| c.is_face_up())
}

/// Does `pile` form a valid tableau run: face-up, alternating colors,
/// each card one rank below the one beneath it?
#[must_use]
pub fn is_valid_run(pile: &Pile, from: usize) -> bool {
    let mut prev: Option<CardId> = None;
    for card in pile.iter().skip(from) {
        if !card.is_face_up() {
            return false;
        }
        if let Some(below) = prev {
            if !can_move_to_tableau(card.id(), Some(below)) {
                return false;
            }
        }
        prev = Some(card.id());
    }
    true
}

/// Is `pile` a valid foundation: one suit, Ace upward with no gaps, face-up?
#[must_use]
pub fn is_valid_foundation(pile: &Pile) -> bool {
    let mut prev: Option<CardId> = None;
    for card in pile.iter() {
        if !card.is_face_up() || !can_move_to_foundation(card.id(), prev) {
            return false;
        }
        prev = Some(card.id());
    }
    true
}

/// A game is won when every foundation holds a full suit.
#[must_use]
pub fn is_won<'a, I>(foundations: I) -> bool
where
    I: IntoIterator<Item = &'a Pile>,
{
    let mut count = 0;
    for pile in foundations {
        if pile.len() != NUM_RANKS {
            return false;
        }
        count += 1;
    }
    count == NUM_FOUNDATIONS
}
