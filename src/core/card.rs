//! Card identity and face state.
//!
//! A `CardId` is the immutable (suit, rank) pair; exactly one of each of the
//! 52 ids exists in a game. A `Card` pairs an id with its mutable face-up
//! flag. Only the engine flips cards; the presentation layer sees them
//! through read-only accessors.
//!
//! ## Notation
//!
//! ```
//! use klondike_engine::core::{CardId, Rank, Suit};
//!
//! let id: CardId = "10♠".parse().unwrap();
//! assert_eq!(id, CardId::new(Suit::Spades, Rank::Ten));
//!
//! // ASCII suit letters work too
//! assert_eq!("kh".parse::<CardId>().unwrap().to_string(), "K♥");
//! ```

use serde::{Deserialize, Serialize};

/// Number of suits in the deck.
pub const NUM_SUITS: usize = 4;
/// Number of ranks per suit.
pub const NUM_RANKS: usize = 13;
/// Number of cards in a full game.
pub const DECK_SIZE: usize = NUM_SUITS * NUM_RANKS;

/// Card suit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Suit {
    Hearts,
    Diamonds,
    Clubs,
    Spades,
}

impl Suit {
    /// All suits in deck-construction order.
    pub const ALL: [Suit; NUM_SUITS] = [Suit::Hearts, Suit::Diamonds, Suit::Clubs, Suit::Spades];

    /// Color derived from the suit.
    #[must_use]
    pub const fn color(self) -> Color {
        match self {
            Suit::Hearts | Suit::Diamonds => Color::Red,
            Suit::Clubs | Suit::Spades => Color::Black,
        }
    }

    /// Unicode symbol for the suit.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Suit::Hearts => '♥',
            Suit::Diamonds => '♦',
            Suit::Clubs => '♣',
            Suit::Spades => '♠',
        }
    }

    fn from_symbol(c: char) -> Option<Self> {
        match c {
            '♥' | 'H' | 'h' => Some(Suit::Hearts),
            '♦' | 'D' | 'd' => Some(Suit::Diamonds),
            '♣' | 'C' | 'c' => Some(Suit::Clubs),
            '♠' | 'S' | 's' => Some(Suit::Spades),
            _ => None,
        }
    }
}

/// Card color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    Red,
    Black,
}

/// Card rank, ordered Ace (low) to King (high).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Rank {
    Ace,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
}

impl Rank {
    /// All ranks, Ace to King.
    pub const ALL: [Rank; NUM_RANKS] = [
        Rank::Ace,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
    ];

    /// Fixed index used for successor/predecessor checks (A=0 .. K=12).
    #[must_use]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Rank at the given index, or `None` past King.
    #[must_use]
    pub fn from_index(index: u8) -> Option<Self> {
        Self::ALL.get(index as usize).copied()
    }

    /// Short label: "A", "2".."10", "J", "Q", "K".
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Rank::Ace => "A",
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
        }
    }

    fn from_label(s: &str) -> Option<Self> {
        let rank = match s {
            "A" | "a" | "1" => Rank::Ace,
            "T" | "t" | "10" => Rank::Ten,
            "J" | "j" => Rank::Jack,
            "Q" | "q" => Rank::Queen,
            "K" | "k" => Rank::King,
            _ => {
                let n: u8 = s.parse().ok()?;
                if !(2..=9).contains(&n) {
                    return None;
                }
                return Self::from_index(n - 1);
            }
        };
        Some(rank)
    }
}

/// Identity of a card: one of the 52 (suit, rank) pairs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardId {
    pub suit: Suit,
    pub rank: Rank,
}

impl CardId {
    /// Create a card id.
    #[must_use]
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Self { suit, rank }
    }

    /// Color of this card.
    #[must_use]
    pub const fn color(self) -> Color {
        self.suit.color()
    }

    /// Iterate all 52 ids, suit by suit, Ace to King.
    pub fn all() -> impl Iterator<Item = CardId> {
        Suit::ALL
            .into_iter()
            .flat_map(|suit| Rank::ALL.into_iter().map(move |rank| CardId::new(suit, rank)))
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.rank.label(), self.suit.symbol())
    }
}

/// Error returned when a card string cannot be parsed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseCardError(String);

impl std::fmt::Display for ParseCardError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid card notation: {:?}", self.0)
    }
}

impl std::error::Error for ParseCardError {}

impl std::str::FromStr for CardId {
    type Err = ParseCardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseCardError(s.to_string());
        let trimmed = s.trim();
        let suit_char = trimmed.chars().next_back().ok_or_else(err)?;
        let suit = Suit::from_symbol(suit_char).ok_or_else(err)?;
        let rank_part = &trimmed[..trimmed.len() - suit_char.len_utf8()];
        let rank = Rank::from_label(rank_part).ok_or_else(err)?;
        Ok(CardId::new(suit, rank))
    }
}

/// A card with its face state.
///
/// Equality includes the face flag, so two snapshots compare equal only if
/// every card is in the same face state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    id: CardId,
    face_up: bool,
}

impl Card {
    /// Create a face-down card.
    #[must_use]
    pub const fn face_down(id: CardId) -> Self {
        Self { id, face_up: false }
    }

    /// Create a face-up card.
    #[must_use]
    pub const fn face_up(id: CardId) -> Self {
        Self { id, face_up: true }
    }

    #[must_use]
    pub const fn id(&self) -> CardId {
        self.id
    }

    #[must_use]
    pub const fn suit(&self) -> Suit {
        self.id.suit
    }

    #[must_use]
    pub const fn rank(&self) -> Rank {
        self.id.rank
    }

    #[must_use]
    pub const fn color(&self) -> Color {
        self.id.color()
    }

    #[must_use]
    pub const fn is_face_up(&self) -> bool {
        self.face_up
    }

    pub(crate) fn turn_up(&mut self) {
        self.face_up = true;
    }

    pub(crate) fn turn_down(&mut self) {
        self.face_up = false;
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.face_up {
            write!(f, "{}", self.id)
        } else {
            write!(f, "[{}]", self.id)
        }
    }
}
