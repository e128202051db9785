//! Stack identifiers.
//!
//! The set of stacks is closed: one deck, one waste pile, four foundations
//! and seven tableau columns. Ids render as the strings the presentation
//! layer uses (`deck`, `waste`, `foundation-0`..`foundation-3`,
//! `tableau-0`..`tableau-6`) and parse back from them.
//!
//! ```
//! use klondike_engine::core::StackId;
//!
//! let id: StackId = "tableau-3".parse().unwrap();
//! assert_eq!(id, StackId::Tableau(3));
//! assert!(id.is_valid());
//! assert!(!StackId::Foundation(4).is_valid());
//! ```

use serde::{Deserialize, Serialize};

/// Number of foundation piles.
pub const NUM_FOUNDATIONS: usize = 4;
/// Number of tableau columns.
pub const NUM_TABLEAUS: usize = 7;

/// Identifier for one of the game's stacks.
///
/// Indices outside `0..NUM_FOUNDATIONS` / `0..NUM_TABLEAUS` are
/// representable but never refer to a stack; operations reject them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum StackId {
    Deck,
    Waste,
    Foundation(u8),
    Tableau(u8),
}

impl StackId {
    /// Every valid stack id: deck, waste, foundations, then tableaus.
    pub fn all() -> impl Iterator<Item = StackId> {
        [StackId::Deck, StackId::Waste]
            .into_iter()
            .chain(Self::foundations())
            .chain(Self::tableaus())
    }

    /// The four foundation ids in index order.
    pub fn foundations() -> impl Iterator<Item = StackId> {
        (0..NUM_FOUNDATIONS as u8).map(StackId::Foundation)
    }

    /// The seven tableau ids in index order.
    pub fn tableaus() -> impl Iterator<Item = StackId> {
        (0..NUM_TABLEAUS as u8).map(StackId::Tableau)
    }

    /// Whether the id names an existing stack.
    #[must_use]
    pub const fn is_valid(self) -> bool {
        match self {
            StackId::Deck | StackId::Waste => true,
            StackId::Foundation(i) => (i as usize) < NUM_FOUNDATIONS,
            StackId::Tableau(i) => (i as usize) < NUM_TABLEAUS,
        }
    }

    #[must_use]
    pub const fn is_foundation(self) -> bool {
        matches!(self, StackId::Foundation(_))
    }

    #[must_use]
    pub const fn is_tableau(self) -> bool {
        matches!(self, StackId::Tableau(_))
    }
}

impl std::fmt::Display for StackId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StackId::Deck => write!(f, "deck"),
            StackId::Waste => write!(f, "waste"),
            StackId::Foundation(i) => write!(f, "foundation-{}", i),
            StackId::Tableau(i) => write!(f, "tableau-{}", i),
        }
    }
}

/// Error returned when a stack id string is not recognized.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseStackIdError(String);

impl std::fmt::Display for ParseStackIdError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown stack id: {:?}", self.0)
    }
}

impl std::error::Error for ParseStackIdError {}

impl std::str::FromStr for StackId {
    type Err = ParseStackIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseStackIdError(s.to_string());
        let id = match s {
            "deck" => StackId::Deck,
            "waste" => StackId::Waste,
            _ => {
                let (kind, index) = s.split_once('-').ok_or_else(err)?;
                let index: u8 = index.parse().map_err(|_| err())?;
                match kind {
                    "foundation" => StackId::Foundation(index),
                    "tableau" => StackId::Tableau(index),
                    _ => return Err(err()),
                }
            }
        };
        if id.is_valid() {
            Ok(id)
        } else {
            Err(err())
        }
    }
}
