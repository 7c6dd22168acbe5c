//! Pile addressing: which pile (`Place`) and which suffix of it (`Range`).

use serde::{Deserialize, Serialize};

use crate::cards::CardId;

/// Number of row piles.
pub const NUM_ROWS: usize = 8;

/// Number of extra (holding) piles.
pub const NUM_EXTRAS: usize = 2;

/// Number of foundation piles, one per suit.
pub const NUM_FOUNDATIONS: usize = 4;

/// A pile on the table.
///
/// Equality compares the kind and then the index. There is only one cellar.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Place {
    /// Primary play pile, `0..8`.
    Row(u8),
    /// Holding pile, `0..2`. Only its top card moves.
    Extra(u8),
    /// Single-card overflow slot.
    Cellar,
    /// Completion pile, `0..4`.
    Foundation(u8),
}

impl Place {
    /// Every place, rows first, in selection priority order
    /// (higher row index first, then extras, cellar, foundations).
    pub fn priority_order() -> impl Iterator<Item = Place> {
        (0..NUM_ROWS as u8)
            .rev()
            .map(Place::Row)
            .chain((0..NUM_EXTRAS as u8).rev().map(Place::Extra))
            .chain(std::iter::once(Place::Cellar))
            .chain((0..NUM_FOUNDATIONS as u8).map(Place::Foundation))
    }

    /// Rank of this place in [`Place::priority_order`]; lower is tried first.
    #[must_use]
    pub fn priority(self) -> usize {
        match self {
            Place::Row(i) => NUM_ROWS - 1 - i as usize,
            Place::Extra(i) => NUM_ROWS + NUM_EXTRAS - 1 - i as usize,
            Place::Cellar => NUM_ROWS + NUM_EXTRAS,
            Place::Foundation(i) => NUM_ROWS + NUM_EXTRAS + 1 + i as usize,
        }
    }

    /// Is the index within bounds for its kind?
    #[must_use]
    pub fn is_valid(self) -> bool {
        match self {
            Place::Row(i) => (i as usize) < NUM_ROWS,
            Place::Extra(i) => (i as usize) < NUM_EXTRAS,
            Place::Cellar => true,
            Place::Foundation(i) => (i as usize) < NUM_FOUNDATIONS,
        }
    }
}

impl std::fmt::Display for Place {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Place::Row(i) => write!(f, "Row({i})"),
            Place::Extra(i) => write!(f, "Extra({i})"),
            Place::Cellar => write!(f, "Cellar"),
            Place::Foundation(i) => write!(f, "Foundation({i})"),
        }
    }
}

/// A contiguous slice `[begin, end)` of one pile.
///
/// Ranges are plain indices. They describe the pile as it was when the range
/// was produced; the engine re-checks them against the board before use.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Range {
    pub place: Place,
    pub begin: usize,
    pub end: usize,
}

impl Range {
    /// Create a range.
    #[must_use]
    pub fn new(place: Place, begin: usize, end: usize) -> Self {
        debug_assert!(begin <= end);
        Self { place, begin, end }
    }

    /// Number of cards covered; 0 for an inverted range.
    #[must_use]
    pub fn size(&self) -> usize {
        self.end.saturating_sub(self.begin)
    }

    /// Does the range cover pile index `index`?
    #[must_use]
    pub fn contains(&self, index: usize) -> bool {
        (self.begin..self.end).contains(&index)
    }
}

/// Every adjacent pair fits. Trivially true for zero or one card.
#[must_use]
pub fn is_run(cards: &[CardId]) -> bool {
    cards.windows(2).all(|pair| pair[0].fits(pair[1]))
}
