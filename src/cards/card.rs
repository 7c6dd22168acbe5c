//! Card identities.
//!
//! Every card on the table is a small integer. Ids `0..52` are the standard
//! deck laid out as `suit * 13 + rank`; ids `52..63` are sentinels, the
//! permanent placeholders that mark an otherwise empty pile.
//!
//! ## Rank numbering
//!
//! Rank 0 is the King, rank 1 the Ace, 2..=10 the pips, 11 the Jack and
//! 12 the Queen. Adjacency is cyclic, so King and Ace are neighbours.

use serde::{Deserialize, Serialize};

/// Cards per suit.
pub const CARDS_PER_SUIT: u8 = 13;

/// Standard cards in the deck.
pub const NUM_CARDS: u8 = 4 * CARDS_PER_SUIT;

/// Sentinel placeholders: one per row, one per extra pile, one for the cellar.
pub const NUM_SENTINELS: u8 = 11;

/// Every identity on the table, sentinels included.
pub const NUM_IDS: u8 = NUM_CARDS + NUM_SENTINELS;

/// Card suit, in id order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Suit {
    Clubs,
    Hearts,
    Spades,
    Diamonds,
}

impl Suit {
    /// All suits in id order.
    pub const ALL: [Suit; 4] = [Suit::Clubs, Suit::Hearts, Suit::Spades, Suit::Diamonds];

    /// Suit index (0..4).
    #[must_use]
    pub const fn index(self) -> u8 {
        self as u8
    }
}

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Suit::Clubs => "clubs",
            Suit::Hearts => "hearts",
            Suit::Spades => "spades",
            Suit::Diamonds => "diamonds",
        };
        f.write_str(name)
    }
}

/// Identity of a card or sentinel.
///
/// ```
/// use cellar_solitaire::cards::{CardId, Suit};
///
/// let king = CardId::from_parts(Suit::Hearts, 0);
/// let ace = CardId::from_parts(Suit::Hearts, 1);
///
/// assert!(king.fits(ace));
/// assert!(ace.fits(king));
/// assert!(!king.fits(king));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CardId(pub u8);

impl CardId {
    /// Create a card ID.
    ///
    /// Panics if `id` is outside `0..63`.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        assert!(id < NUM_IDS, "card id out of range");
        Self(id)
    }

    /// Build a standard card from suit and rank.
    #[must_use]
    pub const fn from_parts(suit: Suit, rank: u8) -> Self {
        assert!(rank < CARDS_PER_SUIT, "rank out of range");
        Self(suit.index() * CARDS_PER_SUIT + rank)
    }

    /// The `n`-th sentinel (0..11).
    #[must_use]
    pub const fn sentinel(n: u8) -> Self {
        assert!(n < NUM_SENTINELS, "sentinel index out of range");
        Self(NUM_CARDS + n)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u8 {
        self.0
    }

    /// Is this a sentinel rather than a playing card?
    #[must_use]
    pub const fn is_sentinel(self) -> bool {
        self.0 >= NUM_CARDS
    }

    /// Suit of a playing card, `None` for sentinels.
    #[must_use]
    pub const fn suit(self) -> Option<Suit> {
        if self.is_sentinel() {
            return None;
        }
        Some(Suit::ALL[(self.0 / CARDS_PER_SUIT) as usize])
    }

    /// Rank of a playing card (0 = King, 1 = Ace, ... 12 = Queen).
    #[must_use]
    pub const fn rank(self) -> Option<u8> {
        if self.is_sentinel() {
            return None;
        }
        Some(self.0 % CARDS_PER_SUIT)
    }

    /// Same suit and cyclically adjacent rank, in either direction.
    ///
    /// Symmetric and irreflexive. Sentinels fit nothing.
    #[must_use]
    pub const fn fits(self, other: CardId) -> bool {
        if self.is_sentinel() || other.is_sentinel() {
            return false;
        }
        self.0 / CARDS_PER_SUIT == other.0 / CARDS_PER_SUIT
            && ((self.0 + 1) % CARDS_PER_SUIT == other.0 % CARDS_PER_SUIT
                || (other.0 + 1) % CARDS_PER_SUIT == self.0 % CARDS_PER_SUIT)
    }

    /// Iterate the 52 standard cards in id order.
    pub fn deck() -> impl Iterator<Item = CardId> {
        (0..NUM_CARDS).map(CardId)
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (self.rank(), self.suit()) {
            (Some(rank), Some(suit)) => {
                let rank = match rank {
                    0 => "king".to_string(),
                    1 => "ace".to_string(),
                    11 => "jack".to_string(),
                    12 => "queen".to_string(),
                    n => n.to_string(),
                };
                write!(f, "{rank} of {suit}")
            }
            _ => write!(f, "Sentinel({})", self.0 - NUM_CARDS),
        }
    }
}
