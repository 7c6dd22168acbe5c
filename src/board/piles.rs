//! The board: every pile on the table and the deal that fills them.
//!
//! ## Layout
//!
//! - 4 foundations, seeded with one card of the same rank in each suit
//! - 8 rows: sentinel + 5 dealt cards
//! - 2 extra piles: sentinel + 4 dealt cards
//! - the cellar: sentinel alone
//!
//! Every non-foundation pile keeps its sentinel at index 0 for the whole
//! game, so a pile of length 1 is vacant. The top of a pile is the end of
//! its vector.

use log::info;
use smallvec::SmallVec;

use super::place::{Place, Range, NUM_EXTRAS, NUM_FOUNDATIONS, NUM_ROWS};
use crate::cards::{CardId, CARDS_PER_SUIT, NUM_IDS, NUM_SENTINELS};
use crate::core::GameRng;

/// Cards dealt onto each row, sentinel not included.
pub const ROW_DEAL: usize = 5;

/// Cards dealt onto each extra pile, sentinel not included.
pub const EXTRA_DEAL: usize = 4;

/// The cellar holds its sentinel plus at most one card.
pub const CELLAR_CAPACITY: usize = 2;

/// Ordered cards of one pile. Index 0 is the bottom.
pub type Pile = SmallVec<[CardId; 16]>;

/// Every pile on the table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    foundations: [Pile; NUM_FOUNDATIONS],
    rows: [Pile; NUM_ROWS],
    extras: [Pile; NUM_EXTRAS],
    cellar: Pile,
}

impl Board {
    /// Shuffle a full deck and deal it.
    ///
    /// The foundation rank is the rank of the top card of the shuffled deck;
    /// that card and its three siblings seed the foundations in suit order.
    /// The remaining cards are dealt from the top of the deck to rows 0..4,
    /// extra 0, rows 4..8, extra 1. Sentinel ids follow the same order and
    /// the last one goes to the cellar.
    #[must_use]
    pub fn deal(rng: &mut GameRng) -> Self {
        let mut deck: Vec<CardId> = CardId::deck().collect();
        rng.shuffle(&mut deck);

        let seed_rank = deck.last().map_or(0, |c| c.raw() % CARDS_PER_SUIT);
        deck.retain(|c| c.raw() % CARDS_PER_SUIT != seed_rank);

        let foundations: [Pile; NUM_FOUNDATIONS] = std::array::from_fn(|suit| {
            let mut pile = Pile::new();
            pile.push(CardId::new(suit as u8 * CARDS_PER_SUIT + seed_rank));
            pile
        });

        let mut sentinels = (0..NUM_SENTINELS).map(CardId::sentinel);
        let mut deal_pile = |count: usize| {
            let mut pile = Pile::new();
            pile.push(sentinels.next().expect("one sentinel per pile"));
            for _ in 0..count {
                pile.push(deck.pop().expect("deck holds exactly the dealt cards"));
            }
            pile
        };

        let mut rows: [Pile; NUM_ROWS] = Default::default();
        for row in rows.iter_mut().take(NUM_ROWS / 2) {
            *row = deal_pile(ROW_DEAL);
        }
        let extra0 = deal_pile(EXTRA_DEAL);
        for row in rows.iter_mut().skip(NUM_ROWS / 2) {
            *row = deal_pile(ROW_DEAL);
        }
        let extra1 = deal_pile(EXTRA_DEAL);
        let cellar = deal_pile(0);
        debug_assert!(deck.is_empty());

        let board = Self {
            foundations,
            rows,
            extras: [extra0, extra1],
            cellar,
        };
        board.assert_conservation();
        info!("dealt board, seed {}, foundation rank {}", rng.seed(), seed_rank);
        board
    }

    /// Build a board from explicit piles.
    ///
    /// Returns `None` unless every one of the 63 ids appears exactly once,
    /// every row, extra pile and the cellar starts with a sentinel, no
    /// foundation holds a sentinel, and the cellar holds at most two ids.
    #[must_use]
    pub fn from_piles(
        foundations: [Vec<CardId>; NUM_FOUNDATIONS],
        rows: [Vec<CardId>; NUM_ROWS],
        extras: [Vec<CardId>; NUM_EXTRAS],
        cellar: Vec<CardId>,
    ) -> Option<Self> {
        let board = Self {
            foundations: foundations.map(Pile::from_vec),
            rows: rows.map(Pile::from_vec),
            extras: extras.map(Pile::from_vec),
            cellar: Pile::from_vec(cellar),
        };

        let sentinel_based = board
            .rows
            .iter()
            .chain(board.extras.iter())
            .chain(std::iter::once(&board.cellar))
            .all(|pile| {
                pile.first().is_some_and(|c| c.is_sentinel())
                    && pile[1..].iter().all(|c| !c.is_sentinel())
            });
        let foundations_ok = board
            .foundations
            .iter()
            .all(|pile| !pile.is_empty() && pile.iter().all(|c| !c.is_sentinel()));

        (sentinel_based
            && foundations_ok
            && board.cellar.len() <= CELLAR_CAPACITY
            && board.ids_exactly_once())
        .then_some(board)
    }

    /// Cards of a pile, bottom first.
    #[must_use]
    pub fn pile(&self, place: Place) -> &Pile {
        match place {
            Place::Row(i) => &self.rows[i as usize],
            Place::Extra(i) => &self.extras[i as usize],
            Place::Cellar => &self.cellar,
            Place::Foundation(i) => &self.foundations[i as usize],
        }
    }

    /// Mutable access to a pile.
    pub fn pile_mut(&mut self, place: Place) -> &mut Pile {
        match place {
            Place::Row(i) => &mut self.rows[i as usize],
            Place::Extra(i) => &mut self.extras[i as usize],
            Place::Cellar => &mut self.cellar,
            Place::Foundation(i) => &mut self.foundations[i as usize],
        }
    }

    /// Top card of a pile.
    #[must_use]
    pub fn top(&self, place: Place) -> Option<CardId> {
        self.pile(place).last().copied()
    }

    /// Is `range` a non-empty suffix of its pile right now?
    #[must_use]
    pub fn is_current(&self, range: &Range) -> bool {
        range.place.is_valid() && range.begin < range.end && range.end == self.pile(range.place).len()
    }

    /// Rows holding only their sentinel.
    #[must_use]
    pub fn num_vacant_rows(&self) -> usize {
        self.rows.iter().filter(|row| row.len() == 1).count()
    }

    /// Extra piles holding only their sentinel.
    #[must_use]
    pub fn num_vacant_extra(&self) -> usize {
        self.extras.iter().filter(|pile| pile.len() == 1).count()
    }

    /// Number of ids in the cellar, sentinel included.
    #[must_use]
    pub fn cellar_len(&self) -> usize {
        self.cellar.len()
    }

    /// Total ids on the table. Always 63.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.all_piles().map(|pile| pile.len()).sum()
    }

    /// Panics if the card count conservation law is broken.
    pub fn assert_conservation(&self) {
        assert!(
            self.ids_exactly_once(),
            "card conservation violated: {} ids on the table",
            self.total_cards()
        );
        assert!(
            self.cellar.len() <= CELLAR_CAPACITY,
            "cellar holds {} ids",
            self.cellar.len()
        );
    }

    fn all_piles(&self) -> impl Iterator<Item = &Pile> {
        self.foundations
            .iter()
            .chain(self.rows.iter())
            .chain(self.extras.iter())
            .chain(std::iter::once(&self.cellar))
    }

    fn ids_exactly_once(&self) -> bool {
        let mut seen = 0u64;
        for card in self.all_piles().flatten() {
            let bit = 1u64 << card.raw();
            if seen & bit != 0 {
                return false;
            }
            seen |= bit;
        }
        seen == (1u64 << NUM_IDS) - 1
    }
}
