//! Move validation and execution.
//!
//! A move transfers the source range, in its current order, onto the top of
//! the target pile. Legality:
//!
//! a. onto the vacant cellar: a single card that does not come from an
//!    extra pile;
//! b. onto a row or foundation whose top card fits the first moved card;
//! c. onto a vacant row: a single card, or any run while a second row is
//!    also vacant, or a run the player reversed beforehand.
//!
//! Orientation is the caller's business. A reversed move arrives with its
//! range already flipped in place (see [`reverse_run`]); the executor only
//! records the flag, which changes legality (rule c), move accounting and
//! how [`revert`] restores the source pile.

use serde::{Deserialize, Serialize};

use crate::board::{Board, Place, Range};
use crate::rules::selection::{can_pick_up, select, Location};

/// An executed transfer, as stored in the history.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub from: Place,
    pub size: usize,
    pub to: Place,
    pub reversed: bool,
}

impl Move {
    /// Physical card transfers charged for this move.
    ///
    /// A multi-card run moved without reversing costs two passes per card;
    /// anything else costs one per card.
    #[must_use]
    pub fn weight(&self) -> u32 {
        let size = self.size as u32;
        if self.size > 1 && !self.reversed {
            size * 2
        } else {
            size
        }
    }
}

/// Would moving `from` onto `to` be legal right now?
///
/// Besides the three rules this requires `from` to be a current, liftable
/// selection on a different pile than `to`.
#[must_use]
pub fn is_legal(board: &Board, from: &Range, to: &Range, reversed: bool) -> bool {
    if from.place == to.place || !to.place.is_valid() || !can_pick_up(board, from) {
        return false;
    }
    if select(board, Location::new(from.place, from.begin)) != Some(*from) {
        return false;
    }

    let first = board.pile(from.place)[from.begin];
    let Some(last) = board.top(to.place) else {
        return false;
    };
    let size = from.size();

    match to.place {
        Place::Cellar => last.is_sentinel() && size == 1 && !matches!(from.place, Place::Extra(_)),
        Place::Foundation(_) => last.fits(first),
        Place::Row(_) => {
            last.fits(first)
                || (last.is_sentinel() && (size == 1 || board.num_vacant_rows() >= 2 || reversed))
        }
        Place::Extra(_) => false,
    }
}

/// Append the source cards onto the target and truncate the source.
///
/// Does not check legality; pair with [`is_legal`].
pub fn apply(board: &mut Board, from: &Range, to: Place, reversed: bool) -> Move {
    let moved: Vec<_> = board.pile_mut(from.place).drain(from.begin..).collect();
    let size = moved.len();
    board.pile_mut(to).extend(moved);

    Move {
        from: from.place,
        size,
        to,
        reversed,
    }
}

/// Exact structural inverse of [`apply`].
///
/// The last `size` cards of the target go back onto the source. For a
/// reversed move they are taken from the top down, which restores the order
/// the run had before the player flipped it.
pub fn revert(board: &mut Board, mv: &Move) {
    let to = board.pile_mut(mv.to);
    let split = to.len() - mv.size;
    let mut moved: Vec<_> = to.drain(split..).collect();
    if mv.reversed {
        moved.reverse();
    }
    board.pile_mut(mv.from).extend(moved);
}

/// Flip a picked-up run in place.
///
/// Only a multi-card range that `select` would hand out and that could be
/// lifted. That limits it to row runs while a row is vacant; extra piles
/// and the cellar only ever select one card. Applying it twice restores
/// the original order.
pub fn reverse_run(board: &mut Board, range: &Range) -> bool {
    if range.size() < 2 || !can_pick_up(board, range) {
        return false;
    }
    if select(board, Location::new(range.place, range.begin)) != Some(*range) {
        return false;
    }
    board.pile_mut(range.place)[range.begin..range.end].reverse();
    true
}
