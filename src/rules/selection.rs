//! Selection resolver: which run at a location may be picked up or
//! targeted.
//!
//! The engine never sees screen coordinates. A rendering layer turns a
//! pointer position into the `Location`s of every card under it and hands
//! them over; the resolver picks the one that wins by priority and decides
//! whether it is a legal unit.

use serde::{Deserialize, Serialize};

use crate::board::{is_run, Board, Place, Range};

/// A card position: pile plus index within the pile (0 = bottom).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Location {
    pub place: Place,
    pub index: usize,
}

impl Location {
    /// Create a location.
    #[must_use]
    pub const fn new(place: Place, index: usize) -> Self {
        Self { place, index }
    }
}

/// Resolve a single location to a selectable range.
///
/// - Foundation, Cellar: only the top element, as a one-card range.
/// - Extra pile: only the top element, and never its sentinel.
/// - Row: any suffix of size 1, or a longer suffix that is a run while at
///   least one row is vacant.
///
/// An illegal location is `None`, not an error.
#[must_use]
pub fn select(board: &Board, location: Location) -> Option<Range> {
    let place = location.place;
    if !place.is_valid() {
        return None;
    }
    let pile = board.pile(place);
    let len = pile.len();
    if location.index >= len {
        return None;
    }
    let range = Range::new(place, location.index, len);

    match place {
        Place::Foundation(_) | Place::Cellar => (range.size() == 1).then_some(range),
        Place::Extra(_) => (range.size() == 1 && !pile[location.index].is_sentinel()).then_some(range),
        Place::Row(_) => {
            let legal = range.size() == 1
                || (board.num_vacant_rows() > 0 && is_run(&pile[location.index..]));
            legal.then_some(range)
        }
    }
}

/// Resolve overlapping hits in priority order.
///
/// Candidates are ordered rows (highest index first), extra piles, the
/// cellar, then foundations; within a pile the topmost card wins. Cards
/// inside `active` (the current selection) are skipped, as are extra-pile
/// sentinels, so the hit falls through to whatever lies beneath. The first
/// remaining candidate decides the result: if its range is illegal the
/// answer is `None` even when a lower-priority candidate would be legal.
#[must_use]
pub fn select_at(board: &Board, hits: &[Location], active: Option<&Range>) -> Option<Range> {
    let mut candidates: Vec<Location> = hits
        .iter()
        .copied()
        .filter(|loc| loc.place.is_valid() && loc.index < board.pile(loc.place).len())
        .filter(|loc| !active.is_some_and(|sel| sel.place == loc.place && sel.contains(loc.index)))
        .filter(|loc| !(matches!(loc.place, Place::Extra(_)) && board.pile(loc.place)[loc.index].is_sentinel()))
        .collect();
    candidates.sort_by_key(|loc| (loc.place.priority(), std::cmp::Reverse(loc.index)));

    candidates.first().and_then(|&loc| select(board, loc))
}

/// May this range start a drag?
///
/// Foundations never give cards back, sentinels never move, and the
/// cellar card may only be lifted while an extra pile is vacant.
#[must_use]
pub fn can_pick_up(board: &Board, range: &Range) -> bool {
    if !board.is_current(range) {
        return false;
    }
    let starts_on_card = board
        .pile(range.place)
        .get(range.begin)
        .is_some_and(|card| !card.is_sentinel());

    starts_on_card
        && match range.place {
            Place::Foundation(_) => false,
            Place::Cellar => board.num_vacant_extra() > 0,
            Place::Row(_) | Place::Extra(_) => true,
        }
}
