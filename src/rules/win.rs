//! Terminal-state check.

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::board::{Board, NUM_EXTRAS, NUM_ROWS};

/// Every row and extra pile vacant and nothing in the cellar.
#[must_use]
pub fn is_won(board: &Board) -> bool {
    board.num_vacant_rows() == NUM_ROWS && board.num_vacant_extra() == NUM_EXTRAS && board.cellar_len() == 1
}

/// Whole minutes and leftover seconds of a game.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElapsedTime {
    pub mins: u64,
    pub secs: u64,
}

impl From<Duration> for ElapsedTime {
    fn from(duration: Duration) -> Self {
        let total = duration.as_secs();
        Self {
            mins: total / 60,
            secs: total % 60,
        }
    }
}

impl fmt::Display for ElapsedTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{:02}", self.mins, self.secs)
    }
}

/// What the win detector reports when a game is won.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WinSummary {
    pub elapsed: ElapsedTime,
    /// `real_moves` or `moves`, per `count_real_moves`.
    pub moves: u32,
    pub used_undo: bool,
    /// Whether the win goes into the statistics store.
    pub credited: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Place;
    use crate::core::GameRng;

    /// Sweep every non-foundation card onto the foundations.
    fn cleared(seed: u64) -> Board {
        let mut board = Board::deal(&mut GameRng::new(seed));
        for place in Place::priority_order() {
            if matches!(place, Place::Foundation(_)) {
                continue;
            }
            let cards: Vec<_> = board.pile_mut(place).drain(1..).collect();
            board.pile_mut(Place::Foundation(0)).extend(cards);
        }
        board
    }

    #[test]
    fn test_fresh_deal_not_won() {
        assert!(!is_won(&Board::deal(&mut GameRng::new(1))));
    }

    #[test]
    fn test_cleared_board_is_won() {
        let board = cleared(1);
        board.assert_conservation();
        assert!(is_won(&board));
    }

    #[test]
    fn test_card_anywhere_blocks_win() {
        for place in [Place::Row(4), Place::Extra(1), Place::Cellar] {
            let mut board = cleared(2);
            let card = board.pile_mut(Place::Foundation(0)).pop().unwrap();
            board.pile_mut(place).push(card);
            assert!(!is_won(&board), "card on {place}");
        }
    }

    #[test]
    fn test_elapsed_time() {
        let elapsed = ElapsedTime::from(Duration::from_secs(125));
        assert_eq!(elapsed, ElapsedTime { mins: 2, secs: 5 });
        assert_eq!(elapsed.to_string(), "2:05");
    }
}
