//! Move and undo accounting.

use serde::{Deserialize, Serialize};

use crate::rules::Move;

/// Counters kept alongside the move history.
///
/// Every `register_move` has an exact inverse in `register_undo`, so the
/// counters after N moves and N undos equal the counters before. The one
/// exception is `used_undo`, which never resets within a game.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UndoTracker {
    /// Moves made, minus moves undone.
    pub moves: u32,
    /// Physical card transfers, see [`Move::weight`].
    pub real_moves: u32,
    /// Undos since the last move.
    pub consecutive_undos: u32,
    /// Set once a streak exceeds the allowance.
    pub used_undo: bool,
}

impl UndoTracker {
    /// Fresh counters for a new game.
    pub fn new() -> Self {
        Self::default()
    }

    /// Charge a move and end any undo streak.
    pub fn register_move(&mut self, mv: &Move) {
        self.moves += 1;
        self.real_moves += mv.weight();
        self.consecutive_undos = 0;
    }

    /// Refund a move. The game counts as "undo used" once more than
    /// `allowance` undos happen back to back.
    pub fn register_undo(&mut self, mv: &Move, allowance: u8) {
        debug_assert!(self.moves > 0, "undo without a registered move");
        self.moves -= 1;
        self.real_moves -= mv.weight();
        self.consecutive_undos += 1;
        if self.consecutive_undos > u32::from(allowance) {
            self.used_undo = true;
        }
    }

    /// The count the statistics use.
    #[must_use]
    pub fn move_count(&self, count_real_moves: bool) -> u32 {
        if count_real_moves {
            self.real_moves
        } else {
            self.moves
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Place;

    fn run_move(size: usize, reversed: bool) -> Move {
        Move { from: Place::Row(0), size, to: Place::Row(1), reversed }
    }

    #[test]
    fn test_register_move() {
        let mut tracker = UndoTracker::new();
        tracker.register_move(&run_move(1, false));
        tracker.register_move(&run_move(3, false));
        tracker.register_move(&run_move(3, true));

        assert_eq!(tracker.moves, 3);
        assert_eq!(tracker.real_moves, 1 + 6 + 3);
        assert_eq!(tracker.move_count(true), 10);
        assert_eq!(tracker.move_count(false), 3);
    }

    #[test]
    fn test_undo_is_inverse() {
        let mut tracker = UndoTracker::new();
        let moves = [run_move(2, false), run_move(1, false), run_move(4, true)];
        for mv in &moves {
            tracker.register_move(mv);
        }
        for mv in moves.iter().rev() {
            tracker.register_undo(mv, u8::MAX);
        }

        assert_eq!(tracker.moves, 0);
        assert_eq!(tracker.real_moves, 0);
        assert!(!tracker.used_undo);
    }

    #[test]
    fn test_undo_streak_allowance() {
        let mv = run_move(1, false);
        let mut tracker = UndoTracker::new();
        for _ in 0..3 {
            tracker.register_move(&mv);
        }

        tracker.register_undo(&mv, 2);
        tracker.register_undo(&mv, 2);
        assert!(!tracker.used_undo);

        tracker.register_undo(&mv, 2);
        assert!(tracker.used_undo);
    }

    #[test]
    fn test_move_resets_streak() {
        let mv = run_move(1, false);
        let mut tracker = UndoTracker::new();
        tracker.register_move(&mv);
        tracker.register_move(&mv);

        tracker.register_undo(&mv, 1);
        tracker.register_move(&mv);
        assert_eq!(tracker.consecutive_undos, 0);
        tracker.register_undo(&mv, 1);
        assert!(!tracker.used_undo);
    }

    #[test]
    fn test_used_undo_is_sticky() {
        let mv = run_move(1, false);
        let mut tracker = UndoTracker::new();
        tracker.register_move(&mv);
        tracker.register_undo(&mv, 0);
        assert!(tracker.used_undo);

        tracker.register_move(&mv);
        assert!(tracker.used_undo);
    }
}
