//! Property-based tests for the rules engine.

use proptest::prelude::*;

use cellar_solitaire::board::Place;
use cellar_solitaire::cards::{CardId, CARDS_PER_SUIT, NUM_CARDS, NUM_IDS};
use cellar_solitaire::history::UndoTracker;
use cellar_solitaire::rules::{self, Location, Move};
use cellar_solitaire::{Config, Game, Range};

/// Every (from, to) pair `try_move` would accept, reversal not used.
fn legal_moves(game: &Game) -> Vec<(Range, Range)> {
    let board = game.board();
    let mut moves = Vec::new();
    for from_place in Place::priority_order() {
        for index in 0..board.pile(from_place).len() {
            let Some(from) = game.select(Location::new(from_place, index)) else {
                continue;
            };
            for to_place in Place::priority_order() {
                let len = board.pile(to_place).len();
                if len == 0 {
                    continue;
                }
                let to = Range::new(to_place, len - 1, len);
                if rules::is_legal(board, &from, &to, false) {
                    moves.push((from, to));
                }
            }
        }
    }
    moves
}

/// Strategy: a deal seed plus a list of move picks (indices modulo the
/// number of legal moves at that point).
fn playout_strategy() -> impl Strategy<Value = (u64, Vec<usize>)> {
    (any::<u64>(), prop::collection::vec(any::<usize>(), 0..40))
}

fn move_strategy() -> impl Strategy<Value = Move> {
    (0..8u8, 1..6usize, 0..8u8, any::<bool>()).prop_map(|(from, size, to, reversed)| Move {
        from: Place::Row(from),
        size,
        to: Place::Row(to),
        reversed,
    })
}

proptest! {
    // 1. fits is symmetric
    #[test]
    fn fits_symmetric(a in 0..NUM_IDS, b in 0..NUM_IDS) {
        let (a, b) = (CardId::new(a), CardId::new(b));
        prop_assert_eq!(a.fits(b), b.fits(a));
    }

    // 2. fits is irreflexive, and King fits Ace in every suit
    #[test]
    fn fits_cyclic(card in 0..NUM_CARDS) {
        let card = CardId::new(card);
        prop_assert!(!card.fits(card));

        let suit_base = card.raw() / CARDS_PER_SUIT * CARDS_PER_SUIT;
        prop_assert!(CardId::new(suit_base).fits(CardId::new(suit_base + 1)));
    }

    // 3. Conservation holds along any sequence of legal moves
    #[test]
    fn conservation((seed, picks) in playout_strategy()) {
        let mut game = Game::new(Config::default(), Some(seed));
        for pick in picks {
            let moves = legal_moves(&game);
            if moves.is_empty() {
                break;
            }
            let (from, to) = moves[pick % moves.len()];
            prop_assert!(game.try_move(&from, &to, false).is_applied());
            prop_assert_eq!(game.board().total_cards(), NUM_IDS as usize);
            prop_assert!(game.board().cellar_len() <= 2);
        }
    }

    // 4. A move followed by undo restores the board exactly
    #[test]
    fn move_undo_round_trip((seed, picks) in playout_strategy()) {
        let mut game = Game::new(Config::default(), Some(seed));
        for pick in picks {
            let moves = legal_moves(&game);
            if moves.is_empty() {
                break;
            }
            let (from, to) = moves[pick % moves.len()];
            let before = game.board().clone();

            prop_assert!(game.try_move(&from, &to, false).is_applied());
            prop_assert!(game.undo());
            prop_assert_eq!(game.board(), &before);

            prop_assert!(game.try_move(&from, &to, false).is_applied());
        }
    }

    // 5. N moves then N undos restore the counters
    #[test]
    fn accounting_inverse(moves in prop::collection::vec(move_strategy(), 0..30)) {
        let mut tracker = UndoTracker::new();
        for mv in &moves {
            tracker.register_move(mv);
        }
        for mv in moves.iter().rev() {
            tracker.register_undo(mv, 1);
        }
        prop_assert_eq!(tracker.moves, 0);
        prop_assert_eq!(tracker.real_moves, 0);
    }

    // 6. Undo streak: k undos are tolerated, the (k+1)-th is not
    #[test]
    fn undo_streak(allowance in 0..10u8) {
        let mv = Move { from: Place::Row(0), size: 1, to: Place::Cellar, reversed: false };
        let mut tracker = UndoTracker::new();
        for _ in 0..=allowance {
            tracker.register_move(&mv);
        }

        for _ in 0..allowance {
            tracker.register_undo(&mv, allowance);
        }
        prop_assert!(!tracker.used_undo);

        tracker.register_undo(&mv, allowance);
        prop_assert!(tracker.used_undo);
    }

    // 7. Reversal only applies to selectable runs, and is its own inverse
    #[test]
    fn reversal_involution((seed, picks) in playout_strategy()) {
        let mut game = Game::new(Config::default(), Some(seed));
        for pick in picks {
            let moves = legal_moves(&game);
            if moves.is_empty() {
                break;
            }
            let (from, to) = moves[pick % moves.len()];
            game.try_move(&from, &to, false);
        }

        let before = game.board().clone();
        let history = game.history().len();
        for place in Place::priority_order() {
            let len = before.pile(place).len();
            for index in 0..len {
                let range = Range::new(place, index, len);
                let selectable = range.size() > 1
                    && game.can_pick_up(&range)
                    && game.select(Location::new(place, index)) == Some(range);

                prop_assert_eq!(game.reverse_run(&range), selectable, "{:?}", range);
                if selectable {
                    prop_assert!(game.reverse_run(&range));
                }
                prop_assert_eq!(game.board(), &before);
                prop_assert_eq!(game.history().len(), history);
            }
        }
    }
}
