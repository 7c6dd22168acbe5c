//! One deal: the board, its history and its counters.

use std::time::Instant;

use im::Vector;
use log::{debug, info};

use crate::board::{Board, Range};
use crate::core::{Config, GameRng};
use crate::history::UndoTracker;
use crate::rules::{self, ElapsedTime, Location, Move, WinSummary};

/// Result of [`Game::try_move`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Illegal; nothing changed.
    Rejected,
    /// Applied.
    Moved,
    /// Applied, and it won the game. Reported once per game.
    Won(WinSummary),
}

impl MoveOutcome {
    /// Did the board change?
    #[must_use]
    pub fn is_applied(&self) -> bool {
        !matches!(self, MoveOutcome::Rejected)
    }
}

/// A game in progress.
///
/// The board only changes through [`Game::try_move`], [`Game::undo`] and
/// [`Game::reverse_run`]. Cloning is cheap apart from the board itself;
/// the history is a persistent vector.
#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    history: Vector<Move>,
    tracker: UndoTracker,
    config: Config,
    seed: u64,
    started: Instant,
    win: Option<WinSummary>,
}

impl Game {
    /// Deal a new game. Without a seed one is drawn from the OS.
    #[must_use]
    pub fn new(config: Config, seed: Option<u64>) -> Self {
        let mut rng = seed.map_or_else(GameRng::from_entropy, GameRng::new);
        let board = Board::deal(&mut rng);
        Self::with_board(board, config, rng.seed())
    }

    /// Start from a prepared board.
    #[must_use]
    pub fn from_board(board: Board, config: Config) -> Self {
        board.assert_conservation();
        Self::with_board(board, config, 0)
    }

    fn with_board(board: Board, config: Config, seed: u64) -> Self {
        Self {
            board,
            history: Vector::new(),
            tracker: UndoTracker::new(),
            config,
            seed,
            started: Instant::now(),
            win: None,
        }
    }

    // === Queries ===

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Moves made and not undone, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<Move> {
        &self.history
    }

    #[must_use]
    pub fn tracker(&self) -> &UndoTracker {
        &self.tracker
    }

    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Seed of the deal; 0 for a prepared board.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Move count as configured (`count_real_moves`).
    #[must_use]
    pub fn move_count(&self) -> u32 {
        self.tracker.move_count(self.config.count_real_moves)
    }

    /// Time since the deal.
    #[must_use]
    pub fn elapsed(&self) -> ElapsedTime {
        self.started.elapsed().into()
    }

    #[must_use]
    pub fn is_won(&self) -> bool {
        self.win.is_some()
    }

    /// The summary produced when the game was won.
    #[must_use]
    pub fn win_summary(&self) -> Option<&WinSummary> {
        self.win.as_ref()
    }

    // === Selection ===

    /// See [`rules::select`].
    #[must_use]
    pub fn select(&self, location: Location) -> Option<Range> {
        rules::select(&self.board, location)
    }

    /// See [`rules::select_at`].
    #[must_use]
    pub fn select_at(&self, hits: &[Location], active: Option<&Range>) -> Option<Range> {
        rules::select_at(&self.board, hits, active)
    }

    /// See [`rules::can_pick_up`].
    #[must_use]
    pub fn can_pick_up(&self, range: &Range) -> bool {
        rules::can_pick_up(&self.board, range)
    }

    // === Commands ===

    /// Flip a picked-up run in place. See [`rules::reverse_run`].
    pub fn reverse_run(&mut self, range: &Range) -> bool {
        rules::reverse_run(&mut self.board, range)
    }

    /// Move `from` onto `to`. `reversed` says the caller flipped `from`
    /// with [`Game::reverse_run`] beforehand.
    pub fn try_move(&mut self, from: &Range, to: &Range, reversed: bool) -> MoveOutcome {
        if !rules::is_legal(&self.board, from, to, reversed) {
            debug!("rejected {} -> {}", from.place, to.place);
            return MoveOutcome::Rejected;
        }

        let mv = rules::apply(&mut self.board, from, to.place, reversed);
        self.board.assert_conservation();
        self.history.push_back(mv);
        self.tracker.register_move(&mv);
        debug!("moved {} cards {} -> {}", mv.size, mv.from, mv.to);

        match self.check_win() {
            Some(summary) => MoveOutcome::Won(summary),
            None => MoveOutcome::Moved,
        }
    }

    /// Take back the last move. False if there is none.
    pub fn undo(&mut self) -> bool {
        let Some(mv) = self.history.pop_back() else {
            return false;
        };
        self.tracker.register_undo(&mv, self.config.undo_allowance);
        rules::revert(&mut self.board, &mv);
        self.board.assert_conservation();
        debug!(
            "undid {} -> {}, streak {}",
            mv.from, mv.to, self.tracker.consecutive_undos
        );
        true
    }

    fn check_win(&mut self) -> Option<WinSummary> {
        if self.win.is_some() || !rules::is_won(&self.board) {
            return None;
        }

        let used_undo = self.tracker.used_undo;
        let summary = WinSummary {
            elapsed: self.elapsed(),
            moves: self.move_count(),
            used_undo,
            credited: !used_undo || self.config.consider_undo_wins,
        };
        info!(
            "game won in {} moves, {} (undo used: {})",
            summary.moves, summary.elapsed, used_undo
        );
        self.win = Some(summary);
        Some(summary)
    }
}
