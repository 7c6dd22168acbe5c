//! The context object a front end drives: the current game, the active
//! configuration and the statistics store.

use std::path::{Path, PathBuf};

use log::info;

use super::game::{Game, MoveOutcome};
use crate::board::{Board, Range};
use crate::core::{Config, GameRng, GameRngState, StatsError};
use crate::rules::Location;
use crate::stats::{Statistic, StatsSnapshot};

/// Builder for a [`Session`].
#[derive(Clone, Debug, Default)]
pub struct SessionBuilder {
    config: Config,
    seed: Option<u64>,
    seed_state: Option<GameRngState>,
    stats_path: Option<PathBuf>,
    board: Option<Board>,
}

impl SessionBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    /// Seed the first deal. Later deals draw from a generator seeded with it.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Continue a deal chain captured with [`Session::seed_state`]. The first
    /// game is the one the captured session would have dealt next.
    pub fn seed_state(mut self, state: GameRngState) -> Self {
        self.seed_state = Some(state);
        self
    }

    /// Persist statistics at `path`. Without one the store lives in memory.
    pub fn stats_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.stats_path = Some(path.into());
        self
    }

    /// Play the first game from a prepared board instead of dealing.
    pub fn board(mut self, board: Board) -> Self {
        self.board = Some(board);
        self
    }

    /// Load the statistics and deal the first game.
    pub fn build(self) -> Result<Session, StatsError> {
        let stats = match &self.stats_path {
            Some(path) => Statistic::load(path, &self.config)?,
            None => Statistic::new(),
        };
        let (mut seeds, resumed) = match &self.seed_state {
            Some(state) => (GameRng::from_state(state), true),
            None => (self.seed.map_or_else(GameRng::from_entropy, GameRng::new), false),
        };
        let game = match self.board {
            Some(board) => Game::from_board(board, self.config),
            None if resumed => Game::new(self.config, Some(seeds.next_seed())),
            None => Game::new(self.config, Some(seeds.seed())),
        };

        Ok(Session {
            config: self.config,
            stats,
            stats_path: self.stats_path,
            seeds,
            game,
        })
    }
}

/// A play session: one game at a time plus the statistics they feed.
#[derive(Debug)]
pub struct Session {
    config: Config,
    stats: Statistic,
    stats_path: Option<PathBuf>,
    seeds: GameRng,
    game: Game,
}

impl Session {
    /// The game in progress.
    #[must_use]
    pub fn game(&self) -> &Game {
        &self.game
    }

    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    #[must_use]
    pub fn stats_path(&self) -> Option<&Path> {
        self.stats_path.as_deref()
    }

    /// Position of the deal chain, for replaying the following deals later.
    #[must_use]
    pub fn seed_state(&self) -> GameRngState {
        self.seeds.state()
    }

    /// See [`Game::select_at`].
    #[must_use]
    pub fn select_at(&self, hits: &[Location], active: Option<&Range>) -> Option<Range> {
        self.game.select_at(hits, active)
    }

    /// See [`Game::reverse_run`].
    pub fn reverse_run(&mut self, range: &Range) -> bool {
        self.game.reverse_run(range)
    }

    /// Try a move; a credited win goes straight into the statistics.
    pub fn try_move(&mut self, from: &Range, to: &Range, reversed: bool) -> bool {
        let outcome = self.game.try_move(from, to, reversed);
        if let MoveOutcome::Won(summary) = outcome {
            if summary.credited {
                self.stats.record_win(summary.moves);
            } else {
                info!("win not credited, undo was used");
            }
        }
        outcome.is_applied()
    }

    /// Take back the last move, if undo is enabled.
    pub fn undo(&mut self) -> bool {
        self.config.allow_undo && self.game.undo()
    }

    /// Deal a new game.
    ///
    /// A won game is always replaced. An unwon one is replaced only when
    /// `confirmed`, and then counts as a loss if `close_is_loss` is set; that
    /// loss is saved right away. Returns whether a new game was dealt.
    pub fn reshuffle(&mut self, confirmed: bool) -> Result<bool, StatsError> {
        if !self.game.is_won() {
            if !confirmed {
                return Ok(false);
            }
            if self.config.close_is_loss {
                self.stats.record_loss();
                self.save()?;
            }
        }

        self.game = Game::new(self.config, Some(self.seeds.next_seed()));
        Ok(true)
    }

    /// Current statistics for the active profile.
    #[must_use]
    pub fn stats_snapshot(&self) -> StatsSnapshot {
        self.stats.snapshot()
    }

    /// End the session: an unwon game may count as a loss, then the store
    /// is written.
    pub fn finish(mut self) -> Result<StatsSnapshot, StatsError> {
        if !self.game.is_won() && self.config.close_is_loss {
            self.stats.record_loss();
        }
        self.save()?;
        Ok(self.stats.snapshot())
    }

    fn save(&mut self) -> Result<(), StatsError> {
        match &self.stats_path {
            Some(path) => self.stats.save(path, &self.config),
            None => Ok(()),
        }
    }
}
