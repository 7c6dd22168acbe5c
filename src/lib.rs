//! # cellar-solitaire
//!
//! Rules engine for a single-player solitaire played on eight rows, two
//! extra piles, a one-card cellar and four foundations.
//!
//! ## Design Principles
//!
//! 1. **No ambient state**: a `Session` carries the configuration and the
//!    statistics store; a `Game` is a plain value changed only through its
//!    commands.
//!
//! 2. **Illegal is not an error**: rejected moves and selections are `false`
//!    and `None`. Errors are reserved for the config file and the statistics
//!    store.
//!
//! 3. **No coordinates**: callers describe hits as pile + index
//!    (`Location`); layout and hit testing live in the front end.
//!
//! ## Modules
//!
//! - `core`: RNG, configuration, error types
//! - `cards`: card identities, suits, the `fits` relation
//! - `board`: piles, pile addresses (`Place`, `Range`), the deal
//! - `rules`: selection, move legality and execution, the win check
//! - `history`: move and undo accounting
//! - `stats`: the persistent statistics store
//! - `session`: `Game` and `Session`
//!
//! ```
//! use cellar_solitaire::{Config, Place, Range, SessionBuilder};
//!
//! let mut session = SessionBuilder::new().config(Config::default()).seed(1).build().unwrap();
//! let top = session.game().board().pile(Place::Row(0)).len();
//! let from = Range::new(Place::Row(0), top - 1, top);
//!
//! assert!(session.try_move(&from, &Range::new(Place::Cellar, 0, 1), false));
//! assert!(session.undo());
//! ```

pub mod core;
pub mod cards;
pub mod board;
pub mod rules;
pub mod history;
pub mod stats;
pub mod session;

// Re-export commonly used types
pub use crate::core::{Config, ConfigError, GameRng, GameRngState, StatsError};

pub use crate::cards::{CardId, Suit, NUM_CARDS, NUM_IDS, NUM_SENTINELS};

pub use crate::board::{Board, Pile, Place, Range};

pub use crate::rules::{ElapsedTime, Location, Move, WinSummary};

pub use crate::history::UndoTracker;

pub use crate::stats::{StatEntry, Statistic, StatsSnapshot};

pub use crate::session::{Game, MoveOutcome, Session, SessionBuilder};
