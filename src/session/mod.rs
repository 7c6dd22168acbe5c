//! Games and the session that strings them together.
//!
//! ## Game
//!
//! One deal. Owns the board, the move history and the undo counters, and
//! runs the win check after every move.
//!
//! ## Session
//!
//! The explicit context a front end holds: active `Config`, the statistics
//! store and the current `Game`. Wins are credited, losses recorded and the
//! store saved from here.

pub mod game;
pub mod engine;

pub use game::{Game, MoveOutcome};
pub use engine::{Session, SessionBuilder};
