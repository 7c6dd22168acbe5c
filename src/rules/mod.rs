//! Game rules: what may be picked up, where it may go, and when the game
//! is over.
//!
//! Everything here is a pure function of a `Board`. Illegal requests come
//! back as `None` or `false`; the `session` module owns history and
//! accounting.

pub mod selection;
pub mod moves;
pub mod win;

pub use selection::{can_pick_up, select, select_at, Location};
pub use moves::{apply, is_legal, reverse_run, revert, Move};
pub use win::{is_won, ElapsedTime, WinSummary};
