//! Persistent cross-session statistics.
//!
//! One binary file holds records for every configuration profile ever
//! played. A profile is the `count_real_moves` flag for move averages and
//! the four undo/loss settings for win/loss tallies.

pub mod record;
pub mod store;

pub use record::{MoveRecord, StatEntry, WinLossRecord, RECORD_SIZE};
pub use store::{Statistic, StatsSnapshot};
