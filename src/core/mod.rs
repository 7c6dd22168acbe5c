//! Core engine plumbing: RNG, configuration, error types.
//!
//! Nothing in here knows about piles or moves.

pub mod rng;
pub mod config;
pub mod error;

pub use rng::{GameRng, GameRngState};
pub use config::Config;
pub use error::{ConfigError, StatsError};
