//! Undo bookkeeping.
//!
//! The history itself is an `im::Vector<Move>` owned by the game; this
//! module keeps the counters that travel with it.

pub mod tracker;

pub use tracker::UndoTracker;
