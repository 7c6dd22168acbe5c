//! Board model: piles, their addresses, and the deal.
//!
//! The `Board` owns every pile. `Place` names a pile and `Range` names a
//! suffix of one. Piles are ordered sequences of `CardId`s with index 0 at
//! the bottom.

pub mod place;
pub mod piles;

pub use place::{is_run, Place, Range, NUM_EXTRAS, NUM_FOUNDATIONS, NUM_ROWS};
pub use piles::{Board, Pile, CELLAR_CAPACITY, EXTRA_DEAL, ROW_DEAL};
