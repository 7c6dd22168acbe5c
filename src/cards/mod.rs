//! The card table: fixed card identities and the adjacency relation.
//!
//! Cards carry no mutable state. Piles hold `CardId`s and everything
//! else (suit, rank, sentinel-ness) is derived from the id.

pub mod card;

pub use card::{CardId, Suit, CARDS_PER_SUIT, NUM_CARDS, NUM_IDS, NUM_SENTINELS};
