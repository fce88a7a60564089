//! Card piles: deck, hand and discard.
//!
//! ## Key Types
//!
//! - `DeckService`: draw, shuffle, reshuffle-on-exhaustion, discard
//! - `DrawReport`: what a draw produced

pub mod deck;

pub use deck::{DeckService, DrawReport};
