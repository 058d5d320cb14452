//! Card collections.
//!
//! A `Deck` is any ordered pile of cards: a single deck, a multi-deck shoe,
//! or a player's hand scored with `card_value_total`.

pub mod collection;

pub use collection::{Deck, DrawFrom};
