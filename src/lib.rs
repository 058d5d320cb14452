//! # card-deck
//!
//! Playing cards and the ordered collections games deal them from.
//!
//! ## Design Principles
//!
//! 1. **Explicit Randomness**: Every random operation takes a `DeckRng`.
//!    Seed it and a whole deal replays exactly.
//!
//! 2. **Visibility Is Display**: A hidden card still scores and still knows
//!    its identity, but its `Display` form is masked.
//!
//! 3. **Cheap Snapshots**: `Deck` is backed by a persistent vector, so
//!    cloning one is O(1).
//!
//! ## Modules
//!
//! - `core`: RNG, shoe configuration, errors
//! - `cards`: Ranks, suits, and cards
//! - `deck`: The `Deck` collection and draw modes

pub mod core;
pub mod cards;
pub mod deck;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{DeckError, DeckRng, DeckRngState, Result, ShoeConfig};

pub use crate::cards::{Card, CardRank, Rank, Suit, HIDDEN_LABEL, STANDARD_SET_SIZE};

pub use crate::deck::{Deck, DrawFrom};
