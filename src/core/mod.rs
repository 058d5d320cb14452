//! Core building blocks: RNG, shoe configuration, errors.
//!
//! Everything randomness-dependent in the crate takes a `DeckRng`
//! explicitly rather than reaching for a global generator.

pub mod config;
pub mod error;
pub mod rng;

pub use config::ShoeConfig;
pub use error::{DeckError, Result};
pub use rng::{DeckRng, DeckRngState};
