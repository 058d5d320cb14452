//! Shoe configuration.
//!
//! Games describe the shoe they deal from (how many standard decks, how many
//! shuffle passes, an optional fixed seed) and build it with `Deck::shoe`.

use serde::{Deserialize, Serialize};

use super::rng::DeckRng;

/// Configuration for a multi-deck shoe.
///
/// ```
/// use card_deck::core::ShoeConfig;
///
/// let config = ShoeConfig::new().with_decks(6).with_seed(7);
/// assert_eq!(config.card_count(), 312);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShoeConfig {
    /// Number of standard 52-card sets in the shoe.
    pub decks: usize,

    /// Shuffle passes applied after the shoe is built. Zero leaves it in
    /// canonical order.
    pub shuffle_passes: usize,

    /// Fixed seed for reproducible deals. `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for ShoeConfig {
    fn default() -> Self {
        Self {
            decks: 1,
            shuffle_passes: 1,
            seed: None,
        }
    }
}

impl ShoeConfig {
    /// Single deck, one shuffle pass, entropy seed.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of standard decks.
    #[must_use]
    pub fn with_decks(mut self, decks: usize) -> Self {
        self.decks = decks;
        self
    }

    /// Set the number of shuffle passes.
    #[must_use]
    pub fn with_shuffle_passes(mut self, passes: usize) -> Self {
        self.shuffle_passes = passes;
        self
    }

    /// Fix the seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Total cards a shoe built from this config holds.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.decks * crate::cards::STANDARD_SET_SIZE
    }

    /// RNG for this shoe: seeded when `seed` is set, entropy otherwise.
    #[must_use]
    pub fn rng(&self) -> DeckRng {
        self.seed.map_or_else(DeckRng::from_entropy, DeckRng::new)
    }
}
