//! Deterministic random number generation for draws and shuffles.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical draws and shuffles
//! - **Forkable**: Independent branches for speculative dealing
//! - **Serializable**: O(1) state capture and restore
//!
//! ## Usage
//!
//! ```
//! use card_deck::core::DeckRng;
//!
//! let mut rng = DeckRng::new(42);
//!
//! // Fork for a look-ahead deal
//! let mut branch = rng.fork();
//!
//! // Both streams stay inside the requested range
//! assert!(rng.gen_index(52) < 52);
//! assert!(branch.gen_index(52) < 52);
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Deterministic RNG passed into every deck operation that needs randomness.
///
/// Uses ChaCha8 for speed while keeping high quality output.
#[derive(Clone, Debug)]
pub struct DeckRng {
    inner: ChaCha8Rng,
    seed: u64,
    fork_counter: u64,
}

impl DeckRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            fork_counter: 0,
        }
    }

    /// Create an RNG seeded from operating system entropy.
    ///
    /// The drawn seed is kept so the stream can still be captured with `state()`.
    #[must_use]
    pub fn from_entropy() -> Self {
        let seed = ChaCha8Rng::from_entropy().gen::<u64>();
        Self::new(seed)
    }

    /// The seed this stream was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Fork this RNG to create an independent branch.
    ///
    /// Each fork produces a different but deterministic sequence.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.fork_counter += 1;
        let fork_seed = self.seed.wrapping_add(self.fork_counter.wrapping_mul(0x9E3779B97F4A7C15));
        Self::new(fork_seed)
    }

    /// Uniform index in `[0, len)`.
    ///
    /// Panics if `len` is zero; callers guard empty collections first.
    pub fn gen_index(&mut self, len: usize) -> usize {
        self.inner.gen_range(0..len)
    }

    /// Get the current state for serialization.
    #[must_use]
    pub fn state(&self) -> DeckRngState {
        DeckRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
            fork_counter: self.fork_counter,
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &DeckRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
            fork_counter: state.fork_counter,
        }
    }
}

/// Serializable RNG state for checkpointing a deal in progress.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
    /// Fork counter for deterministic branching
    pub fork_counter: u64,
}
