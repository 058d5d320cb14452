//! Card bindings for Python.

use pyo3::prelude::*;

use crate::cards::{Card, CardRank, Suit};
use crate::core::DeckRng;

use super::to_py_err;

/// Python wrapper for Card.
#[pyclass(name = "Card")]
#[derive(Clone, Debug)]
pub struct PyCard(pub Card);

#[pymethods]
impl PyCard {
    /// Create a card.
    ///
    /// With a suit: an ordinary card. Without one: a joker-like card with
    /// suit "Something".
    #[new]
    #[pyo3(signature = (rank, suit = None))]
    fn new(rank: &str, suit: Option<&str>) -> PyResult<Self> {
        match suit {
            Some(suit) => Card::from_labels(rank, suit).map(Self).map_err(to_py_err),
            None => Ok(Self(Card::joker(CardRank::parse(rank)))),
        }
    }

    /// A card with random rank and suit. Seeds from entropy when `seed` is None.
    #[staticmethod]
    #[pyo3(signature = (seed = None))]
    fn random(seed: Option<u64>) -> Self {
        let mut rng = seed.map_or_else(DeckRng::from_entropy, DeckRng::new);
        Self(Card::random(&mut rng))
    }

    #[getter]
    fn rank(&self) -> String {
        self.0.rank().name().to_string()
    }

    #[getter]
    fn rank_value(&self) -> u32 {
        self.0.rank_value()
    }

    #[getter]
    fn suit(&self) -> &'static str {
        Suit::name(self.0.suit())
    }

    #[getter]
    fn revealed(&self) -> bool {
        self.0.is_revealed()
    }

    #[setter]
    fn set_revealed(&mut self, revealed: bool) {
        self.0.set_revealed(revealed);
    }

    fn __str__(&self) -> String {
        self.0.to_string()
    }

    fn __repr__(&self) -> String {
        format!(
            "Card({:?}, {:?}, revealed={})",
            self.0.rank().name(),
            self.0.suit().name(),
            self.0.is_revealed()
        )
    }

    fn __eq__(&self, other: &Self) -> bool {
        self.0 == other.0
    }

    fn __hash__(&self) -> u64 {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};
        let mut hasher = DefaultHasher::new();
        self.0.hash(&mut hasher);
        hasher.finish()
    }
}
