//! Deck bindings for Python.
//!
//! Python callers don't handle RNGs, so each `Deck` owns one.

use pyo3::prelude::*;

use crate::core::{DeckRng, ShoeConfig};
use crate::deck::{Deck, DrawFrom};

use super::py_cards::PyCard;
use super::to_py_err;

/// Python wrapper for Deck plus the RNG it draws and shuffles with.
#[pyclass(name = "Deck")]
#[derive(Clone, Debug)]
pub struct PyDeck {
    deck: Deck,
    rng: DeckRng,
}

#[pymethods]
impl PyDeck {
    /// Create an empty deck. Seeds from entropy when `seed` is None.
    #[new]
    #[pyo3(signature = (seed = None))]
    fn new(seed: Option<u64>) -> Self {
        Self {
            deck: Deck::new(),
            rng: seed.map_or_else(DeckRng::from_entropy, DeckRng::new),
        }
    }

    /// Build a shuffled multi-deck shoe.
    #[staticmethod]
    #[pyo3(signature = (decks = 1, shuffle_passes = 1, seed = None))]
    fn shoe(decks: usize, shuffle_passes: usize, seed: Option<u64>) -> Self {
        let mut config = ShoeConfig::new()
            .with_decks(decks)
            .with_shuffle_passes(shuffle_passes);
        config.seed = seed;
        let mut rng = config.rng();
        let deck = Deck::shoe(&config, &mut rng);
        Self { deck, rng }
    }

    fn add_card(&mut self, card: &PyCard) {
        self.deck.add_card(card.0.clone());
    }

    #[pyo3(signature = (amount = 1))]
    fn add_decks(&mut self, amount: usize) {
        self.deck.add_decks(amount);
    }

    fn fresh_deck(&mut self) {
        self.deck.fresh_deck();
    }

    fn get_card(&self, index: usize) -> PyResult<PyCard> {
        self.deck.get_card(index).cloned().map(PyCard).map_err(to_py_err)
    }

    /// Flip the visibility of the card at `index`.
    fn set_revealed(&mut self, index: usize, revealed: bool) -> PyResult<()> {
        self.deck
            .get_card_mut(index)
            .map(|card| card.set_revealed(revealed))
            .map_err(to_py_err)
    }

    #[pyo3(signature = (randomly = false))]
    fn draw_card(&mut self, randomly: bool) -> PyResult<PyCard> {
        self.deck
            .draw_card(DrawFrom::from(randomly), &mut self.rng)
            .map(PyCard)
            .map_err(to_py_err)
    }

    #[pyo3(signature = (passes = 1))]
    fn shuffle(&mut self, passes: usize) {
        self.deck.shuffle(passes, &mut self.rng);
    }

    #[pyo3(signature = (ignore_revealed = false))]
    fn card_value_total(&self, ignore_revealed: bool) -> u32 {
        self.deck.card_value_total(ignore_revealed)
    }

    fn __len__(&self) -> usize {
        self.deck.len()
    }

    fn __str__(&self) -> String {
        self.deck.to_string()
    }

    fn __repr__(&self) -> String {
        format!("Deck(len={})", self.deck.len())
    }
}
