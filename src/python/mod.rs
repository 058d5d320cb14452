//! Python bindings for card-deck.
//!
//! # Quick Start
//!
//! ```python
//! import card_deck
//!
//! deck = card_deck.Deck(seed=42)
//! deck.fresh_deck()
//! deck.shuffle(3)
//!
//! card = deck.draw_card(randomly=False)
//! print(card, card.rank_value)
//! ```

use pyo3::exceptions::{PyIndexError, PyValueError};
use pyo3::prelude::*;

use crate::core::DeckError;

mod py_cards;
mod py_deck;

pub use py_cards::*;
pub use py_deck::*;

/// Map crate errors onto the closest Python exception.
pub(crate) fn to_py_err(err: DeckError) -> PyErr {
    match err {
        DeckError::IndexOutOfRange { .. } | DeckError::Empty => {
            PyErr::new::<PyIndexError, _>(err.to_string())
        }
        DeckError::UnknownRank(_) | DeckError::UnknownSuit(_) => {
            PyErr::new::<PyValueError, _>(err.to_string())
        }
    }
}

/// card_deck: playing cards, decks and shoes.
#[pymodule]
fn card_deck(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyCard>()?;
    m.add_class::<PyDeck>()?;
    m.add("HIDDEN_LABEL", crate::cards::HIDDEN_LABEL)?;
    Ok(())
}
