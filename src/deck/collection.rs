//! Ordered card collection: decks, shoes and hands.
//!
//! The `Deck` owns its cards in order. Index 0 is the top of the deck:
//! top draws remove from the front, `add_card` appends at the back. It
//! supports:
//! - Bulk population with standard 52-card sets (multi-deck shoes)
//! - Top and random draws
//! - Repeated random-transposition shuffling
//! - Blackjack-style value totals that honour card visibility
//!
//! Cards live in a persistent vector, so cloning a deck is O(1) and a
//! clone can be used to explore a deal without disturbing the original.

use im::Vector;
use log::{debug, trace};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::cards::{Card, CardRank, Rank, Suit, STANDARD_SET_SIZE};
use crate::core::{DeckError, DeckRng, Result, ShoeConfig};

/// Where a draw takes its card from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DrawFrom {
    /// Index 0.
    Top,
    /// A uniformly random index.
    Random,
}

impl From<bool> for DrawFrom {
    /// `true` draws randomly, `false` from the top.
    fn from(randomly: bool) -> Self {
        if randomly {
            Self::Random
        } else {
            Self::Top
        }
    }
}

/// An ordered, mutable collection of cards.
///
/// ## Usage
///
/// ```
/// use card_deck::core::DeckRng;
/// use card_deck::deck::{Deck, DrawFrom};
///
/// let mut rng = DeckRng::new(42);
/// let mut deck = Deck::new();
/// deck.fresh_deck();
/// assert_eq!(deck.len(), 52);
///
/// let top = deck.draw_card(DrawFrom::Top, &mut rng).unwrap();
/// assert_eq!(top.to_string(), "Ace of Clubs");
///
/// deck.shuffle(3, &mut rng);
/// assert_eq!(deck.len(), 51);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    cards: Vector<Card>,
}

impl Deck {
    /// Create an empty deck.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a shoe: `config.decks` standard sets, then
    /// `config.shuffle_passes` shuffle passes.
    #[must_use]
    pub fn shoe(config: &ShoeConfig, rng: &mut DeckRng) -> Self {
        let mut deck = Self::new();
        deck.add_decks(config.decks);
        deck.shuffle(config.shuffle_passes, rng);
        debug!(
            "built shoe of {} decks ({} cards, {} shuffle passes)",
            config.decks,
            deck.len(),
            config.shuffle_passes
        );
        deck
    }

    /// Append a card at the bottom.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push_back(card);
    }

    /// Append one standard set: suits outer, ranks inner.
    fn add_standard_set(&mut self) {
        for suit in Suit::STANDARD {
            for rank in Rank::ALL {
                self.cards.push_back(Card::new(rank, suit));
            }
        }
    }

    /// Append `amount` standard 52-card sets. Zero is a no-op.
    pub fn add_decks(&mut self, amount: usize) {
        for _ in 0..amount {
            self.add_standard_set();
        }
        if amount > 0 {
            debug!("added {} standard decks, now {} cards", amount, self.len());
        }
    }

    /// Discard everything and start over with one standard set.
    pub fn fresh_deck(&mut self) {
        self.cards.clear();
        self.add_standard_set();
        debug!("reset to a fresh {} card deck", STANDARD_SET_SIZE);
    }

    /// Card at `index` without removing it.
    pub fn get_card(&self, index: usize) -> Result<&Card> {
        self.cards.get(index).ok_or(DeckError::IndexOutOfRange {
            index,
            len: self.cards.len(),
        })
    }

    /// Mutable card at `index`, e.g. to flip it face down.
    pub fn get_card_mut(&mut self, index: usize) -> Result<&mut Card> {
        let len = self.cards.len();
        self.cards
            .get_mut(index)
            .ok_or(DeckError::IndexOutOfRange { index, len })
    }

    /// Number of cards left.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// True when there is nothing left to draw.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Cards from top to bottom.
    pub fn iter(&self) -> im::vector::Iter<'_, Card> {
        self.cards.iter()
    }

    /// Remove and return one card.
    ///
    /// `rng` is only consulted for `DrawFrom::Random`.
    pub fn draw_card(&mut self, from: DrawFrom, rng: &mut DeckRng) -> Result<Card> {
        match from {
            DrawFrom::Top => self.draw_top(),
            DrawFrom::Random => self.draw_random(rng),
        }
    }

    /// Remove and return the top card.
    pub fn draw_top(&mut self) -> Result<Card> {
        let card = self.cards.pop_front().ok_or(DeckError::Empty)?;
        trace!("drew {} from top, {} left", card, self.len());
        Ok(card)
    }

    /// Remove and return a card from a uniformly random position.
    pub fn draw_random(&mut self, rng: &mut DeckRng) -> Result<Card> {
        if self.cards.is_empty() {
            return Err(DeckError::Empty);
        }
        let index = rng.gen_index(self.cards.len());
        let card = self.cards.remove(index);
        trace!("drew {} from position {}, {} left", card, index, self.len());
        Ok(card)
    }

    /// Run `passes` shuffle passes. Zero passes, or a deck of one card or
    /// fewer, leaves the order untouched.
    ///
    /// A pass performs `len` transpositions, each between two positions drawn
    /// independently and uniformly from `[0, len - 1)`. The bottom card is
    /// never chosen, so it stays in place and a two-card deck never changes.
    /// This is not a Fisher-Yates shuffle and is not guaranteed to produce a
    /// uniform permutation.
    pub fn shuffle(&mut self, passes: usize, rng: &mut DeckRng) {
        if passes == 0 || self.cards.len() <= 1 {
            return;
        }
        for _ in 0..passes {
            self.shuffle_pass(rng);
        }
        debug!("shuffled {} cards with {} passes", self.len(), passes);
    }

    fn shuffle_pass(&mut self, rng: &mut DeckRng) {
        let len = self.cards.len();
        for _ in 0..len {
            let first = rng.gen_index(len - 1);
            let second = rng.gen_index(len - 1);
            if first != second {
                self.cards.swap(first, second);
            }
        }
    }

    /// Sum of rank values.
    ///
    /// Revealed cards always count. Hidden cards count only when
    /// `ignore_revealed` is set.
    #[must_use]
    pub fn card_value_total(&self, ignore_revealed: bool) -> u32 {
        self.cards
            .iter()
            .filter(|card| ignore_revealed || card.is_revealed())
            .map(Card::rank_value)
            .sum()
    }

    /// Turn every card face up or face down.
    pub fn set_all_revealed(&mut self, revealed: bool) {
        for card in self.cards.iter_mut() {
            card.set_revealed(revealed);
        }
    }

    /// How many copies of each (rank, suit) the deck holds.
    #[must_use]
    pub fn composition(&self) -> FxHashMap<(CardRank, Suit), usize> {
        let mut counts = FxHashMap::default();
        for card in &self.cards {
            *counts.entry(card.identity()).or_insert(0) += 1;
        }
        counts
    }
}

impl std::fmt::Display for Deck {
    /// One card per line, top first; hidden cards are masked.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for card in &self.cards {
            writeln!(f, "{}", card)?;
        }
        Ok(())
    }
}

impl FromIterator<Card> for Deck {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self {
            cards: iter.into_iter().collect(),
        }
    }
}

impl Extend<Card> for Deck {
    fn extend<I: IntoIterator<Item = Card>>(&mut self, iter: I) {
        self.cards.extend(iter);
    }
}

impl<'a> IntoIterator for &'a Deck {
    type Item = &'a Card;
    type IntoIter = im::vector::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}

impl IntoIterator for Deck {
    type Item = Card;
    type IntoIter = im::vector::ConsumingIter<Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.into_iter()
    }
}
