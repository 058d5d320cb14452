//! A single playing card.
//!
//! Rank and suit are fixed once the card exists; only the revealed flag
//! changes. A hidden card never leaks its identity through `Display`, so
//! game code can print a dealer's hand without checking each card.

use serde::{Deserialize, Serialize};

use super::rank::{CardRank, Rank};
use super::suit::Suit;
use crate::core::{DeckRng, Result};

/// Display text for a face-down card.
pub const HIDDEN_LABEL: &str = "***HIDDEN***";

/// A playing card with a visibility flag.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    rank: CardRank,
    suit: Suit,
    revealed: bool,
}

impl Card {
    /// Create a revealed card.
    #[must_use]
    pub fn new(rank: impl Into<CardRank>, suit: Suit) -> Self {
        Self {
            rank: rank.into(),
            suit,
            revealed: true,
        }
    }

    /// Create a joker-like card: suit is `Suit::Something`.
    #[must_use]
    pub fn joker(rank: impl Into<CardRank>) -> Self {
        Self::new(rank, Suit::Something)
    }

    /// Create a revealed card with a uniformly random standard rank and suit.
    #[must_use]
    pub fn random(rng: &mut DeckRng) -> Self {
        let rank = Rank::ALL[rng.gen_index(Rank::ALL.len())];
        let suit = Suit::STANDARD[rng.gen_index(Suit::STANDARD.len())];
        Self::new(rank, suit)
    }

    /// Build a card from text labels.
    ///
    /// Any rank label is accepted (unknown ones score 0); the suit must be
    /// one of the known names.
    pub fn from_labels(rank: &str, suit: &str) -> Result<Self> {
        Ok(Self::new(CardRank::parse(rank), suit.parse()?))
    }

    #[must_use]
    pub fn rank(&self) -> &CardRank {
        &self.rank
    }

    /// Rank value, 0 for an unrecognized rank.
    #[must_use]
    pub fn rank_value(&self) -> u32 {
        self.rank.value()
    }

    #[must_use]
    pub fn suit(&self) -> Suit {
        self.suit
    }

    #[must_use]
    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    pub fn set_revealed(&mut self, revealed: bool) {
        self.revealed = revealed;
    }

    #[must_use]
    pub fn is_joker(&self) -> bool {
        !self.suit.is_standard()
    }

    /// Rank and suit, ignoring visibility.
    #[must_use]
    pub fn identity(&self) -> (CardRank, Suit) {
        (self.rank.clone(), self.suit)
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.revealed {
            write!(f, "{} of {}", self.rank, self.suit)
        } else {
            f.write_str(HIDDEN_LABEL)
        }
    }
}
