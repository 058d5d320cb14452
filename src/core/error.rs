//! Error type shared by card parsing and deck access.

/// Errors returned by fallible card and deck operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DeckError {
    /// `get_card` with an index past the end of the deck.
    IndexOutOfRange { index: usize, len: usize },
    /// Draw from a deck with no cards left.
    Empty,
    /// Rank label outside Ace..King.
    UnknownRank(String),
    /// Suit label outside the four suits and the joker sentinel.
    UnknownSuit(String),
}

impl std::fmt::Display for DeckError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IndexOutOfRange { index, len } => {
                write!(f, "card index {} out of range for deck of {}", index, len)
            }
            Self::Empty => write!(f, "cannot draw from an empty deck"),
            Self::UnknownRank(s) => write!(f, "unknown rank: {}", s),
            Self::UnknownSuit(s) => write!(f, "unknown suit: {}", s),
        }
    }
}

impl std::error::Error for DeckError {}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, DeckError>;
