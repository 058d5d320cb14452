//! Card suits.

use serde::{Deserialize, Serialize};

use crate::core::DeckError;

/// Suit of a card. `Something` marks joker-like cards built from a rank alone.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Suit {
    Clubs,
    Spades,
    Diamonds,
    Hearts,
    Something,
}

impl Suit {
    /// The four real suits, in deal order.
    pub const STANDARD: [Suit; 4] = [Suit::Clubs, Suit::Spades, Suit::Diamonds, Suit::Hearts];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Clubs => "Clubs",
            Self::Spades => "Spades",
            Self::Diamonds => "Diamonds",
            Self::Hearts => "Hearts",
            Self::Something => "Something",
        }
    }

    /// False only for the joker sentinel.
    #[must_use]
    pub const fn is_standard(self) -> bool {
        !matches!(self, Self::Something)
    }
}

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for Suit {
    type Err = DeckError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Clubs" => Ok(Self::Clubs),
            "Spades" => Ok(Self::Spades),
            "Diamonds" => Ok(Self::Diamonds),
            "Hearts" => Ok(Self::Hearts),
            "Something" => Ok(Self::Something),
            _ => Err(DeckError::UnknownSuit(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_order() {
        let names: Vec<_> = Suit::STANDARD.iter().map(|s| s.name()).collect();
        assert_eq!(names, ["Clubs", "Spades", "Diamonds", "Hearts"]);
        assert!(Suit::STANDARD.iter().all(|s| s.is_standard()));
        assert!(!Suit::Something.is_standard());
    }

    #[test]
    fn test_parse() {
        assert_eq!("Hearts".parse::<Suit>(), Ok(Suit::Hearts));
        assert_eq!("Something".parse::<Suit>(), Ok(Suit::Something));
        assert_eq!(
            "Stars".parse::<Suit>(),
            Err(DeckError::UnknownSuit("Stars".into()))
        );
    }
}
