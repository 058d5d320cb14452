//! Card ranks and their blackjack-style values.

use serde::{Deserialize, Serialize};

use crate::core::DeckError;

/// One of the thirteen standard ranks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Rank {
    Ace,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
}

/// Numeric value of each rank, indexed by discriminant.
const RANK_VALUES: [u32; 13] = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 10, 10, 10];

const RANK_NAMES: [&str; 13] = [
    "Ace", "Two", "Three", "Four", "Five", "Six", "Seven", "Eight", "Nine", "Ten", "Jack",
    "Queen", "King",
];

impl Rank {
    /// All ranks in deal order, Ace first.
    pub const ALL: [Rank; 13] = [
        Rank::Ace,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
    ];

    /// Face value: Ace is 1, court cards are 10.
    #[must_use]
    pub const fn value(self) -> u32 {
        RANK_VALUES[self as usize]
    }

    /// Display label, e.g. `"Queen"`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        RANK_NAMES[self as usize]
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for Rank {
    type Err = DeckError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Rank::ALL
            .into_iter()
            .find(|r| r.name() == s)
            .ok_or_else(|| DeckError::UnknownRank(s.to_string()))
    }
}

/// The rank carried by a card.
///
/// Cards built from arbitrary labels (jokers, house cards) keep the label
/// as `Unrecognized` and score 0.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum CardRank {
    Standard(Rank),
    Unrecognized(String),
}

impl CardRank {
    /// Parse a label. Never fails: unknown labels are kept verbatim.
    #[must_use]
    pub fn parse(label: &str) -> Self {
        label
            .parse::<Rank>()
            .map_or_else(|_| Self::Unrecognized(label.to_string()), Self::Standard)
    }

    /// Rank value, or 0 for an unrecognized label.
    #[must_use]
    pub fn value(&self) -> u32 {
        match self {
            Self::Standard(rank) => rank.value(),
            Self::Unrecognized(_) => 0,
        }
    }

    /// Display label.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Standard(rank) => rank.name(),
            Self::Unrecognized(label) => label,
        }
    }

    /// The standard rank, if this is one.
    #[must_use]
    pub fn as_rank(&self) -> Option<Rank> {
        match self {
            Self::Standard(rank) => Some(*rank),
            Self::Unrecognized(_) => None,
        }
    }
}

impl From<Rank> for CardRank {
    fn from(rank: Rank) -> Self {
        Self::Standard(rank)
    }
}

impl From<&str> for CardRank {
    fn from(label: &str) -> Self {
        Self::parse(label)
    }
}

impl std::fmt::Display for CardRank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rank_values() {
        let expected = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 10, 10, 10];
        for (rank, value) in Rank::ALL.iter().zip(expected) {
            assert_eq!(rank.value(), value, "{}", rank);
        }
    }

    #[test]
    fn test_court_cards_are_ten() {
        assert_eq!(Rank::Jack.value(), 10);
        assert_eq!(Rank::Queen.value(), 10);
        assert_eq!(Rank::King.value(), 10);
    }

    #[test]
    fn test_parse_round_trip_names() {
        for rank in Rank::ALL {
            assert_eq!(rank.name().parse::<Rank>(), Ok(rank));
        }
    }

    #[test]
    fn test_parse_is_exact() {
        assert_eq!(
            "ace".parse::<Rank>(),
            Err(DeckError::UnknownRank("ace".into()))
        );
        assert!("Joker".parse::<Rank>().is_err());
        assert!("".parse::<Rank>().is_err());
    }

    #[test]
    fn test_card_rank_parse() {
        assert_eq!(CardRank::parse("Seven"), CardRank::Standard(Rank::Seven));
        assert_eq!(
            CardRank::parse("Joker"),
            CardRank::Unrecognized("Joker".into())
        );
    }

    #[test]
    fn test_unrecognized_value_is_zero() {
        for label in ["Joker", "", "1", "ACE", "Eleven"] {
            assert_eq!(CardRank::parse(label).value(), 0, "{:?}", label);
        }
    }

    #[test]
    fn test_card_rank_name() {
        assert_eq!(CardRank::from(Rank::Ten).name(), "Ten");
        assert_eq!(CardRank::from("Wild").name(), "Wild");
        assert_eq!(CardRank::from("Wild").as_rank(), None);
        assert_eq!(CardRank::from("King").as_rank(), Some(Rank::King));
    }
}
