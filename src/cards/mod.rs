//! Cards: ranks, suits and the `Card` itself.
//!
//! ## Key Types
//!
//! - `Rank`: the thirteen standard ranks and their values
//! - `CardRank`: a card's rank, standard or an arbitrary label
//! - `Suit`: the four suits plus the `Something` joker sentinel
//! - `Card`: rank, suit and a revealed flag

pub mod card;
pub mod rank;
pub mod suit;

pub use card::{Card, HIDDEN_LABEL};
pub use rank::{CardRank, Rank};
pub use suit::Suit;

/// Cards in one standard set (4 suits x 13 ranks).
pub const STANDARD_SET_SIZE: usize = Suit::STANDARD.len() * Rank::ALL.len();
