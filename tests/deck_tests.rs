//! Deck and shoe tests.
//!
//! These tests follow a deck through the life cycle a game drives it
//! through: populate, shuffle, deal, score.

use card_deck::{Card, CardRank, Deck, DeckError, DeckRng, DrawFrom, Rank, ShoeConfig, Suit};

fn fresh() -> Deck {
    let mut deck = Deck::new();
    deck.fresh_deck();
    deck
}

/// A fresh deck has one of every card and deals Ace of Clubs first.
#[test]
fn test_fresh_deck_then_top_draw() {
    let mut deck = fresh();
    assert_eq!(deck.len(), 52);

    let composition = deck.composition();
    assert_eq!(composition.len(), 52);
    for suit in Suit::STANDARD {
        for rank in Rank::ALL {
            assert_eq!(composition.get(&(CardRank::from(rank), suit)), Some(&1));
        }
    }

    let mut rng = DeckRng::new(0);
    let top = deck.draw_card(DrawFrom::Top, &mut rng).unwrap();
    assert_eq!(top, Card::new(Rank::Ace, Suit::Clubs));
    assert_eq!(deck.len(), 51);
}

/// Top draws return cards in insertion order until the deck runs dry.
#[test]
fn test_top_draws_preserve_order() {
    let mut deck = Deck::new();
    deck.add_decks(2);
    let expected: Vec<Card> = deck.iter().cloned().collect();

    let mut drawn = Vec::new();
    while !deck.is_empty() {
        let before = deck.len();
        drawn.push(deck.draw_top().unwrap());
        assert_eq!(deck.len(), before - 1);
    }

    assert_eq!(drawn, expected);
    assert_eq!(deck.draw_top(), Err(DeckError::Empty));
}

/// Random draws remove exactly one copy of the drawn card.
#[test]
fn test_random_draws_remove_exactly_one() {
    let mut shoe = Deck::new();
    shoe.add_decks(3);
    let mut rng = DeckRng::new(77);

    for _ in 0..50 {
        let before = shoe.composition();
        let card = shoe.draw_random(&mut rng).unwrap();
        let after = shoe.composition();

        let key = card.identity();
        assert_eq!(after.get(&key).copied().unwrap_or(0), before[&key] - 1);
    }
    assert_eq!(shoe.len(), 156 - 50);
}

/// Drawing every card at random yields the full multiset.
#[test]
fn test_random_draws_exhaust_deck() {
    let mut deck = fresh();
    let mut rng = DeckRng::new(5);
    let mut drawn = Deck::new();

    while let Ok(card) = deck.draw_card(DrawFrom::Random, &mut rng) {
        drawn.add_card(card);
    }

    assert!(deck.is_empty());
    assert_eq!(drawn.composition(), fresh().composition());
}

/// `add_decks` grows by 52 per deck.
#[test]
fn test_add_decks_growth() {
    let mut deck = Deck::new();
    for n in 0..5 {
        let before = deck.len();
        deck.add_decks(n);
        assert_eq!(deck.len(), before + 52 * n);
    }
}

/// Index access fails past the end and succeeds everywhere else.
#[test]
fn test_get_card_bounds() {
    let mut deck = Deck::new();
    deck.add_decks(2);

    for i in 0..deck.len() {
        let card = deck.get_card(i).unwrap();
        assert_eq!(card, &Card::new(Rank::ALL[i % 13], Suit::STANDARD[(i / 13) % 4]));
    }

    let err = deck.get_card(104).unwrap_err();
    assert_eq!(err, DeckError::IndexOutOfRange { index: 104, len: 104 });
    assert!(deck.get_card(usize::MAX).is_err());
}

/// A blackjack hand with a hole card.
#[test]
fn test_dealer_hand_scoring() {
    let mut hand = Deck::new();
    hand.add_card(Card::new(Rank::Ace, Suit::Spades));
    hand.add_card(Card::new(Rank::Queen, Suit::Hearts));
    hand.get_card_mut(1).unwrap().set_revealed(false);

    assert_eq!(hand.card_value_total(false), 1);
    assert_eq!(hand.card_value_total(true), 11);
    assert_eq!(hand.to_string(), "Ace of Spades\n***HIDDEN***\n");

    hand.set_all_revealed(false);
    assert_eq!(hand.card_value_total(false), 0);
    assert_eq!(hand.card_value_total(true), 11);
}

/// Shuffling never loses or duplicates cards.
#[test]
fn test_shuffle_preserves_shoe() {
    let mut shoe = Deck::new();
    shoe.add_decks(4);
    let before = shoe.composition();

    shoe.shuffle(7, &mut DeckRng::new(31));

    assert_eq!(shoe.len(), 208);
    assert_eq!(shoe.composition(), before);
}

/// Zero passes leave the order exactly as it was.
#[test]
fn test_shuffle_zero_passes() {
    let mut deck = fresh();
    deck.get_card_mut(10).unwrap().set_revealed(false);
    let before: Vec<Card> = deck.iter().cloned().collect();

    deck.shuffle(0, &mut DeckRng::new(31));

    let after: Vec<Card> = deck.iter().cloned().collect();
    assert_eq!(before, after);
}

/// Two shoes from the same seeded config deal identically.
#[test]
fn test_seeded_shoes_deal_identically() {
    let config = ShoeConfig::new().with_decks(6).with_shuffle_passes(2).with_seed(2024);

    let mut rng_a = config.rng();
    let mut rng_b = config.rng();
    let mut a = Deck::shoe(&config, &mut rng_a);
    let mut b = Deck::shoe(&config, &mut rng_b);

    for _ in 0..100 {
        assert_eq!(a.draw_random(&mut rng_a), b.draw_random(&mut rng_b));
    }
}

/// A snapshot taken before a speculative deal is unaffected by it.
#[test]
fn test_snapshot_before_speculative_deal() {
    let config = ShoeConfig::new().with_seed(9);
    let mut rng = config.rng();
    let shoe = Deck::shoe(&config, &mut rng);

    let mut branch_rng = rng.fork();
    let mut speculative = shoe.clone();
    for _ in 0..10 {
        speculative.draw_random(&mut branch_rng).unwrap();
    }

    assert_eq!(shoe.len(), 52);
    assert_eq!(speculative.len(), 42);
}

/// Jokers join a deck and score nothing.
#[test]
fn test_jokers_in_deck() {
    let mut deck = fresh();
    deck.add_card(Card::joker("Joker"));
    deck.add_card(Card::joker("Joker"));

    assert_eq!(deck.len(), 54);
    assert_eq!(deck.card_value_total(true), 340);
    assert_eq!(deck.iter().filter(|c| c.is_joker()).count(), 2);
    assert_eq!(deck.get_card(53).unwrap().to_string(), "Joker of Something");
}
