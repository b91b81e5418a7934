//! Deck construction, shuffling, dealing and buying.

use rand::Rng;

use crate::domain::rules::{validate_player_count, HAND_SIZE};
use crate::domain::{Card, Rank, Suit};
use crate::errors::domain::{DomainError, ValidationKind};

/// The 53-card deck in canonical order: hearts, diamonds, clubs, spades
/// (each Two through Ace), then the Joker.
pub fn new_deck() -> Vec<Card> {
    let mut deck = Vec::with_capacity(53);
    for suit in Suit::ALL {
        for rank in Rank::ALL {
            deck.push(Card::new(rank, suit));
        }
    }
    deck.push(Card::Joker);
    deck
}

/// Fisher-Yates shuffle driven by the caller's RNG.
pub fn shuffle<R: Rng + ?Sized>(mut cards: Vec<Card>, rng: &mut R) -> Vec<Card> {
    for i in (1..cards.len()).rev() {
        let j = rng.random_range(0..=i);
        cards.swap(i, j);
    }
    cards
}

/// Outcome of a deal: what's left of the deck, the dummy, and one hand per player
/// in seat order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deal {
    pub deck: Vec<Card>,
    pub dummy: Vec<Card>,
    pub hands: Vec<Vec<Card>>,
}

/// Deal five cards to every player and to the dummy, one card at a time.
///
/// The dummy is dealt as the last hand in each pass.
pub fn deal(deck: Vec<Card>, num_players: usize) -> Result<Deal, DomainError> {
    validate_player_count(num_players)?;

    let mut remaining = deck.into_iter();
    let mut hands: Vec<Vec<Card>> = vec![Vec::with_capacity(HAND_SIZE); num_players + 1];
    for _ in 0..HAND_SIZE {
        for hand in hands.iter_mut() {
            let card = remaining.next().ok_or_else(|| {
                DomainError::validation(ValidationKind::DeckExhausted, "Deck is empty")
            })?;
            hand.push(card);
        }
    }

    let dummy = hands.pop().unwrap_or_default();
    Ok(Deal {
        deck: remaining.collect(),
        dummy,
        hands,
    })
}

/// Top `kept` back up to five cards from the front of the deck.
///
/// Returns the remaining deck and the refilled hand.
pub fn buy(deck: Vec<Card>, mut kept: Vec<Card>) -> Result<(Vec<Card>, Vec<Card>), DomainError> {
    let mut remaining = deck.into_iter();
    while kept.len() < HAND_SIZE {
        let card = remaining.next().ok_or_else(|| {
            DomainError::validation(ValidationKind::DeckExhausted, "Deck is empty")
        })?;
        kept.push(card);
    }
    Ok((remaining.collect(), kept))
}
