//! Card ranking: trump order, cold order, renege eligibility

use super::cards_types::{Card, CardSuit, Rank, Suit};

/// Rank of a card when it is a trump (its suit is trumps, or it is wild).
/// Higher wins. The value is defined for every card so callers can compare
/// any trump without first checking the suit.
pub fn trump_rank(card: Card) -> u8 {
    let (rank, suit) = match card {
        Card::Joker => return 113,
        Card::Standard { rank, suit } => (rank, suit),
    };
    match rank {
        Rank::Five => 115,
        Rank::Jack => 114,
        Rank::Ace if suit == Suit::Hearts => 112,
        Rank::Ace => 111,
        Rank::King => 110,
        Rank::Queen => 109,
        _ if suit.is_red() => match rank {
            Rank::Two => 101,
            Rank::Three => 102,
            Rank::Four => 103,
            Rank::Six => 104,
            Rank::Seven => 105,
            Rank::Eight => 106,
            Rank::Nine => 107,
            _ => 108,
        },
        _ => match rank {
            Rank::Ten => 101,
            Rank::Nine => 102,
            Rank::Eight => 103,
            Rank::Seven => 104,
            Rank::Six => 105,
            Rank::Four => 106,
            Rank::Three => 107,
            _ => 108,
        },
    }
}

/// Rank of a card within its own non-trump suit. Red suits run low to high
/// by pip, black suits run in reverse. Wild cards are never cold and rank 0.
pub fn cold_rank(card: Card) -> u8 {
    let (rank, suit) = match card {
        Card::Joker => return 0,
        Card::Standard {
            rank: Rank::Ace,
            suit: Suit::Hearts,
        } => return 0,
        Card::Standard { rank, suit } => (rank, suit),
    };
    match rank {
        Rank::Jack => 11,
        Rank::Queen => 12,
        Rank::King => 13,
        _ if suit.is_red() => match rank {
            Rank::Ace => 1,
            Rank::Two => 2,
            Rank::Three => 3,
            Rank::Four => 4,
            Rank::Five => 5,
            Rank::Six => 6,
            Rank::Seven => 7,
            Rank::Eight => 8,
            Rank::Nine => 9,
            _ => 10,
        },
        _ => match rank {
            Rank::Ten => 1,
            Rank::Nine => 2,
            Rank::Eight => 3,
            Rank::Seven => 4,
            Rank::Six => 5,
            Rank::Five => 6,
            Rank::Four => 7,
            Rank::Three => 8,
            Rank::Two => 9,
            _ => 10,
        },
    }
}

/// The four top trumps a player may hold back.
pub fn is_renegable(card: Card) -> bool {
    match card {
        Card::Joker => true,
        Card::Standard { rank, suit } => {
            matches!(rank, Rank::Five | Rank::Jack) || (rank == Rank::Ace && suit == Suit::Hearts)
        }
    }
}

pub fn is_trump(card: Card, trump: Suit) -> bool {
    match card.suit() {
        CardSuit::Wild => true,
        CardSuit::Suited(suit) => suit == trump,
    }
}

pub fn hand_has_suit(hand: &[Card], suit: Suit) -> bool {
    hand.iter().any(|c| c.suit() == CardSuit::Suited(suit))
}

pub fn trumps_in_hand(hand: &[Card], trump: Suit) -> Vec<Card> {
    hand.iter().copied().filter(|c| is_trump(*c, trump)).collect()
}
