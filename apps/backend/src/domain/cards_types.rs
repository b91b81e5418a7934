//! Core card-related types: Card, Rank, Suit, CardSuit

use crate::errors::domain::{DomainError, ValidationKind};

/// One of the four printed suits. Any of them can be named trumps.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Suit {
    Hearts,
    Diamonds,
    Clubs,
    Spades,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Hearts, Suit::Diamonds, Suit::Clubs, Suit::Spades];

    pub fn is_red(self) -> bool {
        matches!(self, Suit::Hearts | Suit::Diamonds)
    }
}

/// The suit a card plays as. The Joker and the Ace of Hearts belong to no
/// printed suit for play purposes and are always trumps.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum CardSuit {
    Suited(Suit),
    Wild,
}

impl From<Suit> for CardSuit {
    fn from(suit: Suit) -> Self {
        CardSuit::Suited(suit)
    }
}

impl TryFrom<CardSuit> for Suit {
    type Error = DomainError;

    fn try_from(suit: CardSuit) -> Result<Self, Self::Error> {
        match suit {
            CardSuit::Suited(s) => Ok(s),
            CardSuit::Wild => Err(DomainError::validation(
                ValidationKind::InvalidSuit,
                "Wild is not a printed suit",
            )),
        }
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Rank {
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
    Ace,
}

impl Rank {
    pub const ALL: [Rank; 13] = [
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
        Rank::Ace,
    ];
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Card {
    Standard { rank: Rank, suit: Suit },
    Joker,
}

impl Card {
    pub const JOKER: Card = Card::Joker;
    pub const ACE_HEARTS: Card = Card::new(Rank::Ace, Suit::Hearts);

    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Card::Standard { rank, suit }
    }

    /// The suit this card plays as.
    pub fn suit(self) -> CardSuit {
        match self {
            Card::Joker => CardSuit::Wild,
            Card::Standard {
                rank: Rank::Ace,
                suit: Suit::Hearts,
            } => CardSuit::Wild,
            Card::Standard { suit, .. } => CardSuit::Suited(suit),
        }
    }

    pub fn rank(self) -> Option<Rank> {
        match self {
            Card::Joker => None,
            Card::Standard { rank, .. } => Some(rank),
        }
    }

    pub fn is_wild(self) -> bool {
        self.suit() == CardSuit::Wild
    }

    /// Position in the canonical deck order; used for stable sorting only.
    pub(crate) fn deck_index(self) -> usize {
        match self {
            Card::Joker => 52,
            Card::Standard { rank, suit } => suit as usize * 13 + rank as usize,
        }
    }
}

// Ord on Card is only for stable display sorting in deck order.
// Trick resolution uses trump and cold ranks from cards_logic.
impl Ord for Card {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.deck_index().cmp(&other.deck_index())
    }
}

impl PartialOrd for Card {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}
