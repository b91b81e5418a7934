//! Card names: the stable wire form ("FIVE_HEARTS", "JOKER") and compact
//! two-character tokens ("5H", "TD", "JK") accepted for convenience.

use std::fmt;
use std::str::FromStr;

use super::cards_types::{Card, CardSuit, Rank, Suit};
use crate::errors::domain::{DomainError, ValidationKind};

impl Rank {
    pub const fn name(self) -> &'static str {
        match self {
            Rank::Two => "TWO",
            Rank::Three => "THREE",
            Rank::Four => "FOUR",
            Rank::Five => "FIVE",
            Rank::Six => "SIX",
            Rank::Seven => "SEVEN",
            Rank::Eight => "EIGHT",
            Rank::Nine => "NINE",
            Rank::Ten => "TEN",
            Rank::Jack => "JACK",
            Rank::Queen => "QUEEN",
            Rank::King => "KING",
            Rank::Ace => "ACE",
        }
    }

    fn from_name(s: &str) -> Option<Self> {
        Rank::ALL.into_iter().find(|r| r.name() == s)
    }

    fn from_token(ch: char) -> Option<Self> {
        let rank = match ch {
            '2' => Rank::Two,
            '3' => Rank::Three,
            '4' => Rank::Four,
            '5' => Rank::Five,
            '6' => Rank::Six,
            '7' => Rank::Seven,
            '8' => Rank::Eight,
            '9' => Rank::Nine,
            'T' => Rank::Ten,
            'J' => Rank::Jack,
            'Q' => Rank::Queen,
            'K' => Rank::King,
            'A' => Rank::Ace,
            _ => return None,
        };
        Some(rank)
    }
}

impl Suit {
    pub const fn name(self) -> &'static str {
        match self {
            Suit::Hearts => "HEARTS",
            Suit::Diamonds => "DIAMONDS",
            Suit::Clubs => "CLUBS",
            Suit::Spades => "SPADES",
        }
    }

    fn from_token(ch: char) -> Option<Self> {
        match ch {
            'H' => Some(Suit::Hearts),
            'D' => Some(Suit::Diamonds),
            'C' => Some(Suit::Clubs),
            'S' => Some(Suit::Spades),
            _ => None,
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Suit {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Suit::ALL
            .into_iter()
            .find(|suit| suit.name() == s)
            .ok_or_else(|| {
                DomainError::validation(ValidationKind::InvalidSuit, format!("Invalid suit: {s}"))
            })
    }
}

impl CardSuit {
    pub const fn name(self) -> &'static str {
        match self {
            CardSuit::Suited(suit) => suit.name(),
            CardSuit::Wild => "WILD",
        }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Card::Joker => f.write_str("JOKER"),
            Card::Standard { rank, suit } => write!(f, "{}_{}", rank.name(), suit.name()),
        }
    }
}

impl FromStr for Card {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || DomainError::validation(ValidationKind::InvalidCard, format!("Parse card: {s}"));

        if s == "JOKER" || s == "JK" {
            return Ok(Card::Joker);
        }

        if let Some((rank, suit)) = s.split_once('_') {
            let rank = Rank::from_name(rank).ok_or_else(invalid)?;
            let suit = suit.parse::<Suit>().map_err(|_| invalid())?;
            return Ok(Card::new(rank, suit));
        }

        let mut chars = s.chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(r), Some(su), None) => {
                let rank = Rank::from_token(r).ok_or_else(invalid)?;
                let suit = Suit::from_token(su).ok_or_else(invalid)?;
                Ok(Card::new(rank, suit))
            }
            _ => Err(invalid()),
        }
    }
}

/// Non-panicking helper to parse card names or tokens into cards.
pub fn try_parse_cards<I, S>(tokens: I) -> Result<Vec<Card>, DomainError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    tokens
        .into_iter()
        .map(|s| s.as_ref().parse::<Card>())
        .collect()
}
