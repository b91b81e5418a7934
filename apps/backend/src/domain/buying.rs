//! Trump selection, discarding and buying.

use tracing::debug;

use crate::domain::dealing::buy;
use crate::domain::rules::{min_keep, HAND_SIZE};
use crate::domain::state::{require_round_status, require_turn, Game, RoundStatus};
use crate::domain::{Card, Suit};
use crate::errors::domain::{DomainError, ValidationKind};

/// Check that `kept` is a legal selection from `available`: between
/// `min` and five cards, no repeats, every card actually available.
pub fn validate_selection(kept: &[Card], available: &[Card], min: usize) -> Result<(), DomainError> {
    if kept.len() < min || kept.len() > HAND_SIZE {
        return Err(DomainError::validation(
            ValidationKind::InvalidCardSelection,
            format!("Must keep between {min} and {HAND_SIZE} cards, got {}", kept.len()),
        ));
    }
    for (i, card) in kept.iter().enumerate() {
        if kept[..i].contains(card) {
            return Err(DomainError::validation(
                ValidationKind::InvalidCardSelection,
                format!("Duplicate card {card}"),
            ));
        }
        if !available.contains(card) {
            return Err(DomainError::validation(
                ValidationKind::InvalidCardSelection,
                format!("Card {card} is not in hand"),
            ));
        }
    }
    Ok(())
}

/// The Goer names trumps and keeps cards from their hand plus the dummy.
pub fn select_suit(
    game: &mut Game,
    player_id: &str,
    suit: Suit,
    kept: Vec<Card>,
) -> Result<(), DomainError> {
    require_round_status(game, RoundStatus::Called)?;
    game.player_index(player_id)?;
    if !game.is_goer(player_id) {
        return Err(DomainError::validation(
            ValidationKind::NotCurrentPlayer,
            format!("{player_id} is not the goer"),
        ));
    }

    let min = min_keep(game.players.len())?;
    let mut available = game.player(player_id)?.cards.clone();
    if let Some(dummy) = &game.dummy {
        available.extend(dummy.iter().copied());
    }
    validate_selection(&kept, &available, min)?;

    game.player_mut(player_id)?.cards = kept;
    game.dummy = None;
    let first_buyer = game.next_player_id(&game.current_round.dealer_id)?;
    let round = &mut game.current_round;
    round.suit = Some(suit);
    round.status = RoundStatus::Buying;
    round.current_hand.current_player_id = first_buyer;
    debug!(game_id = %game.id, %suit, "trumps selected");
    Ok(())
}

/// The current buyer keeps some of their own cards and refills to five from the deck.
///
/// The dealer buys last; their purchase starts play with the player after the Goer.
pub fn buy_cards(game: &mut Game, player_id: &str, kept: Vec<Card>) -> Result<(), DomainError> {
    require_round_status(game, RoundStatus::Buying)?;
    require_turn(game, player_id)?;

    let min = min_keep(game.players.len())?;
    validate_selection(&kept, &game.player(player_id)?.cards, min)?;

    let (deck, hand) = buy(game.deck.clone(), kept)?;
    game.deck = deck;
    game.player_mut(player_id)?.cards = hand;

    if game.is_dealer(player_id) {
        let leader = game.next_player_id(game.goer_id()?)?;
        let round = &mut game.current_round;
        round.status = RoundStatus::Playing;
        round.current_hand.current_player_id = leader;
    } else {
        let next = game.next_player_id(player_id)?;
        game.current_round.current_hand.current_player_id = next;
    }
    Ok(())
}
