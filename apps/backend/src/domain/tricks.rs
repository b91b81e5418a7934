use rand::Rng;
use tracing::debug;

use crate::domain::cards_logic::{
    cold_rank, hand_has_suit, is_renegable, is_trump, trump_rank, trumps_in_hand,
};
use crate::domain::round_lifecycle::{complete_game, is_game_over, start_next_round};
use crate::domain::rules::{TeamId, TRICKS_PER_ROUND};
use crate::domain::scoring::apply_round_scores;
use crate::domain::state::{
    require_round_status, require_turn, Game, PlayedCard, PlayerId, RoundStatus, Trick,
};
use crate::domain::{Card, CardSuit, Suit};
use crate::errors::domain::{DomainError, FatalKind, ValidationKind};

/// Result of playing a card, describing how far the game moved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayOutcome {
    /// The trick is still open.
    NextPlayer,
    /// The trick closed and the winner leads the next one.
    TrickWon { winner: PlayerId },
    /// The fifth trick closed, scores were applied and a new deal started.
    RoundCompleted { winner: PlayerId },
    /// Scoring took a team past the winning line.
    GameCompleted { winner: PlayerId, winning_team: TeamId },
}

/// A player facing a trump lead may hold back their trumps only when every
/// trump they hold is a renegable card ranked at or below the lead.
pub fn can_renege(lead: Card, trumps_held: &[Card]) -> bool {
    let lead_rank = trump_rank(lead);
    trumps_held
        .iter()
        .all(|c| is_renegable(*c) && trump_rank(*c) <= lead_rank)
}

/// Whether playing `card` from `hand` respects the lead of `trick`.
/// `hand` still contains `card`.
pub fn is_following(card: Card, hand: &[Card], trick: &Trick, trump: Suit) -> bool {
    let Some(lead) = trick.lead_out else {
        return true;
    };

    if is_trump(lead, trump) {
        if is_trump(card, trump) {
            return true;
        }
        let trumps = trumps_in_hand(hand, trump);
        return trumps.is_empty() || can_renege(lead, &trumps);
    }

    let CardSuit::Suited(lead_suit) = lead.suit() else {
        // Wild cards are always trumps, handled above.
        return true;
    };
    card.suit() == CardSuit::Suited(lead_suit)
        || is_trump(card, trump)
        || !hand_has_suit(hand, lead_suit)
}

/// The suit that decides a trick: trumps if any were played, otherwise the lead's suit.
pub fn active_suit(trick: &Trick, trump: Suit) -> Result<CardSuit, DomainError> {
    let lead = trick.lead_out.ok_or_else(|| {
        DomainError::fatal(FatalKind::CorruptState, "Trick has no lead card")
    })?;
    if trick.played_cards.iter().any(|p| is_trump(p.card, trump)) {
        Ok(CardSuit::Suited(trump))
    } else {
        Ok(lead.suit())
    }
}

pub fn winning_play(trick: &Trick, trump: Suit) -> Result<PlayedCard, DomainError> {
    let winner = match active_suit(trick, trump)? {
        CardSuit::Suited(s) if s == trump => trick
            .played_cards
            .iter()
            .filter(|p| is_trump(p.card, trump))
            .max_by_key(|p| trump_rank(p.card)),
        active => trick
            .played_cards
            .iter()
            .filter(|p| p.card.suit() == active)
            .max_by_key(|p| cold_rank(p.card)),
    };
    winner.cloned().ok_or_else(|| {
        DomainError::fatal(FatalKind::CorruptState, "No winning card in trick")
    })
}

/// Play a card into the current trick, enforcing turn, ownership and the follow rule.
pub fn play_card<R: Rng + ?Sized>(
    game: &mut Game,
    player_id: &str,
    card: Card,
    rng: &mut R,
) -> Result<PlayOutcome, DomainError> {
    require_round_status(game, RoundStatus::Playing)?;
    require_turn(game, player_id)?;
    let trump = game.trump()?;

    let hand = &game.player(player_id)?.cards;
    let Some(pos) = hand.iter().position(|c| *c == card) else {
        return Err(DomainError::validation(
            ValidationKind::InvalidCardSelection,
            format!("Card {card} is not in hand"),
        ));
    };
    if !is_following(card, hand, &game.current_round.current_hand, trump) {
        return Err(DomainError::validation(
            ValidationKind::MustFollowSuit,
            format!("{card} does not follow {:?}", game.current_round.current_hand.lead_out),
        ));
    }

    game.player_mut(player_id)?.cards.remove(pos);
    let trick = &mut game.current_round.current_hand;
    if trick.lead_out.is_none() {
        trick.lead_out = Some(card);
    }
    trick.played_cards.push(PlayedCard {
        player_id: player_id.to_string(),
        card,
    });

    if trick.played_cards.len() < game.players.len() {
        let next = game.next_player_id(player_id)?;
        game.current_round.current_hand.current_player_id = next;
        return Ok(PlayOutcome::NextPlayer);
    }

    let winner = winning_play(&game.current_round.current_hand, trump)?.player_id;
    let finished = std::mem::replace(
        &mut game.current_round.current_hand,
        Trick::led_by(winner.clone()),
    );
    game.current_round.completed_hands.push(finished);
    debug!(game_id = %game.id, winner = %winner, "trick complete");

    if game.current_round.completed_hands.len() < TRICKS_PER_ROUND {
        return Ok(PlayOutcome::TrickWon { winner });
    }

    apply_round_scores(game)?;
    if is_game_over(game) {
        let winning_team = complete_game(game)?;
        return Ok(PlayOutcome::GameCompleted {
            winner,
            winning_team,
        });
    }
    start_next_round(game, true, rng)?;
    Ok(PlayOutcome::RoundCompleted { winner })
}
