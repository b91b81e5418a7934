use std::collections::BTreeMap;

use tracing::debug;

use crate::domain::bidding::Call;
use crate::domain::cards_logic::{is_trump, trump_rank};
use crate::domain::rules::{
    TeamId, BEST_TRUMP_POINTS, JINK_POINTS, TRICKS_PER_ROUND, TRICK_POINTS,
};
use crate::domain::state::{Game, PlayedCard, Player};
use crate::domain::tricks::winning_play;
use crate::domain::{Card, Suit};
use crate::errors::domain::{DomainError, FatalKind, ValidationKind};

/// Points each team earned in a round, and the team that went down, if any.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RoundScore {
    pub team_points: BTreeMap<TeamId, i32>,
    pub rung_team: Option<TeamId>,
}

/// The highest trump among the round's winning cards.
pub fn best_trump(winning: &[PlayedCard], trump: Suit) -> Option<Card> {
    winning
        .iter()
        .map(|p| p.card)
        .filter(|c| is_trump(*c, trump))
        .max_by_key(|c| trump_rank(*c))
}

/// Value of a won trick: the best trump is worth double.
pub fn trick_points(winning_card: Card, best: Option<Card>) -> i32 {
    if best == Some(winning_card) {
        BEST_TRUMP_POINTS
    } else {
        TRICK_POINTS
    }
}

fn team_of(players: &[Player], player_id: &str) -> Result<TeamId, DomainError> {
    players
        .iter()
        .find(|p| p.id == player_id)
        .map(|p| p.team_id)
        .ok_or_else(|| {
            DomainError::validation(
                ValidationKind::PlayerNotFound,
                format!("Player {player_id} is not seated in this game"),
            )
        })
}

fn require_full_round(winning: &[PlayedCard]) -> Result<(), DomainError> {
    if winning.len() == TRICKS_PER_ROUND {
        Ok(())
    } else {
        Err(DomainError::fatal(
            FatalKind::CorruptState,
            format!("Expected {TRICKS_PER_ROUND} winning cards, got {}", winning.len()),
        ))
    }
}

/// A jink stands when the Goer called it, at least three play, and the Goer's
/// team took every trick.
pub fn is_jink(players: &[Player], goer_id: &str, winning: &[PlayedCard]) -> Result<bool, DomainError> {
    require_full_round(winning)?;
    let goer = players.iter().find(|p| p.id == goer_id).ok_or_else(|| {
        DomainError::validation(
            ValidationKind::PlayerNotFound,
            format!("Goer {goer_id} is not seated in this game"),
        )
    })?;
    if goer.call != Call::Jink || players.len() < 3 {
        return Ok(false);
    }
    for play in winning {
        if team_of(players, &play.player_id)? != goer.team_id {
            return Ok(false);
        }
    }
    Ok(true)
}

/// Score a finished round from its five winning plays.
pub fn score_round(
    players: &[Player],
    goer_id: &str,
    winning: &[PlayedCard],
    trump: Suit,
) -> Result<RoundScore, DomainError> {
    require_full_round(winning)?;
    let goer_team = team_of(players, goer_id)?;
    let goer_call = players
        .iter()
        .find(|p| p.id == goer_id)
        .map(|p| p.call)
        .unwrap_or_default();

    let mut team_points: BTreeMap<TeamId, i32> = BTreeMap::new();
    if is_jink(players, goer_id, winning)? {
        team_points.insert(goer_team, JINK_POINTS);
        return Ok(RoundScore {
            team_points,
            rung_team: None,
        });
    }

    let best = best_trump(winning, trump);
    for play in winning {
        let team = team_of(players, &play.player_id)?;
        *team_points.entry(team).or_insert(0) += trick_points(play.card, best);
    }

    let call_value = i32::from(goer_call.value());
    let goer_points = team_points.get(&goer_team).copied().unwrap_or(0);
    let rung_team = if goer_points < call_value {
        team_points.insert(goer_team, -call_value);
        Some(goer_team)
    } else {
        None
    };

    Ok(RoundScore {
        team_points,
        rung_team,
    })
}

/// Winning plays of every completed trick in the current round.
pub fn winning_plays(game: &Game) -> Result<Vec<PlayedCard>, DomainError> {
    let trump = game.trump()?;
    game.current_round
        .completed_hands
        .iter()
        .map(|t| winning_play(t, trump))
        .collect()
}

/// Score the current round and fold the result into every player's totals.
pub fn apply_round_scores(game: &mut Game) -> Result<RoundScore, DomainError> {
    let winning = winning_plays(game)?;
    let trump = game.trump()?;
    let goer_id = game.goer_id()?.to_string();
    let score = score_round(&game.players, &goer_id, &winning, trump)?;

    for player in game.players.iter_mut() {
        if let Some(points) = score.team_points.get(&player.team_id) {
            player.score += points;
        }
        if score.rung_team == Some(player.team_id) {
            player.rings += 1;
        }
    }
    debug!(game_id = %game.id, points = ?score.team_points, rung = ?score.rung_team, "round scored");
    Ok(score)
}
