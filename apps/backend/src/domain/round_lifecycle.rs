//! Round turnover and game completion.

use rand::Rng;
use tracing::{debug, info};

use crate::domain::bidding::Call;
use crate::domain::dealing::{deal, new_deck, shuffle};
use crate::domain::rules::{TeamId, WINNING_SCORE};
use crate::domain::scoring::{best_trump, trick_points, winning_plays};
use crate::domain::state::{Game, GameStatus, PlayerId, Round};
use crate::errors::domain::{DomainError, FatalKind, ValidationKind};

pub fn is_game_over(game: &Game) -> bool {
    game.players.iter().any(|p| p.score >= WINNING_SCORE)
}

fn teams_over_line(scores: &[(TeamId, i32)]) -> Vec<TeamId> {
    scores
        .iter()
        .filter(|(_, score)| *score >= WINNING_SCORE)
        .map(|(team, _)| *team)
        .collect()
}

/// Decide which team has won.
///
/// A lone team over the line wins outright. Otherwise the Goer's team wins
/// if it is over. Failing both, the round's tricks are taken back last to
/// first until exactly one team is left over the line.
pub fn winning_team(game: &Game) -> Result<TeamId, DomainError> {
    let mut scores: Vec<(TeamId, i32)> = game
        .team_ids()
        .into_iter()
        .map(|team| (team, game.team_score(team)))
        .collect();

    if let [team] = teams_over_line(&scores).as_slice() {
        return Ok(*team);
    }

    if let Some(goer_id) = game.current_round.goer_id.as_deref() {
        let goer_team = game.team_of(goer_id)?;
        if teams_over_line(&scores).contains(&goer_team) {
            return Ok(goer_team);
        }
    }

    let winning = winning_plays(game)?;
    let best = best_trump(&winning, game.trump()?);
    for play in winning.iter().rev() {
        let team = game.team_of(&play.player_id)?;
        if let Some(entry) = scores.iter_mut().find(|(t, _)| *t == team) {
            entry.1 -= trick_points(play.card, best);
        }
        if let [team] = teams_over_line(&scores).as_slice() {
            return Ok(*team);
        }
    }

    Err(DomainError::fatal(
        FatalKind::UnresolvedWinner,
        format!("No single winning team in game {}", game.id),
    ))
}

/// Mark the winners and close the game. The final round is kept in history.
pub fn complete_game(game: &mut Game) -> Result<TeamId, DomainError> {
    if !is_game_over(game) {
        return Err(DomainError::validation(
            ValidationKind::WrongRoundStatus,
            "No player has reached the winning score",
        ));
    }
    let team = winning_team(game)?;
    for player in game.players.iter_mut() {
        player.winner = player.team_id == team;
    }
    game.status = GameStatus::Completed;
    game.completed.push(game.current_round.clone());
    info!(game_id = %game.id, winning_team = team, "game completed");
    Ok(team)
}

/// Shuffle a fresh deck and deal every seat plus the dummy.
pub fn deal_into<R: Rng + ?Sized>(game: &mut Game, rng: &mut R) -> Result<(), DomainError> {
    let dealt = deal(shuffle(new_deck(), rng), game.players.len())?;
    for (player, hand) in game.players.iter_mut().zip(dealt.hands) {
        player.cards = hand;
        player.call = Call::Pass;
    }
    game.dummy = Some(dealt.dummy);
    game.deck = dealt.deck;
    Ok(())
}

/// Replace the current round with a fresh deal under the next dealer.
///
/// `archive` keeps the finished round in history; a thrown-in round is dropped.
pub fn start_next_round<R: Rng + ?Sized>(
    game: &mut Game,
    archive: bool,
    rng: &mut R,
) -> Result<(), DomainError> {
    let dealer: PlayerId = game.next_player_id(&game.current_round.dealer_id)?;
    let first = game.next_player_id(&dealer)?;
    let number = game.current_round.number + 1;

    let previous = std::mem::replace(&mut game.current_round, Round::new(number, dealer, first));
    if archive {
        game.completed.push(previous);
    }
    deal_into(game, rng)?;
    debug!(game_id = %game.id, round = number, "new round dealt");
    Ok(())
}
