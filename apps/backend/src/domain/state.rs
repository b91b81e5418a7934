use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::domain::bidding::Call;
use crate::domain::rules::TeamId;
use crate::domain::{Card, Suit};
use crate::errors::domain::{DomainError, FatalKind, ValidationKind};

pub type PlayerId = String;

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GameStatus {
    Active,
    Completed,
}

/// Phases of a single deal.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RoundStatus {
    /// Players bid in seat order, starting after the dealer.
    Calling,
    /// Bidding resolved; the Goer picks trumps and discards.
    Called,
    /// Everyone tops their hand back up from the deck.
    Buying,
    /// Tricks are being played.
    Playing,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub seat: u8,
    pub call: Call,
    pub cards: Vec<Card>,
    pub score: i32,
    pub rings: u32,
    pub team_id: TeamId,
    pub winner: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayedCard {
    pub player_id: PlayerId,
    pub card: Card,
}

/// One trick. Complete once every player has played into it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trick {
    pub timestamp: OffsetDateTime,
    pub lead_out: Option<Card>,
    pub current_player_id: PlayerId,
    pub played_cards: Vec<PlayedCard>,
}

impl Trick {
    pub fn led_by(player_id: impl Into<PlayerId>) -> Self {
        Self {
            timestamp: OffsetDateTime::now_utc(),
            lead_out: None,
            current_player_id: player_id.into(),
            played_cards: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Round {
    pub timestamp: OffsetDateTime,
    pub number: u32,
    pub dealer_id: PlayerId,
    pub goer_id: Option<PlayerId>,
    /// Trumps, once the Goer has chosen.
    pub suit: Option<Suit>,
    pub status: RoundStatus,
    pub current_hand: Trick,
    /// The dealer has taken a call and the taken player must respond.
    pub dealer_seeing: bool,
    pub completed_hands: Vec<Trick>,
}

impl Round {
    pub fn new(number: u32, dealer_id: PlayerId, first_player_id: PlayerId) -> Self {
        Self {
            timestamp: OffsetDateTime::now_utc(),
            number,
            dealer_id,
            goer_id: None,
            suit: None,
            status: RoundStatus::Calling,
            current_hand: Trick::led_by(first_player_id),
            dealer_seeing: false,
            completed_hands: Vec::new(),
        }
    }
}

/// The game aggregate. Holds every piece of authoritative state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    pub id: String,
    pub timestamp: OffsetDateTime,
    /// Bumped once per successful mutation.
    pub revision: u64,
    pub admin_id: PlayerId,
    pub name: String,
    pub status: GameStatus,
    /// Seating order. Never reordered after creation.
    pub players: Vec<Player>,
    pub dummy: Option<Vec<Card>>,
    pub current_round: Round,
    pub completed: Vec<Round>,
    pub deck: Vec<Card>,
}

impl Game {
    pub fn player_index(&self, player_id: &str) -> Result<usize, DomainError> {
        self.players
            .iter()
            .position(|p| p.id == player_id)
            .ok_or_else(|| {
                DomainError::validation(
                    ValidationKind::PlayerNotFound,
                    format!("Player {player_id} is not seated in this game"),
                )
            })
    }

    pub fn player(&self, player_id: &str) -> Result<&Player, DomainError> {
        let idx = self.player_index(player_id)?;
        Ok(&self.players[idx])
    }

    pub fn player_mut(&mut self, player_id: &str) -> Result<&mut Player, DomainError> {
        let idx = self.player_index(player_id)?;
        Ok(&mut self.players[idx])
    }

    /// The player seated after `player_id`, wrapping around the table.
    pub fn next_player_id(&self, player_id: &str) -> Result<PlayerId, DomainError> {
        let idx = self.player_index(player_id)?;
        Ok(self.players[(idx + 1) % self.players.len()].id.clone())
    }

    pub fn current_player_id(&self) -> &str {
        &self.current_round.current_hand.current_player_id
    }

    pub fn is_dealer(&self, player_id: &str) -> bool {
        self.current_round.dealer_id == player_id
    }

    pub fn is_goer(&self, player_id: &str) -> bool {
        self.current_round.goer_id.as_deref() == Some(player_id)
    }

    pub fn team_of(&self, player_id: &str) -> Result<TeamId, DomainError> {
        Ok(self.player(player_id)?.team_id)
    }

    /// Distinct team ids in seating order of first appearance.
    pub fn team_ids(&self) -> Vec<TeamId> {
        let mut teams: Vec<TeamId> = Vec::new();
        for p in &self.players {
            if !teams.contains(&p.team_id) {
                teams.push(p.team_id);
            }
        }
        teams
    }

    /// Cumulative score of a team. Partners always share a score.
    pub fn team_score(&self, team_id: TeamId) -> i32 {
        self.players
            .iter()
            .find(|p| p.team_id == team_id)
            .map(|p| p.score)
            .unwrap_or(0)
    }

    pub fn max_call(&self) -> Call {
        self.players
            .iter()
            .map(|p| p.call)
            .max()
            .unwrap_or(Call::Pass)
    }

    pub fn goer_id(&self) -> Result<&str, DomainError> {
        self.current_round.goer_id.as_deref().ok_or_else(|| {
            DomainError::fatal(FatalKind::CorruptState, "Round has no goer")
        })
    }

    pub fn trump(&self) -> Result<Suit, DomainError> {
        self.current_round.suit.ok_or_else(|| {
            DomainError::fatal(FatalKind::CorruptState, "Round has no trump suit")
        })
    }
}

pub fn require_active(game: &Game) -> Result<(), DomainError> {
    match game.status {
        GameStatus::Active => Ok(()),
        GameStatus::Completed => Err(DomainError::validation(
            ValidationKind::GameNotActive,
            format!("Game {} is not active", game.id),
        )),
    }
}

pub fn require_round_status(game: &Game, expected: RoundStatus) -> Result<(), DomainError> {
    let actual = game.current_round.status;
    if actual == expected {
        Ok(())
    } else {
        Err(DomainError::validation(
            ValidationKind::WrongRoundStatus,
            format!("Round is {actual:?}, expected {expected:?}"),
        ))
    }
}

pub fn require_turn(game: &Game, player_id: &str) -> Result<(), DomainError> {
    game.player_index(player_id)?;
    if game.current_player_id() == player_id {
        Ok(())
    } else {
        Err(DomainError::validation(
            ValidationKind::NotCurrentPlayer,
            format!("It is not {player_id}'s turn"),
        ))
    }
}
