//! Game creation and the transactional entry points used by services.

use rand::seq::SliceRandom;
use rand::Rng;
use time::OffsetDateTime;
use tracing::debug;
use uuid::Uuid;

use crate::domain::bidding::{place_call, Call, CallOutcome};
use crate::domain::buying::{buy_cards, select_suit};
use crate::domain::round_lifecycle::deal_into;
use crate::domain::rules::{team_for_seat, validate_player_count};
use crate::domain::state::{require_active, Game, GameStatus, Player, Round};
use crate::domain::tricks::{play_card, PlayOutcome};
use crate::domain::{Card, Suit};
use crate::errors::domain::{DomainError, ValidationKind};

impl Game {
    /// Create a game with a random seating and the first deal done.
    pub fn create(player_ids: &[String], name: &str, admin_id: &str) -> Result<Game, DomainError> {
        Self::create_with_rng(player_ids, name, admin_id, &mut rand::rng())
    }

    /// As [`Game::create`], drawing all randomness from `rng`.
    ///
    /// The first seated player deals the first round.
    pub fn create_with_rng<R: Rng + ?Sized>(
        player_ids: &[String],
        name: &str,
        admin_id: &str,
        rng: &mut R,
    ) -> Result<Game, DomainError> {
        validate_player_count(player_ids.len())?;
        for (i, id) in player_ids.iter().enumerate() {
            if player_ids[..i].contains(id) {
                return Err(DomainError::validation(
                    ValidationKind::DuplicatePlayer,
                    format!("Player {id} appears more than once"),
                ));
            }
        }
        if !player_ids.iter().any(|id| id == admin_id) {
            return Err(DomainError::validation(
                ValidationKind::AdminNotInPlayers,
                format!("Admin {admin_id} must be one of the players"),
            ));
        }

        let mut seating = player_ids.to_vec();
        seating.shuffle(rng);
        let num_players = seating.len();
        let players: Vec<Player> = seating
            .into_iter()
            .enumerate()
            .map(|(i, id)| Player {
                id,
                seat: (i + 1) as u8,
                call: Call::Pass,
                cards: Vec::new(),
                score: 0,
                rings: 0,
                team_id: team_for_seat(i, num_players),
                winner: false,
            })
            .collect();

        let dealer = players[0].id.clone();
        let first = players[1].id.clone();
        let mut game = Game {
            id: format!("game-{}", Uuid::new_v4().simple()),
            timestamp: OffsetDateTime::now_utc(),
            revision: 0,
            admin_id: admin_id.to_string(),
            name: name.to_string(),
            status: GameStatus::Active,
            players,
            dummy: None,
            current_round: Round::new(1, dealer, first),
            completed: Vec::new(),
            deck: Vec::new(),
        };
        deal_into(&mut game, rng)?;
        debug!(game_id = %game.id, players = num_players, "game created");
        Ok(game)
    }

    /// Run `op` against a copy of the game and keep the result only if it succeeds.
    fn apply<T, F>(&mut self, op: F) -> Result<T, DomainError>
    where
        F: FnOnce(&mut Game) -> Result<T, DomainError>,
    {
        require_active(self)?;
        let mut next = self.clone();
        let out = op(&mut next)?;
        next.revision += 1;
        *self = next;
        Ok(out)
    }

    pub fn call(&mut self, player_id: &str, call: Call) -> Result<CallOutcome, DomainError> {
        self.call_with_rng(player_id, call, &mut rand::rng())
    }

    pub fn call_with_rng<R: Rng + ?Sized>(
        &mut self,
        player_id: &str,
        call: Call,
        rng: &mut R,
    ) -> Result<CallOutcome, DomainError> {
        self.apply(|g| place_call(g, player_id, call, rng))
    }

    pub fn select_suit(
        &mut self,
        player_id: &str,
        suit: Suit,
        kept: Vec<Card>,
    ) -> Result<(), DomainError> {
        self.apply(|g| select_suit(g, player_id, suit, kept))
    }

    pub fn buy(&mut self, player_id: &str, kept: Vec<Card>) -> Result<(), DomainError> {
        self.apply(|g| buy_cards(g, player_id, kept))
    }

    pub fn play(&mut self, player_id: &str, card: Card) -> Result<PlayOutcome, DomainError> {
        self.play_with_rng(player_id, card, &mut rand::rng())
    }

    pub fn play_with_rng<R: Rng + ?Sized>(
        &mut self,
        player_id: &str,
        card: Card,
        rng: &mut R,
    ) -> Result<PlayOutcome, DomainError> {
        self.apply(|g| play_card(g, player_id, card, rng))
    }
}
