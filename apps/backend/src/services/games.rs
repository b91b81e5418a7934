//! Game orchestration: load, mutate, save, refresh caches.
//!
//! Mutations on one game are serialised through a per-game async mutex, so
//! at most one load/mutate/save cycle is in flight for any game id. A lock
//! lives only while its game is active: unknown, finished and deleted games
//! drop their entry.

use std::sync::Arc;

use dashmap::DashMap;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use crate::config::GameConfig;
use crate::domain::game_transition::{derive_game_transitions, GameLifecycleView};
use crate::domain::{project_state, Call, Card, Game, GameStatus, PlayerId, State, Suit};
use crate::error::AppError;
use crate::errors::domain::{DomainError, ValidationKind};
use crate::repos::games::seated_ids;
use crate::repos::{require_game, GameRepository, InMemoryGameRepository};
use crate::services::state_cache::{MokaStateCache, StateCache};
use crate::services::stats::StatsService;

/// Answer to a state poll.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StateLookup {
    /// The caller already holds this revision.
    Unchanged { revision: u64 },
    Changed(State),
}

/// Listing entry. Carries no cards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSummary {
    pub id: String,
    pub name: String,
    pub status: GameStatus,
    pub revision: u64,
    pub timestamp: OffsetDateTime,
    pub admin_id: PlayerId,
    pub player_ids: Vec<PlayerId>,
}

impl From<&Game> for GameSummary {
    fn from(game: &Game) -> Self {
        Self {
            id: game.id.clone(),
            name: game.name.clone(),
            status: game.status,
            revision: game.revision,
            timestamp: game.timestamp,
            admin_id: game.admin_id.clone(),
            player_ids: seated_ids(game),
        }
    }
}

pub struct GameService {
    repo: Arc<dyn GameRepository>,
    cache: Arc<dyn StateCache>,
    stats: Arc<StatsService>,
    locks: DashMap<String, Arc<Mutex<()>>>,
}

impl GameService {
    pub fn new(
        repo: Arc<dyn GameRepository>,
        cache: Arc<dyn StateCache>,
        stats: Arc<StatsService>,
    ) -> Self {
        Self {
            repo,
            cache,
            stats,
            locks: DashMap::new(),
        }
    }

    /// A service backed by the in-memory repository and moka caches.
    pub fn in_memory(config: &GameConfig) -> Self {
        let repo: Arc<dyn GameRepository> = Arc::new(InMemoryGameRepository::new());
        let cache = Arc::new(MokaStateCache::new(
            config.state_cache_ttl,
            config.state_cache_capacity,
        ));
        let stats = Arc::new(StatsService::new(repo.clone(), config.stats_cache_ttl));
        Self::new(repo, cache, stats)
    }

    pub fn stats(&self) -> &StatsService {
        &self.stats
    }

    fn lock_for(&self, game_id: &str) -> Arc<Mutex<()>> {
        self.locks
            .entry(game_id.to_string())
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone()
    }

    async fn cache_state(&self, game_id: &str, viewer_id: &str, state: State) {
        if let Err(e) = self.cache.set(game_id, viewer_id, state).await {
            warn!(game_id, viewer_id, error = %e, "state cache write failed");
        }
    }

    /// Create a game and return the admin's view of it.
    pub async fn create(
        &self,
        player_ids: &[String],
        name: &str,
        admin_id: &str,
    ) -> Result<State, AppError> {
        let game = Game::create(player_ids, name, admin_id)?;
        self.repo.save(&game).await?;
        info!(game_id = %game.id, players = game.players.len(), "game created");

        let state = project_state(&game, admin_id);
        self.cache_state(&game.id, admin_id, state.clone()).await;
        Ok(state)
    }

    /// Load, apply `op`, save, and refresh the acting player's cached view.
    async fn mutate<T, F>(&self, game_id: &str, player_id: &str, op: F) -> Result<(State, T), AppError>
    where
        T: Send,
        F: FnOnce(&mut Game) -> Result<T, DomainError> + Send,
    {
        let lock = self.lock_for(game_id);
        let _guard = lock.lock().await;

        let mut game = match require_game(self.repo.as_ref(), game_id).await {
            Ok(game) => game,
            Err(e) => {
                self.locks.remove(game_id);
                return Err(e.into());
            }
        };
        if game.status != GameStatus::Active {
            // Nothing will ever mutate a finished game again.
            self.locks.remove(game_id);
        }
        let before = GameLifecycleView::from(&game);
        let out = op(&mut game)?;
        self.repo.save(&game).await?;

        let after = GameLifecycleView::from(&game);
        for transition in derive_game_transitions(&before, &after) {
            debug!(game_id, revision = game.revision, ?transition, "game transition");
        }
        if game.status == GameStatus::Completed {
            for id in seated_ids(&game) {
                self.stats.invalidate(&id).await;
            }
            self.locks.remove(game_id);
            info!(game_id, revision = game.revision, "game finished");
        }

        let state = project_state(&game, player_id);
        self.cache_state(game_id, player_id, state.clone()).await;
        Ok((state, out))
    }

    pub async fn call(&self, game_id: &str, player_id: &str, call: Call) -> Result<State, AppError> {
        let (state, outcome) = self
            .mutate(game_id, player_id, |g| g.call(player_id, call))
            .await?;
        debug!(game_id, player_id, %call, ?outcome, "call placed");
        Ok(state)
    }

    pub async fn select_suit(
        &self,
        game_id: &str,
        player_id: &str,
        suit: Suit,
        kept: Vec<Card>,
    ) -> Result<State, AppError> {
        let (state, ()) = self
            .mutate(game_id, player_id, |g| g.select_suit(player_id, suit, kept))
            .await?;
        Ok(state)
    }

    pub async fn buy(&self, game_id: &str, player_id: &str, kept: Vec<Card>) -> Result<State, AppError> {
        let (state, ()) = self
            .mutate(game_id, player_id, |g| g.buy(player_id, kept))
            .await?;
        Ok(state)
    }

    pub async fn play(&self, game_id: &str, player_id: &str, card: Card) -> Result<State, AppError> {
        let (state, outcome) = self
            .mutate(game_id, player_id, |g| g.play(player_id, card))
            .await?;
        debug!(game_id, player_id, %card, ?outcome, "card played");
        Ok(state)
    }

    /// The full aggregate. Hands included; not for players.
    pub async fn get(&self, game_id: &str) -> Result<Game, AppError> {
        Ok(require_game(self.repo.as_ref(), game_id).await?)
    }

    /// A viewer's projection, short-circuiting when they are already current.
    pub async fn get_state(
        &self,
        game_id: &str,
        viewer_id: &str,
        known_revision: Option<u64>,
    ) -> Result<StateLookup, AppError> {
        let game = require_game(self.repo.as_ref(), game_id).await?;
        if let Some(known) = known_revision {
            if known >= game.revision {
                return Ok(StateLookup::Unchanged {
                    revision: game.revision,
                });
            }
        }

        match self.cache.get(game_id, viewer_id).await {
            Ok(Some(cached)) if cached.revision == game.revision => {
                return Ok(StateLookup::Changed(State::clone(&cached)));
            }
            Ok(_) => {}
            Err(e) => warn!(game_id, viewer_id, error = %e, "state cache read failed"),
        }

        let state = project_state(&game, viewer_id);
        self.cache_state(game_id, viewer_id, state.clone()).await;
        Ok(StateLookup::Changed(state))
    }

    pub async fn list(&self) -> Result<Vec<GameSummary>, AppError> {
        let games = self.repo.list().await?;
        Ok(games.iter().map(GameSummary::from).collect())
    }

    /// Remove an active game. Only its admin may do this.
    pub async fn delete(&self, game_id: &str, requester_id: &str) -> Result<(), AppError> {
        let lock = self.lock_for(game_id);
        let _guard = lock.lock().await;

        let game = match require_game(self.repo.as_ref(), game_id).await {
            Ok(game) => game,
            Err(e) => {
                self.locks.remove(game_id);
                return Err(e.into());
            }
        };
        if game.admin_id != requester_id {
            return Err(AppError::forbidden(format!(
                "Only the admin may delete game {game_id}"
            )));
        }
        if game.status != GameStatus::Active {
            self.locks.remove(game_id);
            return Err(AppError::invalid(
                ValidationKind::GameNotActive,
                format!("Game {game_id} is finished and cannot be deleted"),
            ));
        }

        self.repo.delete(game_id).await?;
        for id in seated_ids(&game) {
            if let Err(e) = self.cache.delete(game_id, &id).await {
                warn!(game_id, viewer_id = %id, error = %e, "state cache delete failed");
            }
        }
        self.locks.remove(game_id);
        info!(game_id, requester_id, "game deleted");
        Ok(())
    }
}
