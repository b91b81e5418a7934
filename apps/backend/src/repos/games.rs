//! Game persistence boundary.
//!
//! The whole aggregate is stored and replaced as one value. Saves are
//! optimistic: an existing game only accepts the revision directly after
//! the one it holds.

use async_trait::async_trait;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::domain::state::{Game, GameStatus, PlayerId};
use crate::errors::domain::{ConflictKind, DomainError, NotFoundKind};

/// One finished game from a single player's point of view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerStatsRow {
    pub game_id: String,
    pub timestamp: OffsetDateTime,
    pub winner: bool,
    pub score: i32,
    pub rings: u32,
}

#[async_trait]
pub trait GameRepository: Send + Sync {
    async fn get(&self, game_id: &str) -> Result<Option<Game>, DomainError>;

    /// Insert a new game (revision 0) or overwrite an existing one whose stored
    /// revision is exactly `game.revision - 1`.
    async fn save(&self, game: &Game) -> Result<(), DomainError>;

    /// Returns whether a game was removed.
    async fn delete(&self, game_id: &str) -> Result<bool, DomainError>;

    async fn list(&self) -> Result<Vec<Game>, DomainError>;

    /// Completed games the player sat in, oldest first.
    async fn finished_games_for_player(
        &self,
        player_id: &str,
    ) -> Result<Vec<PlayerStatsRow>, DomainError>;
}

/// Load a game or fail with `NotFound`.
pub async fn require_game(repo: &dyn GameRepository, game_id: &str) -> Result<Game, DomainError> {
    repo.get(game_id).await?.ok_or_else(|| {
        DomainError::not_found(NotFoundKind::Game, format!("Game {game_id} not found"))
    })
}

/// Process-local repository. Games live as long as the process.
#[derive(Debug, Default)]
pub struct InMemoryGameRepository {
    games: DashMap<String, Game>,
}

impl InMemoryGameRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl GameRepository for InMemoryGameRepository {
    async fn get(&self, game_id: &str) -> Result<Option<Game>, DomainError> {
        Ok(self.games.get(game_id).map(|entry| entry.value().clone()))
    }

    async fn save(&self, game: &Game) -> Result<(), DomainError> {
        match self.games.entry(game.id.clone()) {
            Entry::Vacant(slot) => {
                slot.insert(game.clone());
                Ok(())
            }
            Entry::Occupied(mut slot) => {
                let stored = slot.get().revision;
                if game.revision == 0 {
                    return Err(DomainError::conflict(
                        ConflictKind::GameExists,
                        format!("Game {} already exists", game.id),
                    ));
                }
                if stored + 1 != game.revision {
                    return Err(DomainError::conflict(
                        ConflictKind::StaleRevision,
                        format!(
                            "Game {} is at revision {stored}, cannot save revision {}",
                            game.id, game.revision
                        ),
                    ));
                }
                slot.insert(game.clone());
                Ok(())
            }
        }
    }

    async fn delete(&self, game_id: &str) -> Result<bool, DomainError> {
        Ok(self.games.remove(game_id).is_some())
    }

    async fn list(&self) -> Result<Vec<Game>, DomainError> {
        let mut games: Vec<Game> = self.games.iter().map(|e| e.value().clone()).collect();
        games.sort_by(|a, b| a.timestamp.cmp(&b.timestamp).then_with(|| a.id.cmp(&b.id)));
        Ok(games)
    }

    async fn finished_games_for_player(
        &self,
        player_id: &str,
    ) -> Result<Vec<PlayerStatsRow>, DomainError> {
        let mut rows: Vec<PlayerStatsRow> = self
            .games
            .iter()
            .filter(|e| e.value().status == GameStatus::Completed)
            .filter_map(|e| {
                let game = e.value();
                game.players
                    .iter()
                    .find(|p| p.id == player_id)
                    .map(|p| PlayerStatsRow {
                        game_id: game.id.clone(),
                        timestamp: game.timestamp,
                        winner: p.winner,
                        score: p.score,
                        rings: p.rings,
                    })
            })
            .collect();
        rows.sort_by(|a, b| a.timestamp.cmp(&b.timestamp).then_with(|| a.game_id.cmp(&b.game_id)));
        Ok(rows)
    }
}

/// Ids of everyone seated in a game.
pub fn seated_ids(game: &Game) -> Vec<PlayerId> {
    game.players.iter().map(|p| p.id.clone()).collect()
}
