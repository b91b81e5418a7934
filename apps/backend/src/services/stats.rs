//! Per-player history of finished games, read through a cache.

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache;
use tracing::debug;

use crate::error::AppError;
use crate::repos::{GameRepository, PlayerStatsRow};

pub struct StatsService {
    repo: Arc<dyn GameRepository>,
    cache: Cache<String, Arc<Vec<PlayerStatsRow>>>,
}

impl StatsService {
    pub fn new(repo: Arc<dyn GameRepository>, ttl: Duration) -> Self {
        let cache = Cache::builder().max_capacity(10_000).time_to_live(ttl).build();
        Self { repo, cache }
    }

    pub async fn player_stats(&self, player_id: &str) -> Result<Arc<Vec<PlayerStatsRow>>, AppError> {
        if let Some(rows) = self.cache.get(player_id).await {
            return Ok(rows);
        }

        let rows = Arc::new(self.repo.finished_games_for_player(player_id).await?);
        self.cache.insert(player_id.to_string(), rows.clone()).await;
        debug!(player_id, games = rows.len(), "stats loaded");
        Ok(rows)
    }

    /// Drop the cached rows so the next read goes to the repository.
    pub async fn invalidate(&self, player_id: &str) {
        self.cache.invalidate(player_id).await;
    }
}
