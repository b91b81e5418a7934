//! Cache of projected per-viewer states.
//!
//! Entries are keyed by (game id, viewer id). A cached state carries the
//! revision it was projected from, so readers can tell whether it is current.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use moka::future::Cache;

use crate::domain::State;
use crate::error::AppError;

#[async_trait]
pub trait StateCache: Send + Sync {
    async fn get(&self, game_id: &str, viewer_id: &str) -> Result<Option<Arc<State>>, AppError>;
    async fn set(&self, game_id: &str, viewer_id: &str, state: State) -> Result<(), AppError>;
    async fn delete(&self, game_id: &str, viewer_id: &str) -> Result<(), AppError>;
}

type Key = (String, String);

pub struct MokaStateCache {
    cache: Cache<Key, Arc<State>>,
}

impl MokaStateCache {
    pub fn new(ttl: Duration, capacity: u64) -> Self {
        let cache = Cache::builder()
            .max_capacity(capacity)
            .time_to_live(ttl)
            .build();
        Self { cache }
    }

    fn key(game_id: &str, viewer_id: &str) -> Key {
        (game_id.to_string(), viewer_id.to_string())
    }
}

#[async_trait]
impl StateCache for MokaStateCache {
    async fn get(&self, game_id: &str, viewer_id: &str) -> Result<Option<Arc<State>>, AppError> {
        Ok(self.cache.get(&Self::key(game_id, viewer_id)).await)
    }

    async fn set(&self, game_id: &str, viewer_id: &str, state: State) -> Result<(), AppError> {
        self.cache
            .insert(Self::key(game_id, viewer_id), Arc::new(state))
            .await;
        Ok(())
    }

    async fn delete(&self, game_id: &str, viewer_id: &str) -> Result<(), AppError> {
        self.cache.invalidate(&Self::key(game_id, viewer_id)).await;
        Ok(())
    }
}
