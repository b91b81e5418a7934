//! Service layer: orchestration over the domain, repository and caches.

pub mod games;
pub mod state_cache;
pub mod stats;

pub use games::{GameService, GameSummary, StateLookup};
pub use state_cache::{MokaStateCache, StateCache};
pub use stats::StatsService;
