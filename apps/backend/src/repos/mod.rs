//! Repository traits and the in-memory store.

pub mod games;

pub use games::{require_game, GameRepository, InMemoryGameRepository, PlayerStatsRow};
