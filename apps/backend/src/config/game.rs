use std::env;
use std::time::Duration;

use crate::error::AppError;

const STATE_CACHE_TTL_SECS: &str = "CARDS110_STATE_CACHE_TTL_SECS";
const STATE_CACHE_CAPACITY: &str = "CARDS110_STATE_CACHE_CAPACITY";
const STATS_CACHE_TTL_SECS: &str = "CARDS110_STATS_CACHE_TTL_SECS";

/// Runtime settings for the game service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// How long a projected state stays cached for a viewer.
    pub state_cache_ttl: Duration,
    pub state_cache_capacity: u64,
    pub stats_cache_ttl: Duration,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            state_cache_ttl: Duration::from_secs(600),
            state_cache_capacity: 10_000,
            stats_cache_ttl: Duration::from_secs(600),
        }
    }
}

impl GameConfig {
    /// Read settings from the process environment, falling back to defaults
    /// for anything unset.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build settings from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Ok(Self {
            state_cache_ttl: parse_secs(&lookup, STATE_CACHE_TTL_SECS)?
                .unwrap_or(defaults.state_cache_ttl),
            state_cache_capacity: parse_u64(&lookup, STATE_CACHE_CAPACITY)?
                .unwrap_or(defaults.state_cache_capacity),
            stats_cache_ttl: parse_secs(&lookup, STATS_CACHE_TTL_SECS)?
                .unwrap_or(defaults.stats_cache_ttl),
        })
    }
}

fn parse_u64<F>(lookup: &F, name: &str) -> Result<Option<u64>, AppError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(name) {
        None => Ok(None),
        Some(raw) => raw.trim().parse::<u64>().map(Some).map_err(|_| {
            AppError::config(format!(
                "Environment variable '{name}' must be a non-negative integer, got '{raw}'"
            ))
        }),
    }
}

fn parse_secs<F>(lookup: &F, name: &str) -> Result<Option<Duration>, AppError>
where
    F: Fn(&str) -> Option<String>,
{
    Ok(parse_u64(lookup, name)?.map(Duration::from_secs))
}
