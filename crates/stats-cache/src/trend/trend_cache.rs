//! Read-through cache for the trending lists.
//!
//! Each list is stored as one JSON value under `trend:<kind>:<generation>`.
//! The refresher bumps `trend:generation` after replacing the trend tables, so
//! a reader that loaded rows before the swap writes them under a generation
//! nobody reads anymore. Entries expire after the refresh interval.

use std::fmt;

use serde::{de::DeserializeOwned, Serialize};
use tracing::debug;

use crate::pool::{RedisPool, RedisResult};

/// Key prefix for trend lists
pub const TREND_KEY_PREFIX: &str = "trend:";

/// Counter bumped on every trend table replacement
pub const TREND_GENERATION_KEY: &str = "trend:generation";

/// Which trending list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrendKind {
    Videos,
    Hashtags,
    Songs,
}

impl TrendKind {
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Videos => "videos",
            Self::Hashtags => "hashtags",
            Self::Songs => "songs",
        }
    }

    /// Redis key holding this list for one generation
    #[must_use]
    pub fn key(self, generation: u64) -> String {
        format!("{TREND_KEY_PREFIX}{}:{generation}", self.name())
    }
}

impl fmt::Display for TrendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Trending list cache backed by Redis
#[derive(Clone, Debug)]
pub struct TrendCache {
    pool: RedisPool,
    ttl_seconds: u64,
}

impl TrendCache {
    #[must_use]
    pub fn new(pool: RedisPool, ttl_seconds: u64) -> Self {
        Self { pool, ttl_seconds }
    }

    #[must_use]
    pub fn ttl_seconds(&self) -> u64 {
        self.ttl_seconds
    }

    /// Current generation; 0 before the first refresh
    pub async fn generation(&self) -> RedisResult<u64> {
        Ok(self
            .pool
            .get_json::<u64>(TREND_GENERATION_KEY)
            .await?
            .unwrap_or(0))
    }

    /// Cached list for `generation`, or `None` on a miss
    pub async fn get<V: DeserializeOwned>(
        &self,
        kind: TrendKind,
        generation: u64,
    ) -> RedisResult<Option<V>> {
        let value = self.pool.get_json(&kind.key(generation)).await?;
        debug!(%kind, generation, hit = value.is_some(), "Trend cache lookup");
        Ok(value)
    }

    pub async fn put<V: Serialize>(
        &self,
        kind: TrendKind,
        generation: u64,
        value: &V,
    ) -> RedisResult<()> {
        let ttl = (self.ttl_seconds > 0).then_some(self.ttl_seconds);
        self.pool.set_json(&kind.key(generation), value, ttl).await
    }

    /// Move readers to a fresh generation. Returns the new generation.
    pub async fn advance(&self) -> RedisResult<u64> {
        let generation = self.pool.incr(TREND_GENERATION_KEY).await?;
        debug!(generation, "Trend cache generation advanced");
        Ok(generation)
    }
}
