//! Redis connection pool for the trend cache.
//!
//! Values are stored as JSON strings. The pool is built lazily: no connection
//! is opened until the first command, so a Redis outage at startup only
//! degrades reads to Postgres.

use std::sync::Arc;

use deadpool_redis::{Config, Pool, Runtime};
use redis::AsyncCommands;
use serde::{de::DeserializeOwned, Serialize};
use stats_common::RedisConfig;

#[derive(Debug, thiserror::Error)]
pub enum RedisPoolError {
    #[error("Failed to create Redis pool: {0}")]
    CreatePool(String),

    #[error("Failed to get connection from pool: {0}")]
    GetConnection(#[from] deadpool_redis::PoolError),

    #[error("Redis command error: {0}")]
    Redis(#[from] redis::RedisError),

    #[error("Cached value is not valid JSON: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type RedisResult<T> = Result<T, RedisPoolError>;

/// Pool handle shared by the service context and the health probe
pub type SharedRedisPool = Arc<RedisPool>;

#[derive(Clone)]
pub struct RedisPool {
    pool: Pool,
}

impl std::fmt::Debug for RedisPool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let status = self.pool.status();
        f.debug_struct("RedisPool")
            .field("size", &status.size)
            .field("max_size", &status.max_size)
            .finish()
    }
}

/// Host part of a Redis URL, without credentials
fn redact_url(url: &str) -> &str {
    url.split('@').next_back().unwrap_or(url)
}

impl RedisPool {
    pub fn from_config(config: &RedisConfig) -> RedisResult<Self> {
        let pool = Config::from_url(&config.url)
            .builder()
            .map_err(|e| RedisPoolError::CreatePool(e.to_string()))?
            .max_size(config.max_connections as usize)
            .runtime(Runtime::Tokio1)
            .build()
            .map_err(|e| RedisPoolError::CreatePool(e.to_string()))?;

        tracing::info!(
            url = %redact_url(&config.url),
            max_connections = config.max_connections,
            "Redis pool created"
        );
        Ok(Self { pool })
    }

    async fn conn(&self) -> RedisResult<deadpool_redis::Connection> {
        Ok(self.pool.get().await?)
    }

    /// PING, for the readiness probe
    pub async fn health_check(&self) -> RedisResult<()> {
        let mut conn = self.conn().await?;
        redis::cmd("PING").query_async::<String>(&mut conn).await?;
        Ok(())
    }

    /// Store `value` as JSON, expiring after `ttl_seconds` when given
    pub async fn set_json<V: Serialize>(
        &self,
        key: &str,
        value: &V,
        ttl_seconds: Option<u64>,
    ) -> RedisResult<()> {
        let encoded = serde_json::to_string(value)?;
        let mut conn = self.conn().await?;
        match ttl_seconds {
            Some(ttl) => conn.set_ex::<_, _, ()>(key, encoded, ttl).await?,
            None => conn.set::<_, _, ()>(key, encoded).await?,
        }
        Ok(())
    }

    pub async fn get_json<V: DeserializeOwned>(&self, key: &str) -> RedisResult<Option<V>> {
        let mut conn = self.conn().await?;
        let raw: Option<String> = conn.get(key).await?;
        raw.map(|raw| serde_json::from_str(&raw))
            .transpose()
            .map_err(Into::into)
    }

    /// Atomically increment an integer key, creating it at 1
    pub async fn incr(&self, key: &str) -> RedisResult<u64> {
        let mut conn = self.conn().await?;
        let value: u64 = conn.incr(key, 1u64).await?;
        Ok(value)
    }
}
