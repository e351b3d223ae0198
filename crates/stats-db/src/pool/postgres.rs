//! PostgreSQL connection pool

use sqlx::postgres::{PgPool, PgPoolOptions};
use std::time::Duration;

/// Pool sizing and connection lifetimes
#[derive(Debug, Clone)]
pub struct PoolSettings {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub acquire_timeout: Duration,
    pub idle_timeout: Duration,
    pub max_lifetime: Duration,
}

impl PoolSettings {
    /// Settings for `url` with the given bounds and the default lifetimes
    pub fn new(url: impl Into<String>, max_connections: u32, min_connections: u32) -> Self {
        Self {
            url: url.into(),
            max_connections,
            min_connections: min_connections.min(max_connections),
            acquire_timeout: Duration::from_secs(10),
            idle_timeout: Duration::from_secs(300),
            max_lifetime: Duration::from_secs(1800),
        }
    }

    fn options(&self) -> PgPoolOptions {
        PgPoolOptions::new()
            .max_connections(self.max_connections)
            .min_connections(self.min_connections)
            .acquire_timeout(self.acquire_timeout)
            .idle_timeout(self.idle_timeout)
            .max_lifetime(self.max_lifetime)
    }
}

/// Connect a new pool; fails if the first connection cannot be opened
pub async fn create_pool(settings: &PoolSettings) -> Result<PgPool, sqlx::Error> {
    settings.options().connect(&settings.url).await
}
