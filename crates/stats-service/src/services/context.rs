//! Service context - dependency container for services

use std::sync::Arc;

use stats_cache::{SharedRedisPool, TrendCache};
use stats_core::traits::{StatsRepository, TrendRepository, UserRepository};
use stats_db::PgPool;
use stats_scraper::{ProfileSource, TrendSource};

use super::error::{ServiceError, ServiceResult};
use super::refresh::StatsRefresher;

/// Service context containing all dependencies
///
/// Holds the database pool, the optional Redis pool and trend cache, the
/// repositories and the refresher used for background stats loads.
#[derive(Clone)]
pub struct ServiceContext {
    // Database pool
    pool: PgPool,

    // Redis pool (absent when running without a cache)
    redis_pool: Option<SharedRedisPool>,

    // Repositories
    user_repo: Arc<dyn UserRepository>,
    stats_repo: Arc<dyn StatsRepository>,
    trend_repo: Arc<dyn TrendRepository>,

    // Cache stores
    trend_cache: Option<TrendCache>,

    // Background refresh
    refresher: StatsRefresher,
}

impl ServiceContext {
    // === Database Pool ===

    /// Get the PostgreSQL connection pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Get the Redis connection pool, if configured
    pub fn redis_pool(&self) -> Option<&SharedRedisPool> {
        self.redis_pool.as_ref()
    }

    // === Repositories ===

    pub fn user_repo(&self) -> &dyn UserRepository {
        self.user_repo.as_ref()
    }

    pub fn stats_repo(&self) -> &dyn StatsRepository {
        self.stats_repo.as_ref()
    }

    pub fn trend_repo(&self) -> &dyn TrendRepository {
        self.trend_repo.as_ref()
    }

    // === Cache Stores ===

    pub fn trend_cache(&self) -> Option<&TrendCache> {
        self.trend_cache.as_ref()
    }

    // === Refresh ===

    pub fn refresher(&self) -> &StatsRefresher {
        &self.refresher
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("pool", &"PgPool")
            .field("redis_pool", &self.redis_pool.is_some())
            .field("repositories", &"...")
            .field("trend_cache", &self.trend_cache.is_some())
            .finish()
    }
}

/// Builder for creating ServiceContext
#[derive(Default)]
pub struct ServiceContextBuilder {
    pool: Option<PgPool>,
    redis_pool: Option<SharedRedisPool>,
    user_repo: Option<Arc<dyn UserRepository>>,
    stats_repo: Option<Arc<dyn StatsRepository>>,
    trend_repo: Option<Arc<dyn TrendRepository>>,
    profile_source: Option<Arc<dyn ProfileSource>>,
    trend_source: Option<Arc<dyn TrendSource>>,
    trend_cache: Option<TrendCache>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pool(mut self, pool: PgPool) -> Self {
        self.pool = Some(pool);
        self
    }

    pub fn redis_pool(mut self, redis_pool: SharedRedisPool) -> Self {
        self.redis_pool = Some(redis_pool);
        self
    }

    pub fn user_repo(mut self, repo: Arc<dyn UserRepository>) -> Self {
        self.user_repo = Some(repo);
        self
    }

    pub fn stats_repo(mut self, repo: Arc<dyn StatsRepository>) -> Self {
        self.stats_repo = Some(repo);
        self
    }

    pub fn trend_repo(mut self, repo: Arc<dyn TrendRepository>) -> Self {
        self.trend_repo = Some(repo);
        self
    }

    pub fn profile_source(mut self, source: Arc<dyn ProfileSource>) -> Self {
        self.profile_source = Some(source);
        self
    }

    pub fn trend_source(mut self, source: Arc<dyn TrendSource>) -> Self {
        self.trend_source = Some(source);
        self
    }

    pub fn trend_cache(mut self, cache: TrendCache) -> Self {
        self.trend_cache = Some(cache);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any required dependency is missing
    pub fn build(self) -> ServiceResult<ServiceContext> {
        let user_repo = self
            .user_repo
            .ok_or_else(|| ServiceError::validation("user_repo is required"))?;
        let stats_repo = self
            .stats_repo
            .ok_or_else(|| ServiceError::validation("stats_repo is required"))?;
        let trend_repo = self
            .trend_repo
            .ok_or_else(|| ServiceError::validation("trend_repo is required"))?;

        let refresher = StatsRefresher::new(
            user_repo.clone(),
            stats_repo.clone(),
            trend_repo.clone(),
            self.profile_source
                .ok_or_else(|| ServiceError::validation("profile_source is required"))?,
            self.trend_source
                .ok_or_else(|| ServiceError::validation("trend_source is required"))?,
            self.trend_cache.clone(),
        );

        Ok(ServiceContext {
            pool: self
                .pool
                .ok_or_else(|| ServiceError::validation("pool is required"))?,
            redis_pool: self.redis_pool,
            user_repo,
            stats_repo,
            trend_repo,
            trend_cache: self.trend_cache,
            refresher,
        })
    }
}
