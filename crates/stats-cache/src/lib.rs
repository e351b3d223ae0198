//! # stats-cache
//!
//! Redis caching layer for the trending lists.
//!
//! ## Features
//!
//! - **Connection Pool**: Managed Redis connection pool with deadpool
//! - **Trend Cache**: Read-through cache for the trending video/hashtag/song lists,
//!   keyed by a generation counter the refresher advances
//!
//! ## Example
//!
//! ```ignore
//! use stats_cache::{RedisPool, TrendCache, TrendKind};
//!
//! let pool = RedisPool::from_config(&config.redis)?;
//! let cache = TrendCache::new(pool, 6 * 60 * 60);
//!
//! let generation = cache.generation().await?;
//! cache.put(TrendKind::Hashtags, generation, &hashtags).await?;
//! let cached: Option<Vec<Hashtag>> = cache.get(TrendKind::Hashtags, generation).await?;
//! cache.advance().await?;
//! ```

pub mod pool;
pub mod trend;

// Re-export pool types
pub use pool::{RedisPool, RedisPoolError, RedisResult, SharedRedisPool};

// Re-export trend cache types
pub use trend::{TrendCache, TrendKind, TREND_GENERATION_KEY, TREND_KEY_PREFIX};
