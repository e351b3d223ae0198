//! Trend service
//!
//! Trending lists are read through the Redis cache when one is configured.
//! Cache failures never fail a request; they are logged and Postgres answers.
//! Entries are keyed by the cache generation, which the refresher advances
//! after every trend table replacement.

use std::future::Future;

use serde::{de::DeserializeOwned, Serialize};
use stats_cache::TrendKind;
use stats_core::RepoResult;
use tracing::{instrument, warn};

use crate::dto::{TrendHashtagResponse, TrendSongResponse, TrendVideoResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Trend service
pub struct TrendService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> TrendService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    #[instrument(skip(self))]
    pub async fn get_videos(&self) -> ServiceResult<Vec<TrendVideoResponse>> {
        self.read_through(TrendKind::Videos, || async {
            let rows = self.ctx.trend_repo().list_videos().await;
            rows.map(|rows| rows.into_iter().map(TrendVideoResponse::from).collect::<Vec<_>>())
        })
        .await
    }

    #[instrument(skip(self))]
    pub async fn get_hashtags(&self) -> ServiceResult<Vec<TrendHashtagResponse>> {
        self.read_through(TrendKind::Hashtags, || async {
            let rows = self.ctx.trend_repo().list_hashtags().await;
            rows.map(|rows| rows.into_iter().map(TrendHashtagResponse::from).collect::<Vec<_>>())
        })
        .await
    }

    #[instrument(skip(self))]
    pub async fn get_songs(&self) -> ServiceResult<Vec<TrendSongResponse>> {
        self.read_through(TrendKind::Songs, || async {
            let rows = self.ctx.trend_repo().list_songs().await;
            rows.map(|rows| rows.into_iter().map(TrendSongResponse::from).collect::<Vec<_>>())
        })
        .await
    }

    async fn read_through<V, F, Fut>(&self, kind: TrendKind, load: F) -> ServiceResult<V>
    where
        V: Serialize + DeserializeOwned,
        F: FnOnce() -> Fut,
        Fut: Future<Output = RepoResult<V>>,
    {
        let Some(cache) = self.ctx.trend_cache() else {
            return Ok(load().await?);
        };

        // Pin the generation before loading so rows read ahead of a refresh
        // are never written where post-refresh readers look
        let generation = match cache.generation().await {
            Ok(generation) => generation,
            Err(e) => {
                warn!(%kind, error = %e, "Trend cache unavailable");
                return Ok(load().await?);
            }
        };

        match cache.get::<V>(kind, generation).await {
            Ok(Some(cached)) => return Ok(cached),
            Ok(None) => {}
            Err(e) => warn!(%kind, error = %e, "Trend cache read failed"),
        }

        let value = load().await?;
        if let Err(e) = cache.put(kind, generation, &value).await {
            warn!(%kind, error = %e, "Trend cache write failed");
        }
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::testing::{builder, context, MemoryRepo, ScriptedProfiles, ScriptedTrends};

    #[tokio::test]
    async fn test_lists_follow_latest_refresh() {
        let repo = MemoryRepo::with_users(&[]);
        let ctx = context(
            repo,
            ScriptedProfiles::returning(vec![]),
            ScriptedTrends::with_videos(3),
        );
        let service = TrendService::new(&ctx);

        assert!(service.get_videos().await.unwrap().is_empty());

        ctx.refresher().refresh_all().await.unwrap();

        let videos = service.get_videos().await.unwrap();
        assert_eq!(videos.len(), 3);
        assert_eq!(videos[1].description, "video 1");
        assert!(service.get_hashtags().await.unwrap().is_empty());
        assert!(service.get_songs().await.unwrap().is_empty());
    }

    /// Reader pins generation N, the refresher swaps tables and advances,
    /// then the reader's late write of the old rows lands under N.
    #[tokio::test]
    async fn test_late_write_from_before_refresh_is_not_served() {
        let Some(cache) = redis_trend_cache() else {
            eprintln!("Skipping test: REDIS_URL not set");
            return;
        };
        let ctx = builder(
            MemoryRepo::with_users(&[]),
            ScriptedProfiles::returning(vec![]),
            ScriptedTrends::with_videos(3),
        )
        .trend_cache(cache.clone())
        .build()
        .unwrap();
        let service = TrendService::new(&ctx);

        let pinned = cache.generation().await.unwrap();
        ctx.refresher().refresh_all().await.unwrap();
        cache
            .put(TrendKind::Videos, pinned, &Vec::<TrendVideoResponse>::new())
            .await
            .unwrap();

        assert_eq!(service.get_videos().await.unwrap().len(), 3);
        assert!(cache.generation().await.unwrap() > pinned);
    }

    fn redis_trend_cache() -> Option<stats_cache::TrendCache> {
        let url = std::env::var("REDIS_URL").ok()?;
        let pool = stats_cache::RedisPool::from_config(&stats_common::RedisConfig {
            url,
            max_connections: 2,
        })
        .ok()?;
        Some(stats_cache::TrendCache::new(pool, 60))
    }
}
