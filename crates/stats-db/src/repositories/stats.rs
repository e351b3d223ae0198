//! PostgreSQL implementation of StatsRepository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{PgPool, Postgres, Transaction};
use tracing::{debug, instrument};

use stats_core::entities::{UserStats, VideoStats};
use stats_core::traits::{RepoResult, StatsRepository};
use stats_core::value_objects::{ProfileFailure, ProfileSnapshot, SnapshotBatch};

use crate::models::{UserStatsModel, VideoStatsModel};

use super::error::map_db_error;

/// PostgreSQL implementation of StatsRepository
#[derive(Clone)]
pub struct PgStatsRepository {
    pool: PgPool,
}

impl PgStatsRepository {
    /// Create a new PgStatsRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn insert_snapshot(
        tx: &mut Transaction<'_, Postgres>,
        snapshot: &ProfileSnapshot,
        captured_at: DateTime<Utc>,
    ) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO user_stats (nickname, followers, following, likes, diggs, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            ",
        )
        .bind(&snapshot.nickname)
        .bind(snapshot.followers)
        .bind(snapshot.following)
        .bind(snapshot.likes)
        .bind(snapshot.diggs)
        .bind(captured_at)
        .execute(&mut **tx)
        .await
        .map_err(map_db_error)?;

        for video in &snapshot.videos {
            sqlx::query(
                r"
                INSERT INTO video_stats
                    (nickname, video_id, views, comments, diggs, shares, cover_url, video_url, created_at)
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
                ",
            )
            .bind(&snapshot.nickname)
            .bind(&video.video_id)
            .bind(video.views)
            .bind(video.comments)
            .bind(video.diggs)
            .bind(video.shares)
            .bind(&video.cover_url)
            .bind(&video.video_url)
            .bind(captured_at)
            .execute(&mut **tx)
            .await
            .map_err(map_db_error)?;
        }

        // Collected successfully: keep the previous avatar if the vendor omitted it
        sqlx::query(
            r"
            UPDATE users
            SET avatar = COALESCE($2, avatar), error = NULL, updated_at = $3
            WHERE nickname = $1
            ",
        )
        .bind(&snapshot.nickname)
        .bind(&snapshot.avatar)
        .bind(captured_at)
        .execute(&mut **tx)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    async fn record_failure(
        tx: &mut Transaction<'_, Postgres>,
        failure: &ProfileFailure,
        captured_at: DateTime<Utc>,
    ) -> RepoResult<()> {
        sqlx::query(
            r"
            UPDATE users
            SET error = $2, updated_at = $3
            WHERE nickname = $1
            ",
        )
        .bind(&failure.nickname)
        .bind(&failure.error)
        .bind(captured_at)
        .execute(&mut **tx)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }
}

#[async_trait]
impl StatsRepository for PgStatsRepository {
    #[instrument(skip(self))]
    async fn find_latest(&self, nickname: &str) -> RepoResult<Option<UserStats>> {
        let result = sqlx::query_as::<_, UserStatsModel>(
            r"
            SELECT id, nickname, followers, following, likes, diggs, created_at
            FROM user_stats
            WHERE nickname = $1
            ORDER BY created_at DESC, id DESC
            LIMIT 1
            ",
        )
        .bind(nickname)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(UserStats::from))
    }

    #[instrument(skip(self))]
    async fn find_earliest_since(
        &self,
        nickname: &str,
        since: DateTime<Utc>,
    ) -> RepoResult<Option<UserStats>> {
        let result = sqlx::query_as::<_, UserStatsModel>(
            r"
            SELECT id, nickname, followers, following, likes, diggs, created_at
            FROM user_stats
            WHERE nickname = $1 AND created_at >= $2
            ORDER BY created_at ASC, id ASC
            LIMIT 1
            ",
        )
        .bind(nickname)
        .bind(since)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(UserStats::from))
    }

    #[instrument(skip(self))]
    async fn find_videos_at(
        &self,
        nickname: &str,
        captured_at: DateTime<Utc>,
    ) -> RepoResult<Vec<VideoStats>> {
        let rows = sqlx::query_as::<_, VideoStatsModel>(
            r"
            SELECT id, nickname, video_id, views, comments, diggs, shares, cover_url, video_url,
                   created_at
            FROM video_stats
            WHERE nickname = $1 AND created_at = $2
            ORDER BY id ASC
            ",
        )
        .bind(nickname)
        .bind(captured_at)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(VideoStats::from).collect())
    }

    #[instrument(
        skip(self, batch),
        fields(
            snapshots = batch.snapshots.len(),
            failures = batch.failures.len(),
            videos = batch.video_count()
        )
    )]
    async fn store_batch(&self, batch: &SnapshotBatch) -> RepoResult<()> {
        if batch.is_empty() {
            return Ok(());
        }

        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        for snapshot in &batch.snapshots {
            Self::insert_snapshot(&mut tx, snapshot, batch.captured_at).await?;
        }

        for failure in &batch.failures {
            Self::record_failure(&mut tx, failure, batch.captured_at).await?;
        }

        tx.commit().await.map_err(map_db_error)?;
        debug!("Snapshot batch committed");

        Ok(())
    }
}
