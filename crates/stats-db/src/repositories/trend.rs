//! PostgreSQL implementation of TrendRepository

use async_trait::async_trait;
use chrono::{SubsecRound, Utc};
use sqlx::PgPool;
use tracing::instrument;

use stats_core::entities::{TrendHashtag, TrendSong, TrendVideo};
use stats_core::traits::{RepoResult, TrendRepository};
use stats_core::value_objects::TrendSnapshot;

use crate::models::{TrendHashtagModel, TrendSongModel, TrendVideoModel};

use super::error::map_db_error;

/// PostgreSQL implementation of TrendRepository
#[derive(Clone)]
pub struct PgTrendRepository {
    pool: PgPool,
}

impl PgTrendRepository {
    /// Create a new PgTrendRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TrendRepository for PgTrendRepository {
    #[instrument(skip(self))]
    async fn list_videos(&self) -> RepoResult<Vec<TrendVideo>> {
        let rows = sqlx::query_as::<_, TrendVideoModel>(
            r"
            SELECT id, cover_url, views, description, video_url, created_at
            FROM trend_videos
            ORDER BY id ASC
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(TrendVideo::from).collect())
    }

    #[instrument(skip(self))]
    async fn list_hashtags(&self) -> RepoResult<Vec<TrendHashtag>> {
        let rows = sqlx::query_as::<_, TrendHashtagModel>(
            r"
            SELECT id, name, views, created_at
            FROM trend_hashtags
            ORDER BY id ASC
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(TrendHashtag::from).collect())
    }

    #[instrument(skip(self))]
    async fn list_songs(&self) -> RepoResult<Vec<TrendSong>> {
        let rows = sqlx::query_as::<_, TrendSongModel>(
            r"
            SELECT id, cover_url, song_url, title, author, created_at
            FROM trend_songs
            ORDER BY id ASC
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(TrendSong::from).collect())
    }

    #[instrument(
        skip(self, snapshot),
        fields(
            videos = snapshot.videos.len(),
            hashtags = snapshot.hashtags.len(),
            songs = snapshot.songs.len()
        )
    )]
    async fn replace_all(&self, snapshot: &TrendSnapshot) -> RepoResult<()> {
        let now = Utc::now().trunc_subsecs(6);
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        sqlx::query("DELETE FROM trend_videos")
            .execute(&mut *tx)
            .await
            .map_err(map_db_error)?;
        sqlx::query("DELETE FROM trend_hashtags")
            .execute(&mut *tx)
            .await
            .map_err(map_db_error)?;
        sqlx::query("DELETE FROM trend_songs")
            .execute(&mut *tx)
            .await
            .map_err(map_db_error)?;

        for video in &snapshot.videos {
            sqlx::query(
                r"
                INSERT INTO trend_videos (cover_url, views, description, video_url, created_at)
                VALUES ($1, $2, $3, $4, $5)
                ",
            )
            .bind(&video.cover_url)
            .bind(video.views)
            .bind(&video.description)
            .bind(&video.video_url)
            .bind(now)
            .execute(&mut *tx)
            .await
            .map_err(map_db_error)?;
        }

        for hashtag in &snapshot.hashtags {
            sqlx::query(
                r"
                INSERT INTO trend_hashtags (name, views, created_at)
                VALUES ($1, $2, $3)
                ",
            )
            .bind(&hashtag.name)
            .bind(hashtag.views)
            .bind(now)
            .execute(&mut *tx)
            .await
            .map_err(map_db_error)?;
        }

        for song in &snapshot.songs {
            sqlx::query(
                r"
                INSERT INTO trend_songs (cover_url, song_url, title, author, created_at)
                VALUES ($1, $2, $3, $4, $5)
                ",
            )
            .bind(&song.cover_url)
            .bind(&song.song_url)
            .bind(&song.title)
            .bind(&song.author)
            .bind(now)
            .execute(&mut *tx)
            .await
            .map_err(map_db_error)?;
        }

        tx.commit().await.map_err(map_db_error)?;

        Ok(())
    }
}
