//! Trend database models

use chrono::{DateTime, Utc};
use sqlx::FromRow;

#[derive(Debug, Clone, FromRow)]
pub struct TrendVideoModel {
    pub id: i64,
    pub cover_url: String,
    pub views: i64,
    pub description: String,
    pub video_url: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, FromRow)]
pub struct TrendHashtagModel {
    pub id: i64,
    pub name: String,
    pub views: i64,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, FromRow)]
pub struct TrendSongModel {
    pub id: i64,
    pub cover_url: String,
    pub song_url: String,
    pub title: String,
    pub author: String,
    pub created_at: DateTime<Utc>,
}
