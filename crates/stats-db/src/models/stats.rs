//! Snapshot database models

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for user_stats table
#[derive(Debug, Clone, FromRow)]
pub struct UserStatsModel {
    pub id: i64,
    pub nickname: String,
    pub followers: i64,
    pub following: i64,
    pub likes: i64,
    pub diggs: i64,
    pub created_at: DateTime<Utc>,
}

/// Database model for video_stats table
#[derive(Debug, Clone, FromRow)]
pub struct VideoStatsModel {
    pub id: i64,
    pub nickname: String,
    pub video_id: String,
    pub views: i64,
    pub comments: i64,
    pub diggs: i64,
    pub shares: i64,
    pub cover_url: String,
    pub video_url: String,
    pub created_at: DateTime<Utc>,
}
