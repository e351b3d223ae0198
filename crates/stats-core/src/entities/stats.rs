//! Statistics snapshots - append-only rows written by the refresh pipeline

use chrono::{DateTime, Utc};

/// One user's counters at a point in time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserStats {
    pub id: i64,
    pub nickname: String,
    pub followers: i64,
    pub following: i64,
    pub likes: i64,
    pub diggs: i64,
    pub created_at: DateTime<Utc>,
}

/// One video's counters at a point in time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoStats {
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
