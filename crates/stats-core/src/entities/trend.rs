//! Platform-wide trending rows, replaced wholesale on every refresh

use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrendVideo {
    pub id: i64,
    pub cover_url: String,
    pub views: i64,
    pub description: String,
    pub video_url: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrendHashtag {
    pub id: i64,
    pub name: String,
    pub views: i64,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrendSong {
    pub id: i64,
    pub cover_url: String,
    pub song_url: String,
    pub title: String,
    pub author: String,
    pub created_at: DateTime<Utc>,
}
