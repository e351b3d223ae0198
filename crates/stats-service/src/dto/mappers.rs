//! Entity to DTO mappers
//!
//! Implements `From` conversions from domain entities to response DTOs.

use stats_core::entities::{TrendHashtag, TrendSong, TrendVideo, User, UserStats, VideoStats};
use stats_core::value_objects::StatsDelta;

use super::responses::{
    StatsDeltaResponse, TrendHashtagResponse, TrendSongResponse, TrendVideoResponse,
    UserResponse, UserStatsResponse, VideoStatsResponse,
};

// ============================================================================
// User Mappers
// ============================================================================

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            nickname: user.nickname.clone(),
            app_id: user.app_id.clone(),
            app_bundle: user.app_bundle.clone(),
            avatar: user.avatar.clone(),
            error: user.error.clone(),
            created_at: user.created_at,
        }
    }
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self::from(&user)
    }
}

// ============================================================================
// Stats Mappers
// ============================================================================

impl From<UserStats> for UserStatsResponse {
    fn from(stats: UserStats) -> Self {
        Self {
            nickname: stats.nickname,
            followers: stats.followers,
            following: stats.following,
            likes: stats.likes,
            diggs: stats.diggs,
            created_at: stats.created_at,
        }
    }
}

impl From<VideoStats> for VideoStatsResponse {
    fn from(video: VideoStats) -> Self {
        Self {
            video_id: video.video_id,
            views: video.views,
            comments: video.comments,
            diggs: video.diggs,
            shares: video.shares,
            cover_url: video.cover_url,
            video_url: video.video_url,
            created_at: video.created_at,
        }
    }
}

impl From<StatsDelta> for StatsDeltaResponse {
    fn from(delta: StatsDelta) -> Self {
        Self {
            nickname: delta.nickname,
            followers: delta.followers,
            following: delta.following,
            likes: delta.likes,
            diggs: delta.diggs,
            created_at: delta.created_at,
        }
    }
}

// ============================================================================
// Trend Mappers
// ============================================================================

impl From<TrendVideo> for TrendVideoResponse {
    fn from(video: TrendVideo) -> Self {
        Self {
            cover_url: video.cover_url,
            views: video.views,
            description: video.description,
            video_url: video.video_url,
            created_at: video.created_at,
        }
    }
}

impl From<TrendHashtag> for TrendHashtagResponse {
    fn from(hashtag: TrendHashtag) -> Self {
        Self {
            name: hashtag.name,
            views: hashtag.views,
            created_at: hashtag.created_at,
        }
    }
}

impl From<TrendSong> for TrendSongResponse {
    fn from(song: TrendSong) -> Self {
        Self {
            cover_url: song.cover_url,
            song_url: song.song_url,
            title: song.title,
            author: song.author,
            created_at: song.created_at,
        }
    }
}
