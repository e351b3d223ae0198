//! Snapshot model -> entity mappers

use stats_core::entities::{UserStats, VideoStats};

use crate::models::{UserStatsModel, VideoStatsModel};

impl From<UserStatsModel> for UserStats {
    fn from(model: UserStatsModel) -> Self {
        UserStats {
            id: model.id,
            nickname: model.nickname,
            followers: model.followers,
            following: model.following,
            likes: model.likes,
            diggs: model.diggs,
            created_at: model.created_at,
        }
    }
}

impl From<VideoStatsModel> for VideoStats {
    fn from(model: VideoStatsModel) -> Self {
        VideoStats {
            id: model.id,
            nickname: model.nickname,
            video_id: model.video_id,
            views: model.views,
            comments: model.comments,
            diggs: model.diggs,
            shares: model.shares,
            cover_url: model.cover_url,
            video_url: model.video_url,
            created_at: model.created_at,
        }
    }
}
