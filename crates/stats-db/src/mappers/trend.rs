//! Trend model -> entity mappers

use stats_core::entities::{TrendHashtag, TrendSong, TrendVideo};

use crate::models::{TrendHashtagModel, TrendSongModel, TrendVideoModel};

impl From<TrendVideoModel> for TrendVideo {
    fn from(model: TrendVideoModel) -> Self {
        TrendVideo {
            id: model.id,
            cover_url: model.cover_url,
            views: model.views,
            description: model.description,
            video_url: model.video_url,
            created_at: model.created_at,
        }
    }
}

impl From<TrendHashtagModel> for TrendHashtag {
    fn from(model: TrendHashtagModel) -> Self {
        TrendHashtag {
            id: model.id,
            name: model.name,
            views: model.views,
            created_at: model.created_at,
        }
    }
}

impl From<TrendSongModel> for TrendSong {
    fn from(model: TrendSongModel) -> Self {
        TrendSong {
            id: model.id,
            cover_url: model.cover_url,
            song_url: model.song_url,
            title: model.title,
            author: model.author,
            created_at: model.created_at,
        }
    }
}
