//! Trending list handlers

use axum::{extract::State, Json};
use stats_service::{TrendHashtagResponse, TrendService, TrendSongResponse, TrendVideoResponse};

use crate::response::ApiResult;
use crate::state::AppState;

/// GET /api/stats/trend/video
pub async fn get_trend_videos(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<TrendVideoResponse>>> {
    let service = TrendService::new(state.service_context());
    Ok(Json(service.get_videos().await?))
}

/// GET /api/stats/trend/hashtag
pub async fn get_trend_hashtags(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<TrendHashtagResponse>>> {
    let service = TrendService::new(state.service_context());
    Ok(Json(service.get_hashtags().await?))
}

/// GET /api/stats/trend/song
pub async fn get_trend_songs(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<TrendSongResponse>>> {
    let service = TrendService::new(state.service_context());
    Ok(Json(service.get_songs().await?))
}
