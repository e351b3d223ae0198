//! Profile stats handlers

use axum::{extract::State, Json};
use stats_service::{CurrentStatsResponse, IncreaseQuery, StatsDeltaResponse, StatsService};

use crate::extractors::{NicknamePath, ValidatedQuery};
use crate::response::ApiResult;
use crate::state::AppState;

/// Latest snapshot with its videos
///
/// GET /api/stats/:nickname/current
pub async fn get_current(
    State(state): State<AppState>,
    NicknamePath(nickname): NicknamePath,
) -> ApiResult<Json<CurrentStatsResponse>> {
    let service = StatsService::new(state.service_context());
    Ok(Json(service.get_current(&nickname).await?))
}

/// Counter growth over the last `days` days
///
/// GET /api/stats/:nickname/increase?days=N
pub async fn get_increase(
    State(state): State<AppState>,
    NicknamePath(nickname): NicknamePath,
    ValidatedQuery(query): ValidatedQuery<IncreaseQuery>,
) -> ApiResult<Json<StatsDeltaResponse>> {
    let service = StatsService::new(state.service_context());
    Ok(Json(service.get_increase(&nickname, query.days).await?))
}
