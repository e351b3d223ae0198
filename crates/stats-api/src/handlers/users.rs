//! User handlers

use axum::{extract::State, Json};
use stats_service::{CreateUserRequest, UserResponse, UserService};

use crate::extractors::{NicknamePath, ValidatedJson};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// Register a profile for tracking
///
/// POST /api/user
pub async fn create_user(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CreateUserRequest>,
) -> ApiResult<Created<Json<UserResponse>>> {
    let service = UserService::new(state.service_context());
    let user = service.create(request).await?;
    Ok(Created(Json(user)))
}

/// Get a registered user
///
/// GET /api/user/:nickname
pub async fn get_user(
    State(state): State<AppState>,
    NicknamePath(nickname): NicknamePath,
) -> ApiResult<Json<UserResponse>> {
    let service = UserService::new(state.service_context());
    let user = service.get(&nickname).await?;
    Ok(Json(user))
}
