//! Shared-token authentication
//!
//! Every `/api` route requires an `api_token` header holding one of the
//! configured tokens. The extractor is installed as a route layer so the
//! check runs before any body or query parsing.

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use stats_common::auth::API_TOKEN_HEADER;
use stats_common::AppError;

use crate::response::ApiError;
use crate::state::AppState;

/// Marker for a request that presented an accepted token
#[derive(Debug, Clone, Copy)]
pub struct ApiToken;

#[async_trait]
impl<S> FromRequestParts<S> for ApiToken
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let token = parts
            .headers
            .get(API_TOKEN_HEADER)
            .ok_or(ApiError::App(AppError::MissingApiToken))?
            .to_str()
            .map_err(|_| ApiError::App(AppError::InvalidApiToken))?;

        let app_state = AppState::from_ref(state);
        if !app_state.api_tokens().accepts(token) {
            tracing::warn!(path = %parts.uri.path(), "Rejected request with invalid api token");
            return Err(ApiError::App(AppError::InvalidApiToken));
        }

        Ok(ApiToken)
    }
}
