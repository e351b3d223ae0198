//! Route definitions
//!
//! API routes are mounted under /api behind the `api_token` check; health
//! probes stay public.

use axum::{
    middleware::from_extractor_with_state,
    routing::{get, post},
    Router,
};

use crate::extractors::ApiToken;
use crate::handlers::{health, stats, trends, users};
use crate::state::AppState;

/// Create the main router with all routes
pub fn create_router(state: &AppState) -> Router<AppState> {
    Router::new()
        .nest("/api", api_routes(state))
        .merge(health_routes())
}

/// Health check routes (no token required)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// Token-protected API routes
fn api_routes(state: &AppState) -> Router<AppState> {
    Router::new()
        .merge(user_routes())
        .merge(stats_routes())
        // route_layer so the token is checked before any handler extractor runs
        .route_layer(from_extractor_with_state::<ApiToken, AppState>(state.clone()))
}

/// User routes
fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/user", post(users::create_user))
        .route("/user/:nickname", get(users::get_user))
}

/// Stats and trend routes
fn stats_routes() -> Router<AppState> {
    Router::new()
        .route("/stats/trend/video", get(trends::get_trend_videos))
        .route("/stats/trend/hashtag", get(trends::get_trend_hashtags))
        .route("/stats/trend/song", get(trends::get_trend_songs))
        .route("/stats/:nickname/current", get(stats::get_current))
        .route("/stats/:nickname/increase", get(stats::get_increase))
}
