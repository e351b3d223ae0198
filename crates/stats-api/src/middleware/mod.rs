//! Middleware stack for the API server
//!
//! Provides logging, request ID generation, timeouts, CORS and error detail
//! exposure.

use std::time::Duration;

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    middleware::map_response_with_state,
    Router,
};
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::{DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use stats_common::auth::API_TOKEN_HEADER;
use tracing::Level;

use crate::response::expose_error_details;
use crate::state::AppState;

/// Header name for request ID
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Requests taking longer than this get a 503
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Apply middleware stack to the router
pub fn apply_middleware(router: Router<AppState>, state: &AppState) -> Router<AppState> {
    let router = router.layer(map_response_with_state(state.clone(), expose_error_details));

    let router = if state.local_mode() {
        tracing::warn!("CORS: Allowing any origin (local mode)");
        router.layer(create_cors_layer())
    } else {
        router
    };

    router.layer(
        ServiceBuilder::new()
            // Request ID
            .layer(SetRequestIdLayer::new(
                header::HeaderName::from_static(REQUEST_ID_HEADER),
                MakeRequestUuid,
            ))
            .layer(PropagateRequestIdLayer::new(header::HeaderName::from_static(
                REQUEST_ID_HEADER,
            )))
            // Tracing
            .layer(
                TraceLayer::new_for_http()
                    .make_span_with(|request: &Request<Body>| {
                        let request_id = request
                            .headers()
                            .get(REQUEST_ID_HEADER)
                            .and_then(|v| v.to_str().ok())
                            .unwrap_or("unknown");

                        tracing::info_span!(
                            "http_request",
                            method = %request.method(),
                            uri = %request.uri(),
                            request_id = %request_id,
                        )
                    })
                    .on_request(DefaultOnRequest::new().level(Level::INFO))
                    .on_response(DefaultOnResponse::new().level(Level::INFO)),
            )
            // Timeout (returns 503 Service Unavailable on timeout)
            .layer(TimeoutLayer::with_status_code(
                StatusCode::SERVICE_UNAVAILABLE,
                REQUEST_TIMEOUT,
            )),
    )
}

/// Permissive CORS layer for local development
fn create_cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([
            header::CONTENT_TYPE,
            header::ACCEPT,
            header::HeaderName::from_static(API_TOKEN_HEADER),
            header::HeaderName::from_static(REQUEST_ID_HEADER),
        ])
        .allow_origin(Any)
        .expose_headers([header::HeaderName::from_static(REQUEST_ID_HEADER)])
}
