//! Response types and error handling for API endpoints
//!
//! Provides unified error handling and JSON response formatting.
//!
//! Error bodies are `{"error": {"code", "message", "details"?}}`. Details are
//! only written out in local mode: `ApiError` stores the full body as a
//! response extension and `expose_error_details` swaps it in.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use stats_common::AppError;
use stats_core::DomainError;
use stats_service::ServiceError;
use thiserror::Error;
use tracing::error;
use validator::ValidationErrors;

use crate::state::AppState;

/// API error type for consistent error responses
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    App(#[from] AppError),

    #[error("{0}")]
    Service(#[from] ServiceError),

    #[error("{0}")]
    Domain(#[from] DomainError),

    #[error("Validation error")]
    Validation(#[from] ValidationErrors),

    #[error("Invalid request body")]
    InvalidBody(String),

    #[error("Invalid query parameter")]
    InvalidQuery(String),

    #[error("Invalid path parameter")]
    InvalidPath(String),
}

impl ApiError {
    /// Get HTTP status code for this error
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::App(e) => {
                StatusCode::from_u16(e.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
            }
            Self::Service(e) => {
                StatusCode::from_u16(e.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
            }
            Self::Domain(e) => {
                if e.is_not_found() {
                    StatusCode::NOT_FOUND
                } else if e.is_validation() {
                    StatusCode::UNPROCESSABLE_ENTITY
                } else if e.is_conflict() {
                    StatusCode::CONFLICT
                } else {
                    StatusCode::INTERNAL_SERVER_ERROR
                }
            }
            Self::Validation(_) | Self::InvalidBody(_) | Self::InvalidQuery(_) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            Self::InvalidPath(_) => StatusCode::BAD_REQUEST,
        }
    }

    /// Get error code for API responses
    #[must_use]
    pub fn error_code(&self) -> &str {
        match self {
            Self::App(e) => e.error_code(),
            Self::Service(e) => e.error_code(),
            Self::Domain(e) => e.code(),
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::InvalidBody(_) => "INVALID_BODY",
            Self::InvalidQuery(_) => "INVALID_QUERY_PARAMETER",
            Self::InvalidPath(_) => "INVALID_PATH_PARAMETER",
        }
    }

    pub fn invalid_body(msg: impl Into<String>) -> Self {
        Self::InvalidBody(msg.into())
    }

    pub fn invalid_query(msg: impl Into<String>) -> Self {
        Self::InvalidQuery(msg.into())
    }

    pub fn invalid_path(msg: impl Into<String>) -> Self {
        Self::InvalidPath(msg.into())
    }

    /// Extra context hidden outside local mode
    fn details(&self) -> Option<serde_json::Value> {
        match self {
            Self::Validation(errors) => serde_json::to_value(errors).ok(),
            Self::InvalidBody(msg) | Self::InvalidQuery(msg) | Self::InvalidPath(msg) => {
                Some(serde_json::Value::String(msg.clone()))
            }
            _ => None,
        }
    }
}

/// Error response body
#[derive(Debug, Clone, Serialize)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

/// Error detail for API responses
#[derive(Debug, Clone, Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        // Log server errors
        if status.is_server_error() {
            error!(error = ?self, "Server error occurred");
        }

        let body = ErrorBody {
            error: ErrorDetail {
                code: self.error_code().to_string(),
                message: self.to_string(),
                details: None,
            },
        };
        let details = self.details();

        let mut response = (status, Json(body.clone())).into_response();
        if details.is_some() {
            let mut full = body;
            full.error.details = details;
            response.extensions_mut().insert(full);
        }
        response
    }
}

/// Rewrite error bodies with their details when running in local mode
pub async fn expose_error_details(State(state): State<AppState>, mut response: Response) -> Response {
    let Some(full) = response.extensions_mut().remove::<ErrorBody>() else {
        return response;
    };
    if !state.local_mode() {
        return response;
    }
    (response.status(), Json(full)).into_response()
}

/// Type alias for API results
pub type ApiResult<T> = Result<T, ApiError>;

/// Created response (201) with JSON body
pub struct Created<T>(pub T);

impl<T: IntoResponse> IntoResponse for Created<T> {
    fn into_response(self) -> Response {
        let mut response = self.0.into_response();
        *response.status_mut() = StatusCode::CREATED;
        response
    }
}
