//! Application error type shared by the service and HTTP layers.

use stats_core::DomainError;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Missing api_token header")]
    MissingApiToken,

    #[error("Invalid api token")]
    InvalidApiToken,

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Cache error: {0}")]
    Cache(String),

    /// Scraping vendor failures
    #[error("External service error: {0}")]
    ExternalService(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Internal server error")]
    Internal(#[source] anyhow::Error),

    #[error(transparent)]
    Domain(#[from] DomainError),
}

impl AppError {
    /// HTTP status for this error
    #[must_use]
    pub fn status_code(&self) -> u16 {
        match self {
            Self::MissingApiToken | Self::InvalidApiToken => 401,
            Self::NotFound(_) => 404,
            Self::Conflict(_) => 409,
            Self::Validation(_) => 422,
            Self::Domain(e) if e.is_not_found() => 404,
            Self::Domain(e) if e.is_conflict() => 409,
            Self::Domain(e) if e.is_validation() => 422,
            Self::Domain(_)
            | Self::Database(_)
            | Self::Cache(_)
            | Self::ExternalService(_)
            | Self::Config(_)
            | Self::Internal(_) => 500,
        }
    }

    /// Stable machine-readable code for the error body
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::MissingApiToken => "MISSING_API_TOKEN",
            Self::InvalidApiToken => "INVALID_API_TOKEN",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::NotFound(_) => "NOT_FOUND",
            Self::Conflict(_) => "CONFLICT",
            Self::Database(_) => "DATABASE_ERROR",
            Self::Cache(_) => "CACHE_ERROR",
            Self::ExternalService(_) => "EXTERNAL_SERVICE_ERROR",
            Self::Config(_) => "CONFIG_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
            Self::Domain(e) => e.code(),
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
