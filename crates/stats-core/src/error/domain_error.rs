//! Domain errors - error types for the domain layer

use thiserror::Error;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("User not found: {0}")]
    UserNotFound(String),

    #[error("No statistics collected yet for: {0}")]
    StatsNotFound(String),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Invalid nickname: {0}")]
    InvalidNickname(String),

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("User already registered: {0}")]
    UserAlreadyExists(String),

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            Self::UserNotFound(_) => "UNKNOWN_USER",
            Self::StatsNotFound(_) => "UNKNOWN_STATS",
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::InvalidNickname(_) => "INVALID_NICKNAME",
            Self::UserAlreadyExists(_) => "USER_ALREADY_EXISTS",
            Self::DatabaseError(_) => "DATABASE_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::UserNotFound(_) | Self::StatsNotFound(_))
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::ValidationError(_) | Self::InvalidNickname(_))
    }

    /// Check if this is a conflict error
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::UserAlreadyExists(_))
    }
}
