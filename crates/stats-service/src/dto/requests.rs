//! Request DTOs for API endpoints
//!
//! Request bodies implement `Deserialize` and `Validate`; query strings only
//! `Deserialize`, their types doing the checking.

use serde::Deserialize;
use validator::Validate;

/// Register a user for tracking
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateUserRequest {
    #[validate(length(min = 1, max = 255, message = "app_id must be 1-255 characters"))]
    pub app_id: String,

    #[validate(length(min = 1, max = 255, message = "app_bundle must be 1-255 characters"))]
    pub app_bundle: String,

    #[validate(length(min = 1, max = 255, message = "nickname must be 1-255 characters"))]
    pub nickname: String,
}

/// `?days=N` for the increase endpoint; negative or non-numeric values are rejected
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct IncreaseQuery {
    pub days: u32,
}
