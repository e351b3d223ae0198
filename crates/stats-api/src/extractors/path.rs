//! Path parameter extractors

use axum::{
    async_trait,
    extract::{FromRequestParts, Path},
    http::request::Parts,
};

use crate::response::ApiError;

/// `:nickname` path segment
#[derive(Debug, Clone)]
pub struct NicknamePath(pub String);

#[async_trait]
impl<S> FromRequestParts<S> for NicknamePath
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(nickname) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::invalid_path(e.body_text()))?;

        let nickname = nickname.trim();
        if nickname.is_empty() {
            return Err(ApiError::invalid_path("nickname must not be empty"));
        }

        Ok(NicknamePath(nickname.to_string()))
    }
}
