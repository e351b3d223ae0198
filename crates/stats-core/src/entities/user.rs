//! User entity - a registered account on the external platform

use chrono::{DateTime, Utc};

use crate::error::DomainError;

/// Maximum length accepted for nickname, app id and app bundle
pub const MAX_FIELD_LEN: usize = 255;

/// Registered user whose statistics are tracked
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: i64,
    pub nickname: String,
    pub app_id: String,
    pub app_bundle: String,
    pub avatar: Option<String>,
    /// Last per-record error reported by the scraping vendor
    pub error: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl User {
    /// Whether the last refresh for this user failed on the vendor side
    #[inline]
    pub fn has_error(&self) -> bool {
        self.error.is_some()
    }

    /// Public profile URL on the platform
    pub fn profile_url(&self) -> String {
        profile_url(&self.nickname)
    }
}

/// Public profile URL for a nickname
pub fn profile_url(nickname: &str) -> String {
    format!("https://www.tiktok.com/@{nickname}")
}

/// Registration input, normalized
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub nickname: String,
    pub app_id: String,
    pub app_bundle: String,
}

impl NewUser {
    /// Normalize and check registration fields.
    ///
    /// Fields are trimmed and a leading `@` is dropped from the nickname.
    pub fn new(nickname: &str, app_id: &str, app_bundle: &str) -> Result<Self, DomainError> {
        let nickname = nickname.trim();
        let nickname = nickname.strip_prefix('@').unwrap_or(nickname);

        if nickname.chars().any(|c| c.is_whitespace() || c == '/') {
            return Err(DomainError::InvalidNickname(nickname.to_string()));
        }

        Ok(Self {
            nickname: required("nickname", nickname)?,
            app_id: required("app_id", app_id.trim())?,
            app_bundle: required("app_bundle", app_bundle.trim())?,
        })
    }
}

fn required(field: &str, value: &str) -> Result<String, DomainError> {
    if value.is_empty() {
        return Err(DomainError::ValidationError(format!("{field} must not be empty")));
    }
    if value.chars().count() > MAX_FIELD_LEN {
        return Err(DomainError::ValidationError(format!(
            "{field} must be at most {MAX_FIELD_LEN} characters"
        )));
    }
    Ok(value.to_string())
}
