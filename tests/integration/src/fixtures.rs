//! Test fixtures and data generators
//!
//! Provides reusable test data for integration tests.

use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Unique suffix for test data, stable across parallel test binaries
pub fn unique_suffix() -> String {
    let n = COUNTER.fetch_add(1, Ordering::SeqCst);
    let nanos = chrono::Utc::now().timestamp_subsec_nanos();
    format!("{}{nanos}{n}", std::process::id())
}

/// Registration request
#[derive(Debug, Clone, Serialize)]
pub struct CreateUserRequest {
    pub app_id: String,
    pub app_bundle: String,
    pub nickname: String,
}

impl CreateUserRequest {
    pub fn unique() -> Self {
        Self::with_prefix("user")
    }

    pub fn with_prefix(prefix: &str) -> Self {
        Self {
            app_id: "it-app".to_string(),
            app_bundle: "com.example.stats".to_string(),
            nickname: format!("{prefix}{}", unique_suffix()),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct UserResponse {
    pub id: i64,
    pub nickname: String,
    pub app_id: String,
    pub app_bundle: String,
    pub avatar: Option<String>,
    pub error: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct VideoStatsResponse {
    pub video_id: String,
    pub views: i64,
    pub created_at: String,
}

#[derive(Debug, Deserialize)]
pub struct CurrentStatsResponse {
    pub nickname: String,
    pub followers: i64,
    pub following: i64,
    pub likes: i64,
    pub diggs: i64,
    pub created_at: String,
    pub videos: Vec<VideoStatsResponse>,
}

#[derive(Debug, Deserialize)]
pub struct StatsDeltaResponse {
    pub nickname: String,
    pub followers: i64,
    pub following: i64,
    pub likes: i64,
    pub diggs: i64,
    pub created_at: String,
}

#[derive(Debug, Deserialize)]
pub struct TrendVideoResponse {
    pub description: String,
    pub views: i64,
}

#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}
