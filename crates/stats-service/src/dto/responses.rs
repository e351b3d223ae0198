//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output. Trend responses
//! also implement `Deserialize` so they can round-trip through the cache.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ============================================================================
// User Responses
// ============================================================================

/// Registered user
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub id: i64,
    pub nickname: String,
    pub app_id: String,
    pub app_bundle: String,
    pub avatar: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub created_at: DateTime<Utc>,
}

// ============================================================================
// Stats Responses
// ============================================================================

/// One profile snapshot
#[derive(Debug, Clone, Serialize)]
pub struct UserStatsResponse {
    pub nickname: String,
    pub followers: i64,
    pub following: i64,
    pub likes: i64,
    pub diggs: i64,
    pub created_at: DateTime<Utc>,
}

/// One video snapshot
#[derive(Debug, Clone, Serialize)]
pub struct VideoStatsResponse {
    pub video_id: String,
    pub views: i64,
    pub comments: i64,
    pub diggs: i64,
    pub shares: i64,
    pub cover_url: String,
    pub video_url: String,
    pub created_at: DateTime<Utc>,
}

/// Latest profile snapshot plus the videos captured with it
#[derive(Debug, Clone, Serialize)]
pub struct CurrentStatsResponse {
    #[serde(flatten)]
    pub stats: UserStatsResponse,
    pub videos: Vec<VideoStatsResponse>,
}

/// Counter growth over a window; `created_at` is the start of the window
#[derive(Debug, Clone, Serialize)]
pub struct StatsDeltaResponse {
    pub nickname: String,
    pub followers: i64,
    pub following: i64,
    pub likes: i64,
    pub diggs: i64,
    pub created_at: DateTime<Utc>,
}

// ============================================================================
// Trend Responses
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrendVideoResponse {
    pub cover_url: String,
    pub views: i64,
    pub description: String,
    pub video_url: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrendHashtagResponse {
    pub name: String,
    pub views: i64,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrendSongResponse {
    pub cover_url: String,
    pub song_url: String,
    pub title: String,
    pub author: String,
    pub created_at: DateTime<Utc>,
}

// ============================================================================
// Health Responses
// ============================================================================

/// Basic health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Readiness check response
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub checks: HealthChecks,
}

/// Health check status for each dependency
#[derive(Debug, Clone, Serialize)]
pub struct HealthChecks {
    pub database: String,
    pub redis: String,
}

fn check_label(healthy: bool) -> String {
    if healthy { "healthy" } else { "unhealthy" }.to_string()
}

impl ReadinessResponse {
    /// `redis_healthy` is `None` when no cache is configured
    pub fn ready(database_healthy: bool, redis_healthy: Option<bool>) -> Self {
        let all_healthy = database_healthy && redis_healthy.unwrap_or(true);
        Self {
            status: if all_healthy { "ready" } else { "not_ready" }.to_string(),
            timestamp: Utc::now(),
            checks: HealthChecks {
                database: check_label(database_healthy),
                redis: redis_healthy.map_or_else(|| "disabled".to_string(), check_label),
            },
        }
    }

    pub fn is_ready(&self) -> bool {
        self.status == "ready"
    }
}
