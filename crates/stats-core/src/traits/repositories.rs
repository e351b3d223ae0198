//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::entities::{NewUser, TrendHashtag, TrendSong, TrendVideo, User, UserStats, VideoStats};
use crate::error::DomainError;
use crate::value_objects::{SnapshotBatch, TrendSnapshot};

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// User Repository
// ============================================================================

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by nickname
    async fn find_by_nickname(&self, nickname: &str) -> RepoResult<Option<User>>;

    /// List all users, newest first
    async fn list(&self) -> RepoResult<Vec<User>>;

    /// Create a new user, failing with `UserAlreadyExists` on a duplicate
    async fn create(&self, user: &NewUser) -> RepoResult<User>;
}

// ============================================================================
// Stats Repository
// ============================================================================

#[async_trait]
pub trait StatsRepository: Send + Sync {
    /// Most recent user snapshot
    async fn find_latest(&self, nickname: &str) -> RepoResult<Option<UserStats>>;

    /// Earliest user snapshot taken at or after `since`
    async fn find_earliest_since(
        &self,
        nickname: &str,
        since: DateTime<Utc>,
    ) -> RepoResult<Option<UserStats>>;

    /// Video snapshots captured at exactly `captured_at`
    async fn find_videos_at(
        &self,
        nickname: &str,
        captured_at: DateTime<Utc>,
    ) -> RepoResult<Vec<VideoStats>>;

    /// Persist one refresh pass in a single transaction.
    ///
    /// Inserts user and video snapshots, refreshes avatars and clears errors
    /// for collected profiles, and records the error for failed ones.
    async fn store_batch(&self, batch: &SnapshotBatch) -> RepoResult<()>;
}

// ============================================================================
// Trend Repository
// ============================================================================

#[async_trait]
pub trait TrendRepository: Send + Sync {
    async fn list_videos(&self) -> RepoResult<Vec<TrendVideo>>;

    async fn list_hashtags(&self) -> RepoResult<Vec<TrendHashtag>>;

    async fn list_songs(&self) -> RepoResult<Vec<TrendSong>>;

    /// Delete every trend row and insert `snapshot` in one transaction
    async fn replace_all(&self, snapshot: &TrendSnapshot) -> RepoResult<()>;
}
