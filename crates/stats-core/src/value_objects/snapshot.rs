//! Normalized profile data as collected from a scraping vendor

use chrono::{DateTime, SubsecRound, Utc};

/// Counters for one video, vendor-independent
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoSnapshot {
    pub video_id: String,
    pub views: i64,
    pub comments: i64,
    pub diggs: i64,
    pub shares: i64,
    pub cover_url: String,
    pub video_url: String,
}

/// Counters for one profile plus its recent videos
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileSnapshot {
    pub nickname: String,
    pub avatar: Option<String>,
    pub followers: i64,
    pub following: i64,
    pub likes: i64,
    pub diggs: i64,
    pub videos: Vec<VideoSnapshot>,
}

/// A vendor-reported error for a single profile
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileFailure {
    pub nickname: String,
    pub error: String,
}

impl ProfileFailure {
    pub fn new(nickname: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            nickname: nickname.into(),
            error: error.into(),
        }
    }
}

/// Outcome of collecting one profile
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileRecord {
    Collected(ProfileSnapshot),
    Failed(ProfileFailure),
}

impl ProfileRecord {
    pub fn nickname(&self) -> &str {
        match self {
            Self::Collected(snapshot) => &snapshot.nickname,
            Self::Failed(failure) => &failure.nickname,
        }
    }

    /// Same record filed under `nickname`, e.g. the registered spelling
    #[must_use]
    pub fn with_nickname(mut self, nickname: impl Into<String>) -> Self {
        let nickname = nickname.into();
        match &mut self {
            Self::Collected(snapshot) => snapshot.nickname = nickname,
            Self::Failed(failure) => failure.nickname = nickname,
        }
        self
    }
}

/// Everything one refresh pass writes for users, committed together.
///
/// All stats rows of a batch share `captured_at`, which is truncated to
/// microseconds so it compares equal after a round trip through Postgres.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnapshotBatch {
    pub captured_at: DateTime<Utc>,
    pub snapshots: Vec<ProfileSnapshot>,
    pub failures: Vec<ProfileFailure>,
}

impl SnapshotBatch {
    pub fn new(captured_at: DateTime<Utc>) -> Self {
        Self {
            captured_at: captured_at.trunc_subsecs(6),
            snapshots: Vec::new(),
            failures: Vec::new(),
        }
    }

    /// Split collected records into snapshots and failures
    pub fn from_records(
        captured_at: DateTime<Utc>,
        records: impl IntoIterator<Item = ProfileRecord>,
    ) -> Self {
        let mut batch = Self::new(captured_at);
        for record in records {
            match record {
                ProfileRecord::Collected(snapshot) => batch.snapshots.push(snapshot),
                ProfileRecord::Failed(failure) => batch.failures.push(failure),
            }
        }
        batch
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty() && self.failures.is_empty()
    }

    /// Number of video rows the batch will insert
    pub fn video_count(&self) -> usize {
        self.snapshots.iter().map(|s| s.videos.len()).sum()
    }
}
