//! Growth of a user's counters over a time window

use chrono::{DateTime, Days, NaiveTime, Utc};

use crate::entities::UserStats;

/// Difference between two snapshots of the same user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatsDelta {
    pub nickname: String,
    pub followers: i64,
    pub following: i64,
    pub likes: i64,
    pub diggs: i64,
    /// Timestamp of the earliest snapshot in the window, or the window start
    pub created_at: DateTime<Utc>,
}

impl StatsDelta {
    /// All-zero delta, used when no snapshot falls inside the window
    pub fn zero(nickname: impl Into<String>, since: DateTime<Utc>) -> Self {
        Self {
            nickname: nickname.into(),
            followers: 0,
            following: 0,
            likes: 0,
            diggs: 0,
            created_at: since,
        }
    }

    /// `latest - earliest`, stamped with the earliest snapshot's time
    pub fn between(earliest: &UserStats, latest: &UserStats) -> Self {
        Self {
            nickname: latest.nickname.clone(),
            followers: latest.followers.saturating_sub(earliest.followers),
            following: latest.following.saturating_sub(earliest.following),
            likes: latest.likes.saturating_sub(earliest.likes),
            diggs: latest.diggs.saturating_sub(earliest.diggs),
            created_at: earliest.created_at,
        }
    }
}

/// Start of the window `days` back from `now`, truncated to midnight UTC.
///
/// Never earlier than the Unix epoch: no snapshot predates it, and far-past
/// instants fall outside the range Postgres accepts for `timestamptz`.
pub fn window_start(now: DateTime<Utc>, days: u32) -> DateTime<Utc> {
    now.checked_sub_days(Days::new(u64::from(days)))
        .map(|start| start.date_naive().and_time(NaiveTime::default()).and_utc())
        .map_or(DateTime::<Utc>::UNIX_EPOCH, |start| start.max(DateTime::<Utc>::UNIX_EPOCH))
}
