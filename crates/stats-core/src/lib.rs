//! # stats-core
//!
//! Domain layer containing entities, snapshot value types, repository traits,
//! and domain errors.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{NewUser, TrendHashtag, TrendSong, TrendVideo, User, UserStats, VideoStats};
pub use error::DomainError;
pub use traits::{RepoResult, StatsRepository, TrendRepository, UserRepository};
pub use value_objects::{
    window_start, NewTrendHashtag, NewTrendSong, NewTrendVideo, ProfileFailure, ProfileRecord,
    ProfileSnapshot, SnapshotBatch, StatsDelta, TrendSnapshot, VideoSnapshot,
};
