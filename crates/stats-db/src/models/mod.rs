//! Database models - SQLx-compatible structs for PostgreSQL tables

mod stats;
mod trend;
mod user;

pub use stats::{UserStatsModel, VideoStatsModel};
pub use trend::{TrendHashtagModel, TrendSongModel, TrendVideoModel};
pub use user::UserModel;
