//! Repository traits (ports)

mod repositories;

pub use repositories::{RepoResult, StatsRepository, TrendRepository, UserRepository};
