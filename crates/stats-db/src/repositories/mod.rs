//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in stats-core.

mod error;
mod stats;
mod trend;
mod user;

pub use stats::PgStatsRepository;
pub use trend::PgTrendRepository;
pub use user::PgUserRepository;
