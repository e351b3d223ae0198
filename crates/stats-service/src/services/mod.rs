//! Business logic services
//!
//! Request-path services borrow the `ServiceContext`; the refresher and its
//! scheduler own their dependencies so they can run in background tasks.

pub mod context;
pub mod error;
pub mod refresh;
pub mod scheduler;
pub mod stats;
pub mod trend;
pub mod user;

#[cfg(test)]
pub(crate) mod testing;

pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use refresh::{RefreshReport, StatsRefresher};
pub use scheduler::spawn_refresh_schedule;
pub use stats::StatsService;
pub use trend::TrendService;
pub use user::UserService;
