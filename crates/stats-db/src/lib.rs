//! # stats-db
//!
//! Database layer implementing repository traits with PostgreSQL via SQLx.
//!
//! ## Overview
//!
//! This crate provides PostgreSQL implementations for the repository traits
//! defined in `stats-core`. It handles:
//!
//! - Connection pool management
//! - Database models with SQLx `FromRow` derives
//! - Model → entity mappers
//! - Repository implementations
//! - The idempotent schema bootstrap script
//!
//! ## Usage
//!
//! ```rust,ignore
//! use stats_db::{bootstrap_schema, create_pool, PgUserRepository, PoolSettings};
//! use stats_core::traits::UserRepository;
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let pool = create_pool(&PoolSettings::new(database_url, 20, 2)).await?;
//!     bootstrap_schema(&pool).await?;
//!     let users = PgUserRepository::new(pool).list().await?;
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;
pub mod schema;

// Re-export commonly used types
pub use pool::{create_pool, PgPool, PoolSettings};
pub use repositories::{PgStatsRepository, PgTrendRepository, PgUserRepository};
pub use schema::{bootstrap_schema, SCHEMA_SQL};
