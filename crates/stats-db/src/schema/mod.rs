//! Schema bootstrap
//!
//! A single idempotent script, safe to run on every startup.

use sqlx::PgPool;
use tracing::{info, instrument};

/// DDL for every table the service uses
pub const SCHEMA_SQL: &str = include_str!("schema.sql");

/// Create missing tables and indexes
#[instrument(skip(pool))]
pub async fn bootstrap_schema(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::raw_sql(SCHEMA_SQL).execute(pool).await?;
    info!("Database schema ready");
    Ok(())
}
