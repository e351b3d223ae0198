//! # stats-common
//!
//! Shared utilities including configuration, error handling, api token checks, and telemetry.

pub mod auth;
pub mod config;
pub mod error;
pub mod telemetry;

// Re-export commonly used types at crate root
pub use auth::ApiTokens;
pub use config::{
    AppConfig, AppSettings, AuthConfig, BrightDataConfig, ConfigError, DatabaseConfig,
    Environment, ProfileVendor, RedisConfig, RefreshConfig, ScraperConfig, ServerConfig,
    TikTokApiConfig,
};
pub use error::{AppError, AppResult};
pub use telemetry::{
    try_init_tracing, TracingConfig, TracingError,
};
