//! Configuration structs

mod app_config;

pub use app_config::{
    AppConfig, AppSettings, AuthConfig, BrightDataConfig, ConfigError, DatabaseConfig,
    Environment, ProfileVendor, RedisConfig, RefreshConfig, ScraperConfig, ServerConfig,
    TikTokApiConfig,
};
