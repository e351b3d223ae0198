//! Application configuration structs
//!
//! Loads configuration from environment variables (and a `.env` file if present).

use std::env;
use std::str::FromStr;
use std::time::Duration;

use crate::auth::ApiTokens;

/// Main application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub app: AppSettings,
    pub api: ServerConfig,
    pub database: DatabaseConfig,
    pub redis: RedisConfig,
    pub auth: AuthConfig,
    pub scraper: ScraperConfig,
    pub refresh: RefreshConfig,
}

/// General application settings
#[derive(Debug, Clone)]
pub struct AppSettings {
    pub name: String,
    pub env: Environment,
    /// Permissive CORS and detailed error bodies
    pub local_mode: bool,
}

/// Environment type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl Environment {
    #[must_use]
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }

    #[must_use]
    pub fn is_development(&self) -> bool {
        matches!(self, Self::Development)
    }
}

impl FromStr for Environment {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "production" => Ok(Self::Production),
            "staging" => Ok(Self::Staging),
            "development" => Ok(Self::Development),
            other => Err(ConfigError::InvalidValue("APP_ENV", other.to_string())),
        }
    }
}

/// HTTP server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    #[must_use]
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Database configuration
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    /// Run the idempotent schema script on startup
    pub bootstrap_schema: bool,
}

/// Redis configuration
#[derive(Debug, Clone)]
pub struct RedisConfig {
    pub url: String,
    pub max_connections: u32,
}

/// API authentication configuration
#[derive(Debug, Clone)]
pub struct AuthConfig {
    pub api_tokens: ApiTokens,
}

/// Which vendor supplies profile statistics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProfileVendor {
    /// Asynchronous trigger/poll dataset API
    #[default]
    BrightData,
    /// Synchronous per-profile API
    TikTokApi,
}

impl FromStr for ProfileVendor {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "brightdata" | "bright_data" => Ok(Self::BrightData),
            "tiktok_api" | "tiktok" => Ok(Self::TikTokApi),
            other => Err(ConfigError::InvalidValue("PROFILE_VENDOR", other.to_string())),
        }
    }
}

/// BrightData dataset API settings
#[derive(Debug, Clone)]
pub struct BrightDataConfig {
    pub base_url: String,
    pub token: Option<String>,
    pub dataset_id: String,
}

/// Synchronous TikTok scraping API settings (also the trend source)
#[derive(Debug, Clone)]
pub struct TikTokApiConfig {
    pub base_url: String,
    pub api_key: String,
}

/// Scraping vendor configuration
#[derive(Debug, Clone)]
pub struct ScraperConfig {
    pub profile_vendor: ProfileVendor,
    pub brightdata: BrightDataConfig,
    pub tiktok: TikTokApiConfig,
    pub poll_interval_secs: u64,
    pub poll_max_attempts: u32,
    pub request_timeout_secs: u64,
}

impl ScraperConfig {
    #[must_use]
    pub fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.poll_interval_secs)
    }

    #[must_use]
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

/// Periodic refresh configuration
#[derive(Debug, Clone)]
pub struct RefreshConfig {
    pub interval_secs: u64,
}

impl RefreshConfig {
    #[must_use]
    pub fn interval(&self) -> Duration {
        Duration::from_secs(self.interval_secs)
    }
}

// Default value functions
fn default_app_name() -> String {
    "social-stats".to_string()
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_max_connections() -> u32 {
    20
}

fn default_min_connections() -> u32 {
    2
}

fn default_redis_max_connections() -> u32 {
    20
}

fn default_brightdata_url() -> String {
    "https://api.brightdata.com".to_string()
}

fn default_dataset_id() -> String {
    "gd_l1villgoiiidt09ci".to_string()
}

fn default_tiktok_api_url() -> String {
    "https://tiktok-scraper7.p.rapidapi.com".to_string()
}

fn default_poll_interval_secs() -> u64 {
    2
}

fn default_poll_max_attempts() -> u32 {
    900 // ~30 minutes at the default interval
}

fn default_request_timeout_secs() -> u64 {
    60
}

fn default_refresh_interval_secs() -> u64 {
    6 * 60 * 60
}

/// Parse an optional variable, failing on malformed values
fn parse_var<T: FromStr>(name: &'static str) -> Result<Option<T>, ConfigError> {
    match env::var(name) {
        Ok(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::InvalidValue(name, raw)),
        _ => Ok(None),
    }
}

fn parse_bool(name: &'static str) -> Result<Option<bool>, ConfigError> {
    match env::var(name) {
        Ok(raw) => match raw.trim().to_lowercase().as_str() {
            "" => Ok(None),
            "1" | "true" | "yes" | "on" => Ok(Some(true)),
            "0" | "false" | "no" | "off" => Ok(Some(false)),
            _ => Err(ConfigError::InvalidValue(name, raw)),
        },
        Err(_) => Ok(None),
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name)
        .ok()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

fn redis_url_from_parts() -> Result<String, ConfigError> {
    let host = non_empty_var("REDIS_HOST").unwrap_or_else(|| "127.0.0.1".to_string());
    let port: u16 = parse_var("REDIS_PORT")?.unwrap_or(6379);
    let db: u32 = parse_var("REDIS_DB")?.unwrap_or(0);
    Ok(format!("redis://{host}:{port}/{db}"))
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    /// Returns an error if required environment variables are missing or malformed
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let api_tokens = ApiTokens::parse(
            &env::var("API_TOKENS").map_err(|_| ConfigError::MissingVar("API_TOKENS"))?,
        );
        if api_tokens.is_empty() {
            return Err(ConfigError::InvalidValue("API_TOKENS", "no tokens".to_string()));
        }

        let profile_vendor: ProfileVendor = parse_var("PROFILE_VENDOR")?.unwrap_or_default();
        let brightdata_token = non_empty_var("BRIGHTDATA_TOKEN");
        if profile_vendor == ProfileVendor::BrightData && brightdata_token.is_none() {
            return Err(ConfigError::MissingVar("BRIGHTDATA_TOKEN"));
        }

        let poll_interval_secs = parse_var("SCRAPER_POLL_INTERVAL_SECS")?
            .unwrap_or_else(default_poll_interval_secs);
        if poll_interval_secs == 0 {
            return Err(ConfigError::InvalidValue(
                "SCRAPER_POLL_INTERVAL_SECS",
                "0".to_string(),
            ));
        }

        let refresh_interval_secs =
            parse_var("REFRESH_INTERVAL_SECS")?.unwrap_or_else(default_refresh_interval_secs);
        if refresh_interval_secs == 0 {
            return Err(ConfigError::InvalidValue("REFRESH_INTERVAL_SECS", "0".to_string()));
        }

        Ok(Self {
            app: AppSettings {
                name: non_empty_var("APP_NAME").unwrap_or_else(default_app_name),
                env: parse_var("APP_ENV")?.unwrap_or_default(),
                local_mode: parse_bool("LOCAL_MODE")?.unwrap_or(false),
            },
            api: ServerConfig {
                host: non_empty_var("API_HOST").unwrap_or_else(default_host),
                port: parse_var("API_PORT")?.unwrap_or_else(default_port),
            },
            database: DatabaseConfig {
                url: non_empty_var("DATABASE_URL").ok_or(ConfigError::MissingVar("DATABASE_URL"))?,
                max_connections: parse_var("DATABASE_MAX_CONNECTIONS")?
                    .unwrap_or_else(default_max_connections),
                min_connections: parse_var("DATABASE_MIN_CONNECTIONS")?
                    .unwrap_or_else(default_min_connections),
                bootstrap_schema: parse_bool("DATABASE_BOOTSTRAP_SCHEMA")?.unwrap_or(true),
            },
            redis: RedisConfig {
                url: match non_empty_var("REDIS_URL") {
                    Some(url) => url,
                    None => redis_url_from_parts()?,
                },
                max_connections: parse_var("REDIS_MAX_CONNECTIONS")?
                    .unwrap_or_else(default_redis_max_connections),
            },
            auth: AuthConfig { api_tokens },
            scraper: ScraperConfig {
                profile_vendor,
                brightdata: BrightDataConfig {
                    base_url: non_empty_var("BRIGHTDATA_BASE_URL")
                        .unwrap_or_else(default_brightdata_url),
                    token: brightdata_token,
                    dataset_id: non_empty_var("BRIGHTDATA_DATASET_ID")
                        .unwrap_or_else(default_dataset_id),
                },
                tiktok: TikTokApiConfig {
                    base_url: non_empty_var("TIKTOK_API_URL").unwrap_or_else(default_tiktok_api_url),
                    api_key: non_empty_var("TIKTOK_API_KEY")
                        .ok_or(ConfigError::MissingVar("TIKTOK_API_KEY"))?,
                },
                poll_interval_secs,
                poll_max_attempts: parse_var("SCRAPER_POLL_MAX_ATTEMPTS")?
                    .unwrap_or_else(default_poll_max_attempts),
                request_timeout_secs: parse_var("SCRAPER_TIMEOUT_SECS")?
                    .unwrap_or_else(default_request_timeout_secs),
            },
            refresh: RefreshConfig {
                interval_secs: refresh_interval_secs,
            },
        })
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingVar(&'static str),

    #[error("Invalid value for {0}: {1}")]
    InvalidValue(&'static str, String),
}
