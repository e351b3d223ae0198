//! # stats-scraper
//!
//! HTTP clients for the scraping vendors and the `ProfileSource` /
//! `TrendSource` traits the refresh pipeline consumes.

pub mod brightdata;
pub mod error;
pub mod normalize;
pub mod tiktok;
pub mod traits;
pub mod types;

use std::sync::Arc;

pub use brightdata::BrightDataClient;
pub use error::{Result, ScraperError};
pub use normalize::normalize_keys;
pub use tiktok::TikTokApiClient;
pub use traits::{ProfileSource, TrendSource};

use stats_common::{ProfileVendor, ScraperConfig};

/// Shared HTTP client with the configured per-request timeout
pub fn build_http_client(config: &ScraperConfig) -> Result<reqwest::Client> {
    reqwest::Client::builder()
        .timeout(config.request_timeout())
        .build()
        .map_err(|e| ScraperError::Config(e.to_string()))
}

/// Profile and trend sources selected by configuration
pub struct Sources {
    pub profiles: Arc<dyn ProfileSource>,
    pub trends: Arc<dyn TrendSource>,
}

/// Build the sources for `PROFILE_VENDOR`; trends always come from the TikTok API
pub fn build_sources(config: &ScraperConfig) -> Result<Sources> {
    let client = build_http_client(config)?;
    let tiktok = Arc::new(TikTokApiClient::new(client.clone(), &config.tiktok)?);

    let profiles: Arc<dyn ProfileSource> = match config.profile_vendor {
        ProfileVendor::BrightData => Arc::new(BrightDataClient::from_config(client, config)?),
        ProfileVendor::TikTokApi => tiktok.clone(),
    };

    Ok(Sources {
        profiles,
        trends: tiktok,
    })
}
