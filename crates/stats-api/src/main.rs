//! Stats API Server entry point
//!
//! Run with:
//! ```bash
//! cargo run -p stats-api
//! ```
//!
//! Configuration is loaded from environment variables and an optional `.env` file.

use stats_common::{try_init_tracing, AppConfig, TracingConfig};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    // Configuration first: it decides the log format
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    let tracing_config = TracingConfig::for_environment(config.app.env, config.app.local_mode);
    if let Err(e) = try_init_tracing(&tracing_config) {
        eprintln!("Warning: Failed to initialize tracing: {e}");
    }

    info!(
        name = %config.app.name,
        env = ?config.app.env,
        local_mode = config.app.local_mode,
        port = config.api.port,
        vendor = ?config.scraper.profile_vendor,
        "Configuration loaded"
    );

    if let Err(e) = stats_api::run(config).await {
        error!(error = %e, "Server failed");
        std::process::exit(1);
    }
}
