//! Test helpers for integration tests
//!
//! Provides utilities for spawning test servers and making HTTP requests.

use std::net::SocketAddr;
use std::time::Duration;

use anyhow::Result;
use reqwest::{Client, Response, StatusCode};
use serde::{de::DeserializeOwned, Serialize};
use stats_api::{create_app, create_app_state, AppState};
use stats_common::{
    ApiTokens, AppConfig, AppSettings, AuthConfig, BrightDataConfig, DatabaseConfig,
    Environment, ProfileVendor, RedisConfig, RefreshConfig, ScraperConfig, ServerConfig,
    TikTokApiConfig,
};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

use crate::vendor::spawn_mock_vendor;

/// Token accepted by test servers
pub const TEST_API_TOKEN: &str = "integration-token";

/// Test server instance that manages lifecycle
pub struct TestServer {
    pub addr: SocketAddr,
    pub client: Client,
    pub state: AppState,
    _handle: JoinHandle<()>,
}

impl TestServer {
    /// Start a new test server backed by a mock vendor
    pub async fn start() -> Result<Self> {
        let vendor = spawn_mock_vendor().await?;
        let config = test_config(&format!("http://{vendor}"))?;
        Self::start_with_config(config).await
    }

    /// Start a test server with custom config
    pub async fn start_with_config(config: AppConfig) -> Result<Self> {
        // Create app state
        let state = create_app_state(config).await?;

        // Build application
        let app = create_app(state.clone());

        // Bind to an ephemeral port
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;

        // Spawn server task
        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.ok();
        });

        // Create HTTP client
        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .build()?;

        Ok(Self {
            addr,
            client,
            state,
            _handle: handle,
        })
    }

    /// Get base URL for the server
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Make a GET request without a token
    pub async fn get(&self, path: &str) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self.client.get(&url).send().await?)
    }

    /// Make a GET request with the test token
    pub async fn get_auth(&self, path: &str) -> Result<Response> {
        self.get_with_token(path, TEST_API_TOKEN).await
    }

    pub async fn get_with_token(&self, path: &str, token: &str) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self
            .client
            .get(&url)
            .header("api_token", token)
            .send()
            .await?)
    }

    /// Make a POST request with JSON body and no token
    pub async fn post<T: Serialize>(&self, path: &str, body: &T) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self.client.post(&url).json(body).send().await?)
    }

    /// Make a POST request with the test token
    pub async fn post_auth<T: Serialize>(&self, path: &str, body: &T) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self
            .client
            .post(&url)
            .header("api_token", TEST_API_TOKEN)
            .json(body)
            .send()
            .await?)
    }

    /// Poll `path` until it answers 200 or `attempts` run out
    pub async fn wait_for_ok(&self, path: &str, attempts: u32) -> Result<Response> {
        for _ in 1..attempts {
            let response = self.get_auth(path).await?;
            if response.status() == StatusCode::OK {
                return Ok(response);
            }
            tokio::time::sleep(Duration::from_millis(100)).await;
        }
        self.get_auth(path).await
    }
}

/// Test configuration: Postgres and Redis from the environment, vendor at `vendor_url`
pub fn test_config(vendor_url: &str) -> Result<AppConfig> {
    dotenvy::dotenv().ok();

    let database_url = std::env::var("DATABASE_URL")?;
    let redis_url = std::env::var("REDIS_URL")?;

    Ok(AppConfig {
        app: AppSettings {
            name: "social-stats-it".to_string(),
            env: Environment::default(),
            local_mode: true,
        },
        api: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
        },
        database: DatabaseConfig {
            url: database_url,
            max_connections: 5,
            min_connections: 1,
            bootstrap_schema: true,
        },
        redis: RedisConfig {
            url: redis_url,
            max_connections: 5,
        },
        auth: AuthConfig {
            api_tokens: ApiTokens::parse(TEST_API_TOKEN),
        },
        scraper: ScraperConfig {
            profile_vendor: ProfileVendor::TikTokApi,
            brightdata: BrightDataConfig {
                base_url: vendor_url.to_string(),
                token: None,
                dataset_id: "unused".to_string(),
            },
            tiktok: TikTokApiConfig {
                base_url: vendor_url.to_string(),
                api_key: "integration-key".to_string(),
            },
            poll_interval_secs: 1,
            poll_max_attempts: 5,
            request_timeout_secs: 5,
        },
        refresh: RefreshConfig {
            interval_secs: 3600,
        },
    })
}

/// Helper to check if test environment is available
pub async fn check_test_env() -> bool {
    dotenvy::dotenv().ok();

    if std::env::var("DATABASE_URL").is_err() {
        eprintln!("Skipping test: DATABASE_URL not set");
        return false;
    }

    if std::env::var("REDIS_URL").is_err() {
        eprintln!("Skipping test: REDIS_URL not set");
        return false;
    }

    true
}

/// Assert response status and parse JSON body
pub async fn assert_json<T: DeserializeOwned>(
    response: Response,
    expected_status: StatusCode,
) -> Result<T> {
    let status = response.status();
    if status != expected_status {
        let body = response.text().await?;
        anyhow::bail!(
            "Expected status {}, got {}. Body: {}",
            expected_status,
            status,
            body
        );
    }
    Ok(response.json().await?)
}

/// Assert response status without parsing body
pub async fn assert_status(response: Response, expected_status: StatusCode) -> Result<()> {
    let status = response.status();
    if status != expected_status {
        let body = response.text().await?;
        anyhow::bail!(
            "Expected status {}, got {}. Body: {}",
            expected_status,
            status,
            body
        );
    }
    Ok(())
}
