use thiserror::Error;

pub type Result<T> = std::result::Result<T, ScraperError>;

#[derive(Debug, Error)]
pub enum ScraperError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Snapshot {snapshot_id} not ready after {attempts} polls")]
    PollTimeout { snapshot_id: String, attempts: u32 },

    #[error("Scraper configuration error: {0}")]
    Config(String),
}

impl From<reqwest::Error> for ScraperError {
    fn from(err: reqwest::Error) -> Self {
        ScraperError::Network(err.to_string())
    }
}

impl From<serde_json::Error> for ScraperError {
    fn from(err: serde_json::Error) -> Self {
        ScraperError::Parse(err.to_string())
    }
}

/// Turn a non-success response into `ScraperError::Api`
pub(crate) async fn ensure_success(resp: reqwest::Response) -> Result<reqwest::Response> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    let body = resp.text().await.unwrap_or_default();
    Err(ScraperError::Api {
        status: status.as_u16(),
        message: body,
    })
}
