//! BrightData dataset API client (asynchronous trigger, then poll).

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;
use stats_common::{BrightDataConfig, ScraperConfig};
use stats_core::entities::profile_url;
use stats_core::value_objects::ProfileRecord;
use tracing::{debug, info, instrument, warn};

use crate::error::{ensure_success, Result, ScraperError};
use crate::normalize::from_vendor_value;
use crate::traits::ProfileSource;
use crate::types::{BrightDataRecord, TriggerInput, TriggerResponse};

pub struct BrightDataClient {
    client: reqwest::Client,
    base_url: String,
    token: String,
    dataset_id: String,
    poll_interval: Duration,
    max_attempts: u32,
}

impl BrightDataClient {
    pub fn new(
        client: reqwest::Client,
        config: &BrightDataConfig,
        poll_interval: Duration,
        max_attempts: u32,
    ) -> Result<Self> {
        let token = config
            .token
            .clone()
            .ok_or_else(|| ScraperError::Config("BRIGHTDATA_TOKEN is not set".to_string()))?;
        if max_attempts == 0 {
            return Err(ScraperError::Config(
                "poll attempts must be at least 1".to_string(),
            ));
        }

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            token,
            dataset_id: config.dataset_id.clone(),
            poll_interval,
            max_attempts,
        })
    }

    pub fn from_config(client: reqwest::Client, config: &ScraperConfig) -> Result<Self> {
        Self::new(
            client,
            &config.brightdata,
            config.poll_interval(),
            config.poll_max_attempts,
        )
    }

    /// Start a collection for the given profiles. Returns the snapshot id.
    #[instrument(skip(self, nicknames), fields(count = nicknames.len()))]
    pub async fn trigger(&self, nicknames: &[String]) -> Result<String> {
        let input: Vec<TriggerInput> = nicknames
            .iter()
            .map(|nickname| TriggerInput {
                url: profile_url(nickname),
            })
            .collect();

        let url = format!("{}/datasets/v3/trigger", self.base_url);
        let resp = self
            .client
            .post(&url)
            .query(&[
                ("dataset_id", self.dataset_id.as_str()),
                ("include_errors", "true"),
            ])
            .bearer_auth(&self.token)
            .json(&input)
            .send()
            .await?;

        let resp = ensure_success(resp).await?;
        let body: Value = resp.json().await?;
        let triggered: TriggerResponse = from_vendor_value(body)?;
        debug!(snapshot_id = %triggered.snapshot_id, "Collection triggered");

        Ok(triggered.snapshot_id)
    }

    /// Fetch a snapshot; `None` while the vendor is still collecting (HTTP 202)
    pub async fn fetch_snapshot(&self, snapshot_id: &str) -> Result<Option<Vec<Value>>> {
        let url = format!("{}/datasets/v3/snapshot/{}", self.base_url, snapshot_id);
        let resp = self
            .client
            .get(&url)
            .query(&[("format", "json")])
            .bearer_auth(&self.token)
            .send()
            .await?;

        if resp.status() == reqwest::StatusCode::ACCEPTED {
            return Ok(None);
        }

        let resp = ensure_success(resp).await?;
        let records: Vec<Value> = resp.json().await?;
        Ok(Some(records))
    }

    /// Poll until the snapshot is ready or the attempt budget runs out
    #[instrument(skip(self))]
    pub async fn wait_for_snapshot(&self, snapshot_id: &str) -> Result<Vec<Value>> {
        for attempt in 1..=self.max_attempts {
            if let Some(records) = self.fetch_snapshot(snapshot_id).await? {
                debug!(attempt, count = records.len(), "Snapshot ready");
                return Ok(records);
            }
            debug!(attempt, "Snapshot still collecting");
            if attempt < self.max_attempts {
                tokio::time::sleep(self.poll_interval).await;
            }
        }

        Err(ScraperError::PollTimeout {
            snapshot_id: snapshot_id.to_string(),
            attempts: self.max_attempts,
        })
    }
}

/// Convert raw snapshot records, keeping only the requested profiles.
///
/// The vendor reports handles in its own casing; matched records are filed
/// under the nickname as requested.
fn collect_records(raw: Vec<Value>, requested: &[String]) -> Vec<ProfileRecord> {
    let requested: HashMap<String, &String> = requested
        .iter()
        .map(|nickname| (nickname.to_lowercase(), nickname))
        .collect();
    let mut records = Vec::with_capacity(raw.len());

    for value in raw {
        let record = match from_vendor_value::<BrightDataRecord>(value) {
            Ok(record) => record,
            Err(e) => {
                warn!(error = %e, "Skipping unparseable BrightData record");
                continue;
            }
        };

        match record.into_record() {
            Some(record) => match requested.get(&record.nickname().to_lowercase()) {
                Some(&nickname) => records.push(record.with_nickname(nickname.clone())),
                None => {
                    warn!(nickname = %record.nickname(), "Dropping record for a profile that was not requested");
                }
            },
            None => warn!("Dropping BrightData record without a nickname"),
        }
    }

    records
}

#[async_trait]
impl ProfileSource for BrightDataClient {
    async fn fetch_profiles(&self, nicknames: &[String]) -> Result<Vec<ProfileRecord>> {
        if nicknames.is_empty() {
            return Ok(Vec::new());
        }

        info!(count = nicknames.len(), "Starting BrightData collection");
        let snapshot_id = self.trigger(nicknames).await?;
        info!(%snapshot_id, "Collection started, polling for completion");

        let raw = self.wait_for_snapshot(&snapshot_id).await?;
        let records = collect_records(raw, nicknames);
        info!(%snapshot_id, count = records.len(), "Fetched BrightData records");

        Ok(records)
    }
}
