//! Synchronous TikTok scraping API client (RapidAPI-style key auth).
//!
//! Serves both per-profile statistics and the trending lists.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use stats_common::TikTokApiConfig;
use stats_core::value_objects::{
    NewTrendHashtag, NewTrendSong, NewTrendVideo, ProfileFailure, ProfileRecord, TrendSnapshot,
};
use tracing::{debug, info, instrument, warn};

use crate::error::{ensure_success, Result, ScraperError};
use crate::normalize::from_vendor_str;
use crate::traits::{ProfileSource, TrendSource};
use crate::types::{
    ListPayload, PostItem, TrendHashtagItem, TrendSongItem, TrendVideoItem, UserInfoResponse,
};

const API_KEY_HEADER: &str = "x-rapidapi-key";
const API_HOST_HEADER: &str = "x-rapidapi-host";

pub struct TikTokApiClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
    host: Option<String>,
}

impl TikTokApiClient {
    pub fn new(client: reqwest::Client, config: &TikTokApiConfig) -> Result<Self> {
        if config.api_key.trim().is_empty() {
            return Err(ScraperError::Config("TIKTOK_API_KEY is empty".to_string()));
        }
        let base_url = config.base_url.trim_end_matches('/').to_string();
        let host = base_url
            .split_once("://")
            .map(|(_, rest)| rest.split('/').next().unwrap_or(rest).to_string());

        Ok(Self {
            client,
            base_url,
            api_key: config.api_key.clone(),
            host,
        })
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str, query: &[(&str, &str)]) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        let mut request = self
            .client
            .get(&url)
            .query(query)
            .header(API_KEY_HEADER, &self.api_key);
        if let Some(host) = &self.host {
            request = request.header(API_HOST_HEADER, host);
        }

        let resp = ensure_success(request.send().await?).await?;
        let body = resp.text().await?;
        from_vendor_str(&body)
    }

    #[instrument(skip(self))]
    pub async fn user_info(&self, nickname: &str) -> Result<UserInfoResponse> {
        self.get_json("/user/info", &[("uniqueId", nickname)]).await
    }

    #[instrument(skip(self))]
    pub async fn user_posts(&self, nickname: &str) -> Result<Vec<PostItem>> {
        let payload: ListPayload<PostItem> =
            self.get_json("/user/posts", &[("uniqueId", nickname)]).await?;
        Ok(payload.into_vec())
    }

    async fn fetch_profile(&self, nickname: &str) -> Result<ProfileRecord> {
        let info = self.user_info(nickname).await?;
        let posts = self.user_posts(nickname).await?;
        Ok(ProfileRecord::Collected(info.into_snapshot(nickname, posts)))
    }

    pub async fn trending_videos(&self) -> Result<Vec<NewTrendVideo>> {
        let payload: ListPayload<TrendVideoItem> = self.get_json("/trending/videos", &[]).await?;
        Ok(payload.into_vec().into_iter().map(Into::into).collect())
    }

    pub async fn trending_hashtags(&self) -> Result<Vec<NewTrendHashtag>> {
        let payload: ListPayload<TrendHashtagItem> =
            self.get_json("/trending/hashtags", &[]).await?;
        Ok(payload.into_vec().into_iter().map(Into::into).collect())
    }

    pub async fn trending_songs(&self) -> Result<Vec<NewTrendSong>> {
        let payload: ListPayload<TrendSongItem> = self.get_json("/trending/songs", &[]).await?;
        Ok(payload.into_vec().into_iter().map(Into::into).collect())
    }
}

#[async_trait]
impl ProfileSource for TikTokApiClient {
    async fn fetch_profiles(&self, nicknames: &[String]) -> Result<Vec<ProfileRecord>> {
        let mut records = Vec::with_capacity(nicknames.len());

        for nickname in nicknames {
            match self.fetch_profile(nickname).await {
                Ok(record) => records.push(record),
                // Vendor refused this profile: record it on the user and move on
                Err(ScraperError::Api { status, message }) => {
                    warn!(%nickname, status, "Profile lookup rejected by vendor");
                    records.push(ProfileRecord::Failed(ProfileFailure::new(
                        nickname.clone(),
                        format!("vendor status {status}: {message}"),
                    )));
                }
                // Unreadable payload for this profile only (error envelope, malformed post)
                Err(ScraperError::Parse(reason)) => {
                    warn!(%nickname, %reason, "Profile payload could not be parsed");
                    records.push(ProfileRecord::Failed(ProfileFailure::new(
                        nickname.clone(),
                        format!("unreadable vendor payload: {reason}"),
                    )));
                }
                Err(e) => return Err(e),
            }
        }

        debug!(count = records.len(), "Fetched TikTok API profiles");
        Ok(records)
    }
}

#[async_trait]
impl TrendSource for TikTokApiClient {
    async fn fetch_trends(&self) -> Result<TrendSnapshot> {
        let (videos, hashtags, songs) = tokio::try_join!(
            self.trending_videos(),
            self.trending_hashtags(),
            self.trending_songs()
        )?;

        let snapshot = TrendSnapshot {
            videos,
            hashtags,
            songs,
        };
        info!(count = snapshot.len(), "Fetched trending lists");

        Ok(snapshot)
    }
}
