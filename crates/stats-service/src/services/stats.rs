//! Stats service
//!
//! Read side of the profile snapshots: the current snapshot and the growth
//! over a trailing window of days.

use chrono::Utc;
use stats_core::value_objects::{window_start, StatsDelta};
use stats_core::DomainError;
use tracing::instrument;

use crate::dto::{CurrentStatsResponse, StatsDeltaResponse, UserStatsResponse, VideoStatsResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Stats service
pub struct StatsService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> StatsService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Latest snapshot and the videos captured in the same pass
    #[instrument(skip(self))]
    pub async fn get_current(&self, nickname: &str) -> ServiceResult<CurrentStatsResponse> {
        let repo = self.ctx.stats_repo();
        let stats = repo
            .find_latest(nickname)
            .await?
            .ok_or_else(|| DomainError::StatsNotFound(nickname.to_string()))?;

        let videos = repo
            .find_videos_at(nickname, stats.created_at)
            .await?
            .into_iter()
            .map(VideoStatsResponse::from)
            .collect();

        Ok(CurrentStatsResponse {
            stats: UserStatsResponse::from(stats),
            videos,
        })
    }

    /// Growth between the earliest snapshot since midnight `days` ago and the
    /// latest one. A window without snapshots yields zero counters; the user
    /// does not have to be registered.
    #[instrument(skip(self))]
    pub async fn get_increase(&self, nickname: &str, days: u32) -> ServiceResult<StatsDeltaResponse> {
        let repo = self.ctx.stats_repo();
        let floor = window_start(Utc::now(), days);

        let Some(earliest) = repo.find_earliest_since(nickname, floor).await? else {
            return Ok(StatsDelta::zero(nickname, floor).into());
        };

        let latest = repo
            .find_latest(nickname)
            .await?
            .unwrap_or_else(|| earliest.clone());

        Ok(StatsDelta::between(&earliest, &latest).into())
    }
}
