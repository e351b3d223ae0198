//! Refresh pipeline
//!
//! Pulls profile stats and trending lists from the configured vendors and
//! writes them as one batch each. A full refresh runs on the scheduler; a
//! single-user refresh runs once after registration.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use std::time::Instant;

use chrono::Utc;
use stats_cache::TrendCache;
use stats_core::traits::{StatsRepository, TrendRepository, UserRepository};
use stats_core::value_objects::{ProfileRecord, SnapshotBatch};
use stats_scraper::{ProfileSource, TrendSource};
use tokio::sync::Mutex;
use tracing::{debug, error, info, instrument, warn};

use super::error::ServiceResult;

/// Counts from one refresh run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RefreshReport {
    /// Nicknames sent to the profile vendor
    pub requested: usize,
    /// Profiles with a stored snapshot
    pub stored: usize,
    /// Profiles the vendor reported an error for
    pub failed: usize,
    /// Records discarded as unrequested or duplicated
    pub dropped: usize,
    /// Trend rows written
    pub trends: usize,
}

/// Runs refresh passes against the repositories and vendor sources
#[derive(Clone)]
pub struct StatsRefresher {
    user_repo: Arc<dyn UserRepository>,
    stats_repo: Arc<dyn StatsRepository>,
    trend_repo: Arc<dyn TrendRepository>,
    profiles: Arc<dyn ProfileSource>,
    trends: Arc<dyn TrendSource>,
    trend_cache: Option<TrendCache>,
    running: Arc<Mutex<()>>,
}

impl StatsRefresher {
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        stats_repo: Arc<dyn StatsRepository>,
        trend_repo: Arc<dyn TrendRepository>,
        profiles: Arc<dyn ProfileSource>,
        trends: Arc<dyn TrendSource>,
        trend_cache: Option<TrendCache>,
    ) -> Self {
        Self {
            user_repo,
            stats_repo,
            trend_repo,
            profiles,
            trends,
            trend_cache,
            running: Arc::new(Mutex::new(())),
        }
    }

    /// Refresh every registered user, then the trend tables.
    ///
    /// Returns `Ok(None)` when another full refresh is still in progress.
    /// The profile and trend batches are independent: both are attempted and
    /// the first error is returned.
    #[instrument(skip(self))]
    pub async fn refresh_all(&self) -> ServiceResult<Option<RefreshReport>> {
        let Ok(_guard) = self.running.try_lock() else {
            warn!("Previous refresh still running, skipping");
            return Ok(None);
        };

        let started = Instant::now();
        let nicknames: Vec<String> = self
            .user_repo
            .list()
            .await?
            .into_iter()
            .map(|user| user.nickname)
            .collect();

        info!(users = nicknames.len(), "Refresh started");

        let mut report = RefreshReport {
            requested: nicknames.len(),
            ..RefreshReport::default()
        };

        let profiles = if nicknames.is_empty() {
            debug!("No registered users, skipping profile vendor");
            Ok(())
        } else {
            self.refresh_profiles(&nicknames, &mut report).await
        };
        if let Err(e) = &profiles {
            error!(error = %e, "Profile batch failed");
        }

        let trends = self.refresh_trends().await.map(|rows| report.trends = rows);
        if let Err(e) = &trends {
            error!(error = %e, "Trend batch failed");
        }

        profiles?;
        trends?;

        info!(
            requested = report.requested,
            stored = report.stored,
            failed = report.failed,
            dropped = report.dropped,
            trends = report.trends,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Refresh finished"
        );

        Ok(Some(report))
    }

    /// Collect stats for one newly registered user. Trends are not touched.
    #[instrument(skip(self))]
    pub async fn refresh_user(&self, nickname: &str) -> ServiceResult<RefreshReport> {
        let mut report = RefreshReport {
            requested: 1,
            ..RefreshReport::default()
        };
        self.refresh_profiles(&[nickname.to_string()], &mut report)
            .await?;

        info!(
            stored = report.stored,
            failed = report.failed,
            "User refresh finished"
        );
        Ok(report)
    }

    async fn refresh_profiles(
        &self,
        nicknames: &[String],
        report: &mut RefreshReport,
    ) -> ServiceResult<()> {
        let records = self.profiles.fetch_profiles(nicknames).await?;

        // Vendors may echo a handle in different casing than it was registered
        let requested: HashMap<String, &String> = nicknames
            .iter()
            .map(|nickname| (nickname.to_lowercase(), nickname))
            .collect();
        let mut seen = HashSet::new();
        let mut kept: Vec<ProfileRecord> = Vec::with_capacity(records.len());

        for record in records {
            let Some(&registered) = requested.get(&record.nickname().to_lowercase()) else {
                warn!(nickname = %record.nickname(), "Dropping record for a profile that was not requested");
                report.dropped += 1;
                continue;
            };
            if !seen.insert(registered.as_str()) {
                warn!(nickname = %registered, "Dropping duplicate record");
                report.dropped += 1;
                continue;
            }
            kept.push(record.with_nickname(registered.clone()));
        }

        let batch = SnapshotBatch::from_records(Utc::now(), kept);
        report.stored = batch.snapshots.len();
        report.failed = batch.failures.len();

        for failure in &batch.failures {
            warn!(nickname = %failure.nickname, error = %failure.error, "Vendor reported an error");
        }

        if batch.is_empty() {
            debug!("Vendor returned no usable records");
            return Ok(());
        }

        self.stats_repo.store_batch(&batch).await?;
        debug!(
            snapshots = batch.snapshots.len(),
            videos = batch.video_count(),
            "Stored snapshot batch"
        );
        Ok(())
    }

    async fn refresh_trends(&self) -> ServiceResult<usize> {
        let snapshot = self.trends.fetch_trends().await?;
        self.trend_repo.replace_all(&snapshot).await?;

        if let Some(cache) = &self.trend_cache {
            // On failure readers keep the previous lists until their TTL lapses
            if let Err(e) = cache.advance().await {
                warn!(error = %e, "Failed to advance trend cache generation");
            }
        }

        Ok(snapshot.len())
    }
}

impl std::fmt::Debug for StatsRefresher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StatsRefresher")
            .field("trend_cache", &self.trend_cache.is_some())
            .finish()
    }
}
