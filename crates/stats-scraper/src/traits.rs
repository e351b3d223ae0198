//! Source traits the refresh pipeline depends on.

use async_trait::async_trait;
use stats_core::value_objects::{ProfileRecord, TrendSnapshot};

use crate::error::Result;

/// Supplies per-profile statistics for a batch of nicknames.
///
/// Vendor-side failures for a single profile come back as
/// `ProfileRecord::Failed`; an `Err` means the whole batch failed.
#[async_trait]
pub trait ProfileSource: Send + Sync {
    async fn fetch_profiles(&self, nicknames: &[String]) -> Result<Vec<ProfileRecord>>;
}

/// Supplies the current trending lists.
#[async_trait]
pub trait TrendSource: Send + Sync {
    async fn fetch_trends(&self) -> Result<TrendSnapshot>;
}
