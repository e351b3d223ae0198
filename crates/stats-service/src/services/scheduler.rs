//! Periodic refresh loop

use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{debug, info, warn};

use super::refresh::StatsRefresher;

/// Run `refresh_all` every `period`, starting immediately.
///
/// The loop exits when `shutdown` flips to `true` or its sender is dropped.
/// Failed runs are logged; the next tick is the retry.
pub fn spawn_refresh_schedule(
    refresher: StatsRefresher,
    period: Duration,
    mut shutdown: watch::Receiver<bool>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut tick = tokio::time::interval(period);
        tick.set_missed_tick_behavior(MissedTickBehavior::Delay);
        info!(period_secs = period.as_secs(), "Refresh schedule started");

        loop {
            tokio::select! {
                changed = shutdown.changed() => {
                    if changed.is_err() || *shutdown.borrow() {
                        break;
                    }
                }
                _ = tick.tick() => {
                    match refresher.refresh_all().await {
                        Ok(Some(_)) => {}
                        Ok(None) => debug!("Scheduled refresh skipped"),
                        Err(e) => warn!(error = %e, "Scheduled refresh failed"),
                    }
                }
            }
        }

        info!("Refresh schedule stopped");
    })
}
