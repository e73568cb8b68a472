//! Stale-featured sweep - optionally clears `is_featured` flags that have
//! outlived the display window.
//!
//! Off by default: stock behavior keeps the flag set and lets the landing
//! window hide the post. Enabling the sweep makes the flag follow the
//! window.

use tokio_cron_scheduler::{Job, JobScheduler, JobSchedulerError};

use newsdesk_core::service::featured_window;

use crate::config::SweepConfig;
use crate::state::AppState;

/// Register and start the sweep when enabled. Returns the running scheduler
/// so it lives as long as the server.
pub async fn start_featured_sweep(
    config: &SweepConfig,
    state: &AppState,
) -> Result<Option<JobScheduler>, JobSchedulerError> {
    if !config.enabled {
        tracing::info!("Featured sweep disabled");
        return Ok(None);
    }

    let scheduler = JobScheduler::new().await?;

    let repo = state.repo.clone();
    let clock = state.clock.clone();
    let job = Job::new_async(config.schedule.as_str(), move |_uuid, _lock| {
        let repo = repo.clone();
        let clock = clock.clone();
        Box::pin(async move {
            let cutoff = clock.now() - featured_window();
            match repo.unfeature_older_than(cutoff).await {
                Ok(0) => tracing::debug!("Featured sweep found nothing stale"),
                Ok(cleared) => tracing::info!(cleared, "Featured sweep cleared stale flags"),
                Err(e) => tracing::error!("Featured sweep failed: {}", e),
            }
        })
    })?;

    let id = scheduler.add(job).await?;
    scheduler.start().await?;
    tracing::info!(schedule = %config.schedule, job_id = %id, "Featured sweep registered");

    Ok(Some(scheduler))
}
