use std::sync::Arc;
use std::time::Duration;

use tokio_cron_scheduler::{Job, JobScheduler};

use crate::error::AppError;
use crate::service::cache::SnapshotCache;

/// Starts the periodic cache refresh
///
/// Reloads the sticky and shutdown tables every `interval_secs` seconds for as long as the
/// process runs. A failed refresh is logged and the previous snapshot stays in use.
///
/// # Arguments
/// - `cache`: Cache shared with the event and command handlers
/// - `interval_secs`: Seconds between refreshes
///
/// # Returns
/// - `Ok(JobScheduler)`: Running scheduler; keep it alive for the lifetime of the bot
/// - `Err(AppError::SchedulerErr)`: Failed to create or start the scheduler
pub async fn start_periodic_refresh(
    cache: Arc<SnapshotCache>,
    interval_secs: u64,
) -> Result<JobScheduler, AppError> {
    let scheduler = JobScheduler::new().await?;

    let job_cache = cache.clone();
    let job = Job::new_repeated_async(Duration::from_secs(interval_secs), move |_uuid, _lock| {
        let cache = job_cache.clone();

        Box::pin(async move {
            if let Err(e) = cache.refresh().await {
                tracing::error!("Error refreshing cache: {}", e);
            }
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    tracing::info!("Cache refresh scheduled every {}s", interval_secs);

    Ok(scheduler)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::ConnectionTrait;
    use test_utils::{builder::TestBuilder, factory};

    /// Polls the snapshot until it holds `expected` stickies or five seconds pass.
    async fn wait_for_stickies(cache: &SnapshotCache, expected: usize) -> bool {
        for _ in 0..50 {
            if cache.snapshot().await.stickies.len() == expected {
                return true;
            }
            tokio::time::sleep(Duration::from_millis(100)).await;
        }
        false
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn keeps_refreshing_after_failed_refresh() -> Result<(), AppError> {
        let test = TestBuilder::new().with_cache_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let cache = Arc::new(SnapshotCache::new(db.clone()));

        let mut scheduler = start_periodic_refresh(cache.clone(), 1).await?;

        db.execute_unprepared("ALTER TABLE sticky_messages RENAME TO sticky_messages_old")
            .await?;
        tokio::time::sleep(Duration::from_millis(1500)).await;
        db.execute_unprepared("ALTER TABLE sticky_messages_old RENAME TO sticky_messages")
            .await?;
        assert!(cache.snapshot().await.stickies.is_empty());

        factory::create_sticky_message(db, "1001").await?;

        let refreshed = wait_for_stickies(&cache, 1).await;
        scheduler.shutdown().await?;

        assert!(refreshed);

        Ok(())
    }
}
