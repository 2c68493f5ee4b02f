//! In-memory snapshot of the sticky and shutdown tables.
//!
//! The cache bounds how often the database is read: event handlers and autocomplete
//! providers read the snapshot, and only `refresh()` goes to the store. A refresh runs on
//! a fixed interval (see `scheduler::cache_refresh`) and after every write.

use std::sync::Arc;

use sea_orm::DatabaseConnection;
use tokio::sync::{Mutex, RwLock};

use crate::data::{shutdown::ShutdownRepository, sticky_message::StickyMessageRepository};
use crate::error::AppError;
use crate::model::cache::CacheSnapshot;

/// Owned, injectable cache of the two snapshot tables.
///
/// Readers get an `Arc` to an immutable snapshot, so a refresh never blocks on or
/// mutates a snapshot someone is still iterating.
pub struct SnapshotCache {
    db: DatabaseConnection,
    snapshot: RwLock<Arc<CacheSnapshot>>,
    /// Held from the first read until the swap, so an older read can't overwrite a newer one.
    refresh_lock: Mutex<()>,
}

impl SnapshotCache {
    /// Creates an empty cache. Call `refresh()` before serving events.
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            db,
            snapshot: RwLock::new(Arc::new(CacheSnapshot::default())),
            refresh_lock: Mutex::new(()),
        }
    }

    /// Database connection the cache reads from; shared with writers.
    pub fn db(&self) -> &DatabaseConnection {
        &self.db
    }

    /// Current snapshot.
    pub async fn snapshot(&self) -> Arc<CacheSnapshot> {
        self.snapshot.read().await.clone()
    }

    /// Reloads both tables and swaps the snapshot in one step.
    ///
    /// Refreshes run one at a time. On a store error the previous snapshot stays in place.
    ///
    /// # Returns
    /// - `Ok(Arc<CacheSnapshot>)` - The new snapshot
    /// - `Err(AppError)` - Store error; the old snapshot is kept
    pub async fn refresh(&self) -> Result<Arc<CacheSnapshot>, AppError> {
        let _refreshing = self.refresh_lock.lock().await;

        let stickies = StickyMessageRepository::new(&self.db).get_all().await?;
        let shutdowns = ShutdownRepository::new(&self.db).get_all().await?;

        let snapshot = Arc::new(CacheSnapshot::new(stickies, shutdowns));
        *self.snapshot.write().await = snapshot.clone();

        tracing::debug!(
            "Cache refreshed: {} sticky message(s) in {} channel(s), {} shutdown(s)",
            snapshot.stickies.len(),
            snapshot.listened_channel_ids.len(),
            snapshot.shutdowns.len()
        );

        Ok(snapshot)
    }

    /// Refresh following a successful write.
    ///
    /// The write already happened, so a failed refresh is logged instead of failing the
    /// caller; the next scheduled refresh catches up.
    pub async fn refresh_after_write(&self, operation: &str) {
        if let Err(e) = self.refresh().await {
            tracing::error!("Failed to refresh cache after {}: {}", operation, e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::ConnectionTrait;
    use std::time::Duration;
    use test_utils::{builder::TestBuilder, factory};

    #[tokio::test]
    async fn starts_empty() {
        let test = TestBuilder::new().with_cache_tables().build().await.unwrap();
        let cache = SnapshotCache::new(test.db.clone().unwrap());

        let snapshot = cache.snapshot().await;

        assert!(snapshot.stickies.is_empty());
        assert!(snapshot.shutdowns.is_empty());
        assert!(snapshot.listened_channel_ids.is_empty());
    }

    #[tokio::test]
    async fn refresh_derives_distinct_channels() -> Result<(), AppError> {
        let test = TestBuilder::new().with_cache_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        factory::create_sticky_message(db, "1001").await?;
        factory::create_sticky_message(db, "1001").await?;
        factory::create_sticky_message(db, "1002").await?;
        factory::create_shutdown(db).await?;

        let cache = SnapshotCache::new(db.clone());
        let snapshot = cache.refresh().await?;

        assert_eq!(snapshot.stickies.len(), 3);
        assert_eq!(snapshot.shutdowns.len(), 1);
        assert_eq!(
            snapshot.listened_channel_ids.iter().copied().collect::<Vec<_>>(),
            vec![1001, 1002]
        );
        assert_eq!(snapshot.stickies_in(1001).count(), 2);

        Ok(())
    }

    #[tokio::test]
    async fn refresh_replaces_snapshot_wholesale() -> Result<(), AppError> {
        let test = TestBuilder::new().with_cache_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let shutdown = factory::create_shutdown(db).await?;
        let cache = SnapshotCache::new(db.clone());
        cache.refresh().await?;
        let before = cache.snapshot().await;

        ShutdownRepository::new(db).delete(shutdown.id).await?;
        cache.refresh().await?;

        assert_eq!(before.shutdowns.len(), 1);
        assert!(cache
            .snapshot()
            .await
            .shutdowns
            .iter()
            .all(|s| s.id != shutdown.id));

        Ok(())
    }

    #[tokio::test]
    async fn failed_refresh_keeps_previous_snapshot() -> Result<(), AppError> {
        let test = TestBuilder::new().with_cache_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        factory::create_sticky_message(db, "1001").await?;
        let cache = SnapshotCache::new(db.clone());
        cache.refresh().await?;

        db.execute_unprepared("DROP TABLE shutdowns").await?;

        assert!(cache.refresh().await.is_err());
        assert_eq!(cache.snapshot().await.stickies.len(), 1);

        Ok(())
    }

    #[tokio::test]
    async fn refresh_waits_for_refresh_in_progress() -> Result<(), AppError> {
        let test = TestBuilder::new().with_cache_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let cache = SnapshotCache::new(db.clone());

        let in_progress = cache.refresh_lock.lock().await;
        factory::create_sticky_message(db, "1001").await?;

        let blocked = tokio::time::timeout(Duration::from_millis(50), cache.refresh()).await;
        assert!(blocked.is_err());
        assert!(cache.snapshot().await.stickies.is_empty());

        drop(in_progress);
        let snapshot = cache.refresh().await?;

        assert_eq!(snapshot.stickies.len(), 1);

        Ok(())
    }
}
