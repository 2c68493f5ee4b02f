//! Per-channel mutual exclusion for sticky reconciliation.

use std::collections::{BTreeSet, HashMap};
use std::sync::{Arc, Mutex, PoisonError};

use tokio::sync::Mutex as AsyncMutex;

/// Map of channel id to an async lock serializing sticky work in that channel.
///
/// Locks are created lazily and pruned to the listened channel set, so channels whose
/// stickies were all removed do not keep an entry forever. A lock that is currently held
/// or awaited is never pruned.
#[derive(Default)]
pub struct ChannelLocks {
    locks: Mutex<HashMap<u64, Arc<AsyncMutex<()>>>>,
}

impl ChannelLocks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lock for a channel, created on first use.
    pub fn lock_for(&self, channel_id: u64) -> Arc<AsyncMutex<()>> {
        let mut locks = self.locks.lock().unwrap_or_else(PoisonError::into_inner);
        locks.entry(channel_id).or_default().clone()
    }

    /// Drops locks for channels outside `listened` that nobody holds.
    ///
    /// # Returns
    /// Number of entries removed.
    pub fn prune(&self, listened: &BTreeSet<u64>) -> usize {
        let mut locks = self.locks.lock().unwrap_or_else(PoisonError::into_inner);
        let before = locks.len();
        locks.retain(|channel_id, lock| {
            listened.contains(channel_id) || Arc::strong_count(lock) > 1
        });
        before - locks.len()
    }

    pub fn len(&self) -> usize {
        self.locks
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
