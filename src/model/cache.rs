//! Snapshot of the cached tables.

use std::collections::BTreeSet;

use super::{shutdown::ShutdownWindow, sticky_message::StickyMessage};

/// In-memory copy of the sticky and shutdown tables.
///
/// Always rebuilt wholesale by the cache; never patched in place.
#[derive(Debug, Clone, Default)]
pub struct CacheSnapshot {
    /// Distinct channel ids with at least one sticky.
    pub listened_channel_ids: BTreeSet<u64>,
    /// Ordered by row id ascending.
    pub stickies: Vec<StickyMessage>,
    /// Ordered by start date, then row id.
    pub shutdowns: Vec<ShutdownWindow>,
}

impl CacheSnapshot {
    /// Builds a snapshot, deriving the listened channel set from the stickies.
    pub fn new(stickies: Vec<StickyMessage>, shutdowns: Vec<ShutdownWindow>) -> Self {
        let listened_channel_ids = stickies.iter().map(|s| s.channel_id).collect();
        Self {
            listened_channel_ids,
            stickies,
            shutdowns,
        }
    }

    pub fn is_listened(&self, channel_id: u64) -> bool {
        self.listened_channel_ids.contains(&channel_id)
    }

    /// Stickies configured for a channel, in processing order.
    pub fn stickies_in(&self, channel_id: u64) -> impl Iterator<Item = &StickyMessage> {
        self.stickies
            .iter()
            .filter(move |s| s.channel_id == channel_id)
    }
}
