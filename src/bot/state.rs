//! State shared by every event and command handler.

use std::sync::Arc;

use crate::config::Config;
use crate::model::lifespan::Lifespans;
use crate::service::cache::SnapshotCache;
use crate::service::sticky::lock::ChannelLocks;

/// Shared bot state.
///
/// Cloned into the event handler once; every field is cheap to clone.
#[derive(Clone)]
pub struct BotState {
    /// Snapshot of stickies and shutdowns; also owns the database connection.
    pub cache: Arc<SnapshotCache>,
    /// Per-channel locks serializing sticky work.
    pub locks: Arc<ChannelLocks>,
    pub lifespans: Arc<Lifespans>,

    pub guild_id: u64,
    pub season_channel_id: u64,
    pub owner_user_id: Option<u64>,
    pub command_log_channel_id: Option<u64>,
}

impl BotState {
    /// Creates the bot state from configuration and the already initialized cache.
    ///
    /// # Arguments
    /// - `config` - Application configuration
    /// - `cache` - Snapshot cache, refreshed at least once
    /// - `lifespans` - Species lifespan table
    pub fn new(config: &Config, cache: Arc<SnapshotCache>, lifespans: Lifespans) -> Self {
        Self {
            cache,
            locks: Arc::new(ChannelLocks::new()),
            lifespans: Arc::new(lifespans),
            guild_id: config.guild_id,
            season_channel_id: config.season_channel_id,
            owner_user_id: config.owner_user_id,
            command_log_channel_id: config.command_log_channel_id,
        }
    }
}
