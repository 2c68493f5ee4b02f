//! Sticky message reconciliation.
//!
//! Keeps every configured sticky as the most recent message in its channel. Work for one
//! channel is serialized by a per-channel lock from `ChannelLocks`; the cache snapshot is
//! read only after that lock is held, and every repost refreshes the cache before the
//! lock is released. A second trigger for the same channel therefore always sees the
//! message id written by the first.

pub mod lock;


use crate::bot::gateway::ChatGateway;
use crate::data::sticky_message::StickyMessageRepository;
use crate::error::AppError;
use crate::model::sticky_message::{render_sticky, CreateStickyMessageParam, StickyMessage};
use crate::service::cache::SnapshotCache;

use lock::ChannelLocks;

/// Discord's message length limit, footer included.
pub const MAX_MESSAGE_LENGTH: usize = 2000;

pub struct StickyService<'a> {
    cache: &'a SnapshotCache,
    locks: &'a ChannelLocks,
    gateway: &'a dyn ChatGateway,
    /// Author whose messages never trigger a repost.
    bot_user_id: Option<u64>,
}

impl<'a> StickyService<'a> {
    /// Creates a new StickyService instance.
    ///
    /// # Arguments
    /// - `cache` - Snapshot cache; its connection is used for writes
    /// - `locks` - Process-wide per-channel locks
    /// - `gateway` - Chat platform the stickies live on
    pub fn new(
        cache: &'a SnapshotCache,
        locks: &'a ChannelLocks,
        gateway: &'a dyn ChatGateway,
    ) -> Self {
        Self {
            cache,
            locks,
            gateway,
            bot_user_id: None,
        }
    }

    /// Skips triggers authored by `bot_user_id`.
    pub fn with_bot_user_id(mut self, bot_user_id: u64) -> Self {
        self.bot_user_id = Some(bot_user_id);
        self
    }

    /// Moves every sticky of a channel back to the bottom after a new message.
    ///
    /// Messages by the bot's own user and channels without a sticky return immediately
    /// without touching the lock map.
    ///
    /// # Arguments
    /// - `author_id` - Author of the new message
    /// - `channel_id` - Channel the new message was posted in
    ///
    /// # Returns
    /// - `Ok(usize)` - Number of stickies reposted
    pub async fn on_message(&self, author_id: u64, channel_id: u64) -> Result<usize, AppError> {
        if self.bot_user_id == Some(author_id) {
            return Ok(0);
        }

        let current = self.cache.snapshot().await;
        if !current.is_listened(channel_id) {
            return Ok(0);
        }

        let pruned = self.locks.prune(&current.listened_channel_ids);
        if pruned > 0 {
            tracing::debug!("Pruned {} channel lock(s)", pruned);
        }

        let lock = self.locks.lock_for(channel_id);
        let _guard = lock.lock().await;

        let snapshot = self.cache.snapshot().await;
        let stickies: Vec<StickyMessage> = snapshot.stickies_in(channel_id).cloned().collect();

        let mut reposted = 0;
        for sticky in &stickies {
            match self.repost(sticky).await {
                Ok(()) => reposted += 1,
                Err(e) => tracing::error!(
                    "Failed to repost sticky {} in channel {}: {}",
                    sticky.id,
                    channel_id,
                    e
                ),
            }
        }

        Ok(reposted)
    }

    async fn repost(&self, sticky: &StickyMessage) -> Result<(), AppError> {
        if self
            .gateway
            .message_exists(sticky.channel_id, sticky.message_id)
            .await?
        {
            self.gateway
                .delete_message(sticky.channel_id, sticky.message_id)
                .await?;
        } else {
            tracing::warn!(
                "Sticky message {} not found in channel {}, posting a new copy",
                sticky.message_id,
                sticky.channel_id
            );
        }

        let new_message_id = self
            .gateway
            .send_message(sticky.channel_id, &sticky.rendered())
            .await?;

        let updated = match StickyMessageRepository::new(self.cache.db())
            .update_message_id(sticky.id, new_message_id)
            .await
        {
            Ok(updated) => updated,
            Err(e) => {
                // The stored id still points at the deleted copy; the next trigger posts a
                // fresh one, so this copy must not survive.
                if let Err(cleanup) = self
                    .gateway
                    .delete_message(sticky.channel_id, new_message_id)
                    .await
                {
                    tracing::warn!(
                        "Failed to delete untracked sticky copy {}: {}",
                        new_message_id,
                        cleanup
                    );
                }
                return Err(e.into());
            }
        };

        if updated == 0 {
            // Row vanished while we were posting; don't leave an untracked copy behind.
            tracing::warn!(
                "Sticky {} was removed during repost, deleting copy {}",
                sticky.id,
                new_message_id
            );
            self.gateway
                .delete_message(sticky.channel_id, new_message_id)
                .await?;
        }

        self.cache.refresh_after_write("sticky repost").await;

        tracing::debug!(
            "Reposted sticky {} in channel {} as {}",
            sticky.id,
            sticky.channel_id,
            new_message_id
        );

        Ok(())
    }

    /// Drops stickies whose channel or live message no longer exists.
    ///
    /// Runs once before the bot starts serving events. Transient gateway errors keep the
    /// sticky; only a definite "does not exist" marks it for removal.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of rows removed
    /// - `Err(AppError::DbErr)` - The batch delete failed
    pub async fn validate_on_startup(&self) -> Result<u64, AppError> {
        let snapshot = self.cache.snapshot().await;
        let mut stale = Vec::new();

        for sticky in &snapshot.stickies {
            match self.gateway.channel_exists(sticky.channel_id).await {
                Ok(true) => {}
                Ok(false) => {
                    tracing::warn!(
                        "Channel {} of sticky {} no longer exists",
                        sticky.channel_id,
                        sticky.id
                    );
                    stale.push(sticky.id);
                    continue;
                }
                Err(e) => {
                    tracing::error!(
                        "Could not check channel {} of sticky {}: {}",
                        sticky.channel_id,
                        sticky.id,
                        e
                    );
                    continue;
                }
            }

            match self
                .gateway
                .message_exists(sticky.channel_id, sticky.message_id)
                .await
            {
                Ok(true) => tracing::debug!("Sticky {} is valid", sticky.id),
                Ok(false) => {
                    tracing::warn!(
                        "Message {} of sticky {} no longer exists",
                        sticky.message_id,
                        sticky.id
                    );
                    stale.push(sticky.id);
                }
                Err(e) => tracing::error!(
                    "Could not check message {} of sticky {}: {}",
                    sticky.message_id,
                    sticky.id,
                    e
                ),
            }
        }

        if stale.is_empty() {
            tracing::info!("All {} sticky message(s) are valid", snapshot.stickies.len());
            return Ok(0);
        }

        let removed = StickyMessageRepository::new(self.cache.db())
            .delete_many(&stale)
            .await?;
        self.cache.refresh_after_write("startup validation").await;

        tracing::info!("Removed {} stale sticky message(s)", removed);

        Ok(removed)
    }

    /// Posts a new sticky in a channel and starts tracking it.
    ///
    /// # Arguments
    /// - `guild_id` - Guild the channel belongs to
    /// - `channel_id` - Channel to stick the message in
    /// - `content` - Message text without footer
    ///
    /// # Returns
    /// - `Ok(StickyMessage)` - The tracked sticky
    /// - `Err(AppError::BadRequest)` - Empty content or content too long once rendered
    /// - `Err(AppError::DiscordErr)` - Posting failed; nothing was stored
    pub async fn create(
        &self,
        guild_id: u64,
        channel_id: u64,
        content: &str,
    ) -> Result<StickyMessage, AppError> {
        let content = content.trim();
        if content.is_empty() {
            return Err(AppError::BadRequest(
                "Sticky message content cannot be empty.".to_string(),
            ));
        }
        if render_sticky(content).chars().count() > MAX_MESSAGE_LENGTH {
            return Err(AppError::BadRequest(format!(
                "Sticky message content is too long, use at most {} characters.",
                MAX_MESSAGE_LENGTH - footer_length()
            )));
        }

        let lock = self.locks.lock_for(channel_id);
        let _guard = lock.lock().await;

        let message_id = self
            .gateway
            .send_message(channel_id, &render_sticky(content))
            .await?;

        let created = StickyMessageRepository::new(self.cache.db())
            .create(CreateStickyMessageParam {
                message_id,
                channel_id,
                guild_id,
                content: content.to_string(),
            })
            .await;

        let sticky = match created {
            Ok(sticky) => sticky,
            Err(e) => {
                if let Err(cleanup) = self.gateway.delete_message(channel_id, message_id).await {
                    tracing::warn!(
                        "Failed to delete untracked sticky copy {}: {}",
                        message_id,
                        cleanup
                    );
                }
                return Err(e);
            }
        };

        self.cache.refresh_after_write("sticky creation").await;

        tracing::info!("Created sticky {} in channel {}", sticky.id, channel_id);

        Ok(sticky)
    }

    /// Stops tracking a sticky and deletes its live copy.
    ///
    /// # Arguments
    /// - `channel_id` - Channel the command was run in
    /// - `message_id` - Id of the sticky's live copy
    ///
    /// # Returns
    /// - `Ok(StickyMessage)` - The removed sticky
    /// - `Err(AppError::NotFound)` - No sticky with that message id in the channel
    pub async fn remove(&self, channel_id: u64, message_id: u64) -> Result<StickyMessage, AppError> {
        let lock = self.locks.lock_for(channel_id);
        let _guard = lock.lock().await;

        let snapshot = self.cache.snapshot().await;
        let sticky = snapshot
            .stickies_in(channel_id)
            .find(|s| s.message_id == message_id)
            .cloned()
            .ok_or_else(|| {
                AppError::NotFound(format!(
                    "No sticky message with ID {} in this channel.",
                    message_id
                ))
            })?;

        if !self.gateway.delete_message(channel_id, message_id).await? {
            tracing::warn!(
                "Sticky copy {} was already gone from channel {}",
                message_id,
                channel_id
            );
        }

        StickyMessageRepository::new(self.cache.db())
            .delete_by_message_id(message_id)
            .await?;
        self.cache.refresh_after_write("sticky removal").await;

        tracing::info!("Removed sticky {} from channel {}", sticky.id, channel_id);

        Ok(sticky)
    }
}

/// Characters the footer adds to every sticky.
pub fn footer_length() -> usize {
    crate::model::sticky_message::STICKY_FOOTER.chars().count()
}
