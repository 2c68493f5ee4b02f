//! Chat platform seam used by the sticky reconciler and the age calculator.
//!
//! Services talk to Discord through the `ChatGateway` trait instead of serenity's `Http`
//! directly. A missing message or channel is an expected outcome and comes back as
//! `Ok(false)` / `Ok(None)`, never as an error.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serenity::all::{ChannelId, CreateMessage, GetMessages, MessageId};
use serenity::async_trait;
use serenity::http::Http;

use crate::error::AppError;

#[cfg(test)]
pub mod fake;

/// Milliseconds between the Unix epoch and the Discord epoch (2015-01-01).
const DISCORD_EPOCH_MS: i64 = 1_420_070_400_000;

/// A message retrieved from channel history.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryMessage {
    pub content: String,
    pub created_at: DateTime<Utc>,
}

#[async_trait]
pub trait ChatGateway: Send + Sync {
    /// Whether the channel exists and is visible to the bot.
    async fn channel_exists(&self, channel_id: u64) -> Result<bool, AppError>;

    /// Whether the message still exists in the channel.
    async fn message_exists(&self, channel_id: u64, message_id: u64) -> Result<bool, AppError>;

    /// Deletes a message. Returns `Ok(false)` if it was already gone.
    async fn delete_message(&self, channel_id: u64, message_id: u64) -> Result<bool, AppError>;

    /// Posts a plain text message and returns its id.
    async fn send_message(&self, channel_id: u64, content: &str) -> Result<u64, AppError>;

    /// Up to `limit` messages closest in time to `around`, in the order Discord returns them.
    async fn messages_around(
        &self,
        channel_id: u64,
        around: DateTime<Utc>,
        limit: u8,
    ) -> Result<Vec<HistoryMessage>, AppError>;
}

/// `ChatGateway` backed by serenity's REST client.
#[derive(Clone)]
pub struct SerenityGateway {
    http: Arc<Http>,
}

impl SerenityGateway {
    pub fn new(http: Arc<Http>) -> Self {
        Self { http }
    }
}

#[async_trait]
impl ChatGateway for SerenityGateway {
    async fn channel_exists(&self, channel_id: u64) -> Result<bool, AppError> {
        match self.http.get_channel(ChannelId::new(channel_id)).await {
            Ok(_) => Ok(true),
            Err(e) if is_not_found(&e) => Ok(false),
            Err(e) => Err(e.into()),
        }
    }

    async fn message_exists(&self, channel_id: u64, message_id: u64) -> Result<bool, AppError> {
        match self
            .http
            .get_message(ChannelId::new(channel_id), MessageId::new(message_id))
            .await
        {
            Ok(_) => Ok(true),
            Err(e) if is_not_found(&e) => Ok(false),
            Err(e) => Err(e.into()),
        }
    }

    async fn delete_message(&self, channel_id: u64, message_id: u64) -> Result<bool, AppError> {
        match self
            .http
            .delete_message(ChannelId::new(channel_id), MessageId::new(message_id), None)
            .await
        {
            Ok(()) => Ok(true),
            Err(e) if is_not_found(&e) => Ok(false),
            Err(e) => Err(e.into()),
        }
    }

    async fn send_message(&self, channel_id: u64, content: &str) -> Result<u64, AppError> {
        let message = ChannelId::new(channel_id)
            .send_message(&self.http, CreateMessage::new().content(content))
            .await?;

        Ok(message.id.get())
    }

    async fn messages_around(
        &self,
        channel_id: u64,
        around: DateTime<Utc>,
        limit: u8,
    ) -> Result<Vec<HistoryMessage>, AppError> {
        let builder = GetMessages::new()
            .around(snowflake_at(around))
            .limit(limit);

        let messages = ChannelId::new(channel_id)
            .messages(&self.http, builder)
            .await?;

        Ok(messages
            .into_iter()
            .map(|m| HistoryMessage {
                content: m.content,
                created_at: m.timestamp.to_utc(),
            })
            .collect())
    }
}

/// Smallest message id Discord could have assigned at `at`.
pub fn snowflake_at(at: DateTime<Utc>) -> MessageId {
    let since_epoch = (at.timestamp_millis() - DISCORD_EPOCH_MS).max(1) as u64;
    MessageId::new(since_epoch << 22)
}

fn is_not_found(err: &serenity::Error) -> bool {
    match err {
        serenity::Error::Http(http_err) => {
            http_err.status_code().map(|status| status.as_u16()) == Some(404)
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn snowflake_encodes_timestamp() {
        let at = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();

        let id = snowflake_at(at);

        assert_eq!(
            (id.get() >> 22) as i64 + DISCORD_EPOCH_MS,
            at.timestamp_millis()
        );
        assert_eq!(id.created_at().unix_timestamp(), at.timestamp());
    }

    #[test]
    fn snowflake_before_discord_epoch_is_clamped() {
        let at = Utc.with_ymd_and_hms(2010, 1, 1, 0, 0, 0).unwrap();

        assert_eq!(snowflake_at(at).get(), 1 << 22);
    }
}
