//! In-memory `ChatGateway` used by service tests.

use std::collections::BTreeMap;
use std::sync::Mutex;

use chrono::{DateTime, Utc};
use serenity::async_trait;

use super::{ChatGateway, HistoryMessage};
use crate::error::AppError;

#[derive(Debug, Clone, PartialEq)]
pub struct FakeMessage {
    pub id: u64,
    pub content: String,
}

#[derive(Default)]
struct FakeState {
    channels: BTreeMap<u64, Vec<FakeMessage>>,
    history: Vec<HistoryMessage>,
    next_message_id: u64,
    sent: usize,
    deleted: usize,
    fail_history: bool,
    fail_lookups: bool,
}

/// Channels are plain vectors of messages; history queries return a canned list.
#[derive(Default)]
pub struct FakeGateway {
    state: Mutex<FakeState>,
}

impl FakeGateway {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_channel(self, channel_id: u64) -> Self {
        self.lock().channels.entry(channel_id).or_default();
        self
    }

    /// Canned result for `messages_around`.
    pub fn with_history(self, history: Vec<HistoryMessage>) -> Self {
        self.lock().history = history;
        self
    }

    pub fn failing_history(self) -> Self {
        self.lock().fail_history = true;
        self
    }

    /// Makes `channel_exists` and `message_exists` return transient errors.
    pub fn failing_lookups(self) -> Self {
        self.lock().fail_lookups = true;
        self
    }

    /// Seeds a message as if a member had posted it.
    pub fn post(&self, channel_id: u64, content: &str) -> u64 {
        let mut state = self.lock();
        let id = state.allocate_id();
        state
            .channels
            .entry(channel_id)
            .or_default()
            .push(FakeMessage {
                id,
                content: content.to_string(),
            });
        id
    }

    /// Removes a message as if someone had deleted it by hand.
    pub fn remove(&self, channel_id: u64, message_id: u64) {
        if let Some(messages) = self.lock().channels.get_mut(&channel_id) {
            messages.retain(|m| m.id != message_id);
        }
    }

    pub fn messages(&self, channel_id: u64) -> Vec<FakeMessage> {
        self.lock()
            .channels
            .get(&channel_id)
            .cloned()
            .unwrap_or_default()
    }

    pub fn last_message(&self, channel_id: u64) -> Option<FakeMessage> {
        self.messages(channel_id).pop()
    }

    /// Number of live messages in a channel whose content contains `needle`.
    pub fn count_containing(&self, channel_id: u64, needle: &str) -> usize {
        self.messages(channel_id)
            .iter()
            .filter(|m| m.content.contains(needle))
            .count()
    }

    pub fn sent_count(&self) -> usize {
        self.lock().sent
    }

    pub fn deleted_count(&self) -> usize {
        self.lock().deleted
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, FakeState> {
        self.state.lock().unwrap()
    }
}

impl FakeState {
    fn allocate_id(&mut self) -> u64 {
        self.next_message_id += 1;
        5_000 + self.next_message_id
    }
}

#[async_trait]
impl ChatGateway for FakeGateway {
    async fn channel_exists(&self, channel_id: u64) -> Result<bool, AppError> {
        let state = self.lock();
        if state.fail_lookups {
            return Err(serenity::Error::Other("lookup unavailable").into());
        }
        Ok(state.channels.contains_key(&channel_id))
    }

    async fn message_exists(&self, channel_id: u64, message_id: u64) -> Result<bool, AppError> {
        let exists = {
            let state = self.lock();
            if state.fail_lookups {
                return Err(serenity::Error::Other("lookup unavailable").into());
            }
            state
                .channels
                .get(&channel_id)
                .is_some_and(|messages| messages.iter().any(|m| m.id == message_id))
        };
        // Let competing tasks interleave between lookup and delete.
        tokio::task::yield_now().await;
        Ok(exists)
    }

    async fn delete_message(&self, channel_id: u64, message_id: u64) -> Result<bool, AppError> {
        let mut state = self.lock();
        let Some(messages) = state.channels.get_mut(&channel_id) else {
            return Ok(false);
        };
        let before = messages.len();
        messages.retain(|m| m.id != message_id);
        let removed = messages.len() < before;
        if removed {
            state.deleted += 1;
        }
        Ok(removed)
    }

    async fn send_message(&self, channel_id: u64, content: &str) -> Result<u64, AppError> {
        tokio::task::yield_now().await;
        let mut state = self.lock();
        if !state.channels.contains_key(&channel_id) {
            return Err(serenity::Error::Other("unknown channel").into());
        }
        let id = state.allocate_id();
        state.sent += 1;
        if let Some(messages) = state.channels.get_mut(&channel_id) {
            messages.push(FakeMessage {
                id,
                content: content.to_string(),
            });
        }
        Ok(id)
    }

    async fn messages_around(
        &self,
        _channel_id: u64,
        _around: DateTime<Utc>,
        _limit: u8,
    ) -> Result<Vec<HistoryMessage>, AppError> {
        let state = self.lock();
        if state.fail_history {
            return Err(serenity::Error::Other("history unavailable").into());
        }
        Ok(state.history.clone())
    }
}
