//! Domain models for sticky messages.

use crate::error::AppError;
use crate::util::parse::parse_u64_from_string;

/// Marker appended to every posted sticky copy so members can tell it apart.
pub const STICKY_FOOTER: &str = "\n-# This is a sticky message.";

/// A message that must always remain the most recent message in its channel.
#[derive(Debug, Clone, PartialEq)]
pub struct StickyMessage {
    /// Row id; also the processing order within a channel.
    pub id: i32,
    /// Discord message ID of the currently posted copy.
    pub message_id: u64,
    pub channel_id: u64,
    pub guild_id: u64,
    /// Content as entered by the admin, without footer.
    pub content: String,
}

impl StickyMessage {
    /// Converts an entity model to a sticky message domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(StickyMessage)` - Converted domain model
    /// - `Err(AppError::InternalErr)` - A stored Discord id is not a valid u64
    pub fn from_entity(entity: entity::sticky_message::Model) -> Result<Self, AppError> {
        Ok(Self {
            id: entity.id,
            message_id: parse_u64_from_string(&entity.message_id)?,
            channel_id: parse_u64_from_string(&entity.channel_id)?,
            guild_id: parse_u64_from_string(&entity.guild_id)?,
            content: entity.content,
        })
    }

    /// Text actually posted to the channel.
    pub fn rendered(&self) -> String {
        render_sticky(&self.content)
    }
}

/// Appends the sticky footer to content.
pub fn render_sticky(content: &str) -> String {
    format!("{}{}", content, STICKY_FOOTER)
}

/// Parameters for creating a sticky message row.
#[derive(Debug, Clone)]
pub struct CreateStickyMessageParam {
    /// Discord message ID of the copy that was just posted.
    pub message_id: u64,
    pub channel_id: u64,
    pub guild_id: u64,
    pub content: String,
}
