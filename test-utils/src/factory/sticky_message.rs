//! Sticky message factory for creating test sticky rows.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test sticky messages with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::sticky_message::StickyMessageFactory;
///
/// let sticky = StickyMessageFactory::new(&db)
///     .channel_id("1001")
///     .message_id("2002")
///     .build()
///     .await?;
/// ```
pub struct StickyMessageFactory<'a> {
    db: &'a DatabaseConnection,
    message_id: String,
    channel_id: String,
    guild_id: String,
    content: String,
}

impl<'a> StickyMessageFactory<'a> {
    /// Creates a new StickyMessageFactory with default values.
    ///
    /// Defaults:
    /// - message_id, channel_id, guild_id: unique auto-incremented snowflakes
    /// - content: `"Sticky {id}"`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            message_id: next_id().to_string(),
            channel_id: next_id().to_string(),
            guild_id: next_id().to_string(),
            content: format!("Sticky {}", id),
        }
    }

    /// Sets the Discord message ID of the live sticky copy.
    pub fn message_id(mut self, message_id: impl Into<String>) -> Self {
        self.message_id = message_id.into();
        self
    }

    /// Sets the Discord channel ID the sticky belongs to.
    pub fn channel_id(mut self, channel_id: impl Into<String>) -> Self {
        self.channel_id = channel_id.into();
        self
    }

    /// Sets the Discord guild ID.
    pub fn guild_id(mut self, guild_id: impl Into<String>) -> Self {
        self.guild_id = guild_id.into();
        self
    }

    /// Sets the sticky content (without footer).
    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    /// Builds and inserts the sticky message row.
    ///
    /// # Returns
    /// - `Ok(entity::sticky_message::Model)` - Created row
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::sticky_message::Model, DbErr> {
        entity::sticky_message::ActiveModel {
            id: ActiveValue::NotSet,
            message_id: ActiveValue::Set(self.message_id),
            channel_id: ActiveValue::Set(self.channel_id),
            guild_id: ActiveValue::Set(self.guild_id),
            content: ActiveValue::Set(self.content),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a sticky message in the given channel with default values.
///
/// Shorthand for `StickyMessageFactory::new(db).channel_id(channel_id).build().await`.
pub async fn create_sticky_message(
    db: &DatabaseConnection,
    channel_id: &str,
) -> Result<entity::sticky_message::Model, DbErr> {
    StickyMessageFactory::new(db)
        .channel_id(channel_id)
        .build()
        .await
}
