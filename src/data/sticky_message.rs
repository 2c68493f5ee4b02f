//! Sticky message data repository for database operations.
//!
//! Provides `StickyMessageRepository` for the `sticky_messages` table. Each row tracks the
//! live copy of one sticky: the reconciler swaps `message_id` every time it reposts.

use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr,
    EntityTrait, QueryFilter, QueryOrder,
};

use crate::error::AppError;
use crate::model::sticky_message::{CreateStickyMessageParam, StickyMessage};

/// Repository providing database operations for sticky messages.
pub struct StickyMessageRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StickyMessageRepository<'a> {
    /// Creates a new StickyMessageRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every sticky message, ordered by row id.
    ///
    /// The order is the order stickies of the same channel are reposted in.
    ///
    /// # Returns
    /// - `Ok(Vec<StickyMessage>)` - All configured stickies
    /// - `Err(AppError::DbErr)` - Database error during query
    /// - `Err(AppError::InternalErr)` - A stored Discord id could not be parsed
    pub async fn get_all(&self) -> Result<Vec<StickyMessage>, AppError> {
        let entities = entity::prelude::StickyMessage::find()
            .order_by_asc(entity::sticky_message::Column::Id)
            .all(self.db)
            .await?;

        entities.into_iter().map(StickyMessage::from_entity).collect()
    }

    /// Inserts a new sticky message row.
    ///
    /// # Arguments
    /// - `param` - Ids of the posted copy, its channel and guild, and the raw content
    ///
    /// # Returns
    /// - `Ok(StickyMessage)` - The created sticky
    /// - `Err(AppError::DbErr)` - Database error during insert
    pub async fn create(&self, param: CreateStickyMessageParam) -> Result<StickyMessage, AppError> {
        let entity = entity::sticky_message::ActiveModel {
            id: ActiveValue::NotSet,
            message_id: ActiveValue::Set(param.message_id.to_string()),
            channel_id: ActiveValue::Set(param.channel_id.to_string()),
            guild_id: ActiveValue::Set(param.guild_id.to_string()),
            content: ActiveValue::Set(param.content),
        }
        .insert(self.db)
        .await?;

        StickyMessage::from_entity(entity)
    }

    /// Points a sticky at a newly posted copy.
    ///
    /// # Arguments
    /// - `id` - Row id of the sticky
    /// - `message_id` - Discord message ID of the new copy
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of rows updated (0 if the sticky was removed meanwhile)
    /// - `Err(DbErr)` - Database error during update
    pub async fn update_message_id(&self, id: i32, message_id: u64) -> Result<u64, DbErr> {
        let result = entity::prelude::StickyMessage::update_many()
            .col_expr(
                entity::sticky_message::Column::MessageId,
                Expr::value(message_id.to_string()),
            )
            .filter(entity::sticky_message::Column::Id.eq(id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Deletes the sticky (or stickies) whose live copy has the given message id.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of rows deleted
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete_by_message_id(&self, message_id: u64) -> Result<u64, DbErr> {
        let result = entity::prelude::StickyMessage::delete_many()
            .filter(entity::sticky_message::Column::MessageId.eq(message_id.to_string()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Deletes a batch of stickies by row id.
    ///
    /// An empty batch is a no-op and does not touch the database.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of rows deleted
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete_many(&self, ids: &[i32]) -> Result<u64, DbErr> {
        if ids.is_empty() {
            return Ok(0);
        }

        let result = entity::prelude::StickyMessage::delete_many()
            .filter(entity::sticky_message::Column::Id.is_in(ids.iter().copied()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
