//! Read-only access to the player identity table.
//!
//! Rows are maintained by the game server tooling; the bot only looks them up.

use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter};

use crate::model::player::PlayerRecord;

pub struct PlayerRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PlayerRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds the player linked to a Discord user.
    ///
    /// # Returns
    /// - `Ok(Some(PlayerRecord))`: The user has a linked Alderon ID
    /// - `Ok(None)`: No link exists
    /// - `Err(DbErr)`: Database error
    pub async fn find_by_discord_id(&self, discord_id: u64) -> Result<Option<PlayerRecord>, DbErr> {
        let entity = entity::prelude::Player::find()
            .filter(entity::player::Column::DiscordId.eq(discord_id.to_string()))
            .one(self.db)
            .await?;

        Ok(entity.map(PlayerRecord::from_entity))
    }
}
