//! Player factory for creating discord-to-alderon id mappings.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test player records.
pub struct PlayerFactory<'a> {
    db: &'a DatabaseConnection,
    discord_id: String,
    alderon_id: String,
}

impl<'a> PlayerFactory<'a> {
    /// Creates a new PlayerFactory with a unique discord id and an Alderon id in the
    /// `XXX-XXX-XXX` shape.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        let digits = format!("{:09}", id % 1_000_000_000);
        Self {
            db,
            discord_id: id.to_string(),
            alderon_id: format!("{}-{}-{}", &digits[0..3], &digits[3..6], &digits[6..9]),
        }
    }

    /// Sets the Discord user ID.
    pub fn discord_id(mut self, discord_id: impl Into<String>) -> Self {
        self.discord_id = discord_id.into();
        self
    }

    /// Sets the Alderon ID.
    pub fn alderon_id(mut self, alderon_id: impl Into<String>) -> Self {
        self.alderon_id = alderon_id.into();
        self
    }

    /// Builds and inserts the player row.
    pub async fn build(self) -> Result<entity::player::Model, DbErr> {
        entity::player::ActiveModel {
            id: ActiveValue::NotSet,
            discord_id: ActiveValue::Set(self.discord_id),
            alderon_id: ActiveValue::Set(self.alderon_id),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a player record with default values.
pub async fn create_player(db: &DatabaseConnection) -> Result<entity::player::Model, DbErr> {
    PlayerFactory::new(db).build().await
}
