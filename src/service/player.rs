//! Player identity lookups.

use sea_orm::DatabaseConnection;

use crate::data::player::PlayerRepository;
use crate::error::AppError;
use crate::model::player::PlayerRecord;

pub struct PlayerService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PlayerService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Linked Alderon account of a Discord user.
    ///
    /// # Returns
    /// - `Ok(PlayerRecord)` - The linked record
    /// - `Err(AppError::NotFound)` - The user never linked an account
    pub async fn get_by_discord_id(&self, discord_id: u64) -> Result<PlayerRecord, AppError> {
        PlayerRepository::new(self.db)
            .find_by_discord_id(discord_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!(
                    "<@{}> has not linked an Alderon ID yet.",
                    discord_id
                ))
            })
    }
}
