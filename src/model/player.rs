//! Domain model for the read-only player identity table.

/// Link between a Discord account and an Alderon (in-game) account.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerRecord {
    pub discord_id: String,
    pub alderon_id: String,
}

impl PlayerRecord {
    pub fn from_entity(entity: entity::player::Model) -> Self {
        Self {
            discord_id: entity.discord_id,
            alderon_id: entity.alderon_id,
        }
    }
}
