//! `/refresh-cache`: reload stickies and shutdowns on demand.

use serenity::all::{CommandInteraction, CreateCommand, CreateEmbed, EditInteractionResponse};

use crate::bot::command::{permission::require_admin, EMBED_COLOUR};
use crate::bot::state::BotState;
use crate::error::AppError;

pub const NAME: &str = "refresh-cache";

pub fn register() -> CreateCommand {
    CreateCommand::new(NAME).description("Reload sticky messages and shutdowns from the database")
}

pub async fn run(
    state: &BotState,
    command: &CommandInteraction,
) -> Result<EditInteractionResponse, AppError> {
    require_admin(state, command)?;

    let snapshot = state.cache.refresh().await?;

    let embed = CreateEmbed::new()
        .title("Cache refreshed")
        .colour(EMBED_COLOUR)
        .field("Sticky messages", snapshot.stickies.len().to_string(), true)
        .field(
            "Channels",
            snapshot.listened_channel_ids.len().to_string(),
            true,
        )
        .field("Shutdowns", snapshot.shutdowns.len().to_string(), true);

    Ok(EditInteractionResponse::new().embed(embed))
}
