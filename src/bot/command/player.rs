//! `/alderon-id`: look up a member's linked in-game account.

use serenity::all::{
    CommandInteraction, CommandOptionType, CreateCommand, CreateCommandOption,
    EditInteractionResponse,
};

use crate::bot::command::options;
use crate::bot::state::BotState;
use crate::error::AppError;
use crate::service::player::PlayerService;

pub const NAME: &str = "alderon-id";

pub fn register() -> CreateCommand {
    CreateCommand::new(NAME)
        .description("Show the Alderon ID linked to a member")
        .add_option(CreateCommandOption::new(
            CommandOptionType::User,
            "user",
            "Member to look up (defaults to you)",
        ))
}

pub async fn run(
    state: &BotState,
    command: &CommandInteraction,
) -> Result<EditInteractionResponse, AppError> {
    let options = command.data.options();
    let user = options::user(&options, "user").unwrap_or(&command.user);

    let player = PlayerService::new(state.cache.db())
        .get_by_discord_id(user.id.get())
        .await?;

    Ok(EditInteractionResponse::new().content(format!(
        "<@{}>'s Alderon ID is `{}`.",
        player.discord_id, player.alderon_id
    )))
}
