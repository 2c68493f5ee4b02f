//! `/make-sticky` and `/remove-sticky`.

use serenity::all::{
    AutocompleteChoice, CommandInteraction, CommandOptionType, Context,
    CreateAutocompleteResponse, CreateCommand, CreateCommandOption, EditInteractionResponse,
};

use crate::bot::command::{
    choice_name, options, permission::require_admin, MAX_AUTOCOMPLETE_CHOICES,
};
use crate::bot::gateway::SerenityGateway;
use crate::bot::state::BotState;
use crate::error::AppError;
use crate::model::sticky_message::StickyMessage;
use crate::service::sticky::{footer_length, StickyService, MAX_MESSAGE_LENGTH};

pub const MAKE_NAME: &str = "make-sticky";
pub const REMOVE_NAME: &str = "remove-sticky";

pub fn register_make() -> CreateCommand {
    let max_length = u16::try_from(MAX_MESSAGE_LENGTH - footer_length()).unwrap_or(u16::MAX);

    CreateCommand::new(MAKE_NAME)
        .description("Keep a message at the bottom of this channel")
        .add_option(
            CreateCommandOption::new(CommandOptionType::String, "content", "Message content")
                .required(true)
                .max_length(max_length),
        )
}

pub fn register_remove() -> CreateCommand {
    CreateCommand::new(REMOVE_NAME)
        .description("Stop keeping a sticky message in this channel")
        .add_option(
            CreateCommandOption::new(
                CommandOptionType::String,
                "message_id",
                "Message ID of the sticky",
            )
            .required(true)
            .set_autocomplete(true),
        )
}

pub async fn run_make(
    state: &BotState,
    ctx: &Context,
    command: &CommandInteraction,
) -> Result<EditInteractionResponse, AppError> {
    require_admin(state, command)?;

    let guild_id = command.guild_id.ok_or_else(|| {
        AppError::BadRequest("Sticky messages can only be made in a server channel.".to_string())
    })?;
    let options = command.data.options();
    let content = options::required_string(&options, "content")?;

    let gateway = SerenityGateway::new(ctx.http.clone());
    let sticky = StickyService::new(&state.cache, &state.locks, &gateway)
        .create(guild_id.get(), command.channel_id.get(), content)
        .await?;

    Ok(EditInteractionResponse::new().content(format!(
        "Sticky message created (ID `{}`).",
        sticky.message_id
    )))
}

pub async fn run_remove(
    state: &BotState,
    ctx: &Context,
    command: &CommandInteraction,
) -> Result<EditInteractionResponse, AppError> {
    require_admin(state, command)?;

    let options = command.data.options();
    let raw = options::required_string(&options, "message_id")?;
    let message_id = raw.trim().parse::<u64>().map_err(|_| {
        AppError::BadRequest(format!("`{}` is not a valid message ID.", raw))
    })?;

    let gateway = SerenityGateway::new(ctx.http.clone());
    StickyService::new(&state.cache, &state.locks, &gateway)
        .remove(command.channel_id.get(), message_id)
        .await?;

    Ok(EditInteractionResponse::new().content("Sticky message removed."))
}

/// This channel's stickies whose message id starts with the input.
pub async fn autocomplete(
    state: &BotState,
    channel_id: u64,
    input: &str,
) -> CreateAutocompleteResponse {
    let snapshot = state.cache.snapshot().await;
    let choices = sticky_choices(snapshot.stickies_in(channel_id), input)
        .into_iter()
        .map(|(name, value)| AutocompleteChoice::new(name, value))
        .collect();

    CreateAutocompleteResponse::new().set_choices(choices)
}

fn sticky_choices<'a>(
    stickies: impl Iterator<Item = &'a StickyMessage>,
    input: &str,
) -> Vec<(String, String)> {
    let input = input.trim();

    stickies
        .map(|s| (s, s.message_id.to_string()))
        .filter(|(_, id)| id.starts_with(input))
        .take(MAX_AUTOCOMPLETE_CHOICES)
        .map(|(s, id)| (choice_name(&format!("{}: {}", id, s.content)), id))
        .collect()
}
