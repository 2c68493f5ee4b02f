//! `/add-shutdown` and `/remove-shutdown`.

use serenity::all::{
    CommandInteraction, CommandOptionType, CreateAutocompleteResponse, CreateCommand,
    CreateCommandOption, CreateEmbed, EditInteractionResponse,
};

use crate::bot::command::{
    choice_name, options, permission::require_admin, EMBED_COLOUR, MAX_AUTOCOMPLETE_CHOICES,
};
use crate::bot::state::BotState;
use crate::error::AppError;
use crate::model::shutdown::{CreateShutdownParam, ShutdownWindow};
use crate::service::shutdown::ShutdownService;
use crate::util::parse::parse_user_date;

pub const ADD_NAME: &str = "add-shutdown";
pub const REMOVE_NAME: &str = "remove-shutdown";

pub fn register_add() -> CreateCommand {
    CreateCommand::new(ADD_NAME)
        .description("Record a server shutdown so it is excluded from dino ages")
        .add_option(
            CreateCommandOption::new(CommandOptionType::String, "start", "Start date (DD-MM-YYYY)")
                .required(true),
        )
        .add_option(
            CreateCommandOption::new(CommandOptionType::String, "end", "End date (DD-MM-YYYY)")
                .required(true),
        )
        .add_option(
            CreateCommandOption::new(
                CommandOptionType::String,
                "description",
                "Reason for the shutdown",
            )
            .required(true)
            .min_length(5)
            .max_length(200),
        )
}

pub fn register_remove() -> CreateCommand {
    CreateCommand::new(REMOVE_NAME)
        .description("Remove a recorded server shutdown")
        .add_option(
            CreateCommandOption::new(
                CommandOptionType::Integer,
                "shutdown_id",
                "Shutdown to remove",
            )
            .required(true)
            .set_autocomplete(true),
        )
}

pub async fn run_add(
    state: &BotState,
    command: &CommandInteraction,
) -> Result<EditInteractionResponse, AppError> {
    require_admin(state, command)?;

    let options = command.data.options();
    let param = CreateShutdownParam {
        start_date: parse_user_date(options::required_string(&options, "start")?)?,
        end_date: parse_user_date(options::required_string(&options, "end")?)?,
        description: options::required_string(&options, "description")?.to_string(),
    };

    let shutdown = ShutdownService::new(&state.cache).create(param).await?;

    let embed = CreateEmbed::new()
        .title("Shutdown added")
        .colour(EMBED_COLOUR)
        .description(shutdown.summary())
        .field("ID", shutdown.id.to_string(), true)
        .field("Days", shutdown.duration_days().to_string(), true);

    Ok(EditInteractionResponse::new().embed(embed))
}

pub async fn run_remove(
    state: &BotState,
    command: &CommandInteraction,
) -> Result<EditInteractionResponse, AppError> {
    require_admin(state, command)?;

    let options = command.data.options();
    let id = options::required_integer(&options, "shutdown_id")?;
    let id = i32::try_from(id)
        .map_err(|_| AppError::NotFound(format!("No shutdown with ID {} exists.", id)))?;

    ShutdownService::new(&state.cache).delete(id).await?;

    Ok(EditInteractionResponse::new().content(format!("Removed shutdown {}.", id)))
}

/// Cached shutdowns whose description starts with the input.
pub async fn autocomplete(state: &BotState, input: &str) -> CreateAutocompleteResponse {
    let snapshot = state.cache.snapshot().await;

    shutdown_choices(&snapshot.shutdowns, input).into_iter().fold(
        CreateAutocompleteResponse::new(),
        |response, (name, id)| response.add_int_choice(name, id),
    )
}

fn shutdown_choices(shutdowns: &[ShutdownWindow], input: &str) -> Vec<(String, i64)> {
    let input = input.trim().to_lowercase();

    shutdowns
        .iter()
        .filter(|s| s.description.to_lowercase().starts_with(&input))
        .take(MAX_AUTOCOMPLETE_CHOICES)
        .map(|s| (choice_name(&s.summary()), i64::from(s.id)))
        .collect()
}
