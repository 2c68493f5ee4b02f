//! Slash command definitions and dispatch.
//!
//! Every command module exposes its name constant(s), a `register` function returning the
//! `CreateCommand` definition and a `run` function producing the reply. `dispatch` defers
//! the reply (all replies are ephemeral), runs the command, turns errors into a user-safe
//! message and writes the audit log entry.

pub mod age;
pub mod audit;
pub mod cache;
pub mod help;
pub mod options;
pub mod permission;
pub mod player;
pub mod shutdown;
pub mod sticky;

use serenity::all::{
    CommandInteraction, Context, CreateCommand, CreateInteractionResponse,
    EditInteractionResponse,
};

use crate::bot::state::BotState;
use crate::error::AppError;

use audit::CommandStatus;

/// Discord's limit on autocomplete choices per response.
pub const MAX_AUTOCOMPLETE_CHOICES: usize = 25;

/// Discord's limit on the length of an autocomplete choice name.
const MAX_CHOICE_NAME_LENGTH: usize = 100;

/// Embed colour shared by informational replies.
pub const EMBED_COLOUR: u32 = 0x2E8B57;

/// All commands registered on the guild.
pub fn register() -> Vec<CreateCommand> {
    vec![
        age::register(),
        shutdown::register_add(),
        shutdown::register_remove(),
        sticky::register_make(),
        sticky::register_remove(),
        cache::register(),
        player::register(),
        help::register(),
    ]
}

/// Runs a slash command and replies to it.
///
/// # Arguments
/// - `state` - Shared bot state
/// - `ctx` - Discord context for replying
/// - `command` - The invoked command
pub async fn dispatch(state: &BotState, ctx: &Context, command: &CommandInteraction) {
    let name = command.data.name.as_str();
    tracing::debug!(
        "/{} invoked by {} ({})",
        name,
        command.user.name,
        command.user.id
    );

    if let Err(e) = command.defer_ephemeral(&ctx.http).await {
        tracing::error!("Failed to defer /{}: {}", name, e);
        return;
    }

    let result = match name {
        age::NAME => age::run(state, ctx, command).await,
        shutdown::ADD_NAME => shutdown::run_add(state, command).await,
        shutdown::REMOVE_NAME => shutdown::run_remove(state, command).await,
        sticky::MAKE_NAME => sticky::run_make(state, ctx, command).await,
        sticky::REMOVE_NAME => sticky::run_remove(state, ctx, command).await,
        cache::NAME => cache::run(state, command).await,
        player::NAME => player::run(state, command).await,
        help::NAME => Ok(help::run()),
        _ => Err(AppError::NotFound(format!("Unknown command /{}", name))),
    };

    let status = CommandStatus::from_result(&result);
    let response = match result {
        Ok(response) => response,
        Err(e) => {
            if e.is_user_error() {
                tracing::debug!("/{} rejected: {}", name, e);
            }
            EditInteractionResponse::new().content(e.user_message())
        }
    };

    if let Err(e) = command.edit_response(&ctx.http, response).await {
        tracing::error!("Failed to reply to /{}: {}", name, e);
    }

    audit::log_command(state, ctx, command, status).await;
}

/// Answers an autocomplete request for the focused option.
pub async fn autocomplete(state: &BotState, ctx: &Context, command: &CommandInteraction) {
    let Some(focused) = command.data.autocomplete() else {
        return;
    };

    let response = match command.data.name.as_str() {
        age::NAME => age::autocomplete(state, focused.value),
        shutdown::REMOVE_NAME => shutdown::autocomplete(state, focused.value).await,
        sticky::REMOVE_NAME => {
            sticky::autocomplete(state, command.channel_id.get(), focused.value).await
        }
        _ => return,
    };

    if let Err(e) = command
        .create_response(&ctx.http, CreateInteractionResponse::Autocomplete(response))
        .await
    {
        // Autocomplete requests expire quickly; a late answer is expected now and then.
        tracing::debug!(
            "Failed to answer autocomplete for /{}: {}",
            command.data.name,
            e
        );
    }
}

/// Shortens a choice label to Discord's limit, marking the cut with an ellipsis.
pub fn choice_name(label: &str) -> String {
    if label.chars().count() <= MAX_CHOICE_NAME_LENGTH {
        return label.to_string();
    }

    let mut name: String = label.chars().take(MAX_CHOICE_NAME_LENGTH - 1).collect();
    name.push('…');
    name
}
