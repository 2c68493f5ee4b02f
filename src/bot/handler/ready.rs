//! Ready event handler.
//!
//! Fired once per gateway connection after the initial handshake. Registers the slash
//! commands on the configured guild; guild commands update instantly, unlike global ones.

use serenity::all::{Context, GuildId, Ready};

use crate::bot::{command, state::BotState};

/// Handles the ready event when the bot connects to Discord.
///
/// # Arguments
/// - `state` - Shared bot state with the target guild id
/// - `ctx` - Discord context used to register commands
/// - `ready` - Ready event data containing bot user information
pub async fn handle_ready(state: &BotState, ctx: Context, ready: Ready) {
    tracing::info!("{} is connected to Discord", ready.user.name);

    let guild_id = GuildId::new(state.guild_id);
    match guild_id.set_commands(&ctx.http, command::register()).await {
        Ok(commands) => tracing::info!(
            "Registered {} slash command(s) in guild {}",
            commands.len(),
            guild_id
        ),
        Err(e) => tracing::error!("Failed to register slash commands: {}", e),
    }
}
