use serenity::all::{Context, Interaction};

use crate::bot::{command, state::BotState};

/// Routes slash commands and autocomplete requests to the command layer.
pub async fn handle_interaction(state: &BotState, ctx: Context, interaction: Interaction) {
    match interaction {
        Interaction::Command(cmd) => command::dispatch(state, &ctx, &cmd).await,
        Interaction::Autocomplete(cmd) => command::autocomplete(state, &ctx, &cmd).await,
        _ => {}
    }
}
