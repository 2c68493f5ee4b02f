use serenity::all::{Context, Message};

use crate::bot::gateway::SerenityGateway;
use crate::bot::state::BotState;
use crate::service::sticky::StickyService;

/// Handle message creation in a channel
///
/// Moves the channel's stickies back below the new message. The service skips messages
/// authored by the bot's own user.
pub async fn handle_message(state: &BotState, ctx: Context, message: Message) {
    // Only guild channels can have stickies
    if message.guild_id.is_none() {
        return;
    }

    let bot_user_id = ctx.cache.current_user().id.get();
    let channel_id = message.channel_id.get();
    let gateway = SerenityGateway::new(ctx.http.clone());

    match StickyService::new(&state.cache, &state.locks, &gateway)
        .with_bot_user_id(bot_user_id)
        .on_message(message.author.id.get(), channel_id)
        .await
    {
        Ok(0) => {}
        Ok(count) => tracing::debug!(
            "Reposted {} sticky message(s) in channel {}",
            count,
            channel_id
        ),
        Err(e) => tracing::error!(
            "Failed to reconcile stickies in channel {}: {}",
            channel_id,
            e
        ),
    }
}
