use std::sync::Arc;

use serenity::all::{Client, GatewayIntents};
use serenity::http::Http;

use crate::bot::{handler::Handler, state::BotState};
use crate::config::Config;
use crate::error::AppError;

/// Builds the Discord client without connecting it.
///
/// Returns the HTTP client alongside so startup work (sticky validation) can use the REST
/// API before the gateway connection starts delivering events.
///
/// # Arguments
/// - `config` - Application configuration with the bot token
/// - `state` - State shared with the event handler
///
/// # Returns
/// - `Ok((Client, Arc<Http>))` - Client ready to start and its HTTP client
/// - `Err(AppError::DiscordErr)` - Client could not be built
pub async fn init_bot(config: &Config, state: BotState) -> Result<(Client, Arc<Http>), AppError> {
    // MESSAGE_CONTENT is privileged; enable it in the Discord Developer Portal
    let intents = GatewayIntents::GUILDS
        | GatewayIntents::GUILD_MESSAGES
        | GatewayIntents::MESSAGE_CONTENT;

    let client = Client::builder(&config.discord_bot_token, intents)
        .event_handler(Handler::new(state))
        .await?;

    let http = client.http.clone();

    Ok((client, http))
}

/// Connects to the gateway and processes events until shutdown.
pub async fn start_bot(mut client: Client) -> Result<(), AppError> {
    tracing::info!("Starting Discord bot...");

    client.start().await?;

    Ok(())
}
