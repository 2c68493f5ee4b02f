mod bot;
mod config;
mod data;
mod error;
mod model;
mod scheduler;
mod service;
mod startup;
mod util;

use std::sync::Arc;

use crate::bot::state::BotState;
use crate::config::{load_lifespans, Config};
use crate::error::AppError;
use crate::scheduler::cache_refresh;
use crate::service::cache::SnapshotCache;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let config = Config::from_env()?;
    let lifespans = load_lifespans(&config.lifespans_path)?;
    tracing::info!("Loaded lifespans for {} species", lifespans.len());

    let db = startup::connect_to_database(&config).await?;

    let cache = Arc::new(SnapshotCache::new(db));
    cache.refresh().await?;

    let state = BotState::new(&config, cache.clone(), lifespans);
    let (bot_client, discord_http) = bot::start::init_bot(&config, state.clone()).await?;

    // Drop stale stickies before the gateway starts delivering message events
    startup::validate_stickies(&state, discord_http).await;

    // Keep the scheduler handle alive for as long as the bot runs
    let _scheduler =
        cache_refresh::start_periodic_refresh(cache, config.cache_refresh_interval_secs).await?;

    bot::start::start_bot(bot_client).await
}
