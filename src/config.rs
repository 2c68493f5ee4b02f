use std::str::FromStr;

use crate::error::{config::ConfigError, AppError};
use crate::model::lifespan::Lifespans;

const DEFAULT_CACHE_REFRESH_INTERVAL_SECS: u64 = 300;
const DEFAULT_LIFESPANS_PATH: &str = "config/lifespans.json";

pub struct Config {
    pub database_url: String,
    pub discord_bot_token: String,

    /// Guild the slash commands are registered on.
    pub guild_id: u64,
    /// Channel whose history is searched for season announcements.
    pub season_channel_id: u64,
    /// User allowed to run admin commands without the Administrator permission.
    pub owner_user_id: Option<u64>,
    /// Channel receiving the command audit log.
    pub command_log_channel_id: Option<u64>,

    pub cache_refresh_interval_secs: u64,
    pub lifespans_path: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: required("DATABASE_URL")?,
            discord_bot_token: required("DISCORD_BOT_TOKEN")?,
            guild_id: parse("DISCORD_GUILD_ID", required("DISCORD_GUILD_ID")?)?,
            season_channel_id: parse("SEASON_CHANNEL_ID", required("SEASON_CHANNEL_ID")?)?,
            owner_user_id: optional("OWNER_USER_ID")
                .map(|v| parse("OWNER_USER_ID", v))
                .transpose()?,
            command_log_channel_id: optional("COMMAND_LOG_CHANNEL_ID")
                .map(|v| parse("COMMAND_LOG_CHANNEL_ID", v))
                .transpose()?,
            cache_refresh_interval_secs: optional("CACHE_REFRESH_INTERVAL_SECS")
                .map(|v| parse("CACHE_REFRESH_INTERVAL_SECS", v))
                .transpose()?
                .unwrap_or(DEFAULT_CACHE_REFRESH_INTERVAL_SECS),
            lifespans_path: optional("LIFESPANS_PATH")
                .unwrap_or_else(|| DEFAULT_LIFESPANS_PATH.to_string()),
        })
    }
}

/// Reads the species lifespan table from a JSON file.
///
/// The file is a single JSON object mapping species names to lifespans in in-game
/// years, e.g. `{ "Tyrannosaurus": 12, "Pteranodon": 8 }`. It is read once at startup.
///
/// # Arguments
/// - `path` - Path to the JSON file
///
/// # Returns
/// - `Ok(Lifespans)` - Parsed table
/// - `Err(AppError::ConfigErr)` - File missing, unreadable or malformed
pub fn load_lifespans(path: &str) -> Result<Lifespans, AppError> {
    let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadLifespans {
        path: path.to_string(),
        source,
    })?;

    let lifespans = Lifespans::from_json(&raw).map_err(|source| ConfigError::ParseLifespans {
        path: path.to_string(),
        source,
    })?;

    Ok(lifespans)
}

fn required(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}

fn optional(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

fn parse<T: FromStr>(name: &str, value: String) -> Result<T, ConfigError> {
    value.trim().parse::<T>().map_err(|_| ConfigError::InvalidEnvVar {
        name: name.to_string(),
        value,
    })
}
