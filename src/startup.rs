use std::sync::Arc;

use serenity::http::Http;
use tracing_subscriber::EnvFilter;

use crate::bot::{gateway::SerenityGateway, state::BotState};
use crate::config::Config;
use crate::error::AppError;
use crate::service::sticky::StickyService;

/// Installs the global tracing subscriber.
///
/// Filtering follows `RUST_LOG` and defaults to `info`.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();
}

/// Connects to the database and runs pending migrations.
///
/// Works with any backend SeaORM is built with here (SQLite or Postgres); the URL scheme
/// picks the driver. Must complete before the cache is first refreshed.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError::DbErr)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Removes stickies whose channel or message disappeared while the bot was offline.
///
/// Failures are logged; the bot starts regardless and the reconciler self-heals on the
/// next message in each channel.
pub async fn validate_stickies(state: &BotState, http: Arc<Http>) {
    let gateway = SerenityGateway::new(http);

    if let Err(e) = StickyService::new(&state.cache, &state.locks, &gateway)
        .validate_on_startup()
        .await
    {
        tracing::error!("Failed to validate sticky messages: {}", e);
    }
}
