//! Error types for the bot.
//!
//! `AppError` is the top-level error returned by repositories, services and command
//! handlers. Variants split into errors the invoking user should see (`BadRequest`,
//! `Forbidden`, `NotFound`) and infrastructure failures that are logged and replaced by a
//! generic reply (`user_message` handles that split).

pub mod config;
pub mod internal;

use thiserror::Error;

use crate::error::{config::ConfigError, internal::InternalError};

/// Top-level application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    ///
    /// The only error class that is fatal; it can only occur before the bot connects.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Internal inconsistency such as an unparsable stored Discord id.
    #[error(transparent)]
    InternalErr(#[from] InternalError),

    /// Database operation error from SeaORM.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Discord API error from Serenity.
    ///
    /// Boxed due to large size.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),

    /// Cron scheduler error.
    #[error(transparent)]
    SchedulerErr(#[from] tokio_cron_scheduler::JobSchedulerError),

    /// Resource not found error.
    ///
    /// # Fields
    /// - Message describing what resource was not found
    #[error("{0}")]
    NotFound(String),

    /// Invalid user input.
    ///
    /// # Fields
    /// - Message describing what was invalid about the input
    #[error("{0}")]
    BadRequest(String),

    /// The invoking user lacks permission for the operation.
    #[error("{0}")]
    Forbidden(String),
}

/// Manual conversion from serenity::Error to AppError.
///
/// Boxes the error to reduce the size of the AppError enum, as serenity::Error
/// is very large and would make all AppError variants larger if not boxed.
impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        AppError::DiscordErr(Box::new(err))
    }
}

impl AppError {
    /// Whether the error is caused by the user's input rather than the bot.
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            Self::BadRequest(_) | Self::Forbidden(_) | Self::NotFound(_)
        )
    }

    /// Message safe to show to the invoking Discord user.
    ///
    /// User errors are shown verbatim. Anything else is logged with full details and
    /// replaced by a generic message to avoid leaking internals into chat.
    pub fn user_message(&self) -> String {
        if self.is_user_error() {
            return self.to_string();
        }

        tracing::error!("{}", self);
        "Something went wrong on our end, please try again later.".to_string()
    }
}
