//! Command audit log.
//!
//! When a log channel is configured, every command invocation is posted there as an embed.
//! Posting is best effort and never affects the command's reply.

use chrono::{DateTime, Utc};
use serenity::all::{
    ChannelId, CommandInteraction, Context, CreateEmbed, CreateEmbedAuthor, CreateMessage,
    RoleId, Timestamp,
};

use crate::bot::state::BotState;
use crate::error::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandStatus {
    Success,
    Error,
    NotAllowed,
}

impl CommandStatus {
    pub fn from_result<T>(result: &Result<T, AppError>) -> Self {
        match result {
            Ok(_) => Self::Success,
            Err(AppError::Forbidden(_)) => Self::NotAllowed,
            Err(_) => Self::Error,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Success => "Success",
            Self::Error => "Error",
            Self::NotAllowed => "Not allowed",
        }
    }

    fn colour(&self) -> u32 {
        match self {
            Self::Success => 0x57F287,
            Self::Error => 0xED4245,
            Self::NotAllowed => 0xFEE75C,
        }
    }
}

/// Role mentions of the invoking member, or "None" outside a guild or without roles.
fn roles_field(roles: &[RoleId]) -> String {
    if roles.is_empty() {
        return "None".to_string();
    }

    roles
        .iter()
        .map(|role| format!("<@&{}>", role))
        .collect::<Vec<_>>()
        .join(", ")
}

fn time_field(now: DateTime<Utc>) -> String {
    now.format("%Y-%m-%d %H:%M:%S UTC").to_string()
}

/// Posts an audit entry for a finished command.
pub async fn log_command(
    state: &BotState,
    ctx: &Context,
    command: &CommandInteraction,
    status: CommandStatus,
) {
    let Some(channel_id) = state.command_log_channel_id else {
        return;
    };

    let roles = command
        .member
        .as_ref()
        .map(|member| member.roles.as_slice())
        .unwrap_or_default();

    let embed = CreateEmbed::new()
        .author(CreateEmbedAuthor::new(command.user.name.clone()).icon_url(command.user.face()))
        .title(format!("/{}", command.data.name))
        .field("User", format!("<@{}>", command.user.id), true)
        .field("Channel", format!("<#{}>", command.channel_id), true)
        .field("Status", status.label(), true)
        .field("Roles", roles_field(roles), false)
        .field("Time", time_field(Utc::now()), false)
        .colour(status.colour())
        .timestamp(Timestamp::now());

    if let Err(e) = ChannelId::new(channel_id)
        .send_message(&ctx.http, CreateMessage::new().embed(embed))
        .await
    {
        tracing::warn!("Failed to post command audit log: {}", e);
    }
}
