//! Discord bot integration.
//!
//! The bot listens for new messages to keep stickies at the bottom of their channels and
//! answers the guild's slash commands. Event handlers live in `handler`, command
//! definitions and their logic in `command`, and everything that talks to Discord on
//! behalf of a service goes through the `gateway::ChatGateway` trait.
//!
//! # Gateway Intents
//!
//! - `GUILDS` - Guild and channel availability
//! - `GUILD_MESSAGES` - New message events that trigger sticky reposts
//! - `MESSAGE_CONTENT` - Content of fetched history messages, used by the season lookup
//!
//! Note: `MESSAGE_CONTENT` is a privileged intent and must be enabled in the Discord
//! Developer Portal for the bot application.

pub mod command;
pub mod gateway;
pub mod handler;
pub mod start;
pub mod state;
