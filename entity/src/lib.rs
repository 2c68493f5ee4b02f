//! SeaORM entity models for the bot's database tables.

pub mod prelude;

pub mod player;
pub mod shutdown;
pub mod sticky_message;
