//! Service layer for business logic and orchestration.
//!
//! Services sit between the bot's command/event handlers and the repositories. They
//! enforce validation rules, coordinate store writes with Discord calls through the
//! `ChatGateway` seam, and keep the snapshot cache fresh after every mutation.

pub mod age;
pub mod cache;
pub mod player;
pub mod shutdown;
pub mod sticky;
