//! Domain models and parameter types.
//!
//! Domain models are converted from entity models at the repository boundary, where
//! Discord ids stored as strings are parsed to `u64`. Services and command handlers
//! only ever see these types.

pub mod age;
pub mod cache;
pub mod lifespan;
pub mod player;
pub mod shutdown;
pub mod sticky_message;
