use std::num::ParseIntError;
use thiserror::Error;

/// Internal issues with the codebase or stored data indicating unexpected behavior
#[derive(Error, Debug)]
pub enum InternalError {
    /// Failure to parse a Discord id stored as String
    #[error("Failed to parse ID from String '{value}': {source}")]
    ParseStringId {
        /// The string value that failed to parse
        value: String,
        /// The underlying parse error
        #[source]
        source: ParseIntError,
    },
}
