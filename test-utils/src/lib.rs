//! Stickybot Test Utils
//!
//! Shared testing utilities for the bot's repository and service tests. The crate offers a
//! builder for creating test contexts backed by in-memory SQLite databases, plus factories
//! for inserting rows with sensible defaults.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//! use entity::prelude::Shutdown;
//!
//! #[tokio::test]
//! async fn test_shutdown_operations() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_table(Shutdown)
//!         .build()
//!         .await?;
//!
//!     let db = test.db.as_ref().unwrap();
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
