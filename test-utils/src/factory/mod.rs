//! Factory methods for creating test data.
//!
//! Each table has its own factory module with a `Factory` struct for customization and a
//! `create_*` convenience function for quick default creation.
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let sticky = factory::sticky_message::StickyMessageFactory::new(&db)
//!     .channel_id("1001")
//!     .content("Read the rules")
//!     .build()
//!     .await?;
//! let shutdown = factory::create_shutdown(&db).await?;
//! ```

pub mod helpers;
pub mod player;
pub mod shutdown;
pub mod sticky_message;

pub use player::create_player;
pub use shutdown::create_shutdown;
pub use sticky_message::create_sticky_message;
