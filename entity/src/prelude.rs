pub use super::player::Entity as Player;
pub use super::shutdown::Entity as Shutdown;
pub use super::sticky_message::Entity as StickyMessage;
