//! Admin checks for privileged commands.

use serenity::all::{CommandInteraction, Permissions};

use crate::bot::state::BotState;
use crate::error::AppError;

/// Whether a member may run admin commands.
///
/// Admins are members with the Administrator permission, plus the configured owner.
pub fn is_admin(permissions: Option<Permissions>, user_id: u64, owner_user_id: Option<u64>) -> bool {
    owner_user_id == Some(user_id) || permissions.is_some_and(|p| p.administrator())
}

/// Rejects the command unless the invoking user is an admin.
///
/// # Returns
/// - `Ok(())` - The user is an admin
/// - `Err(AppError::Forbidden)` - The user is not an admin
pub fn require_admin(state: &BotState, command: &CommandInteraction) -> Result<(), AppError> {
    let permissions = command.member.as_ref().and_then(|m| m.permissions);

    if is_admin(permissions, command.user.id.get(), state.owner_user_id) {
        return Ok(());
    }

    Err(AppError::Forbidden(
        "You need to be an administrator to use this command.".to_string(),
    ))
}
