//! `/help`: list the available commands.

use serenity::all::{CreateCommand, CreateEmbed, EditInteractionResponse};

use crate::bot::command::{age, cache, player, shutdown, sticky, EMBED_COLOUR};

pub const NAME: &str = "help";

/// Command name, usage and whether it is admin only.
const COMMANDS: [(&str, &str, bool); 8] = [
    (
        age::NAME,
        "`day` `month` `year` [`species`]: in-game age of a dinosaur, net of server shutdowns",
        false,
    ),
    (player::NAME, "[`user`]: Alderon ID linked to a member", false),
    (NAME, "this list", false),
    (
        shutdown::ADD_NAME,
        "`start` `end` `description`: record a shutdown (dates as DD-MM-YYYY)",
        true,
    ),
    (shutdown::REMOVE_NAME, "`shutdown_id`: remove a shutdown", true),
    (
        sticky::MAKE_NAME,
        "`content`: keep a message at the bottom of this channel",
        true,
    ),
    (
        sticky::REMOVE_NAME,
        "`message_id`: remove a sticky from this channel",
        true,
    ),
    (cache::NAME, "reload stickies and shutdowns", true),
];

pub fn register() -> CreateCommand {
    CreateCommand::new(NAME).description("List the bot's commands")
}

pub fn run() -> EditInteractionResponse {
    EditInteractionResponse::new().embed(
        CreateEmbed::new()
            .title("Commands")
            .colour(EMBED_COLOUR)
            .field("Everyone", command_list(false), false)
            .field("Admins", command_list(true), false),
    )
}

fn command_list(admin: bool) -> String {
    COMMANDS
        .iter()
        .filter(|(_, _, admin_only)| *admin_only == admin)
        .map(|(name, usage, _)| format!("`/{}` {}", name, usage))
        .collect::<Vec<_>>()
        .join("\n")
}
