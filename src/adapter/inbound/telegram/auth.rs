//! Authorization and routing of incoming messages.

use tracing::warn;

use super::command::{command_help, parse_command, BotCommand, CommandParseError};
use crate::infrastructure::config::telegram::TelegramAppConfig;

/// What to do with an incoming message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// Run a command.
    Command(BotCommand),
    /// Reply with this text (unknown command plus help).
    Invalid(String),
}

/// Decide how to answer a message.
///
/// `bot_username` is this bot's own username, used to tell apart commands
/// addressed to other bots in group chats.
///
/// Returns `None` for:
/// - Messages from chats outside the allow-list
/// - Messages that are not commands (don't start with `/`)
/// - Commands addressed to another bot
pub fn route_message(
    text: &str,
    incoming_chat: i64,
    bot_username: Option<&str>,
    access: &TelegramAppConfig,
) -> Option<Route> {
    if !access.is_chat_allowed(incoming_chat) {
        warn!(
            chat_id = incoming_chat,
            "Ignoring Telegram message from unauthorized chat"
        );
        return None;
    }

    match parse_command(text, bot_username) {
        Ok(command) => Some(Route::Command(command)),
        Err(CommandParseError::NotACommand | CommandParseError::OtherBot(_)) => None,
        Err(err) => Some(Route::Invalid(format!(
            "Geçersiz komut: {err}\n\n{}",
            command_help()
        ))),
    }
}
