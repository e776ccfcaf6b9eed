//! Telegram command parsing.

/// Supported Telegram commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BotCommand {
    /// `/start`: help text.
    Start,
    /// `/help`: same as `/start`.
    Help,
    /// `/veri`: today's panel report.
    Report,
    /// `/abi`: static reply.
    Abi,
}

impl BotCommand {
    /// Whether the command waits on the panel and should show a placeholder first.
    #[must_use]
    pub const fn is_slow(self) -> bool {
        matches!(self, Self::Report)
    }
}

/// Parse error for Telegram command messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandParseError {
    NotACommand,
    /// The command names another bot (`/veri@other_bot`).
    OtherBot(String),
    UnknownCommand(String),
}

impl std::fmt::Display for CommandParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotACommand => write!(f, "message is not a command"),
            Self::OtherBot(bot) => write!(f, "command is addressed to @{bot}"),
            Self::UnknownCommand(cmd) => write!(f, "unknown command `{cmd}`"),
        }
    }
}

impl std::error::Error for CommandParseError {}

/// Parse a Telegram message into a bot command.
///
/// Accepts the `/command@botname` form used in group chats; a mention of
/// any bot other than `bot_username` is rejected. Without a known username
/// every mention is accepted. Command names are case-insensitive and
/// trailing arguments are ignored.
pub fn parse_command(text: &str, bot_username: Option<&str>) -> Result<BotCommand, CommandParseError> {
    let Some(raw_command) = text.split_whitespace().next() else {
        return Err(CommandParseError::NotACommand);
    };
    if !raw_command.starts_with('/') {
        return Err(CommandParseError::NotACommand);
    }

    let command = match raw_command.split_once('@') {
        Some((head, mention)) => {
            if let Some(own) = bot_username {
                if !mention.eq_ignore_ascii_case(own.trim_start_matches('@')) {
                    return Err(CommandParseError::OtherBot(mention.to_string()));
                }
            }
            head
        }
        None => raw_command,
    };

    match command.to_lowercase().as_str() {
        "/start" => Ok(BotCommand::Start),
        "/help" => Ok(BotCommand::Help),
        "/veri" => Ok(BotCommand::Report),
        "/abi" => Ok(BotCommand::Abi),
        _ => Err(CommandParseError::UnknownCommand(command.to_string())),
    }
}

/// Help text returned by `/start` and `/help`.
#[must_use]
pub const fn command_help() -> &'static str {
    "🎰 TronPanel Veri Bot\n\n\
    /veri - Günlük TL verileri\n\
    /abi - Özel mesaj"
}

/// Bot commands for Telegram menu registration.
///
/// Returns tuples of (command, description) for `set_my_commands`.
#[must_use]
pub fn bot_commands() -> Vec<(&'static str, &'static str)> {
    vec![
        ("veri", "Günlük TL verileri"),
        ("abi", "Özel mesaj"),
        ("start", "Komut listesi"),
    ]
}
