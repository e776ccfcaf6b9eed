//! Telegram bot configuration.

use serde::Deserialize;

use super::panel::required_env;
use crate::error::ConfigError;

/// Environment variable holding the bot token.
pub const BOT_TOKEN_ENV: &str = "BOT_TOKEN";

/// Telegram bot configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct TelegramAppConfig {
    /// Chats allowed to use the bot. Empty means every chat.
    #[serde(default)]
    pub allowed_chat_ids: Vec<i64>,
    /// Reply to `/abi`.
    #[serde(default = "default_abi_reply")]
    pub abi_reply: String,
}

fn default_abi_reply() -> String {
    "👑 @atmkrnca 👑".into()
}

impl Default for TelegramAppConfig {
    fn default() -> Self {
        Self {
            allowed_chat_ids: Vec::new(),
            abi_reply: default_abi_reply(),
        }
    }
}

impl TelegramAppConfig {
    /// Read the bot token from `BOT_TOKEN`.
    ///
    /// # Errors
    ///
    /// Returns `MissingField` when the variable is unset or empty.
    pub fn bot_token_from_env() -> Result<String, ConfigError> {
        required_env(BOT_TOKEN_ENV)
    }

    /// Whether a chat may use the bot.
    #[must_use]
    pub fn is_chat_allowed(&self, chat_id: i64) -> bool {
        self.allowed_chat_ids.is_empty() || self.allowed_chat_ids.contains(&chat_id)
    }

    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.abi_reply.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "abi_reply",
                reason: "must not be empty".to_string(),
            });
        }
        Ok(())
    }
}
