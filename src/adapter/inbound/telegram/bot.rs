//! Telegram bot runner.
//!
//! Long-polls Telegram, routes every text message through
//! [`route_message`] and answers with [`BotControl`]. Requires the
//! `telegram` feature to be enabled.

use std::sync::Arc;

use teloxide::prelude::*;
use teloxide::types::{BotCommand as MenuCommand, ParseMode};
use tracing::{error, info, warn};

use super::auth::{route_message, Route};
use super::command::{bot_commands, BotCommand};
use super::control::{BotControl, BotReply, FAILURE_TEXT, LOADING_TEXT};
use crate::infrastructure::config::telegram::TelegramAppConfig;

/// Run the command listener until the process is stopped.
pub async fn run(bot_token: &str, access: TelegramAppConfig, control: BotControl) {
    let bot = Bot::new(bot_token);

    // Register commands with Telegram so they appear in the "/" menu
    if let Err(e) = register_bot_commands(&bot).await {
        warn!(error = %e, "Failed to register bot commands with Telegram");
    }

    // Needed to ignore group commands addressed to other bots.
    let username = match bot.get_me().await {
        Ok(me) => me.user.username,
        Err(e) => {
            warn!(error = %e, "Failed to read bot username, accepting every @mention");
            None
        }
    };

    info!(
        allowed_chats = access.allowed_chat_ids.len(),
        username = username.as_deref().unwrap_or("-"),
        "Telegram command listener started"
    );

    let access = Arc::new(access);
    let username: Arc<Option<String>> = Arc::new(username);
    teloxide::repl(bot, move |bot: Bot, msg: Message| {
        let control = control.clone();
        let access = Arc::clone(&access);
        let username = Arc::clone(&username);
        async move {
            let Some(text) = msg.text() else {
                return respond(());
            };

            match route_message(text, msg.chat.id.0, username.as_deref(), &access) {
                Some(Route::Command(command)) => {
                    handle_command(&bot, msg.chat.id, &control, command).await;
                }
                Some(Route::Invalid(reply)) => {
                    send_reply(&bot, msg.chat.id, BotReply::plain(reply)).await;
                }
                None => {}
            }

            respond(())
        }
    })
    .await;
}

async fn handle_command(bot: &Bot, chat: ChatId, control: &BotControl, command: BotCommand) {
    if !command.is_slow() {
        let reply = control.execute(command).await;
        send_reply(bot, chat, reply).await;
        return;
    }

    // Show a placeholder first, then replace it with the result.
    let placeholder = match bot.send_message(chat, LOADING_TEXT).await {
        Ok(message) => message,
        Err(e) => {
            error!(error = %e, "Failed to send Telegram placeholder");
            return;
        }
    };

    let reply = control.execute(command).await;
    let mut request = bot.edit_message_text(chat, placeholder.id, reply.text);
    if reply.markdown {
        request = request.parse_mode(ParseMode::MarkdownV2);
    }
    let Err(e) = request.await else {
        return;
    };
    error!(error = %e, "Failed to edit Telegram message");

    // Never leave the placeholder behind.
    if let Err(e) = bot
        .edit_message_text(chat, placeholder.id, FAILURE_TEXT)
        .await
    {
        error!(error = %e, "Failed to replace Telegram placeholder");
    }
}

async fn send_reply(bot: &Bot, chat: ChatId, reply: BotReply) {
    let mut request = bot.send_message(chat, reply.text);
    if reply.markdown {
        request = request.parse_mode(ParseMode::MarkdownV2);
    }
    if let Err(e) = request.await {
        error!(error = %e, "Failed to send Telegram command response");
    }
}

/// Register bot commands with Telegram for the "/" menu.
async fn register_bot_commands(bot: &Bot) -> Result<(), teloxide::RequestError> {
    let commands: Vec<MenuCommand> = bot_commands()
        .into_iter()
        .map(|(cmd, desc)| MenuCommand::new(cmd, desc))
        .collect();

    bot.set_my_commands(commands).await?;
    info!("Registered bot commands with Telegram");
    Ok(())
}
