//! Telegram command handling.
//!
//! Parses chat commands, runs them against the panel and renders the
//! replies. The teloxide runner lives in [`bot`] and requires the
//! `telegram` feature; everything else is plain Rust and usable from the CLI.

mod auth;
mod command;
mod control;
mod format;

#[cfg(feature = "telegram")]
pub mod bot;

pub use auth::{route_message, Route};
pub use command::{bot_commands, command_help, parse_command, BotCommand, CommandParseError};
pub use control::{BotControl, BotReply, FAILURE_TEXT, LOADING_TEXT};
pub use format::{escape_markdown, render_report, ReportStyle};
