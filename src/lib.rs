//! Panelbot - daily TronPanel deposit and withdrawal totals on Telegram.
//!
//! The bot logs into a TronPanel dashboard, reads the day's quick report
//! for every configured site concurrently and answers Telegram commands
//! with a formatted summary.
//!
//! # Architecture
//!
//! - [`domain`] - Sites, amounts and the daily report, no I/O
//! - [`port`] - The [`port::outbound::panel::PanelSource`] trait
//! - [`adapter::outbound::panel`] - HTTP scraper implementing the port
//! - [`adapter::inbound::telegram`] - Command parsing, rendering and the bot loop
//! - [`infrastructure`] - Configuration and wiring
//! - [`cli`] - Command-line entry points
//!
//! # Features
//!
//! - `telegram` (default) - Telegram long-polling via teloxide
//! - `testkit` - Panel doubles and fixtures for integration tests
//!
//! # Example
//!
//! ```no_run
//! use panelbot::domain::{format_amount, Amount};
//!
//! assert_eq!(format_amount(&Amount::new("1234567.89")), "1.234.567 TL");
//! ```

pub mod adapter;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod port;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;
