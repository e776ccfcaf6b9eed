//! Handler for `check config`.

use std::path::Path;

use crate::cli::output;
use crate::error::{ConfigError, Result};
use crate::infrastructure::config::panel::{PANEL_PASS_ENV, PANEL_USER_ENV};
use crate::infrastructure::config::settings::Config;
use crate::infrastructure::config::telegram::BOT_TOKEN_ENV;

/// Environment variables the bot cannot start without.
const REQUIRED_ENV: [&str; 3] = [BOT_TOKEN_ENV, PANEL_USER_ENV, PANEL_PASS_ENV];

/// Validate the configuration file and the required environment.
///
/// # Errors
///
/// Returns the config error when the file is invalid, or a missing-field
/// error naming the first absent environment variable.
#[allow(clippy::result_large_err)]
pub fn execute_config(path: &Path) -> Result<()> {
    let source = if path.exists() {
        path.display().to_string()
    } else {
        format!("{} (not found, using defaults)", path.display())
    };

    let config = Config::load_or_default(path)?;

    output::section("Configuration");
    output::key_value("Source", source);
    output::key_value("Panel", &config.panel.base_url);
    output::key_value("Report page", config.panel.report_url());
    output::key_value("UTC offset", format!("{:+}h", config.panel.utc_offset_hours));
    output::key_value("Sites", config.sites().len());
    output::key_value(
        "Allowed chats",
        if config.telegram.allowed_chat_ids.is_empty() {
            "any".to_string()
        } else {
            config.telegram.allowed_chat_ids.len().to_string()
        },
    );
    if config.panel.accept_invalid_certs {
        output::warn("TLS certificate verification is disabled for the panel");
    }
    output::ok("Configuration is valid");

    output::section("Environment");
    let mut missing = None;
    for name in REQUIRED_ENV {
        if std::env::var(name).is_ok_and(|v| !v.is_empty()) {
            output::ok(&format!("{name} is set"));
        } else {
            output::error(&format!("{name} is not set"));
            if missing.is_none() {
                missing = Some(name);
            }
        }
    }

    match missing {
        Some(field) => Err(ConfigError::MissingField { field }.into()),
        None => Ok(()),
    }
}
