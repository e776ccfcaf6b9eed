//! Handler for the `run` command.

use std::sync::Arc;

#[cfg(feature = "telegram")]
use tokio::signal;
use tracing::info;

use crate::cli::RunArgs;
use crate::error::{ConfigError, Result};
use crate::infrastructure::config::settings::Config;
use crate::infrastructure::config::telegram::TelegramAppConfig;
use crate::infrastructure::factory::{build_bot_control, build_panel_client};
use crate::port::outbound::panel::PanelSource;

/// Execute the run command.
pub async fn execute(args: &RunArgs) -> Result<()> {
    let mut config = Config::load_or_default(&args.config)?;

    // Apply CLI overrides
    if let Some(ref level) = args.log_level {
        config.logging.level = level.clone();
    }
    if args.json_logs {
        config.logging.format = "json".to_string();
    }

    config.init_logging();
    ensure_bot_support()?;

    let bot_token = TelegramAppConfig::bot_token_from_env()?;
    let panel: Arc<dyn PanelSource> = Arc::new(build_panel_client(&config)?);
    let control = build_bot_control(&config, panel);

    info!(
        sites = config.sites().len(),
        panel = %config.panel.base_url,
        "panelbot starting"
    );

    serve(&bot_token, &config, control).await;

    info!("panelbot stopped");
    Ok(())
}

#[cfg(feature = "telegram")]
async fn serve(
    bot_token: &str,
    config: &Config,
    control: crate::adapter::inbound::telegram::BotControl,
) {
    use crate::adapter::inbound::telegram::bot;

    tokio::select! {
        () = bot::run(bot_token, config.telegram.clone(), control) => {}
        _ = signal::ctrl_c() => {
            info!("Shutdown signal received");
        }
    }
}

// `ensure_bot_support` has already failed in this build.
#[cfg(not(feature = "telegram"))]
async fn serve(
    _bot_token: &str,
    _config: &Config,
    _control: crate::adapter::inbound::telegram::BotControl,
) {
}

/// Fail when the binary was built without a bot to run.
#[allow(clippy::result_large_err)]
fn ensure_bot_support() -> Result<()> {
    if cfg!(feature = "telegram") {
        Ok(())
    } else {
        Err(ConfigError::InvalidValue {
            field: "features",
            reason: "built without the `telegram` feature; nothing to run".to_string(),
        }
        .into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn bot_support_follows_features() {
        match ensure_bot_support() {
            Ok(()) => assert!(cfg!(feature = "telegram")),
            Err(Error::Config(ConfigError::InvalidValue { field, .. })) => {
                assert!(!cfg!(feature = "telegram"));
                assert_eq!(field, "features");
            }
            Err(err) => panic!("unexpected error: {err}"),
        }
    }
}
