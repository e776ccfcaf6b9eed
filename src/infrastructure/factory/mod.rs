//! Component factory functions.
//!
//! Wire adapters from configuration and the environment.

use std::sync::Arc;

use tracing::info;

use crate::adapter::inbound::telegram::BotControl;
use crate::adapter::outbound::panel::PanelClient;
use crate::error::Result;
use crate::infrastructure::config::panel::PanelCredentials;
use crate::infrastructure::config::settings::Config;
use crate::port::outbound::panel::PanelSource;

/// Build the panel client, reading credentials from the environment.
///
/// # Errors
///
/// Returns a config error when `TRONPANEL_USER` or `TRONPANEL_PASS` is missing.
#[allow(clippy::result_large_err)]
pub fn build_panel_client(config: &Config) -> Result<PanelClient> {
    let credentials = PanelCredentials::from_env()?;
    info!(
        base_url = %config.panel.base_url,
        sites = config.sites().len(),
        "Panel client configured"
    );
    Ok(PanelClient::new(
        config.panel.clone(),
        credentials,
        config.sites().clone(),
    ))
}

/// Build the command executor around a panel source.
#[must_use]
pub fn build_bot_control(config: &Config, panel: Arc<dyn PanelSource>) -> BotControl {
    BotControl::new(panel, &config.panel.title, &config.telegram.abi_reply)
}
