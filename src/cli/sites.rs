//! Handler for the `sites` command.

use crate::cli::{output, ConfigPathArg};
use crate::error::Result;
use crate::infrastructure::config::settings::Config;

/// Print the site registry in report order.
pub fn execute(arg: &ConfigPathArg) -> Result<()> {
    let config = Config::load_or_default(&arg.config)?;

    output::section(&format!("Sites ({})", config.sites().len()));
    for site in config.sites().iter() {
        output::key_value(&site.key, format!("{}  {}", site.name, site.id));
    }

    Ok(())
}
