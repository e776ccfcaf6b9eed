//! Handler for the `report` command: one scrape, printed to stdout.

use crate::adapter::inbound::telegram::{render_report, ReportStyle};
use crate::cli::{output, ConfigPathArg};
use crate::error::Result;
use crate::infrastructure::config::settings::Config;
use crate::infrastructure::factory::build_panel_client;
use crate::port::outbound::panel::PanelSource;

/// Fetch today's report and print it as plain text.
pub async fn execute(arg: &ConfigPathArg) -> Result<()> {
    let config = Config::load_or_default(&arg.config)?;
    config.logging.init_to_stderr();

    let client = build_panel_client(&config)?;
    let report = client.fetch_report().await?;

    println!(
        "{}",
        render_report(&report, &config.panel.title, ReportStyle::Plain)
    );

    let failed = report.failed_count();
    if failed > 0 {
        println!();
        output::warn(&format!(
            "{failed} of {} site(s) could not be fetched and show zeros",
            report.len()
        ));
    }

    Ok(())
}
