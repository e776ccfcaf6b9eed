//! Telegram command execution against the panel.

use std::sync::Arc;

use tracing::{error, info};

use super::command::{command_help, BotCommand};
use super::format::{render_report, ReportStyle};
use crate::port::outbound::panel::PanelSource;

/// Placeholder shown while the panel is queried.
pub const LOADING_TEXT: &str = "⏳ Veriler çekiliyor...";

/// Reply when the report could not be produced at all.
pub const FAILURE_TEXT: &str = "❌ Veriler alınırken hata oluştu";

/// Text to send back, and how Telegram should parse it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BotReply {
    pub text: String,
    /// True when `text` is `MarkdownV2`.
    pub markdown: bool,
}

impl BotReply {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            markdown: false,
        }
    }

    pub fn markdown(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            markdown: true,
        }
    }
}

/// Command executor for the bot.
#[derive(Clone)]
pub struct BotControl {
    panel: Arc<dyn PanelSource>,
    title: String,
    abi_reply: String,
}

impl BotControl {
    #[must_use]
    pub fn new(panel: Arc<dyn PanelSource>, title: impl Into<String>, abi_reply: impl Into<String>) -> Self {
        Self {
            panel,
            title: title.into(),
            abi_reply: abi_reply.into(),
        }
    }

    /// Execute one parsed command and return the reply.
    pub async fn execute(&self, command: BotCommand) -> BotReply {
        match command {
            BotCommand::Start | BotCommand::Help => BotReply::plain(command_help()),
            BotCommand::Report => self.report_reply().await,
            BotCommand::Abi => BotReply::plain(self.abi_reply.clone()),
        }
    }

    async fn report_reply(&self) -> BotReply {
        match self.panel.fetch_report().await {
            Ok(report) => {
                info!(
                    sites = report.len(),
                    failed = report.failed_count(),
                    "Report delivered"
                );
                BotReply::markdown(render_report(&report, &self.title, ReportStyle::Markdown))
            }
            Err(e) => {
                error!(error = %e, "Panel report failed");
                BotReply::plain(FAILURE_TEXT)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Amount, Report, SiteTotals};
    use crate::error::{PanelError, Result};
    use async_trait::async_trait;
    use chrono::NaiveDate;

    struct FixedPanel;

    #[async_trait]
    impl PanelSource for FixedPanel {
        async fn fetch_report(&self) -> Result<Report> {
            let mut report = Report::new(NaiveDate::from_ymd_opt(2026, 10, 19).unwrap());
            report.push(
                "Rinabet",
                SiteTotals {
                    deposit_amount: Amount::new("2500000"),
                    deposit_count: 40,
                    withdrawal_amount: Amount::new("125000.5"),
                    withdrawal_count: 7,
                },
            );
            report.push_failed("Denver");
            Ok(report)
        }
    }

    struct BrokenPanel;

    #[async_trait]
    impl PanelSource for BrokenPanel {
        async fn fetch_report(&self) -> Result<Report> {
            Err(PanelError::LoginRejected { status: 419 }.into())
        }
    }

    fn control(panel: Arc<dyn PanelSource>) -> BotControl {
        BotControl::new(panel, "PANEL 2 (TronPanel)", "👑 @atmkrnca 👑")
    }

    #[tokio::test]
    async fn start_and_help_return_help_text() {
        let control = control(Arc::new(FixedPanel));
        let start = control.execute(BotCommand::Start).await;
        let help = control.execute(BotCommand::Help).await;
        assert_eq!(start, help);
        assert!(start.text.contains("/veri"));
        assert!(!start.markdown);
    }

    #[tokio::test]
    async fn abi_returns_configured_reply() {
        let control = BotControl::new(Arc::new(FixedPanel), "T", "hello there");
        assert_eq!(
            control.execute(BotCommand::Abi).await,
            BotReply::plain("hello there")
        );
    }

    #[tokio::test]
    async fn report_renders_markdown() {
        let reply = control(Arc::new(FixedPanel)).execute(BotCommand::Report).await;
        assert!(reply.markdown);
        assert!(reply.text.contains("*2026\\-10\\-19*"));
        assert!(reply.text.contains("Rinabet\nYat: 2\\.500\\.000 TL \\(40 adet\\)"));
        assert!(reply.text.contains("Çek: 125\\.000 TL \\(7 adet\\)"));
        assert!(reply.text.contains("Denver ⚠️"));
    }

    #[tokio::test]
    async fn report_failure_returns_generic_message() {
        let reply = control(Arc::new(BrokenPanel)).execute(BotCommand::Report).await;
        assert_eq!(reply, BotReply::plain(FAILURE_TEXT));
    }
}
