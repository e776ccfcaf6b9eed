//! Panel pages and reports used across tests.

use chrono::NaiveDate;
use serde_json::{json, Value};

use crate::domain::{Amount, Report, SiteTotals};
use crate::infrastructure::config::panel::{PanelConfig, PanelCredentials};

/// CSRF token embedded in [`login_page`].
pub const LOGIN_TOKEN: &str = "login-token-123";

/// CSRF token embedded in [`report_page`].
pub const API_TOKEN: &str = "api-token-456";

/// Login form as served by the panel.
pub fn login_page() -> String {
    format!(
        r#"<!doctype html>
<html>
<head><title>Login</title></head>
<body>
  <form method="POST" action="/login">
    <input type="hidden" name="_token" value="{LOGIN_TOKEN}">
    <input type="email" name="email">
    <input type="password" name="password">
  </form>
</body>
</html>"#
    )
}

/// Quick report page carrying the API token in a meta tag.
pub fn report_page() -> String {
    format!(
        r#"<!doctype html>
<html>
<head>
  <meta charset="utf-8">
  <meta name="csrf-token" content="{API_TOKEN}">
  <title>Quick report</title>
</head>
<body><div id="app"></div></body>
</html>"#
    )
}

/// Quick report JSON body: `[amount, _, count, _]` per bucket.
pub fn report_json(deposit: (&str, u64), withdraw: (&str, u64)) -> Value {
    json!({
        "deposit": [deposit.0, "0", deposit.1, 0],
        "withdraw": [withdraw.0, "0", withdraw.1, 0],
    })
}

/// The fixed date used by sample reports.
pub fn sample_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 19).expect("valid date")
}

/// Totals with the given amounts and counts.
pub fn totals(deposit: (&str, u64), withdraw: (&str, u64)) -> SiteTotals {
    SiteTotals {
        deposit_amount: Amount::new(deposit.0),
        deposit_count: deposit.1,
        withdrawal_amount: Amount::new(withdraw.0),
        withdrawal_count: withdraw.1,
    }
}

/// A two-site report where the second site failed.
pub fn sample_report() -> Report {
    let mut report = Report::new(sample_date());
    report.push("Rinabet", totals(("2500000", 40), ("125000.5", 7)));
    report.push_failed("Denver");
    report
}

/// Panel settings pointing at a local mock server.
pub fn panel_config(base_url: &str) -> PanelConfig {
    PanelConfig {
        base_url: base_url.to_string(),
        timeout_ms: 2_000,
        connect_timeout_ms: 1_000,
        ..PanelConfig::default()
    }
}

/// Credentials matching what mock servers expect.
pub fn credentials() -> PanelCredentials {
    PanelCredentials::new("ops@example.com", "hunter2")
}
