//! Panel connection configuration and credentials.

use std::fmt;

use chrono::{FixedOffset, Offset, Utc};
use serde::Deserialize;

use crate::error::ConfigError;

/// Environment variable holding the panel login e-mail.
pub const PANEL_USER_ENV: &str = "TRONPANEL_USER";
/// Environment variable holding the panel password.
pub const PANEL_PASS_ENV: &str = "TRONPANEL_PASS";

/// Which URL the panel serves its quick report on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportPath {
    /// `/report/quickly`
    #[default]
    Singular,
    /// `/reports/quickly`
    Plural,
}

impl ReportPath {
    #[must_use]
    pub const fn segment(self) -> &'static str {
        match self {
            Self::Singular => "report",
            Self::Plural => "reports",
        }
    }
}

/// Panel connection settings.
#[derive(Debug, Clone, Deserialize)]
pub struct PanelConfig {
    /// Panel root URL, without trailing slash.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Heading shown above the site list in chat replies.
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default)]
    pub report_path: ReportPath,
    /// Panel time zone as a fixed UTC offset; "today" is computed in it.
    #[serde(default = "default_utc_offset_hours")]
    pub utc_offset_hours: i32,
    /// Skip TLS certificate verification (the panel's certificate does not verify).
    #[serde(default = "default_true")]
    pub accept_invalid_certs: bool,
    /// Total request timeout in milliseconds.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
    /// Connect timeout in milliseconds.
    #[serde(default = "default_connect_timeout_ms")]
    pub connect_timeout_ms: u64,
}

fn default_base_url() -> String {
    "https://win.tronpanel.com".into()
}

fn default_title() -> String {
    "PANEL 2 (TronPanel)".into()
}

const fn default_utc_offset_hours() -> i32 {
    3
}

const fn default_true() -> bool {
    true
}

const fn default_timeout_ms() -> u64 {
    15_000
}

const fn default_connect_timeout_ms() -> u64 {
    5_000
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            title: default_title(),
            report_path: ReportPath::default(),
            utc_offset_hours: default_utc_offset_hours(),
            accept_invalid_certs: default_true(),
            timeout_ms: default_timeout_ms(),
            connect_timeout_ms: default_connect_timeout_ms(),
        }
    }
}

impl PanelConfig {
    fn root(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }

    /// Login form URL.
    #[must_use]
    pub fn login_url(&self) -> String {
        format!("{}/login", self.root())
    }

    /// Quick report page and API URL.
    #[must_use]
    pub fn report_url(&self) -> String {
        format!("{}/{}/quickly", self.root(), self.report_path.segment())
    }

    /// Panel time zone.
    ///
    /// Falls back to UTC for offsets chrono cannot represent; validation
    /// rejects those before this is reached.
    #[must_use]
    pub fn utc_offset(&self) -> FixedOffset {
        FixedOffset::east_opt(self.utc_offset_hours * 3600).unwrap_or_else(|| Utc.fix())
    }

    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        let url = url::Url::parse(&self.base_url).map_err(|e| ConfigError::InvalidValue {
            field: "base_url",
            reason: format!("invalid URL format: {e}"),
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ConfigError::InvalidValue {
                field: "base_url",
                reason: format!("unsupported URL scheme: {}", url.scheme()),
            });
        }
        if !(-12..=14).contains(&self.utc_offset_hours) {
            return Err(ConfigError::InvalidValue {
                field: "utc_offset_hours",
                reason: "must be between -12 and 14".to_string(),
            });
        }
        if self.timeout_ms == 0 {
            return Err(ConfigError::InvalidValue {
                field: "timeout_ms",
                reason: "must be greater than 0".to_string(),
            });
        }
        if self.connect_timeout_ms == 0 {
            return Err(ConfigError::InvalidValue {
                field: "connect_timeout_ms",
                reason: "must be greater than 0".to_string(),
            });
        }
        Ok(())
    }
}

/// Panel login credentials.
///
/// Only ever read from the environment, never from the config file.
#[derive(Clone)]
pub struct PanelCredentials {
    pub username: String,
    pub password: String,
}

impl PanelCredentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Read `TRONPANEL_USER` and `TRONPANEL_PASS`.
    ///
    /// # Errors
    ///
    /// Returns `MissingField` when either variable is unset or empty.
    pub fn from_env() -> Result<Self, ConfigError> {
        let username = required_env(PANEL_USER_ENV)?;
        let password = required_env(PANEL_PASS_ENV)?;
        Ok(Self { username, password })
    }
}

impl fmt::Debug for PanelCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PanelCredentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Read a non-empty environment variable.
pub(crate) fn required_env(name: &'static str) -> Result<String, ConfigError> {
    match std::env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(ConfigError::MissingField { field: name }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn urls_follow_report_path() {
        let mut config = PanelConfig {
            base_url: "https://panel.example/".into(),
            ..PanelConfig::default()
        };
        assert_eq!(config.login_url(), "https://panel.example/login");
        assert_eq!(config.report_url(), "https://panel.example/report/quickly");

        config.report_path = ReportPath::Plural;
        assert_eq!(config.report_url(), "https://panel.example/reports/quickly");
    }

    #[test]
    fn default_offset_is_three_hours_east() {
        let config = PanelConfig::default();
        assert_eq!(config.utc_offset().local_minus_utc(), 3 * 3600);
    }

    #[test]
    fn validate_rejects_bad_url_and_offset() {
        let config = PanelConfig {
            base_url: "ftp://panel.example".into(),
            ..PanelConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue {
                field: "base_url",
                ..
            })
        ));

        let config = PanelConfig {
            utc_offset_hours: 20,
            ..PanelConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue {
                field: "utc_offset_hours",
                ..
            })
        ));
    }

    #[test]
    fn credentials_debug_hides_password() {
        let creds = PanelCredentials::new("ops@example.com", "hunter2");
        let rendered = format!("{creds:?}");
        assert!(rendered.contains("ops@example.com"));
        assert!(!rendered.contains("hunter2"));
    }
}
