use thiserror::Error;

/// Configuration-related errors with structured variants.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),
}

/// Errors raised while talking to the panel.
#[derive(Error, Debug)]
pub enum PanelError {
    #[error("login rejected with status {status}")]
    LoginRejected { status: u16 },

    #[error("panel session not authenticated: redirected to login")]
    NotAuthenticated,

    #[error("report page returned status {status}")]
    ReportPage { status: u16 },

    #[error("unexpected response for site {site}: {reason}")]
    UnexpectedResponse { site: String, reason: String },

    #[error("invalid count `{value}` for site {site}")]
    InvalidCount { site: String, value: String },
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Panel(#[from] PanelError),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("URL parse error: {0}")]
    Url(#[from] url::ParseError),
}

pub type Result<T> = std::result::Result<T, Error>;
