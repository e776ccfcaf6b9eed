//! TronPanel dashboard integration.
//!
//! Scrapes the panel's quick report over HTTP: log in with the form CSRF
//! token, read the API CSRF token from the report page, then query every
//! site concurrently.

pub mod client;
pub mod dto;
pub mod token;

pub use client::PanelClient;
