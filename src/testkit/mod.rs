//! Shared test utilities available to both unit and integration tests.
//!
//! Enabled via `#[cfg(test)]` (unit tests) or the `testkit` feature
//! (integration tests).
//!
//! # Modules
//!
//! - [`panel`] - [`PanelSource`](crate::port::outbound::panel::PanelSource)
//!   doubles: `ScriptedPanel`.
//! - [`fixtures`] - Panel HTML pages, JSON bodies and sample reports.

pub mod fixtures;
pub mod panel;
