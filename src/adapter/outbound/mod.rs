//! Outbound adapters (driven side).

pub mod panel;
