//! Inbound adapters (driving side).

pub mod telegram;
