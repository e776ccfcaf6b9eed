//! Infrastructure configuration modules.

pub mod logging;
pub mod panel;
pub mod settings;
pub mod telegram;
