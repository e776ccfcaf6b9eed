//! Infrastructure layer.
//!
//! Technical concerns that support the bot without containing business
//! logic.
//!
//! # Submodules
//!
//! - [`config`] - Configuration loading, validation and logging setup
//! - [`factory`] - Builds adapters from configuration

pub mod config;
pub mod factory;
