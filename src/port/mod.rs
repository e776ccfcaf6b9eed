//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! Adapters implement these to plug external systems into the bot:
//!
//! ```text
//!   ┌──────────────┐       ┌──────────────┐       ┌──────────────┐
//!   │   Telegram   │──────▶│  PanelSource │◀──────│ Panel (HTTP) │
//!   │   adapter    │       │     port     │       │   adapter    │
//!   └──────────────┘       └──────────────┘       └──────────────┘
//! ```

pub mod outbound;
