//! Mock [`PanelSource`] for testing command handling without HTTP.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::domain::Report;
use crate::error::{PanelError, Result};
use crate::port::outbound::panel::PanelSource;

/// A panel with a queue of scripted results.
///
/// Each call to `fetch_report()` pops the next result. Once the queue is
/// empty, calls fail with [`PanelError::NotAuthenticated`].
pub struct ScriptedPanel {
    results: Mutex<VecDeque<Result<Report>>>,
    calls: Arc<AtomicU32>,
}

impl ScriptedPanel {
    pub fn new() -> Self {
        Self {
            results: Mutex::new(VecDeque::new()),
            calls: Arc::new(AtomicU32::new(0)),
        }
    }

    /// A panel that returns `report` once.
    pub fn returning(report: Report) -> Self {
        Self::new().then(Ok(report))
    }

    /// A panel whose first call fails with `error`.
    pub fn failing(error: PanelError) -> Self {
        Self::new().then(Err(error.into()))
    }

    /// Queue another result.
    pub fn then(self, result: Result<Report>) -> Self {
        self.results
            .lock()
            .expect("scripted panel lock")
            .push_back(result);
        self
    }

    /// Shared counter of `fetch_report()` calls.
    pub fn calls(&self) -> Arc<AtomicU32> {
        Arc::clone(&self.calls)
    }
}

impl Default for ScriptedPanel {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PanelSource for ScriptedPanel {
    async fn fetch_report(&self) -> Result<Report> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.results
            .lock()
            .expect("scripted panel lock")
            .pop_front()
            .unwrap_or_else(|| Err(PanelError::NotAuthenticated.into()))
    }
}
