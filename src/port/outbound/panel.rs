//! Panel port: where daily reports come from.

use async_trait::async_trait;

use crate::domain::Report;
use crate::error::Result;

/// Source of the daily per-site report.
///
/// Each call is an independent round trip: implementations must not keep
/// session state between calls.
#[async_trait]
pub trait PanelSource: Send + Sync {
    /// Fetch today's totals for every configured site.
    ///
    /// Per-site failures are folded into the report as zero entries; an
    /// `Err` means the report as a whole could not be produced.
    async fn fetch_report(&self) -> Result<Report>;
}
