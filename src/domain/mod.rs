//! Panel-agnostic domain types: sites, totals, amounts.

pub mod money;
pub mod site;
pub mod totals;

pub use money::{format_amount, format_whole, Amount};
pub use site::{Site, SiteId, SiteRegistry};
pub use totals::{GrandTotal, Report, SiteEntry, SiteTotals};
