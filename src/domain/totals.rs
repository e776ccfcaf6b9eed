//! Per-site daily totals and the report that collects them.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::money::Amount;

/// Deposit and withdrawal totals of one site for one day.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SiteTotals {
    pub deposit_amount: Amount,
    pub deposit_count: u64,
    pub withdrawal_amount: Amount,
    pub withdrawal_count: u64,
}

impl SiteTotals {
    /// Placeholder used when a site could not be fetched.
    #[must_use]
    pub fn zero() -> Self {
        Self {
            deposit_amount: Amount::zero(),
            deposit_count: 0,
            withdrawal_amount: Amount::zero(),
            withdrawal_count: 0,
        }
    }
}

/// A site's line in the report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteEntry {
    /// Display name of the site.
    pub name: String,
    pub totals: SiteTotals,
    /// True when the values are the zero placeholder for a failed fetch.
    pub failed: bool,
}

/// Sum over every site of a report.
///
/// Amounts that do not parse as numbers, or would overflow the sum, are left
/// out of it and counted in `unparsed_amounts`. Counts saturate.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GrandTotal {
    pub deposit_amount: Decimal,
    pub deposit_count: u64,
    pub withdrawal_amount: Decimal,
    pub withdrawal_count: u64,
    pub unparsed_amounts: usize,
}

/// One day's totals for every configured site, in registry order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    date: NaiveDate,
    entries: Vec<SiteEntry>,
}

impl Report {
    #[must_use]
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            entries: Vec::new(),
        }
    }

    /// Append a successfully fetched site.
    pub fn push(&mut self, name: impl Into<String>, totals: SiteTotals) {
        self.entries.push(SiteEntry {
            name: name.into(),
            totals,
            failed: false,
        });
    }

    /// Append a site whose fetch failed; it reports zeros.
    pub fn push_failed(&mut self, name: impl Into<String>) {
        self.entries.push(SiteEntry {
            name: name.into(),
            totals: SiteTotals::zero(),
            failed: true,
        });
    }

    /// Date in the `YYYY-MM-DD` form the panel and the chat reply use.
    #[must_use]
    pub fn date_label(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    #[must_use]
    pub fn entries(&self) -> &[SiteEntry] {
        &self.entries
    }

    /// Totals for a site by display name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&SiteTotals> {
        self.entries
            .iter()
            .find(|e| e.name == name)
            .map(|e| &e.totals)
    }

    #[must_use]
    pub fn failed_count(&self) -> usize {
        self.entries.iter().filter(|e| e.failed).count()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn grand_total(&self) -> GrandTotal {
        let mut total = GrandTotal::default();
        for entry in &self.entries {
            let t = &entry.totals;
            match t
                .deposit_amount
                .whole()
                .and_then(|value| total.deposit_amount.checked_add(value))
            {
                Some(sum) => total.deposit_amount = sum,
                None => total.unparsed_amounts += 1,
            }
            match t
                .withdrawal_amount
                .whole()
                .and_then(|value| total.withdrawal_amount.checked_add(value))
            {
                Some(sum) => total.withdrawal_amount = sum,
                None => total.unparsed_amounts += 1,
            }
            total.deposit_count = total.deposit_count.saturating_add(t.deposit_count);
            total.withdrawal_count = total.withdrawal_count.saturating_add(t.withdrawal_count);
        }
        total
    }
}
