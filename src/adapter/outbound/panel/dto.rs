//! Quick report request/response bodies.
//!
//! The report endpoint answers with two positional arrays:
//! ```json
//! {"deposit": ["15250.50", "..", "12", ".."], "withdraw": [4000, "..", 3, ".."]}
//! ```
//! Element 0 is the amount, element 2 the transaction count.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::{Amount, SiteTotals};
use crate::error::PanelError;

/// Body of the per-site report request.
#[derive(Debug, Serialize)]
pub struct QuickReportRequest<'a> {
    pub site: &'a str,
    pub dateone: &'a str,
    pub datetwo: &'a str,
    pub bank: &'a str,
    pub user: &'a str,
}

impl<'a> QuickReportRequest<'a> {
    /// Request for one site over a single day.
    pub fn for_day(site: &'a str, date: &'a str) -> Self {
        Self {
            site,
            dateone: date,
            datetwo: date,
            bank: "",
            user: "",
        }
    }
}

fn empty_bucket() -> Vec<Value> {
    vec![Value::from(0); 4]
}

/// Per-site report response.
#[derive(Debug, Deserialize)]
pub struct QuickReportResponse {
    #[serde(default = "empty_bucket")]
    pub deposit: Vec<Value>,
    #[serde(default = "empty_bucket")]
    pub withdraw: Vec<Value>,
}

impl QuickReportResponse {
    /// Convert to domain totals.
    ///
    /// # Errors
    ///
    /// Fails when a bucket has no amount or a count is not a number.
    pub fn into_totals(self, site: &str) -> Result<SiteTotals, PanelError> {
        let (deposit_amount, deposit_count) = parse_bucket(site, "deposit", &self.deposit)?;
        let (withdrawal_amount, withdrawal_count) =
            parse_bucket(site, "withdraw", &self.withdraw)?;

        Ok(SiteTotals {
            deposit_amount,
            deposit_count,
            withdrawal_amount,
            withdrawal_count,
        })
    }
}

fn parse_bucket(site: &str, bucket: &str, values: &[Value]) -> Result<(Amount, u64), PanelError> {
    let amount = values
        .first()
        .map(Amount::from_json)
        .ok_or_else(|| PanelError::UnexpectedResponse {
            site: site.to_string(),
            reason: format!("`{bucket}` has no amount"),
        })?;

    let count = match values.get(2) {
        Some(value) => parse_count(site, value)?,
        None => 0,
    };

    Ok((amount, count))
}

/// Parse a count the way the panel sends it: number, numeric string, or blank.
///
/// Fractions are truncated; blank, null and false count as zero.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn parse_count(site: &str, value: &Value) -> Result<u64, PanelError> {
    let invalid = || PanelError::InvalidCount {
        site: site.to_string(),
        value: value.to_string(),
    };

    let number = match value {
        Value::Null => return Ok(0),
        Value::Bool(b) => return Ok(u64::from(*b)),
        Value::Number(n) => n.as_f64().ok_or_else(invalid)?,
        Value::String(s) if s.is_empty() => return Ok(0),
        Value::String(s) => s.trim().parse::<f64>().map_err(|_| invalid())?,
        Value::Array(_) | Value::Object(_) => return Err(invalid()),
    };

    if !number.is_finite() || number <= -1.0 {
        return Err(invalid());
    }

    Ok(number.trunc().max(0.0) as u64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn response(value: Value) -> QuickReportResponse {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn request_uses_same_day_for_both_bounds() {
        let request = QuickReportRequest::for_day("site-1", "2026-10-19");
        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(
            body,
            json!({
                "site": "site-1",
                "dateone": "2026-10-19",
                "datetwo": "2026-10-19",
                "bank": "",
                "user": ""
            })
        );
    }

    #[test]
    fn parses_amounts_and_counts() {
        let totals = response(json!({
            "deposit": ["15250.50", "x", "12", "y"],
            "withdraw": [4000, 0, 3.0, 0]
        }))
        .into_totals("Denver")
        .unwrap();

        assert_eq!(totals.deposit_amount.raw(), Some("15250.50"));
        assert_eq!(totals.deposit_count, 12);
        assert_eq!(totals.withdrawal_amount.raw(), Some("4000"));
        assert_eq!(totals.withdrawal_count, 3);
    }

    #[test]
    fn missing_buckets_default_to_zero() {
        let totals = response(json!({})).into_totals("Denver").unwrap();
        assert_eq!(totals.deposit_amount.raw(), Some("0"));
        assert_eq!(totals.deposit_count, 0);
        assert_eq!(totals.withdrawal_count, 0);
    }

    #[test]
    fn short_bucket_has_zero_count() {
        let totals = response(json!({"deposit": [100], "withdraw": [50, 1]}))
            .into_totals("Denver")
            .unwrap();
        assert_eq!(totals.deposit_count, 0);
        assert_eq!(totals.withdrawal_count, 0);
    }

    #[test]
    fn blank_and_null_counts_are_zero() {
        let totals = response(json!({
            "deposit": [100, 0, "", 0],
            "withdraw": [50, 0, null, 0]
        }))
        .into_totals("Denver")
        .unwrap();
        assert_eq!(totals.deposit_count, 0);
        assert_eq!(totals.withdrawal_count, 0);
    }

    #[test]
    fn fractional_count_is_truncated() {
        let totals = response(json!({"deposit": [1, 0, "7.9", 0]}))
            .into_totals("Denver")
            .unwrap();
        assert_eq!(totals.deposit_count, 7);
    }

    #[test]
    fn empty_bucket_is_an_error() {
        let result = response(json!({"deposit": []})).into_totals("Denver");
        assert!(matches!(
            result,
            Err(PanelError::UnexpectedResponse { .. })
        ));
    }

    #[test]
    fn non_numeric_count_is_an_error() {
        let result = response(json!({"deposit": [1, 0, "many", 0]})).into_totals("Denver");
        assert!(matches!(result, Err(PanelError::InvalidCount { .. })));
    }

    #[test]
    fn null_bucket_fails_to_deserialize() {
        let parsed: Result<QuickReportResponse, _> =
            serde_json::from_value(json!({"deposit": null}));
        assert!(parsed.is_err());
    }
}
