//! Monetary amounts as reported by the panel, and their `TL` rendering.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde_json::Value;

/// Currency suffix appended to every rendered amount.
pub const CURRENCY_SUFFIX: &str = "TL";

/// A monetary value in the panel's own textual form.
///
/// The panel mixes JSON numbers and strings (sometimes with thousands
/// separators), so the raw text is kept and only parsed when rendered.
/// `None` means the panel sent nothing for this field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Amount(Option<String>);

impl Amount {
    /// Create an amount from its raw textual form.
    pub fn new(raw: impl Into<String>) -> Self {
        Self(Some(raw.into()))
    }

    /// An amount the panel did not report.
    #[must_use]
    pub const fn missing() -> Self {
        Self(None)
    }

    /// The placeholder used for sites whose fetch failed.
    #[must_use]
    pub fn zero() -> Self {
        Self::new("0")
    }

    /// Build an amount from a JSON value of unknown type.
    #[must_use]
    pub fn from_json(value: &Value) -> Self {
        match value {
            Value::Null => Self::missing(),
            Value::String(s) => Self::new(s.clone()),
            other => Self::new(other.to_string()),
        }
    }

    /// Raw text, if any was reported.
    #[must_use]
    pub fn raw(&self) -> Option<&str> {
        self.0.as_deref()
    }

    /// Whole-number value, truncated toward zero.
    ///
    /// A missing amount counts as zero; unparseable text yields `None`.
    #[must_use]
    pub fn whole(&self) -> Option<Decimal> {
        match self.raw() {
            None => Some(Decimal::ZERO),
            Some(raw) => parse_whole(raw),
        }
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_amount(self))
    }
}

/// Render an amount as `1.234.567 TL`.
///
/// Missing amounts render as `0 TL`; text that is not a number is echoed
/// unchanged in front of the suffix. Numbers beyond `Decimal` range (29+
/// digits, `1e30`) go through `f64` and render its integer digits.
#[must_use]
pub fn format_amount(amount: &Amount) -> String {
    let Some(raw) = amount.raw() else {
        return format!("0 {CURRENCY_SUFFIX}");
    };
    if let Some(value) = parse_whole(raw) {
        return format_whole(value);
    }
    match float_digits(&clean(raw)) {
        Some((negative, digits)) => group_digits(negative, &digits),
        None => format!("{raw} {CURRENCY_SUFFIX}"),
    }
}

/// Render an already-whole decimal with `.` thousands grouping.
#[must_use]
pub fn format_whole(value: Decimal) -> String {
    let value = value.trunc();
    let negative = value.is_sign_negative() && !value.is_zero();
    let digits = value.abs().to_string();
    group_digits(negative, digits.split('.').next().unwrap_or("0"))
}

fn group_digits(negative: bool, digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if negative {
        grouped.push('-');
    }
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }

    format!("{grouped} {CURRENCY_SUFFIX}")
}

fn clean(raw: &str) -> String {
    raw.chars()
        .filter(|c| *c != ',' && *c != ' ')
        .collect::<String>()
        .trim()
        .to_string()
}

/// Strip `,` and spaces, parse, and truncate toward zero.
fn parse_whole(raw: &str) -> Option<Decimal> {
    let cleaned = clean(raw);
    let cleaned = cleaned.as_str();
    if cleaned.is_empty() {
        return None;
    }

    Decimal::from_str(cleaned)
        .or_else(|_| Decimal::from_scientific(cleaned))
        .ok()
        .map(|value| value.trunc())
}

/// Sign and integer digits of a finite `f64`, truncated toward zero.
fn float_digits(cleaned: &str) -> Option<(bool, String)> {
    let value: f64 = cleaned.parse().ok()?;
    if !value.is_finite() {
        return None;
    }
    let value = value.trunc();
    if value == 0.0 {
        return Some((false, "0".to_string()));
    }
    Some((value < 0.0, format!("{:.0}", value.abs())))
}
