//! Report rendering for chat replies.

use std::borrow::Cow;

use crate::domain::{format_amount, format_whole, Report};

/// Marker appended to a site whose fetch failed.
const FAILED_MARKER: &str = "⚠️";

/// Output flavour of a rendered report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportStyle {
    /// Telegram `MarkdownV2`, every dynamic piece escaped.
    Markdown,
    /// Plain text, for terminals and logs.
    Plain,
}

impl ReportStyle {
    fn text<'a>(self, s: &'a str) -> Cow<'a, str> {
        match self {
            Self::Markdown => Cow::Owned(escape_markdown(s)),
            Self::Plain => Cow::Borrowed(s),
        }
    }

    fn bold(self, s: &str) -> String {
        match self {
            Self::Markdown => format!("*{}*", escape_markdown(s)),
            Self::Plain => s.to_string(),
        }
    }
}

/// Render a report in the chat layout:
///
/// ```text
/// 2026-10-19
///
/// PANEL 2 (TronPanel)
///
/// İzmir(B)
/// Yat: 1.234 TL (5 adet)
/// Çek: 0 TL (0 adet)
/// ```
///
/// followed by a `Toplam` block summing every site.
#[must_use]
pub fn render_report(report: &Report, title: &str, style: ReportStyle) -> String {
    let mut msg = format!(
        "{}\n\n{}\n\n",
        style.bold(&report.date_label()),
        style.text(title)
    );

    for entry in report.entries() {
        let t = &entry.totals;
        let name = if entry.failed {
            format!("{} {FAILED_MARKER}", entry.name)
        } else {
            entry.name.clone()
        };
        msg.push_str(&format!(
            "{}\n{}\n{}\n\n",
            style.text(&name),
            style.text(&format!(
                "Yat: {} ({} adet)",
                format_amount(&t.deposit_amount),
                t.deposit_count
            )),
            style.text(&format!(
                "Çek: {} ({} adet)",
                format_amount(&t.withdrawal_amount),
                t.withdrawal_count
            )),
        ));
    }

    let total = report.grand_total();
    msg.push_str(&format!(
        "{}\n{}\n{}",
        style.bold("Toplam"),
        style.text(&format!(
            "Yat: {} ({} adet)",
            format_whole(total.deposit_amount),
            total.deposit_count
        )),
        style.text(&format!(
            "Çek: {} ({} adet)",
            format_whole(total.withdrawal_amount),
            total.withdrawal_count
        )),
    ));

    msg
}

/// Escape special characters for Telegram `MarkdownV2`.
pub fn escape_markdown(text: &str) -> String {
    let special_chars = [
        '_', '*', '[', ']', '(', ')', '~', '`', '>', '#', '+', '-', '=', '|', '{', '}', '.', '!',
        '\\',
    ];
    let mut result = String::with_capacity(text.len() * 2);

    for c in text.chars() {
        if special_chars.contains(&c) {
            result.push('\\');
        }
        result.push(c);
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Amount, SiteTotals};
    use chrono::NaiveDate;

    fn sample_report() -> Report {
        let mut report = Report::new(NaiveDate::from_ymd_opt(2026, 10, 19).unwrap());
        report.push(
            "İzmir(B)",
            SiteTotals {
                deposit_amount: Amount::new("1234.56"),
                deposit_count: 5,
                withdrawal_amount: Amount::new("0"),
                withdrawal_count: 0,
            },
        );
        report.push_failed("Denver");
        report
    }

    #[test]
    fn test_escape_markdown() {
        assert_eq!(escape_markdown("hello"), "hello");
        assert_eq!(escape_markdown("hello_world"), "hello\\_world");
        assert_eq!(escape_markdown("İzmir(B)"), "İzmir\\(B\\)");
        assert_eq!(escape_markdown("2026-10-19"), "2026\\-10\\-19");
        assert_eq!(escape_markdown("1.234 TL"), "1\\.234 TL");
    }

    #[test]
    fn plain_report_layout() {
        let text = render_report(&sample_report(), "PANEL 2 (TronPanel)", ReportStyle::Plain);
        assert!(text.starts_with("2026-10-19\n\nPANEL 2 (TronPanel)\n\n"));
        assert!(text.contains("İzmir(B)\nYat: 1.234 TL (5 adet)\nÇek: 0 TL (0 adet)\n\n"));
        assert!(text.contains("Denver ⚠️\nYat: 0 TL (0 adet)\nÇek: 0 TL (0 adet)"));
        assert!(text.ends_with("Toplam\nYat: 1.234 TL (5 adet)\nÇek: 0 TL (0 adet)"));
    }

    #[test]
    fn markdown_report_escapes_everything() {
        let text = render_report(&sample_report(), "PANEL 2 (TronPanel)", ReportStyle::Markdown);
        assert!(text.starts_with("*2026\\-10\\-19*\n\nPANEL 2 \\(TronPanel\\)\n\n"));
        assert!(text.contains("İzmir\\(B\\)\nYat: 1\\.234 TL \\(5 adet\\)"));
        assert!(text.contains("*Toplam*"));
    }

    #[test]
    fn every_site_is_rendered() {
        let report = sample_report();
        let text = render_report(&report, "T", ReportStyle::Plain);
        for entry in report.entries() {
            assert!(text.contains(&entry.name));
        }
    }

    #[test]
    fn oversized_totals_still_render() {
        let max = rust_decimal::Decimal::MAX.to_string();
        let mut report = Report::new(NaiveDate::from_ymd_opt(2026, 10, 19).unwrap());
        for name in ["A", "B"] {
            report.push(
                name,
                SiteTotals {
                    deposit_amount: Amount::new(max.as_str()),
                    deposit_count: u64::MAX,
                    withdrawal_amount: Amount::new("0"),
                    withdrawal_count: 0,
                },
            );
        }

        let text = render_report(&report, "T", ReportStyle::Plain);
        let expected = format!(
            "Toplam\nYat: 79.228.162.514.264.337.593.543.950.335 TL ({} adet)",
            u64::MAX
        );
        assert!(text.contains(&expected));
    }
}
