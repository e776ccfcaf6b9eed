//! CSRF token extraction from panel HTML.

use scraper::{Html, Selector};

/// Token of the login form: `<input name="_token" value="...">`.
#[must_use]
pub fn login_token(html: &str) -> Option<String> {
    attribute_of(html, r#"input[name="_token"]"#, "value")
}

/// Token the report API expects: `<meta name="csrf-token" content="...">`.
#[must_use]
pub fn api_token(html: &str) -> Option<String> {
    attribute_of(html, r#"meta[name="csrf-token"]"#, "content")
}

fn attribute_of(html: &str, selector: &str, attribute: &str) -> Option<String> {
    let selector = Selector::parse(selector).ok()?;
    let document = Html::parse_document(html);
    document
        .select(&selector)
        .next()
        .and_then(|element| element.value().attr(attribute))
        .map(str::to_string)
}
