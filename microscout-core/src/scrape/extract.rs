//! HTML metadata extraction — title, meta description, first heading.
//!
//! Parses raw HTML with `scraper` and pulls three fields. Missing elements
//! and missing attributes become empty strings. Text is returned as the
//! element's full text content, without trimming.

use scraper::{Html, Selector};

/// The three fields pulled from a page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractedFields {
    pub title: String,
    pub meta_description: String,
    pub h1: String,
}

/// Extract title, meta description, and first `<h1>` from raw HTML.
///
/// Never fails: unparsable markup is recovered by the HTML parser and
/// anything it cannot find comes back empty.
pub fn extract_metadata(html: &str) -> ExtractedFields {
    let document = Html::parse_document(html);

    ExtractedFields {
        title: first_text(&document, "title"),
        meta_description: first_attr(&document, r#"meta[name="description"]"#, "content"),
        h1: first_text(&document, "h1"),
    }
}

/// Text content of the first element matching `selector`.
fn first_text(document: &Html, selector: &str) -> String {
    let Ok(selector) = Selector::parse(selector) else {
        return String::new();
    };
    document
        .select(&selector)
        .next()
        .map(|el| el.text().collect::<String>())
        .unwrap_or_default()
}

/// Attribute value on the first element matching `selector`.
///
/// Only the first match is consulted, even when it lacks the attribute.
fn first_attr(document: &Html, selector: &str, attr: &str) -> String {
    let Ok(selector) = Selector::parse(selector) else {
        return String::new();
    };
    document
        .select(&selector)
        .next()
        .and_then(|el| el.value().attr(attr))
        .map(str::to_owned)
        .unwrap_or_default()
}
