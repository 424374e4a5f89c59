//! Page name validation and page id extraction.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::FanError;

/// Regex for the mobile deep-link meta content that carries the page id.
/// Accepts both `fb://page/123` and `fb://page/?id=123`.
#[allow(clippy::expect_used)]
static PAGE_ID_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"content="fb://page/(?:\?id=)?(\d+)"#)
        .expect("page id regex is valid") // Static pattern, safe to panic
});

/// Extracts the internal page id from page markup.
#[must_use]
pub fn extract_page_id(html: &str) -> Option<String> {
    PAGE_ID_PATTERN
        .captures(html)
        .and_then(|captures| captures.get(1))
        .map(|id| id.as_str().to_string())
}

/// Checks that `name` can be used as a single URL path segment.
///
/// # Errors
///
/// Returns [`FanError::InvalidInput`] for empty names, the dot segments
/// `.` and `..`, or names containing `/`, `?` or `#`.
pub fn validate_page_name(name: &str) -> Result<(), FanError> {
    if name.trim().is_empty() {
        return Err(FanError::invalid_input("page name", "must not be empty"));
    }
    if matches!(name, "." | "..") {
        return Err(FanError::invalid_input(
            "page name",
            format!("'{name}' is a relative path segment, not a page"),
        ));
    }
    if let Some(bad) = name.chars().find(|ch| matches!(ch, '/' | '?' | '#')) {
        return Err(FanError::invalid_input(
            "page name",
            format!("'{name}' must not contain '{bad}'"),
        ));
    }
    Ok(())
}
