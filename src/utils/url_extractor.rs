//! Permissive URL extraction from free-form input.
//!
//! Users paste URLs surrounded by arbitrary text; the extractor performs a
//! pattern search rather than a full-string match and returns the first
//! URL-shaped substring it finds.

use regex::{Regex, RegexBuilder};
use std::sync::LazyLock;

/// Compiled pattern for `http(s)://[www.]host.tld[/path?query]` substrings.
static URL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    RegexBuilder::new(r"https?://(?:www\.)?([-\d\w.]{2,256}[\d\w]{2,6}\b)*(/[?/\d\w=+&#.-]*)*")
        .size_limit(64 * (1 << 20))
        .build()
        .expect("URL pattern must compile")
});

/// Error returned when no URL-shaped substring is present in the input.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
#[error("url format not supported")]
pub struct NotAUrl;

/// Returns the first well-formed URL substring of `input`.
///
/// The match stops at the first character outside the path character class,
/// so trailing prose punctuation (a comma, a closing parenthesis) is not
/// swallowed into the URL.
///
/// # Errors
///
/// Returns [`NotAUrl`] when the input contains no matching substring.
///
/// # Examples
///
/// ```
/// use shortly::utils::url_extractor::extract_url;
///
/// let url = extract_url("click here: https://example.com/a?b=1 thanks").unwrap();
/// assert_eq!(url, "https://example.com/a?b=1");
///
/// assert!(extract_url("not a url").is_err());
/// ```
pub fn extract_url(input: &str) -> Result<String, NotAUrl> {
    URL_REGEX
        .find(input)
        .map(|m| m.as_str().to_string())
        .ok_or(NotAUrl)
}
