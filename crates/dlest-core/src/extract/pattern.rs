//! URL shape check used by the extractor.

use regex::Regex;
use std::sync::OnceLock;

/// Scheme `http`/`https`, optional `www.`, dotted host ending in an alphabetic
/// label, optional port, optional path/query/fragment without whitespace.
/// Anchored: the whole string must be the URL.
const URL_PATTERN: &str = r"^https?://(?:www\.)?(?:[A-Za-z0-9](?:[A-Za-z0-9-]*[A-Za-z0-9])?\.)+[A-Za-z]+(?::[0-9]{1,5})?(?:[/?#]\S*)?$";

fn url_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(URL_PATTERN).expect("URL_PATTERN is a valid regex"))
}

/// True if `s` looks like an `http`/`https` URL.
pub fn is_url(s: &str) -> bool {
    url_regex().is_match(s)
}
