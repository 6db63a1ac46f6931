//! Source URL matching
//!
//! Splits a source URL into its domain (everything up to and including a
//! two or three character top-level label) and an optional path.

use crate::domain::RedirectEntry;
use once_cell::sync::Lazy;
use regex::Regex;

static SOURCE_URL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^(?:http|https)://(?P<domain>.+?\.\w{2,3})(?P<path>/(.*)?)?$")
        .expect("valid regex")
});

/// Returns `(domain, path)` as written in the URL, or `None` when the URL
/// does not have the expected shape. The path is empty when absent.
pub fn parse_source_url(url: &str) -> Option<(&str, &str)> {
    let caps = SOURCE_URL.captures(url)?;
    let domain = caps.name("domain")?.as_str();
    let path = caps.name("path").map_or("", |m| m.as_str());
    Some((domain, path))
}

/// Build a [`RedirectEntry`] from the first two CSV fields.
pub fn match_row(source: &str, destination: &str) -> Option<RedirectEntry> {
    let (domain, path) = parse_source_url(source)?;
    Some(RedirectEntry {
        domain: domain.to_string(),
        path: path.to_string(),
        destination: destination.to_string(),
    })
}
