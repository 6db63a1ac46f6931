//! Core data types shared by the aggregator, the rule emitter and the CLI

use crate::render::xml::Element;
use std::collections::btree_map;
use std::collections::BTreeMap;
use std::path::PathBuf;

/// A matched CSV row, before domain and path normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedirectEntry {
    pub domain: String,
    pub path: String,
    pub destination: String,
}

/// Normalized path -> destination URL for a single domain.
pub type PathMap = BTreeMap<String, String>;

/// Normalized domain -> [`PathMap`].
///
/// Both levels are B-tree maps so iteration is always lexicographic and the
/// generated configuration is byte-for-byte reproducible.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RedirectMap {
    domains: BTreeMap<String, PathMap>,
}

impl RedirectMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a redirect, overwriting any earlier destination for the same
    /// (domain, path) pair. Returns the destination that was replaced.
    pub fn insert(
        &mut self,
        domain: impl Into<String>,
        path: impl Into<String>,
        destination: impl Into<String>,
    ) -> Option<String> {
        self.domains.entry(domain.into()).or_default().insert(path.into(), destination.into())
    }

    pub fn get(&self, domain: &str) -> Option<&PathMap> {
        self.domains.get(domain)
    }

    /// Number of domains.
    pub fn len(&self) -> usize {
        self.domains.len()
    }

    pub fn is_empty(&self) -> bool {
        self.domains.is_empty()
    }

    /// Total number of path entries across all domains.
    pub fn redirect_count(&self) -> usize {
        self.domains.values().map(BTreeMap::len).sum()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, String, PathMap> {
        self.domains.iter()
    }
}

impl<'a> IntoIterator for &'a RedirectMap {
    type Item = (&'a String, &'a PathMap);
    type IntoIter = btree_map::Iter<'a, String, PathMap>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Settings for a single run, merged from the command line and config file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionConfig {
    pub csv_path: PathBuf,
    pub output_directory: PathBuf,
    pub separate_config_files: bool,
    pub catch_all_destination_url: Option<String>,
}

/// A CSV row that had fewer than two columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedRow {
    /// 1-based line number in the source file.
    pub line: u64,
    /// Fields joined back together with commas.
    pub raw: String,
}

/// An XML fragment bound for a file in the output directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputDocument {
    pub file_name: &'static str,
    pub root: Element,
}

impl OutputDocument {
    pub fn new(file_name: &'static str, root: Element) -> Self {
        Self { file_name, root }
    }

    /// Serialized file contents.
    pub fn render(&self) -> String {
        let mut out = self.root.to_xml_string();
        out.push('\n');
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_last_write_wins() {
        let mut map = RedirectMap::new();
        assert_eq!(map.insert("a.com", "/x", "http://one.com"), None);
        assert_eq!(
            map.insert("a.com", "/x", "http://two.com"),
            Some("http://one.com".to_string())
        );
        assert_eq!(map.redirect_count(), 1);
        assert_eq!(map.get("a.com").and_then(|p| p.get("/x")).map(String::as_str), Some("http://two.com"));
    }

    #[test]
    fn test_iteration_is_lexicographic() {
        let mut map = RedirectMap::new();
        map.insert("zeta.com", "/", "http://z.com");
        map.insert("alpha.com", "/b", "http://b.com");
        map.insert("alpha.com", "/a", "http://a.com");

        let domains: Vec<&str> = map.iter().map(|(d, _)| d.as_str()).collect();
        assert_eq!(domains, vec!["alpha.com", "zeta.com"]);

        let paths: Vec<&str> = map.get("alpha.com").expect("alpha").keys().map(String::as_str).collect();
        assert_eq!(paths, vec!["/a", "/b"]);
        assert_eq!(map.len(), 2);
        assert_eq!(map.redirect_count(), 3);
    }
}
