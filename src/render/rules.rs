//! IIS URL Rewrite rule generation
//!
//! Each domain gets exactly one rule:
//! - one redirect: a direct redirect rule matching that path (or everything for `/`)
//! - several redirects: a rewrite map plus a rule that looks the request up in it
//!
//! An optional catch-all rule is appended after all domain rules.

use super::xml::Element;
use crate::domain::{ExecutionConfig, PathMap, RedirectMap};

pub const MATCH_ALL: &str = ".*";
pub const CATCH_ALL_RULE_NAME: &str = "Catch-all redirect rule";

/// The two fragments produced from a [`RedirectMap`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleSet {
    /// `<rewriteMaps>` with one `<rewriteMap>` per multi-path domain.
    pub rewrite_maps: Element,
    /// `<rules>` with domain rules in domain order, catch-all last.
    pub rules: Element,
    /// Number of per-domain rules (the catch-all is not counted).
    pub domain_rules: usize,
    /// Domains that had no paths and were left out.
    pub skipped_domains: Vec<String>,
}

impl RuleSet {
    pub fn is_empty(&self) -> bool {
        self.domain_rules == 0
    }
}

pub fn build_rules(map: &RedirectMap, config: &ExecutionConfig) -> RuleSet {
    let mut rewrite_maps = Element::new("rewriteMaps");
    let mut rules = Element::new("rules");
    let mut domain_rules = 0;
    let mut skipped_domains = Vec::new();

    for (domain, paths) in map {
        if paths.is_empty() {
            tracing::warn!("No redirects were found for the domain {}", domain);
            skipped_domains.push(domain.clone());
            continue;
        }

        if let Some((path, destination)) = single_entry(paths) {
            tracing::debug!("{}: direct redirect rule", domain);
            rules.push(redirect_rule(domain, path, destination));
        } else {
            tracing::debug!("{}: rewrite map rule with {} entries", domain, paths.len());
            rewrite_maps.push(rewrite_map(domain, paths));
            rules.push(rewrite_map_rule(domain));
        }
        domain_rules += 1;
    }

    if domain_rules > 0 {
        if let Some(url) = config.catch_all_destination_url.as_deref() {
            rules.push(catch_all_rule(url));
        }
    }

    RuleSet { rewrite_maps, rules, domain_rules, skipped_domains }
}

fn single_entry(paths: &PathMap) -> Option<(&String, &String)> {
    if paths.len() == 1 {
        paths.iter().next()
    } else {
        None
    }
}

/// `<match url>` pattern for a single-path domain.
pub fn match_pattern(path: &str) -> String {
    if path.is_empty() || path == "/" {
        MATCH_ALL.to_string()
    } else {
        regex::escape(path.trim_start_matches('/'))
    }
}

/// `{HTTP_HOST}` pattern accepting the domain with or without `www.`.
pub fn host_pattern(domain: &str) -> String {
    format!(r"^(www\.)?{}$", regex::escape(domain))
}

pub fn map_name(domain: &str) -> String {
    format!("{} map", domain)
}

fn host_condition(domain: &str) -> Element {
    Element::new("add").attr("input", "{HTTP_HOST}").attr("pattern", host_pattern(domain))
}

fn redirect_action(url: &str) -> Element {
    Element::new("action")
        .attr("type", "Redirect")
        .attr("url", url)
        .attr("appendQueryString", "false")
}

fn redirect_rule(domain: &str, path: &str, destination: &str) -> Element {
    Element::new("rule")
        .attr("name", format!("Redirect rule for {}", domain))
        .attr("stopProcessing", "true")
        .child(Element::new("match").attr("url", match_pattern(path)))
        .child(Element::new("conditions").child(host_condition(domain)))
        .child(redirect_action(destination))
}

fn rewrite_map(domain: &str, paths: &PathMap) -> Element {
    let mut element = Element::new("rewriteMap").attr("name", map_name(domain));
    for (path, destination) in paths {
        let key = if path.is_empty() { "/" } else { path.as_str() };
        element.push(Element::new("add").attr("key", key).attr("value", destination.as_str()));
    }
    element
}

fn rewrite_map_rule(domain: &str) -> Element {
    let lookup = format!("{{{}:{{URL}}}}", map_name(domain));
    Element::new("rule")
        .attr("name", format!("Rewrite map rule for {}", domain))
        .attr("stopProcessing", "true")
        .child(Element::new("match").attr("url", MATCH_ALL))
        .child(
            Element::new("conditions")
                .child(host_condition(domain))
                .child(Element::new("add").attr("input", lookup).attr("pattern", "(.+)")),
        )
        .child(redirect_action("{C:1}"))
}

fn catch_all_rule(url: &str) -> Element {
    Element::new("rule")
        .attr("name", CATCH_ALL_RULE_NAME)
        .attr("stopProcessing", "true")
        .child(Element::new("match").attr("url", MATCH_ALL))
        .child(redirect_action(url))
}
