//! csv-iis-rewrite: Convert CSV redirect lists into IIS URL Rewrite configuration
//!
//! Rows of `source URL, destination URL` are grouped by domain and turned into
//! `<rewriteMaps>` and `<rules>` fragments for the IIS URL Rewrite module.

pub mod aggregate;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod render;

pub use aggregate::{aggregate_csv, aggregate_rows, Aggregation};
pub use domain::{ExecutionConfig, OutputDocument, RedirectMap};
pub use error::RewriteError;
pub use render::{build_rules, partition, RuleSet};
