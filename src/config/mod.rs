//! Configuration loading and merging
//!
//! Settings come from the command line, an optional `iis-rewrite.toml` /
//! `iis-rewrite.yml` file, and built-in defaults (CLI > File > Defaults).

use serde::Deserialize;

pub mod loader;
pub mod merge;

pub use loader::load_config;
pub use merge::{merge_cli_with_config, CliOverrides};

/// Settings that may be provided by a config file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    /// Write rewriteMaps.config and rules.config next to rewrite.config.
    pub separate_config_files: bool,
    /// Destination for the trailing catch-all rule.
    pub catch_all_url: Option<String>,
}
