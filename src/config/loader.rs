//! Config file loading

use super::FileConfig;
use crate::error::RewriteError;
use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};

const SECTION: &str = "iis-rewrite";

/// Load settings from `config_path`, or from a file discovered in `search_dir`.
///
/// An explicitly requested file must exist and parse. A discovered file that
/// fails to parse only produces a warning and the defaults.
pub fn load_config(search_dir: &Path, config_path: Option<&Path>) -> Result<FileConfig> {
    let config_path_provided = config_path.is_some();

    let discovered = match config_path {
        Some(path) => Some(path.to_path_buf()),
        None => discover_config(search_dir),
    };

    let Some(config_file) = discovered else {
        return Ok(FileConfig::default());
    };

    let ext = config_file.extension().and_then(|e| e.to_str()).unwrap_or("").to_ascii_lowercase();

    let parsed = fs::read_to_string(&config_file)
        .map_err(|e| format!("cannot read file ({})", e))
        .and_then(|content| match ext.as_str() {
            "toml" => parse_toml_config(&content),
            "yaml" | "yml" => parse_yaml_config(&content),
            other => Err(format!("unsupported config extension '.{}'", other)),
        });

    match parsed {
        Ok(cfg) => {
            tracing::debug!("Loaded config from {}", config_file.display());
            Ok(cfg)
        }
        Err(message) if config_path_provided => {
            Err(RewriteError::InvalidConfig { path: config_file, message }.into())
        }
        Err(message) => {
            tracing::warn!(
                "Ignoring auto-discovered config {}: {}",
                config_file.display(),
                message
            );
            Ok(FileConfig::default())
        }
    }
}

/// Parse TOML config, supporting a nested [iis-rewrite] section.
fn parse_toml_config(content: &str) -> Result<FileConfig, String> {
    let raw: toml::Value = toml::from_str(content).map_err(|e| e.to_string())?;

    let config_val = match raw.get(SECTION) {
        Some(nested) => nested.clone(),
        None => raw,
    };

    config_val.try_into().map_err(|e: toml::de::Error| e.to_string())
}

/// Parse YAML config, supporting a nested iis-rewrite section.
fn parse_yaml_config(content: &str) -> Result<FileConfig, String> {
    let raw: serde_yaml::Value = serde_yaml::from_str(content).map_err(|e| e.to_string())?;

    let config_val = match raw.get(SECTION) {
        Some(nested) => nested.clone(),
        None => raw,
    };

    // An empty document deserializes to null
    if config_val.is_null() {
        return Ok(FileConfig::default());
    }

    serde_yaml::from_value(config_val).map_err(|e| e.to_string())
}

fn discover_config(search_dir: &Path) -> Option<PathBuf> {
    let candidates =
        ["iis-rewrite.toml", ".iis-rewrite.toml", "iis-rewrite.yml", "iis-rewrite.yaml"];

    candidates.iter().map(|candidate| search_dir.join(candidate)).find(|path| path.exists())
}
