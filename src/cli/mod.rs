//! Command-line interface for csv-iis-rewrite
//!
//! Accepts the CSV and output directory either positionally or through
//! `-p`/`-o`; flags win when both are given.

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod generate;
mod utils;

use crate::config::CliOverrides;

pub const USAGE: &str =
    "csv-iis-rewrite -p <csv-file-path> -o <output-directory> [-s] [-a <destination-url>]";

/// Convert a CSV of redirects into IIS URL Rewrite configuration
#[derive(Parser, Debug)]
#[command(name = "csv-iis-rewrite")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// CSV file of source URL, destination URL rows
    #[arg(value_name = "CSV")]
    pub csv: Option<PathBuf>,

    /// Directory the .config files are written to
    #[arg(value_name = "OUTPUT_DIR")]
    pub output: Option<PathBuf>,

    /// CSV file of source URL, destination URL rows
    #[arg(short = 'p', long = "path", value_name = "CSV")]
    pub csv_path: Option<PathBuf>,

    /// Directory the .config files are written to
    #[arg(short = 'o', long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Write rewriteMaps.config and rules.config separately and reference them from rewrite.config
    #[arg(short = 's', long = "separate")]
    pub separate: bool,

    /// Redirect everything not matched by a domain rule to this URL
    #[arg(short = 'a', long = "catch-all", value_name = "URL", env = "IIS_REWRITE_CATCH_ALL")]
    pub catch_all: Option<String>,

    /// Path to config file (iis-rewrite.toml or iis-rewrite.yml)
    #[arg(short = 'c', long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Enable verbose logging (sets log level to DEBUG)
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn overrides(&self) -> CliOverrides {
        CliOverrides {
            csv_path: self.csv_path.clone().or_else(|| self.csv.clone()),
            output_directory: self.output_dir.clone().or_else(|| self.output.clone()),
            separate_config_files: self.separate,
            catch_all_url: self.catch_all.clone(),
        }
    }
}

pub fn run() -> Result<ExitCode> {
    let cli = Cli::parse();

    // RUST_LOG in the environment always takes precedence; --verbose falls back to DEBUG.
    let filter = if cli.verbose {
        EnvFilter::from_default_env().add_directive(Level::DEBUG.into())
    } else {
        EnvFilter::from_default_env().add_directive(Level::WARN.into())
    };
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();

    generate::run(&cli)
}
