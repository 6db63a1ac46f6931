//! csv-iis-rewrite: Convert CSV redirect lists into IIS URL Rewrite configuration

use anyhow::Result;
use std::process::ExitCode;

fn main() -> Result<ExitCode> {
    csv_iis_rewrite::cli::run()
}
