//! The CSV -> IIS configuration pipeline

use anyhow::Result;
use std::process::ExitCode;

use super::utils::{write, write_error};
use super::{Cli, USAGE};
use crate::aggregate::aggregate_csv;
use crate::config::{load_config, merge_cli_with_config};
use crate::domain::ExecutionConfig;
use crate::error::RewriteError;
use crate::render::{build_rules, partition, write_documents};

pub fn run(cli: &Cli) -> Result<ExitCode> {
    match generate(cli) {
        Ok(code) => Ok(code),
        Err(err) => match err.downcast_ref::<RewriteError>() {
            Some(config_err) => {
                write_error(&config_err.to_string());
                Ok(ExitCode::FAILURE)
            }
            None => Err(err),
        },
    }
}

fn generate(cli: &Cli) -> Result<ExitCode> {
    let cwd = std::env::current_dir()?;
    let file_config = load_config(&cwd, cli.config.as_deref())?;

    let Some(config) = merge_cli_with_config(file_config, cli.overrides()) else {
        write(USAGE);
        return Ok(ExitCode::SUCCESS);
    };
    tracing::debug!("Execution config: {:?}", config);

    validate_paths(&config)?;

    let aggregation = aggregate_csv(&config)?;
    for row in &aggregation.skipped {
        write_error(&format!("Line {} contains fewer than 2 columns: {}", row.line, row.raw));
    }

    if aggregation.map.is_empty() {
        write_error("No redirects were found.");
        return Ok(ExitCode::SUCCESS);
    }

    let rule_set = build_rules(&aggregation.map, &config);
    for domain in &rule_set.skipped_domains {
        write(&format!("No redirects were found for the domain {}.", domain));
    }

    if rule_set.is_empty() {
        write_error("No redirects were found.");
        return Ok(ExitCode::SUCCESS);
    }

    let domain_rules = rule_set.domain_rules;
    let documents = partition(rule_set, config.separate_config_files);
    write_documents(&config.output_directory, &documents, |path| {
        write(&format!("Writing {}", path.display()));
    })?;

    tracing::info!(
        "Wrote {} rules for {} redirects ({} rows ignored, {} pointed at the catch-all)",
        domain_rules,
        aggregation.map.redirect_count(),
        aggregation.ignored,
        aggregation.excluded_catch_all
    );

    Ok(ExitCode::SUCCESS)
}

/// Both paths must exist before anything is read or written.
fn validate_paths(config: &ExecutionConfig) -> Result<(), RewriteError> {
    if !config.csv_path.is_file() {
        return Err(RewriteError::CsvNotFound(config.csv_path.clone()));
    }
    if !config.output_directory.is_dir() {
        return Err(RewriteError::OutputDirNotFound(config.output_directory.clone()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn config(csv_path: PathBuf, output_directory: PathBuf) -> ExecutionConfig {
        ExecutionConfig {
            csv_path,
            output_directory,
            separate_config_files: false,
            catch_all_destination_url: None,
        }
    }

    #[test]
    fn test_validate_missing_csv() {
        let tmp = TempDir::new().expect("tmp");
        let cfg = config(tmp.path().join("missing.csv"), tmp.path().to_path_buf());
        assert!(matches!(validate_paths(&cfg), Err(RewriteError::CsvNotFound(_))));
    }

    #[test]
    fn test_validate_missing_output_dir() {
        let tmp = TempDir::new().expect("tmp");
        let csv = tmp.path().join("in.csv");
        fs::write(&csv, "").expect("write");
        let cfg = config(csv, tmp.path().join("missing"));
        let err = validate_paths(&cfg).expect_err("missing dir");
        assert!(err.to_string().starts_with("Passed in output directory `"));
    }

    #[test]
    fn test_validate_ok() {
        let tmp = TempDir::new().expect("tmp");
        let csv = tmp.path().join("in.csv");
        fs::write(&csv, "").expect("write");
        assert!(validate_paths(&config(csv, tmp.path().to_path_buf())).is_ok());
    }
}
