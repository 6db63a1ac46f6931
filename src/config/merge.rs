//! Merge command-line overrides with file configuration

use super::FileConfig;
use crate::domain::ExecutionConfig;
use std::path::PathBuf;

/// Values taken from the command line. `None`/`false` means "not given".
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub csv_path: Option<PathBuf>,
    pub output_directory: Option<PathBuf>,
    pub separate_config_files: bool,
    pub catch_all_url: Option<String>,
}

/// Build the run configuration. Returns `None` when the CSV path or the output
/// directory is missing.
pub fn merge_cli_with_config(file: FileConfig, cli: CliOverrides) -> Option<ExecutionConfig> {
    let csv_path = cli.csv_path.filter(|p| !p.as_os_str().is_empty())?;
    let output_directory = cli.output_directory.filter(|p| !p.as_os_str().is_empty())?;

    let catch_all_destination_url =
        cli.catch_all_url.or(file.catch_all_url).filter(|url| !url.is_empty());

    Some(ExecutionConfig {
        csv_path,
        output_directory,
        separate_config_files: cli.separate_config_files || file.separate_config_files,
        catch_all_destination_url,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn overrides() -> CliOverrides {
        CliOverrides {
            csv_path: Some(PathBuf::from("in.csv")),
            output_directory: Some(PathBuf::from("out")),
            ..CliOverrides::default()
        }
    }

    #[test]
    fn test_requires_csv_and_output() {
        assert!(merge_cli_with_config(FileConfig::default(), CliOverrides::default()).is_none());

        let mut cli = overrides();
        cli.output_directory = None;
        assert!(merge_cli_with_config(FileConfig::default(), cli).is_none());

        let mut cli = overrides();
        cli.csv_path = Some(PathBuf::new());
        assert!(merge_cli_with_config(FileConfig::default(), cli).is_none());
    }

    #[test]
    fn test_defaults() {
        let cfg = merge_cli_with_config(FileConfig::default(), overrides()).expect("config");
        assert_eq!(cfg.csv_path, PathBuf::from("in.csv"));
        assert_eq!(cfg.output_directory, PathBuf::from("out"));
        assert!(!cfg.separate_config_files);
        assert!(cfg.catch_all_destination_url.is_none());
    }

    #[test]
    fn test_cli_wins_over_file() {
        let file = FileConfig {
            separate_config_files: false,
            catch_all_url: Some("http://file.com".into()),
        };
        let mut cli = overrides();
        cli.catch_all_url = Some("http://cli.com".into());
        cli.separate_config_files = true;

        let cfg = merge_cli_with_config(file, cli).expect("config");
        assert_eq!(cfg.catch_all_destination_url.as_deref(), Some("http://cli.com"));
        assert!(cfg.separate_config_files);
    }

    #[test]
    fn test_file_fills_gaps() {
        let file = FileConfig {
            separate_config_files: true,
            catch_all_url: Some("http://file.com".into()),
        };
        let cfg = merge_cli_with_config(file, overrides()).expect("config");
        assert_eq!(cfg.catch_all_destination_url.as_deref(), Some("http://file.com"));
        assert!(cfg.separate_config_files);
    }

    #[test]
    fn test_empty_catch_all_is_unset() {
        let mut cli = overrides();
        cli.catch_all_url = Some(String::new());
        let cfg = merge_cli_with_config(FileConfig::default(), cli).expect("config");
        assert!(cfg.catch_all_destination_url.is_none());
    }
}
