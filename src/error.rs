//! Configuration errors that abort a run before anything is written

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RewriteError {
    #[error("Passed in CSV file path `{}` does not exist (or you don't have access).", .0.display())]
    CsvNotFound(PathBuf),

    #[error("Passed in output directory `{}` does not exist (or you don't have access).", .0.display())]
    OutputDirNotFound(PathBuf),

    #[error("Invalid config file {path}: {message}")]
    InvalidConfig { path: PathBuf, message: String },
}
