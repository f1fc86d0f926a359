// Mon Oct 19 2026 - Alex

use std::path::PathBuf;
use thiserror::Error;

/// Failure modes of `Command::run`. Any of these maps to exit status 1.
#[derive(Error, Debug)]
pub enum CommandError {
    #[error("help requested")]
    ShowHelp,
    #[error("invalid arguments: {0}")]
    InvalidArguments(String),
    #[error(transparent)]
    Backend(#[from] BackendError),
}

#[derive(Error, Debug)]
pub enum UiError {
    #[error("end of input reached before a line was read")]
    EndOfInput,
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Error, Debug)]
pub enum BackendError {
    #[error("input file not found: {0:?}")]
    InputNotFound(PathBuf),
    #[error("file already exists: {0:?} (use --force to overwrite)")]
    AlreadyExists(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
