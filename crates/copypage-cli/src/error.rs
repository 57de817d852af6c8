//! Error type for the command-line front end.

use std::io;
use std::path::PathBuf;

use crate::clipboard::ClipboardError;

pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("Failed to read {}: {source}", .path.display())]
    ReadInput { path: PathBuf, source: io::Error },

    #[error("Failed to read standard input: {0}")]
    ReadStdin(io::Error),

    #[error("Failed to read config {}: {source}", .path.display())]
    ReadConfig { path: PathBuf, source: io::Error },

    #[error("Invalid config {}: {source}", .path.display())]
    InvalidConfig {
        path: PathBuf,
        source: copypage::CopyPageError,
    },

    #[error("Failed to write {}: {source}", .path.display())]
    WriteOutput { path: PathBuf, source: io::Error },

    #[error(transparent)]
    Clipboard(#[from] ClipboardError),
}
