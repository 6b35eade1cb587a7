//! Error types for copyjobs operations

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during a copy run
#[derive(Error, Debug)]
pub enum CopyError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Configuration file not found: {path}")]
    ConfigNotFound { path: PathBuf },

    #[error("Configuration file is not valid XML: {path}: {reason}")]
    ConfigMalformed { path: PathBuf, reason: String },

    #[error("Failed to copy {path}: {source}")]
    CopyFailed { path: PathBuf, source: io::Error },
}
