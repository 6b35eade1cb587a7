//! # copyjobs - Manifest-Driven File Copier
//!
//! Copies a flat, explicit list of files declared in an XML manifest.
//!
//! The pipeline is small and linear: the manifest is parsed into raw
//! entries, each entry is validated into a copy job, and jobs are copied
//! one at a time with progress on the terminal. Everything of note lands
//! in the run log as well as on stderr.

// Module declarations
pub mod config;
pub mod types;
pub mod logger;
pub mod manifest;
pub mod validate;
pub mod executor;
pub mod ui;
pub mod commands;

// Re-export commonly used types
pub use types::{AbortReason, CopyError, CopyJob, RawFileEntry, RunOutcome, RunStats};
pub use config::{Cli, Config};
pub use logger::RunLog;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
