//! Validated copy job ready for execution

use std::path::PathBuf;

/// A fully validated unit of work: one file to copy from a source
/// directory into a destination directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyJob {
    /// Base file name, a single path component
    pub name: String,
    /// Directory the file is read from
    pub source_path: PathBuf,
    /// Directory the file is written to
    pub destination_path: PathBuf,
}

impl CopyJob {
    pub fn new(
        name: impl Into<String>,
        source_path: impl Into<PathBuf>,
        destination_path: impl Into<PathBuf>,
    ) -> Self {
        Self {
            name: name.into(),
            source_path: source_path.into(),
            destination_path: destination_path.into(),
        }
    }

    /// Full path of the file to read
    pub fn source_file_path(&self) -> PathBuf {
        self.source_path.join(&self.name)
    }

    /// Full path the file is written to
    pub fn destination_file_path(&self) -> PathBuf {
        self.destination_path.join(&self.name)
    }
}
