//! File copy execution

use std::fs;
use std::path::Path;

use indicatif::HumanBytes;

use crate::logger::RunLog;
use crate::types::{CopyError, CopyJob};

/// Copy a job's file into its destination directory.
///
/// Returns the number of bytes copied. An existing destination file is
/// overwritten. Failures are logged before being returned.
pub fn copy_job(job: &CopyJob, log: &RunLog) -> Result<u64, CopyError> {
    let source = job.source_file_path();
    let destination = job.destination_file_path();

    let bytes = match fs::copy(&source, &destination) {
        Ok(bytes) => bytes,
        Err(err) => {
            let err = CopyError::CopyFailed {
                path: source,
                source: err,
            };
            log.error(&err.to_string());
            return Err(err);
        }
    };

    preserve_mtime(&source, &destination);

    log.info(&format!(
        "Copied {} -> {} ({})",
        source.display(),
        destination.display(),
        HumanBytes(bytes)
    ));

    Ok(bytes)
}

// Best-effort timestamp carry-over; the data is already on disk when
// this runs.
fn preserve_mtime(source: &Path, destination: &Path) {
    if let Ok(metadata) = fs::metadata(source) {
        if let Ok(modified) = metadata.modified() {
            let mtime = filetime::FileTime::from_system_time(modified);
            let _ = filetime::set_file_mtime(destination, mtime);
        }
    }
}
