//! Entry validation: raw manifest entries become runnable copy jobs

use std::ffi::OsStr;
use std::fs::{self, File};
use std::path::Path;

use crate::logger::RunLog;
use crate::types::{CopyJob, RawFileEntry};

/// Check every entry and keep the ones that can actually run.
///
/// Rejected entries are logged and dropped; the survivors keep their
/// manifest order.
pub fn validate_entries(entries: &[RawFileEntry], log: &RunLog) -> Vec<CopyJob> {
    entries
        .iter()
        .filter_map(|entry| validate_entry(entry, log))
        .collect()
}

/// Check one entry; `Some` means every precondition holds and the
/// destination directory exists.
pub fn validate_entry(entry: &RawFileEntry, log: &RunLog) -> Option<CopyJob> {
    let (name, source_path, destination_path) = match required_fields(entry) {
        Some(fields) => fields,
        None => {
            log.error(&format!(
                "Skipping entry with missing parameters - {entry}"
            ));
            return None;
        }
    };

    if !is_base_name(name) {
        log.error(&format!(
            "Skipping entry whose name is not a plain file name - {entry}"
        ));
        return None;
    }

    let job = CopyJob::new(name, source_path, destination_path);

    if !source_file_readable(&job) {
        log.error(&format!(
            "Skipping entry whose source can't be read - {entry}"
        ));
        return None;
    }

    if !destination_writable(&job.destination_path) {
        log.error(&format!(
            "Skipping entry whose destination isn't writable - {entry}"
        ));
        return None;
    }

    Some(job)
}

// An empty tag counts as missing, same as an absent one.
fn required_fields(entry: &RawFileEntry) -> Option<(&str, &str, &str)> {
    let name = non_empty(entry.name.as_deref())?;
    let source_path = non_empty(entry.source_path.as_deref())?;
    let destination_path = non_empty(entry.destination_path.as_deref())?;

    Some((name, source_path, destination_path))
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    match value {
        Some(v) if !v.is_empty() => Some(v),
        _ => None,
    }
}

/// A usable name is a single path component; separators and parent
/// traversal disqualify it.
fn is_base_name(name: &str) -> bool {
    Path::new(name).file_name() == Some(OsStr::new(name))
}

fn source_file_readable(job: &CopyJob) -> bool {
    job.source_path.is_dir() && File::open(job.source_file_path()).is_ok()
}

/// A missing destination directory is created on the spot. An existing
/// one is probed with an anonymous temp file, which the OS removes on
/// drop.
fn destination_writable(path: &Path) -> bool {
    if !path.is_dir() {
        fs::create_dir_all(path).is_ok()
    } else {
        tempfile::tempfile_in(path).is_ok()
    }
}
