//! Manifest parsing for copyjobs
//!
//! The manifest is an XML file listing one `<file>` element per copy job:
//!
//! ```xml
//! <files>
//!     <file>
//!         <name>example.txt</name>
//!         <source_path>/data/in</source_path>
//!         <destination_path>/data/out</destination_path>
//!     </file>
//! </files>
//! ```
//!
//! Parsing is deliberately permissive. Unknown tags are ignored, the root
//! element name is not checked, and missing or empty fields are carried
//! through as-is for validation to reject later.

use std::fs;
use std::io;
use std::path::Path;

use crate::logger::RunLog;
use crate::types::{CopyError, RawFileEntry};

/// Read and parse the manifest at `path`.
///
/// A file that is empty or whitespace-only parses to an empty entry list.
/// Read and parse failures are logged before being returned.
pub fn load(path: &Path, log: &RunLog) -> Result<Vec<RawFileEntry>, CopyError> {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == io::ErrorKind::InvalidData => {
            let err = CopyError::ConfigMalformed {
                path: path.to_path_buf(),
                reason: "content is not valid UTF-8".to_owned(),
            };
            log.error(&err.to_string());
            return Err(err);
        }
        Err(_) => {
            let err = CopyError::ConfigNotFound {
                path: path.to_path_buf(),
            };
            log.error(&err.to_string());
            return Err(err);
        }
    };

    if text.trim().is_empty() {
        return Ok(Vec::new());
    }

    let document = match roxmltree::Document::parse(&text) {
        Ok(document) => document,
        Err(err) => {
            let err = CopyError::ConfigMalformed {
                path: path.to_path_buf(),
                reason: err.to_string(),
            };
            log.error(&err.to_string());
            return Err(err);
        }
    };

    Ok(collect_entries(&document))
}

fn collect_entries(document: &roxmltree::Document<'_>) -> Vec<RawFileEntry> {
    document
        .root_element()
        .children()
        .filter(|node| node.has_tag_name("file"))
        .map(entry_from_node)
        .collect()
}

// Later duplicates of a tag overwrite earlier ones.
fn entry_from_node(node: roxmltree::Node<'_, '_>) -> RawFileEntry {
    let mut entry = RawFileEntry::default();

    for child in node.children().filter(|child| child.is_element()) {
        let value = Some(child.text().unwrap_or("").to_owned());
        match child.tag_name().name() {
            "name" => entry.name = value,
            "source_path" => entry.source_path = value,
            "destination_path" => entry.destination_path = value,
            _ => {}
        }
    }

    entry
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::{tempdir, TempDir};

    fn write_manifest(dir: &TempDir, contents: &str) -> PathBuf {
        let path = dir.path().join("config.xml");
        fs::write(&path, contents).expect("Failed to write manifest");
        path
    }

    fn test_log(dir: &TempDir) -> RunLog {
        RunLog::create(&dir.path().join("test.log")).expect("Failed to create log")
    }

    #[test]
    fn test_load_returns_entries_in_document_order() {
        let dir = tempdir().expect("Failed to create temp directory");
        let path = write_manifest(
            &dir,
            r#"<?xml version="1.0"?>
<files>
    <file>
        <name>first.txt</name>
        <source_path>/in</source_path>
        <destination_path>/out</destination_path>
    </file>
    <file>
        <name>second.txt</name>
        <source_path>/in</source_path>
        <destination_path>/out</destination_path>
    </file>
</files>"#,
        );
        let log = test_log(&dir);

        let entries = load(&path, &log).expect("Failed to load manifest");

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].name.as_deref(), Some("first.txt"));
        assert_eq!(entries[1].name.as_deref(), Some("second.txt"));
        assert_eq!(entries[0].source_path.as_deref(), Some("/in"));
        assert_eq!(entries[0].destination_path.as_deref(), Some("/out"));
    }

    #[test]
    fn test_load_missing_file_is_not_found() {
        let dir = tempdir().expect("Failed to create temp directory");
        let log = test_log(&dir);

        let result = load(&dir.path().join("absent.xml"), &log);

        assert!(matches!(result, Err(CopyError::ConfigNotFound { .. })));
    }

    #[test]
    fn test_load_malformed_xml_is_rejected() {
        let dir = tempdir().expect("Failed to create temp directory");
        let path = write_manifest(&dir, "<?xml version=\"1.0\"?>\n\n    <");
        let log = test_log(&dir);

        let result = load(&path, &log);

        assert!(matches!(result, Err(CopyError::ConfigMalformed { .. })));
    }

    #[test]
    fn test_load_whitespace_only_is_empty() {
        let dir = tempdir().expect("Failed to create temp directory");
        let path = write_manifest(&dir, " ");
        let log = test_log(&dir);

        let entries = load(&path, &log).expect("Failed to load manifest");

        assert!(entries.is_empty());
    }

    #[test]
    fn test_load_empty_file_is_empty() {
        let dir = tempdir().expect("Failed to create temp directory");
        let path = write_manifest(&dir, "");
        let log = test_log(&dir);

        let entries = load(&path, &log).expect("Failed to load manifest");

        assert!(entries.is_empty());
    }

    #[test]
    fn test_load_without_file_elements_is_empty() {
        let dir = tempdir().expect("Failed to create temp directory");
        let path = write_manifest(&dir, "<files><other>x</other></files>");
        let log = test_log(&dir);

        let entries = load(&path, &log).expect("Failed to load manifest");

        assert!(entries.is_empty());
    }

    #[test]
    fn test_unknown_tags_inside_file_are_ignored() {
        let dir = tempdir().expect("Failed to create temp directory");
        let path = write_manifest(
            &dir,
            "<files><file><name>a.txt</name><checksum>beef</checksum></file></files>",
        );
        let log = test_log(&dir);

        let entries = load(&path, &log).expect("Failed to load manifest");

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].name.as_deref(), Some("a.txt"));
        assert_eq!(entries[0].source_path, None);
    }

    #[test]
    fn test_empty_element_differs_from_absent_element() {
        let dir = tempdir().expect("Failed to create temp directory");
        let path = write_manifest(
            &dir,
            "<files><file><name></name><source_path>/in</source_path></file></files>",
        );
        let log = test_log(&dir);

        let entries = load(&path, &log).expect("Failed to load manifest");

        assert_eq!(entries[0].name.as_deref(), Some(""));
        assert_eq!(entries[0].destination_path, None);
    }

    #[test]
    fn test_duplicate_tag_keeps_last_value() {
        let dir = tempdir().expect("Failed to create temp directory");
        let path = write_manifest(
            &dir,
            "<files><file><name>old.txt</name><name>new.txt</name></file></files>",
        );
        let log = test_log(&dir);

        let entries = load(&path, &log).expect("Failed to load manifest");

        assert_eq!(entries[0].name.as_deref(), Some("new.txt"));
    }

    #[test]
    fn test_root_element_name_is_not_checked() {
        let dir = tempdir().expect("Failed to create temp directory");
        let path = write_manifest(
            &dir,
            "<anything><file><name>a.txt</name></file></anything>",
        );
        let log = test_log(&dir);

        let entries = load(&path, &log).expect("Failed to load manifest");

        assert_eq!(entries.len(), 1);
    }
}
