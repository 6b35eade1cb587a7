//! Raw manifest entry as parsed from the config file

use std::fmt;

/// A single `<file>` element lifted out of the manifest, before validation.
///
/// Every field is optional because the manifest may omit or leave any of
/// them empty. An absent tag parses to `None`, a present-but-empty tag to
/// `Some("")`. Validation tells the two apart from usable values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawFileEntry {
    /// Base name of the file to copy
    pub name: Option<String>,
    /// Directory the file is copied from
    pub source_path: Option<String>,
    /// Directory the file is copied to
    pub destination_path: Option<String>,
}

impl fmt::Display for RawFileEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn field(value: &Option<String>) -> String {
            match value {
                Some(v) => format!("\"{v}\""),
                None => "<missing>".to_owned(),
            }
        }

        write!(
            f,
            "name: {}, source_path: {}, destination_path: {}",
            field(&self.name),
            field(&self.source_path),
            field(&self.destination_path)
        )
    }
}
