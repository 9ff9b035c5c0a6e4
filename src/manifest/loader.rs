//! INFO manifest loading and lookup
//!
//! The top level is parsed loosely (name → raw JSON value) and only the
//! requested entry is deserialized into [`ArchiveEntry`]. A malformed entry
//! under some other key therefore cannot poison an unrelated run, while a
//! malformed or missing requested entry is fatal.

use std::collections::HashMap;
use std::fs;
use std::path::Path;
use tracing::debug;

use super::types::ArchiveEntry;
use crate::utils::ManifestError;

/// A loaded INFO manifest
#[derive(Debug, Clone)]
pub struct Manifest {
    entries: HashMap<String, serde_json::Value>,
}

/// Load and parse the INFO manifest from `path`
pub fn load(path: &Path) -> Result<Manifest, ManifestError> {
    let content = fs::read_to_string(path).map_err(|e| ManifestError::Read {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;

    let entries: HashMap<String, serde_json::Value> =
        serde_json::from_str(&content).map_err(|e| ManifestError::Parse {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

    debug!("loaded manifest {} ({} entries)", path.display(), entries.len());
    Ok(Manifest { entries })
}

impl Manifest {
    /// Look up one archive entry by source directory name
    pub fn entry(&self, name: &str) -> Result<ArchiveEntry, ManifestError> {
        let value = self
            .entries
            .get(name)
            .ok_or_else(|| ManifestError::UnknownSource {
                name: name.to_string(),
            })?;

        serde_json::from_value(value.clone()).map_err(|e| ManifestError::MalformedEntry {
            name: name.to_string(),
            message: e.to_string(),
        })
    }

    /// Number of archive entries in the manifest
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the manifest has no entries at all
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn manifest_from(json: &str) -> Manifest {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();
        load(file.path()).unwrap()
    }

    #[test]
    fn looks_up_entry_by_name() {
        let manifest = manifest_from(
            r#"{"20240101": {"services": [{"display_name": "DSM", "service": "system_default"}]}}"#,
        );
        let entry = manifest.entry("20240101").unwrap();
        assert_eq!(entry.services.len(), 1);
        assert_eq!(entry.services[0].display_name, "DSM");
    }

    #[test]
    fn unknown_name_is_an_error() {
        let manifest = manifest_from(r#"{"20240101": {"services": []}}"#);
        let err = manifest.entry("20990101").unwrap_err();
        assert!(matches!(err, ManifestError::UnknownSource { .. }));
    }

    #[test]
    fn malformed_sibling_entry_does_not_poison_lookup() {
        let manifest = manifest_from(
            r#"{"good": {"services": []}, "bad": {"services": "not-a-list"}}"#,
        );
        assert!(manifest.entry("good").is_ok());
        assert!(matches!(
            manifest.entry("bad").unwrap_err(),
            ManifestError::MalformedEntry { .. }
        ));
    }

    #[test]
    fn invalid_json_is_a_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"{not json").unwrap();
        let err = load(file.path()).unwrap_err();
        assert!(matches!(err, ManifestError::Parse { .. }));
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let err = load(Path::new("/nonexistent/INFO")).unwrap_err();
        assert!(matches!(err, ManifestError::Read { .. }));
    }
}
