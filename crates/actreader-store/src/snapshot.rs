//! JSON catalogue snapshots
//!
//! A snapshot file holds the provider facts of one or more modules:
//!
//! ```json
//! { "modules": [ { "name": "Acme.Activities.dll", "classes": [ ... ] } ] }
//! ```

use crate::atomic::atomic_write;
use crate::errors::{io_error, serialization, snapshot_parse, Result};
use actreader_core::catalogue::MetadataProvider;
use actreader_core::errors::ExError;
use actreader_core::model::ModuleFacts;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// File extension of snapshot files, compared case-insensitively
pub const SNAPSHOT_EXTENSION: &str = "json";

/// Top-level snapshot document
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapshotDocument {
    #[serde(default)]
    pub modules: Vec<ModuleFacts>,
}

/// Whether `path` names a snapshot file by its extension
pub fn is_snapshot_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case(SNAPSHOT_EXTENSION))
}

/// Parse and validate snapshot JSON
///
/// # Errors
///
/// Returns `InvalidSnapshot` if the text is not snapshot JSON or a module
/// or class has an empty name.
pub fn parse_snapshot(content: &str, origin: &Path) -> Result<SnapshotDocument> {
    let document: SnapshotDocument =
        serde_json::from_str(content).map_err(|e| snapshot_parse(origin, &e.to_string()))?;

    for module in &document.modules {
        if module.name.trim().is_empty() {
            return Err(snapshot_parse(origin, "module name is empty"));
        }
        if let Some(pos) = module.classes.iter().position(|c| c.full_name.is_empty()) {
            return Err(snapshot_parse(
                origin,
                &format!("class #{} of module {} has an empty name", pos, module.name),
            ));
        }
    }

    Ok(document)
}

/// Read and parse a snapshot file
///
/// # Errors
///
/// Returns `Io` if the file cannot be read and `InvalidSnapshot` if it does
/// not parse.
pub fn load_snapshot(path: &Path) -> Result<SnapshotDocument> {
    let content = fs::read_to_string(path).map_err(|e| io_error("load_snapshot", path, e))?;
    parse_snapshot(&content, path)
}

/// Write a snapshot file as pretty-printed JSON
///
/// # Errors
///
/// Returns `Serialization` or `Io` on failure.
pub fn save_snapshot(path: &Path, document: &SnapshotDocument) -> Result<()> {
    let content = serde_json::to_string_pretty(document)
        .map_err(|e| serialization("save_snapshot", &e.to_string()))?;
    atomic_write(path, content.as_bytes())
}

/// Metadata provider backed by one snapshot file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonSnapshotProvider {
    path: PathBuf,
}

impl JsonSnapshotProvider {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl MetadataProvider for JsonSnapshotProvider {
    fn source(&self) -> String {
        self.path.display().to_string()
    }

    fn modules(&self) -> std::result::Result<Vec<ModuleFacts>, ExError> {
        load_snapshot(&self.path).map(|document| document.modules)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actreader_core::errors::ExErrorKind;

    #[test]
    fn test_extension_check_ignores_case() {
        assert!(is_snapshot_file(Path::new("old/Acme.Activities.1.2.0.JSON")));
        assert!(!is_snapshot_file(Path::new("old/Acme.Activities.1.2.0.nupkg")));
        assert!(!is_snapshot_file(Path::new("README")));
    }

    #[test]
    fn test_parse_rejects_empty_module_name() {
        let err = parse_snapshot(r#"{"modules":[{"name":" "}]}"#, Path::new("x.json")).unwrap_err();
        assert_eq!(err.kind(), ExErrorKind::InvalidSnapshot);
        assert_eq!(err.path(), Some("x.json"));
    }

    #[test]
    fn test_parse_rejects_empty_class_name() {
        let err = parse_snapshot(
            r#"{"modules":[{"name":"A.dll","classes":[{"full_name":""}]}]}"#,
            Path::new("x.json"),
        )
        .unwrap_err();
        assert!(err.message().contains("empty name"));
    }

    #[test]
    fn test_parse_missing_modules_is_empty() {
        let document = parse_snapshot("{}", Path::new("x.json")).unwrap();
        assert!(document.modules.is_empty());
    }
}
