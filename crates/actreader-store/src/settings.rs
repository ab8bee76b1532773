//! Settings file loading
//!
//! The settings file is YAML in the layout of
//! [`actreader_core::settings::Settings`]. By default it lives in the
//! user's local data directory and is created with the built-in defaults
//! on first use.

use crate::atomic::atomic_write;
use crate::errors::{config_parse, io_error, serialization, Result};
use actreader_core::settings::Settings;
use std::fs;
use std::path::{Path, PathBuf};

const VENDOR_DIR: &str = "UiPathTeam";
const APP_DIR: &str = "ActivityReader";
const FILE_NAME: &str = "configuration.yml";

/// `<local data dir>/UiPathTeam/ActivityReader/configuration.yml`
///
/// Falls back to the working directory when the platform reports no local
/// data directory.
pub fn default_settings_path() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(VENDOR_DIR)
        .join(APP_DIR)
        .join(FILE_NAME)
}

/// Parse settings from YAML text
///
/// # Errors
///
/// Returns `InvalidConfig` if the text is not a valid settings document.
pub fn parse_settings(content: &str, origin: &Path) -> Result<Settings> {
    // An empty file is a document with every section defaulted.
    if content.trim().is_empty() {
        return Ok(Settings::default());
    }
    serde_yaml::from_str(content).map_err(|e| config_parse(origin, &e.to_string()))
}

/// Read and parse a settings file
///
/// # Errors
///
/// Returns `Io` if the file cannot be read and `InvalidConfig` if it does
/// not parse.
pub fn load_settings(path: &Path) -> Result<Settings> {
    let content = fs::read_to_string(path).map_err(|e| io_error("load_settings", path, e))?;
    parse_settings(&content, path)
}

/// Write settings as YAML
///
/// # Errors
///
/// Returns `Serialization` if the settings cannot be rendered and `Io` if
/// the file cannot be written.
pub fn save_settings(path: &Path, settings: &Settings) -> Result<()> {
    let content =
        serde_yaml::to_string(settings).map_err(|e| serialization("save_settings", &e.to_string()))?;
    atomic_write(path, content.as_bytes())
}

/// Load settings, creating the file with defaults when it does not exist
///
/// Never fails: a file that cannot be created, read or parsed is logged at
/// error level and the built-in defaults are used.
pub fn load_or_create_settings(path: &Path) -> Settings {
    if !path.exists() {
        let defaults = Settings::default();
        if let Err(err) = save_settings(path, &defaults) {
            tracing::error!(
                path = %path.display(),
                err_code = err.code(),
                error = %err,
                "failed to create settings file"
            );
        }
        return defaults;
    }

    match load_settings(path) {
        Ok(settings) => {
            tracing::debug!(path = %path.display(), "settings loaded");
            settings
        }
        Err(err) => {
            tracing::error!(
                path = %path.display(),
                err_code = err.code(),
                error = %err,
                "failed to load settings, using defaults"
            );
            Settings::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_path_ends_with_app_file() {
        let path = default_settings_path();
        assert!(path.ends_with("UiPathTeam/ActivityReader/configuration.yml"));
    }

    #[test]
    fn test_parse_settings_yaml_layout() {
        let yaml = "\
ClassRecord:
  ActivityClasses:
    - Acme.Root
TypeString:
  Namespaces:
    - Acme
    - Acme.Collections
";
        let settings = parse_settings(yaml, Path::new("inline")).unwrap();
        assert!(settings.activity_roots().contains("Acme.Root"));
        assert_eq!(settings.namespaces().len(), 2);
    }

    #[test]
    fn test_parse_empty_document_is_default() {
        let settings = parse_settings("  \n", Path::new("inline")).unwrap();
        assert_eq!(settings, Settings::default());
    }
}
