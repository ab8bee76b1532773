//! Error handling for actreader-store
//!
//! Wraps actreader-core ExError with store-specific helpers

use actreader_core::errors::{ExError, ExErrorKind};
use std::path::Path;

/// Result type alias using ExError
pub type Result<T> = std::result::Result<T, ExError>;

/// Create an IO error for an operation on a file
pub fn io_error(operation: &str, path: &Path, err: std::io::Error) -> ExError {
    ExError::new(ExErrorKind::Io)
        .with_op(operation.to_string())
        .with_path(path.display().to_string())
        .with_message(err.to_string())
}

/// Create a settings parse error
pub fn config_parse(path: &Path, reason: &str) -> ExError {
    ExError::new(ExErrorKind::InvalidConfig)
        .with_op("load_settings")
        .with_path(path.display().to_string())
        .with_message(format!("Settings parse error: {}", reason))
}

/// Create a snapshot parse error
pub fn snapshot_parse(path: &Path, reason: &str) -> ExError {
    ExError::new(ExErrorKind::InvalidSnapshot)
        .with_op("load_snapshot")
        .with_path(path.display().to_string())
        .with_message(format!("Snapshot parse error: {}", reason))
}

/// Create an error for a path that is not a snapshot file
pub fn unsupported_input(path: &Path) -> ExError {
    ExError::new(ExErrorKind::UnsupportedInput)
        .with_path(path.display().to_string())
        .with_message("Unsupported file type.")
}

/// Create a serialization error
pub fn serialization(operation: &str, reason: &str) -> ExError {
    ExError::new(ExErrorKind::Serialization)
        .with_op(operation.to_string())
        .with_message(reason.to_string())
}
