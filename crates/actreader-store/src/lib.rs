//! ActReader Store - file-backed collaborators of the core
//!
//! Provides:
//! - YAML settings file loading with first-run creation
//! - JSON catalogue snapshots and the snapshot metadata provider
//! - Pairing of snapshot files across two directories
//! - Wildcard expansion of command-line paths

pub mod atomic;
pub mod errors;
pub mod expand;
pub mod pairing;
pub mod settings;
pub mod snapshot;

// Re-export key types
pub use errors::Result;
pub use pairing::{pair_directories, FilePairing};
pub use settings::{default_settings_path, load_or_create_settings, load_settings};
pub use snapshot::{JsonSnapshotProvider, SnapshotDocument};
