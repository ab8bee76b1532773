//! ActReader Core - catalogue model, diff engine and type-name simplifier
//!
//! This crate holds everything that does not touch the filesystem:
//! - Catalogue of classes with inheritance-aware property resolution
//! - Two-level ordered merge-diff driven through a sink protocol
//! - Grammar-driven simplification of qualified generic type names
//! - Console report and catalogue listing renderers
//! - Settings model, error facility and logging facility
//!
//! Reading settings files and catalogue snapshots lives in `actreader-store`.

pub mod catalogue;
pub mod diff;
pub mod errors;
pub mod logging_facility;
pub mod model;
pub mod render;
pub mod settings;
pub mod typename;

pub use actreader_core_types::schema;

// Re-export commonly used types
pub use catalogue::{Catalogue, MetadataProvider, PopulateReport};
pub use diff::{ClassComparator, ConsoleReport, DiffEvent, DiffSink, EventLog, TypeSensitivity};
pub use errors::{ActReaderError, ExError, ExErrorKind, Result, TypeNameError};
pub use model::{ClassEntry, ClassFacts, ModuleFacts, PropertyEntry, PropertyFacts};
pub use settings::{ActivityRoots, Settings};
pub use typename::TypeNameSimplifier;
