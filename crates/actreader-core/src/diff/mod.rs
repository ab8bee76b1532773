//! Two-level ordered merge-diff of catalogues.
//!
//! Compares two [`crate::catalogue::Catalogue`]s class by class, then each
//! matching class pair property by property, and reports every observation
//! to a [`DiffSink`] as a [`DiffEvent`].
//!
//! ## Entry point
//!
//! ```
//! use actreader_core::catalogue::Catalogue;
//! use actreader_core::diff::{ClassComparator, EventLog, TypeSensitivity};
//!
//! let old = Catalogue::default();
//! let new = Catalogue::default();
//! let mut log = EventLog::default();
//! let differences = ClassComparator::new(TypeSensitivity::TypedLoose)
//!     .compare_catalogues(&old, &new, &mut log);
//! assert_eq!(differences, 0);
//! ```
//!
//! ## Guarantees
//!
//! - **Order**: events arrive in ordinal order of class simple name, and
//!   within a class pair in ordinal order of property display name.
//! - **Completeness**: every accessible class of either side appears in
//!   exactly one class-level event or one matched pair.
//! - **Determinism**: identical inputs produce identical event sequences.

pub mod console_report;
pub mod engine;
pub mod model;

pub use console_report::ConsoleReport;
pub use engine::ClassComparator;
pub use model::{DiffEvent, DiffRecord, DiffSink, EventLog, TypeSensitivity};
