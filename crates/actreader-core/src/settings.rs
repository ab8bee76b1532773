//! Configuration model
//!
//! Holds the two lists a diff or listing run depends on: the root activity
//! base classes and the well-known namespaces dropped from type names. The
//! serialized shape is the `configuration.yml` layout:
//!
//! ```yaml
//! ClassRecord:
//!   ActivityClasses:
//!     - System.Activities.Activity
//! TypeString:
//!   Namespaces:
//!     - System
//! ```
//!
//! Values are threaded into [`crate::catalogue::Catalogue::new`] and
//! [`crate::typename::TypeNameSimplifier::new`]; nothing here is global.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Built-in root activity base classes
pub const DEFAULT_ACTIVITY_CLASS_NAMES: &[&str] = &[
    "System.Activities.Activity",
    "System.Activities.CodeActivity",
    "System.Activities.AsyncCodeActivity",
    "System.Activities.NativeActivity",
];

/// Built-in well-known namespaces
pub const DEFAULT_NAMESPACES: &[&str] = &[
    "System",
    "System.Activities",
    "System.Collections.Generic",
    "System.Data",
];

/// Top-level settings document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Settings {
    #[serde(rename = "ClassRecord", default)]
    pub class_record: ClassRecordSettings,

    #[serde(rename = "TypeString", default)]
    pub type_string: TypeStringSettings,
}

/// Settings consumed by the catalogue model
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassRecordSettings {
    /// Full names of the classes that terminate an activity ancestor chain
    #[serde(rename = "ActivityClasses", default = "default_activity_classes")]
    pub activity_classes: Vec<String>,
}

impl Default for ClassRecordSettings {
    fn default() -> Self {
        Self {
            activity_classes: default_activity_classes(),
        }
    }
}

/// Settings consumed by the type-name simplifier
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeStringSettings {
    /// Namespaces whose prefix is dropped from simplified type names
    #[serde(rename = "Namespaces", default = "default_namespaces")]
    pub namespaces: Vec<String>,
}

impl Default for TypeStringSettings {
    fn default() -> Self {
        Self {
            namespaces: default_namespaces(),
        }
    }
}

fn default_activity_classes() -> Vec<String> {
    DEFAULT_ACTIVITY_CLASS_NAMES
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn default_namespaces() -> Vec<String> {
    DEFAULT_NAMESPACES.iter().map(|s| s.to_string()).collect()
}

/// The set of class names at which ancestor walks stop
///
/// A class whose ancestor chain reaches one of these is an activity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityRoots(BTreeSet<String>);

impl ActivityRoots {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(
            names
                .into_iter()
                .map(|s| {
                    let s: String = s.into();
                    s.trim().to_string()
                })
                .filter(|s| !s.is_empty())
                .collect(),
        )
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl Default for ActivityRoots {
    fn default() -> Self {
        Self::new(DEFAULT_ACTIVITY_CLASS_NAMES.iter().copied())
    }
}

impl Settings {
    /// Root activity set for catalogue construction
    pub fn activity_roots(&self) -> ActivityRoots {
        ActivityRoots::new(self.class_record.activity_classes.iter().cloned())
    }

    /// Well-known namespaces for simplifier construction
    pub fn namespaces(&self) -> BTreeSet<String> {
        self.type_string
            .namespaces
            .iter()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect()
    }
}
