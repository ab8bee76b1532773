//! Plain-text diff report.
//!
//! [`ConsoleReport`] is a [`DiffSink`] that renders events as they arrive
//! and tracks deleted, added and modified classes for the closing summary.
//!
//! ```text
//! - NS.Gone                     class only in the first catalogue
//! -     Text (String)           ...followed by all its properties
//!   NS.Widget                   header before a matched class's first property
//!       Name (String)           matched property
//! -     Count (Int32)           property only in the first catalogue
//! +     Count (Int64)           property only in the second catalogue
//! + NS.Fresh                    class only in the second catalogue
//! ```

use crate::diff::model::{DiffEvent, DiffSink, TypeSensitivity};
use crate::model::{ClassEntry, PropertyEntry};
use crate::typename::TypeNameSimplifier;
use std::fmt::Write as _;

#[derive(Debug, Clone, Copy)]
enum Side {
    Both,
    First,
    Second,
}

impl Side {
    fn class_prefix(self) -> &'static str {
        match self {
            Side::Both => "  ",
            Side::First => "- ",
            Side::Second => "+ ",
        }
    }

    fn property_prefix(self) -> &'static str {
        match self {
            Side::Both => "      ",
            Side::First => "-     ",
            Side::Second => "+     ",
        }
    }
}

/// Diff sink producing the console report
#[derive(Debug, Clone)]
pub struct ConsoleReport {
    sensitivity: TypeSensitivity,
    simplifier: TypeNameSimplifier,
    out: String,
    deleted: Vec<String>,
    added: Vec<String>,
    modified: Vec<String>,
    current_class: Option<String>,
    current_modified: bool,
    properties_deleted: usize,
    properties_added: usize,
}

impl ConsoleReport {
    pub fn new(sensitivity: TypeSensitivity, simplifier: TypeNameSimplifier) -> Self {
        Self {
            sensitivity,
            simplifier,
            out: String::new(),
            deleted: Vec::new(),
            added: Vec::new(),
            modified: Vec::new(),
            current_class: None,
            current_modified: false,
            properties_deleted: 0,
            properties_added: 0,
        }
    }

    /// Report text rendered so far
    pub fn output(&self) -> &str {
        &self.out
    }

    pub fn deleted_classes(&self) -> &[String] {
        &self.deleted
    }

    pub fn added_classes(&self) -> &[String] {
        &self.added
    }

    /// Matched classes with at least one property difference, in event order
    pub fn modified_classes(&self) -> &[String] {
        &self.modified
    }

    pub fn properties_deleted(&self) -> usize {
        self.properties_deleted
    }

    pub fn properties_added(&self) -> usize {
        self.properties_added
    }

    /// Closing summary naming the compared inputs and the class tallies
    pub fn summary<S: AsRef<str>>(&self, first_paths: &[S], second_paths: &[S]) -> String {
        let mut out = String::from("\nSUMMARY:\n");
        for path in first_paths {
            let _ = writeln!(out, "  ---: {}", path.as_ref());
        }
        for path in second_paths {
            let _ = writeln!(out, "  +++: {}", path.as_ref());
        }
        for (label, names) in [
            ("DELETED", &self.deleted),
            ("ADDED", &self.added),
            ("MODIFIED", &self.modified),
        ] {
            let _ = writeln!(out, "  {} classes: {}", label, names.len());
            for name in names {
                let _ = writeln!(out, "    {}", name);
            }
        }
        out
    }

    fn class_line(&mut self, side: Side, class_name: &str) {
        let _ = writeln!(self.out, "{}{}", side.class_prefix(), class_name);
    }

    fn property_line(&mut self, side: Side, property: &PropertyEntry) {
        let _ = write!(
            self.out,
            "{}{}",
            side.property_prefix(),
            property.display_name
        );
        match self.sensitivity {
            TypeSensitivity::None => {}
            TypeSensitivity::TypedLoose => {
                let simplified = self.simplifier.simplify(&property.type_full_name);
                let _ = write!(self.out, " ({})", simplified);
            }
            TypeSensitivity::TypedStrict => {
                let _ = write!(self.out, " ({})", property.type_full_name);
            }
        }
        self.out.push('\n');
    }

    fn whole_class(&mut self, side: Side, class: &ClassEntry, properties: &[PropertyEntry]) {
        self.class_line(side, class.simple_name());
        for property in properties {
            self.property_line(side, property);
        }
        self.current_class = None;
        self.current_modified = false;
    }

    /// Print the class header on the first property of a new class
    fn enter_class(&mut self, property: &PropertyEntry) {
        if self.current_class.as_deref() == Some(property.resolved_for.as_str()) {
            return;
        }
        self.current_class = Some(property.resolved_for.clone());
        self.current_modified = false;
        self.class_line(Side::Both, &property.resolved_for);
    }

    fn mark_modified(&mut self, property: &PropertyEntry) {
        if !self.current_modified {
            self.modified.push(property.resolved_for.clone());
            self.current_modified = true;
        }
    }
}

impl DiffSink for ConsoleReport {
    fn on_event(&mut self, event: DiffEvent<'_>) {
        match event {
            DiffEvent::ClassOnlyInFirst { class, properties } => {
                self.whole_class(Side::First, class, properties);
                self.deleted.push(class.simple_name().to_string());
            }
            DiffEvent::ClassOnlyInSecond { class, properties } => {
                self.whole_class(Side::Second, class, properties);
                self.added.push(class.simple_name().to_string());
            }
            DiffEvent::PropertyMatch { property } => {
                self.enter_class(property);
                self.property_line(Side::Both, property);
            }
            DiffEvent::PropertyOnlyInFirst { property } => {
                self.enter_class(property);
                self.property_line(Side::First, property);
                self.properties_deleted += 1;
                self.mark_modified(property);
            }
            DiffEvent::PropertyOnlyInSecond { property } => {
                self.enter_class(property);
                self.property_line(Side::Second, property);
                self.properties_added += 1;
                self.mark_modified(property);
            }
        }
    }
}
