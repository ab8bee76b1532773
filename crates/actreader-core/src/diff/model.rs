//! Diff events and the sink protocol.

use crate::model::{ClassEntry, PropertyEntry};
use serde::{Deserialize, Serialize};

/// How types of same-named properties are compared
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeSensitivity {
    /// Compare names only
    None,
    /// Compare full type names; render simplified types
    #[default]
    TypedLoose,
    /// Compare full type names; render full types
    TypedStrict,
}

impl TypeSensitivity {
    /// Whether a type mismatch on a same-named property is a difference
    pub fn compares_types(self) -> bool {
        !matches!(self, TypeSensitivity::None)
    }
}

/// One observation of the merge-diff
///
/// Borrowed views into the compared catalogues; a sink that needs to keep
/// them converts to [`DiffRecord`].
#[derive(Debug, Clone, Copy)]
pub enum DiffEvent<'a> {
    /// An accessible class exists only in the first catalogue
    ClassOnlyInFirst {
        class: &'a ClassEntry,
        properties: &'a [PropertyEntry],
    },
    /// An accessible class exists only in the second catalogue
    ClassOnlyInSecond {
        class: &'a ClassEntry,
        properties: &'a [PropertyEntry],
    },
    /// The property exists on both sides (value taken from the first)
    PropertyMatch { property: &'a PropertyEntry },
    PropertyOnlyInFirst { property: &'a PropertyEntry },
    PropertyOnlyInSecond { property: &'a PropertyEntry },
}

impl DiffEvent<'_> {
    /// Matches are the only events that are not differences
    pub fn is_difference(&self) -> bool {
        !matches!(self, DiffEvent::PropertyMatch { .. })
    }
}

/// Receiver of diff events
///
/// Any `FnMut(DiffEvent)` closure is a sink.
pub trait DiffSink {
    fn on_event(&mut self, event: DiffEvent<'_>);
}

impl<F> DiffSink for F
where
    F: FnMut(DiffEvent<'_>),
{
    fn on_event(&mut self, event: DiffEvent<'_>) {
        self(event)
    }
}

/// Owned form of a [`DiffEvent`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DiffRecord {
    ClassOnlyInFirst {
        class_name: String,
        package_name: String,
        property_count: usize,
    },
    ClassOnlyInSecond {
        class_name: String,
        package_name: String,
        property_count: usize,
    },
    PropertyMatch {
        class_name: String,
        property_name: String,
        type_full_name: String,
    },
    PropertyOnlyInFirst {
        class_name: String,
        property_name: String,
        type_full_name: String,
    },
    PropertyOnlyInSecond {
        class_name: String,
        property_name: String,
        type_full_name: String,
    },
}

impl DiffRecord {
    pub fn is_difference(&self) -> bool {
        !matches!(self, DiffRecord::PropertyMatch { .. })
    }
}

impl From<DiffEvent<'_>> for DiffRecord {
    fn from(event: DiffEvent<'_>) -> Self {
        match event {
            DiffEvent::ClassOnlyInFirst { class, properties } => DiffRecord::ClassOnlyInFirst {
                class_name: class.simple_name().to_string(),
                package_name: class.package_name().to_string(),
                property_count: properties.len(),
            },
            DiffEvent::ClassOnlyInSecond { class, properties } => DiffRecord::ClassOnlyInSecond {
                class_name: class.simple_name().to_string(),
                package_name: class.package_name().to_string(),
                property_count: properties.len(),
            },
            DiffEvent::PropertyMatch { property } => DiffRecord::PropertyMatch {
                class_name: property.resolved_for.clone(),
                property_name: property.display_name.clone(),
                type_full_name: property.type_full_name.clone(),
            },
            DiffEvent::PropertyOnlyInFirst { property } => DiffRecord::PropertyOnlyInFirst {
                class_name: property.resolved_for.clone(),
                property_name: property.display_name.clone(),
                type_full_name: property.type_full_name.clone(),
            },
            DiffEvent::PropertyOnlyInSecond { property } => DiffRecord::PropertyOnlyInSecond {
                class_name: property.resolved_for.clone(),
                property_name: property.display_name.clone(),
                type_full_name: property.type_full_name.clone(),
            },
        }
    }
}

/// Sink recording every event as a [`DiffRecord`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventLog {
    records: Vec<DiffRecord>,
}

impl EventLog {
    pub fn records(&self) -> &[DiffRecord] {
        &self.records
    }

    pub fn into_records(self) -> Vec<DiffRecord> {
        self.records
    }

    pub fn difference_count(&self) -> usize {
        self.records.iter().filter(|r| r.is_difference()).count()
    }
}

impl DiffSink for EventLog {
    fn on_event(&mut self, event: DiffEvent<'_>) {
        self.records.push(event.into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_sensitivity_is_typed_loose() {
        assert_eq!(TypeSensitivity::default(), TypeSensitivity::TypedLoose);
        assert!(TypeSensitivity::TypedStrict.compares_types());
        assert!(!TypeSensitivity::None.compares_types());
    }

    #[test]
    fn test_closure_is_a_sink() {
        let property = PropertyEntry::new("Text", "System.String", "NS.A", "NS.A");
        let mut seen = 0;
        let mut sink = |event: DiffEvent<'_>| {
            if event.is_difference() {
                seen += 1;
            }
        };
        sink.on_event(DiffEvent::PropertyOnlyInFirst {
            property: &property,
        });
        sink.on_event(DiffEvent::PropertyMatch {
            property: &property,
        });
        assert_eq!(seen, 1);
    }

    #[test]
    fn test_record_serializes_with_kind_tag() {
        let record = DiffRecord::PropertyOnlyInSecond {
            class_name: "NS.A".to_string(),
            property_name: "Text".to_string(),
            type_full_name: "System.String".to_string(),
        };
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["kind"], "property_only_in_second");
        assert_eq!(json["class_name"], "NS.A");
    }
}
