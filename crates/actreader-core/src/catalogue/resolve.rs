//! Ancestor walks over a catalogue.
//!
//! Both walks follow super-class simple names through the catalogue for at
//! most [`MAX_ANCESTOR_HOPS`] steps and stop at an empty name, an unknown
//! name or a configured root, so cycles terminate.

use super::Catalogue;
use crate::model::{ClassEntry, PropertyEntry};
use std::collections::BTreeMap;

/// Upper bound on ancestor hops for both walks
pub const MAX_ANCESTOR_HOPS: usize = 30;

pub(super) fn is_activity(catalogue: &Catalogue, class: &ClassEntry) -> bool {
    let mut name = class.super_class_simple_name();
    for _ in 0..MAX_ANCESTOR_HOPS {
        if name.is_empty() {
            return false;
        }
        if catalogue.roots().contains(name) {
            return true;
        }
        match catalogue.find_class(name) {
            Some(ancestor) => name = ancestor.super_class_simple_name(),
            None => return false,
        }
    }
    false
}

pub(super) fn resolve_properties(catalogue: &Catalogue, class: &ClassEntry) -> Vec<PropertyEntry> {
    let resolved_for = class.simple_name();
    let mut working: BTreeMap<String, PropertyEntry> = BTreeMap::new();

    for property in class.declared_properties() {
        working
            .entry(property.name.clone())
            .or_insert_with(|| {
                PropertyEntry::new(
                    property.name.clone(),
                    property.type_full_name.clone(),
                    resolved_for,
                    resolved_for,
                )
            });
    }

    let mut name = class.super_class_simple_name();
    for _ in 0..MAX_ANCESTOR_HOPS {
        if name.is_empty() || catalogue.roots().contains(name) {
            break;
        }
        let Some(ancestor) = catalogue.find_class(name) else {
            break;
        };

        for property in ancestor.declared_properties() {
            // A virtual getter under an already-present plain name is an override.
            if property.getter_is_virtual && working.contains_key(&property.name) {
                continue;
            }
            let display_name = decorate(class, ancestor, &property.name);
            working.entry(display_name.clone()).or_insert_with(|| {
                PropertyEntry::new(
                    display_name,
                    property.type_full_name.clone(),
                    ancestor.simple_name(),
                    resolved_for,
                )
            });
        }

        name = ancestor.super_class_simple_name();
    }

    working.into_values().collect()
}

fn decorate(class: &ClassEntry, ancestor: &ClassEntry, property_name: &str) -> String {
    match ancestor.simple_name().strip_prefix(class.namespace()) {
        Some(relative) => format!("{}::{}", relative, property_name),
        None => format!("{}::{}", ancestor.simple_name(), property_name),
    }
}
