use crate::model::facts::{ClassFacts, PropertyFacts};
use crate::model::property_entry::PropertyEntry;
use std::sync::OnceLock;

/// A class registered in a catalogue
///
/// Built once from [`ClassFacts`]; the only state that changes afterwards is
/// the memoized resolved property set, which the owning
/// [`crate::catalogue::Catalogue`] fills on first request.
#[derive(Debug, Clone)]
pub struct ClassEntry {
    simple_name: String,
    full_name: String,
    package_name: String,
    namespace: String,
    is_public: bool,
    is_abstract: bool,
    super_class_simple_name: String,
    super_class_full_name: String,
    declared: Vec<PropertyFacts>,
    resolved: OnceLock<Vec<PropertyEntry>>,
}

impl ClassEntry {
    /// Build an entry from provider facts
    ///
    /// Ineligible properties are dropped here and never seen again.
    pub fn from_facts(facts: ClassFacts, package_name: impl Into<String>) -> Self {
        let simple_name = simple_name_of(&facts.full_name).to_string();
        let namespace = namespace_of(&simple_name).to_string();
        let super_class_simple_name = simple_name_of(&facts.base_type_full_name).to_string();
        Self {
            simple_name,
            full_name: facts.full_name,
            package_name: package_name.into(),
            namespace,
            is_public: facts.is_public,
            is_abstract: facts.is_abstract,
            super_class_simple_name,
            super_class_full_name: facts.base_type_full_name,
            declared: facts
                .properties
                .into_iter()
                .filter(PropertyFacts::is_eligible)
                .collect(),
            resolved: OnceLock::new(),
        }
    }

    pub fn simple_name(&self) -> &str {
        &self.simple_name
    }

    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    pub fn package_name(&self) -> &str {
        &self.package_name
    }

    /// Simple name up to and including the last '.', or "." without one
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn is_public(&self) -> bool {
        self.is_public
    }

    pub fn is_abstract(&self) -> bool {
        self.is_abstract
    }

    pub fn super_class_simple_name(&self) -> &str {
        &self.super_class_simple_name
    }

    pub fn super_class_full_name(&self) -> &str {
        &self.super_class_full_name
    }

    /// Eligible properties declared directly on this class
    pub fn declared_properties(&self) -> &[PropertyFacts] {
        &self.declared
    }

    pub(crate) fn resolved_cell(&self) -> &OnceLock<Vec<PropertyEntry>> {
        &self.resolved
    }
}

/// Strip a generic arity suffix: everything from the first '`', unless the
/// backtick is the first character
pub fn simple_name_of(full_name: &str) -> &str {
    match full_name.find('`') {
        Some(pos) if pos > 0 => &full_name[..pos],
        _ => full_name,
    }
}

fn namespace_of(simple_name: &str) -> &str {
    match simple_name.rfind('.') {
        Some(pos) => &simple_name[..=pos],
        None => ".",
    }
}
