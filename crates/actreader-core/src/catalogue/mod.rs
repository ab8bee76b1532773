//! Class catalogue.
//!
//! A [`Catalogue`] maps class simple names to [`ClassEntry`] values in
//! ordinal order. It is filled once from one or more
//! [`MetadataProvider`]s and read-only afterwards; the only lazily computed
//! state is each class's resolved property set.
//!
//! ## Registration
//!
//! The first class registered under a simple name wins. Later registrations
//! with the same key are discarded, logged at debug level, and listed in the
//! returned [`PopulateReport`].
//!
//! ## Resolution
//!
//! [`Catalogue::properties`] returns a class's own eligible properties plus
//! those inherited from non-root ancestors, with inherited names decorated as
//! `<Ancestor>::<name>` (the ancestor's namespace is dropped when it matches
//! the class's namespace) and overrides of virtual getters elided. The result
//! is sorted by display name.

mod provider;
mod resolve;

pub use provider::{InMemoryProvider, MetadataProvider};
pub use resolve::MAX_ANCESTOR_HOPS;

use crate::errors::{ActReaderError, ExError, Result};
use crate::model::class_entry::simple_name_of;
use crate::model::{ClassEntry, ClassFacts, ModuleFacts, PropertyEntry};
use crate::settings::{ActivityRoots, Settings};
use crate::{log_op_end, log_op_error, log_op_start};
use std::collections::{BTreeMap, BTreeSet};
use std::time::Instant;

/// Outcome of registering one class
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Registration {
    Inserted,
    /// The key was taken; the new class was discarded
    Duplicate { first_package: String },
}

/// A discarded registration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateRegistration {
    pub class_name: String,
    pub first_package: String,
    pub package: String,
}

/// Summary of a populate pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PopulateReport {
    pub modules: usize,
    pub registered: usize,
    pub duplicates: Vec<DuplicateRegistration>,
}

impl PopulateReport {
    fn absorb(&mut self, other: PopulateReport) {
        self.modules += other.modules;
        self.registered += other.registered;
        self.duplicates.extend(other.duplicates);
    }
}

/// Ordered class catalogue with inheritance-aware property resolution
#[derive(Debug, Clone, Default)]
pub struct Catalogue {
    classes: BTreeMap<String, ClassEntry>,
    packages: BTreeSet<String>,
    roots: ActivityRoots,
}

impl Catalogue {
    /// Create an empty catalogue whose ancestor walks stop at `roots`
    pub fn new(roots: ActivityRoots) -> Self {
        Self {
            classes: BTreeMap::new(),
            packages: BTreeSet::new(),
            roots,
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(settings.activity_roots())
    }

    pub fn roots(&self) -> &ActivityRoots {
        &self.roots
    }

    /// Register one class under its simple name
    pub fn register(&mut self, package_name: &str, facts: ClassFacts) -> Registration {
        let entry = ClassEntry::from_facts(facts, package_name);
        if let Some(existing) = self.classes.get(entry.simple_name()) {
            tracing::debug!(
                class_name = entry.simple_name(),
                first_package = existing.package_name(),
                package_name = package_name,
                "duplicate class registration discarded"
            );
            return Registration::Duplicate {
                first_package: existing.package_name().to_string(),
            };
        }
        self.packages.insert(package_name.to_string());
        self.classes.insert(entry.simple_name().to_string(), entry);
        Registration::Inserted
    }

    /// Register every class of one module
    pub fn register_module(&mut self, module: ModuleFacts) -> PopulateReport {
        let mut report = PopulateReport {
            modules: 1,
            ..PopulateReport::default()
        };
        for class in module.classes {
            let class_name = simple_name_of(&class.full_name).to_string();
            match self.register(&module.name, class) {
                Registration::Inserted => report.registered += 1,
                Registration::Duplicate { first_package } => {
                    report.duplicates.push(DuplicateRegistration {
                        class_name,
                        first_package,
                        package: module.name.clone(),
                    })
                }
            }
        }
        report
    }

    /// Register every module a provider reports
    ///
    /// # Errors
    ///
    /// Propagates the provider's error; classes registered before the failure
    /// are not rolled back.
    pub fn populate(
        &mut self,
        provider: &dyn MetadataProvider,
    ) -> std::result::Result<PopulateReport, ExError> {
        let start = Instant::now();
        let source = provider.source();
        log_op_start!("populate_catalogue", path = source.as_str());

        let modules = match provider.modules() {
            Ok(modules) => modules,
            Err(err) => {
                let err = err.with_op("populate_catalogue");
                log_op_error!(
                    "populate_catalogue",
                    err.clone(),
                    duration_ms = start.elapsed().as_millis() as u64,
                    path = source.as_str()
                );
                return Err(err);
            }
        };

        let mut report = PopulateReport::default();
        for module in modules {
            report.absorb(self.register_module(module));
        }

        log_op_end!(
            "populate_catalogue",
            duration_ms = start.elapsed().as_millis() as u64,
            path = source.as_str(),
            class_count = report.registered
        );
        Ok(report)
    }

    /// Look up a class by simple name
    pub fn find_class(&self, simple_name: &str) -> Option<&ClassEntry> {
        self.classes.get(simple_name)
    }

    /// Look up a class by simple name
    ///
    /// # Errors
    ///
    /// Returns `ClassNotFound` if no class is registered under the name.
    pub fn get_class(&self, simple_name: &str) -> Result<&ClassEntry> {
        self.find_class(simple_name)
            .ok_or_else(|| ActReaderError::ClassNotFound {
                class_name: simple_name.to_string(),
            })
    }

    /// All classes in ordinal simple-name order
    pub fn classes(&self) -> impl Iterator<Item = &ClassEntry> {
        self.classes.values()
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// Packages that contributed at least one class, in ordinal order
    pub fn package_names(&self) -> impl Iterator<Item = &str> {
        self.packages.iter().map(String::as_str)
    }

    /// Activity classes of one package in ordinal order
    pub fn select_by_package<'a>(
        &'a self,
        package_name: &'a str,
    ) -> impl Iterator<Item = &'a ClassEntry> + 'a {
        self.classes
            .values()
            .filter(move |c| c.package_name() == package_name && self.is_activity(c))
    }

    /// Whether the class's ancestor chain reaches a configured root
    pub fn is_activity(&self, class: &ClassEntry) -> bool {
        resolve::is_activity(self, class)
    }

    /// Public, concrete activity classes take part in diffs and listings
    pub fn is_accessible_activity(&self, class: &ClassEntry) -> bool {
        class.is_public() && !class.is_abstract() && self.is_activity(class)
    }

    /// Resolved property set of `class`, computed once
    ///
    /// `class` must belong to this catalogue; ancestors are looked up here.
    pub fn properties<'a>(&self, class: &'a ClassEntry) -> &'a [PropertyEntry] {
        class
            .resolved_cell()
            .get_or_init(|| resolve::resolve_properties(self, class))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::PropertyFacts;

    fn roots() -> ActivityRoots {
        ActivityRoots::new(["Root.Activity"])
    }

    #[test]
    fn test_first_registration_wins() {
        let mut catalogue = Catalogue::new(roots());
        let first =
            ClassFacts::new("NS.Widget").with_property(PropertyFacts::new("A", "System.String"));
        let second = ClassFacts::new("NS.Widget`1");

        assert_eq!(catalogue.register("one.dll", first), Registration::Inserted);
        assert_eq!(
            catalogue.register("two.dll", second),
            Registration::Duplicate {
                first_package: "one.dll".to_string()
            }
        );

        let widget = catalogue.get_class("NS.Widget").unwrap();
        assert_eq!(widget.package_name(), "one.dll");
        assert_eq!(widget.declared_properties().len(), 1);
        assert_eq!(catalogue.package_names().collect::<Vec<_>>(), vec!["one.dll"]);
    }

    #[test]
    fn test_register_module_reports_duplicates() {
        let mut catalogue = Catalogue::new(roots());
        let module = ModuleFacts::new("pkg.dll")
            .with_class(ClassFacts::new("NS.A"))
            .with_class(ClassFacts::new("NS.A`2"));

        let report = catalogue.register_module(module);

        assert_eq!(report.registered, 1);
        assert_eq!(report.duplicates.len(), 1);
        assert_eq!(report.duplicates[0].class_name, "NS.A");
        assert_eq!(report.duplicates[0].package, "pkg.dll");
    }

    #[test]
    fn test_get_class_unknown_is_not_found() {
        let catalogue = Catalogue::new(roots());
        assert!(matches!(
            catalogue.get_class("NS.Missing"),
            Err(ActReaderError::ClassNotFound { .. })
        ));
    }

    #[test]
    fn test_classes_iterate_in_ordinal_order() {
        let mut catalogue = Catalogue::new(roots());
        for name in ["b.Widget", "B.Widget", "a.Widget", "A.Widget"] {
            catalogue.register("pkg", ClassFacts::new(name));
        }
        let names: Vec<_> = catalogue.classes().map(ClassEntry::simple_name).collect();
        assert_eq!(names, vec!["A.Widget", "B.Widget", "a.Widget", "b.Widget"]);
    }

    #[test]
    fn test_accessibility_requires_public_concrete_activity() {
        let mut catalogue = Catalogue::new(roots());
        catalogue.register("pkg", ClassFacts::new("NS.Open").with_base("Root.Activity"));
        catalogue.register(
            "pkg",
            ClassFacts::new("NS.Hidden")
                .with_base("Root.Activity")
                .with_visibility(false, false),
        );
        catalogue.register(
            "pkg",
            ClassFacts::new("NS.Abstract")
                .with_base("Root.Activity")
                .with_visibility(true, true),
        );
        catalogue.register("pkg", ClassFacts::new("NS.Plain"));

        let accessible: Vec<_> = catalogue
            .classes()
            .filter(|c| catalogue.is_accessible_activity(c))
            .map(ClassEntry::simple_name)
            .collect();
        assert_eq!(accessible, vec!["NS.Open"]);
    }
}
