use actreader_core::{ActivityRoots, Catalogue, ClassFacts, ModuleFacts, PropertyFacts};

/// Root base class used by the fixtures
#[allow(dead_code)]
pub const ROOT: &str = "System.Activities.CodeActivity";

/// A public, concrete class deriving directly from [`ROOT`]
#[allow(dead_code)]
pub fn activity(full_name: &str) -> ClassFacts {
    ClassFacts::new(full_name).with_base(ROOT)
}

/// An eligible property with a non-virtual getter
#[allow(dead_code)]
pub fn prop(name: &str, type_full_name: &str) -> PropertyFacts {
    PropertyFacts::new(name, type_full_name)
}

/// Build a catalogue with the default root activity names
#[allow(dead_code)]
pub fn catalogue(classes: Vec<ClassFacts>) -> Catalogue {
    catalogue_in("Test.Activities.dll", classes)
}

/// Build a catalogue whose classes all come from one package
#[allow(dead_code)]
pub fn catalogue_in(package_name: &str, classes: Vec<ClassFacts>) -> Catalogue {
    let mut catalogue = Catalogue::new(ActivityRoots::default());
    let mut module = ModuleFacts::new(package_name);
    module.classes = classes;
    catalogue.register_module(module);
    catalogue
}

/// Display names of a class's resolved property set
#[allow(dead_code)]
pub fn display_names(catalogue: &Catalogue, class_name: &str) -> Vec<String> {
    let class = catalogue.get_class(class_name).unwrap();
    catalogue
        .properties(class)
        .iter()
        .map(|p| p.display_name.clone())
        .collect()
}
