use serde::{Deserialize, Serialize};

/// Everything a metadata provider reports about one module
///
/// A module is the unit of packaging (an assembly file in the original
/// tooling); its `name` becomes the package name of every class it declares.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleFacts {
    pub name: String,

    #[serde(default)]
    pub classes: Vec<ClassFacts>,
}

impl ModuleFacts {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            classes: Vec::new(),
        }
    }

    pub fn with_class(mut self, class: ClassFacts) -> Self {
        self.classes.push(class);
        self
    }
}

/// Facts about one class as declared in its module
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassFacts {
    /// Fully-qualified name, possibly carrying a generic arity suffix
    pub full_name: String,

    #[serde(default)]
    pub is_public: bool,

    #[serde(default)]
    pub is_abstract: bool,

    /// Fully-qualified name of the immediate base type, empty if none
    #[serde(default)]
    pub base_type_full_name: String,

    /// Properties declared directly on this class
    #[serde(default)]
    pub properties: Vec<PropertyFacts>,
}

impl ClassFacts {
    /// A public, concrete class with no base type and no properties
    pub fn new(full_name: impl Into<String>) -> Self {
        Self {
            full_name: full_name.into(),
            is_public: true,
            is_abstract: false,
            base_type_full_name: String::new(),
            properties: Vec::new(),
        }
    }

    pub fn with_base(mut self, base_type_full_name: impl Into<String>) -> Self {
        self.base_type_full_name = base_type_full_name.into();
        self
    }

    pub fn with_property(mut self, property: PropertyFacts) -> Self {
        self.properties.push(property);
        self
    }

    pub fn with_visibility(mut self, is_public: bool, is_abstract: bool) -> Self {
        self.is_public = is_public;
        self.is_abstract = is_abstract;
        self
    }
}

/// Facts about one declared property
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyFacts {
    pub name: String,

    /// Fully-qualified type name in the `Name`1<Arg>` notation
    pub type_full_name: String,

    #[serde(default)]
    pub is_static: bool,

    #[serde(default = "default_true")]
    pub has_getter: bool,

    #[serde(default = "default_true")]
    pub has_setter: bool,

    #[serde(default = "default_true")]
    pub getter_is_public: bool,

    #[serde(default)]
    pub getter_is_virtual: bool,
}

fn default_true() -> bool {
    true
}

impl PropertyFacts {
    /// A public read/write instance property with a non-virtual getter
    pub fn new(name: impl Into<String>, type_full_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_full_name: type_full_name.into(),
            is_static: false,
            has_getter: true,
            has_setter: true,
            getter_is_public: true,
            getter_is_virtual: false,
        }
    }

    pub fn virtual_getter(mut self) -> Self {
        self.getter_is_virtual = true;
        self
    }

    /// Whether the property takes part in resolution at all
    ///
    /// Only public read/write instance properties do; anything else is
    /// invisible to resolution, diffing and listing.
    pub fn is_eligible(&self) -> bool {
        !self.is_static && self.has_getter && self.has_setter && self.getter_is_public
    }
}
