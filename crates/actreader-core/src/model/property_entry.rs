use serde::{Deserialize, Serialize};

/// One entry of a class's resolved property set
///
/// Entries are produced by resolution and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PropertyEntry {
    /// Own name for properties declared on the resolved class, otherwise
    /// `<Ancestor>::<name>`; the diff key
    pub display_name: String,

    /// Fully-qualified type name
    pub type_full_name: String,

    /// Simple name of the class declaring the property
    pub owning_class: String,

    /// Simple name of the class whose resolved set holds this entry
    pub resolved_for: String,
}

impl PropertyEntry {
    pub fn new(
        display_name: impl Into<String>,
        type_full_name: impl Into<String>,
        owning_class: impl Into<String>,
        resolved_for: impl Into<String>,
    ) -> Self {
        Self {
            display_name: display_name.into(),
            type_full_name: type_full_name.into(),
            owning_class: owning_class.into(),
            resolved_for: resolved_for.into(),
        }
    }

    /// Whether the property was inherited rather than declared on the class
    pub fn is_inherited(&self) -> bool {
        self.owning_class != self.resolved_for
    }
}
