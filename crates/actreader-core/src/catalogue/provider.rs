use crate::errors::ExError;
use crate::model::ModuleFacts;

/// Source of module metadata for catalogue population
///
/// Implementations own whatever decoding their backing format needs; the
/// catalogue only sees plain [`ModuleFacts`].
pub trait MetadataProvider {
    /// Human-readable origin of the facts, used in logs and error context
    fn source(&self) -> String;

    /// All modules this provider knows about
    ///
    /// # Errors
    ///
    /// Returns an error when the backing data cannot be read or decoded.
    fn modules(&self) -> Result<Vec<ModuleFacts>, ExError>;
}

/// Provider over already-decoded facts
#[derive(Debug, Clone, Default)]
pub struct InMemoryProvider {
    modules: Vec<ModuleFacts>,
}

impl InMemoryProvider {
    pub fn new(modules: Vec<ModuleFacts>) -> Self {
        Self { modules }
    }
}

impl MetadataProvider for InMemoryProvider {
    fn source(&self) -> String {
        "in-memory".to_string()
    }

    fn modules(&self) -> Result<Vec<ModuleFacts>, ExError> {
        Ok(self.modules.clone())
    }
}
