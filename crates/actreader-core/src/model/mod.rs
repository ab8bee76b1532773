pub mod class_entry;
pub mod facts;
pub mod property_entry;

pub use class_entry::ClassEntry;
pub use facts::{ClassFacts, ModuleFacts, PropertyFacts};
pub use property_entry::PropertyEntry;
