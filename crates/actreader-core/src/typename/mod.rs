//! Type name simplification.
//!
//! Turns fully-qualified, arity-annotated type names as stored in module
//! metadata into the compact form used in reports:
//!
//! ```
//! use actreader_core::typename::TypeNameSimplifier;
//!
//! let simplifier = TypeNameSimplifier::default();
//! assert_eq!(
//!     simplifier.simplify("System.Collections.Generic.List`1<System.String>"),
//!     "List<String>"
//! );
//! ```
//!
//! ## Guarantees
//!
//! - `simplify` never fails: a grammar violation is logged at warn level and
//!   the input is returned unchanged.
//! - Only an exact match of the whole namespace prefix is dropped;
//!   `System.Data.Common.DbType` keeps its prefix unless `System.Data.Common`
//!   itself is configured.
//! - Array suffixes are copied verbatim.
//! - Template arguments nest at most [`MAX_TEMPLATE_DEPTH`] levels; deeper
//!   input is a `TooDeep` violation.

mod parser;

use crate::errors::TypeNameError;
use crate::settings::{Settings, DEFAULT_NAMESPACES};
use std::collections::BTreeSet;

/// Deepest template-argument nesting the parser accepts
pub const MAX_TEMPLATE_DEPTH: usize = 64;

/// Grammar-driven type name simplifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeNameSimplifier {
    namespaces: BTreeSet<String>,
}

impl TypeNameSimplifier {
    /// Create a simplifier that drops the given well-known namespaces
    pub fn new<I, S>(namespaces: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            namespaces: namespaces.into_iter().map(Into::into).collect(),
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            namespaces: settings.namespaces(),
        }
    }

    pub fn namespaces(&self) -> &BTreeSet<String> {
        &self.namespaces
    }

    /// Simplify `type_name`, returning it unchanged when it does not parse
    pub fn simplify(&self, type_name: &str) -> String {
        match self.try_simplify(type_name) {
            Ok(simplified) => simplified,
            Err(err) => {
                tracing::warn!(
                    component = module_path!(),
                    type_name = type_name,
                    error = %err,
                    "type name simplification failed"
                );
                type_name.to_string()
            }
        }
    }

    /// Simplify `type_name`, reporting the grammar violation on failure
    pub fn try_simplify(&self, type_name: &str) -> Result<String, TypeNameError> {
        parser::Parser::new(type_name, &self.namespaces).run()
    }
}

impl Default for TypeNameSimplifier {
    fn default() -> Self {
        Self::new(DEFAULT_NAMESPACES.iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_settings_uses_configured_namespaces() {
        let mut settings = Settings::default();
        settings.type_string.namespaces = vec!["Acme.Widgets".to_string()];
        let simplifier = TypeNameSimplifier::from_settings(&settings);

        assert_eq!(simplifier.simplify("Acme.Widgets.Knob"), "Knob");
        assert_eq!(simplifier.simplify("System.String"), "System.String");
    }

    #[test]
    fn test_simplify_returns_input_on_violation() {
        let simplifier = TypeNameSimplifier::default();
        assert_eq!(simplifier.simplify("Foo<Bar"), "Foo<Bar");
        assert_eq!(simplifier.simplify("System.Nullable`0<System.Int32>"), "System.Nullable`0<System.Int32>");
    }

    #[test]
    fn test_deeply_nested_input_is_returned_unchanged() {
        let simplifier = TypeNameSimplifier::default();
        let input = format!("{}A{}", "A`1<".repeat(10_000), ">".repeat(10_000));

        assert_eq!(simplifier.simplify(&input), input);
        assert_eq!(
            simplifier.try_simplify(&input),
            Err(TypeNameError::TooDeep { offset: 4 * (MAX_TEMPLATE_DEPTH + 1) })
        );
    }
}
