use thiserror::Error;

/// Result type alias using ActReaderError
pub type Result<T> = std::result::Result<T, ActReaderError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code that can be used for programmatic
/// error handling, testing, and log assertions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Structural/Validation
    InvalidInput,
    NotFound,

    // Collaborator input
    /// The settings file exists but could not be parsed
    InvalidConfig,
    /// A catalogue snapshot file is not valid snapshot JSON
    InvalidSnapshot,
    /// A path was given that is neither a snapshot file nor a directory of them
    UnsupportedInput,

    // Integration/IO
    Io,
    Serialization,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            ExErrorKind::NotFound => "ERR_NOT_FOUND",
            ExErrorKind::InvalidConfig => "ERR_INVALID_CONFIG",
            ExErrorKind::InvalidSnapshot => "ERR_INVALID_SNAPSHOT",
            ExErrorKind::UnsupportedInput => "ERR_UNSUPPORTED_INPUT",
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
        }
    }
}

/// Canonical structured error type
///
/// Carries classification fields for programmatic handling and enough context
/// (operation, entity, file) for a readable console message.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    entity_id: Option<String>,
    path: Option<String>,
    message: String,
    source: Option<Box<ExError>>,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            entity_id: None,
            path: None,
            message: String::new(),
            source: None,
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add entity context (a class or property name)
    pub fn with_entity_id(mut self, id: impl Into<String>) -> Self {
        self.entity_id = Some(id.into());
        self
    }

    /// Add file path context
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Add source error
    pub fn with_source(mut self, source: ExError) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    /// Get the operation context, if any
    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    /// Get the entity context, if any
    pub fn entity_id(&self) -> Option<&str> {
        self.entity_id.as_deref()
    }

    /// Get the file path context, if any
    pub fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Get the source error, if any
    pub fn source_error(&self) -> Option<&ExError> {
        self.source.as_deref()
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(entity_id) = &self.entity_id {
            write!(f, " (entity: {})", entity_id)?;
        }
        if let Some(path) = &self.path {
            write!(f, " (path: {})", path)?;
        }
        if let Some(source) = &self.source {
            write!(f, " <- {}", source)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        None
    }
}

// ========== End Error Facility ==========

/// A violation of the qualified type-name grammar
///
/// Raised by [`crate::typename::TypeNameSimplifier::try_simplify`]. The
/// non-failing `simplify` logs these and returns its input unchanged.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TypeNameError {
    /// A separator was not followed by an identifier
    #[error("Name char is missing at offset {offset}")]
    NameCharMissing { offset: usize },

    /// A backtick was not followed by a digit 1-9
    #[error("Non-zero digit is missing at offset {offset}")]
    NonZeroDigitMissing { offset: usize },

    /// The arity was not followed by '<'
    #[error("Less-than is missing at offset {offset}")]
    LessThanMissing { offset: usize },

    /// A template argument was empty
    #[error("Template type is missing at offset {offset}")]
    TemplateTypeMissing { offset: usize },

    /// Fewer template arguments than the declared arity
    #[error("Comma is missing at offset {offset}")]
    CommaMissing { offset: usize },

    /// The argument list was not closed after the declared arity
    #[error("Greater-than is missing at offset {offset}")]
    GreaterThanMissing { offset: usize },

    /// An array group was opened but not closed
    #[error("Closing square bracket is missing at offset {offset}")]
    ClosingBracketMissing { offset: usize },

    /// Template arguments nested deeper than the parser accepts
    #[error("Template nesting is too deep at offset {offset}")]
    TooDeep { offset: usize },

    /// A complete type was parsed but input remains
    #[error("Extra contents: {rest}")]
    ExtraContents { rest: String },
}

impl TypeNameError {
    /// Byte offset in the input where the violation was detected
    pub fn offset(&self) -> Option<usize> {
        match self {
            TypeNameError::NameCharMissing { offset }
            | TypeNameError::NonZeroDigitMissing { offset }
            | TypeNameError::LessThanMissing { offset }
            | TypeNameError::TemplateTypeMissing { offset }
            | TypeNameError::CommaMissing { offset }
            | TypeNameError::GreaterThanMissing { offset }
            | TypeNameError::ClosingBracketMissing { offset }
            | TypeNameError::TooDeep { offset } => Some(*offset),
            TypeNameError::ExtraContents { .. } => None,
        }
    }
}

/// Error taxonomy for ActReader domain operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ActReaderError {
    /// Class not registered in the catalogue
    #[error("Class not found: {class_name}")]
    ClassNotFound { class_name: String },
}

impl From<ActReaderError> for ExError {
    fn from(err: ActReaderError) -> Self {
        match err {
            ActReaderError::ClassNotFound { class_name } => ExError::new(ExErrorKind::NotFound)
                .with_entity_id(class_name)
                .with_message("Class not found"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_code_and_context() {
        let err = ExError::new(ExErrorKind::Io)
            .with_op("read_snapshot")
            .with_path("a.json")
            .with_message("permission denied");
        let text = err.to_string();
        assert!(text.starts_with("[ERR_IO]"));
        assert!(text.contains("read_snapshot"));
        assert!(text.contains("a.json"));
        assert!(text.contains("permission denied"));
    }

    #[test]
    fn test_type_name_error_offset() {
        let err = TypeNameError::LessThanMissing { offset: 7 };
        assert_eq!(err.offset(), Some(7));
        let err = TypeNameError::ExtraContents {
            rest: "<Bar".to_string(),
        };
        assert_eq!(err.offset(), None);
    }
}
