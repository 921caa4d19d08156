//! Error types for header generation.

use thiserror::Error;

/// Error type for header generation operations.
///
/// Every variant is fatal: generation stops and no header text is produced.
#[derive(Debug, Error)]
pub enum CodegenError {
    /// Schema loading error.
    #[error("schema parse error: {0}")]
    Parse(#[from] modsdk_schema::ParseError),

    /// Schema validation error.
    #[error("schema error: {0}")]
    Schema(#[from] modsdk_schema::SchemaError),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The class being ordered is not part of the schema it was ordered against.
    #[error("Expected class definition for {name}")]
    ExpectedClassDefinition {
        /// Class name.
        name: String,
    },

    /// A base class is referenced but never declared.
    #[error("Create class definition for {name}")]
    MissingClassDefinition {
        /// Name of the missing base class.
        name: String,
    },
}

impl CodegenError {
    /// Creates an error for a class absent from the schema it is ordered against.
    pub fn expected_class(name: impl Into<String>) -> Self {
        Self::ExpectedClassDefinition { name: name.into() }
    }

    /// Creates an error for an undeclared base class.
    pub fn missing_class(name: impl Into<String>) -> Self {
        Self::MissingClassDefinition { name: name.into() }
    }
}
