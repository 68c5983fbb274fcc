//! Error types for class generation.

use thiserror::Error;

/// Error type for generation operations.
///
/// Generation never emits partially-correct output: the first malformed
/// model condition aborts the whole class.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CodegenError {
    /// Model well-formedness error.
    #[error("model error: {0}")]
    Model(#[from] xsdgen_model::ModelError),

    /// A collection property has no element type.
    #[error("collection property '{property}' on class '{class}' has no element type")]
    MissingElementType {
        /// Class name.
        class: String,
        /// Property name.
        property: String,
    },

    /// A declared pattern facet is not a valid regular expression.
    #[error("invalid pattern '{pattern}' on class '{class}': {message}")]
    InvalidPattern {
        /// Class name.
        class: String,
        /// The offending pattern.
        pattern: String,
        /// Compilation error detail.
        message: String,
    },
}

impl CodegenError {
    /// Creates a missing element type error.
    pub fn missing_element_type(class: impl Into<String>, property: impl Into<String>) -> Self {
        Self::MissingElementType {
            class: class.into(),
            property: property.into(),
        }
    }

    /// Creates an invalid pattern error.
    pub fn invalid_pattern(
        class: impl Into<String>,
        pattern: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::InvalidPattern {
            class: class.into(),
            pattern: pattern.into(),
            message: message.into(),
        }
    }
}
