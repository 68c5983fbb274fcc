//! Error types for model well-formedness.

use thiserror::Error;

/// Error type for malformed class models.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ModelError {
    /// Two properties share a name within one class.
    #[error("duplicate property '{property}' on class '{class}'")]
    DuplicateProperty {
        /// Class name.
        class: String,
        /// Property name.
        property: String,
    },

    /// A collection property has no element type.
    #[error("collection property '{property}' on class '{class}' has no element type")]
    MissingElementType {
        /// Class name.
        class: String,
        /// Property name.
        property: String,
    },

    /// Restriction checks are declared but no value slot exists to apply
    /// them to.
    #[error("class '{class}' declares restriction checks but has no value slot")]
    RestrictionWithoutValueSlot {
        /// Class name.
        class: String,
    },
}

impl ModelError {
    /// Creates a duplicate property error.
    pub fn duplicate_property(class: impl Into<String>, property: impl Into<String>) -> Self {
        Self::DuplicateProperty {
            class: class.into(),
            property: property.into(),
        }
    }

    /// Creates a missing element type error.
    pub fn missing_element_type(class: impl Into<String>, property: impl Into<String>) -> Self {
        Self::MissingElementType {
            class: class.into(),
            property: property.into(),
        }
    }
}
