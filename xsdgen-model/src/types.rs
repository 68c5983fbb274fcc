//! Type references.
//!
//! This module contains the tagged type-reference variants used by property
//! declarations: native primitives, repeated collections, and references to
//! other generated classes.

use crate::class::{PropertySpec, RestrictionTable, VALUE_PROPERTY};
use serde::{Deserialize, Serialize};

/// Native (primitive) types needing no generated class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NativeType {
    /// Character string.
    String,
    /// Machine integer.
    Int,
    /// Floating point number.
    Float,
    /// Arbitrary-precision integer.
    Integer,
    /// Boolean.
    Boolean,
    /// Untyped array.
    Array,
    /// Any type.
    Mixed,
    /// Callable value.
    Callable,
}

impl NativeType {
    /// Returns the declared name of the native type.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Int => "int",
            Self::Float => "float",
            Self::Integer => "integer",
            Self::Boolean => "boolean",
            Self::Array => "array",
            Self::Mixed => "mixed",
            Self::Callable => "callable",
        }
    }

    /// Parses a native type from its declared name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "string" => Some(Self::String),
            "int" => Some(Self::Int),
            "float" => Some(Self::Float),
            "integer" => Some(Self::Integer),
            "boolean" => Some(Self::Boolean),
            "array" => Some(Self::Array),
            "mixed" => Some(Self::Mixed),
            "callable" => Some(Self::Callable),
            _ => None,
        }
    }
}

impl std::fmt::Display for NativeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Reference to another generated class.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassRef {
    /// Simple class name.
    pub name: String,
    /// Namespace, if any.
    pub namespace: Option<String>,
    /// The wrapped value slot, when the referenced class is a value wrapper
    /// over a scalar.
    pub value_property: Option<Box<PropertySpec>>,
    /// The referenced class's own restriction table.
    pub checks: RestrictionTable,
}

impl ClassRef {
    /// Creates a reference to a structural class.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            namespace: None,
            value_property: None,
            checks: RestrictionTable::default(),
        }
    }

    /// Sets the namespace.
    #[must_use]
    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }

    /// Marks the referenced class as a value wrapper over the given slot.
    #[must_use]
    pub fn with_value_property(mut self, value_property: PropertySpec) -> Self {
        self.value_property = Some(Box::new(value_property));
        self
    }

    /// Sets the referenced class's restriction table.
    #[must_use]
    pub fn with_checks(mut self, checks: RestrictionTable) -> Self {
        self.checks = checks;
        self
    }

    /// Returns the wrapped value slot if the referenced class is a value
    /// wrapper.
    #[must_use]
    pub fn as_value_wrapper(&self) -> Option<&PropertySpec> {
        self.value_property.as_deref()
    }

    /// Returns true if the referenced class carries restriction checks on
    /// its value slot.
    #[must_use]
    pub fn has_value_checks(&self) -> bool {
        self.checks.has_checks(VALUE_PROPERTY)
    }
}

/// Tagged type reference of a property declaration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TypeRef {
    /// A native primitive.
    Native(NativeType),
    /// A repeated element type; the element descriptor carries its own
    /// name, type and occurrence bounds.
    Collection(Box<PropertySpec>),
    /// A reference to another generated class.
    Class(ClassRef),
}

impl TypeRef {
    /// Creates a collection type over the given element descriptor.
    #[must_use]
    pub fn collection(element: PropertySpec) -> Self {
        Self::Collection(Box::new(element))
    }

    /// Returns true if this is a native type.
    #[must_use]
    pub const fn is_native(&self) -> bool {
        matches!(self, Self::Native(_))
    }

    /// Returns the native type, if this is one.
    #[must_use]
    pub const fn native(&self) -> Option<NativeType> {
        match self {
            Self::Native(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the collection element descriptor, if this is a collection.
    #[must_use]
    pub fn as_collection(&self) -> Option<&PropertySpec> {
        match self {
            Self::Collection(element) => Some(element),
            _ => None,
        }
    }

    /// Returns the class reference, if this is one.
    #[must_use]
    pub const fn as_class(&self) -> Option<&ClassRef> {
        match self {
            Self::Class(class_ref) => Some(class_ref),
            _ => None,
        }
    }

    /// Returns the wrapped value slot when this refers to a value-wrapper
    /// class.
    #[must_use]
    pub fn as_value_wrapper(&self) -> Option<&PropertySpec> {
        self.as_class().and_then(ClassRef::as_value_wrapper)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::class::PropertySpec;

    #[test]
    fn test_native_type_names_round_trip() {
        for native in [
            NativeType::String,
            NativeType::Int,
            NativeType::Float,
            NativeType::Integer,
            NativeType::Boolean,
            NativeType::Array,
            NativeType::Mixed,
            NativeType::Callable,
        ] {
            assert_eq!(NativeType::from_name(native.name()), Some(native));
        }
        assert_eq!(NativeType::from_name("double"), None);
    }

    #[test]
    fn test_type_ref_predicates() {
        let native = TypeRef::Native(NativeType::String);
        assert!(native.is_native());
        assert_eq!(native.native(), Some(NativeType::String));
        assert!(native.as_class().is_none());

        let class = TypeRef::Class(ClassRef::new("FooType"));
        assert!(!class.is_native());
        assert_eq!(class.as_class().map(|c| c.name.as_str()), Some("FooType"));

        let element =
            PropertySpec::new("item").with_type(TypeRef::Native(NativeType::String));
        let collection = TypeRef::collection(element);
        assert!(collection.as_collection().is_some());
    }

    #[test]
    fn test_class_ref_value_wrapper() {
        let slot = PropertySpec::new(VALUE_PROPERTY)
            .with_type(TypeRef::Native(NativeType::String));
        let wrapper = ClassRef::new("CodeType").with_value_property(slot);
        assert!(wrapper.as_value_wrapper().is_some());
        assert!(!wrapper.has_value_checks());

        let structural = ClassRef::new("ItemsType");
        assert!(structural.as_value_wrapper().is_none());
    }
}
