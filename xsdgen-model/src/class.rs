//! Class and property declarations.

use crate::types::TypeRef;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use xsdgen_core::CheckKind;

/// Reserved property name denoting the wrapped scalar slot of a value
/// wrapper.
pub const VALUE_PROPERTY: &str = "__value";

/// Member visibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Visibility {
    /// Publicly accessible.
    Public,
    /// Accessible to the class and its subclasses.
    Protected,
    /// Accessible to the class only.
    #[default]
    Private,
}

/// Restriction check values keyed by property name and check kind.
///
/// Value order within a kind is preserved from declaration; multiple values
/// are legal for pattern and enumeration facets.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RestrictionTable {
    entries: BTreeMap<String, BTreeMap<CheckKind, Vec<String>>>,
}

impl RestrictionTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a check value for the given property and kind.
    pub fn add(
        &mut self,
        property: impl Into<String>,
        kind: CheckKind,
        value: impl Into<String>,
    ) {
        self.entries
            .entry(property.into())
            .or_default()
            .entry(kind)
            .or_default()
            .push(value.into());
    }

    /// Returns the check map for a property, if one exists.
    #[must_use]
    pub fn checks_for(&self, property: &str) -> Option<&BTreeMap<CheckKind, Vec<String>>> {
        self.entries.get(property)
    }

    /// Returns the declared values for a property and kind.
    #[must_use]
    pub fn values(&self, property: &str, kind: CheckKind) -> Option<&[String]> {
        self.entries
            .get(property)
            .and_then(|kinds| kinds.get(&kind))
            .map(Vec::as_slice)
    }

    /// Returns true if the property carries any check values.
    #[must_use]
    pub fn has_checks(&self, property: &str) -> bool {
        self.entries
            .get(property)
            .is_some_and(|kinds| kinds.values().any(|values| !values.is_empty()))
    }

    /// Returns true if the table is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// A declared property of a class, or the element descriptor of a
/// collection type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertySpec {
    /// Property name.
    pub name: String,
    /// Documentation text.
    pub doc: Option<String>,
    /// Declared type (None = untyped/mixed).
    pub type_ref: Option<TypeRef>,
    /// Minimum occurrences.
    pub min: u32,
    /// Maximum occurrences (None = unbounded).
    pub max: Option<u32>,
    /// Visibility of the backing field.
    pub visibility: Visibility,
}

impl PropertySpec {
    /// Creates a property with default occurrence bounds (0, 1).
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            doc: None,
            type_ref: None,
            min: 0,
            max: Some(1),
            visibility: Visibility::default(),
        }
    }

    /// Sets the declared type.
    #[must_use]
    pub fn with_type(mut self, type_ref: TypeRef) -> Self {
        self.type_ref = Some(type_ref);
        self
    }

    /// Sets the documentation text.
    #[must_use]
    pub fn with_doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    /// Sets the occurrence bounds (None max = unbounded).
    #[must_use]
    pub fn with_occurs(mut self, min: u32, max: Option<u32>) -> Self {
        self.min = min;
        self.max = max;
        self
    }
}

/// A class to generate: name, namespace, documentation, base-class
/// reference, ordered properties, and restriction table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassSpec {
    /// Simple class name.
    pub name: String,
    /// Namespace, if any.
    pub namespace: Option<String>,
    /// Documentation text.
    pub doc: Option<String>,
    /// Base class reference, if the class extends one.
    pub extends: Option<crate::types::ClassRef>,
    /// Restriction table (keyed by the internal value marker).
    pub checks: RestrictionTable,
    properties: Vec<PropertySpec>,
    property_index: HashMap<String, usize>,
}

impl ClassSpec {
    /// Creates an empty class spec.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            namespace: None,
            doc: None,
            extends: None,
            checks: RestrictionTable::default(),
            properties: Vec::new(),
            property_index: HashMap::new(),
        }
    }

    /// Sets the namespace.
    #[must_use]
    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }

    /// Sets the documentation text.
    #[must_use]
    pub fn with_doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    /// Sets the base class reference.
    #[must_use]
    pub fn with_extends(mut self, extends: crate::types::ClassRef) -> Self {
        self.extends = Some(extends);
        self
    }

    /// Appends a property, preserving declaration order.
    pub fn add_property(&mut self, property: PropertySpec) {
        let name = property.name.clone();
        let index = self.properties.len();
        self.properties.push(property);
        self.property_index.insert(name, index);
    }

    /// Appends a property, builder style.
    #[must_use]
    pub fn with_property(mut self, property: PropertySpec) -> Self {
        self.add_property(property);
        self
    }

    /// Returns the declared properties in declaration order.
    #[must_use]
    pub fn properties(&self) -> &[PropertySpec] {
        &self.properties
    }

    /// Looks up a property by name.
    #[must_use]
    pub fn property(&self, name: &str) -> Option<&PropertySpec> {
        self.property_index.get(name).map(|&idx| &self.properties[idx])
    }

    /// Returns true if a property with the given name exists.
    #[must_use]
    pub fn has_property(&self, name: &str) -> bool {
        self.property_index.contains_key(name)
    }

    /// Returns the number of declared properties.
    #[must_use]
    pub fn property_count(&self) -> usize {
        self.properties.len()
    }

    /// Returns true if the class is a pure value wrapper: its only
    /// property is the internal value marker.
    #[must_use]
    pub fn is_pure_value_wrapper(&self) -> bool {
        self.properties.len() == 1 && self.has_property(VALUE_PROPERTY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{NativeType, TypeRef};

    #[test]
    fn test_property_defaults() {
        let prop = PropertySpec::new("id");
        assert_eq!(prop.min, 0);
        assert_eq!(prop.max, Some(1));
        assert_eq!(prop.visibility, Visibility::Private);
        assert!(prop.type_ref.is_none());
    }

    #[test]
    fn test_class_spec_preserves_declaration_order() {
        let mut spec = ClassSpec::new("Single");
        spec.add_property(PropertySpec::new("b"));
        spec.add_property(PropertySpec::new("a"));
        spec.add_property(PropertySpec::new("c"));

        let names: Vec<&str> = spec.properties().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["b", "a", "c"]);
        assert!(spec.has_property("a"));
        assert!(!spec.has_property("d"));
        assert_eq!(spec.property("c").map(|p| p.name.as_str()), Some("c"));
    }

    #[test]
    fn test_pure_value_wrapper_detection() {
        let wrapper = ClassSpec::new("SingleType").with_property(
            PropertySpec::new(VALUE_PROPERTY)
                .with_type(TypeRef::Native(NativeType::String)),
        );
        assert!(wrapper.is_pure_value_wrapper());

        let with_sibling = ClassSpec::new("SingleType")
            .with_property(
                PropertySpec::new(VALUE_PROPERTY)
                    .with_type(TypeRef::Native(NativeType::String)),
            )
            .with_property(PropertySpec::new("code"));
        assert!(!with_sibling.is_pure_value_wrapper());
    }

    #[test]
    fn test_restriction_table_preserves_value_order() {
        let mut table = RestrictionTable::new();
        table.add(VALUE_PROPERTY, CheckKind::Enumeration, "B");
        table.add(VALUE_PROPERTY, CheckKind::Enumeration, "A");

        assert_eq!(
            table.values(VALUE_PROPERTY, CheckKind::Enumeration),
            Some(["B".to_string(), "A".to_string()].as_slice())
        );
        assert!(table.has_checks(VALUE_PROPERTY));
        assert!(!table.has_checks("other"));
        assert!(table.values(VALUE_PROPERTY, CheckKind::Pattern).is_none());
    }
}
