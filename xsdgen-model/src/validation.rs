//! Model well-formedness validation.
//!
//! A malformed model is a configuration error, distinct from the runtime
//! errors raised by generated validation code. The generation engine
//! validates each class spec before emitting anything, so it can fail fast
//! with a descriptive error instead of producing partially-correct output.

use crate::class::{ClassSpec, PropertySpec, VALUE_PROPERTY};
use crate::error::ModelError;
use crate::types::{ClassRef, TypeRef};
use std::collections::HashSet;

/// Validates a class spec for well-formedness.
///
/// # Errors
/// Returns `ModelError` identifying the offending class and property if the
/// spec declares duplicate property names, a collection without an element
/// type, or restriction checks without a value slot to apply them to.
pub fn validate_class(spec: &ClassSpec) -> Result<(), ModelError> {
    let mut seen = HashSet::new();
    for prop in spec.properties() {
        if !seen.insert(prop.name.as_str()) {
            return Err(ModelError::duplicate_property(&spec.name, &prop.name));
        }
        validate_property(spec, prop)?;
    }

    if spec.checks.has_checks(VALUE_PROPERTY)
        && !spec.has_property(VALUE_PROPERTY)
        && spec
            .extends
            .as_ref()
            .and_then(ClassRef::as_value_wrapper)
            .is_none()
    {
        return Err(ModelError::RestrictionWithoutValueSlot {
            class: spec.name.clone(),
        });
    }

    Ok(())
}

/// Validates a single property declaration, recursing into collection
/// element descriptors.
fn validate_property(spec: &ClassSpec, prop: &PropertySpec) -> Result<(), ModelError> {
    if let Some(TypeRef::Collection(element)) = &prop.type_ref {
        if element.type_ref.is_none() {
            return Err(ModelError::missing_element_type(&spec.name, &prop.name));
        }
        validate_property(spec, element)?;
    }
    Ok(())
}
