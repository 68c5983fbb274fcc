//! Validation routine assembly.
//!
//! Every generated class gets exactly one validation routine. The routine
//! is created once and then extended with per-property statements in
//! declaration order: occurrence-count checks for required properties,
//! nested validation calls for referenced classes, and per-element loops
//! for collections of non-native elements.

use crate::error::CodegenError;
use crate::output::{GeneratedClass, GeneratedMethod, Statement};
use xsdgen_model::{ClassSpec, PropertySpec, TypeRef};

/// Name of the shared validation routine.
pub const VALIDATE_METHOD: &str = "validate";

/// Ensures the validation routine exists on the class. Idempotent: a
/// second call leaves the existing routine untouched.
pub(crate) fn ensure_routine(out: &mut GeneratedClass) {
    if !out.has_method(VALIDATE_METHOD) {
        let mut method = GeneratedMethod::new(VALIDATE_METHOD);
        method.doc =
            Some("Validates the instance against its declared constraints".to_string());
        out.add_method(method);
    }
}

/// Appends a statement to the validation routine, creating it if needed.
pub(crate) fn push_statement(out: &mut GeneratedClass, statement: Statement) {
    ensure_routine(out);
    if let Some(method) = out.method_mut(VALIDATE_METHOD) {
        method.body.push(statement);
    }
}

/// Extends the validation routine with the checks owed to one property.
///
/// Collection properties use their element descriptor's occurrence bounds
/// as the element-count range; a collection of native elements gets the
/// count check only, while non-native elements are validated one by one.
///
/// # Errors
/// Returns `CodegenError::MissingElementType` if a collection property
/// lacks an element type.
pub(crate) fn extend_for_property(
    spec: &ClassSpec,
    prop: &PropertySpec,
    out: &mut GeneratedClass,
) -> Result<(), CodegenError> {
    if let Some(element) = prop.type_ref.as_ref().and_then(TypeRef::as_collection) {
        let element_type = element
            .type_ref
            .as_ref()
            .ok_or_else(|| CodegenError::missing_element_type(&spec.name, &prop.name))?;

        if element.min > 0 {
            push_statement(
                out,
                Statement::RequireCount {
                    field: prop.name.clone(),
                    min: element.min,
                    max: element.max,
                },
            );
        }
        if element_type.as_class().is_some() {
            push_statement(
                out,
                Statement::ValidateElements {
                    field: prop.name.clone(),
                },
            );
        }
    } else {
        if prop.min > 0 {
            push_statement(
                out,
                Statement::RequireCount {
                    field: prop.name.clone(),
                    min: prop.min,
                    max: prop.max,
                },
            );
        }
        if prop.type_ref.as_ref().is_some_and(|t| t.as_class().is_some()) {
            push_statement(
                out,
                Statement::ValidateField {
                    field: prop.name.clone(),
                },
            );
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use xsdgen_model::{ClassRef, NativeType};

    #[test]
    fn test_ensure_routine_is_idempotent() {
        let mut out = GeneratedClass::new("Single");
        ensure_routine(&mut out);
        ensure_routine(&mut out);

        let count = out
            .methods
            .iter()
            .filter(|m| m.name == VALIDATE_METHOD)
            .count();
        assert_eq!(count, 1);
    }

    #[test]
    fn test_required_scalar_gets_presence_check() {
        let spec = ClassSpec::new("Single");
        let prop = PropertySpec::new("id")
            .with_type(TypeRef::Native(NativeType::Int))
            .with_occurs(1, Some(1));
        let mut out = GeneratedClass::new("Single");

        extend_for_property(&spec, &prop, &mut out).expect("extension should succeed");
        let validate = out.method(VALIDATE_METHOD).expect("routine should exist");
        assert_eq!(
            validate.body,
            [Statement::RequireCount {
                field: "id".to_string(),
                min: 1,
                max: Some(1),
            }]
        );
    }

    #[test]
    fn test_optional_native_property_adds_nothing() {
        let spec = ClassSpec::new("Single");
        let prop = PropertySpec::new("id").with_type(TypeRef::Native(NativeType::Int));
        let mut out = GeneratedClass::new("Single");
        ensure_routine(&mut out);

        extend_for_property(&spec, &prop, &mut out).expect("extension should succeed");
        let validate = out.method(VALIDATE_METHOD).expect("routine should exist");
        assert!(validate.body.is_empty());
    }

    #[test]
    fn test_required_collection_uses_element_bounds() {
        let spec = ClassSpec::new("Single");
        let element = PropertySpec::new("item")
            .with_type(TypeRef::Native(NativeType::String))
            .with_occurs(1, None);
        let prop = PropertySpec::new("items").with_type(TypeRef::collection(element));
        let mut out = GeneratedClass::new("Single");

        extend_for_property(&spec, &prop, &mut out).expect("extension should succeed");
        let validate = out.method(VALIDATE_METHOD).expect("routine should exist");
        // native elements: a single collection-level count check, no
        // per-element loop
        assert_eq!(
            validate.body,
            [Statement::RequireCount {
                field: "items".to_string(),
                min: 1,
                max: None,
            }]
        );
    }

    #[test]
    fn test_collection_of_class_elements_validates_each() {
        let spec = ClassSpec::new("Single");
        let element = PropertySpec::new("entry")
            .with_type(TypeRef::Class(ClassRef::new("EntryType")))
            .with_occurs(2, Some(5));
        let prop = PropertySpec::new("entries").with_type(TypeRef::collection(element));
        let mut out = GeneratedClass::new("Single");

        extend_for_property(&spec, &prop, &mut out).expect("extension should succeed");
        let validate = out.method(VALIDATE_METHOD).expect("routine should exist");
        assert_eq!(
            validate.body,
            [
                Statement::RequireCount {
                    field: "entries".to_string(),
                    min: 2,
                    max: Some(5),
                },
                Statement::ValidateElements {
                    field: "entries".to_string(),
                },
            ]
        );
    }

    #[test]
    fn test_single_class_reference_validates_nested() {
        let spec = ClassSpec::new("Single");
        let prop = PropertySpec::new("header")
            .with_type(TypeRef::Class(ClassRef::new("HeaderType")));
        let mut out = GeneratedClass::new("Single");

        extend_for_property(&spec, &prop, &mut out).expect("extension should succeed");
        let validate = out.method(VALIDATE_METHOD).expect("routine should exist");
        assert_eq!(
            validate.body,
            [Statement::ValidateField {
                field: "header".to_string(),
            }]
        );
    }

    #[test]
    fn test_missing_element_type_fails() {
        let spec = ClassSpec::new("Single");
        let prop = PropertySpec::new("items")
            .with_type(TypeRef::collection(PropertySpec::new("item")));
        let mut out = GeneratedClass::new("Single");

        let err = extend_for_property(&spec, &prop, &mut out).unwrap_err();
        assert_eq!(err, CodegenError::missing_element_type("Single", "items"));
    }
}
