//! Member synthesis: backing fields and accessor methods.
//!
//! Members are emitted in two passes — first every field, then every
//! method — so method bodies may reference sibling fields regardless of
//! declaration order. The internal value marker is never given ordinary
//! member accessors; the value-wrapper synthesizer owns that slot.

use crate::error::CodegenError;
use crate::output::{
    Expr, GeneratedClass, GeneratedField, GeneratedMethod, Parameter, Statement,
};
use xsdgen_model::{ClassSpec, PropertySpec, TypeRef, VALUE_PROPERTY};

/// Converts a property name to PascalCase for accessor naming.
pub(crate) fn to_pascal_case(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut capitalize_next = true;

    for c in s.chars() {
        if c == '_' || c == '-' {
            capitalize_next = true;
        } else if capitalize_next {
            result.extend(c.to_uppercase());
            capitalize_next = false;
        } else {
            result.push(c);
        }
    }

    result
}

/// Returns the declared display name of a type reference. Collections
/// render as their element type plus a list marker.
pub(crate) fn type_display(type_ref: &TypeRef) -> String {
    match type_ref {
        TypeRef::Native(native) => native.name().to_string(),
        TypeRef::Class(class_ref) => class_ref.name.clone(),
        TypeRef::Collection(element) => element
            .type_ref
            .as_ref()
            .map_or_else(|| "mixed[]".to_string(), |et| format!("{}[]", type_display(et))),
    }
}

/// Returns the display name with value wrappers unwrapped to their scalar
/// type.
pub(crate) fn unwrapped_display(type_ref: &TypeRef) -> String {
    if let TypeRef::Class(class_ref) = type_ref {
        if let Some(slot) = class_ref.as_value_wrapper() {
            if let Some(inner) = &slot.type_ref {
                return type_display(inner);
            }
        }
    }
    type_display(type_ref)
}

/// Returns the display name of a property's declared type: the element
/// type for collections, `mixed` when untyped.
pub(crate) fn declared_display(prop: &PropertySpec) -> String {
    match &prop.type_ref {
        None => "mixed".to_string(),
        Some(TypeRef::Collection(element)) => element
            .type_ref
            .as_ref()
            .map_or_else(|| "mixed".to_string(), type_display),
        Some(other) => type_display(other),
    }
}

/// Returns the widened documented type of a property, used for fields and
/// getter returns: collections unwrap their element wrappers and append a
/// list marker; a value-wrapper type with restrictions keeps its class
/// name, one without collapses to its scalar type.
pub(crate) fn widened_doc_type(prop: &PropertySpec) -> String {
    match &prop.type_ref {
        None => "mixed".to_string(),
        Some(TypeRef::Collection(element)) => element
            .type_ref
            .as_ref()
            .map_or_else(|| "mixed[]".to_string(), |et| format!("{}[]", unwrapped_display(et))),
        Some(TypeRef::Native(native)) => native.name().to_string(),
        Some(TypeRef::Class(class_ref)) => {
            if let Some(slot) = class_ref.as_value_wrapper() {
                if class_ref.has_value_checks() {
                    class_ref.name.clone()
                } else if let Some(inner) = &slot.type_ref {
                    type_display(inner)
                } else {
                    class_ref.name.clone()
                }
            } else {
                class_ref.name.clone()
            }
        }
    }
}

/// Synthesizes fields and accessor methods for every declared property
/// except the internal value marker.
///
/// # Errors
/// Returns `CodegenError::MissingElementType` if a collection property
/// lacks an element type.
pub(crate) fn synthesize_members(
    spec: &ClassSpec,
    out: &mut GeneratedClass,
) -> Result<(), CodegenError> {
    for prop in spec.properties() {
        if prop.name != VALUE_PROPERTY {
            emit_field(prop, out);
        }
    }
    for prop in spec.properties() {
        if prop.name != VALUE_PROPERTY {
            emit_property_methods(spec, prop, out)?;
        }
    }
    Ok(())
}

/// Emits the backing field for a property.
pub(crate) fn emit_field(prop: &PropertySpec, out: &mut GeneratedClass) {
    out.add_field(GeneratedField {
        name: prop.name.clone(),
        visibility: prop.visibility,
        doc: prop.doc.clone(),
        doc_type: Some(widened_doc_type(prop)),
    });
}

/// Emits the accessor methods for one property: adder plus isset/unset for
/// collections, then getter and setter.
fn emit_property_methods(
    spec: &ClassSpec,
    prop: &PropertySpec,
    out: &mut GeneratedClass,
) -> Result<(), CodegenError> {
    if let Some(element) = prop.type_ref.as_ref().and_then(TypeRef::as_collection) {
        emit_adder(spec, prop, element, out)?;
        emit_isset_unset(prop, out);
    }
    emit_getter(prop, out);
    emit_setter(prop, out);
    Ok(())
}

fn emit_adder(
    spec: &ClassSpec,
    prop: &PropertySpec,
    element: &PropertySpec,
    out: &mut GeneratedClass,
) -> Result<(), CodegenError> {
    let element_type = element
        .type_ref
        .as_ref()
        .ok_or_else(|| CodegenError::missing_element_type(&spec.name, &prop.name))?;

    let mut method = GeneratedMethod::new(format!("addTo{}", to_pascal_case(&prop.name)));
    method.doc = method_doc(format!("Adds as {}", element.name), prop.doc.as_deref());
    method.doc_return = Some("self".to_string());

    let mut param = Parameter::new(&element.name);
    match element_type {
        TypeRef::Native(native) => {
            param.doc_type = Some(native.name().to_string());
        }
        TypeRef::Class(class_ref) => {
            if let Some(slot) = class_ref.as_value_wrapper() {
                if let Some(inner) = &slot.type_ref {
                    param.doc_type = Some(type_display(inner));
                    if !inner.is_native() {
                        param.type_hint = Some(type_display(inner));
                    }
                } else {
                    param.doc_type = Some(class_ref.name.clone());
                }
            } else {
                param.doc_type = Some(class_ref.name.clone());
                param.type_hint = Some(class_ref.name.clone());
            }
        }
        TypeRef::Collection(_) => {
            param.doc_type = Some(type_display(element_type));
        }
    }
    method.parameters.push(param);

    let value = match element_type.as_class() {
        Some(c) if c.as_value_wrapper().is_some() && c.has_value_checks() => Expr::FactoryWrap {
            class: c.name.clone(),
            value: Box::new(Expr::Param(element.name.clone())),
        },
        _ => Expr::Param(element.name.clone()),
    };
    method.body.push(Statement::AppendTo {
        field: prop.name.clone(),
        value,
    });
    method.body.push(Statement::ReturnSelf);

    out.add_method(method);
    Ok(())
}

fn emit_isset_unset(prop: &PropertySpec, out: &mut GeneratedClass) {
    let pascal = to_pascal_case(&prop.name);

    let mut isset = GeneratedMethod::new(format!("isset{pascal}"));
    isset.doc = method_doc(format!("isset {}", prop.name), prop.doc.as_deref());
    isset.doc_return = Some("boolean".to_string());
    isset
        .parameters
        .push(Parameter::new("index").with_doc_type("scalar"));
    isset.body.push(Statement::Return(Expr::IndexExists {
        field: prop.name.clone(),
        index: Box::new(Expr::Param("index".to_string())),
    }));
    out.add_method(isset);

    let mut unset = GeneratedMethod::new(format!("unset{pascal}"));
    unset.doc = method_doc(format!("unset {}", prop.name), prop.doc.as_deref());
    unset.doc_return = Some("void".to_string());
    unset
        .parameters
        .push(Parameter::new("index").with_doc_type("scalar"));
    unset.body.push(Statement::RemoveAt {
        field: prop.name.clone(),
        index: Expr::Param("index".to_string()),
    });
    out.add_method(unset);
}

fn emit_getter(prop: &PropertySpec, out: &mut GeneratedClass) {
    let mut method = GeneratedMethod::new(format!("get{}", to_pascal_case(&prop.name)));
    method.doc = method_doc(format!("Gets as {}", prop.name), prop.doc.as_deref());
    method.doc_return = Some(widened_doc_type(prop));
    method
        .body
        .push(Statement::Return(Expr::Field(prop.name.clone())));
    out.add_method(method);
}

fn emit_setter(prop: &PropertySpec, out: &mut GeneratedClass) {
    let mut method = GeneratedMethod::new(format!("set{}", to_pascal_case(&prop.name)));
    method.doc = method_doc(format!("Sets a new {}", prop.name), prop.doc.as_deref());
    method.doc_return = Some("self".to_string());

    let mut param = Parameter::new(&prop.name);
    match &prop.type_ref {
        None => {}
        Some(TypeRef::Collection(element)) => {
            param.type_hint = Some("array".to_string());
            param.doc_type = Some(match &element.type_ref {
                Some(et) => format!("{}[]", unwrapped_display(et)),
                None => "mixed[]".to_string(),
            });
        }
        Some(TypeRef::Native(native)) => {
            param.doc_type = Some(native.name().to_string());
        }
        Some(TypeRef::Class(class_ref)) => {
            if let Some(slot) = class_ref.as_value_wrapper() {
                match &slot.type_ref {
                    Some(inner) if !inner.is_native() => {
                        param.doc_type = Some(type_display(inner));
                        param.type_hint = Some(type_display(inner));
                    }
                    Some(inner) => {
                        param.doc_type = Some(type_display(inner));
                    }
                    None => {
                        param.doc_type = Some(class_ref.name.clone());
                    }
                }
            } else {
                param.doc_type = Some(class_ref.name.clone());
                param.type_hint = Some(class_ref.name.clone());
            }
        }
    }
    method.parameters.push(param);

    method.body.push(Statement::Assign {
        field: prop.name.clone(),
        value: setter_value(prop),
    });
    method.body.push(Statement::ReturnSelf);

    out.add_method(method);
}

/// Returns the expression stored by a setter: the raw parameter, or the
/// parameter routed through a value wrapper's static factory when the
/// declared type (or collection element type) is a wrapper with
/// restrictions.
fn setter_value(prop: &PropertySpec) -> Expr {
    let param = Expr::Param(prop.name.clone());
    match &prop.type_ref {
        Some(TypeRef::Class(c)) if c.as_value_wrapper().is_some() && c.has_value_checks() => {
            Expr::FactoryWrap {
                class: c.name.clone(),
                value: Box::new(param),
            }
        }
        Some(TypeRef::Collection(element)) => {
            match element.type_ref.as_ref().and_then(TypeRef::as_class) {
                Some(c) if c.as_value_wrapper().is_some() && c.has_value_checks() => {
                    Expr::WrapEach {
                        class: c.name.clone(),
                        value: Box::new(param),
                    }
                }
                _ => param,
            }
        }
        _ => param,
    }
}

fn method_doc(short: String, prop_doc: Option<&str>) -> Option<String> {
    match prop_doc {
        Some(doc) => Some(format!("{short}\n\n{doc}")),
        None => Some(short),
    }
}
