//! Value-wrapper synthesis.
//!
//! A value wrapper represents a single scalar with optional restrictions.
//! Its surface is fixed: a reduced-visibility constructor delegating to the
//! combined accessor, a stringification method, the combined get/set
//! accessor, a static factory, and the restriction-checking routine whose
//! body the check emitters assemble in fixed kind order.
//!
//! The checking policy is transform-and-return: every check returns the
//! (possibly transformed) value and the combined accessor stores the
//! routine's result. The whiteSpace facet is the only transforming kind.

use crate::checks::CheckRoutineBuilder;
use crate::error::CodegenError;
use crate::members::{declared_display, type_display};
use crate::output::{Expr, GeneratedClass, GeneratedMethod, Parameter, Statement};
use crate::validation;
use xsdgen_model::{ClassSpec, PropertySpec, Visibility};

/// Name of the restriction-checking routine.
pub const CHECK_METHOD: &str = "_checkRestrictions";

/// Synthesizes the value-wrapper members onto the target class.
///
/// `value_prop` is the wrapped scalar slot (the derived class's own, or
/// the one inlined from an extended wrapper); the restriction checks come
/// from `spec`, the class being generated.
///
/// # Errors
/// Returns `CodegenError::InvalidPattern` if a declared pattern facet does
/// not compile.
pub(crate) fn synthesize_value_object(
    spec: &ClassSpec,
    value_prop: &PropertySpec,
    out: &mut GeneratedClass,
) -> Result<(), CodegenError> {
    let doc_type = declared_display(value_prop);
    let type_hint = value_prop
        .type_ref
        .as_ref()
        .filter(|t| !t.is_native())
        .map(type_display);

    let value_param = |default_null: bool| {
        let mut param = Parameter::new("value").with_doc_type(doc_type.clone());
        if let Some(hint) = &type_hint {
            param.type_hint = Some(hint.clone());
        }
        if default_null {
            param = param.with_default_null();
        }
        param
    };

    let mut constructor = GeneratedMethod::new("__construct");
    constructor.visibility = Visibility::Protected;
    constructor.doc = Some("Construct".to_string());
    constructor.parameters.push(value_param(false));
    constructor.body.push(Statement::CallOwnMethod {
        name: "value".to_string(),
        args: vec![Expr::Param("value".to_string())],
    });
    out.add_method(constructor);

    let mut to_string = GeneratedMethod::new("__toString");
    to_string.doc = Some("Gets a string value".to_string());
    to_string.doc_return = Some("string".to_string());
    to_string.body.push(Statement::Return(Expr::StringOf(Box::new(
        Expr::Field(value_prop.name.clone()),
    ))));
    out.add_method(to_string);

    let mut accessor = GeneratedMethod::new("value");
    accessor.doc = Some("Gets or sets the inner value".to_string());
    accessor.doc_return = Some(doc_type.clone());
    accessor.parameters.push(value_param(true));
    accessor.body.push(Statement::IfNotNull {
        param: "value".to_string(),
        then: vec![Statement::Assign {
            field: value_prop.name.clone(),
            value: Expr::CheckRestrictions(Box::new(Expr::Param("value".to_string()))),
        }],
    });
    accessor
        .body
        .push(Statement::Return(Expr::Field(value_prop.name.clone())));
    out.add_method(accessor);

    let mut factory = GeneratedMethod::new("create");
    factory.is_static = true;
    factory.doc = Some(format!("Helper to get a new instance of {}", out.name));
    factory.doc_return = Some(out.name.clone());
    factory.parameters.push(value_param(false));
    factory
        .body
        .push(Statement::Return(Expr::NewInstance(vec![Expr::Param(
            "value".to_string(),
        )])));
    out.add_method(factory);

    let mut check = GeneratedMethod::new(CHECK_METHOD);
    check.visibility = Visibility::Protected;
    check.doc = Some("Validate value".to_string());
    check.doc_return = Some(doc_type.clone());
    check.parameters.push(value_param(false));
    out.add_method(check);

    let mut body = Vec::new();
    CheckRoutineBuilder::new(spec, value_prop).assemble(out, &mut body)?;
    body.push(Statement::Return(Expr::Param("value".to_string())));
    if let Some(method) = out.method_mut(CHECK_METHOD) {
        method.body = body;
    }

    validation::push_statement(
        out,
        Statement::CallOwnMethod {
            name: CHECK_METHOD.to_string(),
            args: vec![Expr::Field(value_prop.name.clone())],
        },
    );

    Ok(())
}
