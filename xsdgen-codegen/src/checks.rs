//! Restriction check selection and emission.
//!
//! Every restriction kind shares one applicability contract: the owning
//! class must carry values for the kind under its internal value marker,
//! and the checked property must be scalar (native) typed. Each kind then
//! emits its own check statements into the shared checking routine, in the
//! fixed order defined by `CheckKind::EMISSION_ORDER`.

use crate::error::CodegenError;
use crate::members::declared_display;
use crate::output::{Expr, GeneratedClass, GeneratedConst, GeneratedMethod, Statement};
use xsdgen_core::CheckKind;
use xsdgen_model::{ClassSpec, NativeType, PropertySpec, VALUE_PROPERTY};

/// Returns the ordered check values for a kind, or None when the kind does
/// not apply.
///
/// Applicability rules, in order: the owning class must have a non-empty
/// check table for the internal value marker; the table must carry a
/// non-empty entry for the kind; the property's type, when present, must be
/// native; and when a specific native type is required, the property must
/// declare exactly that type.
pub(crate) fn available_checks<'a>(
    prop: &PropertySpec,
    class: &'a ClassSpec,
    kind: CheckKind,
    required_native: Option<NativeType>,
) -> Option<&'a [String]> {
    let table = class.checks.checks_for(VALUE_PROPERTY)?;
    if table.is_empty() {
        return None;
    }

    let values = table.get(&kind)?;
    if values.is_empty() {
        return None;
    }

    if let Some(type_ref) = &prop.type_ref {
        if !type_ref.is_native() {
            return None;
        }
    }

    if let Some(required) = required_native {
        match prop.type_ref.as_ref().and_then(xsdgen_model::TypeRef::native) {
            Some(native) if native == required => {}
            _ => return None,
        }
    }

    Some(values)
}

/// Derives an enumeration constant name from a declared value: `V_` plus
/// the uppercased value with runs of non-alphanumeric characters replaced
/// by a single underscore.
pub(crate) fn constant_name(value: &str) -> String {
    let mut name = String::from("V_");
    let mut in_separator = false;
    for c in value.chars() {
        if c.is_ascii_alphanumeric() {
            name.push(c.to_ascii_uppercase());
            in_separator = false;
        } else if !in_separator {
            name.push('_');
            in_separator = true;
        }
    }
    name
}

/// Assembles the body of a restriction-checking routine by running every
/// check emitter in the fixed emission order.
pub(crate) struct CheckRoutineBuilder<'a> {
    class: &'a ClassSpec,
    prop: &'a PropertySpec,
}

impl<'a> CheckRoutineBuilder<'a> {
    /// Creates a builder for the given owning class and checked property.
    pub(crate) fn new(class: &'a ClassSpec, prop: &'a PropertySpec) -> Self {
        Self { class, prop }
    }

    /// Appends check statements for every applicable kind, in emission
    /// order. Enumeration additionally synthesizes constants and the
    /// `values()` method on the target class.
    ///
    /// # Errors
    /// Returns `CodegenError::InvalidPattern` if a declared pattern facet
    /// does not compile.
    pub(crate) fn assemble(
        &self,
        target: &mut GeneratedClass,
        body: &mut Vec<Statement>,
    ) -> Result<(), CodegenError> {
        for kind in CheckKind::EMISSION_ORDER {
            match kind {
                CheckKind::Enumeration => self.emit_enumeration(target, body),
                CheckKind::Pattern => self.emit_pattern(body)?,
                CheckKind::FractionDigits => {
                    self.emit_per_value(kind, Some(NativeType::Float), body);
                }
                _ => self.emit_per_value(kind, None, body),
            }
        }
        Ok(())
    }

    /// Emits the enumeration check: one constant per distinct declared
    /// value, a static `values()` method, and a single check statement
    /// against the full value list.
    fn emit_enumeration(&self, target: &mut GeneratedClass, body: &mut Vec<Statement>) {
        let Some(values) =
            available_checks(self.prop, self.class, CheckKind::Enumeration, None)
        else {
            return;
        };

        let doc_type = declared_display(self.prop);
        let mut constant_names = Vec::new();
        for value in values {
            let name = constant_name(value);
            if !constant_names.contains(&name) {
                constant_names.push(name.clone());
            }
            if !target.has_constant(&name) {
                target.add_constant(GeneratedConst {
                    name,
                    value: value.clone(),
                    doc_type: Some(doc_type.clone()),
                });
            }
        }

        if !target.has_method("values") {
            let mut method = GeneratedMethod::new("values");
            method.is_static = true;
            method.doc = Some("Gets all possible values".to_string());
            method.doc_return = Some("array".to_string());
            method
                .body
                .push(Statement::Return(Expr::ConstantList(constant_names)));
            target.add_method(method);
        }

        body.push(Statement::ApplyCheck {
            kind: CheckKind::Enumeration,
            args: values.to_vec(),
        });
    }

    /// Emits one anchored-match check per declared pattern, validating each
    /// pattern at generation time.
    fn emit_pattern(&self, body: &mut Vec<Statement>) -> Result<(), CodegenError> {
        let Some(patterns) =
            available_checks(self.prop, self.class, CheckKind::Pattern, None)
        else {
            return Ok(());
        };

        for pattern in patterns {
            regex::Regex::new(&format!("^(?:{pattern})$")).map_err(|e| {
                CodegenError::invalid_pattern(&self.class.name, pattern, e.to_string())
            })?;
            body.push(Statement::ApplyCheck {
                kind: CheckKind::Pattern,
                args: vec![pattern.clone()],
            });
        }
        Ok(())
    }

    /// Emits one check statement per declared value for the remaining
    /// kinds.
    fn emit_per_value(
        &self,
        kind: CheckKind,
        required_native: Option<NativeType>,
        body: &mut Vec<Statement>,
    ) {
        let Some(values) = available_checks(self.prop, self.class, kind, required_native)
        else {
            return;
        };

        for value in values {
            body.push(Statement::ApplyCheck {
                kind,
                args: vec![value.clone()],
            });
        }
    }
}
