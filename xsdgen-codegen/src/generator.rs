//! Class assembly.
//!
//! `Generator::generate` orchestrates the synthesizers over one class spec:
//! it validates the model, creates the output shell, ensures the shared
//! validation routine, resolves inheritance, synthesizes members, extends
//! the validation routine per property, and suppresses bare value wrappers.

use crate::error::CodegenError;
use crate::members;
use crate::output::{BaseClass, GeneratedClass, UseDecl};
use crate::validation;
use crate::value_wrapper;
use xsdgen_model::{ClassRef, ClassSpec, VALUE_PROPERTY};

/// Generator for class definitions.
#[derive(Debug, Default)]
pub struct Generator;

impl Generator {
    /// Creates a new generator.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Generates one class definition from a class spec.
    ///
    /// Returns `Ok(None)` for a bare value wrapper: a class whose only
    /// property is the internal value marker and which inlined no wrapper
    /// content via extension is folded away rather than emitted as a
    /// near-empty class.
    ///
    /// # Errors
    /// Returns `CodegenError` on a malformed model or an invalid declared
    /// pattern; no partial output is produced.
    pub fn generate(&self, spec: &ClassSpec) -> Result<Option<GeneratedClass>, CodegenError> {
        xsdgen_model::validate_class(spec)?;
        tracing::debug!("Generating class '{}'", spec.name);

        let mut out = GeneratedClass::new(&spec.name);
        out.namespace = spec.namespace.clone();
        out.doc = Some(class_doc(spec));

        validation::ensure_routine(&mut out);

        let mut inlined_wrapper = false;
        if let Some(extends) = &spec.extends {
            if let Some(value_prop) = extends.as_value_wrapper() {
                members::emit_field(value_prop, &mut out);
                value_wrapper::synthesize_value_object(spec, value_prop, &mut out)?;
                out.base = BaseClass::InlinedWrapper;
                inlined_wrapper = true;
            } else {
                resolve_base(spec, extends, &mut out);
            }
        }

        members::synthesize_members(spec, &mut out)?;

        for prop in spec.properties() {
            if prop.name != VALUE_PROPERTY {
                validation::extend_for_property(spec, prop, &mut out)?;
            }
        }

        if spec.is_pure_value_wrapper() && !inlined_wrapper {
            tracing::debug!("Suppressing bare value wrapper '{}'", spec.name);
            return Ok(None);
        }

        Ok(Some(out))
    }
}

fn class_doc(spec: &ClassSpec) -> String {
    match &spec.doc {
        Some(doc) => format!("Class representing {}\n\n{}", spec.name, doc),
        None => format!("Class representing {}", spec.name),
    }
}

/// Sets a language-level base-class relationship, aliasing the import when
/// the base shares the derived class's simple name across namespaces.
fn resolve_base(spec: &ClassSpec, extends: &ClassRef, out: &mut GeneratedClass) {
    let alias = if extends.namespace != spec.namespace {
        let alias = (extends.name == spec.name).then(|| format!("{}Base", extends.name));
        out.uses.push(UseDecl {
            name: extends.name.clone(),
            namespace: extends.namespace.clone(),
            alias: alias.clone(),
        });
        alias
    } else {
        None
    };

    out.base = BaseClass::Extends {
        name: extends.name.clone(),
        namespace: extends.namespace.clone(),
        alias,
    };
}
