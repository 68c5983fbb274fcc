//! # xsdgen Codegen
//!
//! Class-definition generation engine for xsdgen.
//!
//! This crate provides:
//! - A `Generator` producing one structured `GeneratedClass` per class spec
//! - Member synthesis (fields, getters, setters, adders, index accessors)
//! - Value-wrapper synthesis with restriction-checking routines
//! - Validation routine assembly
//! - The structured statement model consumed by downstream writers

pub mod checks;
pub mod error;
pub mod generator;
pub mod members;
pub mod output;
pub mod validation;
pub mod value_wrapper;

pub use error::CodegenError;
pub use generator::Generator;
pub use output::{
    BaseClass, Expr, GeneratedClass, GeneratedConst, GeneratedField, GeneratedMethod,
    Parameter, Statement, UseDecl,
};
pub use validation::VALIDATE_METHOD;
pub use value_wrapper::CHECK_METHOD;

use xsdgen_model::ClassSpec;

/// Generates one class definition from a class spec.
///
/// Returns `Ok(None)` when the spec is a bare value wrapper that is folded
/// away rather than emitted.
///
/// # Errors
/// Returns `CodegenError` if the model is malformed or a declared pattern
/// facet does not compile.
pub fn generate(spec: &ClassSpec) -> Result<Option<GeneratedClass>, CodegenError> {
    Generator::new().generate(spec)
}
