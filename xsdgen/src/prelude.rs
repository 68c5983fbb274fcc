//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types.
//!
//! ```
//! use xsdgen::prelude::*;
//! ```

// Core types
pub use xsdgen_core::{apply_check, check_occurs, CheckKind, Value, ValueError, WhiteSpaceHandling};

// Model types
pub use xsdgen_model::{
    validate_class, ClassRef, ClassSpec, ModelError, NativeType, PropertySpec,
    RestrictionTable, TypeRef, Visibility, VALUE_PROPERTY,
};

// Codegen types
pub use xsdgen_codegen::{
    generate, BaseClass, CodegenError, Expr, GeneratedClass, GeneratedConst, GeneratedField,
    GeneratedMethod, Generator, Parameter, Statement, UseDecl, CHECK_METHOD, VALIDATE_METHOD,
};
