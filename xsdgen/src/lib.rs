//! # xsdgen
//!
//! Structured class-definition generator for XSD-derived class models.
//!
//! Given an abstract model of a class — properties, types, multiplicity,
//! restriction facets — xsdgen emits a complete, structured class
//! definition: constructors, accessors, validation logic and enumeration
//! constants, as an ordered artifact a downstream writer serializes into
//! actual source text.
//!
//! ## Quick Start
//!
//! ```
//! use xsdgen::prelude::*;
//!
//! let spec = ClassSpec::new("Single").with_property(
//!     PropertySpec::new("id").with_type(TypeRef::Native(NativeType::Int)),
//! );
//!
//! let class = Generator::new()
//!     .generate(&spec)
//!     .expect("well-formed model")
//!     .expect("not a bare wrapper");
//! assert!(class.has_method("getId"));
//! assert!(class.has_method("setId"));
//! ```
//!
//! ## Crate Organization
//!
//! - [`core`] - Restriction kinds, scalar values, runtime check functions
//! - [`model`] - The consumed class model and its well-formedness checks
//! - [`codegen`] - The generation engine and the structured output artifact

pub mod prelude;

/// Restriction kinds, scalar values and runtime check functions.
pub mod core {
    pub use xsdgen_core::*;
}

/// The consumed class model.
pub mod model {
    pub use xsdgen_model::*;
}

/// The generation engine and output artifact.
pub mod codegen {
    pub use xsdgen_codegen::*;
}
