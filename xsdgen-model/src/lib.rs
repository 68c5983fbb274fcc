//! # xsdgen Model
//!
//! Abstract class model consumed by the xsdgen generation engine.
//!
//! This crate provides:
//! - `ClassSpec` / `PropertySpec` — classes with ordered, named properties
//! - `TypeRef` — tagged type references (native, collection, class)
//! - `ClassRef` — references to other generated classes, carrying their
//!   value-wrapper shape and restriction tables
//! - `RestrictionTable` — facet check values keyed by property and kind
//! - Model well-formedness validation for fail-fast generation
//!
//! Instances are produced by an external schema-to-model translator before
//! generation begins; the generation engine only reads them.

pub mod class;
pub mod error;
pub mod types;
pub mod validation;

pub use class::{ClassSpec, PropertySpec, RestrictionTable, Visibility, VALUE_PROPERTY};
pub use error::ModelError;
pub use types::{ClassRef, NativeType, TypeRef};
pub use validation::validate_class;
