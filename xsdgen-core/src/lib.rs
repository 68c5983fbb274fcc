//! # xsdgen Core
//!
//! Core types and runtime support for xsdgen generated classes.
//!
//! This crate provides:
//! - Restriction kind definitions with their canonical emission order
//! - Whitespace facet handling modes
//! - A scalar `Value` type used when evaluating restriction checks
//! - Executable check functions implementing the restriction contracts
//! - Error types distinguishing restriction violations from occurrence
//!   violations

pub mod check;
pub mod error;
pub mod restrict;
pub mod value;

pub use check::{CheckKind, WhiteSpaceHandling};
pub use error::ValueError;
pub use restrict::{apply_check, check_occurs};
pub use value::Value;
