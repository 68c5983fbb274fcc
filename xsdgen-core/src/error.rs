//! Error types raised by generated validation and checking routines.

use crate::check::CheckKind;
use thiserror::Error;

/// Runtime error taxonomy for generated class validation.
///
/// Restriction violations ("bad value") are deliberately distinct from
/// occurrence violations ("bad shape") so callers can tell them apart.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValueError {
    /// A restriction check failed for a value.
    #[error("restriction '{kind}' violated by value '{value}' (constraint: {constraint})")]
    RestrictionViolation {
        /// The restriction kind that failed.
        kind: CheckKind,
        /// String form of the offending value.
        value: String,
        /// The declared constraint that was not satisfied.
        constraint: String,
    },

    /// A field's occurrence count fell outside its declared range.
    #[error(
        "required field '{field}' has {count} occurrences, expected between {min} and {}",
        display_max(.max)
    )]
    RequiredFieldViolation {
        /// Field name.
        field: String,
        /// Observed occurrence count.
        count: usize,
        /// Declared minimum.
        min: u32,
        /// Declared maximum (None = unbounded).
        max: Option<u32>,
    },
}

fn display_max(max: &Option<u32>) -> String {
    match max {
        Some(m) => m.to_string(),
        None => "unbounded".to_string(),
    }
}

impl ValueError {
    /// Creates a restriction violation for the given kind and value.
    pub fn restriction(
        kind: CheckKind,
        value: impl std::fmt::Display,
        constraint: impl Into<String>,
    ) -> Self {
        Self::RestrictionViolation {
            kind,
            value: value.to_string(),
            constraint: constraint.into(),
        }
    }
}
