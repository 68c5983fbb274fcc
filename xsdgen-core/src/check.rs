//! Restriction kind definitions.
//!
//! This module defines the restriction kinds derived from XML Schema facets,
//! their facet names, and the fixed order in which check statements are
//! emitted into a generated checking routine.

use serde::{Deserialize, Serialize};

/// Restriction kind derived from an XML Schema facet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum CheckKind {
    /// Fixed list of acceptable values.
    Enumeration,
    /// Anchored regular expression the value must fully match.
    Pattern,
    /// Maximum number of decimal places (float values only).
    FractionDigits,
    /// Exact number of significant digits.
    TotalDigits,
    /// Exact length (string length, or numeric equality for numbers).
    Length,
    /// Maximum length.
    MaxLength,
    /// Minimum length.
    MinLength,
    /// Exclusive upper bound.
    MaxExclusive,
    /// Exclusive lower bound.
    MinExclusive,
    /// Inclusive upper bound.
    MaxInclusive,
    /// Inclusive lower bound.
    MinInclusive,
    /// Whitespace normalization mode.
    WhiteSpace,
}

impl CheckKind {
    /// The fixed order in which check statements are emitted into a
    /// generated checking routine, regardless of declaration order.
    pub const EMISSION_ORDER: [Self; 12] = [
        Self::Enumeration,
        Self::Pattern,
        Self::FractionDigits,
        Self::TotalDigits,
        Self::Length,
        Self::MaxLength,
        Self::MinLength,
        Self::MaxExclusive,
        Self::MinExclusive,
        Self::MaxInclusive,
        Self::MinInclusive,
        Self::WhiteSpace,
    ];

    /// Returns the XML Schema facet name for this kind.
    #[must_use]
    pub const fn facet_name(&self) -> &'static str {
        match self {
            Self::Enumeration => "enumeration",
            Self::Pattern => "pattern",
            Self::FractionDigits => "fractionDigits",
            Self::TotalDigits => "totalDigits",
            Self::Length => "length",
            Self::MaxLength => "maxLength",
            Self::MinLength => "minLength",
            Self::MaxExclusive => "maxExclusive",
            Self::MinExclusive => "minExclusive",
            Self::MaxInclusive => "maxInclusive",
            Self::MinInclusive => "minInclusive",
            Self::WhiteSpace => "whiteSpace",
        }
    }

    /// Parses a facet name into a check kind.
    #[must_use]
    pub fn from_facet_name(name: &str) -> Option<Self> {
        Self::EMISSION_ORDER
            .iter()
            .copied()
            .find(|kind| kind.facet_name() == name)
    }
}

impl std::fmt::Display for CheckKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.facet_name())
    }
}

/// Whitespace handling mode of the XSD `whiteSpace` facet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum WhiteSpaceHandling {
    /// Leave the value unchanged.
    #[default]
    Preserve,
    /// Replace tabs, line feeds and carriage returns with single spaces.
    Replace,
    /// Additionally trim and collapse runs of spaces to one.
    Collapse,
}

impl WhiteSpaceHandling {
    /// Parses a whitespace mode from its facet value.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "preserve" => Some(Self::Preserve),
            "replace" => Some(Self::Replace),
            "collapse" => Some(Self::Collapse),
            _ => None,
        }
    }

    /// Returns the facet value for this mode.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Preserve => "preserve",
            Self::Replace => "replace",
            Self::Collapse => "collapse",
        }
    }
}
