//! Scalar value representation for restriction checking.

use serde::{Deserialize, Serialize};

/// A scalar value flowing through a generated checking routine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    /// String value.
    Str(String),
    /// Integer value.
    Int(i64),
    /// Floating point value.
    Float(f64),
    /// Boolean value.
    Bool(bool),
}

impl Value {
    /// Returns the numeric form of the value, if it has one.
    ///
    /// Numeric strings are parsed, so a decimal stored as `"12.5"` compares
    /// against bounds the same way `12.5` does.
    #[must_use]
    pub fn numeric(&self) -> Option<f64> {
        match self {
            Self::Str(s) => s.trim().parse().ok(),
            Self::Int(i) => Some(*i as f64),
            Self::Float(f) => Some(*f),
            Self::Bool(_) => None,
        }
    }

    /// Returns true if the value has a numeric form.
    #[must_use]
    pub fn is_numeric(&self) -> bool {
        self.numeric().is_some()
    }

    /// Returns the length of the value's string form in characters.
    #[must_use]
    pub fn char_len(&self) -> usize {
        match self {
            Self::Str(s) => s.chars().count(),
            other => other.to_string().chars().count(),
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Str(s) => f.write_str(s),
            Self::Int(i) => write!(f, "{i}"),
            Self::Float(v) => write!(f, "{v}"),
            Self::Bool(b) => f.write_str(if *b { "true" } else { "false" }),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::Str(s)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Self::Int(i)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Self::Float(f)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_forms() {
        assert_eq!(Value::Int(3).numeric(), Some(3.0));
        assert_eq!(Value::Float(1.25).numeric(), Some(1.25));
        assert_eq!(Value::from("12.5").numeric(), Some(12.5));
        assert_eq!(Value::from(" 7 ").numeric(), Some(7.0));
        assert_eq!(Value::from("abc").numeric(), None);
        assert_eq!(Value::Bool(true).numeric(), None);
    }

    #[test]
    fn test_string_form() {
        assert_eq!(Value::from("xy").to_string(), "xy");
        assert_eq!(Value::Int(-4).to_string(), "-4");
        assert_eq!(Value::Float(1.5).to_string(), "1.5");
        assert_eq!(Value::Bool(false).to_string(), "false");
    }

    #[test]
    fn test_char_len_counts_chars() {
        assert_eq!(Value::from("héllo").char_len(), 5);
        assert_eq!(Value::Int(120).char_len(), 3);
    }
}
