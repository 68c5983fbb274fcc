//! Executable restriction checks.
//!
//! These functions implement the behavior contracts of the checking code
//! emitted into generated classes. Every check follows the same policy: it
//! validates the incoming value and returns it, transformed where the facet
//! calls for a transformation (`whiteSpace` is the only transforming kind).

use crate::check::{CheckKind, WhiteSpaceHandling};
use crate::error::ValueError;
use crate::value::Value;

/// Checks that the value equals one of the declared allowed values.
///
/// # Errors
/// Returns `RestrictionViolation` if the value is not in the allowed set.
pub fn check_enumeration(value: Value, allowed: &[String]) -> Result<Value, ValueError> {
    let form = value.to_string();
    if allowed.iter().any(|a| *a == form) {
        Ok(value)
    } else {
        Err(ValueError::restriction(
            CheckKind::Enumeration,
            form,
            allowed.join(", "),
        ))
    }
}

/// Checks that the value fully matches the anchored pattern.
///
/// # Errors
/// Returns `RestrictionViolation` if the value does not match, or if the
/// declared pattern is not a valid regular expression.
pub fn check_pattern(value: Value, pattern: &str) -> Result<Value, ValueError> {
    let anchored = format!("^(?:{pattern})$");
    let re = regex::Regex::new(&anchored)
        .map_err(|_| ValueError::restriction(CheckKind::Pattern, &value, pattern))?;
    if re.is_match(&value.to_string()) {
        Ok(value)
    } else {
        Err(ValueError::restriction(CheckKind::Pattern, &value, pattern))
    }
}

/// Checks that a numeric value has at most `digits` decimal places.
///
/// # Errors
/// Returns `RestrictionViolation` if the value is not numeric or carries
/// more decimal places than declared.
pub fn check_fraction_digits(value: Value, digits: u32) -> Result<Value, ValueError> {
    if !value.is_numeric() {
        return Err(ValueError::restriction(
            CheckKind::FractionDigits,
            &value,
            digits.to_string(),
        ));
    }
    let form = value.to_string();
    let fraction = form
        .split_once('.')
        .map_or(0, |(_, tail)| tail.chars().filter(char::is_ascii_digit).count());
    if fraction <= digits as usize {
        Ok(value)
    } else {
        Err(ValueError::restriction(
            CheckKind::FractionDigits,
            form,
            digits.to_string(),
        ))
    }
}

/// Checks that the value carries exactly `digits` significant digits.
///
/// # Errors
/// Returns `RestrictionViolation` if the value is not numeric or its
/// significant digit count differs from the declared count.
pub fn check_total_digits(value: Value, digits: u32) -> Result<Value, ValueError> {
    if !value.is_numeric() {
        return Err(ValueError::restriction(
            CheckKind::TotalDigits,
            &value,
            digits.to_string(),
        ));
    }
    let form = value.to_string();
    if significant_digits(&form) == digits as usize {
        Ok(value)
    } else {
        Err(ValueError::restriction(
            CheckKind::TotalDigits,
            form,
            digits.to_string(),
        ))
    }
}

/// Checks the exact-length facet: string length for strings, numeric
/// equality for numeric values.
///
/// # Errors
/// Returns `RestrictionViolation` if the length (or numeric value) differs
/// from the declared value.
pub fn check_length(value: Value, length: u32) -> Result<Value, ValueError> {
    let ok = match &value {
        Value::Str(s) => s.chars().count() == length as usize,
        Value::Int(_) | Value::Float(_) => value.numeric() == Some(f64::from(length)),
        Value::Bool(_) => value.char_len() == length as usize,
    };
    if ok {
        Ok(value)
    } else {
        Err(ValueError::restriction(
            CheckKind::Length,
            &value,
            length.to_string(),
        ))
    }
}

/// Checks that the value's length does not exceed the declared maximum.
///
/// # Errors
/// Returns `RestrictionViolation` if the length exceeds the maximum.
pub fn check_max_length(value: Value, length: u32) -> Result<Value, ValueError> {
    if value.char_len() <= length as usize {
        Ok(value)
    } else {
        Err(ValueError::restriction(
            CheckKind::MaxLength,
            &value,
            length.to_string(),
        ))
    }
}

/// Checks that the value's length is at least the declared minimum.
///
/// # Errors
/// Returns `RestrictionViolation` if the length is below the minimum.
pub fn check_min_length(value: Value, length: u32) -> Result<Value, ValueError> {
    if value.char_len() >= length as usize {
        Ok(value)
    } else {
        Err(ValueError::restriction(
            CheckKind::MinLength,
            &value,
            length.to_string(),
        ))
    }
}

/// Checks that the value is strictly below the declared bound.
///
/// # Errors
/// Returns `RestrictionViolation` if the comparison fails or either side is
/// not numeric.
pub fn check_max_exclusive(value: Value, bound: &str) -> Result<Value, ValueError> {
    check_bound(value, bound, CheckKind::MaxExclusive, |v, b| v < b)
}

/// Checks that the value is strictly above the declared bound.
///
/// # Errors
/// Returns `RestrictionViolation` if the comparison fails or either side is
/// not numeric.
pub fn check_min_exclusive(value: Value, bound: &str) -> Result<Value, ValueError> {
    check_bound(value, bound, CheckKind::MinExclusive, |v, b| v > b)
}

/// Checks that the value is at most the declared bound.
///
/// # Errors
/// Returns `RestrictionViolation` if the comparison fails or either side is
/// not numeric.
pub fn check_max_inclusive(value: Value, bound: &str) -> Result<Value, ValueError> {
    check_bound(value, bound, CheckKind::MaxInclusive, |v, b| v <= b)
}

/// Checks that the value is at least the declared bound.
///
/// # Errors
/// Returns `RestrictionViolation` if the comparison fails or either side is
/// not numeric.
pub fn check_min_inclusive(value: Value, bound: &str) -> Result<Value, ValueError> {
    check_bound(value, bound, CheckKind::MinInclusive, |v, b| v >= b)
}

/// Applies a whitespace handling mode to the value.
///
/// `preserve` leaves the value unchanged, `replace` turns tabs, line feeds
/// and carriage returns into single spaces, and `collapse` additionally
/// trims and collapses runs of spaces to one.
///
/// # Errors
/// Infallible for well-formed modes; present for uniformity with the other
/// checks.
pub fn check_white_space(value: Value, mode: WhiteSpaceHandling) -> Result<Value, ValueError> {
    match value {
        Value::Str(s) => {
            let transformed = match mode {
                WhiteSpaceHandling::Preserve => s,
                WhiteSpaceHandling::Replace => s.replace(['\t', '\n', '\r'], " "),
                WhiteSpaceHandling::Collapse => {
                    s.split_whitespace().collect::<Vec<_>>().join(" ")
                }
            };
            Ok(Value::Str(transformed))
        }
        other => Ok(other),
    }
}

/// Asserts that an occurrence count lies within the declared range.
///
/// # Errors
/// Returns `RequiredFieldViolation` if the count is below `min` or above
/// `max` (when bounded).
pub fn check_occurs(
    field: &str,
    count: usize,
    min: u32,
    max: Option<u32>,
) -> Result<(), ValueError> {
    let below = count < min as usize;
    let above = max.is_some_and(|m| count > m as usize);
    if below || above {
        Err(ValueError::RequiredFieldViolation {
            field: field.to_string(),
            count,
            min,
            max,
        })
    } else {
        Ok(())
    }
}

/// Dispatches a check by kind, with the declared facet values as raw
/// strings.
///
/// Kinds declared with multiple values apply each in declaration order
/// (patterns are ANDed); enumeration consumes the whole value list at once.
///
/// # Errors
/// Returns `RestrictionViolation` if any applied check fails or a declared
/// facet value cannot be interpreted for the kind.
pub fn apply_check(kind: CheckKind, value: Value, args: &[String]) -> Result<Value, ValueError> {
    match kind {
        CheckKind::Enumeration => check_enumeration(value, args),
        CheckKind::Pattern => args
            .iter()
            .try_fold(value, |v, pattern| check_pattern(v, pattern)),
        CheckKind::FractionDigits => {
            apply_numeric(kind, value, args, check_fraction_digits)
        }
        CheckKind::TotalDigits => apply_numeric(kind, value, args, check_total_digits),
        CheckKind::Length => apply_numeric(kind, value, args, check_length),
        CheckKind::MaxLength => apply_numeric(kind, value, args, check_max_length),
        CheckKind::MinLength => apply_numeric(kind, value, args, check_min_length),
        CheckKind::MaxExclusive => args
            .iter()
            .try_fold(value, |v, bound| check_max_exclusive(v, bound)),
        CheckKind::MinExclusive => args
            .iter()
            .try_fold(value, |v, bound| check_min_exclusive(v, bound)),
        CheckKind::MaxInclusive => args
            .iter()
            .try_fold(value, |v, bound| check_max_inclusive(v, bound)),
        CheckKind::MinInclusive => args
            .iter()
            .try_fold(value, |v, bound| check_min_inclusive(v, bound)),
        CheckKind::WhiteSpace => args.iter().try_fold(value, |v, raw| {
            let mode = WhiteSpaceHandling::parse(raw)
                .ok_or_else(|| ValueError::restriction(CheckKind::WhiteSpace, &v, raw))?;
            check_white_space(v, mode)
        }),
    }
}

fn apply_numeric(
    kind: CheckKind,
    value: Value,
    args: &[String],
    check: fn(Value, u32) -> Result<Value, ValueError>,
) -> Result<Value, ValueError> {
    args.iter().try_fold(value, |v, raw| {
        let declared = raw
            .parse::<u32>()
            .map_err(|_| ValueError::restriction(kind, &v, raw))?;
        check(v, declared)
    })
}

fn check_bound(
    value: Value,
    bound: &str,
    kind: CheckKind,
    cmp: fn(f64, f64) -> bool,
) -> Result<Value, ValueError> {
    let declared: Option<f64> = bound.trim().parse().ok();
    match (value.numeric(), declared) {
        (Some(v), Some(b)) if cmp(v, b) => Ok(value),
        _ => Err(ValueError::restriction(kind, &value, bound)),
    }
}

fn significant_digits(form: &str) -> usize {
    let digits: String = form.chars().filter(char::is_ascii_digit).collect();
    let trimmed = digits.trim_start_matches('0');
    if trimmed.is_empty() { 1 } else { trimmed.len() }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enumeration_accepts_declared_value() {
        let allowed = vec!["A".to_string(), "B".to_string()];
        assert_eq!(
            check_enumeration(Value::from("A"), &allowed),
            Ok(Value::from("A"))
        );
    }

    #[test]
    fn test_enumeration_rejects_other_values() {
        let allowed = vec!["A".to_string(), "B".to_string()];
        let err = check_enumeration(Value::from("C"), &allowed).unwrap_err();
        assert!(matches!(
            err,
            ValueError::RestrictionViolation {
                kind: CheckKind::Enumeration,
                ..
            }
        ));
    }

    #[test]
    fn test_pattern_is_anchored() {
        assert!(check_pattern(Value::from("abc"), "[a-c]+").is_ok());
        // a partial match must not pass
        assert!(check_pattern(Value::from("abc!"), "[a-c]+").is_err());
        assert!(check_pattern(Value::from("xabc"), "abc").is_err());
    }

    #[test]
    fn test_fraction_digits() {
        assert!(check_fraction_digits(Value::from("1.25"), 2).is_ok());
        assert!(check_fraction_digits(Value::Float(1.5), 1).is_ok());
        assert!(check_fraction_digits(Value::from("1.257"), 2).is_err());
        assert!(check_fraction_digits(Value::from("abc"), 2).is_err());
        assert!(check_fraction_digits(Value::Int(10), 0).is_ok());
    }

    #[test]
    fn test_total_digits() {
        assert!(check_total_digits(Value::from("1.25"), 3).is_ok());
        assert!(check_total_digits(Value::Int(100), 3).is_ok());
        assert!(check_total_digits(Value::from("0.5"), 1).is_ok());
        assert!(check_total_digits(Value::Int(42), 3).is_err());
    }

    #[test]
    fn test_length_string_and_numeric() {
        assert!(check_length(Value::from("abcd"), 4).is_ok());
        assert!(check_length(Value::from("abc"), 4).is_err());
        // numeric values compare by numeric equality
        assert!(check_length(Value::Int(4), 4).is_ok());
        assert!(check_length(Value::Int(40), 4).is_err());
    }

    #[test]
    fn test_min_max_length() {
        assert!(check_max_length(Value::from("abcd"), 4).is_ok());
        assert!(check_max_length(Value::from("abcde"), 4).is_err());
        assert!(check_min_length(Value::from("a"), 1).is_ok());
        assert!(check_min_length(Value::from(""), 1).is_err());
    }

    #[test]
    fn test_bounds() {
        assert!(check_max_exclusive(Value::Int(9), "10").is_ok());
        assert!(check_max_exclusive(Value::Int(10), "10").is_err());
        assert!(check_min_exclusive(Value::Int(11), "10").is_ok());
        assert!(check_min_exclusive(Value::Int(10), "10").is_err());
        assert!(check_max_inclusive(Value::Int(10), "10").is_ok());
        assert!(check_max_inclusive(Value::Int(11), "10").is_err());
        assert!(check_min_inclusive(Value::Int(10), "10").is_ok());
        assert!(check_min_inclusive(Value::Int(9), "10").is_err());
        assert!(check_max_inclusive(Value::from("abc"), "10").is_err());
    }

    #[test]
    fn test_white_space_modes() {
        let raw = "  a   b \t c ";
        assert_eq!(
            check_white_space(Value::from(raw), WhiteSpaceHandling::Preserve),
            Ok(Value::from(raw))
        );
        assert_eq!(
            check_white_space(Value::from("a\tb\nc"), WhiteSpaceHandling::Replace),
            Ok(Value::from("a b c"))
        );
        assert_eq!(
            check_white_space(Value::from(raw), WhiteSpaceHandling::Collapse),
            Ok(Value::from("a b c"))
        );
        // non-string values pass through unchanged
        assert_eq!(
            check_white_space(Value::Int(7), WhiteSpaceHandling::Collapse),
            Ok(Value::Int(7))
        );
    }

    #[test]
    fn test_check_occurs() {
        assert!(check_occurs("items", 1, 1, None).is_ok());
        assert!(check_occurs("items", 5, 1, None).is_ok());
        let err = check_occurs("items", 0, 1, None).unwrap_err();
        assert!(matches!(err, ValueError::RequiredFieldViolation { .. }));
        assert!(check_occurs("id", 2, 0, Some(1)).is_err());
        assert!(check_occurs("id", 1, 0, Some(1)).is_ok());
    }

    #[test]
    fn test_apply_check_dispatch() {
        let allowed = vec!["A".to_string(), "B".to_string()];
        assert!(apply_check(CheckKind::Enumeration, Value::from("B"), &allowed).is_ok());
        assert!(apply_check(CheckKind::Enumeration, Value::from("C"), &allowed).is_err());

        let patterns = vec!["[a-z]+".to_string(), "ab.".to_string()];
        assert!(apply_check(CheckKind::Pattern, Value::from("abc"), &patterns).is_ok());
        assert!(apply_check(CheckKind::Pattern, Value::from("abz"), &patterns).is_ok());
        assert!(apply_check(CheckKind::Pattern, Value::from("xyz"), &patterns).is_err());

        let collapse = vec!["collapse".to_string()];
        assert_eq!(
            apply_check(CheckKind::WhiteSpace, Value::from(" a  b "), &collapse),
            Ok(Value::from("a b"))
        );

        let bad_facet = vec!["notANumber".to_string()];
        assert!(apply_check(CheckKind::MaxLength, Value::from("abc"), &bad_facet).is_err());
    }
}
