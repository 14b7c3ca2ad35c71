//! User input parsing
//!
//! Values come from free-text cells, typed with either a decimal point
//! or a decimal comma, possibly with grouping spaces ("1 250,5").

use thiserror::Error;

/// Rejection of a user-typed value. This is the expected, recoverable
/// outcome for anything that is not a finite number; the caller keeps
/// the raw text in the edited cell and touches nothing else.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("empty input")]
    Empty,

    #[error("not a finite number: {0}")]
    NotNumeric(String),
}

/// Parse a user-typed decimal value.
///
/// Normalization: every whitespace character is stripped (surrounding
/// and internal), then the decimal comma becomes a decimal point.
pub fn parse_decimal(raw: &str) -> Result<f64, InputError> {
    let normalized: String = raw
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| if c == ',' { '.' } else { c })
        .collect();

    if normalized.is_empty() {
        return Err(InputError::Empty);
    }

    match normalized.parse::<f64>() {
        Ok(n) if n.is_finite() => Ok(n),
        _ => Err(InputError::NotNumeric(raw.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_number() {
        assert_eq!(parse_decimal("2.5"), Ok(2.5));
        assert_eq!(parse_decimal("-42"), Ok(-42.0));
    }

    #[test]
    fn test_decimal_comma() {
        assert_eq!(parse_decimal("2,5"), Ok(2.5));
        assert_eq!(parse_decimal("0,0025"), Ok(0.0025));
    }

    #[test]
    fn test_whitespace_stripped() {
        assert_eq!(parse_decimal("  250 "), Ok(250.0));
        assert_eq!(parse_decimal("1 250,5"), Ok(1250.5));
    }

    #[test]
    fn test_empty_rejected() {
        assert_eq!(parse_decimal(""), Err(InputError::Empty));
        assert_eq!(parse_decimal("   "), Err(InputError::Empty));
    }

    #[test]
    fn test_non_numeric_rejected() {
        assert!(matches!(parse_decimal("abc"), Err(InputError::NotNumeric(_))));
        assert!(matches!(parse_decimal("2,5,3"), Err(InputError::NotNumeric(_))));
    }

    #[test]
    fn test_non_finite_rejected() {
        assert!(matches!(parse_decimal("inf"), Err(InputError::NotNumeric(_))));
        assert!(matches!(parse_decimal("NaN"), Err(InputError::NotNumeric(_))));
    }
}
