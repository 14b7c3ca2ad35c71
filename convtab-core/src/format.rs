//! Display formatting for derived values
//!
//! Values are rendered with a decimal comma, matching how they are
//! typed. Trailing fractional zeros are never shown.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// How close a value must be to an integer for automatic precision to
/// render it without a fractional part.
const NEAR_INTEGER_EPSILON: f64 = 1e-12;

/// Fractional digits rendered under automatic precision before the
/// trailing-zero trim.
const AUTO_MAX_DIGITS: usize = 6;

/// The formatting precision setting, global to one formatting pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Precision {
    /// Near-integers render as integers, everything else with up to
    /// six fractional digits.
    Auto,
    /// Round to exactly this many fractional digits, then trim zeros.
    Fixed(u8),
}

impl Default for Precision {
    fn default() -> Self {
        Precision::Auto
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid precision: {0:?} (expected \"auto\" or a digit count)")]
pub struct PrecisionParseError(String);

impl std::str::FromStr for Precision {
    type Err = PrecisionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("auto") {
            return Ok(Precision::Auto);
        }
        s.parse::<u8>()
            .map(Precision::Fixed)
            .map_err(|_| PrecisionParseError(s.to_string()))
    }
}

impl std::fmt::Display for Precision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Precision::Auto => write!(f, "auto"),
            Precision::Fixed(d) => write!(f, "{}", d),
        }
    }
}

impl TryFrom<String> for Precision {
    type Error = PrecisionParseError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Precision> for String {
    fn from(p: Precision) -> String {
        p.to_string()
    }
}

/// Render a derived value for display.
///
/// Non-finite values render as the empty string; they cannot arise
/// from validated input, this is a fallback only.
pub fn format_value(n: f64, precision: Precision) -> String {
    if !n.is_finite() {
        return String::new();
    }

    match precision {
        Precision::Auto => {
            let nearest = n.round();
            if (n - nearest).abs() < NEAR_INTEGER_EPSILON {
                if nearest == 0.0 {
                    // avoid "-0"
                    return "0".to_string();
                }
                return format!("{nearest:.0}");
            }
            with_comma(strip_fraction_zeros(format!("{n:.prec$}", prec = AUTO_MAX_DIGITS)))
        }
        Precision::Fixed(digits) => {
            let rendered = format!("{n:.prec$}", prec = digits as usize);
            with_comma(strip_fraction_zeros(rendered))
        }
    }
}

/// Remove trailing zeros from the fractional part, and the separator
/// itself when nothing remains after it. Integer digits are never
/// touched.
fn strip_fraction_zeros(s: String) -> String {
    if !s.contains('.') {
        return s;
    }
    s.trim_end_matches('0').trim_end_matches('.').to_string()
}

fn with_comma(s: String) -> String {
    s.replace('.', ",")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auto_near_integer() {
        assert_eq!(format_value(250.0, Precision::Auto), "250");
        assert_eq!(format_value(250.0 + 1e-13, Precision::Auto), "250");
        assert_eq!(format_value(-3.0, Precision::Auto), "-3");
    }

    #[test]
    fn test_auto_fractional() {
        assert_eq!(format_value(2.5, Precision::Auto), "2,5");
        assert_eq!(format_value(0.0025, Precision::Auto), "0,0025");
        assert_eq!(format_value(0.3333333333333, Precision::Auto), "0,333333");
    }

    #[test]
    fn test_auto_zero() {
        assert_eq!(format_value(0.0, Precision::Auto), "0");
        assert_eq!(format_value(-0.0, Precision::Auto), "0");
    }

    #[test]
    fn test_auto_large_integer() {
        assert_eq!(format_value(2147483648.0, Precision::Auto), "2147483648");
        assert_eq!(format_value(17179869184.0, Precision::Auto), "17179869184");
    }

    #[test]
    fn test_fixed_trims_trailing_zeros() {
        assert_eq!(format_value(1.0, Precision::Fixed(2)), "1");
        assert_eq!(format_value(2.5, Precision::Fixed(3)), "2,5");
        assert_eq!(format_value(0.126, Precision::Fixed(2)), "0,13");
    }

    #[test]
    fn test_fixed_zero_digits_keeps_integer_digits() {
        assert_eq!(format_value(250.0, Precision::Fixed(0)), "250");
    }

    #[test]
    fn test_non_finite_is_empty() {
        assert_eq!(format_value(f64::NAN, Precision::Auto), "");
        assert_eq!(format_value(f64::INFINITY, Precision::Fixed(2)), "");
    }

    #[test]
    fn test_precision_parse() {
        assert_eq!("auto".parse::<Precision>(), Ok(Precision::Auto));
        assert_eq!("2".parse::<Precision>(), Ok(Precision::Fixed(2)));
        assert!("many".parse::<Precision>().is_err());
    }

    #[test]
    fn test_precision_display_roundtrip() {
        assert_eq!(Precision::Auto.to_string(), "auto");
        assert_eq!(Precision::Fixed(3).to_string(), "3");
    }
}
