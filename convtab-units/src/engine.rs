//! The conversion engine
//!
//! One operation: given an edited cell and its raw text, derive every
//! sibling cell of the family and format the lot for display.

use std::collections::BTreeMap;

use convtab_core::{format_value, parse_decimal, InputError, Precision};
use thiserror::Error;

use crate::board::Board;
use crate::families::FAMILIES;
use crate::family::{ConversionRule, Family};

/// Failure modes of [`convert`].
///
/// `UnknownFamily` and `UnknownUnit` are precondition violations: they
/// can only come from a misconfigured caller, never from end-user
/// input, and should surface loudly. `Input` is the expected
/// recoverable rejection of unparsable text; the caller's policy is to
/// keep the raw text in the edited cell and leave the rest of the
/// board untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConvertError {
    #[error("unknown family: {0}")]
    UnknownFamily(String),

    #[error("unit '{unit}' is not part of family '{family}'")]
    UnknownUnit { family: String, unit: String },

    #[error(transparent)]
    Input(#[from] InputError),
}

/// Convert one edited value into the full set of sibling values.
///
/// On success the mapping contains every unit key the family declares,
/// the edited one included (re-formatted, so its text may differ
/// cosmetically from the raw input). The board is only read, and only
/// by the pairwise rule, which echoes the currently held text of the
/// pairs the edit does not touch.
pub fn convert(
    family_id: &str,
    edited_unit: &str,
    raw_input: &str,
    precision: Precision,
    board: &Board,
) -> Result<BTreeMap<String, String>, ConvertError> {
    let family = FAMILIES
        .get(family_id)
        .ok_or_else(|| ConvertError::UnknownFamily(family_id.to_string()))?;

    let edited = family
        .unit_index(edited_unit)
        .ok_or_else(|| ConvertError::UnknownUnit {
            family: family_id.to_string(),
            unit: edited_unit.to_string(),
        })?;

    let value = parse_decimal(raw_input)?;

    let result = match family.rule {
        ConversionRule::UniformStep { factor } => {
            uniform_step(family, edited, value, factor, precision)
        }
        ConversionRule::PairTable { pairs } => {
            pair_table(family, edited_unit, value, pairs, precision, board)
        }
        ConversionRule::Chain { to_canonical, .. } => {
            chain(family, edited, value, to_canonical, precision)
        }
    };

    Ok(result)
}

/// Stepwise propagation, one column at a time: divide moving left
/// toward larger units, multiply moving right. The loop is the
/// contract (a combined power would round differently in corners).
fn uniform_step(
    family: &Family,
    edited: usize,
    value: f64,
    factor: f64,
    precision: Precision,
) -> BTreeMap<String, String> {
    let mut values = vec![0.0; family.units.len()];
    values[edited] = value;

    let mut v = value;
    for k in (0..edited).rev() {
        v /= factor;
        values[k] = v;
    }
    v = value;
    for k in edited + 1..family.units.len() {
        v *= factor;
        values[k] = v;
    }

    family
        .units
        .iter()
        .zip(values)
        .map(|(u, v)| (u.key.to_string(), format_value(v, precision)))
        .collect()
}

/// Only the edited unit's partner is recomputed; every other unit
/// echoes whatever the caller's board currently holds.
fn pair_table(
    family: &Family,
    edited_unit: &str,
    value: f64,
    pairs: &[crate::family::FactorPair],
    precision: Precision,
    board: &Board,
) -> BTreeMap<String, String> {
    let mut out: BTreeMap<String, String> = family
        .unit_keys()
        .map(|key| (key.to_string(), board.get(key).unwrap_or("").to_string()))
        .collect();

    for pair in pairs {
        if edited_unit == pair.large {
            out.insert(pair.large.to_string(), format_value(value, precision));
            out.insert(pair.small.to_string(), format_value(value * pair.factor, precision));
        } else if edited_unit == pair.small {
            out.insert(pair.small.to_string(), format_value(value, precision));
            out.insert(pair.large.to_string(), format_value(value / pair.factor, precision));
        }
    }

    out
}

/// Canonicalize the edited value, then derive every column from the
/// canonical one. The edited column keeps the parsed value as-is.
fn chain(
    family: &Family,
    edited: usize,
    value: f64,
    to_canonical: &[f64],
    precision: Precision,
) -> BTreeMap<String, String> {
    let canonical_value = value * to_canonical[edited];

    family
        .units
        .iter()
        .enumerate()
        .map(|(i, u)| {
            let v = if i == edited {
                value
            } else {
                canonical_value / to_canonical[i]
            };
            (u.key.to_string(), format_value(v, precision))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use convtab_core::Precision::{Auto, Fixed};

    fn run(family: &str, unit: &str, raw: &str) -> BTreeMap<String, String> {
        convert(family, unit, raw, Auto, &Board::new()).unwrap()
    }

    #[test]
    fn test_length_full_row() {
        let out = run("length", "m", "2,5");
        assert_eq!(out["km"], "0,0025");
        assert_eq!(out["hm"], "0,025");
        assert_eq!(out["dam"], "0,25");
        assert_eq!(out["m"], "2,5");
        assert_eq!(out["dm"], "25");
        assert_eq!(out["cm"], "250");
        assert_eq!(out["mm"], "2500");
        assert_eq!(out.len(), 7);
    }

    #[test]
    fn test_capacity() {
        let out = run("capacity", "L", "1,25");
        assert_eq!(out["cL"], "125");
        assert_eq!(out["mL"], "1250");
    }

    #[test]
    fn test_mass() {
        let out = run("mass", "kg", "0,75");
        assert_eq!(out["g"], "750");
        // the table steps t -> kg as one ×10 column
        assert_eq!(out["t"], "0,075");
    }

    #[test]
    fn test_area_factor_is_100() {
        let out = run("area", "m²", "1");
        assert_eq!(out["cm²"], "10000");
        assert_eq!(out["mm²"], "1000000");
        assert_eq!(out["km²"], "0,000001");
    }

    #[test]
    fn test_volume3_factor_is_1000() {
        let out = run("volume3", "m³", "1");
        assert_eq!(out["dm³"], "1000");
        assert_eq!(out["cm³"], "1000000");
        assert_eq!(out["mm³"], "1000000000");
    }

    #[test]
    fn test_time_from_hours() {
        let out = run("time", "h", "1,5");
        assert_eq!(out["h"], "1,5");
        assert_eq!(out["min"], "90");
        assert_eq!(out["s"], "5400");
    }

    #[test]
    fn test_time_from_seconds() {
        let out = run("time", "s", "5400");
        assert_eq!(out["h"], "1,5");
        assert_eq!(out["min"], "90");
    }

    #[test]
    fn test_data_from_bits() {
        let out = run("data", "bits", "64");
        assert_eq!(out["octets"], "8");
    }

    #[test]
    fn test_data_from_gigabytes() {
        let out = run("data", "Go", "2");
        assert_eq!(out["Mo"], "2048");
        assert_eq!(out["Ko"], "2097152");
        assert_eq!(out["octets"], "2147483648");
        assert_eq!(out["bits"], "17179869184");
        assert_eq!(out["To"], "0,001953");
    }

    #[test]
    fn test_electric_updates_only_partner() {
        let mut board = Board::new();
        board.set("kV", "0,23");
        board.set("V", "230");

        let out = convert("electric", "kΩ", "4,7", Auto, &board).unwrap();
        assert_eq!(out["kΩ"], "4,7");
        assert_eq!(out["Ω"], "4700");
        // untouched pairs echo the board, never reset
        assert_eq!(out["kV"], "0,23");
        assert_eq!(out["V"], "230");
        assert_eq!(out["kW"], "");
        assert_eq!(out.len(), 8);
    }

    #[test]
    fn test_electric_small_to_large() {
        let out = run("electric", "mA", "250");
        assert_eq!(out["A"], "0,25");
    }

    #[test]
    fn test_rejection_produces_no_mapping() {
        let board = Board::new();
        assert!(matches!(
            convert("length", "m", "abc", Auto, &board),
            Err(ConvertError::Input(_))
        ));
        assert!(matches!(
            convert("length", "m", "", Auto, &board),
            Err(ConvertError::Input(_))
        ));
    }

    #[test]
    fn test_unknown_family_is_loud() {
        let board = Board::new();
        assert_eq!(
            convert("pressure", "Pa", "1", Auto, &board),
            Err(ConvertError::UnknownFamily("pressure".to_string()))
        );
    }

    #[test]
    fn test_unknown_unit_is_loud() {
        let board = Board::new();
        assert_eq!(
            convert("length", "s", "1", Auto, &board),
            Err(ConvertError::UnknownUnit {
                family: "length".to_string(),
                unit: "s".to_string(),
            })
        );
    }

    #[test]
    fn test_uniform_round_trip() {
        let out = run("length", "m", "2,5");
        let back = run("length", "mm", &out["mm"]);
        assert_eq!(back["m"], "2,5");
    }

    #[test]
    fn test_idempotence_on_derived_value() {
        let first = run("length", "m", "2,5");
        let again = run("length", "km", &first["km"]);
        assert_eq!(first, again);
    }

    #[test]
    fn test_fixed_precision() {
        let out = convert("time", "s", "100", Fixed(2), &Board::new()).unwrap();
        assert_eq!(out["min"], "1,67");
        assert_eq!(out["h"], "0,03");
        assert_eq!(out["s"], "100");
    }

    #[test]
    fn test_edited_cell_normalized_cosmetically() {
        let out = run("length", "m", " 2.50 ");
        assert_eq!(out["m"], "2,5");
    }
}
