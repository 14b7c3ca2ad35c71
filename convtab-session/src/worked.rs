//! Worked examples per family
//!
//! The fixed seed values the "example" action injects into an empty
//! board, with the message shown under the table.

use convtab_units::FamilyId;

/// A ready-made seed entry for one family's table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkedExample {
    pub unit: &'static str,
    /// Raw text as a student would type it (decimal comma).
    pub value: &'static str,
    pub message: &'static str,
}

pub fn worked_example(family: FamilyId) -> &'static WorkedExample {
    match family {
        FamilyId::Length => &WorkedExample {
            unit: "m",
            value: "2,5",
            message: "Exemple : 2,5 m → 250 cm → 2500 mm",
        },
        FamilyId::Mass => &WorkedExample {
            unit: "kg",
            value: "0,75",
            message: "Exemple : 0,75 kg → 750 g",
        },
        FamilyId::Capacity => &WorkedExample {
            unit: "L",
            value: "1,25",
            message: "Exemple : 1,25 L → 125 cL → 1250 mL",
        },
        FamilyId::Time => &WorkedExample {
            unit: "h",
            value: "1,5",
            message: "Exemple : 1,5 h → 90 min → 5400 s",
        },
        FamilyId::Electric => &WorkedExample {
            unit: "kΩ",
            value: "4,7",
            message: "Exemple : 4,7 kΩ → 4700 Ω",
        },
        FamilyId::Data => &WorkedExample {
            unit: "Go",
            value: "2",
            message: "Exemple : 2 Go → 2048 Mo",
        },
        FamilyId::Area => &WorkedExample {
            unit: "m²",
            value: "1",
            message: "Exemple : 1 m² → 10 000 cm²",
        },
        FamilyId::Volume3 => &WorkedExample {
            unit: "m³",
            value: "1",
            message: "Exemple : 1 m³ → 1000 dm³ (= 1000 L)",
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use convtab_core::parse_decimal;
    use convtab_units::FAMILIES;

    #[test]
    fn test_examples_reference_declared_units() {
        for id in FamilyId::ALL {
            let example = worked_example(id);
            let family = FAMILIES.family(id);
            assert!(family.unit_index(example.unit).is_some(), "family {}", id);
        }
    }

    #[test]
    fn test_example_values_parse() {
        for id in FamilyId::ALL {
            assert!(parse_decimal(worked_example(id).value).is_ok());
        }
    }
}
