//! Question pools the generator samples from
//!
//! Each family exposes the conversions worth asking (pedagogically
//! useful directions, not every combination) and a pool of "clean"
//! values that produce friendly corrections.

use convtab_units::FamilyId;

/// The askable (from, to) unit pairs of one family.
#[derive(Debug, Clone, Copy)]
pub struct QuestionPool {
    pub family: FamilyId,
    /// Tag printed on the card (matches the exercise bank tags).
    pub kind: &'static str,
    pub pairs: &'static [(&'static str, &'static str)],
}

pub static POOLS: [QuestionPool; 8] = [
    QuestionPool {
        family: FamilyId::Length,
        kind: "Longueurs",
        pairs: &[("km", "m"), ("m", "cm"), ("m", "mm"), ("cm", "m"), ("mm", "m")],
    },
    QuestionPool {
        family: FamilyId::Mass,
        kind: "Masses",
        pairs: &[("kg", "g"), ("g", "kg"), ("t", "kg"), ("mg", "g")],
    },
    QuestionPool {
        family: FamilyId::Capacity,
        kind: "Capacités",
        pairs: &[("L", "mL"), ("cL", "L"), ("hL", "L"), ("L", "cL")],
    },
    QuestionPool {
        family: FamilyId::Time,
        kind: "Temps",
        pairs: &[("h", "min"), ("min", "s"), ("s", "min")],
    },
    QuestionPool {
        family: FamilyId::Area,
        kind: "Aires",
        pairs: &[("m²", "cm²"), ("cm²", "m²"), ("m²", "mm²")],
    },
    QuestionPool {
        family: FamilyId::Volume3,
        kind: "Volumes",
        pairs: &[("m³", "dm³"), ("dm³", "cm³"), ("m³", "mm³")],
    },
    QuestionPool {
        family: FamilyId::Electric,
        kind: "Électricité",
        pairs: &[("kΩ", "Ω"), ("mA", "A"), ("kV", "V"), ("kW", "W")],
    },
    QuestionPool {
        family: FamilyId::Data,
        kind: "Numérique",
        pairs: &[("bits", "octets"), ("Go", "Mo"), ("Ko", "Mo"), ("To", "Go")],
    },
];

static DATA_VALUES: [f64; 13] = [
    1.0, 2.0, 3.0, 4.0, 8.0, 16.0, 32.0, 64.0, 128.0, 256.0, 512.0, 1024.0, 1.5,
];

static TIME_VALUES: [f64; 11] = [
    0.5, 1.0, 1.5, 2.0, 30.0, 45.0, 60.0, 90.0, 120.0, 2700.0, 5400.0,
];

static GENERAL_VALUES: [f64; 16] = [
    0.2, 0.25, 0.5, 0.75, 1.0, 1.2, 2.5, 3.0, 4.7, 10.0, 12.0, 23.0, 100.0, 250.0, 450.0, 750.0,
];

/// Clean values for one family.
pub fn value_pool(family: FamilyId) -> &'static [f64] {
    match family {
        FamilyId::Data => &DATA_VALUES,
        FamilyId::Time => &TIME_VALUES,
        _ => &GENERAL_VALUES,
    }
}
