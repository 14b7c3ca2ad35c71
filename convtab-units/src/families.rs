//! The eight family definitions and their registry
//!
//! Labels, help lines and factor hints are the presentation strings
//! the tables display; the engine only reads `units` and `rule`.

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::family::{ConversionRule, FactorPair, Family, FamilyId, UnitDef};

/// Global family registry
pub static FAMILIES: LazyLock<FamilyRegistry> = LazyLock::new(FamilyRegistry::new);

const fn unit(key: &'static str, hint: &'static str) -> UnitDef {
    UnitDef { key, hint }
}

static LENGTH_UNITS: [UnitDef; 7] = [
    unit("km", "10^3"),
    unit("hm", "10^2"),
    unit("dam", "10^1"),
    unit("m", "10^0"),
    unit("dm", "10^-1"),
    unit("cm", "10^-2"),
    unit("mm", "10^-3"),
];

static MASS_UNITS: [UnitDef; 8] = [
    unit("t", ""),
    unit("kg", ""),
    unit("hg", ""),
    unit("dag", ""),
    unit("g", ""),
    unit("dg", ""),
    unit("cg", ""),
    unit("mg", ""),
];

static CAPACITY_UNITS: [UnitDef; 7] = [
    unit("kL", ""),
    unit("hL", ""),
    unit("daL", ""),
    unit("L", ""),
    unit("dL", ""),
    unit("cL", ""),
    unit("mL", ""),
];

static TIME_UNITS: [UnitDef; 3] = [
    unit("h", "×60"),
    unit("min", "×60"),
    unit("s", ""),
];

// canonical unit: s
static TIME_TO_CANONICAL: [f64; 3] = [3600.0, 60.0, 1.0];

static ELECTRIC_UNITS: [UnitDef; 8] = [
    unit("kV", "×1000"),
    unit("V", ""),
    unit("A", "×1000 mA"),
    unit("mA", ""),
    unit("kΩ", "×1000"),
    unit("Ω", ""),
    unit("kW", "×1000 W"),
    unit("W", ""),
];

static ELECTRIC_PAIRS: [FactorPair; 4] = [
    FactorPair { large: "kV", small: "V", factor: 1000.0 },
    FactorPair { large: "A", small: "mA", factor: 1000.0 },
    FactorPair { large: "kΩ", small: "Ω", factor: 1000.0 },
    FactorPair { large: "kW", small: "W", factor: 1000.0 },
];

static DATA_UNITS: [UnitDef; 6] = [
    unit("bits", "↔ octets"),
    unit("octets", "↔ Ko"),
    unit("Ko", "↔ Mo"),
    unit("Mo", "↔ Go"),
    unit("Go", "↔ To"),
    unit("To", ""),
];

// canonical unit: octets; every factor is a power of two, so the
// whole chain derives exactly
static DATA_TO_CANONICAL: [f64; 6] = [
    0.125,
    1.0,
    1024.0,
    1024.0 * 1024.0,
    1024.0 * 1024.0 * 1024.0,
    1024.0 * 1024.0 * 1024.0 * 1024.0,
];

static AREA_UNITS: [UnitDef; 7] = [
    unit("km²", ""),
    unit("hm²", ""),
    unit("dam²", ""),
    unit("m²", ""),
    unit("dm²", ""),
    unit("cm²", ""),
    unit("mm²", ""),
];

static VOLUME3_UNITS: [UnitDef; 4] = [
    unit("m³", ""),
    unit("dm³", "= L"),
    unit("cm³", "= mL"),
    unit("mm³", ""),
];

static DEFINITIONS: [Family; 8] = [
    Family {
        id: FamilyId::Length,
        label: "Longueurs (km → mm)",
        help: "Règle : ×10 vers la droite, ÷10 vers la gauche.",
        units: &LENGTH_UNITS,
        rule: ConversionRule::UniformStep { factor: 10.0 },
    },
    Family {
        id: FamilyId::Mass,
        label: "Masses (t → mg)",
        help: "Règle : ×10 vers la droite, ÷10 vers la gauche.",
        units: &MASS_UNITS,
        rule: ConversionRule::UniformStep { factor: 10.0 },
    },
    Family {
        id: FamilyId::Capacity,
        label: "Capacités (kL → mL)",
        help: "Règle : ×10 / ÷10. Liens : 1 L = 1 dm³ ; 1 mL = 1 cm³.",
        units: &CAPACITY_UNITS,
        rule: ConversionRule::UniformStep { factor: 10.0 },
    },
    Family {
        id: FamilyId::Time,
        label: "Temps (h → min → s)",
        help: "Règle : 1 h = 60 min ; 1 min = 60 s.",
        units: &TIME_UNITS,
        rule: ConversionRule::Chain {
            canonical: 2,
            to_canonical: &TIME_TO_CANONICAL,
        },
    },
    Family {
        id: FamilyId::Electric,
        label: "Électricité (kV/V, A/mA, kΩ/Ω, kW/W)",
        help: "Conversions : facteur 1000 sur les paires concernées.",
        units: &ELECTRIC_UNITS,
        rule: ConversionRule::PairTable { pairs: &ELECTRIC_PAIRS },
    },
    Family {
        id: FamilyId::Data,
        label: "Informatique / Réseaux (bits, octets, Ko/Mo/Go/To)",
        help: "Rappels : 1 octet = 8 bits ; 1 Ko = 1024 o ; etc.",
        units: &DATA_UNITS,
        rule: ConversionRule::Chain {
            canonical: 1,
            to_canonical: &DATA_TO_CANONICAL,
        },
    },
    Family {
        id: FamilyId::Area,
        label: "Aires (km² → mm²)",
        help: "Attention : pas de ×10 mais ×100 à chaque colonne.",
        units: &AREA_UNITS,
        rule: ConversionRule::UniformStep { factor: 100.0 },
    },
    Family {
        id: FamilyId::Volume3,
        label: "Volumes cubiques (m³ → mm³)",
        help: "Règle : ×1000 / ÷1000. Rappel : 1 m³ = 1000 L.",
        units: &VOLUME3_UNITS,
        rule: ConversionRule::UniformStep { factor: 1000.0 },
    },
];

/// Registry of all families, keyed by id string
pub struct FamilyRegistry {
    by_id: HashMap<&'static str, &'static Family>,
}

impl FamilyRegistry {
    fn new() -> Self {
        let mut by_id = HashMap::new();
        for family in &DEFINITIONS {
            by_id.insert(family.id.as_str(), family);
        }
        FamilyRegistry { by_id }
    }

    /// Look up a family by its id string.
    pub fn get(&self, id: &str) -> Option<&'static Family> {
        self.by_id.get(id).copied()
    }

    /// Infallible lookup by typed id.
    pub fn family(&self, id: FamilyId) -> &'static Family {
        // DEFINITIONS covers every variant
        self.by_id[id.as_str()]
    }

    /// Families in presentation order.
    pub fn iter(&self) -> impl Iterator<Item = &'static Family> {
        DEFINITIONS.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_every_family_registered() {
        for id in FamilyId::ALL {
            let family = FAMILIES.family(id);
            assert_eq!(family.id, id);
            assert_eq!(FAMILIES.get(id.as_str()).unwrap().id, id);
        }
        assert!(FAMILIES.get("pressure").is_none());
    }

    #[test]
    fn test_unit_keys_unique_within_family() {
        for family in FAMILIES.iter() {
            let keys: HashSet<_> = family.unit_keys().collect();
            assert_eq!(keys.len(), family.units.len(), "family {}", family.id);
        }
    }

    #[test]
    fn test_unit_keys_unique_across_families() {
        let mut seen = HashSet::new();
        for family in FAMILIES.iter() {
            for key in family.unit_keys() {
                assert!(seen.insert(key), "unit {} appears twice", key);
            }
        }
    }

    #[test]
    fn test_chain_tables_cover_all_units() {
        for family in FAMILIES.iter() {
            if let ConversionRule::Chain { canonical, to_canonical } = family.rule {
                assert_eq!(to_canonical.len(), family.units.len());
                assert!(canonical < family.units.len());
                assert_eq!(to_canonical[canonical], 1.0);
            }
        }
    }

    #[test]
    fn test_pair_tables_reference_declared_units() {
        for family in FAMILIES.iter() {
            if let ConversionRule::PairTable { pairs } = family.rule {
                for pair in pairs {
                    assert!(family.unit_index(pair.large).is_some());
                    assert!(family.unit_index(pair.small).is_some());
                }
            }
        }
    }

    #[test]
    fn test_expected_orders() {
        let length = FAMILIES.family(FamilyId::Length);
        let keys: Vec<_> = length.unit_keys().collect();
        assert_eq!(keys, ["km", "hm", "dam", "m", "dm", "cm", "mm"]);

        let data = FAMILIES.family(FamilyId::Data);
        let keys: Vec<_> = data.unit_keys().collect();
        assert_eq!(keys, ["bits", "octets", "Ko", "Mo", "Go", "To"]);
    }
}
