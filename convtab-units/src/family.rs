//! Family and unit descriptors

use serde::{Deserialize, Serialize};

/// Identifier of a measurement family. The string forms are a fixed
/// interface that calling UIs key their controls on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FamilyId {
    Length,
    Mass,
    Capacity,
    Time,
    Electric,
    Data,
    Area,
    Volume3,
}

impl FamilyId {
    pub const ALL: [FamilyId; 8] = [
        FamilyId::Length,
        FamilyId::Mass,
        FamilyId::Capacity,
        FamilyId::Time,
        FamilyId::Electric,
        FamilyId::Data,
        FamilyId::Area,
        FamilyId::Volume3,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            FamilyId::Length => "length",
            FamilyId::Mass => "mass",
            FamilyId::Capacity => "capacity",
            FamilyId::Time => "time",
            FamilyId::Electric => "electric",
            FamilyId::Data => "data",
            FamilyId::Area => "area",
            FamilyId::Volume3 => "volume3",
        }
    }

    pub fn from_str_id(s: &str) -> Option<FamilyId> {
        FamilyId::ALL.into_iter().find(|id| id.as_str() == s)
    }
}

impl std::fmt::Display for FamilyId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One column of a family's table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnitDef {
    /// The unit symbol shown on the column (e.g. "km", "kΩ", "Mo").
    pub key: &'static str,
    /// Presentational factor annotation (e.g. "×60", "↔ octets").
    /// Never consulted by the engine.
    pub hint: &'static str,
}

/// One independent large/small pairing of a pairwise family.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FactorPair {
    pub large: &'static str,
    pub small: &'static str,
    /// small = large × factor
    pub factor: f64,
}

/// How edits propagate within one family.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConversionRule {
    /// One constant factor between every adjacent pair of columns,
    /// larger units on the left: value[i+1] = value[i] × factor.
    UniformStep { factor: f64 },
    /// Independent two-unit pairings; an edit only ever touches the
    /// edited unit and its partner.
    PairTable { pairs: &'static [FactorPair] },
    /// Heterogeneous factors routed through one canonical unit:
    /// canonical = value[i] × to_canonical[i]. One entry per column.
    Chain {
        canonical: usize,
        to_canonical: &'static [f64],
    },
}

/// A fixed, enumerable family definition. Constructed once, never
/// mutated.
#[derive(Debug, Clone, Copy)]
pub struct Family {
    pub id: FamilyId,
    /// Human label for the table header, presentation only.
    pub label: &'static str,
    /// One-line rule reminder shown next to the table.
    pub help: &'static str,
    /// Columns in presentation order; order defines adjacency for the
    /// uniform-step rule.
    pub units: &'static [UnitDef],
    pub rule: ConversionRule,
}

impl Family {
    /// Position of a unit key within this family, if it belongs here.
    pub fn unit_index(&self, key: &str) -> Option<usize> {
        self.units.iter().position(|u| u.key == key)
    }

    pub fn unit_keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.units.iter().map(|u| u.key)
    }
}
