//! Measurement families and the conversion-table engine
//!
//! A family is a fixed set of related units sharing one conversion
//! rule. Editing any cell of a family's table derives every sibling
//! cell:
//! - uniform step: length, mass, capacity (×10), area (×100),
//!   volume3 (×1000)
//! - pairwise factors: electric (kV/V, A/mA, kΩ/Ω, kW/W, ×1000)
//! - chained through a canonical unit: time (h/min/s), data
//!   (bits/octets/Ko/Mo/Go/To)
//!
//! The engine holds no mutable state; the live table (the board) is
//! owned by the caller and passed in per call.

mod board;
mod engine;
mod family;
mod families;

pub use board::Board;
pub use engine::{convert, ConvertError};
pub use family::{ConversionRule, FactorPair, Family, FamilyId, UnitDef};
pub use families::{FamilyRegistry, FAMILIES};
