//! The board: caller-held display text for one family's table

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Current displayed text per unit key, for the active family only.
///
/// Text is kept as typed (trailing zeros, decimal comma) rather than
/// as numbers. At most one cell per update is user-authored; the rest
/// are derived. Cleared in full when the family changes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Board {
    values: BTreeMap<String, String>,
}

impl Board {
    pub fn new() -> Self {
        Board::default()
    }

    pub fn get(&self, unit: &str) -> Option<&str> {
        self.values.get(unit).map(String::as_str)
    }

    pub fn set(&mut self, unit: &str, text: impl Into<String>) {
        self.values.insert(unit.to_string(), text.into());
    }

    pub fn clear(&mut self) {
        self.values.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Entries holding non-blank text, in key order.
    pub fn filled(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values
            .iter()
            .filter(|(_, v)| !v.trim().is_empty())
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl Extend<(String, String)> for Board {
    fn extend<T: IntoIterator<Item = (String, String)>>(&mut self, iter: T) {
        self.values.extend(iter);
    }
}
