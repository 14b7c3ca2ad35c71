//! Student identity fields

use serde::{Deserialize, Serialize};

/// Free-text identity fields filled in by the student. All optional;
/// blanks render as "—" in the summary.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StudentInfo {
    pub name: String,
    pub class: String,
    pub period: String,
    pub group: String,
    pub comment: String,
}
