//! Export object building (JSON and flat CSV)
//!
//! One snapshot of the whole session, shaped for teachers: student
//! fields, track, the active board, exercise answers, QCM answers and
//! the score computed at export time.

use std::collections::BTreeMap;

use convtab_core::Precision;
use convtab_units::{Board, FamilyId};
use serde::Serialize;
use tracing::debug;

use crate::state::AppState;
use crate::student::StudentInfo;
use crate::track::Track;

const SITE: &str = "Tableaux de conversion — convtab v1";

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportMeta {
    pub exported_at: String,
    pub site: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct ExportConverter {
    pub mode: FamilyId,
    pub board: Board,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct ExportScore {
    pub score: u32,
    pub max: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct ExportExercises {
    pub answers: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportQcm {
    pub answers: BTreeMap<String, usize>,
    pub computed_score: ExportScore,
}

/// The full export snapshot.
#[derive(Debug, Clone, Serialize)]
pub struct ExportObject {
    pub meta: ExportMeta,
    pub student: StudentInfo,
    pub track: Track,
    pub precision: Precision,
    pub converter: ExportConverter,
    pub exercises: ExportExercises,
    pub qcm: ExportQcm,
}

/// Assemble a snapshot. `exported_at` is whatever timestamp the
/// caller wants stamped on it.
pub fn build_export(state: &AppState, exported_at: impl Into<String>) -> ExportObject {
    let (score, max) = state.qcm_score();
    debug!(score, max, "building export snapshot");

    ExportObject {
        meta: ExportMeta {
            exported_at: exported_at.into(),
            site: SITE,
        },
        student: state.student.clone(),
        track: state.track,
        precision: state.precision,
        converter: ExportConverter {
            mode: state.converter.family,
            board: state.converter.board.clone(),
        },
        exercises: ExportExercises {
            answers: state.exercises.answers.clone(),
        },
        qcm: ExportQcm {
            answers: state.qcm.answers.clone(),
            computed_score: ExportScore { score, max },
        },
    }
}

impl ExportObject {
    /// Pretty JSON, the shape teachers archive.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// One flat `key,value` list. Deliberately simple so it opens
    /// cleanly in any spreadsheet.
    pub fn to_csv(&self) -> String {
        let mut rows: Vec<(String, String)> = Vec::new();
        let mut push = |key: &str, value: &str| rows.push((key.to_string(), value.to_string()));

        push("student.name", &self.student.name);
        push("student.class", &self.student.class);
        push("student.period", &self.student.period);
        push("student.group", &self.student.group);
        push("student.comment", &self.student.comment);
        push("track", self.track.as_str());
        push("precision", &self.precision.to_string());
        push("converter.mode", self.converter.mode.as_str());

        for (unit, text) in self.converter.board.iter() {
            push(&format!("converter.{unit}"), text);
        }
        for (id, answer) in &self.exercises.answers {
            push(&format!("exercise.{id}"), answer);
        }
        for (id, choice) in &self.qcm.answers {
            push(&format!("qcm.{id}"), &choice.to_string());
        }

        push("qcm.score", &self.qcm.computed_score.score.to_string());
        push("qcm.max", &self.qcm.computed_score.max.to_string());

        let mut csv = String::from("key,value\n");
        for (key, value) in rows {
            csv.push_str(&csv_escape(&key));
            csv.push(',');
            csv.push_str(&csv_escape(&value));
            csv.push('\n');
        }
        csv
    }
}

/// Quote a field when it contains a separator, a quote or a newline;
/// double any embedded quotes.
fn csv_escape(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}
