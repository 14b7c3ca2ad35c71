//! The whole session state and the board-entry policy around convert

use std::collections::BTreeMap;

use convtab_core::Precision;
use convtab_units::{convert, Board, ConvertError, FamilyId};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::qcm;
use crate::worked::{worked_example, WorkedExample};

/// Active family plus its live board.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConverterState {
    /// Kept under the original key "mode" in serialized form.
    #[serde(rename = "mode")]
    pub family: FamilyId,
    pub board: Board,
}

impl Default for ConverterState {
    fn default() -> Self {
        ConverterState {
            family: FamilyId::Length,
            board: Board::new(),
        }
    }
}

/// Exercise answers and per-exercise correction visibility.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ExerciseState {
    pub answers: BTreeMap<String, String>,
    pub show_corrections: BTreeMap<String, bool>,
}

impl ExerciseState {
    /// Count of non-blank answers.
    pub fn answered_count(&self) -> usize {
        self.answers.values().filter(|v| !v.trim().is_empty()).count()
    }
}

/// QCM answers (choice index per question id) and the last computed
/// score.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct QcmState {
    pub answers: BTreeMap<String, usize>,
    pub last_score: Option<u32>,
    pub last_max: Option<u32>,
    /// Caller-supplied timestamp; the library keeps no clock.
    pub last_at: Option<String>,
}

/// Outcome of entering text into a board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardUpdate {
    /// The value parsed; the whole family row was recomputed.
    Propagated,
    /// The text was rejected; it stays in the edited cell only and
    /// every other cell is untouched.
    RawKept,
}

/// Everything the pages remember. Serializes as one JSON object; the
/// caller owns where it is stored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppState {
    pub track: crate::Track,
    pub precision: Precision,
    pub converter: ConverterState,
    pub student: crate::StudentInfo,
    pub exercises: ExerciseState,
    pub qcm: QcmState,
}

impl AppState {
    /// Switch the active family. The board never survives a family
    /// change.
    pub fn select_family(&mut self, family: FamilyId) {
        self.converter.family = family;
        self.converter.board.clear();
    }

    pub fn clear_board(&mut self) {
        self.converter.board.clear();
    }

    /// Drop everything back to the defaults.
    pub fn reset(&mut self) {
        debug!("resetting session state");
        *self = AppState::default();
    }

    /// Enter raw text into one cell of the active family's table.
    ///
    /// The raw text is stored first so a rejected value stays visible
    /// in the edited cell while the student keeps typing. Unknown-unit
    /// and unknown-family errors propagate; they are caller bugs.
    pub fn enter_value(&mut self, unit: &str, raw: &str) -> Result<BoardUpdate, ConvertError> {
        self.converter.board.set(unit, raw);

        match convert(
            self.converter.family.as_str(),
            unit,
            raw,
            self.precision,
            &self.converter.board,
        ) {
            Ok(derived) => {
                self.converter.board.extend(derived);
                Ok(BoardUpdate::Propagated)
            }
            Err(ConvertError::Input(_)) => Ok(BoardUpdate::RawKept),
            Err(err) => Err(err),
        }
    }

    /// Seed the active family's table with its worked example.
    pub fn apply_worked_example(&mut self) -> Result<&'static WorkedExample, ConvertError> {
        let example = worked_example(self.converter.family);
        self.converter.board.clear();
        self.enter_value(example.unit, example.value)?;
        Ok(example)
    }

    pub fn answer_exercise(&mut self, id: &str, text: impl Into<String>) {
        self.exercises.answers.insert(id.to_string(), text.into());
    }

    pub fn toggle_correction(&mut self, id: &str) {
        let shown = self.exercises.show_corrections.entry(id.to_string()).or_insert(false);
        *shown = !*shown;
    }

    pub fn answer_qcm(&mut self, id: &str, choice: usize) {
        self.qcm.answers.insert(id.to_string(), choice);
    }

    /// Current QCM score against the bank: (score, max).
    pub fn qcm_score(&self) -> (u32, u32) {
        qcm::score(&self.qcm.answers)
    }

    /// Compute and stamp the score. The timestamp is whatever the
    /// caller considers "now".
    pub fn record_qcm_score(&mut self, at: impl Into<String>) -> (u32, u32) {
        let (score, max) = self.qcm_score();
        debug!(score, max, "recording QCM score");
        self.qcm.last_score = Some(score);
        self.qcm.last_max = Some(max);
        self.qcm.last_at = Some(at.into());
        (score, max)
    }
}
