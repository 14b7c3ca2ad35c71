//! Session state for convtab
//!
//! Everything the conversion-table pages remember between visits:
//! the selected track and precision, the active family and its board,
//! student identity fields, exercise answers, QCM answers and scores.
//! The engine itself stays stateless; this crate owns the mutable
//! side and the plain-data producers built from it (export object,
//! CSV rows, text summary).
//!
//! Persistence is the caller's concern: the whole state serializes
//! with serde and round-trips through JSON.

mod exercises;
mod export;
mod qcm;
mod state;
mod student;
mod summary;
mod track;
mod worked;

pub use exercises::{exercise, Exercise, EXERCISES};
pub use export::{
    build_export, ExportConverter, ExportExercises, ExportMeta, ExportObject, ExportQcm,
    ExportScore,
};
pub use qcm::{QcmQuestion, QCM};
pub use state::{AppState, BoardUpdate, ConverterState, ExerciseState, QcmState};
pub use student::StudentInfo;
pub use summary::compose_summary;
pub use track::{Track, TrackNote};
pub use worked::{worked_example, WorkedExample};
