//! Teacher tooling: generated exercise cards
//!
//! Samples (family, unit pair, clean value) triples and asks the
//! engine for the correction. A thin consumer of convtab-units; no
//! randomness ever enters the engine itself.

mod generator;
mod pools;

pub use generator::{GeneratedExercise, Generator};
pub use pools::{value_pool, QuestionPool, POOLS};
