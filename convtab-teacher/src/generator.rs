//! The exercise generator

use convtab_core::{format_value, Precision};
use convtab_units::{convert, Board, ConvertError};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::pools::{value_pool, QuestionPool, POOLS};

/// One generated card: a question and its correction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedExercise {
    /// Family tag shown on the card (e.g. "Aires").
    pub kind: String,
    pub question: String,
    /// Derived value plus target unit (e.g. "4700 Ω").
    pub answer: String,
}

/// Samples cards from the static pools. Seedable so a worksheet can
/// be reproduced.
pub struct Generator {
    rng: SmallRng,
    precision: Precision,
}

impl Generator {
    pub fn new() -> Self {
        Generator::from_rng(SmallRng::from_entropy())
    }

    pub fn with_seed(seed: u64) -> Self {
        Generator::from_rng(SmallRng::seed_from_u64(seed))
    }

    fn from_rng(rng: SmallRng) -> Self {
        Generator {
            rng,
            precision: Precision::Auto,
        }
    }

    fn pick<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        &items[self.rng.gen_range(0..items.len())]
    }

    /// Generate one card. Runs the engine on a scratch board; the
    /// student's live state is never touched.
    pub fn generate_one(&mut self) -> Result<GeneratedExercise, ConvertError> {
        let pool: &QuestionPool = {
            let index = self.rng.gen_range(0..POOLS.len());
            &POOLS[index]
        };
        let (from, to) = *self.pick(pool.pairs);
        let value = *self.pick(value_pool(pool.family));

        let raw = format_value(value, Precision::Auto);
        let derived = convert(pool.family.as_str(), from, &raw, self.precision, &Board::new())?;

        // every pool pair stays within its family, so the key exists
        let expected = derived
            .get(to)
            .cloned()
            .unwrap_or_else(|| "—".to_string());

        Ok(GeneratedExercise {
            kind: pool.kind.to_string(),
            question: format!("Convertir {raw} {from} en {to}."),
            answer: format!("{expected} {to}"),
        })
    }

    /// Generate a worksheet of `count` cards.
    pub fn generate(&mut self, count: usize) -> Result<Vec<GeneratedExercise>, ConvertError> {
        (0..count).map(|_| self.generate_one()).collect()
    }
}

impl Default for Generator {
    fn default() -> Self {
        Generator::new()
    }
}
