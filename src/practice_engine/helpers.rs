//! Shared builder functions used by every topic generator.
//!
//! Topic files only decide numbers and wording; assembling the final
//! [`Question`], picking from pools and the operator glyphs live here.
//!
//! ## RNG ordering
//!
//! Generators draw values in the order they appear in the prompt, after any
//! branch decision.  Scripted-source tests depend on that order.

use crate::practice_engine::{
    models::{Question, TopicId},
    numeric::{random_int, RandomSource},
};

/// Unicode minus sign used in prompts.
pub const MINUS: &str = "\u{2212}";
/// Unicode multiplication sign used in prompts.
pub const TIMES: &str = "\u{00D7}";
/// Unicode division sign used in prompts.
pub const DIVIDE: &str = "\u{00F7}";

/// Uniformly pick one element of a non-empty pool.
pub fn pick<S: RandomSource + ?Sized, T: Copy>(source: &mut S, pool: &[T]) -> T {
    let idx = random_int(source, 0, pool.len() as i64 - 1);
    pool[idx as usize]
}

/// Assemble the final [`Question`]; the last call in every topic generator.
pub fn question(
    topic: TopicId,
    branch_key: impl Into<String>,
    prompt: String,
    answer_value: f64,
    hint: &str,
) -> Question {
    Question {
        topic,
        branch_key: branch_key.into(),
        prompt,
        answer_value,
        hint: hint.to_string(),
    }
}

/// Larger value first.
pub fn ordered(a: i64, b: i64) -> (i64, i64) {
    (a.max(b), a.min(b))
}
