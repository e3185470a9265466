use crate::practice_engine::{
    helpers::{ordered, question, MINUS},
    models::{Level, Question, TopicId},
    numeric::{fixed, random_int, RandomSource},
};

/// Up to this level only addition is asked.
pub const ADD_ONLY_MAX_LEVEL: u8 = 3;
pub const SUB_PROBABILITY: f64 = 0.5;
/// Operands lie in `[1, 50]` before scaling down.
pub const OPERAND_MIN: i64 = 1;
pub const OPERAND_MAX: i64 = 50;

const HINT: &str = "Line up the decimal points before adding/subtracting.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Branch {
    Add,
    /// Larger minus smaller.
    Sub,
}

impl Branch {
    pub fn key(self) -> &'static str {
        match self {
            Branch::Add => "Decimals:Add",
            Branch::Sub => "Decimals:Sub",
        }
    }
}

/// Decimal places shown and expected: 1, then 2 from level 4, then 3 from level 8.
pub fn places(level: Level) -> u32 {
    match level.get() {
        0..=3 => 1,
        4..=7 => 2,
        _ => 3,
    }
}

pub fn choose_branch<S: RandomSource + ?Sized>(source: &mut S, level: Level) -> Branch {
    if level.get() <= ADD_ONLY_MAX_LEVEL || !source.chance(SUB_PROBABILITY) {
        Branch::Add
    } else {
        Branch::Sub
    }
}

/// Operands are drawn as whole numbers of the smallest unit (`10^-places`),
/// so sums and differences are exact and the stored answer is already the
/// rounded value a learner would type.
pub fn generate<S: RandomSource + ?Sized>(source: &mut S, level: Level) -> Question {
    let branch = choose_branch(source, level);
    let places = places(level);
    let scale = 10i64.pow(places);

    let a = random_int(source, OPERAND_MIN * scale, OPERAND_MAX * scale);
    let b = random_int(source, OPERAND_MIN * scale, OPERAND_MAX * scale);

    let (prompt, units) = match branch {
        Branch::Add => (format!("{} + {} = ?", fixed(a, places), fixed(b, places)), a + b),
        Branch::Sub => {
            let (big, small) = ordered(a, b);
            (format!("{} {MINUS} {} = ?", fixed(big, places), fixed(small, places)), big - small)
        }
    };

    question(TopicId::Decimals, branch.key(), prompt, units as f64 / scale as f64, HINT)
}
