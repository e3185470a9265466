use crate::practice_engine::{
    helpers::{ordered, question, MINUS},
    models::{Level, Question, TopicId},
    numeric::{random_int, RandomSource},
};

/// Largest operand per level (index = level - 1).
pub const MAX_BY_LEVEL: [i64; 10] = [20, 50, 100, 200, 500, 1000, 2000, 5000, 10000, 20000];

pub const SUB_PROBABILITY: f64 = 0.5;

const ADD_HINT: &str = "For addition: break numbers into tens/hundreds to add faster.";
const SUB_HINT: &str =
    "For subtraction: think \u{201C}difference\u{201D}. You can count up from the smaller number.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Branch {
    Add,
    /// Larger minus smaller, never negative.
    Sub,
}

impl Branch {
    pub fn key(self) -> &'static str {
        match self {
            Branch::Add => "AddSub:Add",
            Branch::Sub => "AddSub:Sub",
        }
    }
}

pub fn max_operand(level: Level) -> i64 {
    MAX_BY_LEVEL[level.get() as usize - 1]
}

pub fn choose_branch<S: RandomSource + ?Sized>(source: &mut S) -> Branch {
    if source.chance(SUB_PROBABILITY) { Branch::Sub } else { Branch::Add }
}

pub fn generate<S: RandomSource + ?Sized>(source: &mut S, level: Level) -> Question {
    let branch = choose_branch(source);
    let max = max_operand(level);
    let a = random_int(source, 0, max);
    let b = random_int(source, 0, max);

    match branch {
        Branch::Add => question(
            TopicId::AddSub,
            branch.key(),
            format!("{a} + {b} = ?"),
            (a + b) as f64,
            ADD_HINT,
        ),
        Branch::Sub => {
            let (big, small) = ordered(a, b);
            question(
                TopicId::AddSub,
                branch.key(),
                format!("{big} {MINUS} {small} = ?"),
                (big - small) as f64,
                SUB_HINT,
            )
        }
    }
}
