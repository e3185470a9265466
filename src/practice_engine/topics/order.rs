use crate::practice_engine::{
    helpers::{question, MINUS, TIMES},
    models::{Level, Question, TopicId},
    numeric::{random_int, RandomSource},
};

/// Up to this level only the `a + b × c` form is asked.
pub const PRECEDENCE_ONLY_MAX_LEVEL: u8 = 4;
pub const BRACKETS_PROBABILITY: f64 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Branch {
    /// `a + b × c`
    Precedence,
    /// `(a + b) × c`
    Brackets,
    /// `a × b − c`
    MultiplyThenSubtract,
}

impl Branch {
    pub fn key(self) -> &'static str {
        match self {
            Branch::Precedence           => "Order:Precedence",
            Branch::Brackets             => "Order:Brackets",
            Branch::MultiplyThenSubtract => "Order:MulSub",
        }
    }

    pub fn hint(self) -> &'static str {
        match self {
            Branch::Precedence           => "Do multiplication before addition.",
            Branch::Brackets             => "Do brackets first.",
            Branch::MultiplyThenSubtract => "Multiply first, then subtract.",
        }
    }
}

pub fn operand_max(level: Level) -> i64 {
    5 + level.as_i64()
}

pub fn choose_branch<S: RandomSource + ?Sized>(source: &mut S, level: Level) -> Branch {
    if level.get() <= PRECEDENCE_ONLY_MAX_LEVEL {
        Branch::Precedence
    } else if source.chance(BRACKETS_PROBABILITY) {
        Branch::Brackets
    } else {
        Branch::MultiplyThenSubtract
    }
}

/// `a × b − c` can come out negative when `c` is large; that is intended.
pub fn generate<S: RandomSource + ?Sized>(source: &mut S, level: Level) -> Question {
    let branch = choose_branch(source, level);
    let max = operand_max(level);
    let a = random_int(source, 2, max);
    let b = random_int(source, 2, max);
    let c = random_int(source, 2, max);

    let (prompt, value) = match branch {
        Branch::Precedence => (format!("{a} + {b} {TIMES} {c} = ?"), a + b * c),
        Branch::Brackets => (format!("({a} + {b}) {TIMES} {c} = ?"), (a + b) * c),
        Branch::MultiplyThenSubtract => (format!("{a} {TIMES} {b} {MINUS} {c} = ?"), a * b - c),
    };

    question(TopicId::Order, branch.key(), prompt, value as f64, branch.hint())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::practice_engine::test_support::ScriptedSource;

    #[test]
    fn precedence_multiplies_first() {
        let mut src = ScriptedSource::new(&[2, 3, 4], &[]);
        let q = generate(&mut src, Level::new(3));
        assert_eq!(q.prompt, "2 + 3 \u{00D7} 4 = ?");
        assert_eq!(q.answer_value, 14.0);
        assert_eq!(q.hint, "Do multiplication before addition.");
    }

    #[test]
    fn brackets_first() {
        let mut src = ScriptedSource::new(&[2, 3, 4], &[true]);
        let q = generate(&mut src, Level::new(5));
        assert_eq!(q.prompt, "(2 + 3) \u{00D7} 4 = ?");
        assert_eq!(q.answer_value, 20.0);
    }

    #[test]
    fn multiply_then_subtract_may_go_negative() {
        let mut src = ScriptedSource::new(&[2, 2, 15], &[false]);
        let q = generate(&mut src, Level::new(10));
        assert_eq!(q.prompt, "2 \u{00D7} 2 \u{2212} 15 = ?");
        assert_eq!(q.answer_value, -11.0);
        assert_eq!(q.branch_key, "Order:MulSub");
    }
}
