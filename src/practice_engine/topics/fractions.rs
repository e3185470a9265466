use crate::practice_engine::{
    helpers::{pick, question, MINUS},
    models::{Level, Question, TopicId},
    numeric::{fraction_value, lcm, random_int, RandomSource},
};

pub const EASY_DENOMINATORS: [i64; 8] = [2, 3, 4, 5, 6, 8, 10, 12];
pub const HARD_DENOMINATORS: [i64; 9] = [6, 8, 9, 10, 12, 15, 16, 18, 20];

pub const SIMPLIFY_MAX_LEVEL: u8 = 3;
/// Up to this level every non-simplify question uses a shared denominator.
pub const ALWAYS_LIKE_MAX_LEVEL: u8 = 6;
pub const LIKE_PROBABILITY: f64 = 0.6;
pub const ADD_PROBABILITY: f64 = 0.5;

const SIMPLIFY_HINT: &str = "Divide the top and bottom by the same number to simplify.";
const LIKE_HINT: &str = "Same denominator: add/subtract the numerators, keep the denominator.";
const UNLIKE_HINT: &str = "Find a common denominator (LCM), convert both fractions, then add.";
const ANSWER_FORMAT: &str = "(Answer as a fraction or decimal)";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Reduce a scaled-up fraction.
    Simplify,
    /// Add or subtract over one denominator.
    Like,
    /// Add over two denominators via their LCM.
    Unlike,
}

/// Operation actually used in [`Mode::Like`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LikeOp {
    Add,
    Sub,
    /// Subtraction was drawn but would not be positive; shown and scored as addition.
    SubFallback,
}

impl LikeOp {
    pub fn key(self) -> &'static str {
        match self {
            LikeOp::Add         => "Fractions:Like:Add",
            LikeOp::Sub         => "Fractions:Like:Sub",
            LikeOp::SubFallback => "Fractions:Like:SubFallback",
        }
    }

    fn is_addition(self) -> bool {
        !matches!(self, LikeOp::Sub)
    }
}

pub fn choose_mode<S: RandomSource + ?Sized>(source: &mut S, level: Level) -> Mode {
    if level.get() <= SIMPLIFY_MAX_LEVEL {
        Mode::Simplify
    } else if level.get() <= ALWAYS_LIKE_MAX_LEVEL || source.chance(LIKE_PROBABILITY) {
        Mode::Like
    } else {
        Mode::Unlike
    }
}

/// Decide the like-denominator operation for numerators `a` and `b`.
pub fn choose_like_op<S: RandomSource + ?Sized>(source: &mut S, a: i64, b: i64) -> LikeOp {
    if source.chance(ADD_PROBABILITY) {
        LikeOp::Add
    } else if a - b <= 0 {
        LikeOp::SubFallback
    } else {
        LikeOp::Sub
    }
}

pub fn generate<S: RandomSource + ?Sized>(source: &mut S, level: Level) -> Question {
    match choose_mode(source, level) {
        Mode::Simplify => simplify(source),
        Mode::Like => like_denominators(source),
        Mode::Unlike => unlike_denominators(source),
    }
}

fn simplify<S: RandomSource + ?Sized>(source: &mut S) -> Question {
    let d = pick(source, &EASY_DENOMINATORS);
    let n = random_int(source, 1, d - 1);
    let k = random_int(source, 2, 4);
    question(
        TopicId::Fractions,
        "Fractions:Simplify",
        format!("Simplify the fraction: {}/{}", n * k, d * k),
        fraction_value(n, d),
        SIMPLIFY_HINT,
    )
}

fn like_denominators<S: RandomSource + ?Sized>(source: &mut S) -> Question {
    let d = pick(source, &EASY_DENOMINATORS);
    let a = random_int(source, 1, d - 1);
    let b = random_int(source, 1, d - 1);
    let op = choose_like_op(source, a, b);

    let (glyph, numerator) = if op.is_addition() { ("+", a + b) } else { (MINUS, a - b) };
    question(
        TopicId::Fractions,
        op.key(),
        format!("{a}/{d} {glyph} {b}/{d} = ?  {ANSWER_FORMAT}"),
        fraction_value(numerator, d),
        LIKE_HINT,
    )
}

fn unlike_denominators<S: RandomSource + ?Sized>(source: &mut S) -> Question {
    let d1 = pick(source, &HARD_DENOMINATORS);
    let d2 = pick(source, &HARD_DENOMINATORS);
    let a = random_int(source, 1, d1 - 1);
    let b = random_int(source, 1, d2 - 1);

    let common = lcm(d1, d2);
    let numerator = a * (common / d1) + b * (common / d2);
    question(
        TopicId::Fractions,
        "Fractions:Unlike",
        format!("{a}/{d1} + {b}/{d2} = ?  {ANSWER_FORMAT}"),
        fraction_value(numerator, common),
        UNLIKE_HINT,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::practice_engine::test_support::ScriptedSource;

    #[test]
    fn simplify_scales_up_and_answers_reduced_value() {
        // pool index 3 -> d = 5, n = 2, k = 3
        let mut src = ScriptedSource::new(&[3, 2, 3], &[]);
        let q = generate(&mut src, Level::new(2));
        assert_eq!(q.prompt, "Simplify the fraction: 6/15");
        assert_eq!(q.answer_value, 2.0 / 5.0);
        assert_eq!(q.branch_key, "Fractions:Simplify");
    }

    #[test]
    fn like_addition() {
        // level 5 always like: d = 8 (index 5), a = 3, b = 1, add
        let mut src = ScriptedSource::new(&[5, 3, 1], &[true]);
        let q = generate(&mut src, Level::new(5));
        assert!(q.prompt.starts_with("3/8 + 1/8 = ?"));
        assert_eq!(q.answer_value, 0.5);
        assert_eq!(q.branch_key, "Fractions:Like:Add");
        assert!(src.exhausted());
    }

    #[test]
    fn like_subtraction_when_positive() {
        let mut src = ScriptedSource::new(&[5, 7, 3], &[false]);
        let q = generate(&mut src, Level::new(4));
        assert!(q.prompt.starts_with("7/8 \u{2212} 3/8 = ?"));
        assert_eq!(q.answer_value, 0.5);
        assert_eq!(q.branch_key, "Fractions:Like:Sub");
    }

    #[test]
    fn non_positive_subtraction_falls_back_to_addition() {
        for (a, b) in [(2, 5), (4, 4)] {
            let mut src = ScriptedSource::new(&[5, a, b], &[false]);
            let q = generate(&mut src, Level::new(6));
            assert!(q.prompt.starts_with(&format!("{a}/8 + {b}/8 = ?")), "{}", q.prompt);
            assert_eq!(q.answer_value, (a + b) as f64 / 8.0);
            assert_eq!(q.branch_key, "Fractions:Like:SubFallback");
        }
    }

    #[test]
    fn unlike_adds_over_lcm() {
        // level 9, like coin says no: d1 = 6 (index 0), d2 = 8 (index 1), a = 1, b = 3
        let mut src = ScriptedSource::new(&[0, 1, 1, 3], &[false]);
        let q = generate(&mut src, Level::new(9));
        assert!(q.prompt.starts_with("1/6 + 3/8 = ?"));
        // 4/24 + 9/24 = 13/24
        assert_eq!(q.answer_value, 13.0 / 24.0);
        assert_eq!(q.branch_key, "Fractions:Unlike");
    }

    #[test]
    fn high_levels_can_still_pick_like() {
        let mut src = ScriptedSource::new(&[0, 1, 1], &[true, true]);
        let q = generate(&mut src, Level::new(10));
        assert_eq!(q.branch_key, "Fractions:Like:Add");
    }
}
