use crate::practice_engine::{
    helpers::{question, DIVIDE, TIMES},
    models::{Level, Question, TopicId},
    numeric::{random_int, RandomSource},
};

/// Above this level the times-table drill gives way to long multiplication and division.
pub const TABLES_MAX_LEVEL: u8 = 5;
pub const DIV_PROBABILITY: f64 = 0.4;

const TABLE_HINT: &str = "Use times tables. Try doubling/halving tricks (e.g., 6\u{00D7}8 = (3\u{00D7}8)\u{00D7}2).";
const LONG_HINT: &str = "Break it up: 37\u{00D7}6 = (30\u{00D7}6) + (7\u{00D7}6).";
const DIV_HINT: &str = "Division is the reverse of multiplication: find the number that times the divisor gives the dividend.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Branch {
    /// Both factors from the times table.
    Table,
    /// Two-digit by one/two-digit multiplication.
    Long,
    /// Division built from a quotient so it always comes out even.
    Div,
}

impl Branch {
    pub fn key(self) -> &'static str {
        match self {
            Branch::Table => "MultDiv:Table",
            Branch::Long  => "MultDiv:Long",
            Branch::Div   => "MultDiv:Div",
        }
    }
}

/// Upper factor for times-table questions: `clamp(6 + level, 7, 12)`.
pub fn table_max(level: Level) -> i64 {
    (6 + level.as_i64()).clamp(7, 12)
}

pub fn choose_branch<S: RandomSource + ?Sized>(source: &mut S, level: Level) -> Branch {
    if level.get() <= TABLES_MAX_LEVEL {
        Branch::Table
    } else if source.chance(DIV_PROBABILITY) {
        Branch::Div
    } else {
        Branch::Long
    }
}

pub fn generate<S: RandomSource + ?Sized>(source: &mut S, level: Level) -> Question {
    let branch = choose_branch(source, level);
    let l = level.as_i64();

    match branch {
        Branch::Table => {
            let max = table_max(level);
            let a = random_int(source, 2, max);
            let b = random_int(source, 2, max);
            question(TopicId::MultDiv, branch.key(), format!("{a} {TIMES} {b} = ?"), (a * b) as f64, TABLE_HINT)
        }
        Branch::Long => {
            let a = random_int(source, 12, 99);
            let b = random_int(source, 2, 12);
            question(TopicId::MultDiv, branch.key(), format!("{a} {TIMES} {b} = ?"), (a * b) as f64, LONG_HINT)
        }
        Branch::Div => {
            let q = random_int(source, 2, 12 + l);
            let d = random_int(source, 2, 9 + l / 2);
            let n = q * d;
            question(TopicId::MultDiv, branch.key(), format!("{n} {DIVIDE} {d} = ?"), q as f64, DIV_HINT)
        }
    }
}
