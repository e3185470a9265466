use crate::practice_engine::{
    helpers::question,
    models::{Level, Question, TopicId},
    numeric::{random_int, RandomSource},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Branch {
    /// Packs of stickers: multiplication.
    Packs,
    /// Marbles given away: subtraction.
    GiveAway,
    /// Cupcakes shared equally: exact division.
    Sharing,
}

impl Branch {
    pub fn key(self) -> &'static str {
        match self {
            Branch::Packs    => "Word:Packs",
            Branch::GiveAway => "Word:GiveAway",
            Branch::Sharing  => "Word:Sharing",
        }
    }
}

/// Each story is equally likely.
pub fn choose_branch<S: RandomSource + ?Sized>(source: &mut S) -> Branch {
    match random_int(source, 1, 3) {
        1 => Branch::Packs,
        2 => Branch::GiveAway,
        _ => Branch::Sharing,
    }
}

pub fn generate<S: RandomSource + ?Sized>(source: &mut S, level: Level) -> Question {
    let l = level.as_i64();
    let branch = choose_branch(source);

    match branch {
        Branch::Packs => {
            let packs = random_int(source, 2, 4 + l);
            let each = random_int(source, 3, 6 + l);
            question(
                TopicId::Word,
                branch.key(),
                format!(
                    "You have {packs} packs of stickers. Each pack has {each} stickers. \
                     How many stickers in total?"
                ),
                (packs * each) as f64,
                "Total = number of packs \u{00D7} stickers per pack.",
            )
        }
        Branch::GiveAway => {
            let total = random_int(source, 30, 60 + l * 10);
            // floor(0.6 * total) without going through floats
            let used = random_int(source, 5, total * 3 / 5);
            question(
                TopicId::Word,
                branch.key(),
                format!(
                    "You had {total} marbles. You gave away {used}. \
                     How many marbles do you have left?"
                ),
                (total - used) as f64,
                "Left = total \u{2212} given away.",
            )
        }
        Branch::Sharing => {
            let total = random_int(source, 24, 72 + l * 12);
            let groups = random_int(source, 2, 6 + l / 2);
            let divisible = total - total % groups;
            question(
                TopicId::Word,
                branch.key(),
                format!(
                    "{divisible} cupcakes are shared equally among {groups} kids. \
                     How many cupcakes does each kid get?"
                ),
                (divisible / groups) as f64,
                "Equal sharing means division: total \u{00F7} number of kids.",
            )
        }
    }
}
