//! Scripted randomness for exact-output tests.

use std::collections::VecDeque;

use crate::practice_engine::numeric::RandomSource;

/// Replays queued integers and coin flips in order.
///
/// Panics if a generator asks for more values than were scripted, or if a
/// scripted integer falls outside the range the generator asked for; both
/// mean the test no longer matches the generator's draw sequence.
#[derive(Debug, Default)]
pub struct ScriptedSource {
    ints: VecDeque<i64>,
    flips: VecDeque<bool>,
}

impl ScriptedSource {
    pub fn new(ints: &[i64], flips: &[bool]) -> Self {
        ScriptedSource {
            ints: ints.iter().copied().collect(),
            flips: flips.iter().copied().collect(),
        }
    }

    /// True once every scripted value was consumed.
    pub fn exhausted(&self) -> bool {
        self.ints.is_empty() && self.flips.is_empty()
    }
}

impl RandomSource for ScriptedSource {
    fn int_in(&mut self, min: i64, max: i64) -> i64 {
        let x = self.ints.pop_front().expect("script ran out of integers");
        assert!(
            (min..=max).contains(&x),
            "scripted {x} outside requested range {min}..={max}"
        );
        x
    }

    fn chance(&mut self, _probability: f64) -> bool {
        self.flips.pop_front().expect("script ran out of coin flips")
    }
}
