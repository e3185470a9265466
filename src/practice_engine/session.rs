//! Score, streak and adaptive level for one learner.
//!
//! [`SessionState`] is a plain value: callers own it, pass it the RNG when
//! asking for a question and hand it raw answer text.  [`PracticeSession`]
//! bundles a state with its own RNG for front ends that don't care about
//! injecting randomness.

use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::practice_engine::{
    answer::parse_answer,
    config::SessionConfig,
    error::{ConfigError, SessionError},
    generator,
    models::{LevelChange, Outcome, Question, SessionState, SessionStats, TopicId},
    numeric::RandomSource,
};

impl SessionStats {
    fn fresh(config: &SessionConfig) -> Self {
        SessionStats { level: config.starting_level, streak: 0, score: 0, attempts: 0 }
    }
}

impl Default for SessionState {
    fn default() -> Self {
        let config = SessionConfig::default();
        SessionState { stats: SessionStats::fresh(&config), current: None, config }
    }
}

impl SessionState {
    /// Fresh session at `config.starting_level`; fails if `config` does not validate.
    pub fn new(config: SessionConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(SessionState { stats: SessionStats::fresh(&config), current: None, config })
    }

    /// Replace the active question with a fresh one at the current level.
    /// Counters are left alone.
    pub fn new_question<S: RandomSource + ?Sized>(&mut self, topic: TopicId, source: &mut S) -> &Question {
        let question = generator::generate(topic, self.stats.level, source);
        self.current.insert(question)
    }

    /// Score `raw` against the active question and apply the level/streak rule.
    ///
    /// Unreadable input and a missing question are reported as errors and
    /// leave every counter untouched.
    pub fn check_answer(&mut self, raw: &str) -> Result<Outcome, SessionError> {
        let expected = self
            .current
            .as_ref()
            .ok_or(SessionError::NoActiveQuestion)?
            .answer_value;

        let submitted = parse_answer(raw).map_err(|failure| {
            tracing::trace!(%failure, raw, "unreadable answer");
            failure
        })?;

        let stats = &mut self.stats;
        stats.attempts += 1;
        let correct = (submitted - expected).abs() <= self.config.tolerance;

        let before = stats.level;
        if correct {
            stats.score += 1;
            stats.streak += 1;
            if stats.streak % self.config.level_up_streak == 0 {
                stats.level = stats.level.up();
            }
        } else {
            stats.streak = 0;
            stats.level = stats.level.down();
        }

        let level_change = match stats.level.cmp(&before) {
            std::cmp::Ordering::Greater => LevelChange::Up,
            std::cmp::Ordering::Less    => LevelChange::Down,
            std::cmp::Ordering::Equal   => LevelChange::Unchanged,
        };
        tracing::debug!(
            correct,
            submitted,
            expected,
            level = stats.level.get(),
            streak = stats.streak,
            "checked answer"
        );

        Ok(Outcome { correct, submitted, expected, level_change, stats: *stats })
    }

    /// Hint for the active question, if any.
    pub fn hint(&self) -> Option<&str> {
        self.current.as_ref().map(|q| q.hint.as_str())
    }

    /// Back to the starting level with zeroed counters and no question.
    pub fn reset(&mut self) {
        self.stats = SessionStats::fresh(&self.config);
        self.current = None;
    }

    pub fn stats(&self) -> SessionStats {
        self.stats
    }

    pub fn current(&self) -> Option<&Question> {
        self.current.as_ref()
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }
}

/// A [`SessionState`] together with the RNG its questions are drawn from.
#[derive(Debug, Clone)]
pub struct PracticeSession<R: Rng = StdRng> {
    rng: R,
    state: SessionState,
}

impl PracticeSession<StdRng> {
    /// Entropy-seeded session.
    pub fn new(config: SessionConfig) -> Result<Self, ConfigError> {
        PracticeSession::with_rng(StdRng::from_entropy(), config)
    }

    /// Reproducible session: the same seed asks the same questions.
    pub fn with_seed(seed: u64, config: SessionConfig) -> Result<Self, ConfigError> {
        PracticeSession::with_rng(StdRng::seed_from_u64(seed), config)
    }
}

impl<R: Rng> PracticeSession<R> {
    pub fn with_rng(rng: R, config: SessionConfig) -> Result<Self, ConfigError> {
        Ok(PracticeSession { rng, state: SessionState::new(config)? })
    }

    pub fn next_question(&mut self, topic: TopicId) -> &Question {
        self.state.new_question(topic, &mut self.rng)
    }

    pub fn check_answer(&mut self, raw: &str) -> Result<Outcome, SessionError> {
        self.state.check_answer(raw)
    }

    pub fn hint(&self) -> Option<&str> {
        self.state.hint()
    }

    pub fn reset(&mut self) {
        self.state.reset();
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn stats(&self) -> SessionStats {
        self.state.stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::practice_engine::{error::ParseFailure, models::Level};

    fn answered(state: &SessionState) -> String {
        state.current().map(|q| q.answer_value.to_string()).unwrap_or_default()
    }

    fn session_at(level: u8) -> (SessionState, StdRng) {
        let config = SessionConfig { starting_level: Level::from(level), ..SessionConfig::default() };
        (SessionState::new(config).unwrap(), StdRng::seed_from_u64(7))
    }

    #[test]
    fn check_without_question_is_rejected() {
        let mut state = SessionState::default();
        assert_eq!(state.check_answer("3"), Err(SessionError::NoActiveQuestion));
        assert_eq!(state.stats().attempts, 0);
    }

    #[test]
    fn unreadable_answer_leaves_counters_alone() {
        let (mut state, mut rng) = session_at(3);
        state.new_question(TopicId::AddSub, &mut rng);
        let before = state.stats();
        assert_eq!(
            state.check_answer("   "),
            Err(SessionError::Unreadable(ParseFailure::Empty))
        );
        assert_eq!(
            state.check_answer("3/0"),
            Err(SessionError::Unreadable(ParseFailure::MalformedFraction))
        );
        assert_eq!(state.stats(), before);
    }

    #[test]
    fn new_question_keeps_counters() {
        let (mut state, mut rng) = session_at(4);
        let before = state.stats();
        state.new_question(TopicId::Word, &mut rng);
        state.new_question(TopicId::Order, &mut rng);
        assert_eq!(state.stats(), before);
        assert_eq!(state.current().map(|q| q.topic), Some(TopicId::Order));
    }

    #[test]
    fn two_correct_in_a_row_level_up_once() {
        let (mut state, mut rng) = session_at(3);
        state.new_question(TopicId::MultDiv, &mut rng);
        let first = state.check_answer(&answered(&state)).unwrap();
        assert!(first.correct);
        assert_eq!(first.level_change, LevelChange::Unchanged);
        assert_eq!(first.stats.level, Level::new(3));

        state.new_question(TopicId::MultDiv, &mut rng);
        let second = state.check_answer(&answered(&state)).unwrap();
        assert_eq!(second.level_change, LevelChange::Up);
        assert_eq!(second.stats.level, Level::new(4));
        assert_eq!(second.stats.streak, 2);
    }

    #[test]
    fn wrong_answer_resets_streak_and_drops_level() {
        let (mut state, mut rng) = session_at(5);
        for _ in 0..3 {
            state.new_question(TopicId::AddSub, &mut rng);
            state.check_answer(&answered(&state)).unwrap();
        }
        assert_eq!(state.stats().streak, 3);
        let level = state.stats().level;

        state.new_question(TopicId::AddSub, &mut rng);
        let outcome = state.check_answer("-1").unwrap();
        assert!(!outcome.correct);
        assert_eq!(outcome.level_change, LevelChange::Down);
        assert_eq!(outcome.stats.streak, 0);
        assert_eq!(outcome.stats.level, level.down());
    }

    #[test]
    fn level_is_clamped_at_both_ends() {
        let (mut state, mut rng) = session_at(1);
        state.new_question(TopicId::AddSub, &mut rng);
        let outcome = state.check_answer("-1").unwrap();
        assert_eq!(outcome.stats.level, Level::MIN);
        assert_eq!(outcome.level_change, LevelChange::Unchanged);

        let (mut state, mut rng) = session_at(10);
        for _ in 0..4 {
            state.new_question(TopicId::Order, &mut rng);
            state.check_answer(&answered(&state)).unwrap();
        }
        assert_eq!(state.stats().level, Level::MAX);
    }

    #[test]
    fn custom_level_up_streak() {
        let config = SessionConfig { level_up_streak: 3, ..SessionConfig::default() };
        let mut session = PracticeSession::with_seed(11, config).unwrap();
        for expected in [1, 1, 2] {
            session.next_question(TopicId::AddSub);
            let value = session.state().current().map(|q| q.answer_value).unwrap_or_default();
            let outcome = session.check_answer(&value.to_string()).unwrap();
            assert_eq!(outcome.stats.level, Level::new(expected));
        }
    }

    #[test]
    fn hint_and_reset() {
        let mut session = PracticeSession::with_seed(3, SessionConfig::default()).unwrap();
        assert_eq!(session.hint(), None);
        session.next_question(TopicId::Decimals);
        assert_eq!(session.hint(), Some("Line up the decimal points before adding/subtracting."));
        session.check_answer("0").unwrap();
        session.reset();
        assert_eq!(session.stats(), SessionStats::default());
        assert!(session.state().current().is_none());
        assert_eq!(session.hint(), None);
    }

    #[test]
    fn invalid_config_is_rejected_up_front() {
        let nan = SessionConfig { tolerance: f64::NAN, ..SessionConfig::default() };
        assert!(matches!(SessionState::new(nan), Err(ConfigError::InvalidTolerance(_))));

        let zero = SessionConfig { level_up_streak: 0, ..SessionConfig::default() };
        assert!(matches!(
            PracticeSession::with_seed(1, zero),
            Err(ConfigError::ZeroLevelUpStreak)
        ));
    }

    #[test]
    fn stored_state_round_trips() {
        let (mut state, mut rng) = session_at(6);
        state.new_question(TopicId::MultDiv, &mut rng);
        state.check_answer(&answered(&state)).unwrap();
        let json = serde_json::to_string(&state).unwrap();
        let back: SessionState = serde_json::from_str(&json).unwrap();
        assert_eq!(back, state);
    }

    #[test]
    fn stored_state_with_impossible_counters_is_rejected() {
        let more_score_than_attempts = r#"{
            "stats": { "level": 1, "streak": 0, "score": 5, "attempts": 0 },
            "current": null,
            "config": {}
        }"#;
        let err = serde_json::from_str::<SessionState>(more_score_than_attempts).unwrap_err();
        assert!(err.to_string().contains("counters out of order"), "{err}");

        let streak_past_score = r#"{ "level": 3, "streak": 4, "score": 2, "attempts": 6 }"#;
        assert!(serde_json::from_str::<SessionStats>(streak_past_score).is_err());
    }

    #[test]
    fn stored_state_with_invalid_config_is_rejected() {
        let json = r#"{
            "stats": { "level": 2, "streak": 1, "score": 1, "attempts": 1 },
            "current": null,
            "config": { "level_up_streak": 0 }
        }"#;
        assert!(serde_json::from_str::<SessionState>(json).is_err());
    }
}
