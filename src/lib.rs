//! # arith_drill_gen
//!
//! An offline, deterministic arithmetic practice engine for grades 3–6.
//!
//! The library generates randomised questions across six topics (addition &
//! subtraction, multiplication & division, fractions, decimals, order of
//! operations, word problems), reads free-text answers including `n/d`
//! fractions, and adapts the difficulty level to how the learner is doing.
//!
//! ## How it works
//!
//! 1. Pick a [`TopicId`] and a [`Level`] (1–10).
//! 2. Call [`generate`] with any random source (every `rand::Rng` works) or
//!    [`generate_question`] with a [`QuestionRequest`]. The returned
//!    [`Question`] carries the prompt, the exact answer value and a hint.
//! 3. Feed the learner's raw text to [`SessionState::check_answer`]: it parses
//!    the input, compares it within a tolerance of `1e-9`, and moves the
//!    level up after every two correct answers in a row or down after a miss.
//!
//! ## Key features
//!
//! - **Deterministic**: pass `rng_seed: Some(u64)` (or a seeded RNG) to get
//!   the exact same question every time.
//! - **Branch keys**: each question includes a `branch_key` naming the
//!   generation branch (e.g. `"MultDiv:Div"`, `"Fractions:Unlike"`), stable
//!   across seeds and useful for tracking which question types a learner has
//!   mastered.
//! - **No panics on input**: empty, malformed or non-finite answers come back
//!   as [`ParseFailure`] values and never touch the session counters.
//!
//! ## Quick start
//!
//! ```rust
//! use arith_drill_gen::{
//!     generate_question, PracticeSession, QuestionRequest, SessionConfig, TopicId,
//! };
//!
//! // One-off question, reproducible by seed:
//! let q = generate_question(QuestionRequest::new(TopicId::Fractions).at_level(5u8).seeded(42));
//! println!("Q: {}", q.prompt);
//!
//! // A whole session:
//! let mut session = PracticeSession::with_seed(7, SessionConfig::default())?;
//! let answer = session.next_question(TopicId::MultDiv).answer_value.to_string();
//! let outcome = session.check_answer(&answer).unwrap();
//! assert!(outcome.correct);
//! assert_eq!(outcome.stats.score, 1);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod practice_engine;

// Convenience re-exports so callers can use `arith_drill_gen::generate`
// directly without reaching into `practice_engine::`.
pub use practice_engine::{
    client_adapter, gcd, generate, generate_by_id, generate_question, lcm, parse_answer,
    random_int, simplify_fraction, ConfigError, Level, LevelChange, Outcome, ParseFailure,
    PracticeSession, Question, QuestionRequest, RandomSource, SessionConfig, SessionError,
    SessionState, SessionStats, TopicId, UnknownTopic,
};
