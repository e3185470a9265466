//! Core practice engine: question generation, answer parsing and the adaptive session.
//!
//! ## Module overview
//!
//! | Module           | Purpose |
//! |------------------|---------|
//! | `models`         | Shared types: level, topics, questions, session state, outcomes |
//! | `numeric`        | Random source, gcd/lcm, fraction reduction, fixed-point formatting |
//! | `answer`         | Parses learner input (`12`, `0.5`, `3/4`) into a number |
//! | `helpers`        | Shared builder functions that eliminate boilerplate across topics |
//! | `topics`         | Six topic generators, one per module |
//! | `generator`      | Single entry point `generate()`: dispatches to topics |
//! | `session`        | Score/streak/level state machine and the `PracticeSession` controller |
//! | `config`         | Session tunables, loadable from JSON |
//! | `error`          | Parse, session and config errors |
//! | `client_adapter` | JSON payloads for a front end |

pub mod answer;
pub mod client_adapter;
pub mod config;
pub mod error;
pub mod generator;
pub mod helpers;
pub mod models;
pub mod numeric;
pub mod session;
pub mod topics;

#[cfg(test)]
pub(crate) mod test_support;

// Re-export the public API surface so callers can use
// `practice_engine::generate` without reaching into sub-modules.
pub use answer::parse_answer;
pub use config::SessionConfig;
pub use error::{ConfigError, ParseFailure, SessionError};
pub use generator::{generate, generate_by_id, generate_question};
pub use models::{
    Level, LevelChange, Outcome, Question, QuestionRequest, SessionState, SessionStats,
    TopicId, UnknownTopic,
};
pub use numeric::{gcd, lcm, random_int, simplify_fraction, RandomSource};
pub use session::PracticeSession;
