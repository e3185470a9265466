//! Recoverable failures surfaced by the practice engine.
//!
//! None of these are fatal: each carries a `feedback()` message a front end
//! can show before letting the learner try again.

use thiserror::Error;

/// Why a raw answer could not be read as a number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseFailure {
    /// Nothing but whitespace was entered.
    #[error("answer is empty")]
    Empty,

    /// Contains `/` but is not `<number>/<non-zero number>`.
    #[error("malformed fraction")]
    MalformedFraction,

    /// Not a finite decimal number.
    #[error("not a number")]
    NotANumber,
}

impl ParseFailure {
    pub fn feedback(&self) -> &'static str {
        "I couldn't read that. Try a number like 12, 0.5, or 3/4."
    }
}

/// Errors returned by `SessionState::check_answer`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("no active question")]
    NoActiveQuestion,

    #[error("unreadable answer: {0}")]
    Unreadable(#[from] ParseFailure),
}

impl SessionError {
    pub fn feedback(&self) -> &'static str {
        match self {
            SessionError::NoActiveQuestion => "Press Start to get a question first.",
            SessionError::Unreadable(failure) => failure.feedback(),
        }
    }
}

/// Invalid session configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("tolerance must be finite and non-negative (got {0})")]
    InvalidTolerance(f64),

    #[error("level_up_streak must be at least 1")]
    ZeroLevelUpStreak,

    #[error("counters out of order: streak {streak}, score {score}, attempts {attempts}")]
    InconsistentStats { streak: u32, score: u32, attempts: u32 },
}
