use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::practice_engine::{config::SessionConfig, error::ConfigError};

// ---------------------------------------------------------------------------
// Difficulty
// ---------------------------------------------------------------------------

/// Adaptive difficulty, always within `1..=10`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "i64", into = "u8")]
pub struct Level(u8);

impl Level {
    pub const MIN: Level = Level(1);
    pub const MAX: Level = Level(10);

    /// Build a level, clamping anything outside `1..=10`.
    pub fn new(n: i64) -> Self {
        Level(n.clamp(Self::MIN.0 as i64, Self::MAX.0 as i64) as u8)
    }

    pub fn get(self) -> u8 {
        self.0
    }

    /// Same value widened for arithmetic inside generators.
    pub fn as_i64(self) -> i64 {
        self.0 as i64
    }

    pub fn up(self) -> Self {
        Level::new(self.as_i64() + 1)
    }

    pub fn down(self) -> Self {
        Level::new(self.as_i64() - 1)
    }

    /// Every level from easiest to hardest.
    pub fn all() -> impl Iterator<Item = Level> {
        (Self::MIN.0..=Self::MAX.0).map(Level)
    }
}

impl Default for Level {
    fn default() -> Self {
        Level::MIN
    }
}

impl From<u8> for Level {
    fn from(n: u8) -> Self {
        Level::new(n as i64)
    }
}

impl From<i64> for Level {
    fn from(n: i64) -> Self {
        Level::new(n)
    }
}

impl From<Level> for u8 {
    fn from(level: Level) -> u8 {
        level.0
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Level {}", self.0)
    }
}

// ---------------------------------------------------------------------------
// Topics
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TopicId {
    AddSub,
    MultDiv,
    Fractions,
    Decimals,
    Order,
    Word,
}

impl TopicId {
    /// All six topics in canonical order.
    pub const ALL: [TopicId; 6] = [
        TopicId::AddSub,
        TopicId::MultDiv,
        TopicId::Fractions,
        TopicId::Decimals,
        TopicId::Order,
        TopicId::Word,
    ];

    /// Wire identifier, e.g. `"multdiv"`.
    pub fn id(self) -> &'static str {
        match self {
            TopicId::AddSub    => "addsub",
            TopicId::MultDiv   => "multdiv",
            TopicId::Fractions => "fractions",
            TopicId::Decimals  => "decimals",
            TopicId::Order     => "order",
            TopicId::Word      => "word",
        }
    }

    /// Resolve an identifier, falling back to [`TopicId::AddSub`] for anything unknown.
    pub fn from_id_or_default(id: &str) -> TopicId {
        id.parse().unwrap_or_else(|_| {
            tracing::debug!("unknown topic '{}', falling back to addsub", id);
            TopicId::AddSub
        })
    }
}

impl fmt::Display for TopicId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TopicId::AddSub    => "Addition & Subtraction",
            TopicId::MultDiv   => "Multiplication & Division",
            TopicId::Fractions => "Fractions",
            TopicId::Decimals  => "Decimals",
            TopicId::Order     => "Order of Operations",
            TopicId::Word      => "Word Problems",
        };
        write!(f, "{}", s)
    }
}

/// Returned by `"xyz".parse::<TopicId>()`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown topic: {0}")]
pub struct UnknownTopic(pub String);

impl FromStr for TopicId {
    type Err = UnknownTopic;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TopicId::ALL
            .into_iter()
            .find(|t| t.id() == s.trim())
            .ok_or_else(|| UnknownTopic(s.to_string()))
    }
}

// ---------------------------------------------------------------------------
// Request / question types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionRequest {
    pub topic: TopicId,
    pub level: Level,
    pub rng_seed: Option<u64>,
}

impl QuestionRequest {
    /// Level 1, entropy-seeded.
    pub fn new(topic: TopicId) -> Self {
        QuestionRequest { topic, level: Level::MIN, rng_seed: None }
    }

    pub fn at_level(mut self, level: impl Into<Level>) -> Self {
        self.level = level.into();
        self
    }

    pub fn seeded(mut self, seed: u64) -> Self {
        self.rng_seed = Some(seed);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    pub topic: TopicId,
    /// Which generation branch produced this question.
    /// Stable across seeds, e.g. "AddSub:Sub", "Fractions:Unlike".
    pub branch_key: String,
    pub prompt: String,
    pub answer_value: f64,
    pub hint: String,
}

// ---------------------------------------------------------------------------
// Session types
// ---------------------------------------------------------------------------

/// Counters for one session.  Always `streak <= score <= attempts`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "StoredStats")]
pub struct SessionStats {
    pub level: Level,
    pub streak: u32,
    pub score: u32,
    pub attempts: u32,
}

/// Wire shape of [`SessionStats`], checked before it becomes one.
#[derive(Deserialize)]
struct StoredStats {
    level: Level,
    streak: u32,
    score: u32,
    attempts: u32,
}

impl TryFrom<StoredStats> for SessionStats {
    type Error = ConfigError;

    fn try_from(s: StoredStats) -> Result<Self, Self::Error> {
        if s.streak > s.score || s.score > s.attempts {
            return Err(ConfigError::InconsistentStats {
                streak: s.streak,
                score: s.score,
                attempts: s.attempts,
            });
        }
        Ok(SessionStats { level: s.level, streak: s.streak, score: s.score, attempts: s.attempts })
    }
}

/// One learner's progress plus the active question.
///
/// Only built through `SessionState::new` or deserialization, both of which
/// reject an invalid [`SessionConfig`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "StoredState")]
pub struct SessionState {
    pub(crate) stats: SessionStats,
    pub(crate) current: Option<Question>,
    pub(crate) config: SessionConfig,
}

#[derive(Deserialize)]
struct StoredState {
    stats: SessionStats,
    current: Option<Question>,
    config: SessionConfig,
}

impl TryFrom<StoredState> for SessionState {
    type Error = ConfigError;

    fn try_from(s: StoredState) -> Result<Self, Self::Error> {
        s.config.validate()?;
        Ok(SessionState { stats: s.stats, current: s.current, config: s.config })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LevelChange {
    Up,
    Down,
    Unchanged,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Outcome {
    pub correct: bool,
    pub submitted: f64,
    pub expected: f64,
    pub level_change: LevelChange,
    /// Counters after the transition was applied.
    pub stats: SessionStats,
}
