use serde_json::{json, Value};

use crate::practice_engine::{
    error::SessionError,
    models::{LevelChange, Outcome, Question, SessionStats},
};

/// Feedback shown after a correct answer.
pub const CORRECT_FEEDBACK: &str = "Correct \u{2705} Great job! Press Start / Next.";
/// Feedback shown after a wrong answer.
pub const INCORRECT_FEEDBACK: &str = "Not quite \u{274C} Try again or press Hint.";
/// Shown when a new question is displayed.
pub const PROMPT_FEEDBACK: &str = "Type your answer and press Check.";

/// Styling hook for a feedback line.
fn feedback(message: &str, kind: &str) -> Value {
    json!({ "message": message, "kind": kind })
}

/// Map a [`Question`] to what the client may see: no answer value, no hint.
pub fn question_payload(question: &Question) -> Value {
    json!({
        "topic":      question.topic,
        "topic_name": question.topic.to_string(),
        "branch_key": question.branch_key,
        "prompt":     question.prompt,
        "feedback":   feedback(PROMPT_FEEDBACK, ""),
    })
}

/// Scoreboard block: score, attempts, streak and a "Level N" label.
pub fn stats_payload(stats: &SessionStats) -> Value {
    json!({
        "score":       stats.score,
        "attempts":    stats.attempts,
        "streak":      stats.streak,
        "level":       stats.level.get(),
        "level_label": stats.level.to_string(),
    })
}

/// Result of a successfully parsed answer.
pub fn outcome_payload(outcome: &Outcome) -> Value {
    let fb = if outcome.correct {
        feedback(CORRECT_FEEDBACK, "ok")
    } else {
        feedback(INCORRECT_FEEDBACK, "bad")
    };
    let level_change = match outcome.level_change {
        LevelChange::Up        => "up",
        LevelChange::Down      => "down",
        LevelChange::Unchanged => "unchanged",
    };
    json!({
        "correct":      outcome.correct,
        "level_change": level_change,
        "feedback":     fb,
        "stats":        stats_payload(&outcome.stats),
    })
}

/// Recoverable error from `check_answer`: ask the learner to try again.
pub fn error_payload(error: &SessionError) -> Value {
    json!({
        "error":    error.to_string(),
        "feedback": feedback(error.feedback(), "warn"),
    })
}

/// Hint block; hidden when there is no active question.
pub fn hint_payload(hint: Option<&str>) -> Value {
    match hint {
        Some(text) => json!({ "visible": true, "text": text }),
        None       => json!({ "visible": false, "text": "" }),
    }
}
