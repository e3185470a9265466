//! Tour of all six topics across the level range.
//!
//! Run with: `cargo run --example demo`
//!
//! 1. **Minimal API**: `QuestionRequest::new(topic)` with defaults
//!    (level 1, entropy seed).
//! 2. **All topics at three levels**: fixed seeds, so the output is
//!    reproducible. Prompts, answers, hints and branch keys are printed.
//! 3. **A short scripted session**: answers right, right, wrong, and shows
//!    the streak and level move.

use arith_drill_gen::{
    generate_question, PracticeSession, QuestionRequest, SessionConfig, TopicId,
};

fn print_question(topic: TopicId, level: u8, seed: u64) {
    let q = generate_question(QuestionRequest::new(topic).at_level(level).seeded(seed));
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("  [{} — Level {}]  Branch: {}", q.topic, level, q.branch_key);
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("  Q: {}", q.prompt);
    println!("  A: {}", q.answer_value);
    println!("  Hint: {}", q.hint);
    println!();
}

fn main() {
    // ── Minimal API ────────────────────────────────────────────────────────
    println!();
    println!("══ Minimal API: QuestionRequest::new() ══");
    println!();
    let q = generate_question(QuestionRequest::new(TopicId::AddSub));
    println!("  {}  ({})", q.prompt, q.branch_key);
    println!();

    // ── All topics ───────────────────────────────────────────────────────────
    println!("══ All 6 topics at levels 1, 5 and 9 ══");
    println!();
    for (i, topic) in TopicId::ALL.into_iter().enumerate() {
        for level in [1u8, 5, 9] {
            print_question(topic, level, 1000 + i as u64 * 10 + level as u64);
        }
    }

    // ── Scripted session ─────────────────────────────────────────────────────
    println!("══ Session: right, right, wrong ══");
    println!();
    let mut session = PracticeSession::with_seed(42, SessionConfig::default())
        .expect("default config is valid");
    for answer_right in [true, true, false] {
        let q = session.next_question(TopicId::MultDiv).clone();
        let typed = if answer_right {
            q.answer_value.to_string()
        } else {
            (q.answer_value + 1.0).to_string()
        };
        match session.check_answer(&typed) {
            Ok(outcome) => println!(
                "  {}  typed {typed:<6} correct={:<5} streak={} {} ({:?})",
                q.prompt, outcome.correct, outcome.stats.streak, outcome.stats.level,
                outcome.level_change
            ),
            Err(err) => println!("  {}: {}", q.prompt, err.feedback()),
        }
    }
    println!();
}
