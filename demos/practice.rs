//! Interactive terminal drill.
//!
//! Run with:
//!   cargo run --example practice -- [topic] [seed]
//!
//! `topic` is one of addsub, multdiv, fractions, decimals, order, word
//! (anything else falls back to addsub). Type an answer such as `12`, `0.5`
//! or `3/4`; `hint`, `next`, `reset` and `quit` are also understood.
//! Set `RUST_LOG=arith_drill_gen=debug` to watch level transitions.

use std::error::Error;
use std::io::{self, BufRead, Write};

use arith_drill_gen::{client_adapter, PracticeSession, SessionConfig, TopicId};
use tracing_subscriber::EnvFilter;

fn show_question(session: &mut PracticeSession, topic: TopicId) {
    let q = session.next_question(topic);
    let payload = client_adapter::question_payload(q);
    println!();
    println!("{}", payload["prompt"].as_str().unwrap_or_default());
    println!("{}", payload["feedback"]["message"].as_str().unwrap_or_default());
}

fn show_stats(session: &PracticeSession) {
    let s = client_adapter::stats_payload(&session.stats());
    println!(
        "  [{}]  score {}  attempts {}  streak {}",
        s["level_label"].as_str().unwrap_or_default(),
        s["score"],
        s["attempts"],
        s["streak"],
    );
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let mut args = std::env::args().skip(1);
    let topic = TopicId::from_id_or_default(&args.next().unwrap_or_default());
    let mut session = match args.next().and_then(|s| s.parse::<u64>().ok()) {
        Some(seed) => PracticeSession::with_seed(seed, SessionConfig::default())?,
        None       => PracticeSession::new(SessionConfig::default())?,
    };

    println!("══ {} ══", topic);
    show_stats(&session);
    show_question(&mut session, topic);

    let stdin = io::stdin();
    loop {
        print!("> ");
        io::stdout().flush()?;
        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        match line.trim() {
            "quit" | "exit" => break,
            "hint" => {
                let h = client_adapter::hint_payload(session.hint());
                println!("  Hint: {}", h["text"].as_str().unwrap_or_default());
            }
            "next" => show_question(&mut session, topic),
            "reset" => {
                session.reset();
                show_stats(&session);
                println!("Press \u{201C}next\u{201D} to begin.");
            }
            raw => match session.check_answer(raw) {
                Ok(outcome) => {
                    let p = client_adapter::outcome_payload(&outcome);
                    println!("  {}", p["feedback"]["message"].as_str().unwrap_or_default());
                    show_stats(&session);
                    if outcome.correct {
                        show_question(&mut session, topic);
                    }
                }
                Err(err) => {
                    let p = client_adapter::error_payload(&err);
                    println!("  {}", p["feedback"]["message"].as_str().unwrap_or_default());
                }
            },
        }
    }
    Ok(())
}
