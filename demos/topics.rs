//! One illustrated example for every topic.
//!
//! Run with:
//!   cargo run --example topics
//!
//! Each block shows:
//!   • What the topic teaches
//!   • How the level changes the questions
//!   • A concrete question (fixed seed → always the same numbers)
//!   • The answer and the hint

use arith_drill_gen::{generate_question, QuestionRequest, TopicId};

// ── topic metadata ────────────────────────────────────────────────────────────

struct TopicMeta {
    topic: TopicId,
    seed: u64,
    level: u8,
    teaches: &'static str,
    scaling: &'static str,
}

fn topics() -> Vec<TopicMeta> {
    vec![
        TopicMeta {
            topic: TopicId::AddSub,
            seed: 1001,
            level: 3,
            teaches: "Adding and subtracting whole numbers; subtraction always \
                      takes the smaller number from the larger.",
            scaling: "Operands grow from 0–20 at level 1 up to 0–20000 at level 10.",
        },
        TopicMeta {
            topic: TopicId::MultDiv,
            seed: 2002,
            level: 7,
            teaches: "Times tables, then two-digit multiplication and division \
                      that always comes out even.",
            scaling: "Levels 1–5: tables up to 12. From level 6: 40% division, \
                      60% two-digit × one-digit.",
        },
        TopicMeta {
            topic: TopicId::Fractions,
            seed: 3003,
            level: 8,
            teaches: "Simplifying fractions, then adding/subtracting with like \
                      and unlike denominators.",
            scaling: "Levels 1–3: simplify. 4–6: like denominators. 7+: 40% \
                      unlike denominators via the LCM.",
        },
        TopicMeta {
            topic: TopicId::Decimals,
            seed: 4004,
            level: 8,
            teaches: "Lining up decimal points to add and subtract.",
            scaling: "1 place up to level 3, 2 places up to level 7, then 3. \
                      Subtraction appears from level 4.",
        },
        TopicMeta {
            topic: TopicId::Order,
            seed: 5005,
            level: 6,
            teaches: "Order of operations: multiplication before addition, \
                      brackets first.",
            scaling: "Levels 1–4: a + b × c. From level 5: (a + b) × c or a × b − c.",
        },
        TopicMeta {
            topic: TopicId::Word,
            seed: 6006,
            level: 4,
            teaches: "Turning a short story into multiplication, subtraction \
                      or division.",
            scaling: "Quantities grow with the level.",
        },
    ]
}

fn main() {
    for meta in topics() {
        let q = generate_question(
            QuestionRequest::new(meta.topic).at_level(meta.level).seeded(meta.seed),
        );

        println!("┌─ {} ─ id: {}", meta.topic, meta.topic.id());
        println!("│ Teaches: {}", meta.teaches);
        println!("│ Levels:  {}", meta.scaling);
        println!("│");
        println!("│ Level {} (seed {}), branch {}", meta.level, meta.seed, q.branch_key);
        println!("│ Q: {}", q.prompt);
        println!("│ ✓ {}", q.answer_value);
        println!("│ Hint: {}", q.hint);
        println!("└────────────────────────────────────────────────────────────");
        println!();
    }
}
