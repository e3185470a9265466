use rand::{rngs::StdRng, SeedableRng};

use crate::practice_engine::{
    models::{Level, Question, QuestionRequest, TopicId},
    numeric::RandomSource,
    topics,
};

/// Core dispatch: one question for `topic` at `level`, drawing from `source`.
pub fn generate<S: RandomSource + ?Sized>(topic: TopicId, level: Level, source: &mut S) -> Question {
    let question = match topic {
        TopicId::AddSub    => topics::addsub::generate(source, level),
        TopicId::MultDiv   => topics::multdiv::generate(source, level),
        TopicId::Fractions => topics::fractions::generate(source, level),
        TopicId::Decimals  => topics::decimals::generate(source, level),
        TopicId::Order     => topics::order::generate(source, level),
        TopicId::Word      => topics::word::generate(source, level),
    };
    tracing::debug!(
        topic = topic.id(),
        level = level.get(),
        branch = %question.branch_key,
        "generated question"
    );
    question
}

/// Dispatch on a raw topic identifier; unknown identifiers get an
/// addition/subtraction question.
pub fn generate_by_id<S: RandomSource + ?Sized>(topic_id: &str, level: Level, source: &mut S) -> Question {
    generate(TopicId::from_id_or_default(topic_id), level, source)
}

/// Self-contained entry point: seeds its own RNG from the request.
pub fn generate_question(request: QuestionRequest) -> Question {
    let mut rng: StdRng = match request.rng_seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None       => StdRng::from_entropy(),
    };
    generate(request.topic, request.level, &mut rng)
}
