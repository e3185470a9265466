//! Topic generators, one module per topic.
//!
//! Every module exposes the same signature:
//!
//! ```ignore
//! pub fn generate<S: RandomSource + ?Sized>(source: &mut S, level: Level) -> Question
//! ```
//!
//! Branch decisions ("50/50", "probability 0.4", ...) are spelled out as a
//! `Branch` enum in each module and chosen by a `choose_branch`
//! function, so the probability and the values each branch can produce are
//! tested separately.  The dispatcher in `generator.rs` routes to these.

/// Addition and subtraction
pub mod addsub;
/// Times tables, long multiplication, exact division
pub mod multdiv;
/// Simplifying, like and unlike denominators
pub mod fractions;
/// Decimal addition and subtraction
pub mod decimals;
/// Order of operations
pub mod order;
/// Word problems
pub mod word;
