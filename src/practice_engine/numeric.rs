//! Integer sampling, gcd/lcm and fraction reduction.
//!
//! Generators never touch `rand` directly; they draw through [`RandomSource`],
//! which every `rand::Rng` already implements.  Tests can supply their own
//! implementation to script exact values.

use rand::Rng;

/// The randomness generators consume.
pub trait RandomSource {
    /// Uniform integer in `[min, max]` inclusive.
    fn int_in(&mut self, min: i64, max: i64) -> i64;

    /// `true` with probability `probability`.
    fn chance(&mut self, probability: f64) -> bool;
}

impl<R: Rng> RandomSource for R {
    fn int_in(&mut self, min: i64, max: i64) -> i64 {
        self.gen_range(min..=max)
    }

    fn chance(&mut self, probability: f64) -> bool {
        self.gen::<f64>() < probability
    }
}

/// Uniform integer in `[min, max]`; `min <= max` is the caller's responsibility.
pub fn random_int<S: RandomSource + ?Sized>(source: &mut S, min: i64, max: i64) -> i64 {
    debug_assert!(min <= max, "random_int: empty range {min}..={max}");
    source.int_in(min, max)
}

/// Non-negative greatest common divisor; `gcd(0, 0) == 0`.
pub fn gcd(a: i64, b: i64) -> i64 {
    let (mut a, mut b) = (a.abs(), b.abs());
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

/// Least common multiple of two non-zero integers.
pub fn lcm(a: i64, b: i64) -> i64 {
    (a / gcd(a, b) * b).abs()
}

/// Divide numerator and denominator by their gcd.
///
/// The sign ends up on the numerator.  `denominator` must be non-zero.
pub fn simplify_fraction(numerator: i64, denominator: i64) -> (i64, i64) {
    debug_assert!(denominator != 0, "simplify_fraction: zero denominator");
    let g = gcd(numerator, denominator);
    let (n, d) = (numerator / g, denominator / g);
    if d < 0 { (-n, -d) } else { (n, d) }
}

/// Value of a reduced fraction as `f64`.
pub fn fraction_value(numerator: i64, denominator: i64) -> f64 {
    let (n, d) = simplify_fraction(numerator, denominator);
    n as f64 / d as f64
}

/// Format a non-negative fixed-point integer (`units / 10^places`) with exactly
/// `places` decimals, e.g. `fixed(1205, 2) == "12.05"`.
pub fn fixed(units: i64, places: u32) -> String {
    if places == 0 {
        return units.to_string();
    }
    let scale = 10i64.pow(places);
    format!("{}.{:0width$}", units / scale, units % scale, width = places as usize)
}
