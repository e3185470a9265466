use crate::practice_engine::{error::ParseFailure, helpers::MINUS};

/// Read a learner's answer: `"12"`, `" 0.5 "`, `"3/4"`, `"-2 / 3"`.
///
/// Whitespace around the whole input and around each side of `/` is ignored.
/// The minus sign prompts are printed with (U+2212) reads the same as `-`.
/// Zero denominators and non-finite values are rejected, never propagated.
pub fn parse_answer(raw: &str) -> Result<f64, ParseFailure> {
    let normalized = raw.replace(MINUS, "-");
    let s = normalized.trim();
    if s.is_empty() {
        return Err(ParseFailure::Empty);
    }

    if s.contains('/') {
        let parts: Vec<&str> = s.split('/').map(str::trim).collect();
        let [num, den] = parts.as_slice() else {
            return Err(ParseFailure::MalformedFraction);
        };
        let n = finite(num).ok_or(ParseFailure::MalformedFraction)?;
        let d = finite(den).ok_or(ParseFailure::MalformedFraction)?;
        if d == 0.0 {
            return Err(ParseFailure::MalformedFraction);
        }
        return Ok(n / d);
    }

    finite(s).ok_or(ParseFailure::NotANumber)
}

fn finite(s: &str) -> Option<f64> {
    if !looks_numeric(s) {
        return None;
    }
    s.parse::<f64>().ok().filter(|x| x.is_finite())
}

// `f64::from_str` also accepts "inf", "NaN" and "infinity"; only plain decimal
// notation (optionally signed, optional exponent) counts as an answer.
fn looks_numeric(s: &str) -> bool {
    !s.is_empty()
        && s.chars().any(|c| c.is_ascii_digit())
        && s.chars().all(|c| c.is_ascii_digit() || matches!(c, '.' | '+' | '-' | 'e' | 'E'))
}
