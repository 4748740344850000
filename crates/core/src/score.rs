//! Score extraction from free-form model replies.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::ExtractionError;

/// The upper bound of the advertised score range.
pub const MAX_SCORE: u8 = 10;

static DIGIT_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+").expect("pattern is valid"));

/// Locates the first maximal run of decimal digits in `text` and parses
/// it as a score.
///
/// Values above [`MAX_SCORE`] are clamped to it, so an enthusiastic reply
/// like "11/10!" still yields a usable score instead of failing. A reply
/// with no digit run anywhere is an [`ExtractionError`].
pub fn extract_score(text: &str) -> Result<u8, ExtractionError> {
    let run = DIGIT_RUN.find(text).ok_or(ExtractionError)?;
    // Digit runs too long to fit in a u64 saturate and then clamp.
    let value = run.as_str().parse::<u64>().unwrap_or(u64::MAX);
    Ok(value.min(u64::from(MAX_SCORE)) as u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_number() {
        assert_eq!(extract_score("7"), Ok(7));
    }

    #[test]
    fn test_number_with_surrounding_text() {
        assert_eq!(extract_score("점수: 7점"), Ok(7));
        assert_eq!(extract_score("I would rate this a 3 out of 10."), Ok(3));
    }

    #[test]
    fn test_first_run_wins() {
        assert_eq!(extract_score("8 out of 10"), Ok(8));
    }

    #[test]
    fn test_no_digits() {
        assert_eq!(extract_score("no digits here"), Err(ExtractionError));
        assert_eq!(extract_score(""), Err(ExtractionError));
    }

    #[test]
    fn test_out_of_range_clamps() {
        assert_eq!(extract_score("score: 100"), Ok(10));
    }

    #[test]
    fn test_huge_run_saturates() {
        assert_eq!(extract_score("99999999999999999999999999"), Ok(10));
    }
}
