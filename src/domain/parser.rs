//! Parsing of free-form step input.
//!
//! The step field accepts arbitrary text. Only a leading integer is read:
//! surrounding whitespace is skipped, an optional sign is honoured, and
//! anything after the digits is ignored (`"3abc"` reads as 3, `"7.9"` as 7).

use std::str::FromStr;

use super::errors::{StepError, StepResult};
use super::models::Step;

/// Reads the integer prefix of `raw`.
pub fn parse_integer_prefix(raw: &str) -> StepResult<i64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(StepError::Empty);
    }

    let (negative, rest) = match trimmed.as_bytes()[0] {
        b'-' => (true, &trimmed[1..]),
        b'+' => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digit_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digit_len == 0 {
        return Err(StepError::NotANumber(raw.to_string()));
    }

    let digits = &rest[..digit_len];
    let magnitude = digits
        .parse::<i64>()
        .map_err(|_| StepError::OutOfRange(raw.to_string()))?;

    Ok(if negative { -magnitude } else { magnitude })
}

impl Step {
    /// Parses raw input into a step, rejecting anything below 1.
    pub fn parse(raw: &str) -> StepResult<Self> {
        Step::new(parse_integer_prefix(raw)?)
    }

    /// Parses raw input, substituting the default step on any failure.
    pub fn parse_or_default(raw: &str) -> Self {
        Self::parse(raw).unwrap_or_default()
    }
}

impl FromStr for Step {
    type Err = StepError;

    fn from_str(s: &str) -> StepResult<Self> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_number() {
        assert_eq!(Step::parse("3").map(Step::get), Ok(3));
        assert_eq!(Step::parse("  42 ").map(Step::get), Ok(42));
        assert_eq!(Step::parse("+8").map(Step::get), Ok(8));
    }

    #[test]
    fn test_parse_ignores_trailing_garbage() {
        assert_eq!(Step::parse("3abc").map(Step::get), Ok(3));
        assert_eq!(Step::parse("7.9").map(Step::get), Ok(7));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(Step::parse(""), Err(StepError::Empty));
        assert_eq!(Step::parse("   "), Err(StepError::Empty));
        assert_eq!(Step::parse("abc"), Err(StepError::NotANumber("abc".to_string())));
        assert_eq!(Step::parse("-"), Err(StepError::NotANumber("-".to_string())));
        assert_eq!(Step::parse("0"), Err(StepError::BelowMinimum(0)));
        assert_eq!(Step::parse("-5"), Err(StepError::BelowMinimum(-5)));
        assert!(matches!(
            Step::parse("99999999999999999999999"),
            Err(StepError::OutOfRange(_))
        ));
    }

    #[test]
    fn test_parse_or_default_falls_back_to_one() {
        for raw in ["", "abc", "0", "-12", "x1"] {
            assert_eq!(Step::parse_or_default(raw).get(), 1, "input {raw:?}");
        }
        assert_eq!(Step::parse_or_default("12").get(), 12);
    }

    #[test]
    fn test_from_str() {
        let step: Step = "5".parse().unwrap();
        assert_eq!(step.get(), 5);
        assert!("nope".parse::<Step>().is_err());
    }
}
