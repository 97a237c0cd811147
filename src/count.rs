//! Iteration count input.
//!
//! A count is either typed in directly or derived from the length of some
//! text divided by an integer, so a memorable phrase can stand in for a
//! number. Range checks happen later, in [`crate::pipeline::validate_iterations`].

use crate::error::ConfigError;

/// User-supplied source of the iteration count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IterationInput {
    /// Count typed as text, e.g. "12"
    Fixed(String),
    /// utf16_len(text) / divisor, integer division
    TextLength { text: String, divisor: String },
}

/// Divisor used when only the text is given.
pub const DEFAULT_DIVISOR: &str = "1";

/// Parse a 32-bit signed count; anything wider is not a number.
fn parse_i32(s: &str) -> Option<i64> {
    s.trim().parse::<i32>().ok().map(i64::from)
}

impl IterationInput {
    /// Length-derived count, dividing by [`DEFAULT_DIVISOR`] when none is given.
    pub fn text_length(text: impl Into<String>, divisor: Option<&str>) -> Self {
        IterationInput::TextLength {
            text: text.into(),
            divisor: divisor.unwrap_or(DEFAULT_DIVISOR).to_string(),
        }
    }

    /// Turn the input into a raw count. The result may still be out of range.
    pub fn resolve(&self) -> Result<i64, ConfigError> {
        match self {
            IterationInput::Fixed(s) => parse_i32(s).ok_or_else(|| {
                ConfigError::InvalidCallerInput(format!("'{}' is not a number", s))
            }),
            IterationInput::TextLength { text, divisor } => {
                let div = parse_i32(divisor).ok_or_else(|| {
                    ConfigError::InvalidCallerInput(format!("divisor '{}' is not a number", divisor))
                })?;
                if div < 1 {
                    return Err(ConfigError::InvalidCallerInput(format!(
                        "divisor must be at least 1 (got {})",
                        div
                    )));
                }
                // Length in UTF-16 code units, so astral characters count twice
                Ok(text.encode_utf16().count() as i64 / div)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::validate_iterations;

    fn text_length(text: &str, divisor: &str) -> IterationInput {
        IterationInput::TextLength {
            text: text.to_string(),
            divisor: divisor.to_string(),
        }
    }

    #[test]
    fn test_fixed() {
        assert_eq!(IterationInput::Fixed("12".to_string()).resolve(), Ok(12));
        assert_eq!(IterationInput::Fixed(" 3 ".to_string()).resolve(), Ok(3));
        assert_eq!(IterationInput::Fixed("-4".to_string()).resolve(), Ok(-4));
    }

    #[test]
    fn test_fixed_not_a_number() {
        assert!(matches!(
            IterationInput::Fixed("twelve".to_string()).resolve(),
            Err(ConfigError::InvalidCallerInput(_))
        ));
    }

    #[test]
    fn test_text_length() {
        assert_eq!(text_length("abcdefgh", "3").resolve(), Ok(2));
        assert_eq!(text_length("abcdefgh", "1").resolve(), Ok(8));
    }

    #[test]
    fn test_text_length_counts_utf16_units() {
        assert_eq!(text_length("ééé", "1").resolve(), Ok(3));
        assert_eq!(text_length("😀😀😀😀", "2").resolve(), Ok(4));
    }

    #[test]
    fn test_text_length_default_divisor() {
        let input = IterationInput::text_length("abcde", None);
        assert_eq!(input, text_length("abcde", "1"));
        assert_eq!(input.resolve(), Ok(5));
        assert_eq!(IterationInput::text_length("abcde", Some("2")).resolve(), Ok(2));
    }

    #[test]
    fn test_fixed_beyond_32_bits_is_not_a_number() {
        assert!(matches!(
            IterationInput::Fixed("3000000000".to_string()).resolve(),
            Err(ConfigError::InvalidCallerInput(_))
        ));
        assert_eq!(
            IterationInput::Fixed("2147483647".to_string()).resolve(),
            Ok(2147483647)
        );
        assert!(matches!(
            text_length("abc", "3000000000").resolve(),
            Err(ConfigError::InvalidCallerInput(_))
        ));
    }

    #[test]
    fn test_bad_divisor() {
        assert!(matches!(
            text_length("abc", "0").resolve(),
            Err(ConfigError::InvalidCallerInput(_))
        ));
        assert!(matches!(
            text_length("abc", "x").resolve(),
            Err(ConfigError::InvalidCallerInput(_))
        ));
    }

    #[test]
    fn test_short_text_resolves_to_zero_then_fails_validation() {
        let count = text_length("ab", "5").resolve().unwrap();
        assert_eq!(count, 0);
        assert_eq!(
            validate_iterations(count),
            Err(ConfigError::InvalidIterationCount(0))
        );
    }
}
