//! Numeric and text primitives shared by every renderer.
//!
//! Percentages are truncated, never rounded, so the same input always
//! produces the same style string.

use log::debug;

use crate::{Axis, FormatError};

/// Number of decimal digits kept in relative ratios.
pub const PERCENT_PRECISION: i32 = 5;

/// Truncate `value` toward zero, keeping `precision` decimal digits.
///
/// The scaling happens in binary floating point, so a value with no exact
/// representation can lose its last digit: `truncate(0.29, 5)` is `0.28999`.
#[inline]
pub fn truncate(value: f64, precision: i32) -> f64 {
    let step = 10f64.powi(precision);
    (step * value).trunc() / step
}

/// Format a unit-interval ratio as `"<value*100>%"`.
///
/// `f64`'s `Display` is locale independent, so the decimal separator is
/// always `.`.
pub fn to_percentage_string(value: f64) -> String {
    format!("{}%", value * 100.0)
}

/// `part / whole`, truncated to [`PERCENT_PRECISION`] digits and formatted
/// with [`to_percentage_string`].
///
/// `axis` only labels the error when `whole` is zero.
pub fn ratio_to_percentage_string(
    part: f64,
    whole: f64,
    axis: Axis,
) -> Result<String, FormatError> {
    if whole == 0.0 {
        debug!("refusing to divide {part} by a zero {axis}");
        return Err(FormatError::DivisionByZero { axis });
    }
    let ratio = truncate(part / whole, PERCENT_PRECISION);
    Ok(to_percentage_string(ratio))
}

/// Two-decimal percentage, e.g. `0.42314` -> `"42.31%"`.
pub fn percentage(score: f64) -> String {
    format!("{:.2}%", score * 100.0)
}

/// Percentage followed by the truncated raw score: `"42.31% (0.42314)"`.
pub fn descriptive_percentage(score: f64) -> String {
    format!(
        "{} ({})",
        percentage(score),
        truncate(score, PERCENT_PRECISION)
    )
}

/// Uppercase the first character. Blank input yields an empty string.
pub fn capitalize(text: &str) -> String {
    if text.trim().is_empty() {
        return String::new();
    }
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// [`capitalize`] plus a trailing period. Blank input stays empty.
pub fn to_sentence(text: &str) -> String {
    let capitalized = capitalize(text);
    if capitalized.is_empty() {
        return capitalized;
    }
    capitalized + "."
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn truncate_never_rounds_up() {
        assert_eq!(truncate(0.123459, 5), 0.12345);
        assert_eq!(truncate(0.999999, 5), 0.99999);
        assert_eq!(truncate(0.5, 5), 0.5);
    }

    #[test]
    fn truncate_moves_toward_zero_for_negatives() {
        assert_eq!(truncate(-0.123459, 5), -0.12345);
        assert_relative_eq!(truncate(-1.98765, 2), -1.98);
    }

    #[test]
    fn truncate_respects_precision() {
        assert_eq!(truncate(3.14159, 0), 3.0);
        assert_relative_eq!(truncate(3.14159, 2), 3.14);
    }

    #[test]
    fn percentage_string_uses_dot_separator() {
        assert_eq!(to_percentage_string(0.25), "25%");
        assert_eq!(to_percentage_string(0.125), "12.5%");
        assert_eq!(to_percentage_string(1.0), "100%");
        assert_eq!(to_percentage_string(0.0), "0%");
    }

    #[test]
    fn ratio_matches_truncate_then_format() {
        for (part, whole) in [(1.0, 3.0), (50.0, 200.0), (7.0, 9.0), (123.0, 640.0)] {
            let expected = to_percentage_string(truncate(part / whole, PERCENT_PRECISION));
            assert_eq!(
                ratio_to_percentage_string(part, whole, Axis::Width).unwrap(),
                expected
            );
        }
    }

    #[test]
    fn truncate_works_on_the_binary_value() {
        assert_eq!(truncate(0.29, 5), 0.28999);
        assert_eq!(
            ratio_to_percentage_string(29.0, 100.0, Axis::Width).unwrap(),
            "28.999000000000002%"
        );
    }

    #[test]
    fn ratio_with_zero_whole_fails() {
        let err = ratio_to_percentage_string(10.0, 0.0, Axis::Height).unwrap_err();
        assert_eq!(err, FormatError::DivisionByZero { axis: Axis::Height });
    }

    #[test]
    fn descriptive_percentage_shows_both_forms() {
        assert_eq!(descriptive_percentage(0.42314), "42.31% (0.42314)");
        assert_eq!(descriptive_percentage(0.5), "50.00% (0.5)");
        assert_eq!(descriptive_percentage(0.0), "0.00% (0)");
        assert_eq!(percentage(1.0), "100.00%");
    }

    #[test]
    fn capitalize_handles_blank_and_unicode() {
        assert_eq!(capitalize(""), "");
        assert_eq!(capitalize("   "), "");
        assert_eq!(capitalize("hello world"), "Hello world");
        assert_eq!(capitalize("Already"), "Already");
        assert_eq!(capitalize("élan"), "Élan");
    }

    #[test]
    fn sentence_adds_period_only_to_text() {
        assert_eq!(to_sentence(""), "");
        assert_eq!(to_sentence(" \t"), "");
        assert_eq!(to_sentence("hello"), "Hello.");
        assert_eq!(
            to_sentence("a person standing in a field"),
            "A person standing in a field."
        );
    }
}
