//! Numeric conversion of declared values.
//!
//! [CSS Values Level 4 § 5](https://www.w3.org/TR/css-values-4/#numeric-types)
//!
//! Lengths are normalized to points. Font-relative units become a
//! [`Unit::Scale`] of the element's font size, which layout resolves
//! once the font size is known.

use serde::Serialize;

use super::{Value, ValueKind};

/// How a [`Number`]'s magnitude is interpreted by layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Unit {
    /// A unitless multiplier (`line-height: 1.5`).
    Number,
    /// An absolute length in points.
    Length,
    /// A multiple of the font size (`em`).
    Scale,
    /// A percentage of a layout-defined reference length.
    Percent,
    /// The `auto` keyword; the magnitude is ignored.
    Auto,
}

/// A magnitude with the unit it is measured in.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Number {
    /// The magnitude.
    pub value: f32,
    /// How the magnitude is interpreted.
    pub unit: Unit,
}

impl Number {
    /// `auto`.
    pub const AUTO: Self = Self::new(0.0, Unit::Auto);

    /// Zero points.
    pub const ZERO: Self = Self::new(0.0, Unit::Length);

    /// Create a number.
    #[must_use]
    pub const fn new(value: f32, unit: Unit) -> Self {
        Self { value, unit }
    }

    /// An absolute length in points.
    #[must_use]
    pub const fn points(value: f32) -> Self {
        Self::new(value, Unit::Length)
    }

    /// A multiple of the font size.
    #[must_use]
    pub const fn scale(value: f32) -> Self {
        Self::new(value, Unit::Scale)
    }

    /// Resolve to points.
    ///
    /// `em` is the element's font size in points, `percent_of` the reference
    /// length for percentages and `auto` the value layout uses for `auto`.
    #[must_use]
    pub fn to_points(self, em: f32, percent_of: f32, auto: f32) -> f32 {
        match self.unit {
            Unit::Length => self.value,
            Unit::Scale | Unit::Number => self.value * em,
            Unit::Percent => self.value * percent_of / 100.0,
            Unit::Auto => auto,
        }
    }
}

/// [§ 5 Numeric Data Types](https://www.w3.org/TR/css-values-4/#numeric-types)
///
/// Convert a declared value to a [`Number`].
///
/// Absent values, and values of a kind that is not numeric, yield the
/// property's initial `(initial, initial_unit)`. Recognized length units:
///
/// | unit | result |
/// |------|--------|
/// | `em` | scale × 1 |
/// | `ex`, `ch` | scale × ½ |
/// | `in` | 72 pt |
/// | `cm`, `mm` | 72 / 2.54 pt, 7.2 / 2.54 pt |
/// | `pc` | 12 pt |
/// | `pt`, `px` | 1 pt |
/// | `rem` | 16 pt |
///
/// `rem` and `ch` are approximations: `rem` assumes a 16pt root font and
/// `ch` half an em. An unknown or missing unit keeps the magnitude as points.
#[must_use]
pub fn number_from_value(value: Option<&Value>, initial: f32, initial_unit: Unit) -> Number {
    let Some(value) = value else {
        return Number::new(initial, initial_unit);
    };

    match value.kind {
        ValueKind::Percent => Number::new(parse_number_prefix(&value.data).0, Unit::Percent),
        ValueKind::Number => Number::new(parse_number_prefix(&value.data).0, Unit::Number),
        ValueKind::Length => {
            let (x, unit) = parse_number_prefix(&value.data);
            match unit.to_ascii_lowercase().as_str() {
                "em" => Number::scale(x),
                "ex" | "ch" => Number::scale(x / 2.0),
                "in" => Number::points(x * 72.0),
                "cm" => Number::points(x * 7200.0 / 254.0),
                "mm" => Number::points(x * 720.0 / 254.0),
                "pc" => Number::points(x * 12.0),
                "rem" => Number::points(x * 16.0),
                _ => Number::points(x),
            }
        }
        ValueKind::Keyword if value.data == "auto" => Number::AUTO,
        _ => Number::new(initial, initial_unit),
    }
}

/// Parse the longest prefix of `text` that forms a number.
///
/// Accepts an optional sign, digits, an optional fraction and an optional
/// exponent. Parsing stops at the first character that cannot continue the
/// number; whatever was read so far is the result, so malformed input
/// degrades to a partial magnitude (or 0) instead of failing. Returns the
/// magnitude and the unparsed remainder.
///
/// ```
/// use folio_css::value::parse_number_prefix;
///
/// assert_eq!(parse_number_prefix("1.5em"), (1.5, "em"));
/// assert_eq!(parse_number_prefix("-2e1px"), (-20.0, "px"));
/// assert_eq!(parse_number_prefix("12.pt"), (12.0, ".pt"));
/// ```
#[must_use]
pub fn parse_number_prefix(text: &str) -> (f32, &str) {
    let bytes = text.as_bytes();
    let mut end = 0;

    let skip_digits = |mut i: usize| {
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        i
    };

    // STEP 1: sign
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }

    // STEP 2: integer part
    let int_end = skip_digits(end);
    let mut digits = int_end > end;
    end = int_end;

    // STEP 3: fraction, only when a digit follows the point
    if bytes.get(end) == Some(&b'.') && bytes.get(end + 1).is_some_and(u8::is_ascii_digit) {
        end = skip_digits(end + 1);
        digits = true;
    }

    if !digits {
        return (0.0, text);
    }

    // STEP 4: exponent, only when digits follow so that "1em" keeps its unit
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp = end + 1;
        if matches!(bytes.get(exp), Some(b'+' | b'-')) {
            exp += 1;
        }
        if bytes.get(exp).is_some_and(u8::is_ascii_digit) {
            end = skip_digits(exp);
        }
    }

    let value = text[..end].parse::<f32>().unwrap_or(0.0);
    (value, &text[end..])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_units_convert_to_points() {
        let n = |s: &str| number_from_value(Some(&Value::length(s)), 0.0, Unit::Length);
        assert_eq!(n("1in"), Number::points(72.0));
        assert_eq!(n("2pc"), Number::points(24.0));
        assert_eq!(n("10px"), Number::points(10.0));
        assert_eq!(n("1rem"), Number::points(16.0));
        assert_eq!(n("2em"), Number::scale(2.0));
        assert_eq!(n("2ex"), Number::scale(1.0));
        assert_eq!(n("3ch"), Number::scale(1.5));
        assert!((n("2.54cm").value - 72.0).abs() < 1e-3);
    }

    #[test]
    fn test_percent_number_and_auto() {
        assert_eq!(
            number_from_value(Some(&Value::percent("50%")), 0.0, Unit::Length),
            Number::new(50.0, Unit::Percent)
        );
        assert_eq!(
            number_from_value(Some(&Value::number("1.5")), 0.0, Unit::Length),
            Number::new(1.5, Unit::Number)
        );
        assert_eq!(
            number_from_value(Some(&Value::keyword("auto")), 0.0, Unit::Length),
            Number::AUTO
        );
    }

    #[test]
    fn test_non_numeric_yields_initial() {
        assert_eq!(number_from_value(None, 2.0, Unit::Scale), Number::scale(2.0));
        assert_eq!(
            number_from_value(Some(&Value::keyword("wide")), 1.0, Unit::Auto),
            Number::new(1.0, Unit::Auto)
        );
    }

    #[test]
    fn test_partial_prefix() {
        assert_eq!(parse_number_prefix("abc"), (0.0, "abc"));
        assert_eq!(parse_number_prefix("-"), (0.0, "-"));
        assert_eq!(parse_number_prefix(".5"), (0.5, ""));
        assert_eq!(parse_number_prefix("3e"), (3.0, "e"));
    }

    #[test]
    fn test_to_points() {
        assert!((Number::scale(1.5).to_points(12.0, 0.0, 0.0) - 18.0).abs() < f32::EPSILON);
        assert!((Number::new(50.0, Unit::Percent).to_points(12.0, 300.0, 0.0) - 150.0).abs() < f32::EPSILON);
        assert!((Number::AUTO.to_points(12.0, 300.0, 7.0) - 7.0).abs() < f32::EPSILON);
    }
}
