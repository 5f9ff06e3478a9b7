//! CSS numeric value types
//!
//! - [CSS Values and Units Level 4](https://www.w3.org/TR/css-values-4/)
//! - [CSS Color Level 4](https://www.w3.org/TR/css-color-4/)
//!
//! Every dimension keeps the unit it was declared in, so it can be
//! serialized back unchanged, and converts to one canonical unit for
//! arithmetic: px for lengths, deg for angles, s for times, Hz for
//! frequencies.

mod angle;
mod color;
mod frequency;
mod length;
mod number;
mod percentage;
mod quantity;
mod time;

pub use angle::{Angle, AngleUnit};
pub use color::ColorValue;
pub use frequency::{Frequency, FrequencyUnit};
pub use length::{DEFAULT_FONT_SIZE_PX, Length, LengthContext, LengthUnit, Viewport};
pub use number::Number;
pub use percentage::Percentage;
pub use quantity::{ParseQuantityError, Quantity, QuantityKind};
pub use time::{Time, TimeUnit};

/// [§ 4.3 Serializing numbers](https://www.w3.org/TR/cssom-1/#serializing-css-values)
///
/// "A base-ten number using digits 0-9 (U+0030 to U+0039) in the shortest
/// form possible, using "." to separate decimals (if any), rounding the value
/// if necessary to not produce more than 6 decimals."
pub(crate) fn serialize_number(value: f64) -> String {
    let rounded = if value.fract() == 0.0 {
        value
    } else {
        (value * 1_000_000.0).round() / 1_000_000.0
    };
    // Avoid "-0" for values that round to zero.
    let rounded = if rounded == 0.0 { 0.0 } else { rounded };
    if rounded.fract() == 0.0 && rounded.abs() < 1e15 {
        return format!("{}", rounded as i64);
    }
    let text = format!("{rounded:.6}");
    text.trim_end_matches('0').trim_end_matches('.').to_string()
}

#[cfg(test)]
mod tests {
    use super::serialize_number;

    #[test]
    fn test_serialize_integral_values() {
        assert_eq!(serialize_number(6.0), "6");
        assert_eq!(serialize_number(-0.0), "0");
        assert_eq!(serialize_number(-12.0), "-12");
        assert_eq!(serialize_number(3e19), "30000000000000000000");
    }

    #[test]
    fn test_serialize_rounds_to_six_decimals() {
        assert_eq!(serialize_number(0.1 + 0.2), "0.3");
        assert_eq!(serialize_number(1.2), "1.2");
        assert_eq!(serialize_number(1.0 / 3.0), "0.333333");
    }
}
