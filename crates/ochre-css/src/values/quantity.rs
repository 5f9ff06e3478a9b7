//! A single typed numeric value
//!
//! [§ 5 Numeric Data Types](https://www.w3.org/TR/css-values-4/#numeric-types)
//! [§ 7 Other Quantities](https://www.w3.org/TR/css-values-4/#other-units)

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum_macros::Display;
use thiserror::Error;

use super::{
    Angle, AngleUnit, Frequency, FrequencyUnit, Length, LengthUnit, Number, Percentage, Time,
    TimeUnit,
};

/// The kind of a [`Quantity`], without its value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum QuantityKind {
    /// `<number>` or `<integer>`
    Number,
    /// `<percentage>`
    Percentage,
    /// `<length>`
    Length,
    /// `<angle>`
    Angle,
    /// `<time>`
    Time,
    /// `<frequency>`
    Frequency,
}

impl QuantityKind {
    /// [§ 5.4 Numbers with Units: dimension values](https://www.w3.org/TR/css-values-4/#dimensions)
    ///
    /// Lengths, angles, times and frequencies are dimensions; numbers and
    /// percentages are not.
    #[must_use]
    pub const fn is_dimension(self) -> bool {
        matches!(
            self,
            Self::Length | Self::Angle | Self::Time | Self::Frequency
        )
    }
}

/// One typed numeric value: a number, a percentage, or a dimension.
///
/// Dimensions keep their declared unit; arithmetic converts them to the
/// canonical unit of their kind first.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Quantity {
    /// `<number>` / `<integer>`
    Number(Number),
    /// `<percentage>`
    Percentage(Percentage),
    /// `<length>`
    Length(Length),
    /// `<angle>`
    Angle(Angle),
    /// `<time>`
    Time(Time),
    /// `<frequency>`
    Frequency(Frequency),
}

impl Quantity {
    /// The kind of this quantity.
    #[must_use]
    pub const fn kind(&self) -> QuantityKind {
        match self {
            Self::Number(_) => QuantityKind::Number,
            Self::Percentage(_) => QuantityKind::Percentage,
            Self::Length(_) => QuantityKind::Length,
            Self::Angle(_) => QuantityKind::Angle,
            Self::Time(_) => QuantityKind::Time,
            Self::Frequency(_) => QuantityKind::Frequency,
        }
    }

    /// [§ 5.5 Percentages](https://www.w3.org/TR/css-values-4/#percentages)
    ///
    /// Apply `percentage` to this quantity, treated as a percentage basis.
    /// Only dimensions can act as a basis.
    #[must_use]
    pub fn percentage_of(&self, percentage: Percentage) -> Option<Self> {
        match self {
            Self::Length(length) => Some(Self::Length(length.percentage_of(percentage))),
            Self::Angle(angle) => Some(Self::Angle(angle.percentage_of(percentage))),
            Self::Time(time) => Some(Self::Time(time.percentage_of(percentage))),
            Self::Frequency(frequency) => Some(Self::Frequency(frequency.percentage_of(percentage))),
            Self::Number(_) | Self::Percentage(_) => None,
        }
    }
}

impl From<Number> for Quantity {
    fn from(number: Number) -> Self {
        Self::Number(number)
    }
}

impl From<Percentage> for Quantity {
    fn from(percentage: Percentage) -> Self {
        Self::Percentage(percentage)
    }
}

impl From<Length> for Quantity {
    fn from(length: Length) -> Self {
        Self::Length(length)
    }
}

impl From<Angle> for Quantity {
    fn from(angle: Angle) -> Self {
        Self::Angle(angle)
    }
}

impl From<Time> for Quantity {
    fn from(time: Time) -> Self {
        Self::Time(time)
    }
}

impl From<Frequency> for Quantity {
    fn from(frequency: Frequency) -> Self {
        Self::Frequency(frequency)
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(number) => number.fmt(f),
            Self::Percentage(percentage) => percentage.fmt(f),
            Self::Length(length) => length.fmt(f),
            Self::Angle(angle) => angle.fmt(f),
            Self::Time(time) => time.fmt(f),
            Self::Frequency(frequency) => frequency.fmt(f),
        }
    }
}

/// Failure to read a quantity literal such as `10px`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseQuantityError {
    /// The text does not start with a number.
    #[error("invalid number in '{0}'")]
    InvalidNumber(String),
    /// The unit after the number is not a known unit.
    #[error("unknown unit '{0}'")]
    UnknownUnit(String),
}

/// [§ 4.3.3 Consume a numeric token](https://www.w3.org/TR/css-syntax-3/#consume-numeric-token)
///
/// Split `text` into its leading number and the unit that follows it. An
/// `e` only starts an exponent when a digit (optionally signed) follows, so
/// `2em` is `2` + `em`.
fn split_numeric_prefix(text: &str) -> (&str, &str) {
    let bytes = text.as_bytes();
    let digits_from = |mut index: usize| {
        while index < bytes.len() && bytes[index].is_ascii_digit() {
            index += 1;
        }
        index
    };

    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    end = digits_from(end);
    if bytes.get(end) == Some(&b'.') && bytes.get(end + 1).is_some_and(u8::is_ascii_digit) {
        end = digits_from(end + 1);
    }
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exponent = end + 1;
        if matches!(bytes.get(exponent), Some(b'+' | b'-')) {
            exponent += 1;
        }
        if bytes.get(exponent).is_some_and(u8::is_ascii_digit) {
            end = digits_from(exponent);
        }
    }
    text.split_at(end)
}

impl FromStr for Quantity {
    type Err = ParseQuantityError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let text = text.trim();
        let (number, unit) = split_numeric_prefix(text);
        let value: f64 = number
            .parse()
            .map_err(|_| ParseQuantityError::InvalidNumber(text.to_string()))?;

        if unit.is_empty() {
            // [§ 4.3.3] "If the number contains a '.' or an exponent, its type flag is 'number'."
            let is_integer = !number.contains(['.', 'e', 'E']);
            let number = if is_integer {
                Number::integer_from_f64(value)
            } else {
                Number::new(value)
            };
            return Ok(Self::Number(number));
        }
        if unit == "%" {
            return Ok(Self::Percentage(Percentage(value)));
        }
        if let Ok(unit) = unit.parse::<LengthUnit>() {
            return Ok(Self::Length(Length::new(value, unit)));
        }
        if let Ok(unit) = unit.parse::<AngleUnit>() {
            return Ok(Self::Angle(Angle::new(value, unit)));
        }
        if let Ok(unit) = unit.parse::<TimeUnit>() {
            return Ok(Self::Time(Time::new(value, unit)));
        }
        if let Ok(unit) = unit.parse::<FrequencyUnit>() {
            return Ok(Self::Frequency(Frequency::new(value, unit)));
        }
        Err(ParseQuantityError::UnknownUnit(unit.to_string()))
    }
}
