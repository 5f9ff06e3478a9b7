//! CSS `<number>` and `<integer>` values
//!
//! [§ 5 Numeric Data Types](https://www.w3.org/TR/css-values-4/#numeric-types)

use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

use serde::{Deserialize, Serialize};

use super::serialize_number;

/// [§ 5.2 Real Numbers: the `<number>` type](https://www.w3.org/TR/css-values-4/#numbers)
///
/// "Number values are denoted by `<number>`, and represent real numbers,
/// possibly with a fractional component."
///
/// [§ 5.1 Integers: the `<integer>` type](https://www.w3.org/TR/css-values-4/#integers)
///
/// Integers share the representation; `is_integer` records whether the value
/// was written (or computed) as an `<integer>`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Number {
    value: f64,
    is_integer: bool,
}

impl Number {
    /// A `<number>` with a possibly fractional value.
    #[must_use]
    pub const fn new(value: f64) -> Self {
        Self {
            value,
            is_integer: false,
        }
    }

    /// An `<integer>`.
    #[must_use]
    pub const fn integer(value: i64) -> Self {
        Self {
            value: value as f64,
            is_integer: true,
        }
    }

    /// An `<integer>` read as a float, kept at full range.
    #[must_use]
    pub fn integer_from_f64(value: f64) -> Self {
        Self {
            value: value.round(),
            is_integer: true,
        }
    }

    /// The raw value.
    #[must_use]
    pub const fn value(&self) -> f64 {
        self.value
    }

    /// Whether this number is an `<integer>`.
    #[must_use]
    pub const fn is_integer(&self) -> bool {
        self.is_integer
    }

    /// [§ 5.1 Integers](https://www.w3.org/TR/css-values-4/#integers)
    ///
    /// "...rounded to the nearest integer."
    ///
    /// Saturates at the `i64` range.
    #[must_use]
    pub fn integer_value(&self) -> i64 {
        self.value.round() as i64
    }
}

impl Add for Number {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            value: self.value + other.value,
            is_integer: self.is_integer && other.is_integer,
        }
    }
}

impl Sub for Number {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self {
            value: self.value - other.value,
            is_integer: self.is_integer && other.is_integer,
        }
    }
}

impl Mul for Number {
    type Output = Self;

    fn mul(self, other: Self) -> Self {
        Self {
            value: self.value * other.value,
            is_integer: self.is_integer && other.is_integer,
        }
    }
}

/// Division never produces an `<integer>`.
impl Div for Number {
    type Output = Self;

    fn div(self, other: Self) -> Self {
        Self::new(self.value / other.value)
    }
}

impl Neg for Number {
    type Output = Self;

    fn neg(self) -> Self {
        Self {
            value: -self.value,
            is_integer: self.is_integer,
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_integer {
            f.write_str(&serialize_number(self.value.round()))
        } else {
            f.write_str(&serialize_number(self.value))
        }
    }
}
