//! CSS Angle values
//!
//! [§ 7.1 Angle Units: the `<angle>` type](https://www.w3.org/TR/css-values-4/#angles)

use std::f64::consts::PI;
use std::fmt;

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

use super::percentage::Percentage;
use super::serialize_number;

/// [§ 7.1 Angle Units](https://www.w3.org/TR/css-values-4/#angles)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum AngleUnit {
    /// "Degrees. There are 360 degrees in a full circle."
    Deg,
    /// "Gradians, also known as "gons" or "grades". There are 400 gradians in a full circle."
    Grad,
    /// "Radians. There are 2π radians in a full circle."
    Rad,
    /// "Turns. There is 1 turn in a full circle."
    Turn,
}

/// An `<angle>` in its declared unit. Canonical unit: degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Angle {
    /// The declared numeric value.
    pub value: f64,
    /// The declared unit.
    pub unit: AngleUnit,
}

impl Angle {
    /// An angle in the given unit.
    #[must_use]
    pub const fn new(value: f64, unit: AngleUnit) -> Self {
        Self { value, unit }
    }

    /// An angle in canonical degrees.
    #[must_use]
    pub const fn degrees(value: f64) -> Self {
        Self::new(value, AngleUnit::Deg)
    }

    /// Convert to degrees.
    #[must_use]
    pub fn to_degrees(&self) -> f64 {
        match self.unit {
            AngleUnit::Deg => self.value,
            AngleUnit::Grad => self.value * 360.0 / 400.0,
            AngleUnit::Rad => self.value * 180.0 / PI,
            AngleUnit::Turn => self.value * 360.0,
        }
    }

    /// The same angle with `percentage` applied, keeping the unit.
    #[must_use]
    pub fn percentage_of(&self, percentage: Percentage) -> Self {
        Self::new(percentage.of(self.value), self.unit)
    }
}

impl fmt::Display for Angle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", serialize_number(self.value), self.unit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_degrees() {
        assert_eq!(Angle::new(0.5, AngleUnit::Turn).to_degrees(), 180.0);
        assert_eq!(Angle::new(100.0, AngleUnit::Grad).to_degrees(), 90.0);
        assert!((Angle::new(PI, AngleUnit::Rad).to_degrees() - 180.0).abs() < 1e-9);
    }
}
