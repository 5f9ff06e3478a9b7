//! CSS Time values
//!
//! [§ 7.2 Duration Units: the `<time>` type](https://www.w3.org/TR/css-values-4/#time)

use std::fmt;

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

use super::percentage::Percentage;
use super::serialize_number;

/// [§ 7.2 Duration Units](https://www.w3.org/TR/css-values-4/#time)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum TimeUnit {
    /// "Seconds."
    S,
    /// "Milliseconds. There are 1000 milliseconds in a second."
    Ms,
}

/// A `<time>` in its declared unit. Canonical unit: seconds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Time {
    /// The declared numeric value.
    pub value: f64,
    /// The declared unit.
    pub unit: TimeUnit,
}

impl Time {
    /// A time in the given unit.
    #[must_use]
    pub const fn new(value: f64, unit: TimeUnit) -> Self {
        Self { value, unit }
    }

    /// A time in canonical seconds.
    #[must_use]
    pub const fn seconds(value: f64) -> Self {
        Self::new(value, TimeUnit::S)
    }

    /// Convert to seconds.
    #[must_use]
    pub fn to_seconds(&self) -> f64 {
        match self.unit {
            TimeUnit::S => self.value,
            TimeUnit::Ms => self.value / 1000.0,
        }
    }

    /// The same time with `percentage` applied, keeping the unit.
    #[must_use]
    pub fn percentage_of(&self, percentage: Percentage) -> Self {
        Self::new(percentage.of(self.value), self.unit)
    }
}

impl fmt::Display for Time {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", serialize_number(self.value), self.unit)
    }
}
