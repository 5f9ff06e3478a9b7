//! CSS Frequency values
//!
//! [§ 7.3 Frequency Units: the `<frequency>` type](https://www.w3.org/TR/css-values-4/#frequency)

use std::fmt;

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

use super::percentage::Percentage;
use super::serialize_number;

/// [§ 7.3 Frequency Units](https://www.w3.org/TR/css-values-4/#frequency)
///
/// "Like other dimensions, frequency units are ASCII case-insensitive."
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum FrequencyUnit {
    /// "Hertz. It represents the number of occurrences per second."
    Hz,
    /// "`KiloHertz`. A `kiloHertz` is 1000 Hertz."
    Khz,
}

/// A `<frequency>` in its declared unit. Canonical unit: Hz.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Frequency {
    /// The declared numeric value.
    pub value: f64,
    /// The declared unit.
    pub unit: FrequencyUnit,
}

impl Frequency {
    /// A frequency in the given unit.
    #[must_use]
    pub const fn new(value: f64, unit: FrequencyUnit) -> Self {
        Self { value, unit }
    }

    /// A frequency in canonical Hz.
    #[must_use]
    pub const fn hertz(value: f64) -> Self {
        Self::new(value, FrequencyUnit::Hz)
    }

    /// Convert to Hz.
    #[must_use]
    pub fn to_hertz(&self) -> f64 {
        match self.unit {
            FrequencyUnit::Hz => self.value,
            FrequencyUnit::Khz => self.value * 1000.0,
        }
    }

    /// The same frequency with `percentage` applied, keeping the unit.
    #[must_use]
    pub fn percentage_of(&self, percentage: Percentage) -> Self {
        Self::new(percentage.of(self.value), self.unit)
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", serialize_number(self.value), self.unit)
    }
}
