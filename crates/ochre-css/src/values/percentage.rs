//! CSS `<percentage>` values
//!
//! [§ 5.5 Percentages](https://www.w3.org/TR/css-values-4/#percentages)

use std::fmt;

use serde::{Deserialize, Serialize};

use super::serialize_number;

/// [§ 5.5 Percentages: the `<percentage>` type](https://www.w3.org/TR/css-values-4/#percentages)
///
/// "Percentage values are always relative to another quantity, for example a
/// length. Each property that allows percentages also defines the quantity to
/// which the percentage refers."
///
/// Stores the declared value: `25%` is `Percentage(25.0)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Percentage(pub f64);

impl Percentage {
    /// The declared percent value (`25.0` for `25%`).
    #[must_use]
    pub const fn value(&self) -> f64 {
        self.0
    }

    /// Apply this percentage to a basis magnitude expressed in any unit.
    #[must_use]
    pub fn of(&self, basis: f64) -> f64 {
        basis * self.0 / 100.0
    }
}

impl fmt::Display for Percentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", serialize_number(self.0))
    }
}
