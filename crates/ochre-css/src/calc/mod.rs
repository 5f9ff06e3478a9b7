//! [§ 10 Mathematical Expressions](https://www.w3.org/TR/css-values-4/#math)
//!
//! "The math functions (`calc()` and the others defined in this chapter)
//! allow numeric CSS values to be written as mathematical expressions."
//!
//! A parsed expression is type-checked once, when the
//! [`CalculatedStyleValue`] is created, and evaluated at every use-site
//! against whatever basis and length context layout can supply there.

mod error;
mod evaluate;
mod resolve;
mod tree;

use std::fmt;

use ochre_common::warning::warn_once;
use serde::{Deserialize, Serialize};

pub use error::{CalcError, MissingContext};
pub use evaluate::{CalculationResult, EvaluationContext, evaluate};
pub use resolve::{
    ResolvedType, resolve_divide_type, resolve_multiply_type, resolve_sum_type, resolve_type,
};
pub use tree::{
    CalcExpression, CalcLeaf, CalcNumberSum, CalcProduct, CalcSum, CalcValue, ProductPart,
    SumOperation, SumPart,
};

use crate::values::{
    Angle, Frequency, Length, LengthContext, Number, Percentage, Quantity, QuantityKind, Time,
};

/// A `calc()` declaration value.
///
/// Owns its expression tree and the type resolved for it at creation.
/// Equality is by serialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "CalcExpression", into = "CalcExpression")]
pub struct CalculatedStyleValue {
    expression: CalcExpression,
    resolved_type: ResolvedType,
}

impl CalculatedStyleValue {
    /// Type-check `expression` and wrap it.
    ///
    /// # Errors
    ///
    /// [`CalcError::TypeMismatch`] when the expression has no valid type.
    pub fn create(expression: CalcExpression) -> Result<Self, CalcError> {
        let resolved_type = expression.resolved_type().ok_or(CalcError::TypeMismatch)?;
        Ok(Self {
            expression,
            resolved_type,
        })
    }

    /// The expression tree.
    #[must_use]
    pub const fn expression(&self) -> &CalcExpression {
        &self.expression
    }

    /// The type recorded at creation.
    #[must_use]
    pub const fn resolved_type(&self) -> ResolvedType {
        self.resolved_type
    }

    /// Whether the expression mentions a percentage outside any divisor.
    #[must_use]
    pub fn contains_percentage(&self) -> bool {
        self.expression.contains_percentage()
    }

    /// Evaluate with an explicit context.
    ///
    /// # Errors
    ///
    /// See [`CalcError`].
    pub fn evaluate(&self, context: &EvaluationContext<'_>) -> Result<Quantity, CalcError> {
        self.expression.evaluate(context).map(|result| result.value())
    }

    /// Evaluate, requiring the recorded type to be `expected` (or a bare
    /// percentage when `basis` is given, which is then resolved against it).
    fn resolve_as(
        &self,
        expected: ResolvedType,
        basis: Option<Quantity>,
        length_context: Option<&LengthContext>,
    ) -> Result<Quantity, CalcError> {
        let accepts_percentage = basis.is_some() && self.resolved_type == ResolvedType::Percentage;
        let result = if self.resolved_type == expected || accepts_percentage {
            let context = EvaluationContext::new()
                .with_percentage_basis(basis)
                .with_length_context(length_context);
            self.evaluate(&context).and_then(|value| match value {
                Quantity::Percentage(percentage) if expected != ResolvedType::Percentage => {
                    context.resolve_percentage(percentage, expected.quantity_kind())
                }
                value => Ok(value),
            })
        } else {
            Err(CalcError::TypeMismatch)
        };

        result.inspect_err(|error| {
            warn_once(
                "CSS",
                &format!("{self} could not be resolved as {expected}: {error}"),
            );
        })
    }

    /// Resolve a `<length>` expression.
    ///
    /// # Errors
    ///
    /// Type mismatch, or a relative length without `length_context`.
    pub fn resolve_length(
        &self,
        length_context: Option<&LengthContext>,
    ) -> Result<Length, CalcError> {
        match self.resolve_as(ResolvedType::Length, None, length_context)? {
            Quantity::Length(length) => Ok(length),
            _ => Err(CalcError::TypeMismatch),
        }
    }

    /// Resolve a `<length-percentage>` expression against `basis`.
    ///
    /// # Errors
    ///
    /// Type mismatch, or a relative length without `length_context`.
    pub fn resolve_length_percentage(
        &self,
        basis: Length,
        length_context: Option<&LengthContext>,
    ) -> Result<Length, CalcError> {
        match self.resolve_as(
            ResolvedType::Length,
            Some(Quantity::Length(basis)),
            length_context,
        )? {
            Quantity::Length(length) => Ok(length),
            _ => Err(CalcError::TypeMismatch),
        }
    }

    /// Resolve an `<angle>` expression.
    ///
    /// # Errors
    ///
    /// [`CalcError::TypeMismatch`] unless the expression is an angle.
    pub fn resolve_angle(&self) -> Result<Angle, CalcError> {
        match self.resolve_as(ResolvedType::Angle, None, None)? {
            Quantity::Angle(angle) => Ok(angle),
            _ => Err(CalcError::TypeMismatch),
        }
    }

    /// Resolve an `<angle-percentage>` expression against `basis`.
    ///
    /// # Errors
    ///
    /// [`CalcError::TypeMismatch`] unless the expression is an angle or percentage.
    pub fn resolve_angle_percentage(&self, basis: Angle) -> Result<Angle, CalcError> {
        match self.resolve_as(ResolvedType::Angle, Some(Quantity::Angle(basis)), None)? {
            Quantity::Angle(angle) => Ok(angle),
            _ => Err(CalcError::TypeMismatch),
        }
    }

    /// Resolve a `<time>` expression.
    ///
    /// # Errors
    ///
    /// [`CalcError::TypeMismatch`] unless the expression is a time.
    pub fn resolve_time(&self) -> Result<Time, CalcError> {
        match self.resolve_as(ResolvedType::Time, None, None)? {
            Quantity::Time(time) => Ok(time),
            _ => Err(CalcError::TypeMismatch),
        }
    }

    /// Resolve a `<time-percentage>` expression against `basis`.
    ///
    /// # Errors
    ///
    /// [`CalcError::TypeMismatch`] unless the expression is a time or percentage.
    pub fn resolve_time_percentage(&self, basis: Time) -> Result<Time, CalcError> {
        match self.resolve_as(ResolvedType::Time, Some(Quantity::Time(basis)), None)? {
            Quantity::Time(time) => Ok(time),
            _ => Err(CalcError::TypeMismatch),
        }
    }

    /// Resolve a `<frequency>` expression.
    ///
    /// # Errors
    ///
    /// [`CalcError::TypeMismatch`] unless the expression is a frequency.
    pub fn resolve_frequency(&self) -> Result<Frequency, CalcError> {
        match self.resolve_as(ResolvedType::Frequency, None, None)? {
            Quantity::Frequency(frequency) => Ok(frequency),
            _ => Err(CalcError::TypeMismatch),
        }
    }

    /// Resolve a `<frequency-percentage>` expression against `basis`.
    ///
    /// # Errors
    ///
    /// [`CalcError::TypeMismatch`] unless the expression is a frequency or percentage.
    pub fn resolve_frequency_percentage(&self, basis: Frequency) -> Result<Frequency, CalcError> {
        match self.resolve_as(
            ResolvedType::Frequency,
            Some(Quantity::Frequency(basis)),
            None,
        )? {
            Quantity::Frequency(frequency) => Ok(frequency),
            _ => Err(CalcError::TypeMismatch),
        }
    }

    /// Resolve a `<percentage>` expression.
    ///
    /// # Errors
    ///
    /// [`CalcError::TypeMismatch`] unless the expression is a percentage.
    pub fn resolve_percentage(&self) -> Result<Percentage, CalcError> {
        match self.resolve_as(ResolvedType::Percentage, None, None)? {
            Quantity::Percentage(percentage) => Ok(percentage),
            _ => Err(CalcError::TypeMismatch),
        }
    }

    /// Resolve a `<number>` expression. Integers are numbers too.
    ///
    /// # Errors
    ///
    /// [`CalcError::TypeMismatch`] unless the expression is a number.
    pub fn resolve_number(&self) -> Result<Number, CalcError> {
        let expected = if self.resolved_type == ResolvedType::Integer {
            ResolvedType::Integer
        } else {
            ResolvedType::Number
        };
        match self.resolve_as(expected, None, None)? {
            Quantity::Number(number) => Ok(number),
            _ => Err(CalcError::TypeMismatch),
        }
    }

    /// Resolve an `<integer>` expression.
    ///
    /// [§ 10.12 Range Checking](https://www.w3.org/TR/css-values-4/#calc-range)
    ///
    /// "...the value resulting from a top-level calculation must be clamped
    /// to the range allowed in the target context", rounding to the nearest
    /// integer.
    ///
    /// # Errors
    ///
    /// [`CalcError::TypeMismatch`] unless the expression is an integer.
    pub fn resolve_integer(&self) -> Result<i64, CalcError> {
        match self.resolve_as(ResolvedType::Integer, None, None)? {
            Quantity::Number(number) => Ok(number.integer_value()),
            _ => Err(CalcError::TypeMismatch),
        }
    }

    /// The quantity kind this value evaluates to.
    #[must_use]
    pub const fn quantity_kind(&self) -> QuantityKind {
        self.resolved_type.quantity_kind()
    }
}

impl PartialEq for CalculatedStyleValue {
    fn eq(&self, other: &Self) -> bool {
        self.to_string() == other.to_string()
    }
}

impl fmt::Display for CalculatedStyleValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "calc({})", self.expression)
    }
}

impl TryFrom<CalcExpression> for CalculatedStyleValue {
    type Error = CalcError;

    fn try_from(expression: CalcExpression) -> Result<Self, Self::Error> {
        Self::create(expression)
    }
}

impl From<CalculatedStyleValue> for CalcExpression {
    fn from(value: CalculatedStyleValue) -> Self {
        value.expression
    }
}
