//! Numeric evaluation of `calc()` trees
//!
//! [§ 10.10 Internal Representation](https://www.w3.org/TR/css-values-4/#calc-internal)
//!
//! Evaluation is bottom-up. Every intermediate result is a single quantity
//! in the canonical unit of its kind (px, deg, s, Hz), so operands declared
//! in different units combine directly.

use serde::Serialize;

use super::error::{CalcError, MissingContext};
use super::tree::{CalcLeaf, CalcProduct, CalcSum, CalcValue, ProductPart, SumOperation};
use crate::values::{
    Angle, Frequency, Length, LengthContext, Number, Percentage, Quantity, QuantityKind, Time,
};

/// What a use-site can offer the evaluator.
///
/// Layout supplies the percentage basis (for example the containing block
/// width) and the length context of the element being resolved.
#[derive(Debug, Clone, Copy, Default)]
pub struct EvaluationContext<'a> {
    /// The quantity percentages resolve against.
    pub percentage_basis: Option<Quantity>,
    /// Font and viewport metrics for relative lengths.
    pub length_context: Option<&'a LengthContext>,
}

impl<'a> EvaluationContext<'a> {
    /// A context with neither a basis nor a length context.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            percentage_basis: None,
            length_context: None,
        }
    }

    /// Set the percentage basis.
    #[must_use]
    pub const fn with_percentage_basis(mut self, basis: Option<Quantity>) -> Self {
        self.percentage_basis = basis;
        self
    }

    /// Set the length context.
    #[must_use]
    pub const fn with_length_context(mut self, context: Option<&'a LengthContext>) -> Self {
        self.length_context = context;
        self
    }

    /// Convert a quantity to the canonical unit of its kind.
    ///
    /// # Errors
    ///
    /// A relative length without a length context fails with
    /// [`MissingContext::LengthContext`].
    pub fn canonicalize(&self, quantity: Quantity) -> Result<Quantity, CalcError> {
        Ok(match quantity {
            Quantity::Length(length) => Quantity::Length(Length::px(
                length
                    .try_to_px(self.length_context)
                    .ok_or(MissingContext::LengthContext)?,
            )),
            Quantity::Angle(angle) => Quantity::Angle(Angle::degrees(angle.to_degrees())),
            Quantity::Time(time) => Quantity::Time(Time::seconds(time.to_seconds())),
            Quantity::Frequency(frequency) => {
                Quantity::Frequency(Frequency::hertz(frequency.to_hertz()))
            }
            Quantity::Number(_) | Quantity::Percentage(_) => quantity,
        })
    }

    /// [§ 5.5 Percentages](https://www.w3.org/TR/css-values-4/#percentages)
    ///
    /// Resolve `percentage` against the basis, which must be of `kind`. The
    /// result is canonical.
    ///
    /// # Errors
    ///
    /// Fails without a basis, with a basis of another kind, or when the basis
    /// itself cannot be canonicalized.
    pub fn resolve_percentage(
        &self,
        percentage: Percentage,
        kind: QuantityKind,
    ) -> Result<Quantity, CalcError> {
        let basis = self
            .percentage_basis
            .ok_or(MissingContext::PercentageBasis)?;
        if basis.kind() != kind {
            return Err(CalcError::TypeMismatch);
        }
        self.canonicalize(basis)?
            .percentage_of(percentage)
            .ok_or(CalcError::TypeMismatch)
    }
}

/// The runtime value of an evaluated subtree: one canonical quantity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CalculationResult {
    value: Quantity,
}

/// Apply `op` to the magnitude of `quantity`, keeping its kind and unit.
fn map_magnitude(quantity: Quantity, op: impl Fn(f64) -> f64) -> Quantity {
    match quantity {
        Quantity::Number(number) => Quantity::Number(Number::new(op(number.value()))),
        Quantity::Percentage(percentage) => Quantity::Percentage(Percentage(op(percentage.0))),
        Quantity::Length(length) => Quantity::Length(Length::new(op(length.value), length.unit)),
        Quantity::Angle(angle) => Quantity::Angle(Angle::new(op(angle.value), angle.unit)),
        Quantity::Time(time) => Quantity::Time(Time::new(op(time.value), time.unit)),
        Quantity::Frequency(frequency) => {
            Quantity::Frequency(Frequency::new(op(frequency.value), frequency.unit))
        }
    }
}

impl CalculationResult {
    /// Evaluate a literal.
    ///
    /// # Errors
    ///
    /// See [`EvaluationContext::canonicalize`].
    pub fn from_quantity(
        quantity: Quantity,
        context: &EvaluationContext<'_>,
    ) -> Result<Self, CalcError> {
        Ok(Self {
            value: context.canonicalize(quantity)?,
        })
    }

    /// The canonical value.
    #[must_use]
    pub const fn value(&self) -> Quantity {
        self.value
    }

    /// `self + other`
    ///
    /// # Errors
    ///
    /// Incompatible kinds, or a percentage that cannot be resolved.
    pub fn add(self, other: Self, context: &EvaluationContext<'_>) -> Result<Self, CalcError> {
        self.add_or_subtract(SumOperation::Add, other, context)
    }

    /// `self - other`
    ///
    /// # Errors
    ///
    /// Incompatible kinds, or a percentage that cannot be resolved.
    pub fn subtract(
        self,
        other: Self,
        context: &EvaluationContext<'_>,
    ) -> Result<Self, CalcError> {
        self.add_or_subtract(SumOperation::Subtract, other, context)
    }

    fn add_or_subtract(
        self,
        operation: SumOperation,
        other: Self,
        context: &EvaluationContext<'_>,
    ) -> Result<Self, CalcError> {
        let combine = |lhs: f64, rhs: f64| match operation {
            SumOperation::Add => lhs + rhs,
            SumOperation::Subtract => lhs - rhs,
        };
        let value = match (self.value, other.value) {
            (Quantity::Number(lhs), Quantity::Number(rhs)) => Quantity::Number(match operation {
                SumOperation::Add => lhs + rhs,
                SumOperation::Subtract => lhs - rhs,
            }),
            (Quantity::Percentage(lhs), Quantity::Percentage(rhs)) => {
                Quantity::Percentage(Percentage(combine(lhs.0, rhs.0)))
            }
            (Quantity::Length(lhs), Quantity::Length(rhs)) => {
                Quantity::Length(Length::px(combine(lhs.value, rhs.value)))
            }
            (Quantity::Angle(lhs), Quantity::Angle(rhs)) => {
                Quantity::Angle(Angle::degrees(combine(lhs.value, rhs.value)))
            }
            (Quantity::Time(lhs), Quantity::Time(rhs)) => {
                Quantity::Time(Time::seconds(combine(lhs.value, rhs.value)))
            }
            (Quantity::Frequency(lhs), Quantity::Frequency(rhs)) => {
                Quantity::Frequency(Frequency::hertz(combine(lhs.value, rhs.value)))
            }
            (dimension, Quantity::Percentage(percentage)) if dimension.kind().is_dimension() => {
                let resolved = Self {
                    value: context.resolve_percentage(percentage, dimension.kind())?,
                };
                return self.add_or_subtract(operation, resolved, context);
            }
            // `this - other` is `-other + this`, which puts the percentage on
            // the right where it can be resolved.
            (Quantity::Percentage(_), dimension) if dimension.kind().is_dimension() => {
                let other = match operation {
                    SumOperation::Add => other,
                    SumOperation::Subtract => other.negated(),
                };
                return other.add(self, context);
            }
            _ => return Err(CalcError::TypeMismatch),
        };
        Ok(Self { value })
    }

    /// `self * other`; one side must be a number.
    ///
    /// # Errors
    ///
    /// [`CalcError::TypeMismatch`] when neither side is a number.
    pub fn multiply_by(self, other: Self) -> Result<Self, CalcError> {
        let value = match (self.value, other.value) {
            (Quantity::Number(lhs), Quantity::Number(rhs)) => Quantity::Number(lhs * rhs),
            (Quantity::Number(factor), quantity) | (quantity, Quantity::Number(factor)) => {
                map_magnitude(quantity, |magnitude| magnitude * factor.value())
            }
            _ => return Err(CalcError::TypeMismatch),
        };
        Ok(Self { value })
    }

    /// `self / other`; `other` must be a non-zero number.
    ///
    /// # Errors
    ///
    /// [`CalcError::TypeMismatch`] for a non-number divisor,
    /// [`CalcError::DivisionByZero`] for zero.
    pub fn divide_by(self, other: Self) -> Result<Self, CalcError> {
        let Quantity::Number(divisor) = other.value else {
            return Err(CalcError::TypeMismatch);
        };
        if divisor.value() == 0.0 {
            return Err(CalcError::DivisionByZero);
        }
        let value = match self.value {
            Quantity::Number(number) => Quantity::Number(number / divisor),
            quantity => map_magnitude(quantity, |magnitude| magnitude / divisor.value()),
        };
        Ok(Self { value })
    }

    /// `-self`
    #[must_use]
    pub fn negated(self) -> Self {
        let value = match self.value {
            Quantity::Number(number) => Quantity::Number(-number),
            quantity => map_magnitude(quantity, |magnitude| -magnitude),
        };
        Self { value }
    }
}

impl<L: CalcLeaf> CalcSum<L> {
    /// Evaluate this sum.
    ///
    /// # Errors
    ///
    /// The first failure of any subtree.
    pub fn evaluate(&self, context: &EvaluationContext<'_>) -> Result<CalculationResult, CalcError> {
        self.rest
            .iter()
            .try_fold(self.first.evaluate(context)?, |lhs, part| {
                let rhs = part.product.evaluate(context)?;
                match part.operation {
                    SumOperation::Add => lhs.add(rhs, context),
                    SumOperation::Subtract => lhs.subtract(rhs, context),
                }
            })
    }
}

impl<L: CalcLeaf> CalcProduct<L> {
    /// Evaluate this product.
    ///
    /// # Errors
    ///
    /// The first failure of any subtree.
    pub fn evaluate(&self, context: &EvaluationContext<'_>) -> Result<CalculationResult, CalcError> {
        self.rest
            .iter()
            .try_fold(self.first.evaluate(context)?, |lhs, part| match part {
                ProductPart::Multiply(value) => lhs.multiply_by(value.evaluate(context)?),
                ProductPart::Divide(value) => lhs.divide_by(value.evaluate(context)?),
            })
    }
}

impl<L: CalcLeaf> CalcValue<L> {
    /// Evaluate this value.
    ///
    /// # Errors
    ///
    /// The first failure of any subtree.
    pub fn evaluate(&self, context: &EvaluationContext<'_>) -> Result<CalculationResult, CalcError> {
        match self {
            Self::Leaf(leaf) => CalculationResult::from_quantity(leaf.to_quantity(), context),
            Self::Nested(sum) => sum.evaluate(context),
        }
    }
}

/// Evaluate a whole expression against an optional basis and length context.
///
/// # Errors
///
/// See [`CalcError`].
pub fn evaluate<L: CalcLeaf>(
    expression: &CalcSum<L>,
    basis: Option<Quantity>,
    length_context: Option<&LengthContext>,
) -> Result<CalculationResult, CalcError> {
    let context = EvaluationContext::new()
        .with_percentage_basis(basis)
        .with_length_context(length_context);
    expression.evaluate(&context)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::values::{AngleUnit, LengthUnit, TimeUnit};

    fn result(quantity: Quantity) -> CalculationResult {
        CalculationResult::from_quantity(quantity, &EvaluationContext::new()).unwrap()
    }

    #[test]
    fn test_literals_are_canonicalized() {
        assert_eq!(
            result(Quantity::Length(Length::new(1.0, LengthUnit::In))).value(),
            Quantity::Length(Length::px(96.0))
        );
        assert_eq!(
            result(Quantity::Angle(Angle::new(0.5, AngleUnit::Turn))).value(),
            Quantity::Angle(Angle::degrees(180.0))
        );
        assert_eq!(
            result(Quantity::Time(Time::new(250.0, TimeUnit::Ms))).value(),
            Quantity::Time(Time::seconds(0.25))
        );
    }

    #[test]
    fn test_relative_length_needs_context() {
        let em = Quantity::Length(Length::new(2.0, LengthUnit::Em));
        assert_eq!(
            CalculationResult::from_quantity(em, &EvaluationContext::new()),
            Err(CalcError::MissingContext(MissingContext::LengthContext))
        );
    }

    #[test]
    fn test_percentage_on_the_left_of_a_subtraction() {
        let basis = Some(Quantity::Length(Length::px(200.0)));
        let context = EvaluationContext::new().with_percentage_basis(basis);
        let half = result(Quantity::Percentage(Percentage(50.0)));
        let ten = result(Quantity::Length(Length::px(10.0)));
        assert_eq!(
            half.subtract(ten, &context).unwrap().value(),
            Quantity::Length(Length::px(90.0))
        );
    }

    #[test]
    fn test_percentage_basis_errors() {
        let percent = result(Quantity::Percentage(Percentage(50.0)));
        let length = result(Quantity::Length(Length::px(10.0)));
        assert_eq!(
            length.add(percent, &EvaluationContext::new()),
            Err(CalcError::MissingContext(MissingContext::PercentageBasis))
        );
        let wrong_basis = EvaluationContext::new()
            .with_percentage_basis(Some(Quantity::Angle(Angle::degrees(90.0))));
        assert_eq!(
            length.add(percent, &wrong_basis),
            Err(CalcError::TypeMismatch)
        );
    }

    #[test]
    fn test_multiply_and_divide() {
        let three = result(Quantity::Number(Number::integer(3)));
        let length = result(Quantity::Length(Length::px(4.0)));
        assert_eq!(
            three.multiply_by(length).unwrap().value(),
            Quantity::Length(Length::px(12.0))
        );
        assert_eq!(length.multiply_by(length), Err(CalcError::TypeMismatch));
        let zero = result(Quantity::Number(Number::integer(0)));
        assert_eq!(length.divide_by(zero), Err(CalcError::DivisionByZero));
        assert_eq!(three.divide_by(length), Err(CalcError::TypeMismatch));
    }
}
