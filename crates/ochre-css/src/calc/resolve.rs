//! Static type resolution of `calc()` trees
//!
//! [§ 10.9 Type Checking](https://www.w3.org/TR/css-values-4/#calc-type-checking)
//!
//! Types are computed from the shape of the tree and the kinds of its
//! literals; no value is evaluated. A tree with no valid type is rejected
//! before it ever reaches the evaluator.

use serde::{Deserialize, Serialize};
use strum_macros::Display;

use super::tree::{CalcLeaf, CalcProduct, CalcSum, CalcValue, ProductPart};
use crate::values::QuantityKind;

/// The static type of an expression node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ResolvedType {
    /// `<number>`
    Number,
    /// `<integer>`
    Integer,
    /// `<percentage>`
    Percentage,
    /// `<length>`
    Length,
    /// `<angle>`
    Angle,
    /// `<frequency>`
    Frequency,
    /// `<time>`
    Time,
}

impl ResolvedType {
    /// `<number>` or `<integer>`.
    #[must_use]
    pub const fn is_number(self) -> bool {
        matches!(self, Self::Number | Self::Integer)
    }

    /// Length, angle, frequency or time.
    #[must_use]
    pub const fn is_dimension(self) -> bool {
        matches!(
            self,
            Self::Length | Self::Angle | Self::Frequency | Self::Time
        )
    }

    /// The type of a literal of the given kind.
    #[must_use]
    pub const fn of_kind(kind: QuantityKind, is_integer: bool) -> Self {
        match kind {
            QuantityKind::Number if is_integer => Self::Integer,
            QuantityKind::Number => Self::Number,
            QuantityKind::Percentage => Self::Percentage,
            QuantityKind::Length => Self::Length,
            QuantityKind::Angle => Self::Angle,
            QuantityKind::Time => Self::Time,
            QuantityKind::Frequency => Self::Frequency,
        }
    }

    /// The quantity kind values of this type evaluate to.
    #[must_use]
    pub const fn quantity_kind(self) -> QuantityKind {
        match self {
            Self::Number | Self::Integer => QuantityKind::Number,
            Self::Percentage => QuantityKind::Percentage,
            Self::Length => QuantityKind::Length,
            Self::Angle => QuantityKind::Angle,
            Self::Frequency => QuantityKind::Frequency,
            Self::Time => QuantityKind::Time,
        }
    }
}

/// [§ 10.9] "At `+` or `-`, check that both sides have the same type, or that
/// one side is a `<number>` and the other is an `<integer>`."
///
/// A percentage also combines with a dimension it can be resolved against.
#[must_use]
pub fn resolve_sum_type(lhs: ResolvedType, rhs: ResolvedType) -> Option<ResolvedType> {
    use ResolvedType::{Number, Percentage};

    if lhs == rhs {
        return Some(lhs);
    }
    if lhs.is_number() && rhs.is_number() {
        return Some(Number);
    }
    match (lhs, rhs) {
        (Percentage, other) | (other, Percentage) if other.is_dimension() => Some(other),
        _ => None,
    }
}

/// [§ 10.9] "At `*`, check that at least one side is `<number>`."
///
/// Two integers stay an integer; otherwise the non-number side wins.
#[must_use]
pub fn resolve_multiply_type(lhs: ResolvedType, rhs: ResolvedType) -> Option<ResolvedType> {
    use ResolvedType::{Integer, Number};

    match (lhs, rhs) {
        (Integer, Integer) => Some(Integer),
        _ if lhs.is_number() && rhs.is_number() => Some(Number),
        _ if lhs.is_number() => Some(rhs),
        _ if rhs.is_number() => Some(lhs),
        _ => None,
    }
}

/// [§ 10.9] "At `/`, check that the right side is `<number>`. If the left
/// side is `<integer>`, resolve to `<number>`. Otherwise, resolve to the type
/// of the left side."
#[must_use]
pub fn resolve_divide_type(lhs: ResolvedType, rhs: ResolvedType) -> Option<ResolvedType> {
    if !rhs.is_number() {
        return None;
    }
    match lhs {
        ResolvedType::Integer => Some(ResolvedType::Number),
        other => Some(other),
    }
}

impl<L: CalcLeaf> CalcSum<L> {
    /// The type of this sum, or `None` when its operands do not combine.
    #[must_use]
    pub fn resolved_type(&self) -> Option<ResolvedType> {
        self.rest.iter().try_fold(self.first.resolved_type()?, |lhs, part| {
            resolve_sum_type(lhs, part.product.resolved_type()?)
        })
    }
}

impl<L: CalcLeaf> CalcProduct<L> {
    /// The type of this product, or `None` when its operands do not combine.
    #[must_use]
    pub fn resolved_type(&self) -> Option<ResolvedType> {
        self.rest
            .iter()
            .try_fold(self.first.resolved_type()?, |lhs, part| match part {
                ProductPart::Multiply(value) => resolve_multiply_type(lhs, value.resolved_type()?),
                ProductPart::Divide(value) => resolve_divide_type(lhs, value.resolved_type()?),
            })
    }
}

impl<L: CalcLeaf> CalcValue<L> {
    /// The type of this value.
    #[must_use]
    pub fn resolved_type(&self) -> Option<ResolvedType> {
        match self {
            Self::Leaf(leaf) => Some(leaf.resolved_type()),
            Self::Nested(sum) => sum.resolved_type(),
        }
    }
}

/// Resolve the type of a whole expression.
#[must_use]
pub fn resolve_type<L: CalcLeaf>(expression: &CalcSum<L>) -> Option<ResolvedType> {
    expression.resolved_type()
}
