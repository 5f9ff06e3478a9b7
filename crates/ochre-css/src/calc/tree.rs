//! `calc()` expression trees
//!
//! [§ 10.1 Syntax](https://www.w3.org/TR/css-values-4/#calc-syntax)
//!
//! ```text
//! <calc-sum>     = <calc-product> [ [ '+' | '-' ] <calc-product> ]*
//! <calc-product> = <calc-value> [ [ '*' | '/' ] <calc-value> ]*
//! <calc-value>   = <literal> | ( <calc-sum> )
//! ```
//!
//! Both grammars share one tree, parameterized by its leaf: [`Quantity`] for
//! general expressions, [`Number`] for the number-only grammar used by
//! divisors. A divisor is always a number-only value.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::resolve::ResolvedType;
use crate::values::{Number, Quantity};

/// A literal that can sit at the leaves of a `calc()` tree.
pub trait CalcLeaf: Clone + PartialEq + fmt::Debug + fmt::Display {
    /// The static type of this literal.
    fn resolved_type(&self) -> ResolvedType;

    /// Whether this literal is a `<percentage>`.
    fn is_percentage(&self) -> bool;

    /// The literal as a general quantity.
    fn to_quantity(&self) -> Quantity;
}

impl CalcLeaf for Quantity {
    fn resolved_type(&self) -> ResolvedType {
        let is_integer = matches!(self, Self::Number(number) if number.is_integer());
        ResolvedType::of_kind(self.kind(), is_integer)
    }

    fn is_percentage(&self) -> bool {
        matches!(self, Self::Percentage(_))
    }

    fn to_quantity(&self) -> Quantity {
        *self
    }
}

impl CalcLeaf for Number {
    fn resolved_type(&self) -> ResolvedType {
        if self.is_integer() {
            ResolvedType::Integer
        } else {
            ResolvedType::Number
        }
    }

    fn is_percentage(&self) -> bool {
        false
    }

    fn to_quantity(&self) -> Quantity {
        Quantity::Number(*self)
    }
}

/// `+` or `-` between two products.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SumOperation {
    /// `+`
    Add,
    /// `-`
    Subtract,
}

impl fmt::Display for SumOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Add => "+",
            Self::Subtract => "-",
        })
    }
}

/// `<calc-sum>`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalcSum<L> {
    /// The leading product.
    pub first: CalcProduct<L>,
    /// Every following `+`/`-` product, in source order.
    #[serde(default = "Vec::new", skip_serializing_if = "Vec::is_empty")]
    pub rest: Vec<SumPart<L>>,
}

/// One `+ product` or `- product` step of a [`CalcSum`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SumPart<L> {
    /// `+` or `-`.
    pub operation: SumOperation,
    /// The right-hand operand.
    pub product: CalcProduct<L>,
}

/// `<calc-product>`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalcProduct<L> {
    /// The leading value.
    pub first: CalcValue<L>,
    /// Every following `*`/`/` value, in source order.
    #[serde(default = "Vec::new", skip_serializing_if = "Vec::is_empty")]
    pub rest: Vec<ProductPart<L>>,
}

/// One `* value` or `/ value` step of a [`CalcProduct`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductPart<L> {
    /// `* value`
    Multiply(CalcValue<L>),
    /// `/ value`; the divisor is always number-only.
    Divide(CalcValue<Number>),
}

/// `<calc-value>`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CalcValue<L> {
    /// A literal.
    Leaf(L),
    /// A parenthesized sum.
    Nested(Box<CalcSum<L>>),
}

/// A general-grammar expression.
pub type CalcExpression = CalcSum<Quantity>;

/// A number-only expression.
pub type CalcNumberSum = CalcSum<Number>;

impl<L> CalcSum<L> {
    /// A sum of one product.
    #[must_use]
    pub const fn new(first: CalcProduct<L>) -> Self {
        Self {
            first,
            rest: Vec::new(),
        }
    }

    /// A sum holding a single literal.
    #[must_use]
    pub const fn leaf(leaf: L) -> Self {
        Self::new(CalcProduct::new(CalcValue::Leaf(leaf)))
    }

    /// Append `+ product`.
    #[must_use]
    pub fn plus(mut self, product: CalcProduct<L>) -> Self {
        self.rest.push(SumPart {
            operation: SumOperation::Add,
            product,
        });
        self
    }

    /// Append `- product`.
    #[must_use]
    pub fn minus(mut self, product: CalcProduct<L>) -> Self {
        self.rest.push(SumPart {
            operation: SumOperation::Subtract,
            product,
        });
        self
    }
}

impl<L> CalcProduct<L> {
    /// A product of one value.
    #[must_use]
    pub const fn new(first: CalcValue<L>) -> Self {
        Self {
            first,
            rest: Vec::new(),
        }
    }

    /// A product holding a single literal.
    #[must_use]
    pub const fn leaf(leaf: L) -> Self {
        Self::new(CalcValue::Leaf(leaf))
    }

    /// Append `* value`.
    #[must_use]
    pub fn multiply(mut self, value: CalcValue<L>) -> Self {
        self.rest.push(ProductPart::Multiply(value));
        self
    }

    /// Append `/ divisor`.
    #[must_use]
    pub fn divide(mut self, divisor: CalcValue<Number>) -> Self {
        self.rest.push(ProductPart::Divide(divisor));
        self
    }
}

impl<L> CalcValue<L> {
    /// Wrap a sum in parentheses.
    #[must_use]
    pub fn nested(sum: CalcSum<L>) -> Self {
        Self::Nested(Box::new(sum))
    }
}

impl<L: CalcLeaf> CalcSum<L> {
    /// Whether any general-grammar literal is a percentage. Divisors never
    /// contain one.
    #[must_use]
    pub fn contains_percentage(&self) -> bool {
        self.first.contains_percentage()
            || self
                .rest
                .iter()
                .any(|part| part.product.contains_percentage())
    }
}

impl<L: CalcLeaf> CalcProduct<L> {
    /// Whether any literal outside a divisor is a percentage.
    #[must_use]
    pub fn contains_percentage(&self) -> bool {
        self.first.contains_percentage()
            || self.rest.iter().any(|part| match part {
                ProductPart::Multiply(value) => value.contains_percentage(),
                ProductPart::Divide(_) => false,
            })
    }
}

impl<L: CalcLeaf> CalcValue<L> {
    /// Whether this value is, or contains, a percentage literal.
    #[must_use]
    pub fn contains_percentage(&self) -> bool {
        match self {
            Self::Leaf(leaf) => leaf.is_percentage(),
            Self::Nested(sum) => sum.contains_percentage(),
        }
    }
}

impl<L: fmt::Display> fmt::Display for CalcSum<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.first)?;
        for part in &self.rest {
            write!(f, " {} {}", part.operation, part.product)?;
        }
        Ok(())
    }
}

impl<L: fmt::Display> fmt::Display for CalcProduct<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.first)?;
        for part in &self.rest {
            match part {
                ProductPart::Multiply(value) => write!(f, " * {value}")?,
                ProductPart::Divide(value) => write!(f, " / {value}")?,
            }
        }
        Ok(())
    }
}

impl<L: fmt::Display> fmt::Display for CalcValue<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Leaf(leaf) => leaf.fmt(f),
            Self::Nested(sum) => write!(f, "({sum})"),
        }
    }
}
