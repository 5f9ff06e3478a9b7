//! Failures while resolving or evaluating a `calc()` expression

use strum_macros::Display;
use thiserror::Error;

/// Context an evaluation needed but was not given.
///
/// The caller should defer evaluation until layout can supply it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum MissingContext {
    /// A percentage was combined with a dimension and no basis was supplied.
    #[strum(to_string = "a percentage basis")]
    PercentageBasis,
    /// A font- or viewport-relative length had nothing to resolve against.
    #[strum(to_string = "a length context")]
    LengthContext,
}

/// [§ 10.9 Type Checking](https://www.w3.org/TR/css-values-4/#calc-type-checking)
///
/// Every failure is recoverable: the declaration is invalid (or not yet
/// resolvable), never the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum CalcError {
    /// Operands have incompatible types, statically or at runtime.
    #[error("incompatible types in calc()")]
    TypeMismatch,
    /// [§ 10.9] "If the right side is zero, the expression is invalid"
    #[error("division by zero in calc()")]
    DivisionByZero,
    /// Evaluation needs context that the caller did not provide.
    #[error("calc() needs {0}")]
    MissingContext(MissingContext),
}

impl From<MissingContext> for CalcError {
    fn from(missing: MissingContext) -> Self {
        Self::MissingContext(missing)
    }
}
