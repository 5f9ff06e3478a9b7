//! Typed CSS values, `calc()` evaluation and style-change invalidation.
//!
//! # Scope
//!
//! This crate implements:
//! - **Numeric values** ([CSS Values and Units Level 4](https://www.w3.org/TR/css-values-4/))
//!   - Numbers, integers, percentages
//!   - Lengths, angles, times and frequencies in every unit, with canonical
//!     conversion
//!   - sRGB colors ([CSS Color Level 4](https://www.w3.org/TR/css-color-4/))
//!
//! - **Mathematical expressions** ([§ 10 Mathematical Expressions](https://www.w3.org/TR/css-values-4/#math))
//!   - Expression trees for the general and number-only grammars
//!   - Static type checking
//!   - Evaluation against a percentage basis and a length context
//!
//! - **Style values**
//!   - Every computed value kind, including the background, border,
//!     border-radius, shadow and list-style shorthands
//!   - Linear, radial and conic gradients
//!   - Transform functions and filter function lists
//!   - CSSOM serialization
//!   - Interned singletons and length absolutization
//!
//! - **Invalidation**
//!   - Property-indexed computed style snapshots
//!   - Classification of a style change into no-op, repaint, restack or
//!     relayout
//!
//! # Not Yet Implemented
//!
//! - Parsing `calc()` from tokens (callers build trees directly)
//! - `min()`, `max()`, `clamp()` and the other math functions

/// `calc()` trees, type resolution and evaluation per [§ 10](https://www.w3.org/TR/css-values-4/#math).
pub mod calc;
/// Style-change invalidation.
pub mod invalidation;
/// Style values, property identifiers, fonts and snapshots.
pub mod style;
/// Numeric value types per [CSS Values and Units Level 4](https://www.w3.org/TR/css-values-4/).
pub mod values;

pub use calc::{CalcError, CalculatedStyleValue, EvaluationContext, ResolvedType};
pub use invalidation::{RequiredInvalidation, StyleRecomputation, classify};
pub use style::{FontCache, PropertyId, StyleSnapshot, StyleValue};
pub use values::{LengthContext, Quantity};
