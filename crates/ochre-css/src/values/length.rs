//! CSS Length values and unit conversion
//!
//! [§ 6 Distance Units: the `<length>` type](https://www.w3.org/TR/css-values-4/#lengths)

use std::fmt;

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

use super::percentage::Percentage;
use super::serialize_number;

/// User agent default font size.
/// [§ 3.5 font-size](https://www.w3.org/TR/css-fonts-4/#font-size-prop)
pub const DEFAULT_FONT_SIZE_PX: f64 = 16.0;

/// [§ 6.2 Absolute Lengths](https://www.w3.org/TR/css-values-4/#absolute-lengths)
///
/// "1in = 2.54cm = 96px"
const PX_PER_INCH: f64 = 96.0;
const PX_PER_CM: f64 = PX_PER_INCH / 2.54;

/// [§ 6 Distance Units](https://www.w3.org/TR/css-values-4/#lengths)
///
/// Units are matched ASCII case-insensitively and serialized in lowercase,
/// except `Q`, which keeps its uppercase spelling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum LengthUnit {
    /// "1px = 1/96th of 1in"
    Px,
    /// "1cm = 96px/2.54"
    Cm,
    /// "1mm = 1/10th of 1cm"
    Mm,
    /// "1Q = 1/40th of 1cm"
    #[strum(serialize = "Q")]
    #[serde(rename = "Q", alias = "q")]
    Q,
    /// "1in = 2.54cm = 96px"
    In,
    /// "1pt = 1/72nd of 1in"
    Pt,
    /// "1pc = 1/6th of 1in"
    Pc,
    /// [§ 6.1.1 Font-relative Lengths](https://www.w3.org/TR/css-values-4/#font-relative-lengths)
    /// "Equal to the computed value of the font-size property of the element"
    Em,
    /// "Equal to the computed value of em units on the root element."
    Rem,
    /// "Equal to the used x-height of the first available font"
    Ex,
    /// "Equal to the used advance measure of the "0" glyph"
    Ch,
    /// [§ 6.1.2 Viewport-percentage Lengths](https://www.w3.org/TR/css-values-4/#viewport-relative-lengths)
    /// "1vw = 1% of viewport width"
    Vw,
    /// "1vh = 1% of viewport height"
    Vh,
    /// "1vmin = the smaller of vw or vh"
    Vmin,
    /// "1vmax = the larger of vw or vh"
    Vmax,
}

impl LengthUnit {
    /// Pixels per unit for absolute units, `None` for relative ones.
    #[must_use]
    pub const fn absolute_px_factor(self) -> Option<f64> {
        match self {
            Self::Px => Some(1.0),
            Self::Cm => Some(PX_PER_CM),
            Self::Mm => Some(PX_PER_CM / 10.0),
            Self::Q => Some(PX_PER_CM / 40.0),
            Self::In => Some(PX_PER_INCH),
            Self::Pt => Some(PX_PER_INCH / 72.0),
            Self::Pc => Some(PX_PER_INCH / 6.0),
            Self::Em
            | Self::Rem
            | Self::Ex
            | Self::Ch
            | Self::Vw
            | Self::Vh
            | Self::Vmin
            | Self::Vmax => None,
        }
    }
}

/// [§ 6.1.2 Viewport-percentage Lengths](https://www.w3.org/TR/css-values-4/#viewport-relative-lengths)
///
/// "The viewport-percentage lengths are relative to the size of the initial
/// containing block."
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    /// Width of the initial containing block in px.
    pub width: f64,
    /// Height of the initial containing block in px.
    pub height: f64,
}

/// Everything needed to turn a relative length into px.
///
/// Supplied by the layout collaborator for the element being resolved. When
/// absent, any relative length fails to resolve instead of falling back to a
/// guessed font size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LengthContext {
    /// Computed font-size of the element, in px.
    pub font_size: f64,
    /// Computed font-size of the root element, in px.
    pub root_font_size: f64,
    /// Used x-height of the first available font, in px.
    pub x_height: f64,
    /// Advance width of the "0" glyph, in px.
    pub zero_advance: f64,
    /// Size of the initial containing block.
    pub viewport: Viewport,
}

impl LengthContext {
    /// Build a context from font sizes alone.
    ///
    /// [§ 6.1.1 Font-relative Lengths](https://www.w3.org/TR/css-values-4/#font-relative-lengths)
    ///
    /// "In the cases where it is impossible or impractical to determine the
    /// x-height, a value of 0.5em must be assumed." The same fallback applies
    /// to `ch`.
    #[must_use]
    pub const fn new(font_size: f64, root_font_size: f64, viewport: Viewport) -> Self {
        Self {
            font_size,
            root_font_size,
            x_height: font_size * 0.5,
            zero_advance: font_size * 0.5,
            viewport,
        }
    }
}

/// [§ 6 Distance Units](https://www.w3.org/TR/css-values-4/#lengths)
///
/// "Lengths refer to distance measurements and are denoted by `<length>` in
/// the property definitions. A length is a dimension."
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Length {
    /// The declared numeric value.
    pub value: f64,
    /// The declared unit.
    pub unit: LengthUnit,
}

impl Length {
    /// A length in the given unit.
    #[must_use]
    pub const fn new(value: f64, unit: LengthUnit) -> Self {
        Self { value, unit }
    }

    /// A length in canonical px.
    #[must_use]
    pub const fn px(value: f64) -> Self {
        Self::new(value, LengthUnit::Px)
    }

    /// Whether this length is expressed in px.
    #[must_use]
    pub fn is_px(&self) -> bool {
        self.unit == LengthUnit::Px
    }

    /// Whether converting to px needs a [`LengthContext`].
    #[must_use]
    pub const fn is_relative(&self) -> bool {
        self.unit.absolute_px_factor().is_none()
    }

    /// px value for absolute units, `None` for relative ones.
    #[must_use]
    pub fn absolute_px(&self) -> Option<f64> {
        self.unit.absolute_px_factor().map(|factor| self.value * factor)
    }

    /// Convert to px, resolving relative units against `context`.
    #[must_use]
    pub fn to_px(&self, context: &LengthContext) -> f64 {
        let viewport = context.viewport;
        match self.unit {
            LengthUnit::Em => self.value * context.font_size,
            LengthUnit::Rem => self.value * context.root_font_size,
            LengthUnit::Ex => self.value * context.x_height,
            LengthUnit::Ch => self.value * context.zero_advance,
            LengthUnit::Vw => self.value * viewport.width / 100.0,
            LengthUnit::Vh => self.value * viewport.height / 100.0,
            LengthUnit::Vmin => self.value * viewport.width.min(viewport.height) / 100.0,
            LengthUnit::Vmax => self.value * viewport.width.max(viewport.height) / 100.0,
            _ => self.absolute_px().unwrap_or(self.value),
        }
    }

    /// Convert to px if possible: absolute units always, relative units only
    /// when a context is available.
    #[must_use]
    pub fn try_to_px(&self, context: Option<&LengthContext>) -> Option<f64> {
        self.absolute_px()
            .or_else(|| context.map(|context| self.to_px(context)))
    }

    /// The same length with `percentage` applied, keeping the unit.
    #[must_use]
    pub fn percentage_of(&self, percentage: Percentage) -> Self {
        Self::new(percentage.of(self.value), self.unit)
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", serialize_number(self.value), self.unit)
    }
}
