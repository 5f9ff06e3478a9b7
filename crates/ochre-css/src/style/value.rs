//! The closed set of style values a computed property can hold
//!
//! [CSS Values and Units Level 4](https://www.w3.org/TR/css-values-4/)
//! [CSSOM § 6.7 Serializing CSS Values](https://www.w3.org/TR/cssom-1/#serializing-css-values)

use std::fmt;
use std::sync::{Arc, LazyLock};

use serde::{Deserialize, Serialize};

use super::composite::{
    BackgroundStyleValue, BorderRadiusStyleValue, BorderStyleValue, LinearGradientStyleValue,
    ListStyleStyleValue, ShadowStyleValue, StyleValueList,
};
use super::effects::{FilterValueListStyleValue, TransformationStyleValue};
use super::gradient::{ConicGradientStyleValue, RadialGradientStyleValue};
use crate::calc::CalculatedStyleValue;
use crate::values::{
    Angle, ColorValue, Frequency, Length, LengthContext, Number, Percentage, Time,
};

/// A computed style value.
///
/// Immutable once built. Composite arms share their components through
/// `Arc`, and the commonest values are interned (see [`StyleValue::color`],
/// [`StyleValue::length`] and the CSS-wide keyword constructors).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "kebab-case")]
pub enum StyleValue {
    /// `<angle>`
    Angle(Angle),
    /// The `background` shorthand, possibly layered.
    Background(BackgroundStyleValue),
    /// The `border` shorthand.
    Border(BorderStyleValue),
    /// One corner of `border-radius`.
    BorderRadius(BorderRadiusStyleValue),
    /// `calc()`
    Calculated(CalculatedStyleValue),
    /// `<color>`
    Color(ColorValue),
    /// `conic-gradient()` / `repeating-conic-gradient()`
    ConicGradient(ConicGradientStyleValue),
    /// The `filter` / `backdrop-filter` function list.
    FilterValueList(FilterValueListStyleValue),
    /// `<frequency>`
    Frequency(Frequency),
    /// A keyword such as `block` or `auto`, stored lowercase.
    Identifier(String),
    /// [§ 7.3 The `inherit` keyword](https://www.w3.org/TR/css-cascade-4/#inherit)
    Inherit,
    /// [§ 7.1 The `initial` keyword](https://www.w3.org/TR/css-cascade-4/#initial)
    Initial,
    /// `<length>`
    Length(Length),
    /// `linear-gradient()` / `repeating-linear-gradient()`
    LinearGradient(LinearGradientStyleValue),
    /// The `list-style` shorthand.
    ListStyle(ListStyleStyleValue),
    /// `<number>` / `<integer>`
    Number(Number),
    /// `<percentage>`
    Percentage(Percentage),
    /// `radial-gradient()` / `repeating-radial-gradient()`
    RadialGradient(RadialGradientStyleValue),
    /// One `box-shadow` / `text-shadow` entry.
    Shadow(ShadowStyleValue),
    /// `<string>`
    String(String),
    /// `<time>`
    Time(Time),
    /// One transform function, such as `rotate(45deg)`.
    Transformation(TransformationStyleValue),
    /// [§ 7.4 The `unset` keyword](https://www.w3.org/TR/css-cascade-4/#inherit-initial)
    Unset,
    /// A space- or comma-separated list of values.
    ValueList(StyleValueList),
}

/// Interned instances shared by every snapshot.
static TRANSPARENT: LazyLock<Arc<StyleValue>> =
    LazyLock::new(|| Arc::new(StyleValue::Color(ColorValue::TRANSPARENT)));
static BLACK: LazyLock<Arc<StyleValue>> =
    LazyLock::new(|| Arc::new(StyleValue::Color(ColorValue::BLACK)));
static WHITE: LazyLock<Arc<StyleValue>> =
    LazyLock::new(|| Arc::new(StyleValue::Color(ColorValue::WHITE)));
static ZERO_PX: LazyLock<Arc<StyleValue>> =
    LazyLock::new(|| Arc::new(StyleValue::Length(Length::px(0.0))));
static ONE_PX: LazyLock<Arc<StyleValue>> =
    LazyLock::new(|| Arc::new(StyleValue::Length(Length::px(1.0))));
static INHERIT: LazyLock<Arc<StyleValue>> = LazyLock::new(|| Arc::new(StyleValue::Inherit));
static INITIAL: LazyLock<Arc<StyleValue>> = LazyLock::new(|| Arc::new(StyleValue::Initial));
static UNSET: LazyLock<Arc<StyleValue>> = LazyLock::new(|| Arc::new(StyleValue::Unset));

impl StyleValue {
    /// A shared color value; transparent, black and white are interned.
    #[must_use]
    pub fn color(color: ColorValue) -> Arc<Self> {
        match color {
            ColorValue::TRANSPARENT => Arc::clone(&TRANSPARENT),
            ColorValue::BLACK => Arc::clone(&BLACK),
            ColorValue::WHITE => Arc::clone(&WHITE),
            _ => Arc::new(Self::Color(color)),
        }
    }

    /// A shared length value; `0px` and `1px` are interned.
    #[must_use]
    pub fn length(length: Length) -> Arc<Self> {
        if length.is_px() && length.value == 0.0 {
            Arc::clone(&ZERO_PX)
        } else if length.is_px() && length.value == 1.0 {
            Arc::clone(&ONE_PX)
        } else {
            Arc::new(Self::Length(length))
        }
    }

    /// The interned `inherit` keyword.
    #[must_use]
    pub fn inherit() -> Arc<Self> {
        Arc::clone(&INHERIT)
    }

    /// The interned `initial` keyword.
    #[must_use]
    pub fn initial() -> Arc<Self> {
        Arc::clone(&INITIAL)
    }

    /// The interned `unset` keyword.
    #[must_use]
    pub fn unset() -> Arc<Self> {
        Arc::clone(&UNSET)
    }

    /// A keyword, lowercased.
    #[must_use]
    pub fn identifier(keyword: &str) -> Arc<Self> {
        Arc::new(Self::Identifier(keyword.to_ascii_lowercase()))
    }

    /// Return this value with values of the same shape interned, so that
    /// deserialized snapshots share the canonical singletons.
    #[must_use]
    pub fn interned(self) -> Arc<Self> {
        match self {
            Self::Color(color) => Self::color(color),
            Self::Length(length) => Self::length(length),
            Self::Inherit => Self::inherit(),
            Self::Initial => Self::initial(),
            Self::Unset => Self::unset(),
            other => Arc::new(other),
        }
    }

    /// [§ 4.4 Computed Values](https://www.w3.org/TR/css-cascade-4/#computed)
    ///
    /// Convert every non-px length inside lengths, shadows and border radii
    /// to px. Returns `self` (the same `Arc`) when there is nothing to
    /// convert.
    #[must_use]
    pub fn absolutized(self: &Arc<Self>, context: &LengthContext) -> Arc<Self> {
        match self.as_ref() {
            Self::Length(length) if !length.is_px() => {
                Self::length(Length::px(length.to_px(context)))
            }
            Self::Shadow(shadow) => shadow
                .absolutized(context)
                .map_or_else(|| Arc::clone(self), |shadow| Arc::new(Self::Shadow(shadow))),
            Self::BorderRadius(radius) => radius.absolutized(context).map_or_else(
                || Arc::clone(self),
                |radius| Arc::new(Self::BorderRadius(radius)),
            ),
            _ => Arc::clone(self),
        }
    }

    /// The inner list, if this is a value list.
    #[must_use]
    pub const fn as_value_list(&self) -> Option<&StyleValueList> {
        match self {
            Self::ValueList(list) => Some(list),
            _ => None,
        }
    }
}

/// [CSSOM § 6.7.2 Serializing strings](https://www.w3.org/TR/cssom-1/#serialize-a-string)
///
/// "the string enclosed in double quotes", with `"` and `\` escaped.
fn write_string(f: &mut fmt::Formatter<'_>, text: &str) -> fmt::Result {
    f.write_str("\"")?;
    for ch in text.chars() {
        match ch {
            '"' | '\\' => write!(f, "\\{ch}")?,
            _ => write!(f, "{ch}")?,
        }
    }
    f.write_str("\"")
}

impl fmt::Display for StyleValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Angle(angle) => angle.fmt(f),
            Self::Background(background) => background.fmt(f),
            Self::Border(border) => border.fmt(f),
            Self::BorderRadius(radius) => radius.fmt(f),
            Self::Calculated(calculated) => calculated.fmt(f),
            Self::Color(color) => color.fmt(f),
            Self::ConicGradient(gradient) => gradient.fmt(f),
            Self::FilterValueList(filters) => filters.fmt(f),
            Self::Frequency(frequency) => frequency.fmt(f),
            Self::Identifier(keyword) => f.write_str(keyword),
            Self::Inherit => f.write_str("inherit"),
            Self::Initial => f.write_str("initial"),
            Self::Length(length) => length.fmt(f),
            Self::LinearGradient(gradient) => gradient.fmt(f),
            Self::ListStyle(list_style) => list_style.fmt(f),
            Self::Number(number) => number.fmt(f),
            Self::Percentage(percentage) => percentage.fmt(f),
            Self::RadialGradient(gradient) => gradient.fmt(f),
            Self::Shadow(shadow) => shadow.fmt(f),
            Self::String(text) => write_string(f, text),
            Self::Time(time) => time.fmt(f),
            Self::Transformation(transformation) => transformation.fmt(f),
            Self::Unset => f.write_str("unset"),
            Self::ValueList(list) => list.fmt(f),
        }
    }
}
