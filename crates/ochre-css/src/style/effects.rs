//! Transform functions and filter function lists
//!
//! - [CSS Transforms Level 2](https://www.w3.org/TR/css-transforms-2/)
//! - [Filter Effects Level 1](https://www.w3.org/TR/filter-effects-1/)

use std::fmt;
use std::ops::RangeInclusive;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

use super::composite::StyleValueError;
use super::value::StyleValue;
use crate::values::{Angle, ColorValue, Length, Number, Percentage};

/// [§ 12 Transform Functions](https://www.w3.org/TR/css-transforms-2/#transform-functions)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize)]
#[strum(serialize_all = "camelCase", ascii_case_insensitive)]
#[serde(rename_all = "camelCase")]
pub enum TransformFunction {
    /// `matrix(a, b, c, d, e, f)`
    Matrix,
    /// `matrix3d()` with 16 values
    Matrix3d,
    /// `translate(tx[, ty])`
    Translate,
    /// `translate3d(tx, ty, tz)`
    Translate3d,
    /// `translateX(tx)`
    TranslateX,
    /// `translateY(ty)`
    TranslateY,
    /// `translateZ(tz)`
    TranslateZ,
    /// `scale(sx[, sy])`
    Scale,
    /// `scale3d(sx, sy, sz)`
    Scale3d,
    /// `scaleX(sx)`
    ScaleX,
    /// `scaleY(sy)`
    ScaleY,
    /// `scaleZ(sz)`
    ScaleZ,
    /// `rotate(angle)`
    Rotate,
    /// `rotate3d(x, y, z, angle)`
    Rotate3d,
    /// `rotateX(angle)`
    RotateX,
    /// `rotateY(angle)`
    RotateY,
    /// `rotateZ(angle)`
    RotateZ,
    /// `skew(ax[, ay])`
    Skew,
    /// `skewX(ax)`
    SkewX,
    /// `skewY(ay)`
    SkewY,
    /// `perspective(d)`
    Perspective,
}

impl TransformFunction {
    /// How many arguments the function accepts.
    #[must_use]
    pub const fn argument_count(self) -> RangeInclusive<usize> {
        match self {
            Self::Matrix => 6..=6,
            Self::Matrix3d => 16..=16,
            Self::Translate | Self::Scale | Self::Skew => 1..=2,
            Self::Translate3d | Self::Scale3d => 3..=3,
            Self::Rotate3d => 4..=4,
            Self::TranslateX
            | Self::TranslateY
            | Self::TranslateZ
            | Self::ScaleX
            | Self::ScaleY
            | Self::ScaleZ
            | Self::Rotate
            | Self::RotateX
            | Self::RotateY
            | Self::RotateZ
            | Self::SkewX
            | Self::SkewY
            | Self::Perspective => 1..=1,
        }
    }
}

/// One transform function with its arguments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "TransformationParts", into = "TransformationParts")]
pub struct TransformationStyleValue {
    parts: TransformationParts,
}

/// The function and arguments of a [`TransformationStyleValue`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransformationParts {
    /// Which transform function.
    pub function: TransformFunction,
    /// Its arguments in order.
    pub values: Vec<Arc<StyleValue>>,
}

impl TransformationStyleValue {
    /// Build a transformation.
    ///
    /// # Errors
    ///
    /// [`StyleValueError::TransformArgumentCount`] when `function` does not
    /// take `values.len()` arguments.
    pub fn new(
        function: TransformFunction,
        values: Vec<Arc<StyleValue>>,
    ) -> Result<Self, StyleValueError> {
        if !function.argument_count().contains(&values.len()) {
            return Err(StyleValueError::TransformArgumentCount {
                function,
                count: values.len(),
            });
        }
        Ok(Self {
            parts: TransformationParts { function, values },
        })
    }

    /// The transform function.
    #[must_use]
    pub const fn function(&self) -> TransformFunction {
        self.parts.function
    }

    /// The arguments.
    #[must_use]
    pub fn values(&self) -> &[Arc<StyleValue>] {
        &self.parts.values
    }
}

impl TryFrom<TransformationParts> for TransformationStyleValue {
    type Error = StyleValueError;

    fn try_from(parts: TransformationParts) -> Result<Self, Self::Error> {
        Self::new(parts.function, parts.values)
    }
}

impl From<TransformationStyleValue> for TransformationParts {
    fn from(value: TransformationStyleValue) -> Self {
        value.parts
    }
}

impl fmt::Display for TransformationStyleValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.parts.function)?;
        for (index, value) in self.parts.values.iter().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{value}")?;
        }
        f.write_str(")")
    }
}

/// [§ 13.1 Filter Functions](https://www.w3.org/TR/filter-effects-1/#filter-functions)
///
/// The functions that take a single `<number> | <percentage>` amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ColorFilterOperation {
    /// `brightness()`
    Brightness,
    /// `contrast()`
    Contrast,
    /// `grayscale()`
    Grayscale,
    /// `invert()`
    Invert,
    /// `opacity()`
    Opacity,
    /// `saturate()`
    Saturate,
    /// `sepia()`
    Sepia,
}

/// `<number> | <percentage>`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NumberPercentage {
    /// `<number>`
    Number(Number),
    /// `<percentage>`
    Percentage(Percentage),
}

impl NumberPercentage {
    /// The amount as a plain multiplier: `50%` and `0.5` are both `0.5`.
    #[must_use]
    pub fn as_fraction(self) -> f64 {
        match self {
            Self::Number(number) => number.value(),
            Self::Percentage(percentage) => percentage.of(1.0),
        }
    }
}

impl fmt::Display for NumberPercentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(number) => number.fmt(f),
            Self::Percentage(percentage) => percentage.fmt(f),
        }
    }
}

/// One `<filter-function>`. Omitted arguments keep their defaults.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "function", rename_all = "kebab-case")]
pub enum FilterFunction {
    /// `blur([<length>])`
    Blur {
        /// Standard deviation of the blur.
        radius: Option<Length>,
    },
    /// `drop-shadow(<length>{2} [<length>] [<color>])`
    DropShadow {
        /// Horizontal offset.
        offset_x: Length,
        /// Vertical offset.
        offset_y: Length,
        /// Blur radius.
        radius: Option<Length>,
        /// Shadow color; `currentcolor` when omitted.
        color: Option<ColorValue>,
    },
    /// `hue-rotate([<angle>])`
    HueRotate {
        /// Rotation around the color circle.
        angle: Option<Angle>,
    },
    /// `brightness()`, `contrast()` and the other amount functions.
    Color {
        /// Which function.
        operation: ColorFilterOperation,
        /// The amount.
        amount: Option<NumberPercentage>,
    },
}

impl FilterFunction {
    /// [§ 13.1](https://www.w3.org/TR/filter-effects-1/#funcdef-filter-brightness)
    ///
    /// "The initial value for interpolation is 1." Only amount functions
    /// have one.
    #[must_use]
    pub fn resolved_amount(&self) -> Option<f64> {
        match self {
            Self::Color { amount, .. } => Some(amount.map_or(1.0, NumberPercentage::as_fraction)),
            _ => None,
        }
    }

    /// The hue rotation in degrees, `0` when omitted. Only `hue-rotate()`
    /// has one.
    #[must_use]
    pub fn hue_rotation_degrees(&self) -> Option<f64> {
        match self {
            Self::HueRotate { angle } => Some(angle.map_or(0.0, |angle| angle.to_degrees())),
            _ => None,
        }
    }
}

impl fmt::Display for FilterFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Blur { radius } => {
                f.write_str("blur(")?;
                if let Some(radius) = radius {
                    write!(f, "{radius}")?;
                }
            }
            Self::DropShadow {
                offset_x,
                offset_y,
                radius,
                color,
            } => {
                write!(f, "drop-shadow({offset_x} {offset_y}")?;
                if let Some(radius) = radius {
                    write!(f, " {radius}")?;
                }
                if let Some(color) = color {
                    write!(f, " {color}")?;
                }
            }
            Self::HueRotate { angle } => {
                f.write_str("hue-rotate(")?;
                if let Some(angle) = angle {
                    write!(f, "{angle}")?;
                }
            }
            Self::Color { operation, amount } => {
                write!(f, "{operation}(")?;
                if let Some(amount) = amount {
                    write!(f, "{amount}")?;
                }
            }
        }
        f.write_str(")")
    }
}

/// [§ 5 The `filter` property](https://www.w3.org/TR/filter-effects-1/#FilterProperty)
///
/// "`<filter-value-list>` = [ `<filter-function>` | `<url>` ]+"
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterValueListStyleValue(pub Vec<FilterFunction>);

impl FilterValueListStyleValue {
    /// The filter functions in order.
    #[must_use]
    pub fn functions(&self) -> &[FilterFunction] {
        &self.0
    }
}

impl fmt::Display for FilterValueListStyleValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, function) in self.0.iter().enumerate() {
            if index > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{function}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::values::{AngleUnit, LengthUnit};

    fn length(value: f64) -> Arc<StyleValue> {
        StyleValue::length(Length::px(value))
    }

    #[test]
    fn test_transformation_serialization() {
        let translate =
            TransformationStyleValue::new(TransformFunction::TranslateX, vec![length(10.0)])
                .unwrap();
        assert_eq!(translate.to_string(), "translateX(10px)");

        let scale = TransformationStyleValue::new(
            TransformFunction::Scale,
            vec![
                Arc::new(StyleValue::Number(Number::new(1.5))),
                Arc::new(StyleValue::Number(Number::integer(2))),
            ],
        )
        .unwrap();
        assert_eq!(scale.to_string(), "scale(1.5, 2)");
        assert_eq!(scale.function(), TransformFunction::Scale);
        assert_eq!(scale.values().len(), 2);
        assert_eq!(
            "MATRIX3D".parse::<TransformFunction>(),
            Ok(TransformFunction::Matrix3d)
        );
    }

    #[test]
    fn test_transformation_argument_count() {
        assert_eq!(
            TransformationStyleValue::new(TransformFunction::Rotate, vec![]),
            Err(StyleValueError::TransformArgumentCount {
                function: TransformFunction::Rotate,
                count: 0,
            })
        );
        let json = r#"{ "function": "translate3d", "values": [] }"#;
        assert!(serde_json::from_str::<TransformationStyleValue>(json).is_err());
    }

    #[test]
    fn test_transformation_equality_compares_arguments() {
        let a = TransformationStyleValue::new(TransformFunction::TranslateY, vec![length(1.0)]);
        let b = TransformationStyleValue::new(TransformFunction::TranslateY, vec![length(1.0)]);
        let c = TransformationStyleValue::new(TransformFunction::TranslateX, vec![length(1.0)]);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_filter_list_serialization() {
        let filters = FilterValueListStyleValue(vec![
            FilterFunction::Blur {
                radius: Some(Length::px(2.0)),
            },
            FilterFunction::DropShadow {
                offset_x: Length::px(1.0),
                offset_y: Length::new(2.0, LengthUnit::Em),
                radius: None,
                color: Some(ColorValue::BLACK),
            },
            FilterFunction::HueRotate {
                angle: Some(Angle::new(0.5, AngleUnit::Turn)),
            },
            FilterFunction::Color {
                operation: ColorFilterOperation::Grayscale,
                amount: Some(NumberPercentage::Percentage(Percentage(50.0))),
            },
            FilterFunction::Color {
                operation: ColorFilterOperation::Invert,
                amount: None,
            },
        ]);
        assert_eq!(
            filters.to_string(),
            "blur(2px) drop-shadow(1px 2em rgb(0, 0, 0)) hue-rotate(0.5turn) grayscale(50%) invert()"
        );
        assert_eq!(filters.functions().len(), 5);
    }

    #[test]
    fn test_filter_defaults() {
        let invert = FilterFunction::Color {
            operation: ColorFilterOperation::Invert,
            amount: None,
        };
        assert_eq!(invert.resolved_amount(), Some(1.0));
        let sepia = FilterFunction::Color {
            operation: ColorFilterOperation::Sepia,
            amount: Some(NumberPercentage::Percentage(Percentage(25.0))),
        };
        assert_eq!(sepia.resolved_amount(), Some(0.25));
        assert_eq!(
            FilterFunction::HueRotate { angle: None }.hue_rotation_degrees(),
            Some(0.0)
        );
        assert_eq!(FilterFunction::Blur { radius: None }.resolved_amount(), None);
    }

    #[test]
    fn test_filter_json_round_trip() {
        let json = r#"[
            { "function": "blur" },
            { "function": "color", "operation": "contrast", "amount": { "number": { "value": 2.0, "is_integer": true } } }
        ]"#;
        let filters: FilterValueListStyleValue = serde_json::from_str(json).unwrap();
        assert_eq!(filters.to_string(), "blur() contrast(2)");
        let back: FilterValueListStyleValue =
            serde_json::from_value(serde_json::to_value(&filters).unwrap()).unwrap();
        assert_eq!(back, filters);
    }
}
