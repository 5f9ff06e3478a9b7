//! Radial and conic gradients
//!
//! [CSS Images Level 4](https://www.w3.org/TR/css-images-4/)

use std::fmt;

use serde::{Deserialize, Serialize};
use strum_macros::Display;

use super::composite::{ColorStop, LengthPercentage, write_color_stops};
use crate::values::{Angle, Length};

/// A horizontal `<position>` keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum HorizontalPreset {
    /// `left`
    Left,
    /// `center`
    Center,
    /// `right`
    Right,
}

/// A vertical `<position>` keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum VerticalPreset {
    /// `top`
    Top,
    /// `center`
    Center,
    /// `bottom`
    Bottom,
}

/// The edge a horizontal offset is measured from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum HorizontalEdge {
    /// `left`
    Left,
    /// `right`
    Right,
}

/// The edge a vertical offset is measured from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum VerticalEdge {
    /// `top`
    Top,
    /// `bottom`
    Bottom,
}

/// A keyword or an offset along one axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AxisPosition<P> {
    /// `left`, `center`, `top`, ...
    Preset(P),
    /// An explicit `<length-percentage>`.
    Offset(LengthPercentage),
}

impl<P: fmt::Display> fmt::Display for AxisPosition<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Preset(preset) => preset.fmt(f),
            Self::Offset(offset) => offset.fmt(f),
        }
    }
}

/// [§ 9.3 The `<position>` type](https://www.w3.org/TR/css-values-4/#position)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PositionValue {
    /// Horizontal component.
    pub horizontal: AxisPosition<HorizontalPreset>,
    /// Vertical component.
    pub vertical: AxisPosition<VerticalPreset>,
    /// The edge `horizontal` is measured from.
    pub x_relative_to: HorizontalEdge,
    /// The edge `vertical` is measured from.
    pub y_relative_to: VerticalEdge,
}

impl PositionValue {
    /// `center center`, the default gradient position.
    pub const CENTER: Self = Self {
        horizontal: AxisPosition::Preset(HorizontalPreset::Center),
        vertical: AxisPosition::Preset(VerticalPreset::Center),
        x_relative_to: HorizontalEdge::Left,
        y_relative_to: VerticalEdge::Top,
    };

    fn is_center(&self) -> bool {
        *self == Self::CENTER
    }
}

impl Default for PositionValue {
    fn default() -> Self {
        Self::CENTER
    }
}

impl fmt::Display for PositionValue {
    /// Edges are only written when an offset is measured from the right or
    /// bottom.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let has_relative_edges = self.x_relative_to == HorizontalEdge::Right
            || self.y_relative_to == VerticalEdge::Bottom;
        if has_relative_edges {
            write!(f, "{} ", self.x_relative_to)?;
        }
        write!(f, "{} ", self.horizontal)?;
        if has_relative_edges {
            write!(f, "{} ", self.y_relative_to)?;
        }
        write!(f, "{}", self.vertical)
    }
}

/// [§ 3.2.1 Radial Gradient Syntax](https://www.w3.org/TR/css-images-4/#radial-gradient-syntax)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum EndingShape {
    /// `circle`
    Circle,
    /// `ellipse`
    Ellipse,
}

/// `<radial-extent>`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum RadialExtent {
    /// `closest-corner`
    ClosestCorner,
    /// `closest-side`
    ClosestSide,
    /// `farthest-corner`
    FarthestCorner,
    /// `farthest-side`
    FarthestSide,
}

/// `<radial-size>`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RadialSize {
    /// A keyword extent.
    Extent(RadialExtent),
    /// A circle radius.
    Circle(Length),
    /// Horizontal and vertical ellipse radii.
    Ellipse(LengthPercentage, LengthPercentage),
}

impl fmt::Display for RadialSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Extent(extent) => extent.fmt(f),
            Self::Circle(radius) => radius.fmt(f),
            Self::Ellipse(horizontal, vertical) => write!(f, "{horizontal} {vertical}"),
        }
    }
}

/// [§ 3.2 Radial Gradients](https://www.w3.org/TR/css-images-4/#radial-gradients)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RadialGradientStyleValue {
    /// Circle or ellipse.
    pub ending_shape: EndingShape,
    /// How large the ending shape is.
    pub size: RadialSize,
    /// The gradient center.
    #[serde(default)]
    pub position: PositionValue,
    /// The color stops in order.
    pub color_stops: Vec<ColorStop>,
    /// `repeating-radial-gradient()`
    #[serde(default)]
    pub repeating: bool,
}

impl fmt::Display for RadialGradientStyleValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.repeating {
            f.write_str("repeating-")?;
        }
        write!(f, "radial-gradient({} {}", self.ending_shape, self.size)?;
        if !self.position.is_center() {
            write!(f, " at {}", self.position)?;
        }
        f.write_str(", ")?;
        write_color_stops(f, &self.color_stops)?;
        f.write_str(")")
    }
}

/// [§ 3.3 Conic Gradients](https://www.w3.org/TR/css-images-4/#conic-gradients)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConicGradientStyleValue {
    /// The starting angle of the gradient.
    pub from_angle: Angle,
    /// The gradient center.
    #[serde(default)]
    pub position: PositionValue,
    /// The color stops in order.
    pub color_stops: Vec<ColorStop>,
    /// `repeating-conic-gradient()`
    #[serde(default)]
    pub repeating: bool,
}

impl fmt::Display for ConicGradientStyleValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.repeating {
            f.write_str("repeating-")?;
        }
        f.write_str("conic-gradient(")?;
        let has_from_angle = self.from_angle.to_degrees() != 0.0;
        let has_position = !self.position.is_center();
        if has_from_angle {
            write!(f, "from {}", self.from_angle)?;
        }
        if has_position {
            if has_from_angle {
                f.write_str(" ")?;
            }
            write!(f, "at {}", self.position)?;
        }
        if has_from_angle || has_position {
            f.write_str(", ")?;
        }
        write_color_stops(f, &self.color_stops)?;
        f.write_str(")")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::values::{AngleUnit, ColorValue, Percentage};

    fn stops() -> Vec<ColorStop> {
        [ColorValue::WHITE, ColorValue::BLACK]
            .into_iter()
            .map(|color| ColorStop {
                color,
                position: None,
                second_position: None,
                transition_hint: None,
            })
            .collect()
    }

    #[test]
    fn test_position_serialization() {
        assert_eq!(PositionValue::CENTER.to_string(), "center center");
        let from_corner = PositionValue {
            horizontal: AxisPosition::Offset(LengthPercentage::Length(Length::px(10.0))),
            vertical: AxisPosition::Offset(LengthPercentage::Percentage(Percentage(20.0))),
            x_relative_to: HorizontalEdge::Right,
            y_relative_to: VerticalEdge::Top,
        };
        assert_eq!(from_corner.to_string(), "right 10px top 20%");
    }

    #[test]
    fn test_radial_gradient_serialization() {
        let gradient = RadialGradientStyleValue {
            ending_shape: EndingShape::Circle,
            size: RadialSize::Extent(RadialExtent::FarthestCorner),
            position: PositionValue::CENTER,
            color_stops: stops(),
            repeating: false,
        };
        assert_eq!(
            gradient.to_string(),
            "radial-gradient(circle farthest-corner, rgb(255, 255, 255), rgb(0, 0, 0))"
        );

        let offset = RadialGradientStyleValue {
            ending_shape: EndingShape::Ellipse,
            size: RadialSize::Ellipse(
                LengthPercentage::Length(Length::px(20.0)),
                LengthPercentage::Percentage(Percentage(40.0)),
            ),
            position: PositionValue {
                horizontal: AxisPosition::Preset(HorizontalPreset::Left),
                ..PositionValue::CENTER
            },
            color_stops: stops(),
            repeating: true,
        };
        assert_eq!(
            offset.to_string(),
            "repeating-radial-gradient(ellipse 20px 40% at left center, rgb(255, 255, 255), rgb(0, 0, 0))"
        );
        assert_ne!(gradient, offset);
    }

    #[test]
    fn test_conic_gradient_serialization() {
        let plain = ConicGradientStyleValue {
            from_angle: Angle::degrees(0.0),
            position: PositionValue::CENTER,
            color_stops: stops(),
            repeating: false,
        };
        assert_eq!(
            plain.to_string(),
            "conic-gradient(rgb(255, 255, 255), rgb(0, 0, 0))"
        );

        let turned = ConicGradientStyleValue {
            from_angle: Angle::new(0.25, AngleUnit::Turn),
            position: PositionValue {
                vertical: AxisPosition::Preset(VerticalPreset::Top),
                ..PositionValue::CENTER
            },
            ..plain
        };
        assert_eq!(
            turned.to_string(),
            "conic-gradient(from 0.25turn at center top, rgb(255, 255, 255), rgb(0, 0, 0))"
        );
    }

    #[test]
    fn test_gradient_json_defaults_to_center() {
        let json = r##"{
            "ending_shape": "circle",
            "size": { "circle": { "value": 5.0, "unit": "px" } },
            "color_stops": [ { "color": "#ff0000" }, { "color": "#0000ff" } ]
        }"##;
        let gradient: RadialGradientStyleValue = serde_json::from_str(json).unwrap();
        assert_eq!(gradient.position, PositionValue::CENTER);
        assert!(!gradient.repeating);
        assert_eq!(
            gradient.to_string(),
            "radial-gradient(circle 5px, rgb(255, 0, 0), rgb(0, 0, 255))"
        );
    }
}
