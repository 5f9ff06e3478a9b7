//! Shorthand and list style values
//!
//! Components are shared `Arc<StyleValue>`s, so cloning a composite value
//! never copies its parts.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use strum_macros::Display;
use thiserror::Error;

use super::effects::TransformFunction;
use super::value::StyleValue;
use crate::values::{Angle, ColorValue, Length, LengthContext, Percentage};

/// A composite value that cannot be built from the given components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StyleValueError {
    /// [§ 3.10 Backgrounds Shorthand](https://www.w3.org/TR/css-backgrounds-3/#background)
    ///
    /// "`<final-bg-layer>` ... only the final layer may have a color."
    #[error("background-color cannot be a list of values")]
    LayeredBackgroundColor,
    /// [§ 12 Transform Functions](https://www.w3.org/TR/css-transforms-2/#transform-functions)
    #[error("{function}() does not take {count} arguments")]
    TransformArgumentCount {
        /// The transform function.
        function: TransformFunction,
        /// How many arguments were given.
        count: usize,
    },
}

/// Convert `length` to px unless it already is.
fn absolutized_length(length: Length, context: &LengthContext) -> Option<Length> {
    (!length.is_px()).then(|| Length::px(length.to_px(context)))
}

/// `<length-percentage>`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LengthPercentage {
    /// `<length>`
    Length(Length),
    /// `<percentage>`
    Percentage(Percentage),
}

impl LengthPercentage {
    fn absolutized(self, context: &LengthContext) -> Option<Self> {
        match self {
            Self::Length(length) => absolutized_length(length, context).map(Self::Length),
            Self::Percentage(_) => None,
        }
    }
}

impl fmt::Display for LengthPercentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Length(length) => length.fmt(f),
            Self::Percentage(percentage) => percentage.fmt(f),
        }
    }
}

/// How the items of a [`StyleValueList`] are joined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueSeparator {
    /// `a b c`
    Space,
    /// `a, b, c`
    Comma,
}

/// A list of values, such as one background longhand across several layers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StyleValueList {
    values: Vec<Arc<StyleValue>>,
    separator: ValueSeparator,
}

impl StyleValueList {
    /// Build a list.
    #[must_use]
    pub const fn new(values: Vec<Arc<StyleValue>>, separator: ValueSeparator) -> Self {
        Self { values, separator }
    }

    /// The items in order.
    #[must_use]
    pub fn values(&self) -> &[Arc<StyleValue>] {
        &self.values
    }

    /// The separator used when serializing.
    #[must_use]
    pub const fn separator(&self) -> ValueSeparator {
        self.separator
    }

    /// Number of items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the list has no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// [§ 2.2 Layering Multiple Background Images](https://www.w3.org/TR/css-backgrounds-3/#layering)
    ///
    /// "If a property doesn't have enough comma-separated values to match the
    /// number of layers, the UA must calculate its used value by repeating
    /// the list of values until there are enough."
    ///
    /// With `allow_loop`, `index` wraps around the list.
    #[must_use]
    pub fn value_at(&self, index: usize, allow_loop: bool) -> Option<&Arc<StyleValue>> {
        if allow_loop && !self.values.is_empty() {
            self.values.get(index % self.values.len())
        } else {
            self.values.get(index)
        }
    }
}

impl fmt::Display for StyleValueList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let separator = match self.separator {
            ValueSeparator::Space => " ",
            ValueSeparator::Comma => ", ",
        };
        for (index, value) in self.values.iter().enumerate() {
            if index > 0 {
                f.write_str(separator)?;
            }
            write!(f, "{value}")?;
        }
        Ok(())
    }
}

/// The longhands of the `background` shorthand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BackgroundComponents {
    /// `background-color`; never a list.
    pub color: Arc<StyleValue>,
    /// `background-image`
    pub image: Arc<StyleValue>,
    /// `background-position`
    pub position: Arc<StyleValue>,
    /// `background-size`
    pub size: Arc<StyleValue>,
    /// `background-repeat`
    pub repeat: Arc<StyleValue>,
    /// `background-attachment`
    pub attachment: Arc<StyleValue>,
    /// `background-origin`
    pub origin: Arc<StyleValue>,
    /// `background-clip`
    pub clip: Arc<StyleValue>,
}

impl BackgroundComponents {
    /// The layered longhands, in serialization order.
    fn layered(&self) -> [&Arc<StyleValue>; 7] {
        [
            &self.image,
            &self.position,
            &self.size,
            &self.repeat,
            &self.attachment,
            &self.origin,
            &self.clip,
        ]
    }
}

/// [§ 3.10 Backgrounds Shorthand](https://www.w3.org/TR/css-backgrounds-3/#background)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "BackgroundComponents", into = "BackgroundComponents")]
pub struct BackgroundStyleValue {
    components: BackgroundComponents,
    layer_count: usize,
}

impl BackgroundStyleValue {
    /// Build the shorthand. The layer count is the longest longhand list.
    ///
    /// # Errors
    ///
    /// [`StyleValueError::LayeredBackgroundColor`] if the color is a list.
    pub fn new(components: BackgroundComponents) -> Result<Self, StyleValueError> {
        if components.color.as_value_list().is_some() {
            return Err(StyleValueError::LayeredBackgroundColor);
        }
        let layer_count = components
            .layered()
            .iter()
            .map(|value| value.as_value_list().map_or(1, StyleValueList::len))
            .max()
            .unwrap_or(1)
            .max(1);
        Ok(Self {
            components,
            layer_count,
        })
    }

    /// The longhands.
    #[must_use]
    pub const fn components(&self) -> &BackgroundComponents {
        &self.components
    }

    /// Number of background layers.
    #[must_use]
    pub const fn layer_count(&self) -> usize {
        self.layer_count
    }
}

impl TryFrom<BackgroundComponents> for BackgroundStyleValue {
    type Error = StyleValueError;

    fn try_from(components: BackgroundComponents) -> Result<Self, Self::Error> {
        Self::new(components)
    }
}

impl From<BackgroundStyleValue> for BackgroundComponents {
    fn from(background: BackgroundStyleValue) -> Self {
        background.components
    }
}

impl fmt::Display for BackgroundStyleValue {
    /// Layers are comma-separated; the color belongs to the final layer.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let components = &self.components;
        if self.layer_count == 1 {
            write!(f, "{}", components.color)?;
            for value in components.layered() {
                write!(f, " {value}")?;
            }
            return Ok(());
        }

        for layer in 0..self.layer_count {
            if layer > 0 {
                f.write_str(", ")?;
            }
            if layer == self.layer_count - 1 {
                write!(f, "{} ", components.color)?;
            }
            for (index, value) in components.layered().into_iter().enumerate() {
                if index > 0 {
                    f.write_str(" ")?;
                }
                match value.as_value_list() {
                    Some(list) => match list.value_at(layer, true) {
                        Some(item) => write!(f, "{item}")?,
                        None => write!(f, "{value}")?,
                    },
                    None => write!(f, "{value}")?,
                }
            }
        }
        Ok(())
    }
}

/// [§ 4.4 Border Shorthand Properties](https://www.w3.org/TR/css-backgrounds-3/#border-shorthands)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BorderStyleValue {
    /// `border-width`
    pub width: Arc<StyleValue>,
    /// `border-style`
    pub style: Arc<StyleValue>,
    /// `border-color`
    pub color: Arc<StyleValue>,
}

impl fmt::Display for BorderStyleValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.width, self.style, self.color)
    }
}

/// [§ 5.1 Curve Radii](https://www.w3.org/TR/css-backgrounds-3/#border-radius)
///
/// "The two length or percentage values of the 'border-*-radius' properties
/// define the radii of a quarter ellipse that defines the shape of the corner
/// of the outer border edge."
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "BorderRadii", into = "BorderRadii")]
pub struct BorderRadiusStyleValue {
    horizontal: LengthPercentage,
    vertical: LengthPercentage,
    is_elliptical: bool,
}

/// The two radii of one corner, as exchanged in JSON.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BorderRadii {
    /// The horizontal radius.
    pub horizontal: LengthPercentage,
    /// The vertical radius.
    pub vertical: LengthPercentage,
}

impl From<BorderRadii> for BorderRadiusStyleValue {
    fn from(radii: BorderRadii) -> Self {
        Self::new(radii.horizontal, radii.vertical)
    }
}

impl From<BorderRadiusStyleValue> for BorderRadii {
    fn from(radius: BorderRadiusStyleValue) -> Self {
        Self {
            horizontal: radius.horizontal,
            vertical: radius.vertical,
        }
    }
}

impl BorderRadiusStyleValue {
    /// A corner with independent radii.
    #[must_use]
    pub fn new(horizontal: LengthPercentage, vertical: LengthPercentage) -> Self {
        Self {
            horizontal,
            vertical,
            is_elliptical: horizontal != vertical,
        }
    }

    /// A circular corner.
    #[must_use]
    pub const fn circular(radius: LengthPercentage) -> Self {
        Self {
            horizontal: radius,
            vertical: radius,
            is_elliptical: false,
        }
    }

    /// The horizontal radius.
    #[must_use]
    pub const fn horizontal(&self) -> LengthPercentage {
        self.horizontal
    }

    /// The vertical radius.
    #[must_use]
    pub const fn vertical(&self) -> LengthPercentage {
        self.vertical
    }

    /// Whether the radii differ.
    #[must_use]
    pub const fn is_elliptical(&self) -> bool {
        self.is_elliptical
    }

    pub(super) fn absolutized(&self, context: &LengthContext) -> Option<Self> {
        let horizontal = self.horizontal.absolutized(context);
        let vertical = self.vertical.absolutized(context);
        if horizontal.is_none() && vertical.is_none() {
            return None;
        }
        Some(Self::new(
            horizontal.unwrap_or(self.horizontal),
            vertical.unwrap_or(self.vertical),
        ))
    }
}

impl fmt::Display for BorderRadiusStyleValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.horizontal == self.vertical {
            write!(f, "{}", self.horizontal)
        } else {
            write!(f, "{} / {}", self.horizontal, self.vertical)
        }
    }
}

/// Whether a shadow is cast outside the box or inset into it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShadowPlacement {
    /// The default drop shadow.
    Outer,
    /// `inset`
    Inner,
}

/// [§ 7.1 Drop Shadows](https://www.w3.org/TR/css-backgrounds-3/#box-shadow)
///
/// "Each shadow is given as a `<shadow>`, represented by 2-4 length values,
/// an optional color, and an optional inset keyword."
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShadowStyleValue {
    /// Shadow color.
    pub color: ColorValue,
    /// Horizontal offset.
    pub offset_x: Length,
    /// Vertical offset.
    pub offset_y: Length,
    /// Blur radius.
    pub blur_radius: Length,
    /// Spread distance.
    pub spread_distance: Length,
    /// Outer or inset.
    pub placement: ShadowPlacement,
}

impl ShadowStyleValue {
    pub(super) fn absolutized(&self, context: &LengthContext) -> Option<Self> {
        let lengths = [
            self.offset_x,
            self.offset_y,
            self.blur_radius,
            self.spread_distance,
        ];
        if lengths.iter().all(Length::is_px) {
            return None;
        }
        let [offset_x, offset_y, blur_radius, spread_distance] =
            lengths.map(|length| absolutized_length(length, context).unwrap_or(length));
        Some(Self {
            offset_x,
            offset_y,
            blur_radius,
            spread_distance,
            ..*self
        })
    }
}

impl fmt::Display for ShadowStyleValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {} {}",
            self.color, self.offset_x, self.offset_y, self.blur_radius, self.spread_distance
        )?;
        if self.placement == ShadowPlacement::Inner {
            f.write_str(" inset")?;
        }
        Ok(())
    }
}

/// `<side-or-corner>`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SideOrCorner {
    /// `top`
    #[strum(to_string = "top")]
    Top,
    /// `bottom`
    #[strum(to_string = "bottom")]
    Bottom,
    /// `left`
    #[strum(to_string = "left")]
    Left,
    /// `right`
    #[strum(to_string = "right")]
    Right,
    /// `top left`
    #[strum(to_string = "top left")]
    TopLeft,
    /// `top right`
    #[strum(to_string = "top right")]
    TopRight,
    /// `bottom left`
    #[strum(to_string = "bottom left")]
    BottomLeft,
    /// `bottom right`
    #[strum(to_string = "bottom right")]
    BottomRight,
}

/// The direction of a linear gradient line.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GradientDirection {
    /// An explicit `<angle>`.
    Angle(Angle),
    /// `to <side-or-corner>`
    SideOrCorner(SideOrCorner),
}

/// [§ 3.4 Color Stop Lists](https://www.w3.org/TR/css-images-3/#color-stop-syntax)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColorStop {
    /// The stop color.
    pub color: ColorValue,
    /// Where the stop starts.
    #[serde(default)]
    pub position: Option<LengthPercentage>,
    /// Where a two-position stop ends.
    #[serde(default)]
    pub second_position: Option<LengthPercentage>,
    /// A `<linear-color-hint>` placed before this stop.
    #[serde(default)]
    pub transition_hint: Option<LengthPercentage>,
}

impl fmt::Display for ColorStop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(hint) = self.transition_hint {
            write!(f, "{hint}, ")?;
        }
        write!(f, "{}", self.color)?;
        for position in [self.position, self.second_position].into_iter().flatten() {
            write!(f, " {position}")?;
        }
        Ok(())
    }
}

/// [§ 3.1 Linear Gradients](https://www.w3.org/TR/css-images-3/#linear-gradients)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinearGradientStyleValue {
    /// The gradient line direction.
    pub direction: GradientDirection,
    /// The color stops in order.
    pub color_stops: Vec<ColorStop>,
    /// `repeating-linear-gradient()`
    #[serde(default)]
    pub repeating: bool,
}

impl fmt::Display for LinearGradientStyleValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.repeating {
            f.write_str("repeating-")?;
        }
        f.write_str("linear-gradient(")?;
        match self.direction {
            GradientDirection::Angle(angle) => write!(f, "{angle}, ")?,
            GradientDirection::SideOrCorner(side) => write!(f, "to {side}, ")?,
        }
        write_color_stops(f, &self.color_stops)?;
        f.write_str(")")
    }
}

/// [§ 3.4 Color Stop Lists](https://www.w3.org/TR/css-images-3/#color-stop-syntax)
pub(super) fn write_color_stops(f: &mut fmt::Formatter<'_>, stops: &[ColorStop]) -> fmt::Result {
    for (index, stop) in stops.iter().enumerate() {
        if index > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{stop}")?;
    }
    Ok(())
}

/// [§ 3 Markers: the `list-style` shorthand](https://www.w3.org/TR/css-lists-3/#list-style-property)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListStyleStyleValue {
    /// `list-style-position`
    pub position: Arc<StyleValue>,
    /// `list-style-image`
    pub image: Arc<StyleValue>,
    /// `list-style-type`
    pub style_type: Arc<StyleValue>,
}

impl fmt::Display for ListStyleStyleValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.position, self.image, self.style_type)
    }
}
