//! Property identifiers and the per-property invalidation table
//!
//! [§ 4.1 Property definitions](https://www.w3.org/TR/css-cascade-4/#property)

use serde::{Deserialize, Serialize};
use strum::{EnumCount, VariantArray};
use strum_macros::{
    Display, EnumCount as EnumCountMacro, EnumString, VariantArray as VariantArrayMacro,
};

/// Every longhand property a computed style snapshot stores.
///
/// The discriminant is the snapshot slot index.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Display,
    EnumString,
    EnumCountMacro,
    VariantArrayMacro,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum PropertyId {
    /// `background-attachment`
    BackgroundAttachment,
    /// `background-clip`
    BackgroundClip,
    /// `background-color`
    BackgroundColor,
    /// `background-image`
    BackgroundImage,
    /// `background-origin`
    BackgroundOrigin,
    /// `background-position`
    BackgroundPosition,
    /// `background-repeat`
    BackgroundRepeat,
    /// `background-size`
    BackgroundSize,
    /// `border-bottom-color`
    BorderBottomColor,
    /// `border-bottom-left-radius`
    BorderBottomLeftRadius,
    /// `border-bottom-right-radius`
    BorderBottomRightRadius,
    /// `border-bottom-style`
    BorderBottomStyle,
    /// `border-bottom-width`
    BorderBottomWidth,
    /// `border-left-color`
    BorderLeftColor,
    /// `border-left-style`
    BorderLeftStyle,
    /// `border-left-width`
    BorderLeftWidth,
    /// `border-right-color`
    BorderRightColor,
    /// `border-right-style`
    BorderRightStyle,
    /// `border-right-width`
    BorderRightWidth,
    /// `border-top-color`
    BorderTopColor,
    /// `border-top-left-radius`
    BorderTopLeftRadius,
    /// `border-top-right-radius`
    BorderTopRightRadius,
    /// `border-top-style`
    BorderTopStyle,
    /// `border-top-width`
    BorderTopWidth,
    /// `bottom`
    Bottom,
    /// `box-shadow`
    BoxShadow,
    /// `box-sizing`
    BoxSizing,
    /// `clear`
    Clear,
    /// `color`
    Color,
    /// `cursor`
    Cursor,
    /// `display`
    Display,
    /// `filter`
    Filter,
    /// `flex-basis`
    FlexBasis,
    /// `flex-direction`
    FlexDirection,
    /// `flex-grow`
    FlexGrow,
    /// `flex-shrink`
    FlexShrink,
    /// `flex-wrap`
    FlexWrap,
    /// `float`
    Float,
    /// `font-family`
    FontFamily,
    /// `font-size`
    FontSize,
    /// `font-style`
    FontStyle,
    /// `font-weight`
    FontWeight,
    /// `height`
    Height,
    /// `left`
    Left,
    /// `letter-spacing`
    LetterSpacing,
    /// `line-height`
    LineHeight,
    /// `list-style-image`
    ListStyleImage,
    /// `list-style-position`
    ListStylePosition,
    /// `list-style-type`
    ListStyleType,
    /// `margin-bottom`
    MarginBottom,
    /// `margin-left`
    MarginLeft,
    /// `margin-right`
    MarginRight,
    /// `margin-top`
    MarginTop,
    /// `max-height`
    MaxHeight,
    /// `max-width`
    MaxWidth,
    /// `min-height`
    MinHeight,
    /// `min-width`
    MinWidth,
    /// `opacity`
    Opacity,
    /// `outline-color`
    OutlineColor,
    /// `outline-style`
    OutlineStyle,
    /// `outline-width`
    OutlineWidth,
    /// `overflow-x`
    OverflowX,
    /// `overflow-y`
    OverflowY,
    /// `padding-bottom`
    PaddingBottom,
    /// `padding-left`
    PaddingLeft,
    /// `padding-right`
    PaddingRight,
    /// `padding-top`
    PaddingTop,
    /// `position`
    Position,
    /// `right`
    Right,
    /// `text-align`
    TextAlign,
    /// `text-decoration-color`
    TextDecorationColor,
    /// `text-decoration-line`
    TextDecorationLine,
    /// `text-decoration-style`
    TextDecorationStyle,
    /// `text-shadow`
    TextShadow,
    /// `top`
    Top,
    /// `transform`
    Transform,
    /// `transition-duration`
    TransitionDuration,
    /// `vertical-align`
    VerticalAlign,
    /// `visibility`
    Visibility,
    /// `white-space`
    WhiteSpace,
    /// `width`
    Width,
    /// `word-spacing`
    WordSpacing,
    /// `z-index`
    ZIndex,
}

/// Number of property slots in a snapshot.
pub const PROPERTY_COUNT: usize = PropertyId::COUNT;

impl PropertyId {
    /// Every property, in slot order.
    pub const ALL: &'static [Self] = Self::VARIANTS;

    /// The snapshot slot of this property.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// What changing a property's computed value invalidates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct PropertyTraits {
    /// A change needs the box tree laid out again.
    pub affects_layout: bool,
    /// A change can create, remove or reorder stacking contexts.
    pub affects_stacking_context: bool,
}

impl PropertyTraits {
    /// Neither layout nor stacking: a repaint is enough.
    pub const PAINT: Self = Self {
        affects_layout: false,
        affects_stacking_context: false,
    };

    /// Geometry changes.
    pub const LAYOUT: Self = Self {
        affects_layout: true,
        affects_stacking_context: false,
    };

    /// Stacking changes without geometry changes.
    pub const STACKING: Self = Self {
        affects_layout: false,
        affects_stacking_context: true,
    };
}

/// Properties that change geometry. Everything not listed here or in
/// [`STACKING_PROPERTIES`] only needs a repaint.
const LAYOUT_PROPERTIES: &[PropertyId] = &[
    PropertyId::BorderBottomStyle,
    PropertyId::BorderBottomWidth,
    PropertyId::BorderLeftStyle,
    PropertyId::BorderLeftWidth,
    PropertyId::BorderRightStyle,
    PropertyId::BorderRightWidth,
    PropertyId::BorderTopStyle,
    PropertyId::BorderTopWidth,
    PropertyId::Bottom,
    PropertyId::BoxSizing,
    PropertyId::Clear,
    PropertyId::Display,
    PropertyId::FlexBasis,
    PropertyId::FlexDirection,
    PropertyId::FlexGrow,
    PropertyId::FlexShrink,
    PropertyId::FlexWrap,
    PropertyId::Float,
    PropertyId::FontFamily,
    PropertyId::FontSize,
    PropertyId::FontStyle,
    PropertyId::FontWeight,
    PropertyId::Height,
    PropertyId::Left,
    PropertyId::LetterSpacing,
    PropertyId::LineHeight,
    PropertyId::ListStyleImage,
    PropertyId::ListStylePosition,
    PropertyId::ListStyleType,
    PropertyId::MarginBottom,
    PropertyId::MarginLeft,
    PropertyId::MarginRight,
    PropertyId::MarginTop,
    PropertyId::MaxHeight,
    PropertyId::MaxWidth,
    PropertyId::MinHeight,
    PropertyId::MinWidth,
    PropertyId::OverflowX,
    PropertyId::OverflowY,
    PropertyId::PaddingBottom,
    PropertyId::PaddingLeft,
    PropertyId::PaddingRight,
    PropertyId::PaddingTop,
    PropertyId::Position,
    PropertyId::Right,
    PropertyId::TextAlign,
    PropertyId::Top,
    PropertyId::VerticalAlign,
    PropertyId::WhiteSpace,
    PropertyId::Width,
    PropertyId::WordSpacing,
];

/// [CSS 2.1 Appendix E](https://www.w3.org/TR/CSS2/zindex.html)
///
/// Properties that can establish or reorder stacking contexts without
/// moving any box.
const STACKING_PROPERTIES: &[PropertyId] = &[
    PropertyId::Filter,
    PropertyId::Opacity,
    PropertyId::Transform,
    PropertyId::ZIndex,
];

/// Build the table from the two lists above.
const fn build_property_traits() -> [PropertyTraits; PROPERTY_COUNT] {
    let mut table = [PropertyTraits::PAINT; PROPERTY_COUNT];
    let mut i = 0;
    while i < LAYOUT_PROPERTIES.len() {
        table[LAYOUT_PROPERTIES[i].index()] = PropertyTraits::LAYOUT;
        i += 1;
    }
    let mut i = 0;
    while i < STACKING_PROPERTIES.len() {
        table[STACKING_PROPERTIES[i].index()] = PropertyTraits::STACKING;
        i += 1;
    }
    table
}

/// The built-in invalidation traits, indexed by [`PropertyId::index`].
pub const PROPERTY_TRAITS: [PropertyTraits; PROPERTY_COUNT] = build_property_traits();

/// Source of per-property invalidation traits for the style diff.
pub trait PropertyClassification {
    /// The traits of `property`.
    fn traits(&self, property: PropertyId) -> PropertyTraits;

    /// Whether changing `property` needs relayout.
    fn affects_layout(&self, property: PropertyId) -> bool {
        self.traits(property).affects_layout
    }

    /// Whether changing `property` needs the stacking context tree rebuilt.
    fn affects_stacking_context(&self, property: PropertyId) -> bool {
        self.traits(property).affects_stacking_context
    }
}

/// The built-in classification backed by [`PROPERTY_TRAITS`].
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinProperties;

impl PropertyClassification for BuiltinProperties {
    fn traits(&self, property: PropertyId) -> PropertyTraits {
        PROPERTY_TRAITS[property.index()]
    }
}

impl PropertyClassification for [PropertyTraits; PROPERTY_COUNT] {
    fn traits(&self, property: PropertyId) -> PropertyTraits {
        self[property.index()]
    }
}
