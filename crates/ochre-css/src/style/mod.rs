//! Style values, property identifiers, fonts and computed style snapshots

mod composite;
mod effects;
mod font;
mod gradient;
mod property;
mod snapshot;
mod value;

pub use composite::{
    BackgroundComponents, BackgroundStyleValue, BorderRadii, BorderRadiusStyleValue,
    BorderStyleValue,
    ColorStop, GradientDirection, LengthPercentage, LinearGradientStyleValue, ListStyleStyleValue,
    ShadowPlacement, ShadowStyleValue, SideOrCorner, StyleValueError, StyleValueList,
    ValueSeparator,
};
pub use effects::{
    ColorFilterOperation, FilterFunction, FilterValueListStyleValue, NumberPercentage,
    TransformFunction, TransformationParts, TransformationStyleValue,
};
pub use font::{ComputedFont, FontCache, FontDescription, FontStyle};
pub use gradient::{
    AxisPosition, ConicGradientStyleValue, EndingShape, HorizontalEdge, HorizontalPreset,
    PositionValue, RadialExtent, RadialGradientStyleValue, RadialSize, VerticalEdge,
    VerticalPreset,
};
pub use property::{
    BuiltinProperties, PROPERTY_COUNT, PROPERTY_TRAITS, PropertyClassification, PropertyId,
    PropertyTraits,
};
pub use snapshot::{SnapshotDocument, StyleSnapshot, StyleSnapshotBuilder};
pub use value::StyleValue;
