//! Computed style snapshots
//!
//! One snapshot holds every computed property of one element at one point in
//! time. Slots are indexed by [`PropertyId`], so two snapshots always cover
//! the same property space.

use std::collections::BTreeMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::font::{ComputedFont, FontCache, FontDescription};
use super::property::{PROPERTY_COUNT, PropertyId};
use super::value::StyleValue;

/// The computed style of one element. Immutable; build it with
/// [`StyleSnapshot::builder`].
#[derive(Debug, Clone)]
pub struct StyleSnapshot {
    properties: [Option<Arc<StyleValue>>; PROPERTY_COUNT],
    font: Arc<ComputedFont>,
}

impl StyleSnapshot {
    /// Start building a snapshot that uses `font`.
    #[must_use]
    pub fn builder(font: Arc<ComputedFont>) -> StyleSnapshotBuilder {
        StyleSnapshotBuilder {
            properties: [const { None }; PROPERTY_COUNT],
            font,
        }
    }

    /// The value of `property`, if it was computed.
    #[must_use]
    pub fn property(&self, property: PropertyId) -> Option<&Arc<StyleValue>> {
        self.properties[property.index()].as_ref()
    }

    /// The resolved font.
    #[must_use]
    pub const fn font(&self) -> &Arc<ComputedFont> {
        &self.font
    }

    /// Every computed property, in slot order.
    pub fn iter(&self) -> impl Iterator<Item = (PropertyId, &Arc<StyleValue>)> {
        PropertyId::ALL
            .iter()
            .zip(&self.properties)
            .filter_map(|(&property, value)| value.as_ref().map(|value| (property, value)))
    }
}

/// Collects property values before freezing them into a [`StyleSnapshot`].
#[derive(Debug, Clone)]
pub struct StyleSnapshotBuilder {
    properties: [Option<Arc<StyleValue>>; PROPERTY_COUNT],
    font: Arc<ComputedFont>,
}

impl StyleSnapshotBuilder {
    /// Set `property`, replacing any earlier value.
    #[must_use]
    pub fn set(mut self, property: PropertyId, value: Arc<StyleValue>) -> Self {
        self.properties[property.index()] = Some(value);
        self
    }

    /// Freeze the snapshot.
    #[must_use]
    pub fn build(self) -> StyleSnapshot {
        StyleSnapshot {
            properties: self.properties,
            font: self.font,
        }
    }
}

/// The serialized form of a snapshot: a font description and a map from
/// property name to value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SnapshotDocument {
    /// The element's font.
    pub font: FontDescription,
    /// Computed properties by name.
    #[serde(default)]
    pub properties: BTreeMap<PropertyId, StyleValue>,
}

impl SnapshotDocument {
    /// Build the snapshot, interning the font through `fonts` and common
    /// values through the shared singletons.
    #[must_use]
    pub fn into_snapshot(self, fonts: &mut FontCache) -> StyleSnapshot {
        let builder = StyleSnapshot::builder(fonts.get_or_insert(&self.font));
        self.properties
            .into_iter()
            .fold(builder, |builder, (property, value)| {
                builder.set(property, value.interned())
            })
            .build()
    }
}

impl From<&StyleSnapshot> for SnapshotDocument {
    fn from(snapshot: &StyleSnapshot) -> Self {
        let font = snapshot.font();
        Self {
            font: FontDescription {
                family: font.family.clone(),
                size: font.size,
                weight: font.weight,
                style: font.style,
                x_height: Some(font.x_height),
                zero_advance: Some(font.zero_advance),
            },
            properties: snapshot
                .iter()
                .map(|(property, value)| (property, value.as_ref().clone()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::values::{ColorValue, Length};

    #[test]
    fn test_builder_fills_slots() {
        let mut fonts = FontCache::new();
        let font = fonts.get_or_insert(&FontDescription::new("Serif", 16.0));
        let snapshot = StyleSnapshot::builder(font)
            .set(PropertyId::Width, StyleValue::length(Length::px(10.0)))
            .set(PropertyId::Color, StyleValue::color(ColorValue::BLACK))
            .build();
        assert_eq!(
            snapshot.property(PropertyId::Width).map(ToString::to_string).as_deref(),
            Some("10px")
        );
        assert!(snapshot.property(PropertyId::Height).is_none());
        let set: Vec<_> = snapshot.iter().map(|(property, _)| property).collect();
        assert_eq!(set, vec![PropertyId::Color, PropertyId::Width]);
    }

    #[test]
    fn test_document_interns_values() {
        let json = r##"{
            "font": { "family": "Serif", "size": 16 },
            "properties": {
                "color": { "type": "color", "value": "#000000" },
                "margin-top": { "type": "length", "value": { "value": 0, "unit": "px" } }
            }
        }"##;
        let document: SnapshotDocument = serde_json::from_str(json).unwrap();
        let mut fonts = FontCache::new();
        let snapshot = document.into_snapshot(&mut fonts);
        assert!(Arc::ptr_eq(
            snapshot.property(PropertyId::Color).unwrap(),
            &StyleValue::color(ColorValue::BLACK)
        ));
        assert!(Arc::ptr_eq(
            snapshot.property(PropertyId::MarginTop).unwrap(),
            &StyleValue::length(Length::px(0.0))
        ));
    }
}
