//! Integration tests for style-change invalidation.

use std::sync::Arc;

use ochre_css::invalidation::{
    RequiredInvalidation, StyleRecomputation, classify, classify_in_order, classify_with,
};
use ochre_css::style::{
    BuiltinProperties, ComputedFont, FontCache, FontDescription, PROPERTY_COUNT,
    PropertyClassification, PropertyId, PropertyTraits, StyleSnapshot, StyleSnapshotBuilder,
    StyleValue,
};
use ochre_css::values::{ColorValue, Length, Number};
use quickcheck_macros::quickcheck;

fn font(fonts: &mut FontCache) -> Arc<ComputedFont> {
    fonts.get_or_insert(&FontDescription::new("Serif", 16.0))
}

/// A snapshot with a few properties every test starts from.
fn base(font: &Arc<ComputedFont>) -> StyleSnapshotBuilder {
    StyleSnapshot::builder(Arc::clone(font))
        .set(PropertyId::Display, StyleValue::identifier("block"))
        .set(PropertyId::Width, StyleValue::length(Length::px(100.0)))
        .set(PropertyId::Color, StyleValue::color(ColorValue::BLACK))
        .set(PropertyId::Opacity, Arc::new(StyleValue::Number(Number::new(1.0))))
}

#[test]
fn test_identical_snapshots() {
    let mut fonts = FontCache::new();
    let font = font(&mut fonts);
    let old = base(&font).build();
    let new = base(&font).build();
    assert_eq!(classify(&old, &new), RequiredInvalidation::None);
}

#[test]
fn test_paint_only_change() {
    let mut fonts = FontCache::new();
    let font = font(&mut fonts);
    let old = base(&font).build();
    let new = base(&font)
        .set(PropertyId::Color, StyleValue::color(ColorValue::rgb(255, 0, 0)))
        .build();
    assert_eq!(classify(&old, &new), RequiredInvalidation::RepaintOnly);
}

#[test]
fn test_stacking_change() {
    let mut fonts = FontCache::new();
    let font = font(&mut fonts);
    let old = base(&font).build();
    let new = base(&font)
        .set(PropertyId::Color, StyleValue::color(ColorValue::WHITE))
        .set(PropertyId::Opacity, Arc::new(StyleValue::Number(Number::new(0.5))))
        .build();
    assert_eq!(
        classify(&old, &new),
        RequiredInvalidation::RebuildStackingContextTree
    );
}

#[test]
fn test_layout_change_wins() {
    let mut fonts = FontCache::new();
    let font = font(&mut fonts);
    let old = base(&font).build();
    let new = base(&font)
        .set(PropertyId::Opacity, Arc::new(StyleValue::Number(Number::new(0.5))))
        .set(PropertyId::Width, StyleValue::length(Length::px(120.0)))
        .build();
    assert_eq!(classify(&old, &new), RequiredInvalidation::Relayout);
}

#[test]
fn test_font_identity_forces_relayout() {
    let old_font = Arc::new(ComputedFont::from_description(&FontDescription::new("Serif", 16.0)));
    let new_font = Arc::new(ComputedFont::from_description(&FontDescription::new("Serif", 16.0)));
    assert_eq!(old_font, new_font);
    let old = base(&old_font).build();
    let new = base(&new_font).build();
    assert_eq!(classify(&old, &new), RequiredInvalidation::Relayout);
}

#[test]
fn test_interned_fonts_compare_equal() {
    let mut fonts = FontCache::new();
    let old = base(&fonts.get_or_insert(&FontDescription::new("Serif", 16.0))).build();
    let new = base(&fonts.get_or_insert(&FontDescription::new("Serif", 16.0))).build();
    assert_eq!(classify(&old, &new), RequiredInvalidation::None);
}

#[test]
fn test_property_appearing_forces_relayout() {
    let mut fonts = FontCache::new();
    let font = font(&mut fonts);
    let old = base(&font).build();
    let new = base(&font)
        .set(PropertyId::OutlineColor, StyleValue::color(ColorValue::BLACK))
        .build();
    assert_eq!(classify(&old, &new), RequiredInvalidation::Relayout);
    assert_eq!(classify(&new, &old), RequiredInvalidation::Relayout);
}

#[test]
fn test_equal_values_in_distinct_allocations() {
    let mut fonts = FontCache::new();
    let font = font(&mut fonts);
    let old = base(&font)
        .set(PropertyId::Height, Arc::new(StyleValue::Length(Length::px(7.0))))
        .build();
    let new = base(&font)
        .set(PropertyId::Height, Arc::new(StyleValue::Length(Length::px(7.0))))
        .build();
    assert_eq!(classify(&old, &new), RequiredInvalidation::None);
}

#[test]
fn test_custom_classification() {
    let mut fonts = FontCache::new();
    let font = font(&mut fonts);
    let old = base(&font).build();
    let new = base(&font)
        .set(PropertyId::Color, StyleValue::color(ColorValue::WHITE))
        .build();

    let mut table = [PropertyTraits::PAINT; PROPERTY_COUNT];
    table[PropertyId::Color.index()] = PropertyTraits::STACKING;
    assert!(table.affects_stacking_context(PropertyId::Color));
    assert_eq!(
        classify_with(&old, &new, &table),
        RequiredInvalidation::RebuildStackingContextTree
    );
    assert_eq!(
        StyleRecomputation::with_table(table).apply(Some(&old), &new),
        RequiredInvalidation::RebuildStackingContextTree
    );
}

#[test]
fn test_first_style_computation_needs_layout() {
    let mut fonts = FontCache::new();
    let font = font(&mut fonts);
    let new = base(&font).build();
    let recomputation = StyleRecomputation::new();
    assert_eq!(recomputation.apply(None, &new), RequiredInvalidation::Relayout);
    assert_eq!(
        recomputation.apply(Some(&new), &new),
        RequiredInvalidation::None
    );
}

/// Properties the permutation property touches, one per severity class plus
/// a couple of extras.
const TOUCHED: [PropertyId; 6] = [
    PropertyId::Color,
    PropertyId::BackgroundColor,
    PropertyId::Opacity,
    PropertyId::ZIndex,
    PropertyId::Width,
    PropertyId::MarginTop,
];

/// Build a pair of snapshots that differ on the properties selected by
/// `changes`, then check every scan order agrees with the default one.
#[quickcheck]
fn prop_scan_order_does_not_matter(changes: Vec<u8>, keys: Vec<u32>) -> bool {
    let mut fonts = FontCache::new();
    let font = font(&mut fonts);

    let mut old = StyleSnapshot::builder(Arc::clone(&font));
    let mut new = StyleSnapshot::builder(Arc::clone(&font));
    for (slot, property) in TOUCHED.iter().enumerate() {
        let value = i64::try_from(slot).unwrap_or_default();
        let changed = changes
            .iter()
            .any(|&change| usize::from(change) % TOUCHED.len() == slot);
        old = old.set(*property, Arc::new(StyleValue::Number(Number::integer(value))));
        let new_value = if changed { value + 100 } else { value };
        new = new.set(*property, Arc::new(StyleValue::Number(Number::integer(new_value))));
    }
    let (old, new) = (old.build(), new.build());

    let mut order: Vec<(u32, PropertyId)> = PropertyId::ALL
        .iter()
        .enumerate()
        .map(|(index, &property)| {
            let fallback = u32::try_from(index).unwrap_or(u32::MAX);
            (keys.get(index).copied().unwrap_or(fallback), property)
        })
        .collect();
    order.sort_unstable();

    let expected = classify(&old, &new);
    let permuted = classify_in_order(
        &old,
        &new,
        &BuiltinProperties,
        order.into_iter().map(|(_, property)| property),
    );
    let reversed = classify_in_order(
        &old,
        &new,
        &BuiltinProperties,
        PropertyId::ALL.iter().rev().copied(),
    );
    expected == permuted && expected == reversed
}

#[quickcheck]
fn prop_severity_is_the_maximum_of_single_changes(changes: Vec<u8>) -> bool {
    let mut fonts = FontCache::new();
    let font = font(&mut fonts);
    let old = base(&font).build();

    let mut new = base(&font);
    let mut expected = RequiredInvalidation::None;
    for change in changes {
        let (property, value, severity) = match change % 3 {
            0 => (
                PropertyId::Color,
                StyleValue::color(ColorValue::rgb(change, 1, 0)),
                RequiredInvalidation::RepaintOnly,
            ),
            1 => (
                PropertyId::Opacity,
                Arc::new(StyleValue::Number(Number::new(f64::from(change) / 1000.0))),
                RequiredInvalidation::RebuildStackingContextTree,
            ),
            _ => (
                PropertyId::Width,
                StyleValue::length(Length::px(f64::from(change) + 1000.0)),
                RequiredInvalidation::Relayout,
            ),
        };
        new = new.set(property, value);
        expected = expected.max(severity);
    }
    classify(&old, &new.build()) == expected
}
