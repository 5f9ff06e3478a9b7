//! Style-change invalidation
//!
//! Compares two computed style snapshots of one element and decides the
//! cheapest rendering work that reflects the change: nothing, a repaint, a
//! stacking context rebuild, or a full relayout.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use strum_macros::Display;

use crate::style::{BuiltinProperties, PropertyClassification, PropertyId, StyleSnapshot};

/// How much of the rendering pipeline a style change invalidates.
///
/// Ordered by severity; each level implies the work of every level below it.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Display, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum RequiredInvalidation {
    /// Nothing visible changed.
    #[default]
    None,
    /// Repaint the element.
    RepaintOnly,
    /// Rebuild the stacking context tree, then repaint.
    RebuildStackingContextTree,
    /// Lay out again, then rebuild and repaint.
    Relayout,
}

impl RequiredInvalidation {
    /// Whether the box tree must be laid out again.
    #[must_use]
    pub const fn needs_relayout(self) -> bool {
        matches!(self, Self::Relayout)
    }

    /// Whether the stacking context tree must be rebuilt.
    #[must_use]
    pub const fn needs_stacking_context_rebuild(self) -> bool {
        matches!(self, Self::RebuildStackingContextTree | Self::Relayout)
    }

    /// Whether anything must be repainted.
    #[must_use]
    pub const fn needs_repaint(self) -> bool {
        !self.is_none()
    }

    /// Whether the change is invisible.
    #[must_use]
    pub const fn is_none(self) -> bool {
        matches!(self, Self::None)
    }
}

/// Classify the change from `old` to `new` with the built-in property table.
#[must_use]
pub fn classify(old: &StyleSnapshot, new: &StyleSnapshot) -> RequiredInvalidation {
    classify_with(old, new, &BuiltinProperties)
}

/// Classify the change from `old` to `new` with a custom property table.
#[must_use]
pub fn classify_with<C>(old: &StyleSnapshot, new: &StyleSnapshot, table: &C) -> RequiredInvalidation
where
    C: PropertyClassification + ?Sized,
{
    classify_in_order(old, new, table, PropertyId::ALL.iter().copied())
}

/// Classify the change, scanning properties in `order`.
///
/// The result does not depend on the order; properties missing from it are
/// not compared.
#[must_use]
pub fn classify_in_order<C, I>(
    old: &StyleSnapshot,
    new: &StyleSnapshot,
    table: &C,
    order: I,
) -> RequiredInvalidation
where
    C: PropertyClassification + ?Sized,
    I: IntoIterator<Item = PropertyId>,
{
    // The font feeds every font-relative length and all text metrics.
    if !Arc::ptr_eq(old.font(), new.font()) {
        #[cfg(feature = "invalidation-trace")]
        eprintln!("[INVALIDATION] font changed => {}", RequiredInvalidation::Relayout);
        return RequiredInvalidation::Relayout;
    }

    let mut invalidation = RequiredInvalidation::None;
    for property in order {
        let (old_value, new_value) = match (old.property(property), new.property(property)) {
            (None, None) => continue,
            (Some(old_value), Some(new_value)) => (old_value, new_value),
            _ => {
                #[cfg(feature = "invalidation-trace")]
                eprintln!("[INVALIDATION] {property} appeared or vanished => Relayout");
                return RequiredInvalidation::Relayout;
            }
        };
        if Arc::ptr_eq(old_value, new_value) || old_value == new_value {
            continue;
        }

        let severity = if table.affects_layout(property) {
            RequiredInvalidation::Relayout
        } else if table.affects_stacking_context(property) {
            RequiredInvalidation::RebuildStackingContextTree
        } else {
            RequiredInvalidation::RepaintOnly
        };

        #[cfg(feature = "invalidation-trace")]
        eprintln!("[INVALIDATION] {property}: {old_value} -> {new_value} => {severity}");

        if severity == RequiredInvalidation::Relayout {
            return severity;
        }
        invalidation = invalidation.max(severity);
    }
    invalidation
}

/// The invalidation step of a style recomputation.
///
/// Holds the property table so a pipeline can reuse it for every element.
#[derive(Debug, Clone, Copy, Default)]
pub struct StyleRecomputation<C = BuiltinProperties> {
    table: C,
}

impl StyleRecomputation {
    /// A recomputation using the built-in property table.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            table: BuiltinProperties,
        }
    }
}

impl<C: PropertyClassification> StyleRecomputation<C> {
    /// A recomputation using a custom property table.
    #[must_use]
    pub const fn with_table(table: C) -> Self {
        Self { table }
    }

    /// Decide what a freshly computed `new` style invalidates.
    ///
    /// An element with no `previous` style is being styled for the first
    /// time and always needs layout.
    #[must_use]
    pub fn apply(
        &self,
        previous: Option<&StyleSnapshot>,
        new: &StyleSnapshot,
    ) -> RequiredInvalidation {
        previous.map_or(RequiredInvalidation::Relayout, |previous| {
            classify_with(previous, new, &self.table)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_order() {
        assert!(RequiredInvalidation::None < RequiredInvalidation::RepaintOnly);
        assert!(RequiredInvalidation::RepaintOnly < RequiredInvalidation::RebuildStackingContextTree);
        assert!(RequiredInvalidation::RebuildStackingContextTree < RequiredInvalidation::Relayout);
    }

    #[test]
    fn test_helpers() {
        assert!(RequiredInvalidation::Relayout.needs_stacking_context_rebuild());
        assert!(RequiredInvalidation::Relayout.needs_repaint());
        assert!(!RequiredInvalidation::RepaintOnly.needs_stacking_context_rebuild());
        assert!(RequiredInvalidation::None.is_none());
        assert!(!RequiredInvalidation::None.needs_repaint());
    }
}
