//! Resolved fonts
//!
//! [CSS Fonts Level 4](https://www.w3.org/TR/css-fonts-4/)
//!
//! Snapshots hold their font as an `Arc<ComputedFont>` and the style diff
//! compares fonts by identity, so equal descriptions must be interned
//! through one [`FontCache`] to share an allocation.

use std::collections::HashMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use strum_macros::Display;

use crate::values::{LengthContext, Viewport};

/// [§ 3.3 Font style: the `font-style` property](https://www.w3.org/TR/css-fonts-4/#font-style-prop)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, Serialize, Deserialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum FontStyle {
    /// `normal`
    #[default]
    Normal,
    /// `italic`
    Italic,
    /// `oblique`
    Oblique,
}

/// [§ 2.2 Font weight: the `font-weight` property](https://www.w3.org/TR/css-fonts-4/#font-weight-prop)
///
/// "normal: Same as 400."
const DEFAULT_FONT_WEIGHT: u16 = 400;

const fn default_font_weight() -> u16 {
    DEFAULT_FONT_WEIGHT
}

/// What a font lookup is keyed on, as exchanged with collaborators.
///
/// Metrics default to the 0.5em fallback when the font does not report them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FontDescription {
    /// Family name.
    pub family: String,
    /// Computed font-size in px.
    pub size: f64,
    /// Numeric weight (100-900).
    #[serde(default = "default_font_weight")]
    pub weight: u16,
    /// Slope.
    #[serde(default)]
    pub style: FontStyle,
    /// x-height in px, if known.
    #[serde(default)]
    pub x_height: Option<f64>,
    /// Advance of the "0" glyph in px, if known.
    #[serde(default)]
    pub zero_advance: Option<f64>,
}

impl FontDescription {
    /// A regular-weight, upright face.
    #[must_use]
    pub fn new(family: &str, size: f64) -> Self {
        Self {
            family: family.to_string(),
            size,
            weight: DEFAULT_FONT_WEIGHT,
            style: FontStyle::Normal,
            x_height: None,
            zero_advance: None,
        }
    }
}

/// A font resolved for one element.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComputedFont {
    /// Family name.
    pub family: String,
    /// Font size in px.
    pub size: f64,
    /// Numeric weight.
    pub weight: u16,
    /// Slope.
    pub style: FontStyle,
    /// Used x-height in px.
    pub x_height: f64,
    /// Used advance of the "0" glyph in px.
    pub zero_advance: f64,
}

impl ComputedFont {
    /// Resolve a description, filling in missing metrics.
    ///
    /// [§ 6.1.1 Font-relative Lengths](https://www.w3.org/TR/css-values-4/#font-relative-lengths)
    ///
    /// "In the cases where it is impossible or impractical to determine the
    /// x-height, a value of 0.5em must be assumed."
    #[must_use]
    pub fn from_description(description: &FontDescription) -> Self {
        Self {
            family: description.family.clone(),
            size: description.size,
            weight: description.weight,
            style: description.style,
            x_height: description.x_height.unwrap_or(description.size * 0.5),
            zero_advance: description.zero_advance.unwrap_or(description.size * 0.5),
        }
    }

    /// The context relative lengths on an element with this font resolve
    /// against.
    #[must_use]
    pub const fn length_context(&self, root_font_size: f64, viewport: Viewport) -> LengthContext {
        LengthContext {
            font_size: self.size,
            root_font_size,
            x_height: self.x_height,
            zero_advance: self.zero_advance,
            viewport,
        }
    }
}

/// Hashable identity of a [`FontDescription`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct FontKey {
    family: String,
    size: u64,
    weight: u16,
    style: FontStyle,
    x_height: Option<u64>,
    zero_advance: Option<u64>,
}

impl From<&FontDescription> for FontKey {
    fn from(description: &FontDescription) -> Self {
        Self {
            family: description.family.to_ascii_lowercase(),
            size: description.size.to_bits(),
            weight: description.weight,
            style: description.style,
            x_height: description.x_height.map(f64::to_bits),
            zero_advance: description.zero_advance.map(f64::to_bits),
        }
    }
}

/// Interns computed fonts so equal descriptions share one `Arc`.
#[derive(Debug, Default)]
pub struct FontCache {
    fonts: HashMap<FontKey, Arc<ComputedFont>>,
}

impl FontCache {
    /// An empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The shared font for `description`, resolving it on first use.
    pub fn get_or_insert(&mut self, description: &FontDescription) -> Arc<ComputedFont> {
        Arc::clone(
            self.fonts
                .entry(FontKey::from(description))
                .or_insert_with(|| Arc::new(ComputedFont::from_description(description))),
        )
    }

    /// Number of distinct fonts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fonts.len()
    }

    /// Whether no font has been resolved yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fonts.is_empty()
    }
}
