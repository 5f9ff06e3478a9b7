//! sRGB colors
//!
//! [CSS Color Level 4](https://www.w3.org/TR/css-color-4/)

use std::fmt;

use serde::{Deserialize, Serialize};

use super::serialize_number;

/// [§ 4 Color syntax](https://www.w3.org/TR/css-color-4/#color-syntax)
/// sRGB color represented as RGBA components.
///
/// Serialized as a hex string (`#rrggbb` / `#rrggbbaa`) and read back from
/// hex or a named color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ColorValue {
    /// "the red color channel" (0-255)
    pub r: u8,
    /// "the green color channel" (0-255)
    pub g: u8,
    /// "the blue color channel" (0-255)
    pub b: u8,
    /// "the alpha channel" (0-255, 255 = fully opaque)
    pub a: u8,
}

/// [§ 6.1 Named Colors](https://www.w3.org/TR/css-color-4/#named-colors)
///
/// The sixteen basic colors plus the handful of extended keywords that show
/// up in real stylesheets.
const NAMED_COLORS: &[(&str, [u8; 3])] = &[
    ("aqua", [0, 255, 255]),
    ("black", [0, 0, 0]),
    ("blue", [0, 0, 255]),
    ("cyan", [0, 255, 255]),
    ("fuchsia", [255, 0, 255]),
    ("gray", [128, 128, 128]),
    ("green", [0, 128, 0]),
    ("grey", [128, 128, 128]),
    ("lime", [0, 255, 0]),
    ("magenta", [255, 0, 255]),
    ("maroon", [128, 0, 0]),
    ("navy", [0, 0, 128]),
    ("olive", [128, 128, 0]),
    ("orange", [255, 165, 0]),
    ("purple", [128, 0, 128]),
    ("rebeccapurple", [102, 51, 153]),
    ("red", [255, 0, 0]),
    ("silver", [192, 192, 192]),
    ("teal", [0, 128, 128]),
    ("white", [255, 255, 255]),
    ("yellow", [255, 255, 0]),
];

impl ColorValue {
    /// [§ 6.2 The transparent keyword](https://www.w3.org/TR/css-color-4/#transparent-color)
    pub const TRANSPARENT: Self = Self::rgba(0, 0, 0, 0);

    /// Black (#000000)
    pub const BLACK: Self = Self::rgb(0, 0, 0);

    /// White (#ffffff)
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    /// An opaque color.
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// A color with an explicit alpha channel.
    #[must_use]
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// [§ 4.2 The RGB hexadecimal notations](https://www.w3.org/TR/css-color-4/#hex-notation)
    ///
    /// "The syntax of a <hex-color> is a <hash-token> token whose value consists of
    /// 3, 4, 6, or 8 hexadecimal digits."
    #[must_use]
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if !hex.bytes().all(|byte| byte.is_ascii_hexdigit()) {
            return None;
        }
        let channel = |digits: &str| u8::from_str_radix(digits, 16).ok();
        // "The three-digit RGB notation (#RGB) is converted into six-digit form (#RRGGBB)
        // by replicating digits, not by adding zeros."
        let short = |index: usize| channel(&hex[index..=index].repeat(2));
        let long = |index: usize| channel(&hex[index * 2..index * 2 + 2]);
        match hex.len() {
            3 => Some(Self::rgb(short(0)?, short(1)?, short(2)?)),
            4 => Some(Self::rgba(short(0)?, short(1)?, short(2)?, short(3)?)),
            6 => Some(Self::rgb(long(0)?, long(1)?, long(2)?)),
            8 => Some(Self::rgba(long(0)?, long(1)?, long(2)?, long(3)?)),
            _ => None,
        }
    }

    /// [§ 6.1 Named Colors](https://www.w3.org/TR/css-color-4/#named-colors)
    #[must_use]
    pub fn from_named(name: &str) -> Option<Self> {
        if name.eq_ignore_ascii_case("transparent") {
            return Some(Self::TRANSPARENT);
        }
        NAMED_COLORS
            .iter()
            .find(|(candidate, _)| candidate.eq_ignore_ascii_case(name))
            .map(|&(_, [r, g, b])| Self::rgb(r, g, b))
    }

    /// [§ 7.1 HSL](https://www.w3.org/TR/css-color-4/#the-hsl-notation)
    ///
    /// `hue` in degrees (wraps), `saturation` and `lightness` in 0.0-1.0.
    #[must_use]
    #[allow(clippy::cast_sign_loss)]
    pub fn from_hsla(hue: f64, saturation: f64, lightness: f64, alpha: f64) -> Self {
        let hue = hue.rem_euclid(360.0);
        let saturation = saturation.clamp(0.0, 1.0);
        let lightness = lightness.clamp(0.0, 1.0);

        // [§ 7.1](https://www.w3.org/TR/css-color-4/#hsl-to-rgb)
        let chroma = (1.0 - (2.0 * lightness - 1.0).abs()) * saturation;
        let sector = hue / 60.0;
        let second = chroma * (1.0 - (sector % 2.0 - 1.0).abs());
        let (red, green, blue) = match sector as u32 {
            0 => (chroma, second, 0.0),
            1 => (second, chroma, 0.0),
            2 => (0.0, chroma, second),
            3 => (0.0, second, chroma),
            4 => (second, 0.0, chroma),
            _ => (chroma, 0.0, second),
        };

        let offset = lightness - chroma / 2.0;
        let to_u8 = |channel: f64| (channel * 255.0).round().clamp(0.0, 255.0) as u8;
        Self::rgba(
            to_u8(red + offset),
            to_u8(green + offset),
            to_u8(blue + offset),
            to_u8(alpha.clamp(0.0, 1.0)),
        )
    }

    /// Convert to hex string notation (#RRGGBB or #RRGGBBAA if alpha != 255)
    ///
    /// [§ 4.2 The RGB hexadecimal notations](https://www.w3.org/TR/css-color-4/#hex-notation)
    #[must_use]
    pub fn to_hex_string(&self) -> String {
        if self.a == 255 {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }

    /// [§ 2.1 Serializing alpha values](https://www.w3.org/TR/css-color-4/#serializing-alpha-values)
    ///
    /// "the alpha value is serialized as the smallest two-decimal value that
    /// round-trips to the same 8-bit alpha, or three decimals otherwise"
    #[allow(clippy::cast_sign_loss)]
    fn serialized_alpha(self) -> String {
        let alpha = f64::from(self.a) / 255.0;
        let two_decimals = (alpha * 100.0).round() / 100.0;
        if (two_decimals * 255.0).round() as u8 == self.a {
            serialize_number(two_decimals)
        } else {
            serialize_number((alpha * 1000.0).round() / 1000.0)
        }
    }
}

impl fmt::Display for ColorValue {
    /// [§ 15.2 Serializing sRGB values](https://www.w3.org/TR/css-color-4/#serializing-sRGB-values)
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.a == 255 {
            write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
        } else {
            write!(
                f,
                "rgba({}, {}, {}, {})",
                self.r,
                self.g,
                self.b,
                self.serialized_alpha()
            )
        }
    }
}

impl TryFrom<String> for ColorValue {
    type Error = String;

    fn try_from(text: String) -> Result<Self, Self::Error> {
        let trimmed = text.trim();
        if trimmed.starts_with('#') {
            Self::from_hex(trimmed)
        } else {
            Self::from_named(trimmed)
        }
        .ok_or_else(|| format!("unrecognized color '{text}'"))
    }
}

impl From<ColorValue> for String {
    fn from(color: ColorValue) -> Self {
        color.to_hex_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_notations() {
        assert_eq!(ColorValue::from_hex("#fff"), Some(ColorValue::WHITE));
        assert_eq!(
            ColorValue::from_hex("#ff000080"),
            Some(ColorValue::rgba(255, 0, 0, 128))
        );
        assert_eq!(ColorValue::from_hex("#12"), None);
        assert_eq!(ColorValue::from_hex("#ggg"), None);
    }

    #[test]
    fn test_named_colors_case_insensitive() {
        assert_eq!(
            ColorValue::from_named("RebeccaPurple"),
            Some(ColorValue::rgb(102, 51, 153))
        );
        assert_eq!(
            ColorValue::from_named("transparent"),
            Some(ColorValue::TRANSPARENT)
        );
        assert_eq!(ColorValue::from_named("notacolor"), None);
    }

    #[test]
    fn test_hsl_primaries() {
        assert_eq!(
            ColorValue::from_hsla(0.0, 1.0, 0.5, 1.0),
            ColorValue::rgb(255, 0, 0)
        );
        assert_eq!(
            ColorValue::from_hsla(480.0, 1.0, 0.5, 1.0),
            ColorValue::rgb(0, 255, 0)
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(ColorValue::rgb(1, 2, 3).to_string(), "rgb(1, 2, 3)");
        assert_eq!(
            ColorValue::rgba(0, 0, 0, 128).to_string(),
            "rgba(0, 0, 0, 0.5)"
        );
        assert_eq!(ColorValue::TRANSPARENT.to_string(), "rgba(0, 0, 0, 0)");
    }
}
