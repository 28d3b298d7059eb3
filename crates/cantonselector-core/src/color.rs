//! Style colors shared by the controls and the demo configuration.

use peniko::Color;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// An RGBA8 color used for the three region style inputs and the
/// snowman tint.
///
/// Serialized as a CSS hex string (`#rrggbb` or `#rrggbbaa`) so config
/// files stay readable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StyleColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl StyleColor {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    pub const WHITE: Self = Self::rgb(255, 255, 255);
    pub const BLACK: Self = Self::rgb(0, 0, 0);

    /// Default fill for regions that are neither hovered nor selected.
    pub const DEFAULT_BASE: Self = Self::rgb(203, 213, 225);
    /// Default fill for the hovered region.
    pub const DEFAULT_HOVER: Self = Self::rgb(125, 211, 252);
    /// Default fill for the selected region.
    pub const DEFAULT_SELECT: Self = Self::rgb(37, 99, 235);

    /// Parse a CSS hex color like `#1e90ff`, `#1e90ff80` or `#abc`.
    pub fn from_css(s: &str) -> Option<Self> {
        let hex = s.trim().strip_prefix('#')?;
        let byte = |i: usize| u8::from_str_radix(hex.get(i..i + 2)?, 16).ok();
        match hex.len() {
            3 => {
                let mut channels = [0u8; 3];
                for (i, c) in hex.chars().enumerate() {
                    let v = c.to_digit(16)? as u8;
                    channels[i] = v * 16 + v;
                }
                Some(Self::rgb(channels[0], channels[1], channels[2]))
            }
            6 => Some(Self::rgb(byte(0)?, byte(2)?, byte(4)?)),
            8 => Some(Self::new(byte(0)?, byte(2)?, byte(4)?, byte(6)?)),
            _ => None,
        }
    }

    /// Format as CSS hex; the alpha byte is only written when not opaque.
    pub fn to_css(&self) -> String {
        if self.a == 255 {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }
}

impl From<Color> for StyleColor {
    fn from(color: Color) -> Self {
        let rgba = color.to_rgba8();
        Self::new(rgba.r, rgba.g, rgba.b, rgba.a)
    }
}

impl From<StyleColor> for Color {
    fn from(color: StyleColor) -> Self {
        Color::from_rgba8(color.r, color.g, color.b, color.a)
    }
}

impl Serialize for StyleColor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_css())
    }
}

impl<'de> Deserialize<'de> for StyleColor {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::from_css(&s)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid CSS color: {s}")))
    }
}
