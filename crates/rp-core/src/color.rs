//! Pixel color.
//!
//! Colors are stored as 4 × u8 straight (non-premultiplied) RGBA. Pixels are
//! compared by exact channel equality, which is what flood fill relies on.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// RGBA color, one byte per channel.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

/// Helper to parse a single hex digit.
fn hex_val(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const GRAY: Color = Color::rgb(128, 128, 128);
    pub const RED: Color = Color::rgb(255, 0, 0);
    pub const GREEN: Color = Color::rgb(0, 255, 0);
    pub const BLUE: Color = Color::rgb(0, 0, 255);
    /// Warm yellow, slightly off pure `#FFFF00`.
    pub const YELLOW: Color = Color::rgb(255, 235, 4);
    pub const CYAN: Color = Color::rgb(0, 255, 255);
    pub const MAGENTA: Color = Color::rgb(255, 0, 255);
    pub const TRANSPARENT: Color = Color::rgba(0, 0, 0, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Build an opaque color from unit-range float channels, rounding to the
    /// nearest byte. Out-of-range inputs are clamped.
    pub fn from_unit(r: f32, g: f32, b: f32) -> Self {
        let q = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        Self::rgb(q(r), q(g), q(b))
    }

    /// Parse a hex color string: `#RGB`, `#RGBA`, `#RRGGBB`, `#RRGGBBAA`.
    /// The string may optionally start with `#`.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        let bytes = hex.as_bytes();

        match bytes.len() {
            3 | 4 => {
                let mut ch = [255u8; 4];
                for (i, b) in bytes.iter().enumerate() {
                    ch[i] = hex_val(*b)? * 17;
                }
                Some(Self::rgba(ch[0], ch[1], ch[2], ch[3]))
            }
            6 | 8 => {
                let mut ch = [255u8; 4];
                for (i, pair) in bytes.chunks_exact(2).enumerate() {
                    ch[i] = hex_val(pair[0])? << 4 | hex_val(pair[1])?;
                }
                Some(Self::rgba(ch[0], ch[1], ch[2], ch[3]))
            }
            _ => None,
        }
    }

    /// Emit as `#RRGGBB`, or `#RRGGBBAA` when not fully opaque.
    pub fn to_hex(&self) -> String {
        if self.a == 255 {
            format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
        } else {
            format!("#{:02X}{:02X}{:02X}{:02X}", self.r, self.g, self.b, self.a)
        }
    }

    /// Channels in `[r, g, b, a]` order, as handed to image encoders.
    pub const fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl fmt::Debug for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Color {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Color::from_hex(s.trim()).ok_or_else(|| format!("invalid hex color: {s:?}"))
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_all_hex_forms() {
        assert_eq!(Color::from_hex("#F00"), Some(Color::RED));
        assert_eq!(Color::from_hex("0f08"), Some(Color::rgba(0, 255, 0, 136)));
        assert_eq!(Color::from_hex("#0000FF"), Some(Color::BLUE));
        assert_eq!(
            Color::from_hex("#10203040"),
            Some(Color::rgba(0x10, 0x20, 0x30, 0x40))
        );
    }

    #[test]
    fn reject_malformed_hex() {
        assert_eq!(Color::from_hex("#12"), None);
        assert_eq!(Color::from_hex("#GGGGGG"), None);
        assert!("not a color".parse::<Color>().is_err());
    }

    #[test]
    fn hex_emit_drops_opaque_alpha() {
        assert_eq!(Color::YELLOW.to_hex(), "#FFEB04");
        assert_eq!(Color::TRANSPARENT.to_hex(), "#00000000");
    }

    #[test]
    fn unit_channels_round_to_nearest() {
        assert_eq!(Color::from_unit(0.5, 0.25, 0.75), Color::rgb(128, 64, 191));
        assert_eq!(Color::from_unit(2.0, -1.0, 0.0), Color::rgb(255, 0, 0));
    }

    #[test]
    fn serde_uses_hex_strings() {
        let json = serde_json::to_string(&Color::MAGENTA).unwrap();
        assert_eq!(json, "\"#FF00FF\"");
        let back: Color = serde_json::from_str("\"#ff00ff\"").unwrap();
        assert_eq!(back, Color::MAGENTA);
    }
}
