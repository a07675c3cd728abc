use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ConfigError;

/// Fill color with straight (non-premultiplied) RGBA channels in 0..1.
///
/// Serialized as a `#rrggbb` / `#rrggbbaa` hex token.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

const EPSILON: f32 = 0.0001;

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

impl Color {
    pub const BLACK: Color = Color { r: 0.0, g: 0.0, b: 0.0, a: 1.0 };
    pub const WHITE: Color = Color { r: 1.0, g: 1.0, b: 1.0, a: 1.0 };

    pub fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self {
            r: r.clamp(0.0, 1.0),
            g: g.clamp(0.0, 1.0),
            b: b.clamp(0.0, 1.0),
            a: a.clamp(0.0, 1.0),
        }
    }

    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::from_rgba8(r, g, b, 255)
    }

    pub fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
            a: a as f32 / 255.0,
        }
    }

    /// Convert back to 8-bit channels, rounding to nearest.
    pub fn to_rgba8(&self) -> [u8; 4] {
        let q = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        [q(self.r), q(self.g), q(self.b), q(self.a)]
    }

    pub fn approx_eq(&self, other: &Color) -> bool {
        (self.r - other.r).abs() < EPSILON
            && (self.g - other.g).abs() < EPSILON
            && (self.b - other.b).abs() < EPSILON
            && (self.a - other.a).abs() < EPSILON
    }
}

impl FromStr for Color {
    type Err = ConfigError;

    /// Parse `#rrggbb` or `#rrggbbaa` (leading `#` optional).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ConfigError::InvalidColor(s.to_string());
        let hex = s.trim().trim_start_matches('#');
        if !(hex.len() == 6 || hex.len() == 8) || !hex.is_ascii() {
            return Err(invalid());
        }

        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| invalid());
        let r = channel(0)?;
        let g = channel(2)?;
        let b = channel(4)?;
        let a = if hex.len() == 8 { channel(6)? } else { 255 };
        Ok(Self::from_rgba8(r, g, b, a))
    }
}

impl TryFrom<String> for Color {
    type Error = ConfigError;

    fn try_from(token: String) -> Result<Self, Self::Error> {
        token.parse()
    }
}

impl fmt::Display for Color {
    /// `#rrggbb` when opaque, `#rrggbbaa` otherwise.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b, a] = self.to_rgba8();
        if a == 255 {
            write!(f, "#{r:02x}{g:02x}{b:02x}")
        } else {
            write!(f, "#{r:02x}{g:02x}{b:02x}{a:02x}")
        }
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_opaque_black() {
        assert_eq!(Color::default(), Color::BLACK);
        assert_eq!(Color::default().a, 1.0);
    }

    #[test]
    fn test_parse_hex_rgb() {
        let c: Color = "#ff8000".parse().unwrap();
        assert_eq!(c.to_rgba8(), [255, 128, 0, 255]);
    }

    #[test]
    fn test_parse_hex_rgba_without_hash() {
        let c: Color = "00000080".parse().unwrap();
        assert_eq!(c.to_rgba8(), [0, 0, 0, 128]);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(matches!("#12345".parse::<Color>(), Err(ConfigError::InvalidColor(_))));
        assert!(matches!("#gg0000".parse::<Color>(), Err(ConfigError::InvalidColor(_))));
    }

    #[test]
    fn test_display_hex_token() {
        assert_eq!(Color::from_rgb8(30, 90, 200).to_string(), "#1e5ac8");
        assert_eq!(Color::from_rgba8(0, 0, 0, 128).to_string(), "#00000080");
    }

    #[test]
    fn test_new_clamps_channels() {
        let c = Color::new(1.5, -0.2, 0.5, 2.0);
        assert!(c.approx_eq(&Color { r: 1.0, g: 0.0, b: 0.5, a: 1.0 }));
    }
}
