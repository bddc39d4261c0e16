//! Colors and shade derivation
//!
//! Colors carry an explicit alpha channel. Shading triads are derived with
//! [`darken`] and [`lighten`], which shift every channel by a fixed amount
//! and clamp to `0..=255`.

use crate::error::{Result, SpriteError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Default shift used by [`Color::darken`] / [`Color::lighten`] callers
pub const DEFAULT_SHADE: i32 = 30;

/// An RGB color with straight (non-premultiplied) alpha in `0.0..=1.0`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Color {
    pub const TRANSPARENT: Color = Color::rgba(0, 0, 0, 0.0);
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);

    /// Opaque color from channels
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Color with alpha
    pub const fn rgba(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color from a packed `0xRRGGBB` value
    pub const fn from_u32(rgb: u32) -> Self {
        Self::rgb((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8)
    }

    /// Parse `#RRGGBB`, `RRGGBB` or `#RRGGBBAA`
    pub fn hex(s: &str) -> Result<Self> {
        let digits = s.strip_prefix('#').unwrap_or(s);
        let invalid = || SpriteError::InvalidColor(s.to_string());

        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        let value = u32::from_str_radix(digits, 16).map_err(|_| invalid())?;
        match digits.len() {
            6 => Ok(Self::from_u32(value)),
            8 => Ok(Self::from_u32(value >> 8).with_alpha((value & 0xff) as f32 / 255.0)),
            _ => Err(invalid()),
        }
    }

    /// Same color with a different alpha
    pub fn with_alpha(mut self, a: f32) -> Self {
        self.a = a.clamp(0.0, 1.0);
        self
    }

    /// Packed `0xRRGGBB`
    pub fn to_u32(self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }

    /// `#RRGGBB` (alpha is dropped)
    pub fn to_hex(self) -> String {
        format!("#{:06X}", self.to_u32())
    }

    /// RGB bytes
    pub fn rgb_bytes(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Shift each channel down by `amount`, clamping at 0
    pub fn darken(self, amount: i32) -> Self {
        self.shift(amount.saturating_neg())
    }

    /// Shift each channel up by `amount`, clamping at 255
    pub fn lighten(self, amount: i32) -> Self {
        self.shift(amount)
    }

    fn shift(self, amount: i32) -> Self {
        let ch = |c: u8| (c as i32).saturating_add(amount).clamp(0, 255) as u8;
        Self {
            r: ch(self.r),
            g: ch(self.g),
            b: ch(self.b),
            a: self.a,
        }
    }

    /// Channel-wise interpolation, truncating like the integer color ramps
    /// used by the effects
    pub fn mix(self, other: Color, t: f64) -> Self {
        let ch = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * t).floor().clamp(0.0, 255.0) as u8;
        Self {
            r: ch(self.r, other.r),
            g: ch(self.g, other.g),
            b: ch(self.b, other.b),
            a: self.a + (other.a - self.a) * t as f32,
        }
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::TRANSPARENT
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.a >= 1.0 {
            write!(f, "{}", self.to_hex())
        } else {
            write!(f, "{}{:02X}", self.to_hex(), (self.a * 255.0).round() as u8)
        }
    }
}

impl FromStr for Color {
    type Err = SpriteError;

    fn from_str(s: &str) -> Result<Self> {
        Self::hex(s)
    }
}

impl TryFrom<String> for Color {
    type Error = SpriteError;

    fn try_from(s: String) -> Result<Self> {
        Self::hex(&s)
    }
}

impl From<Color> for String {
    fn from(c: Color) -> Self {
        c.to_string()
    }
}

/// Shorthand for [`Color::from_u32`]
pub const fn hex(rgb: u32) -> Color {
    Color::from_u32(rgb)
}

/// Darken a color by `amount` per channel
pub fn darken(color: Color, amount: i32) -> Color {
    color.darken(amount)
}

/// Lighten a color by `amount` per channel
pub fn lighten(color: Color, amount: i32) -> Color {
    color.lighten(amount)
}

/// Darken a hex string, returning a `#RRGGBB` string
pub fn darken_hex(s: &str, amount: i32) -> Result<String> {
    Ok(Color::hex(s)?.darken(amount).to_hex())
}

/// Lighten a hex string, returning a `#RRGGBB` string
pub fn lighten_hex(s: &str, amount: i32) -> Result<String> {
    Ok(Color::hex(s)?.lighten(amount).to_hex())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex() {
        assert_eq!(Color::hex("#6B3A2A").unwrap(), Color::rgb(0x6B, 0x3A, 0x2A));
        assert_eq!(Color::hex("e8d44d").unwrap(), Color::rgb(0xE8, 0xD4, 0x4D));

        let translucent = Color::hex("#FF000080").unwrap();
        assert_eq!(translucent.rgb_bytes(), [255, 0, 0]);
        assert!((translucent.a - 128.0 / 255.0).abs() < 1e-6);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(Color::hex("rgba(0,0,0,0.3)").is_err());
        assert!(Color::hex("#12345").is_err());
        assert!(Color::hex("#GGGGGG").is_err());
        assert!(Color::hex("").is_err());
    }

    #[test]
    fn test_darken_clamps() {
        let c = hex(0x102030);
        assert_eq!(c.darken(30).to_hex(), "#000212");
        assert_eq!(c.darken(1000).to_hex(), "#000000");
        assert_eq!(hex(0xF0F0F0).lighten(1000).to_hex(), "#FFFFFF");
    }

    #[test]
    fn test_extreme_amounts_saturate() {
        assert_eq!(darken_hex("#808080", i32::MIN).unwrap(), "#FFFFFF");
        assert_eq!(darken_hex("#808080", i32::MAX).unwrap(), "#000000");
        assert_eq!(lighten_hex("#FFFFFF", i32::MAX).unwrap(), "#FFFFFF");
        assert_eq!(lighten_hex("#808080", i32::MIN).unwrap(), "#000000");
    }

    #[test]
    fn test_hex_output_is_always_six_digits() {
        for amount in [i32::MIN, -500, -30, 0, 1, 30, 255, 256, 10_000, i32::MAX] {
            for base in ["#000000", "#FFFFFF", "#8D5524", "#010101"] {
                for out in [darken_hex(base, amount).unwrap(), lighten_hex(base, amount).unwrap()] {
                    assert_eq!(out.len(), 7, "{out}");
                    assert!(out.starts_with('#'));
                    assert!(out[1..].chars().all(|c| c.is_ascii_hexdigit()));
                }
            }
        }
    }

    #[test]
    fn test_round_trip_without_clamping() {
        let c = hex(0x8D5524);
        assert_eq!(c.darken(20).lighten(20), c);
        assert_eq!(c.lighten(20).darken(20), c);
    }

    #[test]
    fn test_round_trip_error_bounded_by_clamping() {
        for base in [0x000000u32, 0xFFFFFF, 0x1A1A2E, 0xF5D0A9, 0x3B1F0B] {
            let c = hex(base);
            for n in [0, 10, 30, 100, 300] {
                let back = c.darken(n).lighten(n);
                for (orig, got) in c.rgb_bytes().into_iter().zip(back.rgb_bytes()) {
                    // Only channels that clamped at 0 may differ
                    if (orig as i32) >= n {
                        assert_eq!(orig, got);
                    } else {
                        assert!(got >= orig);
                    }
                }
            }
        }
    }

    #[test]
    fn test_serde_as_string() {
        let json = serde_json::to_string(&hex(0xB33A1A)).unwrap();
        assert_eq!(json, "\"#B33A1A\"");
        let back: Color = serde_json::from_str(&json).unwrap();
        assert_eq!(back, hex(0xB33A1A));
    }

    #[test]
    fn test_mix() {
        let red = Color::rgb(255, 60, 100);
        let green = Color::rgb(60, 255, 120);
        assert_eq!(red.mix(green, 0.0), red);
        assert_eq!(red.mix(green, 1.0), green);
    }
}
