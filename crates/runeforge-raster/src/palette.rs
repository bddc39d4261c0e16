//! Fixed colors shared across routines

use runeforge_core::{darken, hex, Color, CharacterConfig};

/// Outline tone derived from a shadow color
pub const OUTLINE_SHADE: i32 = 30;

pub const EYE_WHITE: Color = hex(0xEEEEF0);
pub const PUPIL: Color = hex(0x0A0A0A);
pub const SCAR: Color = hex(0xCC8888);
pub const LEATHER_TIE: Color = hex(0x8B7355);
pub const GOLD: Color = hex(0xD4A44A);
pub const LOINCLOTH: Color = hex(0x4A3A2A);
pub const LOINCLOTH_HI: Color = hex(0x5A4A3A);
pub const RUNE_CYAN: Color = hex(0x4AF0FF);
pub const RITUAL_RED: Color = hex(0xCC3333);

/// `color` at a two-digit hex alpha (`0x80` is about half)
pub fn alpha(color: Color, byte: u8) -> Color {
    color.with_alpha(byte as f32 / 255.0)
}

/// Black at `a`
pub fn shade(a: f32) -> Color {
    Color::BLACK.with_alpha(a)
}

/// Base, shadow and highlight tones of one material
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triad {
    pub base: Color,
    pub shadow: Color,
    pub highlight: Color,
}

impl Triad {
    pub const fn new(base: Color, shadow: Color, highlight: Color) -> Self {
        Self {
            base,
            shadow,
            highlight,
        }
    }

    /// Skin tones of a character
    pub fn skin(config: &CharacterConfig) -> Self {
        Self::new(config.skin_base, config.skin_shadow, config.skin_highlight)
    }

    /// Dark edge color
    pub fn outline(&self) -> Color {
        darken(self.shadow, OUTLINE_SHADE)
    }
}
