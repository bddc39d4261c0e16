use runeforge_core::{hex, Color, HelmetId};

use super::{cast_shadow, slab, tones};
use crate::canvas::Canvas;
use crate::palette::{alpha, RUNE_CYAN};

const RIVET: Color = hex(0xAAAAAA);

/// Helmet over the head; hides hair completely because hair is never drawn
/// under one
pub fn draw_helmet(canvas: &mut Canvas, id: HelmetId) {
    match id {
        HelmetId::IronNasal => {
            let iron = tones(0x7A7A7A, 0x5A5A5A, 0x9A9A9A);
            slab(canvas, 13.0, 1.0, 22.0, 10.0, &iron, 3.0, 2.0, hex(0x3A3A3A));
            // nose guard
            canvas.fill_rect(23.0, 1.0, 3.0, 18.0, iron.shadow);
            canvas.fill_rect(24.0, 1.0, 1.0, 18.0, iron.base);
            for x in [16.0, 20.0, 28.0, 32.0] {
                canvas.pixel(x, 5.0, RIVET);
            }
            cast_shadow(canvas, 13.0, 11.0, 22.0);
        }
        HelmetId::BearHead => {
            let fur = tones(0x6B3A1A, 0x4B1A0A, 0x8B5A3A);
            slab(canvas, 12.0, -1.0, 24.0, 12.0, &fur, 3.0, 2.0, hex(0x2A0A00));
            // ears
            for x in [12.0, 31.0] {
                canvas.fill_rect(x, -2.0, 5.0, 5.0, fur.shadow);
                canvas.fill_rect(x + 1.0, -1.0, 3.0, 3.0, fur.highlight);
            }
            canvas.fill_rect(19.0, 1.0, 10.0, 3.0, fur.highlight);
            canvas.pixel(22.0, 2.0, hex(0x1A0A00));
            canvas.pixel(26.0, 2.0, hex(0x1A0A00));
            // trim
            canvas.fill_rect(12.0, 9.0, 24.0, 3.0, hex(0x8B6A4A));
            for x in (12..36).step_by(3) {
                canvas.pixel(x as f64, 10.0, hex(0x9A7A5A));
            }
            cast_shadow(canvas, 12.0, 12.0, 24.0);
        }
        HelmetId::RavenSkull => {
            let bone = tones(0x3A3A4A, 0x1A1A2A, 0x5A5A6A);
            slab(canvas, 13.0, 0.0, 22.0, 11.0, &bone, 3.0, 2.0, hex(0x0A0A1A));
            // beak
            canvas.fill_rect(20.0, -2.0, 8.0, 4.0, hex(0x4A4A4A));
            canvas.fill_rect(22.0, -3.0, 4.0, 3.0, hex(0x3A3A3A));
            canvas.pixel(23.0, -3.0, hex(0x5A5A5A));
            for (x, y, c) in [
                (16.0, 4.0, 0xD4D4D4),
                (32.0, 4.0, 0xD4D4D4),
                (18.0, 6.0, 0xD4D4D4),
                (30.0, 6.0, 0xD4D4D4),
                (20.0, 8.0, 0xB4B4B4),
                (28.0, 8.0, 0xB4B4B4),
            ] {
                canvas.pixel(x, y, hex(c));
            }
            // feathers
            canvas.fill_rect(11.0, 6.0, 2.0, 8.0, hex(0x2A2A3A));
            canvas.fill_rect(35.0, 6.0, 2.0, 8.0, hex(0x2A2A3A));
            cast_shadow(canvas, 13.0, 11.0, 22.0);
        }
        HelmetId::JarlGilded => {
            let gold = tones(0xC4A41A, 0xA4841A, 0xE4C43A);
            slab(canvas, 13.0, 0.0, 22.0, 10.0, &gold, 3.0, 2.0, hex(0x7A5A00));
            // crown points
            canvas.fill_rect(16.0, -2.0, 3.0, 3.0, gold.highlight);
            canvas.fill_rect(22.0, -3.0, 4.0, 4.0, gold.highlight);
            canvas.fill_rect(29.0, -2.0, 3.0, 3.0, gold.highlight);
            // gems
            canvas.pixel(23.0, -1.0, hex(0xFF3333));
            canvas.pixel(24.0, -1.0, hex(0xFF3333));
            canvas.pixel(17.0, 0.0, hex(0x3366FF));
            canvas.pixel(30.0, 0.0, hex(0x3366FF));
            // filigree
            for x in (15..33).step_by(4) {
                canvas.pixel(x as f64, 5.0, gold.highlight);
                canvas.pixel(x as f64 + 1.0, 6.0, gold.shadow);
            }
            cast_shadow(canvas, 13.0, 10.0, 22.0);
        }
        HelmetId::RunicWar => {
            let iron = tones(0x5A5A6A, 0x3A3A4A, 0x7A7A8A);
            slab(canvas, 13.0, 0.0, 22.0, 10.0, &iron, 3.0, 2.0, hex(0x1A1A2A));
            // wings
            for x in [10.0, 35.0] {
                canvas.fill_rect(x, 2.0, 3.0, 6.0, iron.base);
                canvas.fill_rect(x, 2.0, 3.0, 2.0, iron.highlight);
            }
            for (x, y) in [
                (16.0, 4.0),
                (19.0, 3.0),
                (22.0, 5.0),
                (25.0, 3.0),
                (28.0, 4.0),
                (31.0, 5.0),
                (17.0, 6.0),
                (24.0, 7.0),
                (31.0, 6.0),
            ] {
                canvas.pixel(x, y, RUNE_CYAN);
            }
            canvas.fill_rect(15.0, 3.0, 1.0, 5.0, alpha(RUNE_CYAN, 0x30));
            canvas.fill_rect(32.0, 3.0, 1.0, 5.0, alpha(RUNE_CYAN, 0x30));
            cast_shadow(canvas, 13.0, 10.0, 22.0);
        }
        HelmetId::WolfSkull => {
            let skull = tones(0x5A5A5A, 0x5A5A5A, 0x7A7A7A);
            slab(canvas, 12.0, -1.0, 24.0, 12.0, &skull, 3.0, 0.0, hex(0x2A2A2A));
            // snout
            canvas.fill_rect(19.0, -3.0, 10.0, 4.0, hex(0x6A6A6A));
            canvas.fill_rect(21.0, -4.0, 6.0, 3.0, hex(0x4A4A4A));
            for x in [20.0, 22.0, 26.0, 28.0] {
                canvas.pixel(x, 0.0, hex(0xDDDDDD));
            }
            canvas.fill_rect(13.0, -3.0, 4.0, 4.0, skull.base);
            canvas.fill_rect(31.0, -3.0, 4.0, 4.0, skull.base);
            // forehead rune
            for (x, y) in [(23.0, 3.0), (24.0, 4.0), (25.0, 3.0)] {
                canvas.pixel(x, y, hex(0xFF4444));
            }
            cast_shadow(canvas, 12.0, 11.0, 24.0);
        }
        HelmetId::ValkyrieWing => {
            let steel = tones(0x8A8AAA, 0x8A8AAA, 0xAAAACC);
            slab(canvas, 13.0, 0.0, 22.0, 10.0, &steel, 3.0, 0.0, hex(0x4A4A6A));
            canvas.fill_rect(8.0, -2.0, 5.0, 8.0, hex(0x9A9ABB));
            canvas.fill_rect(35.0, -2.0, 5.0, 8.0, hex(0x9A9ABB));
            canvas.fill_rect(6.0, -4.0, 3.0, 6.0, steel.base);
            canvas.fill_rect(39.0, -4.0, 3.0, 6.0, steel.base);
            // gem
            canvas.fill_rect(23.0, 4.0, 2.0, 1.0, RUNE_CYAN);
            canvas.fill_rect(23.0, 5.0, 2.0, 1.0, hex(0x3AD0DD));
            cast_shadow(canvas, 13.0, 10.0, 22.0);
        }
        HelmetId::Dragonbone => {
            let bone = tones(0xD4C8A8, 0xB4A888, 0xE4D8B8);
            slab(canvas, 12.0, -1.0, 24.0, 12.0, &bone, 3.0, 2.0, hex(0x8A7A5A));
            // horns
            canvas.fill_rect(10.0, -4.0, 3.0, 6.0, hex(0xC4B898));
            canvas.fill_rect(35.0, -4.0, 3.0, 6.0, hex(0xC4B898));
            canvas.fill_rect(8.0, -6.0, 3.0, 4.0, bone.base);
            canvas.fill_rect(37.0, -6.0, 3.0, 4.0, bone.base);
            for (x, y) in [(18.0, 3.0), (25.0, 5.0), (30.0, 3.0)] {
                canvas.pixel(x, y, hex(0xA49878));
            }
            cast_shadow(canvas, 12.0, 11.0, 24.0);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_helmet_covers_crown() {
        for id in HelmetId::ALL {
            let mut canvas = Canvas::new(48, 1);
            draw_helmet(&mut canvas, *id);
            // Every helmet covers the top of the skull
            for x in 14..34 {
                assert!(canvas.frame().get_pixel(x, 3).unwrap()[3] > 0, "{id} at {x}");
            }
        }
    }

    #[test]
    fn test_iron_nasal_guard_reaches_face() {
        let mut canvas = Canvas::new(48, 1);
        draw_helmet(&mut canvas, HelmetId::IronNasal);
        assert!(canvas.frame().get_pixel(24, 17).unwrap()[3] > 0);
    }
}
