use runeforge_core::{hex, BootsId, Color};

use super::{slab, tones};
use crate::canvas::Canvas;
use crate::palette::{Triad, RUNE_CYAN};

/// Left boot x; the right boot is offset by [`FOOT_SPACING`]
const LEFT: f64 = 14.0;
const FOOT_SPACING: f64 = 13.0;

/// Boots replace the bare feet
pub fn draw_boots(canvas: &mut Canvas, id: BootsId) {
    let pair = |canvas: &mut Canvas, x: f64, y: f64, w: f64, h: f64, tones: &Triad, top: f64, edge: Color| {
        slab(canvas, x, y, w, h, tones, top, 0.0, edge);
        slab(canvas, x + FOOT_SPACING, y, w, h, tones, top, 0.0, edge);
    };
    let both = |canvas: &mut Canvas, x: f64, y: f64, w: f64, h: f64, color: Color| {
        canvas.fill_rect(x, y, w, h, color);
        canvas.fill_rect(x + FOOT_SPACING + 1.0, y, w, h, color);
    };

    match id {
        BootsId::LeatherBoots => {
            let leather = hex(0x6B4226);
            canvas.fill_rect(LEFT, 41.0, 7.0, 4.0, leather);
            canvas.fill_rect(LEFT + FOOT_SPACING, 41.0, 7.0, 4.0, leather);
            both(canvas, 13.0, 44.0, 8.0, 2.0, hex(0x5B3216));
            canvas.outline(LEFT, 41.0, 7.0, 4.0, hex(0x3B1206));
            canvas.outline(LEFT + FOOT_SPACING, 41.0, 7.0, 4.0, hex(0x3B1206));
        }
        BootsId::FurBoots => {
            let fur = tones(0x7A6A5A, 0x7A6A5A, 0x9A8A6A);
            for x in [LEFT, LEFT + FOOT_SPACING] {
                canvas.fill_rect(x, 39.0, 7.0, 6.0, fur.base);
                canvas.fill_rect(x, 39.0, 7.0, 3.0, fur.highlight);
            }
            both(canvas, 13.0, 44.0, 8.0, 2.0, hex(0x6A5A4A));
            for i in (0..7).step_by(2) {
                canvas.pixel(LEFT + i as f64, 40.0, hex(0xAA9A7A));
                canvas.pixel(LEFT + FOOT_SPACING + i as f64, 40.0, hex(0xAA9A7A));
            }
        }
        BootsId::IronToe => {
            let leather = hex(0x6B4226);
            canvas.fill_rect(LEFT, 41.0, 7.0, 4.0, leather);
            canvas.fill_rect(LEFT + FOOT_SPACING, 41.0, 7.0, 4.0, leather);
            // toe caps
            for x in [13.0, 27.0] {
                canvas.fill_rect(x, 43.0, 4.0, 3.0, hex(0x8A8A8A));
                canvas.outline(x, 43.0, 4.0, 3.0, hex(0x5A5A5A));
                canvas.pixel(x + 1.0, 44.0, hex(0xAAAAAA));
            }
        }
        BootsId::SilentHunter => {
            pair(canvas, LEFT, 42.0, 7.0, 3.0, &tones(0x3A3A3A, 0x3A3A3A, 0x4A4A4A), 1.0, hex(0x1A1A1A));
        }
        BootsId::Stormforged => {
            let iron = tones(0x4A4A5A, 0x4A4A5A, 0x5A5A6A);
            for x in [13.0, 27.0] {
                slab(canvas, x, 39.0, 8.0, 7.0, &iron, 2.0, 0.0, hex(0x2A2A3A));
            }
            for (x, y) in [(16.0, 42.0), (30.0, 42.0), (17.0, 44.0), (31.0, 44.0)] {
                canvas.pixel(x, y, RUNE_CYAN);
            }
        }
        BootsId::BoneTreads => {
            pair(canvas, LEFT, 40.0, 7.0, 5.0, &tones(0xC4B898, 0xC4B898, 0xD4C8A8), 2.0, hex(0x8A7A5A));
            canvas.pixel(13.0, 42.0, hex(0xB4A888));
            canvas.pixel(34.0, 42.0, hex(0xB4A888));
        }
        BootsId::Flamestep => {
            let sole = hex(0x3A1A0A);
            pair(canvas, LEFT, 40.0, 7.0, 5.0, &Triad::new(sole, sole, sole), 0.0, hex(0x1A0A00));
            for (dx, c) in [(1.0, 0xFF6600), (3.0, 0xFF8800), (5.0, 0xFF4400)] {
                canvas.pixel(LEFT + dx, 44.0, hex(c));
                canvas.pixel(LEFT + FOOT_SPACING + dx, 44.0, hex(c));
            }
        }
        BootsId::ShadowStep => {
            pair(canvas, LEFT, 41.0, 7.0, 4.0, &tones(0x1A1A2A, 0x1A1A2A, 0x2A2A3A), 1.0, hex(0x0A0A1A));
            canvas.pixel(13.0, 44.0, hex(0x2A2A4A));
            canvas.pixel(35.0, 44.0, hex(0x2A2A4A));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boots_cover_bare_feet() {
        // The bare feet occupy (14..20, 42..45) and (28..34, 42..45)
        for id in BootsId::ALL {
            let mut canvas = Canvas::new(48, 1);
            draw_boots(&mut canvas, *id);
            for x in [15, 30] {
                assert!(canvas.frame().get_pixel(x, 43).unwrap()[3] > 0, "{id}");
            }
        }
    }
}
