use runeforge_core::{hex, BodySilhouette, ChestId, Color};

use super::{cast_shadow, slab, tones};
use crate::canvas::Canvas;
use crate::palette::{Triad, RITUAL_RED, RUNE_CYAN};
use crate::parts::draw_torso;

const LEATHER: Color = hex(0x8B6914);
const BLOOD_GLOW: Color = hex(0xFF4444);

/// Chest armor. The bare torso is painted first so styles that leave skin
/// exposed at the margins look right.
pub fn draw_chest(canvas: &mut Canvas, id: ChestId, body: &BodySilhouette, skin: &Triad) {
    draw_torso(canvas, body, skin);

    let (x, y, w, h) = (body.torso_x, body.torso_y, body.torso_w, body.torso_h);
    let bottom = y + h;
    let mid = (w / 2.0).floor();

    match id {
        ChestId::LeatherVest => {
            let leather = tones(0x8B6914, 0x7B5904, 0x9B7924);
            slab(canvas, x, y, w, h, &leather, 3.0, 3.0, hex(0x4A3000));
            // stitching
            let mut i = 2.0;
            while i < w - 2.0 {
                canvas.pixel(x + i, 27.0, hex(0x6B4904));
                i += 3.0;
            }
            canvas.fill_rect(22.0, 25.0, 4.0, 2.0, hex(0xC4A41A));
            cast_shadow(canvas, x, bottom, w);
        }
        ChestId::Chainmail => {
            let mail = tones(0x8A8A8A, 0x6A6A6A, 0x9A9A9A);
            slab(canvas, x, y, w, h, &mail, 3.0, 3.0, hex(0x3A3A3A));
            chain_links(canvas, x, w, hex(0x5A5A5A));
            // collar
            canvas.fill_rect(x + 2.0, 20.0, w - 4.0, 2.0, hex(0x7A7A7A));
            cast_shadow(canvas, x, bottom, w);
        }
        ChestId::FurCloak => {
            let fur = tones(0x5A4A3A, 0x5A4A3A, 0x7A6A5A);
            slab(canvas, x, y, w, h, &fur, 4.0, 0.0, hex(0x2A1A0A));
            // collar
            canvas.fill_rect(x - 2.0, 19.0, w + 4.0, 4.0, hex(0x8B7A5A));
            let mut ix = x - 2.0;
            while ix < x + w + 2.0 {
                canvas.pixel(ix, 20.0, hex(0x9A8A6A));
                canvas.pixel(ix + 1.0, 21.0, hex(0x6A5A4A));
                ix += 2.0;
            }
            let mut ix = x + 1.0;
            while ix < x + w {
                canvas.pixel(ix, 25.0, hex(0x6A5A4A));
                canvas.pixel(ix + 1.0, 28.0, hex(0x7A6A5A));
                ix += 4.0;
            }
            cast_shadow(canvas, x, bottom, w);
        }
        ChestId::BerserkerHarness => {
            slab(canvas, x, y, w, h, skin, 3.0, 3.0, skin.outline());
            if body.wide {
                canvas.fill_rect(20.0, 23.0, 1.0, 6.0, skin.shadow);
                canvas.fill_rect(27.0, 23.0, 1.0, 6.0, skin.shadow);
            }
            // shoulder guards
            for gx in [x, x + w - 6.0] {
                canvas.fill_rect(gx, 20.0, 6.0, 5.0, hex(0x6A5A4A));
                canvas.outline(gx, 20.0, 6.0, 5.0, hex(0x3A2A1A));
            }
            // crossed straps
            for i in 0..10 {
                let i = i as f64;
                let sy = 22.0 + i;
                if sy >= bottom {
                    continue;
                }
                if x + 4.0 + i < x + w {
                    canvas.pixel(x + 4.0 + i, sy, LEATHER);
                }
                if x + w - 5.0 - i >= x {
                    canvas.pixel(x + w - 5.0 - i, sy, LEATHER);
                }
            }
            for (mx, my) in [(22.0, 24.0), (26.0, 24.0), (24.0, 26.0), (22.0, 28.0), (26.0, 28.0)] {
                canvas.pixel(mx, my, RITUAL_RED);
            }
        }
        ChestId::RunestonePlate => {
            let stone = tones(0x4A4A5A, 0x3A3A4A, 0x5A5A6A);
            slab(canvas, x, y, w, h, &stone, 3.0, 3.0, hex(0x1A1A2A));
            // inset plate
            canvas.fill_rect(x + 3.0, 24.0, w - 6.0, 6.0, stone.highlight);
            canvas.outline(x + 3.0, 24.0, w - 6.0, 6.0, stone.shadow);
            for (gx, gy) in [
                (x + 5.0, 25.0),
                (x + 7.0, 26.0),
                (x + w - 6.0, 25.0),
                (x + w - 8.0, 26.0),
                (x + mid, 27.0),
            ] {
                canvas.pixel(gx, gy, RUNE_CYAN);
            }
            // pauldrons
            for px in [x - 2.0, x + w - 3.0] {
                canvas.fill_rect(px, 19.0, 5.0, 4.0, stone.highlight);
                canvas.outline(px, 19.0, 5.0, 4.0, hex(0x2A2A3A));
                canvas.pixel(px + 1.0, 20.0, RUNE_CYAN);
            }
            cast_shadow(canvas, x, bottom, w);
        }
        ChestId::BoneCuirass => {
            let bone = tones(0xC4B898, 0xA49878, 0xD4C8A8);
            slab(canvas, x, y, w, h, &bone, 3.0, 3.0, hex(0x7A6A4A));
            // ribs
            let mut i = 2.0;
            while i < w - 2.0 {
                canvas.fill_rect(x + i, 23.0, 2.0, 8.0, hex(0xB4A888));
                i += 4.0;
            }
            // skull
            canvas.fill_rect(21.0, 23.0, 6.0, 5.0, hex(0xE4D8B8));
            canvas.pixel(22.0, 24.0, hex(0x1A1A1A));
            canvas.pixel(25.0, 24.0, hex(0x1A1A1A));
            canvas.pixel(23.0, 26.0, hex(0x3A3A3A));
            canvas.pixel(24.0, 26.0, hex(0x3A3A3A));
            cast_shadow(canvas, x, bottom, w);
        }
        ChestId::Stormweave => {
            let cloth = tones(0x2A3A5A, 0x1A2A4A, 0x3A4A6A);
            slab(canvas, x, y, w, h, &cloth, 3.0, 3.0, hex(0x0A1A3A));
            // zigzag bolts
            for i in 0..3 {
                let sx = x + 4.0 + i as f64 * 8.0;
                for (dx, dy) in [(0.0, 23.0), (1.0, 24.0), (0.0, 25.0), (1.0, 26.0), (0.0, 27.0)] {
                    canvas.pixel(sx + dx, dy, hex(0x88CCFF));
                }
            }
            cast_shadow(canvas, x, bottom, w);
        }
        ChestId::BloodforgeMail => {
            let mail = tones(0x4A1A1A, 0x3A0A0A, 0x6A2A2A);
            slab(canvas, x, y, w, h, &mail, 3.0, 3.0, hex(0x1A0000));
            chain_links(canvas, x, w, hex(0x2A0A0A));
            canvas.pixel(x + 4.0, 25.0, BLOOD_GLOW);
            canvas.pixel(x + w - 5.0, 25.0, BLOOD_GLOW);
            canvas.pixel(x + mid, 24.0, BLOOD_GLOW);
            cast_shadow(canvas, x, bottom, w);
        }
    }
}

/// Alternating link dots over the torso
fn chain_links(canvas: &mut Canvas, x: f64, w: f64, color: Color) {
    for iy in (24..33).step_by(2) {
        let mut ix = x + 1.0;
        while ix < x + w - 1.0 {
            canvas.pixel(ix, iy as f64, color);
            ix += 2.0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use runeforge_core::{BodyType, CharacterConfig, ChestStyle};

    #[test]
    fn test_chest_width_follows_silhouette() {
        let config = CharacterConfig::default();
        let skin = Triad::skin(&config);
        for body in BodyType::ALL {
            let silhouette = BodySilhouette::new(Some(*body), Some(ChestStyle::Slim), None);
            let mut canvas = Canvas::new(48, 1);
            draw_chest(&mut canvas, ChestId::Chainmail, &silhouette, &skin);
            let left = silhouette.torso_x as u32;
            assert!(canvas.frame().get_pixel(left, 26).unwrap()[3] > 0);
            assert_eq!(canvas.frame().get_pixel(left - 3, 26).unwrap()[3], 0);
        }
    }

    #[test]
    fn test_harness_shows_skin() {
        let config = CharacterConfig::default();
        let skin = Triad::skin(&config);
        let mut canvas = Canvas::new(48, 1);
        draw_chest(&mut canvas, ChestId::BerserkerHarness, &BodySilhouette::default(), &skin);
        let [r, g, b] = config.skin_base.rgb_bytes();
        assert_eq!(canvas.frame().get_pixel(30, 27), Some([r, g, b, 255]));
    }
}
