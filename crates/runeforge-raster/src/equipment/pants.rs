use runeforge_core::{hex, BodySilhouette, Color, PantsId};

use super::{slab, tones};
use crate::canvas::Canvas;
use crate::palette::{Triad, RUNE_CYAN};

/// Pants replace both bare legs
pub fn draw_pants(canvas: &mut Canvas, id: PantsId, body: &BodySilhouette) {
    let (lx, rx, w) = (body.leg_left_x, body.leg_right_x, body.leg_w);
    let (y, h) = (body.leg_y, body.leg_h);
    // left edge to right edge of both legs plus one unit each side
    let span = rx + w - lx + 2.0;

    let legs = |canvas: &mut Canvas, tones: &Triad, top: f64, edge: Color| {
        for x in [lx, rx] {
            slab(canvas, x, y, w, h, tones, top, 0.0, edge);
        }
    };
    let dots = |canvas: &mut Canvas, points: &[(f64, f64)], color: Color| {
        for (dx, py) in points {
            canvas.pixel(lx + dx, *py, color);
            canvas.pixel(rx + dx, *py, color);
        }
    };

    match id {
        PantsId::WoolTrousers => {
            legs(canvas, &tones(0x6A5A3A, 0x6A5A3A, 0x7A6A4A), 2.0, hex(0x3A2A1A));
            // belt
            canvas.fill_rect(lx - 1.0, y - 1.0, rx - lx + w + 3.0, 2.0, hex(0x4A3A2A));
            canvas.pixel(23.0, y - 1.0, hex(0xC4A41A));
            canvas.pixel(24.0, y - 1.0, hex(0xC4A41A));
        }
        PantsId::LeatherLeggings => {
            legs(canvas, &tones(0x5A4A2A, 0x5A4A2A, 0x6A5A3A), 3.0, hex(0x2A1A0A));
            // stitching
            for py in (35..42).step_by(2) {
                dots(canvas, &[(1.0, py as f64)], hex(0x7A6A4A));
            }
        }
        PantsId::FrostGreaves => {
            // fur wraps over plated shins
            legs(canvas, &tones(0x5A6A7A, 0x5A6A7A, 0x8A7A6A), 3.0, hex(0x2A3A4A));
            let mut i = 0.0;
            while i < w {
                dots(canvas, &[(i, y + 1.0)], hex(0x9A8A7A));
                i += 2.0;
            }
            dots(canvas, &[(2.0, 38.0)], hex(0xB0E0FF));
        }
        PantsId::BerserkerSkirt => {
            let skirt = tones(0x5A4A3A, 0x5A4A3A, 0x7A6A4A);
            slab(canvas, lx - 1.0, y, span, 6.0, &skirt, 2.0, 0.0, hex(0x2A1A0A));
            let mut i = 0.0;
            while i < span {
                canvas.pixel(lx - 1.0 + i, 36.0, hex(0x8A8A8A));
                i += 3.0;
            }
            canvas.fill_rect(lx, 39.0, w, 4.0, skirt.base);
            canvas.fill_rect(rx, 39.0, w, 4.0, skirt.base);
        }
        PantsId::RunicLegguards => {
            legs(canvas, &tones(0x4A4A5A, 0x4A4A5A, 0x5A5A6A), 2.0, hex(0x2A2A3A));
            dots(canvas, &[(2.0, 36.0), (3.0, 38.0), (2.0, 40.0)], RUNE_CYAN);
        }
        PantsId::IronChainSkirt => {
            let iron = hex(0x7A7A7A);
            canvas.fill_rect(lx - 1.0, y, span, 4.0, iron);
            canvas.fill_rect(lx, 37.0, w, 6.0, iron);
            canvas.fill_rect(rx, 37.0, w, 6.0, iron);
            for iy in (34..42).step_by(2) {
                let mut ix = lx;
                while ix < rx + w {
                    canvas.pixel(ix, iy as f64, hex(0x5A5A5A));
                    ix += 2.0;
                }
            }
            canvas.outline(lx - 1.0, y, span, 4.0, hex(0x3A3A3A));
        }
        PantsId::ShadowLeggings => {
            legs(canvas, &tones(0x1A1A2A, 0x1A1A2A, 0x2A2A3A), 2.0, hex(0x0A0A1A));
            dots(canvas, &[(1.0, 37.0), (3.0, 39.0)], hex(0x3A3A5A));
        }
        PantsId::FlameGuards => {
            let cloth = hex(0x3A1A0A);
            legs(canvas, &Triad::new(cloth, cloth, cloth), 0.0, hex(0x1A0A00));
            dots(canvas, &[(2.0, 37.0)], hex(0xFF6600));
            dots(canvas, &[(1.0, 39.0)], hex(0xFF4400));
            dots(canvas, &[(3.0, 41.0)], hex(0xFF8800));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use runeforge_core::LegStyle;

    #[test]
    fn test_pants_cover_both_legs() {
        for style in LegStyle::ALL {
            let body = BodySilhouette::new(None, None, Some(*style));
            for id in PantsId::ALL {
                let mut canvas = Canvas::new(48, 1);
                draw_pants(&mut canvas, *id, &body);
                let mid = (body.leg_y + 8.0) as u32;
                for x in body.leg_xs() {
                    assert!(canvas.frame().get_pixel(x as u32 + 1, mid).unwrap()[3] > 0, "{id}");
                }
            }
        }
    }

    #[test]
    fn test_muscular_pants_are_wider() {
        let normal = BodySilhouette::new(None, None, Some(LegStyle::Normal));
        let thick = BodySilhouette::new(None, None, Some(LegStyle::Muscular));
        let mut a = Canvas::new(48, 1);
        draw_pants(&mut a, PantsId::ShadowLeggings, &normal);
        let mut b = Canvas::new(48, 1);
        draw_pants(&mut b, PantsId::ShadowLeggings, &thick);
        assert!(b.frame().opaque_count() > a.frame().opaque_count());
    }
}
