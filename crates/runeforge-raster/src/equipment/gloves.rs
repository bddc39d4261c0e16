use runeforge_core::{hex, BodySilhouette, Color, GlovesId};

use crate::canvas::Canvas;
use crate::palette::{RITUAL_RED, RUNE_CYAN};

/// Row where gloved hands start on every body type
pub const GLOVE_HAND_Y: f64 = 35.0;
const GLOVE_HAND_H: f64 = 3.0;

/// Forearm cuff and hand covering of one pair of gloves
struct Pair {
    cuff: f64,
    base: Color,
    /// Lighter band at the top of the cuff
    band: Option<(Color, f64)>,
    edge: Option<Color>,
    hand: Color,
}

impl Pair {
    fn new(cuff: f64, base: u32, hand: u32) -> Self {
        Self {
            cuff,
            base: hex(base),
            band: None,
            edge: None,
            hand: hex(hand),
        }
    }

    fn band(mut self, color: u32, h: f64) -> Self {
        self.band = Some((hex(color), h));
        self
    }

    fn edge(mut self, color: u32) -> Self {
        self.edge = Some(hex(color));
        self
    }
}

fn pair(id: GlovesId) -> Pair {
    match id {
        GlovesId::LeatherWraps => Pair::new(5.0, 0x8B6914, 0x7B5904).band(0x9B7924, 2.0),
        GlovesId::FurGauntlets => Pair::new(8.0, 0x7A6A5A, 0x6A5A4A).band(0x9A8A6A, 3.0),
        GlovesId::IronBracers => Pair::new(10.0, 0x7A7A7A, 0x6A6A6A)
            .band(0x9A9A9A, 3.0)
            .edge(0x4A4A4A),
        GlovesId::BerserkerWraps => Pair::new(6.0, 0x4A2A1A, 0x3A1A0A),
        GlovesId::RunicGauntlets => Pair::new(10.0, 0x4A4A5A, 0x3A3A4A)
            .band(0x5A5A6A, 3.0)
            .edge(0x2A2A3A),
        GlovesId::SpikedFists => Pair::new(6.0, 0x5A5A5A, 0x4A4A4A).edge(0x3A3A3A),
        GlovesId::DragonscaleGrips => Pair::new(8.0, 0x2A5A3A, 0x1A4A2A).band(0x3A6A4A, 2.0),
        GlovesId::EmberWraps => Pair::new(7.0, 0x4A2A0A, 0x3A1A00),
    }
}

/// Gloves over the lower arms and hands. The cuff never rises above the
/// elbow, so the upper arm keeps its bare pixels.
pub fn draw_gloves(canvas: &mut Canvas, id: GlovesId, body: &BodySilhouette) {
    let spec = pair(id);
    let w = body.arm_w;
    let arm_end = body.arm_y + body.arm_len;
    let top = (arm_end - spec.cuff).max(body.elbow_y());
    let cuff = arm_end - top;

    for x in body.arm_xs() {
        canvas.fill_rect(x, top, w, cuff, spec.base);
        if let Some((color, h)) = spec.band {
            canvas.fill_rect(x, top, w, h.min(cuff), color);
        }
        if let Some(edge) = spec.edge {
            canvas.outline(x, top, w, cuff, edge);
        }
    }

    let [lx, rx] = body.arm_xs();
    let dots = |canvas: &mut Canvas, points: &[(f64, f64)], color: Color| {
        for (dx, dy) in points {
            let y = top + dy;
            if y < arm_end {
                canvas.pixel(lx + dx, y, color);
                canvas.pixel(rx + dx, y, color);
            }
        }
    };

    match id {
        GlovesId::FurGauntlets => {
            for i in 0..w as usize {
                let i = i as f64;
                canvas.pixel(lx + i, top + 1.0, hex(0xAA9A7A));
                canvas.pixel(rx + i, top + 1.0, hex(0xAA9A7A));
            }
        }
        GlovesId::IronBracers => dots(canvas, &[(1.0, 2.0), (1.0, 6.0)], hex(0xAAAAAA)),
        GlovesId::BerserkerWraps => dots(canvas, &[(1.0, 2.0), (2.0, 4.0)], RITUAL_RED),
        GlovesId::RunicGauntlets => {
            dots(canvas, &[(1.0, 3.0), (2.0, 5.0), (1.0, 7.0)], RUNE_CYAN)
        }
        GlovesId::SpikedFists => {
            for dy in [1.0, 3.0] {
                canvas.pixel(lx - 1.0, top + dy, hex(0x8A8A8A));
                canvas.pixel(rx + w, top + dy, hex(0x8A8A8A));
            }
        }
        GlovesId::DragonscaleGrips => {
            dots(canvas, &[(1.0, 2.0), (1.0, 4.0), (1.0, 6.0)], hex(0x4A8A5A))
        }
        GlovesId::EmberWraps => {
            dots(canvas, &[(1.0, 2.0), (2.0, 4.0)], hex(0xFF6600));
            dots(canvas, &[(1.0, 6.0)], hex(0xFF4400));
        }
        GlovesId::LeatherWraps => {}
    }

    for x in body.arm_xs() {
        canvas.fill_rect(x, GLOVE_HAND_Y, w, GLOVE_HAND_H, spec.hand);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use runeforge_core::BodyType;

    #[test]
    fn test_gloves_stay_below_elbow() {
        for body in BodyType::ALL {
            let silhouette = BodySilhouette::new(Some(*body), None, None);
            for id in GlovesId::ALL {
                let mut canvas = Canvas::new(48, 1);
                draw_gloves(&mut canvas, *id, &silhouette);
                for (x, y, px) in canvas.frame().pixels() {
                    if px[3] > 0 {
                        assert!(y as f64 >= silhouette.elbow_y(), "{id} on {body} at {x},{y}");
                    }
                }
            }
        }
    }

    #[test]
    fn test_glove_hands_at_fixed_row() {
        let silhouette = BodySilhouette::new(Some(BodyType::Scout), None, None);
        let mut canvas = Canvas::new(48, 1);
        draw_gloves(&mut canvas, GlovesId::LeatherWraps, &silhouette);
        assert_eq!(canvas.frame().get_pixel(10, 36), Some([0x7B, 0x59, 0x04, 255]));
        assert_eq!(canvas.frame().get_pixel(10, 38).unwrap()[3], 0);
    }
}
