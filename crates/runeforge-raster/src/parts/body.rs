//! Bare torso, limbs and feet

use runeforge_core::BodySilhouette;

use crate::canvas::Canvas;
use crate::palette::{alpha, shade, Triad, LOINCLOTH, LOINCLOTH_HI};

/// Translucent ellipse under the feet
pub fn draw_ground_shadow(canvas: &mut Canvas) {
    canvas.fill_ellipse(24.0, 47.0, 10.0, 2.0, shade(0.3));
}

pub fn draw_bare_feet(canvas: &mut Canvas, skin: &Triad) {
    for x in [14.0, 28.0] {
        canvas.fill_rect(x, 42.0, 6.0, 3.0, skin.shadow);
        canvas.fill_rect(x + 1.0, 42.0, 4.0, 2.0, skin.base);
    }
}

/// Both bare legs
pub fn draw_legs(canvas: &mut Canvas, body: &BodySilhouette, skin: &Triad) {
    let ol = skin.outline();
    let (y, w, h) = (body.leg_y, body.leg_w, body.leg_h);

    for x in body.leg_xs() {
        canvas.fill_rect(x, y, w, h, skin.base);
        canvas.fill_rect(x, y, w, 2.0, skin.highlight);
        canvas.fill_rect(x, y + h - 2.0, w, 2.0, skin.shadow);
        canvas.outline(x, y, w, h, ol);
        if body.muscular_legs {
            // thigh
            canvas.fill_rect(x + 1.0, y + 1.0, 5.0, 2.0, alpha(skin.highlight, 0x60));
        }
    }
}

/// Bare torso with loincloth
pub fn draw_torso(canvas: &mut Canvas, body: &BodySilhouette, skin: &Triad) {
    let (x, y, w, h) = (body.torso_x, body.torso_y, body.torso_w, body.torso_h);
    let shad = skin.shadow;

    canvas.fill_rect(x, y, w, h, skin.base);
    canvas.outline(x, y, w, h, skin.outline());
    canvas.fill_rect(x, y, w, 3.0, skin.highlight);
    canvas.fill_rect(x, y + h - 3.0, w, 3.0, shad);

    if body.wide {
        canvas.fill_rect(20.0, 23.0, 1.0, 6.0, shad);
        canvas.fill_rect(27.0, 23.0, 1.0, 6.0, shad);
        // pecs
        canvas.fill_rect(14.0, 22.0, 8.0, 1.0, alpha(shad, 0x80));
        canvas.fill_rect(26.0, 22.0, 8.0, 1.0, alpha(shad, 0x80));
        // abs
        canvas.fill_rect(21.0, 27.0, 6.0, 1.0, alpha(shad, 0x60));
        canvas.fill_rect(21.0, 29.0, 6.0, 1.0, alpha(shad, 0x60));
        canvas.pixel(24.0, 30.0, shad);

        canvas.fill_rect(16.0, 32.0, 16.0, 2.0, LOINCLOTH);
        canvas.fill_rect(16.0, 32.0, 16.0, 1.0, LOINCLOTH_HI);
    } else {
        canvas.fill_rect(21.0, 23.0, 1.0, 5.0, alpha(shad, 0x50));
        canvas.fill_rect(26.0, 23.0, 1.0, 5.0, alpha(shad, 0x50));

        canvas.fill_rect(18.0, 32.0, 12.0, 2.0, LOINCLOTH);
        canvas.fill_rect(18.0, 32.0, 12.0, 1.0, LOINCLOTH_HI);
    }
}

/// Both bare arms with hands
pub fn draw_arms(canvas: &mut Canvas, body: &BodySilhouette, skin: &Triad) {
    let ol = skin.outline();
    let (y, w, len) = (body.arm_y, body.arm_w, body.arm_len);
    // shoulder and wrist bands are thicker on the long arms
    let band = if body.warrior { 3.0 } else { 2.0 };

    for x in body.arm_xs() {
        canvas.fill_rect(x, y, w, len, skin.base);
        canvas.fill_rect(x, y, w, band, skin.highlight);
        canvas.fill_rect(x, y + len - band, w, band, skin.shadow);
        canvas.outline(x, y, w, len, ol);
        if body.warrior {
            // bicep
            canvas.fill_rect(x + 1.0, y + 2.0, 3.0, 2.0, alpha(skin.highlight, 0x80));
        }

        canvas.fill_rect(x, body.hand_y, w, body.hand_h, skin.base);
        canvas.fill_rect(x, body.hand_y + body.hand_h - 1.0, w, 1.0, skin.shadow);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use runeforge_core::{BodyType, CharacterConfig, ChestStyle, LegStyle};

    fn skin() -> Triad {
        Triad::skin(&CharacterConfig::default())
    }

    #[test]
    fn test_arms_end_at_hand_row() {
        for body in BodyType::ALL {
            let silhouette = BodySilhouette::new(Some(*body), None, None);
            let mut canvas = Canvas::new(48, 1);
            draw_arms(&mut canvas, &silhouette, &skin());

            let bottom = (silhouette.hand_y + silhouette.hand_h) as u32;
            let x = silhouette.arm_left_x as u32;
            assert!(canvas.frame().get_pixel(x, bottom - 1).unwrap()[3] > 0);
            assert_eq!(canvas.frame().get_pixel(x, bottom).unwrap()[3], 0);
        }
    }

    #[test]
    fn test_broad_chest_widens_torso() {
        let slim = BodySilhouette::new(Some(BodyType::Scout), Some(ChestStyle::Slim), None);
        let broad = BodySilhouette::new(Some(BodyType::Scout), Some(ChestStyle::Broad), None);

        let mut a = Canvas::new(48, 1);
        draw_torso(&mut a, &slim, &skin());
        let mut b = Canvas::new(48, 1);
        draw_torso(&mut b, &broad, &skin());

        assert!(b.frame().opaque_count() > a.frame().opaque_count());
        assert_eq!(a.frame().get_pixel(12, 25).unwrap()[3], 0);
        assert!(b.frame().get_pixel(12, 25).unwrap()[3] > 0);
    }

    #[test]
    fn test_muscular_legs_are_wider() {
        let normal = BodySilhouette::new(None, None, Some(LegStyle::Normal));
        let muscular = BodySilhouette::new(None, None, Some(LegStyle::Muscular));

        let mut a = Canvas::new(48, 1);
        draw_legs(&mut a, &normal, &skin());
        let mut b = Canvas::new(48, 1);
        draw_legs(&mut b, &muscular, &skin());

        assert_eq!(a.frame().opaque_count(), 2 * 6 * 10);
        assert_eq!(b.frame().opaque_count(), 2 * 8 * 10);
    }

    #[test]
    fn test_ground_shadow_is_translucent() {
        let mut canvas = Canvas::new(48, 1);
        draw_ground_shadow(&mut canvas);
        let px = canvas.frame().get_pixel(24, 46).unwrap();
        assert!(px[3] > 0 && px[3] < 255);
    }
}
