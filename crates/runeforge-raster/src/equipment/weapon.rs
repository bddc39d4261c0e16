use runeforge_core::{hex, BodySilhouette, Color, WeaponId};

use crate::canvas::Canvas;
use crate::palette::{GOLD, RUNE_CYAN};

const HAFT: Color = hex(0x6B4226);
const HAFT_HI: Color = hex(0x7B5236);
const BRASS: Color = hex(0xC4A41A);
const BRASS_HI: Color = hex(0xE4C43A);
const BLADE: Color = hex(0xAAAAAA);
const BLADE_EDGE: Color = hex(0xCCCCCC);
const BLADE_TIP: Color = hex(0xDDDDDD);

/// Held weapon, anchored at the silhouette's weapon hand. Drawn last so it
/// crosses in front of everything.
pub fn draw_weapon(canvas: &mut Canvas, id: WeaponId, body: &BodySilhouette) {
    let hx = body.weapon_x;

    match id {
        WeaponId::BeardedAxe => {
            canvas.fill_rect(hx, 16.0, 2.0, 24.0, HAFT);
            canvas.fill_rect(hx, 16.0, 1.0, 24.0, HAFT_HI);
            canvas.fill_rect(hx + 2.0, 16.0, 5.0, 3.0, hex(0x8A8A8A));
            canvas.fill_rect(hx + 2.0, 19.0, 6.0, 5.0, hex(0x7A7A7A));
            canvas.fill_rect(hx + 3.0, 24.0, 5.0, 3.0, hex(0x8A8A8A));
            canvas.fill_rect(hx + 7.0, 18.0, 1.0, 8.0, BLADE_EDGE);
            canvas.fill_rect(hx + 2.0, 22.0, 3.0, 2.0, hex(0x6A6A6A));
        }
        WeaponId::Longsword => {
            canvas.fill_rect(hx + 1.0, 6.0, 3.0, 22.0, BLADE);
            canvas.fill_rect(hx + 1.0, 6.0, 1.0, 22.0, BLADE_EDGE);
            canvas.fill_rect(hx + 3.0, 6.0, 1.0, 22.0, hex(0x888888));
            canvas.fill_rect(hx + 1.0, 6.0, 3.0, 3.0, BLADE_TIP);
            // guard
            canvas.fill_rect(hx - 2.0, 28.0, 8.0, 2.0, BRASS);
            canvas.fill_rect(hx - 2.0, 28.0, 8.0, 1.0, BRASS_HI);
            // grip
            canvas.fill_rect(hx + 1.0, 30.0, 3.0, 6.0, HAFT);
            canvas.fill_rect(hx + 2.0, 30.0, 1.0, 6.0, HAFT_HI);
            canvas.fill_rect(hx, 36.0, 5.0, 2.0, BRASS);
        }
        WeaponId::WarSpear => {
            canvas.fill_rect(hx + 1.0, 4.0, 2.0, 36.0, HAFT);
            canvas.fill_rect(hx + 2.0, 4.0, 1.0, 36.0, HAFT_HI);
            canvas.fill_rect(hx, 0.0, 4.0, 6.0, hex(0x8A8A8A));
            canvas.fill_rect(hx + 1.0, -2.0, 2.0, 3.0, BLADE_EDGE);
            canvas.fill_rect(hx, 0.0, 1.0, 6.0, BLADE);
        }
        WeaponId::TwinSeax => {
            // off hand dagger sits at the far left edge on every body type
            for (grip, blade) in [(3.0, 2.0), (hx + 1.0, hx)] {
                canvas.fill_rect(grip, 24.0, 2.0, 12.0, HAFT);
                canvas.fill_rect(blade, 18.0, 4.0, 6.0, BLADE);
                canvas.fill_rect(blade, 18.0, 1.0, 6.0, BLADE_EDGE);
                canvas.fill_rect(grip, 16.0, 2.0, 3.0, BLADE_TIP);
            }
        }
        WeaponId::RunicHammer => {
            canvas.fill_rect(hx + 1.0, 12.0, 3.0, 28.0, HAFT);
            canvas.fill_rect(hx + 2.0, 12.0, 1.0, 28.0, HAFT_HI);
            canvas.fill_rect(hx - 4.0, 4.0, 12.0, 9.0, hex(0x5A5A6A));
            canvas.fill_rect(hx - 4.0, 4.0, 12.0, 3.0, hex(0x6A6A7A));
            canvas.outline(hx - 4.0, 4.0, 12.0, 9.0, hex(0x2A2A3A));
            for (dx, y) in [(-2.0, 7.0), (0.0, 8.0), (3.0, 7.0), (5.0, 8.0), (1.0, 10.0)] {
                canvas.pixel(hx + dx, y, RUNE_CYAN);
            }
        }
        WeaponId::FrostCleaver => {
            canvas.fill_rect(hx, 14.0, 2.0, 26.0, hex(0x4A6A7A));
            canvas.fill_rect(hx + 2.0, 10.0, 6.0, 4.0, hex(0x8AB4D0));
            canvas.fill_rect(hx + 2.0, 14.0, 7.0, 8.0, hex(0x6A9AB0));
            canvas.fill_rect(hx + 8.0, 13.0, 1.0, 10.0, hex(0xB0E0FF));
            canvas.outline(hx + 2.0, 10.0, 7.0, 12.0, hex(0x3A5A6A));
            canvas.pixel(hx + 4.0, 12.0, hex(0xE0F4FF));
            canvas.pixel(hx + 6.0, 16.0, hex(0xB0E0FF));
        }
        WeaponId::BloodthirstBlade => {
            canvas.fill_rect(hx + 1.0, 4.0, 3.0, 26.0, hex(0x8A3A3A));
            canvas.fill_rect(hx + 1.0, 4.0, 1.0, 26.0, hex(0xAA5A5A));
            canvas.fill_rect(hx + 3.0, 4.0, 1.0, 26.0, hex(0x6A1A1A));
            canvas.fill_rect(hx + 1.0, 4.0, 3.0, 3.0, hex(0xCC6666));
            canvas.fill_rect(hx - 2.0, 30.0, 8.0, 2.0, hex(0x4A1A1A));
            canvas.fill_rect(hx + 1.0, 32.0, 3.0, 5.0, hex(0x3A0A0A));
            // drip
            canvas.pixel(hx + 2.0, 2.0, hex(0xFF0000));
            canvas.pixel(hx + 1.0, 1.0, hex(0xCC0000));
        }
        WeaponId::ThunderMace => {
            canvas.fill_rect(hx + 1.0, 14.0, 2.0, 26.0, HAFT);
            canvas.fill_rect(hx - 2.0, 6.0, 8.0, 8.0, hex(0x7A7A7A));
            canvas.outline(hx - 2.0, 6.0, 8.0, 8.0, hex(0x3A3A3A));
            for (dx, y) in [(-3.0, 8.0), (-3.0, 10.0), (6.0, 8.0), (6.0, 10.0)] {
                canvas.pixel(hx + dx, y, hex(0x8A8A8A));
            }
            canvas.pixel(hx, 8.0, hex(0xFFFF44));
            canvas.pixel(hx + 3.0, 10.0, hex(0xFFFF44));
        }
        WeaponId::ShieldOfOdin => {
            // round shield strapped to the off arm
            let wood = hex(0x5A4A3A);
            canvas.fill_rect(0.0, 20.0, 12.0, 14.0, wood);
            canvas.fill_rect(1.0, 19.0, 10.0, 1.0, wood);
            canvas.fill_rect(1.0, 34.0, 10.0, 1.0, wood);
            canvas.outline(0.0, 20.0, 12.0, 14.0, hex(0x2A1A0A));
            canvas.fill_rect(0.0, 20.0, 12.0, 2.0, hex(0x7A6A4A));
            canvas.fill_rect(0.0, 32.0, 12.0, 2.0, hex(0x7A6A4A));
            canvas.fill_rect(4.0, 25.0, 4.0, 4.0, BRASS);
            canvas.pixel(5.0, 26.0, BRASS_HI);
            for (x, y) in [(2.0, 23.0), (9.0, 23.0), (2.0, 30.0), (9.0, 30.0)] {
                canvas.pixel(x, y, RUNE_CYAN);
            }
        }
        WeaponId::RagnarokGreatsword => {
            canvas.fill_rect(hx, 0.0, 4.0, 30.0, hex(0x8A8AAA));
            canvas.fill_rect(hx, 0.0, 1.0, 30.0, hex(0xAAAACC));
            canvas.fill_rect(hx + 3.0, 0.0, 1.0, 30.0, hex(0x6A6A8A));
            canvas.fill_rect(hx, 0.0, 4.0, 3.0, hex(0xCCCCEE));
            let mut y = 4.0;
            while y < 28.0 {
                canvas.pixel(hx + 1.0, y, GOLD);
                canvas.pixel(hx + 2.0, y + 1.0, GOLD);
                y += 5.0;
            }
            canvas.fill_rect(hx - 4.0, 30.0, 12.0, 3.0, BRASS);
            canvas.fill_rect(hx - 4.0, 30.0, 12.0, 1.0, BRASS_HI);
            canvas.fill_rect(hx, 33.0, 4.0, 8.0, hex(0x4A2A1A));
            canvas.fill_rect(hx + 1.0, 33.0, 2.0, 8.0, hex(0x5A3A2A));
            canvas.fill_rect(hx - 1.0, 41.0, 6.0, 3.0, BRASS);
            canvas.pixel(hx + 1.0, 42.0, hex(0xFF3333));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use runeforge_core::BodyType;

    fn leftmost_in_hand_column(body: BodyType) -> u32 {
        let silhouette = BodySilhouette::new(Some(body), None, None);
        let mut canvas = Canvas::new(48, 1);
        draw_weapon(&mut canvas, WeaponId::BeardedAxe, &silhouette);
        (0..48)
            .find(|x| canvas.frame().get_pixel(*x, 30).unwrap()[3] > 0)
            .unwrap()
    }

    #[test]
    fn test_weapon_follows_hand_anchor() {
        assert_eq!(leftmost_in_hand_column(BodyType::Warrior), 42);
        assert_eq!(leftmost_in_hand_column(BodyType::Scout), 38);
    }

    #[test]
    fn test_every_weapon_paints() {
        let silhouette = BodySilhouette::default();
        for id in WeaponId::ALL {
            let mut canvas = Canvas::new(48, 1);
            draw_weapon(&mut canvas, *id, &silhouette);
            assert!(canvas.frame().opaque_count() > 20, "{id}");
        }
    }
}
