//! Character composition
//!
//! Paints body parts and equipment in a fixed order onto a shared canvas.
//! Each later step is allowed to cover earlier ones: boots over the ground
//! shadow, helmet instead of hair, the weapon over everything.

use runeforge_core::{
    BodySilhouette, CharacterConfig, EquippedItems, ImageFrame, Slot, CHARACTER_GRID,
};
use tracing::{debug, trace};

use crate::canvas::{Canvas, Layer};
use crate::equipment::{
    draw_boots, draw_chest, draw_gloves, draw_helmet, draw_pants, draw_weapon,
};
use crate::palette::Triad;
use crate::parts::{
    draw_arms, draw_bare_feet, draw_beard, draw_eyes, draw_face_paint, draw_ground_shadow,
    draw_hair, draw_head, draw_legs, draw_mouth, draw_scar, draw_torso,
};

/// Paint a character; the canvas is not cleared first.
///
/// `offset` displaces the whole figure in grid units without touching its
/// internal coordinates. The canvas drawing state is the same on return.
pub fn draw_character(
    canvas: &mut Canvas,
    config: &CharacterConfig,
    equipped: &EquippedItems,
    offset: (f64, f64),
) {
    let body = BodySilhouette::of(config);
    let skin = Triad::skin(config);
    let outer = canvas.layer();

    canvas.save();
    canvas.translate(offset.0, offset.1);

    step(canvas, Layer::Shadow, draw_ground_shadow);

    step(canvas, Layer::Feet, |c| match equipped.boots() {
        Some(boots) => draw_boots(c, boots),
        None => draw_bare_feet(c, &skin),
    });

    step(canvas, Layer::Legs, |c| match equipped.pants() {
        Some(pants) => draw_pants(c, pants, &body),
        None => draw_legs(c, &body, &skin),
    });

    step(canvas, Layer::Torso, |c| match equipped.chest() {
        Some(chest) => draw_chest(c, chest, &body, &skin),
        None => draw_torso(c, &body, &skin),
    });

    step(canvas, Layer::Arms, |c| draw_arms(c, &body, &skin));
    if let Some(gloves) = equipped.gloves() {
        step(canvas, Layer::Gloves, |c| draw_gloves(c, gloves, &body));
    }

    step(canvas, Layer::Head, |c| draw_head(c, config.head(), &skin));

    step(canvas, Layer::Face, |c| {
        draw_eyes(c, config.eyes());
        draw_mouth(c, skin.shadow);
        if let Some(beard) = config.beard() {
            draw_beard(c, beard, config.hair_color);
        }
        if let Some(scar) = config.scar() {
            draw_scar(c, scar);
        }
        if let Some(paint) = config.paint() {
            draw_face_paint(c, paint);
        }
    });

    match equipped.helmet() {
        Some(helmet) => step(canvas, Layer::Helmet, |c| draw_helmet(c, helmet)),
        None if !config.is_bald() => {
            step(canvas, Layer::Hair, |c| draw_hair(c, config.hair(), config.hair_color))
        }
        None => {}
    }

    if let Some(weapon) = equipped.weapon() {
        step(canvas, Layer::Weapon, |c| draw_weapon(c, weapon, &body));
    }

    canvas.restore();
    canvas.set_layer(outer);

    for slot in Slot::ALL {
        if let Some(id) = equipped.get(*slot) {
            if equipped.item(*slot).is_none() {
                debug!(%slot, id, "Unknown item, slot drawn bare");
            }
        }
    }
}

fn step(canvas: &mut Canvas, layer: Layer, draw: impl FnOnce(&mut Canvas)) {
    trace!(?layer, "Compositing layer");
    canvas.set_layer(layer);
    draw(canvas);
}

/// Render a character onto a fresh character-grid canvas
pub fn render_character(
    config: &CharacterConfig,
    equipped: &EquippedItems,
    scale: u32,
) -> ImageFrame {
    debug!(body = %config.body_type, scale, items = equipped.count(), "Rendering character");
    let mut canvas = Canvas::new(CHARACTER_GRID, scale);
    draw_character(&mut canvas, config, equipped, (0.0, 0.0));
    canvas.into_frame()
}

#[cfg(test)]
mod tests {
    use super::*;
    use runeforge_core::{BodyType, HairStyle, HelmetId, ItemId, WeaponId};

    #[test]
    fn test_default_character_layers() {
        let mut canvas = Canvas::new(CHARACTER_GRID, 1);
        draw_character(&mut canvas, &CharacterConfig::default(), &EquippedItems::new(), (0.0, 0.0));

        for layer in [Layer::Shadow, Layer::Feet, Layer::Legs, Layer::Torso, Layer::Arms, Layer::Head, Layer::Face, Layer::Hair] {
            assert!(canvas.layer_count(layer) > 0, "{layer:?}");
        }
        assert_eq!(canvas.layer_count(Layer::Weapon), 0);
        assert_eq!(canvas.layer_count(Layer::Helmet), 0);
    }

    #[test]
    fn test_bald_draws_no_hair() {
        let config = CharacterConfig::default().with_hair(HairStyle::Bald, runeforge_core::Color::BLACK);
        let mut canvas = Canvas::new(CHARACTER_GRID, 1);
        draw_character(&mut canvas, &config, &EquippedItems::new(), (0.0, 0.0));
        assert_eq!(canvas.layer_count(Layer::Hair), 0);
    }

    #[test]
    fn test_helmet_replaces_hair() {
        let equipped = EquippedItems::new().with(ItemId::Helmet(HelmetId::IronNasal));
        let mut canvas = Canvas::new(CHARACTER_GRID, 1);
        draw_character(&mut canvas, &CharacterConfig::default(), &equipped, (0.0, 0.0));
        assert_eq!(canvas.layer_count(Layer::Hair), 0);
        assert!(canvas.layer_count(Layer::Helmet) > 0);
    }

    #[test]
    fn test_offset_shifts_figure() {
        let config = CharacterConfig::default();
        let none = EquippedItems::new();
        let mut a = Canvas::new(CHARACTER_GRID + 4, 1);
        draw_character(&mut a, &config, &none, (0.0, 0.0));
        let mut b = Canvas::new(CHARACTER_GRID + 4, 1);
        draw_character(&mut b, &config, &none, (3.0, 2.0));

        assert_eq!(a.frame().opaque_count(), b.frame().opaque_count());
        assert_eq!(a.frame().get_pixel(24, 24), b.frame().get_pixel(27, 26));
        assert_eq!(b.transform(), Canvas::new(CHARACTER_GRID + 4, 1).transform());
    }

    #[test]
    fn test_render_character_size() {
        let config = CharacterConfig::default().with_body(BodyType::Scout);
        let equipped = EquippedItems::new().with(ItemId::Weapon(WeaponId::WarSpear));
        let frame = render_character(&config, &equipped, 4);
        assert_eq!((frame.width, frame.height), (192, 192));
    }
}
