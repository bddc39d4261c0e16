//! Character composition properties: determinism, z-order and the
//! equipped/unequipped scenarios

use runeforge_core::{
    BodySilhouette, BootsId, CharacterConfig, ChestId, EquippedItems, GlovesId, HairStyle,
    HelmetId, ItemId, PantsId, Slot, WeaponId, CHARACTER_GRID,
};
use runeforge_raster::equipment::draw_weapon;
use runeforge_raster::{draw_character, render_character, Canvas, Layer};

fn paint(config: &CharacterConfig, equipped: &EquippedItems, scale: u32) -> Canvas {
    let mut canvas = Canvas::new(CHARACTER_GRID, scale);
    draw_character(&mut canvas, config, equipped, (0.0, 0.0));
    canvas
}

fn full_kit() -> EquippedItems {
    EquippedItems::new()
        .with(ItemId::Helmet(HelmetId::IronNasal))
        .with(ItemId::Chest(ChestId::Chainmail))
        .with(ItemId::Gloves(GlovesId::IronBracers))
        .with(ItemId::Pants(PantsId::WoolTrousers))
        .with(ItemId::Boots(BootsId::LeatherBoots))
        .with(ItemId::Weapon(WeaponId::BeardedAxe))
}

/// Columns that hold at least one pixel of `layer`
fn layer_columns(canvas: &Canvas, layer: Layer) -> Vec<u32> {
    (0..canvas.width())
        .filter(|&x| (0..canvas.height()).any(|y| canvas.layer_at(x, y) == Some(layer)))
        .collect()
}

#[test]
fn test_repeated_renders_are_identical() {
    let configs = [CharacterConfig::default(), CharacterConfig::scout()];
    for config in &configs {
        for equipped in [EquippedItems::new(), full_kit()] {
            let a = render_character(config, &equipped, 3);
            let b = render_character(config, &equipped, 3);
            assert_eq!(a, b);
            assert_eq!(a.digest(), b.digest());
        }
    }
}

#[test]
fn test_redraw_on_cleared_canvas_matches_fresh() {
    let config = CharacterConfig::default();
    let equipped = full_kit();
    let mut canvas = paint(&config, &EquippedItems::new(), 2);

    canvas.clear();
    draw_character(&mut canvas, &config, &equipped, (0.0, 0.0));

    assert_eq!(canvas.frame(), &render_character(&config, &equipped, 2));
}

#[test]
fn test_no_hair_under_any_helmet() {
    for helmet in HelmetId::ALL {
        for style in HairStyle::ALL {
            let config = CharacterConfig::default().with_hair(*style, runeforge_core::hex(0xD4A44A));
            let equipped = EquippedItems::new().with(ItemId::Helmet(*helmet));
            let canvas = paint(&config, &equipped, 1);

            assert_eq!(canvas.layer_count(Layer::Hair), 0, "{helmet} over {style}");
            assert!(canvas.layer_count(Layer::Helmet) > 0, "{helmet}");
        }
    }
}

#[test]
fn test_weapon_is_never_covered() {
    for config in [CharacterConfig::default(), CharacterConfig::scout()] {
        let body = BodySilhouette::of(&config);
        for weapon in WeaponId::ALL {
            let mut alone = Canvas::new(CHARACTER_GRID, 1);
            alone.set_layer(Layer::Weapon);
            draw_weapon(&mut alone, *weapon, &body);

            let equipped = full_kit().with(ItemId::Weapon(*weapon));
            let full = paint(&config, &equipped, 1);

            for (x, y, _) in alone.frame().pixels() {
                if alone.layer_at(x, y) == Some(Layer::Weapon) {
                    assert_eq!(
                        full.layer_at(x, y),
                        Some(Layer::Weapon),
                        "{weapon} covered at ({x}, {y})"
                    );
                }
            }
        }
    }
}

#[test]
fn test_gloves_leave_upper_arm_untouched() {
    for config in [CharacterConfig::default(), CharacterConfig::scout()] {
        let elbow = BodySilhouette::of(&config).elbow_y() as u32;
        let bare = render_character(&config, &EquippedItems::new(), 1);

        for gloves in GlovesId::ALL {
            let gloved = render_character(
                &config,
                &EquippedItems::new().with(ItemId::Gloves(*gloves)),
                1,
            );
            assert_ne!(bare, gloved, "{gloves} drew nothing");
            for y in 0..elbow {
                for x in 0..bare.width {
                    assert_eq!(
                        bare.get_pixel(x, y),
                        gloved.get_pixel(x, y),
                        "{gloves} changed ({x}, {y}) above the elbow"
                    );
                }
            }
        }
    }
}

#[test]
fn test_unequipped_warrior() {
    let canvas = paint(&CharacterConfig::default(), &EquippedItems::new(), 4);
    assert_eq!(canvas.width(), 192);

    for layer in [
        Layer::Feet,
        Layer::Legs,
        Layer::Torso,
        Layer::Arms,
        Layer::Head,
        Layer::Hair,
    ] {
        assert!(canvas.layer_count(layer) > 0, "{layer:?} missing");
    }
    assert_eq!(canvas.layer_count(Layer::Weapon), 0);
    assert_eq!(canvas.layer_count(Layer::Helmet), 0);
    assert_eq!(canvas.layer_count(Layer::Gloves), 0);
}

#[test]
fn test_fully_equipped_scout() {
    let config = CharacterConfig::scout();
    let bare = paint(&config, &EquippedItems::new(), 1);
    let dressed = paint(&config, &full_kit(), 1);

    // boots repaint the feet region
    let feet_changed = (0..48)
        .flat_map(|x| (40..48).map(move |y| (x, y)))
        .filter(|&(x, y)| bare.layer_at(x, y) == Some(Layer::Feet))
        .any(|(x, y)| bare.frame().get_pixel(x, y) != dressed.frame().get_pixel(x, y));
    assert!(feet_changed);

    assert_eq!(dressed.layer_count(Layer::Hair), 0);
    assert!(dressed.layer_count(Layer::Helmet) > 0);

    // the axe haft sits on the scout's hand anchor
    assert_eq!(layer_columns(&dressed, Layer::Weapon).first(), Some(&38));

    let warrior = paint(&CharacterConfig::default(), &full_kit(), 1);
    assert_eq!(layer_columns(&warrior, Layer::Weapon).first(), Some(&42));
}

#[test]
fn test_unknown_chest_renders_bare() {
    for config in [CharacterConfig::default(), CharacterConfig::scout()] {
        let bare = render_character(&config, &EquippedItems::new(), 2);
        let unknown = render_character(
            &config,
            &EquippedItems::new().with_raw(Slot::Chest, "does-not-exist"),
            2,
        );
        assert_eq!(bare.digest(), unknown.digest());
        assert_eq!(bare.diff_count(&unknown), 0);
    }
}

#[test]
fn test_unknown_style_ids_fall_back_to_defaults() {
    let mut config = CharacterConfig::default();
    config.head_style = "trapezoid".into();
    config.hair_style = "dreadlocks".into();

    let canvas = paint(&config, &EquippedItems::new(), 1);
    let plain = paint(&CharacterConfig::default(), &EquippedItems::new(), 1);
    assert_eq!(canvas.frame(), plain.frame());
    assert!(canvas.layer_count(Layer::Hair) > 0);
}
