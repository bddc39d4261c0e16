//! Every catalog identifier draws something through the public entry points

use runeforge_core::{
    BeardStyle, BodyType, CharacterConfig, ChestStyle, EquippedItems, FacePaint, HairStyle,
    HeadStyle, ItemId, LegStyle, MonsterId, ScarStyle, SkillId, Slot, CHARACTER_GRID, ITEM_GRID,
    SKIN_PALETTES,
};
use runeforge_raster::{render_character, render_item, render_monster, render_skill_frame};

#[test]
fn test_every_body_combination_paints() {
    for body in BodyType::ALL {
        for chest in ChestStyle::ALL {
            for legs in LegStyle::ALL {
                let config = CharacterConfig::default()
                    .with_body(*body)
                    .with_chest(*chest)
                    .with_legs(*legs);
                let frame = render_character(&config, &EquippedItems::new(), 1);
                assert!(!frame.is_blank(), "{body}/{chest}/{legs}");
            }
        }
    }
}

#[test]
fn test_every_head_and_hair_style_changes_the_figure() {
    let base = render_character(&CharacterConfig::default(), &EquippedItems::new(), 1);

    for head in HeadStyle::ALL {
        let frame = render_character(&CharacterConfig::default().with_head(*head), &EquippedItems::new(), 1);
        assert!(!frame.is_blank(), "{head}");
    }

    let bald = CharacterConfig::default().with_hair(HairStyle::Bald, runeforge_core::hex(0x6B3A2A));
    let bald = render_character(&bald, &EquippedItems::new(), 1);
    for style in HairStyle::ALL {
        let config = CharacterConfig::default().with_hair(*style, runeforge_core::hex(0x6B3A2A));
        let frame = render_character(&config, &EquippedItems::new(), 1);
        if *style == HairStyle::Bald {
            assert_eq!(frame, bald);
        } else {
            assert_ne!(frame, bald, "{style} drew no hair");
        }
    }
    assert_ne!(base, bald);
}

#[test]
fn test_every_face_detail_paints() {
    let plain = render_character(&CharacterConfig::default(), &EquippedItems::new(), 1);

    for beard in BeardStyle::ALL {
        let frame = render_character(&CharacterConfig::default().with_beard(Some(*beard)), &EquippedItems::new(), 1);
        assert_ne!(frame, plain, "{beard}");
    }
    for scar in ScarStyle::ALL {
        let frame = render_character(&CharacterConfig::default().with_scar(Some(*scar)), &EquippedItems::new(), 1);
        assert_ne!(frame, plain, "{scar}");
    }
    for paint in FacePaint::ALL {
        let frame = render_character(&CharacterConfig::default().with_face_paint(Some(*paint)), &EquippedItems::new(), 1);
        assert_ne!(frame, plain, "{paint}");
    }
}

#[test]
fn test_every_skin_palette_paints() {
    let mut digests: Vec<String> = SKIN_PALETTES
        .iter()
        .map(|palette| render_character(&CharacterConfig::default().with_skin(palette), &EquippedItems::new(), 1).digest())
        .collect();
    digests.sort();
    digests.dedup();
    assert_eq!(digests.len(), SKIN_PALETTES.len());
}

#[test]
fn test_every_item_paints_worn_and_as_icon() {
    for slot in Slot::ALL {
        let bare = render_character(&CharacterConfig::default(), &EquippedItems::new(), 1);
        for item in ItemId::all_in(*slot) {
            let icon = render_item(*slot, item.id(), 1);
            assert_eq!(icon.width, ITEM_GRID);
            assert!(!icon.is_blank(), "{} icon", item.id());

            for config in [CharacterConfig::default(), CharacterConfig::scout()] {
                let worn = render_character(&config, &EquippedItems::new().with(item), 1);
                assert!(!worn.is_blank());
                if config == CharacterConfig::default() {
                    assert_ne!(worn, bare, "{} worn", item.id());
                }
            }
        }
    }
}

#[test]
fn test_every_monster_paints() {
    for monster in MonsterId::ALL {
        let frame = render_monster(monster.id(), 1);
        assert_eq!(frame.width, CHARACTER_GRID);
        assert!(!frame.is_blank(), "{monster}");
    }
}

#[test]
fn test_every_skill_paints() {
    let config = CharacterConfig::default();
    let equipped = EquippedItems::new();
    for skill in SkillId::ALL {
        let frame = render_skill_frame(skill.id(), 0.5, &config, &equipped, 1);
        assert!(!frame.is_blank(), "{skill}");
    }
}

#[test]
fn test_unknown_ids_render_blank() {
    assert!(render_item(Slot::Weapon, "excalibur", 1).is_blank());
    assert!(render_monster("kraken", 1).is_blank());
    assert!(render_skill_frame("fireball", 0.5, &CharacterConfig::default(), &EquippedItems::new(), 1).is_blank());
}
