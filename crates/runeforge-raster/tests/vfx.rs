//! Skill effect animation: category completeness, determinism, looping

use runeforge_core::{
    CharacterConfig, EquippedItems, ItemId, SkillCategory, SkillId, WeaponId, VFX_GRID,
};
use runeforge_raster::{draw_skill_frame, draw_skill_vfx, render_skill_frame, Canvas, SkillFrame};

const SAMPLES: [f64; 4] = [0.0, 0.25, 0.5, 0.75];

fn category_frame(category: SkillCategory, t: f64, equipped: &EquippedItems) -> String {
    let mut canvas = Canvas::new(VFX_GRID, 1);
    draw_skill_vfx(
        &mut canvas,
        SkillFrame::new(category, t),
        &CharacterConfig::default(),
        equipped,
    );
    assert!(!canvas.frame().is_blank(), "{category} at {t}");
    canvas.frame().digest()
}

#[test]
fn test_every_category_animates() {
    let equipped = EquippedItems::new().with(ItemId::Weapon(WeaponId::Longsword));
    for category in SkillCategory::ALL {
        let mut digests: Vec<String> = SAMPLES
            .iter()
            .map(|t| category_frame(*category, *t, &equipped))
            .collect();
        digests.dedup();
        assert!(digests.len() > 1, "{category} is static");
    }
}

#[test]
fn test_every_skill_animates() {
    let config = CharacterConfig::scout();
    let equipped = EquippedItems::new();
    for skill in SkillId::ALL {
        // Spaced off the quarter-loop so fast pulses do not alias
        let mut digests: Vec<String> = [0.0, 0.1, 0.3, 0.55]
            .iter()
            .map(|t| render_skill_frame(skill.id(), *t, &config, &equipped, 1).digest())
            .collect();
        digests.sort();
        digests.dedup();
        assert!(digests.len() > 1, "{skill} is static");
    }
}

#[test]
fn test_bifrost_pulses_within_a_quarter_loop() {
    let config = CharacterConfig::default();
    let equipped = EquippedItems::new();
    let at = |t: f64| render_skill_frame("bifrost-blast", t, &config, &equipped, 1).digest();

    assert_ne!(at(0.0), at(0.0625));
    assert_ne!(at(0.0625), at(0.1875));
}

#[test]
fn test_skill_frames_are_deterministic() {
    let config = CharacterConfig::default();
    let equipped = EquippedItems::new().with(ItemId::Weapon(WeaponId::ThunderMace));
    for skill in [SkillId::LightningArc, SkillId::MeteorDrop, SkillId::AxeFlurry] {
        for t in SAMPLES {
            let a = render_skill_frame(skill.id(), t, &config, &equipped, 2);
            let b = render_skill_frame(skill.id(), t, &config, &equipped, 2);
            assert_eq!(a.digest(), b.digest(), "{skill} at {t}");
        }
    }
}

#[test]
fn test_time_wraps_into_loop() {
    let config = CharacterConfig::default();
    let equipped = EquippedItems::new();
    let at = |t: f64| render_skill_frame("frost-pulse", t, &config, &equipped, 1);

    assert_eq!(at(0.25), at(1.25));
    assert_eq!(at(0.5), at(-0.5));
}

#[test]
fn test_redraw_clears_previous_frame() {
    let config = CharacterConfig::default();
    let equipped = EquippedItems::new();
    let mut canvas = Canvas::new(VFX_GRID, 1);

    draw_skill_frame(&mut canvas, "bifrost-blast", 0.6, &config, &equipped);
    draw_skill_frame(&mut canvas, "war-cry", 0.3, &config, &equipped);

    assert_eq!(
        canvas.frame(),
        &render_skill_frame("war-cry", 0.3, &config, &equipped, 1)
    );
}

#[test]
fn test_skill_and_category_renderers_are_distinct() {
    let config = CharacterConfig::default();
    let equipped = EquippedItems::new();
    let bespoke = render_skill_frame("soul-drain", 0.4, &config, &equipped, 1);

    let mut canvas = Canvas::new(VFX_GRID, 1);
    draw_skill_vfx(&mut canvas, SkillFrame::of(SkillId::SoulDrain, 0.4), &config, &equipped);

    assert_ne!(&bespoke, canvas.frame());
}
