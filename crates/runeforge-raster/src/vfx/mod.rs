//! Skill effects
//!
//! Two renderers draw onto the same canvas. The category renderer
//! ([`draw_skill_vfx`]) animates one parametric effect per skill category.
//! The bespoke routines give every skill its own animation and are what
//! [`draw_skill_frame`] uses, falling back to the category renderer for a
//! skill without one.
//!
//! Both work in character-grid units and center the 48-unit figure on
//! whatever canvas they get, so on the 64-unit effect grid the character
//! sits inside an 8-unit pad that the effects spill into.
//!
//! Time `t` is the position in one animation loop, `0.0..1.0`. Every
//! random-looking value comes from [`prng`], so a frame is a pure function
//! of its inputs.

mod aoe;
mod beam;
mod buff;
mod category;
mod dash;
mod melee;
mod slam;
mod summon;

use runeforge_core::{
    CharacterConfig, Color, EquippedItems, ImageFrame, SkillCategory, SkillId, CHARACTER_GRID,
    VFX_GRID,
};
use tracing::debug;

use crate::canvas::{Canvas, Layer};
use crate::compositor::draw_character;

pub use category::draw_skill_vfx;

/// Deterministic jitter in `[0, 1)` for a `(seed, t)` pair
pub fn prng(seed: f64, t: f64) -> f64 {
    ((seed * 127.1 + t * 43.7).sin() * 43758.5453).abs() % 1.0
}

pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Quadratic ease, fast start
pub fn ease_out(t: f64) -> f64 {
    1.0 - (1.0 - t) * (1.0 - t)
}

/// Quadratic ease, slow start
pub fn ease_in(t: f64) -> f64 {
    t * t
}

/// A point in a category animation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SkillFrame {
    pub category: SkillCategory,
    /// Loop position, wrapped into `[0, 1)`
    pub t: f64,
}

impl SkillFrame {
    pub fn new(category: SkillCategory, t: f64) -> Self {
        Self {
            category,
            t: wrap(t),
        }
    }

    /// Frame of the category `skill` belongs to
    pub fn of(skill: SkillId, t: f64) -> Self {
        Self::new(skill.category(), t)
    }
}

fn wrap(t: f64) -> f64 {
    let t = t.rem_euclid(1.0);
    if t.is_finite() {
        t
    } else {
        0.0
    }
}

/// The caster every effect is drawn around
pub(crate) struct Hero<'a> {
    pub config: &'a CharacterConfig,
    pub equipped: &'a EquippedItems,
}

impl Hero<'_> {
    /// Draw the character displaced by `(dx, dy)`, leaving the effect layer active
    pub fn draw(&self, canvas: &mut Canvas, dx: f64, dy: f64) {
        draw_character(canvas, self.config, self.equipped, (dx, dy));
    }

    /// Draw the character with its skin replaced
    pub fn draw_tinted(&self, canvas: &mut Canvas, skin: [Color; 3], dx: f64, dy: f64) {
        let mut config = self.config.clone();
        [config.skin_base, config.skin_shadow, config.skin_highlight] = skin;
        draw_character(canvas, &config, self.equipped, (dx, dy));
    }
}

type Routine = fn(&mut Canvas, f64, &Hero);

/// Bespoke animation per skill
const BESPOKE: &[(SkillId, Routine)] = &[
    (SkillId::RunicBurst, aoe::runic_burst),
    (SkillId::ThunderNova, aoe::thunder_nova),
    (SkillId::FrostPulse, aoe::frost_pulse),
    (SkillId::WarCry, aoe::war_cry),
    (SkillId::FlameCircle, aoe::flame_circle),
    (SkillId::ShadowStep, dash::shadow_step),
    (SkillId::ValkyrieRush, dash::valkyrie_rush),
    (SkillId::FrostBlink, dash::frost_blink),
    (SkillId::BerserkerCharge, dash::berserker_charge),
    (SkillId::RavenFlight, dash::raven_flight),
    (SkillId::AxeFlurry, melee::axe_flurry),
    (SkillId::SkullSplitter, melee::skull_splitter),
    (SkillId::BladeDance, melee::blade_dance),
    (SkillId::ShieldBash, melee::shield_bash),
    (SkillId::Executioner, melee::executioner),
    (SkillId::EarthShatter, slam::earth_shatter),
    (SkillId::MjolnirStrike, slam::mjolnir_strike),
    (SkillId::FrostQuake, slam::frost_quake),
    (SkillId::SeismicRoar, slam::seismic_roar),
    (SkillId::MeteorDrop, slam::meteor_drop),
    (SkillId::IceBeam, beam::ice_beam),
    (SkillId::LightningArc, beam::lightning_arc),
    (SkillId::SoulDrain, beam::soul_drain),
    (SkillId::RunicRay, beam::runic_ray),
    (SkillId::BifrostBlast, beam::bifrost_blast),
    (SkillId::WolfPack, summon::wolf_pack),
    (SkillId::RuneTotem, summon::rune_totem),
    (SkillId::ValkyrieAlly, summon::valkyrie_ally),
    (SkillId::IceWall, summon::ice_wall),
    (SkillId::RavenScouts, summon::raven_scouts),
    (SkillId::BerserkerRage, buff::berserker_rage),
    (SkillId::IronSkin, buff::iron_skin),
    (SkillId::OdinWisdom, buff::odin_wisdom),
    (SkillId::FreyaBlessing, buff::freya_blessing),
    (SkillId::RagnarokForm, buff::ragnarok_form),
];

fn bespoke(skill: SkillId) -> Option<Routine> {
    BESPOKE
        .iter()
        .find(|(id, _)| *id == skill)
        .map(|(_, routine)| *routine)
}

/// Whether `skill` has its own animation
pub fn has_bespoke(skill: SkillId) -> bool {
    bespoke(skill).is_some()
}

/// Clear the canvas and draw one frame of a skill's animation.
///
/// Uses the skill's bespoke routine when it has one and the category
/// renderer otherwise. Unknown ids leave the canvas cleared.
pub fn draw_skill_frame(
    canvas: &mut Canvas,
    skill_id: &str,
    t: f64,
    config: &CharacterConfig,
    equipped: &EquippedItems,
) {
    canvas.clear();
    let Ok(skill) = skill_id.parse::<SkillId>() else {
        debug!(skill_id, "Unknown skill, nothing drawn");
        return;
    };

    let hero = Hero { config, equipped };
    let t = wrap(t);
    with_character_space(canvas, |c| match bespoke(skill) {
        Some(routine) => routine(c, t, &hero),
        None => category::draw_category(c, SkillFrame::of(skill, t), &hero),
    });
}

/// Render one skill frame onto a fresh effect-grid canvas
pub fn render_skill_frame(
    skill_id: &str,
    t: f64,
    config: &CharacterConfig,
    equipped: &EquippedItems,
    scale: u32,
) -> ImageFrame {
    debug!(skill_id, t, scale, "Rendering skill frame");
    let mut canvas = Canvas::new(VFX_GRID, scale);
    draw_skill_frame(&mut canvas, skill_id, t, config, equipped);
    canvas.into_frame()
}

/// Run `draw` with the 48-unit character grid centered on the canvas and
/// the effect layer active
fn with_character_space(canvas: &mut Canvas, draw: impl FnOnce(&mut Canvas)) {
    let pad = (canvas.grid() as f64 - CHARACTER_GRID as f64) / 2.0;
    let outer = canvas.layer();
    canvas.scoped(|c| {
        c.translate(pad, pad);
        c.set_layer(Layer::Effect);
        draw(c);
    });
    canvas.set_layer(outer);
}

// ----- shared drawing helpers -----

/// Color with a computed alpha
pub(crate) fn rgba(r: u8, g: u8, b: u8, a: f64) -> Color {
    Color::rgba(r, g, b, a.clamp(0.0, 1.0) as f32)
}

/// Glow whose blur is given in pixels at the default effect scale of 2
pub(crate) fn glow(canvas: &mut Canvas, color: Color, blur: f64) {
    let blur = blur * canvas.scale() as f64 / 2.0;
    canvas.set_glow(color, blur);
}

/// Write a row of runes starting at `x` with their baseline on `y`
pub(crate) fn runes(canvas: &mut Canvas, text: &str, x: f64, y: f64, size: f64, color: Color) {
    let advance = size * 0.6;
    for (i, ch) in text.chars().enumerate() {
        let cx = x + advance * (i as f64 + 0.5);
        canvas.fill_glyph(ch, cx, y - size / 2.0, size, color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame(skill: SkillId, t: f64) -> ImageFrame {
        render_skill_frame(skill.id(), t, &CharacterConfig::default(), &EquippedItems::new(), 1)
    }

    #[test]
    fn test_prng_is_deterministic_and_bounded() {
        for seed in 0..20 {
            for step in 0..50 {
                let t = step as f64 / 50.0;
                let v = prng(seed as f64, t);
                assert_eq!(v, prng(seed as f64, t));
                assert!((0.0..1.0).contains(&v), "prng({seed}, {t}) = {v}");
            }
        }
        assert_ne!(prng(1.0, 0.25), prng(2.0, 0.25));
    }

    #[test]
    fn test_easing() {
        assert_eq!(lerp(-6.0, 8.0, 0.5), 1.0);
        assert_eq!(ease_out(0.0), 0.0);
        assert_eq!(ease_out(1.0), 1.0);
        assert!(ease_out(0.5) > 0.5);
        assert!(ease_in(0.5) < 0.5);
    }

    #[test]
    fn test_skill_frame_wraps_time() {
        let frame = SkillFrame::of(SkillId::WarCry, 1.25);
        assert_eq!(frame.category, SkillCategory::Aoe);
        assert_eq!(frame.t, 0.25);
        assert_eq!(SkillFrame::new(SkillCategory::Beam, -0.25).t, 0.75);
        assert_eq!(SkillFrame::new(SkillCategory::Beam, f64::NAN).t, 0.0);
    }

    #[test]
    fn test_every_skill_has_bespoke_routine() {
        for skill in SkillId::ALL {
            assert!(has_bespoke(*skill), "{skill}");
        }
        assert_eq!(BESPOKE.len(), SkillId::ALL.len());
    }

    #[test]
    fn test_every_skill_draws_something() {
        for skill in SkillId::ALL {
            for t in [0.0, 0.3, 0.6, 0.9] {
                let frame = frame(*skill, t);
                assert_eq!(frame.width, VFX_GRID);
                assert!(!frame.is_blank(), "{skill} at {t}");
            }
        }
    }

    #[test]
    fn test_skill_frames_are_deterministic() {
        for skill in SkillId::ALL {
            assert_eq!(frame(*skill, 0.37).digest(), frame(*skill, 0.37).digest(), "{skill}");
        }
    }

    #[test]
    fn test_skill_frames_animate() {
        for skill in SkillId::ALL {
            let digests: std::collections::HashSet<_> =
                [0.0, 0.1, 0.3, 0.55].iter().map(|t| frame(*skill, *t).digest()).collect();
            assert!(digests.len() > 1, "{skill} does not animate");
        }
    }

    #[test]
    fn test_unknown_skill_clears() {
        let mut canvas = Canvas::new(VFX_GRID, 1);
        canvas.fill_rect(0.0, 0.0, 4.0, 4.0, Color::WHITE);
        draw_skill_frame(&mut canvas, "sneeze", 0.5, &CharacterConfig::default(), &EquippedItems::new());
        assert!(canvas.frame().is_blank());
    }

    #[test]
    fn test_character_centered_in_pad() {
        let config = CharacterConfig::default();
        let none = EquippedItems::new();
        let mut canvas = Canvas::new(VFX_GRID, 1);
        with_character_space(&mut canvas, |c| Hero { config: &config, equipped: &none }.draw(c, 0.0, 0.0));
        let plain = crate::compositor::render_character(&config, &none, 1);

        // The pad leaves room below the feet, so only the character window matches
        let pad = (VFX_GRID - CHARACTER_GRID) / 2;
        let padded = canvas.frame();
        for y in 0..CHARACTER_GRID {
            for x in 0..CHARACTER_GRID {
                assert_eq!(padded.get_pixel(x + pad, y + pad), plain.get_pixel(x, y), "({x}, {y})");
            }
        }
        assert_eq!(canvas.layer(), Layer::default());
    }
}
