//! One parametric effect per skill category

use std::f64::consts::TAU;

use runeforge_core::{hex, CharacterConfig, Color, EquippedItems, SkillCategory};
use tracing::debug;

use super::{prng, rgba, runes, with_character_space, Hero, SkillFrame};
use crate::canvas::{Canvas, LineCap};
use crate::palette::{GOLD, RUNE_CYAN};

const CX: f64 = 24.0;
const CY: f64 = 24.0;

/// Clear the canvas and draw the category effect for `frame`
pub fn draw_skill_vfx(
    canvas: &mut Canvas,
    frame: SkillFrame,
    config: &CharacterConfig,
    equipped: &EquippedItems,
) {
    debug!(category = %frame.category, t = frame.t, "Drawing category effect");
    canvas.clear();
    let hero = Hero { config, equipped };
    with_character_space(canvas, |c| draw_category(c, frame, &hero));
}

pub(super) fn draw_category(canvas: &mut Canvas, frame: SkillFrame, hero: &Hero) {
    let f = frame.t;
    match frame.category {
        SkillCategory::Aoe => aoe(canvas, f, hero),
        SkillCategory::Dash => dash(canvas, f, hero),
        SkillCategory::Melee => melee(canvas, f, hero),
        SkillCategory::GroundSlam => ground_slam(canvas, f, hero),
        SkillCategory::Beam => beam(canvas, f, hero),
        SkillCategory::Summon => summon(canvas, f, hero),
        SkillCategory::Buff => buff(canvas, f, hero),
    }
}

fn aoe(canvas: &mut Canvas, f: f64, hero: &Hero) {
    hero.draw(canvas, 0.0, 0.0);
    let fade = 1.0 - f;

    canvas.scoped(|c| {
        let outer = 4.0 + f * 18.0;
        c.set_line_width(2.0);
        c.stroke_ellipse(CX, CY + 2.0, outer, outer * 0.5, rgba(212, 164, 74, fade));

        let inner = 2.0 + f * 14.0;
        c.set_line_width(1.0);
        c.stroke_ellipse(CX, CY + 2.0, inner, inner * 0.5, rgba(255, 200, 100, fade * 0.7));
    });

    for i in 0..8 {
        let angle = i as f64 / 8.0 * TAU + f * 2.0;
        let pr = 6.0 + f * 14.0;
        canvas.fill_rect(
            CX + angle.cos() * pr,
            CY + 2.0 + angle.sin() * pr * 0.5,
            1.0,
            1.0,
            rgba(255, 200, 100, fade * 0.8),
        );
    }

    // rune flash at the start of the cast
    if f < 0.3 {
        canvas.fill_rect(CX - 3.0, CY - 3.0, 6.0, 6.0, rgba(212, 164, 74, (1.0 - f / 0.3) * 0.5));
    }
}

fn dash(canvas: &mut Canvas, f: f64, hero: &Hero) {
    let travel = f * 20.0;

    for i in (0..4).rev() {
        let i = i as f64;
        canvas.scoped(|c| {
            c.set_alpha((1.0 - i / 4.0) * (1.0 - f) * 0.3);
            hero.draw(c, -(travel - i * 4.0), 0.0);
        });
    }
    hero.draw(canvas, 0.0, 0.0);

    for i in 0..6 {
        let y = 10.0 + i as f64 * 6.0;
        canvas.fill_rect(40.0 - f * 30.0, y, 4.0 + f * 8.0, 1.0, rgba(200, 220, 255, 0.5 - f * 0.5));
    }

    // dust where the dash started
    if f < 0.4 {
        canvas.fill_ellipse(
            CX - travel,
            42.0,
            3.0 + f * 6.0,
            2.0 + f * 3.0,
            rgba(180, 160, 140, (1.0 - f / 0.4) * 0.4),
        );
    }
}

/// Short arc with a wide faint halo over it
fn slash(canvas: &mut Canvas, cx: f64, cy: f64, radius: f64, angle: f64, color: Color, alpha: f64) {
    const SWEEP: f64 = 0.8;
    let [r, g, b] = color.rgb_bytes();
    let paint = rgba(r, g, b, alpha);
    canvas.scoped(|c| {
        c.set_line_cap(LineCap::Round);
        c.set_line_width(2.0);
        c.stroke_arc(cx, cy, radius, radius, angle, angle + SWEEP, paint);
        c.set_line_width(4.0);
        c.set_alpha(alpha * 0.3);
        c.stroke_arc(cx, cy, radius, radius, angle, angle + SWEEP, paint);
    });
}

fn melee(canvas: &mut Canvas, f: f64, hero: &Hero) {
    hero.draw(canvas, 0.0, 0.0);

    // three slashes per loop
    let phase = f * 3.0;
    if phase < 1.0 {
        slash(canvas, CX + 10.0, CY - 4.0, 12.0, -0.5 + phase, Color::WHITE, 1.0 - phase);
    } else if phase < 2.0 {
        let sa = phase - 1.0;
        slash(canvas, CX + 8.0, CY + 2.0, 14.0, 0.3 + sa, GOLD, 1.0 - sa);
    } else {
        let sa = phase - 2.0;
        slash(canvas, CX + 12.0, CY - 2.0, 10.0, -0.2 + sa * 1.5, hex(0xFF8844), 1.0 - sa);
    }

    if f > 0.3 && f < 0.7 {
        let a = 1.0 - (f - 0.5).abs() / 0.2;
        for i in 0..5 {
            let seed = i as f64;
            canvas.fill_rect(
                CX + 12.0 + prng(seed, f) * 6.0,
                CY - 4.0 + prng(seed + 7.0, f) * 12.0,
                1.0,
                1.0,
                rgba(255, 220, 100, a * 0.8),
            );
        }
    }
}

fn ground_slam(canvas: &mut Canvas, f: f64, hero: &Hero) {
    let lift = if f < 0.3 { -f * 10.0 } else { 0.0 };
    hero.draw(canvas, 0.0, lift);

    if f <= 0.3 {
        return;
    }
    let impact = (f - 0.3) / 0.7;

    let crack = impact * 20.0;
    canvas.fill_rect(CX - crack, 44.0, crack * 2.0, 2.0, rgba(140, 100, 60, 1.0 - impact));

    for i in 0..8 {
        let i = i as f64;
        canvas.fill_rect(
            CX - 12.0 + i * 3.0,
            42.0 - impact * (6.0 + i * 2.0),
            2.0,
            2.0,
            rgba(120, 90, 50, 1.0 - impact * 1.5),
        );
    }

    let shock = impact * 22.0;
    canvas.scoped(|c| {
        c.set_line_width(2.0);
        c.stroke_ellipse(CX, 44.0, shock, shock * 0.3, rgba(180, 140, 80, 1.0 - impact));
    });
}

fn beam(canvas: &mut Canvas, f: f64, hero: &Hero) {
    hero.draw(canvas, 0.0, 0.0);
    let width = 3.0 + (f * 10.0).sin();
    let a = 0.6 + (f * 8.0).sin() * 0.3;

    canvas.fill_rect(36.0, CY - width, 14.0, width * 2.0, rgba(74, 240, 255, a));
    canvas.fill_rect(36.0, CY - 1.0, 14.0, 2.0, rgba(200, 250, 255, a * 0.8));
    canvas.fill_rect(36.0, CY - width - 2.0, 14.0, width * 2.0 + 4.0, rgba(74, 240, 255, a * 0.2));
    canvas.fill_ellipse(38.0, CY, 4.0, 4.0, rgba(74, 240, 255, a * 0.5));

    for i in 0..4 {
        let i = i as f64;
        canvas.fill_rect(
            38.0 + i * 3.0 + f * 6.0,
            CY + (f * 10.0 + i).sin() * 2.0,
            1.0,
            1.0,
            rgba(255, 255, 255, 0.5 + (f * 8.0 + i).sin() * 0.3),
        );
    }
}

fn summon(canvas: &mut Canvas, f: f64, hero: &Hero) {
    hero.draw(canvas, 0.0, 0.0);

    canvas.scoped(|c| {
        c.set_line_width(1.5);
        c.stroke_ellipse(CX, 42.0, 14.0, 4.0, rgba(212, 164, 74, 0.3 + (f * 6.0).sin() * 0.2));
    });

    for i in 0..6 {
        let angle = i as f64 / 6.0 * TAU + f * 2.0;
        canvas.fill_rect(
            CX + angle.cos() * 12.0,
            42.0 + angle.sin() * 3.0,
            2.0,
            2.0,
            rgba(212, 164, 74, 0.5 + (f * 8.0 + i as f64).sin() * 0.3),
        );
    }

    // spirit wolf rising out of the circle
    if f > 0.3 {
        let rise = (f - 0.3) / 0.7;
        let y = 40.0 - rise * 18.0;
        canvas.scoped(|c| {
            c.set_alpha((rise * 2.0).min(1.0) * 0.7);
            c.fill_rect(14.0, y, 8.0, 5.0, hex(0x4A5A7A));
            c.fill_rect(22.0, y - 2.0, 5.0, 5.0, hex(0x5A6A8A));
            c.fill_rect(26.0, y - 1.0, 3.0, 3.0, hex(0x6A7A9A));
            c.pixel(24.0, y - 1.0, RUNE_CYAN);
        });
    }

    for i in 0..6 {
        let i = i as f64;
        canvas.fill_rect(
            CX - 10.0 + i * 4.0,
            44.0 - f * 20.0 - i * 2.0,
            1.0,
            1.0,
            rgba(212, 164, 74, (1.0 - f - i * 0.1).max(0.0) * 0.6),
        );
    }
}

fn buff(canvas: &mut Canvas, f: f64, hero: &Hero) {
    const SIGILS: [&str; 4] = ["ᚠ", "ᚢ", "ᚱ", "ᛁ"];
    hero.draw(canvas, 0.0, 0.0);

    for i in 0..8 {
        let i = i as f64;
        let angle = i / 8.0 * TAU + f * 3.0;
        let pr = 8.0 + (f * 6.0 + i).sin() * 3.0;
        canvas.fill_rect(
            CX + angle.cos() * pr,
            CY + angle.sin() * pr * 0.6 - f * 8.0,
            2.0,
            2.0,
            rgba(212, 164, 74, 0.5 + (f * 8.0 + i * 2.0).sin() * 0.3),
        );
    }

    canvas.fill_ellipse(CX, CY + 2.0, 14.0, 18.0, rgba(212, 164, 74, 0.15 + (f * 6.0).sin() * 0.1));

    let rr = 10.0 + (f * 4.0).sin() * 2.0;
    for (i, sigil) in SIGILS.iter().enumerate() {
        let angle = i as f64 / 4.0 * TAU + f * 2.0;
        let x = CX + angle.cos() * rr;
        let y = CY + angle.sin() * rr * 0.5 - 2.0;
        let a = 0.6 + (f * 6.0 + i as f64).sin() * 0.3;
        // centered on x like the rest of the ring
        runes(canvas, sigil, x - 0.9, y, 3.0, rgba(212, 164, 74, a));
    }

    // column of light in the second half
    if f > 0.5 {
        canvas.fill_rect(CX - 6.0, 0.0, 12.0, 48.0, rgba(255, 220, 150, (f - 0.5) / 0.5 * 0.15));
    }
}
