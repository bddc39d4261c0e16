//! Self buffs: auras, shells and blessings

use std::f64::consts::{PI, TAU};

use runeforge_core::{hex, Color};

use super::{glow, prng, rgba, runes, Hero};
use crate::canvas::{Canvas, Gradient};

/// Paint over both eyes in a glowing `color`
fn glowing_eyes(canvas: &mut Canvas, color: Color, halo: Color, blur: f64) {
    canvas.scoped(|c| {
        glow(c, halo, blur);
        c.fill_rect(20.0, 12.0, 3.0, 2.0, color);
        c.fill_rect(27.0, 12.0, 3.0, 2.0, color);
    });
}

pub fn berserker_rage(canvas: &mut Canvas, t: f64, hero: &Hero) {
    let pulse = 0.7 + 0.3 * (t * PI * 6.0).sin();

    canvas.scoped(|c| {
        c.set_alpha(0.4 * pulse);
        glow(c, hex(0xFF4400), 24.0);
        c.fill_ellipse(24.0, 28.0, 18.0, 22.0, hex(0xFF2200));
    });

    // flame wisps rising behind the caster
    for i in 0..8 {
        let phase = (t * 2.0 + i as f64 / 8.0) % 1.0;
        let x = 24.0 + (prng(i as f64, 0.0) - 0.5) * 20.0;
        let y = 42.0 - phase * 24.0;
        let a = (1.0 - phase) * 0.8;
        canvas.scoped(|c| {
            glow(c, hex(0xFF4400), 6.0);
            c.fill_rect(x, y, 2.0, 3.0, rgba(255, 80, 0, a));
            c.fill_rect(x + 1.0, y - 1.0, 1.0, 1.0, rgba(255, 200, 60, a * 0.7));
        });
    }

    hero.draw(canvas, 0.0, 0.0);
    glowing_eyes(canvas, rgba(255, 80, 0, pulse), hex(0xFF4400), 10.0);
}

pub fn iron_skin(canvas: &mut Canvas, t: f64, hero: &Hero) {
    hero.draw(canvas, 0.0, 0.0);
    let pulse = 0.6 + 0.4 * (t * PI * 3.0).sin();

    canvas.scoped(|c| {
        c.set_alpha(0.5 * pulse);
        glow(c, hex(0xAAAAAA), 12.0);
        c.fill_rect(10.0, 20.0, 28.0, 15.0, rgba(120, 120, 120, pulse * 0.4));
    });

    const SHARDS: [(f64, f64); 6] = [(12.0, 22.0), (34.0, 24.0), (14.0, 32.0), (32.0, 30.0), (22.0, 18.0), (26.0, 36.0)];
    for (i, (x, y)) in SHARDS.into_iter().enumerate() {
        let phase = (t * 2.0 + i as f64 * 0.16) % 1.0;
        canvas.scoped(|c| {
            glow(c, hex(0xCCCCCC), 6.0);
            c.fill_rect(x, y, 2.0, 3.0, rgba(160, 160, 160, (phase * PI).sin() * 0.8));
        });
    }

    canvas.scoped(|c| {
        c.set_line_width(1.0);
        glow(c, hex(0xCCCCCC), 10.0);
        c.stroke_ellipse(24.0, 28.0, 14.0, 18.0, rgba(180, 180, 180, pulse * 0.8));
    });
}

pub fn odin_wisdom(canvas: &mut Canvas, t: f64, hero: &Hero) {
    const RING: [&str; 8] = ["ᚠ", "ᚢ", "ᚦ", "ᚨ", "ᚱ", "ᚲ", "ᚷ", "ᚹ"];
    hero.draw(canvas, 0.0, 0.0);
    let pulse = 0.7 + 0.3 * (t * PI * 4.0).sin();

    canvas.scoped(|c| {
        c.set_alpha(0.35 * pulse);
        glow(c, hex(0xFFCC00), 18.0);
        c.fill_ellipse(24.0, 26.0, 14.0, 18.0, hex(0xFFDD44));
    });

    for (i, rune) in RING.iter().enumerate() {
        let angle = i as f64 / 8.0 * TAU + t * TAU;
        let (x, y) = (24.0 + angle.cos() * 16.0, 26.0 + angle.sin() * 10.0);
        let a = 0.6 + 0.4 * (t * PI * 4.0 + i as f64).sin();
        canvas.scoped(|c| {
            glow(c, hex(0xFFDD44), 6.0);
            runes(c, rune, x, y, 4.0, rgba(255, 220, 80, a));
        });
    }

    // crown of light
    canvas.scoped(|c| {
        glow(c, hex(0xFFCC00), 14.0);
        for i in 0..5 {
            let angle = i as f64 / 5.0 * TAU + t * PI;
            c.fill_circle(24.0 + angle.cos() * 8.0, 5.0 + angle.sin() * 3.0, 1.5, rgba(255, 220, 60, pulse));
        }
    });
}

pub fn freya_blessing(canvas: &mut Canvas, t: f64, hero: &Hero) {
    hero.draw(canvas, 0.0, 0.0);

    // petals drifting upward
    for i in 0..10 {
        let seed = i as f64;
        let phase = (t * 1.5 + seed / 10.0) % 1.0;
        let x = 24.0 + (phase * PI * 4.0 + seed).sin() * 10.0;
        let y = 42.0 - phase * 32.0;
        let a = (phase * PI).sin() * 0.9;
        let green = 200 + (prng(seed, 0.0) * 55.0) as u8;
        canvas.scoped(|c| {
            glow(c, hex(0x44FF88), 8.0);
            c.fill_rect(x - 1.0, y - 2.0, 2.0, 4.0, rgba(68, 255, 136, a));
            c.fill_rect(x - 2.0, y - 1.0, 4.0, 2.0, rgba(68, green, 136, a * 0.6));
        });
    }

    let aura = 0.5 + 0.5 * (t * PI * 3.0).sin();
    canvas.scoped(|c| {
        c.set_line_width(1.5 + aura);
        glow(c, hex(0x44FF88), 16.0 * aura);
        c.stroke_ellipse(24.0, 26.0, 14.0, 18.0, rgba(68, 255, 136, aura * 0.8));
    });

    // cleansing cross
    let cleanse = rgba(200, 255, 220, 0.3 * (t * PI * 3.0).sin().abs());
    canvas.fill_rect(22.0, 10.0, 4.0, 30.0, cleanse);
    canvas.fill_rect(10.0, 22.0, 28.0, 4.0, cleanse);
}

pub fn ragnarok_form(canvas: &mut Canvas, t: f64, hero: &Hero) {
    const ORBS: [u32; 5] = [0xFF4400, 0x4AF0FF, 0xFFEE44, 0xAA44FF, 0x44FF88];
    let pulse = 0.5 + 0.5 * (t * PI * 5.0).sin();

    canvas.scoped(|c| {
        c.set_alpha(0.5 * pulse);
        let corona = Gradient::radial(24.0, 26.0, 4.0, 22.0)
            .stop(0.0, rgba(255, 200, 50, 0.8))
            .stop(0.4, rgba(255, 60, 0, 0.6))
            .stop(0.7, rgba(100, 0, 200, 0.4))
            .stop(1.0, rgba(0, 50, 255, 0.0));
        c.fill_ellipse(24.0, 26.0, 22.0, 26.0, corona);
    });

    hero.draw(canvas, 0.0, 0.0);

    for (i, orb) in ORBS.iter().enumerate() {
        let angle = i as f64 / ORBS.len() as f64 * TAU + t * PI * 2.5;
        let color = hex(*orb);
        canvas.scoped(|c| {
            glow(c, color, 12.0);
            c.fill_circle(24.0 + angle.cos() * 16.0, 26.0 + angle.sin() * 10.0, 2.0 + pulse, color);
        });
    }

    glowing_eyes(canvas, rgba(255, 255, 255, pulse), Color::WHITE, 12.0);
}
