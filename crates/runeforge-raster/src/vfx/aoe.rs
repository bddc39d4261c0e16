//! Area bursts centered on the caster

use std::f64::consts::{PI, TAU};

use runeforge_core::hex;

use super::{glow, prng, rgba, runes, Hero};
use crate::canvas::Canvas;
use crate::palette::GOLD;

pub fn runic_burst(canvas: &mut Canvas, t: f64, hero: &Hero) {
    let (cx, cy) = (24.0, 28.0);
    let lift = (t * PI).sin() * 2.0;
    hero.draw(canvas, 0.0, -lift);

    for ring in 0..3 {
        let phase = (t + ring as f64 / 3.0) % 1.0;
        canvas.scoped(|c| {
            c.set_line_width(2.0 - phase);
            glow(c, GOLD, 8.0);
            c.stroke_ellipse(cx, cy, phase * 22.0, phase * 22.0, rgba(212, 164, 74, (1.0 - phase) * 0.95));
        });
    }

    for i in 0..8 {
        let angle = i as f64 / 8.0 * TAU + t * PI;
        let phase = (t * 2.0 + i as f64 * 0.13) % 1.0;
        let len = phase * 16.0;
        canvas.scoped(|c| {
            c.set_line_width(1.0);
            c.stroke_line(cx, cy, cx + angle.cos() * len, cy + angle.sin() * len, rgba(255, 210, 80, 1.0 - phase));
        });
    }

    // ground rune
    canvas.scoped(|c| {
        c.set_alpha(0.5 + 0.3 * (t * PI * 4.0).sin());
        glow(c, hex(0xFFD800), 10.0);
        c.fill_rect(20.0, 44.0, 8.0, 1.0, GOLD);
        c.fill_rect(22.0, 43.0, 4.0, 1.0, GOLD);
        c.fill_rect(24.0, 42.0, 1.0, 3.0, hex(0xFFD800));
    });
}

pub fn thunder_nova(canvas: &mut Canvas, t: f64, hero: &Hero) {
    let (cx, cy) = (24.0, 28.0);
    hero.draw(canvas, 0.0, 0.0);

    // bolt from the sky, striking twice per loop
    let bolt = (t * 2.0) % 1.0;
    if bolt < 0.4 {
        let a = if bolt < 0.2 { bolt * 5.0 } else { 1.0 - (bolt - 0.2) / 0.2 };
        canvas.scoped(|c| {
            c.set_line_width(2.0);
            glow(c, hex(0xFFEE44), 14.0);
            c.stroke_polyline(
                &[(cx, 0.0), (cx - 2.0, 12.0), (cx + 1.0, 18.0), (cx - 1.0, 26.0), (cx, cy)],
                rgba(255, 240, 100, a),
            );
        });
    }

    let nova = (t * 1.5 + 0.3) % 1.0;
    canvas.scoped(|c| {
        c.set_line_width(3.0 - nova * 2.0);
        glow(c, hex(0xFFEE44), 16.0);
        c.stroke_ellipse(cx, cy, nova * 20.0, nova * 20.0, rgba(255, 240, 100, (1.0 - nova) * 0.9));
    });

    for i in 0..6 {
        let seed = i as f64;
        let angle = seed / 6.0 * TAU + t * PI * 3.0;
        let d = 10.0 + prng(seed, t) * 8.0;
        let a = prng(seed + 10.0, t) * 0.8 + 0.2;
        canvas.scoped(|c| {
            glow(c, hex(0xFFFF88), 6.0);
            c.fill_rect(cx + angle.cos() * d, cy + angle.sin() * d * 0.6, 1.0, 1.0, rgba(255, 255, 150, a));
        });
    }
}

pub fn frost_pulse(canvas: &mut Canvas, t: f64, hero: &Hero) {
    let (cx, cy) = (24.0, 28.0);
    let frost = hex(0x88DCFF);
    hero.draw(canvas, 0.0, 0.0);

    for ring in 0..3 {
        let phase = (t * 0.8 + ring as f64 / 3.0) % 1.0;
        canvas.scoped(|c| {
            c.set_line_width(1.5 - phase);
            glow(c, frost, 10.0);
            c.stroke_ellipse(cx, cy, phase * 20.0, phase * 20.0, rgba(136, 220, 255, (1.0 - phase) * 0.8));
        });
    }

    // ice shards flying out
    for i in 0..6 {
        let angle = i as f64 / 6.0 * TAU + PI / 6.0;
        let phase = (t * 1.2 + i as f64 * 0.16) % 1.0;
        let d = phase * 18.0;
        let a = 1.0 - phase;
        let (ix, iy) = (cx + angle.cos() * d, cy + angle.sin() * d * 0.7);
        canvas.scoped(|c| {
            glow(c, hex(0xAAEEFF), 4.0);
            c.fill_rect(ix - 0.5, iy - 1.0, 1.0, 2.0, rgba(180, 240, 255, a));
            c.fill_rect(ix - 1.0, iy - 0.5, 2.0, 1.0, rgba(180, 240, 255, a * 0.7));
        });
    }

    canvas.scoped(|c| {
        c.set_alpha(0.3 + 0.2 * (t * PI * 4.0).sin());
        c.set_line_width(1.0);
        glow(c, frost, 12.0);
        c.stroke_ellipse(cx, cy, 14.0, 18.0, frost);
    });
}

pub fn war_cry(canvas: &mut Canvas, t: f64, hero: &Hero) {
    hero.draw(canvas, 0.0, 0.0);
    let (cx, cy) = (24.0, 16.0);

    // sound waves above and below the head
    for ring in 0..4 {
        let phase = (t * 1.2 + ring as f64 / 4.0) % 1.0;
        let rad = 4.0 + phase * 20.0;
        let color = rgba(255, 160, 40, (1.0 - phase) * 0.85);
        canvas.scoped(|c| {
            c.set_line_width(1.5 - phase);
            glow(c, hex(0xFF8820), 8.0);
            c.stroke_arc(cx, cy, rad, rad, -PI * 0.9, -PI * 0.1, color);
            c.stroke_arc(cx, cy, rad, rad, PI * 0.1, PI * 0.9, color);
        });
    }

    let pulse = 0.7 + 0.3 * (t * PI * 5.0).sin();
    canvas.scoped(|c| {
        glow(c, hex(0xFF8800), 8.0);
        runes(c, "ᚠᚢᚦ", cx - 5.0, cy - 8.0, 4.0, rgba(255, 180, 60, pulse));
    });
}

pub fn flame_circle(canvas: &mut Canvas, t: f64, hero: &Hero) {
    let (cx, cy) = (24.0, 32.0);

    // ring of flames behind the caster
    for i in 0..12 {
        let seed = i as f64;
        let angle = seed / 12.0 * TAU + t * PI * 0.5;
        let fx = cx + angle.cos() * 16.0;
        let fy = cy + angle.sin() * 16.0 * 0.35;
        let height = 3.0 + prng(seed, t) * 4.0;
        let phase = (t * 3.0 + seed * 0.08) % 1.0;
        let a = 0.7 + 0.3 * (phase * PI).sin();
        canvas.scoped(|c| {
            glow(c, hex(0xFF6600), 8.0);
            c.fill_rect(fx - 1.0, fy - height, 2.0, height, rgba(255, 120, 10, a));
            c.fill_rect(fx, fy - height - 1.0, 1.0, 1.0, rgba(255, 220, 60, a * 0.8));
        });
    }

    hero.draw(canvas, 0.0, 0.0);

    canvas.scoped(|c| {
        c.set_alpha(0.5 + 0.3 * (t * PI * 4.0).sin());
        c.set_line_width(1.0);
        glow(c, hex(0xFF6600), 20.0);
        c.stroke_ellipse(cx, cy, 16.0, 6.0, hex(0xFF8800));
    });
}
