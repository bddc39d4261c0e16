//! Close-range strikes

use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI, TAU};

use runeforge_core::hex;

use super::{ease_out, glow, lerp, prng, rgba, Hero};
use crate::canvas::Canvas;

/// Point on a swing of `len` units around the caster's chest
fn swing_point(angle: f64, len: f64) -> (f64, f64) {
    (
        24.0 + (angle - FRAC_PI_2).cos() * len,
        28.0 + (angle - FRAC_PI_2).sin() * len * 0.8,
    )
}

pub fn axe_flurry(canvas: &mut Canvas, t: f64, hero: &Hero) {
    hero.draw(canvas, 0.0, 0.0);

    // three swings per loop, each from a different side
    let swing = ((t * 3.0).floor() as usize) % 3;
    let swing_t = (t * 3.0) % 1.0;
    let base = [-0.8, 0.0, 0.8][swing];
    let sweep = |p: f64| lerp(base - 0.6, base + 0.6, ease_out(p));

    for i in 0..8 {
        let (x, y) = swing_point(sweep((swing_t - i as f64 * 0.07).max(0.0)), 16.0);
        canvas.scoped(|c| {
            glow(c, hex(0xDDB850), 4.0);
            c.fill_rect(x - 0.5, y - 0.5, 1.0, 1.0, rgba(220, 180, 80, (1.0 - i as f64 / 8.0) * 0.7));
        });
    }

    let angle = sweep(swing_t);
    let (ax, ay) = swing_point(angle, 16.0);
    canvas.scoped(|c| {
        glow(c, hex(0xFFFFFF), 6.0);
        c.translate(ax, ay);
        c.rotate(angle);
        c.fill_rect(-2.0, -5.0, 4.0, 7.0, hex(0xBBBBBB));
        c.fill_rect(-4.0, -5.0, 3.0, 4.0, hex(0x999999));
        c.fill_rect(1.0, -5.0, 3.0, 4.0, hex(0x999999));
    });

    if swing_t < 0.15 {
        let fp = swing_t / 0.15;
        canvas.scoped(|c| {
            glow(c, hex(0xFFEE44), 12.0);
            c.fill_rect(ax - 2.0, ay - 2.0, 4.0, 4.0, rgba(255, 240, 100, 1.0 - fp));
        });
    }
}

pub fn skull_splitter(canvas: &mut Canvas, t: f64, hero: &Hero) {
    hero.draw(canvas, 0.0, 0.0);

    if t < 0.4 {
        // wind-up overhead
        let cp = t / 0.4;
        let wy = lerp(20.0, 5.0, ease_out(cp));
        canvas.scoped(|c| {
            glow(c, hex(0xFFFFFF), 8.0);
            c.fill_rect(21.0, wy - 8.0, 6.0, 14.0, hex(0x888888));
            c.fill_rect(17.0, wy - 10.0, 14.0, 5.0, hex(0xBBBBBB));
            c.fill_rect(16.0, wy - 12.0, 16.0, 3.0, hex(0xCCCCCC));
        });
        canvas.scoped(|c| {
            c.set_alpha(cp * 0.6);
            glow(c, hex(0xFFCC00), 16.0);
            c.fill_rect(16.0, wy - 13.0, 16.0, 14.0, rgba(255, 210, 0, cp * 0.3));
        });
        return;
    }

    // impact
    let sp = (t - 0.4) / 0.6;
    let fade = 1.0 - sp;
    canvas.fill_rect(21.0, 20.0, 6.0, 20.0, hex(0x888888));
    canvas.fill_rect(15.0, 18.0, 18.0, 5.0, hex(0xBBBBBB));

    let ir = sp * 20.0;
    canvas.scoped(|c| {
        c.set_line_width(3.0 - sp * 2.0);
        glow(c, hex(0xFFCC00), 14.0);
        c.stroke_ellipse(24.0, 43.0, ir, ir * 0.3, rgba(255, 200, 50, fade));
    });

    for i in 0..5 {
        let angle = i as f64 / 5.0 * PI + prng(i as f64, t) * 0.4;
        canvas.scoped(|c| {
            c.set_line_width(1.0);
            c.stroke_line(
                24.0,
                43.0,
                24.0 + angle.cos() * sp * 15.0,
                43.0 + angle.sin() * sp * 8.0,
                rgba(100, 60, 10, fade),
            );
        });
    }
}

pub fn blade_dance(canvas: &mut Canvas, t: f64, hero: &Hero) {
    let spin = t * PI * 4.0;
    let (cx, cy, orbit) = (24.0, 28.0, 14.0);
    hero.draw(canvas, 0.0, 0.0);

    for i in 0..4 {
        let angle = spin + i as f64 / 4.0 * TAU;
        let (bx, by) = (cx + angle.cos() * orbit, cy + angle.sin() * orbit * 0.7);
        canvas.scoped(|c| {
            glow(c, hex(0xFFFFFF), 6.0);
            c.scoped(|c| {
                c.translate(bx, by);
                c.rotate(angle + FRAC_PI_4);
                c.fill_rect(-1.0, -5.0, 2.0, 10.0, hex(0xCCCCCC));
            });
            for j in 1..5 {
                let ta = angle - j as f64 * 0.2;
                let (tx, ty) = (cx + ta.cos() * orbit, cy + ta.sin() * orbit * 0.7);
                c.scoped(|c| {
                    c.set_alpha((1.0 - j as f64 / 5.0) * 0.5);
                    c.fill_rect(tx - 1.0, ty - 1.0, 2.0, 2.0, hex(0xFF8844));
                });
            }
        });
    }

    canvas.scoped(|c| {
        c.set_alpha(0.3);
        c.set_line_width(1.0);
        glow(c, hex(0xFF8844), 10.0);
        c.stroke_ellipse(cx, cy, 14.0, 10.0, hex(0xFF8844));
    });
}

pub fn shield_bash(canvas: &mut Canvas, t: f64, hero: &Hero) {
    let (cx, cy) = (24.0, 28.0);
    hero.draw(canvas, 0.0, 0.0);

    // shove out and back
    let bash = if t < 0.3 {
        lerp(0.0, 8.0, ease_out(t / 0.3))
    } else {
        lerp(8.0, 0.0, ease_out(((t - 0.3) / 0.3).min(1.0)))
    };

    let x = cx - 2.0 + bash;
    canvas.scoped(|c| {
        glow(c, hex(0xAAAACC), 6.0);
        c.fill_rect(x, cy - 8.0, 8.0, 14.0, hex(0x7A7A9A));
        c.fill_rect(x + 1.0, cy - 8.0, 8.0, 3.0, hex(0x9A9ABB));
        c.outline(x, cy - 8.0, 8.0, 14.0, hex(0x4A4A6A));
        c.fill_rect(x + 1.0, cy - 7.0, 1.0, 10.0, hex(0xCCCCEE));
    });

    if t > 0.2 && t < 0.5 {
        let ip = (t - 0.2) / 0.3;
        canvas.scoped(|c| {
            c.set_line_width(2.0 - ip);
            glow(c, hex(0xAAAAFF), 10.0);
            c.stroke_ellipse(cx + bash + 4.0, cy, ip * 10.0, ip * 10.0, rgba(180, 180, 220, 1.0 - ip));
        });
    }

    // follow-up slash
    if t > 0.5 {
        let sp = (t - 0.5) / 0.5;
        canvas.scoped(|c| {
            c.set_line_width(2.0 - sp);
            glow(c, hex(0xDDC050), 8.0);
            c.stroke_line(cx + 6.0, cy - 8.0, cx + 6.0 + sp * 12.0, cy + 4.0 + sp * 4.0, rgba(220, 180, 80, 1.0 - sp));
        });
    }
}

pub fn executioner(canvas: &mut Canvas, t: f64, hero: &Hero) {
    hero.draw(canvas, 0.0, 0.0);

    // weakened target
    canvas.scoped(|c| {
        c.set_alpha((1.0 - t * 1.5).max(0.0) * 0.5);
        c.fill_rect(33.0, 14.0, 8.0, 18.0, hex(0x882200));
    });

    let slash_t = (t * 1.5) % 1.0;
    let sweep = |p: f64| lerp(-PI * 0.3, PI * 0.7, ease_out(p));
    for i in 0..10 {
        let (x, y) = swing_point(sweep((slash_t - i as f64 * 0.06).max(0.0)), 18.0);
        canvas.scoped(|c| {
            glow(c, hex(0xFF3300), 8.0);
            c.fill_rect(x - 1.0, y - 1.0, 2.0, 2.0, rgba(255, 60, 0, (1.0 - i as f64 / 10.0) * 0.8));
        });
    }

    let (fx, fy) = swing_point(sweep(slash_t), 18.0);
    canvas.scoped(|c| {
        glow(c, hex(0xFF6600), 14.0);
        c.fill_rect(fx - 2.0, fy - 2.0, 4.0, 4.0, hex(0xFF4400));
    });
}
