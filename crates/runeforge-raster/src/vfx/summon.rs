//! Summoned allies and constructs

use std::f64::consts::{PI, TAU};

use runeforge_core::{darken, hex, Color};

use super::{ease_out, glow, prng, rgba, Hero};
use crate::canvas::{Canvas, Gradient};
use crate::palette::{shade, RUNE_CYAN};

pub fn wolf_pack(canvas: &mut Canvas, t: f64, hero: &Hero) {
    hero.draw(canvas, 0.0, 0.0);

    // (dx, dy, delay) relative to the caster
    const WOLVES: [(f64, f64, f64); 3] = [(-12.0, 2.0, 0.0), (16.0, 4.0, 0.33), (4.0, 8.0, 0.66)];

    for (i, (dx, dy, delay)) in WOLVES.iter().enumerate() {
        let phase = (t * 1.2 + delay) % 1.0;
        let emerge = ease_out((phase * 2.0).min(1.0));
        let (wx, wy) = (24.0 + dx, 28.0 + dy);

        canvas.scoped(|c| {
            c.set_alpha(emerge * 0.85);
            glow(c, hex(0x4455AA), 10.0);
            c.fill_rect(wx - 5.0, wy - 2.0, 8.0, 4.0, hex(0x5566AA));
            c.fill_rect(wx + 2.0, wy - 4.0, 3.0, 4.0, hex(0x6677BB));
            c.pixel(wx + 4.0, wy - 4.0, hex(0xAABBFF));
            for lx in [-5.0, -3.0] {
                c.fill_rect(wx + lx, wy + 2.0, 2.0, 3.0, hex(0x445599));
            }
            c.fill_rect(wx + 1.0, wy + 1.0, 2.0, 3.0, hex(0x445599));
            // tail
            c.fill_rect(wx - 7.0, wy, 3.0, 2.0, hex(0x5566AA));
        });

        for j in 0..3 {
            let pp = (phase * 2.0 + j as f64 * 0.3) % 1.0;
            let seed = (j + i * 3) as f64;
            let x = wx + (prng(seed, t) - 0.5) * 12.0;
            let y = wy + prng(seed + 5.0, t) * 8.0;
            canvas.fill_rect(x, y, 1.0, 1.0, rgba(100, 120, 220, (1.0 - pp) * 0.7));
        }
    }
}

pub fn rune_totem(canvas: &mut Canvas, t: f64, hero: &Hero) {
    hero.draw(canvas, 0.0, 0.0);
    let (tx, ty) = (36.0, 25.0);
    let appear = (t * 3.0).min(1.0);

    canvas.scoped(|c| {
        c.set_alpha(appear);
        c.fill_rect(tx - 2.0, ty, 4.0, 18.0, hex(0x8B6914));
        c.fill_rect(tx - 3.0, ty, 6.0, 4.0, hex(0x6B4904));
        c.fill_rect(tx - 2.0, ty, 6.0, 3.0, hex(0x9B7924));
        // carved faces
        for (dx, dy) in [(-1.0, 5.0), (1.0, 5.0), (0.0, 7.0)] {
            c.pixel(tx + dx, ty + dy, hex(0xFF4444));
        }
        for dx in [-1.0, 1.0] {
            c.pixel(tx + dx, ty + 10.0, RUNE_CYAN);
        }
    });

    let pulse = 0.5 + 0.5 * (t * PI * 4.0).sin();
    canvas.scoped(|c| {
        c.set_alpha(appear * pulse * 0.7);
        c.set_line_width(1.0);
        glow(c, RUNE_CYAN, 12.0);
        let r = 4.0 + pulse * 3.0;
        c.stroke_ellipse(tx, ty + 9.0, r, r, RUNE_CYAN);
    });
}

pub fn valkyrie_ally(canvas: &mut Canvas, t: f64, hero: &Hero) {
    hero.draw(canvas, 0.0, 0.0);
    let px = 34.0;
    let half = (t * 60.0).min(20.0) * 0.5;

    // portal
    canvas.scoped(|c| {
        c.set_line_width(2.0);
        glow(c, hex(0xFFCC44), 14.0);
        c.stroke_ellipse(px, 30.0, 5.0, half, hex(0xFFEE88));
    });
    let inner = Gradient::radial(px, 30.0, 0.0, 5.0)
        .stop(0.0, rgba(255, 255, 200, 0.8))
        .stop(1.0, rgba(200, 180, 60, 0.0));
    canvas.fill_ellipse(px, 30.0, 5.0, half, inner);

    if t > 0.4 {
        let ep = (t - 0.4) / 0.6;
        canvas.scoped(|c| {
            c.set_alpha(ep * 0.9);
            glow(c, hex(0xFFEE88), 10.0);
            c.fill_rect(px - 2.0, 18.0, 4.0, 10.0, hex(0xAAAA88));
            c.fill_rect(px - 1.0, 14.0, 2.0, 5.0, hex(0xBBBBAA));
            c.fill_rect(px - 4.0, 20.0, 2.0, 8.0, hex(0xAAAA88));
            c.fill_rect(px + 2.0, 20.0, 2.0, 8.0, hex(0xAAAA88));
            c.fill_rect(px - 3.0, 28.0, 2.0, 8.0, hex(0x999988));
            c.fill_rect(px + 1.0, 28.0, 2.0, 8.0, hex(0x999988));
        });
    }
}

pub fn ice_wall(canvas: &mut Canvas, t: f64, hero: &Hero) {
    hero.draw(canvas, 0.0, 0.0);
    let rise = (t * 2.5).min(1.0);
    let (wall_x, wall_h) = (32.0, 24.0);
    let visible = wall_h * rise;

    canvas.fill_rect(wall_x + 1.0, 46.0 - visible + 2.0, 10.0, visible, shade(0.2));

    for row in 0..4 {
        let y = 46.0 - (row + 1) as f64 * 6.0 * rise;
        let face = match row {
            0 => hex(0x88BBDD),
            3 => hex(0xDDEEFF),
            _ => hex(0xAACCEE),
        };
        canvas.fill_rect(wall_x, y, 10.0, 5.0, face);
        canvas.outline(wall_x, y, 10.0, 5.0, hex(0x446688));
        canvas.pixel(wall_x + 2.0, y + 1.0, hex(0xCCEEFF));
        canvas.pixel(wall_x + 6.0, y + 2.0, hex(0xCCEEFF));
    }

    // shimmer along the top edge
    canvas.scoped(|c| {
        c.set_alpha(0.4 * (0.6 + 0.4 * (t * PI * 6.0).sin()));
        glow(c, hex(0x88CCFF), 12.0);
        c.fill_rect(wall_x + 1.0, 46.0 - visible, 8.0, 1.0, hex(0x88CCFF));
    });
}

/// Figure-eight flight path around the caster's head
fn figure_eight(rt: f64) -> (f64, f64) {
    (24.0 + (rt * TAU).sin() * 16.0, 18.0 + (rt * TAU * 2.0).sin() * 8.0)
}

pub fn raven_scouts(canvas: &mut Canvas, t: f64, hero: &Hero) {
    hero.draw(canvas, 0.0, 0.0);

    // Huginn and Muninn, half a loop apart
    let ravens: [(f64, Color); 2] = [(0.0, hex(0x3A2A5A)), (0.5, hex(0x2A1A4A))];
    for (offset, body) in ravens {
        let rt = (t + offset) % 1.0;
        let (rx, ry) = figure_eight(rt);
        let flap = (rt * PI * 8.0).sin() * 2.0;
        let wing = darken(body, 10);

        canvas.scoped(|c| {
            glow(c, hex(0x6644AA), 8.0);
            c.fill_rect(rx - 2.0, ry - 1.0, 4.0, 2.0, body);
            c.fill_rect(rx - 4.0, ry - 1.0 - flap, 3.0, 2.0, wing);
            c.fill_rect(rx + 1.0, ry - 1.0 + flap, 3.0, 2.0, wing);
            c.pixel(rx + 1.0, ry, hex(0xAACCFF));
        });

        for j in 1..6 {
            let (x, y) = figure_eight((rt - j as f64 * 0.04 + 1.0) % 1.0);
            canvas.scoped(|c| {
                c.set_alpha((1.0 - j as f64 / 6.0) * 0.3);
                c.fill_rect(x - 1.0, y - 1.0, 2.0, 2.0, hex(0x6644AA));
            });
        }
    }
}
