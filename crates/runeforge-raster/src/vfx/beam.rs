//! Channeled beams fired to the right of the caster

use std::f64::consts::{PI, TAU};

use runeforge_core::{hex, Color};

use super::{ease_out, glow, lerp, prng, rgba, Hero};
use crate::canvas::{Canvas, Gradient};
use crate::palette::RUNE_CYAN;

pub fn ice_beam(canvas: &mut Canvas, t: f64, hero: &Hero) {
    let recoil = (t * PI * 4.0).sin() * 0.5;
    hero.draw(canvas, -recoil, 0.0);

    let pulse = 0.7 + 0.3 * (t * PI * 8.0).sin();
    let cy = 26.0;
    let (start, len) = (22.0, 26.0);

    // charging orb at the hands
    let orb_r = 3.0 + pulse * 1.5;
    canvas.scoped(|c| {
        glow(c, hex(0x88DCFF), 24.0 * pulse);
        let orb = Gradient::radial(20.0, cy, 0.0, orb_r)
            .stop(0.0, Color::WHITE)
            .stop(0.3, rgba(200, 240, 255, 0.95))
            .stop(0.7, rgba(140, 210, 255, 0.7))
            .stop(1.0, rgba(100, 180, 240, 0.0));
        c.fill_circle(20.0, cy, orb_r, orb);
    });

    // frost haze, beam, core
    canvas.scoped(|c| {
        glow(c, hex(0x60B0F0), 20.0 * pulse);
        let haze = Gradient::linear(start, 0.0, 48.0, 0.0)
            .stop(0.0, rgba(100, 180, 240, 0.6))
            .stop(0.5, rgba(140, 210, 255, 0.4))
            .stop(1.0, rgba(100, 180, 240, 0.0));
        c.fill_rect(start, cy - 4.0, len, 8.0, haze);
    });
    canvas.scoped(|c| {
        glow(c, hex(0x88DCFF), 14.0 * pulse);
        let mid = Gradient::linear(start, 0.0, 48.0, 0.0)
            .stop(0.0, rgba(180, 240, 255, 0.95))
            .stop(0.6, rgba(220, 255, 255, 0.8))
            .stop(1.0, rgba(180, 240, 255, 0.1));
        c.fill_rect(start, cy - 2.0, len, 4.0, mid);
    });
    canvas.scoped(|c| {
        glow(c, Color::WHITE, 10.0);
        let core = Gradient::linear(start, 0.0, 44.0, 0.0)
            .stop(0.0, Color::WHITE)
            .stop(0.4, rgba(240, 255, 255, 0.9))
            .stop(1.0, rgba(255, 255, 255, 0.0));
        c.fill_rect(start, cy - 0.5, len - 4.0, 1.0, core);
    });

    // crystals glittering along the beam
    for i in 0..12 {
        let seed = i as f64;
        let x = start + prng(seed, t * 5.0) * len;
        let y = cy + (prng(seed + 5.0, t * 4.0) - 0.5) * 7.0;
        let a = prng(seed + 8.0, t * 3.0) * 0.8 + 0.2;
        let size = if prng(seed + 15.0, 0.0) > 0.5 { 2.0 } else { 1.0 };
        canvas.scoped(|c| {
            glow(c, hex(0xAAEEFF), 6.0);
            c.fill_rect(x, y, size, size, rgba(200, 240, 255, a));
        });
    }

    // shards forming on alternating edges
    for i in 0..5 {
        let phase = (t * 3.0 + i as f64 * 0.2) % 1.0;
        let x = start + 4.0 + phase * (len - 6.0);
        let dir = if i % 2 == 0 { -1.0 } else { 1.0 };
        let y = cy + dir * (2.0 + phase * 3.0);
        canvas.scoped(|c| {
            glow(c, hex(0x88CCFF), 4.0);
            c.fill_rect(x, y, 1.0, 2.0, rgba(180, 230, 255, (phase * PI).sin() * 0.7));
        });
    }

    // frost settling on the ground
    canvas.scoped(|c| {
        c.set_alpha(0.3 * pulse);
        for i in 0..8 {
            let x = start + 2.0 + i as f64 * 3.0;
            c.fill_rect(x, 44.0 + prng(i as f64 + 20.0, 0.0) * 2.0, 2.0, 1.0, hex(0xB0E0FF));
        }
    });
}

struct Fork {
    target: (f64, f64),
    color: Color,
    width: f64,
    segments: usize,
}

pub fn lightning_arc(canvas: &mut Canvas, t: f64, hero: &Hero) {
    let shake = (t * PI * 12.0).sin() * 0.4;
    hero.draw(canvas, shake, 0.0);
    let (cx, cy) = (24.0, 26.0);

    canvas.scoped(|c| {
        c.set_alpha(0.4 + 0.3 * (t * PI * 6.0).sin());
        c.set_line_width(1.0);
        glow(c, hex(0xFFFF00), 18.0);
        c.stroke_ellipse(cx, cy, 12.0, 16.0, hex(0xFFFF44));
    });

    let forks = [
        Fork { target: (46.0, 16.0), color: hex(0xFFFF80), width: 2.5, segments: 8 },
        Fork { target: (44.0, 38.0), color: hex(0xCCDDFF), width: 1.8, segments: 7 },
        Fork { target: (40.0, 8.0), color: hex(0xAAFFEE), width: 1.2, segments: 5 },
    ];

    for (fi, fork) in forks.iter().enumerate() {
        let (tx, ty) = fork.target;
        let origin = (cx + 4.0, cy);
        let mut points = vec![origin];
        for i in 1..fork.segments {
            let f = i as f64 / fork.segments as f64;
            let jitter = (prng((i + fi * 17) as f64, t * 8.0) - 0.5) * 8.0;
            points.push((
                origin.0 + (tx - origin.0) * f + jitter,
                cy + (ty - cy) * f + jitter * 0.4,
            ));
        }
        points.push(fork.target);

        // halo, bolt, hot core
        canvas.scoped(|c| {
            c.set_line_width(fork.width + 2.0);
            glow(c, fork.color, 20.0);
            c.stroke_polyline(&points, rgba(255, 255, 100, 0.3));
        });
        canvas.scoped(|c| {
            c.set_line_width(fork.width);
            glow(c, Color::WHITE, 8.0);
            c.stroke_polyline(&points, fork.color);
        });
        canvas.scoped(|c| {
            c.set_line_width(0.5);
            c.stroke_polyline(&points, Color::WHITE);
        });

        if fi == 0 {
            let (mx, my) = points[points.len() / 2];
            let bx = mx + (prng(50.0, t * 6.0) - 0.5) * 10.0;
            let by = my + (prng(51.0, t * 6.0) - 0.5) * 10.0;
            canvas.scoped(|c| {
                c.set_line_width(1.0);
                glow(c, hex(0xFFFF44), 8.0);
                c.stroke_line(mx, my, bx, by, hex(0xFFFF80));
            });
        }

        let impact = 0.6 + 0.4 * (t * PI * 10.0 + fi as f64 * 2.0).sin();
        canvas.scoped(|c| {
            glow(c, fork.color, 16.0 * impact);
            c.fill_circle(tx, ty, 3.0 + impact, rgba(255, 255, 150, impact));
        });

        for sp in 0..4 {
            let angle = sp as f64 / 4.0 * TAU + t * 6.0;
            let dist = 2.0 + prng((sp + fi * 10) as f64, t * 3.0) * 4.0;
            canvas.fill_rect(
                tx + angle.cos() * dist,
                ty + angle.sin() * dist,
                1.0,
                1.0,
                rgba(255, 255, 200, 0.8 - sp as f64 * 0.15),
            );
        }
    }

    // static crackling around the caster
    for i in 0..6 {
        let seed = i as f64;
        let phase = (t * 4.0 + seed / 6.0) % 1.0;
        let x = cx + (prng(seed + 30.0, t * 2.0) - 0.5) * 16.0;
        let y = cy - 10.0 + prng(seed + 35.0, t * 2.0) * 20.0;
        canvas.fill_rect(x, y, 1.0, 1.0, rgba(255, 255, 100, (1.0 - phase) * 0.8));
    }
}

pub fn soul_drain(canvas: &mut Canvas, t: f64, hero: &Hero) {
    let (cx, cy) = (24.0, 26.0);
    let pulse = 0.6 + 0.4 * (t * PI * 6.0).sin();

    canvas.scoped(|c| {
        c.set_alpha(0.35 * pulse);
        let aura = Gradient::radial(cx, cy, 2.0, 16.0)
            .stop(0.0, rgba(80, 0, 120, 0.8))
            .stop(0.5, rgba(60, 0, 100, 0.4))
            .stop(1.0, rgba(40, 0, 80, 0.0));
        c.fill_ellipse(cx, cy, 16.0, 18.0, aura);
    });

    hero.draw(canvas, 0.0, 0.0);

    // victim writhing on the right
    let vx = (t * PI * 10.0).sin() * 0.5;
    canvas.scoped(|c| {
        c.set_alpha(0.7);
        c.fill_rect(40.0 + vx, 20.0, 5.0, 12.0, hex(0x442233));
        c.fill_rect(41.0 + vx, 16.0, 3.0, 5.0, hex(0x553344));
        for (x, y) in [(38.0, 22.0), (45.0, 22.0), (40.0, 32.0), (43.0, 32.0)] {
            c.fill_rect(x + vx, y, 2.0, 8.0, hex(0x332233));
        }
    });
    canvas.scoped(|c| {
        c.set_alpha(0.3 * pulse);
        glow(c, hex(0xFF0033), 12.0);
        c.fill_ellipse(42.0, 26.0, 5.0, 8.0, hex(0xFF2244));
    });

    // tether
    let wave1 = (t * PI * 4.0).sin() * 3.0;
    let wave2 = (t * PI * 4.0 + 1.0).sin() * 3.0;
    let curve = [(cx + 4.0, cy), (32.0, cy + wave1), (36.0, cy + wave2), (40.0, 26.0)];
    canvas.scoped(|c| {
        c.set_line_width(3.0 * pulse);
        glow(c, hex(0x8822CC), 16.0);
        let tether = Gradient::linear(cx + 4.0, 0.0, 40.0, 0.0)
            .stop(0.0, rgba(120, 30, 180, 0.9))
            .stop(0.5, rgba(80, 10, 140, 0.7))
            .stop(1.0, rgba(100, 20, 160, 0.9));
        c.stroke_bezier(curve[0], curve[1], curve[2], curve[3], tether);
    });
    canvas.scoped(|c| {
        c.set_line_width(1.0);
        glow(c, hex(0xCC88FF), 8.0);
        c.stroke_bezier(curve[0], curve[1], curve[2], curve[3], rgba(200, 100, 255, 0.8));
    });

    // wisps drift back, turning from pain red to healing green
    for i in 0..8 {
        let seed = i as f64;
        let phase = (t * 1.8 + seed / 8.0) % 1.0;
        let x = lerp(42.0, cx, ease_out(phase));
        let y = cy + (prng(seed, 0.0) - 0.5) * 10.0 + (phase * PI * 3.0 + seed).sin() * 3.0;
        let size = 1.0 + prng(seed + 20.0, 0.0);
        let (r, g, b) = (
            lerp(255.0, 60.0, phase) as u8,
            lerp(60.0, 255.0, phase) as u8,
            lerp(100.0, 120.0, phase) as u8,
        );
        canvas.scoped(|c| {
            glow(c, rgba(r, g, b, 0.8), 8.0);
            c.fill_rect(x - size / 2.0, y - size / 2.0, size, size, rgba(r, g, b, (phase * PI).sin()));
        });
    }

    canvas.scoped(|c| {
        c.set_alpha(0.25 * pulse);
        glow(c, hex(0x44FF88), 20.0);
        let heal = Gradient::radial(cx, cy, 0.0, 12.0)
            .stop(0.0, rgba(68, 255, 136, 0.6))
            .stop(0.5, rgba(68, 255, 136, 0.3))
            .stop(1.0, rgba(68, 255, 136, 0.0));
        c.fill_ellipse(cx, cy, 12.0, 14.0, heal);
    });

    // rising plus signs
    for i in 0..3 {
        let phase = (t * 2.0 + i as f64 * 0.33) % 1.0;
        let hx = cx - 4.0 + i as f64 * 4.0;
        let hy = cy - 4.0 - phase * 10.0;
        let color = rgba(68, 255, 136, (1.0 - phase) * 0.7);
        canvas.scoped(|c| {
            glow(c, hex(0x44FF88), 4.0);
            c.fill_rect(hx, hy, 3.0, 1.0, color);
            c.fill_rect(hx + 1.0, hy - 1.0, 1.0, 3.0, color);
        });
    }
}

pub fn runic_ray(canvas: &mut Canvas, t: f64, hero: &Hero) {
    let cy = 26.0;
    let pulse = 0.8 + 0.2 * (t * PI * 10.0).sin();
    hero.draw(canvas, 0.0, 0.0);

    let spin = t * PI * 4.0;
    canvas.scoped(|c| {
        c.set_line_width(1.0);
        glow(c, RUNE_CYAN, 10.0);
        c.stroke_arc(22.0, cy, 5.0, 5.0, spin, spin + PI * 1.5, rgba(74, 240, 255, 0.5 * pulse));
    });

    canvas.scoped(|c| {
        glow(c, RUNE_CYAN, 24.0 * pulse);
        let outer = Gradient::linear(24.0, 0.0, 48.0, 0.0)
            .stop(0.0, rgba(74, 240, 255, 0.5))
            .stop(0.5, rgba(74, 240, 255, 0.3))
            .stop(1.0, rgba(74, 240, 255, 0.0));
        c.fill_rect(24.0, cy - 3.0, 24.0, 6.0, outer);
    });
    canvas.scoped(|c| {
        glow(c, RUNE_CYAN, 16.0 * pulse);
        let mid = Gradient::linear(24.0, 0.0, 48.0, 0.0)
            .stop(0.0, rgba(100, 255, 255, 0.95))
            .stop(0.6, rgba(74, 240, 255, 0.8))
            .stop(1.0, rgba(74, 240, 255, 0.2));
        c.fill_rect(24.0, cy - 1.5, 24.0, 3.0, mid);
    });
    canvas.scoped(|c| {
        glow(c, Color::WHITE, 8.0);
        c.fill_rect(24.0, cy - 0.3, 20.0, 0.6, rgba(220, 255, 255, pulse));
    });

    // runes riding the beam
    const RUNES: [char; 6] = ['ᚱ', 'ᚠ', 'ᚦ', 'ᚷ', 'ᛁ', 'ᛇ'];
    for i in 0..7 {
        let phase = (t * 2.5 + i as f64 * 0.14) % 1.0;
        let x = 26.0 + phase * 20.0;
        let y = cy + (prng(i as f64, 0.0) - 0.5) * 6.0;
        canvas.scoped(|c| {
            glow(c, RUNE_CYAN, 8.0);
            c.translate(x, y);
            c.rotate(t * 2.0 + i as f64);
            c.fill_glyph(RUNES[i % RUNES.len()], 0.0, -1.75, 3.5, rgba(220, 255, 255, (phase * PI).sin() * 0.9));
        });
    }

    let impact = 0.5 + 0.5 * (t * PI * 6.0).sin();
    canvas.scoped(|c| {
        glow(c, RUNE_CYAN, 16.0);
        c.fill_circle(47.0, cy, 3.0 + impact * 2.0, rgba(74, 240, 255, impact * 0.6));
    });
    for i in 0..5 {
        let angle = i as f64 / 5.0 * TAU + t * 3.0;
        let dist = 2.0 + impact * 3.0;
        canvas.fill_rect(
            47.0 + angle.cos() * dist,
            cy + angle.sin() * dist,
            1.0,
            1.0,
            rgba(200, 255, 255, 0.7 - i as f64 * 0.1),
        );
    }
}

pub fn bifrost_blast(canvas: &mut Canvas, t: f64, hero: &Hero) {
    const BANDS: [u32; 6] = [0xFF4444, 0xFF8844, 0xFFEE44, 0x44FF88, 0x4488FF, 0xAA44FF];
    hero.draw(canvas, 0.0, 0.0);
    let cy = 26.0;
    let pulse = 0.8 + 0.2 * (t * PI * 8.0).sin();

    for (i, band) in BANDS.iter().enumerate() {
        let y_off = (i as f64 - BANDS.len() as f64 / 2.0) * 1.2;
        let color = hex(*band);
        canvas.scoped(|c| {
            c.set_alpha(0.7 * pulse);
            glow(c, color, 10.0);
            c.fill_rect(26.0, cy + y_off - 0.8, 22.0, 1.6, color);
        });
    }

    canvas.scoped(|c| {
        c.set_alpha(pulse);
        glow(c, Color::WHITE, 20.0);
        c.fill_rect(26.0, cy - 0.5, 22.0, 1.0, Color::WHITE);
    });
}
