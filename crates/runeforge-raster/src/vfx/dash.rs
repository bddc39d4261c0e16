//! Movement: blinks, charges and rushes

use std::f64::consts::{PI, TAU};

use runeforge_core::hex;

use super::{ease_out, glow, lerp, prng, rgba, Hero};
use crate::canvas::Canvas;

pub fn shadow_step(canvas: &mut Canvas, t: f64, hero: &Hero) {
    // shadow-skinned ghost left behind
    canvas.scoped(|c| {
        c.set_alpha(1.0 - t * 2.0);
        hero.draw_tinted(c, [hex(0x4455AA), hex(0x223388), hex(0x6677CC)], -8.0, 0.0);
    });

    for i in 0..6 {
        let seed = i as f64;
        let x = lerp(-8.0, 4.0, t) + (prng(seed, t) - 0.5) * 6.0;
        let y = 20.0 + prng(seed + 5.0, t) * 20.0;
        canvas.scoped(|c| {
            glow(c, hex(0x4464DC), 6.0);
            c.fill_rect(x, y, 2.0, 2.0, rgba(68, 100, 220, (1.0 - t) * 0.7));
        });
    }

    // arrival
    if t > 0.5 {
        let fp = (t - 0.5) * 2.0;
        canvas.scoped(|c| {
            c.set_alpha(fp);
            hero.draw(c, 4.0, 0.0);
        });
        canvas.scoped(|c| {
            c.set_line_width(2.0 - fp);
            glow(c, hex(0x88AAFF), 12.0);
            c.stroke_ellipse(28.0, 28.0, fp * 14.0, fp * 14.0, rgba(136, 180, 255, 1.0 - fp));
        });
    }
}

pub fn valkyrie_rush(canvas: &mut Canvas, t: f64, hero: &Hero) {
    let x_off = lerp(-6.0, 8.0, ease_out(t));
    let cx = 24.0 + x_off;

    // spectral wings
    let spread = 1.0 + (t * PI * 4.0).sin() * 0.3;
    canvas.scoped(|c| {
        c.set_alpha(0.6);
        glow(c, hex(0x8888FF), 10.0);
        for side in [-1.0, 1.0] {
            c.fill_polygon(
                &[
                    (cx, 22.0),
                    (cx + side * 12.0 * spread, 14.0 - 4.0 * spread),
                    (cx + side * 8.0 * spread, 22.0),
                ],
                hex(0xAAAACC),
            );
        }
    });

    for i in 0..5 {
        let trail_x = x_off - i as f64 * 2.5;
        canvas.scoped(|c| {
            c.set_alpha((1.0 - i as f64 / 5.0) * 0.3 * t);
            hero.draw(c, trail_x, 0.0);
        });
    }
    hero.draw(canvas, x_off, 0.0);

    for i in 0..6 {
        let y = 14.0 + i as f64 * 4.0;
        canvas.scoped(|c| {
            c.set_line_width(0.8);
            c.stroke_line(0.0, y, 16.0 + x_off, y, rgba(180, 180, 255, (1.0 - t) * 0.7));
        });
    }
}

/// Ice shell fragments around `(cx, 28)`, `d` units out
fn ice_shell(canvas: &mut Canvas, cx: f64, d: f64, a: f64, blur: f64) {
    for i in 0..8 {
        let angle = i as f64 / 8.0 * TAU;
        let (ix, iy) = (cx + angle.cos() * d, 28.0 + angle.sin() * d * 0.7);
        canvas.scoped(|c| {
            glow(c, hex(0xAAEEFF), blur);
            c.fill_rect(ix - 1.0, iy - 2.0, 2.0, 3.0, rgba(160, 220, 255, a));
        });
    }
}

pub fn frost_blink(canvas: &mut Canvas, t: f64, hero: &Hero) {
    if t < 0.5 {
        // shatter at the origin
        let fp = t * 2.0;
        ice_shell(canvas, 24.0, fp * 12.0, 1.0 - fp, 6.0);
        canvas.scoped(|c| {
            c.set_alpha(1.0 - fp);
            hero.draw(c, 0.0, 0.0);
        });
    } else {
        // reform to the right
        let ap = (t - 0.5) * 2.0;
        ice_shell(canvas, 30.0, (1.0 - ap) * 12.0, ap, 8.0);
        canvas.scoped(|c| {
            c.set_alpha(ap);
            hero.draw(c, 6.0, 0.0);
        });
    }

    // rift between the two positions
    canvas.scoped(|c| {
        c.set_line_width(2.0);
        c.set_line_dash(&[3.0, 2.0]);
        glow(c, hex(0x88DCFF), 14.0);
        c.stroke_line(24.0, 12.0, 30.0, 44.0, rgba(136, 220, 255, 0.5 + 0.3 * (t * PI * 6.0).sin()));
    });
}

pub fn berserker_charge(canvas: &mut Canvas, t: f64, hero: &Hero) {
    let x_off = lerp(-10.0, 16.0, ease_out(t));

    canvas.scoped(|c| {
        c.set_alpha(0.4);
        glow(c, hex(0xFF4400), 16.0);
        c.fill_ellipse(24.0 + x_off, 26.0, 12.0, 18.0, hex(0xFF3300));
    });

    // silhouettes of the targets being hit
    for i in 0..3 {
        let a = t * 2.0 - i as f64 * 0.4;
        if a > 0.0 {
            canvas.scoped(|c| {
                c.set_alpha(a.min(1.0) * 0.4);
                c.fill_rect(28.0 + i as f64 * 5.0, 14.0, 6.0, 20.0, hex(0x884422));
            });
        }
    }

    hero.draw(canvas, x_off, 0.0);

    for i in 0..6 {
        let y = 16.0 + i as f64 * 4.0;
        canvas.scoped(|c| {
            c.set_line_width(1.0);
            c.stroke_line(0.0, y, 14.0 + x_off, y, rgba(255, 60, 0, (1.0 - t) * 0.9));
        });
    }
}

fn raven(canvas: &mut Canvas, x: f64, y: f64) {
    canvas.fill_rect(x - 1.0, y - 1.0, 3.0, 2.0, hex(0x2A2A3A));
    canvas.pixel(x - 2.0, y, hex(0x3A3A4A));
    canvas.pixel(x + 2.0, y, hex(0x3A3A4A));
}

pub fn raven_flight(canvas: &mut Canvas, t: f64, hero: &Hero) {
    const RAVENS: usize = 8;
    let angle = |i: usize| i as f64 / RAVENS as f64 * TAU;

    if t < 0.4 {
        // burst apart
        let dp = t / 0.4;
        canvas.scoped(|c| {
            c.set_alpha(1.0 - dp);
            hero.draw(c, 0.0, 0.0);
        });
        for i in 0..RAVENS {
            let d = dp * 20.0;
            canvas.scoped(|c| {
                glow(c, hex(0x6644AA), 6.0);
                raven(c, 24.0 + angle(i).cos() * d, 24.0 + angle(i).sin() * d * 0.6);
            });
        }
    } else if t > 0.7 {
        // regroup to the right
        let rp = (t - 0.7) / 0.3;
        for i in 0..RAVENS {
            let d = (1.0 - rp) * 20.0;
            canvas.scoped(|c| {
                glow(c, hex(0x6644AA), 6.0);
                raven(c, 28.0 + angle(i).cos() * d, 24.0 + angle(i).sin() * d * 0.6);
            });
        }
        canvas.scoped(|c| {
            c.set_alpha(rp);
            hero.draw(c, 4.0, 0.0);
        });
    } else {
        // circling flock
        for i in 0..RAVENS {
            let a = angle(i) + t * TAU;
            canvas.scoped(|c| {
                glow(c, hex(0x6644AA), 4.0);
                raven(c, 24.0 + a.cos() * 18.0, 24.0 + a.sin() * 10.0);
            });
        }
    }
}
