//! Ground slams: leaps, falling hammers and quakes

use std::f64::consts::{PI, TAU};

use runeforge_core::hex;

use super::{ease_in, ease_out, glow, lerp, prng, rgba, Hero};
use crate::canvas::Canvas;

pub fn earth_shatter(canvas: &mut Canvas, t: f64, hero: &Hero) {
    if t < 0.35 {
        // leap
        let up = ease_out(t / 0.35);
        hero.draw(canvas, 0.0, -16.0 * (up * PI).sin());
        canvas.scoped(|c| {
            c.set_alpha(up * 0.3);
            c.fill_rect(18.0, 40.0, 12.0, 3.0, rgba(170, 119, 68, up * 0.3));
        });
        return;
    }

    let ip = (t - 0.35) / 0.65;
    hero.draw(canvas, 0.0, 0.0);

    // fissures keep the same layout every loop
    for i in 0..6 {
        let angle = i as f64 / 6.0 * PI + prng(i as f64, 0.0) * 0.5;
        let len = ip * 18.0;
        canvas.scoped(|c| {
            c.set_line_width(2.0 - ip);
            c.stroke_line(
                24.0,
                43.0,
                24.0 + angle.cos() * len,
                43.0 + angle.sin() * len * 0.5,
                rgba(80, 50, 20, 1.0 - ip * 0.7),
            );
        });
    }

    canvas.scoped(|c| {
        c.set_line_width(3.0 - ip * 2.0);
        glow(c, hex(0xAA7744), 12.0);
        c.stroke_ellipse(24.0, 43.0, ip * 20.0, ip * 7.0, rgba(170, 100, 40, 1.0 - ip));
    });

    // debris thrown up and falling back
    for i in 0..8 {
        let seed = i as f64;
        let angle = prng(seed + 20.0, 0.0) * TAU;
        let x = 24.0 + angle.cos() * ip * 14.0 * prng(seed, 0.0);
        let y = 40.0 - ip * 8.0 * prng(seed + 3.0, 0.0) + ip * ip * 12.0;
        canvas.fill_rect(x, y, 2.0, 2.0, rgba(120, 80, 40, 1.0 - ip * 1.2));
    }
}

pub fn mjolnir_strike(canvas: &mut Canvas, t: f64, hero: &Hero) {
    let spark = hex(0xFFEE44);
    hero.draw(canvas, 0.0, 0.0);

    let hy = lerp(-8.0, 20.0, ease_in(t));
    canvas.scoped(|c| {
        c.set_line_width(2.0);
        glow(c, spark, 16.0);
        c.stroke_line(24.0, 0.0, 24.0 + (t * 20.0).sin() * 2.0, hy, rgba(255, 240, 80, (1.0 - t) * 0.8));
    });

    canvas.scoped(|c| {
        glow(c, spark, 12.0 * (1.0 - t));
        c.fill_rect(20.0, hy - 4.0, 8.0, 6.0, hex(0xAAAAAA));
        c.fill_rect(21.0, hy - 6.0, 6.0, 3.0, hex(0xCCCCCC));
        c.fill_rect(23.0, hy, 2.0, 8.0, hex(0x888888));
    });

    if t > 0.6 {
        let ip = (t - 0.6) / 0.4;
        canvas.scoped(|c| {
            c.set_line_width(4.0 - ip * 3.0);
            glow(c, spark, 18.0);
            c.stroke_ellipse(24.0, 43.0, ip * 20.0, ip * 6.0, rgba(255, 220, 50, 1.0 - ip));
        });
    }
}

pub fn frost_quake(canvas: &mut Canvas, t: f64, hero: &Hero) {
    let (cx, cy) = (24.0, 43.0);
    hero.draw(canvas, 0.0, 0.0);

    // ice spikes erupting in widening rings
    for ring in 0..3 {
        let phase = (t * 1.5 + ring as f64 * 0.25) % 1.0;
        let rad = (ring + 1) as f64 * 7.0 * phase;
        let spikes = 4 + ring * 2;
        let height = 5.0 * (1.0 - phase);
        let a = 1.0 - phase;
        for i in 0..spikes {
            let angle = i as f64 / spikes as f64 * TAU;
            let (x, y) = (cx + angle.cos() * rad, cy + angle.sin() * rad * 0.4);
            canvas.scoped(|c| {
                glow(c, hex(0x88DCFF), 6.0);
                c.fill_rect(x - 1.0, y - height, 2.0, height, rgba(160, 220, 255, a));
                c.fill_rect(x, y - height - 1.0, 1.0, 1.0, rgba(220, 245, 255, a));
            });
        }
    }
}

pub fn seismic_roar(canvas: &mut Canvas, t: f64, hero: &Hero) {
    hero.draw(canvas, 0.0, 0.0);

    for i in 0..4 {
        let phase = (t * 1.2 + i as f64 * 0.25) % 1.0;
        let rad = phase * 22.0;
        canvas.scoped(|c| {
            c.set_line_width(2.0 - phase);
            c.stroke_ellipse(24.0, 43.0, rad, rad * 0.35, rgba(160, 120, 60, (1.0 - phase) * 0.8));
        });
    }

    // dust kicked up by the stomp
    for i in 0..6 {
        let dp = (t * 2.0 + i as f64 * 0.16) % 1.0;
        let x = 24.0 + (prng(i as f64, 0.0) - 0.5) * 20.0;
        canvas.fill_rect(x, 42.0 - dp * 6.0, 3.0, 2.0, rgba(180, 140, 80, (1.0 - dp) * 0.6));
    }

    let shake = (t * PI * 12.0).sin() * (1.0 - t) * 0.5;
    canvas.scoped(|c| {
        c.set_line_width(1.0);
        c.set_line_dash(&[2.0, 3.0]);
        c.stroke_line(0.0, 42.0, 48.0, 42.0, rgba(200, 160, 80, 0.4 + shake * 0.3));
    });
}

pub fn meteor_drop(canvas: &mut Canvas, t: f64, hero: &Hero) {
    // rise off the top, then come crashing down
    let y_off = if t < 0.5 {
        lerp(0.0, -48.0, ease_in(t / 0.5))
    } else {
        lerp(-48.0, 0.0, ease_out((t - 0.5) / 0.5))
    };

    if t > 0.5 {
        let ip = (t - 0.5) / 0.5;
        canvas.scoped(|c| {
            c.set_line_width(6.0 - ip * 5.0);
            glow(c, hex(0xFF5500), 24.0);
            c.stroke_ellipse(24.0, 43.0, ip * 22.0, ip * 8.0, rgba(255, 80, 0, 1.0 - ip));
        });

        for i in 0..12u8 {
            let angle = i as f64 / 12.0 * TAU + prng(i as f64, 0.0);
            let d = ip * 20.0;
            let (x, y) = (24.0 + angle.cos() * d, 40.0 + angle.sin() * d * 0.4);
            canvas.scoped(|c| {
                glow(c, hex(0xFF6600), 8.0);
                c.fill_rect(x - 1.0, y - 1.0, 2.0, 2.0, rgba(255, 100 + i * 10, 0, 1.0 - ip * 1.3));
            });
        }
    }

    hero.draw(canvas, 0.0, y_off);

    canvas.scoped(|c| {
        c.set_alpha(0.5);
        glow(c, hex(0xFF4400), 20.0);
        c.fill_ellipse(24.0, 30.0 + y_off, 10.0, 14.0, hex(0xFF4400));
    });
}
