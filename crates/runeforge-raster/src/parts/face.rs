//! Face details, drawn over the head and never outside the face box

use runeforge_core::{darken, hex, lighten, BeardStyle, Color, FacePaint, ScarStyle};

use crate::canvas::Canvas;
use crate::palette::{alpha, shade, EYE_WHITE, LEATHER_TIE, PUPIL, RITUAL_RED, RUNE_CYAN, SCAR};

const WAR_BLUE: Color = hex(0x1A1A2E);
const BONE_WHITE: Color = hex(0xDDDDDD);
const SOCKET: Color = hex(0x1A1A1A);
const DRIED_BLOOD: Color = hex(0x8B0000);

pub fn draw_eyes(canvas: &mut Canvas, iris: Color) {
    for x in [19.0, 27.0] {
        canvas.fill_rect(x, 12.0, 4.0, 3.0, EYE_WHITE);
        canvas.fill_rect(x + 1.0, 12.0, 3.0, 3.0, iris);
        canvas.pixel(x + 2.0, 13.0, PUPIL);
        canvas.pixel(x + 1.0, 12.0, Color::WHITE);
        // brow
        canvas.fill_rect(x, 11.0, 4.0, 1.0, shade(0.3));
    }
}

pub fn draw_mouth(canvas: &mut Canvas, skin_shadow: Color) {
    let corner = darken(skin_shadow, 20);
    canvas.fill_rect(22.0, 17.0, 5.0, 1.0, skin_shadow);
    canvas.pixel(22.0, 17.0, corner);
    canvas.pixel(26.0, 17.0, corner);
}

/// Beard in the hair color
pub fn draw_beard(canvas: &mut Canvas, style: BeardStyle, color: Color) {
    let dark = darken(color, 25);
    let hi = lighten(color, 15);

    match style {
        BeardStyle::Stubble => {
            for x in (18..30).step_by(2) {
                for y in (16..21).step_by(2) {
                    canvas.pixel(x as f64, y as f64, alpha(dark, 0x60));
                }
            }
        }
        BeardStyle::Short => {
            canvas.fill_rect(18.0, 17.0, 12.0, 4.0, color);
            canvas.fill_rect(18.0, 20.0, 12.0, 1.0, dark);
            canvas.fill_rect(19.0, 17.0, 10.0, 1.0, hi);
        }
        BeardStyle::Long => {
            canvas.fill_rect(18.0, 17.0, 12.0, 4.0, color);
            canvas.fill_rect(19.0, 21.0, 10.0, 4.0, color);
            canvas.fill_rect(20.0, 25.0, 8.0, 2.0, color);
            canvas.fill_rect(18.0, 20.0, 12.0, 1.0, dark);
            canvas.fill_rect(20.0, 24.0, 8.0, 1.0, dark);
            canvas.fill_rect(19.0, 17.0, 10.0, 1.0, hi);
        }
        BeardStyle::Braided => {
            canvas.fill_rect(18.0, 17.0, 12.0, 4.0, color);
            canvas.fill_rect(21.0, 21.0, 3.0, 6.0, color);
            canvas.fill_rect(24.0, 21.0, 3.0, 6.0, color);
            canvas.fill_rect(21.0, 24.0, 3.0, 1.0, LEATHER_TIE);
            canvas.fill_rect(24.0, 24.0, 3.0, 1.0, LEATHER_TIE);
            canvas.fill_rect(19.0, 17.0, 10.0, 1.0, hi);
        }
    }
}

pub fn draw_scar(canvas: &mut Canvas, style: ScarStyle) {
    let points: &[(f64, f64)] = match style {
        ScarStyle::LeftEye => &[(18.0, 11.0), (19.0, 12.0), (19.0, 13.0), (18.0, 14.0)],
        ScarStyle::RightCheek => &[(31.0, 13.0), (32.0, 14.0), (31.0, 15.0)],
        ScarStyle::CrossFace => {
            for i in 0..6 {
                let i = i as f64;
                canvas.pixel(18.0 + i, 11.0 + i, SCAR);
                canvas.pixel(30.0 - i, 11.0 + i, SCAR);
            }
            return;
        }
    };
    for (x, y) in points {
        canvas.pixel(*x, *y, SCAR);
    }
}

pub fn draw_face_paint(canvas: &mut Canvas, style: FacePaint) {
    match style {
        FacePaint::WarStripes => {
            for x in [18.0, 27.0] {
                canvas.fill_rect(x, 11.0, 5.0, 1.0, RITUAL_RED);
                canvas.fill_rect(x, 13.0, 5.0, 1.0, WAR_BLUE);
            }
        }
        FacePaint::SkullPaint => {
            canvas.fill_rect(18.0, 10.0, 12.0, 1.0, BONE_WHITE);
            canvas.fill_rect(22.0, 16.0, 4.0, 2.0, SOCKET);
            canvas.pixel(23.0, 18.0, SOCKET);
            canvas.pixel(24.0, 18.0, SOCKET);
        }
        FacePaint::RuneMarks => {
            for (x, y) in [
                (18.0, 10.0),
                (17.0, 12.0),
                (18.0, 14.0),
                (32.0, 10.0),
                (33.0, 12.0),
                (32.0, 14.0),
            ] {
                canvas.pixel(x, y, RUNE_CYAN);
            }
        }
        FacePaint::BloodSmear => {
            canvas.fill_rect(19.0, 12.0, 3.0, 1.0, DRIED_BLOOD);
            canvas.fill_rect(18.0, 13.0, 2.0, 3.0, DRIED_BLOOD);
        }
    }
}
