use runeforge_core::{darken, lighten, Color, HairStyle};

use crate::canvas::Canvas;
use crate::palette::{alpha, GOLD, LEATHER_TIE};

/// Hair over the head. Unknown styles draw short hair; `Bald` draws nothing.
pub fn draw_hair(canvas: &mut Canvas, style: Option<HairStyle>, color: Color) {
    let dark = darken(color, 30);
    let hi = lighten(color, 25);

    match style.unwrap_or_default() {
        HairStyle::Bald => {}
        HairStyle::Long => {
            canvas.fill_rect(14.0, 2.0, 20.0, 6.0, color);
            canvas.fill_rect(15.0, 2.0, 18.0, 2.0, hi);
            canvas.fill_rect(12.0, 5.0, 3.0, 16.0, color);
            canvas.fill_rect(33.0, 5.0, 3.0, 16.0, color);
            for x in [11.0, 34.0] {
                canvas.fill_rect(x, 19.0, 3.0, 8.0, color);
                canvas.fill_rect(x, 25.0, 3.0, 2.0, dark);
            }
            canvas.fill_rect(14.0, 7.0, 20.0, 1.0, dark);
        }
        HairStyle::Braided => {
            canvas.fill_rect(15.0, 2.0, 18.0, 6.0, color);
            canvas.fill_rect(16.0, 2.0, 16.0, 2.0, hi);
            canvas.fill_rect(14.0, 5.0, 3.0, 8.0, color);
            canvas.fill_rect(31.0, 5.0, 3.0, 8.0, color);
            for x in [11.0, 34.0] {
                canvas.fill_rect(x, 10.0, 3.0, 18.0, color);
                canvas.fill_rect(x, 16.0, 3.0, 1.0, LEATHER_TIE);
                canvas.fill_rect(x, 22.0, 3.0, 1.0, LEATHER_TIE);
                canvas.fill_rect(x, 27.0, 3.0, 1.0, GOLD);
            }
            canvas.fill_rect(15.0, 7.0, 18.0, 1.0, dark);
        }
        HairStyle::Mohawk => {
            canvas.fill_rect(21.0, -1.0, 6.0, 8.0, color);
            canvas.fill_rect(20.0, 0.0, 8.0, 6.0, color);
            canvas.fill_rect(22.0, -2.0, 4.0, 3.0, hi);
            canvas.fill_rect(21.0, 6.0, 6.0, 2.0, dark);
        }
        HairStyle::Topknot => {
            canvas.fill_rect(15.0, 3.0, 18.0, 4.0, color);
            canvas.fill_rect(16.0, 3.0, 16.0, 2.0, hi);
            canvas.fill_rect(20.0, -2.0, 8.0, 6.0, color);
            canvas.fill_rect(21.0, -3.0, 6.0, 3.0, hi);
            canvas.fill_rect(22.0, 0.0, 4.0, 1.0, LEATHER_TIE);
            canvas.fill_rect(15.0, 6.0, 18.0, 1.0, dark);
        }
        HairStyle::Wild => {
            canvas.fill_rect(13.0, 1.0, 22.0, 7.0, color);
            canvas.fill_rect(14.0, 1.0, 20.0, 2.0, hi);
            canvas.fill_rect(11.0, 4.0, 3.0, 14.0, color);
            canvas.fill_rect(34.0, 4.0, 3.0, 14.0, color);
            canvas.fill_rect(10.0, 8.0, 2.0, 6.0, color);
            canvas.fill_rect(36.0, 8.0, 2.0, 6.0, color);
            canvas.pixel(12.0, 3.0, hi);
            canvas.pixel(35.0, 3.0, hi);
            canvas.fill_rect(13.0, 7.0, 22.0, 1.0, dark);
        }
        HairStyle::ShavedSides => {
            canvas.fill_rect(18.0, 2.0, 12.0, 6.0, color);
            canvas.fill_rect(19.0, 2.0, 10.0, 2.0, hi);
            // stubble
            canvas.fill_rect(15.0, 5.0, 3.0, 3.0, alpha(dark, 0x60));
            canvas.fill_rect(30.0, 5.0, 3.0, 3.0, alpha(dark, 0x60));
            canvas.fill_rect(18.0, 7.0, 12.0, 1.0, dark);
        }
        HairStyle::Short => {
            canvas.fill_rect(15.0, 2.0, 18.0, 6.0, color);
            canvas.fill_rect(16.0, 2.0, 16.0, 2.0, hi);
            canvas.fill_rect(14.0, 5.0, 3.0, 6.0, color);
            canvas.fill_rect(31.0, 5.0, 3.0, 6.0, color);
            canvas.fill_rect(15.0, 7.0, 18.0, 1.0, dark);
        }
    }
}
