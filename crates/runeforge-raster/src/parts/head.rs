use runeforge_core::HeadStyle;

use crate::canvas::Canvas;
use crate::palette::{alpha, Triad};

/// Head silhouette; unknown styles draw the round head
pub fn draw_head(canvas: &mut Canvas, style: Option<HeadStyle>, skin: &Triad) {
    let Triad {
        base,
        shadow: shad,
        highlight: hi,
    } = *skin;
    let ol = skin.outline();

    match style.unwrap_or_default() {
        HeadStyle::Square => {
            canvas.fill_rect(14.0, 5.0, 20.0, 16.0, base);
            canvas.outline(14.0, 5.0, 20.0, 16.0, ol);
            canvas.fill_rect(14.0, 5.0, 20.0, 3.0, hi);
            canvas.fill_rect(14.0, 18.0, 20.0, 3.0, shad);
            canvas.fill_rect(14.0, 5.0, 3.0, 16.0, hi);
            canvas.fill_rect(31.0, 5.0, 3.0, 16.0, shad);
        }
        HeadStyle::Angular => {
            canvas.fill_rect(15.0, 5.0, 18.0, 16.0, base);
            canvas.outline(15.0, 5.0, 18.0, 16.0, ol);
            canvas.fill_rect(14.0, 8.0, 1.0, 10.0, base);
            canvas.fill_rect(33.0, 8.0, 1.0, 10.0, base);
            canvas.fill_rect(15.0, 5.0, 18.0, 3.0, hi);
            canvas.fill_rect(18.0, 18.0, 12.0, 3.0, shad);
            // jaw
            canvas.fill_rect(15.0, 16.0, 3.0, 4.0, shad);
            canvas.fill_rect(30.0, 16.0, 3.0, 4.0, shad);
        }
        HeadStyle::Oval => {
            canvas.fill_rect(16.0, 6.0, 16.0, 14.0, base);
            canvas.fill_rect(17.0, 5.0, 14.0, 1.0, base);
            canvas.fill_rect(17.0, 20.0, 14.0, 1.0, base);
            canvas.fill_rect(15.0, 8.0, 1.0, 10.0, base);
            canvas.fill_rect(32.0, 8.0, 1.0, 10.0, base);
            canvas.outline(16.0, 6.0, 16.0, 14.0, ol);
            canvas.fill_rect(17.0, 5.0, 14.0, 3.0, hi);
            canvas.fill_rect(17.0, 18.0, 14.0, 3.0, shad);
            canvas.fill_rect(29.0, 9.0, 2.0, 8.0, alpha(shad, 0x80));
        }
        HeadStyle::Heart => {
            // Broad brow tapering to a narrow chin
            canvas.fill_rect(14.0, 5.0, 20.0, 9.0, base);
            canvas.fill_rect(16.0, 14.0, 16.0, 4.0, base);
            canvas.fill_rect(19.0, 18.0, 10.0, 3.0, base);
            canvas.outline(14.0, 5.0, 20.0, 9.0, ol);
            canvas.fill_rect(14.0, 5.0, 20.0, 3.0, hi);
            canvas.fill_rect(16.0, 16.0, 16.0, 2.0, shad);
            canvas.fill_rect(19.0, 19.0, 10.0, 2.0, shad);
            canvas.pixel(16.0, 17.0, ol);
            canvas.pixel(31.0, 17.0, ol);
            canvas.fill_rect(23.0, 5.0, 2.0, 1.0, shad);
        }
        HeadStyle::Diamond => {
            // Narrow brow and chin around wide cheekbones
            canvas.fill_rect(18.0, 5.0, 12.0, 3.0, base);
            canvas.fill_rect(15.0, 8.0, 18.0, 8.0, base);
            canvas.fill_rect(14.0, 10.0, 20.0, 4.0, base);
            canvas.fill_rect(17.0, 16.0, 14.0, 3.0, base);
            canvas.fill_rect(20.0, 19.0, 8.0, 2.0, base);
            canvas.outline(15.0, 8.0, 18.0, 8.0, ol);
            canvas.fill_rect(18.0, 5.0, 12.0, 2.0, hi);
            canvas.fill_rect(14.0, 10.0, 1.0, 4.0, hi);
            canvas.fill_rect(33.0, 10.0, 1.0, 4.0, shad);
            canvas.fill_rect(17.0, 17.0, 14.0, 2.0, shad);
            canvas.fill_rect(20.0, 19.0, 8.0, 2.0, shad);
        }
        HeadStyle::Round => {
            canvas.fill_rect(15.0, 6.0, 18.0, 14.0, base);
            canvas.fill_rect(16.0, 5.0, 16.0, 1.0, base);
            canvas.fill_rect(16.0, 20.0, 16.0, 1.0, base);
            canvas.fill_rect(14.0, 9.0, 1.0, 8.0, base);
            canvas.fill_rect(33.0, 9.0, 1.0, 8.0, base);
            canvas.outline(15.0, 6.0, 18.0, 14.0, ol);
            canvas.fill_rect(16.0, 5.0, 16.0, 3.0, hi);
            canvas.fill_rect(16.0, 18.0, 16.0, 3.0, shad);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use runeforge_core::CharacterConfig;

    fn render(style: Option<HeadStyle>) -> Canvas {
        let mut canvas = Canvas::new(48, 1);
        draw_head(&mut canvas, style, &Triad::skin(&CharacterConfig::default()));
        canvas
    }

    #[test]
    fn test_every_head_paints_inside_head_box() {
        for style in HeadStyle::ALL {
            let canvas = render(Some(*style));
            let frame = canvas.frame();
            assert!(frame.opaque_count() > 100, "{style}");
            for (x, y, px) in frame.pixels() {
                if px[3] > 0 {
                    assert!((14..34).contains(&x) && (5..21).contains(&y), "{style} {x},{y}");
                }
            }
        }
    }

    #[test]
    fn test_unknown_head_is_round() {
        assert_eq!(
            render(None).frame().digest(),
            render(Some(HeadStyle::Round)).frame().digest()
        );
    }

    #[test]
    fn test_head_shapes_differ() {
        let digests: std::collections::HashSet<_> = HeadStyle::ALL
            .iter()
            .map(|s| render(Some(*s)).frame().digest())
            .collect();
        assert_eq!(digests.len(), HeadStyle::ALL.len());
    }
}
