//! Pixel blending
//!
//! Straight-alpha RGBA8 destination, straight-alpha source color with a
//! separate coverage alpha.

use runeforge_core::Color;

/// How a source pixel combines with the destination
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BlendMode {
    /// Source over destination
    #[default]
    Normal,
    /// Sum of premultiplied colors, saturating (for glows and light)
    Additive,
}

/// Blend `src` at opacity `alpha` onto `dst`
pub fn blend_pixel(dst: [u8; 4], src: Color, alpha: f32, mode: BlendMode) -> [u8; 4] {
    let src_a = (src.a * alpha).clamp(0.0, 1.0);
    if src_a <= 0.0 {
        return dst;
    }

    let dst_a = dst[3] as f32 / 255.0;
    let [sr, sg, sb] = src.rgb_bytes();

    match mode {
        BlendMode::Normal => {
            let out_a = src_a + dst_a * (1.0 - src_a);
            if out_a <= 0.0 {
                return [0, 0, 0, 0];
            }

            let blend = |s: u8, d: u8| -> u8 {
                let s = s as f32 / 255.0;
                let d = d as f32 / 255.0;
                let out = (s * src_a + d * dst_a * (1.0 - src_a)) / out_a;
                (out * 255.0).round().clamp(0.0, 255.0) as u8
            };

            [
                blend(sr, dst[0]),
                blend(sg, dst[1]),
                blend(sb, dst[2]),
                (out_a * 255.0).round() as u8,
            ]
        }

        BlendMode::Additive => {
            let out_a = (src_a + dst_a).min(1.0);
            let add = |s: u8, d: u8| -> u8 {
                let sum = (s as f32 / 255.0) * src_a + (d as f32 / 255.0) * dst_a;
                ((sum.min(1.0) / out_a) * 255.0).round().clamp(0.0, 255.0) as u8
            };

            [
                add(sr, dst[0]),
                add(sg, dst[1]),
                add(sb, dst[2]),
                (out_a * 255.0).round() as u8,
            ]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opaque_source_replaces() {
        let out = blend_pixel([10, 20, 30, 255], Color::rgb(200, 100, 50), 1.0, BlendMode::Normal);
        assert_eq!(out, [200, 100, 50, 255]);
    }

    #[test]
    fn test_half_alpha_over_opaque() {
        let out = blend_pixel([0, 0, 0, 255], Color::rgb(255, 255, 255), 0.5, BlendMode::Normal);
        assert_eq!(out[3], 255);
        assert!((127..=128).contains(&out[0]));
    }

    #[test]
    fn test_translucent_onto_empty_keeps_color() {
        let out = blend_pixel([0, 0, 0, 0], Color::rgba(255, 0, 0, 0.25), 1.0, BlendMode::Normal);
        assert_eq!(&out[..3], &[255, 0, 0]);
        assert_eq!(out[3], 64);
    }

    #[test]
    fn test_additive_blend() {
        let out = blend_pixel(
            [100, 100, 100, 255],
            Color::rgb(50, 50, 50),
            1.0,
            BlendMode::Additive,
        );
        assert_eq!(out, [150, 150, 150, 255]);

        let saturated = blend_pixel([200, 0, 0, 255], Color::rgb(200, 0, 0), 1.0, BlendMode::Additive);
        assert_eq!(saturated[0], 255);
    }

    #[test]
    fn test_zero_alpha_is_noop() {
        let dst = [1, 2, 3, 4];
        assert_eq!(blend_pixel(dst, Color::WHITE, 0.0, BlendMode::Normal), dst);
        assert_eq!(blend_pixel(dst, Color::TRANSPARENT, 1.0, BlendMode::Additive), dst);
    }
}
