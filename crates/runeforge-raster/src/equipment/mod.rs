//! Equipment catalog
//!
//! Chest, pants, boots and helmets replace the body region they cover;
//! gloves and weapons draw over the already painted limbs. Every routine
//! reads its anchors from the [`BodySilhouette`](runeforge_core::BodySilhouette)
//! rather than branching on the body type.

mod boots;
mod chest;
mod gloves;
mod helmet;
mod pants;
mod weapon;

pub use boots::draw_boots;
pub use chest::draw_chest;
pub use gloves::{draw_gloves, GLOVE_HAND_Y};
pub use helmet::draw_helmet;
pub use pants::draw_pants;
pub use weapon::draw_weapon;

use runeforge_core::{hex, Color};

use crate::canvas::Canvas;
use crate::palette::{shade, Triad};

/// Material tones from packed `0xRRGGBB` values
fn tones(base: u32, shadow: u32, highlight: u32) -> Triad {
    Triad::new(hex(base), hex(shadow), hex(highlight))
}

/// Soft shadow a piece of gear casts on what is below it
fn cast_shadow(canvas: &mut Canvas, x: f64, y: f64, w: f64) {
    canvas.fill_rect(x, y, w, 2.0, shade(0.25));
}

/// Shaded block: base fill, highlight band on top, shadow band at the
/// bottom (skipped when `bottom` is zero), then a one-unit edge
#[allow(clippy::too_many_arguments)]
fn slab(
    canvas: &mut Canvas,
    x: f64,
    y: f64,
    w: f64,
    h: f64,
    tones: &Triad,
    top: f64,
    bottom: f64,
    edge: Color,
) {
    canvas.fill_rect(x, y, w, h, tones.base);
    canvas.fill_rect(x, y, w, top, tones.highlight);
    if bottom > 0.0 {
        canvas.fill_rect(x, y + h - bottom, w, bottom, tones.shadow);
    }
    canvas.outline(x, y, w, h, edge);
}
