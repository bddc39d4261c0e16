//! Runeforge Raster - procedural sprite drawing
//!
//! Every sprite is painted from coordinates and colors onto a [`Canvas`],
//! a software RGBA surface addressed in logical grid units. Nothing is
//! loaded from image files.
//!
//! Entry points:
//!
//! - [`draw_character`] / [`render_character`]: body parts and equipment
//!   in a fixed z-order
//! - [`draw_item_sprite`] / [`render_item`]: a single equipment icon
//! - [`draw_monster`] / [`render_monster`]: one creature
//! - [`draw_skill_vfx`]: the category effect for a skill
//! - [`draw_skill_frame`]: the skill's own effect, falling back to the
//!   category effect
//!
//! ```
//! use runeforge_core::{CharacterConfig, EquippedItems};
//! use runeforge_raster::render_character;
//!
//! let frame = render_character(&CharacterConfig::default(), &EquippedItems::new(), 2);
//! assert_eq!(frame.width, 96);
//! assert!(!frame.is_blank());
//! ```

pub mod blend;
pub mod canvas;
pub mod compositor;
pub mod equipment;
pub mod export;
pub mod glyphs;
pub mod items;
pub mod monsters;
pub mod palette;
pub mod parts;
pub mod vfx;

pub use blend::BlendMode;
pub use canvas::{Canvas, Glow, Gradient, Layer, LineCap, Paint, Transform};
pub use compositor::{draw_character, render_character};
pub use export::FrameExt;
pub use items::{draw_item_sprite, render_item};
pub use monsters::{draw_monster, render_monster};
pub use vfx::{
    draw_skill_frame, draw_skill_vfx, ease_in, ease_out, has_bespoke, lerp, prng,
    render_skill_frame, SkillFrame,
};
