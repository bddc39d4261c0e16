//! Part catalog: bare body regions and face details
//!
//! One routine per region, selected by a style enum. A `None` style (an id
//! the catalog does not know) falls back to the region's default shape for
//! body regions and draws nothing for optional face details.

mod body;
mod face;
mod hair;
mod head;

pub use body::{draw_arms, draw_bare_feet, draw_ground_shadow, draw_legs, draw_torso};
pub use face::{draw_beard, draw_eyes, draw_face_paint, draw_mouth, draw_scar};
pub use hair::draw_hair;
pub use head::draw_head;

/// Rows of the character grid face details may touch
pub const FACE_ROWS: std::ops::Range<u32> = 9..28;
/// Columns of the character grid face details may touch
pub const FACE_COLS: std::ops::Range<u32> = 17..34;
