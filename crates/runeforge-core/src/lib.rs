//! Runeforge Core - types for procedural Norse pixel-art sprites
//!
//! Everything the renderers consume but that does not itself draw: colors
//! and shade derivation, the closed identifier sets for styles, equipment,
//! monsters and skills, character configuration, body anchors, catalogs
//! and rendered frames.
//!
//! # Identifiers
//!
//! Configurations carry identifiers as strings. Each identifier table is a
//! Rust enum with `from_id`; drawing code resolves on demand. A missing
//! item, monster or skill draws nothing and a missing style falls back to
//! the default shape:
//!
//! ```
//! use runeforge_core::{CharacterConfig, HeadStyle};
//!
//! let mut config = CharacterConfig::default();
//! assert_eq!(config.head(), Some(HeadStyle::Round));
//!
//! config.head_style = "trapezoid".into();
//! assert_eq!(config.head(), None);
//! ```

#[macro_use]
mod macros;

pub mod catalog;
pub mod character;
pub mod color;
pub mod config;
pub mod equipment;
pub mod error;
pub mod output;
pub mod silhouette;
pub mod style;

// Re-export commonly used types
pub use catalog::{
    CategoryInfo, ItemInfo, MonsterId, MonsterInfo, Rarity, SkillCategory, SkillId, SkillInfo,
};
pub use character::{CharacterConfig, CharacterProfile, SkinPalette, SKIN_PALETTES};
pub use color::{darken, darken_hex, hex, lighten, lighten_hex, Color};
pub use config::{
    scale_for_size, RenderConfig, CHARACTER_GRID, ITEM_GRID, MAX_SCALE, VFX_GRID, VFX_PAD,
};
pub use equipment::{
    BootsId, ChestId, EquippedItems, GlovesId, HelmetId, ItemId, PantsId, Slot, WeaponId,
};
pub use error::{Result, SpriteError};
pub use output::{ImageFrame, TerminalCell, TerminalFrame};
pub use silhouette::BodySilhouette;
pub use style::{
    BeardStyle, BodyType, ChestStyle, FacePaint, HairStyle, HeadStyle, LegStyle, ScarStyle,
};
