//! Render configuration
//!
//! Output scales per render target, plus the animation loop settings used by
//! the driver. Every grid is square; a surface is always `grid × scale`
//! pixels per side.

use crate::error::{Result, SpriteError};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// Logical grid for characters and monsters
pub const CHARACTER_GRID: u32 = 48;
/// Logical grid for standalone item icons
pub const ITEM_GRID: u32 = 24;
/// Logical grid for skill effect frames
pub const VFX_GRID: u32 = 64;
/// Offset of the character inside the skill effect grid
pub const VFX_PAD: f64 = 8.0;
/// Largest pixel scale a surface accepts
pub const MAX_SCALE: u32 = 32;

/// Integer scale that fits `grid` into `size` pixels, at least 1
pub fn scale_for_size(size: u32, grid: u32) -> u32 {
    (size / grid.max(1)).max(1)
}

/// Scales and timing for every render target
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RenderConfig {
    /// Character preview scale
    pub character_scale: u32,
    /// Item icon scale
    pub item_scale: u32,
    /// Monster scale
    pub monster_scale: u32,
    /// Skill effect scale
    pub vfx_scale: u32,
    /// Length of one animation loop in seconds
    pub loop_seconds: f64,
    /// Animation frame rate
    pub fps: u32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            character_scale: 5,
            item_scale: 3,
            monster_scale: 3,
            vfx_scale: 2,
            loop_seconds: 2.0,
            fps: 30,
        }
    }
}

impl RenderConfig {
    pub fn with_character_scale(mut self, scale: u32) -> Self {
        self.character_scale = scale;
        self
    }

    pub fn with_vfx_scale(mut self, scale: u32) -> Self {
        self.vfx_scale = scale;
        self
    }

    pub fn with_fps(mut self, fps: u32) -> Self {
        self.fps = fps;
        self
    }

    pub fn with_loop_seconds(mut self, seconds: f64) -> Self {
        self.loop_seconds = seconds;
        self
    }

    /// Check value ranges
    pub fn validate(&self) -> Result<()> {
        let scales = [
            ("characterScale", self.character_scale),
            ("itemScale", self.item_scale),
            ("monsterScale", self.monster_scale),
            ("vfxScale", self.vfx_scale),
        ];
        for (name, scale) in scales {
            if scale == 0 {
                return Err(SpriteError::Config(format!("{name} must be at least 1")));
            }
            if scale > MAX_SCALE {
                return Err(SpriteError::Config(format!("{name} must be at most {MAX_SCALE}")));
            }
        }
        if !(self.loop_seconds.is_finite() && self.loop_seconds > 0.0) {
            return Err(SpriteError::Config(format!(
                "loopSeconds must be positive, got {}",
                self.loop_seconds
            )));
        }
        if self.fps == 0 {
            return Err(SpriteError::Config("fps must be at least 1".into()));
        }
        Ok(())
    }

    /// Load and validate a JSON config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path.as_ref())?;
        let config: Self = serde_json::from_str(&text)?;
        config.validate()?;
        debug!(path = %path.as_ref().display(), fps = config.fps, "Loaded render config");
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale_for_size() {
        assert_eq!(scale_for_size(256, CHARACTER_GRID), 5);
        assert_eq!(scale_for_size(72, ITEM_GRID), 3);
        assert_eq!(scale_for_size(160, CHARACTER_GRID), 3);
        assert_eq!(scale_for_size(10, CHARACTER_GRID), 1);
    }

    #[test]
    fn test_defaults_validate() {
        let config = RenderConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.fps, 30);
        assert_eq!(config.loop_seconds, 2.0);
    }

    #[test]
    fn test_rejects_zero_scale() {
        let config = RenderConfig::default().with_vfx_scale(0);
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("vfxScale"));
    }

    #[test]
    fn test_rejects_oversized_scale() {
        assert!(RenderConfig::default().with_character_scale(MAX_SCALE).validate().is_ok());
        let err = RenderConfig::default().with_character_scale(1366).validate().unwrap_err();
        assert!(err.to_string().contains("characterScale"));
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: RenderConfig = serde_json::from_str(r#"{"fps": 12}"#).unwrap();
        assert_eq!(config.fps, 12);
        assert_eq!(config.character_scale, 5);
    }
}
