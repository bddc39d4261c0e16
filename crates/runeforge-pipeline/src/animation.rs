//! Skill animation surface
//!
//! Owns one effect canvas and redraws it for each loop time a scheduler
//! delivers.

use runeforge_core::{CharacterConfig, EquippedItems, ImageFrame, SkillId, VFX_GRID};
use runeforge_raster::{draw_skill_frame, Canvas};
use tracing::debug;

/// A skill preview: the character and one skill on its own canvas
#[derive(Debug, Clone)]
pub struct SkillAnimation {
    skill_id: String,
    config: CharacterConfig,
    equipped: EquippedItems,
    canvas: Canvas,
}

impl SkillAnimation {
    pub fn new(
        skill_id: impl Into<String>,
        config: CharacterConfig,
        equipped: EquippedItems,
        scale: u32,
    ) -> Self {
        let skill_id = skill_id.into();
        if SkillId::from_id(&skill_id).is_none() {
            debug!(skill_id, "Animating unknown skill, frames stay blank");
        }
        Self {
            skill_id,
            config,
            equipped,
            canvas: Canvas::new(VFX_GRID, scale),
        }
    }

    pub fn skill_id(&self) -> &str {
        &self.skill_id
    }

    /// Clear and redraw the surface at loop time `t`
    pub fn draw(&mut self, t: f64) -> &ImageFrame {
        draw_skill_frame(&mut self.canvas, &self.skill_id, t, &self.config, &self.equipped);
        self.canvas.frame()
    }

    /// Last drawn frame
    pub fn frame(&self) -> &ImageFrame {
        self.canvas.frame()
    }

    /// Evenly spaced keyframes over one loop
    pub fn keyframes(&mut self, count: usize) -> Vec<ImageFrame> {
        (0..count)
            .map(|i| self.draw(i as f64 / count as f64).clone())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduler::{FrameScheduler, ManualScheduler};
    use std::sync::{Arc, Mutex};
    use std::time::{Duration, Instant};

    #[test]
    fn test_draw_matches_direct_render() {
        let config = CharacterConfig::default();
        let equipped = EquippedItems::new();
        let mut animation = SkillAnimation::new("runic-burst", config.clone(), equipped.clone(), 1);

        let frame = animation.draw(0.4).clone();
        let direct = runeforge_raster::render_skill_frame("runic-burst", 0.4, &config, &equipped, 1);
        assert_eq!(frame, direct);
    }

    #[test]
    fn test_keyframes_animate() {
        let mut animation = SkillAnimation::new(
            "thunder-nova",
            CharacterConfig::default(),
            EquippedItems::new(),
            1,
        );
        let frames = animation.keyframes(4);
        assert_eq!(frames.len(), 4);
        assert!(frames.windows(2).any(|w| w[0] != w[1]));
        assert_eq!(frames[0].width, VFX_GRID);
    }

    #[test]
    fn test_unknown_skill_stays_blank() {
        let mut animation =
            SkillAnimation::new("fireball", CharacterConfig::default(), EquippedItems::new(), 1);
        assert!(animation.draw(0.5).is_blank());
    }

    #[test]
    fn test_driven_by_scheduler() {
        let animation = Arc::new(Mutex::new(SkillAnimation::new(
            "wolf-pack",
            CharacterConfig::scout(),
            EquippedItems::new(),
            1,
        )));
        let digests = Arc::new(Mutex::new(Vec::new()));

        let surface = Arc::clone(&animation);
        let sink = Arc::clone(&digests);
        let mut scheduler = ManualScheduler::default();
        scheduler
            .start(Box::new(move |t| {
                let digest = surface.lock().unwrap().draw(t).digest();
                sink.lock().unwrap().push(digest);
            }))
            .unwrap();

        let base = Instant::now();
        for ms in [0, 500, 1000, 2000] {
            scheduler.tick(base + Duration::from_millis(ms));
        }

        let digests = digests.lock().unwrap();
        assert_eq!(digests.len(), 4);
        // a full loop later the frame repeats
        assert_eq!(digests[0], digests[3]);
        assert_ne!(digests[0], digests[1]);
    }
}
