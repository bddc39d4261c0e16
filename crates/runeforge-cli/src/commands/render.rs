//! Render command

use runeforge_core::{ItemId, MonsterId, RenderConfig, SkillId, Slot, SpriteError, VFX_GRID};
use runeforge_raster::{
    draw_skill_frame, draw_skill_vfx, render_character, render_item, render_monster, Canvas,
    SkillFrame,
};
use tracing::info;

use super::{emit, CmdResult, OutputArgs, ProfileArgs};

pub fn character(settings: &RenderConfig, profile: &ProfileArgs, output: &OutputArgs) -> CmdResult {
    let profile = profile.resolve()?;
    let scale = output.scale.unwrap_or(settings.character_scale);

    info!(
        body = %profile.config.body_type,
        items = profile.equipped.count(),
        scale,
        "Rendering character"
    );
    let frame = render_character(&profile.config, &profile.equipped, scale);
    emit(&frame, "character", &profile, scale, output)
}

pub fn item(settings: &RenderConfig, slot: &str, id: &str, output: &OutputArgs) -> CmdResult {
    let slot: Slot = slot.parse()?;
    if ItemId::resolve(slot, id).is_none() {
        return Err(SpriteError::unknown("item", id).into());
    }
    let scale = output.scale.unwrap_or(settings.item_scale);

    info!(%slot, id, scale, "Rendering item icon");
    let frame = render_item(slot, id, scale);
    emit(&frame, "item", id, scale, output)
}

pub fn monster(settings: &RenderConfig, id: &str, output: &OutputArgs) -> CmdResult {
    if MonsterId::from_id(id).is_none() {
        return Err(SpriteError::unknown(MonsterId::KIND, id).into());
    }
    let scale = output.scale.unwrap_or(settings.monster_scale);

    info!(id, scale, "Rendering monster");
    let frame = render_monster(id, scale);
    emit(&frame, "monster", id, scale, output)
}

pub fn skill(
    settings: &RenderConfig,
    id: &str,
    t: f64,
    category: bool,
    profile: &ProfileArgs,
    output: &OutputArgs,
) -> CmdResult {
    let skill = SkillId::from_id(id).ok_or_else(|| SpriteError::unknown(SkillId::KIND, id))?;
    let profile = profile.resolve()?;
    let scale = output.scale.unwrap_or(settings.vfx_scale);

    info!(id, t, category, scale, "Rendering skill frame");
    let mut canvas = Canvas::new(VFX_GRID, scale);
    if category {
        draw_skill_vfx(&mut canvas, SkillFrame::of(skill, t), &profile.config, &profile.equipped);
    } else {
        draw_skill_frame(&mut canvas, id, t, &profile.config, &profile.equipped);
    }
    emit(canvas.frame(), "skill", id, scale, output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::OutputFormat;
    use runeforge_core::ImageFrame;
    use std::path::PathBuf;

    fn png_to(path: PathBuf) -> OutputArgs {
        OutputArgs {
            output: Some(path),
            scale: Some(1),
            format: OutputFormat::Png,
            digest: false,
            depth: None,
        }
    }

    fn read(path: &std::path::Path) -> ImageFrame {
        let image = image::open(path).unwrap().to_rgba8();
        ImageFrame::from_raw(image.width(), image.height(), image.into_raw()).unwrap()
    }

    #[test]
    fn test_render_targets_write_pngs() {
        let dir = tempfile::tempdir().unwrap();
        let settings = RenderConfig::default();
        let profile = ProfileArgs::default();

        let path = dir.path().join("hero.png");
        character(&settings, &profile, &png_to(path.clone())).unwrap();
        assert_eq!(read(&path).width, 48);

        let path = dir.path().join("axe.png");
        item(&settings, "weapon", "bearded-axe", &png_to(path.clone())).unwrap();
        assert!(!read(&path).is_blank());

        let path = dir.path().join("draugr-warrior.png");
        monster(&settings, "draugr-warrior", &png_to(path.clone())).unwrap();
        assert!(!read(&path).is_blank());

        let path = dir.path().join("beam.png");
        skill(&settings, "ice-beam", 0.5, false, &profile, &png_to(path.clone())).unwrap();
        assert_eq!(read(&path).width, VFX_GRID);
    }

    #[test]
    fn test_category_flag_changes_skill_render() {
        let dir = tempfile::tempdir().unwrap();
        let settings = RenderConfig::default();
        let profile = ProfileArgs::default();

        let own = dir.path().join("own.png");
        let shared = dir.path().join("shared.png");
        skill(&settings, "soul-drain", 0.5, false, &profile, &png_to(own.clone())).unwrap();
        skill(&settings, "soul-drain", 0.5, true, &profile, &png_to(shared.clone())).unwrap();
        assert_ne!(read(&own).digest(), read(&shared).digest());
    }

    #[test]
    fn test_unknown_ids_are_errors() {
        let dir = tempfile::tempdir().unwrap();
        let settings = RenderConfig::default();
        let out = png_to(dir.path().join("x.png"));

        assert!(item(&settings, "cloak", "wool", &out).is_err());
        assert!(item(&settings, "helmet", "crown", &out).is_err());
        assert!(monster(&settings, "troll", &out).is_err());
        assert!(skill(&settings, "fireball", 0.0, false, &ProfileArgs::default(), &out).is_err());
    }
}
