//! Export command: the whole catalog as PNG files

use std::path::{Path, PathBuf};

use rayon::prelude::*;
use runeforge_core::catalog::ITEMS;
use runeforge_core::{ImageFrame, MonsterId, RenderConfig, SkillId};
use runeforge_pipeline::SkillAnimation;
use runeforge_raster::{render_character, render_item, render_monster, FrameExt};
use tracing::{debug, info};

use super::{CmdResult, ProfileArgs};

/// One sprite to write; animated sprites become a directory of numbered frames
struct Job {
    path: PathBuf,
    animated: bool,
    render: Box<dyn Fn() -> Vec<ImageFrame> + Send + Sync>,
}

pub fn run(settings: &RenderConfig, dir: &Path, keyframes: usize, profile: &ProfileArgs) -> CmdResult {
    let profile = profile.resolve()?;
    let jobs = plan(settings, dir, keyframes.max(1), &profile);
    info!(dir = %dir.display(), sprites = jobs.len(), "Exporting catalog");

    let written = jobs
        .par_iter()
        .map(write_job)
        .collect::<runeforge_core::Result<Vec<usize>>>()?
        .into_iter()
        .sum::<usize>();

    info!(files = written, "Export complete");
    Ok(())
}

fn plan(
    settings: &RenderConfig,
    dir: &Path,
    keyframes: usize,
    profile: &runeforge_core::CharacterProfile,
) -> Vec<Job> {
    let mut jobs = Vec::new();

    let hero = profile.clone();
    let scale = settings.character_scale;
    jobs.push(Job {
        path: dir.join("character.png"),
        animated: false,
        render: Box::new(move || vec![render_character(&hero.config, &hero.equipped, scale)]),
    });

    for info in ITEMS {
        let (slot, id, scale) = (info.slot(), info.id(), settings.item_scale);
        jobs.push(Job {
            path: dir.join("items").join(slot.id()).join(format!("{id}.png")),
            animated: false,
            render: Box::new(move || vec![render_item(slot, id, scale)]),
        });
    }

    for monster in MonsterId::ALL {
        let (id, scale) = (monster.id(), settings.monster_scale);
        jobs.push(Job {
            path: dir.join("monsters").join(format!("{id}.png")),
            animated: false,
            render: Box::new(move || vec![render_monster(id, scale)]),
        });
    }

    for skill in SkillId::ALL {
        let hero = profile.clone();
        let (id, scale) = (skill.id(), settings.vfx_scale);
        jobs.push(Job {
            path: dir.join("skills").join(id),
            animated: true,
            render: Box::new(move || {
                SkillAnimation::new(id, hero.config.clone(), hero.equipped.clone(), scale)
                    .keyframes(keyframes)
            }),
        });
    }

    jobs
}

fn write_job(job: &Job) -> runeforge_core::Result<usize> {
    let frames = (job.render)();
    for (i, frame) in frames.iter().enumerate() {
        if job.animated {
            frame.save_png(job.path.join(format!("{i:02}.png")))?;
        } else {
            frame.save_png(&job.path)?;
        }
    }
    debug!(path = %job.path.display(), frames = frames.len(), "Exported");
    Ok(frames.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use runeforge_core::Slot;

    #[test]
    fn test_export_writes_catalog() {
        let dir = tempfile::tempdir().unwrap();
        let settings = RenderConfig::default()
            .with_character_scale(1)
            .with_vfx_scale(1);

        run(&settings, dir.path(), 2, &ProfileArgs::default()).unwrap();

        assert!(dir.path().join("character.png").exists());
        assert!(dir.path().join("items/weapon/bearded-axe.png").exists());
        assert!(dir.path().join("monsters/frost-wisp.png").exists());
        assert!(dir.path().join("skills/wolf-pack/00.png").exists());
        assert!(dir.path().join("skills/wolf-pack/01.png").exists());
        assert!(!dir.path().join("skills/wolf-pack/02.png").exists());

        let helmets = std::fs::read_dir(dir.path().join("items").join(Slot::Helmet.id()))
            .unwrap()
            .count();
        assert_eq!(helmets, ITEMS.iter().filter(|i| i.slot() == Slot::Helmet).count());
    }
}
