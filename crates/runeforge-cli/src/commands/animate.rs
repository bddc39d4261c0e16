//! Animate command
//!
//! Plays a skill loop in the terminal, driven by the frame scheduler, or
//! writes one loop of numbered PNG frames.

use std::path::{Path, PathBuf};

use runeforge_core::{RenderConfig, SkillId, SpriteError, TerminalFrame};
use runeforge_pipeline::{FrameScheduler, SchedulerConfig, SkillAnimation, TokioScheduler};
use runeforge_raster::FrameExt;
use runeforge_terminal::{ColorDepth, ColorMapper, TerminalOutput};
use tokio::sync::mpsc;
use tracing::{info, trace};

use super::{CmdResult, ProfileArgs};

/// Frames waiting for the terminal; later ticks are dropped while it is full
const FRAME_QUEUE: usize = 2;

/// Overrides for one animate run
#[derive(Debug, Default, Clone)]
pub struct AnimateOptions {
    /// Frames to play or write; a full loop when unset
    pub frames: Option<u32>,
    pub fps: Option<u32>,
    pub scale: Option<u32>,
    /// Write PNG frames here instead of playing
    pub out_dir: Option<PathBuf>,
}

pub async fn run(
    settings: &RenderConfig,
    skill_id: &str,
    profile: &ProfileArgs,
    options: AnimateOptions,
) -> CmdResult {
    let skill = SkillId::from_id(skill_id).ok_or_else(|| SpriteError::unknown(SkillId::KIND, skill_id))?;
    let profile = profile.resolve()?;

    let mut schedule = SchedulerConfig::from(settings);
    if let Some(fps) = options.fps {
        schedule.fps = fps.max(1);
    }
    let scale = options.scale.unwrap_or(settings.vfx_scale);
    let animation = SkillAnimation::new(skill.id(), profile.config, profile.equipped, scale);

    match &options.out_dir {
        Some(dir) => {
            let count = options.frames.unwrap_or_else(|| loop_frames(&schedule));
            write_frames(animation, dir, count as usize)
        }
        None => play(animation, schedule, options.frames).await,
    }
}

/// Queue a frame for display, dropping it when the terminal is behind
fn offer(tx: &mpsc::Sender<(f64, TerminalFrame)>, t: f64, frame: TerminalFrame) -> bool {
    match tx.try_send((t, frame)) {
        Ok(()) => true,
        Err(mpsc::error::TrySendError::Full(_)) => {
            trace!(t, "Terminal behind, frame dropped");
            false
        }
        Err(mpsc::error::TrySendError::Closed(_)) => false,
    }
}

/// Frames in one loop at the configured rate
fn loop_frames(schedule: &SchedulerConfig) -> u32 {
    (schedule.loop_duration.as_secs_f64() * schedule.fps as f64).round().max(1.0) as u32
}

fn write_frames(mut animation: SkillAnimation, dir: &Path, count: usize) -> CmdResult {
    info!(skill = animation.skill_id(), frames = count, dir = %dir.display(), "Writing frames");
    for (i, frame) in animation.keyframes(count.max(1)).iter().enumerate() {
        frame.save_png(dir.join(format!("{}-{i:03}.png", animation.skill_id())))?;
    }
    Ok(())
}

async fn play(mut animation: SkillAnimation, schedule: SchedulerConfig, limit: Option<u32>) -> CmdResult {
    let skill = animation.skill_id().to_string();
    let (tx, mut rx) = mpsc::channel::<(f64, TerminalFrame)>(FRAME_QUEUE);

    let mut output = TerminalOutput::new(ColorMapper::new(ColorDepth::detect()));
    output.ensure_fits(&animation.draw(0.0).to_terminal())?;
    output.init()?;

    info!(skill = %skill, fps = schedule.fps, "Playing animation, Ctrl-C to stop");
    let mut scheduler = TokioScheduler::new(schedule);
    scheduler.start(Box::new(move |t| {
        let frame = animation.draw(t).to_terminal();
        offer(&tx, t, frame);
    }))?;

    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);

    let mut shown = 0u32;
    let result: CmdResult = loop {
        tokio::select! {
            frame = rx.recv() => {
                let Some((t, frame)) = frame else { break Ok(()) };
                if let Err(e) = output.render(&frame) {
                    break Err(e.into());
                }
                let caption = format!("{skill}  t={t:.2}");
                if let Err(e) = output.caption(frame.height as u16 + 1, &caption) {
                    break Err(e.into());
                }

                shown += 1;
                if limit.is_some_and(|limit| shown >= limit) {
                    break Ok(());
                }
            }
            _ = &mut ctrl_c => break Ok(()),
        }
    };

    scheduler.stop();
    output.cleanup()?;
    info!(skill = %skill, frames = shown, "Animation stopped");
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_loop_frames() {
        let schedule = SchedulerConfig {
            fps: 12,
            loop_duration: Duration::from_secs(2),
        };
        assert_eq!(loop_frames(&schedule), 24);
    }

    #[tokio::test]
    async fn test_slow_terminal_drops_frames() {
        let (tx, mut rx) = mpsc::channel(FRAME_QUEUE);
        let frame = || TerminalFrame::new(2, 1);

        let queued = (0..10).filter(|i| offer(&tx, *i as f64 / 10.0, frame())).count();
        assert_eq!(queued, FRAME_QUEUE);

        let (t, _) = rx.recv().await.unwrap();
        assert_eq!(t, 0.0);
        assert!(offer(&tx, 0.9, frame()));

        drop(rx);
        assert!(!offer(&tx, 1.0, frame()));
    }

    #[tokio::test]
    async fn test_out_dir_writes_numbered_frames() {
        let dir = tempfile::tempdir().unwrap();
        let options = AnimateOptions {
            frames: Some(3),
            scale: Some(1),
            out_dir: Some(dir.path().to_path_buf()),
            ..Default::default()
        };
        run(&RenderConfig::default(), "frost-pulse", &ProfileArgs::default(), options)
            .await
            .unwrap();

        for i in 0..3 {
            assert!(dir.path().join(format!("frost-pulse-{i:03}.png")).exists());
        }
        assert!(!dir.path().join("frost-pulse-003.png").exists());
    }

    #[tokio::test]
    async fn test_unknown_skill_is_an_error() {
        let result = run(
            &RenderConfig::default(),
            "fireball",
            &ProfileArgs::default(),
            AnimateOptions::default(),
        )
        .await;
        assert!(result.is_err());
    }
}
