//! Terminal Animation Example
//!
//! Plays a few skill loops straight to stdout with a bordered half-block
//! preview. Works without an interactive terminal.
//!
//! Run with: cargo run -p runeforge-cli --example terminal_animation

use std::time::{Duration, Instant};

use runeforge_core::{CharacterConfig, EquippedItems, ItemId, WeaponId};
use runeforge_pipeline::{FrameScheduler, ManualScheduler, SkillAnimation};
use runeforge_terminal::{ColorDepth, ColorMapper};

const SKILLS: &[&str] = &["runic-burst", "lightning-arc", "wolf-pack", "ragnarok-form"];

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let frames_per_skill = 20;
    let frame_delay = Duration::from_millis(50);
    let mapper = ColorMapper::new(ColorDepth::detect());

    let equipped = EquippedItems::new().with(ItemId::Weapon(WeaponId::BeardedAxe));

    println!("\x1b[1;36m=== Runeforge Skill Animation Demo ===\x1b[0m");
    println!("Playing {} skills at {} depth\n", SKILLS.len(), mapper.depth());

    let start = Instant::now();
    let mut total = 0;

    for skill in SKILLS {
        let mut animation = SkillAnimation::new(*skill, CharacterConfig::default(), equipped.clone(), 1);
        let mut scheduler = ManualScheduler::new(Duration::from_secs(2));
        scheduler.start(Box::new(|_| {}))?;

        let mut height = 0;
        for frame_num in 0..frames_per_skill {
            let Some(t) = scheduler.tick(Instant::now()) else {
                break;
            };
            let frame = animation.draw(t).to_terminal();

            // Move back over the previous frame
            if frame_num > 0 {
                print!("\x1b[{}A", height + 3);
            }
            height = frame.height;

            println!("\x1b[90m{skill} t={t:.2}\x1b[0m\x1b[K");
            println!("\x1b[90m┌{}┐\x1b[0m", "─".repeat(frame.width as usize));
            for line in mapper.to_ansi(&frame).lines() {
                println!("\x1b[90m│\x1b[0m{line}\x1b[90m│\x1b[0m");
            }
            println!("\x1b[90m└{}┘\x1b[0m", "─".repeat(frame.width as usize));

            total += 1;
            tokio::time::sleep(frame_delay).await;
        }

        scheduler.stop();
        println!();
    }

    let elapsed = start.elapsed();
    println!("\x1b[1mAnimation complete!\x1b[0m");
    println!("  Frames: {total}");
    println!("  Time: {:.2}s", elapsed.as_secs_f64());
    println!("  Average FPS: {:.1}", total as f64 / elapsed.as_secs_f64());

    Ok(())
}
