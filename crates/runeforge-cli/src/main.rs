//! Runeforge CLI - procedural Norse pixel-art sprites
//!
//! Renders characters, item icons, monsters and skill effects to PNG,
//! JSON or the terminal, and plays skill animations.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use runeforge_core::MAX_SCALE;
use tracing::Level;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

mod commands;

use commands::{OutputArgs, ProfileArgs};

/// Runeforge - procedural Norse pixel-art sprites
///
/// Every sprite is drawn from code: characters with swappable equipment,
/// monsters, inventory icons and animated skill effects.
#[derive(Parser)]
#[command(name = "runeforge")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Render settings file (JSON)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a single sprite
    Render {
        #[command(subcommand)]
        target: RenderTarget,
    },

    /// Play a skill animation in the terminal, or write its frames
    Animate {
        /// Skill id
        skill: String,

        /// Number of frames to play or write
        #[arg(short, long)]
        frames: Option<u32>,

        /// Frames per second
        #[arg(long)]
        fps: Option<u32>,

        /// Write numbered PNG frames here instead of playing
        #[arg(long)]
        out_dir: Option<PathBuf>,

        /// Pixel scale
        #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..=MAX_SCALE as i64))]
        scale: Option<u32>,

        #[command(flatten)]
        profile: ProfileArgs,
    },

    /// List catalog entries
    List {
        #[arg(value_enum)]
        what: ListKind,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Render every item icon, monster and skill keyframe to a directory
    Export {
        /// Output directory
        dir: PathBuf,

        /// Keyframes per skill
        #[arg(long, default_value = "4")]
        keyframes: usize,

        #[command(flatten)]
        profile: ProfileArgs,
    },
}

#[derive(Subcommand)]
enum RenderTarget {
    /// Character with equipment
    Character {
        #[command(flatten)]
        profile: ProfileArgs,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Inventory icon
    Item {
        /// Slot: helmet, chest, gloves, pants, boots or weapon
        slot: String,

        /// Item id
        id: String,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Monster
    Monster {
        /// Monster id
        id: String,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// One frame of a skill effect
    Skill {
        /// Skill id
        id: String,

        /// Loop time in [0, 1)
        #[arg(long, default_value = "0.5")]
        t: f64,

        /// Draw the category effect instead of the skill's own
        #[arg(long)]
        category: bool,

        #[command(flatten)]
        profile: ProfileArgs,

        #[command(flatten)]
        output: OutputArgs,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// PNG image
    Png,
    /// Half-block terminal preview
    Terminal,
    /// JSON description of the render
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ListKind {
    Items,
    Monsters,
    Skills,
    Palettes,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };

    let builder = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_ansi(!cli.no_color)
        .with_writer(std::io::stderr);

    match std::env::var("RUST_LOG") {
        Ok(filter) => {
            let subscriber = builder.with_env_filter(EnvFilter::new(filter)).finish();
            tracing::subscriber::set_global_default(subscriber)?;
        }
        Err(_) => tracing::subscriber::set_global_default(builder.finish())?,
    }

    let settings = commands::load_settings(cli.config.as_deref())?;

    match cli.command {
        Commands::Render { target } => match target {
            RenderTarget::Character { profile, output } => {
                commands::render::character(&settings, &profile, &output)?;
            }
            RenderTarget::Item { slot, id, output } => {
                commands::render::item(&settings, &slot, &id, &output)?;
            }
            RenderTarget::Monster { id, output } => {
                commands::render::monster(&settings, &id, &output)?;
            }
            RenderTarget::Skill {
                id,
                t,
                category,
                profile,
                output,
            } => {
                commands::render::skill(&settings, &id, t, category, &profile, &output)?;
            }
        },

        Commands::Animate {
            skill,
            frames,
            fps,
            out_dir,
            scale,
            profile,
        } => {
            let options = commands::animate::AnimateOptions {
                frames,
                fps,
                scale,
                out_dir,
            };
            commands::animate::run(&settings, &skill, &profile, options).await?;
        }

        Commands::List { what, json } => {
            commands::list::run(what, json)?;
        }

        Commands::Export {
            dir,
            keyframes,
            profile,
        } => {
            commands::export::run(&settings, &dir, keyframes, &profile)?;
        }
    }

    Ok(())
}
