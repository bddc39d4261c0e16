//! Subcommands and the arguments they share

pub mod animate;
pub mod export;
pub mod list;
pub mod render;

use std::fs;
use std::path::{Path, PathBuf};

use clap::Args;
use runeforge_core::catalog::{swatch, EYE_COLORS, HAIR_COLORS};
use runeforge_core::{
    CharacterProfile, Color, ImageFrame, RenderConfig, SkinPalette, Slot, SpriteError, MAX_SCALE,
};
use runeforge_raster::FrameExt;
use runeforge_terminal::{preview, ColorDepth, ColorMapper};
use serde::Serialize;
use tracing::{info, warn};

use crate::OutputFormat;

pub type CmdResult<T = ()> = Result<T, Box<dyn std::error::Error>>;

/// Character appearance and equipment, layered over an optional profile
#[derive(Args, Debug, Default, Clone)]
pub struct ProfileArgs {
    /// Character profile (JSON with `config` and `equipped`)
    #[arg(long)]
    pub profile: Option<PathBuf>,

    /// Body type: warrior or scout
    #[arg(long)]
    pub body: Option<String>,

    /// Head shape
    #[arg(long)]
    pub head: Option<String>,

    /// Chest build: broad or slim
    #[arg(long)]
    pub build: Option<String>,

    /// Leg style: normal or muscular
    #[arg(long)]
    pub legs: Option<String>,

    /// Hair style
    #[arg(long)]
    pub hair: Option<String>,

    /// Hair color: a swatch name or #RRGGBB
    #[arg(long)]
    pub hair_color: Option<String>,

    /// Skin palette
    #[arg(long)]
    pub skin: Option<String>,

    /// Beard style, or "none"
    #[arg(long)]
    pub beard: Option<String>,

    /// Eye color: a swatch name or #RRGGBB
    #[arg(long)]
    pub eyes: Option<String>,

    /// Scar style, or "none"
    #[arg(long)]
    pub scar: Option<String>,

    /// Face paint, or "none"
    #[arg(long)]
    pub paint: Option<String>,

    #[arg(long)]
    pub helmet: Option<String>,

    #[arg(long)]
    pub chest: Option<String>,

    #[arg(long)]
    pub gloves: Option<String>,

    #[arg(long)]
    pub pants: Option<String>,

    #[arg(long)]
    pub boots: Option<String>,

    #[arg(long)]
    pub weapon: Option<String>,
}

impl ProfileArgs {
    /// Profile file (or the default warrior) with flags applied
    pub fn resolve(&self) -> CmdResult<CharacterProfile> {
        let mut profile = match &self.profile {
            Some(path) => CharacterProfile::load(path)?,
            None => CharacterProfile::default(),
        };
        self.apply(&mut profile)?;

        for (kind, id) in profile.config.unknown_ids() {
            warn!(kind, id, "Unknown style id, drawn with the fallback");
        }
        Ok(profile)
    }

    fn apply(&self, profile: &mut CharacterProfile) -> CmdResult {
        let config = &mut profile.config;

        let styles = [
            (&self.body, &mut config.body_type),
            (&self.head, &mut config.head_style),
            (&self.build, &mut config.chest_style),
            (&self.legs, &mut config.leg_style),
            (&self.hair, &mut config.hair_style),
        ];
        for (flag, field) in styles {
            if let Some(id) = flag {
                *field = id.clone();
            }
        }

        let details = [
            (&self.beard, &mut config.beard_style),
            (&self.scar, &mut config.scar_style),
            (&self.paint, &mut config.face_paint),
        ];
        for (flag, field) in details {
            if let Some(id) = flag {
                *field = Some(id.clone());
            }
        }

        if let Some(color) = &self.hair_color {
            config.hair_color = named_color(color, HAIR_COLORS)?;
        }
        if let Some(color) = &self.eyes {
            config.eye_color = Some(named_color(color, EYE_COLORS)?);
        }
        if let Some(id) = &self.skin {
            let palette =
                SkinPalette::find(id).ok_or_else(|| SpriteError::unknown("skin palette", id.as_str()))?;
            *config = config.clone().with_skin(palette);
        }

        let slots = [
            (Slot::Helmet, &self.helmet),
            (Slot::Chest, &self.chest),
            (Slot::Gloves, &self.gloves),
            (Slot::Pants, &self.pants),
            (Slot::Boots, &self.boots),
            (Slot::Weapon, &self.weapon),
        ];
        for (slot, flag) in slots {
            if let Some(id) = flag {
                profile.equipped.set(slot, Some(id.as_str()));
            }
        }
        Ok(())
    }
}

/// Swatch id or hex string
fn named_color(value: &str, table: &'static [runeforge_core::catalog::Swatch]) -> CmdResult<Color> {
    match swatch(table, value) {
        Some(color) => Ok(color),
        None => Ok(Color::hex(value)?),
    }
}

/// Where and how a render is written
#[derive(Args, Debug, Clone)]
pub struct OutputArgs {
    /// Output file; stdout when omitted
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Pixel scale; defaults to the target's configured scale
    #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..=MAX_SCALE as i64))]
    pub scale: Option<u32>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "png")]
    pub format: OutputFormat,

    /// Print the frame's content hash
    #[arg(long)]
    pub digest: bool,

    /// Terminal color depth: truecolor, 256, 16 or mono
    #[arg(long)]
    pub depth: Option<ColorDepth>,
}

impl OutputArgs {
    fn mapper(&self) -> ColorMapper {
        ColorMapper::new(self.depth.unwrap_or_else(ColorDepth::detect))
    }
}

/// Render settings from `--config`, or the defaults
pub fn load_settings(path: Option<&Path>) -> CmdResult<RenderConfig> {
    match path {
        Some(path) => Ok(RenderConfig::load(path)?),
        None => Ok(RenderConfig::default()),
    }
}

/// JSON summary of a render
#[derive(Serialize)]
struct RenderSummary<'a, T: Serialize> {
    kind: &'a str,
    subject: T,
    width: u32,
    height: u32,
    scale: u32,
    opaque_pixels: usize,
    digest: String,
}

/// Write a rendered frame in the requested format
pub fn emit<T: Serialize>(
    frame: &ImageFrame,
    kind: &str,
    subject: T,
    scale: u32,
    output: &OutputArgs,
) -> CmdResult {
    match output.format {
        OutputFormat::Png => match &output.output {
            Some(path) => {
                frame.save_png(path)?;
                info!(path = %path.display(), "Wrote {}x{} PNG", frame.width, frame.height);
            }
            None => {
                use std::io::Write;
                std::io::stdout().lock().write_all(&frame.to_png_bytes()?)?;
            }
        },
        OutputFormat::Terminal => {
            let text = preview(frame, &output.mapper());
            match &output.output {
                Some(path) => fs::write(path, text)?,
                None => print!("{text}"),
            }
        }
        OutputFormat::Json => {
            let summary = RenderSummary {
                kind,
                subject,
                width: frame.width,
                height: frame.height,
                scale,
                opaque_pixels: frame.opaque_count(),
                digest: frame.digest(),
            };
            let json = serde_json::to_string_pretty(&summary)?;
            match &output.output {
                Some(path) => fs::write(path, json)?,
                None => println!("{json}"),
            }
        }
    }

    if output.digest {
        eprintln!("{}", frame.digest());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use runeforge_core::{hex, BodyType, HelmetId, ItemId};

    #[test]
    fn test_flags_override_defaults() {
        let args = ProfileArgs {
            body: Some("scout".into()),
            hair_color: Some("copper".into()),
            eyes: Some("#4AF0FF".into()),
            skin: Some("olive".into()),
            beard: Some("long".into()),
            helmet: Some("bear-head".into()),
            ..Default::default()
        };
        let profile = args.resolve().unwrap();

        assert_eq!(profile.config.body(), Some(BodyType::Scout));
        assert_eq!(profile.config.hair_color, hex(0xB87333));
        assert_eq!(profile.config.eye_color, Some(hex(0x4AF0FF)));
        assert_eq!(profile.config.skin_base, hex(0xB89A6A));
        assert_eq!(profile.config.beard_style.as_deref(), Some("long"));
        assert_eq!(profile.equipped.item(Slot::Helmet), Some(ItemId::Helmet(HelmetId::BearHead)));
    }

    #[test]
    fn test_profile_file_then_flags() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("hero.json");
        let base = CharacterProfile::default();
        fs::write(&path, base.to_json().unwrap()).unwrap();

        let args = ProfileArgs {
            profile: Some(path),
            weapon: Some("longsword".into()),
            ..Default::default()
        };
        let profile = args.resolve().unwrap();
        assert_eq!(profile.config, base.config);
        assert_eq!(profile.equipped.get(Slot::Weapon), Some("longsword"));
    }

    #[test]
    fn test_bad_color_and_palette_are_errors() {
        let args = ProfileArgs {
            hair_color: Some("chartreuse".into()),
            ..Default::default()
        };
        assert!(args.resolve().is_err());

        let args = ProfileArgs {
            skin: Some("green".into()),
            ..Default::default()
        };
        assert!(args.resolve().is_err());
    }

    #[test]
    fn test_unknown_item_flag_is_kept() {
        let args = ProfileArgs {
            chest: Some("mithril".into()),
            ..Default::default()
        };
        let profile = args.resolve().unwrap();
        assert_eq!(profile.equipped.get(Slot::Chest), Some("mithril"));
        assert_eq!(profile.equipped.item(Slot::Chest), None);
    }

    #[test]
    fn test_emit_png_and_json() {
        let dir = tempfile::tempdir().unwrap();
        let mut frame = ImageFrame::new_rgba8(2, 2);
        frame.set_pixel(0, 0, [1, 2, 3, 255]);

        let png = dir.path().join("out/frame.png");
        let output = OutputArgs {
            output: Some(png.clone()),
            scale: None,
            format: OutputFormat::Png,
            digest: false,
            depth: None,
        };
        emit(&frame, "test", "pixel", 1, &output).unwrap();
        assert!(png.exists());

        let json = dir.path().join("frame.json");
        let output = OutputArgs {
            output: Some(json.clone()),
            format: OutputFormat::Json,
            ..output
        };
        emit(&frame, "test", "pixel", 1, &output).unwrap();
        let value: serde_json::Value = serde_json::from_str(&fs::read_to_string(json).unwrap()).unwrap();
        assert_eq!(value["opaque_pixels"], 1);
        assert_eq!(value["digest"], frame.digest());
    }
}
