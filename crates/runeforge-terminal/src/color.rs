//! Terminal color depths
//!
//! Sprite colors are exact RGB; terminals without truecolor get the nearest
//! palette entry.

use std::fmt;
use std::str::FromStr;

use crossterm::style::Color as TermColor;
use runeforge_core::{SpriteError, TerminalFrame};

/// How many colors the terminal can show
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ColorDepth {
    /// Two colors, light and dark
    Monochrome,
    /// The 16 ANSI colors
    Basic,
    /// The 256-color palette
    Extended,
    /// 24-bit RGB
    #[default]
    TrueColor,
}

impl ColorDepth {
    pub const ALL: &'static [ColorDepth] = &[
        ColorDepth::TrueColor,
        ColorDepth::Extended,
        ColorDepth::Basic,
        ColorDepth::Monochrome,
    ];

    pub fn id(self) -> &'static str {
        match self {
            ColorDepth::Monochrome => "mono",
            ColorDepth::Basic => "16",
            ColorDepth::Extended => "256",
            ColorDepth::TrueColor => "truecolor",
        }
    }

    /// Guess the depth from `COLORTERM` and `TERM`
    pub fn detect() -> Self {
        Self::from_env(
            std::env::var("COLORTERM").ok().as_deref(),
            std::env::var("TERM").ok().as_deref(),
        )
    }

    fn from_env(colorterm: Option<&str>, term: Option<&str>) -> Self {
        if matches!(colorterm, Some("truecolor" | "24bit")) {
            return ColorDepth::TrueColor;
        }
        match term {
            Some(t) if t.contains("truecolor") || t.contains("direct") => ColorDepth::TrueColor,
            Some(t) if t.contains("256color") => ColorDepth::Extended,
            Some("dumb") => ColorDepth::Monochrome,
            Some(_) => ColorDepth::Basic,
            None => ColorDepth::Basic,
        }
    }
}

impl fmt::Display for ColorDepth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for ColorDepth {
    type Err = SpriteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "truecolor" | "24bit" => Ok(ColorDepth::TrueColor),
            "256" => Ok(ColorDepth::Extended),
            "16" => Ok(ColorDepth::Basic),
            "mono" | "monochrome" => Ok(ColorDepth::Monochrome),
            other => Err(SpriteError::unknown("color depth", other)),
        }
    }
}

/// The 16 ANSI colors by index
const BASIC_COLORS: [[u8; 3]; 16] = [
    [0, 0, 0],
    [128, 0, 0],
    [0, 128, 0],
    [128, 128, 0],
    [0, 0, 128],
    [128, 0, 128],
    [0, 128, 128],
    [192, 192, 192],
    [128, 128, 128],
    [255, 0, 0],
    [0, 255, 0],
    [255, 255, 0],
    [0, 0, 255],
    [255, 0, 255],
    [0, 255, 255],
    [255, 255, 255],
];

/// Maps sprite RGB to what the terminal can show
#[derive(Debug, Clone, Copy, Default)]
pub struct ColorMapper {
    depth: ColorDepth,
}

impl ColorMapper {
    pub fn new(depth: ColorDepth) -> Self {
        Self { depth }
    }

    pub fn depth(&self) -> ColorDepth {
        self.depth
    }

    /// Nearest color at this depth
    pub fn map_color(&self, rgb: [u8; 3]) -> MappedColor {
        match self.depth {
            ColorDepth::Monochrome => to_monochrome(rgb),
            ColorDepth::Basic => to_basic_16(rgb),
            ColorDepth::Extended => to_256(rgb),
            ColorDepth::TrueColor => MappedColor::TrueColor(rgb),
        }
    }

    /// crossterm color for `rgb`
    pub fn term_color(&self, rgb: [u8; 3]) -> TermColor {
        match self.map_color(rgb) {
            MappedColor::Basic(idx) | MappedColor::Extended(idx) => TermColor::AnsiValue(idx),
            MappedColor::TrueColor([r, g, b]) => TermColor::Rgb { r, g, b },
        }
    }

    /// ANSI escape sequence for a foreground color
    pub fn fg_escape(&self, rgb: [u8; 3]) -> String {
        match self.map_color(rgb) {
            MappedColor::Basic(idx) if idx < 8 => format!("\x1b[{}m", 30 + idx),
            MappedColor::Basic(idx) => format!("\x1b[{}m", 82 + idx),
            MappedColor::Extended(idx) => format!("\x1b[38;5;{idx}m"),
            MappedColor::TrueColor([r, g, b]) => format!("\x1b[38;2;{r};{g};{b}m"),
        }
    }

    /// ANSI escape sequence for a background color
    pub fn bg_escape(&self, rgb: [u8; 3]) -> String {
        match self.map_color(rgb) {
            MappedColor::Basic(idx) if idx < 8 => format!("\x1b[{}m", 40 + idx),
            MappedColor::Basic(idx) => format!("\x1b[{}m", 92 + idx),
            MappedColor::Extended(idx) => format!("\x1b[48;5;{idx}m"),
            MappedColor::TrueColor([r, g, b]) => format!("\x1b[48;2;{r};{g};{b}m"),
        }
    }

    /// Whole frame as an ANSI string at this depth, one line per row
    pub fn to_ansi(&self, frame: &TerminalFrame) -> String {
        let mut output = String::new();

        for row in frame.cells.chunks(frame.width.max(1) as usize) {
            let mut last_fg = None;
            let mut last_bg = None;

            for cell in row {
                let fg = self.map_color(cell.fg);
                if last_fg != Some(fg) {
                    output.push_str(&self.fg_escape(cell.fg));
                    last_fg = Some(fg);
                }

                let bg = cell.bg.map(|bg| self.map_color(bg));
                if last_bg != Some(bg) {
                    match cell.bg {
                        Some(rgb) => output.push_str(&self.bg_escape(rgb)),
                        None => output.push_str("\x1b[49m"),
                    }
                    last_bg = Some(bg);
                }

                output.push(cell.char);
            }
            output.push_str("\x1b[0m\n");
        }

        output
    }
}

/// A color as the terminal addresses it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MappedColor {
    /// ANSI index 0-15
    Basic(u8),
    /// Palette index 0-255
    Extended(u8),
    TrueColor([u8; 3]),
}

fn to_monochrome(rgb: [u8; 3]) -> MappedColor {
    let brightness = (rgb[0] as u16 + rgb[1] as u16 + rgb[2] as u16) / 3;
    if brightness > 127 {
        MappedColor::Basic(15)
    } else {
        MappedColor::Basic(0)
    }
}

/// Nearest of the 16 ANSI colors
fn to_basic_16(rgb: [u8; 3]) -> MappedColor {
    let nearest = BASIC_COLORS
        .iter()
        .enumerate()
        .min_by_key(|(_, c)| color_distance(rgb, **c))
        .map(|(idx, _)| idx as u8)
        .unwrap_or(0);
    MappedColor::Basic(nearest)
}

/// 256-color mode: 16 basic + 216 color cube + 24 grayscale
fn to_256(rgb: [u8; 3]) -> MappedColor {
    let gray_diff = (rgb[0] as i32 - rgb[1] as i32).abs()
        + (rgb[1] as i32 - rgb[2] as i32).abs()
        + (rgb[0] as i32 - rgb[2] as i32).abs();

    if gray_diff < 30 {
        let avg = (rgb[0] as u16 + rgb[1] as u16 + rgb[2] as u16) / 3;
        let gray_idx = ((avg as f32 / 255.0 * 23.0) as u8).min(23);
        return MappedColor::Extended(232 + gray_idx);
    }

    let level = |c: u8| (c as f32 / 255.0 * 5.0).round() as u8;
    MappedColor::Extended(16 + 36 * level(rgb[0]) + 6 * level(rgb[1]) + level(rgb[2]))
}

/// Squared Euclidean distance
fn color_distance(a: [u8; 3], b: [u8; 3]) -> u32 {
    let dr = a[0] as i32 - b[0] as i32;
    let dg = a[1] as i32 - b[1] as i32;
    let db = a[2] as i32 - b[2] as i32;
    (dr * dr + dg * dg + db * db) as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use runeforge_core::TerminalCell;

    #[test]
    fn test_true_color_passthrough() {
        let mapper = ColorMapper::new(ColorDepth::TrueColor);
        assert_eq!(mapper.map_color([100, 150, 200]), MappedColor::TrueColor([100, 150, 200]));
    }

    #[test]
    fn test_monochrome() {
        let mapper = ColorMapper::new(ColorDepth::Monochrome);
        assert_eq!(mapper.map_color([200, 200, 200]), MappedColor::Basic(15));
        assert_eq!(mapper.map_color([50, 50, 50]), MappedColor::Basic(0));
    }

    #[test]
    fn test_basic_16_red() {
        let mapper = ColorMapper::new(ColorDepth::Basic);
        assert_eq!(mapper.map_color([255, 0, 0]), MappedColor::Basic(9));
        // dried blood reads as dark red
        assert_eq!(mapper.map_color([139, 16, 16]), MappedColor::Basic(1));
    }

    #[test]
    fn test_256_grayscale_and_cube() {
        let mapper = ColorMapper::new(ColorDepth::Extended);
        match mapper.map_color([128, 128, 128]) {
            MappedColor::Extended(idx) => assert!(idx >= 232),
            other => panic!("Expected extended color, got {other:?}"),
        }
        // rune cyan lands in the color cube
        match mapper.map_color([74, 240, 255]) {
            MappedColor::Extended(idx) => assert!((16..232).contains(&idx)),
            other => panic!("Expected extended color, got {other:?}"),
        }
    }

    #[test]
    fn test_escape_sequences() {
        let mapper = ColorMapper::new(ColorDepth::TrueColor);
        assert!(mapper.fg_escape([100, 150, 200]).contains("38;2;100;150;200"));
        assert!(mapper.bg_escape([1, 2, 3]).contains("48;2;1;2;3"));

        let basic = ColorMapper::new(ColorDepth::Basic);
        assert_eq!(basic.fg_escape([255, 0, 0]), "\x1b[91m");
        assert_eq!(basic.bg_escape([0, 0, 0]), "\x1b[40m");
    }

    #[test]
    fn test_term_color() {
        let mapper = ColorMapper::new(ColorDepth::Extended);
        assert!(matches!(mapper.term_color([74, 240, 255]), TermColor::AnsiValue(_)));
        let mapper = ColorMapper::default();
        assert_eq!(mapper.term_color([1, 2, 3]), TermColor::Rgb { r: 1, g: 2, b: 3 });
    }

    #[test]
    fn test_frame_to_ansi_per_depth() {
        let mut frame = TerminalFrame::new(3, 1);
        frame.set(1, 0, TerminalCell::new('▀').with_fg([255, 0, 0]).with_bg([0, 0, 255]));

        let truecolor = ColorMapper::default().to_ansi(&frame);
        assert!(truecolor.contains("38;2;255;0;0"));
        assert!(truecolor.contains('▀'));

        let mono = ColorMapper::new(ColorDepth::Monochrome).to_ansi(&frame);
        assert!(!mono.contains("38;2"));
        assert!(mono.ends_with("\x1b[0m\n"));
    }

    #[test]
    fn test_depth_ids() {
        for depth in ColorDepth::ALL {
            assert_eq!(depth.id().parse::<ColorDepth>().unwrap(), *depth);
        }
        assert!("cga".parse::<ColorDepth>().is_err());
    }

    #[test]
    fn test_detect_from_env() {
        assert_eq!(ColorDepth::from_env(Some("truecolor"), None), ColorDepth::TrueColor);
        assert_eq!(ColorDepth::from_env(None, Some("xterm-256color")), ColorDepth::Extended);
        assert_eq!(ColorDepth::from_env(None, Some("xterm")), ColorDepth::Basic);
        assert_eq!(ColorDepth::from_env(None, Some("dumb")), ColorDepth::Monochrome);
    }
}
