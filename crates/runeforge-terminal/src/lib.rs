//! Runeforge Terminal - sprite previews in the terminal
//!
//! Frames are shown with upper-half-block cells, two pixel rows per cell.
//! Supports true color, 256 color, 16 color and monochrome output.

pub mod color;
pub mod output;

use runeforge_core::ImageFrame;

// Re-export commonly used types
pub use color::{ColorDepth, ColorMapper, MappedColor};
pub use output::{OutputError, TerminalOutput};

/// ANSI preview of a rendered frame at the mapper's color depth
pub fn preview(frame: &ImageFrame, mapper: &ColorMapper) -> String {
    mapper.to_ansi(&frame.to_terminal())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preview_halves_rows() {
        let mut frame = ImageFrame::new_rgba8(4, 6);
        frame.set_pixel(1, 0, [255, 0, 0, 255]);
        frame.set_pixel(1, 1, [0, 0, 255, 255]);

        let text = preview(&frame, &ColorMapper::default());
        assert_eq!(text.lines().count(), 3);
        assert!(text.contains('▀'));
        assert!(text.contains("38;2;255;0;0"));
        assert!(text.contains("48;2;0;0;255"));
    }
}
