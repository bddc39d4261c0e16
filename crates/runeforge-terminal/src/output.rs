//! Live terminal playback
//!
//! Writes half-block frames to the terminal using crossterm. Animation
//! playback redraws only the cells that changed since the last frame.

use std::io::{self, Write};

use crossterm::{
    cursor::{Hide, MoveTo, Show},
    execute, queue,
    style::{Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen},
};
use runeforge_core::{TerminalCell, TerminalFrame};
use thiserror::Error;
use tracing::debug;

use crate::color::ColorMapper;

/// Playback failures
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),

    #[error("terminal too small: need {need_w}x{need_h}, have {have_w}x{have_h}")]
    TooSmall {
        need_w: u32,
        need_h: u32,
        have_w: u32,
        have_h: u32,
    },
}

/// Draws frames at a fixed cell origin, optionally redrawing only changed cells
pub struct TerminalOutput {
    mapper: ColorMapper,
    alternate_screen: bool,
    cursor_hidden: bool,
    /// Previous frame, kept while diffing
    last_frame: Option<TerminalFrame>,
    diff_mode: bool,
    /// Cell offset of the frame's top-left corner
    origin: (u16, u16),
}

impl TerminalOutput {
    pub fn new(mapper: ColorMapper) -> Self {
        Self {
            mapper,
            alternate_screen: false,
            cursor_hidden: false,
            last_frame: None,
            diff_mode: true,
            origin: (0, 0),
        }
    }

    pub fn mapper(&self) -> &ColorMapper {
        &self.mapper
    }

    /// Diffing off forgets the previous frame
    pub fn set_diff_mode(&mut self, enabled: bool) {
        self.diff_mode = enabled;
        if !enabled {
            self.last_frame = None;
        }
    }

    /// Draw frames starting at this cell
    pub fn set_origin(&mut self, column: u16, row: u16) {
        self.origin = (column, row);
        self.last_frame = None;
    }

    /// Enter the alternate screen and hide the cursor
    pub fn init(&mut self) -> Result<(), OutputError> {
        let mut stdout = io::stdout();

        execute!(stdout, EnterAlternateScreen)?;
        self.alternate_screen = true;

        execute!(stdout, Hide)?;
        self.cursor_hidden = true;

        execute!(stdout, Clear(ClearType::All))?;
        self.last_frame = None;

        debug!(depth = %self.mapper.depth(), "Terminal initialized");
        Ok(())
    }

    /// Restore the terminal
    pub fn cleanup(&mut self) -> Result<(), OutputError> {
        let mut stdout = io::stdout();

        if self.cursor_hidden {
            execute!(stdout, Show)?;
            self.cursor_hidden = false;
        }

        if self.alternate_screen {
            execute!(stdout, LeaveAlternateScreen)?;
            self.alternate_screen = false;
        }

        Ok(())
    }

    /// Fail early when the frame cannot fit in the terminal
    pub fn ensure_fits(&self, frame: &TerminalFrame) -> Result<(), OutputError> {
        let (have_w, have_h) = Self::size()?;
        let need_w = frame.width + self.origin.0 as u32;
        let need_h = frame.height + self.origin.1 as u32;
        if need_w > have_w || need_h > have_h {
            return Err(OutputError::TooSmall {
                need_w,
                need_h,
                have_w,
                have_h,
            });
        }
        Ok(())
    }

    /// Render a frame to stdout
    pub fn render(&mut self, frame: &TerminalFrame) -> Result<(), OutputError> {
        let mut stdout = io::stdout().lock();
        self.render_to(&mut stdout, frame)
    }

    /// Render a frame to any writer
    pub fn render_to<W: Write>(&mut self, out: &mut W, frame: &TerminalFrame) -> Result<(), OutputError> {
        match self.last_frame.take() {
            Some(last) if self.diff_mode && last.width == frame.width && last.height == frame.height => {
                self.render_diff(out, frame, &last)?
            }
            _ => self.render_full(out, frame)?,
        }
        out.flush()?;

        if self.diff_mode {
            self.last_frame = Some(frame.clone());
        }
        Ok(())
    }

    /// Write a line of text below the frame
    pub fn caption(&mut self, row: u16, text: &str) -> Result<(), OutputError> {
        let mut stdout = io::stdout();
        queue!(
            stdout,
            MoveTo(self.origin.0, self.origin.1 + row),
            Clear(ClearType::UntilNewLine),
            Print(text)
        )?;
        stdout.flush()?;
        Ok(())
    }

    fn render_full<W: Write>(&self, out: &mut W, frame: &TerminalFrame) -> Result<(), OutputError> {
        for y in 0..frame.height {
            queue!(out, MoveTo(self.origin.0, self.origin.1 + y as u16), ResetColor)?;
            for x in 0..frame.width {
                if let Some(cell) = frame.get(x, y) {
                    self.put_cell(out, cell)?;
                }
            }
        }
        queue!(out, ResetColor)?;
        Ok(())
    }

    fn render_diff<W: Write>(&self, out: &mut W, frame: &TerminalFrame, last: &TerminalFrame) -> Result<(), OutputError> {
        let mut changed = 0usize;
        for (x, y, cell) in frame.iter() {
            if last.get(x, y) != Some(cell) {
                queue!(out, MoveTo(self.origin.0 + x as u16, self.origin.1 + y as u16))?;
                self.put_cell(out, cell)?;
                changed += 1;
            }
        }
        queue!(out, ResetColor)?;
        debug!(changed, "Diff frame");
        Ok(())
    }

    fn put_cell<W: Write>(&self, out: &mut W, cell: &TerminalCell) -> Result<(), OutputError> {
        queue!(out, ResetColor, SetForegroundColor(self.mapper.term_color(cell.fg)))?;
        if let Some(bg) = cell.bg {
            queue!(out, SetBackgroundColor(self.mapper.term_color(bg)))?;
        }
        queue!(out, Print(cell.char))?;
        Ok(())
    }

    /// Terminal size as (columns, rows)
    pub fn size() -> Result<(u32, u32), OutputError> {
        let (cols, rows) = terminal::size()?;
        Ok((cols as u32, rows as u32))
    }
}

impl Default for TerminalOutput {
    fn default() -> Self {
        Self::new(ColorMapper::default())
    }
}

impl Drop for TerminalOutput {
    fn drop(&mut self) {
        let _ = self.cleanup();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::ColorDepth;

    fn frame_with(cell: TerminalCell) -> TerminalFrame {
        let mut frame = TerminalFrame::new(4, 2);
        frame.set(2, 1, cell);
        frame
    }

    #[test]
    fn test_full_then_diff() {
        let mut output = TerminalOutput::new(ColorMapper::new(ColorDepth::TrueColor));
        let first = frame_with(TerminalCell::new('▀').with_fg([255, 0, 0]));
        let second = frame_with(TerminalCell::new('▀').with_fg([0, 255, 0]));

        let mut full = Vec::new();
        output.render_to(&mut full, &first).unwrap();

        let mut diff = Vec::new();
        output.render_to(&mut diff, &second).unwrap();

        let full = String::from_utf8(full).unwrap();
        let diff = String::from_utf8(diff).unwrap();
        assert_eq!(full.matches('▀').count(), 1);
        assert_eq!(full.matches(' ').count(), 7);
        assert_eq!(diff.matches('▀').count(), 1);
        assert_eq!(diff.matches(' ').count(), 0);
        assert!(diff.contains("38;2;0;255;0"));
    }

    #[test]
    fn test_unchanged_frame_writes_no_cells() {
        let mut output = TerminalOutput::default();
        let frame = frame_with(TerminalCell::new('▄').with_fg([9, 9, 9]));

        output.render_to(&mut Vec::new(), &frame).unwrap();
        let mut again = Vec::new();
        output.render_to(&mut again, &frame).unwrap();

        let again = String::from_utf8(again).unwrap();
        assert!(!again.contains('▄'));
    }

    #[test]
    fn test_size_change_forces_full_redraw() {
        let mut output = TerminalOutput::default();
        output.render_to(&mut Vec::new(), &TerminalFrame::new(2, 2)).unwrap();

        let mut out = Vec::new();
        output.render_to(&mut out, &TerminalFrame::new(3, 1)).unwrap();
        assert_eq!(String::from_utf8(out).unwrap().matches(' ').count(), 3);
    }

    #[test]
    fn test_diff_mode() {
        let mut output = TerminalOutput::default();
        assert!(output.diff_mode);

        output.render_to(&mut Vec::new(), &TerminalFrame::new(1, 1)).unwrap();
        output.set_diff_mode(false);
        assert!(!output.diff_mode);
        assert!(output.last_frame.is_none());
    }

    #[test]
    fn test_extended_depth_uses_ansi_values() {
        let mut output = TerminalOutput::new(ColorMapper::new(ColorDepth::Extended));
        let mut out = Vec::new();
        output
            .render_to(&mut out, &frame_with(TerminalCell::new('▀').with_fg([74, 240, 255])))
            .unwrap();
        let out = String::from_utf8(out).unwrap();
        assert!(out.contains("38;5;"));
        assert!(!out.contains("38;2;"));
    }
}
