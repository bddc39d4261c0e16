//! Rendered frames
//!
//! [`ImageFrame`] is the straight-alpha RGBA8 pixel buffer every renderer
//! produces. [`TerminalFrame`] is a grid of colored cells used for previews;
//! it is built from an image with one upper-half-block cell per two rows.

/// RGBA8 pixel buffer, row-major
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageFrame {
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
    /// Raw pixel data, four bytes per pixel
    pub data: Vec<u8>,
}

impl ImageFrame {
    /// Create a fully transparent frame
    pub fn new_rgba8(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            data: vec![0; (width * height * 4) as usize],
        }
    }

    /// Wrap existing RGBA8 bytes; `None` if the length does not match
    pub fn from_raw(width: u32, height: u32, data: Vec<u8>) -> Option<Self> {
        if data.len() != (width * height * 4) as usize {
            return None;
        }
        Some(Self {
            width,
            height,
            data,
        })
    }

    fn index(&self, x: u32, y: u32) -> Option<usize> {
        (x < self.width && y < self.height).then(|| ((y * self.width + x) * 4) as usize)
    }

    /// Get pixel at position (RGBA)
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        let i = self.index(x, y)?;
        Some([
            self.data[i],
            self.data[i + 1],
            self.data[i + 2],
            self.data[i + 3],
        ])
    }

    /// Set pixel at position (RGBA); out-of-bounds writes are ignored
    pub fn set_pixel(&mut self, x: u32, y: u32, rgba: [u8; 4]) {
        if let Some(i) = self.index(x, y) {
            self.data[i..i + 4].copy_from_slice(&rgba);
        }
    }

    /// Fill every pixel with one color
    pub fn fill(&mut self, rgba: [u8; 4]) {
        for px in self.data.chunks_exact_mut(4) {
            px.copy_from_slice(&rgba);
        }
    }

    /// Iterate `(x, y, rgba)` over every pixel
    pub fn pixels(&self) -> impl Iterator<Item = (u32, u32, [u8; 4])> + '_ {
        let w = self.width;
        self.data.chunks_exact(4).enumerate().map(move |(i, px)| {
            let i = i as u32;
            (i % w, i / w, [px[0], px[1], px[2], px[3]])
        })
    }

    /// Number of pixels with non-zero alpha
    pub fn opaque_count(&self) -> usize {
        self.data.chunks_exact(4).filter(|px| px[3] > 0).count()
    }

    /// Whether nothing was painted
    pub fn is_blank(&self) -> bool {
        self.opaque_count() == 0
    }

    /// Number of pixels that differ from `other`; frames of a different
    /// size differ everywhere
    pub fn diff_count(&self, other: &ImageFrame) -> usize {
        if self.width != other.width || self.height != other.height {
            return (self.width * self.height).max(other.width * other.height) as usize;
        }
        self.data
            .chunks_exact(4)
            .zip(other.data.chunks_exact(4))
            .filter(|(a, b)| a != b)
            .count()
    }

    /// Content hash (blake3 over size and pixels), hex encoded
    pub fn digest(&self) -> String {
        let mut hasher = blake3::Hasher::new();
        hasher.update(&self.width.to_le_bytes());
        hasher.update(&self.height.to_le_bytes());
        hasher.update(&self.data);
        hasher.finalize().to_hex().to_string()
    }

    /// Half-block preview: one cell per column and two pixel rows.
    ///
    /// The foreground paints the upper pixel through `▀`, the background
    /// the lower one. Transparent pixels leave the cell color unset.
    pub fn to_terminal(&self) -> TerminalFrame {
        let rows = self.height.div_ceil(2);
        let mut frame = TerminalFrame::new(self.width, rows);

        let rgb = |px: Option<[u8; 4]>| {
            px.filter(|p| p[3] > 0).map(|p| {
                // Composite over black so translucent glows stay visible
                let a = p[3] as u32;
                [
                    (p[0] as u32 * a / 255) as u8,
                    (p[1] as u32 * a / 255) as u8,
                    (p[2] as u32 * a / 255) as u8,
                ]
            })
        };

        for row in 0..rows {
            for x in 0..self.width {
                let top = rgb(self.get_pixel(x, row * 2));
                let bottom = rgb(self.get_pixel(x, row * 2 + 1));
                let cell = match (top, bottom) {
                    (None, None) => TerminalCell::space(),
                    (Some(t), None) => TerminalCell::new('▀').with_fg(t),
                    (None, Some(b)) => TerminalCell::new('▄').with_fg(b),
                    (Some(t), Some(b)) => TerminalCell::new('▀').with_fg(t).with_bg(b),
                };
                frame.set(x, row, cell);
            }
        }
        frame
    }
}

/// Grid of colored character cells, row-major
#[derive(Debug, Clone, PartialEq)]
pub struct TerminalFrame {
    pub width: u32,
    pub height: u32,
    pub cells: Vec<TerminalCell>,
}

impl TerminalFrame {
    /// Frame of blank cells
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            cells: vec![TerminalCell::default(); (width * height) as usize],
        }
    }

    pub fn get(&self, x: u32, y: u32) -> Option<&TerminalCell> {
        (x < self.width && y < self.height).then(|| &self.cells[(y * self.width + x) as usize])
    }

    /// Out-of-bounds writes are ignored
    pub fn set(&mut self, x: u32, y: u32, cell: TerminalCell) {
        if x < self.width && y < self.height {
            self.cells[(y * self.width + x) as usize] = cell;
        }
    }

    /// `(x, y, cell)` in row-major order
    pub fn iter(&self) -> impl Iterator<Item = (u32, u32, &TerminalCell)> {
        let w = self.width.max(1);
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, cell)| (i as u32 % w, i as u32 / w, cell))
    }
}

/// One half-block cell: glyph, foreground and optional background
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalCell {
    pub char: char,
    pub fg: [u8; 3],
    /// `None` leaves the terminal background showing
    pub bg: Option<[u8; 3]>,
}

impl Default for TerminalCell {
    fn default() -> Self {
        Self {
            char: ' ',
            fg: [200, 200, 200],
            bg: None,
        }
    }
}

impl TerminalCell {
    pub fn new(char: char) -> Self {
        Self {
            char,
            ..Default::default()
        }
    }

    pub fn with_fg(mut self, fg: [u8; 3]) -> Self {
        self.fg = fg;
        self
    }

    pub fn with_bg(mut self, bg: [u8; 3]) -> Self {
        self.bg = Some(bg);
        self
    }

    /// Blank cell
    pub fn space() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.char == ' ' && self.bg.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pixel_access() {
        let mut frame = ImageFrame::new_rgba8(100, 100);
        frame.set_pixel(50, 50, [255, 0, 0, 255]);

        assert_eq!(frame.get_pixel(50, 50), Some([255, 0, 0, 255]));
        assert_eq!(frame.get_pixel(100, 0), None);
        assert_eq!(frame.opaque_count(), 1);
    }

    #[test]
    fn test_from_raw_checks_length() {
        assert!(ImageFrame::from_raw(2, 2, vec![0; 16]).is_some());
        assert!(ImageFrame::from_raw(2, 2, vec![0; 15]).is_none());
    }

    #[test]
    fn test_digest_tracks_content() {
        let a = ImageFrame::new_rgba8(4, 4);
        let mut b = a.clone();
        assert_eq!(a.digest(), b.digest());

        b.set_pixel(1, 1, [1, 2, 3, 255]);
        assert_ne!(a.digest(), b.digest());
        assert_eq!(a.diff_count(&b), 1);
    }

    #[test]
    fn test_half_block_conversion() {
        let mut frame = ImageFrame::new_rgba8(2, 3);
        frame.set_pixel(0, 0, [255, 0, 0, 255]);
        frame.set_pixel(0, 1, [0, 0, 255, 255]);
        frame.set_pixel(1, 2, [0, 255, 0, 255]);

        let term = frame.to_terminal();
        assert_eq!((term.width, term.height), (2, 2));

        let cell = term.get(0, 0).unwrap();
        assert_eq!(cell.char, '▀');
        assert_eq!(cell.fg, [255, 0, 0]);
        assert_eq!(cell.bg, Some([0, 0, 255]));

        assert!(term.get(1, 0).unwrap().is_empty());
        assert_eq!(term.get(1, 1).unwrap().fg, [0, 255, 0]);
    }

    #[test]
    fn test_terminal_frame_bounds() {
        let frame = TerminalFrame::new(10, 5);
        assert!(frame.get(9, 4).is_some());
        assert!(frame.get(10, 0).is_none());
        assert!(frame.get(0, 5).is_none());
    }

    #[test]
    fn test_iter_is_row_major() {
        let mut frame = TerminalFrame::new(3, 2);
        frame.set(2, 1, TerminalCell::new('▀'));
        let (x, y, cell) = frame.iter().nth(5).unwrap();
        assert_eq!((x, y, cell.char), (2, 1, '▀'));
        assert_eq!(frame.iter().filter(|(_, _, c)| c.is_empty()).count(), 5);
    }
}
