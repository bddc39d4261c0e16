//! PNG export for rendered frames

use std::path::Path;

use image::{ImageBuffer, Rgba};
use runeforge_core::{ImageFrame, Result, SpriteError};
use tracing::debug;

/// Writing frames to disk
pub trait FrameExt {
    /// Encode as PNG at `path`, creating parent directories
    fn save_png(&self, path: impl AsRef<Path>) -> Result<()>;

    /// Encode as PNG into memory
    fn to_png_bytes(&self) -> Result<Vec<u8>>;
}

impl FrameExt for ImageFrame {
    fn save_png(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        image::save_buffer_with_format(
            path,
            &self.data,
            self.width,
            self.height,
            image::ColorType::Rgba8,
            image::ImageFormat::Png,
        )
        .map_err(|e| SpriteError::Image(e.to_string()))?;

        debug!(path = %path.display(), width = self.width, height = self.height, "Saved frame");
        Ok(())
    }

    fn to_png_bytes(&self) -> Result<Vec<u8>> {
        let buffer = ImageBuffer::<Rgba<u8>, _>::from_raw(self.width, self.height, self.data.clone())
            .ok_or_else(|| SpriteError::Image("frame buffer size mismatch".into()))?;

        let mut bytes = std::io::Cursor::new(Vec::new());
        buffer
            .write_to(&mut bytes, image::ImageFormat::Png)
            .map_err(|e| SpriteError::Image(e.to_string()))?;
        Ok(bytes.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ImageFrame {
        let mut frame = ImageFrame::new_rgba8(4, 3);
        frame.set_pixel(1, 1, [200, 40, 10, 255]);
        frame
    }

    #[test]
    fn test_png_signature() {
        let bytes = sample().to_png_bytes().unwrap();
        assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
    }

    #[test]
    fn test_save_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("frames/warrior/000.png");

        sample().save_png(&path).unwrap();

        let decoded = image::open(&path).unwrap().to_rgba8();
        assert_eq!(decoded.dimensions(), (4, 3));
        assert_eq!(decoded.get_pixel(1, 1).0, [200, 40, 10, 255]);
        assert_eq!(decoded.get_pixel(0, 0).0[3], 0);
    }

    #[test]
    fn test_mismatched_buffer_is_error() {
        let frame = ImageFrame {
            width: 4,
            height: 4,
            data: vec![0; 3],
        };
        assert!(matches!(frame.to_png_bytes(), Err(SpriteError::Image(_))));
    }
}
