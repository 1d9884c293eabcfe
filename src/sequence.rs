use std::path::PathBuf;

use crate::{
    core::FrameIndex,
    error::{SpriteGridError, SpriteGridResult},
    render::{FrameRenderer, FrameRgba},
};

/// [`FrameRenderer`] over pre-rendered, numbered frame files.
///
/// Frame `k` (1-indexed) maps to `<dir>/frame_000k.png`, zero-padded to four
/// digits. Decoded top-down scanlines are reordered into the bottom-up sample
/// layout of [`FrameRgba`].
#[derive(Clone, Debug)]
pub struct ImageSequenceRenderer {
    dir: PathBuf,
}

impl ImageSequenceRenderer {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn frame_path(&self, frame: FrameIndex) -> PathBuf {
        self.dir.join(format!("frame_{:04}.png", frame.0))
    }
}

impl FrameRenderer for ImageSequenceRenderer {
    fn render_frame(&mut self, frame: FrameIndex) -> SpriteGridResult<FrameRgba> {
        let path = self.frame_path(frame);
        let bytes = std::fs::read(&path).map_err(|e| {
            SpriteGridError::render(format!("read frame '{}': {e}", path.display()))
        })?;
        decode_frame(&bytes).map_err(|e| {
            SpriteGridError::render(format!("frame '{}': {e}", path.display()))
        })
    }
}

/// Decode an image into bottom-up f32 RGBA samples.
pub fn decode_frame(bytes: &[u8]) -> SpriteGridResult<FrameRgba> {
    let dyn_img = image::load_from_memory(bytes)
        .map_err(|e| SpriteGridError::render(format!("decode image: {e}")))?;
    let rgba = dyn_img.to_rgba8();
    let (width, height) = rgba.dimensions();
    let raw = rgba.into_raw();

    let w = width as usize;
    let mut data = Vec::with_capacity(raw.len());
    for row in (0..height as usize).rev() {
        let start = row * w * 4;
        data.extend(raw[start..start + w * 4].iter().map(|&b| f32::from(b) / 255.0));
    }

    Ok(FrameRgba {
        width,
        height,
        data,
    })
}

#[cfg(test)]
mod tests {
    use std::{io::Cursor, path::Path};

    use super::*;

    fn png_bytes(img: image::RgbaImage) -> Vec<u8> {
        let mut buf = Vec::new();
        image::DynamicImage::ImageRgba8(img)
            .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
            .unwrap();
        buf
    }

    #[test]
    fn frame_paths_are_zero_padded() {
        let renderer = ImageSequenceRenderer::new("frames");
        assert_eq!(
            renderer.frame_path(FrameIndex(7)),
            Path::new("frames").join("frame_0007.png")
        );
        assert_eq!(
            renderer.frame_path(FrameIndex(12345)),
            Path::new("frames").join("frame_12345.png")
        );
    }

    #[test]
    fn decode_flips_scanlines_to_bottom_up() {
        // 1x2 image: top pixel red, bottom pixel blue.
        let mut img = image::RgbaImage::new(1, 2);
        img.put_pixel(0, 0, image::Rgba([255, 0, 0, 255]));
        img.put_pixel(0, 1, image::Rgba([0, 0, 255, 255]));

        let frame = decode_frame(&png_bytes(img)).unwrap();
        assert_eq!((frame.width, frame.height), (1, 2));
        // Row 0 is the bottom row (blue).
        assert_eq!(&frame.data[0..4], &[0.0, 0.0, 1.0, 1.0]);
        assert_eq!(&frame.data[4..8], &[1.0, 0.0, 0.0, 1.0]);
    }

    #[test]
    fn decode_rejects_garbage() {
        assert!(decode_frame(b"not a png").is_err());
    }

    #[test]
    fn missing_frame_reports_its_path() {
        let mut renderer = ImageSequenceRenderer::new("target/definitely_missing_frames");
        let err = renderer.render_frame(FrameIndex(1)).unwrap_err();
        assert!(err.to_string().contains("frame_0001.png"));
    }
}
