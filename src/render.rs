use crate::{
    core::FrameIndex,
    error::{SpriteGridError, SpriteGridResult},
};

/// One rendered animation frame: interleaved RGBA samples, one `f32` per
/// channel (nominal range 0.0..=1.0), row-major with row 0 at the bottom.
#[derive(Clone, Debug)]
pub struct FrameRgba {
    pub width: u32,
    pub height: u32,
    pub data: Vec<f32>,
}

impl FrameRgba {
    pub fn sample_len(width: u32, height: u32) -> usize {
        width as usize * height as usize * 4
    }

    pub fn new_transparent(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            data: vec![0.0; Self::sample_len(width, height)],
        }
    }

    pub fn check_size(&self, width: u32, height: u32) -> SpriteGridResult<()> {
        if self.width != width || self.height != height {
            return Err(SpriteGridError::validation(format!(
                "frame size mismatch: got {}x{}, expected {}x{}",
                self.width, self.height, width, height
            )));
        }
        if self.data.len() != Self::sample_len(self.width, self.height) {
            return Err(SpriteGridError::validation(
                "frame.data size mismatch with width*height*4",
            ));
        }
        Ok(())
    }
}

/// Synchronous frame-producing collaborator.
///
/// Frame indices are 1-based: the k-th grid cell (0-based, row-major)
/// requests frame `k + 1`.
pub trait FrameRenderer {
    fn render_frame(&mut self, frame: FrameIndex) -> SpriteGridResult<FrameRgba>;
}
