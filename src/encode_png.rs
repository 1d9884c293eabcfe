use std::path::Path;

use crate::{
    compose::SheetBuffer,
    error::{SpriteGridError, SpriteGridResult},
};

pub fn ensure_parent_dir(path: &Path) -> SpriteGridResult<()> {
    if let Some(parent) = path.parent() {
        use anyhow::Context as _;
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create output directory '{}'", parent.display()))?;
    }
    Ok(())
}

/// Encode the sheet as an 8-bit RGBA PNG at `path`, overwriting any existing
/// file.
///
/// Samples are clamped to 0.0..=1.0 and quantized here, at the encode
/// boundary; everything upstream of this call is lossless.
pub fn save_sheet_png(sheet: &SheetBuffer, path: &Path) -> SpriteGridResult<()> {
    let rgba8 = to_rgba8_top_down(sheet)?;
    ensure_parent_dir(path)?;

    image::save_buffer_with_format(
        path,
        &rgba8,
        sheet.width,
        sheet.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .map_err(|e| SpriteGridError::encode(format!("write png '{}': {e}", path.display())))?;

    Ok(())
}

/// Reorder the bottom-up sample rows into top-down PNG scanlines and
/// quantize each sample.
fn to_rgba8_top_down(sheet: &SheetBuffer) -> SpriteGridResult<Vec<u8>> {
    let w = sheet.width as usize;
    let h = sheet.height as usize;
    if sheet.data.len() != w * h * 4 {
        return Err(SpriteGridError::validation(
            "sheet.data size mismatch with width*height*4",
        ));
    }

    let mut out = Vec::with_capacity(w * h * 4);
    for row in (0..h).rev() {
        let start = row * w * 4;
        out.extend(sheet.data[start..start + w * 4].iter().map(|&s| quantize(s)));
    }
    Ok(out)
}

fn quantize(sample: f32) -> u8 {
    (sample.clamp(0.0, 1.0) * 255.0).round() as u8
}
