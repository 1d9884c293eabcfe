use std::path::PathBuf;

use crate::{
    compose::compose_sheet,
    config::ExportConfig,
    core::GridLayout,
    encode_png::save_sheet_png,
    error::SpriteGridResult,
    render::FrameRenderer,
};

/// Outcome of a completed export, for user-facing status reporting.
#[derive(Clone, Debug)]
pub struct ExportReport {
    pub output_path: PathBuf,
    pub sheet_width: u32,
    pub sheet_height: u32,
    pub tiles: u32,
}

/// Validate + compose + save a sprite sheet in one call.
///
/// Pipeline:
/// 1. [`ExportConfig::validate`]
/// 2. [`GridLayout::for_tile_count`]
/// 3. [`compose_sheet`]
/// 4. [`save_sheet_png`]
///
/// The export is all-or-nothing: any failure aborts before the sheet file is
/// written.
#[tracing::instrument(skip(cfg, renderer), fields(tiles = cfg.tile_count))]
pub fn export_sprite_sheet(
    cfg: &ExportConfig,
    renderer: &mut dyn FrameRenderer,
) -> SpriteGridResult<ExportReport> {
    cfg.validate()?;

    let layout = GridLayout::for_tile_count(cfg.tile_count)?;
    let sheet = compose_sheet(cfg, layout, renderer)?;
    save_sheet_png(&sheet, &cfg.output_path)?;

    tracing::info!(
        path = %cfg.output_path.display(),
        width = sheet.width,
        height = sheet.height,
        "sprite sheet saved"
    );

    Ok(ExportReport {
        output_path: cfg.output_path.clone(),
        sheet_width: sheet.width,
        sheet_height: sheet.height,
        tiles: cfg.tile_count,
    })
}
