use crate::{
    config::ExportConfig,
    core::{FrameIndex, GridLayout},
    error::SpriteGridResult,
    render::{FrameRenderer, FrameRgba},
};

/// The assembled sheet: same sample layout as [`FrameRgba`], row-major with
/// row 0 at the bottom, four `f32` samples per pixel.
#[derive(Clone, Debug)]
pub struct SheetBuffer {
    pub width: u32,
    pub height: u32,
    pub data: Vec<f32>,
}

impl SheetBuffer {
    pub fn new_transparent(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            data: vec![0.0; FrameRgba::sample_len(width, height)],
        }
    }
}

/// Render each tile and place it into the sheet.
///
/// Cells are visited in row-major order; the k-th cell (0-based) receives
/// animation frame `k + 1`. Iteration stops after `tile_count` cells, so
/// trailing cells of a non-full grid stay transparent. Samples are copied
/// verbatim, no conversion or blending.
pub fn compose_sheet(
    cfg: &ExportConfig,
    layout: GridLayout,
    renderer: &mut dyn FrameRenderer,
) -> SpriteGridResult<SheetBuffer> {
    let (sheet_width, sheet_height) = layout.sheet_size(cfg.tile_width, cfg.tile_height)?;
    let mut sheet = SheetBuffer::new_transparent(sheet_width, sheet_height);

    let mut placed = 0u32;
    'cells: for row in 0..layout.rows {
        for col in 0..layout.cols {
            if placed >= cfg.tile_count {
                break 'cells;
            }

            let frame = renderer.render_frame(FrameIndex(u64::from(placed) + 1))?;
            frame.check_size(cfg.tile_width, cfg.tile_height)?;
            blit_tile(&mut sheet, &frame, row, col);

            placed += 1;
            tracing::debug!(tile = placed, row, col, "placed tile");
        }
    }

    Ok(sheet)
}

/// Copy one frame into the cell at (`row`, `col`).
///
/// Source row `y` (0 = bottom) of a tile at grid row `row` lands at sheet
/// row `sheet_height - (row*tile_height + y) - 1`, which keeps the sheet's
/// bottom-left origin while laying tiles top-to-bottom in grid order.
fn blit_tile(sheet: &mut SheetBuffer, frame: &FrameRgba, row: u32, col: u32) {
    let tile_w = frame.width as usize;
    let tile_h = frame.height as usize;
    let sheet_w = sheet.width as usize;
    let sheet_h = sheet.height as usize;
    let row = row as usize;
    let col = col as usize;

    for y in 0..tile_h {
        let sheet_row = sheet_h - (row * tile_h + y) - 1;
        let dst = (sheet_row * sheet_w + col * tile_w) * 4;
        let src = y * tile_w * 4;
        sheet.data[dst..dst + tile_w * 4].copy_from_slice(&frame.data[src..src + tile_w * 4]);
    }
}
