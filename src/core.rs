use crate::error::{SpriteGridError, SpriteGridResult};

/// 1-indexed animation frame identifier.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct FrameIndex(pub u64);

/// Square tile grid derived from a tile count.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct GridLayout {
    pub rows: u32,
    pub cols: u32,
}

impl GridLayout {
    /// Smallest square grid holding at least `tile_count` cells
    /// (`rows = cols = ceil(sqrt(tile_count))`).
    pub fn for_tile_count(tile_count: u32) -> SpriteGridResult<Self> {
        if tile_count == 0 {
            return Err(SpriteGridError::validation("tile count must be > 0"));
        }

        let mut side = f64::from(tile_count).sqrt().floor() as u32;
        while u64::from(side) * u64::from(side) < u64::from(tile_count) {
            side += 1;
        }

        Ok(Self {
            rows: side,
            cols: side,
        })
    }

    pub fn cell_count(self) -> u64 {
        u64::from(self.rows) * u64::from(self.cols)
    }

    /// Sheet pixel dimensions for the given tile size.
    pub fn sheet_size(self, tile_width: u32, tile_height: u32) -> SpriteGridResult<(u32, u32)> {
        let width = self.cols.checked_mul(tile_width).ok_or_else(|| {
            SpriteGridError::validation("sheet width overflows u32 (cols * tile_width)")
        })?;
        let height = self.rows.checked_mul(tile_height).ok_or_else(|| {
            SpriteGridError::validation("sheet height overflows u32 (rows * tile_height)")
        })?;
        Ok((width, height))
    }
}
