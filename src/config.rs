use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use anyhow::Context as _;

use crate::{
    core::GridLayout,
    error::{SpriteGridError, SpriteGridResult},
};

/// Export settings, read once at export time.
///
/// Missing fields in a JSON config fall back to the defaults below.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Width of each tile in pixels.
    pub tile_width: u32,
    /// Height of each tile in pixels.
    pub tile_height: u32,
    /// Total number of tiles.
    pub tile_count: u32,
    /// Filepath to save the sprite sheet.
    pub output_path: PathBuf,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            tile_width: 64,
            tile_height: 64,
            tile_count: 16,
            output_path: PathBuf::from("sprite_sheet.png"),
        }
    }
}

impl ExportConfig {
    pub fn from_path(path: &Path) -> SpriteGridResult<Self> {
        let f =
            File::open(path).with_context(|| format!("open export config '{}'", path.display()))?;
        let r = BufReader::new(f);
        let cfg: ExportConfig = serde_json::from_reader(r)
            .with_context(|| format!("parse export config '{}'", path.display()))?;
        Ok(cfg)
    }

    pub fn validate(&self) -> SpriteGridResult<()> {
        if self.tile_width == 0 || self.tile_height == 0 {
            return Err(SpriteGridError::validation("tile width/height must be > 0"));
        }
        if self.tile_count == 0 {
            return Err(SpriteGridError::validation("tile count must be > 0"));
        }
        if self.output_path.as_os_str().is_empty() {
            return Err(SpriteGridError::validation("output path must be non-empty"));
        }

        // Reject sheet dimensions that cannot be represented before any
        // rendering starts.
        let layout = GridLayout::for_tile_count(self.tile_count)?;
        layout.sheet_size(self.tile_width, self.tile_height)?;

        Ok(())
    }
}
