use std::path::PathBuf;

use clap::{Parser, Subcommand};

use spritegrid::{ExportConfig, GridLayout, ImageSequenceRenderer, export_sprite_sheet};

#[derive(Parser, Debug)]
#[command(name = "spritegrid", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compose pre-rendered animation frames into a sprite-sheet PNG.
    Export(ExportArgs),
    /// Print the grid and sheet dimensions for a tile count.
    Layout(LayoutArgs),
}

#[derive(Parser, Debug)]
struct ExportArgs {
    /// Directory containing numbered frame images (frame_0001.png, ...).
    #[arg(long)]
    frames: PathBuf,

    /// Export config JSON; the flags below override its values.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Width of each tile in pixels.
    #[arg(long)]
    tile_width: Option<u32>,

    /// Height of each tile in pixels.
    #[arg(long)]
    tile_height: Option<u32>,

    /// Total number of tiles.
    #[arg(long)]
    tile_count: Option<u32>,

    /// Output PNG path.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct LayoutArgs {
    /// Total number of tiles.
    #[arg(long)]
    tile_count: u32,

    /// Width of each tile in pixels.
    #[arg(long, default_value_t = 64)]
    tile_width: u32,

    /// Height of each tile in pixels.
    #[arg(long, default_value_t = 64)]
    tile_height: u32,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Export(args) => cmd_export(args),
        Command::Layout(args) => cmd_layout(args),
    }
}

fn cmd_export(args: ExportArgs) -> anyhow::Result<()> {
    let mut cfg = match &args.config {
        Some(path) => ExportConfig::from_path(path)?,
        None => ExportConfig::default(),
    };
    if let Some(v) = args.tile_width {
        cfg.tile_width = v;
    }
    if let Some(v) = args.tile_height {
        cfg.tile_height = v;
    }
    if let Some(v) = args.tile_count {
        cfg.tile_count = v;
    }
    if let Some(v) = args.out {
        cfg.output_path = v;
    }

    let mut renderer = ImageSequenceRenderer::new(&args.frames);
    let report = export_sprite_sheet(&cfg, &mut renderer)?;

    eprintln!(
        "wrote {} ({}x{}, {} tiles)",
        report.output_path.display(),
        report.sheet_width,
        report.sheet_height,
        report.tiles
    );
    Ok(())
}

fn cmd_layout(args: LayoutArgs) -> anyhow::Result<()> {
    let layout = GridLayout::for_tile_count(args.tile_count)?;
    let (width, height) = layout.sheet_size(args.tile_width, args.tile_height)?;

    println!(
        "{} tiles -> {}x{} grid, {}x{} px sheet",
        args.tile_count, layout.rows, layout.cols, width, height
    );
    Ok(())
}
