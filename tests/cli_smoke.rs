use std::path::PathBuf;

#[test]
fn cli_export_writes_png() {
    let dir = PathBuf::from("target").join("cli_smoke");
    let frames_dir = dir.join("frames");
    std::fs::create_dir_all(&frames_dir).unwrap();

    let out_path = dir.join("sheet.png");
    let _ = std::fs::remove_file(&out_path);

    // Three solid 4x4 frames.
    for (k, rgba) in [
        (1u32, [255u8, 0, 0, 255]),
        (2, [0, 255, 0, 255]),
        (3, [0, 0, 255, 255]),
    ] {
        let img = image::RgbaImage::from_pixel(4, 4, image::Rgba(rgba));
        img.save(frames_dir.join(format!("frame_{k:04}.png"))).unwrap();
    }

    let exe = std::env::var_os("CARGO_BIN_EXE_spritegrid")
        .map(PathBuf::from)
        .unwrap_or_else(|| {
            let mut p = PathBuf::from("target").join("debug");
            p.push(if cfg!(windows) {
                "spritegrid.exe"
            } else {
                "spritegrid"
            });
            p
        });

    let frames_arg = frames_dir.to_string_lossy().to_string();
    let out_arg = out_path.to_string_lossy().to_string();

    let status = std::process::Command::new(exe)
        .args([
            "export",
            "--frames",
            frames_arg.as_str(),
            "--tile-width",
            "4",
            "--tile-height",
            "4",
            "--tile-count",
            "3",
            "--out",
        ])
        .arg(out_arg.as_str())
        .status()
        .unwrap();

    assert!(status.success());
    assert!(out_path.exists());

    let img = image::open(&out_path).unwrap().to_rgba8();
    assert_eq!(img.dimensions(), (8, 8));
    assert_eq!(img.get_pixel(0, 0).0, [255, 0, 0, 255]);
    assert_eq!(img.get_pixel(7, 0).0, [0, 255, 0, 255]);
    assert_eq!(img.get_pixel(0, 7).0, [0, 0, 255, 255]);
    assert_eq!(img.get_pixel(7, 7).0, [0, 0, 0, 0]);
}

#[test]
fn cli_export_reads_config_json() {
    let dir = PathBuf::from("target").join("cli_smoke_config");
    let frames_dir = dir.join("frames");
    std::fs::create_dir_all(&frames_dir).unwrap();

    let out_path = dir.join("from_config.png");
    let _ = std::fs::remove_file(&out_path);

    let img = image::RgbaImage::from_pixel(2, 2, image::Rgba([0, 255, 255, 255]));
    img.save(frames_dir.join("frame_0001.png")).unwrap();

    let cfg_path = dir.join("export.json");
    let cfg = serde_json::json!({
        "tile_width": 2,
        "tile_height": 2,
        "tile_count": 1,
        "output_path": out_path,
    });
    std::fs::write(&cfg_path, serde_json::to_vec_pretty(&cfg).unwrap()).unwrap();

    let exe = PathBuf::from(std::env::var_os("CARGO_BIN_EXE_spritegrid").unwrap());
    let status = std::process::Command::new(exe)
        .args(["export", "--frames"])
        .arg(&frames_dir)
        .arg("--config")
        .arg(&cfg_path)
        .status()
        .unwrap();

    assert!(status.success());

    let img = image::open(&out_path).unwrap().to_rgba8();
    assert_eq!(img.dimensions(), (2, 2));
    assert_eq!(img.get_pixel(1, 1).0, [0, 255, 255, 255]);
}
