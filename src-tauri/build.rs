use base64::prelude::*;
use std::{env, fs, path::Path};

// 1x1 transparent RGBA PNG
const PLACEHOLDER_PNG_B64: &str =
    "iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAYAAAAfFcSJAAAAC0lEQVR4nGNgAAIAAAUAAXpeqz8AAAAASUVORK5CYII=";

fn icon_png_bytes(app_icon: &Path) -> Vec<u8> {
    match fs::read(app_icon) {
        Ok(bytes) => bytes,
        Err(_) => BASE64_STANDARD
            .decode(PLACEHOLDER_PNG_B64)
            .expect("decode icon png"),
    }
}

/// Single-image ICO that embeds the PNG as-is.
fn png_to_ico(png: &[u8]) -> Vec<u8> {
    let mut ico = Vec::with_capacity(22 + png.len());
    ico.extend_from_slice(&[0, 0, 1, 0, 1, 0]);
    // width/height 0 means 256; the PNG header carries the real size
    ico.extend_from_slice(&[0, 0, 0, 0, 1, 0, 32, 0]);
    ico.extend_from_slice(&(png.len() as u32).to_le_bytes());
    ico.extend_from_slice(&22u32.to_le_bytes());
    ico.extend_from_slice(png);
    ico
}

fn ensure_icons() {
    let manifest_dir = env::var("CARGO_MANIFEST_DIR").unwrap();
    let app_icon = Path::new(&manifest_dir).join("../public/icon.png");
    println!("cargo:rerun-if-changed={}", app_icon.display());

    let icons_dir = Path::new(&manifest_dir).join("icons");
    let _ = fs::create_dir_all(&icons_dir);

    let png = icon_png_bytes(&app_icon);
    fs::write(icons_dir.join("icon.png"), &png).expect("write icon png");
    fs::write(icons_dir.join("icon.ico"), png_to_ico(&png)).expect("write icon ico");
}

fn main() {
    ensure_icons();
    tauri_build::build();
}
