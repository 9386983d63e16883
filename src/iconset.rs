use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use image::RgbaImage;
use image::imageops::{self, FilterType};

use crate::logger::{log_command, log_error, log_line};

pub const ICONSET_DIR_NAME: &str = "AppIcon.iconset";

/// Every rendition a macOS iconset expects, in iconutil's naming scheme.
pub const ICONSET_SIZES: [(&str, u32); 10] = [
    ("icon_16x16.png", 16),
    ("icon_16x16@2x.png", 32),
    ("icon_32x32.png", 32),
    ("icon_32x32@2x.png", 64),
    ("icon_128x128.png", 128),
    ("icon_128x128@2x.png", 256),
    ("icon_256x256.png", 256),
    ("icon_256x256@2x.png", 512),
    ("icon_512x512.png", 512),
    ("icon_512x512@2x.png", 1024),
];

/// Resample the base sprite to every iconset size and write the PNGs into
/// `<out_dir>/AppIcon.iconset`. Returns the iconset directory path.
pub fn write_iconset(img: &RgbaImage, out_dir: &Path) -> PathBuf {
    let iconset_dir = out_dir.join(ICONSET_DIR_NAME);
    fs::create_dir_all(&iconset_dir).expect("create iconset dir");

    for (name, sz) in ICONSET_SIZES {
        let resized = if sz == img.width() && sz == img.height() {
            img.clone()
        } else {
            imageops::resize(img, sz, sz, FilterType::Lanczos3)
        };
        let path = iconset_dir.join(name);
        resized
            .save(&path)
            .unwrap_or_else(|e| panic!("failed to save {}: {}", path.display(), e));
        println!("  Created {} ({}x{})", name, sz, sz);
        log_line(&format!("wrote {}", path.display()));
    }

    iconset_dir
}

/// Hand the iconset directory to iconutil. The caller judges success by
/// checking afterwards that the .icns exists; a failing or missing iconutil
/// only produces log output here.
pub fn package_icns(iconset_dir: &Path, icns_path: &Path) {
    let args = [
        "-c".to_string(),
        "icns".to_string(),
        iconset_dir.display().to_string(),
        "-o".to_string(),
        icns_path.display().to_string(),
    ];
    log_command("iconutil", &args);
    match Command::new("iconutil")
        .arg("-c")
        .arg("icns")
        .arg(iconset_dir)
        .arg("-o")
        .arg(icns_path)
        .status()
    {
        Ok(status) => log_line(&format!("iconutil exited: {}", status)),
        Err(e) => log_error("failed to launch iconutil", &e),
    }
}
