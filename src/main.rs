use std::fs;
use std::path::Path;

use clipvault_icon::{helpers, icon, iconset, logger};

fn main() {
    println!("Generating ClipVault icon (1024x1024)...");
    logger::log_line("icon generation started");

    let img = icon::generate_icon();

    let out_dir = Path::new("resources");
    fs::create_dir_all(out_dir).expect("create resources dir");
    let source = out_dir.join("icon-1024.png");
    img.save(&source).expect("failed to save source png");
    println!("Saved source: {}", source.display());

    println!("Creating iconset...");
    let iconset_dir = iconset::write_iconset(&img, out_dir);
    println!("Iconset: {}", iconset_dir.display());

    // Package with iconutil; success is judged by the file existing afterwards
    let icns = out_dir.join("AppIcon.icns");
    println!("Converting to .icns...");
    iconset::package_icns(&iconset_dir, &icns);
    match fs::metadata(&icns) {
        Ok(meta) => println!(
            "Created: {} ({})",
            icns.display(),
            helpers::format_file_size(meta.len())
        ),
        Err(_) => println!("ERROR: iconutil failed to create .icns file"),
    }

    logger::log_line("icon generation finished");
    println!("Done!");
}
