use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;

use chrono::Local;

pub fn log_path() -> PathBuf {
    let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
    let dir = PathBuf::from(format!("{}/Library/Application Support/ClipVault", home));
    let _ = fs::create_dir_all(&dir);
    dir.join("icongen.log")
}

pub fn log_line(line: &str) {
    if let Ok(mut f) = OpenOptions::new().create(true).append(true).open(log_path()) {
        let _ = writeln!(f, "[{}] {}", Local::now().format("%Y-%m-%d %H:%M:%S"), line);
    }
}

pub fn log_error(prefix: &str, e: &dyn std::error::Error) {
    log_line(&format!("ERROR: {}: {}", prefix, e));
}

pub fn log_command(program: &str, args: &[String]) {
    log_line(&format!("RUN: {} {}", program, args.join(" ")));
}
