//! Names file fixtures backed by temporary directories

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Creates an empty temporary directory for names files
pub fn names_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp dir")
}

/// Writes `content` to `dir/file_name` and returns the path
pub fn write_names_file(dir: &TempDir, file_name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(file_name);
    fs::write(&path, content).expect("Failed to write names file");
    path
}
