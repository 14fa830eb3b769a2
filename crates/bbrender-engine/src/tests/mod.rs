use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Create an empty temporary source directory
pub fn create_test_dir() -> TempDir {
    tempfile::tempdir().unwrap()
}

/// Create a markup file below `dir`, creating intermediate directories
pub fn create_test_file(dir: &TempDir, filename: &str, content: &str) -> PathBuf {
    let file_path = dir.path().join(filename);
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&file_path, content).unwrap();
    file_path
}
