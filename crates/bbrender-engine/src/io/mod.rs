use relative_path::{RelativePath, RelativePathBuf};
use std::fs;
use std::path::{Path, PathBuf};

/// Extensions recognized as BBCode sources.
pub const BBCODE_EXTENSIONS: [&str; 2] = ["bbcode", "bb"];

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid source directory: {0}")]
    InvalidSourceDir(String),
    #[error("{path} is not below {root}")]
    OutsideRoot { path: PathBuf, root: PathBuf },
}

/// Read a source file and return its content
pub fn read_file(relative_path: &RelativePath, root: &Path) -> Result<String, IoError> {
    let absolute_path = relative_path.to_path(root);
    if !absolute_path.exists() {
        return Err(IoError::NotFound(absolute_path));
    }
    fs::read_to_string(&absolute_path).map_err(IoError::Io)
}

/// Write content to a file below `root`, creating parent directories
pub fn write_file(relative_path: &RelativePath, root: &Path, content: &str) -> Result<(), IoError> {
    let absolute_path = relative_path.to_path(root);

    if let Some(parent) = absolute_path.parent() {
        fs::create_dir_all(parent).map_err(IoError::Io)?;
    }

    fs::write(&absolute_path, content).map_err(IoError::Io)
}

/// Recursively find BBCode files below `root`, sorted by path
pub fn scan_bbcode_files(root: &Path) -> Result<Vec<PathBuf>, IoError> {
    validate_source_dir(root)?;

    let mut files = Vec::new();
    scan_directory_recursive(root, &mut files)?;
    files.sort();
    Ok(files)
}

fn scan_directory_recursive(dir: &Path, files: &mut Vec<PathBuf>) -> Result<(), IoError> {
    let entries = fs::read_dir(dir).map_err(IoError::Io)?;

    for entry in entries {
        let entry = entry.map_err(IoError::Io)?;
        let path = entry.path();

        if path.is_dir() {
            scan_directory_recursive(&path, files)?;
        } else if is_bbcode_file(&path) {
            files.push(path);
        }
    }

    Ok(())
}

pub fn is_bbcode_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            BBCODE_EXTENSIONS
                .iter()
                .any(|known| ext.eq_ignore_ascii_case(known))
        })
}

pub fn validate_source_dir(path: &Path) -> Result<(), IoError> {
    if !path.exists() || !path.is_dir() {
        return Err(IoError::InvalidSourceDir(format!(
            "{} does not exist or is not a directory",
            path.display()
        )));
    }

    Ok(())
}

/// Map a source file below `root` to its `.html` output, relative to the
/// output root. `root/guides/intro.bbcode` becomes `guides/intro.html`.
pub fn output_path_for(root: &Path, file: &Path) -> Result<RelativePathBuf, IoError> {
    let relative = file
        .strip_prefix(root)
        .ok()
        .and_then(|relative| RelativePathBuf::from_path(relative).ok())
        .ok_or_else(|| IoError::OutsideRoot {
            path: file.to_path_buf(),
            root: root.to_path_buf(),
        })?;
    Ok(relative.with_extension("html"))
}
