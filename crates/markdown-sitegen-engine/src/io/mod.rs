use crate::models::ContentFile;
use relative_path::RelativePathBuf;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid directory: {0}")]
    InvalidDirectory(String),
}

/// Read a file as UTF-8
pub fn read_path(path: &Path) -> Result<String, IoError> {
    if !path.exists() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }
    fs::read_to_string(path).map_err(IoError::Io)
}

/// Write a file, creating missing parent directories
pub fn write_path(path: &Path, content: &str) -> Result<(), IoError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(IoError::Io)?;
    }

    fs::write(path, content).map_err(IoError::Io)
}

/// Find every Markdown file below the content root, sorted by path
pub fn scan_markdown_files(content_root: &Path) -> Result<Vec<ContentFile>, IoError> {
    if !content_root.is_dir() {
        return Err(IoError::InvalidDirectory(format!(
            "content directory not found: {}",
            content_root.display()
        )));
    }

    let mut files = Vec::new();
    scan_directory_recursive(content_root, RelativePathBuf::new(), &mut files)?;
    files.sort();
    Ok(files)
}

fn scan_directory_recursive(
    dir: &Path,
    relative: RelativePathBuf,
    files: &mut Vec<ContentFile>,
) -> Result<(), IoError> {
    for entry in fs::read_dir(dir).map_err(IoError::Io)? {
        let entry = entry.map_err(IoError::Io)?;
        let path = entry.path();
        let name = entry.file_name();
        let child = relative.join(name.to_string_lossy().as_ref());

        if path.is_dir() {
            scan_directory_recursive(&path, child, files)?;
        } else if ContentFile::is_source(&path) {
            files.push(ContentFile::new(child));
        }
    }

    Ok(())
}

/// Copy every file and directory below `src` into `dst`.
///
/// Returns the number of files copied. Existing files in `dst` are
/// overwritten.
pub fn copy_dir_recursive(src: &Path, dst: &Path) -> Result<usize, IoError> {
    validate_dir(src)?;
    fs::create_dir_all(dst)?;

    let mut copied = 0;
    for entry in fs::read_dir(src)? {
        let entry = entry?;
        let from = entry.path();
        let to = dst.join(entry.file_name());

        if from.is_dir() {
            copied += copy_dir_recursive(&from, &to)?;
        } else {
            log::debug!("Copying {} to {}", from.display(), to.display());
            fs::copy(&from, &to)?;
            copied += 1;
        }
    }
    Ok(copied)
}

/// Remove a directory and everything in it, then recreate it empty.
pub fn clean_dir(path: &Path) -> Result<(), IoError> {
    if path.exists() {
        log::debug!("Removing {}", path.display());
        fs::remove_dir_all(path)?;
    }
    fs::create_dir_all(path)?;
    Ok(())
}

pub fn validate_dir(path: &Path) -> Result<(), IoError> {
    if !path.is_dir() {
        return Err(IoError::InvalidDirectory(format!(
            "directory does not exist: {}",
            path.display()
        )));
    }

    Ok(())
}
