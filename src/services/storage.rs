use crate::domain::models::InputFile;
use crate::error::AppError;
use std::path::{Path, PathBuf};

/// Regular files directly under `dir`, sorted by name.
pub fn list_input_files(dir: &Path) -> Result<Vec<InputFile>, AppError> {
    if !dir.is_dir() {
        return Err(AppError::InputsDirNotFound(dir.to_path_buf()));
    }
    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        let meta = entry.metadata()?;
        if meta.is_file() {
            files.push(InputFile {
                name: entry.file_name().to_string_lossy().to_string(),
                size_bytes: meta.len(),
            });
        }
    }
    files.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(files)
}

pub fn input_path(dir: &Path, name: &str) -> PathBuf {
    dir.join(name)
}

/// True when `name` is a single file-name component, so joining it onto the
/// inputs directory cannot leave that directory.
pub fn is_plain_file_name(name: &str) -> bool {
    Path::new(name).file_name() == Some(name.as_ref())
}

pub fn read_input(dir: &Path, name: &str) -> Result<String, AppError> {
    if !dir.is_dir() {
        return Err(AppError::InputsDirNotFound(dir.to_path_buf()));
    }
    let path = input_path(dir, name);
    if !is_plain_file_name(name) || !path.is_file() {
        return Err(AppError::ResourceNotFound(name.to_string()));
    }
    tracing::debug!(path = %path.display(), "reading input");
    Ok(std::fs::read_to_string(path)?)
}

pub fn write_reports(dir: &Path, name: &str, content: &str) -> Result<PathBuf, AppError> {
    if !is_plain_file_name(name) {
        return Err(AppError::InvalidArgument(format!(
            "Output file '{name}' must be a plain file name inside the inputs directory."
        )));
    }
    std::fs::create_dir_all(dir)?;
    let path = input_path(dir, name);
    std::fs::write(&path, content)?;
    tracing::debug!(path = %path.display(), bytes = content.len(), "reports written");
    Ok(path)
}
