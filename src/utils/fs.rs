// File system utilities

use crate::error::{Result, ResolverError};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};

/// Ensures a directory exists, creating it and its parents if necessary
pub fn ensure_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        std::fs::create_dir_all(path).map_err(|e| {
            ResolverError::Io(std::io::Error::new(
                e.kind(),
                format!("Failed to create directory {}: {}", path.display(), e),
            ))
        })?;
    }
    Ok(())
}

/// Writes content to a file atomically by writing to a temp file first
pub fn atomic_write(path: &Path, content: &[u8]) -> Result<()> {
    // Ensure parent directory exists
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }

    let temp_path = path.with_extension("tmp");
    std::fs::write(&temp_path, content).map_err(|e| {
        ResolverError::Io(std::io::Error::new(
            e.kind(),
            format!(
                "Failed to write to temp file {}: {}",
                temp_path.display(),
                e
            ),
        ))
    })?;

    // Rename temp file to target (atomic operation)
    std::fs::rename(&temp_path, path).map_err(|e| {
        ResolverError::Io(std::io::Error::new(
            e.kind(),
            format!(
                "Failed to rename {} to {}: {}",
                temp_path.display(),
                path.display(),
                e
            ),
        ))
    })?;

    Ok(())
}

/// Checks if a file exists
pub fn file_exists(path: &Path) -> bool {
    path.exists() && path.is_file()
}

/// Copies a file into an archive subdirectory next to it, returning the copy's path.
///
/// Fails if the source is not a regular file.
pub fn archive_file(path: &Path, archive: &str) -> Result<PathBuf> {
    if !file_exists(path) {
        return Err(ResolverError::NotAFile(path.display().to_string()));
    }

    let src = super::path::normalize_path(path);
    let parent = src.parent().unwrap_or_else(|| Path::new(""));
    let archive_dir = parent.join(archive);
    ensure_dir(&archive_dir)?;

    let filename = src.file_name().ok_or_else(|| {
        ResolverError::NotAFile(path.display().to_string())
    })?;
    let dst = archive_dir.join(filename);
    std::fs::copy(&src, &dst).map_err(|e| {
        ResolverError::Io(std::io::Error::new(
            e.kind(),
            format!(
                "Failed to copy {} to {}: {}",
                src.display(),
                dst.display(),
                e
            ),
        ))
    })?;

    Ok(dst)
}

/// Loads a UTF-8 JSON file
pub fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let data = std::fs::read_to_string(path).map_err(|e| {
        ResolverError::Io(std::io::Error::new(
            e.kind(),
            format!("Failed to read {}: {}", path.display(), e),
        ))
    })?;
    Ok(serde_json::from_str(&data)?)
}

/// Dumps a value as pretty-printed UTF-8 JSON.
///
/// The value goes through `serde_json::Value` first so object keys come
/// out sorted regardless of the source container, keeping output
/// deterministic.
pub fn dump_json<T: Serialize>(value: &T, path: &Path) -> Result<()> {
    let value = serde_json::to_value(value)?;
    let json = serde_json::to_string_pretty(&value)?;
    atomic_write(path, json.as_bytes())
}
