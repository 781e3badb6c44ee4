// Path string utilities
//
// These mirror the archive tooling's path conventions: every helper
// normalizes its input first, extensions are handled with their leading
// dot, and parent substitution is a literal string replacement.

use std::path::{Path, PathBuf};

/// Normalize a path by resolving . and .. components lexically
pub fn normalize_path(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();

    for component in path.components() {
        match component {
            std::path::Component::ParentDir => {
                normalized.pop();
            }
            std::path::Component::CurDir => {
                // Skip current directory references
            }
            _ => {
                normalized.push(component);
            }
        }
    }

    normalized
}

/// Insert a suffix before the final extension.
///
/// `clip.jpg` + `_thumb` becomes `clip_thumb.jpg`; a path without an
/// extension gets the suffix appended.
pub fn add_suffix(path: &Path, suffix: &str) -> PathBuf {
    let norm = normalize_path(path);
    let ext = norm.extension().map(|e| e.to_string_lossy().into_owned());

    let mut stem = norm.with_extension("").into_os_string();
    stem.push(suffix);
    if let Some(ext) = ext {
        stem.push(".");
        stem.push(ext);
    }
    PathBuf::from(stem)
}

/// Whether the path's stem (extension stripped) ends with the suffix
pub fn has_suffix(path: &Path, suffix: &str) -> bool {
    file_stem(path).to_string_lossy().ends_with(suffix)
}

/// The normalized path without its final extension
pub fn file_stem(path: &Path) -> PathBuf {
    normalize_path(path).with_extension("")
}

/// The final extension including its leading dot, or an empty string
pub fn get_extension(path: &Path) -> String {
    normalize_path(path)
        .extension()
        .map(|e| format!(".{}", e.to_string_lossy()))
        .unwrap_or_default()
}

/// Whether the path carries the given extension (dot included, case-sensitive)
pub fn has_extension(path: &Path, extension: &str) -> bool {
    get_extension(path) == extension
}

/// Swap the final extension for a new one (dot included)
pub fn replace_extension(path: &Path, extension: &str) -> PathBuf {
    let mut stem = file_stem(path).into_os_string();
    stem.push(extension);
    PathBuf::from(stem)
}

/// Join parent and child, normalized
pub fn join_paths(parent: &Path, child: &Path) -> PathBuf {
    normalize_path(&parent.join(child))
}

/// Whether `parent` occurs in `path`.
///
/// Literal substring match on the normalized string forms, not a
/// path-segment check: `media-old` contains `media`.
pub fn has_parent(path: &Path, parent: &Path) -> bool {
    let path = normalize_path(path);
    let parent = normalize_path(parent);
    path.to_string_lossy()
        .contains(parent.to_string_lossy().as_ref())
}

/// Remove the first occurrence of `parent` from `path`
pub fn remove_parent(path: &Path, parent: &Path) -> PathBuf {
    replace_parent(path, parent, Path::new(""))
}

/// Replace the first occurrence of `old` in `path` with `new`.
///
/// Same literal-match contract as [`has_parent`].
pub fn replace_parent(path: &Path, old: &Path, new: &Path) -> PathBuf {
    let path = normalize_path(path).to_string_lossy().into_owned();
    let old = normalize_path(old).to_string_lossy().into_owned();
    let mut new = normalize_path(new).to_string_lossy().into_owned();
    // an empty replacement normalizes to the current directory, so the
    // final normalization collapses the leftover separator
    if new.is_empty() {
        new = ".".to_string();
    }
    normalize_path(Path::new(&path.replacen(&old, &new, 1)))
}
