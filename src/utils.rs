use crate::result::Result;
use std::ffi::OsStr;
use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};

/// Find Cargo.toml in the current directory or specified path
///
/// Returns `None` when the project has no Cargo.toml; the directory is still
/// usable as a project root.
pub fn find_manifest(path: Option<&Path>) -> Result<Option<PathBuf>> {
    let base_path = match path {
        Some(path) => path.to_path_buf(),
        None => std::env::current_dir()?,
    };

    let manifest_path = if base_path.is_file() && base_path.file_name() == Some(OsStr::new("Cargo.toml")) {
        base_path
    } else {
        base_path.join("Cargo.toml")
    };

    Ok(manifest_path.exists().then_some(manifest_path))
}

/// Resolve `path` against `root`, collapsing `.` and `..` lexically
///
/// Absolute paths are returned as-is (after normalization) and an empty path
/// resolves to `root` itself. A relative root keeps any leading `..` that
/// cannot be collapsed.
pub fn resolve_path(root: &Path, path: &Path) -> PathBuf {
    let mut resolved = PathBuf::new();
    for component in root.join(path).components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                let last = resolved.components().next_back();
                let collapsible = matches!(last, Some(Component::Normal(_)));
                // `..` above the filesystem root stays at the root
                let at_root = matches!(last, Some(Component::RootDir | Component::Prefix(_)));

                if collapsible {
                    resolved.pop();
                } else if !at_root {
                    resolved.push("..");
                }
            }
            other => resolved.push(other),
        }
    }
    resolved
}

/// Recursively remove a directory, treating a missing target as success
///
/// Returns whether anything was removed.
pub fn remove_dir_if_exists(path: &Path) -> Result<bool> {
    match fs::remove_dir_all(path) {
        Ok(()) => Ok(true),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(err) => Err(err.into()),
    }
}

/// Get the current platform identifier as a string
pub fn platform_string() -> &'static str {
    if cfg!(target_os = "macos") {
        "macos"
    } else if cfg!(target_os = "windows") {
        "windows"
    } else if cfg!(target_os = "linux") {
        "linux"
    } else {
        "unknown"
    }
}
