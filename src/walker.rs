use crate::result::Result;
use std::io;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Recursively collect every regular file under `root`
///
/// The walk is a pre-order depth-first traversal: each subdirectory is fully
/// descended before the walker moves on to its next sibling. Entries within a
/// single directory come back in whatever order the OS lists them; the result
/// is NOT sorted. Symbolic links and special files are skipped, and any
/// listing failure aborts the walk.
pub fn collect_files(root: &Path) -> Result<Vec<PathBuf>> {
    if !root.is_dir() {
        return Err(io::Error::new(
            io::ErrorKind::NotADirectory,
            format!("{} is not a directory", root.display()),
        )
        .into());
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(root).min_depth(1) {
        let entry = entry?;
        if entry.file_type().is_file() {
            files.push(entry.into_path());
        }
    }

    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn relative(files: &[PathBuf], root: &Path) -> Vec<String> {
        let mut names: Vec<String> = files
            .iter()
            .map(|f| f.strip_prefix(root).unwrap().to_string_lossy().replace('\\', "/"))
            .collect();
        names.sort();
        names
    }

    #[test]
    fn test_collects_nested_files() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        fs::create_dir_all(root.join("assets/img")).unwrap();
        fs::write(root.join("index.html"), "<html></html>").unwrap();
        fs::write(root.join("assets/app.js"), "console.log(1)").unwrap();
        fs::write(root.join("assets/img/logo.png"), [0u8, 1, 2]).unwrap();

        let files = collect_files(root).unwrap();

        assert_eq!(
            relative(&files, root),
            vec!["assets/app.js", "assets/img/logo.png", "index.html"]
        );
        assert!(files.iter().all(|f| f.starts_with(root)));
    }

    #[test]
    fn test_subdirectories_are_contiguous() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        for sub in ["a", "b", "c"] {
            fs::create_dir_all(root.join(sub).join("deep")).unwrap();
            fs::write(root.join(sub).join("one.txt"), sub).unwrap();
            fs::write(root.join(sub).join("deep/two.txt"), sub).unwrap();
        }

        let files = collect_files(root).unwrap();
        assert_eq!(files.len(), 6);

        // Depth-first: once the walk leaves a top-level directory it never returns.
        let tops: Vec<_> = files
            .iter()
            .map(|f| f.strip_prefix(root).unwrap().components().next().unwrap())
            .collect();
        let mut seen = Vec::new();
        for top in tops {
            if seen.last() != Some(&top) {
                assert!(!seen.contains(&top));
                seen.push(top);
            }
        }
    }

    #[test]
    fn test_empty_directory() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("empty")).unwrap();

        assert!(collect_files(dir.path()).unwrap().is_empty());
    }

    #[test]
    fn test_root_must_be_directory() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("file.txt");
        fs::write(&file, "x").unwrap();

        assert!(collect_files(&file).is_err());
        assert!(collect_files(&dir.path().join("missing")).is_err());
    }

    #[cfg(unix)]
    #[test]
    fn test_symlinks_are_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        fs::write(root.join("real.txt"), "x").unwrap();
        std::os::unix::fs::symlink(root.join("real.txt"), root.join("link.txt")).unwrap();

        let files = collect_files(root).unwrap();
        assert_eq!(relative(&files, root), vec!["real.txt"]);
    }
}
