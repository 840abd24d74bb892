use crate::error::Error;
use crate::result::Result;
use std::path::Path;

/// Compute the archive entry name for `file` under `root`
///
/// The name is the path relative to `root` with every `\` turned into `/`.
/// With `include_root` the root directory's own name becomes the first
/// component, e.g. `dist/index.html` instead of `index.html`.
pub fn entry_name(file: &Path, root: &Path, include_root: bool) -> Result<String> {
    let relative = file.strip_prefix(root).map_err(|_| Error::OutsideRoot {
        file: file.to_path_buf(),
        root: root.to_path_buf(),
    })?;

    let name = relative.to_string_lossy().replace('\\', "/");

    if include_root {
        let root_name = root
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_default();
        Ok(format!("{}/{}", root_name, name))
    } else {
        Ok(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_relative_name() {
        let root = PathBuf::from("/project/dist");
        let file = root.join("assets").join("app.js");

        assert_eq!(entry_name(&file, &root, false).unwrap(), "assets/app.js");
    }

    #[test]
    fn test_include_root() {
        let root = PathBuf::from("/project/dist");

        assert_eq!(
            entry_name(&root.join("index.html"), &root, true).unwrap(),
            "dist/index.html"
        );
        assert_eq!(
            entry_name(&root.join("assets").join("app.js"), &root, true).unwrap(),
            "dist/assets/app.js"
        );
    }

    #[test]
    fn test_backslashes_are_normalized() {
        // On unix a backslash is an ordinary file-name character, which is
        // enough to show it never survives into the entry name.
        let root = PathBuf::from("/project/dist");
        let file = root.join("assets\\app.js");

        assert_eq!(entry_name(&file, &root, false).unwrap(), "assets/app.js");
    }

    #[test]
    fn test_outside_root() {
        let root = PathBuf::from("/project/dist");
        let file = PathBuf::from("/project/src/main.rs");

        assert!(matches!(
            entry_name(&file, &root, false),
            Err(Error::OutsideRoot { .. })
        ));
    }
}
