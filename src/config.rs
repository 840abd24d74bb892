use std::fmt;
use std::path::PathBuf;

/// Base name (without extension) of the produced archive
pub enum FileName {
    /// Used as-is
    Literal(String),
    /// Called once per archive, at the moment the name is needed
    Generator(Box<dyn FnMut() -> String + Send>),
}

impl FileName {
    pub fn generator<F>(f: F) -> Self
    where
        F: FnMut() -> String + Send + 'static,
    {
        FileName::Generator(Box::new(f))
    }

    /// Produce the name for the archive being created right now
    pub fn resolve(&mut self) -> String {
        match self {
            FileName::Literal(name) => name.clone(),
            FileName::Generator(generate) => generate(),
        }
    }
}

impl Default for FileName {
    fn default() -> Self {
        FileName::Literal("dist".to_string())
    }
}

impl From<&str> for FileName {
    fn from(name: &str) -> Self {
        FileName::Literal(name.to_string())
    }
}

impl From<String> for FileName {
    fn from(name: String) -> Self {
        FileName::Literal(name)
    }
}

impl fmt::Debug for FileName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileName::Literal(name) => f.debug_tuple("Literal").field(name).finish(),
            FileName::Generator(_) => f.write_str("Generator(..)"),
        }
    }
}

/// Options controlling what gets packaged and where the archive goes
///
/// Relative paths are resolved against the project root handed to the plugin
/// by the build pipeline.
#[derive(Debug)]
pub struct Options {
    /// Archive base name, `dist` by default
    pub file_name: FileName,

    /// Directory to package, `dist` by default
    pub dist_dir: PathBuf,

    /// Directory the archive is written into; empty means the project root
    pub output_dir: PathBuf,

    /// Remove the packaged directory once the archive has been written
    pub delete_dist_after_compress: bool,

    /// Nest entries under the packaged directory's name (`dist/index.html`)
    pub include_root: bool,

    /// Remove the packaged directory before the build starts
    pub delete_dist_before_compress: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            file_name: FileName::default(),
            dist_dir: PathBuf::from("dist"),
            output_dir: PathBuf::new(),
            delete_dist_after_compress: false,
            include_root: false,
            delete_dist_before_compress: false,
        }
    }
}

impl Options {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn file_name<N: Into<FileName>>(mut self, name: N) -> Self {
        self.file_name = name.into();
        self
    }

    pub fn dist_dir<P: Into<PathBuf>>(mut self, dir: P) -> Self {
        self.dist_dir = dir.into();
        self
    }

    pub fn output_dir<P: Into<PathBuf>>(mut self, dir: P) -> Self {
        self.output_dir = dir.into();
        self
    }

    pub fn delete_dist_after_compress(mut self, delete: bool) -> Self {
        self.delete_dist_after_compress = delete;
        self
    }

    pub fn include_root(mut self, include: bool) -> Self {
        self.include_root = include;
        self
    }

    pub fn delete_dist_before_compress(mut self, delete: bool) -> Self {
        self.delete_dist_before_compress = delete;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let mut options = Options::default();

        assert_eq!(options.file_name.resolve(), "dist");
        assert_eq!(options.dist_dir, PathBuf::from("dist"));
        assert_eq!(options.output_dir, PathBuf::new());
        assert!(!options.delete_dist_after_compress);
        assert!(!options.include_root);
        assert!(!options.delete_dist_before_compress);
    }

    #[test]
    fn test_generator_runs_on_each_resolve() {
        let mut counter = 0;
        let mut name = FileName::generator(move || {
            counter += 1;
            format!("build-{}", counter)
        });

        assert_eq!(name.resolve(), "build-1");
        assert_eq!(name.resolve(), "build-2");
    }
}
