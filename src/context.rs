use std::path::PathBuf;

/// Context passed throughout the application containing global configuration
#[derive(Clone, Debug)]
pub struct Context {
    /// Enable verbose output (show command execution details)
    pub verbose: bool,

    /// Path to the Cargo.toml manifest, if the project has one
    pub manifest_path: Option<PathBuf>,

    /// Project root (directory containing Cargo.toml)
    pub base_dir: PathBuf,
}

impl Context {
    pub fn new(manifest_path: PathBuf, verbose: bool) -> Self {
        let base_dir = manifest_path
            .parent()
            .map(|p| p.to_path_buf())
            .unwrap_or_else(|| PathBuf::from("."));

        Self {
            verbose,
            manifest_path: Some(manifest_path),
            base_dir,
        }
    }

    /// Context for a project root without a Cargo.toml
    pub fn without_manifest(base_dir: PathBuf, verbose: bool) -> Self {
        Self {
            verbose,
            manifest_path: None,
            base_dir,
        }
    }
}
