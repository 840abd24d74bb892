use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("directory walk failed: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("zip error: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("{} is not inside {}", file.display(), root.display())]
    OutsideRoot { file: PathBuf, root: PathBuf },

    #[error("command failed: {0}")]
    CommandFailed(String),
}
