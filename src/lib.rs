//! Package a build's output directory into a single zip archive.
//!
//! [`CompressDist`] is a [`BuildPlugin`]: a build pipeline hands it the
//! project root, fires [`BuildPlugin::before_build`] to optionally clear stale
//! output, and fires [`BuildPlugin::after_build`] once the output is final to
//! write `<output_dir>/<file_name>.zip`.
//!
//! ```no_run
//! use compress_dist::{CompressDist, Options, Pipeline};
//!
//! let options = Options::new().output_dir("setup").include_root(true);
//! let mut pipeline = Pipeline::new(".");
//! pipeline.register(CompressDist::new(options));
//! pipeline.run(|| Ok(()))?;
//! # Ok::<(), compress_dist::Error>(())
//! ```

pub mod archive;
pub mod cmd;
pub mod compress;
pub mod config;
pub mod context;
pub mod entry;
pub mod error;
pub mod manifest;
pub mod pipeline;
pub mod plugin;
pub mod reporter;
pub mod result;
pub mod tpl;
pub mod utils;
pub mod walker;

pub use archive::{ARCHIVE_EXTENSION, Archive};
pub use compress::{ArchiveReport, CompressDist, compress_dist};
pub use config::{FileName, Options};
pub use context::Context;
pub use error::Error;
pub use manifest::Manifest;
pub use pipeline::Pipeline;
pub use plugin::BuildPlugin;
pub use reporter::{ConsoleReporter, Reporter, format_size};
