use crate::archive::{ARCHIVE_EXTENSION, Archive};
use crate::config::Options;
use crate::entry::entry_name;
use crate::plugin::BuildPlugin;
use crate::reporter::{self, ConsoleReporter, Reporter};
use crate::result::Result;
use crate::utils;
use crate::walker::collect_files;
use std::fs;
use std::path::{Path, PathBuf};

/// Summary of one packaging run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveReport {
    /// Where the archive was written
    pub path: PathBuf,
    /// Number of files packaged
    pub files: usize,
    /// Size of the archive in bytes
    pub size: u64,
}

/// Plugin that zips the build output once the build has finished
pub struct CompressDist {
    options: Options,
    root: Option<PathBuf>,
    reporter: Box<dyn Reporter + Send>,
}

/// Create the plugin with the default console reporter
pub fn compress_dist(options: Options) -> CompressDist {
    CompressDist::new(options)
}

impl CompressDist {
    pub fn new(options: Options) -> Self {
        Self {
            options,
            root: None,
            reporter: Box::new(ConsoleReporter),
        }
    }

    pub fn with_reporter<R: Reporter + Send + 'static>(mut self, reporter: R) -> Self {
        self.reporter = Box::new(reporter);
        self
    }

    /// Project root; the working directory until the pipeline provides one
    fn root(&self) -> Result<PathBuf> {
        match &self.root {
            Some(root) => Ok(root.clone()),
            None => Ok(std::env::current_dir()?),
        }
    }

    /// Remove the dist directory ahead of a build, if asked to
    pub fn clean(&mut self) -> Result<()> {
        if !self.options.delete_dist_before_compress {
            return Ok(());
        }

        let dist_path = utils::resolve_path(&self.root()?, &self.options.dist_dir);
        if utils::remove_dir_if_exists(&dist_path)? {
            self.reporter
                .info(&format!("removed dist directory: {}", dist_path.display()));
        }

        Ok(())
    }

    /// Package the dist directory into `<output_dir>/<file_name>.zip`
    ///
    /// Returns `Ok(None)` without writing anything when the dist directory
    /// does not exist. Failures are reported and then returned to the caller.
    pub fn compress(&mut self) -> Result<Option<ArchiveReport>> {
        let root = self.root()?;
        let dist_path = utils::resolve_path(&root, &self.options.dist_dir);
        let output_path = utils::resolve_path(&root, &self.options.output_dir);

        let file_name = self.options.file_name.resolve();
        let archive_path = output_path.join(format!("{}.{}", file_name, ARCHIVE_EXTENSION));

        if !dist_path.exists() {
            self.reporter
                .warn(&format!("directory does not exist: {}", dist_path.display()));
            return Ok(None);
        }

        self.reporter
            .start(&format!("compressing {}...", dist_path.display()));

        match self.package(&dist_path, &output_path, &archive_path) {
            Ok(report) => Ok(Some(report)),
            Err(err) => {
                self.reporter.error(&format!("compression failed: {}", err));
                Err(err)
            }
        }
    }

    fn package(
        &self,
        dist_path: &Path,
        output_path: &Path,
        archive_path: &Path,
    ) -> Result<ArchiveReport> {
        let files = collect_files(dist_path)?;

        let mut archive = Archive::new();
        for file in &files {
            let name = entry_name(file, dist_path, self.options.include_root)?;
            let contents = fs::read(file)?;
            archive.add(&name, &contents)?;
        }

        let buffer = archive.finish()?;

        fs::create_dir_all(output_path)?;
        fs::write(archive_path, &buffer)?;

        let report = ArchiveReport {
            path: archive_path.to_path_buf(),
            files: files.len(),
            size: buffer.len() as u64,
        };

        self.reporter
            .success(&format!("archive created: {}", report.path.display()));
        self.reporter
            .info(&format!("files packaged: {}", report.files));
        self.reporter
            .info(&format!("archive size: {}", reporter::format_size(report.size)));

        if self.options.delete_dist_after_compress {
            utils::remove_dir_if_exists(dist_path)?;
            self.reporter
                .info(&format!("removed original directory: {}", dist_path.display()));
        }

        Ok(report)
    }
}

impl BuildPlugin for CompressDist {
    fn name(&self) -> &str {
        "compress-dist"
    }

    fn config_resolved(&mut self, root: &Path) {
        self.root = Some(root.to_path_buf());
    }

    fn before_build(&mut self) -> Result<()> {
        self.clean()
    }

    fn after_build(&mut self) -> Result<()> {
        self.compress().map(|_| ())
    }
}
