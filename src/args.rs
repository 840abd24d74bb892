use clap::{Arg, ArgAction, ArgMatches, Command};
use compress_dist::Manifest;
use std::ffi::OsString;
use std::path::PathBuf;

/// Command-line arguments for the compress-dist tool
///
/// Values given here take precedence over `[package.metadata.compress-dist]`.
#[derive(Debug)]
pub struct Args {
    /// Enable verbose output
    pub verbose: bool,

    /// Skip build commands (package the existing output)
    pub no_build: bool,

    /// Path to Cargo.toml or the project directory
    pub path: Option<PathBuf>,

    /// Archive name template
    pub file_name: Option<String>,

    /// Directory to package
    pub dist_dir: Option<PathBuf>,

    /// Directory to write the archive into
    pub output_dir: Option<PathBuf>,

    /// Nest entries under the packaged directory's name
    pub include_root: Option<bool>,

    /// Remove the packaged directory before building
    pub delete_before: Option<bool>,

    /// Remove the packaged directory after archiving
    pub delete_after: Option<bool>,
}

impl Args {
    /// Parse command-line arguments
    pub fn parse() -> Self {
        Self::parse_from(std::env::args_os())
    }

    /// Parse from an explicit argument list
    ///
    /// Cargo runs subcommands as `cargo-compress-dist compress-dist ...`;
    /// the repeated subcommand name is dropped.
    pub fn parse_from<I, T>(args: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let mut args: Vec<OsString> = args.into_iter().map(Into::into).collect();
        if args.get(1).is_some_and(|a| a == "compress-dist") {
            args.remove(1);
        }

        let matches = command().get_matches_from(args);

        Self {
            verbose: matches.get_flag("verbose"),
            no_build: matches.get_flag("no-build"),
            path: matches.get_one::<String>("path").map(PathBuf::from),
            file_name: matches.get_one::<String>("file-name").cloned(),
            dist_dir: matches.get_one::<String>("dist-dir").map(PathBuf::from),
            output_dir: matches.get_one::<String>("output-dir").map(PathBuf::from),
            include_root: toggle(&matches, "include-root"),
            delete_before: toggle(&matches, "delete-before"),
            delete_after: toggle(&matches, "delete-after"),
        }
    }

    /// Override manifest settings with the values given on the command line
    pub fn apply_to(&self, manifest: &mut Manifest) {
        if let Some(file_name) = &self.file_name {
            manifest.file_name = file_name.clone();
        }
        if let Some(dist_dir) = &self.dist_dir {
            manifest.dist_dir = dist_dir.clone();
        }
        if let Some(output_dir) = &self.output_dir {
            manifest.output_dir = output_dir.clone();
        }
        if let Some(include_root) = self.include_root {
            manifest.include_root = include_root;
        }
        if let Some(delete_before) = self.delete_before {
            manifest.delete_dist_before_compress = delete_before;
        }
        if let Some(delete_after) = self.delete_after {
            manifest.delete_dist_after_compress = delete_after;
        }
    }
}

/// `--flag` / `--no-flag` pair; `None` when neither was given
fn toggle(matches: &ArgMatches, name: &str) -> Option<bool> {
    if matches.get_flag(name) {
        Some(true)
    } else if matches.get_flag(&format!("no-{}", name)) {
        Some(false)
    } else {
        None
    }
}

fn flag_pair(
    name: &'static str,
    no_name: &'static str,
    help: &'static str,
    no_help: &'static str,
) -> [Arg; 2] {
    [
        Arg::new(name)
            .long(name)
            .action(ArgAction::SetTrue)
            .overrides_with(no_name)
            .help(help),
        Arg::new(no_name)
            .long(no_name)
            .action(ArgAction::SetTrue)
            .overrides_with(name)
            .help(no_help),
    ]
}

fn command() -> Command {
    Command::new("compress-dist")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Package a project's build output into a zip archive")
        .arg(
            Arg::new("path")
                .short('p')
                .long("path")
                .value_name("PATH")
                .help("Path to Cargo.toml or the project directory")
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .action(ArgAction::SetTrue)
                .help("Enable verbose output")
        )
        .arg(
            Arg::new("no-build")
                .long("no-build")
                .action(ArgAction::SetTrue)
                .help("Skip build commands (package the existing output)")
        )
        .arg(
            Arg::new("file-name")
                .short('n')
                .long("file-name")
                .value_name("NAME")
                .env("COMPRESS_DIST_FILE_NAME")
                .help("Archive name without extension; supports $NAME, $VERSION, $PLATFORM, $DATE and $TIMESTAMP")
        )
        .arg(
            Arg::new("dist-dir")
                .short('d')
                .long("dist-dir")
                .value_name("DIR")
                .help("Directory to package, relative to the project root")
        )
        .arg(
            Arg::new("output-dir")
                .short('o')
                .long("output-dir")
                .value_name("DIR")
                .help("Directory to write the archive into, relative to the project root")
        )
        .args(flag_pair(
            "include-root",
            "no-include-root",
            "Nest archive entries under the packaged directory's name",
            "Store archive entries at the top level",
        ))
        .args(flag_pair(
            "delete-before",
            "no-delete-before",
            "Delete the packaged directory before building",
            "Keep the packaged directory before building",
        ))
        .args(flag_pair(
            "delete-after",
            "no-delete-after",
            "Delete the packaged directory after archiving",
            "Keep the packaged directory after archiving",
        ))
}
