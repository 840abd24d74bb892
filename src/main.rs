mod args;

use args::Args;
use compress_dist::result::Result;
use compress_dist::{CompressDist, Context, Manifest, Pipeline, cmd, utils};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    // Parse command-line arguments
    let args = Args::parse();

    let ctx = match utils::find_manifest(args.path.as_deref())? {
        Some(manifest_path) => Context::new(manifest_path, args.verbose),
        None => {
            let base_dir = match &args.path {
                Some(path) => path.clone(),
                None => std::env::current_dir()?,
            };
            Context::without_manifest(base_dir, args.verbose)
        }
    };

    cliclack::intro("compress-dist")?;

    // Load manifest
    let mut manifest = {
        let spinner = cliclack::spinner();
        spinner.start("Loading manifest...");
        match Manifest::load(&ctx) {
            Ok(m) => {
                spinner.stop(format!("Loaded configuration for {}", m.name));
                m
            }
            Err(e) => {
                spinner.error("Failed to load manifest");
                return Err(e);
            }
        }
    };

    args.apply_to(&mut manifest);

    let mut pipeline = Pipeline::new(ctx.base_dir.clone());
    pipeline.register(CompressDist::new(manifest.options()));

    let build_commands = if args.no_build {
        Vec::new()
    } else {
        manifest.build_commands.clone()
    };

    pipeline.run(|| {
        if build_commands.is_empty() {
            return Ok(());
        }

        let spinner = cliclack::spinner();
        spinner.start("Building...");
        match cmd::run_build(&ctx, &build_commands) {
            Ok(()) => {
                spinner.stop("Build completed");
                Ok(())
            }
            Err(e) => {
                spinner.error("Build failed");
                Err(e)
            }
        }
    })?;

    cliclack::outro("Done")?;
    Ok(())
}
