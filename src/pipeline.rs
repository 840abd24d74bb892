use crate::plugin::BuildPlugin;
use crate::result::Result;
use std::path::PathBuf;

/// Fires plugin hooks around a build step
///
/// Every registered plugin sees the project root first, then all
/// `before_build` hooks run in registration order, then the build itself,
/// then all `after_build` hooks. The first error stops the run.
pub struct Pipeline {
    root: PathBuf,
    plugins: Vec<Box<dyn BuildPlugin>>,
}

impl Pipeline {
    pub fn new<P: Into<PathBuf>>(root: P) -> Self {
        Self {
            root: root.into(),
            plugins: Vec::new(),
        }
    }

    pub fn register<P: BuildPlugin + 'static>(&mut self, plugin: P) -> &mut Self {
        self.plugins.push(Box::new(plugin));
        self
    }

    pub fn run<F>(&mut self, build: F) -> Result<()>
    where
        F: FnOnce() -> Result<()>,
    {
        for plugin in &mut self.plugins {
            plugin.config_resolved(&self.root);
        }

        for plugin in &mut self.plugins {
            plugin.before_build()?;
        }

        build()?;

        for plugin in &mut self.plugins {
            plugin.after_build()?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Options;
    use crate::compress::CompressDist;
    use crate::error::Error;
    use crate::reporter::Reporter;
    use std::fs;
    use std::path::Path;
    use std::sync::{Arc, Mutex};

    struct Quiet;

    impl Reporter for Quiet {
        fn info(&self, _: &str) {}
        fn start(&self, _: &str) {}
        fn success(&self, _: &str) {}
        fn warn(&self, _: &str) {}
        fn error(&self, _: &str) {}
    }

    struct Tracer {
        label: &'static str,
        events: Arc<Mutex<Vec<String>>>,
    }

    impl BuildPlugin for Tracer {
        fn name(&self) -> &str {
            self.label
        }

        fn config_resolved(&mut self, root: &Path) {
            self.events
                .lock()
                .unwrap()
                .push(format!("{}:root:{}", self.label, root.display()));
        }

        fn before_build(&mut self) -> Result<()> {
            self.events.lock().unwrap().push(format!("{}:before", self.label));
            Ok(())
        }

        fn after_build(&mut self) -> Result<()> {
            self.events.lock().unwrap().push(format!("{}:after", self.label));
            Ok(())
        }
    }

    #[test]
    fn test_hook_order() {
        let events = Arc::new(Mutex::new(Vec::new()));
        let mut pipeline = Pipeline::new("/project");
        pipeline
            .register(Tracer { label: "a", events: Arc::clone(&events) })
            .register(Tracer { label: "b", events: Arc::clone(&events) });

        let build_events = Arc::clone(&events);
        pipeline
            .run(move || {
                build_events.lock().unwrap().push("build".to_string());
                Ok(())
            })
            .unwrap();

        assert_eq!(
            *events.lock().unwrap(),
            vec![
                "a:root:/project",
                "b:root:/project",
                "a:before",
                "b:before",
                "build",
                "a:after",
                "b:after",
            ]
        );
    }

    #[test]
    fn test_failed_build_skips_after_hooks() {
        let events = Arc::new(Mutex::new(Vec::new()));
        let mut pipeline = Pipeline::new("/project");
        pipeline.register(Tracer { label: "a", events: Arc::clone(&events) });

        let result = pipeline.run(|| Err(Error::CommandFailed("build".to_string())));

        assert!(matches!(result, Err(Error::CommandFailed(_))));
        assert!(!events.lock().unwrap().contains(&"a:after".to_string()));
    }

    #[test]
    fn test_full_build_cycle() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().to_path_buf();
        fs::create_dir_all(root.join("dist")).unwrap();
        fs::write(root.join("dist/stale.txt"), "old build").unwrap();

        let options = Options::new()
            .delete_dist_before_compress(true)
            .delete_dist_after_compress(true)
            .output_dir("setup")
            .file_name("site");
        let mut pipeline = Pipeline::new(&root);
        pipeline.register(CompressDist::new(options).with_reporter(Quiet));

        let dist = root.join("dist");
        pipeline
            .run(|| {
                // The stale output must already be gone when the build starts.
                assert!(!dist.exists());
                fs::create_dir_all(dist.join("assets"))?;
                fs::write(dist.join("index.html"), "<h1>new</h1>")?;
                fs::write(dist.join("assets/app.js"), "run()")?;
                Ok(())
            })
            .unwrap();

        assert!(root.join("setup/site.zip").is_file());
        assert!(!dist.exists());
    }
}
