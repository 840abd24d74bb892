use crate::result::Result;
use std::path::Path;

/// Integration points fired by a build pipeline
///
/// A pipeline calls [`BuildPlugin::config_resolved`] once with the project
/// root, then [`BuildPlugin::before_build`] before the build starts and
/// [`BuildPlugin::after_build`] once the build output is final. An error
/// returned from either hook fails the build.
pub trait BuildPlugin {
    fn name(&self) -> &str;

    fn config_resolved(&mut self, root: &Path);

    fn before_build(&mut self) -> Result<()> {
        Ok(())
    }

    fn after_build(&mut self) -> Result<()> {
        Ok(())
    }
}
