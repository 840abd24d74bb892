use crate::config::{FileName, Options};
use crate::context::Context;
use crate::result::Result;
use crate::tpl::Tpl;
use crate::utils;
use serde::Deserialize;
use std::fs;
use std::path::PathBuf;
use time::OffsetDateTime;

#[derive(Debug, Deserialize)]
pub struct CargoToml {
    #[serde(default)]
    pub package: Option<Package>,
}

#[derive(Debug, Deserialize)]
pub struct Package {
    pub name: String,
    /// Either a plain string or `{ workspace = true }`
    #[serde(default)]
    pub version: Option<toml::Value>,
    #[serde(default)]
    pub metadata: Option<Metadata>,
}

#[derive(Debug, Deserialize, Default)]
pub struct Metadata {
    #[serde(rename = "compress-dist", default)]
    pub compress_dist: Option<CompressDistConfig>,
}

/// `[package.metadata.compress-dist]`
#[derive(Debug, Deserialize, Default, Clone)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct CompressDistConfig {
    #[serde(default)]
    pub file_name: Option<String>,

    #[serde(default)]
    pub dist_dir: Option<String>,

    #[serde(default)]
    pub output_dir: Option<String>,

    #[serde(default)]
    pub delete_dist_after_compress: Option<bool>,

    #[serde(default)]
    pub include_root: Option<bool>,

    #[serde(default)]
    pub delete_dist_before_compress: Option<bool>,

    #[serde(default)]
    pub build: Vec<String>,
}

/// Parsed and processed manifest information
#[derive(Debug)]
pub struct Manifest {
    pub name: String,
    pub version: Option<String>,
    /// Archive name template, rendered when the archive is created
    pub file_name: String,
    pub dist_dir: PathBuf,
    pub output_dir: PathBuf,
    pub delete_dist_after_compress: bool,
    pub include_root: bool,
    pub delete_dist_before_compress: bool,
    pub build_commands: Vec<String>,
    tpl: Tpl,
}

impl Manifest {
    /// Load the plugin configuration for the project described by `ctx`
    ///
    /// Every setting is optional: a Cargo.toml without a
    /// `[package.metadata.compress-dist]` section, or no Cargo.toml at all,
    /// yields the defaults.
    pub fn load(ctx: &Context) -> Result<Self> {
        let package = match &ctx.manifest_path {
            Some(path) => {
                let content = fs::read_to_string(path)?;
                let cargo_toml: CargoToml = toml::from_str(&content)?;
                cargo_toml.package
            }
            None => None,
        };

        let (name, version, config) = match package {
            Some(package) => {
                let version = package
                    .version
                    .as_ref()
                    .and_then(|v| v.as_str())
                    .map(str::to_string);
                let config = package
                    .metadata
                    .and_then(|m| m.compress_dist)
                    .unwrap_or_default();
                (package.name, version, config)
            }
            None => {
                let name = ctx
                    .base_dir
                    .canonicalize()
                    .ok()
                    .and_then(|p| p.file_name().map(|n| n.to_string_lossy().into_owned()))
                    .unwrap_or_else(|| "dist".to_string());
                (name, None, CompressDistConfig::default())
            }
        };

        Ok(Self::from_config(name, version, config))
    }

    fn from_config(name: String, version: Option<String>, config: CompressDistConfig) -> Self {
        // Setup template processor
        let mut tpl = Tpl::new();
        tpl.register("NAME", &name);
        if let Some(version) = &version {
            tpl.register("VERSION", version);
        }
        tpl.register("PLATFORM", utils::platform_string());

        let dist_dir = config
            .dist_dir
            .map(|d| PathBuf::from(tpl.parse(&d)))
            .unwrap_or_else(|| PathBuf::from("dist"));

        let output_dir = config
            .output_dir
            .map(|d| PathBuf::from(tpl.parse(&d)))
            .unwrap_or_default();

        Manifest {
            name,
            version,
            file_name: config.file_name.unwrap_or_else(|| "dist".to_string()),
            dist_dir,
            output_dir,
            delete_dist_after_compress: config.delete_dist_after_compress.unwrap_or(false),
            include_root: config.include_root.unwrap_or(false),
            delete_dist_before_compress: config.delete_dist_before_compress.unwrap_or(false),
            build_commands: tpl.parse_vec(&config.build),
            tpl,
        }
    }

    /// Archive name; templates using `$TIMESTAMP` or `$DATE` are rendered
    /// each time an archive is created
    pub fn file_name(&self) -> FileName {
        if Tpl::is_time_dependent(&self.file_name) {
            let tpl = self.tpl.clone();
            let template = self.file_name.clone();
            FileName::generator(move || tpl.parse_at(&template, OffsetDateTime::now_utc()))
        } else {
            FileName::Literal(self.tpl.parse(&self.file_name))
        }
    }

    /// Plugin options described by this manifest
    pub fn options(&self) -> Options {
        Options::new()
            .file_name(self.file_name())
            .dist_dir(&self.dist_dir)
            .output_dir(&self.output_dir)
            .delete_dist_after_compress(self.delete_dist_after_compress)
            .include_root(self.include_root)
            .delete_dist_before_compress(self.delete_dist_before_compress)
    }
}
