use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Config file looked up in the working directory when none is given.
pub const DEFAULT_FILE: &str = "sitegen.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },
}

/// Where a site's inputs live and where it is written.
///
/// Every field has a default, so an empty file (or no file at all) describes
/// the conventional `content/`, `static/`, `template.html`, `public/` layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub content_dir: PathBuf,
    pub static_dir: PathBuf,
    pub template_path: PathBuf,
    pub output_dir: PathBuf,
    pub build: BuildConfig,
    pub render: RenderConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildConfig {
    /// Empty the output directory before writing.
    pub clean_output: bool,
    /// Abort on the first page that fails to convert.
    pub fail_fast: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub escape_attributes: bool,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            content_dir: PathBuf::from("content"),
            static_dir: PathBuf::from("static"),
            template_path: PathBuf::from("template.html"),
            output_dir: PathBuf::from("public"),
            build: BuildConfig::default(),
            render: RenderConfig::default(),
        }
    }
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            clean_output: true,
            fail_fast: true,
        }
    }
}

impl SiteConfig {
    /// Loads a config file, or `Ok(None)` when it does not exist.
    ///
    /// Paths are shell-expanded (`~`, `$VAR`) and relative ones are resolved
    /// against the directory holding the config file.
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let config: SiteConfig =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        let base = config_path.parent().unwrap_or(Path::new(""));
        Ok(Some(config.expand_paths().resolve_paths(base)))
    }

    /// Like [`SiteConfig::load_from_path`] but falls back to the defaults.
    pub fn load_or_default<P: AsRef<Path>>(config_path: P) -> Result<Self, ConfigError> {
        Ok(Self::load_from_path(config_path)?.unwrap_or_default())
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> anyhow::Result<()> {
        let config_path = config_path.as_ref();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    /// Joins every relative path onto `base`. Absolute paths are kept.
    pub fn resolve_paths(mut self, base: &Path) -> Self {
        for path in self.paths_mut() {
            if path.is_relative() {
                *path = base.join(&*path);
            }
        }
        self
    }

    fn expand_paths(mut self) -> Self {
        for path in self.paths_mut() {
            if let Some(expanded) = Self::expand_path(path) {
                *path = expanded;
            }
        }
        self
    }

    fn paths_mut(&mut self) -> [&mut PathBuf; 4] {
        [
            &mut self.content_dir,
            &mut self.static_dir,
            &mut self.template_path,
            &mut self.output_dir,
        ]
    }

    fn expand_path(path: &Path) -> Option<PathBuf> {
        let path_str = path.to_string_lossy();
        match shellexpand::full(&path_str) {
            Ok(expanded) => Some(PathBuf::from(expanded.as_ref())),
            Err(_) => None,
        }
    }
}
