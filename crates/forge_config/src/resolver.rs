//! Memoized resolution of the effective configuration.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{info, warn};

use crate::error::ConfigResult;
use crate::loader::{find_config_file, load_config_file};
use crate::merge::apply_override;
use crate::model::Configuration;

/// Where the last resolved configuration came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// No candidate file was found.
    Defaults,
    /// A user file was found and applied.
    File(PathBuf),
    /// A user file was found but rejected; defaults are in effect.
    Fallback { path: PathBuf, reason: String },
}

/// Resolves and caches the configuration for one working directory.
///
/// The cache lives in this value rather than in process-global state, so each
/// caller (and each test) owns its own resolution.
#[derive(Debug)]
pub struct ConfigResolver {
    start_dir: PathBuf,
    allow_scripts: bool,
    cached: Option<(Arc<Configuration>, ConfigSource)>,
}

impl ConfigResolver {
    /// Create a resolver that searches from `start_dir`.
    pub fn new(start_dir: impl Into<PathBuf>) -> Self {
        Self {
            start_dir: start_dir.into(),
            allow_scripts: false,
            cached: None,
        }
    }

    /// Create a resolver rooted at the process working directory.
    pub fn from_current_dir() -> ConfigResult<Self> {
        Ok(Self::new(std::env::current_dir()?))
    }

    /// Opt in to evaluating `.js`/`.ts` config files in a child process.
    pub fn allow_script_configs(mut self, allow: bool) -> Self {
        self.allow_scripts = allow;
        self
    }

    pub fn start_dir(&self) -> &Path {
        &self.start_dir
    }

    /// Return the effective configuration, resolving it on first use.
    pub fn resolve(&mut self) -> Arc<Configuration> {
        if let Some((config, _)) = &self.cached {
            return Arc::clone(config);
        }

        let (config, source) = self.resolve_uncached();
        let config = Arc::new(config);
        self.cached = Some((Arc::clone(&config), source));
        config
    }

    /// Drop the cached configuration so the next `resolve` re-reads disk.
    pub fn reset(&mut self) {
        self.cached = None;
    }

    pub fn reload(&mut self) -> Arc<Configuration> {
        self.reset();
        self.resolve()
    }

    /// Source of the cached configuration, if one has been resolved.
    pub fn source(&self) -> Option<&ConfigSource> {
        self.cached.as_ref().map(|(_, source)| source)
    }

    fn resolve_uncached(&self) -> (Configuration, ConfigSource) {
        let Some(path) = find_config_file(&self.start_dir) else {
            return (Configuration::default(), ConfigSource::Defaults);
        };

        let result = load_config_file(&path, self.allow_scripts).and_then(apply_override);
        match result {
            Ok(config) => {
                info!("Using configuration from {}", path.display());
                (config, ConfigSource::File(path))
            }
            Err(e) => {
                warn!(
                    "Failed to load config file \"{}\": {}. Using defaults.",
                    path.display(),
                    e
                );
                (
                    Configuration::default(),
                    ConfigSource::Fallback {
                        path,
                        reason: e.to_string(),
                    },
                )
            }
        }
    }
}
