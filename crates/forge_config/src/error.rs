//! Error types for configuration loading.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors that can occur while loading a configuration file.
///
/// None of these escape [`crate::ConfigResolver::resolve`]; the resolver logs
/// them and falls back to the defaults.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Unsupported config file format: {0}")]
    UnsupportedFormat(PathBuf),

    #[error("Script config {0} requires explicit opt-in (--allow-script-config)")]
    ScriptDisabled(PathBuf),

    #[error("Script config evaluation failed for {path}: {message}")]
    ScriptFailed { path: PathBuf, message: String },

    #[error("Configuration has errors: {}", .0.join(", "))]
    Invalid(Vec<String>),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),
}
