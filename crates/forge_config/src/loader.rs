//! Config file discovery and format-specific loading.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use serde_json::Value;
use tracing::debug;

use crate::error::{ConfigError, ConfigResult};

/// Candidate file names, in priority order.
pub const CONFIG_FILE_NAMES: [&str; 11] = [
    ".commit-forge.json",
    "commit-forge.config.json",
    ".commit-forge.yaml",
    ".commit-forge.yml",
    "commit-forge.config.yaml",
    ".commit-forge.toml",
    "commit-forge.config.toml",
    ".commit-forge.ts",
    "commit-forge.config.ts",
    ".commit-forge.js",
    "commit-forge.config.js",
];

/// Number of parent directories searched after the start directory.
pub const PARENT_SEARCH_DEPTH: usize = 3;

/// Prints the module's export (or the result of calling it) as JSON.
const SCRIPT_SHIM: &str = "\
const m = require(require('path').resolve(process.argv[process.argv.length - 1])); \
const c = m && m.__esModule && m.default !== undefined ? m.default : m; \
const v = typeof c === 'function' ? c() : c; \
process.stdout.write(JSON.stringify(v === undefined ? null : v));";

/// Find the first candidate file in `start` or up to three of its parents.
pub fn find_config_file(start: &Path) -> Option<PathBuf> {
    let mut dir = Some(start);

    for _ in 0..=PARENT_SEARCH_DEPTH {
        let current = dir?;
        for name in CONFIG_FILE_NAMES {
            let candidate = current.join(name);
            if candidate.is_file() {
                debug!("Found config file {:?}", candidate);
                return Some(candidate);
            }
        }
        dir = current.parent();
    }

    None
}

/// The supported on-disk formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Json,
    Yaml,
    Toml,
    JavaScript,
    TypeScript,
}

impl ConfigFormat {
    /// Pick the format from a file extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()? {
            "json" => Some(Self::Json),
            "yaml" | "yml" => Some(Self::Yaml),
            "toml" => Some(Self::Toml),
            "js" | "cjs" => Some(Self::JavaScript),
            "ts" => Some(Self::TypeScript),
            _ => None,
        }
    }
}

/// Interpreter used to evaluate script configs in a child process.
#[derive(Debug, Clone)]
pub struct ScriptRuntime {
    pub program: String,
    pub args: Vec<String>,
}

impl ScriptRuntime {
    /// Any program that accepts `-e <source> <path>` and prints JSON.
    pub fn new<I, S>(program: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    pub fn node() -> Self {
        Self::new("node", Vec::<String>::new())
    }

    pub fn tsx() -> Self {
        Self::new("npx", ["--no-install", "tsx"])
    }

    /// The runtime for a script format, `None` for data formats.
    pub fn for_format(format: ConfigFormat) -> Option<Self> {
        match format {
            ConfigFormat::JavaScript => Some(Self::node()),
            ConfigFormat::TypeScript => Some(Self::tsx()),
            ConfigFormat::Json | ConfigFormat::Yaml | ConfigFormat::Toml => None,
        }
    }

    /// Evaluate `path` and parse what the shim prints.
    pub fn evaluate(&self, path: &Path) -> ConfigResult<Value> {
        debug!("Evaluating script config {:?} with {}", path, self.program);

        let output = Command::new(&self.program)
            .args(&self.args)
            .arg("-e")
            .arg(SCRIPT_SHIM)
            .arg(path)
            .output()
            .map_err(|e| ConfigError::ScriptFailed {
                path: path.to_path_buf(),
                message: format!("failed to start {}: {}", self.program, e),
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(ConfigError::ScriptFailed {
                path: path.to_path_buf(),
                message: stderr.trim().to_string(),
            });
        }

        Ok(serde_json::from_slice(&output.stdout)?)
    }
}

/// Load a config file into a JSON tree.
///
/// Script formats are only evaluated when `allow_scripts` is set.
pub fn load_config_file(path: &Path, allow_scripts: bool) -> ConfigResult<Value> {
    let format = ConfigFormat::from_path(path)
        .ok_or_else(|| ConfigError::UnsupportedFormat(path.to_path_buf()))?;

    match format {
        ConfigFormat::Json => Ok(serde_json::from_str(&read_file(path)?)?),
        ConfigFormat::Yaml => Ok(serde_yaml::from_str(&read_file(path)?)?),
        ConfigFormat::Toml => Ok(toml::from_str(&read_file(path)?)?),
        ConfigFormat::JavaScript => evaluate_script(path, &ScriptRuntime::node(), allow_scripts),
        ConfigFormat::TypeScript => evaluate_script(path, &ScriptRuntime::tsx(), allow_scripts),
    }
}

fn read_file(path: &Path) -> ConfigResult<String> {
    fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })
}

fn evaluate_script(
    path: &Path,
    runtime: &ScriptRuntime,
    allow_scripts: bool,
) -> ConfigResult<Value> {
    if !allow_scripts {
        return Err(ConfigError::ScriptDisabled(path.to_path_buf()));
    }
    runtime.evaluate(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_find_prefers_earlier_candidates() {
        let temp = tempdir().unwrap();
        fs::write(temp.path().join("commit-forge.config.json"), "{}").unwrap();
        fs::write(temp.path().join(".commit-forge.json"), "{}").unwrap();

        let found = find_config_file(temp.path()).unwrap();
        assert_eq!(found.file_name().unwrap(), ".commit-forge.json");
    }

    #[test]
    fn test_find_walks_up_three_parents() {
        let temp = tempdir().unwrap();
        let nested = temp.path().join("a").join("b").join("c");
        fs::create_dir_all(&nested).unwrap();
        fs::write(temp.path().join(".commit-forge.yaml"), "emoji:\n  enabled: false\n").unwrap();

        let found = find_config_file(&nested).unwrap();
        assert_eq!(found, temp.path().join(".commit-forge.yaml"));
    }

    #[test]
    fn test_find_stops_after_three_parents() {
        let temp = tempdir().unwrap();
        let nested = temp.path().join("a").join("b").join("c").join("d");
        fs::create_dir_all(&nested).unwrap();
        fs::write(temp.path().join(".commit-forge.json"), "{}").unwrap();

        assert!(find_config_file(&nested).is_none());
    }

    #[test]
    fn test_load_each_data_format() {
        let temp = tempdir().unwrap();

        let json = temp.path().join("a.json");
        fs::write(&json, r#"{"subject": {"maxLength": 50}}"#).unwrap();
        let yaml = temp.path().join("b.yml");
        fs::write(&yaml, "subject:\n  maxLength: 50\n").unwrap();
        let toml_path = temp.path().join("c.toml");
        fs::write(&toml_path, "[subject]\nmaxLength = 50\n").unwrap();

        for path in [json, yaml, toml_path] {
            let value = load_config_file(&path, false).unwrap();
            assert_eq!(value["subject"]["maxLength"], Value::from(50), "{:?}", path);
        }
    }

    #[test]
    fn test_scripts_need_opt_in() {
        let temp = tempdir().unwrap();
        let script = temp.path().join(".commit-forge.js");
        fs::write(&script, "module.exports = { emoji: { enabled: false } };").unwrap();

        let err = load_config_file(&script, false).unwrap_err();
        assert!(matches!(err, ConfigError::ScriptDisabled(_)));
    }

    #[test]
    fn test_runtime_per_format() {
        assert_eq!(
            ScriptRuntime::for_format(ConfigFormat::JavaScript).unwrap().program,
            "node"
        );
        let tsx = ScriptRuntime::for_format(ConfigFormat::TypeScript).unwrap();
        assert_eq!(tsx.program, "npx");
        assert_eq!(tsx.args, vec!["--no-install", "tsx"]);
        assert!(ScriptRuntime::for_format(ConfigFormat::Yaml).is_none());
    }

    // `sh -c <body>` takes the trailing `-e <shim> <path>` as positional
    // arguments and ignores them, standing in for node.
    #[cfg(unix)]
    fn shell_runtime(body: &str) -> ScriptRuntime {
        ScriptRuntime::new("sh", ["-c", body])
    }

    #[cfg(unix)]
    #[test]
    fn test_runtime_output_parsed_as_json() {
        let runtime = shell_runtime(r#"printf '{"emoji":{"enabled":false}}'"#);
        let value = runtime.evaluate(Path::new("commit-forge.config.js")).unwrap();
        assert_eq!(value["emoji"]["enabled"], Value::Bool(false));
    }

    #[cfg(unix)]
    #[test]
    fn test_runtime_failure_carries_stderr() {
        let runtime = shell_runtime("echo 'boom: config threw' >&2; exit 3");
        let err = runtime.evaluate(Path::new("commit-forge.config.js")).unwrap_err();
        match err {
            ConfigError::ScriptFailed { message, .. } => {
                assert_eq!(message, "boom: config threw");
            }
            other => panic!("expected ScriptFailed, got {:?}", other),
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_runtime_non_json_output_rejected() {
        let runtime = shell_runtime("printf 'not json'");
        let err = runtime.evaluate(Path::new("commit-forge.config.js")).unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
    }

    #[test]
    fn test_missing_runtime_is_script_failure() {
        let runtime = ScriptRuntime::new("commit-forge-no-such-runtime", Vec::<String>::new());
        let err = runtime.evaluate(Path::new("commit-forge.config.js")).unwrap_err();
        assert!(matches!(err, ConfigError::ScriptFailed { .. }));
    }

    #[test]
    fn test_unknown_extension_rejected() {
        let err = load_config_file(Path::new("config.ini"), true).unwrap_err();
        assert!(matches!(err, ConfigError::UnsupportedFormat(_)));
    }
}
