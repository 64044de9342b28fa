//! # forge_config
//!
//! Configuration resolution for commit-forge.
//!
//! A configuration starts from built-in defaults. If a candidate file is found
//! in the working directory (or up to three parents), it is parsed, merged
//! over the defaults one level deep, and shape-checked. A file that fails any
//! of those steps is discarded wholesale with a warning.
//!
//! ## Example
//!
//! ```rust,no_run
//! use forge_config::ConfigResolver;
//!
//! let mut resolver = ConfigResolver::from_current_dir().unwrap();
//! let config = resolver.resolve();
//! println!("max subject length: {}", config.subject.max_length);
//! ```

pub mod error;
pub mod loader;
pub mod merge;
pub mod model;
pub mod resolver;

pub use error::{ConfigError, ConfigResult};
pub use loader::{
    find_config_file, load_config_file, ConfigFormat, ScriptRuntime, CONFIG_FILE_NAMES,
};
pub use merge::{apply_override, merge_over, validate_shape};
pub use model::{Configuration, DescriptionConfig, EmojiConfig, JiraConfig, SubjectConfig};
pub use resolver::{ConfigResolver, ConfigSource};
