//! # forge_grammar
//!
//! The commit subject grammar for commit-forge:
//!
//! ```text
//! [TB-123] ✨ feat: add login
//! ```
//!
//! This crate provides:
//! - **Validators**: per-field checks returning human-readable problems
//! - **Normalizer**: canonical trimming/casing of structured input
//! - **Lint**: structural scan of the first line plus field checks
//! - **Formatter**: the inverse of lint, rendering input into message text
//! - **Intake**: completing partial input through a [`Prompter`]
//!
//! The grammar is conditional on [`forge_config::Configuration`]: the JIRA
//! segment may be required, optional, or absent, and the category glyph may
//! be on or off. For any input that passes validation,
//! `lint(&build_message(&input, &cfg)?, &cfg).ok` holds.
//!
//! ## Example
//!
//! ```rust
//! use forge_config::Configuration;
//! use forge_grammar::{build_message, lint, normalize, RawCommitInput};
//!
//! let config = Configuration::default();
//! let input = normalize(
//!     RawCommitInput::new().jira("tb-123").category("FEAT").message(" add login "),
//!     &config,
//! );
//! let message = build_message(&input, &config).unwrap();
//! assert_eq!(message, "[TB-123] ✨ feat: add login\n");
//!
//! let report = lint(&message, &config);
//! assert!(report.ok);
//! ```

pub mod category;
pub mod error;
pub mod formatter;
pub mod input;
pub mod intake;
pub mod lint;
pub mod normalizer;
pub mod parser;
pub mod validators;

pub use category::Category;
pub use error::{ForgeError, ForgeResult};
pub use formatter::{build_message, build_subject, format_category};
pub use input::{CommitInput, RawCommitInput};
pub use intake::{resolve_for_commit, Prompter};
pub use lint::{format_example, lint, LintReport};
pub use normalizer::{
    expand_newline_escapes, gather_from_partial_input, needs_more_input, normalize, GatherOptions,
};
pub use parser::{parse_subject_line, PatternFamily, SubjectParse, SubjectParts};
pub use validators::{
    ensure_valid_inputs, is_issue_key, validate_category, validate_description, validate_inputs,
    validate_jira, validate_message, NO_JIRA,
};
