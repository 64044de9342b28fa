//! Conversion of raw commit fields into canonical form.

use forge_config::Configuration;
use tracing::debug;

use crate::error::ForgeResult;
use crate::input::{CommitInput, RawCommitInput};
use crate::validators::{ensure_valid_inputs, is_missing};

/// Options for [`gather_from_partial_input`].
#[derive(Debug, Clone, Copy)]
pub struct GatherOptions {
    /// Validate immediately and fail on any problem.
    pub require_all: bool,
}

impl Default for GatherOptions {
    fn default() -> Self {
        Self { require_all: true }
    }
}

/// Expand literal two-character `\n` escapes into newlines.
pub fn expand_newline_escapes(text: &str) -> String {
    text.replace("\\n", "\n")
}

/// Normalize every field of `raw`.
///
/// - `jira`: trimmed and uppercased, and dropped entirely when JIRA is disabled.
/// - `category`: trimmed and lowercased.
/// - `message`: trimmed.
/// - `description`: escapes expanded, trimmed, and dropped when blank.
pub fn normalize(raw: RawCommitInput, config: &Configuration) -> CommitInput {
    let jira = if config.jira.enabled {
        raw.jira.map(|j| j.trim().to_uppercase())
    } else {
        None
    };

    let description = raw
        .description
        .map(|d| expand_newline_escapes(&d).trim().to_string())
        .filter(|d| !d.is_empty());

    CommitInput {
        jira,
        category: raw.category.map(|c| c.trim().to_lowercase()),
        message: raw.message.map(|m| m.trim().to_string()),
        description,
    }
}

/// Normalize `raw` and, when `require_all` is set, reject it on any problem.
pub fn gather_from_partial_input(
    raw: RawCommitInput,
    config: &Configuration,
    options: GatherOptions,
) -> ForgeResult<CommitInput> {
    let normalized = normalize(raw, config);

    if options.require_all {
        ensure_valid_inputs(&normalized, config)?;
    }

    debug!("Gathered commit input: {:?}", normalized);
    Ok(normalized)
}

/// True when a field the configuration needs is still absent or blank.
pub fn needs_more_input(input: &CommitInput, config: &Configuration) -> bool {
    (config.jira.enabled && is_missing(input.jira()))
        || is_missing(input.category())
        || is_missing(input.message())
}
