//! Field validators.
//!
//! Each validator takes an already-normalized value and returns `None` when
//! the value is acceptable, or a human-readable problem otherwise.

use std::sync::LazyLock;

use forge_config::Configuration;
use regex::Regex;

use crate::category::Category;
use crate::error::{ForgeError, ForgeResult};
use crate::input::CommitInput;

/// Sentinel accepted in place of an issue key when the configuration allows it.
pub const NO_JIRA: &str = "NO-JIRA";

static ISSUE_KEY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z]+-[0-9]+$").expect("issue key pattern is valid"));

/// True for `ABC-123` style keys. Does not accept the `NO-JIRA` sentinel.
pub fn is_issue_key(value: &str) -> bool {
    ISSUE_KEY.is_match(value)
}

/// True when a field is absent or supplied blank.
pub(crate) fn is_missing(value: Option<&str>) -> bool {
    value.map_or(true, str::is_empty)
}

pub fn validate_jira(jira: Option<&str>, config: &Configuration) -> Option<String> {
    if !config.jira.enabled {
        return None;
    }

    let jira = match jira {
        Some(value) if !value.is_empty() => value,
        _ if config.jira.required => {
            return Some("Missing JIRA id. Provide via --jira.".to_string())
        }
        _ => return None,
    };

    if jira == NO_JIRA {
        if !config.jira.allow_no_jira {
            return Some("NO-JIRA is not allowed. Please provide a valid JIRA id.".to_string());
        }
        return None;
    }

    if !is_issue_key(jira) {
        return Some(format!("Invalid JIRA id \"{}\". Use format ABC-123.", jira));
    }

    None
}

pub fn validate_category(category: Option<&str>) -> Option<String> {
    let category = match category {
        Some(value) if !value.is_empty() => value,
        _ => return Some("Missing category. Provide via --category.".to_string()),
    };

    if Category::from_keyword(category).is_none() {
        return Some(format!(
            "Invalid category \"{}\". Allowed: {}.",
            category,
            Category::allowed_keywords()
        ));
    }

    None
}

/// Validate subject text. Length is measured in characters, untrimmed.
pub fn validate_message(message: Option<&str>, config: &Configuration) -> Option<String> {
    let message = match message {
        Some(value) if !value.trim().is_empty() => value,
        _ => return Some("Missing commit message subject. Provide via --message.".to_string()),
    };

    let max_length = config.subject.max_length;
    if message.chars().count() > max_length {
        return Some(format!("Subject line should be <= {} characters.", max_length));
    }

    if message.contains(['\n', '\r', '\u{2028}', '\u{2029}']) {
        return Some("Subject must be a single line.".to_string());
    }

    None
}

pub fn validate_description(description: Option<&str>, config: &Configuration) -> Option<String> {
    let blank = description.map_or(true, |d| d.trim().is_empty());

    if config.description.required && blank {
        return Some("Description is required. Provide via --description.".to_string());
    }

    match description {
        Some(_) if blank => {
            Some("Description must include non-whitespace characters or be omitted.".to_string())
        }
        _ => None,
    }
}

/// Run every applicable validator and collect all problems, in field order.
pub fn validate_inputs(input: &CommitInput, config: &Configuration) -> Vec<String> {
    let mut problems = Vec::new();

    if config.jira.enabled {
        problems.extend(validate_jira(input.jira(), config));
    }

    problems.extend(validate_category(input.category()));
    problems.extend(validate_message(input.message(), config));
    problems.extend(validate_description(input.description(), config));

    problems
}

/// Fail with every problem at once if any validator rejects the input.
pub fn ensure_valid_inputs(input: &CommitInput, config: &Configuration) -> ForgeResult<()> {
    let problems = validate_inputs(input, config);
    if !problems.is_empty() {
        return Err(ForgeError::InvalidInput(problems));
    }
    Ok(())
}
