//! Rendering commit input back into message text.
//!
//! Output is always accepted by [`crate::lint`] under the same configuration
//! when the input itself passes validation.

use forge_config::Configuration;

use crate::category::Category;
use crate::error::{ForgeError, ForgeResult};
use crate::input::CommitInput;
use crate::validators::NO_JIRA;

/// Render a category as `"<glyph> <keyword>"`, or the bare keyword when emoji
/// are disabled or the keyword is unknown.
pub fn format_category(category: &str, config: &Configuration) -> String {
    match Category::from_keyword(category) {
        Some(known) if config.emoji.enabled => format!("{} {}", known.icon(), category),
        _ => category.to_string(),
    }
}

/// Build the subject line.
pub fn build_subject(input: &CommitInput, config: &Configuration) -> ForgeResult<String> {
    let category = input.category().ok_or(ForgeError::MissingField("category"))?;
    let message = input.message().ok_or(ForgeError::MissingField("message"))?;

    let head = format!("{}: {}", format_category(category, config), message.trim());

    let jira = input.jira().filter(|j| !j.is_empty());
    if !config.jira.enabled || (jira.is_none() && !config.jira.required) {
        return Ok(head);
    }

    Ok(format!("[{}] {}", jira.unwrap_or(NO_JIRA), head))
}

/// Build the full message: subject, then a blank line and the description if
/// one is present. Always ends with a newline.
pub fn build_message(input: &CommitInput, config: &Configuration) -> ForgeResult<String> {
    let subject = build_subject(input, config)?;

    match input.description().map(str::trim).filter(|d| !d.is_empty()) {
        Some(description) => Ok(format!("{}\n\n{}\n", subject, description)),
        None => Ok(format!("{}\n", subject)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(jira: Option<&str>, category: &str, message: &str) -> CommitInput {
        CommitInput {
            jira: jira.map(str::to_string),
            category: Some(category.to_string()),
            message: Some(message.to_string()),
            description: None,
        }
    }

    #[test]
    fn test_format_category() {
        let config = Configuration::default();
        assert_eq!(format_category("fix", &config), "🐛 fix");
        assert_eq!(format_category("unknown", &config), "unknown");
        assert_eq!(format_category("fix", &config.with_emoji(false)), "fix");
    }

    #[test]
    fn test_subject_with_jira() {
        let commit = input(Some("TB-123"), "feat", "add login");
        let subject = build_subject(&commit, &Configuration::default()).unwrap();
        assert_eq!(subject, "[TB-123] ✨ feat: add login");
    }

    #[test]
    fn test_required_jira_defaults_to_sentinel() {
        let commit = input(None, "chore", "bump deps");
        let subject = build_subject(&commit, &Configuration::default()).unwrap();
        assert_eq!(subject, "[NO-JIRA] 🧹 chore: bump deps");
    }

    #[test]
    fn test_optional_absent_jira_omits_bracket() {
        let config = Configuration::default().with_jira(true, false, true).with_emoji(false);
        let subject = build_subject(&input(None, "docs", "readme"), &config).unwrap();
        assert_eq!(subject, "docs: readme");
    }

    #[test]
    fn test_disabled_jira_never_bracketed() {
        let config = Configuration::default().with_jira(false, true, true);
        let subject = build_subject(&input(Some("TB-9"), "perf", "cache"), &config).unwrap();
        assert_eq!(subject, "⚡ perf: cache");
    }

    #[test]
    fn test_message_with_and_without_description() {
        let config = Configuration::default();
        let mut commit = input(Some("TB-1"), "fix", "crash");
        assert_eq!(build_message(&commit, &config).unwrap(), "[TB-1] 🐛 fix: crash\n");

        commit.description = Some("  root cause\nfixed  ".to_string());
        assert_eq!(
            build_message(&commit, &config).unwrap(),
            "[TB-1] 🐛 fix: crash\n\nroot cause\nfixed\n"
        );
    }

    #[test]
    fn test_missing_fields_are_errors() {
        let err = build_subject(&CommitInput::default(), &Configuration::default()).unwrap_err();
        assert!(matches!(err, ForgeError::MissingField("category")));
    }
}
