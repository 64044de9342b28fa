//! Integration tests for the lint/format pair.

use forge_config::Configuration;
use forge_grammar::{
    build_message, build_subject, lint, normalize, validate_inputs, Category, CommitInput,
    RawCommitInput,
};

/// Every jira × emoji × required combination.
fn all_configs() -> Vec<Configuration> {
    let mut configs = Vec::new();
    for jira_enabled in [true, false] {
        for jira_required in [true, false] {
            for emoji in [true, false] {
                configs.push(
                    Configuration::default()
                        .with_jira(jira_enabled, jira_required, true)
                        .with_emoji(emoji),
                );
            }
        }
    }
    configs
}

/// Generated messages lint clean and re-extract the same fields.
#[test]
fn test_generate_then_lint_round_trip() {
    let jiras = [Some("TB-123"), Some("NO-JIRA"), None];
    let descriptions = [None, Some("why it changed\\nand how")];

    for config in all_configs() {
        for category in Category::ALL {
            for jira in jiras {
                for description in descriptions {
                    let mut raw = RawCommitInput::new()
                        .category(category.keyword())
                        .message("keep: colons and  spaces");
                    raw.jira = jira.map(str::to_string);
                    raw.description = description.map(str::to_string);

                    let input = normalize(raw, &config);
                    if !validate_inputs(&input, &config).is_empty() {
                        continue;
                    }

                    let message = build_message(&input, &config).unwrap();
                    let report = lint(&message, &config);

                    assert!(report.ok, "{:?} -> {:?}", message, report.problems);
                    assert_eq!(report.category.as_deref(), Some(category.keyword()));
                    assert_eq!(report.subject.as_deref(), input.message());
                    assert_eq!(report.body.as_deref(), input.description());
                    if config.jira.enabled && input.jira().is_some() {
                        assert_eq!(report.jira.as_deref(), input.jira());
                    }
                    if !config.jira.enabled {
                        assert_eq!(report.jira, None);
                    }
                }
            }
        }
    }
}

#[test]
fn test_scenario_build_subject_from_loose_input() {
    let config = Configuration::default();
    let input = normalize(
        RawCommitInput::new().jira("tb-123").category("FEAT").message(" add login "),
        &config,
    );
    assert_eq!(build_subject(&input, &config).unwrap(), "[TB-123] ✨ feat: add login");
}

#[test]
fn test_scenario_lint_default_subject() {
    let report = lint("[TB-123] ✨ feat: add login\n", &Configuration::default());
    assert!(report.ok);
    assert_eq!(report.jira.as_deref(), Some("TB-123"));
    assert_eq!(report.category.as_deref(), Some("feat"));
    assert_eq!(report.subject.as_deref(), Some("add login"));
}

#[test]
fn test_scenario_missing_colon() {
    let report = lint("feat add login", &Configuration::default());
    assert!(!report.ok);
    assert_eq!(
        report.problems,
        vec!["First line must look like \"[TB-123] ✨ feat: summary\".".to_string()]
    );
}

#[test]
fn test_scenario_overlong_subject() {
    let subject = "x".repeat(80);
    let report = lint(&format!("[TB-123] feat: {}", subject), &Configuration::default());
    assert!(!report.ok);
    assert_eq!(
        report.problems,
        vec!["Subject line should be <= 72 characters.".to_string()]
    );

    let both = lint(&format!("[TB-123] feet: {}", subject), &Configuration::default());
    assert_eq!(both.problems.len(), 2);
    assert_eq!(both.category.as_deref(), Some("feet"));
}

#[test]
fn test_scenario_jira_disabled() {
    let config = Configuration::default().with_jira(false, false, false);
    let report = lint("feat: add login\n", &config);
    assert!(report.ok);
    assert_eq!(report.jira, None);
    assert_eq!(report.category.as_deref(), Some("feat"));
}

#[test]
fn test_jira_gating_in_both_directions() {
    let config = Configuration::default().with_jira(false, true, true);
    let input = normalize(
        RawCommitInput::new().jira("TB-5").category("fix").message("crash"),
        &config,
    );
    let subject = build_subject(&input, &config).unwrap();
    assert!(!subject.contains('['));

    assert!(lint("🐛 fix: crash", &config).ok);
    assert!(!lint("[TB-5] 🐛 fix: crash", &config).ok);
}

/// A malformed bracket with optional JIRA gets the generic format error.
#[test]
fn test_optional_jira_malformed_bracket_is_generic() {
    let config = Configuration::default().with_jira(true, false, true);
    let report = lint("[tb-5] fix: crash", &config);
    assert_eq!(
        report.problems,
        vec!["First line must look like \"[TB-123] ✨ feat: summary\".".to_string()]
    );
    assert_eq!(report.jira, None);
    assert_eq!(report.category, None);
}

#[test]
fn test_required_jira_rejects_plain_line() {
    let report = lint("feat: add login", &Configuration::default());
    assert_eq!(report.problems.len(), 1);
    assert!(report.problems[0].starts_with("First line must look like"));
}

#[test]
fn test_missing_blank_line_still_captures_body() {
    let report = lint("[TB-1] docs: readme\nsecond\nthird", &Configuration::default());
    assert!(!report.ok);
    assert_eq!(
        report.problems,
        vec![
            "Include a blank line between subject and body when providing a description."
                .to_string()
        ]
    );
    assert_eq!(report.body.as_deref(), Some("second\nthird"));
}

#[test]
fn test_report_serializes_every_key() {
    let report = lint("feat: x", &Configuration::default().with_jira(false, false, false));
    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["ok"], serde_json::Value::Bool(true));
    assert!(json["jira"].is_null());
    assert_eq!(json["category"], "feat");
    assert!(json.get("body").is_some());
}

#[test]
fn test_commit_input_defaults_are_absent() {
    let input = CommitInput::default();
    assert_eq!(input.jira(), None);
    assert_eq!(input.description(), None);
}
