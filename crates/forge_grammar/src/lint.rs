//! Lint engine: validates commit message text against the subject grammar.

use forge_config::Configuration;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::parser::{parse_subject_line, PatternFamily, SubjectParse};
use crate::validators::{validate_category, validate_jira, validate_message};

/// Result of linting one commit message.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LintReport {
    pub ok: bool,
    /// Problems in the order the checks ran.
    pub problems: Vec<String>,
    pub jira: Option<String>,
    pub category: Option<String>,
    pub subject: Option<String>,
    /// Best-effort body text. Still captured when the blank-line check fails,
    /// so it is not trustworthy when `ok` is false.
    pub body: Option<String>,
}

impl LintReport {
    fn rejected(problem: impl Into<String>) -> Self {
        Self {
            ok: false,
            problems: vec![problem.into()],
            ..Self::default()
        }
    }

    pub fn add_problem(&mut self, problem: impl Into<String>) {
        self.ok = false;
        self.problems.push(problem.into());
    }

    /// Human-readable summary, one problem per line.
    pub fn report(&self) -> String {
        if self.ok {
            return "Commit message looks good.".to_string();
        }
        let details = self
            .problems
            .iter()
            .map(|p| format!("  - {}", p))
            .collect::<Vec<_>>()
            .join("\n");
        format!("Commit message failed checks:\n{}", details)
    }
}

/// Example subject line for the active configuration, quoted.
pub fn format_example(config: &Configuration) -> &'static str {
    match (config.jira.enabled, config.emoji.enabled) {
        (true, true) => "\"[TB-123] ✨ feat: summary\"",
        (true, false) => "\"[TB-123] feat: summary\"",
        (false, true) => "\"✨ feat: summary\"",
        (false, false) => "\"feat: summary\"",
    }
}

/// Lint `text` under `config`.
///
/// A first line that does not match the configured shape is the only problem
/// reported. Otherwise the JIRA, category, subject, and blank-line checks all
/// run and each contributes its own problem.
pub fn lint(text: &str, config: &Configuration) -> LintReport {
    let normalized = text.replace("\r\n", "\n");
    let lines: Vec<&str> = normalized.split('\n').collect();

    let first_line = lines.first().copied().unwrap_or_default();
    if first_line.trim().is_empty() {
        return LintReport::rejected("Commit message is empty.");
    }

    let family = PatternFamily::for_config(config);
    debug!("Linting subject line with {:?}", family);

    let parts = match parse_subject_line(first_line, family) {
        SubjectParse::Matched(parts) => parts,
        SubjectParse::NoMatch => {
            return LintReport::rejected(format!(
                "First line must look like {}.",
                format_example(config)
            ));
        }
    };

    let category = parts.category();
    let mut report = LintReport {
        ok: true,
        jira: parts.jira.map(str::to_string),
        category: Some(category.to_string()),
        subject: Some(parts.subject.to_string()),
        ..LintReport::default()
    };

    if config.jira.enabled {
        match parts.jira {
            Some(jira) => {
                if let Some(problem) = validate_jira(Some(jira), config) {
                    report.add_problem(problem);
                }
            }
            None if config.jira.required => report.add_problem("JIRA id is required but missing."),
            None => {}
        }
    }

    if let Some(problem) = validate_category(Some(category)) {
        report.add_problem(problem);
    }

    if let Some(problem) = validate_message(Some(parts.subject), config) {
        report.add_problem(problem);
    }

    let body = match lines.get(1) {
        None => String::new(),
        Some(second) if !second.trim().is_empty() => {
            report.add_problem(
                "Include a blank line between subject and body when providing a description.",
            );
            lines[1..].join("\n").trim().to_string()
        }
        Some(_) => lines[2..].join("\n").trim().to_string(),
    };
    report.body = Some(body).filter(|b| !b.is_empty());

    report
}
