//! Structural scanner for the subject line.
//!
//! Two line shapes are recognised:
//!
//! ```text
//! [<KEY>] <category part>: <subject>      bracketed
//! <category part>: <subject>              plain
//! ```
//!
//! `<KEY>` is `NO-JIRA` or `ABC-123`. The category part is any non-empty run
//! without a colon; it may carry a leading glyph. The subject is everything
//! after the first `": "` and must be non-empty. A plain line never starts
//! with `[`, so a malformed bracket cannot slip through as a category part.
//! A line holding a stray line terminator (`\r`, U+2028, U+2029) matches
//! neither shape.

use forge_config::Configuration;

use crate::validators::{is_issue_key, NO_JIRA};

/// Fields captured from a structurally valid subject line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubjectParts<'a> {
    pub jira: Option<&'a str>,
    pub category_part: &'a str,
    pub subject: &'a str,
}

impl<'a> SubjectParts<'a> {
    /// The category keyword: the last whitespace-separated token of the
    /// category part, with any display glyph before it discarded. Empty when
    /// the category part is all whitespace.
    pub fn category(&self) -> &'a str {
        self.category_part.split_whitespace().next_back().unwrap_or("")
    }
}

/// Outcome of scanning a subject line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubjectParse<'a> {
    Matched(SubjectParts<'a>),
    NoMatch,
}

/// Which line shapes to try, derived from the configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternFamily {
    /// JIRA disabled: plain shape only.
    PlainOnly,
    /// JIRA required: bracketed shape only.
    BracketedOnly,
    /// JIRA optional: bracketed shape, falling back to plain.
    BracketedThenPlain,
}

impl PatternFamily {
    pub fn for_config(config: &Configuration) -> Self {
        match (config.jira.enabled, config.jira.required) {
            (false, _) => PatternFamily::PlainOnly,
            (true, true) => PatternFamily::BracketedOnly,
            (true, false) => PatternFamily::BracketedThenPlain,
        }
    }
}

const LINE_TERMINATORS: [char; 3] = ['\r', '\u{2028}', '\u{2029}'];

/// Scan `line` with the shapes `family` allows.
pub fn parse_subject_line(line: &str, family: PatternFamily) -> SubjectParse<'_> {
    if line.contains(LINE_TERMINATORS) {
        return SubjectParse::NoMatch;
    }

    let parsed = match family {
        PatternFamily::PlainOnly => scan_plain(line),
        PatternFamily::BracketedOnly => scan_bracketed(line),
        PatternFamily::BracketedThenPlain => scan_bracketed(line).or_else(|| scan_plain(line)),
    };

    match parsed {
        Some(parts) => SubjectParse::Matched(parts),
        None => SubjectParse::NoMatch,
    }
}

fn is_jira_token(token: &str) -> bool {
    token == NO_JIRA || is_issue_key(token)
}

fn scan_bracketed(line: &str) -> Option<SubjectParts<'_>> {
    let inner = line.strip_prefix('[')?;
    let close = inner.find(']')?;
    let token = &inner[..close];
    if !is_jira_token(token) {
        return None;
    }

    let rest = inner[close + 1..].strip_prefix(' ')?;
    let (category_part, subject) = scan_category_and_subject(rest)?;
    Some(SubjectParts {
        jira: Some(token),
        category_part,
        subject,
    })
}

fn scan_plain(line: &str) -> Option<SubjectParts<'_>> {
    if line.starts_with('[') {
        return None;
    }

    let (category_part, subject) = scan_category_and_subject(line)?;
    Some(SubjectParts {
        jira: None,
        category_part,
        subject,
    })
}

/// Split at the first colon, which must be followed by a space and a
/// non-empty subject.
fn scan_category_and_subject(text: &str) -> Option<(&str, &str)> {
    let colon = text.find(':')?;
    let category_part = &text[..colon];
    if category_part.is_empty() {
        return None;
    }

    let subject = text[colon + 1..].strip_prefix(' ')?;
    if subject.is_empty() {
        return None;
    }

    Some((category_part, subject))
}
