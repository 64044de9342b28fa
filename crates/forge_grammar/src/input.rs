//! Structured commit input, before and after normalization.

use serde::{Deserialize, Serialize};

/// Commit fields as supplied by flags, prompts, or an API caller.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawCommitInput {
    pub jira: Option<String>,
    pub category: Option<String>,
    pub message: Option<String>,
    pub description: Option<String>,
}

impl RawCommitInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn jira(mut self, jira: impl Into<String>) -> Self {
        self.jira = Some(jira.into());
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Canonical commit fields produced by [`crate::normalize`].
///
/// `None` means the field was never supplied; `Some("")` means it was supplied
/// blank. Validators treat both as missing, but the distinction is kept.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitInput {
    pub jira: Option<String>,
    pub category: Option<String>,
    pub message: Option<String>,
    pub description: Option<String>,
}

impl CommitInput {
    pub fn jira(&self) -> Option<&str> {
        self.jira.as_deref()
    }

    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

impl From<CommitInput> for RawCommitInput {
    fn from(input: CommitInput) -> Self {
        Self {
            jira: input.jira,
            category: input.category,
            message: input.message,
            description: input.description,
        }
    }
}
