//! The fixed catalogue of change categories.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ForgeError;

/// A change-type label allowed in the subject line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Feat,
    Fix,
    Docs,
    Style,
    Refactor,
    Perf,
    Test,
    Chore,
}

impl Category {
    /// Every category, in display order.
    pub const ALL: [Category; 8] = [
        Category::Feat,
        Category::Fix,
        Category::Docs,
        Category::Style,
        Category::Refactor,
        Category::Perf,
        Category::Test,
        Category::Chore,
    ];

    pub fn keyword(&self) -> &'static str {
        match self {
            Category::Feat => "feat",
            Category::Fix => "fix",
            Category::Docs => "docs",
            Category::Style => "style",
            Category::Refactor => "refactor",
            Category::Perf => "perf",
            Category::Test => "test",
            Category::Chore => "chore",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Category::Feat => "New feature",
            Category::Fix => "Bug fix",
            Category::Docs => "Documentation change",
            Category::Style => "Code style / formatting",
            Category::Refactor => "Refactoring",
            Category::Perf => "Performance improvement",
            Category::Test => "Tests",
            Category::Chore => "Chores & maintenance",
        }
    }

    /// Display glyph rendered before the keyword when emoji are enabled.
    pub fn icon(&self) -> &'static str {
        match self {
            Category::Feat => "✨",
            Category::Fix => "🐛",
            Category::Docs => "📝",
            Category::Style => "🎨",
            Category::Refactor => "♻️",
            Category::Perf => "⚡",
            Category::Test => "✅",
            Category::Chore => "🧹",
        }
    }

    /// Exact, case-sensitive keyword lookup.
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.keyword() == keyword)
    }

    /// Comma-separated list of every keyword, for problem messages.
    pub fn allowed_keywords() -> String {
        Self::ALL
            .iter()
            .map(|c| c.keyword())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

impl FromStr for Category {
    type Err = ForgeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_keyword(s).ok_or_else(|| ForgeError::UnknownCategory(s.to_string()))
    }
}
