//! CLI command definitions.
//!
//! Each subcommand maps to one path through the grammar engine: `generate`
//! renders structured input, `lint` checks text, `commit` renders and hands
//! the result to git.

use clap::{Args, Parser, Subcommand};
use forge_grammar::RawCommitInput;

pub mod categories;
pub mod commit;
pub mod generate;
pub mod lint;

/// commit-forge - generate, lint, or create commits with enforced formatting
#[derive(Parser)]
#[command(name = "commit-forge")]
#[command(version, about = "Generate, lint, or create commits with enforced formatting")]
#[command(long_about = r#"
commit-forge enforces a structured commit subject line:

  [TB-123] ✨ feat: add feature

The JIRA segment and the category glyph are controlled by a config file
(.commit-forge.json, .commit-forge.yaml, .commit-forge.toml, ...) found in the
working directory or up to three parent directories.

COMMANDS:
  generate    → Format and print a commit message
  lint        → Validate a commit message file or stdin input
  commit      → Prompt for missing details, ensure staged files, run git commit
  categories  → List allowed categories and the active subject format

EXIT CODES:
  0 - Success
  1 - Validation or lint failure
  2 - Invalid input or I/O error
  3 - Git failure
"#)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Evaluate .js/.ts config files with node in a child process
    #[arg(long, global = true, env = "COMMIT_FORGE_ALLOW_SCRIPT_CONFIG")]
    pub allow_script_config: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Format and print a commit message
    Generate(generate::GenerateArgs),

    /// Validate a commit message file or stdin input
    Lint(lint::LintArgs),

    /// Prompt for missing details, ensure staged files, and run git commit
    Commit(commit::CommitArgs),

    /// List allowed categories and the active subject format
    Categories(categories::CategoriesArgs),
}

/// Commit fields shared by `generate` and `commit`.
#[derive(Args, Debug, Default)]
pub struct InputArgs {
    /// JIRA issue id (e.g., TB-123)
    #[arg(short, long, visible_alias = "jira-id")]
    pub jira: Option<String>,

    /// Category keyword
    #[arg(short, long, visible_alias = "cat")]
    pub category: Option<String>,

    /// Short subject line
    #[arg(short, long, visible_alias = "msg")]
    pub message: Option<String>,

    /// Longer description (\n for newlines)
    #[arg(short, long, visible_alias = "desc")]
    pub description: Option<String>,
}

impl From<InputArgs> for RawCommitInput {
    fn from(args: InputArgs) -> Self {
        Self {
            jira: args.jira,
            category: args.category,
            message: args.message,
            description: args.description,
        }
    }
}
