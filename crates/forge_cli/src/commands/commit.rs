//! Commit command - fill in missing fields and run git commit.

use anyhow::Result;
use clap::Args;
use forge_config::Configuration;
use forge_grammar::{build_subject, resolve_for_commit};
use tracing::info;

use super::InputArgs;
use crate::git::GitOps;
use crate::prompts::LinePrompter;

#[derive(Args)]
pub struct CommitArgs {
    #[command(flatten)]
    pub input: InputArgs,
}

pub fn execute(args: CommitArgs, config: &Configuration) -> Result<()> {
    let git = GitOps::new(std::env::current_dir()?);

    let staged = git.staged_files()?;
    println!("Staged files:");
    for file in &staged {
        println!("  - {}", file);
    }

    let mut prompter = LinePrompter::stdio();
    let input = resolve_for_commit(args.input.into(), config, &mut prompter)?;
    let subject = build_subject(&input, config)?;

    println!("Commit title:\n  {}", subject);
    info!("Committing {} staged file(s)", staged.len());
    git.commit(&subject, input.description())?;

    println!("✅ Commit created successfully.");
    Ok(())
}
