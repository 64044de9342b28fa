//! Generate command - render a commit message from flags.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use forge_config::Configuration;
use forge_grammar::{build_message, gather_from_partial_input, GatherOptions};
use tracing::info;

use super::InputArgs;

#[derive(Args)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// File path to write the generated message to
    #[arg(short, long, visible_alias = "out")]
    pub output: Option<PathBuf>,
}

pub fn execute(args: GenerateArgs, config: &Configuration) -> Result<()> {
    let options = GatherOptions { require_all: true };
    let input = gather_from_partial_input(args.input.into(), config, options)?;
    let message = build_message(&input, config)?;

    match args.output {
        Some(path) => {
            fs::write(&path, &message)
                .with_context(|| format!("Failed to write commit message to {}", path.display()))?;
            info!("Wrote commit message to {}", path.display());
            eprintln!("✅ Wrote commit message to {}", path.display());
        }
        None => print!("{}", message),
    }

    Ok(())
}
