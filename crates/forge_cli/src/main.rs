//! commit-forge CLI - Main entry point.
//!
//! Exit codes:
//! - 0: Success
//! - 1: Validation or lint failure
//! - 2: Invalid input or I/O error
//! - 3: Git failure

use std::process::ExitCode;

use clap::Parser;
use forge_config::ConfigResolver;
use forge_grammar::ForgeError;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod commands;
mod git;
mod prompts;

use commands::{Cli, Commands};
use git::GitError;

/// CI-friendly exit codes
pub struct ExitCodes;

impl ExitCodes {
    pub const SUCCESS: u8 = 0;
    pub const VALIDATION_FAILURE: u8 = 1;
    pub const INVALID_INPUT: u8 = 2;
    pub const GIT_ERROR: u8 = 3;
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = ConfigResolver::from_current_dir()
        .map_err(anyhow::Error::from)
        .and_then(|resolver| {
            let mut resolver = resolver.allow_script_configs(cli.allow_script_config);
            let config = resolver.resolve();

            match cli.command {
                Commands::Generate(args) => commands::generate::execute(args, &config),
                Commands::Lint(args) => commands::lint::execute(args, &config),
                Commands::Commit(args) => commands::commit::execute(args, &config),
                Commands::Categories(args) => commands::categories::execute(args, &config),
            }
        });

    match result {
        Ok(()) => ExitCode::from(ExitCodes::SUCCESS),
        Err(e) => {
            eprintln!("❌ {:#}", e);
            ExitCode::from(categorize_error(&e))
        }
    }
}

/// Logs go to stderr so generated messages on stdout stay clean.
fn init_logging(verbose: bool) {
    let default_directives = if verbose { "forge=debug,warn" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives));

    let log_result = tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .try_init();

    if log_result.is_err() {
        // Logging already initialized, continue
    }
}

/// Categorize error to determine exit code
fn categorize_error(e: &anyhow::Error) -> u8 {
    if let Some(forge) = e.downcast_ref::<ForgeError>() {
        return match forge {
            ForgeError::InvalidInput(_) => ExitCodes::VALIDATION_FAILURE,
            _ => ExitCodes::INVALID_INPUT,
        };
    }

    if e.downcast_ref::<GitError>().is_some() {
        return ExitCodes::GIT_ERROR;
    }

    ExitCodes::INVALID_INPUT
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_categorize_error() {
        let invalid =
            anyhow::Error::from(ForgeError::InvalidInput(vec!["Missing category.".into()]));
        assert_eq!(categorize_error(&invalid), ExitCodes::VALIDATION_FAILURE);

        let git = anyhow::Error::from(GitError::NothingStaged);
        assert_eq!(categorize_error(&git), ExitCodes::GIT_ERROR);

        let other = anyhow::anyhow!("Commit message file not found: x");
        assert_eq!(categorize_error(&other), ExitCodes::INVALID_INPUT);
    }
}
