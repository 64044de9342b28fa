//! Lint command - validate a commit message file or piped input.

use std::fs;
use std::io::{self, IsTerminal, Read};
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::Args;
use forge_config::Configuration;
use forge_grammar::{lint, LintReport};
use tracing::debug;

use crate::ExitCodes;

#[derive(Args)]
pub struct LintArgs {
    /// Commit message file (reads piped stdin when omitted)
    #[arg(value_name = "FILE")]
    pub path: Option<PathBuf>,

    /// Commit message file, as a flag
    #[arg(short, long = "file", value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Output the lint report as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn execute(args: LintArgs, config: &Configuration) -> Result<()> {
    let text = match args.file.as_deref().or(args.path.as_deref()) {
        Some(path) => read_commit_file(path)?,
        None => read_piped_stdin()?,
    };

    let report = lint(&text, config);
    debug!("Lint report: {:?}", report);

    print_report(&report, args.json)?;

    if !report.ok {
        std::process::exit(i32::from(ExitCodes::VALIDATION_FAILURE));
    }

    Ok(())
}

fn read_commit_file(path: &Path) -> Result<String> {
    if !path.exists() {
        bail!("Commit message file not found: {}", path.display());
    }
    fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

fn read_piped_stdin() -> Result<String> {
    let mut stdin = io::stdin();
    if stdin.is_terminal() {
        bail!("No commit message input provided. Pass a file path or pipe content via stdin.");
    }

    let mut text = String::new();
    stdin.read_to_string(&mut text).context("Failed to read stdin")?;
    Ok(text)
}

fn print_report(report: &LintReport, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string(report)?);
    } else if report.ok {
        println!("✅ {}", report.report());
    } else {
        eprintln!("❌ {}", report.report());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_read_commit_file() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("COMMIT_EDITMSG");
        fs::write(&path, "[TB-1] fix: crash\n").unwrap();

        let text = read_commit_file(&path).unwrap();
        assert!(lint(&text, &Configuration::default()).ok);
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let temp = tempdir().unwrap();
        let err = read_commit_file(&temp.path().join("nope")).unwrap_err();
        assert!(err.to_string().contains("Commit message file not found"));
    }
}
