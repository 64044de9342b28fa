//! Git plumbing for the commit command.

use std::path::{Path, PathBuf};
use std::process::Command;

use thiserror::Error;
use tracing::{debug, info};

/// Errors from invoking git.
#[derive(Error, Debug)]
pub enum GitError {
    #[error("Unable to read staged files. Is this a Git repository? ({0})")]
    StatusFailed(String),

    #[error("No staged files detected. Stage files before running this command.")]
    NothingStaged,

    #[error("git commit failed: {0}")]
    CommitFailed(String),

    #[error("Failed to run git: {0}")]
    Io(#[from] std::io::Error),
}

/// Git operations for one repository.
#[derive(Debug)]
pub struct GitOps {
    repo_path: PathBuf,
}

impl GitOps {
    pub fn new<P: AsRef<Path>>(repo_path: P) -> Self {
        Self {
            repo_path: repo_path.as_ref().to_path_buf(),
        }
    }

    /// List staged files, failing if there are none.
    pub fn staged_files(&self) -> Result<Vec<String>, GitError> {
        let output = Command::new("git")
            .args(["diff", "--cached", "--name-only"])
            .current_dir(&self.repo_path)
            .output()?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(GitError::StatusFailed(stderr.trim().to_string()));
        }

        let files = parse_name_only(&String::from_utf8_lossy(&output.stdout));
        if files.is_empty() {
            return Err(GitError::NothingStaged);
        }

        debug!("Staged files: {:?}", files);
        Ok(files)
    }

    /// Run `git commit`, inheriting the terminal so hooks and editors work.
    pub fn commit(&self, subject: &str, description: Option<&str>) -> Result<(), GitError> {
        info!("Running git commit in {}", self.repo_path.display());

        let status = Command::new("git")
            .args(commit_args(subject, description))
            .current_dir(&self.repo_path)
            .status()?;

        if !status.success() {
            return Err(GitError::CommitFailed(status.to_string()));
        }

        Ok(())
    }
}

fn parse_name_only(stdout: &str) -> Vec<String> {
    stdout
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Arguments for `git commit`: the subject, then the description as a second
/// paragraph when it has content.
pub fn commit_args(subject: &str, description: Option<&str>) -> Vec<String> {
    let mut args = vec!["commit".to_string(), "-m".to_string(), subject.to_string()];

    if let Some(description) = description.map(str::trim).filter(|d| !d.is_empty()) {
        args.push("-m".to_string());
        args.push(description.to_string());
    }

    args
}
