//! Intake flow for the commit command.
//!
//! Fields missing from the initial input are requested from a [`Prompter`];
//! whatever it returns is normalized again before full validation.

use forge_config::Configuration;
use tracing::debug;

use crate::error::ForgeResult;
use crate::input::{CommitInput, RawCommitInput};
use crate::normalizer::{gather_from_partial_input, needs_more_input, normalize, GatherOptions};
use crate::validators::ensure_valid_inputs;

/// Source of answers for fields the user did not supply up front.
#[cfg_attr(test, mockall::automock)]
pub trait Prompter {
    /// Return `partial` with its missing fields filled in.
    fn prompt_missing(
        &mut self,
        partial: &CommitInput,
        config: &Configuration,
    ) -> ForgeResult<RawCommitInput>;
}

/// Produce fully valid input for a commit, prompting only if needed.
pub fn resolve_for_commit(
    raw: RawCommitInput,
    config: &Configuration,
    prompter: &mut dyn Prompter,
) -> ForgeResult<CommitInput> {
    let partial = gather_from_partial_input(raw, config, GatherOptions { require_all: false })?;

    if !needs_more_input(&partial, config) {
        ensure_valid_inputs(&partial, config)?;
        return Ok(partial);
    }

    debug!("Prompting for missing commit fields");
    let answered = prompter.prompt_missing(&partial, config)?;
    let normalized = normalize(answered, config);
    ensure_valid_inputs(&normalized, config)?;
    Ok(normalized)
}
