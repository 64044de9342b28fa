//! Error types for the grammar module.

use thiserror::Error;

/// Result type alias for grammar operations.
pub type ForgeResult<T> = Result<T, ForgeError>;

/// Errors that can occur while building or validating commit messages.
#[derive(Error, Debug)]
pub enum ForgeError {
    /// One or more fields failed validation. Holds every problem found.
    #[error("{}", .0.join("\n"))]
    InvalidInput(Vec<String>),

    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    #[error("Input cancelled: {0}")]
    Cancelled(String),

    #[error("Interactive prompts require a TTY. Provide all fields via flags instead.")]
    NotInteractive,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
