//! Error types for the runtime crate.

use issuewatch_github::FetchError;
use thiserror::Error;

/// Errors that can occur in the runtime.
#[derive(Debug, Error)]
pub enum RuntimeError {
    /// Fetching the issue list failed.
    #[error("fetch error: {0}")]
    Fetch(#[from] FetchError),

    /// Unrecognised fetch-failure policy name.
    #[error("unknown fetch failure policy: {0} (expected 'skip' or 'stop')")]
    InvalidPolicy(String),

    /// The polling window was zero.
    #[error("polling window must be greater than zero")]
    ZeroWindow,

    /// The notifier task panicked or was aborted.
    #[error("notifier task failed: {0}")]
    Join(String),
}

/// Result type for runtime operations.
pub type Result<T> = std::result::Result<T, RuntimeError>;
