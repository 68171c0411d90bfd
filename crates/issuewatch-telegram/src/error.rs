//! Error types for the Telegram bot.

use issuewatch_github::FetchError;
use issuewatch_runtime::RuntimeError;
use thiserror::Error;

/// Errors that can occur in the Telegram bot.
#[derive(Debug, Error)]
pub enum BotError {
    /// A required setting is missing or invalid.
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Failed to start the bot.
    #[error("Failed to start bot: {0}")]
    BotStartFailed(String),

    /// The GitHub client could not be created.
    #[error("GitHub client error: {0}")]
    Github(#[from] FetchError),

    /// Notifier or listing error.
    #[error("Runtime error: {0}")]
    Runtime(#[from] RuntimeError),
}

/// Result type for bot operations.
pub type Result<T> = std::result::Result<T, BotError>;
