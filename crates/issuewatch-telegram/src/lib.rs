//! Telegram bot that announces new GitHub issues.
//!
//! The bot watches one repository. A chat that sends `/start` gets a
//! background notifier which, every polling window, fetches the issue list
//! and sends each open issue created within that window. `/issues` lists
//! every open issue once.
//!
//! # Example
//!
//! ```no_run
//! use clap::Parser;
//! use issuewatch_telegram::{BotConfig, CliArgs, IssueBot};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = BotConfig::from_args(&CliArgs::parse())?;
//!     let bot = IssueBot::new(config)?;
//!     bot.run().await?;
//!     Ok(())
//! }
//! ```
//!
//! # Commands
//!
//! - `/start` - Welcome message, start new-issue notifications
//! - `/issues` - List all open issues
//! - `/stop` - Stop notifications for this chat
//! - `/status` - Show whether notifications are on
//! - `/help` - Show available commands

pub mod bot;
pub mod config;
pub mod error;
pub mod handlers;
pub mod sink;
pub mod state;

pub use bot::IssueBot;
pub use config::{BotConfig, CliArgs};
pub use error::{BotError, Result};
pub use sink::TelegramSink;
pub use state::{create_shared_state, BotState};
